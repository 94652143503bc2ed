// Copyright (C) 2024-present The Routewire Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//    http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or
// implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Deserializer for BGP Open message

use crate::{
    iana::{BgpOpenMessageParameterType, UndefinedBgpOpenMessageParameterType},
    open::{BgpOpenMessage, BgpOpenMessageParameter, BGP_VERSION},
    wire::deserializer::capabilities::BgpCapabilityParsingError,
};
use nom::{
    error::ErrorKind,
    number::complete::{be_u16, be_u32, be_u8},
    IResult,
};
use routewire_parse_utils::{parse_till_empty_into_located, ReadablePdu, Span};
use routewire_serde_macros::LocatedError;
use std::net::Ipv4Addr;

/// BGP Open Message Parsing errors
#[derive(LocatedError, Eq, PartialEq, Clone, Debug)]
pub enum BgpOpenMessageParsingError {
    /// Errors triggered by the nom parser, see [ErrorKind] for
    /// additional information.
    NomError(#[from_nom] ErrorKind),
    UnsupportedVersionNumber(u8),
    ParameterError(#[from_located(module = "self")] BgpParameterParsingError),
}

/// BGP Open Message optional parameter Parsing errors
#[derive(LocatedError, Eq, PartialEq, Clone, Debug)]
pub enum BgpParameterParsingError {
    /// Errors triggered by the nom parser, see [ErrorKind] for
    /// additional information.
    NomError(#[from_nom] ErrorKind),
    UndefinedParameterType(#[from_external] UndefinedBgpOpenMessageParameterType),
    CapabilityError(
        #[from_located(module = "crate::wire::deserializer::capabilities")]
        BgpCapabilityParsingError,
    ),
}

impl<'a> ReadablePdu<'a, LocatedBgpOpenMessageParsingError<'a>> for BgpOpenMessage {
    fn from_wire(buf: Span<'a>) -> IResult<Span<'a>, Self, LocatedBgpOpenMessageParsingError<'a>> {
        let (buf, _) = nom::combinator::map_res(be_u8, |version| {
            if version == BGP_VERSION {
                Ok(version)
            } else {
                Err(BgpOpenMessageParsingError::UnsupportedVersionNumber(version))
            }
        })(buf)?;
        let (buf, my_as) = be_u16(buf)?;
        let (buf, hold_time) = be_u16(buf)?;
        let (buf, bgp_id) = be_u32(buf)?;
        let bgp_id = Ipv4Addr::from(bgp_id);
        let (buf, params_len) = be_u8(buf)?;
        let (buf, params_buf) = nom::bytes::complete::take(params_len)(buf)?;
        let (_, params) = parse_till_empty_into_located(params_buf)?;
        Ok((buf, BgpOpenMessage::new(my_as, hold_time, bgp_id, params)))
    }
}

impl<'a> ReadablePdu<'a, LocatedBgpParameterParsingError<'a>> for BgpOpenMessageParameter {
    fn from_wire(buf: Span<'a>) -> IResult<Span<'a>, Self, LocatedBgpParameterParsingError<'a>> {
        let (buf, param_type) =
            nom::combinator::map_res(be_u8, BgpOpenMessageParameterType::try_from)(buf)?;
        match param_type {
            BgpOpenMessageParameterType::Capability => {
                let (buf, capabilities_len) = be_u8(buf)?;
                let (buf, capabilities_buf) = nom::bytes::complete::take(capabilities_len)(buf)?;
                let (_, capabilities) = parse_till_empty_into_located(capabilities_buf)?;
                Ok((buf, BgpOpenMessageParameter::Capabilities(capabilities)))
            }
        }
    }
}
