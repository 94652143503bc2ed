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

//! Deserializer for the LSA header and the TE LSA

use crate::{
    iana::{OpaqueLsaType, OspfLsaType, UndefinedOspfLsaType},
    lsa::{LsaHeader, TeLsa},
    wire::{deserializer::te::TeTlvParsingError, LSA_HEADER_LENGTH},
};
use nom::{
    error::ErrorKind,
    number::complete::{be_u16, be_u32, be_u8},
    IResult,
};
use routewire_parse_utils::{parse_till_empty_into_located, ReadablePdu, Span};
use routewire_serde_macros::LocatedError;
use std::net::Ipv4Addr;

/// TE LSA Parsing errors
#[derive(LocatedError, PartialEq, Clone, Debug)]
pub enum TeLsaParsingError {
    /// Errors triggered by the nom parser, see [ErrorKind] for
    /// additional information.
    NomError(#[from_nom] ErrorKind),
    UndefinedOspfLsaType(#[from_external] UndefinedOspfLsaType),
    /// The LSA type octet is valid but not an opaque type, so there is no
    /// TLV payload to parse
    NotAnOpaqueLsa(OspfLsaType),
    /// The opaque type octet of the link-state ID is not the TE LSA's
    UnexpectedOpaqueType(u8),
    /// The declared LSA length is shorter than the header or overruns the
    /// buffer
    InvalidLsaLength(u16),
    TeTlvError(#[from_located(module = "crate::wire::deserializer::te")] TeTlvParsingError),
}

impl<'a> ReadablePdu<'a, LocatedTeLsaParsingError<'a>> for TeLsa {
    fn from_wire(buf: Span<'a>) -> IResult<Span<'a>, Self, LocatedTeLsaParsingError<'a>> {
        let input = buf;
        let (buf, age) = be_u16(buf)?;
        let (buf, options) = be_u8(buf)?;
        let (buf, lsa_type) = nom::combinator::map_res(be_u8, OspfLsaType::try_from)(buf)?;
        if !lsa_type.is_opaque() {
            return Err(nom::Err::Error(LocatedTeLsaParsingError::new(
                input,
                TeLsaParsingError::NotAnOpaqueLsa(lsa_type),
            )));
        }
        let (buf, link_state_id) = be_u32(buf)?;
        let link_state_id = Ipv4Addr::from(link_state_id);
        let opaque_type = link_state_id.octets()[0];
        if OpaqueLsaType::try_from(opaque_type) != Ok(OpaqueLsaType::TrafficEngineering) {
            return Err(nom::Err::Error(LocatedTeLsaParsingError::new(
                input,
                TeLsaParsingError::UnexpectedOpaqueType(opaque_type),
            )));
        }
        let (buf, advertising_router) = be_u32(buf)?;
        let (buf, sequence_number) = be_u32(buf)?;
        let (buf, checksum) = be_u16(buf)?;

        let pre_length_buf = buf;
        let (buf, length) = be_u16(buf)?;
        if length < LSA_HEADER_LENGTH {
            return Err(nom::Err::Error(LocatedTeLsaParsingError::new(
                pre_length_buf,
                TeLsaParsingError::InvalidLsaLength(length),
            )));
        }
        // The TLV loop below terminates only on buffer exhaustion, so the
        // body must be sliced to exactly the length the header declares
        let body_result = nom::bytes::complete::take::<u16, Span<'_>, LocatedTeLsaParsingError<'_>>(
            length - LSA_HEADER_LENGTH,
        )(buf);
        let (remainder, body) = match body_result {
            Ok((remainder, body)) => (remainder, body),
            Err(_) => {
                return Err(nom::Err::Error(LocatedTeLsaParsingError::new(
                    pre_length_buf,
                    TeLsaParsingError::InvalidLsaLength(length),
                )));
            }
        };
        let (_, tlvs) = parse_till_empty_into_located(body)?;
        let header = LsaHeader::new(
            age,
            options,
            lsa_type,
            link_state_id,
            Ipv4Addr::from(advertising_router),
            sequence_number,
            checksum,
        );
        Ok((remainder, TeLsa::new(header, tlvs)))
    }
}
