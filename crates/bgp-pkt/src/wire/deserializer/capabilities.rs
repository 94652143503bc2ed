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

//! Deserializer for BGP Capabilities

use crate::{
    capabilities::{
        BgpCapability, FourOctetAsCapability, MultiProtocolExtensionsCapability,
        UnrecognizedCapability,
    },
    iana::{BgpCapabilityCode, UndefinedBgpCapabilityCode},
    wire::{
        FOUR_OCTET_AS_CAPABILITY_LENGTH, MULTI_PROTOCOL_EXTENSIONS_CAPABILITY_LENGTH,
        ROUTE_REFRESH_CAPABILITY_LENGTH,
    },
};
use nom::{
    error::{ErrorKind, FromExternalError, ParseError},
    number::complete::{be_u16, be_u32, be_u8},
    IResult,
};
use routewire_parse_utils::{ReadablePdu, Span};
use routewire_serde_macros::LocatedError;

/// BGP Capability Parsing errors
#[derive(LocatedError, Eq, PartialEq, Clone, Debug)]
pub enum BgpCapabilityParsingError {
    /// Errors triggered by the nom parser, see [ErrorKind] for
    /// additional information.
    NomError(#[from_nom] ErrorKind),
    InvalidRouteRefreshLength(u8),
    InvalidMultiProtocolExtensionsLength(u8),
    InvalidFourOctetAsLength(u8),
}

/// Helper to read and check the length octet of a fixed-size capability
#[inline]
fn check_capability_length<'a, E, L: FromExternalError<Span<'a>, E> + ParseError<Span<'a>>>(
    buf: Span<'a>,
    expected: u8,
    err: fn(u8) -> E,
) -> IResult<Span<'a>, u8, L> {
    nom::combinator::map_res(be_u8, |length| {
        if length == expected {
            Ok(length)
        } else {
            Err(err(length))
        }
    })(buf)
}

fn parse_multi_protocol_extensions_capability(
    buf: Span<'_>,
) -> IResult<Span<'_>, BgpCapability, LocatedBgpCapabilityParsingError<'_>> {
    let (buf, _) = check_capability_length(buf, MULTI_PROTOCOL_EXTENSIONS_CAPABILITY_LENGTH, |x| {
        BgpCapabilityParsingError::InvalidMultiProtocolExtensionsLength(x)
    })?;
    let (buf, afi) = be_u16(buf)?;
    let (buf, reserved) = be_u8(buf)?;
    let (buf, safi) = be_u8(buf)?;
    Ok((
        buf,
        BgpCapability::MultiProtocolExtensions(
            MultiProtocolExtensionsCapability::new_with_reserved(afi, reserved, safi),
        ),
    ))
}

fn parse_route_refresh_capability(
    buf: Span<'_>,
) -> IResult<Span<'_>, BgpCapability, LocatedBgpCapabilityParsingError<'_>> {
    let (buf, _) = check_capability_length(buf, ROUTE_REFRESH_CAPABILITY_LENGTH, |x| {
        BgpCapabilityParsingError::InvalidRouteRefreshLength(x)
    })?;
    Ok((buf, BgpCapability::RouteRefresh))
}

fn parse_four_octet_as_capability(
    buf: Span<'_>,
) -> IResult<Span<'_>, BgpCapability, LocatedBgpCapabilityParsingError<'_>> {
    let (buf, _) = check_capability_length(buf, FOUR_OCTET_AS_CAPABILITY_LENGTH, |x| {
        BgpCapabilityParsingError::InvalidFourOctetAsLength(x)
    })?;
    let (buf, asn4) = be_u32(buf)?;
    Ok((
        buf,
        BgpCapability::FourOctetAs(FourOctetAsCapability::new(asn4)),
    ))
}

fn parse_unrecognized_capability(
    code: u8,
    buf: Span<'_>,
) -> IResult<Span<'_>, BgpCapability, LocatedBgpCapabilityParsingError<'_>> {
    let (buf, length) = be_u8(buf)?;
    let (buf, value) = nom::bytes::complete::take(length)(buf)?;
    Ok((
        buf,
        BgpCapability::Unrecognized(UnrecognizedCapability::new(code, value.to_vec())),
    ))
}

impl<'a> ReadablePdu<'a, LocatedBgpCapabilityParsingError<'a>> for BgpCapability {
    fn from_wire(buf: Span<'a>) -> IResult<Span<'a>, Self, LocatedBgpCapabilityParsingError<'a>> {
        let (buf, code) = be_u8(buf)?;
        match BgpCapabilityCode::try_from(code) {
            Ok(BgpCapabilityCode::MultiProtocolExtensions) => {
                parse_multi_protocol_extensions_capability(buf)
            }
            Ok(BgpCapabilityCode::RouteRefreshCapability) => parse_route_refresh_capability(buf),
            Ok(BgpCapabilityCode::FourOctetAs) => parse_four_octet_as_capability(buf),
            // Codes outside the modeled registry are preserved verbatim for
            // byte-identical re-encoding
            Err(UndefinedBgpCapabilityCode(code)) => parse_unrecognized_capability(code, buf),
        }
    }
}
