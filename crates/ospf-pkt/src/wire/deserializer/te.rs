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

//! Deserializer for the TE LSA top-level TLVs and the Link TLV sub-TLVs

use crate::{
    iana::{
        LinkSubTlvType, LinkType, TeTlvType, UndefinedLinkSubTlvType, UndefinedLinkType,
        UndefinedTeTlvType,
    },
    te::{LinkSubTlv, LinkTlv, TeTlv},
    wire::deserializer::read_tlv_header_t16_l16,
};
use nom::{
    error::ErrorKind,
    number::complete::{be_f32, be_u32, be_u8},
    IResult,
};
use routewire_parse_utils::{parse_till_empty_into_located, ReadablePdu, Span};
use routewire_serde_macros::LocatedError;
use std::net::Ipv4Addr;

/// TE top-level TLV Parsing errors
#[derive(LocatedError, PartialEq, Clone, Debug)]
pub enum TeTlvParsingError {
    /// Errors triggered by the nom parser, see [ErrorKind] for
    /// additional information.
    NomError(#[from_nom] ErrorKind),
    InvalidRouterAddressLength(u16),
    LinkSubTlvError(#[from_located(module = "self")] LinkSubTlvParsingError),
}

impl<'a> ReadablePdu<'a, LocatedTeTlvParsingError<'a>> for TeTlv {
    fn from_wire(buf: Span<'a>) -> IResult<Span<'a>, Self, LocatedTeTlvParsingError<'a>> {
        let input = buf;
        let (tlv_type, tlv_length, value, remainder) = read_tlv_header_t16_l16(buf)?;
        match TeTlvType::try_from(tlv_type) {
            Ok(TeTlvType::RouterAddress) => {
                if tlv_length != 4 {
                    return Err(nom::Err::Error(LocatedTeTlvParsingError::new(
                        input,
                        TeTlvParsingError::InvalidRouterAddressLength(tlv_length),
                    )));
                }
                let (_, addr) = be_u32(value)?;
                Ok((remainder, TeTlv::RouterAddress(Ipv4Addr::from(addr))))
            }
            Ok(TeTlvType::Link) => {
                let (_, sub_tlvs) = parse_till_empty_into_located(value)?;
                Ok((remainder, TeTlv::Link(LinkTlv::new(sub_tlvs))))
            }
            // TLV types outside the modeled registry are preserved verbatim
            // for byte-identical re-encoding
            Err(UndefinedTeTlvType(tlv_type)) => Ok((
                remainder,
                TeTlv::Unknown {
                    tlv_type,
                    value: value.to_vec(),
                },
            )),
        }
    }
}

/// Link TLV sub-TLV Parsing errors
#[derive(LocatedError, PartialEq, Clone, Debug)]
pub enum LinkSubTlvParsingError {
    /// Errors triggered by the nom parser, see [ErrorKind] for
    /// additional information.
    NomError(#[from_nom] ErrorKind),
    InvalidLinkTypeLength(u16),
    UndefinedLinkType(#[from_external] UndefinedLinkType),
    InvalidLinkIdLength(u16),
    InvalidInterfaceAddressLength(u16),
    InvalidMetricLength(u16),
    InvalidBandwidthLength(u16),
    InvalidUnreservedBandwidthLength(u16),
    InvalidAdministrativeGroupLength(u16),
}

impl<'a> ReadablePdu<'a, LocatedLinkSubTlvParsingError<'a>> for LinkSubTlv {
    fn from_wire(buf: Span<'a>) -> IResult<Span<'a>, Self, LocatedLinkSubTlvParsingError<'a>> {
        let input = buf;
        let (sub_tlv_type, tlv_length, value, remainder) = read_tlv_header_t16_l16(buf)?;
        match LinkSubTlvType::try_from(sub_tlv_type) {
            Ok(LinkSubTlvType::LinkType) => {
                // One significant octet; the 3 padding octets that fill its
                // slot were already skipped by the header reader
                if tlv_length != 1 {
                    return Err(nom::Err::Error(LocatedLinkSubTlvParsingError::new(
                        input,
                        LinkSubTlvParsingError::InvalidLinkTypeLength(tlv_length),
                    )));
                }
                let (_, link_type) = nom::combinator::map_res(be_u8, LinkType::try_from)(value)?;
                Ok((remainder, LinkSubTlv::LinkType(link_type)))
            }
            Ok(LinkSubTlvType::LinkId) => {
                if tlv_length != 4 {
                    return Err(nom::Err::Error(LocatedLinkSubTlvParsingError::new(
                        input,
                        LinkSubTlvParsingError::InvalidLinkIdLength(tlv_length),
                    )));
                }
                let (_, addr) = be_u32(value)?;
                Ok((remainder, LinkSubTlv::LinkId(Ipv4Addr::from(addr))))
            }
            Ok(LinkSubTlvType::LocalInterfaceIpAddress) => {
                let (_, addrs) = parse_interface_addresses(input, value, tlv_length)?;
                Ok((remainder, LinkSubTlv::LocalInterfaceIpAddress(addrs)))
            }
            Ok(LinkSubTlvType::RemoteInterfaceIpAddress) => {
                let (_, addrs) = parse_interface_addresses(input, value, tlv_length)?;
                Ok((remainder, LinkSubTlv::RemoteInterfaceIpAddress(addrs)))
            }
            Ok(LinkSubTlvType::TrafficEngineeringMetric) => {
                if tlv_length != 4 {
                    return Err(nom::Err::Error(LocatedLinkSubTlvParsingError::new(
                        input,
                        LinkSubTlvParsingError::InvalidMetricLength(tlv_length),
                    )));
                }
                let (_, metric) = be_u32(value)?;
                Ok((remainder, LinkSubTlv::TrafficEngineeringMetric(metric)))
            }
            Ok(LinkSubTlvType::MaximumBandwidth) => {
                let (_, bandwidth) = parse_bandwidth(input, value, tlv_length)?;
                Ok((remainder, LinkSubTlv::MaximumBandwidth(bandwidth)))
            }
            Ok(LinkSubTlvType::MaximumReservableBandwidth) => {
                let (_, bandwidth) = parse_bandwidth(input, value, tlv_length)?;
                Ok((remainder, LinkSubTlv::MaximumReservableBandwidth(bandwidth)))
            }
            Ok(LinkSubTlvType::UnreservedBandwidth) => {
                // One bandwidth value per priority level
                if tlv_length != 32 {
                    return Err(nom::Err::Error(LocatedLinkSubTlvParsingError::new(
                        input,
                        LinkSubTlvParsingError::InvalidUnreservedBandwidthLength(tlv_length),
                    )));
                }
                let (_, values) = nom::multi::count(be_f32, 8)(value)?;
                let mut unreserved = [0f32; 8];
                unreserved.copy_from_slice(&values);
                Ok((remainder, LinkSubTlv::UnreservedBandwidth(unreserved)))
            }
            Ok(LinkSubTlvType::AdministrativeGroup) => {
                if tlv_length != 4 {
                    return Err(nom::Err::Error(LocatedLinkSubTlvParsingError::new(
                        input,
                        LinkSubTlvParsingError::InvalidAdministrativeGroupLength(tlv_length),
                    )));
                }
                let (_, group) = be_u32(value)?;
                Ok((remainder, LinkSubTlv::AdministrativeGroup(group)))
            }
            // Sub-TLV types outside the modeled registry are preserved
            // verbatim for byte-identical re-encoding
            Err(UndefinedLinkSubTlvType(sub_tlv_type)) => Ok((
                remainder,
                LinkSubTlv::Unknown {
                    sub_tlv_type,
                    value: value.to_vec(),
                },
            )),
        }
    }
}

fn parse_interface_addresses<'a>(
    input: Span<'a>,
    value: Span<'a>,
    tlv_length: u16,
) -> IResult<Span<'a>, Vec<Ipv4Addr>, LocatedLinkSubTlvParsingError<'a>> {
    if tlv_length % 4 != 0 {
        return Err(nom::Err::Error(LocatedLinkSubTlvParsingError::new(
            input,
            LinkSubTlvParsingError::InvalidInterfaceAddressLength(tlv_length),
        )));
    }
    let (value, addrs) = nom::multi::count(be_u32, (tlv_length / 4) as usize)(value)?;
    Ok((value, addrs.into_iter().map(Ipv4Addr::from).collect()))
}

fn parse_bandwidth<'a>(
    input: Span<'a>,
    value: Span<'a>,
    tlv_length: u16,
) -> IResult<Span<'a>, f32, LocatedLinkSubTlvParsingError<'a>> {
    if tlv_length != 4 {
        return Err(nom::Err::Error(LocatedLinkSubTlvParsingError::new(
            input,
            LinkSubTlvParsingError::InvalidBandwidthLength(tlv_length),
        )));
    }
    be_f32(value)
}
