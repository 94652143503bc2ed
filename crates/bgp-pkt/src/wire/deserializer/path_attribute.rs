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

//! Deserializer for BGP Path Attributes

use crate::{
    iana::{PathAttributeType, UndefinedPathAttributeType},
    path_attribute::{
        Aggregator, As2PathSegment, As4Path, As4PathSegment, AsPath, AsPathSegmentType,
        AtomicAggregate, InvalidPathAttribute, LocalPreference, MultiExitDiscriminator, NextHop,
        Origin, PathAttribute, PathAttributeValue, UndefinedAsPathSegmentType, UndefinedOrigin,
        UnknownAttribute,
    },
};
use nom::{
    error::ErrorKind,
    number::complete::{be_u16, be_u32, be_u8},
    IResult,
};
use routewire_parse_utils::{parse_into_located, parse_till_empty_into_located, ReadablePdu, Span};
use routewire_serde_macros::LocatedError;
use std::net::Ipv4Addr;

/// BGP Path Attribute Parsing errors
#[derive(LocatedError, Eq, PartialEq, Clone, Debug)]
pub enum PathAttributeParsingError {
    /// Errors triggered by the nom parser, see [ErrorKind] for
    /// additional information.
    NomError(#[from_nom] ErrorKind),
    /// The attribute flags contradict the well-known properties of the
    /// attribute value
    InvalidPathAttribute(InvalidPathAttribute, PathAttributeValue),
    OriginError(#[from_located(module = "self")] OriginParsingError),
    AsPathError(#[from_located(module = "self")] AsPathParsingError),
    NextHopError(#[from_located(module = "self")] NextHopParsingError),
    MultiExitDiscriminatorError(
        #[from_located(module = "self")] MultiExitDiscriminatorParsingError,
    ),
    LocalPreferenceError(#[from_located(module = "self")] LocalPreferenceParsingError),
    AtomicAggregateError(#[from_located(module = "self")] AtomicAggregateParsingError),
    AggregatorError(#[from_located(module = "self")] AggregatorParsingError),
}

impl<'a> ReadablePdu<'a, LocatedPathAttributeParsingError<'a>> for PathAttribute {
    fn from_wire(buf: Span<'a>) -> IResult<Span<'a>, Self, LocatedPathAttributeParsingError<'a>> {
        let input = buf;
        let (buf, flags) = be_u8(buf)?;
        let optional = flags & 0b1000_0000 != 0;
        let transitive = flags & 0b0100_0000 != 0;
        let partial = flags & 0b0010_0000 != 0;
        let extended_length = flags & 0b0001_0000 != 0;
        let (buf, type_code) = be_u8(buf)?;
        // The attribute length is one or two octets depending on the
        // extended-length flag
        let (buf, attr_len) = if extended_length {
            be_u16(buf)?
        } else {
            let (buf, attr_len) = be_u8(buf)?;
            (buf, attr_len as u16)
        };
        let (buf, attr_buf) = nom::bytes::complete::take(attr_len)(buf)?;
        let value = match PathAttributeType::try_from(type_code) {
            Ok(PathAttributeType::Origin) => {
                let (_, origin) = parse_into_located(attr_buf)?;
                PathAttributeValue::Origin(origin)
            }
            Ok(PathAttributeType::AsPath) => {
                let (_, as_path) = parse_into_located(attr_buf)?;
                PathAttributeValue::AsPath(as_path)
            }
            Ok(PathAttributeType::As4Path) => {
                let (_, as4_path) = parse_into_located(attr_buf)?;
                PathAttributeValue::As4Path(as4_path)
            }
            Ok(PathAttributeType::NextHop) => {
                let (_, next_hop) = parse_into_located(attr_buf)?;
                PathAttributeValue::NextHop(next_hop)
            }
            Ok(PathAttributeType::MultiExitDiscriminator) => {
                let (_, med) = parse_into_located(attr_buf)?;
                PathAttributeValue::MultiExitDiscriminator(med)
            }
            Ok(PathAttributeType::LocalPreference) => {
                let (_, local_pref) = parse_into_located(attr_buf)?;
                PathAttributeValue::LocalPreference(local_pref)
            }
            Ok(PathAttributeType::AtomicAggregate) => {
                let (_, atomic) = parse_into_located(attr_buf)?;
                PathAttributeValue::AtomicAggregate(atomic)
            }
            Ok(PathAttributeType::Aggregator) => {
                let (_, aggregator) = parse_into_located(attr_buf)?;
                PathAttributeValue::Aggregator(aggregator)
            }
            Err(UndefinedPathAttributeType(code)) => PathAttributeValue::UnknownAttribute(
                UnknownAttribute::new(code, attr_buf.to_vec()),
            ),
        };
        match PathAttribute::from(optional, transitive, partial, extended_length, value) {
            Ok(attr) => Ok((buf, attr)),
            Err((value, error)) => Err(nom::Err::Error(LocatedPathAttributeParsingError::new(
                input,
                PathAttributeParsingError::InvalidPathAttribute(error, value),
            ))),
        }
    }
}

#[derive(LocatedError, Eq, PartialEq, Clone, Debug)]
pub enum OriginParsingError {
    /// Errors triggered by the nom parser, see [ErrorKind] for
    /// additional information.
    NomError(#[from_nom] ErrorKind),
    InvalidOriginLength(usize),
    UndefinedOrigin(#[from_external] UndefinedOrigin),
}

impl<'a> ReadablePdu<'a, LocatedOriginParsingError<'a>> for Origin {
    fn from_wire(buf: Span<'a>) -> IResult<Span<'a>, Self, LocatedOriginParsingError<'a>> {
        if buf.len() != 1 {
            return Err(nom::Err::Error(LocatedOriginParsingError::new(
                buf,
                OriginParsingError::InvalidOriginLength(buf.len()),
            )));
        }
        let (buf, origin) = nom::combinator::map_res(be_u8, Origin::try_from)(buf)?;
        Ok((buf, origin))
    }
}

#[derive(LocatedError, Eq, PartialEq, Clone, Debug)]
pub enum AsPathParsingError {
    /// Errors triggered by the nom parser, see [ErrorKind] for
    /// additional information.
    NomError(#[from_nom] ErrorKind),
    UndefinedAsPathSegmentType(#[from_external] UndefinedAsPathSegmentType),
}

impl<'a> ReadablePdu<'a, LocatedAsPathParsingError<'a>> for As2PathSegment {
    fn from_wire(buf: Span<'a>) -> IResult<Span<'a>, Self, LocatedAsPathParsingError<'a>> {
        let (buf, segment_type) =
            nom::combinator::map_res(be_u8, AsPathSegmentType::try_from)(buf)?;
        let (buf, count) = be_u8(buf)?;
        let (buf, as_numbers) = nom::multi::count(be_u16, count as usize)(buf)?;
        Ok((buf, As2PathSegment::new(segment_type, as_numbers)))
    }
}

impl<'a> ReadablePdu<'a, LocatedAsPathParsingError<'a>> for As4PathSegment {
    fn from_wire(buf: Span<'a>) -> IResult<Span<'a>, Self, LocatedAsPathParsingError<'a>> {
        let (buf, segment_type) =
            nom::combinator::map_res(be_u8, AsPathSegmentType::try_from)(buf)?;
        let (buf, count) = be_u8(buf)?;
        let (buf, as_numbers) = nom::multi::count(be_u32, count as usize)(buf)?;
        Ok((buf, As4PathSegment::new(segment_type, as_numbers)))
    }
}

impl<'a> ReadablePdu<'a, LocatedAsPathParsingError<'a>> for AsPath {
    fn from_wire(buf: Span<'a>) -> IResult<Span<'a>, Self, LocatedAsPathParsingError<'a>> {
        let (buf, segments) = parse_till_empty_into_located(buf)?;
        Ok((buf, AsPath::new(segments)))
    }
}

impl<'a> ReadablePdu<'a, LocatedAsPathParsingError<'a>> for As4Path {
    fn from_wire(buf: Span<'a>) -> IResult<Span<'a>, Self, LocatedAsPathParsingError<'a>> {
        let (buf, segments) = parse_till_empty_into_located(buf)?;
        Ok((buf, As4Path::new(segments)))
    }
}

#[derive(LocatedError, Eq, PartialEq, Clone, Debug)]
pub enum NextHopParsingError {
    /// Errors triggered by the nom parser, see [ErrorKind] for
    /// additional information.
    NomError(#[from_nom] ErrorKind),
    InvalidNextHopLength(usize),
}

impl<'a> ReadablePdu<'a, LocatedNextHopParsingError<'a>> for NextHop {
    fn from_wire(buf: Span<'a>) -> IResult<Span<'a>, Self, LocatedNextHopParsingError<'a>> {
        if buf.len() != 4 {
            return Err(nom::Err::Error(LocatedNextHopParsingError::new(
                buf,
                NextHopParsingError::InvalidNextHopLength(buf.len()),
            )));
        }
        let (buf, next_hop) = be_u32(buf)?;
        Ok((buf, NextHop::new(Ipv4Addr::from(next_hop))))
    }
}

#[derive(LocatedError, Eq, PartialEq, Clone, Debug)]
pub enum MultiExitDiscriminatorParsingError {
    /// Errors triggered by the nom parser, see [ErrorKind] for
    /// additional information.
    NomError(#[from_nom] ErrorKind),
    InvalidMultiExitDiscriminatorLength(usize),
}

impl<'a> ReadablePdu<'a, LocatedMultiExitDiscriminatorParsingError<'a>> for MultiExitDiscriminator {
    fn from_wire(
        buf: Span<'a>,
    ) -> IResult<Span<'a>, Self, LocatedMultiExitDiscriminatorParsingError<'a>> {
        if buf.len() != 4 {
            return Err(nom::Err::Error(
                LocatedMultiExitDiscriminatorParsingError::new(
                    buf,
                    MultiExitDiscriminatorParsingError::InvalidMultiExitDiscriminatorLength(
                        buf.len(),
                    ),
                ),
            ));
        }
        let (buf, metric) = be_u32(buf)?;
        Ok((buf, MultiExitDiscriminator::new(metric)))
    }
}

#[derive(LocatedError, Eq, PartialEq, Clone, Debug)]
pub enum LocalPreferenceParsingError {
    /// Errors triggered by the nom parser, see [ErrorKind] for
    /// additional information.
    NomError(#[from_nom] ErrorKind),
    InvalidLocalPreferenceLength(usize),
}

impl<'a> ReadablePdu<'a, LocatedLocalPreferenceParsingError<'a>> for LocalPreference {
    fn from_wire(buf: Span<'a>) -> IResult<Span<'a>, Self, LocatedLocalPreferenceParsingError<'a>> {
        if buf.len() != 4 {
            return Err(nom::Err::Error(LocatedLocalPreferenceParsingError::new(
                buf,
                LocalPreferenceParsingError::InvalidLocalPreferenceLength(buf.len()),
            )));
        }
        let (buf, metric) = be_u32(buf)?;
        Ok((buf, LocalPreference::new(metric)))
    }
}

#[derive(LocatedError, Eq, PartialEq, Clone, Debug)]
pub enum AtomicAggregateParsingError {
    /// Errors triggered by the nom parser, see [ErrorKind] for
    /// additional information.
    NomError(#[from_nom] ErrorKind),
    InvalidAtomicAggregateLength(usize),
}

impl<'a> ReadablePdu<'a, LocatedAtomicAggregateParsingError<'a>> for AtomicAggregate {
    fn from_wire(buf: Span<'a>) -> IResult<Span<'a>, Self, LocatedAtomicAggregateParsingError<'a>> {
        if !buf.is_empty() {
            return Err(nom::Err::Error(LocatedAtomicAggregateParsingError::new(
                buf,
                AtomicAggregateParsingError::InvalidAtomicAggregateLength(buf.len()),
            )));
        }
        Ok((buf, AtomicAggregate))
    }
}

#[derive(LocatedError, Eq, PartialEq, Clone, Debug)]
pub enum AggregatorParsingError {
    /// Errors triggered by the nom parser, see [ErrorKind] for
    /// additional information.
    NomError(#[from_nom] ErrorKind),
    InvalidAggregatorLength(usize),
}

impl<'a> ReadablePdu<'a, LocatedAggregatorParsingError<'a>> for Aggregator {
    fn from_wire(buf: Span<'a>) -> IResult<Span<'a>, Self, LocatedAggregatorParsingError<'a>> {
        if buf.len() != 6 {
            return Err(nom::Err::Error(LocatedAggregatorParsingError::new(
                buf,
                AggregatorParsingError::InvalidAggregatorLength(buf.len()),
            )));
        }
        let (buf, asn) = be_u16(buf)?;
        let (buf, origin) = be_u32(buf)?;
        Ok((buf, Aggregator::new(asn, Ipv4Addr::from(origin))))
    }
}
