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

use crate::{
    path_attribute::{
        Aggregator, As4Path, As4PathSegment, AsPath, AsPathSegmentType, AtomicAggregate,
        InvalidPathAttribute, LocalPreference, Origin, PathAttribute, PathAttributeValue,
    },
    wire::{
        deserializer::path_attribute::{
            LocatedPathAttributeParsingError, NextHopParsingError, PathAttributeParsingError,
        },
        serializer::path_attribute::PathAttributeWritingError,
    },
};
use routewire_parse_utils::{
    test_helpers::{test_parse_error, test_parsed_completely, test_write},
    Span,
};
use std::net::Ipv4Addr;

#[test]
fn test_origin() -> Result<(), PathAttributeWritingError> {
    let good_wire = [0x40, 0x01, 0x01, 0x02];

    let good = PathAttribute::from(
        false,
        true,
        false,
        false,
        PathAttributeValue::Origin(Origin::Incomplete),
    )
    .unwrap();

    test_parsed_completely(&good_wire[..], &good);
    test_write(&good, &good_wire[..])?;
    Ok(())
}

#[test]
fn test_origin_invalid_flags() {
    // ORIGIN is well-known; the optional bit must not be set
    let bad_wire = [0xc0, 0x01, 0x01, 0x00];

    let expected = LocatedPathAttributeParsingError::new(
        Span::new(&bad_wire),
        PathAttributeParsingError::InvalidPathAttribute(
            InvalidPathAttribute::InvalidOptionalFlagValue(true),
            PathAttributeValue::Origin(Origin::IGP),
        ),
    );
    test_parse_error::<PathAttribute, LocatedPathAttributeParsingError<'_>>(&bad_wire, &expected);
}

#[test]
fn test_as_path_extended_length() -> Result<(), PathAttributeWritingError> {
    let good_wire = [0x50, 0x02, 0x00, 0x06, 0x02, 0x02, 0xfd, 0xe8, 0xfc, 0x00];

    let good = PathAttribute::from(
        false,
        true,
        false,
        true,
        PathAttributeValue::AsPath(AsPath::new(vec![crate::path_attribute::As2PathSegment::new(
            AsPathSegmentType::AsSequence,
            vec![65000, 64512],
        )])),
    )
    .unwrap();

    test_parsed_completely(&good_wire[..], &good);
    test_write(&good, &good_wire[..])?;
    Ok(())
}

#[test]
fn test_as4_path() -> Result<(), PathAttributeWritingError> {
    let good_wire = [0xc0, 0x11, 0x06, 0x02, 0x01, 0x00, 0x01, 0x86, 0xa0];

    let good = PathAttribute::from(
        true,
        true,
        false,
        false,
        PathAttributeValue::As4Path(As4Path::new(vec![As4PathSegment::new(
            AsPathSegmentType::AsSequence,
            vec![100_000],
        )])),
    )
    .unwrap();

    test_parsed_completely(&good_wire[..], &good);
    test_write(&good, &good_wire[..])?;
    Ok(())
}

#[test]
fn test_local_preference() -> Result<(), PathAttributeWritingError> {
    let good_wire = [0x40, 0x05, 0x04, 0x00, 0x00, 0x00, 0x64];

    let good = PathAttribute::from(
        false,
        true,
        false,
        false,
        PathAttributeValue::LocalPreference(LocalPreference::new(100)),
    )
    .unwrap();

    test_parsed_completely(&good_wire[..], &good);
    test_write(&good, &good_wire[..])?;
    Ok(())
}

#[test]
fn test_atomic_aggregate() -> Result<(), PathAttributeWritingError> {
    let good_wire = [0x40, 0x06, 0x00];

    let good = PathAttribute::from(
        false,
        true,
        false,
        false,
        PathAttributeValue::AtomicAggregate(AtomicAggregate),
    )
    .unwrap();

    test_parsed_completely(&good_wire[..], &good);
    test_write(&good, &good_wire[..])?;
    Ok(())
}

#[test]
fn test_aggregator() -> Result<(), PathAttributeWritingError> {
    let good_wire = [0xc0, 0x07, 0x06, 0xfd, 0xe8, 0x0a, 0x00, 0x00, 0x01];

    let good = PathAttribute::from(
        true,
        true,
        false,
        false,
        PathAttributeValue::Aggregator(Aggregator::new(65000, Ipv4Addr::new(10, 0, 0, 1))),
    )
    .unwrap();

    test_parsed_completely(&good_wire[..], &good);
    test_write(&good, &good_wire[..])?;
    Ok(())
}

#[test]
fn test_next_hop_invalid_length() {
    let bad_wire = [0x40, 0x03, 0x05, 0x01, 0x02, 0x03, 0x04, 0x05];

    let expected = LocatedPathAttributeParsingError::new(
        unsafe { Span::new_from_raw_offset(3, &bad_wire[3..]) },
        PathAttributeParsingError::NextHopError(NextHopParsingError::InvalidNextHopLength(5)),
    );
    test_parse_error::<PathAttribute, LocatedPathAttributeParsingError<'_>>(&bad_wire, &expected);
}
