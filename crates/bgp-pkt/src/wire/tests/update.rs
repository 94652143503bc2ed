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
        As2PathSegment, AsPath, AsPathSegmentType, MultiExitDiscriminator, NextHop, Origin,
        PathAttribute, PathAttributeValue, UnknownAttribute,
    },
    update::BgpUpdateMessage,
    wire::{
        deserializer::{
            path_attribute::PathAttributeParsingError, update::BgpUpdateMessageParsingError,
            BgpMessageParsingError, LocatedBgpMessageParsingError,
        },
        serializer::BgpMessageWritingError,
        tests::BGP_MARKER,
    },
    BgpMessage,
};
use ipnet::Ipv4Net;
use nom::error::ErrorKind;
use routewire_parse_utils::{
    test_helpers::{combine, test_parse_error, test_parsed_completely, test_write},
    Span,
};
use std::net::Ipv4Addr;

#[test]
fn test_update_empty() -> Result<(), BgpMessageWritingError> {
    // End-of-RIB marker: no withdrawn routes, no attributes, no NLRI
    let good_wire = combine(vec![BGP_MARKER, &[0x00, 0x17, 0x02, 0x00, 0x00, 0x00, 0x00]]);

    let good = BgpMessage::Update(BgpUpdateMessage::new(vec![], vec![], vec![]));

    test_parsed_completely(&good_wire[..], &good);
    test_write(&good, &good_wire[..])?;
    Ok(())
}

#[test]
fn test_update_withdrawn_routes() -> Result<(), BgpMessageWritingError> {
    let good_wire = combine(vec![
        BGP_MARKER,
        &[0x00, 0x1a, 0x02],
        &[0x00, 0x03, 0x10, 0x0a, 0x01],
        &[0x00, 0x00],
    ]);

    let good = BgpMessage::Update(BgpUpdateMessage::new(
        vec![Ipv4Net::new(Ipv4Addr::new(10, 1, 0, 0), 16).unwrap()],
        vec![],
        vec![],
    ));

    test_parsed_completely(&good_wire[..], &good);
    test_write(&good, &good_wire[..])?;
    Ok(())
}

#[test]
fn test_update_announcement() -> Result<(), BgpMessageWritingError> {
    let good_wire = combine(vec![
        BGP_MARKER,
        &[0x00, 0x36, 0x02],
        &[0x00, 0x00],
        &[0x00, 0x1b],
        &[0x40, 0x01, 0x01, 0x00],
        &[0x40, 0x02, 0x06, 0x02, 0x02, 0xfd, 0xe8, 0xfc, 0x00],
        &[0x40, 0x03, 0x04, 0xc0, 0x00, 0x02, 0x01],
        &[0x80, 0x04, 0x04, 0x00, 0x00, 0x00, 0x64],
        &[0x18, 0xc6, 0x33, 0x64],
    ]);

    let good = BgpMessage::Update(BgpUpdateMessage::new(
        vec![],
        vec![
            PathAttribute::from(
                false,
                true,
                false,
                false,
                PathAttributeValue::Origin(Origin::IGP),
            )
            .unwrap(),
            PathAttribute::from(
                false,
                true,
                false,
                false,
                PathAttributeValue::AsPath(AsPath::new(vec![As2PathSegment::new(
                    AsPathSegmentType::AsSequence,
                    vec![65000, 64512],
                )])),
            )
            .unwrap(),
            PathAttribute::from(
                false,
                true,
                false,
                false,
                PathAttributeValue::NextHop(NextHop::new(Ipv4Addr::new(192, 0, 2, 1))),
            )
            .unwrap(),
            PathAttribute::from(
                true,
                false,
                false,
                false,
                PathAttributeValue::MultiExitDiscriminator(MultiExitDiscriminator::new(100)),
            )
            .unwrap(),
        ],
        vec![Ipv4Net::new(Ipv4Addr::new(198, 51, 100, 0), 24).unwrap()],
    ));

    test_parsed_completely(&good_wire[..], &good);
    test_write(&good, &good_wire[..])?;
    Ok(())
}

#[test]
fn test_update_unknown_attribute_preserved() -> Result<(), BgpMessageWritingError> {
    let good_wire = combine(vec![
        BGP_MARKER,
        &[0x00, 0x1c, 0x02],
        &[0x00, 0x00],
        &[0x00, 0x05],
        &[0xc0, 0xf0, 0x02, 0xbe, 0xef],
    ]);

    let good = BgpMessage::Update(BgpUpdateMessage::new(
        vec![],
        vec![PathAttribute::from(
            true,
            true,
            false,
            false,
            PathAttributeValue::UnknownAttribute(UnknownAttribute::new(0xf0, vec![0xbe, 0xef])),
        )
        .unwrap()],
        vec![],
    ));

    test_parsed_completely(&good_wire[..], &good);
    test_write(&good, &good_wire[..])?;
    Ok(())
}

#[test]
fn test_update_truncated_attribute_value() {
    // The next-hop attribute declares four value octets but the attributes
    // section only holds two
    let bad_wire = combine(vec![
        BGP_MARKER,
        &[0x00, 0x1c, 0x02],
        &[0x00, 0x00],
        &[0x00, 0x05],
        &[0x40, 0x03, 0x04, 0xc0, 0x00],
    ]);

    let expected = LocatedBgpMessageParsingError::new(
        unsafe { Span::new_from_raw_offset(26, &bad_wire[26..]) },
        BgpMessageParsingError::BgpUpdateMessageParsingError(
            BgpUpdateMessageParsingError::PathAttributeError(
                PathAttributeParsingError::NomError(ErrorKind::Eof),
            ),
        ),
    );
    test_parse_error::<BgpMessage, LocatedBgpMessageParsingError<'_>>(&bad_wire, &expected);
}
