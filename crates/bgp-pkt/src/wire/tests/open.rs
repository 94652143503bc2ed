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
    capabilities::{
        BgpCapability, FourOctetAsCapability, MultiProtocolExtensionsCapability,
        UnrecognizedCapability,
    },
    open::{BgpOpenMessage, BgpOpenMessageParameter},
    wire::{
        deserializer::{
            open::BgpOpenMessageParsingError, BgpMessageParsingError,
            LocatedBgpMessageParsingError,
        },
        serializer::BgpMessageWritingError,
        tests::BGP_MARKER,
    },
    BgpMessage,
};
use routewire_parse_utils::{
    test_helpers::{combine, test_parse_error, test_parsed_completely, test_write},
    Span,
};
use std::net::Ipv4Addr;

#[test]
fn test_open_no_params() -> Result<(), BgpMessageWritingError> {
    let good_wire = combine(vec![
        BGP_MARKER,
        &[0x00, 0x1d, 0x01],
        &[0x04, 0xfc, 0x00, 0x00, 0xb4, 0x0a, 0x00, 0x00, 0x01, 0x00],
    ]);

    let good = BgpMessage::Open(BgpOpenMessage::new(
        64512,
        180,
        Ipv4Addr::new(10, 0, 0, 1),
        vec![],
    ));

    test_parsed_completely(&good_wire[..], &good);
    test_write(&good, &good_wire[..])?;
    Ok(())
}

#[test]
fn test_open_with_capabilities() -> Result<(), BgpMessageWritingError> {
    let good_wire = combine(vec![
        BGP_MARKER,
        &[0x00, 0x31, 0x01],
        &[0x04, 0x01, 0x00, 0x00, 0xb4, 0x0a, 0x00, 0x00, 0x01, 0x14],
        // One capabilities parameter holding four capability TLVs
        &[0x02, 0x12],
        &[0x01, 0x04, 0x00, 0x01, 0x00, 0x01],
        &[0x02, 0x00],
        &[0x41, 0x04, 0x00, 0x01, 0x00, 0x00],
        &[0x80, 0x02, 0x01, 0x02],
    ]);

    let good = BgpMessage::Open(BgpOpenMessage::new(
        256,
        180,
        Ipv4Addr::new(10, 0, 0, 1),
        vec![BgpOpenMessageParameter::Capabilities(vec![
            BgpCapability::MultiProtocolExtensions(MultiProtocolExtensionsCapability::new(1, 1)),
            BgpCapability::RouteRefresh,
            BgpCapability::FourOctetAs(FourOctetAsCapability::new(65536)),
            BgpCapability::Unrecognized(UnrecognizedCapability::new(0x80, vec![0x01, 0x02])),
        ])],
    ));

    test_parsed_completely(&good_wire[..], &good);
    test_write(&good, &good_wire[..])?;
    Ok(())
}

#[test]
fn test_open_unsupported_version() {
    let bad_wire = combine(vec![
        BGP_MARKER,
        &[0x00, 0x1d, 0x01],
        &[0x05, 0xfc, 0x00, 0x00, 0xb4, 0x0a, 0x00, 0x00, 0x01, 0x00],
    ]);

    let expected = LocatedBgpMessageParsingError::new(
        unsafe { Span::new_from_raw_offset(19, &bad_wire[19..]) },
        BgpMessageParsingError::BgpOpenMessageParsingError(
            BgpOpenMessageParsingError::UnsupportedVersionNumber(5),
        ),
    );
    test_parse_error::<BgpMessage, LocatedBgpMessageParsingError<'_>>(&bad_wire, &expected);
}

#[test]
fn test_open_below_minimum_length() {
    // 28 octets is one short of the smallest well-formed open message
    let bad_wire = combine(vec![
        BGP_MARKER,
        &[0x00, 0x1c, 0x01],
        &[0x04, 0xfc, 0x00, 0x00, 0xb4, 0x0a, 0x00, 0x00, 0x01],
    ]);

    let expected = LocatedBgpMessageParsingError::new(
        unsafe { Span::new_from_raw_offset(16, &bad_wire[16..]) },
        BgpMessageParsingError::BadMessageLength(0x1c),
    );
    test_parse_error::<BgpMessage, LocatedBgpMessageParsingError<'_>>(&bad_wire, &expected);
}
