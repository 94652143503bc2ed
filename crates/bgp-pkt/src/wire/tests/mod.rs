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

//! Wire-format tests against hand-assembled byte buffers

use crate::{
    iana::UndefinedBgpMessageType,
    wire::deserializer::{BgpMessageParsingError, LocatedBgpMessageParsingError},
    BgpMessage,
};
use nom::error::ErrorKind;
use routewire_parse_utils::{
    test_helpers::{combine, test_parse_error},
    Span,
};

mod capabilities;
mod keepalive;
mod notification;
mod open;
mod path_attribute;
mod update;

pub(crate) const BGP_MARKER: &[u8] = &[0xff; 16];

#[test]
fn test_bgp_message_bad_marker() {
    // A well-formed notification, except one marker octet is 0x01. No
    // partial message comes back, only the located error.
    let bad_marker_wire = combine(vec![
        &[0x01],
        &BGP_MARKER[..15],
        &[0x00, 0x17, 0x03, 0x02, 0x02, 0xfe, 0xb0],
    ]);
    let invalid_marker = u128::from_be_bytes([
        0x01, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
        0xff,
    ]);

    let expected = LocatedBgpMessageParsingError::new(
        Span::new(&bad_marker_wire),
        BgpMessageParsingError::ConnectionNotSynchronized(invalid_marker),
    );
    test_parse_error::<BgpMessage, LocatedBgpMessageParsingError<'_>>(&bad_marker_wire, &expected);
}

#[test]
fn test_bgp_message_undefined_message_type() {
    let bad_type_wire = combine(vec![BGP_MARKER, &[0x00, 0x13, 0x05]]);

    let expected = LocatedBgpMessageParsingError::new(
        unsafe { Span::new_from_raw_offset(18, &bad_type_wire[18..]) },
        BgpMessageParsingError::UndefinedBgpMessageType(UndefinedBgpMessageType(5)),
    );
    test_parse_error::<BgpMessage, LocatedBgpMessageParsingError<'_>>(&bad_type_wire, &expected);
}

#[test]
fn test_bgp_message_length_below_minimum() {
    let bad_length_wire = combine(vec![BGP_MARKER, &[0x00, 0x12, 0x04]]);

    let expected = LocatedBgpMessageParsingError::new(
        unsafe { Span::new_from_raw_offset(16, &bad_length_wire[16..]) },
        BgpMessageParsingError::BadMessageLength(0x12),
    );
    test_parse_error::<BgpMessage, LocatedBgpMessageParsingError<'_>>(&bad_length_wire, &expected);
}

#[test]
fn test_bgp_message_length_exceeds_buffer() {
    // Declared length of 23 but only 20 octets on the wire; the message
    // body is never reached
    let truncated_wire = combine(vec![BGP_MARKER, &[0x00, 0x17, 0x03, 0x02]]);

    let expected = LocatedBgpMessageParsingError::new(
        unsafe { Span::new_from_raw_offset(16, &truncated_wire[16..]) },
        BgpMessageParsingError::BadMessageLength(0x17),
    );
    test_parse_error::<BgpMessage, LocatedBgpMessageParsingError<'_>>(&truncated_wire, &expected);
}

#[test]
fn test_bgp_message_truncated_marker() {
    // Not even the marker fits; the buffer ends mid-preamble
    let truncated_wire = &BGP_MARKER[..10];

    let expected = LocatedBgpMessageParsingError::new(
        Span::new(truncated_wire),
        BgpMessageParsingError::NomError(ErrorKind::Eof),
    );
    test_parse_error::<BgpMessage, LocatedBgpMessageParsingError<'_>>(truncated_wire, &expected);
}
