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
    wire::{
        deserializer::{BgpMessageParsingError, LocatedBgpMessageParsingError},
        serializer::BgpMessageWritingError,
        tests::BGP_MARKER,
    },
    BgpMessage,
};
use routewire_parse_utils::{
    test_helpers::{combine, test_parse_error, test_parsed_completely, test_write},
    Span,
};

#[test]
fn test_keep_alive() -> Result<(), BgpMessageWritingError> {
    let good_wire = combine(vec![BGP_MARKER, &[0x00, 0x13, 0x04]]);

    let good = BgpMessage::KeepAlive;

    test_parsed_completely(&good_wire[..], &good);
    test_write(&good, &good_wire[..])?;
    Ok(())
}

#[test]
fn test_keep_alive_with_payload_is_rejected() {
    // Keepalive messages must be exactly 19 octets
    let bad_wire = combine(vec![BGP_MARKER, &[0x00, 0x14, 0x04, 0x00]]);

    let expected = LocatedBgpMessageParsingError::new(
        unsafe { Span::new_from_raw_offset(16, &bad_wire[16..]) },
        BgpMessageParsingError::BadMessageLength(0x14),
    );
    test_parse_error::<BgpMessage, LocatedBgpMessageParsingError<'_>>(&bad_wire, &expected);
}
