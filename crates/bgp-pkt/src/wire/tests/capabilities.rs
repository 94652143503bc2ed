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
    wire::{
        deserializer::capabilities::{
            BgpCapabilityParsingError, LocatedBgpCapabilityParsingError,
        },
        serializer::capabilities::BgpCapabilityWritingError,
    },
};
use routewire_parse_utils::{
    test_helpers::{test_parse_error, test_parsed_completely, test_write},
    Span,
};

#[test]
fn test_multi_protocol_extensions_capability() -> Result<(), BgpCapabilityWritingError> {
    let good_wire = [0x01, 0x04, 0x00, 0x02, 0x00, 0x01];

    let good = BgpCapability::MultiProtocolExtensions(MultiProtocolExtensionsCapability::new(2, 1));

    test_parsed_completely(&good_wire[..], &good);
    test_write(&good, &good_wire[..])?;
    Ok(())
}

#[test]
fn test_multi_protocol_extensions_reserved_octet_preserved(
) -> Result<(), BgpCapabilityWritingError> {
    // A non-zero reserved octet must survive the round trip untouched
    let good_wire = [0x01, 0x04, 0x00, 0x02, 0x7f, 0x01];

    let good = BgpCapability::MultiProtocolExtensions(
        MultiProtocolExtensionsCapability::new_with_reserved(2, 0x7f, 1),
    );

    test_parsed_completely(&good_wire[..], &good);
    test_write(&good, &good_wire[..])?;
    Ok(())
}

#[test]
fn test_route_refresh_capability() -> Result<(), BgpCapabilityWritingError> {
    let good_wire = [0x02, 0x00];

    let good = BgpCapability::RouteRefresh;

    test_parsed_completely(&good_wire[..], &good);
    test_write(&good, &good_wire[..])?;
    Ok(())
}

#[test]
fn test_four_octet_as_capability() -> Result<(), BgpCapabilityWritingError> {
    let good_wire = [0x41, 0x04, 0x00, 0x01, 0x86, 0xa0];

    let good = BgpCapability::FourOctetAs(FourOctetAsCapability::new(100_000));

    test_parsed_completely(&good_wire[..], &good);
    test_write(&good, &good_wire[..])?;
    Ok(())
}

#[test]
fn test_unrecognized_capability_round_trip() -> Result<(), BgpCapabilityWritingError> {
    // Graceful restart (code 64) is not modeled; its bytes must survive
    // verbatim
    let good_wire = [0x40, 0x06, 0x40, 0xb4, 0x00, 0x01, 0x80, 0x00];

    let good = BgpCapability::Unrecognized(UnrecognizedCapability::new(
        0x40,
        vec![0x40, 0xb4, 0x00, 0x01, 0x80, 0x00],
    ));

    test_parsed_completely(&good_wire[..], &good);
    test_write(&good, &good_wire[..])?;
    Ok(())
}

#[test]
fn test_zero_length_capability_value() -> Result<(), BgpCapabilityWritingError> {
    // A zero-length value is valid and distinct from a missing one
    let good_wire = [0xf0, 0x00];

    let good = BgpCapability::Unrecognized(UnrecognizedCapability::new(0xf0, vec![]));

    test_parsed_completely(&good_wire[..], &good);
    test_write(&good, &good_wire[..])?;
    Ok(())
}

#[test]
fn test_multi_protocol_extensions_bad_length() {
    let bad_wire = [0x01, 0x05, 0x00, 0x02, 0x00, 0x01, 0x00];

    let expected = LocatedBgpCapabilityParsingError::new(
        unsafe { Span::new_from_raw_offset(1, &bad_wire[1..]) },
        BgpCapabilityParsingError::InvalidMultiProtocolExtensionsLength(5),
    );
    test_parse_error::<BgpCapability, LocatedBgpCapabilityParsingError<'_>>(&bad_wire, &expected);
}
