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
    iana::{LinkType, OspfLsaType},
    lsa::{LsaHeader, TeLsa},
    te::{LinkSubTlv, LinkTlv, TeTlv},
    wire::{
        deserializer::lsa::{LocatedTeLsaParsingError, TeLsaParsingError},
        serializer::lsa::TeLsaWritingError,
    },
};
use routewire_parse_utils::{
    test_helpers::{combine, test_parse_error, test_parsed_completely, test_write},
    Span,
};
use std::net::Ipv4Addr;

fn te_lsa_header_wire() -> Vec<u8> {
    combine(vec![
        &[0x00, 0x01],             // age
        &[0x22],                   // options
        &[0x0a],                   // LSA type 10 (area-local opaque)
        &[0x01, 0x00, 0x00, 0x07], // opaque type 1, opaque id 7
        &[0x0a, 0x00, 0x00, 0x01], // advertising router
        &[0x80, 0x00, 0x00, 0x01], // sequence number
        &[0x12, 0x34],             // checksum, carried verbatim
    ])
}

fn te_lsa_header() -> LsaHeader {
    LsaHeader::new(
        1,
        0x22,
        OspfLsaType::OpaqueAreaLocal,
        Ipv4Addr::new(1, 0, 0, 7),
        Ipv4Addr::new(10, 0, 0, 1),
        0x8000_0001,
        0x1234,
    )
}

#[test]
fn test_te_lsa_round_trip() -> Result<(), TeLsaWritingError> {
    let good_wire = combine(vec![
        &te_lsa_header_wire(),
        &[0x00, 0x38], // length: 20 header + 8 router address + 28 link
        // Router Address TLV
        &[0x00, 0x01, 0x00, 0x04, 0x0a, 0x00, 0x00, 0x01],
        // Link TLV with three sub-TLVs
        &[0x00, 0x02, 0x00, 0x18],
        &[0x00, 0x01, 0x00, 0x01, 0x01, 0x00, 0x00, 0x00],
        &[0x00, 0x02, 0x00, 0x04, 0x0a, 0x00, 0x00, 0x02],
        &[0x00, 0x05, 0x00, 0x04, 0x00, 0x00, 0x00, 0x0a],
    ]);

    let good = TeLsa::new(
        te_lsa_header(),
        vec![
            TeTlv::RouterAddress(Ipv4Addr::new(10, 0, 0, 1)),
            TeTlv::Link(LinkTlv::new(vec![
                LinkSubTlv::LinkType(LinkType::PointToPoint),
                LinkSubTlv::LinkId(Ipv4Addr::new(10, 0, 0, 2)),
                LinkSubTlv::TrafficEngineeringMetric(10),
            ])),
        ],
    );

    test_parsed_completely(&good_wire[..], &good);
    test_write(&good, &good_wire[..])?;
    Ok(())
}

#[test]
fn test_te_lsa_empty_body() -> Result<(), TeLsaWritingError> {
    let good_wire = combine(vec![&te_lsa_header_wire(), &[0x00, 0x14]]);

    let good = TeLsa::new(te_lsa_header(), vec![]);

    test_parsed_completely(&good_wire[..], &good);
    test_write(&good, &good_wire[..])?;
    Ok(())
}

#[test]
fn test_te_lsa_length_below_header() {
    let bad_wire = combine(vec![&te_lsa_header_wire(), &[0x00, 0x0a]]);

    let expected = LocatedTeLsaParsingError::new(
        unsafe { Span::new_from_raw_offset(18, &bad_wire[18..]) },
        TeLsaParsingError::InvalidLsaLength(0x0a),
    );
    test_parse_error::<TeLsa, LocatedTeLsaParsingError<'_>>(&bad_wire, &expected);
}

#[test]
fn test_te_lsa_length_exceeds_buffer() {
    // Declares 4 octets of TLVs but the buffer ends at the header
    let bad_wire = combine(vec![&te_lsa_header_wire(), &[0x00, 0x18]]);

    let expected = LocatedTeLsaParsingError::new(
        unsafe { Span::new_from_raw_offset(18, &bad_wire[18..]) },
        TeLsaParsingError::InvalidLsaLength(0x18),
    );
    test_parse_error::<TeLsa, LocatedTeLsaParsingError<'_>>(&bad_wire, &expected);
}

#[test]
fn test_te_lsa_rejects_non_opaque_type() {
    let mut bad_wire = te_lsa_header_wire();
    bad_wire[3] = 0x01; // router LSA
    bad_wire.extend_from_slice(&[0x00, 0x14]);

    let expected = LocatedTeLsaParsingError::new(
        Span::new(&bad_wire),
        TeLsaParsingError::NotAnOpaqueLsa(OspfLsaType::Router),
    );
    test_parse_error::<TeLsa, LocatedTeLsaParsingError<'_>>(&bad_wire, &expected);
}

#[test]
fn test_te_lsa_rejects_unexpected_opaque_type() {
    let mut bad_wire = te_lsa_header_wire();
    bad_wire[4] = 0x02; // opaque type 2 is not the TE LSA
    bad_wire.extend_from_slice(&[0x00, 0x14]);

    let expected = LocatedTeLsaParsingError::new(
        Span::new(&bad_wire),
        TeLsaParsingError::UnexpectedOpaqueType(2),
    );
    test_parse_error::<TeLsa, LocatedTeLsaParsingError<'_>>(&bad_wire, &expected);
}
