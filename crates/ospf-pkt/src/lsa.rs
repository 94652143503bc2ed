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

//! Representations for the OSPF LSA header and the TE opaque LSA

use crate::{iana::OspfLsaType, te::TeTlv};
use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

/// The 20-octet header common to all LSAs
///
/// ```text
/// 0                   1                   2                   3
/// 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |            LS age             |    Options    |    LS type    |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                        Link State ID                          |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                     Advertising Router                        |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                     LS sequence number                        |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |         LS checksum           |             length            |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
///
/// The length field is not stored; it is recomputed from the encoded body
/// at serialization time. The checksum is carried verbatim: validating or
/// recomputing it is the flooding machinery's concern, not the codec's.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LsaHeader {
    age: u16,
    options: u8,
    lsa_type: OspfLsaType,
    link_state_id: Ipv4Addr,
    advertising_router: Ipv4Addr,
    sequence_number: u32,
    checksum: u16,
}

impl LsaHeader {
    pub const fn new(
        age: u16,
        options: u8,
        lsa_type: OspfLsaType,
        link_state_id: Ipv4Addr,
        advertising_router: Ipv4Addr,
        sequence_number: u32,
        checksum: u16,
    ) -> Self {
        Self {
            age,
            options,
            lsa_type,
            link_state_id,
            advertising_router,
            sequence_number,
            checksum,
        }
    }

    pub const fn age(&self) -> u16 {
        self.age
    }

    pub const fn options(&self) -> u8 {
        self.options
    }

    pub const fn lsa_type(&self) -> OspfLsaType {
        self.lsa_type
    }

    pub const fn link_state_id(&self) -> Ipv4Addr {
        self.link_state_id
    }

    pub const fn advertising_router(&self) -> Ipv4Addr {
        self.advertising_router
    }

    pub const fn sequence_number(&self) -> u32 {
        self.sequence_number
    }

    pub const fn checksum(&self) -> u16 {
        self.checksum
    }

    /// The opaque-type/opaque-ID split of the link-state ID. Only
    /// meaningful when [`Self::lsa_type`] is an opaque type.
    pub fn opaque_id(&self) -> OpaqueLsaId {
        OpaqueLsaId::from(self.link_state_id)
    }
}

/// For opaque LSAs the link-state ID is re-interpreted as a 1-octet opaque
/// type followed by a 24-bit opaque ID, see
/// [RFC5250](https://datatracker.ietf.org/doc/html/rfc5250#section-3)
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpaqueLsaId {
    opaque_type: u8,
    opaque_id: u32,
}

impl OpaqueLsaId {
    /// The opaque ID is 24 bits; the upper octet of `opaque_id` is dropped.
    pub const fn new(opaque_type: u8, opaque_id: u32) -> Self {
        Self {
            opaque_type,
            opaque_id: opaque_id & 0x00ff_ffff,
        }
    }

    pub const fn opaque_type(&self) -> u8 {
        self.opaque_type
    }

    pub const fn opaque_id(&self) -> u32 {
        self.opaque_id
    }
}

impl From<Ipv4Addr> for OpaqueLsaId {
    fn from(value: Ipv4Addr) -> Self {
        let octets = value.octets();
        Self {
            opaque_type: octets[0],
            opaque_id: u32::from_be_bytes([0, octets[1], octets[2], octets[3]]),
        }
    }
}

impl From<OpaqueLsaId> for Ipv4Addr {
    fn from(value: OpaqueLsaId) -> Self {
        let id = value.opaque_id.to_be_bytes();
        Ipv4Addr::new(value.opaque_type, id[1], id[2], id[3])
    }
}

/// A Traffic Engineering LSA: an opaque LSA (opaque type 1) whose body is
/// an ordered sequence of top-level TLVs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeLsa {
    header: LsaHeader,
    tlvs: Vec<TeTlv>,
}

impl TeLsa {
    pub const fn new(header: LsaHeader, tlvs: Vec<TeTlv>) -> Self {
        Self { header, tlvs }
    }

    pub const fn header(&self) -> &LsaHeader {
        &self.header
    }

    pub const fn tlvs(&self) -> &Vec<TeTlv> {
        &self.tlvs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opaque_lsa_id_round_trip() {
        let addr = Ipv4Addr::new(1, 0, 0, 7);
        let opaque = OpaqueLsaId::from(addr);
        assert_eq!(opaque.opaque_type(), 1);
        assert_eq!(opaque.opaque_id(), 7);
        assert_eq!(Ipv4Addr::from(opaque), addr);
    }

    #[test]
    fn test_opaque_lsa_id_masks_to_24_bits() {
        let opaque = OpaqueLsaId::new(1, 0xff00_0001);
        assert_eq!(opaque.opaque_id(), 1);
    }
}
