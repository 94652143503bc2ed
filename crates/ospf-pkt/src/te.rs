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

//! Representations for the TE LSA top-level TLVs and the Link TLV
//! sub-TLVs

use crate::iana::LinkType;
use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

/// A top-level TLV of the TE LSA
///
/// ```text
/// 0                   1                   2                   3
/// 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |              Type             |             Length            |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                            Value...                           |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
///
/// The length covers the value only; values are zero-padded to a 4-octet
/// boundary on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TeTlv {
    /// A stable IP address of the advertising router, always reachable when
    /// there is IP connectivity to it
    RouterAddress(Ipv4Addr),
    /// A single TE link, described by its sub-TLVs
    Link(LinkTlv),
    /// Fallback preserving the raw value of any TLV type outside the
    /// modeled registry
    Unknown { tlv_type: u16, value: Vec<u8> },
}

/// The Link TLV: an ordered sequence of sub-TLVs describing one link.
/// The TLV length is derived from the encoded sub-TLVs, never stored.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LinkTlv {
    sub_tlvs: Vec<LinkSubTlv>,
}

impl LinkTlv {
    pub const fn new(sub_tlvs: Vec<LinkSubTlv>) -> Self {
        Self { sub_tlvs }
    }

    pub const fn sub_tlvs(&self) -> &Vec<LinkSubTlv> {
        &self.sub_tlvs
    }
}

/// Sub-TLVs of the Link TLV as defined by
/// [RFC3630 Section 2.5](https://datatracker.ietf.org/doc/html/rfc3630#section-2.5)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LinkSubTlv {
    /// Declared with a 1-octet value followed by 3 padding octets on the
    /// wire
    LinkType(LinkType),
    /// The Router ID of the neighbor (point-to-point) or the interface
    /// address of the designated router (multi-access)
    LinkId(Ipv4Addr),
    LocalInterfaceIpAddress(Vec<Ipv4Addr>),
    RemoteInterfaceIpAddress(Vec<Ipv4Addr>),
    TrafficEngineeringMetric(u32),
    /// Bytes per second, IEEE floating point
    MaximumBandwidth(f32),
    /// Bytes per second, IEEE floating point
    MaximumReservableBandwidth(f32),
    /// Unreserved bytes per second at each of the eight priority levels
    UnreservedBandwidth([f32; 8]),
    AdministrativeGroup(u32),
    /// Fallback preserving the raw value of any sub-TLV type outside the
    /// modeled registry
    Unknown { sub_tlv_type: u16, value: Vec<u8> },
}
