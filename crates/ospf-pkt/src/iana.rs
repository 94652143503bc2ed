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

//! OSPF numeric code points as registered at IANA [OSPF Parameters](https://www.iana.org/assignments/ospfv2-parameters/ospfv2-parameters.xhtml)

use serde::{Deserialize, Serialize};
use strum_macros::{Display, FromRepr};

/// OSPFv2 LSA types, including the opaque types from
/// [RFC5250](https://datatracker.ietf.org/doc/html/rfc5250)
#[repr(u8)]
#[derive(Display, FromRepr, Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum OspfLsaType {
    Router = 1,
    Network = 2,
    SummaryNetwork = 3,
    SummaryAsbr = 4,
    AsExternal = 5,
    OpaqueLinkLocal = 9,
    OpaqueAreaLocal = 10,
    OpaqueAsWide = 11,
}

impl OspfLsaType {
    /// Opaque LSAs carry a TLV-structured payload; all other types use
    /// fixed per-type body layouts.
    pub const fn is_opaque(&self) -> bool {
        matches!(
            self,
            Self::OpaqueLinkLocal | Self::OpaqueAreaLocal | Self::OpaqueAsWide
        )
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct UndefinedOspfLsaType(pub u8);

impl From<OspfLsaType> for u8 {
    fn from(value: OspfLsaType) -> Self {
        value as u8
    }
}

impl TryFrom<u8> for OspfLsaType {
    type Error = UndefinedOspfLsaType;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match Self::from_repr(value) {
            Some(val) => Ok(val),
            None => Err(UndefinedOspfLsaType(value)),
        }
    }
}

/// Opaque LSA type octet (the first octet of the link-state ID of an opaque
/// LSA), see [Opaque Link-State Advertisements Option Types](https://www.iana.org/assignments/ospf-opaque-types/ospf-opaque-types.xhtml)
#[repr(u8)]
#[derive(Display, FromRepr, Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum OpaqueLsaType {
    /// [RFC3630](https://datatracker.ietf.org/doc/html/rfc3630)
    TrafficEngineering = 1,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct UndefinedOpaqueLsaType(pub u8);

impl From<OpaqueLsaType> for u8 {
    fn from(value: OpaqueLsaType) -> Self {
        value as u8
    }
}

impl TryFrom<u8> for OpaqueLsaType {
    type Error = UndefinedOpaqueLsaType;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match Self::from_repr(value) {
            Some(val) => Ok(val),
            None => Err(UndefinedOpaqueLsaType(value)),
        }
    }
}

/// Top-level TLV types of the TE LSA as defined by [RFC3630](https://datatracker.ietf.org/doc/html/rfc3630#section-2.4).
/// Types outside the registry still round-trip through
/// [`crate::te::TeTlv::Unknown`].
#[repr(u16)]
#[derive(Display, FromRepr, Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum TeTlvType {
    RouterAddress = 1,
    Link = 2,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct UndefinedTeTlvType(pub u16);

impl From<TeTlvType> for u16 {
    fn from(value: TeTlvType) -> Self {
        value as u16
    }
}

impl TryFrom<u16> for TeTlvType {
    type Error = UndefinedTeTlvType;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match Self::from_repr(value) {
            Some(val) => Ok(val),
            None => Err(UndefinedTeTlvType(value)),
        }
    }
}

/// Sub-TLV types of the Link TLV as defined by [RFC3630](https://datatracker.ietf.org/doc/html/rfc3630#section-2.5).
/// Types outside the registry still round-trip through
/// [`crate::te::LinkSubTlv::Unknown`].
#[repr(u16)]
#[derive(Display, FromRepr, Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum LinkSubTlvType {
    LinkType = 1,
    LinkId = 2,
    LocalInterfaceIpAddress = 3,
    RemoteInterfaceIpAddress = 4,
    TrafficEngineeringMetric = 5,
    MaximumBandwidth = 6,
    MaximumReservableBandwidth = 7,
    UnreservedBandwidth = 8,
    AdministrativeGroup = 9,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct UndefinedLinkSubTlvType(pub u16);

impl From<LinkSubTlvType> for u16 {
    fn from(value: LinkSubTlvType) -> Self {
        value as u16
    }
}

impl TryFrom<u16> for LinkSubTlvType {
    type Error = UndefinedLinkSubTlvType;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match Self::from_repr(value) {
            Some(val) => Ok(val),
            None => Err(UndefinedLinkSubTlvType(value)),
        }
    }
}

/// Link type values of the Link Type sub-TLV
#[repr(u8)]
#[derive(Display, FromRepr, Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum LinkType {
    PointToPoint = 1,
    MultiAccess = 2,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct UndefinedLinkType(pub u8);

impl From<LinkType> for u8 {
    fn from(value: LinkType) -> Self {
        value as u8
    }
}

impl TryFrom<u8> for LinkType {
    type Error = UndefinedLinkType;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match Self::from_repr(value) {
            Some(val) => Ok(val),
            None => Err(UndefinedLinkType(value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ospf_lsa_type() {
        assert_eq!(OspfLsaType::try_from(10), Ok(OspfLsaType::OpaqueAreaLocal));
        assert_eq!(OspfLsaType::try_from(12), Err(UndefinedOspfLsaType(12)));
        assert!(OspfLsaType::OpaqueLinkLocal.is_opaque());
        assert!(!OspfLsaType::Router.is_opaque());
    }

    #[test]
    fn test_te_tlv_type() {
        assert_eq!(TeTlvType::try_from(2), Ok(TeTlvType::Link));
        assert_eq!(TeTlvType::try_from(3), Err(UndefinedTeTlvType(3)));
    }

    #[test]
    fn test_link_sub_tlv_type() {
        assert_eq!(
            LinkSubTlvType::try_from(9),
            Ok(LinkSubTlvType::AdministrativeGroup)
        );
        assert_eq!(
            LinkSubTlvType::try_from(10),
            Err(UndefinedLinkSubTlvType(10))
        );
    }
}
