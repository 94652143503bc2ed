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

//! BGP Capabilities advertised in BGP Open Messages.
//! See [RFC5492 Capabilities Advertisement with BGP-4](https://datatracker.ietf.org/doc/html/rfc5492)

use crate::iana::BgpCapabilityCode;
use serde::{Deserialize, Serialize};

/// BGP Capabilities are included as parameters in the
/// [`crate::open::BgpOpenMessage`] message to indicate support of certain
/// BGP features.
///
/// ```text
/// +------------------------------+
/// | Capability Code (1 octet)    |
/// +------------------------------+
/// | Capability Length (1 octet)  |
/// +------------------------------+
/// | Capability Value (variable)  |
/// ~                              ~
/// +------------------------------+
/// ```
#[derive(Debug, Hash, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum BgpCapability {
    /// Defined in [RFC4760](https://datatracker.ietf.org/doc/html/rfc4760)
    MultiProtocolExtensions(MultiProtocolExtensionsCapability),

    /// Defined in [RFC2918](https://datatracker.ietf.org/doc/html/rfc2918)
    RouteRefresh,

    /// Defined in [RFC6793](https://datatracker.ietf.org/doc/html/rfc6793)
    FourOctetAs(FourOctetAsCapability),

    Unrecognized(UnrecognizedCapability),
}

impl BgpCapability {
    /// The IANA capability code, or the raw code octet for capabilities this
    /// crate doesn't model.
    pub const fn code(&self) -> Result<BgpCapabilityCode, u8> {
        match self {
            Self::MultiProtocolExtensions(_) => Ok(BgpCapabilityCode::MultiProtocolExtensions),
            Self::RouteRefresh => Ok(BgpCapabilityCode::RouteRefreshCapability),
            Self::FourOctetAs(_) => Ok(BgpCapabilityCode::FourOctetAs),
            Self::Unrecognized(value) => Err(value.code()),
        }
    }
}

/// Multiprotocol extensions capability as defined by
/// [RFC4760](https://datatracker.ietf.org/doc/html/rfc4760).
///
/// ```text
/// 0       7      15      23      31
/// +-------+-------+-------+-------+
/// |      AFI      | Res.  | SAFI  |
/// +-------+-------+-------+-------+
/// ```
///
/// The AFI and SAFI octets are carried raw; the reserved octet is preserved
/// verbatim so a decoded capability re-encodes byte-identically even when a
/// peer doesn't zero it.
#[derive(Debug, Hash, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct MultiProtocolExtensionsCapability {
    afi: u16,
    reserved: u8,
    safi: u8,
}

impl MultiProtocolExtensionsCapability {
    pub const fn new(afi: u16, safi: u8) -> Self {
        Self {
            afi,
            reserved: 0,
            safi,
        }
    }

    pub const fn new_with_reserved(afi: u16, reserved: u8, safi: u8) -> Self {
        Self {
            afi,
            reserved,
            safi,
        }
    }

    pub const fn afi(&self) -> u16 {
        self.afi
    }

    pub const fn reserved(&self) -> u8 {
        self.reserved
    }

    pub const fn safi(&self) -> u8 {
        self.safi
    }
}

/// Four-octet AS number capability as defined by
/// [RFC6793](https://datatracker.ietf.org/doc/html/rfc6793)
#[derive(Debug, Hash, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct FourOctetAsCapability {
    asn4: u32,
}

impl FourOctetAsCapability {
    pub const fn new(asn4: u32) -> Self {
        Self { asn4 }
    }

    pub const fn asn4(&self) -> u32 {
        self.asn4
    }
}

/// Generic struct to carry any BGP capability this crate doesn't model,
/// preserving the raw value for byte-identical re-encoding.
#[derive(Debug, Hash, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct UnrecognizedCapability {
    code: u8,
    value: Vec<u8>,
}

impl UnrecognizedCapability {
    pub const fn new(code: u8, value: Vec<u8>) -> Self {
        Self { code, value }
    }

    pub const fn code(&self) -> u8 {
        self.code
    }

    pub const fn value(&self) -> &Vec<u8> {
        &self.value
    }
}
