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

//! Serializer for BGP Capabilities

use byteorder::{NetworkEndian, WriteBytesExt};
use std::io::Write;

use routewire_parse_utils::WritablePdu;
use routewire_serde_macros::WritingError;

use crate::{
    capabilities::BgpCapability,
    wire::{
        FOUR_OCTET_AS_CAPABILITY_LENGTH, MULTI_PROTOCOL_EXTENSIONS_CAPABILITY_LENGTH,
        ROUTE_REFRESH_CAPABILITY_LENGTH,
    },
};

#[derive(WritingError, Eq, PartialEq, Clone, Debug)]
pub enum BgpCapabilityWritingError {
    StdIOError(#[from_std_io_error] String),
}

impl WritablePdu<BgpCapabilityWritingError> for BgpCapability {
    /// 1 octet for the capability code and a second for the length
    const BASE_LENGTH: usize = 2;

    fn len(&self) -> usize {
        let value_len = match self {
            Self::MultiProtocolExtensions(_) => {
                MULTI_PROTOCOL_EXTENSIONS_CAPABILITY_LENGTH as usize
            }
            Self::RouteRefresh => ROUTE_REFRESH_CAPABILITY_LENGTH as usize,
            Self::FourOctetAs(_) => FOUR_OCTET_AS_CAPABILITY_LENGTH as usize,
            Self::Unrecognized(value) => value.value().len(),
        };
        Self::BASE_LENGTH + value_len
    }

    fn write<T: Write>(&self, writer: &mut T) -> Result<(), BgpCapabilityWritingError> {
        match self.code() {
            Ok(code) => writer.write_u8(code.into())?,
            Err(code) => writer.write_u8(code)?,
        }
        writer.write_u8((self.len() - Self::BASE_LENGTH) as u8)?;
        match self {
            Self::MultiProtocolExtensions(cap) => {
                writer.write_u16::<NetworkEndian>(cap.afi())?;
                writer.write_u8(cap.reserved())?;
                writer.write_u8(cap.safi())?;
            }
            Self::RouteRefresh => {}
            Self::FourOctetAs(cap) => {
                writer.write_u32::<NetworkEndian>(cap.asn4())?;
            }
            Self::Unrecognized(cap) => {
                writer.write_all(cap.value())?;
            }
        }
        Ok(())
    }
}
