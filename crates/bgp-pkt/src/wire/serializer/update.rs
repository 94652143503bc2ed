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

//! Serializer for BGP Update message

use byteorder::{NetworkEndian, WriteBytesExt};
use ipnet::Ipv4Net;
use std::io::Write;

use routewire_parse_utils::WritablePdu;
use routewire_serde_macros::WritingError;

use crate::{
    path_attribute::PathAttribute,
    update::BgpUpdateMessage,
    wire::serializer::{path_attribute::PathAttributeWritingError, Ipv4PrefixWritingError},
};

#[derive(WritingError, Eq, PartialEq, Clone, Debug)]
pub enum BgpUpdateMessageWritingError {
    StdIOError(#[from_std_io_error] String),
    Ipv4PrefixError(#[from] Ipv4PrefixWritingError),
    PathAttributeError(#[from] PathAttributeWritingError),
}

impl WritablePdu<BgpUpdateMessageWritingError> for BgpUpdateMessage {
    /// 2 octets for the withdrawn routes length + 2 octets for the path
    /// attributes length
    const BASE_LENGTH: usize = 4;

    fn len(&self) -> usize {
        let withdrawn_len: usize = self
            .withdrawn_routes()
            .iter()
            .map(<Ipv4Net as WritablePdu<Ipv4PrefixWritingError>>::len)
            .sum();
        let attrs_len: usize = self.path_attributes().iter().map(PathAttribute::len).sum();
        let nlri_len: usize = self
            .nlri()
            .iter()
            .map(<Ipv4Net as WritablePdu<Ipv4PrefixWritingError>>::len)
            .sum();
        Self::BASE_LENGTH + withdrawn_len + attrs_len + nlri_len
    }

    fn write<T: Write>(&self, writer: &mut T) -> Result<(), BgpUpdateMessageWritingError> {
        let withdrawn_len: usize = self
            .withdrawn_routes()
            .iter()
            .map(<Ipv4Net as WritablePdu<Ipv4PrefixWritingError>>::len)
            .sum();
        writer.write_u16::<NetworkEndian>(withdrawn_len as u16)?;
        for withdrawn in self.withdrawn_routes() {
            withdrawn.write(writer)?;
        }
        let attrs_len: usize = self.path_attributes().iter().map(PathAttribute::len).sum();
        writer.write_u16::<NetworkEndian>(attrs_len as u16)?;
        for attribute in self.path_attributes() {
            attribute.write(writer)?;
        }
        for nlri in self.nlri() {
            nlri.write(writer)?;
        }
        Ok(())
    }
}
