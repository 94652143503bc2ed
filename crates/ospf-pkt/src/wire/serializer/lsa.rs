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

//! Serializer for the TE LSA

use byteorder::{NetworkEndian, WriteBytesExt};
use std::io::Write;

use routewire_parse_utils::WritablePdu;
use routewire_serde_macros::WritingError;

use crate::{
    lsa::TeLsa,
    te::TeTlv,
    wire::{serializer::te::TeTlvWritingError, LSA_HEADER_LENGTH},
};

#[derive(WritingError, PartialEq, Clone, Debug)]
pub enum TeLsaWritingError {
    StdIOError(#[from_std_io_error] String),
    TeTlvError(#[from] TeTlvWritingError),
}

impl WritablePdu<TeLsaWritingError> for TeLsa {
    const BASE_LENGTH: usize = LSA_HEADER_LENGTH as usize;

    fn len(&self) -> usize {
        Self::BASE_LENGTH + self.tlvs().iter().map(TeTlv::len).sum::<usize>()
    }

    fn write<T: Write>(&self, writer: &mut T) -> Result<(), TeLsaWritingError> {
        let header = self.header();
        writer.write_u16::<NetworkEndian>(header.age())?;
        writer.write_u8(header.options())?;
        writer.write_u8(header.lsa_type().into())?;
        writer.write_u32::<NetworkEndian>(header.link_state_id().into())?;
        writer.write_u32::<NetworkEndian>(header.advertising_router().into())?;
        writer.write_u32::<NetworkEndian>(header.sequence_number())?;
        writer.write_u16::<NetworkEndian>(header.checksum())?;
        // The length field covers the header and the encoded TLVs; it is
        // derived, never stored
        writer.write_u16::<NetworkEndian>(self.len() as u16)?;
        for tlv in self.tlvs() {
            tlv.write(writer)?;
        }
        Ok(())
    }
}
