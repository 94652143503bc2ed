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

//! Serializer library for the TE LSA wire format

pub mod lsa;
pub mod te;

use crate::wire::tlv_padding_len;
use byteorder::{NetworkEndian, WriteBytesExt};
use std::io::Write;

/// Write a TLV header: 2-octet type and 2-octet length. The length field
/// covers the value only, excluding the header and the alignment padding.
#[inline]
pub(crate) fn write_tlv_header_t16_l16<T: Write>(
    writer: &mut T,
    tlv_type: u16,
    tlv_length: u16,
) -> Result<(), std::io::Error> {
    writer.write_u16::<NetworkEndian>(tlv_type)?;
    writer.write_u16::<NetworkEndian>(tlv_length)?;
    Ok(())
}

/// Write the zero octets that pad a TLV value to a 4-octet boundary
#[inline]
pub(crate) fn write_tlv_padding<T: Write>(
    writer: &mut T,
    value_len: usize,
) -> Result<(), std::io::Error> {
    for _ in 0..tlv_padding_len(value_len) {
        writer.write_u8(0)?;
    }
    Ok(())
}
