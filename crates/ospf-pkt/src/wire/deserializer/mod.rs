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

//! Deserializer library for the TE LSA wire format

pub mod lsa;
pub mod te;

use crate::wire::tlv_padding_len;
use nom::number::complete::be_u16;
use routewire_parse_utils::Span;

/// Read one TLV header (2-octet type, 2-octet length), slice out the
/// declared value, and advance past the alignment padding that follows it.
/// Returns the type code, the declared length, the value slice, and the
/// remainder positioned at the next sibling TLV.
///
/// Skipping the padding here is what keeps sibling parsing in sync: a
/// length-1 value (such as the Link Type sub-TLV) is followed by 3 padding
/// octets that belong to neither the value nor the next TLV. Padding absent
/// at the very end of the buffer is tolerated.
#[inline]
pub fn read_tlv_header_t16_l16<'a, E, T>(buf: Span<'a>) -> Result<(u16, u16, Span<'a>, Span<'a>), E>
where
    E: From<nom::Err<T>>,
    T: nom::error::ParseError<Span<'a>>,
{
    let (span, tlv_type) = be_u16(buf)?;
    let (span, tlv_length) = be_u16(span)?;
    let (remainder, value) = nom::bytes::complete::take(tlv_length)(span)?;
    let padding = tlv_padding_len(tlv_length as usize).min(remainder.len());
    let (remainder, _) = nom::bytes::complete::take(padding)(remainder)?;
    Ok((tlv_type, tlv_length, value, remainder))
}
