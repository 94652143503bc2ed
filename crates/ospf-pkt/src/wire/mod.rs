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

//! Serialize/Deserialize the TE LSA wire format

pub mod deserializer;
pub mod serializer;

/// The fixed LSA header size in octets
pub(crate) const LSA_HEADER_LENGTH: u16 = 20;

/// Size of the TLV type + length prefix in octets
pub(crate) const TLV_HEADER_LENGTH: usize = 4;

/// Number of zero octets that pad a TLV value to a 4-octet boundary on the
/// wire. The padding is not included in the TLV's declared length.
pub(crate) const fn tlv_padding_len(value_len: usize) -> usize {
    (4 - value_len % 4) % 4
}

#[cfg(test)]
mod tests;
