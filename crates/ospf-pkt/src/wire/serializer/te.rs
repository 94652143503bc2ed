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

//! Serializer for the TE LSA top-level TLVs and the Link TLV sub-TLVs

use byteorder::{NetworkEndian, WriteBytesExt};
use std::io::Write;

use routewire_parse_utils::WritablePdu;
use routewire_serde_macros::WritingError;

use crate::{
    iana::{LinkSubTlvType, TeTlvType},
    te::{LinkSubTlv, TeTlv},
    wire::{
        serializer::{write_tlv_header_t16_l16, write_tlv_padding},
        tlv_padding_len, TLV_HEADER_LENGTH,
    },
};

#[derive(WritingError, PartialEq, Clone, Debug)]
pub enum TeTlvWritingError {
    StdIOError(#[from_std_io_error] String),
    LinkSubTlvError(#[from] LinkSubTlvWritingError),
}

impl TeTlv {
    /// The value length that goes into the TLV length field. For the Link
    /// TLV this covers the nested sub-TLVs including their padding, which
    /// is how RFC3630 accounts for them.
    fn value_len(&self) -> usize {
        match self {
            Self::RouterAddress(_) => 4,
            Self::Link(link) => link.sub_tlvs().iter().map(LinkSubTlv::len).sum(),
            Self::Unknown { value, .. } => value.len(),
        }
    }
}

impl WritablePdu<TeTlvWritingError> for TeTlv {
    const BASE_LENGTH: usize = TLV_HEADER_LENGTH;

    fn len(&self) -> usize {
        let value_len = self.value_len();
        Self::BASE_LENGTH + value_len + tlv_padding_len(value_len)
    }

    fn write<T: Write>(&self, writer: &mut T) -> Result<(), TeTlvWritingError> {
        let value_len = self.value_len();
        match self {
            Self::RouterAddress(addr) => {
                write_tlv_header_t16_l16(writer, TeTlvType::RouterAddress.into(), 4)?;
                writer.write_u32::<NetworkEndian>((*addr).into())?;
            }
            Self::Link(link) => {
                write_tlv_header_t16_l16(writer, TeTlvType::Link.into(), value_len as u16)?;
                for sub_tlv in link.sub_tlvs() {
                    sub_tlv.write(writer)?;
                }
            }
            Self::Unknown { tlv_type, value } => {
                write_tlv_header_t16_l16(writer, *tlv_type, value_len as u16)?;
                writer.write_all(value)?;
                write_tlv_padding(writer, value_len)?;
            }
        }
        Ok(())
    }
}

#[derive(WritingError, PartialEq, Clone, Debug)]
pub enum LinkSubTlvWritingError {
    StdIOError(#[from_std_io_error] String),
}

impl LinkSubTlv {
    /// The value length that goes into the sub-TLV length field, excluding
    /// the alignment padding
    fn value_len(&self) -> usize {
        match self {
            Self::LinkType(_) => 1,
            Self::LinkId(_) => 4,
            Self::LocalInterfaceIpAddress(addrs) => 4 * addrs.len(),
            Self::RemoteInterfaceIpAddress(addrs) => 4 * addrs.len(),
            Self::TrafficEngineeringMetric(_) => 4,
            Self::MaximumBandwidth(_) => 4,
            Self::MaximumReservableBandwidth(_) => 4,
            Self::UnreservedBandwidth(_) => 32,
            Self::AdministrativeGroup(_) => 4,
            Self::Unknown { value, .. } => value.len(),
        }
    }

    const fn sub_tlv_type(&self) -> u16 {
        match self {
            Self::LinkType(_) => LinkSubTlvType::LinkType as u16,
            Self::LinkId(_) => LinkSubTlvType::LinkId as u16,
            Self::LocalInterfaceIpAddress(_) => LinkSubTlvType::LocalInterfaceIpAddress as u16,
            Self::RemoteInterfaceIpAddress(_) => LinkSubTlvType::RemoteInterfaceIpAddress as u16,
            Self::TrafficEngineeringMetric(_) => LinkSubTlvType::TrafficEngineeringMetric as u16,
            Self::MaximumBandwidth(_) => LinkSubTlvType::MaximumBandwidth as u16,
            Self::MaximumReservableBandwidth(_) => {
                LinkSubTlvType::MaximumReservableBandwidth as u16
            }
            Self::UnreservedBandwidth(_) => LinkSubTlvType::UnreservedBandwidth as u16,
            Self::AdministrativeGroup(_) => LinkSubTlvType::AdministrativeGroup as u16,
            Self::Unknown { sub_tlv_type, .. } => *sub_tlv_type,
        }
    }
}

impl WritablePdu<LinkSubTlvWritingError> for LinkSubTlv {
    const BASE_LENGTH: usize = TLV_HEADER_LENGTH;

    fn len(&self) -> usize {
        let value_len = self.value_len();
        Self::BASE_LENGTH + value_len + tlv_padding_len(value_len)
    }

    fn write<T: Write>(&self, writer: &mut T) -> Result<(), LinkSubTlvWritingError> {
        let value_len = self.value_len();
        write_tlv_header_t16_l16(writer, self.sub_tlv_type(), value_len as u16)?;
        match self {
            Self::LinkType(link_type) => {
                writer.write_u8((*link_type).into())?;
            }
            Self::LinkId(addr) => {
                writer.write_u32::<NetworkEndian>((*addr).into())?;
            }
            Self::LocalInterfaceIpAddress(addrs) | Self::RemoteInterfaceIpAddress(addrs) => {
                for addr in addrs {
                    writer.write_u32::<NetworkEndian>((*addr).into())?;
                }
            }
            Self::TrafficEngineeringMetric(metric) => {
                writer.write_u32::<NetworkEndian>(*metric)?;
            }
            Self::MaximumBandwidth(bandwidth) | Self::MaximumReservableBandwidth(bandwidth) => {
                writer.write_f32::<NetworkEndian>(*bandwidth)?;
            }
            Self::UnreservedBandwidth(unreserved) => {
                for bandwidth in unreserved {
                    writer.write_f32::<NetworkEndian>(*bandwidth)?;
                }
            }
            Self::AdministrativeGroup(group) => {
                writer.write_u32::<NetworkEndian>(*group)?;
            }
            Self::Unknown { value, .. } => {
                writer.write_all(value)?;
            }
        }
        write_tlv_padding(writer, value_len)?;
        Ok(())
    }
}
