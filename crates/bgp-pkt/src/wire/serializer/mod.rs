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

//! Serializer library for BGP's wire protocol

pub mod capabilities;
pub mod notification;
pub mod open;
pub mod path_attribute;
pub mod update;

use byteorder::{NetworkEndian, WriteBytesExt};
use ipnet::Ipv4Net;
use std::io::Write;

use routewire_parse_utils::WritablePdu;
use routewire_serde_macros::WritingError;

use crate::{
    wire::{
        deserializer::{BGP_MAX_MESSAGE_LENGTH, BGP_MIN_MESSAGE_LENGTH},
        serializer::{
            notification::BgpNotificationMessageWritingError, open::BgpOpenMessageWritingError,
            update::BgpUpdateMessageWritingError,
        },
    },
    BgpMessage,
};

#[derive(WritingError, Eq, PartialEq, Clone, Debug)]
pub enum BgpMessageWritingError {
    /// The size of the written message is larger than the allowed 4,096
    /// octets for open and keepalive messages
    BgpMessageLengthOverflow(usize),

    StdIOError(#[from_std_io_error] String),

    OpenError(#[from] BgpOpenMessageWritingError),

    UpdateError(#[from] BgpUpdateMessageWritingError),

    NotificationError(#[from] BgpNotificationMessageWritingError),
}

impl WritablePdu<BgpMessageWritingError> for BgpMessage {
    const BASE_LENGTH: usize = BGP_MIN_MESSAGE_LENGTH as usize;

    fn len(&self) -> usize {
        let body_len = match self {
            Self::Open(open) => open.len(),
            Self::Update(update) => update.len(),
            Self::Notification(notification) => notification.len(),
            Self::KeepAlive => 0,
        };
        Self::BASE_LENGTH + body_len
    }

    fn write<T: Write>(&self, writer: &mut T) -> Result<(), BgpMessageWritingError> {
        let len = self.len();
        match self {
            Self::Open(_) | Self::KeepAlive => {
                if len > BGP_MAX_MESSAGE_LENGTH as usize {
                    return Err(BgpMessageWritingError::BgpMessageLengthOverflow(len));
                }
            }
            Self::Update(_) | Self::Notification(_) => {}
        }
        writer.write_all(&u128::MAX.to_be_bytes())?;
        writer.write_u16::<NetworkEndian>(len as u16)?;
        writer.write_u8(self.get_type().into())?;
        match self {
            Self::Open(open) => open.write(writer)?,
            Self::Update(update) => update.write(writer)?,
            Self::Notification(notification) => notification.write(writer)?,
            Self::KeepAlive => {}
        }
        Ok(())
    }
}

/// Round up a prefix bit-length to the number of whole octets carried on
/// the wire
#[inline]
pub(crate) fn round_len(len: u8) -> u8 {
    len.div_ceil(8)
}

#[derive(WritingError, Eq, PartialEq, Clone, Debug)]
pub enum Ipv4PrefixWritingError {
    StdIOError(#[from_std_io_error] String),
}

impl WritablePdu<Ipv4PrefixWritingError> for Ipv4Net {
    /// 1 octet for the prefix bit-length
    const BASE_LENGTH: usize = 1;

    fn len(&self) -> usize {
        Self::BASE_LENGTH + round_len(self.prefix_len()) as usize
    }

    fn write<T: Write>(&self, writer: &mut T) -> Result<(), Ipv4PrefixWritingError> {
        writer.write_u8(self.prefix_len())?;
        let octets = self.network().octets();
        writer.write_all(&octets[..round_len(self.prefix_len()) as usize])?;
        Ok(())
    }
}
