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

//! Deserializer library for BGP's wire protocol

pub mod capabilities;
pub mod notification;
pub mod open;
pub mod path_attribute;
pub mod update;

use ipnet::Ipv4Net;
use nom::{
    error::ErrorKind,
    number::complete::{be_u128, be_u16, be_u8},
    IResult,
};
use std::net::Ipv4Addr;

use routewire_parse_utils::{parse_into_located, ReadablePdu, Span};
use routewire_serde_macros::LocatedError;

use crate::{
    iana::{BgpMessageType, UndefinedBgpMessageType},
    wire::deserializer::{
        notification::BgpNotificationMessageParsingError, open::BgpOpenMessageParsingError,
        update::BgpUpdateMessageParsingError,
    },
    BgpMessage,
};

/// Min message size in BGP is 19 octets: 16-octet marker, 2-octet length,
/// and 1 octet for the type.
pub const BGP_MIN_MESSAGE_LENGTH: u16 = 19;

/// [RFC4271](https://datatracker.ietf.org/doc/html/rfc4271) defined max length as 4096.
/// *Note*, the limit applies to [`BgpMessage::Open`] and
/// [`BgpMessage::KeepAlive`]; [RFC8654](https://datatracker.ietf.org/doc/html/rfc8654)
/// relaxes it for the other message types.
pub const BGP_MAX_MESSAGE_LENGTH: u16 = 4096;

/// Smallest valid open message: header + version, my-AS, hold-time, BGP
/// identifier, and the optional-parameters length octet.
pub const BGP_MIN_OPEN_MESSAGE_LENGTH: u16 = 29;

/// Smallest valid update message: header + the two mandatory section length
/// fields.
pub const BGP_MIN_UPDATE_MESSAGE_LENGTH: u16 = 23;

/// Smallest valid notification message: header + error code + sub-code.
pub const BGP_MIN_NOTIFICATION_MESSAGE_LENGTH: u16 = 21;

#[derive(LocatedError, Eq, PartialEq, Clone, Debug)]
pub enum Ipv4PrefixParsingError {
    /// Errors triggered by the nom parser, see [ErrorKind] for
    /// additional information.
    NomError(#[from_nom] ErrorKind),
    InvalidIpv4PrefixLen(u8),
}

impl<'a> ReadablePdu<'a, LocatedIpv4PrefixParsingError<'a>> for Ipv4Net {
    fn from_wire(buf: Span<'a>) -> IResult<Span<'a>, Self, LocatedIpv4PrefixParsingError<'a>> {
        let input = buf;
        let (buf, prefix_len) = be_u8(buf)?;
        if prefix_len > 32 {
            return Err(nom::Err::Error(LocatedIpv4PrefixParsingError::new(
                input,
                Ipv4PrefixParsingError::InvalidIpv4PrefixLen(prefix_len),
            )));
        }
        // The prefix is encoded in the minimum number of whole octets that
        // hold `prefix_len` bits; trailing bits are zero.
        let (buf, prefix) = nom::bytes::complete::take(prefix_len.div_ceil(8))(buf)?;
        let mut network = [0u8; 4];
        network[..prefix.len()].copy_from_slice(prefix.fragment());
        match Ipv4Net::new(Ipv4Addr::from(network), prefix_len) {
            Ok(net) => Ok((buf, net)),
            Err(_) => Err(nom::Err::Error(LocatedIpv4PrefixParsingError::new(
                input,
                Ipv4PrefixParsingError::InvalidIpv4PrefixLen(prefix_len),
            ))),
        }
    }
}

/// BGP Message Parsing errors
#[derive(LocatedError, Eq, PartialEq, Clone, Debug)]
pub enum BgpMessageParsingError {
    /// Errors triggered by the nom parser, see [ErrorKind] for
    /// additional information.
    NomError(#[from_nom] ErrorKind),

    /// The 16 marker octets of a BGP message are NOT all set to `1`.
    /// For simplicity, we carry the equivalent [`u128`] value that was
    /// invalid instead of the whole buffer.
    ConnectionNotSynchronized(u128),

    /// Couldn't recognize the type octet in the BGP message, see
    /// [UndefinedBgpMessageType]
    UndefinedBgpMessageType(#[from_external] UndefinedBgpMessageType),

    /// BGP message length is not in the defined \[min, max\] range for the
    /// given message type
    BadMessageLength(u16),

    BgpOpenMessageParsingError(
        #[from_located(module = "crate::wire::deserializer::open")] BgpOpenMessageParsingError,
    ),

    BgpUpdateMessageParsingError(
        #[from_located(module = "crate::wire::deserializer::update")] BgpUpdateMessageParsingError,
    ),

    BgpNotificationMessageParsingError(
        #[from_located(module = "crate::wire::deserializer::notification")]
        BgpNotificationMessageParsingError,
    ),
}

impl<'a> ReadablePdu<'a, LocatedBgpMessageParsingError<'a>> for BgpMessage {
    fn from_wire(buf: Span<'a>) -> IResult<Span<'a>, Self, LocatedBgpMessageParsingError<'a>> {
        let (buf, _) = nom::combinator::map_res(be_u128, |marker| {
            if marker == u128::MAX {
                Ok(marker)
            } else {
                Err(BgpMessageParsingError::ConnectionNotSynchronized(marker))
            }
        })(buf)?;

        let pre_len_buf = buf;
        let (buf, length) = be_u16(buf)?;
        if length < BGP_MIN_MESSAGE_LENGTH {
            return Err(nom::Err::Error(LocatedBgpMessageParsingError::new(
                pre_len_buf,
                BgpMessageParsingError::BadMessageLength(length),
            )));
        }

        // Slice out exactly the octets the length field covers (type octet
        // plus body); a buffer shorter than the declared length is a length
        // error, not a truncated read further down.
        let remainder_result = nom::bytes::complete::take::<
            u16,
            Span<'_>,
            LocatedBgpMessageParsingError<'_>,
        >(length - 18)(buf);
        let (remainder_buf, buf) = match remainder_result {
            Ok((remainder_buf, buf)) => (remainder_buf, buf),
            Err(_) => {
                return Err(nom::Err::Error(LocatedBgpMessageParsingError::new(
                    pre_len_buf,
                    BgpMessageParsingError::BadMessageLength(length),
                )));
            }
        };

        let (buf, message_type) = nom::combinator::map_res(be_u8, BgpMessageType::try_from)(buf)?;

        let length_valid = match message_type {
            BgpMessageType::Open => {
                (BGP_MIN_OPEN_MESSAGE_LENGTH..=BGP_MAX_MESSAGE_LENGTH).contains(&length)
            }
            BgpMessageType::Update => length >= BGP_MIN_UPDATE_MESSAGE_LENGTH,
            BgpMessageType::Notification => length >= BGP_MIN_NOTIFICATION_MESSAGE_LENGTH,
            BgpMessageType::KeepAlive => length == BGP_MIN_MESSAGE_LENGTH,
        };
        if !length_valid {
            return Err(nom::Err::Error(LocatedBgpMessageParsingError::new(
                pre_len_buf,
                BgpMessageParsingError::BadMessageLength(length),
            )));
        }

        let (buf, msg) = match message_type {
            BgpMessageType::Open => {
                let (buf, open) = parse_into_located(buf)?;
                (buf, BgpMessage::Open(open))
            }
            BgpMessageType::Update => {
                let (buf, update) = parse_into_located(buf)?;
                (buf, BgpMessage::Update(update))
            }
            BgpMessageType::Notification => {
                let (buf, notification) = parse_into_located(buf)?;
                (buf, BgpMessage::Notification(notification))
            }
            BgpMessageType::KeepAlive => (buf, BgpMessage::KeepAlive),
        };

        // Make sure the variant parser consumed the full message as declared
        // by its length field
        if !buf.is_empty() {
            return Err(nom::Err::Error(LocatedBgpMessageParsingError::new(
                buf,
                BgpMessageParsingError::NomError(ErrorKind::NonEmpty),
            )));
        }
        Ok((remainder_buf, msg))
    }
}
