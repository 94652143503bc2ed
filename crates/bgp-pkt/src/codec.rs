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

//! A [`tokio_util::codec`] adapter between a raw byte stream and
//! [`BgpMessage`] values.
//!
//! The codec only does framing: it waits until the whole message announced
//! by the fixed header is buffered, then hands the bytes to the pure wire
//! decoder. It owns no sockets and no timers; transport policy lives with
//! the session layer driving it.

use byteorder::{ByteOrder, NetworkEndian};
use bytes::{Buf, BufMut, BytesMut};
use nom::Needed;
use tokio_util::codec::{Decoder, Encoder};

use crate::{
    wire::{deserializer::BgpMessageParsingError, serializer::BgpMessageWritingError},
    BgpMessage,
};
use routewire_parse_utils::{LocatedParsingError, ReadablePdu, Span, WritablePdu};

/// Octets needed before the total message length can be read from the fixed
/// header: 16-octet marker + 2-octet length + 1-octet type.
const BGP_HEADER_LENGTH: usize = 19;

#[derive(Debug, Clone, Copy, Default)]
pub struct BgpCodec;

#[derive(Debug, Clone, PartialEq)]
pub enum BgpCodecDecoderError {
    IoError(String),
    Incomplete(Option<usize>),
    BgpMessageParsingError(BgpMessageParsingError),
}

impl From<std::io::Error> for BgpCodecDecoderError {
    fn from(error: std::io::Error) -> Self {
        Self::IoError(error.to_string())
    }
}

impl Decoder for BgpCodec {
    type Item = BgpMessage;
    type Error = BgpCodecDecoderError;

    fn decode(&mut self, buf: &mut BytesMut) -> Result<Option<BgpMessage>, Self::Error> {
        if buf.len() < BGP_HEADER_LENGTH {
            return Ok(None);
        }
        let length = NetworkEndian::read_u16(&buf[16..18]) as usize;
        if length > BGP_HEADER_LENGTH && buf.len() < length {
            return Ok(None);
        }
        if log::log_enabled!(log::Level::Debug) {
            log::debug!("Decoding buffer message: {buf:?}");
        }
        match BgpMessage::from_wire(Span::new(buf)) {
            Ok((_span, msg)) => {
                buf.advance(length);
                Ok(Some(msg))
            }
            Err(error) => {
                log::error!("BGP decoding error {error:?} for buffer: {:?}", buf.to_vec());
                let err = match error {
                    nom::Err::Incomplete(needed) => {
                        let needed = match needed {
                            Needed::Unknown => None,
                            Needed::Size(size) => Some(size.get()),
                        };
                        BgpCodecDecoderError::Incomplete(needed)
                    }
                    nom::Err::Error(error) | nom::Err::Failure(error) => {
                        BgpCodecDecoderError::BgpMessageParsingError(error.error().clone())
                    }
                };
                Err(err)
            }
        }
    }
}

impl Encoder<BgpMessage> for BgpCodec {
    type Error = BgpMessageWritingError;

    fn encode(&mut self, msg: BgpMessage, dst: &mut BytesMut) -> Result<(), Self::Error> {
        if log::log_enabled!(log::Level::Debug) {
            log::debug!("Encoding message: {msg:?}");
        }
        msg.write(&mut dst.writer())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_waits_for_full_message() {
        let mut codec = BgpCodec;
        let mut buf = BytesMut::from(&[0xff; 10][..]);
        assert_eq!(codec.decode(&mut buf), Ok(None));
        assert_eq!(buf.len(), 10);

        // Header complete but body (open message, declared length 29) is not
        let mut buf = BytesMut::from(
            &[
                0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
                0xff, 0xff, 0xff, 0x00, 0x1d, 0x01,
            ][..],
        );
        assert_eq!(codec.decode(&mut buf), Ok(None));
        assert_eq!(buf.len(), 19);
    }

    #[test]
    fn test_decode_keepalive() {
        let mut codec = BgpCodec;
        let mut wire = vec![0xffu8; 16];
        wire.extend_from_slice(&[0x00, 0x13, 0x04]);
        // A second keepalive queued behind the first stays in the buffer
        let mut buf = BytesMut::from(&wire[..]);
        buf.extend_from_slice(&wire);
        assert_eq!(codec.decode(&mut buf), Ok(Some(BgpMessage::KeepAlive)));
        assert_eq!(buf.len(), 19);
        assert_eq!(codec.decode(&mut buf), Ok(Some(BgpMessage::KeepAlive)));
        assert_eq!(buf.len(), 0);
    }

    #[test]
    fn test_decode_bad_marker_is_an_error() {
        let mut codec = BgpCodec;
        let mut wire = vec![0xffu8; 16];
        wire[0] = 0x01;
        wire.extend_from_slice(&[0x00, 0x13, 0x04]);
        let mut buf = BytesMut::from(&wire[..]);
        let decoded = codec.decode(&mut buf);
        assert!(matches!(
            decoded,
            Err(BgpCodecDecoderError::BgpMessageParsingError(
                BgpMessageParsingError::ConnectionNotSynchronized(_)
            ))
        ));
    }

    #[test]
    fn test_encode_keepalive() {
        let mut codec = BgpCodec;
        let mut buf = BytesMut::new();
        codec.encode(BgpMessage::KeepAlive, &mut buf).unwrap();
        let mut expected = vec![0xffu8; 16];
        expected.extend_from_slice(&[0x00, 0x13, 0x04]);
        assert_eq!(&buf[..], &expected[..]);
    }
}
