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

//! Deserializer for BGP Notification message

use crate::{
    iana::{
        BgpErrorNotificationCode, CeaseErrorSubCode, FiniteStateMachineErrorSubCode,
        MessageHeaderErrorSubCode, OpenMessageErrorSubCode, UndefinedBgpErrorNotificationCode,
        UndefinedCeaseErrorSubCode, UndefinedFiniteStateMachineErrorSubCode,
        UndefinedMessageHeaderErrorSubCode, UndefinedOpenMessageErrorSubCode,
        UndefinedUpdateMessageErrorSubCode, UpdateMessageErrorSubCode,
    },
    notification::{
        BgpNotificationMessage, CeaseError, FiniteStateMachineError, HoldTimerExpiredError,
        MessageHeaderError, OpenMessageError, UpdateMessageError,
    },
};
use nom::{error::ErrorKind, number::complete::be_u8, IResult};
use routewire_parse_utils::{parse_into_located, ReadablePdu, Span};
use routewire_serde_macros::LocatedError;

/// BGP Notification Message Parsing errors
#[derive(LocatedError, Eq, PartialEq, Clone, Debug)]
pub enum BgpNotificationMessageParsingError {
    /// Errors triggered by the nom parser, see [ErrorKind] for
    /// additional information.
    NomError(#[from_nom] ErrorKind),
    UndefinedBgpErrorNotificationCode(#[from_external] UndefinedBgpErrorNotificationCode),
    MessageHeaderError(#[from_located(module = "self")] MessageHeaderErrorParsingError),
    OpenMessageError(#[from_located(module = "self")] OpenMessageErrorParsingError),
    UpdateMessageError(#[from_located(module = "self")] UpdateMessageErrorParsingError),
    HoldTimerExpiredError(#[from_located(module = "self")] HoldTimerExpiredErrorParsingError),
    FiniteStateMachineError(#[from_located(module = "self")] FiniteStateMachineErrorParsingError),
    CeaseError(#[from_located(module = "self")] CeaseErrorParsingError),
}

impl<'a> ReadablePdu<'a, LocatedBgpNotificationMessageParsingError<'a>> for BgpNotificationMessage {
    fn from_wire(
        buf: Span<'a>,
    ) -> IResult<Span<'a>, Self, LocatedBgpNotificationMessageParsingError<'a>> {
        let (buf, notification_type) =
            nom::combinator::map_res(be_u8, BgpErrorNotificationCode::try_from)(buf)?;
        match notification_type {
            BgpErrorNotificationCode::MessageHeaderError => {
                let (buf, value) = parse_into_located(buf)?;
                Ok((buf, BgpNotificationMessage::MessageHeaderError(value)))
            }
            BgpErrorNotificationCode::OpenMessageError => {
                let (buf, value) = parse_into_located(buf)?;
                Ok((buf, BgpNotificationMessage::OpenMessageError(value)))
            }
            BgpErrorNotificationCode::UpdateMessageError => {
                let (buf, value) = parse_into_located(buf)?;
                Ok((buf, BgpNotificationMessage::UpdateMessageError(value)))
            }
            BgpErrorNotificationCode::HoldTimerExpired => {
                let (buf, value) = parse_into_located(buf)?;
                Ok((buf, BgpNotificationMessage::HoldTimerExpiredError(value)))
            }
            BgpErrorNotificationCode::FiniteStateMachineError => {
                let (buf, value) = parse_into_located(buf)?;
                Ok((buf, BgpNotificationMessage::FiniteStateMachineError(value)))
            }
            BgpErrorNotificationCode::Cease => {
                let (buf, value) = parse_into_located(buf)?;
                Ok((buf, BgpNotificationMessage::CeaseError(value)))
            }
        }
    }
}

#[derive(LocatedError, Eq, PartialEq, Clone, Debug)]
pub enum MessageHeaderErrorParsingError {
    /// Errors triggered by the nom parser, see [ErrorKind] for
    /// additional information.
    NomError(#[from_nom] ErrorKind),
    UndefinedMessageHeaderErrorSubCode(#[from_external] UndefinedMessageHeaderErrorSubCode),
}

impl<'a> ReadablePdu<'a, LocatedMessageHeaderErrorParsingError<'a>> for MessageHeaderError {
    fn from_wire(
        buf: Span<'a>,
    ) -> IResult<Span<'a>, Self, LocatedMessageHeaderErrorParsingError<'a>> {
        let (buf, sub_code) =
            nom::combinator::map_res(be_u8, MessageHeaderErrorSubCode::try_from)(buf)?;
        let (buf, value) = nom::bytes::complete::take(buf.len())(buf)?;
        let value = value.to_vec();
        let error = match sub_code {
            MessageHeaderErrorSubCode::Unspecific => MessageHeaderError::Unspecific { value },
            MessageHeaderErrorSubCode::ConnectionNotSynchronized => {
                MessageHeaderError::ConnectionNotSynchronized { value }
            }
            MessageHeaderErrorSubCode::BadMessageLength => {
                MessageHeaderError::BadMessageLength { value }
            }
            MessageHeaderErrorSubCode::BadMessageType => {
                MessageHeaderError::BadMessageType { value }
            }
        };
        Ok((buf, error))
    }
}

#[derive(LocatedError, Eq, PartialEq, Clone, Debug)]
pub enum OpenMessageErrorParsingError {
    /// Errors triggered by the nom parser, see [ErrorKind] for
    /// additional information.
    NomError(#[from_nom] ErrorKind),
    UndefinedOpenMessageErrorSubCode(#[from_external] UndefinedOpenMessageErrorSubCode),
}

impl<'a> ReadablePdu<'a, LocatedOpenMessageErrorParsingError<'a>> for OpenMessageError {
    fn from_wire(buf: Span<'a>) -> IResult<Span<'a>, Self, LocatedOpenMessageErrorParsingError<'a>> {
        let (buf, sub_code) =
            nom::combinator::map_res(be_u8, OpenMessageErrorSubCode::try_from)(buf)?;
        let (buf, value) = nom::bytes::complete::take(buf.len())(buf)?;
        let value = value.to_vec();
        let error = match sub_code {
            OpenMessageErrorSubCode::Unspecific => OpenMessageError::Unspecific { value },
            OpenMessageErrorSubCode::UnsupportedVersionNumber => {
                OpenMessageError::UnsupportedVersionNumber { value }
            }
            OpenMessageErrorSubCode::BadPeerAs => OpenMessageError::BadPeerAs { value },
            OpenMessageErrorSubCode::BadBgpIdentifier => {
                OpenMessageError::BadBgpIdentifier { value }
            }
            OpenMessageErrorSubCode::UnsupportedOptionalParameter => {
                OpenMessageError::UnsupportedOptionalParameter { value }
            }
            OpenMessageErrorSubCode::UnacceptableHoldTime => {
                OpenMessageError::UnacceptableHoldTime { value }
            }
            OpenMessageErrorSubCode::UnsupportedCapability => {
                OpenMessageError::UnsupportedCapability { value }
            }
        };
        Ok((buf, error))
    }
}

#[derive(LocatedError, Eq, PartialEq, Clone, Debug)]
pub enum UpdateMessageErrorParsingError {
    /// Errors triggered by the nom parser, see [ErrorKind] for
    /// additional information.
    NomError(#[from_nom] ErrorKind),
    UndefinedUpdateMessageErrorSubCode(#[from_external] UndefinedUpdateMessageErrorSubCode),
}

impl<'a> ReadablePdu<'a, LocatedUpdateMessageErrorParsingError<'a>> for UpdateMessageError {
    fn from_wire(
        buf: Span<'a>,
    ) -> IResult<Span<'a>, Self, LocatedUpdateMessageErrorParsingError<'a>> {
        let (buf, sub_code) =
            nom::combinator::map_res(be_u8, UpdateMessageErrorSubCode::try_from)(buf)?;
        let (buf, value) = nom::bytes::complete::take(buf.len())(buf)?;
        let value = value.to_vec();
        let error = match sub_code {
            UpdateMessageErrorSubCode::Unspecific => UpdateMessageError::Unspecific { value },
            UpdateMessageErrorSubCode::MalformedAttributeList => {
                UpdateMessageError::MalformedAttributeList { value }
            }
            UpdateMessageErrorSubCode::UnrecognizedWellKnownAttribute => {
                UpdateMessageError::UnrecognizedWellKnownAttribute { value }
            }
            UpdateMessageErrorSubCode::MissingWellKnownAttribute => {
                UpdateMessageError::MissingWellKnownAttribute { value }
            }
            UpdateMessageErrorSubCode::AttributeFlagsError => {
                UpdateMessageError::AttributeFlagsError { value }
            }
            UpdateMessageErrorSubCode::AttributeLengthError => {
                UpdateMessageError::AttributeLengthError { value }
            }
            UpdateMessageErrorSubCode::InvalidOriginAttribute => {
                UpdateMessageError::InvalidOriginAttribute { value }
            }
            UpdateMessageErrorSubCode::InvalidNextHopAttribute => {
                UpdateMessageError::InvalidNextHopAttribute { value }
            }
            UpdateMessageErrorSubCode::OptionalAttributeError => {
                UpdateMessageError::OptionalAttributeError { value }
            }
            UpdateMessageErrorSubCode::InvalidNetworkField => {
                UpdateMessageError::InvalidNetworkField { value }
            }
            UpdateMessageErrorSubCode::MalformedAsPath => {
                UpdateMessageError::MalformedAsPath { value }
            }
        };
        Ok((buf, error))
    }
}

#[derive(LocatedError, Eq, PartialEq, Clone, Debug)]
pub enum HoldTimerExpiredErrorParsingError {
    /// Errors triggered by the nom parser, see [ErrorKind] for
    /// additional information.
    NomError(#[from_nom] ErrorKind),
}

impl<'a> ReadablePdu<'a, LocatedHoldTimerExpiredErrorParsingError<'a>> for HoldTimerExpiredError {
    fn from_wire(
        buf: Span<'a>,
    ) -> IResult<Span<'a>, Self, LocatedHoldTimerExpiredErrorParsingError<'a>> {
        let (buf, sub_code) = be_u8(buf)?;
        let (buf, value) = nom::bytes::complete::take(buf.len())(buf)?;
        Ok((
            buf,
            HoldTimerExpiredError::Unspecific {
                sub_code,
                value: value.to_vec(),
            },
        ))
    }
}

#[derive(LocatedError, Eq, PartialEq, Clone, Debug)]
pub enum FiniteStateMachineErrorParsingError {
    /// Errors triggered by the nom parser, see [ErrorKind] for
    /// additional information.
    NomError(#[from_nom] ErrorKind),
    UndefinedFiniteStateMachineErrorSubCode(
        #[from_external] UndefinedFiniteStateMachineErrorSubCode,
    ),
}

impl<'a> ReadablePdu<'a, LocatedFiniteStateMachineErrorParsingError<'a>> for FiniteStateMachineError {
    fn from_wire(
        buf: Span<'a>,
    ) -> IResult<Span<'a>, Self, LocatedFiniteStateMachineErrorParsingError<'a>> {
        let (buf, sub_code) =
            nom::combinator::map_res(be_u8, FiniteStateMachineErrorSubCode::try_from)(buf)?;
        let (buf, value) = nom::bytes::complete::take(buf.len())(buf)?;
        let value = value.to_vec();
        let error = match sub_code {
            FiniteStateMachineErrorSubCode::UnspecifiedError => {
                FiniteStateMachineError::Unspecific { value }
            }
            FiniteStateMachineErrorSubCode::ReceiveUnexpectedMessageInOpenSentState => {
                FiniteStateMachineError::ReceiveUnexpectedMessageInOpenSentState { value }
            }
            FiniteStateMachineErrorSubCode::ReceiveUnexpectedMessageInOpenConfirmState => {
                FiniteStateMachineError::ReceiveUnexpectedMessageInOpenConfirmState { value }
            }
            FiniteStateMachineErrorSubCode::ReceiveUnexpectedMessageInEstablishedState => {
                FiniteStateMachineError::ReceiveUnexpectedMessageInEstablishedState { value }
            }
        };
        Ok((buf, error))
    }
}

#[derive(LocatedError, Eq, PartialEq, Clone, Debug)]
pub enum CeaseErrorParsingError {
    /// Errors triggered by the nom parser, see [ErrorKind] for
    /// additional information.
    NomError(#[from_nom] ErrorKind),
    UndefinedCeaseErrorSubCode(#[from_external] UndefinedCeaseErrorSubCode),
}

impl<'a> ReadablePdu<'a, LocatedCeaseErrorParsingError<'a>> for CeaseError {
    fn from_wire(buf: Span<'a>) -> IResult<Span<'a>, Self, LocatedCeaseErrorParsingError<'a>> {
        let (buf, sub_code) = nom::combinator::map_res(be_u8, CeaseErrorSubCode::try_from)(buf)?;
        let (buf, value) = nom::bytes::complete::take(buf.len())(buf)?;
        let value = value.to_vec();
        let error = match sub_code {
            CeaseErrorSubCode::MaximumNumberOfPrefixesReached => {
                CeaseError::MaximumNumberOfPrefixesReached { value }
            }
            CeaseErrorSubCode::AdministrativeShutdown => {
                CeaseError::AdministrativeShutdown { value }
            }
            CeaseErrorSubCode::PeerDeConfigured => CeaseError::PeerDeConfigured { value },
            CeaseErrorSubCode::AdministrativeReset => CeaseError::AdministrativeReset { value },
            CeaseErrorSubCode::ConnectionRejected => CeaseError::ConnectionRejected { value },
            CeaseErrorSubCode::OtherConfigurationChange => {
                CeaseError::OtherConfigurationChange { value }
            }
            CeaseErrorSubCode::ConnectionCollisionResolution => {
                CeaseError::ConnectionCollisionResolution { value }
            }
            CeaseErrorSubCode::OutOfResources => CeaseError::OutOfResources { value },
            CeaseErrorSubCode::HardReset => CeaseError::HardReset { value },
        };
        Ok((buf, error))
    }
}
