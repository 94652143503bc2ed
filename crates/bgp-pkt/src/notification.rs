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

//! Representations for BGP Notification message

use crate::iana::{
    BgpErrorNotificationCode, CeaseErrorSubCode, FiniteStateMachineErrorSubCode,
    MessageHeaderErrorSubCode, OpenMessageErrorSubCode, UndefinedBgpErrorNotificationCode,
    UndefinedCeaseErrorSubCode, UndefinedFiniteStateMachineErrorSubCode,
    UndefinedMessageHeaderErrorSubCode, UndefinedOpenMessageErrorSubCode,
    UndefinedUpdateMessageErrorSubCode, UpdateMessageErrorSubCode,
};
use serde::{Deserialize, Serialize};

/// BGP Notification message
///
/// ```text
/// 0                   1                   2                   3
///  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
///  +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
///  | Error code    | Error subcode |   Data (variable)             |
///  +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
///
/// The error code is implied by the variant, the sub-code by the nested
/// variant; the data octets are carried verbatim.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum BgpNotificationMessage {
    MessageHeaderError(MessageHeaderError),
    OpenMessageError(OpenMessageError),
    UpdateMessageError(UpdateMessageError),
    HoldTimerExpiredError(HoldTimerExpiredError),
    FiniteStateMachineError(FiniteStateMachineError),
    CeaseError(CeaseError),
}

impl BgpNotificationMessage {
    pub const fn code(&self) -> BgpErrorNotificationCode {
        match self {
            Self::MessageHeaderError(_) => BgpErrorNotificationCode::MessageHeaderError,
            Self::OpenMessageError(_) => BgpErrorNotificationCode::OpenMessageError,
            Self::UpdateMessageError(_) => BgpErrorNotificationCode::UpdateMessageError,
            Self::HoldTimerExpiredError(_) => BgpErrorNotificationCode::HoldTimerExpired,
            Self::FiniteStateMachineError(_) => BgpErrorNotificationCode::FiniteStateMachineError,
            Self::CeaseError(_) => BgpErrorNotificationCode::Cease,
        }
    }

    /// The raw sub-code octet as it appears on the wire.
    pub fn sub_code(&self) -> u8 {
        match self {
            Self::MessageHeaderError(value) => value.sub_code(),
            Self::OpenMessageError(value) => value.sub_code(),
            Self::UpdateMessageError(value) => value.sub_code(),
            Self::HoldTimerExpiredError(value) => value.sub_code(),
            Self::FiniteStateMachineError(value) => value.sub_code(),
            Self::CeaseError(value) => value.sub_code(),
        }
    }

    /// Construct a notification from the raw code/sub-code octets, as used
    /// by the outbound message builders. Undefined codes are rejected rather
    /// than carried.
    pub fn from_codes(
        code: u8,
        sub_code: u8,
        value: Vec<u8>,
    ) -> Result<Self, InvalidBgpNotificationCodes> {
        let code = BgpErrorNotificationCode::try_from(code)?;
        let msg = match code {
            BgpErrorNotificationCode::MessageHeaderError => {
                Self::MessageHeaderError(match MessageHeaderErrorSubCode::try_from(sub_code)? {
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
                })
            }
            BgpErrorNotificationCode::OpenMessageError => {
                Self::OpenMessageError(match OpenMessageErrorSubCode::try_from(sub_code)? {
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
                })
            }
            BgpErrorNotificationCode::UpdateMessageError => {
                Self::UpdateMessageError(match UpdateMessageErrorSubCode::try_from(sub_code)? {
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
                })
            }
            BgpErrorNotificationCode::HoldTimerExpired => {
                Self::HoldTimerExpiredError(HoldTimerExpiredError::Unspecific { sub_code, value })
            }
            BgpErrorNotificationCode::FiniteStateMachineError => Self::FiniteStateMachineError(
                match FiniteStateMachineErrorSubCode::try_from(sub_code)? {
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
                },
            ),
            BgpErrorNotificationCode::Cease => {
                Self::CeaseError(match CeaseErrorSubCode::try_from(sub_code)? {
                    CeaseErrorSubCode::MaximumNumberOfPrefixesReached => {
                        CeaseError::MaximumNumberOfPrefixesReached { value }
                    }
                    CeaseErrorSubCode::AdministrativeShutdown => {
                        CeaseError::AdministrativeShutdown { value }
                    }
                    CeaseErrorSubCode::PeerDeConfigured => CeaseError::PeerDeConfigured { value },
                    CeaseErrorSubCode::AdministrativeReset => {
                        CeaseError::AdministrativeReset { value }
                    }
                    CeaseErrorSubCode::ConnectionRejected => CeaseError::ConnectionRejected { value },
                    CeaseErrorSubCode::OtherConfigurationChange => {
                        CeaseError::OtherConfigurationChange { value }
                    }
                    CeaseErrorSubCode::ConnectionCollisionResolution => {
                        CeaseError::ConnectionCollisionResolution { value }
                    }
                    CeaseErrorSubCode::OutOfResources => CeaseError::OutOfResources { value },
                    CeaseErrorSubCode::HardReset => CeaseError::HardReset { value },
                })
            }
        };
        Ok(msg)
    }
}

/// Codes rejected by [`BgpNotificationMessage::from_codes`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum InvalidBgpNotificationCodes {
    UndefinedErrorCode(UndefinedBgpErrorNotificationCode),
    UndefinedMessageHeaderSubCode(UndefinedMessageHeaderErrorSubCode),
    UndefinedOpenMessageSubCode(UndefinedOpenMessageErrorSubCode),
    UndefinedUpdateMessageSubCode(UndefinedUpdateMessageErrorSubCode),
    UndefinedFiniteStateMachineSubCode(UndefinedFiniteStateMachineErrorSubCode),
    UndefinedCeaseSubCode(UndefinedCeaseErrorSubCode),
}

impl From<UndefinedBgpErrorNotificationCode> for InvalidBgpNotificationCodes {
    fn from(value: UndefinedBgpErrorNotificationCode) -> Self {
        Self::UndefinedErrorCode(value)
    }
}

impl From<UndefinedMessageHeaderErrorSubCode> for InvalidBgpNotificationCodes {
    fn from(value: UndefinedMessageHeaderErrorSubCode) -> Self {
        Self::UndefinedMessageHeaderSubCode(value)
    }
}

impl From<UndefinedOpenMessageErrorSubCode> for InvalidBgpNotificationCodes {
    fn from(value: UndefinedOpenMessageErrorSubCode) -> Self {
        Self::UndefinedOpenMessageSubCode(value)
    }
}

impl From<UndefinedUpdateMessageErrorSubCode> for InvalidBgpNotificationCodes {
    fn from(value: UndefinedUpdateMessageErrorSubCode) -> Self {
        Self::UndefinedUpdateMessageSubCode(value)
    }
}

impl From<UndefinedFiniteStateMachineErrorSubCode> for InvalidBgpNotificationCodes {
    fn from(value: UndefinedFiniteStateMachineErrorSubCode) -> Self {
        Self::UndefinedFiniteStateMachineSubCode(value)
    }
}

impl From<UndefinedCeaseErrorSubCode> for InvalidBgpNotificationCodes {
    fn from(value: UndefinedCeaseErrorSubCode) -> Self {
        Self::UndefinedCeaseSubCode(value)
    }
}

/// See [`crate::iana::MessageHeaderErrorSubCode`] for the sub-code registry
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum MessageHeaderError {
    Unspecific { value: Vec<u8> },
    ConnectionNotSynchronized { value: Vec<u8> },
    BadMessageLength { value: Vec<u8> },
    BadMessageType { value: Vec<u8> },
}

impl MessageHeaderError {
    pub fn sub_code(&self) -> u8 {
        let sub_code = match self {
            Self::Unspecific { .. } => MessageHeaderErrorSubCode::Unspecific,
            Self::ConnectionNotSynchronized { .. } => {
                MessageHeaderErrorSubCode::ConnectionNotSynchronized
            }
            Self::BadMessageLength { .. } => MessageHeaderErrorSubCode::BadMessageLength,
            Self::BadMessageType { .. } => MessageHeaderErrorSubCode::BadMessageType,
        };
        sub_code.into()
    }

    pub fn value(&self) -> &Vec<u8> {
        match self {
            Self::Unspecific { value } => value,
            Self::ConnectionNotSynchronized { value } => value,
            Self::BadMessageLength { value } => value,
            Self::BadMessageType { value } => value,
        }
    }
}

/// See [`crate::iana::OpenMessageErrorSubCode`] for the sub-code registry
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum OpenMessageError {
    Unspecific { value: Vec<u8> },
    UnsupportedVersionNumber { value: Vec<u8> },
    BadPeerAs { value: Vec<u8> },
    BadBgpIdentifier { value: Vec<u8> },
    UnsupportedOptionalParameter { value: Vec<u8> },
    UnacceptableHoldTime { value: Vec<u8> },
    UnsupportedCapability { value: Vec<u8> },
}

impl OpenMessageError {
    pub fn sub_code(&self) -> u8 {
        let sub_code = match self {
            Self::Unspecific { .. } => OpenMessageErrorSubCode::Unspecific,
            Self::UnsupportedVersionNumber { .. } => {
                OpenMessageErrorSubCode::UnsupportedVersionNumber
            }
            Self::BadPeerAs { .. } => OpenMessageErrorSubCode::BadPeerAs,
            Self::BadBgpIdentifier { .. } => OpenMessageErrorSubCode::BadBgpIdentifier,
            Self::UnsupportedOptionalParameter { .. } => {
                OpenMessageErrorSubCode::UnsupportedOptionalParameter
            }
            Self::UnacceptableHoldTime { .. } => OpenMessageErrorSubCode::UnacceptableHoldTime,
            Self::UnsupportedCapability { .. } => OpenMessageErrorSubCode::UnsupportedCapability,
        };
        sub_code.into()
    }

    pub fn value(&self) -> &Vec<u8> {
        match self {
            Self::Unspecific { value } => value,
            Self::UnsupportedVersionNumber { value } => value,
            Self::BadPeerAs { value } => value,
            Self::BadBgpIdentifier { value } => value,
            Self::UnsupportedOptionalParameter { value } => value,
            Self::UnacceptableHoldTime { value } => value,
            Self::UnsupportedCapability { value } => value,
        }
    }
}

/// See [`crate::iana::UpdateMessageErrorSubCode`] for the sub-code registry
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum UpdateMessageError {
    Unspecific { value: Vec<u8> },
    MalformedAttributeList { value: Vec<u8> },
    UnrecognizedWellKnownAttribute { value: Vec<u8> },
    MissingWellKnownAttribute { value: Vec<u8> },
    AttributeFlagsError { value: Vec<u8> },
    AttributeLengthError { value: Vec<u8> },
    InvalidOriginAttribute { value: Vec<u8> },
    InvalidNextHopAttribute { value: Vec<u8> },
    OptionalAttributeError { value: Vec<u8> },
    InvalidNetworkField { value: Vec<u8> },
    MalformedAsPath { value: Vec<u8> },
}

impl UpdateMessageError {
    pub fn sub_code(&self) -> u8 {
        let sub_code = match self {
            Self::Unspecific { .. } => UpdateMessageErrorSubCode::Unspecific,
            Self::MalformedAttributeList { .. } => {
                UpdateMessageErrorSubCode::MalformedAttributeList
            }
            Self::UnrecognizedWellKnownAttribute { .. } => {
                UpdateMessageErrorSubCode::UnrecognizedWellKnownAttribute
            }
            Self::MissingWellKnownAttribute { .. } => {
                UpdateMessageErrorSubCode::MissingWellKnownAttribute
            }
            Self::AttributeFlagsError { .. } => UpdateMessageErrorSubCode::AttributeFlagsError,
            Self::AttributeLengthError { .. } => UpdateMessageErrorSubCode::AttributeLengthError,
            Self::InvalidOriginAttribute { .. } => {
                UpdateMessageErrorSubCode::InvalidOriginAttribute
            }
            Self::InvalidNextHopAttribute { .. } => {
                UpdateMessageErrorSubCode::InvalidNextHopAttribute
            }
            Self::OptionalAttributeError { .. } => {
                UpdateMessageErrorSubCode::OptionalAttributeError
            }
            Self::InvalidNetworkField { .. } => UpdateMessageErrorSubCode::InvalidNetworkField,
            Self::MalformedAsPath { .. } => UpdateMessageErrorSubCode::MalformedAsPath,
        };
        sub_code.into()
    }

    pub fn value(&self) -> &Vec<u8> {
        match self {
            Self::Unspecific { value } => value,
            Self::MalformedAttributeList { value } => value,
            Self::UnrecognizedWellKnownAttribute { value } => value,
            Self::MissingWellKnownAttribute { value } => value,
            Self::AttributeFlagsError { value } => value,
            Self::AttributeLengthError { value } => value,
            Self::InvalidOriginAttribute { value } => value,
            Self::InvalidNextHopAttribute { value } => value,
            Self::OptionalAttributeError { value } => value,
            Self::InvalidNetworkField { value } => value,
            Self::MalformedAsPath { value } => value,
        }
    }
}

/// No sub-code registry exists for hold-timer-expired errors; the sub-code
/// octet is carried raw.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum HoldTimerExpiredError {
    Unspecific { sub_code: u8, value: Vec<u8> },
}

impl HoldTimerExpiredError {
    pub fn sub_code(&self) -> u8 {
        match self {
            Self::Unspecific { sub_code, .. } => *sub_code,
        }
    }

    pub fn value(&self) -> &Vec<u8> {
        match self {
            Self::Unspecific { value, .. } => value,
        }
    }
}

/// See [`crate::iana::FiniteStateMachineErrorSubCode`] for the sub-code
/// registry
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum FiniteStateMachineError {
    Unspecific { value: Vec<u8> },
    ReceiveUnexpectedMessageInOpenSentState { value: Vec<u8> },
    ReceiveUnexpectedMessageInOpenConfirmState { value: Vec<u8> },
    ReceiveUnexpectedMessageInEstablishedState { value: Vec<u8> },
}

impl FiniteStateMachineError {
    pub fn sub_code(&self) -> u8 {
        let sub_code = match self {
            Self::Unspecific { .. } => FiniteStateMachineErrorSubCode::UnspecifiedError,
            Self::ReceiveUnexpectedMessageInOpenSentState { .. } => {
                FiniteStateMachineErrorSubCode::ReceiveUnexpectedMessageInOpenSentState
            }
            Self::ReceiveUnexpectedMessageInOpenConfirmState { .. } => {
                FiniteStateMachineErrorSubCode::ReceiveUnexpectedMessageInOpenConfirmState
            }
            Self::ReceiveUnexpectedMessageInEstablishedState { .. } => {
                FiniteStateMachineErrorSubCode::ReceiveUnexpectedMessageInEstablishedState
            }
        };
        sub_code.into()
    }

    pub fn value(&self) -> &Vec<u8> {
        match self {
            Self::Unspecific { value } => value,
            Self::ReceiveUnexpectedMessageInOpenSentState { value } => value,
            Self::ReceiveUnexpectedMessageInOpenConfirmState { value } => value,
            Self::ReceiveUnexpectedMessageInEstablishedState { value } => value,
        }
    }
}

/// See [`crate::iana::CeaseErrorSubCode`] for the sub-code registry
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum CeaseError {
    MaximumNumberOfPrefixesReached { value: Vec<u8> },
    AdministrativeShutdown { value: Vec<u8> },
    PeerDeConfigured { value: Vec<u8> },
    AdministrativeReset { value: Vec<u8> },
    ConnectionRejected { value: Vec<u8> },
    OtherConfigurationChange { value: Vec<u8> },
    ConnectionCollisionResolution { value: Vec<u8> },
    OutOfResources { value: Vec<u8> },
    HardReset { value: Vec<u8> },
}

impl CeaseError {
    pub fn sub_code(&self) -> u8 {
        let sub_code = match self {
            Self::MaximumNumberOfPrefixesReached { .. } => {
                CeaseErrorSubCode::MaximumNumberOfPrefixesReached
            }
            Self::AdministrativeShutdown { .. } => CeaseErrorSubCode::AdministrativeShutdown,
            Self::PeerDeConfigured { .. } => CeaseErrorSubCode::PeerDeConfigured,
            Self::AdministrativeReset { .. } => CeaseErrorSubCode::AdministrativeReset,
            Self::ConnectionRejected { .. } => CeaseErrorSubCode::ConnectionRejected,
            Self::OtherConfigurationChange { .. } => CeaseErrorSubCode::OtherConfigurationChange,
            Self::ConnectionCollisionResolution { .. } => {
                CeaseErrorSubCode::ConnectionCollisionResolution
            }
            Self::OutOfResources { .. } => CeaseErrorSubCode::OutOfResources,
            Self::HardReset { .. } => CeaseErrorSubCode::HardReset,
        };
        sub_code.into()
    }

    pub fn value(&self) -> &Vec<u8> {
        match self {
            Self::MaximumNumberOfPrefixesReached { value } => value,
            Self::AdministrativeShutdown { value } => value,
            Self::PeerDeConfigured { value } => value,
            Self::AdministrativeReset { value } => value,
            Self::ConnectionRejected { value } => value,
            Self::OtherConfigurationChange { value } => value,
            Self::ConnectionCollisionResolution { value } => value,
            Self::OutOfResources { value } => value,
            Self::HardReset { value } => value,
        }
    }
}
