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

//! BGP numeric code points as registered at IANA [BGP Parameters](https://www.iana.org/assignments/bgp-parameters/bgp-parameters.xhtml)

use serde::{Deserialize, Serialize};
use strum_macros::{Display, FromRepr};

/// BGP version carried in the open message. Only version 4 is defined.
#[repr(u8)]
#[derive(Display, FromRepr, Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum BgpVersion {
    Version4 = 4,
}

impl From<BgpVersion> for u8 {
    fn from(value: BgpVersion) -> Self {
        value as u8
    }
}

/// BGP Message types as registered in IANA [BGP Message Types](https://www.iana.org/assignments/bgp-parameters/bgp-parameters.xhtml#bgp-parameters-1)
#[repr(u8)]
#[derive(Display, FromRepr, Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum BgpMessageType {
    Open = 1,
    Update = 2,
    Notification = 3,
    KeepAlive = 4,
}

/// BGP Message type is not one of [`BgpMessageType`], the carried value is
/// the undefined code.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct UndefinedBgpMessageType(pub u8);

impl From<BgpMessageType> for u8 {
    fn from(value: BgpMessageType) -> Self {
        value as u8
    }
}

impl TryFrom<u8> for BgpMessageType {
    type Error = UndefinedBgpMessageType;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match Self::from_repr(value) {
            Some(val) => Ok(val),
            None => Err(UndefinedBgpMessageType(value)),
        }
    }
}

/// [BGP OPEN Optional Parameter Types](https://www.iana.org/assignments/bgp-parameters/bgp-parameters.xhtml#bgp-parameters-11)
#[repr(u8)]
#[derive(Display, FromRepr, Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum BgpOpenMessageParameterType {
    /// Capabilities Advertisement as defined in [RFC5492](https://datatracker.ietf.org/doc/html/rfc5492)
    Capability = 2,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct UndefinedBgpOpenMessageParameterType(pub u8);

impl From<BgpOpenMessageParameterType> for u8 {
    fn from(value: BgpOpenMessageParameterType) -> Self {
        value as u8
    }
}

impl TryFrom<u8> for BgpOpenMessageParameterType {
    type Error = UndefinedBgpOpenMessageParameterType;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match Self::from_repr(value) {
            Some(val) => Ok(val),
            None => Err(UndefinedBgpOpenMessageParameterType(value)),
        }
    }
}

/// [BGP Capability Codes](https://www.iana.org/assignments/capability-codes/capability-codes.xhtml)
/// modeled by this crate. Codes outside this registry still round-trip
/// through [`crate::capabilities::UnrecognizedCapability`].
#[repr(u8)]
#[derive(Display, FromRepr, Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum BgpCapabilityCode {
    /// Defined in [RFC4760](https://datatracker.ietf.org/doc/html/rfc4760)
    MultiProtocolExtensions = 1,

    /// Defined in [RFC2918](https://datatracker.ietf.org/doc/html/rfc2918)
    RouteRefreshCapability = 2,

    /// Defined in [RFC6793](https://datatracker.ietf.org/doc/html/rfc6793)
    FourOctetAs = 65,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct UndefinedBgpCapabilityCode(pub u8);

impl From<BgpCapabilityCode> for u8 {
    fn from(value: BgpCapabilityCode) -> Self {
        value as u8
    }
}

impl TryFrom<u8> for BgpCapabilityCode {
    type Error = UndefinedBgpCapabilityCode;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match Self::from_repr(value) {
            Some(val) => Ok(val),
            None => Err(UndefinedBgpCapabilityCode(value)),
        }
    }
}

/// [BGP Path Attributes](https://www.iana.org/assignments/bgp-parameters/bgp-parameters.xhtml#bgp-parameters-2)
#[repr(u8)]
#[derive(Display, FromRepr, Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum PathAttributeType {
    /// [RFC4271](https://datatracker.ietf.org/doc/html/rfc4271)
    Origin = 1,

    /// [RFC4271](https://datatracker.ietf.org/doc/html/rfc4271)
    AsPath = 2,

    /// [RFC4271](https://datatracker.ietf.org/doc/html/rfc4271)
    NextHop = 3,

    /// [RFC4271](https://datatracker.ietf.org/doc/html/rfc4271)
    MultiExitDiscriminator = 4,

    /// [RFC4271](https://datatracker.ietf.org/doc/html/rfc4271)
    LocalPreference = 5,

    /// [RFC4271](https://datatracker.ietf.org/doc/html/rfc4271)
    AtomicAggregate = 6,

    /// [RFC4271](https://datatracker.ietf.org/doc/html/rfc4271)
    Aggregator = 7,

    /// [RFC6793](https://datatracker.ietf.org/doc/html/rfc6793)
    As4Path = 17,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct UndefinedPathAttributeType(pub u8);

impl From<PathAttributeType> for u8 {
    fn from(value: PathAttributeType) -> Self {
        value as u8
    }
}

impl TryFrom<u8> for PathAttributeType {
    type Error = UndefinedPathAttributeType;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match Self::from_repr(value) {
            Some(val) => Ok(val),
            None => Err(UndefinedPathAttributeType(value)),
        }
    }
}

/// [BGP Error (Notification) Codes](https://www.iana.org/assignments/bgp-parameters/bgp-parameters.xhtml#bgp-parameters-3)
#[repr(u8)]
#[derive(Display, FromRepr, Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum BgpErrorNotificationCode {
    /// [RFC4271](https://datatracker.ietf.org/doc/html/rfc4271)
    MessageHeaderError = 1,

    /// [RFC4271](https://datatracker.ietf.org/doc/html/rfc4271)
    OpenMessageError = 2,

    /// [RFC4271](https://datatracker.ietf.org/doc/html/rfc4271)
    UpdateMessageError = 3,

    /// [RFC4271](https://datatracker.ietf.org/doc/html/rfc4271)
    HoldTimerExpired = 4,

    /// [RFC4271](https://datatracker.ietf.org/doc/html/rfc4271)
    FiniteStateMachineError = 5,

    /// [RFC4486](https://datatracker.ietf.org/doc/html/rfc4486)
    Cease = 6,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct UndefinedBgpErrorNotificationCode(pub u8);

impl From<BgpErrorNotificationCode> for u8 {
    fn from(value: BgpErrorNotificationCode) -> Self {
        value as u8
    }
}

impl TryFrom<u8> for BgpErrorNotificationCode {
    type Error = UndefinedBgpErrorNotificationCode;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match Self::from_repr(value) {
            Some(val) => Ok(val),
            None => Err(UndefinedBgpErrorNotificationCode(value)),
        }
    }
}

/// Message Header Error sub-codes for [`BgpErrorNotificationCode::MessageHeaderError`] as defined by [RFC4271](https://datatracker.ietf.org/doc/html/rfc4271#section-4.5)
#[repr(u8)]
#[derive(Display, FromRepr, Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum MessageHeaderErrorSubCode {
    /// The Error Subcode is unspecific, defined by [RFC Errata 4493](https://www.rfc-editor.org/errata_search.php?eid=4493)
    Unspecific = 0,
    ConnectionNotSynchronized = 1,
    BadMessageLength = 2,
    BadMessageType = 3,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct UndefinedMessageHeaderErrorSubCode(pub u8);

impl From<MessageHeaderErrorSubCode> for u8 {
    fn from(value: MessageHeaderErrorSubCode) -> Self {
        value as u8
    }
}

impl TryFrom<u8> for MessageHeaderErrorSubCode {
    type Error = UndefinedMessageHeaderErrorSubCode;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match Self::from_repr(value) {
            Some(val) => Ok(val),
            None => Err(UndefinedMessageHeaderErrorSubCode(value)),
        }
    }
}

/// OPEN Message Error sub-codes for [`BgpErrorNotificationCode::OpenMessageError`] as defined by [RFC4271](https://datatracker.ietf.org/doc/html/rfc4271#section-4.5)
#[repr(u8)]
#[derive(Display, FromRepr, Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum OpenMessageErrorSubCode {
    /// The Error Subcode is unspecific, defined by [RFC Errata 4493](https://www.rfc-editor.org/errata_search.php?eid=4493)
    Unspecific = 0,
    UnsupportedVersionNumber = 1,
    BadPeerAs = 2,
    BadBgpIdentifier = 3,
    UnsupportedOptionalParameter = 4,
    UnacceptableHoldTime = 6,

    /// [RFC5492](https://datatracker.ietf.org/doc/html/rfc5492)
    UnsupportedCapability = 7,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct UndefinedOpenMessageErrorSubCode(pub u8);

impl From<OpenMessageErrorSubCode> for u8 {
    fn from(value: OpenMessageErrorSubCode) -> Self {
        value as u8
    }
}

impl TryFrom<u8> for OpenMessageErrorSubCode {
    type Error = UndefinedOpenMessageErrorSubCode;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match Self::from_repr(value) {
            Some(val) => Ok(val),
            None => Err(UndefinedOpenMessageErrorSubCode(value)),
        }
    }
}

/// UPDATE Message Error sub-codes for [`BgpErrorNotificationCode::UpdateMessageError`] as defined by [RFC4271](https://datatracker.ietf.org/doc/html/rfc4271#section-4.5)
#[repr(u8)]
#[derive(Display, FromRepr, Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum UpdateMessageErrorSubCode {
    /// The Error Subcode is unspecific, defined by [RFC Errata 4493](https://www.rfc-editor.org/errata_search.php?eid=4493)
    Unspecific = 0,
    MalformedAttributeList = 1,
    UnrecognizedWellKnownAttribute = 2,
    MissingWellKnownAttribute = 3,
    AttributeFlagsError = 4,
    AttributeLengthError = 5,
    InvalidOriginAttribute = 6,
    InvalidNextHopAttribute = 8,
    OptionalAttributeError = 9,
    InvalidNetworkField = 10,
    MalformedAsPath = 11,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct UndefinedUpdateMessageErrorSubCode(pub u8);

impl From<UpdateMessageErrorSubCode> for u8 {
    fn from(value: UpdateMessageErrorSubCode) -> Self {
        value as u8
    }
}

impl TryFrom<u8> for UpdateMessageErrorSubCode {
    type Error = UndefinedUpdateMessageErrorSubCode;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match Self::from_repr(value) {
            Some(val) => Ok(val),
            None => Err(UndefinedUpdateMessageErrorSubCode(value)),
        }
    }
}

/// BGP Finite State Machine Error sub-codes as defined by [RFC6608](https://datatracker.ietf.org/doc/html/rfc6608)
#[repr(u8)]
#[derive(Display, FromRepr, Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum FiniteStateMachineErrorSubCode {
    UnspecifiedError = 0,
    ReceiveUnexpectedMessageInOpenSentState = 1,
    ReceiveUnexpectedMessageInOpenConfirmState = 2,
    ReceiveUnexpectedMessageInEstablishedState = 3,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct UndefinedFiniteStateMachineErrorSubCode(pub u8);

impl From<FiniteStateMachineErrorSubCode> for u8 {
    fn from(value: FiniteStateMachineErrorSubCode) -> Self {
        value as u8
    }
}

impl TryFrom<u8> for FiniteStateMachineErrorSubCode {
    type Error = UndefinedFiniteStateMachineErrorSubCode;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match Self::from_repr(value) {
            Some(val) => Ok(val),
            None => Err(UndefinedFiniteStateMachineErrorSubCode(value)),
        }
    }
}

/// BGP Cease NOTIFICATION message sub-codes as defined by [RFC4486](https://datatracker.ietf.org/doc/html/rfc4486) and [RFC8538](https://datatracker.ietf.org/doc/html/rfc8538)
#[repr(u8)]
#[derive(Display, FromRepr, Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum CeaseErrorSubCode {
    MaximumNumberOfPrefixesReached = 1,
    AdministrativeShutdown = 2,
    PeerDeConfigured = 3,
    AdministrativeReset = 4,
    ConnectionRejected = 5,
    OtherConfigurationChange = 6,
    ConnectionCollisionResolution = 7,
    OutOfResources = 8,
    HardReset = 9,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct UndefinedCeaseErrorSubCode(pub u8);

impl From<CeaseErrorSubCode> for u8 {
    fn from(value: CeaseErrorSubCode) -> Self {
        value as u8
    }
}

impl TryFrom<u8> for CeaseErrorSubCode {
    type Error = UndefinedCeaseErrorSubCode;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match Self::from_repr(value) {
            Some(val) => Ok(val),
            None => Err(UndefinedCeaseErrorSubCode(value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bgp_message_type() {
        let undefined_code = 255;
        let open_code = 1;
        let open = BgpMessageType::try_from(open_code);
        let undefined = BgpMessageType::try_from(undefined_code);
        let open_u8: u8 = BgpMessageType::Open.into();
        assert_eq!(open, Ok(BgpMessageType::Open));
        assert_eq!(open_u8, open_code);
        assert_eq!(undefined, Err(UndefinedBgpMessageType(undefined_code)));
    }

    #[test]
    fn test_bgp_capability_code() {
        let undefined_code = 200;
        let mp_code = 1;
        let mp = BgpCapabilityCode::try_from(mp_code);
        let undefined = BgpCapabilityCode::try_from(undefined_code);
        let mp_u8: u8 = BgpCapabilityCode::MultiProtocolExtensions.into();
        assert_eq!(mp, Ok(BgpCapabilityCode::MultiProtocolExtensions));
        assert_eq!(mp_u8, mp_code);
        assert_eq!(undefined, Err(UndefinedBgpCapabilityCode(undefined_code)));
    }

    #[test]
    fn test_bgp_error_notification_code() {
        let undefined_code = 0;
        let cease = BgpErrorNotificationCode::try_from(6);
        let undefined = BgpErrorNotificationCode::try_from(undefined_code);
        assert_eq!(cease, Ok(BgpErrorNotificationCode::Cease));
        assert_eq!(
            undefined,
            Err(UndefinedBgpErrorNotificationCode(undefined_code))
        );
    }

    #[test]
    fn test_path_attribute_type() {
        let undefined_code = 100;
        let origin = PathAttributeType::try_from(1);
        let undefined = PathAttributeType::try_from(undefined_code);
        assert_eq!(origin, Ok(PathAttributeType::Origin));
        assert_eq!(undefined, Err(UndefinedPathAttributeType(undefined_code)));
    }
}
