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

//! Builders for assembling outbound BGP messages programmatically.
//!
//! Messages decoded from the wire are constructed directly by the parsers in
//! [`crate::wire`]; these builders exist for the session layer to put
//! together outbound messages field by field. Each builder is a plain
//! aggregate of optional fields and `build()` checks the mandatory ones
//! before freezing the message.

use crate::{
    capabilities::BgpCapability,
    iana::BgpVersion,
    notification::{BgpNotificationMessage, InvalidBgpNotificationCodes},
    open::{BgpOpenMessage, BgpOpenMessageParameter, DEFAULT_HOLD_TIME},
    path_attribute::PathAttribute,
    update::BgpUpdateMessage,
    BgpMessage,
};
use ipnet::Ipv4Net;
use std::net::Ipv4Addr;

/// Errors raised by `build()` when a mandatory field was never set or a
/// numeric code is outside its registry.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum BgpMessageBuildError {
    MissingRequiredField(&'static str),
    InvalidNotificationCodes(InvalidBgpNotificationCodes),
}

impl From<InvalidBgpNotificationCodes> for BgpMessageBuildError {
    fn from(value: InvalidBgpNotificationCodes) -> Self {
        Self::InvalidNotificationCodes(value)
    }
}

/// Entry point for constructing outbound messages for a given protocol
/// version. Only BGP-4 exists today; the factory keeps call sites stable if
/// another version ever needs to coexist.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct BgpFactory {
    version: BgpVersion,
}

impl BgpFactory {
    pub const fn new() -> Self {
        Self {
            version: BgpVersion::Version4,
        }
    }

    /// The protocol version this factory instance targets.
    pub const fn version(&self) -> BgpVersion {
        self.version
    }

    pub fn open_message_builder(&self) -> OpenMessageBuilder {
        OpenMessageBuilder::default()
    }

    pub fn keepalive_message_builder(&self) -> KeepaliveMessageBuilder {
        KeepaliveMessageBuilder
    }

    pub fn notification_message_builder(&self) -> NotificationMessageBuilder {
        NotificationMessageBuilder::default()
    }

    pub fn update_message_builder(&self) -> UpdateMessageBuilder {
        UpdateMessageBuilder::default()
    }
}

impl Default for BgpFactory {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`crate::open::BgpOpenMessage`]. AS number and BGP
/// identifier are mandatory; the hold time defaults to
/// [`DEFAULT_HOLD_TIME`] and the capability list to empty.
#[derive(Debug, Clone, Default)]
pub struct OpenMessageBuilder {
    my_as: Option<u16>,
    hold_time: Option<u16>,
    bgp_id: Option<Ipv4Addr>,
    capabilities: Vec<BgpCapability>,
}

impl OpenMessageBuilder {
    pub fn my_as(mut self, my_as: u16) -> Self {
        self.my_as = Some(my_as);
        self
    }

    pub fn hold_time(mut self, hold_time: u16) -> Self {
        self.hold_time = Some(hold_time);
        self
    }

    pub fn bgp_id(mut self, bgp_id: Ipv4Addr) -> Self {
        self.bgp_id = Some(bgp_id);
        self
    }

    pub fn capability(mut self, capability: BgpCapability) -> Self {
        self.capabilities.push(capability);
        self
    }

    pub fn capabilities(mut self, capabilities: Vec<BgpCapability>) -> Self {
        self.capabilities = capabilities;
        self
    }

    pub fn build(self) -> Result<BgpMessage, BgpMessageBuildError> {
        let my_as = self
            .my_as
            .ok_or(BgpMessageBuildError::MissingRequiredField("my_as"))?;
        let bgp_id = self
            .bgp_id
            .ok_or(BgpMessageBuildError::MissingRequiredField("bgp_id"))?;
        let hold_time = self.hold_time.unwrap_or(DEFAULT_HOLD_TIME);
        let params = if self.capabilities.is_empty() {
            Vec::new()
        } else {
            vec![BgpOpenMessageParameter::Capabilities(self.capabilities)]
        };
        Ok(BgpMessage::Open(BgpOpenMessage::new(
            my_as, hold_time, bgp_id, params,
        )))
    }
}

/// Builder for keepalive messages. Keepalives carry no payload, so
/// `build()` cannot fail; the `Result` keeps the builder surface uniform.
#[derive(Debug, Copy, Clone, Default)]
pub struct KeepaliveMessageBuilder;

impl KeepaliveMessageBuilder {
    pub fn build(self) -> Result<BgpMessage, BgpMessageBuildError> {
        Ok(BgpMessage::KeepAlive)
    }
}

/// Builder for [`crate::notification::BgpNotificationMessage`] from raw
/// code octets. Error code and sub-code are mandatory; the data payload
/// defaults to empty.
#[derive(Debug, Clone, Default)]
pub struct NotificationMessageBuilder {
    error_code: Option<u8>,
    error_sub_code: Option<u8>,
    data: Vec<u8>,
}

impl NotificationMessageBuilder {
    pub fn error_code(mut self, error_code: u8) -> Self {
        self.error_code = Some(error_code);
        self
    }

    pub fn error_sub_code(mut self, error_sub_code: u8) -> Self {
        self.error_sub_code = Some(error_sub_code);
        self
    }

    pub fn data(mut self, data: Vec<u8>) -> Self {
        self.data = data;
        self
    }

    pub fn build(self) -> Result<BgpMessage, BgpMessageBuildError> {
        let code = self
            .error_code
            .ok_or(BgpMessageBuildError::MissingRequiredField("error_code"))?;
        let sub_code = self
            .error_sub_code
            .ok_or(BgpMessageBuildError::MissingRequiredField("error_sub_code"))?;
        let msg = BgpNotificationMessage::from_codes(code, sub_code, self.data)?;
        Ok(BgpMessage::Notification(msg))
    }
}

/// Builder for [`crate::update::BgpUpdateMessage`]. All three sections are
/// mandatory but may be empty lists; "empty but present" vs. "never set" is
/// only observable here, not in the wire format.
#[derive(Debug, Clone, Default)]
pub struct UpdateMessageBuilder {
    withdrawn_routes: Option<Vec<Ipv4Net>>,
    path_attributes: Option<Vec<PathAttribute>>,
    nlri: Option<Vec<Ipv4Net>>,
}

impl UpdateMessageBuilder {
    pub fn withdrawn_routes(mut self, withdrawn_routes: Vec<Ipv4Net>) -> Self {
        self.withdrawn_routes = Some(withdrawn_routes);
        self
    }

    pub fn path_attributes(mut self, path_attributes: Vec<PathAttribute>) -> Self {
        self.path_attributes = Some(path_attributes);
        self
    }

    pub fn nlri(mut self, nlri: Vec<Ipv4Net>) -> Self {
        self.nlri = Some(nlri);
        self
    }

    pub fn build(self) -> Result<BgpMessage, BgpMessageBuildError> {
        let withdrawn_routes = self.withdrawn_routes.ok_or(
            BgpMessageBuildError::MissingRequiredField("withdrawn_routes"),
        )?;
        let path_attributes = self
            .path_attributes
            .ok_or(BgpMessageBuildError::MissingRequiredField("path_attributes"))?;
        let nlri = self
            .nlri
            .ok_or(BgpMessageBuildError::MissingRequiredField("nlri"))?;
        Ok(BgpMessage::Update(BgpUpdateMessage::new(
            withdrawn_routes,
            path_attributes,
            nlri,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        capabilities::MultiProtocolExtensionsCapability,
        iana::UndefinedBgpErrorNotificationCode, notification::OpenMessageError,
    };

    #[test]
    fn test_open_builder_mandatory_fields() {
        let factory = BgpFactory::new();
        let missing_as = factory
            .open_message_builder()
            .bgp_id(Ipv4Addr::new(10, 0, 0, 1))
            .build();
        assert_eq!(
            missing_as,
            Err(BgpMessageBuildError::MissingRequiredField("my_as"))
        );

        let missing_id = factory.open_message_builder().my_as(64512).build();
        assert_eq!(
            missing_id,
            Err(BgpMessageBuildError::MissingRequiredField("bgp_id"))
        );
    }

    #[test]
    fn test_open_builder_defaults() {
        let built = BgpFactory::new()
            .open_message_builder()
            .my_as(64512)
            .bgp_id(Ipv4Addr::new(10, 0, 0, 1))
            .capability(BgpCapability::MultiProtocolExtensions(
                MultiProtocolExtensionsCapability::new(1, 1),
            ))
            .build()
            .unwrap();
        let BgpMessage::Open(open) = built else {
            panic!("expected an open message, got {built:?}");
        };
        assert_eq!(open.hold_time(), DEFAULT_HOLD_TIME);
        assert_eq!(open.my_as(), 64512);
        assert_eq!(open.capabilities().count(), 1);
    }

    #[test]
    fn test_keepalive_builder() {
        let built = BgpFactory::new().keepalive_message_builder().build();
        assert_eq!(built, Ok(BgpMessage::KeepAlive));
    }

    #[test]
    fn test_notification_builder() {
        let built = BgpFactory::new()
            .notification_message_builder()
            .error_code(2)
            .error_sub_code(2)
            .data(vec![0xfe, 0xb0])
            .build();
        assert_eq!(
            built,
            Ok(BgpMessage::Notification(
                BgpNotificationMessage::OpenMessageError(OpenMessageError::BadPeerAs {
                    value: vec![0xfe, 0xb0],
                })
            ))
        );

        let missing_sub_code = BgpFactory::new()
            .notification_message_builder()
            .error_code(2)
            .build();
        assert_eq!(
            missing_sub_code,
            Err(BgpMessageBuildError::MissingRequiredField("error_sub_code"))
        );

        let undefined_code = BgpFactory::new()
            .notification_message_builder()
            .error_code(200)
            .error_sub_code(0)
            .build();
        assert_eq!(
            undefined_code,
            Err(BgpMessageBuildError::InvalidNotificationCodes(
                InvalidBgpNotificationCodes::UndefinedErrorCode(
                    UndefinedBgpErrorNotificationCode(200)
                )
            ))
        );
    }

    #[test]
    fn test_update_builder_requires_all_sections() {
        let missing_nlri = BgpFactory::new()
            .update_message_builder()
            .withdrawn_routes(vec![])
            .path_attributes(vec![])
            .build();
        assert_eq!(
            missing_nlri,
            Err(BgpMessageBuildError::MissingRequiredField("nlri"))
        );

        let empty_but_present = BgpFactory::new()
            .update_message_builder()
            .withdrawn_routes(vec![])
            .path_attributes(vec![])
            .nlri(vec![])
            .build();
        assert_eq!(
            empty_but_present,
            Ok(BgpMessage::Update(BgpUpdateMessage::new(
                vec![],
                vec![],
                vec![]
            )))
        );
    }
}
