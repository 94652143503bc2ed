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

use crate::{
    iana::UndefinedBgpErrorNotificationCode,
    notification::{BgpNotificationMessage, CeaseError, HoldTimerExpiredError, OpenMessageError},
    wire::{
        deserializer::{
            notification::BgpNotificationMessageParsingError, BgpMessageParsingError,
            LocatedBgpMessageParsingError,
        },
        serializer::BgpMessageWritingError,
        tests::BGP_MARKER,
    },
    BgpMessage,
};
use routewire_parse_utils::{
    test_helpers::{combine, test_parse_error, test_parsed_completely, test_write},
    Span,
};

#[test]
fn test_notification_with_data() -> Result<(), BgpMessageWritingError> {
    // Error code 2 (open message error), sub-code 2 (bad peer AS), two data
    // octets
    let good_wire = combine(vec![
        BGP_MARKER,
        &[0x00, 0x17, 0x03, 0x02, 0x02, 0xfe, 0xb0],
    ]);

    let good = BgpMessage::Notification(BgpNotificationMessage::OpenMessageError(
        OpenMessageError::BadPeerAs {
            value: vec![0xfe, 0xb0],
        },
    ));

    test_parsed_completely(&good_wire[..], &good);
    test_write(&good, &good_wire[..])?;
    Ok(())
}

#[test]
fn test_notification_hold_timer_expired() -> Result<(), BgpMessageWritingError> {
    let good_wire = combine(vec![
        BGP_MARKER,
        &[0x00, 0x17, 0x03, 0x04, 0x00, 0x01, 0x02],
    ]);

    let good = BgpMessage::Notification(BgpNotificationMessage::HoldTimerExpiredError(
        HoldTimerExpiredError::Unspecific {
            sub_code: 0,
            value: vec![0x01, 0x02],
        },
    ));

    test_parsed_completely(&good_wire[..], &good);
    test_write(&good, &good_wire[..])?;
    Ok(())
}

#[test]
fn test_notification_cease_without_data() -> Result<(), BgpMessageWritingError> {
    let good_wire = combine(vec![BGP_MARKER, &[0x00, 0x15, 0x03, 0x06, 0x02]]);

    let good = BgpMessage::Notification(BgpNotificationMessage::CeaseError(
        CeaseError::AdministrativeShutdown { value: vec![] },
    ));

    test_parsed_completely(&good_wire[..], &good);
    test_write(&good, &good_wire[..])?;
    Ok(())
}

#[test]
fn test_notification_undefined_error_code() {
    let bad_wire = combine(vec![BGP_MARKER, &[0x00, 0x15, 0x03, 0x00, 0x00]]);

    let expected = LocatedBgpMessageParsingError::new(
        unsafe { Span::new_from_raw_offset(19, &bad_wire[19..]) },
        BgpMessageParsingError::BgpNotificationMessageParsingError(
            BgpNotificationMessageParsingError::UndefinedBgpErrorNotificationCode(
                UndefinedBgpErrorNotificationCode(0),
            ),
        ),
    );
    test_parse_error::<BgpMessage, LocatedBgpMessageParsingError<'_>>(&bad_wire, &expected);
}

#[test]
fn test_notification_missing_sub_code() {
    // The buffer ends right after the error-code octet; the sub-code must
    // never be defaulted to zero
    let bad_wire = combine(vec![BGP_MARKER, &[0x00, 0x14, 0x03, 0x03]]);

    let expected = LocatedBgpMessageParsingError::new(
        unsafe { Span::new_from_raw_offset(16, &bad_wire[16..]) },
        BgpMessageParsingError::BadMessageLength(0x14),
    );
    test_parse_error::<BgpMessage, LocatedBgpMessageParsingError<'_>>(&bad_wire, &expected);
}
