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

//! Serializer for BGP Notification message

use byteorder::WriteBytesExt;
use std::io::Write;

use routewire_parse_utils::WritablePdu;
use routewire_serde_macros::WritingError;

use crate::notification::{
    BgpNotificationMessage, CeaseError, FiniteStateMachineError, HoldTimerExpiredError,
    MessageHeaderError, OpenMessageError, UpdateMessageError,
};

#[derive(WritingError, Eq, PartialEq, Clone, Debug)]
pub enum BgpNotificationMessageWritingError {
    StdIOError(#[from_std_io_error] String),
    MessageHeaderError(#[from] MessageHeaderErrorWritingError),
    OpenMessageError(#[from] OpenMessageErrorWritingError),
    UpdateMessageError(#[from] UpdateMessageErrorWritingError),
    HoldTimerExpiredError(#[from] HoldTimerExpiredErrorWritingError),
    FiniteStateMachineError(#[from] FiniteStateMachineErrorWritingError),
    CeaseError(#[from] CeaseErrorWritingError),
}

impl WritablePdu<BgpNotificationMessageWritingError> for BgpNotificationMessage {
    /// 1 octet for the error code; the sub-code octet is accounted for by
    /// the nested error value
    const BASE_LENGTH: usize = 1;

    fn len(&self) -> usize {
        let value_len = match self {
            Self::MessageHeaderError(value) => value.len(),
            Self::OpenMessageError(value) => value.len(),
            Self::UpdateMessageError(value) => value.len(),
            Self::HoldTimerExpiredError(value) => value.len(),
            Self::FiniteStateMachineError(value) => value.len(),
            Self::CeaseError(value) => value.len(),
        };
        Self::BASE_LENGTH + value_len
    }

    fn write<T: Write>(&self, writer: &mut T) -> Result<(), BgpNotificationMessageWritingError> {
        writer.write_u8(self.code().into())?;
        match self {
            Self::MessageHeaderError(value) => value.write(writer)?,
            Self::OpenMessageError(value) => value.write(writer)?,
            Self::UpdateMessageError(value) => value.write(writer)?,
            Self::HoldTimerExpiredError(value) => value.write(writer)?,
            Self::FiniteStateMachineError(value) => value.write(writer)?,
            Self::CeaseError(value) => value.write(writer)?,
        }
        Ok(())
    }
}

#[derive(WritingError, Eq, PartialEq, Clone, Debug)]
pub enum MessageHeaderErrorWritingError {
    StdIOError(#[from_std_io_error] String),
}

impl WritablePdu<MessageHeaderErrorWritingError> for MessageHeaderError {
    /// 1 octet for the sub-code
    const BASE_LENGTH: usize = 1;

    fn len(&self) -> usize {
        Self::BASE_LENGTH + self.value().len()
    }

    fn write<T: Write>(&self, writer: &mut T) -> Result<(), MessageHeaderErrorWritingError> {
        writer.write_u8(self.sub_code())?;
        writer.write_all(self.value())?;
        Ok(())
    }
}

#[derive(WritingError, Eq, PartialEq, Clone, Debug)]
pub enum OpenMessageErrorWritingError {
    StdIOError(#[from_std_io_error] String),
}

impl WritablePdu<OpenMessageErrorWritingError> for OpenMessageError {
    /// 1 octet for the sub-code
    const BASE_LENGTH: usize = 1;

    fn len(&self) -> usize {
        Self::BASE_LENGTH + self.value().len()
    }

    fn write<T: Write>(&self, writer: &mut T) -> Result<(), OpenMessageErrorWritingError> {
        writer.write_u8(self.sub_code())?;
        writer.write_all(self.value())?;
        Ok(())
    }
}

#[derive(WritingError, Eq, PartialEq, Clone, Debug)]
pub enum UpdateMessageErrorWritingError {
    StdIOError(#[from_std_io_error] String),
}

impl WritablePdu<UpdateMessageErrorWritingError> for UpdateMessageError {
    /// 1 octet for the sub-code
    const BASE_LENGTH: usize = 1;

    fn len(&self) -> usize {
        Self::BASE_LENGTH + self.value().len()
    }

    fn write<T: Write>(&self, writer: &mut T) -> Result<(), UpdateMessageErrorWritingError> {
        writer.write_u8(self.sub_code())?;
        writer.write_all(self.value())?;
        Ok(())
    }
}

#[derive(WritingError, Eq, PartialEq, Clone, Debug)]
pub enum HoldTimerExpiredErrorWritingError {
    StdIOError(#[from_std_io_error] String),
}

impl WritablePdu<HoldTimerExpiredErrorWritingError> for HoldTimerExpiredError {
    /// 1 octet for the sub-code
    const BASE_LENGTH: usize = 1;

    fn len(&self) -> usize {
        Self::BASE_LENGTH + self.value().len()
    }

    fn write<T: Write>(&self, writer: &mut T) -> Result<(), HoldTimerExpiredErrorWritingError> {
        writer.write_u8(self.sub_code())?;
        writer.write_all(self.value())?;
        Ok(())
    }
}

#[derive(WritingError, Eq, PartialEq, Clone, Debug)]
pub enum FiniteStateMachineErrorWritingError {
    StdIOError(#[from_std_io_error] String),
}

impl WritablePdu<FiniteStateMachineErrorWritingError> for FiniteStateMachineError {
    /// 1 octet for the sub-code
    const BASE_LENGTH: usize = 1;

    fn len(&self) -> usize {
        Self::BASE_LENGTH + self.value().len()
    }

    fn write<T: Write>(&self, writer: &mut T) -> Result<(), FiniteStateMachineErrorWritingError> {
        writer.write_u8(self.sub_code())?;
        writer.write_all(self.value())?;
        Ok(())
    }
}

#[derive(WritingError, Eq, PartialEq, Clone, Debug)]
pub enum CeaseErrorWritingError {
    StdIOError(#[from_std_io_error] String),
}

impl WritablePdu<CeaseErrorWritingError> for CeaseError {
    /// 1 octet for the sub-code
    const BASE_LENGTH: usize = 1;

    fn len(&self) -> usize {
        Self::BASE_LENGTH + self.value().len()
    }

    fn write<T: Write>(&self, writer: &mut T) -> Result<(), CeaseErrorWritingError> {
        writer.write_u8(self.sub_code())?;
        writer.write_all(self.value())?;
        Ok(())
    }
}
