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

//! Serializer for BGP Path Attributes

use byteorder::{NetworkEndian, WriteBytesExt};
use std::io::Write;

use routewire_parse_utils::WritablePdu;
use routewire_serde_macros::WritingError;

use crate::path_attribute::{
    Aggregator, As2PathSegment, As4Path, As4PathSegment, AsPath, AtomicAggregate, LocalPreference,
    MultiExitDiscriminator, NextHop, Origin, PathAttribute, PathAttributeValue, UnknownAttribute,
};

#[derive(WritingError, Eq, PartialEq, Clone, Debug)]
pub enum PathAttributeWritingError {
    StdIOError(#[from_std_io_error] String),
    OriginError(#[from] OriginWritingError),
    AsPathError(#[from] AsPathWritingError),
    NextHopError(#[from] NextHopWritingError),
    MultiExitDiscriminatorError(#[from] MultiExitDiscriminatorWritingError),
    LocalPreferenceError(#[from] LocalPreferenceWritingError),
    AtomicAggregateError(#[from] AtomicAggregateWritingError),
    AggregatorError(#[from] AggregatorWritingError),
    UnknownAttributeError(#[from] UnknownAttributeWritingError),
}

impl PathAttributeValue {
    fn value_len(&self) -> usize {
        match self {
            Self::Origin(value) => value.len(),
            Self::AsPath(value) => value.len(),
            Self::As4Path(value) => value.len(),
            Self::NextHop(value) => value.len(),
            Self::MultiExitDiscriminator(value) => value.len(),
            Self::LocalPreference(value) => value.len(),
            Self::AtomicAggregate(value) => value.len(),
            Self::Aggregator(value) => value.len(),
            Self::UnknownAttribute(value) => value.len(),
        }
    }
}

impl WritablePdu<PathAttributeWritingError> for PathAttribute {
    /// 1 octet for the flags and 1 octet for the type code; the length
    /// octet(s) depend on the extended-length flag
    const BASE_LENGTH: usize = 2;

    fn len(&self) -> usize {
        let length_octets = if self.extended_length() { 2 } else { 1 };
        Self::BASE_LENGTH + length_octets + self.value().value_len()
    }

    fn write<T: Write>(&self, writer: &mut T) -> Result<(), PathAttributeWritingError> {
        let mut flags = 0u8;
        if self.optional() {
            flags |= 0b1000_0000;
        }
        if self.transitive() {
            flags |= 0b0100_0000;
        }
        if self.partial() {
            flags |= 0b0010_0000;
        }
        if self.extended_length() {
            flags |= 0b0001_0000;
        }
        writer.write_u8(flags)?;
        match self.value().path_attribute_type() {
            Ok(attribute_type) => writer.write_u8(attribute_type.into())?,
            Err(code) => writer.write_u8(code)?,
        }
        let value_len = self.value().value_len();
        if self.extended_length() {
            writer.write_u16::<NetworkEndian>(value_len as u16)?;
        } else {
            writer.write_u8(value_len as u8)?;
        }
        match self.value() {
            PathAttributeValue::Origin(value) => value.write(writer)?,
            PathAttributeValue::AsPath(value) => value.write(writer)?,
            PathAttributeValue::As4Path(value) => value.write(writer)?,
            PathAttributeValue::NextHop(value) => value.write(writer)?,
            PathAttributeValue::MultiExitDiscriminator(value) => value.write(writer)?,
            PathAttributeValue::LocalPreference(value) => value.write(writer)?,
            PathAttributeValue::AtomicAggregate(value) => value.write(writer)?,
            PathAttributeValue::Aggregator(value) => value.write(writer)?,
            PathAttributeValue::UnknownAttribute(value) => value.write(writer)?,
        }
        Ok(())
    }
}

#[derive(WritingError, Eq, PartialEq, Clone, Debug)]
pub enum OriginWritingError {
    StdIOError(#[from_std_io_error] String),
}

impl WritablePdu<OriginWritingError> for Origin {
    const BASE_LENGTH: usize = 1;

    fn len(&self) -> usize {
        Self::BASE_LENGTH
    }

    fn write<T: Write>(&self, writer: &mut T) -> Result<(), OriginWritingError> {
        writer.write_u8((*self).into())?;
        Ok(())
    }
}

#[derive(WritingError, Eq, PartialEq, Clone, Debug)]
pub enum AsPathWritingError {
    StdIOError(#[from_std_io_error] String),
}

impl WritablePdu<AsPathWritingError> for As2PathSegment {
    /// 1 octet for the segment type and 1 for the AS count
    const BASE_LENGTH: usize = 2;

    fn len(&self) -> usize {
        Self::BASE_LENGTH + 2 * self.as_numbers().len()
    }

    fn write<T: Write>(&self, writer: &mut T) -> Result<(), AsPathWritingError> {
        writer.write_u8(self.segment_type().into())?;
        writer.write_u8(self.as_numbers().len() as u8)?;
        for asn in self.as_numbers() {
            writer.write_u16::<NetworkEndian>(*asn)?;
        }
        Ok(())
    }
}

impl WritablePdu<AsPathWritingError> for As4PathSegment {
    /// 1 octet for the segment type and 1 for the AS count
    const BASE_LENGTH: usize = 2;

    fn len(&self) -> usize {
        Self::BASE_LENGTH + 4 * self.as_numbers().len()
    }

    fn write<T: Write>(&self, writer: &mut T) -> Result<(), AsPathWritingError> {
        writer.write_u8(self.segment_type().into())?;
        writer.write_u8(self.as_numbers().len() as u8)?;
        for asn in self.as_numbers() {
            writer.write_u32::<NetworkEndian>(*asn)?;
        }
        Ok(())
    }
}

impl WritablePdu<AsPathWritingError> for AsPath {
    const BASE_LENGTH: usize = 0;

    fn len(&self) -> usize {
        self.segments().iter().map(As2PathSegment::len).sum()
    }

    fn write<T: Write>(&self, writer: &mut T) -> Result<(), AsPathWritingError> {
        for segment in self.segments() {
            segment.write(writer)?;
        }
        Ok(())
    }
}

impl WritablePdu<AsPathWritingError> for As4Path {
    const BASE_LENGTH: usize = 0;

    fn len(&self) -> usize {
        self.segments().iter().map(As4PathSegment::len).sum()
    }

    fn write<T: Write>(&self, writer: &mut T) -> Result<(), AsPathWritingError> {
        for segment in self.segments() {
            segment.write(writer)?;
        }
        Ok(())
    }
}

#[derive(WritingError, Eq, PartialEq, Clone, Debug)]
pub enum NextHopWritingError {
    StdIOError(#[from_std_io_error] String),
}

impl WritablePdu<NextHopWritingError> for NextHop {
    const BASE_LENGTH: usize = 4;

    fn len(&self) -> usize {
        Self::BASE_LENGTH
    }

    fn write<T: Write>(&self, writer: &mut T) -> Result<(), NextHopWritingError> {
        writer.write_u32::<NetworkEndian>(self.next_hop().into())?;
        Ok(())
    }
}

#[derive(WritingError, Eq, PartialEq, Clone, Debug)]
pub enum MultiExitDiscriminatorWritingError {
    StdIOError(#[from_std_io_error] String),
}

impl WritablePdu<MultiExitDiscriminatorWritingError> for MultiExitDiscriminator {
    const BASE_LENGTH: usize = 4;

    fn len(&self) -> usize {
        Self::BASE_LENGTH
    }

    fn write<T: Write>(&self, writer: &mut T) -> Result<(), MultiExitDiscriminatorWritingError> {
        writer.write_u32::<NetworkEndian>(self.metric())?;
        Ok(())
    }
}

#[derive(WritingError, Eq, PartialEq, Clone, Debug)]
pub enum LocalPreferenceWritingError {
    StdIOError(#[from_std_io_error] String),
}

impl WritablePdu<LocalPreferenceWritingError> for LocalPreference {
    const BASE_LENGTH: usize = 4;

    fn len(&self) -> usize {
        Self::BASE_LENGTH
    }

    fn write<T: Write>(&self, writer: &mut T) -> Result<(), LocalPreferenceWritingError> {
        writer.write_u32::<NetworkEndian>(self.metric())?;
        Ok(())
    }
}

#[derive(WritingError, Eq, PartialEq, Clone, Debug)]
pub enum AtomicAggregateWritingError {
    StdIOError(#[from_std_io_error] String),
}

impl WritablePdu<AtomicAggregateWritingError> for AtomicAggregate {
    const BASE_LENGTH: usize = 0;

    fn len(&self) -> usize {
        Self::BASE_LENGTH
    }

    fn write<T: Write>(&self, _writer: &mut T) -> Result<(), AtomicAggregateWritingError> {
        Ok(())
    }
}

#[derive(WritingError, Eq, PartialEq, Clone, Debug)]
pub enum AggregatorWritingError {
    StdIOError(#[from_std_io_error] String),
}

impl WritablePdu<AggregatorWritingError> for Aggregator {
    /// 2 octets for the AS number + 4 octets for the aggregator identifier
    const BASE_LENGTH: usize = 6;

    fn len(&self) -> usize {
        Self::BASE_LENGTH
    }

    fn write<T: Write>(&self, writer: &mut T) -> Result<(), AggregatorWritingError> {
        writer.write_u16::<NetworkEndian>(self.asn())?;
        writer.write_u32::<NetworkEndian>(self.origin().into())?;
        Ok(())
    }
}

#[derive(WritingError, Eq, PartialEq, Clone, Debug)]
pub enum UnknownAttributeWritingError {
    StdIOError(#[from_std_io_error] String),
}

impl WritablePdu<UnknownAttributeWritingError> for UnknownAttribute {
    const BASE_LENGTH: usize = 0;

    fn len(&self) -> usize {
        self.value().len()
    }

    fn write<T: Write>(&self, writer: &mut T) -> Result<(), UnknownAttributeWritingError> {
        writer.write_all(self.value())?;
        Ok(())
    }
}
