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

//! Traits for reading and writing binary wire protocols.

mod span;
#[cfg(feature = "test-helpers")]
pub mod test_helpers;

pub use span::ByteSpan;

use nom::IResult;
use std::fmt::Debug;

/// Parser input used throughout the routewire codecs: a byte slice that
/// remembers its absolute offset in the buffer handed in by the transport.
pub type Span<'a> = ByteSpan<&'a [u8]>;

/// A Protocol Data Unit that can be parsed from wire format without any
/// external context.
pub trait ReadablePdu<'a, Error: Debug> {
    fn from_wire(buf: Span<'a>) -> IResult<Span<'a>, Self, Error>
    where
        Self: Sized;
}

/// A Protocol Data Unit that can be serialized into wire format.
#[allow(clippy::len_without_is_empty)]
pub trait WritablePdu<Error> {
    /// Size of the fixed portion of the PDU, in octets.
    const BASE_LENGTH: usize;

    /// The exact number of octets [`Self::write`] will produce. Length
    /// fields embedded in the wire format are derived from this value, so it
    /// must stay in lockstep with the writer.
    fn len(&self) -> usize;

    fn write<T: std::io::Write>(&self, writer: &mut T) -> Result<(), Error>
    where
        Self: Sized;
}

/// A parsing error paired with the location in the input where it was
/// raised. The span points (as closely as possible) at the first byte the
/// error applies to.
pub trait LocatedParsingError {
    type Span;
    type Error;

    fn span(&self) -> &Self::Span;
    fn error(&self) -> &Self::Error;
}

/// Run a child parser and lift its located error into the caller's located
/// error type. `Incomplete`, `Error`, and `Failure` are preserved as-is.
#[inline]
pub fn parse_into_located<'a, ChildErr: Debug, Err: From<ChildErr>, T: ReadablePdu<'a, ChildErr>>(
    buf: Span<'a>,
) -> IResult<Span<'a>, T, Err> {
    match T::from_wire(buf) {
        Ok((buf, value)) => Ok((buf, value)),
        Err(nom::Err::Incomplete(needed)) => Err(nom::Err::Incomplete(needed)),
        Err(nom::Err::Error(error)) => Err(nom::Err::Error(error.into())),
        Err(nom::Err::Failure(failure)) => Err(nom::Err::Failure(failure.into())),
    }
}

/// Repeat a parser until the buffer is exhausted.
///
/// Buffer exhaustion is the *only* termination condition; callers must slice
/// the input to the enclosing length field beforehand, otherwise the loop
/// happily eats the siblings that follow.
#[inline]
pub fn parse_till_empty<'a, T: ReadablePdu<'a, E>, E: Debug>(
    buf: Span<'a>,
) -> IResult<Span<'a>, Vec<T>, E> {
    let mut buf = buf;
    let mut ret = Vec::new();
    while !buf.is_empty() {
        let (tmp, element) = T::from_wire(buf)?;
        ret.push(element);
        buf = tmp;
    }
    Ok((buf, ret))
}

/// [`parse_till_empty`] with the child error lifted into the caller's error
/// type, as in [`parse_into_located`].
#[inline]
pub fn parse_till_empty_into_located<
    'a,
    ChildErr: Debug,
    Err: From<ChildErr>,
    T: ReadablePdu<'a, ChildErr>,
>(
    buf: Span<'a>,
) -> IResult<Span<'a>, Vec<T>, Err> {
    let mut buf = buf;
    let mut ret = Vec::new();
    while !buf.is_empty() {
        let (tmp, element) = parse_into_located(buf)?;
        ret.push(element);
        buf = tmp;
    }
    Ok((buf, ret))
}
