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

//! Assertion helpers for wire-format tests: parse a buffer completely and
//! compare against an expected value, expect an exact located error, or
//! serialize and compare byte-for-byte.

use crate::{ReadablePdu, Span, WritablePdu};
use nom::IResult;
use std::{fmt::Debug, io::Cursor};

/// Concatenate wire-format fragments into one buffer.
pub fn combine(v: Vec<&[u8]>) -> Vec<u8> {
    v.iter().flat_map(|x| x.iter()).cloned().collect::<Vec<u8>>()
}

/// Parse `input` and assert the result equals `expected` with nothing left
/// over in the buffer.
pub fn test_parsed_completely<'a, T, E>(input: &'a [u8], expected: &T) -> T
where
    T: ReadablePdu<'a, E> + PartialEq + Debug,
    E: Debug,
{
    let parsed = <T as ReadablePdu<'_, E>>::from_wire(Span::new(input));
    assert!(
        parsed.is_ok(),
        "Message failed parsing, while expecting it to pass.\n\tExpected : {expected:?}\n\tParsed msg: {parsed:?}"
    );
    let (span, value) = parsed.unwrap();
    assert_eq!(&value, expected);
    assert_eq!(
        span.fragment().len(),
        0,
        "Not all the input is consumed by the parser, didn't consume: {span:?}",
    );
    value
}

/// Parse `input` and assert it fails with exactly `expected_err`.
pub fn test_parse_error<'a, T, E>(input: &'a [u8], expected_err: &E)
where
    T: ReadablePdu<'a, E> + Debug,
    E: Debug + PartialEq,
{
    let parsed: IResult<Span<'_>, T, E> = <T as ReadablePdu<'_, E>>::from_wire(Span::new(input));
    assert!(
        parsed.is_err(),
        "Message was parsed, while expecting it to fail.\n\tExpected : {expected_err:?}\n\tParsed msg: {parsed:?}"
    );
    if let Err(nom::Err::Error(parsed_error)) = parsed {
        assert_eq!(&parsed_error, expected_err);
    } else {
        panic!(
            "Expected the test to fail with Err(nom::Err::Error(x)) but it didn't. Got {parsed:?} instead"
        );
    }
}

/// Serialize `input` and assert the buffer matches `expected` and that
/// `len()` agrees with the buffer length.
pub fn test_write<T: WritablePdu<E>, E: PartialEq>(input: &T, expected: &[u8]) -> Result<(), E> {
    let mut buf: Vec<u8> = vec![];
    let mut cursor = Cursor::new(&mut buf);
    input.write(&mut cursor)?;
    assert_eq!(
        buf, expected,
        "Serialized buffer is different from the expected one"
    );
    assert_eq!(
        input.len(),
        expected.len(),
        "Pdu::len() is different from the serialized buffer length"
    );
    Ok(())
}
