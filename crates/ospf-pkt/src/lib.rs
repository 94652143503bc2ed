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

//! OSPF Traffic-Engineering opaque LSA data representation as defined by
//! [RFC3630](https://datatracker.ietf.org/doc/html/rfc3630).
//!
//! The TE LSA is an opaque LSA whose payload is a sequence of top-level
//! TLVs (Router Address, Link), the Link TLV itself carrying a sequence of
//! sub-TLVs. All TLVs are 4-octet aligned on the wire; type codes outside
//! the modeled registries are preserved verbatim so any LSA that decodes
//! also re-encodes byte-identically.

pub mod iana;
pub mod lsa;
pub mod te;
pub mod wire;
