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

//! Representations for BGP Update message

use crate::path_attribute::PathAttribute;
use ipnet::Ipv4Net;
use serde::{Deserialize, Serialize};

/// BGP Update message
///
/// ```text
/// +-----------------------------------------------------+
/// |   Withdrawn Routes Length (2 octets)                |
/// +-----------------------------------------------------+
/// |   Withdrawn Routes (variable)                       |
/// +-----------------------------------------------------+
/// |   Total Path Attribute Length (2 octets)            |
/// +-----------------------------------------------------+
/// |   Path Attributes (variable)                        |
/// +-----------------------------------------------------+
/// |   Network Layer Reachability Information (variable) |
/// +-----------------------------------------------------+
/// ```
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct BgpUpdateMessage {
    withdrawn_routes: Vec<Ipv4Net>,
    path_attributes: Vec<PathAttribute>,
    nlri: Vec<Ipv4Net>,
}

impl BgpUpdateMessage {
    pub const fn new(
        withdrawn_routes: Vec<Ipv4Net>,
        path_attributes: Vec<PathAttribute>,
        nlri: Vec<Ipv4Net>,
    ) -> Self {
        Self {
            withdrawn_routes,
            path_attributes,
            nlri,
        }
    }

    pub const fn withdrawn_routes(&self) -> &Vec<Ipv4Net> {
        &self.withdrawn_routes
    }

    pub const fn path_attributes(&self) -> &Vec<PathAttribute> {
        &self.path_attributes
    }

    pub const fn nlri(&self) -> &Vec<Ipv4Net> {
        &self.nlri
    }
}
