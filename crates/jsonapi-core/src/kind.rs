// Dweve JSON:API - JSON:API document validation and element tree
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Element kind tags.

use crate::error::JsonApiError;
use std::fmt;
use std::str::FromStr;

/// One tag per element of the JSON:API grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementKind {
    Document,
    Jsonapi,
    Meta,
    DocumentLink,
    ResourceItemLink,
    RelationshipLink,
    ErrorLink,
    Link,
    ResourceNull,
    ResourceIdentifier,
    ResourceItem,
    ResourceCollection,
    ResourceIdentifierCollection,
    Attributes,
    RelationshipCollection,
    Relationship,
    ErrorCollection,
    Error,
    ErrorSource,
}

impl ElementKind {
    /// Every kind, in registry order.
    pub const ALL: [ElementKind; 19] = [
        Self::Document,
        Self::Jsonapi,
        Self::Meta,
        Self::DocumentLink,
        Self::ResourceItemLink,
        Self::RelationshipLink,
        Self::ErrorLink,
        Self::Link,
        Self::ResourceNull,
        Self::ResourceIdentifier,
        Self::ResourceItem,
        Self::ResourceCollection,
        Self::ResourceIdentifierCollection,
        Self::Attributes,
        Self::RelationshipCollection,
        Self::Relationship,
        Self::ErrorCollection,
        Self::Error,
        Self::ErrorSource,
    ];

    /// Registry name of the kind.
    pub fn name(self) -> &'static str {
        match self {
            Self::Document => "Document",
            Self::Jsonapi => "Jsonapi",
            Self::Meta => "Meta",
            Self::DocumentLink => "DocumentLink",
            Self::ResourceItemLink => "ResourceItemLink",
            Self::RelationshipLink => "RelationshipLink",
            Self::ErrorLink => "ErrorLink",
            Self::Link => "Link",
            Self::ResourceNull => "ResourceNull",
            Self::ResourceIdentifier => "ResourceIdentifier",
            Self::ResourceItem => "ResourceItem",
            Self::ResourceCollection => "ResourceCollection",
            Self::ResourceIdentifierCollection => "ResourceIdentifierCollection",
            Self::Attributes => "Attributes",
            Self::RelationshipCollection => "RelationshipCollection",
            Self::Relationship => "Relationship",
            Self::ErrorCollection => "ErrorCollection",
            Self::Error => "Error",
            Self::ErrorSource => "ErrorSource",
        }
    }

    /// Kinds that may appear as primary `data`.
    pub fn is_resource(self) -> bool {
        matches!(
            self,
            Self::ResourceNull
                | Self::ResourceIdentifier
                | Self::ResourceItem
                | Self::ResourceCollection
                | Self::ResourceIdentifierCollection
        )
    }

    /// Kinds backed by an indexed store.
    pub fn is_collection(self) -> bool {
        matches!(
            self,
            Self::ResourceCollection | Self::ResourceIdentifierCollection | Self::ErrorCollection
        )
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ElementKind {
    type Err = JsonApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| JsonApiError::factory(format!("Unknown element kind \"{}\"", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_names_round_trip() {
        for kind in ElementKind::ALL {
            assert_eq!(kind.name().parse::<ElementKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_unknown_name_is_factory_error() {
        let err = "Resource".parse::<ElementKind>().unwrap_err();
        assert_eq!(err.kind, ErrorKind::Factory);
        assert!(err.message.contains("Resource"));
    }

    #[test]
    fn test_resource_kinds() {
        assert!(ElementKind::ResourceNull.is_resource());
        assert!(ElementKind::ResourceIdentifierCollection.is_resource());
        assert!(!ElementKind::Attributes.is_resource());
    }

    #[test]
    fn test_collection_kinds() {
        assert!(ElementKind::ErrorCollection.is_collection());
        assert!(!ElementKind::RelationshipCollection.is_collection());
    }
}
