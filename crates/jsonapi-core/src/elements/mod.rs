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

//! The JSON:API element tree.
//!
//! Each element validates its own slice of the decoded document when it is
//! constructed and builds its children through the factory. A constructed
//! element is immutable; there is no partially valid element.

mod attributes;
mod document;
mod error;
mod link;
mod meta;
mod relationship;
mod resource;

pub use attributes::Attributes;
pub use document::Document;
pub use error::{ErrorCollection, ErrorObject, ErrorSource};
pub use link::{DocumentLink, ErrorLink, Link, RelationshipLink, ResourceItemLink};
pub use meta::{Jsonapi, Meta};
pub use relationship::{Relationship, RelationshipCollection};
pub use resource::{
    classify, ResourceCollection, ResourceIdentifier, ResourceIdentifierCollection, ResourceItem,
    ResourceNull,
};

use crate::accessor::Accessable;
use crate::context::Args;
use crate::error::JsonApiResult;
use crate::store::Store;
use crate::ElementKind;
use serde_json::{Map, Value};

/// Any element of the tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Document(Document),
    Jsonapi(Jsonapi),
    Meta(Meta),
    DocumentLink(DocumentLink),
    ResourceItemLink(ResourceItemLink),
    RelationshipLink(RelationshipLink),
    ErrorLink(ErrorLink),
    Link(Link),
    ResourceNull(ResourceNull),
    ResourceIdentifier(ResourceIdentifier),
    ResourceItem(ResourceItem),
    ResourceCollection(ResourceCollection),
    ResourceIdentifierCollection(ResourceIdentifierCollection),
    Attributes(Attributes),
    RelationshipCollection(RelationshipCollection),
    Relationship(Relationship),
    ErrorCollection(ErrorCollection),
    Error(ErrorObject),
    ErrorSource(ErrorSource),
}

macro_rules! for_each_element {
    ($element:expr, $inner:ident => $body:expr) => {
        match $element {
            Element::Document($inner) => $body,
            Element::Jsonapi($inner) => $body,
            Element::Meta($inner) => $body,
            Element::DocumentLink($inner) => $body,
            Element::ResourceItemLink($inner) => $body,
            Element::RelationshipLink($inner) => $body,
            Element::ErrorLink($inner) => $body,
            Element::Link($inner) => $body,
            Element::ResourceNull($inner) => $body,
            Element::ResourceIdentifier($inner) => $body,
            Element::ResourceItem($inner) => $body,
            Element::ResourceCollection($inner) => $body,
            Element::ResourceIdentifierCollection($inner) => $body,
            Element::Attributes($inner) => $body,
            Element::RelationshipCollection($inner) => $body,
            Element::Relationship($inner) => $body,
            Element::ErrorCollection($inner) => $body,
            Element::Error($inner) => $body,
            Element::ErrorSource($inner) => $body,
        }
    };
}

macro_rules! element_accessors {
    ($($variant:ident => $as_fn:ident: $ty:ty),* $(,)?) => {
        impl Element {
            $(
                #[doc = concat!("Try to get the element as [`", stringify!($ty), "`].")]
                pub fn $as_fn(&self) -> Option<&$ty> {
                    match self {
                        Self::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }
            )*
        }
    };
}

element_accessors! {
    Document => as_document: Document,
    Jsonapi => as_jsonapi: Jsonapi,
    Meta => as_meta: Meta,
    DocumentLink => as_document_link: DocumentLink,
    ResourceItemLink => as_resource_item_link: ResourceItemLink,
    RelationshipLink => as_relationship_link: RelationshipLink,
    ErrorLink => as_error_link: ErrorLink,
    Link => as_link: Link,
    ResourceNull => as_resource_null: ResourceNull,
    ResourceIdentifier => as_resource_identifier: ResourceIdentifier,
    ResourceItem => as_resource_item: ResourceItem,
    ResourceCollection => as_resource_collection: ResourceCollection,
    ResourceIdentifierCollection => as_resource_identifier_collection: ResourceIdentifierCollection,
    Attributes => as_attributes: Attributes,
    RelationshipCollection => as_relationship_collection: RelationshipCollection,
    Relationship => as_relationship: Relationship,
    ErrorCollection => as_error_collection: ErrorCollection,
    Error => as_error: ErrorObject,
    ErrorSource => as_error_source: ErrorSource,
}

impl Element {
    pub fn kind(&self) -> ElementKind {
        match self {
            Self::Document(_) => ElementKind::Document,
            Self::Jsonapi(_) => ElementKind::Jsonapi,
            Self::Meta(_) => ElementKind::Meta,
            Self::DocumentLink(_) => ElementKind::DocumentLink,
            Self::ResourceItemLink(_) => ElementKind::ResourceItemLink,
            Self::RelationshipLink(_) => ElementKind::RelationshipLink,
            Self::ErrorLink(_) => ElementKind::ErrorLink,
            Self::Link(_) => ElementKind::Link,
            Self::ResourceNull(_) => ElementKind::ResourceNull,
            Self::ResourceIdentifier(_) => ElementKind::ResourceIdentifier,
            Self::ResourceItem(_) => ElementKind::ResourceItem,
            Self::ResourceCollection(_) => ElementKind::ResourceCollection,
            Self::ResourceIdentifierCollection(_) => ElementKind::ResourceIdentifierCollection,
            Self::Attributes(_) => ElementKind::Attributes,
            Self::RelationshipCollection(_) => ElementKind::RelationshipCollection,
            Self::Relationship(_) => ElementKind::Relationship,
            Self::ErrorCollection(_) => ElementKind::ErrorCollection,
            Self::Error(_) => ElementKind::Error,
            Self::ErrorSource(_) => ElementKind::ErrorSource,
        }
    }

    /// Kind of the element this one was built under, `None` for the root.
    pub fn parent_kind(&self) -> Option<ElementKind> {
        for_each_element!(self, inner => inner.parent_kind())
    }

    /// Take the document out of a root element.
    pub fn into_document(self) -> Option<Document> {
        match self {
            Self::Document(document) => Some(document),
            _ => None,
        }
    }
}

impl Accessable for Element {
    fn store(&self) -> &Store {
        for_each_element!(self, inner => inner.store())
    }

    fn is_null(&self) -> bool {
        matches!(self, Self::ResourceNull(_))
    }
}

/// Implements the accessor protocol and `parent_kind` for an element
/// struct with `store` and `parent` fields.
macro_rules! impl_element {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::accessor::Accessable for $ty {
                fn store(&self) -> &$crate::store::Store {
                    &self.store
                }
            }

            impl $ty {
                /// Kind of the element this one was built under.
                pub fn parent_kind(&self) -> Option<$crate::ElementKind> {
                    self.parent
                }
            }
        )*
    };
}
pub(crate) use impl_element;

/// JSON type name used in validation messages.
pub fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Require an object, failing with "`what` has to be an object".
pub(crate) fn expect_object<'v>(
    args: &Args<'v>,
    what: &str,
) -> JsonApiResult<&'v Map<String, Value>> {
    args.value.as_object().ok_or_else(|| {
        args.invalid(format!(
            "{} has to be an object, \"{}\" given.",
            what,
            json_type(args.value)
        ))
    })
}

/// Require an array, failing with "`what` has to be in an array".
pub(crate) fn expect_array<'v>(args: &Args<'v>, what: &str) -> JsonApiResult<&'v Vec<Value>> {
    args.value.as_array().ok_or_else(|| {
        args.invalid(format!(
            "{} has to be in an array, \"{}\" given.",
            what,
            json_type(args.value)
        ))
    })
}

/// String form of a scalar leaf (`null` becomes the empty string).
///
/// Objects and arrays fail with "`owner` `name` cannot be an array or object".
pub(crate) fn coerce_to_string(
    args: &Args<'_>,
    owner: &str,
    name: &str,
    value: &Value,
) -> JsonApiResult<Value> {
    let coerced = match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        Value::Array(_) | Value::Object(_) => {
            return Err(args.invalid(format!("{} {} cannot be an array or object", owner, name)))
        }
    };
    Ok(Value::String(coerced))
}
