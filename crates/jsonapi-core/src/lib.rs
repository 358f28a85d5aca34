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

//! Core validation engine and element tree for JSON:API documents.
//!
//! This crate turns an already decoded [`serde_json::Value`] into a typed,
//! immutable tree of JSON:API elements, enforcing the structural rules of
//! the JSON:API grammar while the tree is built. Decoding text is left to
//! the caller (or to the `jsonapi` facade crate).
//!
//! # Reading a document
//!
//! Every element implements [`Accessable`]: `keys()`, `has(path)` and
//! `get(path)` with dot-path traversal.
//!
//! ```rust
//! use jsonapi_core::{parse, Accessable, ElementKind, ParseOptions};
//! use serde_json::json;
//!
//! let value = json!({
//!     "data": {"type": "articles", "id": "1", "attributes": {"title": "JSON:API paints my bikeshed!"}}
//! });
//! let document = parse(&value, &ParseOptions::default()).unwrap();
//!
//! assert_eq!(document.data().unwrap().kind(), ElementKind::ResourceItem);
//! assert_eq!(document.get("data.attributes.title").unwrap().as_value(), Some(&json!("JSON:API paints my bikeshed!")));
//! assert!(!document.has("data.relationships"));
//! ```
//!
//! # Request and response mode
//!
//! A client creating a resource may omit its `id`; a server response may
//! not. [`ParseOptions::request`] and [`ParseOptions::response`] select
//! the rule set.

mod accessor;
mod context;
pub mod elements;
mod error;
mod factory;
mod kind;
pub mod serializer;
mod store;

pub use accessor::{AccessPath, Accessable, Accessed};
pub use context::{Args, Context, Parent, ParseMode, ParseOptions};
pub use elements::{classify, Element};
pub use elements::{
    Attributes, Document, DocumentLink, ErrorCollection, ErrorLink, ErrorObject, ErrorSource,
    Jsonapi, Link, Meta, Relationship, RelationshipCollection, RelationshipLink,
    ResourceCollection, ResourceIdentifier, ResourceIdentifierCollection, ResourceItem,
    ResourceItemLink, ResourceNull,
};
pub use error::{ErrorKind, JsonApiError, JsonApiResult};
pub use factory::{default_constructor, Constructor, ElementFactory, Factory};
pub use kind::ElementKind;
pub use serializer::{serialize_to_value, ArraySerializer, Projected, Projection};
pub use store::{Key, Slot, Store};

use serde_json::Value;

/// Validate `value` as a JSON:API document using the default factory.
pub fn parse(value: &Value, options: &ParseOptions) -> JsonApiResult<Document> {
    parse_with_factory(value, options, ElementFactory::shared())
}

/// Validate `value` with a caller-supplied factory.
pub fn parse_with_factory(
    value: &Value,
    options: &ParseOptions,
    factory: &dyn Factory,
) -> JsonApiResult<Document> {
    let context = Context::new(factory, *options);
    let element = context.make(ElementKind::Document, Args::root(value, &context))?;
    element.into_document().ok_or_else(|| {
        JsonApiError::factory("Factory did not return a Document for the document root")
    })
}
