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

//! # JSON:API
//!
//! Parse and validate JSON:API request and response bodies into a typed,
//! navigable element tree.
//!
//! ## Quick Start
//!
//! ```rust
//! use jsonapi::{parse_response_str, Accessable, ArraySerializer};
//!
//! let body = r#"{
//!     "data": {
//!         "type": "articles",
//!         "id": "1",
//!         "attributes": {"title": "JSON:API paints my bikeshed!"},
//!         "relationships": {"author": {"data": {"type": "people", "id": "9"}}}
//!     }
//! }"#;
//!
//! let document = parse_response_str(body).expect("valid response");
//!
//! // Dot-path access
//! let title = document.get("data.attributes.title").unwrap();
//! assert_eq!(title.as_str(), Some("JSON:API paints my bikeshed!"));
//! assert!(document.has("data.relationships.author.data.id"));
//!
//! // Project back to plain JSON
//! let projection = ArraySerializer::new().recursive(true).serialize(&document).unwrap();
//! assert!(projection.is_some());
//! ```
//!
//! ## Modules
//!
//! - [`engine`]: the element tree, factory and accessor protocol
//! - [`input`]: decoding raw text
//!
//! ## Logging
//!
//! Parsing emits `tracing` events (`debug` on start and success, `warn` on
//! rejection, `trace` per constructed element). No subscriber is installed.

// Re-export core types
pub use jsonapi_core::{
    // Accessor protocol
    AccessPath,
    Accessable,
    Accessed,
    // Serializer
    ArraySerializer,
    // Elements
    Attributes,
    Document,
    DocumentLink,
    Element,
    ElementKind,
    // Errors
    ErrorCollection,
    ErrorKind,
    ErrorLink,
    ErrorObject,
    ErrorSource,
    JsonApiError,
    JsonApiResult,
    Jsonapi,
    Key,
    Link,
    Meta,
    // Options
    ParseMode,
    ParseOptions,
    Projected,
    Projection,
    Relationship,
    RelationshipCollection,
    RelationshipLink,
    ResourceCollection,
    ResourceIdentifier,
    ResourceIdentifierCollection,
    ResourceItem,
    ResourceItemLink,
    ResourceNull,
};

/// The validation engine.
pub mod engine {
    pub use jsonapi_core::*;
}

// Error handling extensions
mod error_ext;
pub use error_ext::JsonApiResultExt;

pub mod input;
pub use input::{Input, RequestStringInput, ResponseStringInput};

mod parser;
pub use parser::{
    is_valid_request, is_valid_request_str, is_valid_response, is_valid_response_str,
    parse_input, parse_request, parse_request_str, parse_response, parse_response_str, parse_str,
    parse_value,
};

/// Recursive projection of `document` to JSON.
///
/// # Examples
///
/// ```rust
/// use jsonapi::{parse_response_str, to_value};
///
/// let document = parse_response_str(r#"{"data": {"type": "a", "id": 1}}"#).unwrap();
/// assert_eq!(to_value(&document), serde_json::json!({"data": {"type": "a", "id": "1"}}));
/// ```
pub fn to_value(document: &Document) -> serde_json::Value {
    jsonapi_core::serialize_to_value(document)
}
