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

//! Per-parse validation context.
//!
//! A [`Context`] is built once per top-level parse and passed by reference
//! down the whole recursion. It never changes while a document is built.

use crate::error::{JsonApiError, JsonApiResult};
use crate::factory::Factory;
use crate::{Element, ElementKind};
use serde_json::Value;
use std::fmt;

/// Whether a body is parsed as a client request or a server response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParseMode {
    /// Server response: resources MUST carry an `id`.
    #[default]
    Response,
    /// Client request: a new resource MAY omit its `id`.
    Request,
}

impl fmt::Display for ParseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Response => write!(f, "response"),
            Self::Request => write!(f, "request"),
        }
    }
}

/// Options for a single parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseOptions {
    /// Request or response parsing (default: response).
    pub mode: ParseMode,
}

impl ParseOptions {
    pub fn new(mode: ParseMode) -> Self {
        Self { mode }
    }

    /// Options for parsing a server response.
    pub fn response() -> Self {
        Self::new(ParseMode::Response)
    }

    /// Options for parsing a client request.
    pub fn request() -> Self {
        Self::new(ParseMode::Request)
    }

    /// Whether a resource item or identifier may omit its `id`.
    pub fn optional_item_id(&self) -> bool {
        self.mode == ParseMode::Request
    }
}

/// Read-only view threaded through every element construction.
#[derive(Clone, Copy)]
pub struct Context<'f> {
    factory: &'f dyn Factory,
    options: ParseOptions,
}

impl<'f> Context<'f> {
    pub fn new(factory: &'f dyn Factory, options: ParseOptions) -> Self {
        Self { factory, options }
    }

    pub fn factory(&self) -> &'f dyn Factory {
        self.factory
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    pub fn optional_item_id(&self) -> bool {
        self.options.optional_item_id()
    }

    /// Named configuration lookup.
    ///
    /// Returns `None` for names the context does not know.
    pub fn config(&self, name: &str) -> Option<bool> {
        match name {
            "optional_item_id" => Some(self.optional_item_id()),
            _ => None,
        }
    }

    /// Build an element through the factory.
    ///
    /// Fails with a factory error when the factory hands back an element
    /// of a different kind than requested.
    pub fn make(&self, kind: ElementKind, args: Args<'_>) -> JsonApiResult<Element> {
        tracing::trace!(kind = kind.name(), path = %args.path, "constructing element");
        let element = self.factory.make(kind, args)?;
        if element.kind() != kind {
            return Err(JsonApiError::factory(format!(
                "Factory returned a {} where a {} was requested",
                element.kind(),
                kind
            )));
        }
        Ok(element)
    }
}

impl fmt::Debug for Context<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

/// Non-owning back-reference to the element under construction above.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parent<'a> {
    pub kind: ElementKind,
    pub path: &'a str,
}

/// Construction arguments handed to a constructor.
#[derive(Debug, Clone)]
pub struct Args<'a> {
    /// Raw slice of the decoded document this element validates.
    pub value: &'a Value,
    pub context: &'a Context<'a>,
    pub parent: Option<Parent<'a>>,
    /// Dotted location of the element, empty for the document root.
    pub path: String,
}

impl<'a> Args<'a> {
    /// Arguments for the document root.
    pub fn root(value: &'a Value, context: &'a Context<'a>) -> Self {
        Self {
            value,
            context,
            parent: None,
            path: String::new(),
        }
    }

    /// Arguments for a child stored under `key` of an element of kind `own`.
    pub fn child<'b>(&'b self, own: ElementKind, key: &str, value: &'b Value) -> Args<'b> {
        let path = if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", self.path, key)
        };
        Args {
            value,
            context: self.context,
            parent: Some(Parent {
                kind: own,
                path: &self.path,
            }),
            path,
        }
    }

    /// Construct the child `kind` stored under `key`.
    pub fn make(
        &self,
        own: ElementKind,
        kind: ElementKind,
        key: &str,
        value: &Value,
    ) -> JsonApiResult<Element> {
        self.context.make(kind, self.child(own, key, value))
    }

    /// Validation error located at this element.
    pub fn invalid(&self, message: impl Into<String>) -> JsonApiError {
        JsonApiError::validation(message).with_path(self.path.clone())
    }

    /// Kind of the parent element, if any.
    pub fn parent_kind(&self) -> Option<ElementKind> {
        self.parent.map(|parent| parent.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ElementFactory;
    use serde_json::json;

    #[test]
    fn test_default_mode_is_response() {
        let options = ParseOptions::default();
        assert_eq!(options.mode, ParseMode::Response);
        assert!(!options.optional_item_id());
    }

    #[test]
    fn test_request_mode_allows_missing_id() {
        assert!(ParseOptions::request().optional_item_id());
    }

    #[test]
    fn test_named_config_lookup() {
        let factory = ElementFactory::default();
        let context = Context::new(&factory, ParseOptions::request());
        assert_eq!(context.config("optional_item_id"), Some(true));
        assert_eq!(context.config("unknown"), None);
    }

    #[test]
    fn test_child_paths() {
        let factory = ElementFactory::default();
        let context = Context::new(&factory, ParseOptions::default());
        let value = json!({"data": {"attributes": {}}});
        let root = Args::root(&value, &context);
        let data = root.child(ElementKind::Document, "data", &value["data"]);
        assert_eq!(data.path, "data");
        assert_eq!(data.parent_kind(), Some(ElementKind::Document));
        let attributes = data.child(ElementKind::ResourceItem, "attributes", &value["data"]["attributes"]);
        assert_eq!(attributes.path, "data.attributes");
        assert_eq!(attributes.parent.unwrap().path, "data");
    }

    #[test]
    fn test_invalid_carries_path() {
        let factory = ElementFactory::default();
        let context = Context::new(&factory, ParseOptions::default());
        let value = json!({"meta": 1});
        let root = Args::root(&value, &context);
        let meta = root.child(ElementKind::Document, "meta", &value["meta"]);
        let err = meta.invalid("Meta has to be an object");
        assert_eq!(err.path.as_deref(), Some("meta"));
    }
}
