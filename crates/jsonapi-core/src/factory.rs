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

//! Element factory: the registry mapping element kinds to constructors.
//!
//! Every recursive construction goes through a [`Factory`], so callers can
//! swap the constructor of a single kind (for example to apply stricter
//! rules to `meta`) without touching the rest of the grammar.
//!
//! # Example
//!
//! ```rust
//! use jsonapi_core::{parse_with_factory, Element, ElementFactory, ElementKind, ParseOptions};
//! use serde_json::json;
//!
//! // A factory that cannot build Meta rejects every document carrying meta.
//! let factory = ElementFactory::default().without(ElementKind::Meta);
//! let value = json!({"meta": {"copyright": "Dweve"}});
//! let err = parse_with_factory(&value, &ParseOptions::default(), &factory).unwrap_err();
//! assert!(err.message.contains("Meta"));
//! ```

use crate::context::Args;
use crate::elements::{
    Attributes, Document, DocumentLink, ErrorCollection, ErrorLink, ErrorObject, ErrorSource,
    Jsonapi, Link, Meta, Relationship, RelationshipCollection, RelationshipLink,
    ResourceCollection, ResourceIdentifier, ResourceIdentifierCollection, ResourceItem,
    ResourceItemLink, ResourceNull,
};
use crate::error::{JsonApiError, JsonApiResult};
use crate::{Element, ElementKind};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

/// Builds an element of one kind from its arguments.
pub type Constructor = for<'a> fn(Args<'a>) -> JsonApiResult<Element>;

/// Dispatches element construction by kind.
pub trait Factory {
    /// Construct the element `kind`, validating `args.value`.
    fn make(&self, kind: ElementKind, args: Args<'_>) -> JsonApiResult<Element>;
}

/// Table-driven factory.
///
/// The table is read-only while documents are parsed and can be shared
/// between concurrent parses.
#[derive(Clone)]
pub struct ElementFactory {
    constructors: BTreeMap<ElementKind, Constructor>,
}

impl ElementFactory {
    /// A factory with no registered kinds.
    pub fn empty() -> Self {
        Self {
            constructors: BTreeMap::new(),
        }
    }

    /// The process-wide default factory.
    pub fn shared() -> &'static ElementFactory {
        static SHARED: OnceLock<ElementFactory> = OnceLock::new();
        SHARED.get_or_init(ElementFactory::default)
    }

    /// Register (or replace) the constructor of `kind`.
    pub fn register(&mut self, kind: ElementKind, constructor: Constructor) {
        self.constructors.insert(kind, constructor);
    }

    /// Builder-style [`register`](Self::register).
    pub fn with(mut self, kind: ElementKind, constructor: Constructor) -> Self {
        self.register(kind, constructor);
        self
    }

    /// Remove the constructor of `kind`.
    pub fn without(mut self, kind: ElementKind) -> Self {
        self.constructors.remove(&kind);
        self
    }

    pub fn is_registered(&self, kind: ElementKind) -> bool {
        self.constructors.contains_key(&kind)
    }

    /// Construct an element by its registry name.
    pub fn make_named(&self, name: &str, args: Args<'_>) -> JsonApiResult<Element> {
        let kind: ElementKind = name.parse()?;
        self.make(kind, args)
    }
}

impl Factory for ElementFactory {
    fn make(&self, kind: ElementKind, args: Args<'_>) -> JsonApiResult<Element> {
        match self.constructors.get(&kind) {
            Some(constructor) => constructor(args),
            None => Err(JsonApiError::factory(format!(
                "Element kind \"{}\" is not registered",
                kind
            ))),
        }
    }
}

impl Default for ElementFactory {
    fn default() -> Self {
        let mut factory = Self::empty();
        for kind in ElementKind::ALL {
            factory.register(kind, default_constructor(kind));
        }
        factory
    }
}

impl fmt::Debug for ElementFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementFactory")
            .field("kinds", &self.constructors.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Built-in constructor of `kind`.
pub fn default_constructor(kind: ElementKind) -> Constructor {
    match kind {
        ElementKind::Document => |args| Document::from_args(args).map(Element::Document),
        ElementKind::Jsonapi => |args| Jsonapi::from_args(args).map(Element::Jsonapi),
        ElementKind::Meta => |args| Meta::from_args(args).map(Element::Meta),
        ElementKind::DocumentLink => {
            |args| DocumentLink::from_args(args).map(Element::DocumentLink)
        }
        ElementKind::ResourceItemLink => {
            |args| ResourceItemLink::from_args(args).map(Element::ResourceItemLink)
        }
        ElementKind::RelationshipLink => {
            |args| RelationshipLink::from_args(args).map(Element::RelationshipLink)
        }
        ElementKind::ErrorLink => |args| ErrorLink::from_args(args).map(Element::ErrorLink),
        ElementKind::Link => |args| Link::from_args(args).map(Element::Link),
        ElementKind::ResourceNull => {
            |args| ResourceNull::from_args(args).map(Element::ResourceNull)
        }
        ElementKind::ResourceIdentifier => {
            |args| ResourceIdentifier::from_args(args).map(Element::ResourceIdentifier)
        }
        ElementKind::ResourceItem => {
            |args| ResourceItem::from_args(args).map(Element::ResourceItem)
        }
        ElementKind::ResourceCollection => {
            |args| ResourceCollection::from_args(args).map(Element::ResourceCollection)
        }
        ElementKind::ResourceIdentifierCollection => |args| {
            ResourceIdentifierCollection::from_args(args)
                .map(Element::ResourceIdentifierCollection)
        },
        ElementKind::Attributes => |args| Attributes::from_args(args).map(Element::Attributes),
        ElementKind::RelationshipCollection => {
            |args| RelationshipCollection::from_args(args).map(Element::RelationshipCollection)
        }
        ElementKind::Relationship => {
            |args| Relationship::from_args(args).map(Element::Relationship)
        }
        ElementKind::ErrorCollection => {
            |args| ErrorCollection::from_args(args).map(Element::ErrorCollection)
        }
        ElementKind::Error => |args| ErrorObject::from_args(args).map(Element::Error),
        ElementKind::ErrorSource => |args| ErrorSource::from_args(args).map(Element::ErrorSource),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Context, ErrorKind, ParseOptions};
    use serde_json::json;

    #[test]
    fn test_default_registers_every_kind() {
        let factory = ElementFactory::default();
        for kind in ElementKind::ALL {
            assert!(factory.is_registered(kind), "{} not registered", kind);
        }
    }

    #[test]
    fn test_unregistered_kind_fails() {
        let factory = ElementFactory::empty();
        let context = Context::new(&factory, ParseOptions::default());
        let value = json!({});
        let err = factory
            .make(ElementKind::Meta, Args::root(&value, &context))
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Factory);
        assert!(err.message.contains("Meta"));
    }

    #[test]
    fn test_make_named() {
        let factory = ElementFactory::default();
        let context = Context::new(&factory, ParseOptions::default());
        let value = json!({"license": "Apache-2.0"});
        let element = factory.make_named("Meta", Args::root(&value, &context)).unwrap();
        assert_eq!(element.kind(), ElementKind::Meta);
    }

    #[test]
    fn test_make_unknown_name() {
        let factory = ElementFactory::default();
        let context = Context::new(&factory, ParseOptions::default());
        let value = json!({});
        let err = factory
            .make_named("Resource", Args::root(&value, &context))
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Factory);
    }

    #[test]
    fn test_override_constructor() {
        fn strict_meta(args: Args<'_>) -> JsonApiResult<Element> {
            if args.value.as_object().map_or(true, |o| o.is_empty()) {
                return Err(args.invalid("Meta must not be empty"));
            }
            Meta::from_args(args).map(Element::Meta)
        }

        let factory = ElementFactory::default().with(ElementKind::Meta, strict_meta);
        let context = Context::new(&factory, ParseOptions::default());
        let value = json!({});
        let err = context
            .make(ElementKind::Meta, Args::root(&value, &context))
            .unwrap_err();
        assert_eq!(err.message, "Meta must not be empty");
    }

    #[test]
    fn test_mismatched_kind_is_factory_error() {
        let factory = ElementFactory::default().with(ElementKind::Attributes, |args| {
            Meta::from_args(args).map(Element::Meta)
        });
        let context = Context::new(&factory, ParseOptions::default());
        let value = json!({});
        let err = context
            .make(ElementKind::Attributes, Args::root(&value, &context))
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Factory);
    }

    #[test]
    fn test_shared_factory_is_default() {
        assert!(ElementFactory::shared().is_registered(ElementKind::Document));
    }
}
