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

//! The top-level document.

use super::{classify, expect_object, json_type, DocumentLink, Element, ErrorCollection};
use super::{Jsonapi, Meta, ResourceCollection};
use crate::context::Args;
use crate::error::JsonApiResult;
use crate::store::Store;
use crate::ElementKind;
use serde_json::Value;

/// Root of the element tree.
///
/// A document holds primary `data` or `errors` (never both), and may carry
/// `meta`, `jsonapi`, `links` and, alongside `data`, `included` resources.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    store: Store,
    parent: Option<ElementKind>,
}

super::impl_element!(Document);

impl Document {
    pub fn from_args(args: Args<'_>) -> JsonApiResult<Self> {
        const OWN: ElementKind = ElementKind::Document;
        let object = expect_object(&args, "Document")?;

        if !["data", "errors", "meta"].iter().any(|name| object.contains_key(*name)) {
            return Err(args.invalid(
                "Document MUST contain at least one of the following properties: data, errors, meta",
            ));
        }
        if object.contains_key("data") && object.contains_key("errors") {
            return Err(args.invalid(
                "The properties `data` and `errors` MUST NOT coexist in Document.",
            ));
        }
        if object.contains_key("included") && !object.contains_key("data") {
            return Err(args.invalid(
                "If Document does not contain a `data` property, the `included` property MUST NOT be present either.",
            ));
        }

        let mut store = Store::named();
        for (name, value) in object {
            let kind = match name.as_str() {
                "data" => data_kind(&args, value)?,
                "included" => ElementKind::ResourceCollection,
                "errors" => ElementKind::ErrorCollection,
                "meta" => ElementKind::Meta,
                "jsonapi" => ElementKind::Jsonapi,
                "links" => ElementKind::DocumentLink,
                _ => continue,
            };
            store.set(name, args.make(OWN, kind, name, value)?);
        }

        Ok(Self {
            store,
            parent: args.parent_kind(),
        })
    }

    /// Primary data: a null resource, a single resource or a collection.
    pub fn data(&self) -> Option<&Element> {
        self.store.element("data")
    }

    pub fn errors(&self) -> Option<&ErrorCollection> {
        self.store.element("errors").and_then(Element::as_error_collection)
    }

    pub fn meta(&self) -> Option<&Meta> {
        self.store.element("meta").and_then(Element::as_meta)
    }

    pub fn jsonapi(&self) -> Option<&Jsonapi> {
        self.store.element("jsonapi").and_then(Element::as_jsonapi)
    }

    pub fn links(&self) -> Option<&DocumentLink> {
        self.store.element("links").and_then(Element::as_document_link)
    }

    pub fn included(&self) -> Option<&ResourceCollection> {
        self.store.element("included").and_then(Element::as_resource_collection)
    }

    /// Total number of elements in the tree, this document included.
    pub fn element_count(&self) -> usize {
        fn count(store: &Store) -> usize {
            store
                .iter()
                .filter_map(|(_, slot)| slot.as_element())
                .map(|element| 1 + count(crate::Accessable::store(element)))
                .sum()
        }
        1 + count(&self.store)
    }
}

/// Element kind of primary `data`.
fn data_kind(args: &Args<'_>, value: &Value) -> JsonApiResult<ElementKind> {
    match value {
        Value::Null => Ok(ElementKind::ResourceNull),
        Value::Array(_) => Ok(ElementKind::ResourceCollection),
        Value::Object(object) => Ok(classify(object)),
        other => Err(args.invalid(format!(
            "Data value has to be null or an object, \"{}\" given.",
            json_type(other)
        ))),
    }
}
