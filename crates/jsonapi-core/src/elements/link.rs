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

//! `links` objects and link objects.
//!
//! All link containers share one member rule: a link is either a URL
//! string (kept as a leaf) or a link object with an `href`. Containers
//! that carry pagination additionally accept `null` for `first`, `last`,
//! `prev` and `next`.

use super::{coerce_to_string, expect_object, json_type, Element, Meta};
use crate::context::Args;
use crate::error::JsonApiResult;
use crate::store::Store;
use crate::ElementKind;
use serde_json::{Map, Value};

const PAGINATION: [&str; 4] = ["first", "last", "prev", "next"];

/// Build the members of a links object of kind `own`.
fn link_members(
    args: &Args<'_>,
    own: ElementKind,
    object: &Map<String, Value>,
    nullable: &[&str],
) -> JsonApiResult<Store> {
    let mut store = Store::named();
    for (name, value) in object {
        match value {
            Value::String(_) => store.set(name, value.clone()),
            Value::Object(_) => store.set(name, args.make(own, ElementKind::Link, name, value)?),
            Value::Null if nullable.contains(&name.as_str()) => store.set(name, Value::Null),
            other => {
                return Err(args.invalid(format!(
                    "Link attribute `{}` has to be an object or string, \"{}\" given.",
                    name,
                    json_type(other)
                )))
            }
        }
    }
    Ok(store)
}

/// Top-level document `links`, including pagination.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentLink {
    store: Store,
    parent: Option<ElementKind>,
}

/// `links` of a resource object.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceItemLink {
    store: Store,
    parent: Option<ElementKind>,
}

/// `links` of a relationship object: `self` and/or `related`, plus pagination.
#[derive(Debug, Clone, PartialEq)]
pub struct RelationshipLink {
    store: Store,
    parent: Option<ElementKind>,
}

/// `links` of an error object.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorLink {
    store: Store,
    parent: Option<ElementKind>,
}

/// A link object: `href`, optional `meta`, other members kept raw.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    store: Store,
    parent: Option<ElementKind>,
}

super::impl_element!(DocumentLink, ResourceItemLink, RelationshipLink, ErrorLink, Link);

/// Getters shared by every links container.
macro_rules! link_getters {
    ($($ty:ty),*) => {
        $(
            impl $ty {
                /// Link `name`: a URL leaf, a [`Link`] element or a null pagination link.
                pub fn link(&self, name: &str) -> Option<crate::Accessed<'_>> {
                    self.store.lookup(name).map(crate::Accessed::from)
                }

                /// Target URL of link `name`, whichever form it takes.
                pub fn href(&self, name: &str) -> Option<&str> {
                    match self.store.lookup(name)? {
                        crate::Slot::Value(value) => value.as_str(),
                        crate::Slot::Element(element) => element.as_link().map(Link::href),
                    }
                }
            }
        )*
    };
}

link_getters!(DocumentLink, ResourceItemLink, RelationshipLink, ErrorLink);

impl DocumentLink {
    pub fn from_args(args: Args<'_>) -> JsonApiResult<Self> {
        let object = expect_object(&args, "Link")?;
        let store = link_members(&args, ElementKind::DocumentLink, object, &PAGINATION)?;
        Ok(Self {
            store,
            parent: args.parent_kind(),
        })
    }
}

impl ResourceItemLink {
    pub fn from_args(args: Args<'_>) -> JsonApiResult<Self> {
        let object = expect_object(&args, "Link")?;
        let store = link_members(&args, ElementKind::ResourceItemLink, object, &[])?;
        Ok(Self {
            store,
            parent: args.parent_kind(),
        })
    }
}

impl RelationshipLink {
    pub fn from_args(args: Args<'_>) -> JsonApiResult<Self> {
        let object = expect_object(&args, "Link")?;
        if !object.contains_key("self") && !object.contains_key("related") {
            return Err(args.invalid(
                "RelationshipLink has to contain at least a \"self\" or \"related\" link",
            ));
        }
        let store = link_members(&args, ElementKind::RelationshipLink, object, &PAGINATION)?;
        Ok(Self {
            store,
            parent: args.parent_kind(),
        })
    }
}

impl ErrorLink {
    pub fn from_args(args: Args<'_>) -> JsonApiResult<Self> {
        let object = expect_object(&args, "Link")?;
        if !object.contains_key("about") {
            return Err(args.invalid("ErrorLink MUST contain these properties: about"));
        }
        let store = link_members(&args, ElementKind::ErrorLink, object, &[])?;
        Ok(Self {
            store,
            parent: args.parent_kind(),
        })
    }
}

impl Link {
    pub fn from_args(args: Args<'_>) -> JsonApiResult<Self> {
        let object = expect_object(&args, "Link")?;
        if !object.contains_key("href") {
            return Err(args.invalid("Link must have a \"href\" attribute."));
        }

        let mut store = Store::named();
        for (name, value) in object {
            match name.as_str() {
                "href" => store.set(name, coerce_to_string(&args, "Link", name, value)?),
                "meta" => store.set(name, args.make(ElementKind::Link, ElementKind::Meta, name, value)?),
                _ => store.set(name, value.clone()),
            }
        }
        Ok(Self {
            store,
            parent: args.parent_kind(),
        })
    }

    pub fn href(&self) -> &str {
        self.store.str("href").unwrap_or_default()
    }

    pub fn meta(&self) -> Option<&Meta> {
        self.store.element("meta").and_then(Element::as_meta)
    }
}
