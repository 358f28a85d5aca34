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

//! Error objects of an `errors` document.

use super::{coerce_to_string, expect_array, expect_object, json_type, Element, ErrorLink, Meta};
use crate::context::Args;
use crate::error::JsonApiResult;
use crate::store::Store;
use crate::ElementKind;

const STRING_MEMBERS: [&str; 5] = ["id", "status", "code", "title", "detail"];
const SOURCE_MEMBERS: [&str; 3] = ["pointer", "parameter", "header"];

/// The top-level `errors` array.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorCollection {
    store: Store,
    parent: Option<ElementKind>,
}

/// A single error object.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorObject {
    store: Store,
    parent: Option<ElementKind>,
}

/// `source` of an error object.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorSource {
    store: Store,
    parent: Option<ElementKind>,
}

super::impl_element!(ErrorCollection, ErrorObject, ErrorSource);

impl ErrorCollection {
    pub fn from_args(args: Args<'_>) -> JsonApiResult<Self> {
        let errors = expect_array(&args, "Errors for a collection")?;
        if errors.is_empty() {
            return Err(args.invalid("Errors array cannot be empty and MUST have an error object"));
        }

        let mut store = Store::indexed();
        for (index, error) in errors.iter().enumerate() {
            if !error.is_object() {
                return Err(args.invalid(format!(
                    "Error has to be an object, \"{}\" given.",
                    json_type(error)
                )));
            }
            store.push(args.make(
                ElementKind::ErrorCollection,
                ElementKind::Error,
                &index.to_string(),
                error,
            )?);
        }
        Ok(Self {
            store,
            parent: args.parent_kind(),
        })
    }

    pub fn errors(&self) -> impl Iterator<Item = &ErrorObject> {
        self.store.elements().filter_map(Element::as_error)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

impl ErrorObject {
    pub fn from_args(args: Args<'_>) -> JsonApiResult<Self> {
        const OWN: ElementKind = ElementKind::Error;
        let object = expect_object(&args, "Error")?;

        let mut store = Store::named();
        for (name, value) in object {
            match name.as_str() {
                member if STRING_MEMBERS.contains(&member) => {
                    store.set(name, coerce_to_string(&args, "Error", name, value)?)
                }
                "links" => store.set(name, args.make(OWN, ElementKind::ErrorLink, name, value)?),
                "source" => store.set(name, args.make(OWN, ElementKind::ErrorSource, name, value)?),
                "meta" => store.set(name, args.make(OWN, ElementKind::Meta, name, value)?),
                _ => {}
            }
        }
        Ok(Self {
            store,
            parent: args.parent_kind(),
        })
    }

    pub fn id(&self) -> Option<&str> {
        self.store.str("id")
    }

    /// HTTP status code, as a string.
    pub fn status(&self) -> Option<&str> {
        self.store.str("status")
    }

    pub fn code(&self) -> Option<&str> {
        self.store.str("code")
    }

    pub fn title(&self) -> Option<&str> {
        self.store.str("title")
    }

    pub fn detail(&self) -> Option<&str> {
        self.store.str("detail")
    }

    pub fn links(&self) -> Option<&ErrorLink> {
        self.store.element("links").and_then(Element::as_error_link)
    }

    pub fn source(&self) -> Option<&ErrorSource> {
        self.store.element("source").and_then(Element::as_error_source)
    }

    pub fn meta(&self) -> Option<&Meta> {
        self.store.element("meta").and_then(Element::as_meta)
    }
}

impl ErrorSource {
    pub fn from_args(args: Args<'_>) -> JsonApiResult<Self> {
        let object = expect_object(&args, "ErrorSource")?;

        let mut store = Store::named();
        for (name, value) in object {
            if SOURCE_MEMBERS.contains(&name.as_str()) {
                store.set(name, coerce_to_string(&args, "ErrorSource", name, value)?);
            }
        }
        Ok(Self {
            store,
            parent: args.parent_kind(),
        })
    }

    /// JSON Pointer to the offending value in the request document.
    pub fn pointer(&self) -> Option<&str> {
        self.store.str("pointer")
    }

    pub fn parameter(&self) -> Option<&str> {
        self.store.str("parameter")
    }

    pub fn header(&self) -> Option<&str> {
        self.store.str("header")
    }
}
