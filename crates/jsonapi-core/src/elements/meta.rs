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

//! `meta` and `jsonapi` objects.

use super::{coerce_to_string, expect_object};
use crate::context::Args;
use crate::error::JsonApiResult;
use crate::store::Store;
use crate::ElementKind;
use serde_json::Value;

/// Non-standard meta-information. Any object is valid.
#[derive(Debug, Clone, PartialEq)]
pub struct Meta {
    store: Store,
    parent: Option<ElementKind>,
}

super::impl_element!(Meta, Jsonapi);

impl Meta {
    pub fn from_args(args: Args<'_>) -> JsonApiResult<Self> {
        let object = expect_object(&args, "Meta")?;
        let mut store = Store::named();
        for (name, value) in object {
            store.set(name, value.clone());
        }
        Ok(Self {
            store,
            parent: args.parent_kind(),
        })
    }

    /// Raw member `name`.
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.store.value(name)
    }
}

/// The top-level `jsonapi` object describing the server implementation.
#[derive(Debug, Clone, PartialEq)]
pub struct Jsonapi {
    store: Store,
    parent: Option<ElementKind>,
}

impl Jsonapi {
    pub fn from_args(args: Args<'_>) -> JsonApiResult<Self> {
        let object = expect_object(&args, "Jsonapi")?;
        let mut store = Store::named();
        for (name, value) in object {
            match name.as_str() {
                "version" => store.set(name, coerce_to_string(&args, "Jsonapi", name, value)?),
                "meta" => store.set(name, args.make(ElementKind::Jsonapi, ElementKind::Meta, name, value)?),
                // `ext` and `profile` (JSON:API 1.1) are kept as given
                _ => store.set(name, value.clone()),
            }
        }
        Ok(Self {
            store,
            parent: args.parent_kind(),
        })
    }

    /// The highest JSON:API version the server supports.
    pub fn version(&self) -> Option<&str> {
        self.store.str("version")
    }

    pub fn meta(&self) -> Option<&Meta> {
        self.store.element("meta").and_then(|e| e.as_meta())
    }
}
