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

//! Resource `attributes`.

use super::expect_object;
use crate::context::Args;
use crate::error::JsonApiResult;
use crate::store::Store;
use crate::ElementKind;
use serde_json::Value;

/// Member names reserved by JSON:API that attributes must not use.
const RESERVED: [&str; 2] = ["relationships", "links"];

/// Open mapping of attribute names to arbitrary values.
#[derive(Debug, Clone, PartialEq)]
pub struct Attributes {
    store: Store,
    parent: Option<ElementKind>,
}

super::impl_element!(Attributes);

impl Attributes {
    pub fn from_args(args: Args<'_>) -> JsonApiResult<Self> {
        let object = expect_object(&args, "Attributes")?;
        if RESERVED.iter().any(|name| object.contains_key(*name)) {
            return Err(args.invalid(
                "These properties are not allowed in attributes: `relationships`, `links`",
            ));
        }

        let mut store = Store::named();
        for (name, value) in object {
            store.set(name, value.clone());
        }
        Ok(Self {
            store,
            parent: args.parent_kind(),
        })
    }

    /// Raw value of attribute `name`.
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.store.value(name)
    }

    /// Attribute names in document order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.store.names()
    }
}
