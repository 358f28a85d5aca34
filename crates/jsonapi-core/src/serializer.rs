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

//! Projection of an element tree back into plain associative data.
//!
//! [`ArraySerializer`] walks an element through the accessor protocol:
//! every key from `keys()` is looked up with `get()`. Named stores project
//! to objects, collections to arrays, so a recursive projection of a parsed
//! document re-encodes to the logical structure of its input (with `type`
//! and `id` coerced to strings and unknown members dropped).
//!
//! # Example
//!
//! ```rust
//! use jsonapi_core::{parse, ArraySerializer, ParseOptions};
//! use serde_json::json;
//!
//! let value = json!({"data": {"type": "articles", "id": "1", "attributes": {"title": "x"}}});
//! let document = parse(&value, &ParseOptions::default()).unwrap();
//! let projection = ArraySerializer::new()
//!     .recursive(true)
//!     .serialize(&document)
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(projection.to_json(), value);
//! ```

use crate::accessor::{Accessable, Accessed};
use crate::error::JsonApiResult;
use crate::store::{Key, Slot, Store};
use crate::Element;
use serde_json::{Map, Value};

/// Converts elements into [`Projection`]s.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArraySerializer {
    recursive: bool,
}

impl ArraySerializer {
    /// A non-recursive serializer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expand nested elements depth-first instead of returning them as is.
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    pub fn is_recursive(&self) -> bool {
        self.recursive
    }

    /// Project `element`.
    ///
    /// Returns `Ok(None)` for a null resource. Errors only come from the
    /// underlying `get` calls.
    pub fn serialize<'a, A: Accessable>(&self, element: &'a A) -> JsonApiResult<Option<Projection<'a>>> {
        if element.is_null() {
            return Ok(None);
        }
        self.project(element).map(Some)
    }

    fn project<'a, A: Accessable>(&self, element: &'a A) -> JsonApiResult<Projection<'a>> {
        let mut entries = Vec::new();
        for key in element.keys() {
            let projected = match element.get(&key)? {
                Accessed::Value(value) => Projected::Value(value),
                Accessed::Element(child) if !self.recursive => Projected::Element(child),
                Accessed::Element(Element::ResourceNull(_)) => Projected::Null,
                Accessed::Element(child) => Projected::Nested(self.project(child)?),
            };
            entries.push((key, projected));
        }
        Ok(Projection {
            indexed: element.store().is_indexed(),
            entries,
        })
    }
}

/// One entry of a [`Projection`].
#[derive(Debug, Clone, PartialEq)]
pub enum Projected<'a> {
    /// A nested element left as is (non-recursive mode).
    Element(&'a Element),
    /// A raw JSON leaf.
    Value(&'a Value),
    /// A nested element expanded (recursive mode).
    Nested(Projection<'a>),
    /// A nested null resource (recursive mode).
    Null,
}

impl Projected<'_> {
    pub fn to_json(&self) -> Value {
        match self {
            Self::Element(element) => serialize_to_value(*element),
            Self::Value(value) => (*value).clone(),
            Self::Nested(projection) => projection.to_json(),
            Self::Null => Value::Null,
        }
    }
}

/// Ordered associative view of one element.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection<'a> {
    indexed: bool,
    entries: Vec<(Key, Projected<'a>)>,
}

impl<'a> Projection<'a> {
    /// True when the projected element is a collection.
    pub fn is_indexed(&self) -> bool {
        self.indexed
    }

    pub fn entries(&self) -> &[(Key, Projected<'a>)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry stored under `key`.
    pub fn get(&self, key: impl Into<Key>) -> Option<&Projected<'a>> {
        let key = key.into();
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, projected)| projected)
    }

    /// Object for named elements, array for collections.
    pub fn to_json(&self) -> Value {
        if self.indexed {
            Value::Array(self.entries.iter().map(|(_, p)| p.to_json()).collect())
        } else {
            Value::Object(
                self.entries
                    .iter()
                    .map(|(key, p)| (key.to_string(), p.to_json()))
                    .collect(),
            )
        }
    }
}

/// Recursive projection of `element` straight to JSON.
///
/// Walks the stores directly, so it cannot fail.
pub fn serialize_to_value<A: Accessable + ?Sized>(element: &A) -> Value {
    if element.is_null() {
        return Value::Null;
    }
    store_to_value(element.store())
}

fn store_to_value(store: &Store) -> Value {
    let slot_to_value = |slot: &Slot| match slot {
        Slot::Element(element) => serialize_to_value(element),
        Slot::Value(value) => value.clone(),
    };
    if store.is_indexed() {
        Value::Array(store.iter().map(|(_, slot)| slot_to_value(slot)).collect())
    } else {
        let mut object = Map::new();
        for (key, slot) in store.iter() {
            object.insert(key.to_string(), slot_to_value(slot));
        }
        Value::Object(object)
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::{Projected, Projection};
    use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

    impl Serialize for Projected<'_> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            match self {
                Self::Element(element) => super::serialize_to_value(*element).serialize(serializer),
                Self::Value(value) => value.serialize(serializer),
                Self::Nested(projection) => projection.serialize(serializer),
                Self::Null => serializer.serialize_none(),
            }
        }
    }

    impl Serialize for Projection<'_> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if self.indexed {
                let mut seq = serializer.serialize_seq(Some(self.entries.len()))?;
                for (_, projected) in &self.entries {
                    seq.serialize_element(projected)?;
                }
                seq.end()
            } else {
                let mut map = serializer.serialize_map(Some(self.entries.len()))?;
                for (key, projected) in &self.entries {
                    map.serialize_entry(&key.to_string(), projected)?;
                }
                map.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parse, ElementKind, ParseOptions};
    use serde_json::json;

    #[test]
    fn test_null_resource_serializes_to_none() {
        let document = parse(&json!({"data": null}), &ParseOptions::default()).unwrap();
        let data = document.data().unwrap();
        assert!(ArraySerializer::new().serialize(data).unwrap().is_none());
        assert_eq!(serialize_to_value(data), Value::Null);
    }

    #[test]
    fn test_non_recursive_keeps_elements() {
        let value = json!({"data": {"type": "a", "id": "1"}, "meta": {"m": 1}});
        let document = parse(&value, &ParseOptions::default()).unwrap();
        let projection = ArraySerializer::new()
            .serialize(&document)
            .unwrap()
            .unwrap();
        assert!(!projection.is_indexed());
        match projection.get("data") {
            Some(Projected::Element(element)) => {
                assert_eq!(element.kind(), ElementKind::ResourceIdentifier)
            }
            other => panic!("expected an element, got {:?}", other),
        }
        assert_eq!(projection.to_json(), value);
    }

    #[test]
    fn test_recursive_expands_nested_elements() {
        let value = json!({"data": [{"type": "a", "id": "1"}, {"type": "a", "id": "2"}]});
        let document = parse(&value, &ParseOptions::default()).unwrap();
        let projection = ArraySerializer::new()
            .recursive(true)
            .serialize(&document)
            .unwrap()
            .unwrap();
        match projection.get("data") {
            Some(Projected::Nested(collection)) => {
                assert!(collection.is_indexed());
                assert_eq!(collection.len(), 2);
                assert!(collection.get(1usize).is_some());
            }
            other => panic!("expected a nested projection, got {:?}", other),
        }
        assert_eq!(projection.to_json(), value);
    }

    #[test]
    fn test_recursive_null_relationship_data() {
        let value = json!({
            "data": {
                "type": "articles",
                "id": "1",
                "relationships": {"author": {"data": null}}
            }
        });
        let document = parse(&value, &ParseOptions::default()).unwrap();
        let projection = ArraySerializer::new()
            .recursive(true)
            .serialize(&document)
            .unwrap()
            .unwrap();
        assert_eq!(projection.to_json(), value);
    }

    #[test]
    fn test_coerced_ids_project_as_strings() {
        let document = parse(&json!({"data": {"type": "a", "id": 7}}), &ParseOptions::default()).unwrap();
        assert_eq!(
            serialize_to_value(&document),
            json!({"data": {"type": "a", "id": "7"}})
        );
    }
}
