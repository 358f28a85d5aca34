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

//! Ordered keyed storage shared by every element.
//!
//! Objects keep their members in an insertion-ordered hash map,
//! collections keep integer-indexed slots. Both are read through the
//! [`Accessable`](crate::Accessable) protocol.

use crate::Element;
use indexmap::IndexMap;
use serde_json::Value;
use std::fmt;

/// A key of an element's store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    /// Member name of an object-like element.
    Name(String),
    /// Position inside a collection.
    Index(usize),
}

impl Key {
    /// Try to get the key as a member name.
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Self::Name(name) => Some(name),
            Self::Index(_) => None,
        }
    }

    /// Try to get the key as a collection index.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Self::Index(index) => Some(*index),
            Self::Name(_) => None,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => write!(f, "{}", name),
            Self::Index(index) => write!(f, "{}", index),
        }
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

/// A stored value: either a child element or a raw JSON leaf.
#[derive(Debug, Clone, PartialEq)]
pub enum Slot {
    Element(Element),
    Value(Value),
}

impl Slot {
    /// Try to get the slot as a child element.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            Self::Value(_) => None,
        }
    }

    /// Try to get the slot as a raw value.
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Value(value) => Some(value),
            Self::Element(_) => None,
        }
    }
}

impl From<Element> for Slot {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<Value> for Slot {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

/// Keyed storage of an element.
#[derive(Debug, Clone, PartialEq)]
pub enum Store {
    /// Insertion-ordered members of an object-like element.
    Named(IndexMap<String, Slot>),
    /// Integer-keyed slots of a collection.
    Indexed(Vec<Slot>),
}

impl Default for Store {
    fn default() -> Self {
        Self::named()
    }
}

impl Store {
    /// Create an empty store for an object-like element.
    pub fn named() -> Self {
        Self::Named(IndexMap::new())
    }

    /// Create an empty store for a collection.
    pub fn indexed() -> Self {
        Self::Indexed(Vec::new())
    }

    /// Returns true for collection stores.
    pub fn is_indexed(&self) -> bool {
        matches!(self, Self::Indexed(_))
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Named(entries) => entries.len(),
            Self::Indexed(slots) => slots.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Set a slot.
    ///
    /// On a named store an existing member is replaced in place, a new one
    /// is appended. On an indexed store the empty key appends to the next
    /// positional slot and a numeric key replaces an existing slot or
    /// appends when it equals the current length.
    pub(crate) fn set(&mut self, key: &str, slot: impl Into<Slot>) {
        let slot = slot.into();
        match self {
            Self::Named(entries) => {
                entries.insert(key.to_string(), slot);
            }
            Self::Indexed(slots) => match key.parse::<usize>() {
                Ok(index) if index < slots.len() => slots[index] = slot,
                _ => slots.push(slot),
            },
        }
    }

    /// Append to the next positional slot.
    pub(crate) fn push(&mut self, slot: impl Into<Slot>) {
        self.set("", slot);
    }

    /// Look up a single key segment.
    ///
    /// Collection slots accept the decimal form of their index.
    pub fn lookup(&self, segment: &str) -> Option<&Slot> {
        match self {
            Self::Named(entries) => entries.get(segment),
            Self::Indexed(slots) => parse_index(segment).and_then(|index| slots.get(index)),
        }
    }

    /// Keys in insertion (or index) order.
    pub fn keys(&self) -> Vec<Key> {
        match self {
            Self::Named(entries) => entries.keys().cloned().map(Key::Name).collect(),
            Self::Indexed(slots) => (0..slots.len()).map(Key::Index).collect(),
        }
    }

    /// Iterate over keys and slots in order.
    pub fn iter(&self) -> Box<dyn Iterator<Item = (Key, &Slot)> + '_> {
        match self {
            Self::Named(entries) => Box::new(
                entries
                    .iter()
                    .map(|(name, slot)| (Key::Name(name.clone()), slot)),
            ),
            Self::Indexed(slots) => Box::new(
                slots
                    .iter()
                    .enumerate()
                    .map(|(index, slot)| (Key::Index(index), slot)),
            ),
        }
    }

    /// Member names of a named store, in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        let entries = match self {
            Self::Named(entries) => Some(entries),
            Self::Indexed(_) => None,
        };
        entries
            .into_iter()
            .flat_map(|entries| entries.keys().map(String::as_str))
    }

    /// Child element stored under `name`.
    pub fn element(&self, name: &str) -> Option<&Element> {
        self.lookup(name).and_then(Slot::as_element)
    }

    /// Raw value stored under `name`.
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.lookup(name).and_then(Slot::as_value)
    }

    /// String leaf stored under `name`.
    pub fn str(&self, name: &str) -> Option<&str> {
        self.value(name).and_then(Value::as_str)
    }

    /// Child elements of a collection store, in order.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        let slots: &[Slot] = match self {
            Self::Indexed(slots) => slots,
            Self::Named(_) => &[],
        };
        slots.iter().filter_map(Slot::as_element)
    }
}

/// Canonical decimal indices only: "01" and "+1" do not address slot 1.
fn parse_index(segment: &str) -> Option<usize> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if segment.len() > 1 && segment.starts_with('0') {
        return None;
    }
    segment.parse().ok()
}
