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

//! Uniform `has` / `get` / `keys` access with dot-path traversal.
//!
//! Every element implements [`Accessable`] on top of its [`Store`]. A path
//! such as `"data.0.attributes.title"` is resolved one segment at a time:
//! each intermediate segment must resolve to a child element, raw JSON
//! leaves cannot be descended into.
//!
//! # Escaping
//!
//! A literal dot inside a member name is written `\.`, a literal backslash
//! `\\`. [`AccessPath::from_segments`] produces correctly escaped paths.

use crate::error::{JsonApiError, JsonApiResult};
use crate::store::{Key, Slot, Store};
use crate::{Element, ElementKind};
use serde_json::Value;
use std::fmt;

/// A parsed dot-path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessPath {
    raw: String,
    segments: Vec<String>,
}

impl AccessPath {
    /// Parse a dot-separated path.
    pub fn parse(raw: &str) -> Self {
        let mut segments = Vec::new();
        let mut current = String::new();
        let mut chars = raw.chars();
        while let Some(c) = chars.next() {
            match c {
                '\\' => match chars.next() {
                    Some(next @ ('.' | '\\')) => current.push(next),
                    Some(other) => {
                        current.push('\\');
                        current.push(other);
                    }
                    None => current.push('\\'),
                },
                '.' => segments.push(std::mem::take(&mut current)),
                _ => current.push(c),
            }
        }
        segments.push(current);
        Self {
            raw: raw.to_string(),
            segments,
        }
    }

    /// Build a path from unescaped segments.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        let raw = segments
            .iter()
            .map(|s| escape_segment(s))
            .collect::<Vec<_>>()
            .join(".");
        Self { raw, segments }
    }

    /// The path as supplied by the caller.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Unescaped segments.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

fn escape_segment(segment: &str) -> String {
    segment.replace('\\', "\\\\").replace('.', "\\.")
}

impl fmt::Display for AccessPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl From<&str> for AccessPath {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<&String> for AccessPath {
    fn from(raw: &String) -> Self {
        Self::parse(raw)
    }
}

impl From<String> for AccessPath {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<usize> for AccessPath {
    fn from(index: usize) -> Self {
        Self::from_segments([index.to_string()])
    }
}

/// A key is always a single segment, even when its name contains a dot.
impl From<Key> for AccessPath {
    fn from(key: Key) -> Self {
        Self::from_segments([key.to_string()])
    }
}

impl From<&Key> for AccessPath {
    fn from(key: &Key) -> Self {
        Self::from_segments([key.to_string()])
    }
}

/// The result of a successful `get`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Accessed<'a> {
    /// A child element, itself accessable.
    Element(&'a Element),
    /// A raw JSON leaf.
    Value(&'a Value),
}

impl<'a> Accessed<'a> {
    pub fn as_element(self) -> Option<&'a Element> {
        match self {
            Self::Element(element) => Some(element),
            Self::Value(_) => None,
        }
    }

    pub fn as_value(self) -> Option<&'a Value> {
        match self {
            Self::Value(value) => Some(value),
            Self::Element(_) => None,
        }
    }

    /// String leaf, e.g. a resource `type` or `id`.
    pub fn as_str(self) -> Option<&'a str> {
        self.as_value().and_then(Value::as_str)
    }

    /// Kind of the element, `None` for leaves.
    pub fn kind(self) -> Option<ElementKind> {
        self.as_element().map(Element::kind)
    }

    /// Continue a lookup from this result.
    ///
    /// Leaves cannot be descended into.
    pub fn get<P: Into<AccessPath>>(self, path: P) -> JsonApiResult<Accessed<'a>> {
        let path = path.into();
        match self {
            Self::Element(element) => element.get(path),
            Self::Value(_) => Err(JsonApiError::access(path.as_str())),
        }
    }

    pub fn has<P: Into<AccessPath>>(self, path: P) -> bool {
        match self {
            Self::Element(element) => element.has(path),
            Self::Value(_) => false,
        }
    }
}

impl<'a> From<&'a Slot> for Accessed<'a> {
    fn from(slot: &'a Slot) -> Self {
        match slot {
            Slot::Element(element) => Self::Element(element),
            Slot::Value(value) => Self::Value(value),
        }
    }
}

/// Key-based access shared by every element kind.
pub trait Accessable {
    /// The element's keyed store.
    fn store(&self) -> &Store;

    /// True only for a null resource, which has no keys.
    fn is_null(&self) -> bool {
        false
    }

    /// Keys in the order they were set.
    fn keys(&self) -> Vec<Key> {
        self.store().keys()
    }

    /// Whether `path` resolves.
    fn has<P: Into<AccessPath>>(&self, path: P) -> bool
    where
        Self: Sized,
    {
        let path = path.into();
        resolve(self.store(), path.segments()).is_some()
    }

    /// Resolve `path`, failing with an access error naming the full path.
    fn get<P: Into<AccessPath>>(&self, path: P) -> JsonApiResult<Accessed<'_>>
    where
        Self: Sized,
    {
        let path = path.into();
        resolve(self.store(), path.segments()).ok_or_else(|| JsonApiError::access(path.as_str()))
    }
}

/// Look up the first segment locally and hand the rest to the child.
fn resolve<'s>(store: &'s Store, segments: &[String]) -> Option<Accessed<'s>> {
    let (first, rest) = segments.split_first()?;
    let slot = store.lookup(first)?;
    if rest.is_empty() {
        return Some(Accessed::from(slot));
    }
    match slot {
        Slot::Element(child) => resolve(child.store(), rest),
        Slot::Value(_) => None,
    }
}
