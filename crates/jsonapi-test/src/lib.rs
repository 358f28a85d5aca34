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

//! Shared test fixtures for JSON:API document parsing.
//!
//! This crate provides canonical JSON:API documents and invalid samples so
//! that the core and facade crates test against the same inputs.
//!
//! # Quick Start
//!
//! ```rust
//! use jsonapi_test::fixtures;
//!
//! // Valid response documents, already decoded
//! let doc = fixtures::single_identifier();
//! let doc = fixtures::article_collection();
//! let doc = fixtures::compound();
//!
//! // Request bodies (resource `id` may be missing)
//! let body = fixtures::create_article();
//!
//! // Invalid documents with the message fragment each must produce
//! use jsonapi_test::fixtures::errors;
//!
//! for (name, invalid, expected) in errors::invalid_documents() {
//!     // Parse `invalid` and check the message contains `expected`
//! }
//! ```

use serde_json::Value;

/// Type alias for a list of fixture functions (name, generator).
pub type FixtureList = Vec<(&'static str, fn() -> Value)>;

/// Returns all response fixtures as (name, json_text) pairs.
pub fn fixtures_as_json() -> Vec<(&'static str, String)> {
    fixtures::all()
        .into_iter()
        .map(|(name, fixture_fn)| {
            let text = serde_json::to_string_pretty(&fixture_fn())
                .unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e));
            (name, text)
        })
        .collect()
}

/// Canonical JSON:API fixtures.
pub mod fixtures;

/// Fixture counting utilities.
pub mod counts;

pub use counts::count_resources;
pub use fixtures::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_fixtures_are_objects() {
        for (name, fixture_fn) in fixtures::all() {
            assert!(fixture_fn().is_object(), "{} is not an object", name);
        }
    }

    #[test]
    fn test_fixtures_as_json_reparse() {
        for (name, text) in fixtures_as_json() {
            let reparsed: Value = serde_json::from_str(&text).unwrap();
            let original = fixtures::all()
                .into_iter()
                .find(|(n, _)| *n == name)
                .map(|(_, f)| f())
                .unwrap();
            assert_eq!(reparsed, original, "{}", name);
        }
    }

    #[test]
    fn test_fixture_names_are_unique() {
        let mut names: Vec<_> = fixtures::all().into_iter().map(|(n, _)| n).collect();
        let len = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), len);
    }
}
