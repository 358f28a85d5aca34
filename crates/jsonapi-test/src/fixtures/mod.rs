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

//! Canonical JSON:API fixtures.
//!
//! - **documents**: valid response documents
//! - **requests**: valid request bodies, some without resource `id`
//! - **errors**: invalid JSON text and invalid documents

mod documents;
pub mod errors;
mod requests;

pub use documents::*;
pub use requests::*;

use crate::FixtureList;

/// Returns all response fixtures for iteration.
///
/// Every entry is valid in response mode and survives a round trip
/// through the element tree unchanged.
pub fn all() -> FixtureList {
    vec![
        ("single_identifier", single_identifier),
        ("identifier_with_meta", identifier_with_meta),
        ("single_item", single_item),
        ("article_collection", article_collection),
        ("empty_collection", empty_collection),
        ("null_data", null_data),
        ("compound", compound),
        ("relationships", relationships),
        ("paginated", paginated),
        ("link_objects", link_objects),
        ("meta_only", meta_only),
        ("errors", errors_document),
        ("jsonapi_object", jsonapi_object),
    ]
}

/// Returns all request fixtures for iteration.
///
/// Every entry is valid in request mode.
pub fn all_requests() -> FixtureList {
    vec![
        ("create_article", create_article),
        ("create_with_relationships", create_with_relationships),
        ("update_article", update_article),
        ("update_to_one", update_to_one),
        ("update_to_many", update_to_many),
    ]
}
