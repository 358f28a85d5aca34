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

//! Valid request bodies.

use serde_json::{json, Value};

/// Create a resource without a client-generated id.
pub fn create_article() -> Value {
    json!({
        "data": {
            "type": "articles",
            "attributes": {"title": "Ember Hamster", "src": "http://example.com/images/productivity.png"}
        }
    })
}

pub fn create_with_relationships() -> Value {
    json!({
        "data": {
            "type": "photos",
            "attributes": {"title": "Ember Hamster"},
            "relationships": {
                "photographer": {"data": {"type": "people", "id": "9"}}
            }
        }
    })
}

pub fn update_article() -> Value {
    json!({
        "data": {
            "type": "articles",
            "id": "1",
            "attributes": {"title": "To TDD or Not"}
        }
    })
}

/// Replace a to-one relationship.
pub fn update_to_one() -> Value {
    json!({"data": {"type": "people", "id": "12"}})
}

/// Replace a to-many relationship.
pub fn update_to_many() -> Value {
    json!({"data": [{"type": "tags", "id": "2"}, {"type": "tags", "id": "3"}]})
}
