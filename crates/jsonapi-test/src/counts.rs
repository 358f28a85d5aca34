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

//! Fixture counting utilities.
//!
//! Functions for counting resources in raw fixtures, used to
//! cross-check what the element tree reports.

use serde_json::Value;

/// Count resource objects in `data` and `included` of a raw document.
pub fn count_resources(document: &Value) -> usize {
    ["data", "included"]
        .iter()
        .filter_map(|member| document.get(member))
        .map(|value| match value {
            Value::Array(resources) => resources.len(),
            Value::Object(_) => 1,
            _ => 0,
        })
        .sum()
}
