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

//! Invalid inputs for error handling tests.

use serde_json::{json, Value};

/// Text that is not a JSON object at the top level.
///
/// Each tuple contains (name, text).
pub fn invalid_json_samples() -> Vec<(&'static str, &'static str)> {
    vec![
        ("empty", ""),
        ("whitespace_only", "  \n\t "),
        ("truncated", "{\"data\": {\"type\": \"a\""),
        ("trailing_comma", "{\"meta\": {},}"),
        ("single_quotes", "{'meta': {}}"),
        ("bare_word", "jsonapi"),
        ("array", "[{\"type\": \"a\", \"id\": \"1\"}]"),
        ("string", "\"document\""),
        ("number", "42"),
        ("null", "null"),
    ]
}

/// Decoded documents that break a JSON:API rule.
///
/// Each tuple contains (name, document, expected message fragment).
pub fn invalid_documents() -> Vec<(&'static str, Value, &'static str)> {
    vec![
        ("empty_object", json!({}), "at least one of the following properties: data, errors, meta"),
        ("links_only", json!({"links": {"self": "/"}}), "at least one of the following properties"),
        (
            "data_and_errors",
            json!({"data": {"type": "a", "id": "1"}, "errors": [{}]}),
            "MUST NOT coexist",
        ),
        ("included_without_data", json!({"meta": {}, "included": []}), "`included`"),
        ("data_string", json!({"data": "articles"}), "Data value has to be null or an object"),
        ("data_number", json!({"data": 1}), "\"number\" given"),
        ("missing_type", json!({"data": {"id": "1", "attributes": {}}}), "MUST contain a type"),
        ("missing_id", json!({"data": {"type": "a", "attributes": {}}}), "MUST contain an id"),
        ("type_object", json!({"data": {"type": {"a": 1}, "id": "1"}}), "type cannot be an array or object"),
        ("id_array", json!({"data": {"type": "a", "id": [1]}}), "id cannot be an array or object"),
        (
            "reserved_attribute",
            json!({"data": {"type": "a", "id": "1", "attributes": {"links": {}}}}),
            "not allowed in attributes",
        ),
        (
            "attributes_array",
            json!({"data": {"type": "a", "id": "1", "attributes": []}}),
            "Attributes has to be an object",
        ),
        (
            "reserved_relationship",
            json!({"data": {"type": "a", "id": "1", "relationships": {"id": {"meta": {}}}}}),
            "not allowed in relationships",
        ),
        (
            "empty_relationship",
            json!({"data": {"type": "a", "id": "1", "relationships": {"author": {}}}}),
            "links, data, meta",
        ),
        (
            "attribute_relationship_clash",
            json!({"data": {"type": "a", "id": "1", "attributes": {"author": "x"}, "relationships": {"author": {"data": null}}}}),
            "both an attribute and a relationship",
        ),
        ("collection_scalar", json!({"data": [1]}), "MUST be objects"),
        ("meta_array", json!({"meta": []}), "Meta has to be an object"),
        ("link_number", json!({"meta": {}, "links": {"self": 1}}), "has to be an object or string"),
        ("link_without_href", json!({"meta": {}, "links": {"self": {}}}), "\"href\""),
        (
            "relationship_link_without_self",
            json!({"data": {"type": "a", "id": "1", "relationships": {"author": {"links": {"first": "/"}}}}}),
            "\"self\" or \"related\"",
        ),
        ("errors_empty", json!({"errors": []}), "cannot be empty"),
        ("errors_object", json!({"errors": {}}), "has to be in an array"),
        ("error_status_array", json!({"errors": [{"status": [500]}]}), "Error status cannot be an array or object"),
        ("error_link_without_about", json!({"errors": [{"links": {"self": "/"}}]}), "about"),
        ("error_source_pointer", json!({"errors": [{"source": {"pointer": {}}}]}), "ErrorSource pointer cannot be an array or object"),
        ("jsonapi_version_object", json!({"meta": {}, "jsonapi": {"version": {"major": 1}}}), "Jsonapi version cannot be an array or object"),
        ("link_href_array", json!({"meta": {}, "links": {"self": {"href": ["/a"]}}}), "Link href cannot be an array or object"),
    ]
}
