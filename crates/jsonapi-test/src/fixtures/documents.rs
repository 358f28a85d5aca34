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

//! Valid response documents.

use serde_json::{json, Value};

/// `data` holding only a resource identifier.
pub fn single_identifier() -> Value {
    json!({"data": {"type": "articles", "id": "1"}})
}

/// Identifier with `meta`, still an identifier.
pub fn identifier_with_meta() -> Value {
    json!({"data": {"type": "articles", "id": "1", "meta": {"revision": "3"}}})
}

/// A single full resource.
pub fn single_item() -> Value {
    json!({
        "data": {
            "type": "articles",
            "id": "1",
            "attributes": {
                "title": "JSON:API paints my bikeshed!",
                "body": "The shortest article. Ever.",
                "tags": ["api", "json"],
                "created": "2015-05-22T14:56:29.000Z"
            },
            "links": {"self": "http://example.com/articles/1"}
        }
    })
}

/// Two resources in a collection.
pub fn article_collection() -> Value {
    json!({
        "data": [
            {"type": "articles", "id": "1", "attributes": {"title": "First"}},
            {"type": "articles", "id": "2", "attributes": {"title": "Second"}}
        ]
    })
}

pub fn empty_collection() -> Value {
    json!({"data": []})
}

/// `data: null`, e.g. an empty to-one lookup.
pub fn null_data() -> Value {
    json!({"data": null, "links": {"self": "http://example.com/articles/1/author"}})
}

/// The compound document of the JSON:API home page.
pub fn compound() -> Value {
    json!({
        "links": {
            "self": "http://example.com/articles/1"
        },
        "data": {
            "type": "articles",
            "id": "1",
            "attributes": {"title": "JSON:API paints my bikeshed!"},
            "relationships": {
                "author": {
                    "links": {
                        "self": "http://example.com/articles/1/relationships/author",
                        "related": "http://example.com/articles/1/author"
                    },
                    "data": {"type": "people", "id": "9"}
                },
                "comments": {
                    "links": {
                        "self": "http://example.com/articles/1/relationships/comments",
                        "related": "http://example.com/articles/1/comments"
                    },
                    "data": [
                        {"type": "comments", "id": "5"},
                        {"type": "comments", "id": "12"}
                    ]
                }
            },
            "links": {"self": "http://example.com/articles/1"}
        },
        "included": [
            {
                "type": "people",
                "id": "9",
                "attributes": {"firstName": "Dan", "lastName": "Gebhardt", "twitter": "dgeb"},
                "links": {"self": "http://example.com/people/9"}
            },
            {
                "type": "comments",
                "id": "5",
                "attributes": {"body": "First!"},
                "relationships": {"author": {"data": {"type": "people", "id": "2"}}},
                "links": {"self": "http://example.com/comments/5"}
            },
            {
                "type": "comments",
                "id": "12",
                "attributes": {"body": "I like XML better"},
                "relationships": {"author": {"data": {"type": "people", "id": "9"}}},
                "links": {"self": "http://example.com/comments/12"}
            }
        ]
    })
}

/// Empty to-one, empty to-many and meta-only relationships.
pub fn relationships() -> Value {
    json!({
        "data": {
            "type": "articles",
            "id": "1",
            "relationships": {
                "author": {"data": null},
                "tags": {"data": []},
                "stats": {"meta": {"views": 42}}
            }
        }
    })
}

/// Pagination links, including null ones.
pub fn paginated() -> Value {
    json!({
        "data": [{"type": "articles", "id": "3"}],
        "links": {
            "self": "http://example.com/articles?page[number]=3",
            "first": "http://example.com/articles?page[number]=1",
            "prev": "http://example.com/articles?page[number]=2",
            "next": null,
            "last": "http://example.com/articles?page[number]=3"
        },
        "meta": {"totalPages": 3}
    })
}

/// Link objects with `href`, `meta` and 1.1 members.
pub fn link_objects() -> Value {
    json!({
        "data": {
            "type": "articles",
            "id": "1",
            "links": {
                "self": {"href": "http://example.com/articles/1", "meta": {"count": 10}},
                "describedby": {"href": "http://example.com/schemas/article", "type": "application/schema+json"}
            }
        }
    })
}

pub fn meta_only() -> Value {
    json!({"meta": {"copyright": "Copyright 2015 Example Corp.", "authors": ["Yehuda Katz", "Steve Klabnik"]}})
}

/// An error document.
pub fn errors_document() -> Value {
    json!({
        "jsonapi": {"version": "1.0"},
        "errors": [
            {
                "status": "422",
                "source": {"pointer": "/data/attributes/firstName"},
                "title": "Invalid Attribute",
                "detail": "First name must contain at least three characters."
            },
            {
                "id": "rate-limit",
                "status": "429",
                "code": "too_many_requests",
                "links": {"about": "http://example.com/docs/rate-limits"},
                "source": {"header": "X-Rate-Limit"},
                "meta": {"retryAfter": 30}
            }
        ]
    })
}

pub fn jsonapi_object() -> Value {
    json!({
        "jsonapi": {"version": "1.1", "meta": {"server": "example"}},
        "data": null
    })
}
