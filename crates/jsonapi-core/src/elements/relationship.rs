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

//! Resource `relationships`.

use super::{expect_object, json_type, Element, Meta, RelationshipLink};
use crate::context::Args;
use crate::error::JsonApiResult;
use crate::store::Store;
use crate::ElementKind;

/// Members that share the resource's field namespace with `type` and `id`.
const RESERVED: [&str; 2] = ["type", "id"];

/// The `relationships` object of a resource item.
#[derive(Debug, Clone, PartialEq)]
pub struct RelationshipCollection {
    store: Store,
    parent: Option<ElementKind>,
}

/// A single relationship object.
#[derive(Debug, Clone, PartialEq)]
pub struct Relationship {
    store: Store,
    parent: Option<ElementKind>,
}

super::impl_element!(RelationshipCollection, Relationship);

impl RelationshipCollection {
    pub fn from_args(args: Args<'_>) -> JsonApiResult<Self> {
        let object = expect_object(&args, "Relationships")?;
        if let Some(name) = RESERVED.iter().find(|name| object.contains_key(**name)) {
            return Err(args.invalid(format!(
                "These properties are not allowed in relationships: `type`, `id` (`{}` given)",
                name
            )));
        }

        let mut store = Store::named();
        for (name, value) in object {
            store.set(
                name,
                args.make(
                    ElementKind::RelationshipCollection,
                    ElementKind::Relationship,
                    name,
                    value,
                )?,
            );
        }
        Ok(Self {
            store,
            parent: args.parent_kind(),
        })
    }

    /// Relationship names in document order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.store.names()
    }

    pub fn relationship(&self, name: &str) -> Option<&Relationship> {
        self.store.element(name).and_then(Element::as_relationship)
    }
}

impl Relationship {
    pub fn from_args(args: Args<'_>) -> JsonApiResult<Self> {
        const OWN: ElementKind = ElementKind::Relationship;
        let object = expect_object(&args, "Relationship")?;
        if !["links", "data", "meta"].iter().any(|name| object.contains_key(*name)) {
            return Err(args.invalid(
                "A Relationship object MUST contain at least one of the following properties: links, data, meta",
            ));
        }

        let mut store = Store::named();
        for (name, value) in object {
            let kind = match name.as_str() {
                "links" => ElementKind::RelationshipLink,
                "meta" => ElementKind::Meta,
                "data" => match value {
                    serde_json::Value::Null => ElementKind::ResourceNull,
                    serde_json::Value::Array(_) => ElementKind::ResourceIdentifierCollection,
                    serde_json::Value::Object(_) => ElementKind::ResourceIdentifier,
                    other => {
                        return Err(args.invalid(format!(
                            "Relationship data has to be null, an object or an array, \"{}\" given.",
                            json_type(other)
                        )))
                    }
                },
                _ => continue,
            };
            store.set(name, args.make(OWN, kind, name, value)?);
        }
        Ok(Self {
            store,
            parent: args.parent_kind(),
        })
    }

    /// Resource linkage: a null resource, an identifier or an identifier collection.
    pub fn data(&self) -> Option<&Element> {
        self.store.element("data")
    }

    pub fn links(&self) -> Option<&RelationshipLink> {
        self.store.element("links").and_then(Element::as_relationship_link)
    }

    pub fn meta(&self) -> Option<&Meta> {
        self.store.element("meta").and_then(Element::as_meta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Accessable, Context, ElementFactory, ParseOptions};
    use serde_json::{json, Value};

    fn build(kind: ElementKind, value: &Value) -> JsonApiResult<Element> {
        let factory = ElementFactory::default();
        let context = Context::new(&factory, ParseOptions::default());
        context.make(kind, Args::root(value, &context))
    }

    #[test]
    fn test_to_one_relationship() {
        let element = build(
            ElementKind::Relationship,
            &json!({"data": {"type": "people", "id": "9"}, "links": {"self": "/a/1/relationships/author"}}),
        )
        .unwrap();
        let relationship = element.as_relationship().unwrap();
        assert_eq!(relationship.data().unwrap().kind(), ElementKind::ResourceIdentifier);
        assert!(relationship.links().is_some());
    }

    #[test]
    fn test_to_many_relationship() {
        let element = build(
            ElementKind::Relationship,
            &json!({"data": [{"type": "tags", "id": "1"}, {"type": "tags", "id": "2"}]}),
        )
        .unwrap();
        assert_eq!(
            element.get("data").unwrap().kind(),
            Some(ElementKind::ResourceIdentifierCollection)
        );
        assert_eq!(element.get("data.1.id").unwrap().as_str(), Some("2"));
    }

    #[test]
    fn test_empty_to_one_relationship() {
        let element = build(ElementKind::Relationship, &json!({"data": null})).unwrap();
        assert_eq!(element.get("data").unwrap().kind(), Some(ElementKind::ResourceNull));
    }

    #[test]
    fn test_relationship_needs_a_member() {
        let err = build(ElementKind::Relationship, &json!({"foo": 1})).unwrap_err();
        assert!(err.message.contains("at least one of the following properties: links, data, meta"));
    }

    #[test]
    fn test_relationship_data_must_be_structured() {
        let err = build(ElementKind::Relationship, &json!({"data": "people:9"})).unwrap_err();
        assert_eq!(
            err.message,
            "Relationship data has to be null, an object or an array, \"string\" given."
        );
        assert_eq!(err.path.as_deref(), Some(""));
    }

    #[test]
    fn test_collection_paths() {
        let err = build(
            ElementKind::RelationshipCollection,
            &json!({"author": {"data": {"type": "people"}}}),
        )
        .unwrap_err();
        assert_eq!(err.path.as_deref(), Some("author.data"));
        assert_eq!(err.message, "A resource object MUST contain an id");
    }

    #[test]
    fn test_collection_forbids_type_and_id() {
        let err = build(ElementKind::RelationshipCollection, &json!({"type": {"meta": {}}})).unwrap_err();
        assert!(err.message.contains("not allowed in relationships"));
    }

    #[test]
    fn test_collection_names() {
        let element = build(
            ElementKind::RelationshipCollection,
            &json!({"author": {"meta": {}}, "comments": {"data": []}}),
        )
        .unwrap();
        let collection = element.as_relationship_collection().unwrap();
        assert_eq!(collection.names().collect::<Vec<_>>(), vec!["author", "comments"]);
        assert!(collection.relationship("comments").is_some());
    }
}
