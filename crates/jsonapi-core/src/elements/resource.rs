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

//! Resource objects, resource identifiers and their collections.

use super::{coerce_to_string, expect_array, expect_object, json_type, Attributes, Element, Meta};
use super::{RelationshipCollection, ResourceItemLink};
use crate::accessor::Accessable;
use crate::context::Args;
use crate::error::JsonApiResult;
use crate::store::Store;
use crate::ElementKind;
use serde_json::{Map, Value};

/// Decide whether a resource object is an identifier or a full item.
///
/// Exactly `{type, id}` or `{type, id, meta}` is an identifier, any other
/// shape is an item. Only member names are inspected.
pub fn classify(object: &Map<String, Value>) -> ElementKind {
    let mut names: Vec<&str> = object.keys().map(String::as_str).collect();
    names.sort_unstable();
    match names.as_slice() {
        ["id", "type"] | ["id", "meta", "type"] => ElementKind::ResourceIdentifier,
        _ => ElementKind::ResourceItem,
    }
}

/// Validate `type` and `id` and store them as strings.
fn store_identity(
    args: &Args<'_>,
    object: &Map<String, Value>,
    store: &mut Store,
) -> JsonApiResult<()> {
    let resource_type = object
        .get("type")
        .ok_or_else(|| args.invalid("A resource object MUST contain a type"))?;
    store.set("type", coerce_to_string(args, "Resource", "type", resource_type)?);

    match object.get("id") {
        Some(id) => store.set("id", coerce_to_string(args, "Resource", "id", id)?),
        None if args.context.optional_item_id() => {}
        None => return Err(args.invalid("A resource object MUST contain an id")),
    }
    Ok(())
}

/// A full resource object.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceItem {
    store: Store,
    parent: Option<ElementKind>,
}

/// A resource identifier: `type`, `id` and optional `meta`.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceIdentifier {
    store: Store,
    parent: Option<ElementKind>,
}

/// `data: null`.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceNull {
    store: Store,
    parent: Option<ElementKind>,
}

/// An array of resources, each classified on its own.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceCollection {
    store: Store,
    parent: Option<ElementKind>,
}

/// An array of resource identifiers (relationship linkage).
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceIdentifierCollection {
    store: Store,
    parent: Option<ElementKind>,
}

super::impl_element!(
    ResourceItem,
    ResourceIdentifier,
    ResourceCollection,
    ResourceIdentifierCollection,
);

impl Accessable for ResourceNull {
    fn store(&self) -> &Store {
        &self.store
    }

    fn is_null(&self) -> bool {
        true
    }
}

impl ResourceItem {
    pub fn from_args(args: Args<'_>) -> JsonApiResult<Self> {
        const OWN: ElementKind = ElementKind::ResourceItem;
        let object = expect_object(&args, "Resource")?;

        let mut store = Store::named();
        store_identity(&args, object, &mut store)?;

        for (name, value) in object {
            let kind = match name.as_str() {
                "attributes" => ElementKind::Attributes,
                "relationships" => ElementKind::RelationshipCollection,
                "links" => ElementKind::ResourceItemLink,
                "meta" => ElementKind::Meta,
                _ => continue,
            };
            store.set(name, args.make(OWN, kind, name, value)?);
        }

        let item = Self {
            store,
            parent: args.parent_kind(),
        };
        if let (Some(attributes), Some(relationships)) = (item.attributes(), item.relationships()) {
            if let Some(name) = relationships.names().find(|name| attributes.value(name).is_some()) {
                return Err(args.invalid(format!(
                    "\"{}\" cannot be both an attribute and a relationship of the same resource",
                    name
                )));
            }
        }
        Ok(item)
    }

    pub fn resource_type(&self) -> &str {
        self.store.str("type").unwrap_or_default()
    }

    /// `None` only for request documents creating a new resource.
    pub fn id(&self) -> Option<&str> {
        self.store.str("id")
    }

    pub fn attributes(&self) -> Option<&Attributes> {
        self.store.element("attributes").and_then(Element::as_attributes)
    }

    pub fn relationships(&self) -> Option<&RelationshipCollection> {
        self.store
            .element("relationships")
            .and_then(Element::as_relationship_collection)
    }

    pub fn links(&self) -> Option<&ResourceItemLink> {
        self.store.element("links").and_then(Element::as_resource_item_link)
    }

    pub fn meta(&self) -> Option<&Meta> {
        self.store.element("meta").and_then(Element::as_meta)
    }
}

impl ResourceIdentifier {
    pub fn from_args(args: Args<'_>) -> JsonApiResult<Self> {
        let object = expect_object(&args, "Resource")?;

        let mut store = Store::named();
        store_identity(&args, object, &mut store)?;
        if let Some(meta) = object.get("meta") {
            store.set(
                "meta",
                args.make(ElementKind::ResourceIdentifier, ElementKind::Meta, "meta", meta)?,
            );
        }

        Ok(Self {
            store,
            parent: args.parent_kind(),
        })
    }

    pub fn resource_type(&self) -> &str {
        self.store.str("type").unwrap_or_default()
    }

    pub fn id(&self) -> Option<&str> {
        self.store.str("id")
    }

    pub fn meta(&self) -> Option<&Meta> {
        self.store.element("meta").and_then(Element::as_meta)
    }
}

impl ResourceNull {
    pub fn parent_kind(&self) -> Option<ElementKind> {
        self.parent
    }

    pub fn from_args(args: Args<'_>) -> JsonApiResult<Self> {
        if !args.value.is_null() {
            return Err(args.invalid(format!(
                "Null resource has to be null, \"{}\" given.",
                json_type(args.value)
            )));
        }
        Ok(Self {
            store: Store::named(),
            parent: args.parent_kind(),
        })
    }
}

impl ResourceCollection {
    pub fn from_args(args: Args<'_>) -> JsonApiResult<Self> {
        let resources = expect_array(&args, "Resources for a collection")?;

        let mut store = Store::indexed();
        for (index, resource) in resources.iter().enumerate() {
            let object = resource.as_object().ok_or_else(|| {
                args.invalid(format!(
                    "Resources inside a collection MUST be objects, \"{}\" given.",
                    json_type(resource)
                ))
            })?;
            let kind = classify(object);
            store.push(args.make(ElementKind::ResourceCollection, kind, &index.to_string(), resource)?);
        }

        Ok(Self {
            store,
            parent: args.parent_kind(),
        })
    }

    /// Resources in order; each is an item or an identifier.
    pub fn resources(&self) -> impl Iterator<Item = &Element> {
        self.store.elements()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

impl ResourceIdentifierCollection {
    pub fn from_args(args: Args<'_>) -> JsonApiResult<Self> {
        let identifiers = expect_array(&args, "Resource identifiers for a collection")?;

        let mut store = Store::indexed();
        for (index, identifier) in identifiers.iter().enumerate() {
            if !identifier.is_object() {
                return Err(args.invalid(format!(
                    "Resources inside a collection MUST be objects, \"{}\" given.",
                    json_type(identifier)
                )));
            }
            store.push(args.make(
                ElementKind::ResourceIdentifierCollection,
                ElementKind::ResourceIdentifier,
                &index.to_string(),
                identifier,
            )?);
        }

        Ok(Self {
            store,
            parent: args.parent_kind(),
        })
    }

    pub fn identifiers(&self) -> impl Iterator<Item = &ResourceIdentifier> {
        self.store.elements().filter_map(Element::as_resource_identifier)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Context, ElementFactory, Key, ParseOptions};
    use serde_json::json;

    fn build(kind: ElementKind, value: &Value, options: ParseOptions) -> JsonApiResult<Element> {
        let factory = ElementFactory::default();
        let context = Context::new(&factory, options);
        context.make(kind, Args::root(value, &context))
    }

    fn object(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_classify_identifier() {
        assert_eq!(
            classify(&object(json!({"type": "a", "id": "1"}))),
            ElementKind::ResourceIdentifier
        );
        assert_eq!(
            classify(&object(json!({"id": "1", "meta": {}, "type": "a"}))),
            ElementKind::ResourceIdentifier
        );
    }

    #[test]
    fn test_classify_item() {
        assert_eq!(
            classify(&object(json!({"type": "a", "id": "1", "attributes": {}}))),
            ElementKind::ResourceItem
        );
        assert_eq!(classify(&object(json!({"type": "a"}))), ElementKind::ResourceItem);
        assert_eq!(
            classify(&object(json!({"type": "a", "links": {}}))),
            ElementKind::ResourceItem
        );
        assert_eq!(
            classify(&object(json!({"type": "a", "id": "1", "foo": 1}))),
            ElementKind::ResourceItem
        );
    }

    #[test]
    fn test_item_with_everything() {
        let value = json!({
            "type": "articles",
            "id": "1",
            "attributes": {"title": "Rails is Omakase"},
            "relationships": {"author": {"data": {"type": "people", "id": "9"}}},
            "links": {"self": "http://example.com/articles/1"},
            "meta": {"views": 3}
        });
        let element = build(ElementKind::ResourceItem, &value, ParseOptions::default()).unwrap();
        let item = element.as_resource_item().unwrap();
        assert_eq!(item.resource_type(), "articles");
        assert_eq!(item.id(), Some("1"));
        assert!(item.attributes().is_some());
        assert!(item.relationships().is_some());
        assert!(item.links().is_some());
        assert!(item.meta().is_some());
        assert_eq!(
            element.keys(),
            vec![
                Key::from("type"),
                Key::from("id"),
                Key::from("attributes"),
                Key::from("relationships"),
                Key::from("links"),
                Key::from("meta")
            ]
        );
        assert_eq!(
            element.get("relationships.author.data.id").unwrap().as_str(),
            Some("9")
        );
    }

    #[test]
    fn test_numeric_id_is_coerced() {
        let value = json!({"type": "articles", "id": 1});
        let element = build(ElementKind::ResourceIdentifier, &value, ParseOptions::default()).unwrap();
        assert_eq!(element.get("id").unwrap().as_str(), Some("1"));
    }

    #[test]
    fn test_composite_type_is_rejected() {
        let value = json!({"type": ["articles"], "id": "1"});
        let err = build(ElementKind::ResourceItem, &value, ParseOptions::default()).unwrap_err();
        assert_eq!(err.message, "Resource type cannot be an array or object");
    }

    #[test]
    fn test_composite_id_is_rejected() {
        let value = json!({"type": "articles", "id": {"v": 1}});
        let err = build(ElementKind::ResourceIdentifier, &value, ParseOptions::default()).unwrap_err();
        assert_eq!(err.message, "Resource id cannot be an array or object");
    }

    #[test]
    fn test_missing_type() {
        let value = json!({"id": "1", "attributes": {}});
        let err = build(ElementKind::ResourceItem, &value, ParseOptions::default()).unwrap_err();
        assert_eq!(err.message, "A resource object MUST contain a type");
    }

    #[test]
    fn test_missing_id_in_response_mode() {
        let value = json!({"type": "articles", "attributes": {}});
        let err = build(ElementKind::ResourceItem, &value, ParseOptions::response()).unwrap_err();
        assert_eq!(err.message, "A resource object MUST contain an id");
    }

    #[test]
    fn test_missing_id_in_request_mode() {
        let value = json!({"type": "articles", "attributes": {"title": "x"}});
        let element = build(ElementKind::ResourceItem, &value, ParseOptions::request()).unwrap();
        let item = element.as_resource_item().unwrap();
        assert_eq!(item.id(), None);
        assert!(!element.has("id"));
    }

    #[test]
    fn test_attribute_relationship_collision() {
        let value = json!({
            "type": "articles",
            "id": "1",
            "attributes": {"author": "Ada"},
            "relationships": {"author": {"meta": {}}}
        });
        let err = build(ElementKind::ResourceItem, &value, ParseOptions::default()).unwrap_err();
        assert!(err.message.contains("\"author\""));
    }

    #[test]
    fn test_identifier_ignores_other_members() {
        let value = json!({"type": "people", "id": "9", "attributes": {"name": "Ada"}});
        let element = build(ElementKind::ResourceIdentifier, &value, ParseOptions::default()).unwrap();
        assert!(!element.has("attributes"));
    }

    #[test]
    fn test_resource_null() {
        let element = build(ElementKind::ResourceNull, &Value::Null, ParseOptions::default()).unwrap();
        assert!(element.keys().is_empty());
        assert!(!element.has("type"));
        assert!(build(ElementKind::ResourceNull, &json!({}), ParseOptions::default()).is_err());
    }

    #[test]
    fn test_collection_classifies_each_resource() {
        let value = json!([
            {"type": "a", "id": "1"},
            {"type": "a", "id": "2", "attributes": {"x": 1}}
        ]);
        let element = build(ElementKind::ResourceCollection, &value, ParseOptions::default()).unwrap();
        let collection = element.as_resource_collection().unwrap();
        let kinds: Vec<_> = collection.resources().map(Element::kind).collect();
        assert_eq!(kinds, vec![ElementKind::ResourceIdentifier, ElementKind::ResourceItem]);
        assert_eq!(element.keys(), vec![Key::Index(0), Key::Index(1)]);
    }

    #[test]
    fn test_collection_rejects_scalars() {
        let err = build(ElementKind::ResourceCollection, &json!([1]), ParseOptions::default()).unwrap_err();
        assert_eq!(err.message, "Resources inside a collection MUST be objects, \"number\" given.");
    }

    #[test]
    fn test_collection_error_path_includes_index() {
        let value = json!([{"type": "a", "id": "1"}, {"id": "2", "meta": {}}]);
        let err = build(ElementKind::ResourceCollection, &value, ParseOptions::default()).unwrap_err();
        assert_eq!(err.path.as_deref(), Some("1"));
    }

    #[test]
    fn test_identifier_collection_forces_identifiers() {
        let value = json!([{"type": "a", "id": "1", "attributes": {"x": 1}}]);
        let element =
            build(ElementKind::ResourceIdentifierCollection, &value, ParseOptions::default()).unwrap();
        let collection = element.as_resource_identifier_collection().unwrap();
        assert_eq!(collection.identifiers().count(), 1);
        assert_eq!(element.get("0").unwrap().kind(), Some(ElementKind::ResourceIdentifier));
    }

    #[test]
    fn test_empty_collection() {
        let element = build(ElementKind::ResourceCollection, &json!([]), ParseOptions::default()).unwrap();
        assert!(element.as_resource_collection().unwrap().is_empty());
    }
}
