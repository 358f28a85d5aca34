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

//! Facade tests: text in, element tree out.

use jsonapi::{
    is_valid_request_str, is_valid_response_str, parse_input, parse_request_str,
    parse_response_str, parse_str, to_value, Accessable, ElementKind, ErrorKind, Input,
    JsonApiResultExt, ParseOptions, RequestStringInput, ResponseStringInput,
};
use jsonapi_test::{fixtures, fixtures_as_json};
use std::sync::Once;

static INIT: Once = Once::new();

/// Route `tracing` output to the test harness, honouring `RUST_LOG`.
fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

#[test]
fn response_fixtures_from_text() {
    init_tracing();
    for (name, text) in fixtures_as_json() {
        let document = parse_response_str(&text).unwrap_or_else(|e| panic!("{}: {}", name, e));
        assert!(is_valid_response_str(&text), "{}", name);
        let reparsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(to_value(&document), reparsed, "{}", name);
    }
}

#[test]
fn request_fixtures_from_text() {
    init_tracing();
    for (name, fixture_fn) in fixtures::all_requests() {
        let text = fixture_fn().to_string();
        assert!(is_valid_request_str(&text), "{}", name);
        assert!(parse_request_str(&text).is_ok(), "{}", name);
    }
}

#[test]
fn invalid_json_is_rejected_as_input() {
    init_tracing();
    for (name, text) in fixtures::errors::invalid_json_samples() {
        let err = parse_response_str(text).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Input, "{}", name);
        assert!(err.is_validation_family());
        assert!(!is_valid_response_str(text), "{}", name);
        assert!(!is_valid_request_str(text), "{}", name);
    }
}

#[test]
fn invalid_documents_from_text() {
    init_tracing();
    for (name, document, expected) in fixtures::errors::invalid_documents() {
        let text = document.to_string();
        let err = parse_response_str(&text).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation, "{}", name);
        assert!(err.message.contains(expected), "{}: {}", name, err.message);
        assert!(!is_valid_response_str(&text), "{}", name);
    }
}

#[test]
fn inputs_carry_their_mode() {
    let text = r#"{"data": {"type": "photos", "attributes": {"title": "Ember Hamster"}}}"#;
    let request = RequestStringInput::new(text);
    let response = ResponseStringInput::new(text);

    let document = parse_input(&request).unwrap();
    assert_eq!(document.data().unwrap().kind(), ElementKind::ResourceItem);
    assert!(!document.has("data.id"));

    let err = parse_input(&response).unwrap_err();
    assert!(err.message.contains("MUST contain an id"));
    assert_eq!(parse_str(text, &response.options()), Err(err));
}

#[test]
fn inputs_as_trait_objects() {
    let text = r#"{"meta": {"ok": true}}"#;
    let inputs: Vec<Box<dyn Input>> = vec![
        Box::new(RequestStringInput::new(text)),
        Box::new(ResponseStringInput::new(text)),
    ];
    for input in &inputs {
        assert!(parse_input(input.as_ref()).is_ok());
    }
}

#[test]
fn context_is_attached_on_failure() {
    let err = parse_response_str(r#"{"data": {"type": "a", "id": "1"}, "errors": []}"#)
        .context("GET /articles/1")
        .unwrap_err();
    assert_eq!(err.context.as_deref(), Some("GET /articles/1"));
    assert!(err.to_string().starts_with("ValidationError: "));
    assert!(err.to_string().ends_with("(GET /articles/1)"));
}

#[test]
fn access_errors_are_not_validation_failures() {
    let document = parse_response_str(r#"{"meta": {}}"#).unwrap();
    let err = document.get("data").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Access);
    assert!(!err.is_validation_family());
}

#[test]
fn parse_str_honours_options() {
    let text = r#"{"data": {"type": "a"}}"#;
    assert!(parse_str(text, &ParseOptions::request()).is_ok());
    assert!(parse_str(text, &ParseOptions::response()).is_err());
}

#[test]
fn documents_are_shareable_across_threads() {
    let document = std::sync::Arc::new(parse_response_str(&fixtures::compound().to_string()).unwrap());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let document = std::sync::Arc::clone(&document);
            std::thread::spawn(move || {
                let path = format!("included.{}.type", i % 3);
                document.get(path.as_str()).unwrap().as_str().map(str::to_string)
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap().is_some());
    }
}
