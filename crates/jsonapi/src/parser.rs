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

//! String and value entry points.

use crate::input::{decode_object, Input, RequestStringInput, ResponseStringInput};
use jsonapi_core::{Document, JsonApiResult, ParseOptions};
use serde_json::Value;
use tracing::{debug, warn};

/// Parse any [`Input`] in the mode it declares.
pub fn parse_input<I: Input + ?Sized>(input: &I) -> JsonApiResult<Document> {
    let value = input.decode().map_err(|e| {
        warn!("Input rejected ({} mode): {}", input.mode(), e.message);
        e
    })?;
    parse_value(&value, &input.options())
}

/// Decode and validate `text` with explicit options.
pub fn parse_str(text: &str, options: &ParseOptions) -> JsonApiResult<Document> {
    debug!("Decoding JSON:API body: {} bytes", text.len());
    let value = decode_object(text).map_err(|e| {
        warn!("Input rejected ({} mode): {}", options.mode, e.message);
        e
    })?;
    parse_value(&value, options)
}

/// Decode and validate a server response body.
pub fn parse_response_str(text: &str) -> JsonApiResult<Document> {
    parse_input(&ResponseStringInput::new(text))
}

/// Decode and validate a client request body.
pub fn parse_request_str(text: &str) -> JsonApiResult<Document> {
    parse_input(&RequestStringInput::new(text))
}

/// Validate an already decoded document.
pub fn parse_value(value: &Value, options: &ParseOptions) -> JsonApiResult<Document> {
    debug!("Starting document validation ({} mode)", options.mode);
    match jsonapi_core::parse(value, options) {
        Ok(document) => {
            debug!(
                "Document validated ({} mode): {} elements",
                options.mode,
                document.element_count()
            );
            Ok(document)
        }
        Err(e) => {
            warn!(
                "Document rejected at `{}`: {}",
                e.path.as_deref().unwrap_or_default(),
                e.message
            );
            Err(e)
        }
    }
}

pub fn parse_response(value: &Value) -> JsonApiResult<Document> {
    parse_value(value, &ParseOptions::response())
}

pub fn parse_request(value: &Value) -> JsonApiResult<Document> {
    parse_value(value, &ParseOptions::request())
}

/// Whether `text` is a valid JSON:API response body.
pub fn is_valid_response_str(text: &str) -> bool {
    parse_response_str(text).is_ok()
}

/// Whether `text` is a valid JSON:API request body.
pub fn is_valid_request_str(text: &str) -> bool {
    parse_request_str(text).is_ok()
}

pub fn is_valid_response(value: &Value) -> bool {
    parse_response(value).is_ok()
}

pub fn is_valid_request(value: &Value) -> bool {
    parse_request(value).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonapi_core::{Accessable, ErrorKind};
    use serde_json::json;

    #[test]
    fn test_parse_response_str() {
        let document = parse_response_str(r#"{"data": {"type": "articles", "id": "1"}}"#).unwrap();
        assert_eq!(document.get("data.type").unwrap().as_str(), Some("articles"));
    }

    #[test]
    fn test_parse_request_str_without_id() {
        let text = r#"{"data": {"type": "articles", "attributes": {"title": "x"}}}"#;
        assert!(parse_request_str(text).is_ok());
        let err = parse_response_str(text).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[test]
    fn test_input_error_before_validation() {
        let err = parse_response_str("[]").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Input);
        let err = parse_str("{\"data\":", &ParseOptions::default()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Input);
    }

    #[test]
    fn test_parse_value_non_object_is_validation_error() {
        let err = parse_response(&json!("x")).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[test]
    fn test_validity_helpers() {
        assert!(is_valid_response_str(r#"{"meta": {}}"#));
        assert!(!is_valid_response_str("not json"));
        assert!(!is_valid_response_str(r#"{"data": {"type": "a"}}"#));
        assert!(is_valid_request_str(r#"{"data": {"type": "a"}}"#));
        assert!(is_valid_request(&json!({"data": null})));
        assert!(!is_valid_response(&json!({})));
    }
}
