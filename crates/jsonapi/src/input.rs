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

//! Raw input: decoding a JSON:API body from text.
//!
//! An [`Input`] knows how to turn itself into a decoded JSON object and in
//! which mode the result must be validated.

use jsonapi_core::elements::json_type;
use jsonapi_core::{JsonApiError, JsonApiResult, ParseMode, ParseOptions};
use serde_json::Value;

/// A source of one JSON:API document.
pub trait Input {
    /// Request or response rules.
    fn mode(&self) -> ParseMode;

    /// Decode the input into a JSON object.
    ///
    /// Fails with an input error for malformed JSON or a top-level value
    /// that is not an object.
    fn decode(&self) -> JsonApiResult<Value>;

    fn options(&self) -> ParseOptions {
        ParseOptions::new(self.mode())
    }
}

/// Body of a server response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseStringInput<'a> {
    text: &'a str,
}

impl<'a> ResponseStringInput<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }
}

impl Input for ResponseStringInput<'_> {
    fn mode(&self) -> ParseMode {
        ParseMode::Response
    }

    fn decode(&self) -> JsonApiResult<Value> {
        decode_object(self.text)
    }
}

/// Body of a client request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestStringInput<'a> {
    text: &'a str,
}

impl<'a> RequestStringInput<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }
}

impl Input for RequestStringInput<'_> {
    fn mode(&self) -> ParseMode {
        ParseMode::Request
    }

    fn decode(&self) -> JsonApiResult<Value> {
        decode_object(self.text)
    }
}

/// Decode `text`, requiring an object at the top level.
pub fn decode_object(text: &str) -> JsonApiResult<Value> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| JsonApiError::input(format!("Unable to parse JSON data: {}", e)))?;
    if !value.is_object() {
        return Err(JsonApiError::input(format!(
            "JSON data has to be an object, \"{}\" given.",
            json_type(&value)
        )));
    }
    Ok(value)
}
