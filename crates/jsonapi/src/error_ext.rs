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

//! Error context helpers for improved ergonomics.
//!
//! This module provides extension traits for `Result<T, JsonApiError>` that
//! make it easy to add contextual information to errors as they propagate
//! through the call stack.
//!
//! # Examples
//!
//! ## Basic Context
//!
//! ```rust
//! use jsonapi::{parse_response_str, JsonApiResultExt};
//!
//! fn load_article(body: &str) -> Result<jsonapi::Document, jsonapi::JsonApiError> {
//!     parse_response_str(body).context("while loading GET /articles/1")
//! }
//!
//! let err = load_article("{}").unwrap_err();
//! assert_eq!(err.context.as_deref(), Some("while loading GET /articles/1"));
//! ```
//!
//! ## Lazy Context with Closures
//!
//! ```rust
//! use jsonapi::{parse_request_str, JsonApiResultExt};
//!
//! fn accept(id: u64, body: &str) -> Result<(), jsonapi::JsonApiError> {
//!     parse_request_str(body)
//!         .with_context(|| format!("request {} with {} bytes", id, body.len()))?;
//!     Ok(())
//! }
//!
//! assert!(accept(7, r#"{"data": {"type": "articles"}}"#).is_ok());
//! ```
//!
//! ## Converting Foreign Errors
//!
//! ```rust
//! use jsonapi::{JsonApiError, JsonApiResultExt};
//!
//! fn decode(body: &str) -> Result<serde_json::Value, JsonApiError> {
//!     serde_json::from_str(body)
//!         .map_err_to_jsonapi(|e| JsonApiError::input(format!("Invalid JSON: {}", e)))
//! }
//!
//! assert!(decode("{").is_err());
//! ```

use crate::JsonApiError;
use std::fmt;

/// Extension trait for adding context to `Result<T, JsonApiError>`.
///
/// Context is added to the error's `context` field without modifying the
/// original message or path.
pub trait JsonApiResultExt<T> {
    /// The error type for this Result
    type ErrorType;

    /// Add context to an error.
    ///
    /// Context is prepended to any existing context:
    ///
    /// ```rust
    /// use jsonapi::{parse_response_str, JsonApiResultExt};
    ///
    /// let result = parse_response_str("{}")
    ///     .context("in batch item 3")
    ///     .context("while syncing articles");
    ///
    /// let context = result.unwrap_err().context.unwrap();
    /// assert_eq!(context, "while syncing articles; in batch item 3");
    /// ```
    fn context<C>(self, context: C) -> Result<T, JsonApiError>
    where
        C: fmt::Display;

    /// Add context to an error using a closure, evaluated only on error.
    fn with_context<C, F>(self, f: F) -> Result<T, JsonApiError>
    where
        C: fmt::Display,
        F: FnOnce() -> C;

    /// Convert a foreign error type to `JsonApiError`.
    fn map_err_to_jsonapi<F>(self, f: F) -> Result<T, JsonApiError>
    where
        F: FnOnce(Self::ErrorType) -> JsonApiError,
        Self: Sized;
}

impl<T> JsonApiResultExt<T> for Result<T, JsonApiError> {
    type ErrorType = JsonApiError;

    fn context<C>(self, context: C) -> Result<T, JsonApiError>
    where
        C: fmt::Display,
    {
        self.map_err(|e| add_context_to_error(e, context.to_string()))
    }

    fn with_context<C, F>(self, f: F) -> Result<T, JsonApiError>
    where
        C: fmt::Display,
        F: FnOnce() -> C,
    {
        self.map_err(|e| add_context_to_error(e, f().to_string()))
    }

    fn map_err_to_jsonapi<F>(self, _f: F) -> Result<T, JsonApiError>
    where
        F: FnOnce(Self::ErrorType) -> JsonApiError,
    {
        // already a JsonApiError
        self
    }
}

/// Decoding failures become input errors.
impl<T> JsonApiResultExt<T> for Result<T, serde_json::Error> {
    type ErrorType = serde_json::Error;

    fn context<C>(self, context: C) -> Result<T, JsonApiError>
    where
        C: fmt::Display,
    {
        self.map_err(|e| JsonApiError::input(e.to_string()).with_context(context.to_string()))
    }

    fn with_context<C, F>(self, f: F) -> Result<T, JsonApiError>
    where
        C: fmt::Display,
        F: FnOnce() -> C,
    {
        self.map_err(|e| JsonApiError::input(e.to_string()).with_context(f().to_string()))
    }

    fn map_err_to_jsonapi<F>(self, f: F) -> Result<T, JsonApiError>
    where
        F: FnOnce(Self::ErrorType) -> JsonApiError,
    {
        self.map_err(f)
    }
}

/// Prepend `new_context` to the error's context chain ("new; existing").
fn add_context_to_error(mut error: JsonApiError, new_context: String) -> JsonApiError {
    if new_context.is_empty() {
        return error;
    }

    error.context = Some(match error.context {
        Some(existing) => format!("{}; {}", new_context, existing),
        None => new_context,
    });

    error
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_context_on_error() {
        let result: Result<(), JsonApiError> =
            Err(JsonApiError::validation("Meta has to be an object").with_path("meta"));
        let err = result.context("in response of GET /articles").unwrap_err();

        assert_eq!(err.context.as_deref(), Some("in response of GET /articles"));
        assert_eq!(err.path.as_deref(), Some("meta"));
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[test]
    fn test_context_on_ok() {
        let result: Result<i32, JsonApiError> = Ok(42);
        assert_eq!(result.context("unused").unwrap(), 42);
    }

    #[test]
    fn test_context_chaining() {
        let result: Result<(), JsonApiError> = Err(JsonApiError::access("data.0"));
        let err = result.context("inner").context("outer").unwrap_err();
        assert_eq!(err.context.as_deref(), Some("outer; inner"));
    }

    #[test]
    fn test_context_empty_string() {
        let result: Result<(), JsonApiError> = Err(JsonApiError::input("bad"));
        let err = result.context("").unwrap_err();
        assert_eq!(err.context, None);
    }

    #[test]
    fn test_with_context_is_lazy() {
        let mut called = false;
        let result: Result<i32, JsonApiError> = Ok(1);
        let _ = result.with_context(|| {
            called = true;
            "never"
        });
        assert!(!called);
    }

    #[test]
    fn test_display_includes_context() {
        let result: Result<(), JsonApiError> =
            Err(JsonApiError::validation("boom").with_path("data"));
        let err = result.context("while testing").unwrap_err();
        assert_eq!(err.to_string(), "ValidationError at data: boom (while testing)");
    }

    #[test]
    fn test_serde_json_error_becomes_input_error() {
        let result: Result<serde_json::Value, serde_json::Error> = serde_json::from_str("{");
        let err = result.context("decoding body").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Input);
        assert_eq!(err.context.as_deref(), Some("decoding body"));
    }

    #[test]
    fn test_map_err_to_jsonapi() {
        let result: Result<serde_json::Value, serde_json::Error> = serde_json::from_str("[");
        let err = result
            .map_err_to_jsonapi(|e| JsonApiError::input(format!("Invalid JSON: {}", e)))
            .unwrap_err();
        assert!(err.message.starts_with("Invalid JSON"));
    }
}
