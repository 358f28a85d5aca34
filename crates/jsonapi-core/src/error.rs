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

//! Error types for JSON:API parsing and tree access.

use std::fmt;
use thiserror::Error;

/// The kind of error that occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Raw input is not JSON, or not a JSON object at the top level.
    Input,
    /// A decoded value violates a JSON:API structural rule.
    Validation,
    /// A path could not be resolved against a valid tree.
    Access,
    /// An element kind was requested that the factory cannot build.
    Factory,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input => write!(f, "InputError"),
            Self::Validation => write!(f, "ValidationError"),
            Self::Access => write!(f, "AccessError"),
            Self::Factory => write!(f, "FactoryError"),
        }
    }
}

/// An error raised while decoding, validating or querying a document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct JsonApiError {
    /// The kind of error.
    pub kind: ErrorKind,
    /// Human-readable error message.
    pub message: String,
    /// Dotted location of the offending element (validation errors only).
    pub path: Option<String>,
    /// Additional context added while the error propagated.
    pub context: Option<String>,
}

impl fmt::Display for JsonApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        match self.path.as_deref() {
            Some(path) if !path.is_empty() => write!(f, " at {}", path)?,
            _ => {}
        }
        write!(f, ": {}", self.message)?;
        if let Some(context) = &self.context {
            write!(f, " ({})", context)?;
        }
        Ok(())
    }
}

impl JsonApiError {
    /// Create a new error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            path: None,
            context: None,
        }
    }

    /// Add the location of the offending element.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add context information.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn input(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Input, message)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Access error for a path that could not be resolved.
    pub fn access(path: &str) -> Self {
        Self::new(
            ErrorKind::Access,
            format!("Could not get the value for the key \"{}\".", path),
        )
    }

    pub fn factory(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Factory, message)
    }

    /// True for failures that describe a defective document
    /// (input and validation errors) rather than a caller mistake.
    pub fn is_validation_family(&self) -> bool {
        matches!(self.kind, ErrorKind::Input | ErrorKind::Validation)
    }
}

/// Result type for JSON:API operations.
pub type JsonApiResult<T> = Result<T, JsonApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_display() {
        assert_eq!(ErrorKind::Input.to_string(), "InputError");
        assert_eq!(ErrorKind::Validation.to_string(), "ValidationError");
        assert_eq!(ErrorKind::Access.to_string(), "AccessError");
        assert_eq!(ErrorKind::Factory.to_string(), "FactoryError");
    }

    #[test]
    fn test_validation_display_without_path() {
        let err = JsonApiError::validation("A resource object MUST contain a type");
        assert_eq!(
            err.to_string(),
            "ValidationError: A resource object MUST contain a type"
        );
    }

    #[test]
    fn test_validation_display_with_path() {
        let err = JsonApiError::validation("Meta has to be an object").with_path("data.meta");
        assert_eq!(
            err.to_string(),
            "ValidationError at data.meta: Meta has to be an object"
        );
    }

    #[test]
    fn test_root_path_is_not_rendered() {
        let err = JsonApiError::validation("Document has to be an object").with_path("");
        assert_eq!(err.to_string(), "ValidationError: Document has to be an object");
    }

    #[test]
    fn test_access_message_names_path() {
        let err = JsonApiError::access("nonexistent.path");
        assert_eq!(err.kind, ErrorKind::Access);
        assert!(err.message.contains("nonexistent.path"));
        assert!(err.path.is_none());
    }

    #[test]
    fn test_context_is_appended() {
        let err = JsonApiError::input("Syntax error").with_context("while reading body");
        assert_eq!(err.to_string(), "InputError: Syntax error (while reading body)");
    }

    #[test]
    fn test_validation_family() {
        assert!(JsonApiError::input("x").is_validation_family());
        assert!(JsonApiError::validation("x").is_validation_family());
        assert!(!JsonApiError::access("x").is_validation_family());
        assert!(!JsonApiError::factory("x").is_validation_family());
    }

    #[test]
    fn test_error_is_std_error() {
        fn accepts_error<E: std::error::Error>(_: E) {}
        accepts_error(JsonApiError::validation("test"));
    }
}
