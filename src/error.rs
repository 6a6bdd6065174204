// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// Status used when the request never reached the server.
pub const NETWORK_STATUS: u16 = 0;

/// Failure of a call against the backend.
///
/// `status` is the HTTP status of the response, or [`NETWORK_STATUS`] when
/// the request failed before a response arrived. `details` holds the JSON
/// error payload the server sent back, if any.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message} (status {status})")]
pub struct ApiError {
    pub status: u16,
    pub message: String,
    pub details: Option<Value>,
}

impl ApiError {
    pub fn network(cause: impl fmt::Display) -> Self {
        Self {
            status: NETWORK_STATUS,
            message: "Network error".to_string(),
            details: Some(serde_json::json!({ "message": cause.to_string() })),
        }
    }

    /// Builds the error for a non-2xx response from its (possibly empty) body.
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        let details: Value = serde_json::from_slice(body)
            .unwrap_or_else(|_| Value::Object(Default::default()));
        let message = details
            .get("message")
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .unwrap_or("Request failed")
            .to_string();
        Self {
            status,
            message,
            details: Some(details),
        }
    }

    pub fn download_failed(status: u16) -> Self {
        Self {
            status,
            message: "Download failed".to_string(),
            details: None,
        }
    }

    pub fn malformed(status: u16, cause: impl fmt::Display) -> Self {
        Self {
            status,
            message: format!("Malformed response: {}", cause),
            details: None,
        }
    }

    pub fn is_network(&self) -> bool {
        self.status == NETWORK_STATUS
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Client-side form problems. These never reach the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{}", join_errors(.errors))]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn for_field(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// `Ok(value)` when nothing was recorded.
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

fn join_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}
