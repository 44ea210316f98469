// es-rest: Rust bindings for the Elasticsearch REST API
// Copyright 2025 es-rest developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Parsing of error responses returned by Elasticsearch.

use bytes::Bytes;
use http::HeaderMap;
use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// Error type and reason of a failed request, as reported by the server.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ErrorCause {
    #[serde(rename = "type", default)]
    pub error_type: String,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub root_cause: Vec<ErrorCause>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ErrorField {
    Structured(ErrorCause),
    Text(String),
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorField,
}

/// A non-successful HTTP response from Elasticsearch.
///
/// The structured [`ErrorCause`] is available when the body follows the
/// `{"error": {...}, "status": N}` convention; otherwise only the raw body is kept.
#[derive(Clone, Debug, Error)]
pub struct EsServerError {
    status: u16,
    headers: Box<HeaderMap>,
    cause: Option<ErrorCause>,
    body: String,
}

impl fmt::Display for EsServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.cause {
            Some(c) => write!(
                f,
                "status {}: {}: {}",
                self.status,
                c.error_type,
                c.reason.as_deref().unwrap_or("no reason given")
            ),
            None if self.body.is_empty() => write!(f, "status {}", self.status),
            None => write!(f, "status {}: {}", self.status, self.body),
        }
    }
}

impl EsServerError {
    /// Builds the error from a failed response's status, headers and body.
    pub fn new(status: u16, headers: HeaderMap, body: Bytes) -> Self {
        let body = String::from_utf8_lossy(&body).into_owned();
        let cause = match serde_json::from_str::<ErrorEnvelope>(&body) {
            Ok(ErrorEnvelope {
                error: ErrorField::Structured(c),
            }) => Some(c),
            Ok(ErrorEnvelope {
                error: ErrorField::Text(t),
            }) => Some(ErrorCause {
                error_type: String::new(),
                reason: Some(t),
                root_cause: Vec::new(),
            }),
            Err(_) => None,
        };

        Self {
            status,
            headers: Box::new(headers),
            cause,
            body,
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn take_headers(&mut self) -> HeaderMap {
        std::mem::take(self.headers.as_mut())
    }

    /// The structured error cause, if the body carried one.
    pub fn cause(&self) -> Option<&ErrorCause> {
        self.cause.as_ref()
    }

    /// The `type` of the error cause, e.g. `index_not_found_exception`.
    pub fn error_type(&self) -> Option<&str> {
        self.cause
            .as_ref()
            .map(|c| c.error_type.as_str())
            .filter(|t| !t.is_empty())
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}
