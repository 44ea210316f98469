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

//! Error definitions for Elasticsearch operations

use crate::es::es_error_response::EsServerError;
use thiserror::Error;

/// Errors raised while turning caller input into a request, before any
/// network interaction takes place.
#[derive(Error, Debug)]
pub enum ValidationErr {
    /// A parameter listed as required by the endpoint is absent (or `null`).
    #[error("the parameter {name} is required for {endpoint}")]
    MissingParameter {
        endpoint: &'static str,
        name: String,
    },

    /// A parameter is neither a path, query nor common parameter of the endpoint.
    #[error("parameter {name} is not supported by {endpoint}")]
    UnknownParameter {
        endpoint: &'static str,
        name: String,
    },

    /// A parameter value cannot be rendered into a URL.
    #[error("parameter {name} of {endpoint} has an unsupported value: {reason}")]
    InvalidParameterValue {
        endpoint: &'static str,
        name: String,
        reason: String,
    },

    #[error("request parameters must be a JSON object, got {0}")]
    ParamsNotObject(String),

    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("invalid URI: {0}")]
    InvalidUri(#[from] http::uri::InvalidUri),

    #[error("invalid header {name}: {reason}")]
    InvalidHeader { name: String, reason: String },

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("UTF-8 error: {0}")]
    Utf8Error(#[from] std::str::Utf8Error),

    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),
}

#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("request failed: {0}")]
    ReqwestError(#[from] reqwest::Error),
}

#[derive(Error, Debug)]
pub enum IoError {
    #[error("I/O error: {0}")]
    IOError(#[from] std::io::Error),
}

/// Top-level error of the crate.
#[derive(Error, Debug)]
pub enum Error {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationErr),

    #[error("network error: {0}")]
    Network(#[from] NetworkError),

    #[error("I/O error: {0}")]
    Io(#[from] IoError),

    #[error("server error: {0}")]
    Server(#[from] EsServerError),
}

impl Error {
    /// Returns the HTTP status code if this error was returned by the server.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Server(e) => Some(e.status()),
            _ => None,
        }
    }

    /// Returns `true` if this error names a missing required parameter.
    pub fn is_missing_parameter(&self) -> bool {
        matches!(
            self,
            Error::Validation(ValidationErr::MissingParameter { .. })
        )
    }
}
