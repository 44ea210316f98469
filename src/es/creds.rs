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

//! Credential providers

use crate::es::utils::b64encode;
use std::fmt;

#[derive(Clone, PartialEq, Eq)]
/// Credentials sent in the `Authorization` header of every request
pub enum Credentials {
    /// HTTP basic authentication.
    Basic { username: String, password: String },
    /// A base64 encoded `id:api_key` pair, as returned by `security.create_api_key`.
    ApiKey(String),
    /// An OAuth2 access token or service account token.
    Bearer(String),
}

impl Credentials {
    pub fn basic(username: &str, password: &str) -> Self {
        Credentials::Basic {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    /// Builds API key credentials from the key id and secret.
    pub fn api_key(id: &str, api_key: &str) -> Self {
        Credentials::ApiKey(b64encode(format!("{id}:{api_key}")))
    }

    /// Value of the `Authorization` header.
    pub fn authorization(&self) -> String {
        match self {
            Credentials::Basic { username, password } => {
                format!("Basic {}", b64encode(format!("{username}:{password}")))
            }
            Credentials::ApiKey(encoded) => format!("ApiKey {encoded}"),
            Credentials::Bearer(token) => format!("Bearer {token}"),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // secrets stay out of logs
        match self {
            Credentials::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"***")
                .finish(),
            Credentials::ApiKey(_) => f.write_str("ApiKey(***)"),
            Credentials::Bearer(_) => f.write_str("Bearer(***)"),
        }
    }
}

/// Provider trait to fetch credentials
pub trait Provider: fmt::Debug {
    fn fetch(&self) -> Credentials;
}

#[derive(Clone, Debug)]
/// Static credential provider
pub struct StaticProvider {
    creds: Credentials,
}

impl StaticProvider {
    /// Returns a static provider for the given credentials
    ///
    /// # Examples
    ///
    /// ```
    /// use es_rest::es::creds::{Credentials, StaticProvider};
    /// let provider = StaticProvider::new(Credentials::basic("elastic", "changeme"));
    /// ```
    pub fn new(creds: Credentials) -> StaticProvider {
        StaticProvider { creds }
    }
}

impl Provider for StaticProvider {
    fn fetch(&self) -> Credentials {
        self.creds.clone()
    }
}
