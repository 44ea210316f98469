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

//! Document and search APIs, available directly on the client.

use super::EsClient;
use crate::es::builders::{Call, ExistsCall};
use crate::es::endpoints::global;
use crate::es::params::Params;

impl EsClient {
    /// Returns basic information about the cluster.
    pub fn info(&self, params: impl Into<Params>) -> Call {
        Call::new(self, &global::INFO, params)
    }

    /// Returns whether the cluster is reachable.
    pub fn ping(&self, params: impl Into<Params>) -> ExistsCall {
        ExistsCall::new(self, &global::PING, params)
    }

    /// Returns a document. Requires `index` and `id`.
    pub fn get(&self, params: impl Into<Params>) -> Call {
        Call::new(self, &global::GET, params)
    }

    /// Returns whether a document exists. Requires `index` and `id`.
    pub fn exists(&self, params: impl Into<Params>) -> ExistsCall {
        ExistsCall::new(self, &global::EXISTS, params)
    }

    /// Returns the `_source` of a document.
    ///
    /// Passing a mapping `type` selects the deprecated typed URL.
    pub fn get_source(&self, params: impl Into<Params>) -> Call {
        Call::new(self, &global::GET_SOURCE, params)
    }

    /// Creates or replaces a document.
    ///
    /// With `id` the document is `PUT` under that id; without it the
    /// document is `POST`ed and the server assigns an id.
    ///
    /// ```no_run
    /// use es_rest::es::params::Params;
    /// use es_rest::es::types::EsApi;
    /// use serde_json::json;
    /// # async fn run(client: es_rest::es::EsClient) -> Result<(), es_rest::es::error::Error> {
    /// client
    ///     .index(
    ///         Params::new()
    ///             .param("index", "logs")
    ///             .param("refresh", "wait_for")
    ///             .body(json!({"message": "hello"})),
    ///     )
    ///     .send()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn index(&self, params: impl Into<Params>) -> Call {
        Call::new(self, &global::INDEX, params)
    }

    /// Removes a document. Requires `index` and `id`.
    pub fn delete(&self, params: impl Into<Params>) -> Call {
        Call::new(self, &global::DELETE, params)
    }

    /// Runs a search; `GET` without a body, `POST` with one.
    pub fn search(&self, params: impl Into<Params>) -> Call {
        Call::new(self, &global::SEARCH, params)
    }

    /// Counts matching documents; `GET` without a body, `POST` with one.
    pub fn count(&self, params: impl Into<Params>) -> Call {
        Call::new(self, &global::COUNT, params)
    }
}
