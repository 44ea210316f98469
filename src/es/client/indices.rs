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

//! `indices.*` APIs.

use crate::es::builders::{Call, ExistsCall};
use crate::es::client::EsClient;
use crate::es::endpoints::indices;
use crate::es::params::Params;

/// Index management APIs, obtained from [`EsClient::indices`].
#[derive(Clone, Debug)]
pub struct Indices {
    client: EsClient,
}

impl Indices {
    pub(crate) fn new(client: &EsClient) -> Self {
        Self {
            client: client.clone(),
        }
    }

    /// Creates an index; settings and mappings go in `body`.
    pub fn create(&self, params: impl Into<Params>) -> Call {
        Call::new(&self.client, &indices::CREATE, params)
    }

    /// Deletes one or more indices.
    pub fn delete(&self, params: impl Into<Params>) -> Call {
        Call::new(&self.client, &indices::DELETE, params)
    }

    /// Checks whether indices exist.
    ///
    /// ```no_run
    /// use es_rest::es::params::Params;
    /// use es_rest::es::types::EsApi;
    /// # async fn run(client: es_rest::es::EsClient) -> Result<(), es_rest::es::error::Error> {
    /// let resp = client.indices().exists(Params::new().param("index", "logs")).send().await?;
    /// if !resp.exists() {
    ///     println!("index logs is missing");
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn exists(&self, params: impl Into<Params>) -> ExistsCall {
        ExistsCall::new(&self.client, &indices::EXISTS, params)
    }

    /// Refreshes one or more indices, or all of them when `index` is unset.
    pub fn refresh(&self, params: impl Into<Params>) -> Call {
        Call::new(&self.client, &indices::REFRESH, params)
    }

    /// Creates or updates a legacy index template.
    pub fn put_template(&self, params: impl Into<Params>) -> Call {
        Call::new(&self.client, &indices::PUT_TEMPLATE, params)
    }

    pub fn get_template(&self, params: impl Into<Params>) -> Call {
        Call::new(&self.client, &indices::GET_TEMPLATE, params)
    }

    pub fn delete_template(&self, params: impl Into<Params>) -> Call {
        Call::new(&self.client, &indices::DELETE_TEMPLATE, params)
    }

    pub fn exists_template(&self, params: impl Into<Params>) -> ExistsCall {
        ExistsCall::new(&self.client, &indices::EXISTS_TEMPLATE, params)
    }
}
