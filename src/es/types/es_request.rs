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

//! EsRequest struct and implementation for executing HTTP requests.

use crate::es::client::EsClient;
use crate::es::error::Error;
use crate::es::multimap_ext::{Multimap, MultimapExt};
use crate::es::types::RequestBody;
use http::Method;
use typed_builder::TypedBuilder;

#[derive(Clone, Debug, TypedBuilder)]
/// A fully resolved request to one Elasticsearch endpoint
pub struct EsRequest {
    #[builder(!default)] // force required
    pub(crate) client: EsClient,

    /// API name of the endpoint, e.g. `security.get_role`
    #[builder(!default)] // force required
    endpoint: &'static str,

    #[builder(!default)] // force required
    method: Method,

    #[builder(!default, setter(into))] // force required
    path: String,

    #[builder(default)]
    pub(crate) query_params: Multimap,

    #[builder(default)]
    headers: Multimap,

    #[builder(default, setter(into))]
    body: Option<RequestBody>,
}

impl EsRequest {
    pub fn endpoint(&self) -> &'static str {
        self.endpoint
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    /// URL path, already percent-encoded.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query_params(&self) -> &Multimap {
        &self.query_params
    }

    pub fn headers(&self) -> &Multimap {
        &self.headers
    }

    pub fn headers_mut(&mut self) -> &mut Multimap {
        &mut self.headers
    }

    pub fn body(&self) -> Option<&RequestBody> {
        self.body.as_ref()
    }

    /// Path followed by the query string, if any.
    pub fn path_and_query(&self) -> String {
        if self.query_params.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, self.query_params.to_query_string())
        }
    }

    /// Execute the request, returning the response. Only used in [`EsApi::send()`]
    ///
    /// [`EsApi::send()`]: crate::es::types::EsApi::send
    pub async fn execute(&mut self) -> Result<reqwest::Response, Error> {
        let client = self.client.clone();
        client.execute(self).await
    }
}

/// Two requests are equal when they would put the same bytes on the wire;
/// the client handle is not compared.
impl PartialEq for EsRequest {
    fn eq(&self, other: &Self) -> bool {
        self.endpoint == other.endpoint
            && self.method == other.method
            && self.path == other.path
            && self.query_params == other.query_params
            && self.headers == other.headers
            && self.body == other.body
    }
}
