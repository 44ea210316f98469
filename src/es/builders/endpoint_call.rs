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

use crate::es::client::EsClient;
use crate::es::endpoints::EndpointSpec;
use crate::es::error::ValidationErr;
use crate::es::multimap_ext::Multimap;
use crate::es::params::Params;
use crate::es::response::{EsResponse, ExistsResponse};
use crate::es::types::{EsApi, EsRequest, FromEsResponse, ToEsRequest};
use serde_json::Value;
use std::marker::PhantomData;
use typed_builder::TypedBuilder;

/// Argument builder shared by every endpoint.
///
/// The endpoint's static [`EndpointSpec`] decides how the parameters turn
/// into a request; `R` is the response type produced by
/// [`send()`](EsApi::send).
#[derive(Clone, Debug, TypedBuilder)]
pub struct EndpointCall<R> {
    #[builder(!default)] // force required
    pub(crate) client: EsClient,
    #[builder(!default)] // force required
    pub(crate) endpoint: &'static EndpointSpec,

    #[builder(default, setter(into))]
    pub(crate) params: Params,
    #[builder(default, setter(into))]
    pub(crate) extra_headers: Option<Multimap>,

    #[builder(default)]
    _response: PhantomData<R>,
}

/// Builder of a call answered with an [`EsResponse`].
pub type Call = EndpointCall<EsResponse>;

/// Builder of a `HEAD` call answered with an [`ExistsResponse`].
pub type ExistsCall = EndpointCall<ExistsResponse>;

impl<R> EndpointCall<R> {
    pub fn new(client: &EsClient, endpoint: &'static EndpointSpec, params: impl Into<Params>) -> Self {
        EndpointCall::builder()
            .client(client.clone())
            .endpoint(endpoint)
            .params(params)
            .build()
    }

    /// Sets one parameter, replacing any previous value.
    pub fn param<K: Into<String>, V: Into<Value>>(mut self, key: K, value: V) -> Self {
        self.params.insert(key, value);
        self
    }

    /// Sets the request payload.
    pub fn body<V: Into<Value>>(mut self, body: V) -> Self {
        self.params = self.params.body(body);
        self
    }

    pub fn extra_headers(mut self, extra_headers: Option<Multimap>) -> Self {
        self.extra_headers = extra_headers;
        self
    }

    pub fn endpoint(&self) -> &'static EndpointSpec {
        self.endpoint
    }

    pub fn params(&self) -> &Params {
        &self.params
    }
}

impl<R> ToEsRequest for EndpointCall<R> {
    fn to_es_request(self) -> Result<EsRequest, ValidationErr> {
        let resolved = self.endpoint.resolve(&self.params)?;

        Ok(EsRequest::builder()
            .client(self.client)
            .endpoint(self.endpoint.name)
            .method(resolved.method)
            .path(resolved.path)
            .query_params(resolved.query_params)
            .headers(self.extra_headers.unwrap_or_default())
            .body(resolved.body)
            .build())
    }
}

impl<R: FromEsResponse + Send + Sync> EsApi for EndpointCall<R> {
    type EsResponse = R;
}
