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

//! The collaborator that puts requests on the wire.
//!
//! [`EsClient`](crate::es::EsClient) resolves every call into an
//! [`EsRequest`] and hands it to a [`Transport`]. The default
//! [`HttpTransport`] talks HTTP through `reqwest`; tests and embedders can
//! plug in their own implementation with
//! [`EsClientBuilder::transport`](crate::es::EsClientBuilder::transport).

use crate::es::creds::Provider;
use crate::es::error::{Error, NetworkError, ValidationErr};
use crate::es::es_error_response::EsServerError;
use crate::es::http::BaseUrl;
use crate::es::multimap_ext::Multimap;
use crate::es::types::EsRequest;
use async_trait::async_trait;
use bytes::Bytes;
use http::HeaderMap;
use http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderName, HeaderValue};
use std::fmt::Debug;
use std::mem;
use std::sync::Arc;

/// Executes resolved requests.
///
/// Implementations return `Ok` only for successful (2xx) responses; anything
/// else is reported as [`Error::Server`].
#[async_trait]
pub trait Transport: Debug + Send + Sync {
    async fn send_request(&self, request: &EsRequest) -> Result<reqwest::Response, Error>;
}

/// [`Transport`] over HTTP(S).
#[derive(Clone, Debug)]
pub struct HttpTransport {
    http_client: reqwest::Client,
    base_url: BaseUrl,
    provider: Option<Arc<dyn Provider + Send + Sync + 'static>>,
}

impl HttpTransport {
    pub fn new(
        http_client: reqwest::Client,
        base_url: BaseUrl,
        provider: Option<Arc<dyn Provider + Send + Sync + 'static>>,
    ) -> Self {
        Self {
            http_client,
            base_url,
            provider,
        }
    }

    pub fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send_request(&self, request: &EsRequest) -> Result<reqwest::Response, Error> {
        let url = self
            .base_url
            .build_url(request.path(), request.query_params());

        let mut headers = header_map(request.headers())?;
        if !headers.contains_key(ACCEPT) {
            headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        }
        if let Some(body) = request.body()
            && !headers.contains_key(CONTENT_TYPE)
        {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(body.content_type()));
        }
        if let Some(p) = &self.provider
            && !headers.contains_key(AUTHORIZATION)
        {
            let mut value = HeaderValue::from_str(&p.fetch().authorization()).map_err(|e| {
                ValidationErr::InvalidHeader {
                    name: AUTHORIZATION.as_str().to_string(),
                    reason: e.to_string(),
                }
            })?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let mut req = self
            .http_client
            .request(request.method().clone(), url.to_string())
            .headers(headers);

        if let Some(body) = request.body() {
            req = req.body(body.to_bytes()?);
        }

        let resp = req.send().await.map_err(NetworkError::from)?;
        if resp.status().is_success() {
            return Ok(resp);
        }

        let mut resp = resp;
        let status_code = resp.status().as_u16();
        let headers: HeaderMap = mem::take(resp.headers_mut());
        let body: Bytes = resp.bytes().await.map_err(NetworkError::from)?;

        Err(EsServerError::new(status_code, headers, body).into())
    }
}

/// Converts request headers into an [`HeaderMap`], whose lookups ignore case.
fn header_map(headers: &Multimap) -> Result<HeaderMap, ValidationErr> {
    let mut map = HeaderMap::with_capacity(headers.len() + 3);
    for (key, values) in headers.iter_all() {
        let name = HeaderName::from_bytes(key.as_bytes()).map_err(|e| {
            ValidationErr::InvalidHeader {
                name: key.clone(),
                reason: e.to_string(),
            }
        })?;
        for value in values {
            let value = HeaderValue::from_str(value).map_err(|e| ValidationErr::InvalidHeader {
                name: key.clone(),
                reason: e.to_string(),
            })?;
            map.append(name.clone(), value);
        }
    }
    Ok(map)
}
