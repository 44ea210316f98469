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

//! Responses returned by [`EsApi::send`](crate::es::types::EsApi::send).

use crate::es::error::{Error, NetworkError, ValidationErr};
use crate::es::types::{EsRequest, FromEsResponse};
use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, StatusCode};
use serde::de::DeserializeOwned;
use std::mem;

/// Accessors shared by every response type.
pub trait HasEsFields {
    /// The request that was sent.
    fn request(&self) -> &EsRequest;
    /// HTTP status of the response.
    fn status(&self) -> StatusCode;
    /// HTTP headers returned by the server.
    fn headers(&self) -> &HeaderMap;
    /// The raw response body.
    fn body(&self) -> &Bytes;
}

#[macro_export]
/// Implements [`HasEsFields`] for structs with `request`, `status`, `headers` and `body` fields.
macro_rules! impl_has_es_fields {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::es::response::HasEsFields for $ty {
                #[inline]
                fn request(&self) -> &$crate::es::types::EsRequest {
                    &self.request
                }

                #[inline]
                fn status(&self) -> http::StatusCode {
                    self.status
                }

                #[inline]
                fn headers(&self) -> &http::HeaderMap {
                    &self.headers
                }

                #[inline]
                fn body(&self) -> &bytes::Bytes {
                    &self.body
                }
            }
        )*
    };
}

/// Response of a regular endpoint: a status, headers and a (usually JSON) body.
#[derive(Clone, Debug)]
pub struct EsResponse {
    request: EsRequest,
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
}
impl_has_es_fields!(EsResponse);

#[async_trait]
impl FromEsResponse for EsResponse {
    async fn from_es_response(
        request: EsRequest,
        response: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error> {
        let mut resp = response?;
        Ok(Self {
            request,
            status: resp.status(),
            headers: mem::take(resp.headers_mut()),
            body: resp.bytes().await.map_err(NetworkError::from)?,
        })
    }
}

impl EsResponse {
    /// Deserializes the body into `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, Error> {
        serde_json::from_slice(&self.body).map_err(|e| ValidationErr::from(e).into())
    }

    /// The body as UTF-8 text.
    pub fn text(&self) -> Result<&str, Error> {
        std::str::from_utf8(&self.body).map_err(|e| ValidationErr::from(e).into())
    }
}

/// Response of a `HEAD` endpoint such as `exists` or `indices.exists`.
///
/// A `404` is not an error here; it means the resource does not exist.
#[derive(Clone, Debug)]
pub struct ExistsResponse {
    request: EsRequest,
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,

    pub(crate) exists: bool,
}
impl_has_es_fields!(ExistsResponse);

#[async_trait]
impl FromEsResponse for ExistsResponse {
    async fn from_es_response(
        request: EsRequest,
        response: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error> {
        match response {
            Ok(mut resp) => Ok(Self {
                request,
                status: resp.status(),
                headers: mem::take(resp.headers_mut()),
                body: resp.bytes().await.map_err(NetworkError::from)?,
                exists: true,
            }),
            Err(Error::Server(mut e)) if e.status() == StatusCode::NOT_FOUND.as_u16() => {
                Ok(Self {
                    request,
                    status: StatusCode::NOT_FOUND,
                    headers: e.take_headers(),
                    body: Bytes::new(),
                    exists: false,
                })
            }
            Err(e) => Err(e),
        }
    }
}

impl ExistsResponse {
    /// Returns `true` if the resource exists, `false` otherwise.
    pub fn exists(&self) -> bool {
        self.exists
    }
}
