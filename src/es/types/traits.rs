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

//! Core traits for request and response handling.

use super::es_request::EsRequest;
use crate::es::error::{Error, ValidationErr};
use async_trait::async_trait;

/// Trait for converting a request builder into a concrete [`EsRequest`].
///
/// All parameter validation happens here, so a builder that fails to convert
/// never reaches the transport.
///
/// # See Also
///
/// * [`EsApi`] - The trait that uses `ToEsRequest` as part of its request execution pipeline
/// * [`FromEsResponse`] - The counterpart trait for converting HTTP responses into typed responses
pub trait ToEsRequest: Sized {
    /// Consumes this request builder and returns an [`EsRequest`].
    ///
    /// # Returns
    ///
    /// * `Result<EsRequest, ValidationErr>` - The executable request on success,
    ///   or an error if a parameter is missing, unknown or has an unusable value.
    fn to_es_request(self) -> Result<EsRequest, ValidationErr>;
}

/// Trait for converting HTTP responses into typed response objects.
///
/// Receives both the executed request and the outcome of executing it, so an
/// implementation may turn selected errors into regular responses (a `404` on
/// a `HEAD` endpoint, for instance).
#[async_trait]
pub trait FromEsResponse: Sized {
    async fn from_es_response(
        request: EsRequest,
        response: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error>;
}

/// Trait that defines a common interface for all request builders.
///
/// # Type Parameters
///
/// * `EsResponse` - The response type associated with this request builder.
///   Must implement the [`FromEsResponse`] trait.
#[async_trait]
pub trait EsApi: ToEsRequest {
    type EsResponse: FromEsResponse;

    /// Sends the request and returns the corresponding typed response.
    ///
    /// Validation errors are returned before the transport is invoked.
    async fn send(self) -> Result<Self::EsResponse, Error> {
        let mut req: EsRequest = self.to_es_request()?;
        let resp: Result<reqwest::Response, Error> = req.execute().await;
        Self::EsResponse::from_es_response(req, resp).await
    }
}
