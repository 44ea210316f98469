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

pub use http::Extensions;

use crate::es::error::Error;
use crate::es::types::EsRequest;
use reqwest::Response;
use std::fmt::Debug;

/// Callbacks around every request sent by an [`EsClient`](super::EsClient).
///
/// Hooks run in the order they were registered. A failing
/// `before_send_mut` aborts the request; `after_execute` sees the outcome
/// but cannot change it.
#[async_trait::async_trait]
pub trait RequestLifecycleHooks: Debug {
    fn name(&self) -> &'static str;

    async fn before_send_mut(
        &self,
        _request: &mut EsRequest,
        _extensions: &mut Extensions,
    ) -> Result<(), Error> {
        Ok(())
    }

    async fn after_execute(
        &self,
        _request: &EsRequest,
        _resp: &Result<Response, Error>,
        _extensions: &mut Extensions,
    ) {
    }
}
