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

//! # Elasticsearch REST bindings (`es-rest`)
//!
//! This crate exposes the Elasticsearch REST API as typed method calls.
//!
//! Every REST operation is described by a static [`es::endpoints::EndpointSpec`]:
//! its URL templates in precedence order, the HTTP verb of each template, the
//! required parameters and the accepted query-string parameters. Operations are
//! grouped in namespaces (`client.security()`, `client.license()`,
//! `client.indices()`, core operations directly on the client) and each one
//! returns an [`es::builders::EndpointCall`], the single generic dispatcher.
//!
//! All calls implement the [`es::types::EsApi`] trait, which provides the async
//! [`send`](crate::es::types::EsApi::send) method to execute the request and
//! return a typed response.
//!
//! ## Basic Usage
//!
//! ```no_run
//! use es_rest::es::EsClient;
//! use es_rest::es::params::Params;
//! use es_rest::es::types::EsApi;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = EsClient::create_client_on_localhost().unwrap(); // configure your client here
//!
//!     let resp = client
//!         .security()
//!         .get_role(Params::new().param("name", "admin"))
//!         .send()
//!         .await
//!         .expect("request failed");
//!
//!     println!("role: {}", resp.text().unwrap());
//! }
//! ```
//!
//! ## Design
//! - Required parameters are checked before any network interaction; a missing
//!   one yields [`es::error::ValidationErr::MissingParameter`]
//! - Request construction is deterministic and side-effect free; the resulting
//!   [`es::types::EsRequest`] is handed to a [`es::transport::Transport`]
//! - Responses implement [`es::types::FromEsResponse`]

#![allow(clippy::result_large_err)]
pub mod es;

#[cfg(test)]
#[macro_use]
extern crate quickcheck;
