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

//! Client for the Elasticsearch REST API

pub mod builders;
pub mod client;
pub mod creds;
pub mod endpoints;
pub mod error;
pub mod es_error_response;
pub mod http;
pub mod multimap_ext;
pub mod params;
pub mod response;
pub mod transport;
pub mod types;
pub mod utils;

pub use client::{EsClient, EsClientBuilder};
