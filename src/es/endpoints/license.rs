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

//! `license.*` endpoints.

use super::{EndpointSpec, Route, Verb};

pub static DELETE: EndpointSpec = EndpointSpec {
    name: "license.delete",
    routes: &[Route::new("/_license", Verb::Delete)],
    required: &[],
    query: &[],
};

pub static GET: EndpointSpec = EndpointSpec {
    name: "license.get",
    routes: &[Route::new("/_license", Verb::Get)],
    required: &[],
    query: &["local", "accept_enterprise"],
};

pub static GET_BASIC_STATUS: EndpointSpec = EndpointSpec {
    name: "license.get_basic_status",
    routes: &[Route::new("/_license/basic_status", Verb::Get)],
    required: &[],
    query: &[],
};

pub static GET_TRIAL_STATUS: EndpointSpec = EndpointSpec {
    name: "license.get_trial_status",
    routes: &[Route::new("/_license/trial_status", Verb::Get)],
    required: &[],
    query: &[],
};

/// Installs or updates a license. The license document goes in `body`.
pub static POST: EndpointSpec = EndpointSpec {
    name: "license.post",
    routes: &[Route::new("/_license", Verb::Put)],
    required: &[],
    query: &["acknowledge"],
};

pub static POST_START_BASIC: EndpointSpec = EndpointSpec {
    name: "license.post_start_basic",
    routes: &[Route::new("/_license/start_basic", Verb::Post)],
    required: &[],
    query: &["acknowledge"],
};

pub static POST_START_TRIAL: EndpointSpec = EndpointSpec {
    name: "license.post_start_trial",
    routes: &[Route::new("/_license/start_trial", Verb::Post)],
    required: &[],
    query: &["type", "acknowledge"],
};

pub static ALL: &[&EndpointSpec] = &[
    &DELETE,
    &GET,
    &GET_BASIC_STATUS,
    &GET_TRIAL_STATUS,
    &POST,
    &POST_START_BASIC,
    &POST_START_TRIAL,
];
