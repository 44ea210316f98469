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

//! `indices.*` endpoints.

use super::{EndpointSpec, Route, Verb};

const WILDCARD_OPTIONS: &[&str] = &["ignore_unavailable", "allow_no_indices", "expand_wildcards"];

pub static CREATE: EndpointSpec = EndpointSpec {
    name: "indices.create",
    routes: &[Route::new("/{index}", Verb::Put)],
    required: &["index"],
    query: &[
        "include_type_name",
        "wait_for_active_shards",
        "timeout",
        "master_timeout",
    ],
};

pub static DELETE: EndpointSpec = EndpointSpec {
    name: "indices.delete",
    routes: &[Route::new("/{index}", Verb::Delete)],
    required: &["index"],
    query: &[
        "timeout",
        "master_timeout",
        "ignore_unavailable",
        "allow_no_indices",
        "expand_wildcards",
    ],
};

pub static EXISTS: EndpointSpec = EndpointSpec {
    name: "indices.exists",
    routes: &[Route::new("/{index}", Verb::Head)],
    required: &["index"],
    query: &[
        "local",
        "ignore_unavailable",
        "allow_no_indices",
        "expand_wildcards",
        "flat_settings",
        "include_defaults",
    ],
};

pub static REFRESH: EndpointSpec = EndpointSpec {
    name: "indices.refresh",
    routes: &[
        Route::new("/{index}/_refresh", Verb::Post),
        Route::new("/_refresh", Verb::Post),
    ],
    required: &[],
    query: WILDCARD_OPTIONS,
};

pub static PUT_TEMPLATE: EndpointSpec = EndpointSpec {
    name: "indices.put_template",
    routes: &[Route::new("/_template/{name}", Verb::Put)],
    required: &["name", "body"],
    query: &["include_type_name", "order", "create", "master_timeout"],
};

pub static GET_TEMPLATE: EndpointSpec = EndpointSpec {
    name: "indices.get_template",
    routes: &[
        Route::new("/_template/{name}", Verb::Get),
        Route::new("/_template", Verb::Get),
    ],
    required: &[],
    query: &["include_type_name", "flat_settings", "master_timeout", "local"],
};

pub static DELETE_TEMPLATE: EndpointSpec = EndpointSpec {
    name: "indices.delete_template",
    routes: &[Route::new("/_template/{name}", Verb::Delete)],
    required: &["name"],
    query: &["timeout", "master_timeout"],
};

pub static EXISTS_TEMPLATE: EndpointSpec = EndpointSpec {
    name: "indices.exists_template",
    routes: &[Route::new("/_template/{name}", Verb::Head)],
    required: &["name"],
    query: &["flat_settings", "master_timeout", "local"],
};

pub static ALL: &[&EndpointSpec] = &[
    &CREATE,
    &DELETE,
    &EXISTS,
    &REFRESH,
    &PUT_TEMPLATE,
    &GET_TEMPLATE,
    &DELETE_TEMPLATE,
    &EXISTS_TEMPLATE,
];
