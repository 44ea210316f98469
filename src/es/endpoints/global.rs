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

//! Endpoints living directly on the client: document and search APIs.

use super::{EndpointSpec, Route, Verb};

const DOCUMENT_READ: &[&str] = &[
    "stored_fields",
    "preference",
    "realtime",
    "refresh",
    "routing",
    "_source",
    "_source_excludes",
    "_source_includes",
    "version",
    "version_type",
];

const SOURCE_READ: &[&str] = &[
    "preference",
    "realtime",
    "refresh",
    "routing",
    "_source",
    "_source_excludes",
    "_source_includes",
    "version",
    "version_type",
];

pub static INFO: EndpointSpec = EndpointSpec {
    name: "info",
    routes: &[Route::new("/", Verb::Get)],
    required: &[],
    query: &[],
};

pub static PING: EndpointSpec = EndpointSpec {
    name: "ping",
    routes: &[Route::new("/", Verb::Head)],
    required: &[],
    query: &[],
};

pub static GET: EndpointSpec = EndpointSpec {
    name: "get",
    routes: &[Route::new("/{index}/_doc/{id}", Verb::Get)],
    required: &["id", "index"],
    query: DOCUMENT_READ,
};

pub static EXISTS: EndpointSpec = EndpointSpec {
    name: "exists",
    routes: &[Route::new("/{index}/_doc/{id}", Verb::Head)],
    required: &["id", "index"],
    query: DOCUMENT_READ,
};

/// Typed URLs are still accepted when `type` is given, with a deprecation warning.
pub static GET_SOURCE: EndpointSpec = EndpointSpec {
    name: "get_source",
    routes: &[
        Route::new("/{index}/{type}/{id}/_source", Verb::Get).deprecated(),
        Route::new("/{index}/_source/{id}", Verb::Get),
    ],
    required: &["id", "index"],
    query: SOURCE_READ,
};

/// PUT when the caller picks the document id, POST to let the server assign one.
pub static INDEX: EndpointSpec = EndpointSpec {
    name: "index",
    routes: &[
        Route::new("/{index}/_doc/{id}", Verb::Put),
        Route::new("/{index}/_doc", Verb::Post),
    ],
    required: &["index", "body"],
    query: &[
        "wait_for_active_shards",
        "op_type",
        "refresh",
        "routing",
        "timeout",
        "version",
        "version_type",
        "if_seq_no",
        "if_primary_term",
        "pipeline",
        "require_alias",
    ],
};

pub static DELETE: EndpointSpec = EndpointSpec {
    name: "delete",
    routes: &[Route::new("/{index}/_doc/{id}", Verb::Delete)],
    required: &["id", "index"],
    query: &[
        "wait_for_active_shards",
        "refresh",
        "routing",
        "timeout",
        "if_seq_no",
        "if_primary_term",
        "version",
        "version_type",
    ],
};

pub static SEARCH: EndpointSpec = EndpointSpec {
    name: "search",
    routes: &[
        Route::new("/{index}/_search", Verb::GetOrPost),
        Route::new("/_search", Verb::GetOrPost),
    ],
    required: &[],
    query: &[
        "analyzer",
        "analyze_wildcard",
        "ccs_minimize_roundtrips",
        "default_operator",
        "df",
        "explain",
        "stored_fields",
        "docvalue_fields",
        "from",
        "ignore_unavailable",
        "ignore_throttled",
        "allow_no_indices",
        "expand_wildcards",
        "lenient",
        "preference",
        "q",
        "routing",
        "scroll",
        "search_type",
        "size",
        "sort",
        "_source",
        "_source_excludes",
        "_source_includes",
        "terminate_after",
        "stats",
        "suggest_field",
        "suggest_mode",
        "suggest_size",
        "suggest_text",
        "timeout",
        "track_scores",
        "track_total_hits",
        "allow_partial_search_results",
        "typed_keys",
        "version",
        "seq_no_primary_term",
        "request_cache",
        "batched_reduce_size",
        "max_concurrent_shard_requests",
        "pre_filter_shard_size",
        "rest_total_hits_as_int",
    ],
};

/// Document count, index-scoped or across the cluster.
pub static COUNT: EndpointSpec = EndpointSpec {
    name: "count",
    routes: &[
        Route::new("/{index}/_count", Verb::GetOrPost),
        Route::new("/_count", Verb::GetOrPost),
    ],
    required: &[],
    query: &[
        "ignore_unavailable",
        "ignore_throttled",
        "allow_no_indices",
        "expand_wildcards",
        "min_score",
        "preference",
        "routing",
        "q",
        "analyzer",
        "analyze_wildcard",
        "default_operator",
        "df",
        "lenient",
        "terminate_after",
    ],
};

pub static ALL: &[&EndpointSpec] = &[
    &INFO, &PING, &GET, &EXISTS, &GET_SOURCE, &INDEX, &DELETE, &SEARCH, &COUNT,
];
