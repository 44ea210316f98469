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

use es_common::test_context::TestContext;
use es_common::utils::rand_index_name;
use es_rest::es::error::{Error, ValidationErr};
use es_rest::es::params::Params;
use es_rest::es::response::HasEsFields;
use es_rest::es::types::EsApi;
use http::Method;
use serde_json::json;

#[tokio::test]
async fn indices_create_delete() {
    let ctx = TestContext::new_mocked();
    let index = rand_index_name();
    let settings = json!({"settings": {"number_of_shards": 1}});

    ctx.client
        .indices()
        .create(Params::new().param("index", index.as_str()).body(settings))
        .send()
        .await
        .unwrap();
    let r = ctx.mock().last_request().unwrap();
    assert_eq!(r.method, Method::PUT);
    assert_eq!(r.path, format!("/{index}"));
    assert!(r.body.is_some());

    ctx.client
        .indices()
        .delete(Params::new().param("index", index.as_str()))
        .send()
        .await
        .unwrap();
    let r = ctx.mock().last_request().unwrap();
    assert_eq!(r.method, Method::DELETE);
    assert_eq!(r.path, format!("/{index}"));

    let err = ctx.client.indices().create(Params::new()).send().await.unwrap_err();
    assert!(err.is_missing_parameter());
    assert_eq!(ctx.mock().request_count(), 2);
}

#[tokio::test]
async fn indices_exists() {
    let ctx = TestContext::new_mocked();
    ctx.mock().respond_with(200, "");
    ctx.mock().respond_with(404, "");

    let resp = ctx
        .client
        .indices()
        .exists(Params::new().param("index", "logs-2025"))
        .send()
        .await
        .unwrap();
    assert!(resp.exists());
    assert_eq!(resp.request().method(), Method::HEAD);

    let resp = ctx
        .client
        .indices()
        .exists(Params::new().param("index", "missing"))
        .send()
        .await
        .unwrap();
    assert!(!resp.exists());
    assert_eq!(resp.status(), 404);
    assert_eq!(resp.request().path(), "/missing");
}

#[tokio::test]
async fn indices_exists_propagates_other_errors() {
    let ctx = TestContext::new_mocked();
    ctx.mock().respond_with(503, "");

    let err = ctx
        .client
        .indices()
        .exists(Params::new().param("index", "logs"))
        .send()
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), Some(503));
}

#[tokio::test]
async fn indices_refresh() {
    let ctx = TestContext::new_mocked();

    ctx.client.indices().refresh(Params::new()).send().await.unwrap();
    assert_eq!(ctx.mock().last_request().unwrap().path, "/_refresh");

    ctx.client
        .indices()
        .refresh(
            Params::new()
                .param("index", vec!["logs-*", "metrics"])
                .param("expand_wildcards", "open")
                .param("ignore_unavailable", true),
        )
        .send()
        .await
        .unwrap();
    let r = ctx.mock().last_request().unwrap();
    assert_eq!(r.method, Method::POST);
    assert_eq!(
        r.path_and_query,
        "/logs-*,metrics/_refresh?expand_wildcards=open&ignore_unavailable=true"
    );
}

#[tokio::test]
async fn indices_templates() {
    let ctx = TestContext::new_mocked();
    let template = || Params::new().param("name", "template_1");
    let body = json!({"index_patterns": ["te*"], "settings": {"number_of_shards": 1}});

    ctx.client
        .indices()
        .put_template(template().body(body.clone()).param("order", 0))
        .send()
        .await
        .unwrap();
    let r = ctx.mock().last_request().unwrap();
    assert_eq!(r.method, Method::PUT);
    assert_eq!(r.path_and_query, "/_template/template_1?order=0");

    ctx.client.indices().get_template(Params::new()).send().await.unwrap();
    assert_eq!(ctx.mock().last_request().unwrap().path, "/_template");
    ctx.client.indices().get_template(template()).send().await.unwrap();
    assert_eq!(ctx.mock().last_request().unwrap().path, "/_template/template_1");

    ctx.mock().respond_with(404, "");
    let resp = ctx
        .client
        .indices()
        .exists_template(template())
        .send()
        .await
        .unwrap();
    assert!(!resp.exists());

    ctx.client.indices().delete_template(template()).send().await.unwrap();
    let r = ctx.mock().last_request().unwrap();
    assert_eq!(r.method, Method::DELETE);
    assert_eq!(r.path, "/_template/template_1");

    let count = ctx.mock().request_count();
    let err = ctx
        .client
        .indices()
        .put_template(template())
        .send()
        .await
        .unwrap_err();
    assert_missing(err, "body");
    let err = ctx
        .client
        .indices()
        .put_template(Params::new().body(body))
        .send()
        .await
        .unwrap_err();
    assert_missing(err, "name");
    assert_eq!(ctx.mock().request_count(), count);
}

fn assert_missing(err: Error, expected: &str) {
    match err {
        Error::Validation(ValidationErr::MissingParameter { name, .. }) => {
            assert_eq!(name, expected)
        }
        e => panic!("expected {expected} to be missing, got {e}"),
    }
}

#[tokio::test]
async fn indices_require_their_identifiers() {
    let ctx = TestContext::new_mocked();
    let indices = ctx.client.indices();

    assert_missing(indices.delete(Params::new()).send().await.unwrap_err(), "index");
    assert_missing(indices.exists(Params::new()).send().await.unwrap_err(), "index");
    assert_missing(
        indices.delete_template(Params::new()).send().await.unwrap_err(),
        "name",
    );
    assert_missing(
        indices.exists_template(Params::new()).send().await.unwrap_err(),
        "name",
    );
    // null counts as absent
    assert_missing(
        indices
            .exists(Params::new().param("index", serde_json::Value::Null))
            .send()
            .await
            .unwrap_err(),
        "index",
    );

    assert_eq!(ctx.mock().request_count(), 0);
}
