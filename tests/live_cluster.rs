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

//! Round trips against a real node, configured through `ELASTICSEARCH_URL`
//! and the credential variables read by `EsClientBuilder::from_env`.

use es_common::test_context::TestContext;
use es_common::utils::{rand_index_name, rand_name};
use es_rest::es::params::Params;
use es_rest::es::types::EsApi;
use serde_json::{Value, json};

#[tokio::test(flavor = "multi_thread", worker_threads = 10)]
#[ignore = "requires a running Elasticsearch node"]
async fn live_document_round_trip() {
    let ctx = TestContext::new_from_env();
    let index = rand_index_name();
    let id = || Params::new().param("index", index.as_str()).param("id", "1");

    ctx.client
        .indices()
        .create(Params::new().param("index", index.as_str()))
        .send()
        .await
        .unwrap();
    ctx.client
        .index(id().param("refresh", "true").body(json!({"user": "kimchy"})))
        .send()
        .await
        .unwrap();

    let resp = ctx.client.get_source(id()).send().await.unwrap();
    assert_eq!(resp.json::<Value>().unwrap()["user"], "kimchy");
    assert!(ctx.client.exists(id()).send().await.unwrap().exists());

    ctx.client
        .indices()
        .delete(Params::new().param("index", index.as_str()))
        .send()
        .await
        .unwrap();
    let resp = ctx
        .client
        .indices()
        .exists(Params::new().param("index", index.as_str()))
        .send()
        .await
        .unwrap();
    assert!(!resp.exists());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 10)]
#[ignore = "requires a running Elasticsearch node with security enabled"]
async fn live_role_round_trip() {
    let ctx = TestContext::new_from_env();
    let name = rand_name();
    let role = || Params::new().param("name", name.as_str());

    ctx.client
        .security()
        .put_role(role().body(json!({"cluster": ["monitor"]})))
        .send()
        .await
        .unwrap();

    let resp = ctx.client.security().get_role(role()).send().await.unwrap();
    let roles: Value = resp.json().unwrap();
    assert_eq!(roles[name.as_str()]["cluster"], json!(["monitor"]));

    ctx.client.security().delete_role(role()).send().await.unwrap();
    let err = ctx
        .client
        .security()
        .get_role(role())
        .send()
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), Some(404));
}
