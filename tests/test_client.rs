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

use async_trait::async_trait;
use es_common::mock_transport::MockTransport;
use es_rest::es::client::hooks::{Extensions, RequestLifecycleHooks};
use es_rest::es::client::{EsClient, EsClientBuilder};
use es_rest::es::error::{Error, ValidationErr};
use es_rest::es::http::BaseUrl;
use es_rest::es::multimap_ext::{Multimap, MultimapExt};
use es_rest::es::params::Params;
use es_rest::es::types::{EsApi, EsRequest, ToEsRequest};
use reqwest::Response;
use serde_json::json;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Default)]
struct OpaqueIdHook {
    completed: AtomicUsize,
}

#[async_trait]
impl RequestLifecycleHooks for OpaqueIdHook {
    fn name(&self) -> &'static str {
        "opaque-id"
    }

    async fn before_send_mut(
        &self,
        request: &mut EsRequest,
        _extensions: &mut Extensions,
    ) -> Result<(), Error> {
        request.headers_mut().add("X-Opaque-Id", "test-run");
        Ok(())
    }

    async fn after_execute(
        &self,
        _request: &EsRequest,
        _resp: &Result<Response, Error>,
        _extensions: &mut Extensions,
    ) {
        self.completed.fetch_add(1, Ordering::SeqCst);
    }
}

#[derive(Debug)]
struct RejectingHook;

#[async_trait]
impl RequestLifecycleHooks for RejectingHook {
    fn name(&self) -> &'static str {
        "reject"
    }

    async fn before_send_mut(
        &self,
        request: &mut EsRequest,
        _extensions: &mut Extensions,
    ) -> Result<(), Error> {
        Err(ValidationErr::InvalidHeader {
            name: "X-Opaque-Id".into(),
            reason: format!("{} is blocked", request.endpoint()),
        }
        .into())
    }
}

fn mocked_client(
    hook: Option<Arc<dyn RequestLifecycleHooks + Send + Sync>>,
) -> (EsClient, MockTransport) {
    let transport = MockTransport::new();
    let mut builder = EsClientBuilder::new(BaseUrl::default()).transport(transport.clone());
    if let Some(hook) = hook {
        builder = builder.hook(hook);
    }
    (builder.build().unwrap(), transport)
}

#[tokio::test]
async fn hooks_run_around_every_request() {
    let hook = Arc::new(OpaqueIdHook::default());
    let registered: Arc<dyn RequestLifecycleHooks + Send + Sync> = hook.clone();
    let (client, transport) = mocked_client(Some(registered));

    client.security().authenticate(Params::new()).send().await.unwrap();
    transport.respond_with(404, "");
    let _ = client
        .security()
        .get_role(Params::new().param("name", "nope"))
        .send()
        .await;

    assert_eq!(hook.completed.load(Ordering::SeqCst), 2);
    for r in transport.requests() {
        assert_eq!(
            r.headers.get_vec("X-Opaque-Id"),
            Some(&vec!["test-run".to_string()])
        );
    }
}

#[tokio::test]
async fn failing_hook_aborts_request() {
    let hook: Arc<dyn RequestLifecycleHooks + Send + Sync> = Arc::new(RejectingHook);
    let (client, transport) = mocked_client(Some(hook));

    let err = client.license().get(Params::new()).send().await.unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationErr::InvalidHeader { ref reason, .. }) if reason == "license.get is blocked"
    ));
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn server_errors_are_decoded() {
    let (client, transport) = mocked_client(None);
    transport.respond_with(
        403,
        r#"{"error":{"root_cause":[{"type":"security_exception","reason":"action [cluster:admin/xpack/security/role/put] is unauthorized"}],"type":"security_exception","reason":"action [cluster:admin/xpack/security/role/put] is unauthorized"},"status":403}"#,
    );

    let err = client
        .security()
        .put_role(Params::new().param("name", "r").body(json!({"cluster": ["all"]})))
        .send()
        .await
        .unwrap_err();
    let e = match err {
        Error::Server(e) => e,
        other => panic!("expected a server error, got {other:?}"),
    };
    assert_eq!(e.status(), 403);
    assert_eq!(e.error_type(), Some("security_exception"));
    assert!(e.body().contains("is unauthorized"));
}

#[tokio::test]
async fn extra_headers_are_sent() {
    let (client, transport) = mocked_client(None);
    let mut headers = Multimap::new();
    headers.add("X-Elastic-Product-Origin", "kibana");

    client
        .security()
        .get_user(Params::new())
        .extra_headers(Some(headers))
        .send()
        .await
        .unwrap();

    let r = transport.last_request().unwrap();
    assert_eq!(
        r.headers.get("X-Elastic-Product-Origin").map(String::as_str),
        Some("kibana")
    );
}

#[tokio::test]
async fn common_parameters_are_accepted_everywhere() {
    let (client, transport) = mocked_client(None);

    client
        .license()
        .get_trial_status(Params::new().param("pretty", true).param("error_trace", true))
        .send()
        .await
        .unwrap();
    assert_eq!(
        transport.last_request().unwrap().path_and_query,
        "/_license/trial_status?error_trace=true&pretty=true"
    );
}

#[test]
fn resolution_is_deterministic() {
    let (client, _) = mocked_client(None);
    let call = client
        .security()
        .put_user(Params::new().param("username", "jacknich"))
        .body(json!({"password": "l0ng-r4nd0m-p@ssw0rd"}))
        .param("refresh", "true");

    let a = call.clone().to_es_request().unwrap();
    let b = call.to_es_request().unwrap();
    assert_eq!(a, b);
    assert_eq!(a.path_and_query(), "/_security/user/jacknich?refresh=true");
}

#[test]
fn params_from_json_object() {
    let (client, _) = mocked_client(None);
    let params =
        Params::try_from(json!({"name": "my_admin_role", "body": {"cluster": ["all"]}})).unwrap();

    let req = client.security().put_role(params).to_es_request().unwrap();
    assert_eq!(req.path(), "/_security/role/my_admin_role");
    assert!(req.body().is_some());

    assert!(Params::try_from(json!(["not", "an", "object"])).is_err());
}
