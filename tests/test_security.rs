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
use es_rest::es::error::{Error, ValidationErr};
use es_rest::es::params::Params;
use es_rest::es::types::{EsApi, RequestBody};
use http::Method;
use serde_json::{Value, json};

/// Sends `security.$op` and checks the verb and path the transport received.
macro_rules! assert_route {
    ($ctx:expr, $op:ident, $params:expr, $method:expr, $path:expr) => {{
        $ctx.client
            .security()
            .$op($params)
            .send()
            .await
            .unwrap_or_else(|e| panic!("{}: {e}", stringify!($op)));
        let r = $ctx.mock().last_request().unwrap();
        assert_eq!(r.method, $method, "{}", stringify!($op));
        assert_eq!(r.path_and_query, $path, "{}", stringify!($op));
        r
    }};
}

/// Sends `security.$op` and checks it fails naming `$name`, without a request.
macro_rules! assert_missing {
    ($ctx:expr, $op:ident, $params:expr, $name:expr) => {{
        let before = $ctx.mock().request_count();
        match $ctx.client.security().$op($params).send().await {
            Err(Error::Validation(ValidationErr::MissingParameter { name, .. })) => {
                assert_eq!(name, $name, "{}", stringify!($op))
            }
            Err(e) => panic!("{}: unexpected error {e}", stringify!($op)),
            Ok(_) => panic!("{}: missing {} accepted", stringify!($op), $name),
        }
        assert_eq!($ctx.mock().request_count(), before, "{}", stringify!($op));
    }};
}

fn p() -> Params {
    Params::new()
}

fn service() -> Params {
    p().param("namespace", "elastic").param("service", "fleet-server")
}

#[tokio::test]
async fn security_users() {
    let ctx = TestContext::new_mocked();
    let user = || p().param("username", "jacknich");
    let doc = json!({"password": "l0ng-r4nd0m-p@ssw0rd", "roles": ["admin"]});

    assert_route!(ctx, authenticate, p(), Method::GET, "/_security/_authenticate");
    assert_route!(ctx, get_user, p(), Method::GET, "/_security/user");
    assert_route!(ctx, get_user, p().param("username", vec!["jacknich", "rdinero"]), Method::GET, "/_security/user/jacknich,rdinero");
    assert_route!(ctx, get_user_privileges, p(), Method::GET, "/_security/user/_privileges");
    assert_route!(ctx, put_user, user().body(doc.clone()).param("refresh", "wait_for"), Method::PUT, "/_security/user/jacknich?refresh=wait_for");
    assert_route!(ctx, delete_user, user(), Method::DELETE, "/_security/user/jacknich");
    assert_route!(ctx, disable_user, user(), Method::PUT, "/_security/user/jacknich/_disable");
    assert_route!(ctx, enable_user, user(), Method::PUT, "/_security/user/jacknich/_enable");
    assert_route!(ctx, change_password, p().body(json!({"password": "x"})), Method::PUT, "/_security/user/_password");
    assert_route!(ctx, change_password, user().body(json!({"password": "x"})), Method::PUT, "/_security/user/jacknich/_password");

    assert_missing!(ctx, put_user, p().body(doc), "username");
    assert_missing!(ctx, put_user, user(), "body");
    assert_missing!(ctx, delete_user, p(), "username");
    assert_missing!(ctx, disable_user, p(), "username");
    assert_missing!(ctx, enable_user, p(), "username");
    assert_missing!(ctx, change_password, user(), "body");
}

#[tokio::test]
async fn security_roles_and_mappings() {
    let ctx = TestContext::new_mocked();
    let role = || p().param("name", "my_admin_role");
    let mapping = || p().param("name", "mapping1");
    let body = json!({"cluster": ["all"], "indices": [{"names": ["index1"], "privileges": ["all"]}]});

    assert_route!(ctx, get_role, p(), Method::GET, "/_security/role");
    assert_route!(ctx, get_role, role(), Method::GET, "/_security/role/my_admin_role");
    let r = assert_route!(ctx, put_role, role().body(body.clone()), Method::PUT, "/_security/role/my_admin_role");
    assert_eq!(r.body, Some(RequestBody::Json(body.clone())));
    assert_route!(ctx, delete_role, role(), Method::DELETE, "/_security/role/my_admin_role");
    assert_route!(ctx, clear_cached_roles, role(), Method::POST, "/_security/role/my_admin_role/_clear_cache");

    assert_route!(ctx, get_role_mapping, p(), Method::GET, "/_security/role_mapping");
    assert_route!(ctx, get_role_mapping, mapping(), Method::GET, "/_security/role_mapping/mapping1");
    assert_route!(ctx, put_role_mapping, mapping().body(json!({"enabled": true})), Method::PUT, "/_security/role_mapping/mapping1");
    assert_route!(ctx, delete_role_mapping, mapping(), Method::DELETE, "/_security/role_mapping/mapping1");

    assert_missing!(ctx, put_role, p(), "name");
    assert_missing!(ctx, put_role, p().body(body), "name");
    assert_missing!(ctx, put_role, role(), "body");
    assert_missing!(ctx, put_role, role().body(Value::Null), "body");
    assert_missing!(ctx, delete_role, p(), "name");
    assert_missing!(ctx, clear_cached_roles, p(), "name");
    assert_missing!(ctx, put_role_mapping, mapping(), "body");
    assert_missing!(ctx, delete_role_mapping, p(), "name");
}

#[tokio::test]
async fn security_privileges() {
    let ctx = TestContext::new_mocked();
    let app = || p().param("application", "myapp");

    assert_route!(ctx, get_builtin_privileges, p(), Method::GET, "/_security/privilege/_builtin");
    assert_route!(ctx, get_privileges, p(), Method::GET, "/_security/privilege");
    assert_route!(ctx, get_privileges, app(), Method::GET, "/_security/privilege/myapp");
    assert_route!(ctx, get_privileges, app().param("name", "read"), Method::GET, "/_security/privilege/myapp/read");
    // a privilege name alone does not select a more specific URL
    assert_route!(ctx, get_privileges, p().param("name", "read"), Method::GET, "/_security/privilege");
    assert_route!(ctx, put_privileges, p().body(json!({"myapp": {"read": {}}})), Method::PUT, "/_security/privilege/");
    assert_route!(ctx, delete_privileges, app().param("name", "read"), Method::DELETE, "/_security/privilege/myapp/read");
    assert_route!(ctx, clear_cached_privileges, app(), Method::POST, "/_security/privilege/myapp/_clear_cache");

    assert_missing!(ctx, put_privileges, p(), "body");
    assert_missing!(ctx, delete_privileges, p().param("name", "read"), "application");
    assert_missing!(ctx, delete_privileges, app(), "name");
    assert_missing!(ctx, clear_cached_privileges, p(), "application");
}

#[tokio::test]
async fn security_has_privileges_picks_verb_from_body() {
    let ctx = TestContext::new_mocked();
    let check = json!({"cluster": ["monitor"]});

    let r = assert_route!(ctx, has_privileges, p().body(json!({})), Method::GET, "/_security/user/_has_privileges");
    assert_eq!(r.body, None);
    let r = assert_route!(ctx, has_privileges, p().body(check.clone()), Method::POST, "/_security/user/_has_privileges");
    assert_eq!(r.body, Some(RequestBody::Json(check.clone())));
    assert_route!(ctx, has_privileges, p().param("user", "jacknich").body(check), Method::POST, "/_security/user/jacknich/_has_privileges");

    assert_missing!(ctx, has_privileges, p().param("user", "jacknich"), "body");
}

#[tokio::test]
async fn security_api_keys() {
    let ctx = TestContext::new_mocked();
    let key = json!({"name": "my-api-key", "expiration": "1d"});

    assert_route!(ctx, create_api_key, p().body(key.clone()), Method::PUT, "/_security/api_key");
    assert_route!(ctx, grant_api_key, p().body(key.clone()).param("refresh", true), Method::POST, "/_security/api_key/grant?refresh=true");
    assert_route!(ctx, get_api_key, p(), Method::GET, "/_security/api_key");
    assert_route!(ctx, get_api_key, p().param("owner", true).param("name", "my-api-key"), Method::GET, "/_security/api_key?name=my-api-key&owner=true");
    assert_route!(ctx, invalidate_api_key, p().body(json!({"ids": ["VuaCfGcBCdbkQm-e5aOx"]})), Method::DELETE, "/_security/api_key");
    assert_route!(ctx, clear_api_key_cache, p().param("ids", vec!["yVGMr3QByxdh1MSaicYx", "*"]), Method::POST, "/_security/api_key/yVGMr3QByxdh1MSaicYx,*/_clear_cache");

    assert_missing!(ctx, create_api_key, p(), "body");
    assert_missing!(ctx, create_api_key, p().body(Value::Null), "body");
    assert_missing!(ctx, grant_api_key, p(), "body");
    assert_missing!(ctx, invalidate_api_key, p(), "body");
    assert_missing!(ctx, clear_api_key_cache, p(), "ids");
}

#[tokio::test]
async fn security_query_api_keys_picks_verb_from_body() {
    let ctx = TestContext::new_mocked();

    let r = assert_route!(ctx, query_api_keys, p(), Method::GET, "/_security/_query/api_key");
    assert_eq!(r.body, None);
    assert_route!(ctx, query_api_keys, p().body(json!({})), Method::GET, "/_security/_query/api_key");
    let query = json!({"query": {"ids": {"values": ["VuaCfGcBCdbkQm-e5aOx"]}}});
    let r = assert_route!(ctx, query_api_keys, p().body(query.clone()), Method::POST, "/_security/_query/api_key");
    assert_eq!(r.body, Some(RequestBody::Json(query)));
}

#[tokio::test]
async fn security_service_accounts() {
    let ctx = TestContext::new_mocked();

    assert_route!(ctx, get_service_accounts, p(), Method::GET, "/_security/service");
    assert_route!(ctx, get_service_accounts, p().param("namespace", "elastic"), Method::GET, "/_security/service/elastic");
    assert_route!(ctx, get_service_accounts, service(), Method::GET, "/_security/service/elastic/fleet-server");
    assert_route!(ctx, get_service_credentials, service(), Method::GET, "/_security/service/elastic/fleet-server/credential");
    assert_route!(ctx, create_service_token, service(), Method::POST, "/_security/service/elastic/fleet-server/credential/token");
    assert_route!(ctx, create_service_token, service().param("name", "token1"), Method::PUT, "/_security/service/elastic/fleet-server/credential/token/token1");
    assert_route!(ctx, delete_service_token, service().param("name", "token42"), Method::DELETE, "/_security/service/elastic/fleet-server/credential/token/token42");
    assert_route!(ctx, clear_cached_service_tokens, service().param("name", "token1"), Method::POST, "/_security/service/elastic/fleet-server/credential/token/token1/_clear_cache");

    assert_missing!(ctx, get_service_credentials, p().param("service", "fleet-server"), "namespace");
    assert_missing!(ctx, get_service_credentials, p().param("namespace", "elastic"), "service");
    assert_missing!(ctx, create_service_token, p().param("namespace", "elastic"), "service");
    assert_missing!(ctx, delete_service_token, service(), "name");
    assert_missing!(ctx, clear_cached_service_tokens, p().param("name", "token1"), "namespace");
    assert_missing!(ctx, clear_cached_service_tokens, service(), "name");
}

#[tokio::test]
async fn security_tokens_realms_and_enrollment() {
    let ctx = TestContext::new_mocked();
    let grant = json!({"grant_type": "client_credentials"});

    assert_route!(ctx, get_token, p().body(grant), Method::POST, "/_security/oauth2/token");
    assert_route!(ctx, invalidate_token, p().body(json!({"token": "dGhpcyBpcyBub3Q"})), Method::DELETE, "/_security/oauth2/token");
    assert_route!(ctx, clear_cached_realms, p().param("realms", "default_file"), Method::POST, "/_security/realm/default_file/_clear_cache");
    assert_route!(ctx, clear_cached_realms, p().param("realms", "default_file").param("usernames", vec!["rdeniro", "alpacino"]), Method::POST, "/_security/realm/default_file/_clear_cache?usernames=rdeniro%2Calpacino");
    assert_route!(ctx, enroll_kibana, p(), Method::GET, "/_security/enroll/kibana");
    assert_route!(ctx, enroll_node, p(), Method::GET, "/_security/enroll/node");

    assert_missing!(ctx, get_token, p(), "body");
    assert_missing!(ctx, invalidate_token, p(), "body");
    assert_missing!(ctx, clear_cached_realms, p().param("usernames", "rdeniro"), "realms");
}

#[tokio::test]
async fn security_saml() {
    let ctx = TestContext::new_mocked();
    let body = || p().body(json!({"realm": "saml1"}));

    assert_route!(ctx, saml_authenticate, body(), Method::POST, "/_security/saml/authenticate");
    assert_route!(ctx, saml_complete_logout, body(), Method::POST, "/_security/saml/complete_logout");
    assert_route!(ctx, saml_invalidate, body(), Method::POST, "/_security/saml/invalidate");
    assert_route!(ctx, saml_logout, body(), Method::POST, "/_security/saml/logout");
    assert_route!(ctx, saml_prepare_authentication, body(), Method::POST, "/_security/saml/prepare");
    assert_route!(ctx, saml_service_provider_metadata, p().param("realm_name", "saml1"), Method::GET, "/_security/saml/metadata/saml1");

    assert_missing!(ctx, saml_authenticate, p(), "body");
    assert_missing!(ctx, saml_complete_logout, p(), "body");
    assert_missing!(ctx, saml_invalidate, p(), "body");
    assert_missing!(ctx, saml_logout, p(), "body");
    assert_missing!(ctx, saml_prepare_authentication, p(), "body");
    assert_missing!(ctx, saml_service_provider_metadata, p(), "realm_name");
}

#[tokio::test]
async fn security_path_segments_are_encoded() {
    let ctx = TestContext::new_mocked();
    assert_route!(ctx, get_role, p().param("name", "team/ops admin"), Method::GET, "/_security/role/team%2Fops%20admin");
}

#[tokio::test]
async fn security_unknown_parameter_is_rejected() {
    let ctx = TestContext::new_mocked();
    let err = ctx
        .client
        .security()
        .put_role(p().param("name", "r").body(json!({"cluster": []})).param("colour", "red"))
        .send()
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationErr::UnknownParameter { ref name, .. }) if name == "colour"
    ));
    assert_eq!(ctx.mock().request_count(), 0);
}

#[tokio::test]
async fn security_empty_identifiers_are_rejected() {
    let ctx = TestContext::new_mocked();
    let empty_values: [Value; 3] = [json!([]), json!(""), json!(["jacknich", ""])];

    for username in empty_values {
        match ctx
            .client
            .security()
            .delete_user(p().param("username", username))
            .send()
            .await
        {
            Err(Error::Validation(ValidationErr::InvalidParameterValue { name, .. })) => {
                assert_eq!(name, "username")
            }
            other => panic!("unexpected {other:?}"),
        }
    }
    assert_eq!(ctx.mock().request_count(), 0);
}
