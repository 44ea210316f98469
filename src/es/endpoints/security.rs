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

//! `security.*` endpoints.

use super::{EndpointSpec, Route, Verb};

const REFRESH: &[&str] = &["refresh"];

pub static AUTHENTICATE: EndpointSpec = EndpointSpec {
    name: "security.authenticate",
    routes: &[Route::new("/_security/_authenticate", Verb::Get)],
    required: &[],
    query: &[],
};

pub static CHANGE_PASSWORD: EndpointSpec = EndpointSpec {
    name: "security.change_password",
    routes: &[
        Route::new("/_security/user/{username}/_password", Verb::Put),
        Route::new("/_security/user/_password", Verb::Put),
    ],
    required: &["body"],
    query: REFRESH,
};

pub static CLEAR_API_KEY_CACHE: EndpointSpec = EndpointSpec {
    name: "security.clear_api_key_cache",
    routes: &[Route::new("/_security/api_key/{ids}/_clear_cache", Verb::Post)],
    required: &["ids"],
    query: &[],
};

pub static CLEAR_CACHED_PRIVILEGES: EndpointSpec = EndpointSpec {
    name: "security.clear_cached_privileges",
    routes: &[Route::new(
        "/_security/privilege/{application}/_clear_cache",
        Verb::Post,
    )],
    required: &["application"],
    query: &[],
};

pub static CLEAR_CACHED_REALMS: EndpointSpec = EndpointSpec {
    name: "security.clear_cached_realms",
    routes: &[Route::new("/_security/realm/{realms}/_clear_cache", Verb::Post)],
    required: &["realms"],
    query: &["usernames"],
};

pub static CLEAR_CACHED_ROLES: EndpointSpec = EndpointSpec {
    name: "security.clear_cached_roles",
    routes: &[Route::new("/_security/role/{name}/_clear_cache", Verb::Post)],
    required: &["name"],
    query: &[],
};

pub static CLEAR_CACHED_SERVICE_TOKENS: EndpointSpec = EndpointSpec {
    name: "security.clear_cached_service_tokens",
    routes: &[Route::new(
        "/_security/service/{namespace}/{service}/credential/token/{name}/_clear_cache",
        Verb::Post,
    )],
    required: &["namespace", "service", "name"],
    query: &[],
};

pub static CREATE_API_KEY: EndpointSpec = EndpointSpec {
    name: "security.create_api_key",
    routes: &[Route::new("/_security/api_key", Verb::Put)],
    required: &["body"],
    query: REFRESH,
};

/// PUT with an explicit token name, POST to let the server generate one.
pub static CREATE_SERVICE_TOKEN: EndpointSpec = EndpointSpec {
    name: "security.create_service_token",
    routes: &[
        Route::new(
            "/_security/service/{namespace}/{service}/credential/token/{name}",
            Verb::Put,
        ),
        Route::new(
            "/_security/service/{namespace}/{service}/credential/token",
            Verb::Post,
        ),
    ],
    required: &["namespace", "service"],
    query: REFRESH,
};

pub static DELETE_PRIVILEGES: EndpointSpec = EndpointSpec {
    name: "security.delete_privileges",
    routes: &[Route::new(
        "/_security/privilege/{application}/{name}",
        Verb::Delete,
    )],
    required: &["application", "name"],
    query: REFRESH,
};

pub static DELETE_ROLE: EndpointSpec = EndpointSpec {
    name: "security.delete_role",
    routes: &[Route::new("/_security/role/{name}", Verb::Delete)],
    required: &["name"],
    query: REFRESH,
};

pub static DELETE_ROLE_MAPPING: EndpointSpec = EndpointSpec {
    name: "security.delete_role_mapping",
    routes: &[Route::new("/_security/role_mapping/{name}", Verb::Delete)],
    required: &["name"],
    query: REFRESH,
};

pub static DELETE_SERVICE_TOKEN: EndpointSpec = EndpointSpec {
    name: "security.delete_service_token",
    routes: &[Route::new(
        "/_security/service/{namespace}/{service}/credential/token/{name}",
        Verb::Delete,
    )],
    required: &["namespace", "service", "name"],
    query: REFRESH,
};

pub static DELETE_USER: EndpointSpec = EndpointSpec {
    name: "security.delete_user",
    routes: &[Route::new("/_security/user/{username}", Verb::Delete)],
    required: &["username"],
    query: REFRESH,
};

pub static DISABLE_USER: EndpointSpec = EndpointSpec {
    name: "security.disable_user",
    routes: &[Route::new("/_security/user/{username}/_disable", Verb::Put)],
    required: &["username"],
    query: REFRESH,
};

pub static ENABLE_USER: EndpointSpec = EndpointSpec {
    name: "security.enable_user",
    routes: &[Route::new("/_security/user/{username}/_enable", Verb::Put)],
    required: &["username"],
    query: REFRESH,
};

pub static ENROLL_KIBANA: EndpointSpec = EndpointSpec {
    name: "security.enroll_kibana",
    routes: &[Route::new("/_security/enroll/kibana", Verb::Get)],
    required: &[],
    query: &[],
};

pub static ENROLL_NODE: EndpointSpec = EndpointSpec {
    name: "security.enroll_node",
    routes: &[Route::new("/_security/enroll/node", Verb::Get)],
    required: &[],
    query: &[],
};

pub static GET_API_KEY: EndpointSpec = EndpointSpec {
    name: "security.get_api_key",
    routes: &[Route::new("/_security/api_key", Verb::Get)],
    required: &[],
    query: &["id", "name", "username", "realm_name", "owner"],
};

pub static GET_BUILTIN_PRIVILEGES: EndpointSpec = EndpointSpec {
    name: "security.get_builtin_privileges",
    routes: &[Route::new("/_security/privilege/_builtin", Verb::Get)],
    required: &[],
    query: &[],
};

pub static GET_PRIVILEGES: EndpointSpec = EndpointSpec {
    name: "security.get_privileges",
    routes: &[
        Route::new("/_security/privilege/{application}/{name}", Verb::Get),
        Route::new("/_security/privilege/{application}", Verb::Get),
        Route::new("/_security/privilege", Verb::Get),
    ],
    required: &[],
    query: &[],
};

pub static GET_ROLE: EndpointSpec = EndpointSpec {
    name: "security.get_role",
    routes: &[
        Route::new("/_security/role/{name}", Verb::Get),
        Route::new("/_security/role", Verb::Get),
    ],
    required: &[],
    query: &[],
};

pub static GET_ROLE_MAPPING: EndpointSpec = EndpointSpec {
    name: "security.get_role_mapping",
    routes: &[
        Route::new("/_security/role_mapping/{name}", Verb::Get),
        Route::new("/_security/role_mapping", Verb::Get),
    ],
    required: &[],
    query: &[],
};

pub static GET_SERVICE_ACCOUNTS: EndpointSpec = EndpointSpec {
    name: "security.get_service_accounts",
    routes: &[
        Route::new("/_security/service/{namespace}/{service}", Verb::Get),
        Route::new("/_security/service/{namespace}", Verb::Get),
        Route::new("/_security/service", Verb::Get),
    ],
    required: &[],
    query: &[],
};

pub static GET_SERVICE_CREDENTIALS: EndpointSpec = EndpointSpec {
    name: "security.get_service_credentials",
    routes: &[Route::new(
        "/_security/service/{namespace}/{service}/credential",
        Verb::Get,
    )],
    required: &["namespace", "service"],
    query: &[],
};

pub static GET_TOKEN: EndpointSpec = EndpointSpec {
    name: "security.get_token",
    routes: &[Route::new("/_security/oauth2/token", Verb::Post)],
    required: &["body"],
    query: &[],
};

pub static GET_USER: EndpointSpec = EndpointSpec {
    name: "security.get_user",
    routes: &[
        Route::new("/_security/user/{username}", Verb::Get),
        Route::new("/_security/user", Verb::Get),
    ],
    required: &[],
    query: &[],
};

pub static GET_USER_PRIVILEGES: EndpointSpec = EndpointSpec {
    name: "security.get_user_privileges",
    routes: &[Route::new("/_security/user/_privileges", Verb::Get)],
    required: &[],
    query: &[],
};

pub static GRANT_API_KEY: EndpointSpec = EndpointSpec {
    name: "security.grant_api_key",
    routes: &[Route::new("/_security/api_key/grant", Verb::Post)],
    required: &["body"],
    query: REFRESH,
};

/// `body` is required but may be empty, in which case the request is a GET.
pub static HAS_PRIVILEGES: EndpointSpec = EndpointSpec {
    name: "security.has_privileges",
    routes: &[
        Route::new("/_security/user/{user}/_has_privileges", Verb::GetOrPost),
        Route::new("/_security/user/_has_privileges", Verb::GetOrPost),
    ],
    required: &["body"],
    query: &[],
};

pub static INVALIDATE_API_KEY: EndpointSpec = EndpointSpec {
    name: "security.invalidate_api_key",
    routes: &[Route::new("/_security/api_key", Verb::Delete)],
    required: &["body"],
    query: &[],
};

pub static INVALIDATE_TOKEN: EndpointSpec = EndpointSpec {
    name: "security.invalidate_token",
    routes: &[Route::new("/_security/oauth2/token", Verb::Delete)],
    required: &["body"],
    query: &[],
};

pub static PUT_PRIVILEGES: EndpointSpec = EndpointSpec {
    name: "security.put_privileges",
    routes: &[Route::new("/_security/privilege/", Verb::Put)],
    required: &["body"],
    query: REFRESH,
};

pub static PUT_ROLE: EndpointSpec = EndpointSpec {
    name: "security.put_role",
    routes: &[Route::new("/_security/role/{name}", Verb::Put)],
    required: &["name", "body"],
    query: REFRESH,
};

pub static PUT_ROLE_MAPPING: EndpointSpec = EndpointSpec {
    name: "security.put_role_mapping",
    routes: &[Route::new("/_security/role_mapping/{name}", Verb::Put)],
    required: &["name", "body"],
    query: REFRESH,
};

pub static PUT_USER: EndpointSpec = EndpointSpec {
    name: "security.put_user",
    routes: &[Route::new("/_security/user/{username}", Verb::Put)],
    required: &["username", "body"],
    query: REFRESH,
};

pub static QUERY_API_KEYS: EndpointSpec = EndpointSpec {
    name: "security.query_api_keys",
    routes: &[Route::new("/_security/_query/api_key", Verb::GetOrPost)],
    required: &[],
    query: &[],
};

pub static SAML_AUTHENTICATE: EndpointSpec = EndpointSpec {
    name: "security.saml_authenticate",
    routes: &[Route::new("/_security/saml/authenticate", Verb::Post)],
    required: &["body"],
    query: &[],
};

pub static SAML_COMPLETE_LOGOUT: EndpointSpec = EndpointSpec {
    name: "security.saml_complete_logout",
    routes: &[Route::new("/_security/saml/complete_logout", Verb::Post)],
    required: &["body"],
    query: &[],
};

pub static SAML_INVALIDATE: EndpointSpec = EndpointSpec {
    name: "security.saml_invalidate",
    routes: &[Route::new("/_security/saml/invalidate", Verb::Post)],
    required: &["body"],
    query: &[],
};

pub static SAML_LOGOUT: EndpointSpec = EndpointSpec {
    name: "security.saml_logout",
    routes: &[Route::new("/_security/saml/logout", Verb::Post)],
    required: &["body"],
    query: &[],
};

pub static SAML_PREPARE_AUTHENTICATION: EndpointSpec = EndpointSpec {
    name: "security.saml_prepare_authentication",
    routes: &[Route::new("/_security/saml/prepare", Verb::Post)],
    required: &["body"],
    query: &[],
};

pub static SAML_SERVICE_PROVIDER_METADATA: EndpointSpec = EndpointSpec {
    name: "security.saml_service_provider_metadata",
    routes: &[Route::new(
        "/_security/saml/metadata/{realm_name}",
        Verb::Get,
    )],
    required: &["realm_name"],
    query: &[],
};

/// Every `security.*` endpoint, in alphabetical order.
pub static ALL: &[&EndpointSpec] = &[
    &AUTHENTICATE,
    &CHANGE_PASSWORD,
    &CLEAR_API_KEY_CACHE,
    &CLEAR_CACHED_PRIVILEGES,
    &CLEAR_CACHED_REALMS,
    &CLEAR_CACHED_ROLES,
    &CLEAR_CACHED_SERVICE_TOKENS,
    &CREATE_API_KEY,
    &CREATE_SERVICE_TOKEN,
    &DELETE_PRIVILEGES,
    &DELETE_ROLE,
    &DELETE_ROLE_MAPPING,
    &DELETE_SERVICE_TOKEN,
    &DELETE_USER,
    &DISABLE_USER,
    &ENABLE_USER,
    &ENROLL_KIBANA,
    &ENROLL_NODE,
    &GET_API_KEY,
    &GET_BUILTIN_PRIVILEGES,
    &GET_PRIVILEGES,
    &GET_ROLE,
    &GET_ROLE_MAPPING,
    &GET_SERVICE_ACCOUNTS,
    &GET_SERVICE_CREDENTIALS,
    &GET_TOKEN,
    &GET_USER,
    &GET_USER_PRIVILEGES,
    &GRANT_API_KEY,
    &HAS_PRIVILEGES,
    &INVALIDATE_API_KEY,
    &INVALIDATE_TOKEN,
    &PUT_PRIVILEGES,
    &PUT_ROLE,
    &PUT_ROLE_MAPPING,
    &PUT_USER,
    &QUERY_API_KEYS,
    &SAML_AUTHENTICATE,
    &SAML_COMPLETE_LOGOUT,
    &SAML_INVALIDATE,
    &SAML_LOGOUT,
    &SAML_PREPARE_AUTHENTICATION,
    &SAML_SERVICE_PROVIDER_METADATA,
];
