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

//! `security.*` APIs.

use crate::es::builders::Call;
use crate::es::client::EsClient;
use crate::es::endpoints::security;
use crate::es::params::Params;

/// The security APIs: users, roles, privileges, API keys, tokens and SAML.
///
/// Obtained from [`EsClient::security`]. Every method returns a [`Call`]
/// to be completed with [`send()`](crate::es::types::EsApi::send).
#[derive(Clone, Debug)]
pub struct Security {
    client: EsClient,
}

impl Security {
    pub(crate) fn new(client: &EsClient) -> Self {
        Self {
            client: client.clone(),
        }
    }

    /// Returns the user information of the authenticated caller.
    pub fn authenticate(&self, params: impl Into<Params>) -> Call {
        Call::new(&self.client, &security::AUTHENTICATE, params)
    }

    /// Changes the password of a user in the native realm or a built-in user.
    ///
    /// Without `username` the password of the calling user is changed.
    pub fn change_password(&self, params: impl Into<Params>) -> Call {
        Call::new(&self.client, &security::CHANGE_PASSWORD, params)
    }

    /// Evicts a subset or all entries from the API key cache.
    pub fn clear_api_key_cache(&self, params: impl Into<Params>) -> Call {
        Call::new(&self.client, &security::CLEAR_API_KEY_CACHE, params)
    }

    /// Evicts application privileges from the native application privileges cache.
    pub fn clear_cached_privileges(&self, params: impl Into<Params>) -> Call {
        Call::new(&self.client, &security::CLEAR_CACHED_PRIVILEGES, params)
    }

    /// Evicts users from the user cache, or clears the cache entirely.
    pub fn clear_cached_realms(&self, params: impl Into<Params>) -> Call {
        Call::new(&self.client, &security::CLEAR_CACHED_REALMS, params)
    }

    /// Evicts roles from the native role cache.
    pub fn clear_cached_roles(&self, params: impl Into<Params>) -> Call {
        Call::new(&self.client, &security::CLEAR_CACHED_ROLES, params)
    }

    /// Evicts tokens from the service account token caches.
    pub fn clear_cached_service_tokens(&self, params: impl Into<Params>) -> Call {
        Call::new(&self.client, &security::CLEAR_CACHED_SERVICE_TOKENS, params)
    }

    /// Creates an API key for access without basic authentication.
    pub fn create_api_key(&self, params: impl Into<Params>) -> Call {
        Call::new(&self.client, &security::CREATE_API_KEY, params)
    }

    /// Creates a service account token.
    ///
    /// With `name` the token gets that name (`PUT`), without it the server
    /// generates one (`POST`).
    pub fn create_service_token(&self, params: impl Into<Params>) -> Call {
        Call::new(&self.client, &security::CREATE_SERVICE_TOKEN, params)
    }

    /// Removes application privileges.
    pub fn delete_privileges(&self, params: impl Into<Params>) -> Call {
        Call::new(&self.client, &security::DELETE_PRIVILEGES, params)
    }

    /// Removes roles in the native realm.
    pub fn delete_role(&self, params: impl Into<Params>) -> Call {
        Call::new(&self.client, &security::DELETE_ROLE, params)
    }

    /// Removes role mappings.
    pub fn delete_role_mapping(&self, params: impl Into<Params>) -> Call {
        Call::new(&self.client, &security::DELETE_ROLE_MAPPING, params)
    }

    /// Deletes a service account token.
    pub fn delete_service_token(&self, params: impl Into<Params>) -> Call {
        Call::new(&self.client, &security::DELETE_SERVICE_TOKEN, params)
    }

    /// Deletes users from the native realm.
    pub fn delete_user(&self, params: impl Into<Params>) -> Call {
        Call::new(&self.client, &security::DELETE_USER, params)
    }

    /// Disables users in the native realm.
    pub fn disable_user(&self, params: impl Into<Params>) -> Call {
        Call::new(&self.client, &security::DISABLE_USER, params)
    }

    /// Enables users in the native realm.
    pub fn enable_user(&self, params: impl Into<Params>) -> Call {
        Call::new(&self.client, &security::ENABLE_USER, params)
    }

    /// Lets a Kibana instance configure itself to talk to a secured cluster.
    pub fn enroll_kibana(&self, params: impl Into<Params>) -> Call {
        Call::new(&self.client, &security::ENROLL_KIBANA, params)
    }

    /// Lets a new node enroll into an existing cluster with security enabled.
    pub fn enroll_node(&self, params: impl Into<Params>) -> Call {
        Call::new(&self.client, &security::ENROLL_NODE, params)
    }

    /// Retrieves information for one or more API keys.
    pub fn get_api_key(&self, params: impl Into<Params>) -> Call {
        Call::new(&self.client, &security::GET_API_KEY, params)
    }

    /// Lists the cluster and index privileges available in this version of Elasticsearch.
    pub fn get_builtin_privileges(&self, params: impl Into<Params>) -> Call {
        Call::new(&self.client, &security::GET_BUILTIN_PRIVILEGES, params)
    }

    /// Retrieves application privileges.
    pub fn get_privileges(&self, params: impl Into<Params>) -> Call {
        Call::new(&self.client, &security::GET_PRIVILEGES, params)
    }

    /// Retrieves roles in the native realm.
    ///
    /// Without `name` every role is returned; `name` may be a list.
    ///
    /// ```no_run
    /// use es_rest::es::params::Params;
    /// use es_rest::es::types::EsApi;
    /// # async fn run(client: es_rest::es::EsClient) -> Result<(), es_rest::es::error::Error> {
    /// let resp = client
    ///     .security()
    ///     .get_role(Params::new().param("name", vec!["admin", "viewer"]))
    ///     .send()
    ///     .await?;
    /// let roles: serde_json::Value = resp.json()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn get_role(&self, params: impl Into<Params>) -> Call {
        Call::new(&self.client, &security::GET_ROLE, params)
    }

    /// Retrieves role mappings.
    pub fn get_role_mapping(&self, params: impl Into<Params>) -> Call {
        Call::new(&self.client, &security::GET_ROLE_MAPPING, params)
    }

    /// Retrieves information about service accounts.
    pub fn get_service_accounts(&self, params: impl Into<Params>) -> Call {
        Call::new(&self.client, &security::GET_SERVICE_ACCOUNTS, params)
    }

    /// Retrieves all service credentials of a service account.
    pub fn get_service_credentials(&self, params: impl Into<Params>) -> Call {
        Call::new(&self.client, &security::GET_SERVICE_CREDENTIALS, params)
    }

    /// Creates a bearer token for access without basic authentication.
    pub fn get_token(&self, params: impl Into<Params>) -> Call {
        Call::new(&self.client, &security::GET_TOKEN, params)
    }

    /// Retrieves users of the native realm and built-in users.
    pub fn get_user(&self, params: impl Into<Params>) -> Call {
        Call::new(&self.client, &security::GET_USER, params)
    }

    /// Retrieves the security privileges of the logged in user.
    pub fn get_user_privileges(&self, params: impl Into<Params>) -> Call {
        Call::new(&self.client, &security::GET_USER_PRIVILEGES, params)
    }

    /// Creates an API key on behalf of another user.
    pub fn grant_api_key(&self, params: impl Into<Params>) -> Call {
        Call::new(&self.client, &security::GRANT_API_KEY, params)
    }

    /// Determines whether a user has a list of privileges.
    ///
    /// `body` is required. An empty body is accepted and sent as a `GET`
    /// without payload; a non-empty one is `POST`ed. With `user` the check
    /// runs for that user instead of the caller.
    pub fn has_privileges(&self, params: impl Into<Params>) -> Call {
        Call::new(&self.client, &security::HAS_PRIVILEGES, params)
    }

    /// Invalidates one or more API keys.
    pub fn invalidate_api_key(&self, params: impl Into<Params>) -> Call {
        Call::new(&self.client, &security::INVALIDATE_API_KEY, params)
    }

    /// Invalidates one or more access or refresh tokens.
    pub fn invalidate_token(&self, params: impl Into<Params>) -> Call {
        Call::new(&self.client, &security::INVALIDATE_TOKEN, params)
    }

    /// Adds or updates application privileges.
    pub fn put_privileges(&self, params: impl Into<Params>) -> Call {
        Call::new(&self.client, &security::PUT_PRIVILEGES, params)
    }

    /// Adds or updates a role in the native realm.
    pub fn put_role(&self, params: impl Into<Params>) -> Call {
        Call::new(&self.client, &security::PUT_ROLE, params)
    }

    /// Creates or updates a role mapping.
    pub fn put_role_mapping(&self, params: impl Into<Params>) -> Call {
        Call::new(&self.client, &security::PUT_ROLE_MAPPING, params)
    }

    /// Adds or updates a user in the native realm.
    pub fn put_user(&self, params: impl Into<Params>) -> Call {
        Call::new(&self.client, &security::PUT_USER, params)
    }

    /// Retrieves API keys matching a subset of the query DSL.
    ///
    /// Sent as `GET` without a body and as `POST` otherwise.
    pub fn query_api_keys(&self, params: impl Into<Params>) -> Call {
        Call::new(&self.client, &security::QUERY_API_KEYS, params)
    }

    /// Exchanges a SAML Response for an access token and refresh token pair.
    pub fn saml_authenticate(&self, params: impl Into<Params>) -> Call {
        Call::new(&self.client, &security::SAML_AUTHENTICATE, params)
    }

    /// Verifies the logout response sent from the SAML IdP.
    pub fn saml_complete_logout(&self, params: impl Into<Params>) -> Call {
        Call::new(&self.client, &security::SAML_COMPLETE_LOGOUT, params)
    }

    /// Consumes a SAML LogoutRequest.
    pub fn saml_invalidate(&self, params: impl Into<Params>) -> Call {
        Call::new(&self.client, &security::SAML_INVALIDATE, params)
    }

    /// Invalidates the tokens obtained through `saml_authenticate`.
    pub fn saml_logout(&self, params: impl Into<Params>) -> Call {
        Call::new(&self.client, &security::SAML_LOGOUT, params)
    }

    /// Creates a SAML authentication request.
    pub fn saml_prepare_authentication(&self, params: impl Into<Params>) -> Call {
        Call::new(&self.client, &security::SAML_PREPARE_AUTHENTICATION, params)
    }

    /// Generates SAML metadata for the Elastic stack SAML 2.0 Service Provider.
    pub fn saml_service_provider_metadata(&self, params: impl Into<Params>) -> Call {
        Call::new(&self.client, &security::SAML_SERVICE_PROVIDER_METADATA, params)
    }
}
