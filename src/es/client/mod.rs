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

//! Elasticsearch client.
//!
//! # HTTP Version Support
//!
//! The client supports both HTTP/1.1 and HTTP/2. When connecting over TLS,
//! HTTP/2 is negotiated via ALPN if the node supports it, otherwise the
//! client falls back to HTTP/1.1. HTTP/2 support is enabled by the default
//! `http2` feature.

use std::fs::File;
use std::io::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::es::client::hooks::Extensions;
pub use crate::es::client::hooks::RequestLifecycleHooks;
use crate::es::creds::{Credentials, Provider, StaticProvider};
use crate::es::error::{Error, IoError, ValidationErr};
use crate::es::http::BaseUrl;
use crate::es::transport::{HttpTransport, Transport};
use crate::es::types::EsRequest;
pub use reqwest::Response;

mod global;
pub mod hooks;
mod indices;
mod license;
mod security;

pub use indices::Indices;
pub use license::License;
pub use security::Security;

/// Base URL used when `ELASTICSEARCH_URL` is not set.
pub const DEFAULT_URL: &str = "http://localhost:9200";

/// Configuration for the HTTP connection pool.
///
/// # Example
///
/// ```
/// use es_rest::es::client::ConnectionPoolConfig;
/// use std::time::Duration;
///
/// let config = ConnectionPoolConfig::default()
///     .max_idle_per_host(64)
///     .idle_timeout(Duration::from_secs(120));
/// ```
#[derive(Debug, Clone)]
pub struct ConnectionPoolConfig {
    /// Maximum number of idle connections per host. Default: 32
    pub max_idle_per_host: usize,

    /// How long idle connections are kept in the pool. Default: 90 seconds
    pub idle_timeout: std::time::Duration,

    /// TCP keepalive interval. Default: 60 seconds
    pub tcp_keepalive: std::time::Duration,

    /// Enable TCP_NODELAY (disable Nagle's algorithm). Default: true
    pub tcp_nodelay: bool,

    /// Overall timeout of a single request, none by default.
    pub request_timeout: Option<std::time::Duration>,
}

impl Default for ConnectionPoolConfig {
    fn default() -> Self {
        Self {
            max_idle_per_host: 32,
            idle_timeout: std::time::Duration::from_secs(90),
            tcp_keepalive: std::time::Duration::from_secs(60),
            tcp_nodelay: true,
            request_timeout: None,
        }
    }
}

impl ConnectionPoolConfig {
    pub fn max_idle_per_host(mut self, max: usize) -> Self {
        self.max_idle_per_host = max;
        self
    }

    pub fn idle_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.idle_timeout = timeout;
        self
    }

    pub fn tcp_keepalive(mut self, interval: std::time::Duration) -> Self {
        self.tcp_keepalive = interval;
        self
    }

    pub fn tcp_nodelay(mut self, enable: bool) -> Self {
        self.tcp_nodelay = enable;
        self
    }

    /// Overall timeout of a single request, unset by default.
    pub fn request_timeout(mut self, timeout: Option<std::time::Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }
}

/// Client Builder manufactures a Client using given parameters.
#[derive(Debug)]
pub struct EsClientBuilder {
    base_url: BaseUrl,
    /// Set the credential provider. If not set, requests are sent without authentication.
    provider: Option<Arc<dyn Provider + Send + Sync + 'static>>,
    client_hooks: Vec<Arc<dyn RequestLifecycleHooks + Send + Sync + 'static>>,
    /// Replaces the default HTTP transport; TLS and pool settings are then ignored.
    transport: Option<Arc<dyn Transport + 'static>>,
    /// File of PEM encoded CA certificates to trust, in addition to the system trust store.
    ssl_cert_file: Option<PathBuf>,
    /// Set flag to ignore certificate check. This is insecure and should only be used for testing.
    ignore_cert_check: Option<bool>,
    /// (app_name, app_version) appended to the user-agent.
    app_info: Option<(String, String)>,
    connection_pool_config: ConnectionPoolConfig,
}

impl EsClientBuilder {
    /// Creates a builder given the base URL of an Elasticsearch node.
    pub fn new(base_url: BaseUrl) -> Self {
        Self {
            base_url,
            provider: None,
            client_hooks: Vec::new(),
            transport: None,
            ssl_cert_file: None,
            ignore_cert_check: None,
            app_info: None,
            connection_pool_config: ConnectionPoolConfig::default(),
        }
    }

    /// Creates a builder from the environment.
    ///
    /// | variable                            | meaning                                   |
    /// |-------------------------------------|-------------------------------------------|
    /// | `ELASTICSEARCH_URL`                 | base URL, `http://localhost:9200` if unset |
    /// | `ELASTICSEARCH_API_KEY`             | encoded API key, preferred over basic auth |
    /// | `ELASTICSEARCH_USERNAME`            | basic auth user                           |
    /// | `ELASTICSEARCH_PASSWORD`            | basic auth password                       |
    /// | `ELASTICSEARCH_SSL_CERT_FILE`       | extra CA bundle (PEM)                     |
    /// | `ELASTICSEARCH_IGNORE_CERT_CHECK`   | `true` or `1` to skip TLS verification    |
    pub fn from_env() -> Result<Self, Error> {
        let base_url: BaseUrl = std::env::var("ELASTICSEARCH_URL")
            .unwrap_or_else(|_| DEFAULT_URL.to_string())
            .parse()?;

        let credentials = match std::env::var("ELASTICSEARCH_API_KEY") {
            Ok(key) if !key.is_empty() => Some(Credentials::ApiKey(key)),
            _ => match (
                std::env::var("ELASTICSEARCH_USERNAME"),
                std::env::var("ELASTICSEARCH_PASSWORD"),
            ) {
                (Ok(user), Ok(password)) => Some(Credentials::basic(&user, &password)),
                (Ok(user), Err(_)) => {
                    log::warn!("ELASTICSEARCH_USERNAME={user} is set without ELASTICSEARCH_PASSWORD");
                    None
                }
                _ => None,
            },
        };

        let ssl_cert_file = std::env::var("ELASTICSEARCH_SSL_CERT_FILE")
            .ok()
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        let ignore_cert_check = std::env::var("ELASTICSEARCH_IGNORE_CERT_CHECK")
            .ok()
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1");

        Ok(Self::new(base_url)
            .credentials(credentials)
            .ssl_cert_file(ssl_cert_file.as_deref())
            .ignore_cert_check(ignore_cert_check))
    }

    /// Add a client hook to the builder. Hooks will be called after each other in
    /// order they were added.
    pub fn hook(mut self, hooks: Arc<dyn RequestLifecycleHooks + Send + Sync + 'static>) -> Self {
        self.client_hooks.push(hooks);
        self
    }

    /// Set the credential provider. If not set, requests are sent without authentication.
    pub fn provider<P: Provider + Send + Sync + 'static>(mut self, provider: Option<P>) -> Self {
        self.provider = provider.map(|p| Arc::new(p) as Arc<dyn Provider + Send + Sync + 'static>);
        self
    }

    /// Shorthand for [`provider`](Self::provider) with a [`StaticProvider`].
    pub fn credentials(self, credentials: Option<Credentials>) -> Self {
        self.provider(credentials.map(StaticProvider::new))
    }

    /// Use `transport` instead of the built-in HTTP transport.
    pub fn transport<T: Transport + 'static>(mut self, transport: T) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Set the app info as an Option of (app_name, app_version) pair. This will
    /// show up in the client's user-agent.
    pub fn app_info(mut self, app_info: Option<(String, String)>) -> Self {
        self.app_info = app_info;
        self
    }

    /// Set file for loading CAs certs to trust. This is in addition to the system
    /// trust store. The file must contain PEM encoded certificates.
    pub fn ssl_cert_file(mut self, ssl_cert_file: Option<&Path>) -> Self {
        self.ssl_cert_file = ssl_cert_file.map(PathBuf::from);
        self
    }

    /// Set flag to ignore certificate check. This is insecure and should only
    /// be used for testing.
    pub fn ignore_cert_check(mut self, ignore_cert_check: Option<bool>) -> Self {
        self.ignore_cert_check = ignore_cert_check;
        self
    }

    /// Configure the HTTP connection pool settings.
    pub fn connection_pool_config(mut self, config: ConnectionPoolConfig) -> Self {
        self.connection_pool_config = config;
        self
    }

    fn build_http_client(&self) -> Result<reqwest::Client, Error> {
        let pool_config = &self.connection_pool_config;
        let mut builder = reqwest::Client::builder()
            .tcp_nodelay(pool_config.tcp_nodelay)
            .tcp_keepalive(pool_config.tcp_keepalive)
            .pool_max_idle_per_host(pool_config.max_idle_per_host)
            .pool_idle_timeout(pool_config.idle_timeout);

        if let Some(timeout) = pool_config.request_timeout {
            builder = builder.timeout(timeout);
        }

        #[cfg(feature = "http2")]
        {
            builder = builder.http2_adaptive_window(true);
        }

        let mut user_agent = String::from("es-rest/")
            + env!("CARGO_PKG_VERSION")
            + " ("
            + std::env::consts::OS
            + "; "
            + std::env::consts::ARCH
            + ")";

        if let Some((app_name, app_version)) = &self.app_info {
            user_agent.push_str(format!(" {app_name}/{app_version}").as_str());
        }
        builder = builder.user_agent(user_agent);

        #[cfg(any(
            feature = "default-tls",
            feature = "native-tls",
            feature = "rustls-tls"
        ))]
        if let Some(v) = self.ignore_cert_check {
            builder = builder.danger_accept_invalid_certs(v);
        }

        #[cfg(any(
            feature = "default-tls",
            feature = "native-tls",
            feature = "rustls-tls"
        ))]
        if let Some(v) = &self.ssl_cert_file {
            let mut buf = Vec::new();
            let mut file = File::open(v).map_err(IoError::IOError)?;
            file.read_to_end(&mut buf).map_err(IoError::IOError)?;

            let certs = reqwest::Certificate::from_pem_bundle(&buf).map_err(ValidationErr::from)?;
            for cert in certs {
                builder = builder.add_root_certificate(cert);
            }
        }

        Ok(builder.build().map_err(ValidationErr::from)?)
    }

    /// Build the Client.
    pub fn build(self) -> Result<EsClient, Error> {
        let transport: Arc<dyn Transport + 'static> = match &self.transport {
            Some(t) => Arc::clone(t),
            None => Arc::new(HttpTransport::new(
                self.build_http_client()?,
                self.base_url.clone(),
                self.provider.clone(),
            )),
        };

        Ok(EsClient {
            shared: Arc::new(SharedClientItems {
                base_url: self.base_url,
                transport,
                client_hooks: self.client_hooks,
            }),
        })
    }
}

/// Client for the Elasticsearch REST API.
///
/// Cloning is cheap; clones share the transport and hooks. Operations of
/// the core API are methods of the client itself, the others are grouped
/// under [`indices()`](Self::indices), [`license()`](Self::license) and
/// [`security()`](Self::security).
#[derive(Clone, Debug)]
pub struct EsClient {
    pub(crate) shared: Arc<SharedClientItems>,
}

impl EsClient {
    /// Returns a client for the node at `base_url`.
    ///
    /// # Examples
    ///
    /// ```
    /// use es_rest::es::client::EsClient;
    /// use es_rest::es::creds::Credentials;
    /// use es_rest::es::http::BaseUrl;
    ///
    /// let base_url: BaseUrl = "https://localhost:9200".parse().unwrap();
    /// let credentials = Credentials::basic("elastic", "changeme");
    /// let client = EsClient::new(base_url, Some(credentials), None, None).unwrap();
    /// ```
    pub fn new(
        base_url: BaseUrl,
        credentials: Option<Credentials>,
        ssl_cert_file: Option<&Path>,
        ignore_cert_check: Option<bool>,
    ) -> Result<Self, Error> {
        EsClientBuilder::new(base_url)
            .credentials(credentials)
            .ssl_cert_file(ssl_cert_file)
            .ignore_cert_check(ignore_cert_check)
            .build()
    }

    /// Client for an unsecured node on `http://localhost:9200`.
    pub fn create_client_on_localhost() -> Result<EsClient, Error> {
        EsClientBuilder::new(BaseUrl::default()).build()
    }

    pub fn base_url(&self) -> &BaseUrl {
        &self.shared.base_url
    }

    /// The `indices.*` APIs.
    pub fn indices(&self) -> Indices {
        Indices::new(self)
    }

    /// The `license.*` APIs.
    pub fn license(&self) -> License {
        License::new(self)
    }

    /// The `security.*` APIs.
    pub fn security(&self) -> Security {
        Security::new(self)
    }

    pub(crate) async fn execute(&self, request: &mut EsRequest) -> Result<Response, Error> {
        let mut extensions = Extensions::default();
        self.run_before_send_hooks(request, &mut extensions).await?;

        log::debug!(
            "{}: {} {}",
            request.endpoint(),
            request.method(),
            request.path_and_query()
        );
        let resp = self.shared.transport.send_request(request).await;
        if let Err(e) = &resp {
            log::debug!("{}: {e}", request.endpoint());
        }

        self.run_after_execute_hooks(request, &resp, &mut extensions)
            .await;
        resp
    }

    async fn run_before_send_hooks(
        &self,
        request: &mut EsRequest,
        extensions: &mut Extensions,
    ) -> Result<(), Error> {
        for hook in self.shared.client_hooks.iter() {
            hook.before_send_mut(request, extensions)
                .await
                .inspect_err(|e| log::warn!("Hook {} failed {e}", hook.name()))?;
        }
        Ok(())
    }

    async fn run_after_execute_hooks(
        &self,
        request: &EsRequest,
        resp: &Result<Response, Error>,
        extensions: &mut Extensions,
    ) {
        for hook in self.shared.client_hooks.iter() {
            hook.after_execute(request, resp, extensions).await;
        }
    }
}

#[derive(Debug)]
pub(crate) struct SharedClientItems {
    pub(crate) base_url: BaseUrl,
    transport: Arc<dyn Transport + 'static>,
    client_hooks: Vec<Arc<dyn RequestLifecycleHooks + Send + Sync + 'static>>,
}
