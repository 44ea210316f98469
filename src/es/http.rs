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

//! HTTP URL definitions

use crate::es::error::ValidationErr;
use crate::es::multimap_ext::{Multimap, MultimapExt};
use http::Uri;
use std::fmt;
use std::str::FromStr;

/// Port Elasticsearch listens on when none is given.
pub const DEFAULT_PORT: u16 = 9200;

#[derive(Clone, Debug)]
/// Represents HTTP URL
pub struct Url {
    pub https: bool,
    pub host: String,
    pub port: u16,
    pub path: String,
    pub query: Multimap,
}

impl Default for Url {
    fn default() -> Self {
        Self {
            https: false,
            host: String::default(),
            port: u16::default(),
            path: String::default(),
            query: Multimap::default(),
        }
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.host.is_empty() {
            return Err(std::fmt::Error);
        }

        if self.https {
            f.write_str("https://")?;
        } else {
            f.write_str("http://")?;
        }

        if self.port > 0 {
            f.write_str(&format!("{}:{}", self.host, self.port))?;
        } else {
            f.write_str(&self.host)?;
        }

        if !self.path.starts_with('/') {
            f.write_str("/")?;
        }
        f.write_str(&self.path)?;

        if !self.query.is_empty() {
            f.write_str("?")?;
            f.write_str(&self.query.to_query_string())?;
        }

        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Base URL of an Elasticsearch node
pub struct BaseUrl {
    pub https: bool,
    host: String,
    port: u16,
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self {
            https: false,
            host: "localhost".to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl FromStr for BaseUrl {
    type Err = ValidationErr;

    /// Convert a string to a BaseUrl.
    ///
    /// Without a scheme the URL is taken as plain `http` and, absent a port,
    /// as port 9200. With a scheme, a missing port means the scheme's default.
    ///
    /// # Examples
    ///
    /// ```
    /// use es_rest::es::http::BaseUrl;
    /// use std::str::FromStr;
    ///
    /// // Get base URL from host name
    /// let base_url = "localhost".parse::<BaseUrl>().unwrap();
    /// assert_eq!(base_url.to_string(), "http://localhost:9200");
    /// // Get base URL from scheme, host and port
    /// let base_url: BaseUrl = "https://search.example.com:9243".parse().unwrap();
    /// // Get base URL from IPv6 address
    /// let base_url = BaseUrl::from_str("[::1]:9200").unwrap();
    /// ```
    fn from_str(s: &str) -> Result<Self, ValidationErr> {
        let url = s.parse::<Uri>()?;

        let (https, explicit_scheme) = match url.scheme() {
            None => (false, false),
            Some(scheme) => match scheme.as_str() {
                "http" => (false, true),
                "https" => (true, true),
                _ => {
                    return Err(ValidationErr::InvalidBaseUrl(
                        "scheme must be http or https".into(),
                    ));
                }
            },
        };

        let mut host = match url.host() {
            Some(h) if !h.is_empty() => h,
            _ => {
                return Err(ValidationErr::InvalidBaseUrl(
                    "valid host must be provided".into(),
                ));
            }
        };

        let ipv6host = "[".to_string() + host + "]";
        if host.parse::<std::net::Ipv6Addr>().is_ok() {
            host = &ipv6host;
        }

        let mut port = match url.port() {
            Some(p) => p.as_u16(),
            None if explicit_scheme => 0u16,
            None => DEFAULT_PORT,
        };

        if (https && port == 443) || (!https && port == 80) {
            port = 0u16;
        }

        if url.path() != "/" && !url.path().is_empty() {
            return Err(ValidationErr::InvalidBaseUrl(
                "path must be empty for base URL".into(),
            ));
        }

        if url.query().is_some() {
            return Err(ValidationErr::InvalidBaseUrl(
                "query must be none for base URL".into(),
            ));
        }

        Ok(BaseUrl {
            https,
            host: host.to_string(),
            port,
        })
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(if self.https { "https://" } else { "http://" })?;
        f.write_str(&self.host)?;
        if self.port > 0 {
            write!(f, ":{}", self.port)?;
        }
        Ok(())
    }
}

impl BaseUrl {
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Port, or `0` for the scheme's default port.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Builds the URL of a request for `path` (already percent-encoded).
    pub fn build_url(&self, path: &str, query: &Multimap) -> Url {
        Url {
            https: self.https,
            host: self.host.clone(),
            port: self.port,
            path: path.to_string(),
            query: query.clone(),
        }
    }
}
