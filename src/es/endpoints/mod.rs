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

//! Declarative description of Elasticsearch REST endpoints.
//!
//! Every operation is a static [`EndpointSpec`]: a list of URL templates in
//! precedence order, the required parameters, and the query-string parameters
//! the operation accepts. [`EndpointSpec::resolve`] turns a [`Params`] mapping
//! into a method, a path, query parameters and an optional body.

use crate::es::error::ValidationErr;
use crate::es::multimap_ext::{Multimap, MultimapExt};
use crate::es::params::{BODY, Params};
use crate::es::types::RequestBody;
use crate::es::utils::encode_path_segment;
use http::Method;
use lazy_static::lazy_static;
use regex::Regex;

pub mod global;
pub mod indices;
pub mod license;
pub mod security;

/// Query-string parameters accepted by every endpoint.
pub const COMMON_QUERY_PARAMS: &[&str] = &["pretty", "human", "error_trace", "source", "filter_path"];

lazy_static! {
    static ref PLACEHOLDER_REGEX: Regex = Regex::new(r"\{([a-z_]+)\}").unwrap();
}

/// HTTP verb of a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verb {
    Get,
    Head,
    Post,
    Put,
    Delete,
    /// GET when the body is empty, POST otherwise.
    GetOrPost,
}

impl Verb {
    pub fn resolve(self, body_is_empty: bool) -> Method {
        match self {
            Verb::Get => Method::GET,
            Verb::Head => Method::HEAD,
            Verb::Post => Method::POST,
            Verb::Put => Method::PUT,
            Verb::Delete => Method::DELETE,
            Verb::GetOrPost if body_is_empty => Method::GET,
            Verb::GetOrPost => Method::POST,
        }
    }
}

/// One URL template of an endpoint, e.g. `/_security/role/{name}`.
#[derive(Clone, Copy, Debug)]
pub struct Route {
    pub path: &'static str,
    pub verb: Verb,
    pub deprecated: bool,
}

impl Route {
    pub const fn new(path: &'static str, verb: Verb) -> Self {
        Self {
            path,
            verb,
            deprecated: false,
        }
    }

    /// Marks the route as deprecated; using it logs a warning.
    pub const fn deprecated(self) -> Self {
        Self {
            deprecated: true,
            ..self
        }
    }

    /// Names of the `{placeholder}` segments of the template, in order.
    pub fn placeholders(&self) -> impl Iterator<Item = &'static str> {
        PLACEHOLDER_REGEX
            .captures_iter(self.path)
            .filter_map(|c| c.get(1).map(|m| m.as_str()))
    }

    fn is_usable(&self, params: &Params) -> bool {
        self.placeholders().all(|p| params.is_set(p))
    }

    fn interpolate(&self, endpoint: &'static str, params: &Params) -> Result<String, ValidationErr> {
        let mut path = String::with_capacity(self.path.len() + 32);
        let mut last = 0;
        for caps in PLACEHOLDER_REGEX.captures_iter(self.path) {
            let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            path.push_str(&self.path[last..whole.start()]);
            let elements = params.render(endpoint, name.as_str())?.ok_or_else(|| {
                ValidationErr::MissingParameter {
                    endpoint,
                    name: name.as_str().to_string(),
                }
            })?;
            if elements.is_empty() || elements.iter().any(String::is_empty) {
                return Err(ValidationErr::InvalidParameterValue {
                    endpoint,
                    name: name.as_str().to_string(),
                    reason: "path segments must not be empty".to_string(),
                });
            }
            let encoded: Vec<String> = elements.iter().map(|e| encode_path_segment(e)).collect();
            path.push_str(&encoded.join(","));
            last = whole.end();
        }
        path.push_str(&self.path[last..]);
        Ok(path)
    }
}

/// Static description of one REST operation.
#[derive(Debug)]
pub struct EndpointSpec {
    /// Elasticsearch API name, e.g. `security.get_role`.
    pub name: &'static str,
    /// URL templates, most specific first.
    pub routes: &'static [Route],
    /// Parameters whose absence is a caller error.
    pub required: &'static [&'static str],
    /// Query-string parameters specific to this endpoint.
    pub query: &'static [&'static str],
}

/// Outcome of [`EndpointSpec::resolve`].
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedEndpoint {
    pub method: Method,
    pub path: String,
    pub query_params: Multimap,
    pub body: Option<RequestBody>,
}

impl EndpointSpec {
    /// Returns `true` if `name` appears as a placeholder in any route.
    pub fn is_path_param(&self, name: &str) -> bool {
        self.routes
            .iter()
            .any(|r| r.placeholders().any(|p| p == name))
    }

    /// Returns `true` if `name` may be sent in the query string.
    pub fn is_query_param(&self, name: &str) -> bool {
        self.query.contains(&name) || COMMON_QUERY_PARAMS.contains(&name)
    }

    /// Selects the first route whose placeholders are all set.
    pub fn select_route(&self, params: &Params) -> Result<&'static Route, ValidationErr> {
        if let Some(route) = self.routes.iter().find(|r| r.is_usable(params)) {
            return Ok(route);
        }
        // name the first gap of the most general template
        let name = self
            .routes
            .last()
            .and_then(|r| r.placeholders().find(|p| !params.is_set(p)))
            .unwrap_or(BODY);
        Err(ValidationErr::MissingParameter {
            endpoint: self.name,
            name: name.to_string(),
        })
    }

    /// Resolves `params` into the concrete method, path, query string and body.
    pub fn resolve(&self, params: &Params) -> Result<ResolvedEndpoint, ValidationErr> {
        params.check_required(self.name, self.required)?;

        let route = self.select_route(params)?;
        if route.deprecated {
            log::warn!(
                "{}: the URL template {} is deprecated",
                self.name,
                route.path
            );
        }
        let path = route.interpolate(self.name, params)?;

        let mut query_params = Multimap::new();
        for (key, _) in params.iter() {
            if key == BODY || !params.is_set(key) {
                continue;
            }
            if self.is_path_param(key) {
                if !route.placeholders().any(|p| p == key.as_str()) {
                    log::debug!(
                        "{}: parameter {key} is not part of {}, ignoring it",
                        self.name,
                        route.path
                    );
                }
                continue;
            }
            if !self.is_query_param(key) {
                return Err(ValidationErr::UnknownParameter {
                    endpoint: self.name,
                    name: key.clone(),
                });
            }
            if let Some(elements) = params.render(self.name, key)? {
                query_params.add(key.as_str(), elements.join(","));
            }
        }

        let body_is_empty = params.body_is_empty();
        let body = match params.get_body() {
            Some(v) if !body_is_empty => Some(RequestBody::from(v.clone())),
            _ => None,
        };

        Ok(ResolvedEndpoint {
            method: route.verb.resolve(body_is_empty),
            path,
            query_params,
            body,
        })
    }
}
