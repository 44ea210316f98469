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

//! The associative parameter mapping passed to every endpoint call.

use crate::es::error::ValidationErr;
use serde_json::{Map, Value};

/// Key under which the request payload is stored.
pub const BODY: &str = "body";

/// Parameters of a single endpoint call.
///
/// Keys are parameter names (path segments, query-string parameters, or
/// [`BODY`]), values are arbitrary JSON values. A key mapped to `null` is
/// treated exactly like an absent key.
///
/// # Examples
///
/// ```
/// use es_rest::es::params::Params;
/// use serde_json::json;
///
/// let params = Params::new()
///     .param("name", "admin")
///     .param("refresh", "wait_for")
///     .body(json!({"cluster": ["all"]}));
/// assert!(params.is_set("name"));
/// assert!(!params.body_is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Params {
    inner: Map<String, Value>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a parameter, returning the updated mapping.
    pub fn param<K: Into<String>, V: Into<Value>>(mut self, key: K, value: V) -> Self {
        self.inner.insert(key.into(), value.into());
        self
    }

    /// Sets the request payload.
    pub fn body<V: Into<Value>>(self, body: V) -> Self {
        self.param(BODY, body)
    }

    pub fn insert<K: Into<String>, V: Into<Value>>(&mut self, key: K, value: V) -> Option<Value> {
        self.inner.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.inner.remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.inner.get(key)
    }

    /// Returns `true` if `key` is present and not `null`.
    pub fn is_set(&self, key: &str) -> bool {
        matches!(self.inner.get(key), Some(v) if !v.is_null())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.inner.iter()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// The request payload, if one was supplied and is not `null`.
    pub fn get_body(&self) -> Option<&Value> {
        self.inner.get(BODY).filter(|v| !v.is_null())
    }

    /// Returns `true` if no meaningful payload was supplied.
    ///
    /// See [`is_empty_value`] for what counts as empty.
    pub fn body_is_empty(&self) -> bool {
        self.inner.get(BODY).is_none_or(is_empty_value)
    }

    /// Fails with [`ValidationErr::MissingParameter`] naming the first
    /// parameter of `required` that is not set.
    pub fn check_required(
        &self,
        endpoint: &'static str,
        required: &[&str],
    ) -> Result<(), ValidationErr> {
        match required.iter().find(|name| !self.is_set(name)) {
            Some(name) => Err(ValidationErr::MissingParameter {
                endpoint,
                name: (*name).to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Renders a set parameter into its list elements, ready to be joined
    /// with `,`. Scalars yield a single element.
    pub fn render(
        &self,
        endpoint: &'static str,
        key: &str,
    ) -> Result<Option<Vec<String>>, ValidationErr> {
        match self.inner.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Array(items)) => items
                .iter()
                .map(|v| render_scalar(endpoint, key, v))
                .collect::<Result<Vec<_>, _>>()
                .map(Some),
            Some(v) => Ok(Some(vec![render_scalar(endpoint, key, v)?])),
        }
    }
}

/// Empty payloads are never sent: `null`, `false`, `0`, `""`, `"0"`, `[]` and `{}`.
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty() || s == "0",
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

fn render_scalar(endpoint: &'static str, key: &str, value: &Value) -> Result<String, ValidationErr> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => {
            Err(ValidationErr::InvalidParameterValue {
                endpoint,
                name: key.to_string(),
                reason: format!("expected a scalar or a list of scalars, got {value}"),
            })
        }
    }
}

impl From<Map<String, Value>> for Params {
    fn from(inner: Map<String, Value>) -> Self {
        Self { inner }
    }
}

impl TryFrom<Value> for Params {
    type Error = ValidationErr;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(inner) => Ok(Self { inner }),
            other => Err(ValidationErr::ParamsNotObject(other.to_string())),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            inner: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Params {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.inner.insert(k.into(), v.into());
        }
    }
}
