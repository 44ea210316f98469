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

//! Request payloads.

use crate::es::error::ValidationErr;
use bytes::Bytes;
use serde_json::Value;

/// Payload of a request.
///
/// JSON strings are taken as pre-serialized text (newline-delimited JSON for
/// the bulk style APIs) and sent verbatim; every other value is serialized.
#[derive(Clone, Debug, PartialEq)]
pub enum RequestBody {
    Json(Value),
    Text(String),
}

impl RequestBody {
    pub fn content_type(&self) -> &'static str {
        match self {
            RequestBody::Json(_) => "application/json",
            RequestBody::Text(_) => "application/x-ndjson",
        }
    }

    pub fn to_bytes(&self) -> Result<Bytes, ValidationErr> {
        Ok(match self {
            RequestBody::Json(v) => Bytes::from(serde_json::to_vec(v)?),
            RequestBody::Text(s) => Bytes::from(s.clone()),
        })
    }
}

impl From<Value> for RequestBody {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => RequestBody::Text(s),
            v => RequestBody::Json(v),
        }
    }
}
