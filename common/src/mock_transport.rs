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

use bytes::Bytes;
use es_rest::es::error::Error;
use es_rest::es::es_error_response::EsServerError;
use es_rest::es::multimap_ext::Multimap;
use es_rest::es::transport::Transport;
use es_rest::es::types::{EsRequest, RequestBody};
use http::{HeaderMap, Method};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// What a [`MockTransport`] saw of one request.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedRequest {
    pub endpoint: &'static str,
    pub method: Method,
    pub path: String,
    pub path_and_query: String,
    pub query_params: Multimap,
    pub headers: Multimap,
    pub body: Option<RequestBody>,
}

impl From<&EsRequest> for RecordedRequest {
    fn from(r: &EsRequest) -> Self {
        Self {
            endpoint: r.endpoint(),
            method: r.method().clone(),
            path: r.path().to_string(),
            path_and_query: r.path_and_query(),
            query_params: r.query_params().clone(),
            headers: r.headers().clone(),
            body: r.body().cloned(),
        }
    }
}

/// Transport that records every request and answers from a queue of canned
/// responses, `200 {}` once the queue is empty.
#[derive(Clone, Debug, Default)]
pub struct MockTransport {
    sent: Arc<Mutex<Vec<RecordedRequest>>>,
    responses: Arc<Mutex<VecDeque<(u16, String)>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the response to the next unanswered request.
    pub fn respond_with(&self, status: u16, body: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .push_back((status, body.into()));
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.sent.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.sent.lock().unwrap().last().cloned()
    }

    pub fn request_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl Transport for MockTransport {
    async fn send_request(&self, request: &EsRequest) -> Result<reqwest::Response, Error> {
        self.sent.lock().unwrap().push(RecordedRequest::from(request));
        let (status, body) = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or((200, "{}".to_string()));

        if (200..300).contains(&status) {
            let resp = http::Response::builder()
                .status(status)
                .header("content-type", "application/json")
                .body(body)
                .unwrap();
            return Ok(reqwest::Response::from(resp));
        }
        Err(EsServerError::new(status, HeaderMap::new(), Bytes::from(body)).into())
    }
}
