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

use crate::mock_transport::MockTransport;
use es_rest::es::client::{EsClient, EsClientBuilder};
use es_rest::es::http::BaseUrl;

#[derive(Clone, Debug)]
pub struct TestContext {
    pub client: EsClient,
    pub base_url: BaseUrl,
    /// Set when the client talks to a [`MockTransport`] instead of a node.
    pub transport: Option<MockTransport>,
}

impl TestContext {
    /// Context whose client records requests instead of sending them.
    pub fn new_mocked() -> Self {
        let _ = env_logger_init();
        let transport = MockTransport::new();
        let base_url = BaseUrl::default();
        let client = EsClientBuilder::new(base_url.clone())
            .transport(transport.clone())
            .build()
            .unwrap();
        Self {
            client,
            base_url,
            transport: Some(transport),
        }
    }

    /// Context for a live node configured through the `ELASTICSEARCH_*`
    /// environment variables.
    pub fn new_from_env() -> Self {
        let _ = env_logger_init();
        let builder = EsClientBuilder::from_env().unwrap();
        let client = builder.build().unwrap();
        log::debug!("ELASTICSEARCH_URL={}", client.base_url());
        Self {
            base_url: client.base_url().clone(),
            client,
            transport: None,
        }
    }

    /// The mock transport; panics for a live context.
    pub fn mock(&self) -> &MockTransport {
        self.transport
            .as_ref()
            .expect("not a mocked test context")
    }
}

fn env_logger_init() -> Result<(), log::SetLoggerError> {
    env_logger::builder().is_test(true).try_init()
}
