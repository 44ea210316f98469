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

//! `license.*` APIs.

use crate::es::builders::Call;
use crate::es::client::EsClient;
use crate::es::endpoints::license;
use crate::es::params::Params;

/// The license APIs, obtained from [`EsClient::license`].
#[derive(Clone, Debug)]
pub struct License {
    client: EsClient,
}

impl License {
    pub(crate) fn new(client: &EsClient) -> Self {
        Self {
            client: client.clone(),
        }
    }

    /// Deletes the licensing information for the cluster.
    pub fn delete(&self, params: impl Into<Params>) -> Call {
        Call::new(&self.client, &license::DELETE, params)
    }

    /// Retrieves licensing information for the cluster.
    ///
    /// Accepts `local` (read from the local node) and `accept_enterprise`.
    pub fn get(&self, params: impl Into<Params>) -> Call {
        Call::new(&self.client, &license::GET, params)
    }

    /// Reports whether a basic license can be started.
    pub fn get_basic_status(&self, params: impl Into<Params>) -> Call {
        Call::new(&self.client, &license::GET_BASIC_STATUS, params)
    }

    /// Reports whether a trial license can be started.
    pub fn get_trial_status(&self, params: impl Into<Params>) -> Call {
        Call::new(&self.client, &license::GET_TRIAL_STATUS, params)
    }

    /// Updates the license of the cluster.
    ///
    /// The license document goes in `body`; set `acknowledge` when the new
    /// license reduces features.
    pub fn post(&self, params: impl Into<Params>) -> Call {
        Call::new(&self.client, &license::POST, params)
    }

    /// Starts an indefinite basic license.
    pub fn post_start_basic(&self, params: impl Into<Params>) -> Call {
        Call::new(&self.client, &license::POST_START_BASIC, params)
    }

    /// Starts a limited time trial license, of the kind given by `type`.
    pub fn post_start_trial(&self, params: impl Into<Params>) -> Call {
        Call::new(&self.client, &license::POST_START_TRIAL, params)
    }
}
