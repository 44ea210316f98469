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

use rand::distr::{Alphanumeric, SampleString};

/// Random lowercase index name, usable as an Elasticsearch index.
pub fn rand_index_name() -> String {
    format!(
        "es-rest-{}",
        Alphanumeric.sample_string(&mut rand::rng(), 8).to_lowercase()
    )
}

pub fn rand_name() -> String {
    Alphanumeric.sample_string(&mut rand::rng(), 8)
}
