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

//! Various utility and helper functions

use base64::Engine as _;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

// https://tools.ietf.org/html/rfc3986
//
// Unreserved characters in addition to alphanumeric characters are: '-', '_',
// '.', '~' (§2.3). NON_ALPHANUMERIC already escapes everything else, reserved
// characters included, so only the unreserved ones are removed from the set.
const QUERY_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

// Path segments additionally keep '*' so that wildcard index patterns such as
// `logs-*` stay readable on the wire.
const PATH_SEGMENT_ESCAPE: &AsciiSet = &QUERY_ESCAPE.remove(b'*');

/// Percent-encodes a query-string key or value.
pub fn url_encode(s: &str) -> String {
    utf8_percent_encode(s, QUERY_ESCAPE).collect()
}

/// Percent-encodes a single element of a URL path segment.
pub fn encode_path_segment(s: &str) -> String {
    utf8_percent_encode(s, PATH_SEGMENT_ESCAPE).collect()
}

/// Encodes data to base64 (standard alphabet, padded).
pub fn b64encode<T: AsRef<[u8]>>(input: T) -> String {
    base64::engine::general_purpose::STANDARD.encode(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_encode() {
        assert_eq!(url_encode("a b"), "a%20b");
        assert_eq!(url_encode("took,hits.hits._id"), "took%2Chits.hits._id");
        assert_eq!(url_encode("wait_for"), "wait_for");
    }

    #[test]
    fn test_encode_path_segment() {
        assert_eq!(encode_path_segment("logs-*"), "logs-*");
        assert_eq!(encode_path_segment("my/role"), "my%2Frole");
        assert_eq!(encode_path_segment("ünï"), "%C3%BCn%C3%AF");
    }

    #[test]
    fn test_b64encode() {
        assert_eq!(b64encode("elastic:changeme"), "ZWxhc3RpYzpjaGFuZ2VtZQ==");
    }
}
