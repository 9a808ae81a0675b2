// Copyright 2025 The TencentCloud Rust SDK Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Response types.
//!
//! Every Tencent Cloud API response has the same shape: a JSON object with a
//! single `Response` key, whose value holds the operation-specific
//! parameters and a `RequestId`. The [Response] type represents that wrapper,
//! and also carries the HTTP metadata of the response in a [BaseResponse].
//!
//! # Example
//! ```
//! # use tencentcloud_common::response::{Response, ResponseParams};
//! #[derive(Debug, Default, serde::Deserialize, serde::Serialize)]
//! #[serde(default, rename_all = "PascalCase")]
//! struct DeleteThingsResponseParams {
//!     request_id: Option<String>,
//! }
//! impl ResponseParams for DeleteThingsResponseParams {
//!     fn request_id(&self) -> Option<&str> { self.request_id.as_deref() }
//! }
//!
//! let response = Response::<DeleteThingsResponseParams>::from_json_string(
//!     r#"{"Response": {"RequestId": "r-1", "Extra": true}}"#)?;
//! assert_eq!(response.request_id(), Some("r-1"));
//! # Ok::<(), tencentcloud_common::error::Error>(())
//! ```

use crate::Result;
use crate::message::{from_json_slice, to_json_string};
use http::HeaderMap;

/// Implemented by the operation-specific parameters of every response.
pub trait ResponseParams:
    serde::de::DeserializeOwned + serde::ser::Serialize + std::fmt::Debug + Send
{
    /// The correlation id the service assigned to the request.
    fn request_id(&self) -> Option<&str>;
}

/// The HTTP metadata of a response.
///
/// Never included in the JSON representation of a [Response].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BaseResponse {
    status_code: u16,
    headers: HeaderMap,
    body: bytes::Bytes,
}

impl BaseResponse {
    /// Creates a new instance, typically called by transport implementations.
    pub fn new(status_code: u16, headers: HeaderMap, body: bytes::Bytes) -> Self {
        Self {
            status_code,
            headers,
            body,
        }
    }

    /// The HTTP status code.
    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// Returns true if the status code is in the `2xx` range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// The HTTP headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The raw response body.
    pub fn body(&self) -> &bytes::Bytes {
        &self.body
    }

    pub(crate) fn into_parts(self) -> (u16, HeaderMap, bytes::Bytes) {
        (self.status_code, self.headers, self.body)
    }
}

/// A Tencent Cloud API response.
///
/// Wraps the operation-specific parameters, as they appear on the wire, and
/// the HTTP metadata for the response.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Response<T> {
    /// The operation-specific parameters.
    #[serde(rename = "Response")]
    pub response: T,

    #[serde(skip)]
    base: BaseResponse,
}

impl<T> Response<T> {
    /// Creates a response from the operation-specific parameters.
    pub fn from(response: T) -> Self {
        Self {
            response,
            base: BaseResponse::default(),
        }
    }

    /// Attaches the HTTP metadata.
    pub fn with_base(mut self, base: BaseResponse) -> Self {
        self.base = base;
        self
    }

    /// The HTTP metadata, empty if the response was not received from a
    /// transport.
    pub fn base(&self) -> &BaseResponse {
        &self.base
    }

    /// Consumes the response, returning the operation-specific parameters.
    pub fn into_inner(self) -> T {
        self.response
    }
}

impl<T> Response<T>
where
    T: ResponseParams,
{
    /// The correlation id the service assigned to the request.
    pub fn request_id(&self) -> Option<&str> {
        self.response.request_id()
    }

    /// Re-serializes the response into a JSON string.
    ///
    /// The HTTP metadata is not included. Serialization errors are discarded,
    /// and the returned string may be empty.
    pub fn to_json_string(&self) -> String {
        to_json_string(self)
    }

    /// Parses a response from JSON text.
    ///
    /// Keys not declared on the response parameters are ignored.
    pub fn from_json_string(text: &str) -> Result<Self> {
        from_json_slice(text.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "PascalCase")]
    struct Params {
        #[serde(skip_serializing_if = "Option::is_none")]
        total_count: Option<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        request_id: Option<String>,
    }

    impl ResponseParams for Params {
        fn request_id(&self) -> Option<&str> {
            self.request_id.as_deref()
        }
    }

    #[test]
    fn base_response() {
        let mut headers = HeaderMap::new();
        headers.insert("content-type", http::HeaderValue::from_static("application/json"));
        let base = BaseResponse::new(200, headers.clone(), bytes::Bytes::from_static(b"{}"));
        assert_eq!(base.status_code(), 200);
        assert!(base.is_success());
        assert_eq!(base.headers(), &headers);
        assert_eq!(base.body().as_ref(), b"{}");

        let base = BaseResponse::new(503, HeaderMap::new(), bytes::Bytes::new());
        assert!(!base.is_success(), "{base:?}");
    }

    #[test]
    fn decode() -> anyhow::Result<()> {
        let input = json!({"Response": {"TotalCount": 3, "RequestId": "r-1"}});
        let got = Response::<Params>::from_json_string(&input.to_string())?;
        assert_eq!(got.request_id(), Some("r-1"));
        assert_eq!(got.response.total_count, Some(3));
        assert_eq!(got.base(), &BaseResponse::default());
        Ok(())
    }

    #[test]
    fn decode_ignores_unknown() -> anyhow::Result<()> {
        let input = json!({"Response": {"RequestId": "r-2", "Unknown": [1, 2]}, "Other": 1});
        let got = Response::<Params>::from_json_string(&input.to_string())?;
        assert_eq!(got.request_id(), Some("r-2"));
        assert_eq!(got.response.total_count, None);
        Ok(())
    }

    #[test]
    fn decode_missing_wrapper() {
        let got = Response::<Params>::from_json_string(r#"{"RequestId": "r-1"}"#);
        assert!(matches!(&got, Err(e) if e.is_deserialization()), "{got:?}");
    }

    #[test]
    fn encode_skips_base() -> anyhow::Result<()> {
        let base = BaseResponse::new(200, HeaderMap::new(), bytes::Bytes::from_static(b"raw"));
        let response = Response::from(Params {
            request_id: Some("r-3".into()),
            ..Default::default()
        })
        .with_base(base.clone());
        assert_eq!(response.base(), &base);
        let got = serde_json::from_str::<Value>(&response.to_json_string())?;
        assert_eq!(got, json!({"Response": {"RequestId": "r-3"}}));
        assert_eq!(response.into_inner().request_id.as_deref(), Some("r-3"));
        Ok(())
    }
}
