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

//! The seam between the client libraries and the HTTP transport.
//!
//! The client libraries produce a JSON body and a populated [BaseRequest].
//! Signing the request, resolving endpoints, retrying, and the HTTP client
//! itself are the responsibility of a [Transport] implementation.

use crate::Result;
use crate::error::{Error, SdkError};
use crate::message::{from_json_slice, to_json_bytes};
use crate::request::{BaseRequest, Operation};
use crate::response::{BaseResponse, Response, ResponseParams};
use tracing::Instrument;

/// Sends requests to a Tencent Cloud service.
///
/// Implementations must sign the request using the credential in the
/// envelope, and send `body` as the HTTP payload. The envelope values are
/// sent as headers, they are never part of the body.
///
/// Implementations return the HTTP response as received. Non-success status
/// codes and service error envelopes are detected by [execute]. Problems
/// without an HTTP response, such as a broken connection, should be
/// reported using [Error::io].
pub trait Transport: std::fmt::Debug + Send + Sync {
    /// Sends a single request.
    fn send(
        &self,
        request: &BaseRequest,
        body: bytes::Bytes,
    ) -> impl Future<Output = Result<BaseResponse>> + Send;
}

/// Encodes `request`, sends it using `transport`, and decodes the response.
///
/// Returns a service error if the body contains an error envelope, a
/// transport error if the HTTP status is not successful, and the decoded
/// response otherwise. Unknown keys in the response are ignored.
pub async fn execute<T, R>(transport: &T, request: &R) -> Result<Response<R::Response>>
where
    T: Transport,
    R: Operation,
{
    let base = request.base();
    let span = tracing::debug_span!(
        "execute",
        service = base.service(),
        version = base.version(),
        action = base.action(),
        region = base.region().unwrap_or_default(),
    );
    async move {
        let body = to_json_bytes(request)?;
        let response = transport.send(base, body).await?;
        if let Ok(details) = SdkError::try_from(response.body()) {
            tracing::debug!(
                code = details.code(),
                request_id = details.request_id(),
                "service returned an error"
            );
            let (status_code, headers, _) = response.into_parts();
            return Err(Error::service_with_http_metadata(
                details,
                Some(status_code),
                Some(headers),
            ));
        }
        if !response.is_success() {
            tracing::debug!(
                status_code = response.status_code(),
                "transport returned an error"
            );
            let (status_code, headers, payload) = response.into_parts();
            return Err(Error::http(status_code, headers, payload));
        }
        let decoded = from_json_slice::<Response<R::Response>>(response.body())?;
        tracing::debug!(
            request_id = decoded.response.request_id().unwrap_or_default(),
            "received response"
        );
        Ok(decoded.with_base(response))
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::Message;
    use http::HeaderMap;
    use serde_json::{Value, json};
    use std::sync::Mutex;

    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "PascalCase")]
    struct DeleteThingRequest {
        #[serde(skip_serializing_if = "Option::is_none")]
        thing_id: Option<String>,
        #[serde(skip)]
        base: BaseRequest,
    }

    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "PascalCase")]
    struct DeleteThingResponseParams {
        #[serde(skip_serializing_if = "Option::is_none")]
        request_id: Option<String>,
    }

    impl Message for DeleteThingRequest {
        fn typename() -> &'static str {
            "DeleteThingRequest"
        }
    }

    impl ResponseParams for DeleteThingResponseParams {
        fn request_id(&self) -> Option<&str> {
            self.request_id.as_deref()
        }
    }

    impl Operation for DeleteThingRequest {
        type Response = DeleteThingResponseParams;
        const SERVICE: &'static str = "things";
        const VERSION: &'static str = "2020-01-01";
        const ACTION: &'static str = "DeleteThing";

        fn base(&self) -> &BaseRequest {
            &self.base
        }

        fn base_mut(&mut self) -> &mut BaseRequest {
            &mut self.base
        }
    }

    #[derive(Debug)]
    struct FakeTransport {
        status_code: u16,
        body: Value,
        sent: Mutex<Vec<(BaseRequest, Value)>>,
    }

    impl FakeTransport {
        fn new(status_code: u16, body: Value) -> Self {
            Self {
                status_code,
                body,
                sent: Mutex::new(Vec::new()),
            }
        }
    }

    impl Transport for FakeTransport {
        async fn send(&self, request: &BaseRequest, body: bytes::Bytes) -> Result<BaseResponse> {
            let body = serde_json::from_slice::<Value>(&body).map_err(Error::io)?;
            self.sent
                .lock()
                .expect("lock is never poisoned in tests")
                .push((request.clone(), body));
            let mut headers = HeaderMap::new();
            headers.insert("x-fake", http::HeaderValue::from_static("yes"));
            Ok(BaseResponse::new(
                self.status_code,
                headers,
                bytes::Bytes::from(self.body.to_string()),
            ))
        }
    }

    #[derive(Debug)]
    struct BrokenTransport;

    impl Transport for BrokenTransport {
        async fn send(&self, _request: &BaseRequest, _body: bytes::Bytes) -> Result<BaseResponse> {
            Err(Error::io("connection reset"))
        }
    }

    fn request() -> DeleteThingRequest {
        let mut request = DeleteThingRequest {
            thing_id: Some("t-123".into()),
            ..Default::default()
        };
        request
            .base_mut()
            .with_api_info("things", "2020-01-01", "DeleteThing")
            .set_region("ap-guangzhou");
        request
    }

    #[tokio::test]
    async fn success() -> anyhow::Result<()> {
        let transport = FakeTransport::new(
            200,
            json!({"Response": {"RequestId": "r-1", "NewField": 42}}),
        );
        let response = execute(&transport, &request()).await?;
        assert_eq!(response.request_id(), Some("r-1"));
        assert_eq!(response.base().status_code(), 200);
        assert!(response.base().headers().contains_key("x-fake"));

        let sent = transport.sent.lock().expect("lock is never poisoned in tests");
        let (base, body) = &sent[0];
        assert_eq!(base.action(), "DeleteThing");
        assert_eq!(base.region(), Some("ap-guangzhou"));
        assert_eq!(body, &json!({"ThingId": "t-123"}));
        Ok(())
    }

    #[tokio::test]
    async fn service_error() {
        let transport = FakeTransport::new(
            200,
            json!({"Response": {
                "Error": {"Code": "ResourceNotFound.Thing", "Message": "no such thing"},
                "RequestId": "r-2"
            }}),
        );
        let err = execute(&transport, &request()).await.unwrap_err();
        assert!(err.is_service(), "{err:?}");
        assert_eq!(err.code(), Some("ResourceNotFound.Thing"));
        assert_eq!(err.message(), Some("no such thing"));
        assert_eq!(err.request_id(), Some("r-2"));
        assert_eq!(err.http_status_code(), Some(200));
        assert!(err.http_headers().is_some_and(|h| h.contains_key("x-fake")));
    }

    #[tokio::test]
    async fn http_error() {
        let transport = FakeTransport::new(502, json!({"message": "bad gateway"}));
        let err = execute(&transport, &request()).await.unwrap_err();
        assert!(err.is_transport(), "{err:?}");
        assert!(!err.is_io(), "{err:?}");
        assert_eq!(err.http_status_code(), Some(502));
        let payload = err
            .http_payload()
            .map(|p| serde_json::from_slice::<Value>(p).ok());
        assert_eq!(payload, Some(Some(json!({"message": "bad gateway"}))));
    }

    #[tokio::test]
    async fn io_error() {
        let err = execute(&BrokenTransport, &request()).await.unwrap_err();
        assert!(err.is_io(), "{err:?}");
    }

    #[tokio::test]
    async fn malformed_response() {
        let transport = FakeTransport::new(200, json!({"Response": {"RequestId": 42}}));
        let err = execute(&transport, &request()).await.unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
    }
}
