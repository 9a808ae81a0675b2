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

/// The structured details of an error.
///
/// Tencent Cloud services report errors using an envelope with an error
/// code, a human-readable message, and the id of the failed request:
///
/// ```json
/// {"Response": {"Error": {"Code": "...", "Message": "..."}, "RequestId": "..."}}
/// ```
///
/// The client libraries use the same structure for errors detected before a
/// request is sent, in that case the request id is empty.
#[derive(Clone, Debug, Default, PartialEq, thiserror::Error)]
#[error("code={code}, message={message}, request_id={request_id}")]
pub struct SdkError {
    code: String,
    message: String,
    request_id: String,
}

impl SdkError {
    /// Creates a new instance.
    pub fn new<C, M, R>(code: C, message: M, request_id: R) -> Self
    where
        C: Into<String>,
        M: Into<String>,
        R: Into<String>,
    {
        Self {
            code: code.into(),
            message: message.into(),
            request_id: request_id.into(),
        }
    }

    /// The error code, for example `InvalidParameterValue.LimitExceeded`.
    ///
    /// The service crates include a catalog of the known codes.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// A human-readable description of the problem.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The id of the failed request, empty if the request was never sent.
    pub fn request_id(&self) -> &str {
        &self.request_id
    }
}

// The service error envelope, as it appears on the wire.
#[derive(serde::Deserialize)]
struct ErrorEnvelope {
    #[serde(rename = "Response")]
    response: ErrorResponse,
}

#[derive(serde::Deserialize)]
struct ErrorResponse {
    #[serde(rename = "Error")]
    error: ErrorBody,
    #[serde(rename = "RequestId", default)]
    request_id: String,
}

#[derive(serde::Deserialize)]
struct ErrorBody {
    #[serde(rename = "Code", default)]
    code: String,
    #[serde(rename = "Message", default)]
    message: String,
}

impl TryFrom<&bytes::Bytes> for SdkError {
    type Error = serde_json::Error;

    /// Extracts the error details from a response body.
    ///
    /// Fails if the body is not a service error envelope, which includes all
    /// successful responses.
    fn try_from(value: &bytes::Bytes) -> Result<Self, Self::Error> {
        let envelope = serde_json::from_slice::<ErrorEnvelope>(value.as_ref())?;
        let response = envelope.response;
        Ok(Self {
            code: response.error.code,
            message: response.error.message,
            request_id: response.request_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_error_envelope() -> anyhow::Result<()> {
        let body = json!({"Response": {
            "Error": {
                "Code": "InvalidKeyPairName.Duplicate",
                "Message": "the key pair name already exists",
            },
            "RequestId": "r-123",
        }});
        let body = bytes::Bytes::from(body.to_string());
        let got = SdkError::try_from(&body)?;
        let want = SdkError::new(
            "InvalidKeyPairName.Duplicate",
            "the key pair name already exists",
            "r-123",
        );
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn success_is_not_an_error() {
        let body = json!({"Response": {"KeyId": "skey-123", "RequestId": "r-123"}});
        let body = bytes::Bytes::from(body.to_string());
        let got = SdkError::try_from(&body);
        assert!(got.is_err(), "{got:?}");
    }

    #[test]
    fn not_json() {
        let body = bytes::Bytes::from_static(b"<html>bad gateway</html>");
        let got = SdkError::try_from(&body);
        assert!(got.is_err(), "{got:?}");
    }

    #[test]
    fn display() {
        let error = SdkError::new("InternalError", "try again", "r-456");
        let got = error.to_string();
        assert!(got.contains("InternalError"), "{got}");
        assert!(got.contains("try again"), "{got}");
        assert!(got.contains("r-456"), "{got}");
    }
}
