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

use super::{BUILD_REQUEST_ERROR, SdkError};
use http::HeaderMap;
use std::error::Error as StdError;

type BoxError = Box<dyn StdError + Send + Sync>;

/// The core error returned by all client libraries.
///
/// The client libraries report errors from multiple sources. For example, the
/// application may provide a request body with keys the request does not
/// declare, the response may not be valid JSON, the transport may report a
/// non-success HTTP status, or the service may return an error envelope.
///
/// Most applications will just return the error or log it, without any further
/// action. However, some applications may need to interrogate the error
/// details. This type offers a series of predicates to determine the error
/// kind, and accessors to query the most common error details. Errors from the
/// JSON parser are preserved unchanged as the error [source][StdError::source].
///
/// # Example
/// ```
/// use tencentcloud_common::error::{Error, SdkError};
/// match example_function() {
///     Err(e) if e.is_build_request() => { println!("fix the request {e}"); },
///     Err(e) if e.code().is_some() => {
///         println!("service error {e}, request id {:?}", e.request_id());
///     },
///     Err(e) => { println!("some other error {e}"); },
///     Ok(_) => { println!("success, how boring"); },
/// }
///
/// fn example_function() -> Result<String, Error> {
///     // ... details omitted ...
///     # Err(Error::service(SdkError::new("ResourceNotFound.KeyPair", "not found", "r-1")))
/// }
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: Option<BoxError>,
}

impl Error {
    /// Creates an error representing a request that cannot be constructed.
    ///
    /// The error code is always [BUILD_REQUEST_ERROR] and the request id is
    /// always empty: these errors are detected before any request is sent.
    ///
    /// # Example
    /// ```
    /// use tencentcloud_common::error::{BUILD_REQUEST_ERROR, Error};
    /// let error = Error::build_request("CreateKeyPairRequest has unknown keys: Typo");
    /// assert!(error.is_build_request());
    /// assert_eq!(error.code(), Some(BUILD_REQUEST_ERROR));
    /// assert_eq!(error.request_id(), Some(""));
    /// ```
    pub fn build_request<T: Into<String>>(message: T) -> Self {
        let details = SdkError::new(BUILD_REQUEST_ERROR, message, "");
        Self {
            kind: ErrorKind::BuildRequest(Box::new(details)),
            source: None,
        }
    }

    /// The request could not be constructed from the application inputs.
    ///
    /// This is always a client-side generated error, the request was never
    /// sent.
    ///
    /// # Troubleshooting
    ///
    /// The most common cause is a typo in a key of a JSON request body. The
    /// error message names the request type and every unexpected key. Compare
    /// those keys against the API documentation, the key names are
    /// case-sensitive.
    pub fn is_build_request(&self) -> bool {
        matches!(self.kind, ErrorKind::BuildRequest(_))
    }

    /// Creates an error with the information returned by the service.
    ///
    /// # Example
    /// ```
    /// use tencentcloud_common::error::{Error, SdkError};
    /// let details = SdkError::new("InvalidKeyPair.LimitExceeded", "too many key pairs", "r-1");
    /// let error = Error::service(details.clone());
    /// assert_eq!(error.sdk_error(), Some(&details));
    /// ```
    pub fn service(details: SdkError) -> Self {
        Self::service_with_http_metadata(details, None, None)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates a service error including the transport metadata.
    #[doc(hidden)]
    pub fn service_with_http_metadata(
        details: SdkError,
        status_code: Option<u16>,
        headers: Option<HeaderMap>,
    ) -> Self {
        let details = ServiceDetails {
            details,
            status_code,
            headers,
        };
        Self {
            kind: ErrorKind::Service(Box::new(details)),
            source: None,
        }
    }

    /// The service returned an error envelope.
    ///
    /// # Troubleshooting
    ///
    /// As this error is created by the service, troubleshooting typically
    /// involves reading the service documentation for the [code][Error::code].
    /// Include the [request id][Error::request_id] when contacting support,
    /// it identifies the request in the service logs.
    pub fn is_service(&self) -> bool {
        matches!(self.kind, ErrorKind::Service(_))
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates an error representing a serialization problem.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use tencentcloud_common::error::Error;
    /// let error = Error::ser("simulated problem");
    /// assert!(error.is_serialization());
    /// assert!(error.source().is_some());
    /// ```
    #[doc(hidden)]
    pub fn ser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Serialization,
            source: Some(source.into()),
        }
    }

    /// The request could not be serialized.
    ///
    /// This is always a client-side generated error, generated before the
    /// request is made. This error is never transient: the serialization is
    /// deterministic, and will fail on future attempts with the same input.
    pub fn is_serialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Serialization)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates an error representing a deserialization problem.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use tencentcloud_common::error::Error;
    /// let error = Error::deser("simulated problem");
    /// assert!(error.is_deserialization());
    /// assert!(error.source().is_some());
    /// ```
    #[doc(hidden)]
    pub fn deser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Deserialization,
            source: Some(source.into()),
        }
    }

    /// The JSON text could not be parsed into the target record.
    ///
    /// The parser error is available, unchanged, as the error
    /// [source][StdError::source]. It can be recovered with
    /// `e.source().and_then(|s| s.downcast_ref::<serde_json::Error>())`.
    ///
    /// # Troubleshooting
    ///
    /// For request bodies provided by the application, check the JSON text is
    /// an object and each value has the type documented for its key. For
    /// service responses, the most common cause is a bug in the client
    /// library, upgrading to the latest version may fix the problem.
    pub fn is_deserialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Deserialization)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// A non-success HTTP response without a service error envelope.
    #[doc(hidden)]
    pub fn http(status_code: u16, headers: HeaderMap, payload: bytes::Bytes) -> Self {
        let details = TransportDetails {
            status_code: Some(status_code),
            headers: Some(headers),
            payload: Some(payload),
        };
        Self {
            kind: ErrorKind::Transport(Box::new(details)),
            source: None,
        }
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// A problem in the transport layer without a full HTTP response.
    #[doc(hidden)]
    pub fn io<T: Into<BoxError>>(source: T) -> Self {
        let details = TransportDetails {
            status_code: None,
            headers: None,
            payload: None,
        };
        Self {
            kind: ErrorKind::Transport(Box::new(details)),
            source: Some(source.into()),
        }
    }

    /// A problem reported by the transport layer.
    ///
    /// Examples include a broken connection, or a proxy returning an error
    /// page instead of a service response.
    pub fn is_transport(&self) -> bool {
        matches!(self.kind, ErrorKind::Transport(_))
    }

    /// A problem in the transport layer without a full HTTP response.
    pub fn is_io(&self) -> bool {
        matches!(
        &self.kind,
        ErrorKind::Transport(d) if matches!(**d, TransportDetails {
            status_code: None,
            headers: None,
            payload: None,
        }))
    }

    /// The structured error details, if any.
    ///
    /// Only [build request][Error::is_build_request] and
    /// [service][Error::is_service] errors carry these details.
    pub fn sdk_error(&self) -> Option<&SdkError> {
        match &self.kind {
            ErrorKind::BuildRequest(d) => Some(d.as_ref()),
            ErrorKind::Service(d) => Some(&d.details),
            _ => None,
        }
    }

    /// The error code, if any.
    pub fn code(&self) -> Option<&str> {
        self.sdk_error().map(SdkError::code)
    }

    /// The human-readable message returned with the error code, if any.
    pub fn message(&self) -> Option<&str> {
        self.sdk_error().map(SdkError::message)
    }

    /// The request id, if any.
    ///
    /// This is empty for build request errors, as the request was never sent.
    pub fn request_id(&self) -> Option<&str> {
        self.sdk_error().map(SdkError::request_id)
    }

    /// The HTTP status code, if any, associated with this error.
    pub fn http_status_code(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::Transport(d) => d.status_code,
            ErrorKind::Service(d) => d.status_code,
            _ => None,
        }
    }

    /// The headers, if any, associated with this error.
    pub fn http_headers(&self) -> Option<&HeaderMap> {
        match &self.kind {
            ErrorKind::Transport(d) => d.headers.as_ref(),
            ErrorKind::Service(d) => d.headers.as_ref(),
            _ => None,
        }
    }

    /// The payload, if any, associated with this error.
    pub fn http_payload(&self) -> Option<&bytes::Bytes> {
        match &self.kind {
            ErrorKind::Transport(d) => d.payload.as_ref(),
            _ => None,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.kind, &self.source) {
            (ErrorKind::BuildRequest(d), _) => {
                write!(f, "cannot build the request: {}", d.message())
            }
            (ErrorKind::Serialization, Some(e)) => write!(f, "cannot serialize the request {e}"),
            (ErrorKind::Deserialization, Some(e)) => {
                write!(f, "cannot deserialize the JSON text {e}")
            }
            (ErrorKind::Transport(details), _) => details.display(self.source(), f),
            (ErrorKind::Service(d), _) => {
                write!(
                    f,
                    "the service reports an error with code {} described as: {}, request id: {}",
                    d.details.code(),
                    d.details.message(),
                    d.details.request_id()
                )
            }
            (_, None) => unreachable!("no constructor allows this"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error))
    }
}

/// The type of error held by an [Error] instance.
#[derive(Debug)]
enum ErrorKind {
    BuildRequest(Box<SdkError>),
    Serialization,
    Deserialization,
    Transport(Box<TransportDetails>),
    Service(Box<ServiceDetails>),
}

#[derive(Debug)]
struct TransportDetails {
    status_code: Option<u16>,
    headers: Option<HeaderMap>,
    payload: Option<bytes::Bytes>,
}

impl TransportDetails {
    fn display(
        &self,
        source: Option<&(dyn StdError + 'static)>,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match (source, &self) {
            (
                _,
                TransportDetails {
                    status_code: Some(code),
                    payload: Some(p),
                    ..
                },
            ) => {
                if let Ok(message) = std::str::from_utf8(p.as_ref()) {
                    write!(f, "the HTTP transport reports a [{code}] error: {message}")
                } else {
                    write!(f, "the HTTP transport reports a [{code}] error: {p:?}")
                }
            }
            (Some(source), _) => {
                write!(f, "the transport reports an error: {source}")
            }
            (None, _) => unreachable!("no Error constructor allows this"),
        }
    }
}

#[derive(Debug)]
struct ServiceDetails {
    details: SdkError,
    status_code: Option<u16>,
    headers: Option<HeaderMap>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as StdError;

    fn json_error() -> serde_json::Error {
        serde_json::from_str::<serde_json::Value>("{").unwrap_err()
    }

    fn test_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            "content-type",
            http::HeaderValue::from_static("application/json"),
        );
        headers
    }

    #[test]
    fn build_request() {
        let error = Error::build_request("CreateKeyPairRequest has unknown keys: Typo");
        assert!(error.is_build_request(), "{error:?}");
        assert!(error.source().is_none(), "{error:?}");
        assert_eq!(error.code(), Some(BUILD_REQUEST_ERROR));
        assert_eq!(
            error.message(),
            Some("CreateKeyPairRequest has unknown keys: Typo")
        );
        assert_eq!(error.request_id(), Some(""));
        assert!(error.to_string().contains("Typo"), "{error}");

        assert!(!error.is_service(), "{error:?}");
        assert!(error.http_headers().is_none(), "{error:?}");
        assert!(error.http_status_code().is_none(), "{error:?}");
        assert!(error.http_payload().is_none(), "{error:?}");
    }

    #[test]
    fn service() {
        let details = SdkError::new("ResourceNotFound.KeyPair", "NOT FOUND", "r-123");
        let error = Error::service(details.clone());
        assert!(error.is_service(), "{error:?}");
        assert!(error.source().is_none(), "{error:?}");
        assert_eq!(error.sdk_error(), Some(&details));
        assert_eq!(error.code(), Some("ResourceNotFound.KeyPair"));
        assert_eq!(error.request_id(), Some("r-123"));
        assert!(error.to_string().contains("NOT FOUND"), "{error}");
        assert!(error.to_string().contains("r-123"), "{error}");
        assert!(!error.is_build_request(), "{error:?}");
        assert!(error.http_status_code().is_none(), "{error:?}");
    }

    #[test]
    fn service_with_http_metadata() {
        let details = SdkError::new("InternalError", "oops", "r-456");
        let error =
            Error::service_with_http_metadata(details.clone(), Some(200), Some(test_headers()));
        assert_eq!(error.sdk_error(), Some(&details));
        assert_eq!(error.http_status_code(), Some(200));
        assert_eq!(error.http_headers(), Some(&test_headers()));
        assert!(error.http_payload().is_none(), "{error:?}");
    }

    #[test]
    fn deserialization_preserves_source() {
        let error = Error::deser(json_error());
        assert!(error.is_deserialization(), "{error:?}");
        let got = error
            .source()
            .and_then(|e| e.downcast_ref::<serde_json::Error>());
        assert!(matches!(got, Some(e) if e.is_eof()), "{error:?}");
        assert!(
            error.to_string().contains(&json_error().to_string()),
            "{error}"
        );
        assert!(error.sdk_error().is_none(), "{error:?}");
    }

    #[test]
    fn serialization() {
        let error = Error::ser(json_error());
        assert!(error.is_serialization(), "{error:?}");
        assert!(error.source().is_some(), "{error:?}");
        assert!(error.code().is_none(), "{error:?}");
    }

    #[test]
    fn http() {
        let payload = bytes::Bytes::from_static(b"BAD GATEWAY");
        let error = Error::http(502, test_headers(), payload.clone());
        assert!(error.is_transport(), "{error:?}");
        assert!(!error.is_io(), "{error:?}");
        assert!(error.source().is_none(), "{error:?}");
        assert!(error.to_string().contains("BAD GATEWAY"), "{error}");
        assert!(error.to_string().contains("502"), "{error}");
        assert_eq!(error.http_status_code(), Some(502));
        assert_eq!(error.http_headers(), Some(&test_headers()));
        assert_eq!(error.http_payload(), Some(&payload));
    }

    #[test]
    fn http_binary() {
        let payload = bytes::Bytes::from_static(&[0xFF, 0xFF]);
        let error = Error::http(503, HeaderMap::new(), payload.clone());
        assert!(
            error.to_string().contains(&format!("{payload:?}")),
            "{error}"
        );
    }

    #[test]
    fn io() {
        let error = Error::io("connection reset");
        assert!(error.is_transport(), "{error:?}");
        assert!(error.is_io(), "{error:?}");
        assert!(error.to_string().contains("connection reset"), "{error}");
        assert!(error.http_status_code().is_none(), "{error:?}");
        assert!(error.sdk_error().is_none(), "{error:?}");
    }
}
