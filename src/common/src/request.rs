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

//! The request envelope.
//!
//! Every request record embeds a [BaseRequest]. The envelope carries the
//! values the transport needs to route and sign the request. None of these
//! values appear in the JSON body.

use crate::credentials::Credential;
use crate::message::Message;
use crate::options::{ClientConfig, Language};
use crate::response::ResponseParams;
use http::HeaderMap;

/// The transport metadata for a request.
///
/// The client libraries set the service, version and action. The region,
/// endpoint, language and credential default to the values in the client
/// [ClientConfig][crate::options::ClientConfig]. Applications can override
/// them for a single request.
///
/// # Example
/// ```
/// # use tencentcloud_common::request::BaseRequest;
/// let mut base = BaseRequest::default();
/// base.set_region("ap-singapore").set_endpoint("cvm.ap-singapore.tencentcloudapi.com");
/// assert_eq!(base.region(), Some("ap-singapore"));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BaseRequest {
    service: String,
    version: String,
    action: String,
    region: Option<String>,
    endpoint: Option<String>,
    language: Option<Language>,
    credential: Option<Credential>,
    headers: HeaderMap,
}

impl BaseRequest {
    /// Sets the service name, API version, and action.
    pub fn with_api_info<S, V, A>(&mut self, service: S, version: V, action: A) -> &mut Self
    where
        S: Into<String>,
        V: Into<String>,
        A: Into<String>,
    {
        self.service = service.into();
        self.version = version.into();
        self.action = action.into();
        self
    }

    /// Sets the region for this request only.
    pub fn set_region<V: Into<String>>(&mut self, v: V) -> &mut Self {
        self.region = Some(v.into());
        self
    }

    /// Sets the endpoint (a host name) for this request only.
    pub fn set_endpoint<V: Into<String>>(&mut self, v: V) -> &mut Self {
        self.endpoint = Some(v.into());
        self
    }

    /// Sets the language for this request only.
    pub fn set_language(&mut self, v: Language) -> &mut Self {
        self.language = Some(v);
        self
    }

    /// Sets the credential for this request only.
    pub fn set_credential(&mut self, v: Credential) -> &mut Self {
        self.credential = Some(v);
        self
    }

    /// Adds a header, sent with the request in addition to the headers
    /// created by the transport.
    pub fn insert_header(&mut self, name: http::HeaderName, value: http::HeaderValue) -> &mut Self {
        self.headers.insert(name, value);
        self
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Fills the values not set on this request from the client
    /// configuration. Values already set on the request are kept.
    #[doc(hidden)]
    pub fn merge_config(&mut self, config: &ClientConfig) -> &mut Self {
        if self.region.is_none() {
            self.region = config.region().map(str::to_string);
        }
        if self.credential.is_none() {
            self.credential = config.credential().cloned();
        }
        if self.language.is_none() {
            self.language = config.language();
        }
        if self.endpoint.is_none() {
            self.endpoint = Some(config.endpoint(&self.service));
        }
        self
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    pub fn language(&self) -> Option<Language> {
        self.language
    }

    pub fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }
}

/// Implemented by every request record.
///
/// Ties the request to the parameters in its response, and to the API
/// coordinates of the operation. Client libraries use these to populate the
/// [BaseRequest] before handing the request to the transport.
pub trait Operation: Message + Send + Sync {
    /// The parameters of the response, inside the `Response` wrapper.
    type Response: ResponseParams;

    /// The service name, for example `cvm`.
    const SERVICE: &'static str;
    /// The API version, for example `2017-03-12`.
    const VERSION: &'static str;
    /// The action name, for example `DescribeInstances`.
    const ACTION: &'static str;

    /// The envelope embedded in this request.
    fn base(&self) -> &BaseRequest;

    /// A mutable reference to the envelope embedded in this request.
    fn base_mut(&mut self) -> &mut BaseRequest;
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::{HeaderName, HeaderValue};

    #[test]
    fn defaults() {
        let base = BaseRequest::default();
        assert_eq!(base.service(), "");
        assert_eq!(base.version(), "");
        assert_eq!(base.action(), "");
        assert_eq!(base.region(), None);
        assert_eq!(base.endpoint(), None);
        assert_eq!(base.language(), None);
        assert_eq!(base.credential(), None);
        assert!(base.headers().is_empty());
    }

    #[test]
    fn with_api_info() {
        let mut base = BaseRequest::default();
        base.with_api_info("cvm", "2017-03-12", "DescribeInstances");
        assert_eq!(base.service(), "cvm");
        assert_eq!(base.version(), "2017-03-12");
        assert_eq!(base.action(), "DescribeInstances");
    }

    #[test]
    fn setters() {
        let credential = Credential::new("id", "key");
        let mut base = BaseRequest::default();
        base.set_region("ap-guangzhou")
            .set_endpoint("cvm.internal.example.com")
            .set_language(Language::EnUs)
            .set_credential(credential.clone())
            .insert_header(
                HeaderName::from_static("x-tc-traceid"),
                HeaderValue::from_static("abc"),
            );
        assert_eq!(base.region(), Some("ap-guangzhou"));
        assert_eq!(base.endpoint(), Some("cvm.internal.example.com"));
        assert_eq!(base.language(), Some(Language::EnUs));
        assert_eq!(base.credential(), Some(&credential));
        assert_eq!(
            base.headers().get("x-tc-traceid"),
            Some(&HeaderValue::from_static("abc"))
        );
    }

    #[test]
    fn merge_config_fills_unset() {
        let credential = Credential::new("id", "key");
        let config = ClientConfig::new()
            .set_region("ap-guangzhou")
            .set_language(Language::EnUs)
            .set_credential(credential.clone());
        let mut base = BaseRequest::default();
        base.with_api_info("cvm", "2017-03-12", "DescribeZones")
            .merge_config(&config);
        assert_eq!(base.region(), Some("ap-guangzhou"));
        assert_eq!(base.language(), Some(Language::EnUs));
        assert_eq!(base.credential(), Some(&credential));
        assert_eq!(base.endpoint(), Some("cvm.tencentcloudapi.com"));
    }

    #[test]
    fn merge_config_keeps_request_values() {
        let config = ClientConfig::new()
            .set_region("ap-guangzhou")
            .set_language(Language::EnUs)
            .set_credential(Credential::new("client-id", "client-key"))
            .set_endpoint("cvm.client.example.com");
        let credential = Credential::new("request-id", "request-key");
        let mut base = BaseRequest::default();
        base.set_region("ap-singapore")
            .set_language(Language::ZhCn)
            .set_credential(credential.clone())
            .set_endpoint("cvm.request.example.com")
            .merge_config(&config);
        assert_eq!(base.region(), Some("ap-singapore"));
        assert_eq!(base.language(), Some(Language::ZhCn));
        assert_eq!(base.credential(), Some(&credential));
        assert_eq!(base.endpoint(), Some("cvm.request.example.com"));
    }

    #[test]
    fn merge_config_empty() {
        let mut base = BaseRequest::default();
        base.with_api_info("cvm", "2017-03-12", "DescribeZones")
            .merge_config(&ClientConfig::new());
        assert_eq!(base.region(), None);
        assert_eq!(base.credential(), None);
        assert_eq!(base.endpoint(), Some("cvm.tencentcloudapi.com"));
    }
}
