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

//! Client configuration.
//!
//! Applications configure clients with a [ClientConfig]. The values are used
//! to populate the [BaseRequest][crate::request::BaseRequest] envelope of
//! each request, unless the request envelope already sets them.
//!
//! # Example
//! ```
//! # use tencentcloud_common::credentials::Credential;
//! # use tencentcloud_common::options::{ClientConfig, Language};
//! let config = ClientConfig::new()
//!     .set_region("ap-guangzhou")
//!     .set_language(Language::EnUs)
//!     .set_credential(Credential::new("AKIDexample", "secret"));
//! assert_eq!(config.region(), Some("ap-guangzhou"));
//! ```

use crate::credentials::{Credential, CredentialsError};

/// The environment variable holding the default region.
pub const REGION_ENV: &str = "TENCENTCLOUD_REGION";

/// The domain suffix for the default service endpoints.
pub const DEFAULT_ENDPOINT_SUFFIX: &str = "tencentcloudapi.com";

/// The language for the human-readable messages returned by the service.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Language {
    /// Simplified Chinese, the service default.
    ZhCn,
    /// English (United States).
    EnUs,
}

impl Language {
    /// The value sent to the service.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ZhCn => "zh-CN",
            Self::EnUs => "en-US",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configure a client.
///
/// A client library uses this configuration for every request it makes.
/// Fields not set here use the service defaults.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClientConfig {
    region: Option<String>,
    credential: Option<Credential>,
    language: Option<Language>,
    endpoint: Option<String>,
}

impl ClientConfig {
    /// Creates a new, empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration from the `TENCENTCLOUD_*` environment variables.
    ///
    /// The credential variables are required, the region is optional.
    pub fn from_env() -> Result<Self, CredentialsError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, CredentialsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let credential = Credential::from_lookup(&lookup)?;
        let config = Self::new().set_credential(credential);
        Ok(match lookup(REGION_ENV).filter(|v| !v.is_empty()) {
            Some(region) => config.set_region(region),
            None => config,
        })
    }

    /// Sets the default region for requests.
    pub fn set_region<V: Into<String>>(mut self, v: V) -> Self {
        self.region = Some(v.into());
        self
    }

    /// Sets the credential used to sign requests.
    pub fn set_credential(mut self, v: Credential) -> Self {
        self.credential = Some(v);
        self
    }

    /// Sets the language for service messages.
    pub fn set_language(mut self, v: Language) -> Self {
        self.language = Some(v);
        self
    }

    /// Overrides the default endpoint.
    ///
    /// The default endpoint is `<service>.tencentcloudapi.com`, for example
    /// `cvm.tencentcloudapi.com`. Use this to target a regional endpoint, e.g.
    /// `cvm.ap-guangzhou.tencentcloudapi.com`.
    pub fn set_endpoint<V: Into<String>>(mut self, v: V) -> Self {
        self.endpoint = Some(v.into());
        self
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    pub fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }

    pub fn language(&self) -> Option<Language> {
        self.language
    }

    /// The endpoint for `service`, using the override if set.
    pub fn endpoint(&self, service: &str) -> String {
        self.endpoint
            .clone()
            .unwrap_or_else(|| format!("{service}.{DEFAULT_ENDPOINT_SUFFIX}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::{SECRET_ID_ENV, SECRET_KEY_ENV};
    use test_case::test_case;

    #[test_case(Language::ZhCn, "zh-CN")]
    #[test_case(Language::EnUs, "en-US")]
    fn language(input: Language, want: &str) {
        assert_eq!(input.as_str(), want);
        assert_eq!(input.to_string(), want);
    }

    #[test]
    fn defaults() {
        let config = ClientConfig::new();
        assert!(config.region().is_none(), "{config:?}");
        assert!(config.credential().is_none(), "{config:?}");
        assert!(config.language().is_none(), "{config:?}");
        assert_eq!(config.endpoint("cvm"), "cvm.tencentcloudapi.com");
    }

    #[test]
    fn setters() {
        let config = ClientConfig::new()
            .set_region("ap-shanghai")
            .set_language(Language::EnUs)
            .set_credential(Credential::new("id", "key"))
            .set_endpoint("cvm.ap-shanghai.tencentcloudapi.com");
        assert_eq!(config.region(), Some("ap-shanghai"));
        assert_eq!(config.language(), Some(Language::EnUs));
        assert_eq!(config.credential(), Some(&Credential::new("id", "key")));
        assert_eq!(config.endpoint("cvm"), "cvm.ap-shanghai.tencentcloudapi.com");
    }

    #[test]
    fn from_lookup() -> anyhow::Result<()> {
        let lookup = |name: &str| match name {
            SECRET_ID_ENV => Some("AKIDtest".to_string()),
            SECRET_KEY_ENV => Some("test-key".to_string()),
            REGION_ENV => Some("ap-beijing".to_string()),
            _ => None,
        };
        let config = ClientConfig::from_lookup(lookup)?;
        assert_eq!(config.region(), Some("ap-beijing"));
        assert_eq!(
            config.credential(),
            Some(&Credential::new("AKIDtest", "test-key"))
        );
        Ok(())
    }

    #[test]
    fn from_lookup_without_region() -> anyhow::Result<()> {
        let lookup = |name: &str| match name {
            SECRET_ID_ENV => Some("AKIDtest".to_string()),
            SECRET_KEY_ENV => Some("test-key".to_string()),
            _ => None,
        };
        let config = ClientConfig::from_lookup(lookup)?;
        assert!(config.region().is_none(), "{config:?}");
        Ok(())
    }

    #[test]
    fn from_lookup_missing_credentials() {
        let got = ClientConfig::from_lookup(|_| None);
        assert_eq!(got, Err(CredentialsError::MissingVariable(SECRET_ID_ENV)));
    }
}
