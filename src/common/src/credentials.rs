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

//! Credentials used to sign requests.
//!
//! The client libraries carry credentials in the request envelope, the
//! [Transport][crate::transport::Transport] uses them to sign each request.
//! Credentials are never included in the request body.

/// The environment variable holding the secret id.
pub const SECRET_ID_ENV: &str = "TENCENTCLOUD_SECRET_ID";
/// The environment variable holding the secret key.
pub const SECRET_KEY_ENV: &str = "TENCENTCLOUD_SECRET_KEY";
/// The environment variable holding the (optional) session token.
pub const SESSION_TOKEN_ENV: &str = "TENCENTCLOUD_SESSION_TOKEN";

/// Represents an error loading credentials.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum CredentialsError {
    /// A required environment variable is not set, or is empty.
    #[error("the `{0}` environment variable is not set")]
    MissingVariable(&'static str),
}

/// A secret id and key pair, and an optional session token.
///
/// The `Debug` format redacts the secret key and the session token.
///
/// # Example
/// ```
/// # use tencentcloud_common::credentials::Credential;
/// let credential = Credential::new("AKIDexample", "secret").set_token("session-token");
/// assert_eq!(credential.secret_id(), "AKIDexample");
/// assert!(format!("{credential:?}").contains("[censored]"));
/// ```
#[derive(Clone, Default, PartialEq)]
pub struct Credential {
    secret_id: String,
    secret_key: String,
    token: Option<String>,
}

impl Credential {
    /// Creates a new credential from a secret id and key.
    pub fn new<I: Into<String>, K: Into<String>>(secret_id: I, secret_key: K) -> Self {
        Self {
            secret_id: secret_id.into(),
            secret_key: secret_key.into(),
            token: None,
        }
    }

    /// Sets the session token, used with temporary credentials.
    pub fn set_token<T: Into<String>>(mut self, v: T) -> Self {
        self.token = Some(v.into());
        self
    }

    /// Loads the credential from the `TENCENTCLOUD_*` environment variables.
    pub fn from_env() -> Result<Self, CredentialsError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, CredentialsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let fetch = |name: &'static str| {
            lookup(name)
                .filter(|v| !v.is_empty())
                .ok_or(CredentialsError::MissingVariable(name))
        };
        let credential = Self::new(fetch(SECRET_ID_ENV)?, fetch(SECRET_KEY_ENV)?);
        Ok(match lookup(SESSION_TOKEN_ENV).filter(|v| !v.is_empty()) {
            Some(token) => credential.set_token(token),
            None => credential,
        })
    }

    pub fn secret_id(&self) -> &str {
        &self.secret_id
    }

    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("secret_id", &self.secret_id)
            .field("secret_key", &"[censored]")
            .field("token", &self.token.as_ref().map(|_| "[censored]"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<_, _> = vars.iter().cloned().collect();
        move |name: &str| vars.get(name).map(|v| v.to_string())
    }

    #[test]
    fn from_lookup() -> anyhow::Result<()> {
        let got = Credential::from_lookup(lookup(&[
            (SECRET_ID_ENV, "AKIDtest"),
            (SECRET_KEY_ENV, "test-key"),
        ]))?;
        assert_eq!(got, Credential::new("AKIDtest", "test-key"));
        assert!(got.token().is_none(), "{got:?}");
        Ok(())
    }

    #[test]
    fn from_lookup_with_token() -> anyhow::Result<()> {
        let got = Credential::from_lookup(lookup(&[
            (SECRET_ID_ENV, "AKIDtest"),
            (SECRET_KEY_ENV, "test-key"),
            (SESSION_TOKEN_ENV, "test-token"),
        ]))?;
        assert_eq!(got.token(), Some("test-token"));
        Ok(())
    }

    #[test]
    fn from_lookup_missing() {
        let got = Credential::from_lookup(lookup(&[(SECRET_ID_ENV, "AKIDtest")]));
        assert_eq!(got, Err(CredentialsError::MissingVariable(SECRET_KEY_ENV)));

        let got = Credential::from_lookup(lookup(&[
            (SECRET_ID_ENV, ""),
            (SECRET_KEY_ENV, "test-key"),
        ]));
        assert_eq!(got, Err(CredentialsError::MissingVariable(SECRET_ID_ENV)));
    }

    #[test]
    fn debug_redacts_secrets() {
        let credential = Credential::new("AKIDtest", "super-secret").set_token("tok-secret");
        let got = format!("{credential:?}");
        assert!(got.contains("AKIDtest"), "{got}");
        assert!(!got.contains("super-secret"), "{got}");
        assert!(!got.contains("tok-secret"), "{got}");
    }
}
