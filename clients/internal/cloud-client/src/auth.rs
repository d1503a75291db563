// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Authentication support for API requests
//!
//! The API accepts either a bearer token or HTTP basic credentials. An
//! optional contract number selects the contract when the user has access
//! to more than one.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::header::{AUTHORIZATION, HeaderName, HeaderValue};
use secrecy::{ExposeSecret, SecretString};

use crate::Error;

/// Header carrying the contract number
pub const CONTRACT_HEADER: HeaderName = HeaderName::from_static("x-contract-number");

/// How requests are authenticated
#[derive(Debug)]
pub enum Credentials {
    /// `Authorization: Bearer <token>`
    Token(SecretString),
    /// `Authorization: Basic <base64(user:password)>`
    Basic {
        username: String,
        password: SecretString,
    },
}

/// Authentication configuration
#[derive(Debug)]
pub struct AuthConfig {
    pub credentials: Credentials,
    pub contract: Option<String>,
}

impl AuthConfig {
    pub fn token(token: impl Into<String>) -> Self {
        Self {
            credentials: Credentials::Token(SecretString::from(token.into())),
            contract: None,
        }
    }

    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            credentials: Credentials::Basic {
                username: username.into(),
                password: SecretString::from(password.into()),
            },
            contract: None,
        }
    }

    /// Scope requests to a contract number
    pub fn with_contract(mut self, contract: impl Into<String>) -> Self {
        self.contract = Some(contract.into());
        self
    }

    /// Login name, when basic credentials are in use
    pub fn username(&self) -> Option<&str> {
        match &self.credentials {
            Credentials::Basic { username, .. } => Some(username),
            Credentials::Token(_) => None,
        }
    }

    fn authorization(&self) -> String {
        match &self.credentials {
            Credentials::Token(token) => format!("Bearer {}", token.expose_secret()),
            Credentials::Basic { username, password } => {
                let raw = format!("{}:{}", username, password.expose_secret());
                format!("Basic {}", STANDARD.encode(raw))
            }
        }
    }
}

/// Add authentication headers to a request
///
/// Called on every request right before it is executed.
pub fn add_auth_headers(auth_config: &AuthConfig, request: &mut reqwest::Request) -> Result<(), Error> {
    let mut value = HeaderValue::from_str(&auth_config.authorization())?;
    value.set_sensitive(true);

    let headers = request.headers_mut();
    headers.insert(AUTHORIZATION, value);

    if let Some(contract) = &auth_config.contract {
        headers.insert(CONTRACT_HEADER, HeaderValue::from_str(contract)?);
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn request() -> reqwest::Request {
        reqwest::Request::new(
            reqwest::Method::GET,
            "https://api.example.com/cloudapi/v6/images".parse().unwrap(),
        )
    }

    #[test]
    fn test_basic_header() {
        let mut req = request();
        add_auth_headers(&AuthConfig::basic("user", "pass"), &mut req).unwrap();
        // base64("user:pass")
        assert_eq!(req.headers()[AUTHORIZATION], "Basic dXNlcjpwYXNz");
        assert!(req.headers().get(CONTRACT_HEADER).is_none());
    }

    #[test]
    fn test_token_header_with_contract() {
        let mut req = request();
        let auth = AuthConfig::token("abc.def").with_contract("31415");
        add_auth_headers(&auth, &mut req).unwrap();
        assert_eq!(req.headers()[AUTHORIZATION], "Bearer abc.def");
        assert_eq!(req.headers()[CONTRACT_HEADER], "31415");
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let auth = AuthConfig::basic("user", "hunter2");
        let dbg = format!("{:?}", auth);
        assert!(dbg.contains("user"));
        assert!(!dbg.contains("hunter2"));
    }
}
