// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Configuration management

pub mod paths;
pub mod settings;

pub use paths::config_file;
pub use settings::Config;

use cloud_client::{AuthConfig, DEFAULT_API_URL};

use crate::error::CliError;

/// Values given on the command line or through `CLOUDCTL_*` variables
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub api_url: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub token: Option<String>,
    pub contract: Option<String>,
}

/// Everything needed to build an API client
#[derive(Debug)]
pub struct Connection {
    pub api_url: String,
    pub auth: AuthConfig,
}

/// Resolve the API endpoint and credentials
///
/// Each value comes from the first of: command line / environment, config
/// file, built-in default. A token wins over username and password.
pub fn resolve(overrides: &Overrides, config: &Config) -> Result<Connection, CliError> {
    fn pick(a: &Option<String>, b: &Option<String>) -> Option<String> {
        a.iter()
            .chain(b.iter())
            .find(|v| !v.trim().is_empty())
            .cloned()
    }

    let api_url =
        pick(&overrides.api_url, &config.api_url).unwrap_or_else(|| DEFAULT_API_URL.to_string());

    let auth = match pick(&overrides.token, &config.token) {
        Some(token) => AuthConfig::token(token),
        None => {
            let username = pick(&overrides.username, &config.username);
            let password = pick(&overrides.password, &config.password);
            match (username, password) {
                (Some(username), Some(password)) => AuthConfig::basic(username, password),
                _ => return Err(CliError::MissingCredentials),
            }
        }
    };

    let auth = match pick(&overrides.contract, &config.contract) {
        Some(contract) => auth.with_contract(contract),
        None => auth,
    };

    Ok(Connection { api_url, auth })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use cloud_client::Credentials;

    fn stored() -> Config {
        Config {
            username: Some("stored-user".to_string()),
            password: Some("stored-pass".to_string()),
            api_url: Some("https://stored.example.com/v6".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults_api_url() {
        let overrides = Overrides {
            token: Some("tok".to_string()),
            ..Default::default()
        };
        let conn = resolve(&overrides, &Config::default()).unwrap();
        assert_eq!(conn.api_url, DEFAULT_API_URL);
        assert!(matches!(conn.auth.credentials, Credentials::Token(_)));
    }

    #[test]
    fn test_config_file_fills_gaps() {
        let conn = resolve(&Overrides::default(), &stored()).unwrap();
        assert_eq!(conn.api_url, "https://stored.example.com/v6");
        assert_eq!(conn.auth.username(), Some("stored-user"));
        assert!(conn.auth.contract.is_none());
    }

    #[test]
    fn test_overrides_win_over_config_file() {
        let overrides = Overrides {
            api_url: Some("http://127.0.0.1:9000".to_string()),
            username: Some("flag-user".to_string()),
            contract: Some("31721385".to_string()),
            ..Default::default()
        };
        let conn = resolve(&overrides, &stored()).unwrap();
        assert_eq!(conn.api_url, "http://127.0.0.1:9000");
        assert_eq!(conn.auth.username(), Some("flag-user"));
        assert_eq!(conn.auth.contract.as_deref(), Some("31721385"));
    }

    #[test]
    fn test_token_wins_over_basic() {
        let overrides = Overrides {
            token: Some("tok".to_string()),
            ..Default::default()
        };
        let conn = resolve(&overrides, &stored()).unwrap();
        assert!(conn.auth.username().is_none());
    }

    #[test]
    fn test_missing_credentials() {
        let overrides = Overrides {
            username: Some("only-user".to_string()),
            ..Default::default()
        };
        let err = resolve(&overrides, &Config::default()).unwrap_err();
        assert!(matches!(err, CliError::MissingCredentials));
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let overrides = Overrides {
            token: Some("  ".to_string()),
            ..Default::default()
        };
        let conn = resolve(&overrides, &stored()).unwrap();
        assert_eq!(conn.auth.username(), Some("stored-user"));
    }
}
