//! Client configuration, loadable from `ORDER_DESK_*` environment variables.
//!
//! | Variable                          | Field                              |
//! |-----------------------------------|------------------------------------|
//! | `ORDER_DESK_ROLE`                 | `role` (`admin` / `member`)        |
//! | `ORDER_DESK_API_URL`              | `base_url`                         |
//! | `ORDER_DESK_TRANSPORT`            | `transport` (`live` / `fixture`)   |
//! | `ORDER_DESK_STORAGE`              | `storage` (`memory` / `file` / `web`) |
//! | `ORDER_DESK_SESSION_FILE`         | path for `file` storage            |
//! | `ORDER_DESK_TIMEOUT_SECS`         | `timeout_secs`                     |
//! | `ORDER_DESK_CLEAR_ALL_ON_LOGOUT`  | `clear_all_namespaces_on_logout`   |
//! | `ORDER_DESK_FIXTURE_LATENCY_MS`   | `fixture_latency_ms`               |

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::SdkError;
use crate::shared::Role;

const ENV_ROLE: &str = "ORDER_DESK_ROLE";
const ENV_API_URL: &str = "ORDER_DESK_API_URL";
const ENV_TRANSPORT: &str = "ORDER_DESK_TRANSPORT";
const ENV_STORAGE: &str = "ORDER_DESK_STORAGE";
const ENV_SESSION_FILE: &str = "ORDER_DESK_SESSION_FILE";
const ENV_TIMEOUT_SECS: &str = "ORDER_DESK_TIMEOUT_SECS";
const ENV_CLEAR_ALL: &str = "ORDER_DESK_CLEAR_ALL_ON_LOGOUT";
const ENV_FIXTURE_LATENCY: &str = "ORDER_DESK_FIXTURE_LATENCY_MS";

/// Default session file when `file` storage is selected without a path.
pub const DEFAULT_SESSION_FILE: &str = ".order-desk-session.json";

/// Where responses come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    /// Real HTTP through reqwest.
    #[default]
    Live,
    /// Canned data from [`FixtureTransport`](crate::mock::FixtureTransport).
    Fixture,
}

impl FromStr for TransportMode {
    type Err = SdkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "live" => Ok(Self::Live),
            "fixture" | "mock" => Ok(Self::Fixture),
            other => Err(SdkError::Config(format!("unknown transport: {}", other))),
        }
    }
}

/// Where the session is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum StorageConfig {
    /// In-process only; gone when the client is dropped.
    #[default]
    Memory,
    /// JSON file on disk, survives restarts.
    File { path: PathBuf },
    /// Browser `localStorage` (`wasm` feature).
    Web,
}

/// Everything needed to build an [`OrderDeskClient`](crate::client::OrderDeskClient).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Session namespace restored at construction.
    pub role: Role,
    /// Explicit API root. When unset, resolved from the page location.
    pub base_url: Option<String>,
    pub transport: TransportMode,
    pub storage: StorageConfig,
    /// Request timeout. Unset means no timeout.
    pub timeout_secs: Option<u64>,
    /// Logout also clears the other role's keys.
    pub clear_all_namespaces_on_logout: bool,
    /// Simulated latency for the fixture transport.
    pub fixture_latency_ms: Option<u64>,
}

impl ClientConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, SdkError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load `.env` (if present) into the environment, then [`from_env`](Self::from_env).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_dotenv() -> Result<Self, SdkError> {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
            Err(e) if e.not_found() => {}
            Err(e) => return Err(SdkError::Config(format!("failed to load .env: {}", e))),
        }
        Self::from_env()
    }

    /// Build from an arbitrary variable lookup. Unset and empty variables
    /// keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SdkError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(role) = var(ENV_ROLE) {
            config.role = role.parse().map_err(SdkError::Config)?;
        }
        config.base_url = var(ENV_API_URL);
        if let Some(transport) = var(ENV_TRANSPORT) {
            config.transport = transport.parse()?;
        }

        let session_file = var(ENV_SESSION_FILE);
        config.storage = match var(ENV_STORAGE).as_deref().map(str::trim) {
            None if session_file.is_some() => StorageConfig::File {
                path: session_file.map(PathBuf::from).unwrap_or_default(),
            },
            None | Some("memory") => StorageConfig::Memory,
            Some("file") => StorageConfig::File {
                path: PathBuf::from(session_file.as_deref().unwrap_or(DEFAULT_SESSION_FILE)),
            },
            Some("web") => StorageConfig::Web,
            Some(other) => {
                return Err(SdkError::Config(format!("unknown storage: {}", other)));
            }
        };

        config.timeout_secs = var(ENV_TIMEOUT_SECS)
            .map(|v| parse_number(ENV_TIMEOUT_SECS, &v))
            .transpose()?;
        config.fixture_latency_ms = var(ENV_FIXTURE_LATENCY)
            .map(|v| parse_number(ENV_FIXTURE_LATENCY, &v))
            .transpose()?;
        if let Some(flag) = var(ENV_CLEAR_ALL) {
            config.clear_all_namespaces_on_logout = parse_flag(ENV_CLEAR_ALL, &flag)?;
        }

        Ok(config)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    pub fn fixture_latency(&self) -> Option<Duration> {
        self.fixture_latency_ms.map(Duration::from_millis)
    }
}

fn parse_number(key: &str, value: &str) -> Result<u64, SdkError> {
    value
        .trim()
        .parse()
        .map_err(|_| SdkError::Config(format!("{} must be a non-negative integer, got {:?}", key, value)))
}

fn parse_flag(key: &str, value: &str) -> Result<bool, SdkError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(SdkError::Config(format!("{} must be a boolean, got {:?}", key, value))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let config = ClientConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.role, Role::Member);
        assert_eq!(config.transport, TransportMode::Live);
        assert_eq!(config.storage, StorageConfig::Memory);
        assert!(config.timeout().is_none());
        assert!(!config.clear_all_namespaces_on_logout);
    }

    #[test]
    fn reads_every_variable() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("ORDER_DESK_ROLE", "admin"),
            ("ORDER_DESK_API_URL", "https://desk.example.com/api/v1"),
            ("ORDER_DESK_TRANSPORT", "fixture"),
            ("ORDER_DESK_STORAGE", "file"),
            ("ORDER_DESK_SESSION_FILE", "/tmp/desk.json"),
            ("ORDER_DESK_TIMEOUT_SECS", "30"),
            ("ORDER_DESK_CLEAR_ALL_ON_LOGOUT", "true"),
            ("ORDER_DESK_FIXTURE_LATENCY_MS", "250"),
        ]))
        .unwrap();

        assert_eq!(config.role, Role::Admin);
        assert_eq!(config.base_url.as_deref(), Some("https://desk.example.com/api/v1"));
        assert_eq!(config.transport, TransportMode::Fixture);
        assert_eq!(
            config.storage,
            StorageConfig::File {
                path: PathBuf::from("/tmp/desk.json")
            }
        );
        assert_eq!(config.timeout(), Some(Duration::from_secs(30)));
        assert!(config.clear_all_namespaces_on_logout);
        assert_eq!(config.fixture_latency(), Some(Duration::from_millis(250)));
    }

    #[test]
    fn session_file_alone_selects_file_storage() {
        let config =
            ClientConfig::from_lookup(lookup(&[("ORDER_DESK_SESSION_FILE", "s.json")])).unwrap();
        assert_eq!(
            config.storage,
            StorageConfig::File {
                path: PathBuf::from("s.json")
            }
        );
    }

    #[test]
    fn blank_values_are_ignored() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("ORDER_DESK_API_URL", "  "),
            ("ORDER_DESK_TIMEOUT_SECS", ""),
        ]))
        .unwrap();
        assert!(config.base_url.is_none());
        assert!(config.timeout_secs.is_none());
    }

    #[test]
    fn bad_values_are_config_errors() {
        for vars in [
            [("ORDER_DESK_ROLE", "root")],
            [("ORDER_DESK_TRANSPORT", "carrier-pigeon")],
            [("ORDER_DESK_STORAGE", "cloud")],
            [("ORDER_DESK_TIMEOUT_SECS", "-1")],
            [("ORDER_DESK_CLEAR_ALL_ON_LOGOUT", "maybe")],
        ] {
            let err = ClientConfig::from_lookup(lookup(&vars)).unwrap_err();
            assert!(matches!(err, SdkError::Config(_)), "{:?}", vars);
        }
    }

    #[test]
    fn deserializes_from_json() {
        let config: ClientConfig = serde_json::from_str(
            r#"{"role":"admin","transport":"fixture","storage":{"kind":"file","path":"x.json"}}"#,
        )
        .unwrap();
        assert_eq!(config.role, Role::Admin);
        assert_eq!(config.transport, TransportMode::Fixture);
        assert_eq!(
            config.storage,
            StorageConfig::File {
                path: PathBuf::from("x.json")
            }
        );
        assert!(config.base_url.is_none());
    }
}
