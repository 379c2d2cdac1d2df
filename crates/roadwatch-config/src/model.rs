// SPDX-FileCopyrightText: 2026 Roadwatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model.
//!
//! Every section uses `#[serde(deny_unknown_fields)]` so typos fail at
//! startup instead of being ignored.

use roadwatch_core::ApiKeyRecord;
use serde::{Deserialize, Serialize};

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RoadwatchConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Seeded API keys. A `[[api_keys]]` array replaces the default list.
    #[serde(default = "default_api_keys")]
    pub api_keys: Vec<ApiKeyConfig>,
}

impl Default for RoadwatchConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            api_keys: default_api_keys(),
        }
    }
}

impl RoadwatchConfig {
    /// Credential seed records for the credential store.
    pub fn api_key_records(&self) -> Vec<ApiKeyRecord> {
        self.api_keys.iter().map(ApiKeyRecord::from).collect()
    }
}

fn default_api_keys() -> Vec<ApiKeyConfig> {
    vec![ApiKeyConfig {
        key: "test_key_12345".to_string(),
        user_id: 1,
        organisation: "Stadt Zürich - Test".to_string(),
    }]
}

/// Deployment environment. Reported by `/health` and used to gate the
/// debug endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Address to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind.
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub environment: Environment,

    /// Directory holding the web front-end; `/` serves its `index.html`.
    #[serde(default = "default_static_dir")]
    pub static_dir: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Serve `/api/debug/data`. Unset means enabled outside production.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug_endpoint: Option<bool>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            environment: Environment::default(),
            static_dir: default_static_dir(),
            log_level: default_log_level(),
            debug_endpoint: None,
        }
    }
}

impl ServerConfig {
    /// Whether the unauthenticated debug endpoint should be mounted.
    pub fn debug_endpoint_enabled(&self) -> bool {
        self.debug_endpoint
            .unwrap_or(!self.environment.is_production())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_static_dir() -> String {
    "static".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// One seeded API key.
#[derive(Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ApiKeyConfig {
    pub key: String,
    pub user_id: u64,
    pub organisation: String,
}

impl std::fmt::Debug for ApiKeyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeyConfig")
            .field("key", &"[redacted]")
            .field("user_id", &self.user_id)
            .field("organisation", &self.organisation)
            .finish()
    }
}

impl From<&ApiKeyConfig> for ApiKeyRecord {
    fn from(config: &ApiKeyConfig) -> Self {
        ApiKeyRecord {
            key: config.key.clone(),
            user_id: config.user_id,
            organisation: config.organisation.clone(),
        }
    }
}
