// SPDX-FileCopyrightText: 2026 Roadwatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Semantic checks that serde attributes cannot express.

use std::collections::HashSet;

use crate::diagnostic::ConfigError;
use crate::model::RoadwatchConfig;

/// Validate a deserialized configuration.
///
/// Collects every failure instead of stopping at the first one.
pub fn validate_config(config: &RoadwatchConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let host = config.server.host.trim();
    if host.is_empty() {
        errors.push(validation("server.host must not be empty"));
    } else {
        let is_ip = host.parse::<std::net::IpAddr>().is_ok();
        let is_hostname = host
            .chars()
            .all(|c| c.is_alphanumeric() || c == '.' || c == '-' || c == ':');
        if !is_ip && !is_hostname {
            errors.push(validation(format!(
                "server.host `{host}` is not a valid IP address or hostname"
            )));
        }
    }

    if config.server.static_dir.trim().is_empty() {
        errors.push(validation("server.static_dir must not be empty"));
    }

    if config.server.environment.is_production() && config.server.debug_endpoint == Some(true) {
        errors.push(validation(
            "server.debug_endpoint exposes every report and API key without authentication \
             and cannot be enabled in production",
        ));
    }

    if config.api_keys.is_empty() {
        errors.push(validation(
            "at least one [[api_keys]] entry is required; every data endpoint needs a key",
        ));
    }

    let mut seen = HashSet::new();
    for (i, entry) in config.api_keys.iter().enumerate() {
        if entry.key.trim().is_empty() {
            errors.push(validation(format!("api_keys[{i}].key must not be empty")));
        } else if !seen.insert(entry.key.as_str()) {
            errors.push(validation(format!(
                "api_keys[{i}].key duplicates an earlier entry"
            )));
        }
        if entry.organisation.trim().is_empty() {
            errors.push(validation(format!(
                "api_keys[{i}].organisation must not be empty"
            )));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validation(message: impl Into<String>) -> ConfigError {
    ConfigError::Validation {
        message: message.into(),
    }
}
