// SPDX-FileCopyrightText: 2026 Roadwatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Figment-based configuration loading.
//!
//! File hierarchy, later overriding earlier:
//! `/etc/roadwatch/roadwatch.toml`, `~/.config/roadwatch/roadwatch.toml`,
//! `./roadwatch.toml`. `ROADWATCH_SERVER_PORT` overrides the port from all files.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::RoadwatchConfig;

const SYSTEM_CONFIG: &str = "/etc/roadwatch/roadwatch.toml";
const LOCAL_CONFIG: &str = "roadwatch.toml";

/// Config files consulted by [`load_config`], lowest priority first.
/// Missing files are skipped.
pub fn config_file_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(SYSTEM_CONFIG)];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("roadwatch").join(LOCAL_CONFIG));
    }
    paths.push(PathBuf::from(LOCAL_CONFIG));
    paths
}

/// Build the Figment for the standard hierarchy without extracting it.
pub fn build_figment() -> Figment {
    let figment = config_file_paths()
        .into_iter()
        .fold(defaults(), |figment, path| figment.merge(Toml::file(path)));
    figment.merge(env_provider())
}

/// Load configuration from the file hierarchy with env overrides.
pub fn load_config() -> Result<RoadwatchConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from one file with env overrides, skipping the hierarchy.
pub fn load_config_from_path(path: &Path) -> Result<RoadwatchConfig, figment::Error> {
    defaults()
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only. No files, no env.
pub fn load_config_from_str(toml_content: &str) -> Result<RoadwatchConfig, figment::Error> {
    defaults().merge(Toml::string(toml_content)).extract()
}

fn defaults() -> Figment {
    Figment::new().merge(Serialized::defaults(RoadwatchConfig::default()))
}

/// Keys the environment may override, after the `ROADWATCH_` prefix.
///
/// Only the listening port. Everything else, including `environment` and
/// `debug_endpoint`, comes from files.
const ENV_OVERRIDABLE: &[&str] = &["server_port"];

/// `ROADWATCH_SERVER_PORT` maps to `server.port`; other `ROADWATCH_*`
/// variables are ignored.
fn env_provider() -> Env {
    Env::prefixed("ROADWATCH_")
        .filter(|key| {
            ENV_OVERRIDABLE
                .iter()
                .any(|allowed| key.as_str().eq_ignore_ascii_case(allowed))
        })
        .map(|key| key.as_str().to_ascii_lowercase().replacen("server_", "server.", 1).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hierarchy_ends_with_local_file() {
        let paths = config_file_paths();
        assert_eq!(paths.first(), Some(&PathBuf::from(SYSTEM_CONFIG)));
        assert_eq!(paths.last(), Some(&PathBuf::from(LOCAL_CONFIG)));
    }

    #[test]
    fn env_overrides_server_port() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("ROADWATCH_SERVER_PORT", "8080");
            let config = load_config()?;
            assert_eq!(config.server.port, 8080);
            Ok(())
        });
    }

    #[test]
    fn env_cannot_override_other_server_keys() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("roadwatch.toml", "[server]\nenvironment = \"production\"\n")?;
            jail.set_env("ROADWATCH_SERVER_ENVIRONMENT", "development");
            jail.set_env("ROADWATCH_SERVER_DEBUG_ENDPOINT", "true");
            jail.set_env("ROADWATCH_SERVER_STATIC_DIR", "/srv/www");
            jail.set_env("ROADWATCH_SERVER_HOST", "127.0.0.1");
            let config = load_config()?;
            assert!(config.server.environment.is_production());
            assert_eq!(config.server.debug_endpoint, None);
            assert_eq!(config.server.static_dir, "static");
            assert_eq!(config.server.host, "0.0.0.0");
            Ok(())
        });
    }

    #[test]
    fn local_file_is_picked_up() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "roadwatch.toml",
                r#"
[server]
port = 7000
environment = "staging"
"#,
            )?;
            let config = load_config()?;
            assert_eq!(config.server.port, 7000);
            assert_eq!(config.server.environment.as_str(), "staging");
            Ok(())
        });
    }

    #[test]
    fn explicit_path_still_honours_env() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("custom.toml", "[server]\nport = 6000\nhost = \"127.0.0.1\"\n")?;
            jail.set_env("ROADWATCH_SERVER_PORT", "6001");
            let config = load_config_from_path(Path::new("custom.toml"))?;
            assert_eq!(config.server.port, 6001);
            assert_eq!(config.server.host, "127.0.0.1");
            Ok(())
        });
    }
}
