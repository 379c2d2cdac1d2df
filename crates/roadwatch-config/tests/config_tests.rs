// SPDX-FileCopyrightText: 2026 Roadwatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for configuration loading and diagnostics.

use roadwatch_config::diagnostic::ConfigError;
use roadwatch_config::model::{Environment, RoadwatchConfig};
use std::path::Path;

use roadwatch_config::{load_and_validate_path, load_and_validate_str, load_config_from_str};

/// A fully populated file deserializes field by field.
#[test]
fn full_toml_deserializes() {
    let toml = r#"
[server]
host = "127.0.0.1"
port = 8081
environment = "staging"
static_dir = "/srv/roadwatch"
log_level = "debug"
debug_endpoint = false

[[api_keys]]
key = "bern_key"
user_id = 7
organisation = "Stadt Bern"

[[api_keys]]
key = "basel_key"
user_id = 8
organisation = "Kanton Basel-Stadt"
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 8081);
    assert_eq!(config.server.environment, Environment::Staging);
    assert_eq!(config.server.static_dir, "/srv/roadwatch");
    assert_eq!(config.server.log_level, "debug");
    assert_eq!(config.server.debug_endpoint, Some(false));
    assert_eq!(config.api_keys.len(), 2);
    assert_eq!(config.api_keys[0].key, "bern_key");
    assert_eq!(config.api_keys[1].organisation, "Kanton Basel-Stadt");
}

/// An empty file yields the compiled defaults, including the test key.
#[test]
fn empty_toml_uses_defaults() {
    let config = load_config_from_str("").expect("empty TOML should use defaults");
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 5000);
    assert_eq!(config.server.environment, Environment::Development);
    assert_eq!(config.server.static_dir, "static");
    assert!(config.server.debug_endpoint.is_none());
    assert!(config.server.debug_endpoint_enabled());
    assert_eq!(config.api_keys.len(), 1);
    assert_eq!(config.api_keys[0].key, "test_key_12345");
    assert_eq!(config.api_keys[0].organisation, "Stadt Zürich - Test");
}

/// An `[[api_keys]]` array replaces the default seed rather than extending it.
#[test]
fn api_keys_array_replaces_default() {
    let toml = r#"
[[api_keys]]
key = "only_key"
user_id = 2
organisation = "Gemeinde Thun"
"#;
    let config = load_config_from_str(toml).unwrap();
    assert_eq!(config.api_keys.len(), 1);
    assert_eq!(config.api_keys[0].key, "only_key");
}

/// Dotted overrides, as the env provider produces them, win over TOML.
#[test]
fn dotted_override_wins_over_toml() {
    use figment::{
        providers::{Format, Serialized, Toml},
        Figment,
    };

    let config: RoadwatchConfig = Figment::new()
        .merge(Serialized::defaults(RoadwatchConfig::default()))
        .merge(Toml::string("[server]\nport = 6000\n"))
        .merge(("server.port", 9000))
        .extract()
        .expect("should merge override");
    assert_eq!(config.server.port, 9000);
}

#[test]
fn unknown_top_level_section_is_rejected() {
    let err = load_config_from_str("[database]\nurl = \"x\"\n")
        .expect_err("unknown section should be rejected");
    let err_str = err.to_string();
    assert!(
        err_str.contains("unknown field") || err_str.contains("database"),
        "error should mention unknown field, got: {err_str}"
    );
}

#[test]
fn unknown_key_gets_suggestion_and_valid_keys() {
    let errors = load_and_validate_str("[server]\nprot = 8080\n").expect_err("should fail");
    let found = errors.iter().any(|e| {
        matches!(e, ConfigError::UnknownKey { key, suggestion, valid_keys, .. } if {
            key == "prot"
                && suggestion.as_deref() == Some("port")
                && valid_keys.contains("static_dir")
        })
    });
    assert!(found, "expected UnknownKey for `prot`, got: {errors:?}");
}

#[test]
fn unknown_environment_gets_suggestion() {
    let errors =
        load_and_validate_str("[server]\nenvironment = \"prodution\"\n").expect_err("should fail");
    let found = errors.iter().any(|e| {
        matches!(e, ConfigError::UnknownValue { value, suggestion, .. } if {
            value == "prodution" && suggestion.as_deref() == Some("production")
        })
    });
    assert!(found, "expected UnknownValue for environment, got: {errors:?}");
}

#[test]
fn wrong_type_is_reported() {
    let err = load_config_from_str("[server]\nport = \"eighty\"\n").expect_err("should fail");
    let err_str = err.to_string();
    assert!(
        err_str.contains("invalid type") || err_str.contains("port"),
        "error should mention type mismatch, got: {err_str}"
    );
}

#[test]
fn missing_api_key_field_is_reported() {
    let toml = r#"
[[api_keys]]
key = "k"
organisation = "Gemeinde Thun"
"#;
    let errors = load_and_validate_str(toml).expect_err("should fail");
    assert!(
        errors
            .iter()
            .any(|e| matches!(e, ConfigError::MissingKey { key } if key == "user_id")),
        "expected MissingKey for user_id, got: {errors:?}"
    );
}

#[test]
fn production_debug_endpoint_fails_validation() {
    let toml = r#"
[server]
environment = "production"
debug_endpoint = true
"#;
    let errors = load_and_validate_str(toml).expect_err("should fail");
    assert!(errors.iter().any(
        |e| matches!(e, ConfigError::Validation { message } if message.contains("debug_endpoint"))
    ));
}

#[test]
fn production_defaults_disable_debug_endpoint() {
    let config = load_and_validate_str("[server]\nenvironment = \"production\"\n").unwrap();
    assert!(!config.server.debug_endpoint_enabled());
}

#[test]
fn config_error_renders_with_miette() {
    use miette::{Diagnostic, GraphicalReportHandler};

    let error = ConfigError::UnknownKey {
        key: "prot".to_string(),
        suggestion: Some("port".to_string()),
        valid_keys: "host, port".to_string(),
        span: None,
        src: None,
    };
    assert!(error.code().is_some());
    let help = error.help().expect("help text").to_string();
    assert!(help.contains("did you mean `port`"), "got: {help}");

    let mut buf = String::new();
    GraphicalReportHandler::new()
        .render_report(&mut buf, &error)
        .expect("should render");
    assert!(buf.contains("prot"));
}

#[test]
fn explicit_missing_file_is_an_error() {
    let errors = load_and_validate_path(Path::new("/nonexistent/roadwatch.toml")).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert!(
        matches!(&errors[0], ConfigError::FileNotFound { path } if path == "/nonexistent/roadwatch.toml")
    );
}

#[test]
fn explicit_file_is_loaded() {
    figment::Jail::expect_with(|jail| {
        jail.create_file("custom.toml", "[server]\nport = 6100\n")?;
        let config = load_and_validate_path(Path::new("custom.toml")).expect("valid file");
        assert_eq!(config.server.port, 6100);
        Ok(())
    });
}
