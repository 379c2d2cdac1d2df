// SPDX-FileCopyrightText: 2026 Roadwatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Turns figment errors into miette diagnostics.
//!
//! Unknown keys and unknown enum values get a "did you mean" hint based on
//! Jaro-Winkler similarity, and a source span when the offending file can
//! be located.

#![allow(unused_assignments)] // miette's Diagnostic derive generates code triggering this lint

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Minimum Jaro-Winkler score for a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.75;

/// A configuration error ready for rendering.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("unknown configuration key `{key}`")]
    #[diagnostic(
        code(roadwatch::config::unknown_key),
        help("{}", candidates_help(suggestion.as_deref(), valid_keys))
    )]
    UnknownKey {
        key: String,
        suggestion: Option<String>,
        /// Comma-separated keys accepted in this section.
        valid_keys: String,
        #[label("this key is not recognized")]
        span: Option<SourceSpan>,
        #[source_code]
        src: Option<NamedSource<String>>,
    },

    #[error("unknown value `{value}` for `{key}`")]
    #[diagnostic(
        code(roadwatch::config::unknown_value),
        help("{}", candidates_help(suggestion.as_deref(), valid_values))
    )]
    UnknownValue {
        key: String,
        value: String,
        suggestion: Option<String>,
        valid_values: String,
    },

    #[error("invalid type for key `{key}`: {detail}")]
    #[diagnostic(code(roadwatch::config::invalid_type), help("expected {expected}"))]
    InvalidType {
        key: String,
        detail: String,
        expected: String,
    },

    #[error("missing required key `{key}`")]
    #[diagnostic(
        code(roadwatch::config::missing_key),
        help("add `{key} = <value>` to your roadwatch.toml")
    )]
    MissingKey { key: String },

    #[error("config file `{path}` not found")]
    #[diagnostic(
        code(roadwatch::config::file_not_found),
        help("check the path given to --config")
    )]
    FileNotFound { path: String },

    #[error("validation error: {message}")]
    #[diagnostic(code(roadwatch::config::validation))]
    Validation { message: String },

    #[error("configuration error: {0}")]
    #[diagnostic(code(roadwatch::config::other))]
    Other(String),
}

fn candidates_help(suggestion: Option<&str>, candidates: &str) -> String {
    match suggestion {
        Some(s) => format!("did you mean `{s}`? Valid: {candidates}"),
        None => format!("valid: {candidates}"),
    }
}

/// Convert every error inside a `figment::Error` into a [`ConfigError`].
///
/// `toml_sources` holds `(path, content)` pairs used to attach source spans.
pub fn figment_to_config_errors(
    err: figment::Error,
    toml_sources: &[(String, String)],
) -> Vec<ConfigError> {
    use figment::error::Kind;

    err.into_iter()
        .map(|error| {
            let key_path = error.path.join(".");
            match &error.kind {
                Kind::UnknownField(field, expected) => {
                    let (span, src) = locate_key(&error, field, toml_sources)
                        .map_or((None, None), |(span, src)| (Some(span), Some(src)));
                    ConfigError::UnknownKey {
                        key: field.clone(),
                        suggestion: suggest_key(field, expected),
                        valid_keys: expected.join(", "),
                        span,
                        src,
                    }
                }
                Kind::UnknownVariant(value, expected) => ConfigError::UnknownValue {
                    key: key_path,
                    value: value.clone(),
                    suggestion: suggest_key(value, expected),
                    valid_values: expected.join(", "),
                },
                Kind::MissingField(field) => ConfigError::MissingKey {
                    key: field.to_string(),
                },
                Kind::InvalidType(actual, expected) => ConfigError::InvalidType {
                    key: key_path,
                    detail: format!("found {actual}, expected {expected}"),
                    expected: expected.clone(),
                },
                _ => ConfigError::Other(error.to_string()),
            }
        })
        .collect()
}

/// Find the span of `field` in whichever TOML file the error came from.
fn locate_key(
    error: &figment::Error,
    field: &str,
    toml_sources: &[(String, String)],
) -> Option<(SourceSpan, NamedSource<String>)> {
    let origin = error
        .metadata
        .as_ref()
        .and_then(|m| m.source.as_ref())
        .and_then(|source| match source {
            figment::Source::File(path) => Some(path.display().to_string()),
            _ => None,
        });
    // Inline sources have no file path; fall back to the only source given.
    let (path, content) = match origin {
        Some(origin) => toml_sources.iter().find(|(p, _)| *p == origin)?,
        None if toml_sources.len() == 1 => &toml_sources[0],
        None => return None,
    };
    let offset = find_key_offset(content, &error.path, field)?;
    Some((
        SourceSpan::new(offset.into(), field.len()),
        NamedSource::new(path, content.clone()),
    ))
}

/// Byte offset of `field` at the start of a line, searching after the
/// `[section]` header named by `path[0]` (or from the top if `path` is empty).
pub fn find_key_offset(content: &str, path: &[String], field: &str) -> Option<usize> {
    let start = match path.first() {
        Some(section) => {
            let header = format!("[{section}]");
            content.find(&header)? + header.len()
        }
        None => 0,
    };

    let mut line_start = start;
    for line in content[start..].split_inclusive('\n') {
        let trimmed = line.trim_start();
        if let Some(rest) = trimmed.strip_prefix(field) {
            if rest.starts_with([' ', '\t', '=']) {
                return Some(line_start + (line.len() - trimmed.len()));
            }
        }
        line_start += line.len();
    }
    None
}

/// Best candidate above [`SUGGESTION_THRESHOLD`], if any.
pub fn suggest_key(unknown: &str, candidates: &[&str]) -> Option<String> {
    candidates
        .iter()
        .map(|c| (strsim::jaro_winkler(unknown, c), *c))
        .filter(|(score, _)| *score > SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, c)| c.to_string())
}

/// Print diagnostics to stderr with miette's graphical handler.
pub fn render_errors(errors: &[ConfigError]) {
    let handler = miette::GraphicalReportHandler::new();
    for error in errors {
        let mut buf = String::new();
        match handler.render_report(&mut buf, error as &dyn Diagnostic) {
            Ok(()) => eprint!("{buf}"),
            Err(_) => eprintln!("Error: {error}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggests_close_key() {
        let valid = &["host", "port", "environment", "static_dir"];
        assert_eq!(suggest_key("prot", valid), Some("port".to_string()));
        assert_eq!(
            suggest_key("static_dri", valid),
            Some("static_dir".to_string())
        );
    }

    #[test]
    fn no_suggestion_for_distant_key() {
        assert_eq!(suggest_key("zzzzzz", &["host", "port"]), None);
    }

    #[test]
    fn finds_key_inside_section() {
        let content = "[server]\nhots = \"x\"\n";
        let offset = find_key_offset(content, &["server".to_string()], "hots").unwrap();
        assert_eq!(&content[offset..offset + 4], "hots");
    }

    #[test]
    fn ignores_prefix_matches() {
        let content = "[server]\nportal = 1\nport = 2\n";
        let offset = find_key_offset(content, &["server".to_string()], "port").unwrap();
        assert_eq!(&content[offset..offset + 8], "port = 2");
    }

    #[test]
    fn missing_section_has_no_offset() {
        assert_eq!(find_key_offset("port = 1\n", &["server".to_string()], "port"), None);
    }
}
