// SPDX-FileCopyrightText: 2026 Roadwatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Roadwatch service.

use thiserror::Error;

/// The error type used by startup code and the server loop.
///
/// Request-level failures have their own types next to the code that
/// produces them; this one covers everything that stops the process.
#[derive(Debug, Error)]
pub enum RoadwatchError {
    /// Configuration could not be loaded or failed validation.
    #[error("configuration error: {0}")]
    Config(String),

    /// The HTTP server could not bind or stopped with an I/O error.
    #[error("server error: {message}")]
    Server {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
