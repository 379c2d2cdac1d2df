// SPDX-FileCopyrightText: 2026 Roadwatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Request errors and their JSON rendering.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use roadwatch_store::{CoordinateError, SubmissionError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("missing API key")]
    MissingCredential,

    #[error("invalid API key")]
    InvalidCredential,

    #[error("incomplete submission")]
    MissingFields(Vec<&'static str>),

    #[error("malformed number")]
    MalformedNumber { field: &'static str, value: String },

    #[error("invalid coordinates")]
    OutOfBounds(CoordinateError),

    #[error("damage report not found")]
    NotFound { id: String },

    #[error("server error")]
    Internal(String),
}

/// JSON error body. `error` is the category, the rest depends on the kind.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing_fields: Option<Vec<&'static str>>,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingCredential | ApiError::InvalidCredential => StatusCode::UNAUTHORIZED,
            ApiError::MissingFields(_)
            | ApiError::MalformedNumber { .. }
            | ApiError::OutOfBounds(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::MissingCredential => "send your key in the X-API-Key header".to_string(),
            ApiError::InvalidCredential => "API key not recognized".to_string(),
            ApiError::MissingFields(fields) => {
                format!("missing required fields: {}", fields.join(", "))
            }
            ApiError::MalformedNumber { field, value } => {
                format!("`{field}` is not a number: {value}")
            }
            ApiError::OutOfBounds(reason) => reason.to_string(),
            ApiError::NotFound { id } => format!("no damage report with id {id}"),
            ApiError::Internal(message) => message.clone(),
        }
    }

    pub fn body(&self) -> ErrorResponse {
        let missing_fields = match self {
            ApiError::MissingFields(fields) => Some(fields.clone()),
            _ => None,
        };
        ErrorResponse {
            error: self.to_string(),
            message: Some(self.message()),
            missing_fields,
        }
    }
}

impl From<SubmissionError> for ApiError {
    fn from(err: SubmissionError) -> Self {
        match err {
            SubmissionError::MissingFields(fields) => ApiError::MissingFields(fields),
            SubmissionError::MalformedNumber { field, value } => {
                ApiError::MalformedNumber { field, value }
            }
            SubmissionError::OutOfBounds(reason) => ApiError::OutOfBounds(reason),
            SubmissionError::Payload(message) => ApiError::Internal(message),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Internal(message) => {
                tracing::error!(error = %message, "request failed");
            }
            ApiError::MissingCredential | ApiError::InvalidCredential => {
                tracing::info!("rejected request: {}", self);
            }
            _ => {
                tracing::debug!("client error: {}: {}", self, self.message());
            }
        }
        (self.status_code(), Json(self.body())).into_response()
    }
}
