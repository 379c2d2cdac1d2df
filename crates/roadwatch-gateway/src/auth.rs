// SPDX-FileCopyrightText: 2026 Roadwatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! API-key authentication middleware.
//!
//! Reads `X-API-Key`, resolves it against the [`CredentialStore`] and stores
//! the resulting [`Caller`] in the request extensions. Runs before any
//! handler touches a store.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use roadwatch_core::Caller;
use roadwatch_store::CredentialStore;

use crate::error::ApiError;

pub const API_KEY_HEADER: &str = "x-api-key";

/// Resolve the caller for a set of request headers.
///
/// An absent or empty header is a missing credential; a header that is not
/// valid visible ASCII or not in the store is an invalid one.
pub fn authenticate(credentials: &CredentialStore, headers: &HeaderMap) -> Result<Caller, ApiError> {
    let value = headers
        .get(API_KEY_HEADER)
        .ok_or(ApiError::MissingCredential)?;
    if value.is_empty() {
        return Err(ApiError::MissingCredential);
    }
    let key = value.to_str().map_err(|_| ApiError::InvalidCredential)?;
    credentials
        .resolve(key)
        .cloned()
        .ok_or(ApiError::InvalidCredential)
}

/// Middleware guarding every protected route.
pub async fn api_key_middleware(
    State(credentials): State<Arc<CredentialStore>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let caller = authenticate(&credentials, request.headers())?;
    tracing::debug!(
        user_id = caller.user_id,
        organisation = %caller.organisation,
        "request authenticated"
    );
    request.extensions_mut().insert(caller);
    Ok(next.run(request).await)
}
