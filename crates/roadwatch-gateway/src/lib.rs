// SPDX-FileCopyrightText: 2026 Roadwatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP surface of the Roadwatch damage reporting service.
//!
//! Every `/api/v1/damage/*` route sits behind the API-key middleware in
//! [`auth`]; `/`, `/health` and the optional debug endpoint are public.
//! Handlers receive the stores through [`AppState`] and the resolved
//! caller through a request extension.

pub mod auth;
pub mod error;
pub mod handlers;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, start_server, AppState, GatewayConfig};
