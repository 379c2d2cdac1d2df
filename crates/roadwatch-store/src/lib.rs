// SPDX-FileCopyrightText: 2026 Roadwatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory stores backing the Roadwatch API.
//!
//! - [`CredentialStore`]: fixed API key lookup.
//! - [`DamageTypeCatalog`]: the fixed list of damage categories.
//! - [`DamageReportStore`]: append-only list of submitted reports with
//!   sequential ids and a GeoJSON projection.
//! - [`submission`]: turns a raw JSON body into a validated
//!   [`NewDamageReport`] or a structured [`SubmissionError`].
//!
//! All stores are plain values constructed once at startup and shared by
//! handle, so every test can build a fresh set.

pub mod catalog;
pub mod coordinates;
pub mod credentials;
pub mod reports;
pub mod submission;

pub use catalog::DamageTypeCatalog;
pub use coordinates::{validate_coordinates, CoordinateError};
pub use credentials::CredentialStore;
pub use reports::{DamageReportStore, NewDamageReport};
pub use submission::{parse_submission, SubmissionError, SubmissionPayload};
