// SPDX-FileCopyrightText: 2026 Roadwatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Roadwatch damage reporting service.
//!
//! Holds the record types every other crate speaks in (credentials, damage
//! type definitions, damage reports, their GeoJSON projection) and the
//! workspace-wide error type.

pub mod error;
pub mod geojson;
pub mod types;

pub use error::RoadwatchError;
pub use geojson::{Feature, FeatureCollection, FeatureProperties, Geometry};
pub use types::{
    ApiKeyRecord, Caller, DamageReport, DamageTypeDefinition, ReportStatus, PLACEHOLDER_PHOTO_PATH,
};
