// SPDX-FileCopyrightText: 2026 Roadwatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Minimal GeoJSON types for the map projection of damage reports.
//!
//! Only what the map needs: a `FeatureCollection` of `Point` features.
//! Coordinates follow GeoJSON order, `[longitude, latitude]`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{DamageReport, ReportStatus};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub struct Feature {
    pub geometry: Geometry,
    pub properties: FeatureProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point { coordinates: [f64; 2] },
}

/// Report fields shown in a map popup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureProperties {
    pub id: u64,
    pub damage_type: String,
    pub description: String,
    pub status: ReportStatus,
    pub organisation: String,
    pub created_at: DateTime<Utc>,
}

impl From<&DamageReport> for Feature {
    fn from(report: &DamageReport) -> Self {
        Feature {
            geometry: Geometry::Point {
                coordinates: [report.longitude, report.latitude],
            },
            properties: FeatureProperties {
                id: report.id,
                damage_type: report.damage_type.clone(),
                description: report.description.clone(),
                status: report.status,
                organisation: report.organisation.clone(),
                created_at: report.created_at,
            },
        }
    }
}

impl<'a> FromIterator<&'a DamageReport> for FeatureCollection {
    fn from_iter<I: IntoIterator<Item = &'a DamageReport>>(iter: I) -> Self {
        FeatureCollection {
            features: iter.into_iter().map(Feature::from).collect(),
        }
    }
}
