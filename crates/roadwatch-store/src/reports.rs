// SPDX-FileCopyrightText: 2026 Roadwatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Append-only store of submitted damage reports.

use chrono::Utc;
use tokio::sync::RwLock;

use roadwatch_core::{
    Caller, DamageReport, FeatureCollection, ReportStatus, PLACEHOLDER_PHOTO_PATH,
};

/// The caller-supplied part of a report, already validated.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDamageReport {
    pub damage_type: String,
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
    pub additional_data: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug)]
struct ReportLog {
    reports: Vec<DamageReport>,
    next_id: u64,
}

/// In-memory damage report store.
///
/// Reports are kept in insertion order. Ids start at 1 and are assigned
/// under the same write lock as the append, so concurrent submissions
/// never share an id.
#[derive(Debug)]
pub struct DamageReportStore {
    log: RwLock<ReportLog>,
}

impl DamageReportStore {
    pub fn new() -> Self {
        Self {
            log: RwLock::new(ReportLog {
                reports: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Append a report for `caller` and return the stored record.
    pub async fn submit(&self, report: NewDamageReport, caller: &Caller) -> DamageReport {
        let mut log = self.log.write().await;
        let id = log.next_id;
        log.next_id += 1;

        let stored = DamageReport {
            id,
            damage_type: report.damage_type,
            description: report.description,
            latitude: report.latitude,
            longitude: report.longitude,
            photo_path: PLACEHOLDER_PHOTO_PATH.to_string(),
            user_id: caller.user_id,
            organisation: caller.organisation.clone(),
            status: ReportStatus::New,
            created_at: Utc::now(),
            additional_data: report.additional_data,
        };
        log.reports.push(stored.clone());
        stored
    }

    /// Find a report by id.
    pub async fn get(&self, id: u64) -> Option<DamageReport> {
        let log = self.log.read().await;
        log.reports.iter().find(|r| r.id == id).cloned()
    }

    /// Snapshot of every report in insertion order.
    pub async fn list_all(&self) -> Vec<DamageReport> {
        self.log.read().await.reports.clone()
    }

    pub async fn len(&self) -> usize {
        self.log.read().await.reports.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.log.read().await.reports.is_empty()
    }

    /// Project every report into a GeoJSON point feature.
    pub async fn to_geojson(&self) -> FeatureCollection {
        let log = self.log.read().await;
        log.reports.iter().collect()
    }
}

impl Default for DamageReportStore {
    fn default() -> Self {
        Self::new()
    }
}
