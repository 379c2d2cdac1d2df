// SPDX-FileCopyrightText: 2026 Roadwatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Record types for credentials, damage categories and damage reports.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Photo path stamped on every report. Uploads are not processed.
pub const PLACEHOLDER_PHOTO_PATH: &str = "/static/uploads/mock_photo.jpg";

/// A seeded API key and the identity it resolves to.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiKeyRecord {
    /// Opaque key string sent in the `X-API-Key` header.
    pub key: String,
    /// Numeric user identifier attached to submitted reports.
    pub user_id: u64,
    /// Organisation label attached to submitted reports.
    pub organisation: String,
}

impl ApiKeyRecord {
    /// The identity this key resolves to.
    pub fn caller(&self) -> Caller {
        Caller {
            user_id: self.user_id,
            organisation: self.organisation.clone(),
        }
    }
}

impl std::fmt::Debug for ApiKeyRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeyRecord")
            .field("key", &"[redacted]")
            .field("user_id", &self.user_id)
            .field("organisation", &self.organisation)
            .finish()
    }
}

/// Identity of an authenticated caller, resolved from an API key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Caller {
    pub user_id: u64,
    pub organisation: String,
}

/// One entry of the fixed damage type catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageTypeDefinition {
    pub type_id: u32,
    pub label: String,
    pub description: String,
    /// Icon identifier used by the map front-end.
    pub icon_name: String,
    /// 1 is most urgent.
    pub priority: u8,
    /// Display ordering hint. Not enforced by the catalog.
    pub sort_order: u32,
}

/// Processing status of a damage report.
///
/// Reports are always created as `New`; nothing transitions them yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    New,
}

impl ReportStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::New => "new",
        }
    }
}

/// A submitted damage report.
///
/// Created once by the report store and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DamageReport {
    /// Sequential identifier, starting at 1.
    pub id: u64,
    /// Caller-supplied category. Free text, not checked against the catalog.
    pub damage_type: String,
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
    pub photo_path: String,
    pub user_id: u64,
    pub organisation: String,
    pub status: ReportStatus,
    /// Server clock at creation, serialized as RFC 3339.
    pub created_at: DateTime<Utc>,
    /// Arbitrary caller-supplied extras.
    #[serde(default)]
    pub additional_data: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&ReportStatus::New).unwrap();
        assert_eq!(json, "\"new\"");
        assert_eq!(ReportStatus::New.as_str(), "new");
    }

    #[test]
    fn api_key_record_resolves_caller() {
        let record = ApiKeyRecord {
            key: "k".into(),
            user_id: 7,
            organisation: "Gemeinde Bern".into(),
        };
        let caller = record.caller();
        assert_eq!(caller.user_id, 7);
        assert_eq!(caller.organisation, "Gemeinde Bern");
    }

    #[test]
    fn api_key_record_debug_hides_key() {
        let record = ApiKeyRecord {
            key: "secret_key".into(),
            user_id: 7,
            organisation: "Gemeinde Bern".into(),
        };
        let printed = format!("{record:?}");
        assert!(!printed.contains("secret_key"));
        assert!(printed.contains("[redacted]"));
    }

    #[test]
    fn damage_report_serializes_snake_case_fields() {
        let report = DamageReport {
            id: 1,
            damage_type: "Schlagloch".into(),
            description: "tief".into(),
            latitude: 47.37,
            longitude: 8.54,
            photo_path: PLACEHOLDER_PHOTO_PATH.into(),
            user_id: 1,
            organisation: "Stadt Zürich - Test".into(),
            status: ReportStatus::New,
            created_at: Utc::now(),
            additional_data: serde_json::Map::new(),
        };
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["damage_type"], "Schlagloch");
        assert_eq!(value["photo_path"], PLACEHOLDER_PHOTO_PATH);
        assert_eq!(value["status"], "new");
        assert!(value["additional_data"].as_object().unwrap().is_empty());
        assert!(value["created_at"].is_string());
    }
}
