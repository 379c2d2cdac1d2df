// SPDX-FileCopyrightText: 2026 Roadwatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers.

use std::collections::BTreeMap;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use chrono::{DateTime, Utc};
use roadwatch_core::{Caller, DamageReport, DamageTypeDefinition, FeatureCollection};
use roadwatch_store::parse_submission;
use serde::Serialize;

use crate::error::ApiError;
use crate::server::AppState;

/// Response body for GET /health.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
    pub version: &'static str,
    pub environment: String,
    /// Route name to "METHOD path".
    pub endpoints: BTreeMap<&'static str, &'static str>,
}

/// Response body for GET /api/v1/damage/types.
#[derive(Debug, Serialize)]
pub struct DamageTypesResponse {
    pub damage_types: Vec<DamageTypeDefinition>,
}

/// Response body for POST /api/v1/damage/submit.
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub success: bool,
    pub damage_id: u64,
    pub created_at: DateTime<Utc>,
    pub message: &'static str,
}

/// Response body for GET /api/v1/damage/list.
#[derive(Debug, Serialize)]
pub struct DamageListResponse {
    pub damages: Vec<DamageReport>,
    pub total: usize,
}

/// Response body for GET /api/debug/data.
#[derive(Debug, Serialize)]
pub struct DebugDataResponse {
    pub damage_types: Vec<DamageTypeDefinition>,
    pub damages: Vec<DamageReport>,
    pub api_keys: Vec<String>,
    pub total_damages: usize,
}

/// GET /health
pub async fn get_health(State(state): State<AppState>) -> Json<HealthResponse> {
    let mut endpoints = BTreeMap::from([
        ("health", "GET /health"),
        ("damage_types", "GET /api/v1/damage/types"),
        ("submit_damage", "POST /api/v1/damage/submit"),
        ("list_damages", "GET /api/v1/damage/list"),
        ("damage_detail", "GET /api/v1/damage/{id}"),
        ("map_data", "GET /api/v1/damage/map-data"),
    ]);
    if state.debug_endpoint {
        endpoints.insert("debug", "GET /api/debug/data");
    }

    Json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION"),
        environment: state.environment.clone(),
        endpoints,
    })
}

/// GET /api/v1/damage/types
pub async fn get_damage_types(State(state): State<AppState>) -> Json<DamageTypesResponse> {
    Json(DamageTypesResponse {
        damage_types: state.catalog.list_all().to_vec(),
    })
}

/// POST /api/v1/damage/submit
///
/// The body is parsed here rather than through `Json<T>` so that missing
/// fields, bad numbers and bad coordinates each get their own error.
pub async fn post_submit(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    body: Bytes,
) -> Result<(StatusCode, Json<SubmitResponse>), ApiError> {
    let report = parse_submission(&body)?;
    let stored = state.reports.submit(report, &caller).await;

    tracing::info!(
        id = stored.id,
        damage_type = %stored.damage_type,
        organisation = %stored.organisation,
        "new damage report"
    );

    Ok((
        StatusCode::CREATED,
        Json(SubmitResponse {
            success: true,
            damage_id: stored.id,
            created_at: stored.created_at,
            message: "damage report recorded",
        }),
    ))
}

/// GET /api/v1/damage/list
pub async fn get_damage_list(State(state): State<AppState>) -> Json<DamageListResponse> {
    let damages = state.reports.list_all().await;
    Json(DamageListResponse {
        total: damages.len(),
        damages,
    })
}

/// GET /api/v1/damage/{id}
///
/// A segment that is not all ASCII digits is reported like an unknown id.
pub async fn get_damage(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DamageReport>, ApiError> {
    tracing::debug!(%id, "damage report lookup");
    let Some(numeric_id) = parse_report_id(&id) else {
        return Err(ApiError::NotFound { id });
    };
    state
        .reports
        .get(numeric_id)
        .await
        .map(Json)
        .ok_or(ApiError::NotFound { id })
}

/// Digits only. `u64::from_str` alone would also take a leading `+`.
fn parse_report_id(segment: &str) -> Option<u64> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

/// GET /api/v1/damage/map-data
pub async fn get_map_data(State(state): State<AppState>) -> Json<FeatureCollection> {
    Json(state.reports.to_geojson().await)
}

/// GET /api/debug/data
///
/// Unauthenticated dump of everything, including API keys. Only routed when
/// the debug toggle is on.
pub async fn get_debug_data(State(state): State<AppState>) -> Json<DebugDataResponse> {
    tracing::warn!("serving unauthenticated debug data");
    let damages = state.reports.list_all().await;
    Json(DebugDataResponse {
        damage_types: state.catalog.list_all().to_vec(),
        total_damages: damages.len(),
        damages,
        api_keys: state.credentials.keys().to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_response_serializes() {
        let resp = SubmitResponse {
            success: true,
            damage_id: 4,
            created_at: Utc::now(),
            message: "damage report recorded",
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["damage_id"], 4);
        assert!(json["created_at"].is_string());
    }

    #[test]
    fn report_id_must_be_plain_digits() {
        assert_eq!(parse_report_id("7"), Some(7));
        assert_eq!(parse_report_id("007"), Some(7));
        assert_eq!(parse_report_id("+1"), None);
        assert_eq!(parse_report_id("-1"), None);
        assert_eq!(parse_report_id(" 1"), None);
        assert_eq!(parse_report_id(""), None);
        assert_eq!(parse_report_id("99999999999999999999999"), None);
    }

    #[test]
    fn empty_list_response_serializes() {
        let resp = DamageListResponse {
            damages: vec![],
            total: 0,
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(json, r#"{"damages":[],"total":0}"#);
    }
}
