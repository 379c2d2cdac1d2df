// SPDX-FileCopyrightText: 2026 Roadwatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Parse-and-validate step for damage report submissions.
//!
//! Checks run in a fixed order and the first failure wins:
//! 1. required fields present (`damage_type`, `description`, `latitude`, `longitude`)
//! 2. coordinates parse as floats (JSON numbers or numeric strings)
//! 3. coordinates inside the bounding box
//!
//! Presence means the key exists in the body. A key holding `null` is
//! present and fails at the step that needs its value.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::coordinates::{validate_coordinates, CoordinateError};
use crate::reports::NewDamageReport;

/// Field names that must be present, in the order they are reported.
pub const REQUIRED_FIELDS: [&str; 4] = ["damage_type", "description", "latitude", "longitude"];

/// Why a submission was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmissionError {
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("`{field}` is not a number: {value}")]
    MalformedNumber { field: &'static str, value: String },

    #[error(transparent)]
    OutOfBounds(#[from] CoordinateError),

    /// The body is not a JSON object or a field has an unusable shape.
    #[error("unreadable payload: {0}")]
    Payload(String),
}

/// Raw submission body.
///
/// Each field holds the value found under its key, `None` only when the key
/// is absent. `Some(Value::Null)` is a present field.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SubmissionPayload {
    pub damage_type: Option<Value>,
    pub description: Option<Value>,
    pub latitude: Option<Value>,
    pub longitude: Option<Value>,
    pub additional_data: Option<Value>,
}

impl SubmissionPayload {
    /// Split a JSON object body into its known fields. Unknown keys are ignored.
    pub fn from_slice(body: &[u8]) -> Result<Self, SubmissionError> {
        let mut object: Map<String, Value> =
            serde_json::from_slice(body).map_err(|e| SubmissionError::Payload(e.to_string()))?;
        Ok(Self {
            damage_type: object.remove("damage_type"),
            description: object.remove("description"),
            latitude: object.remove("latitude"),
            longitude: object.remove("longitude"),
            additional_data: object.remove("additional_data"),
        })
    }

    /// Names of required fields that are absent, in [`REQUIRED_FIELDS`] order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let present = [
            self.damage_type.is_some(),
            self.description.is_some(),
            self.latitude.is_some(),
            self.longitude.is_some(),
        ];
        REQUIRED_FIELDS
            .iter()
            .zip(present)
            .filter(|(_, present)| !present)
            .map(|(name, _)| *name)
            .collect()
    }

    /// Run the validation pipeline.
    pub fn validate(self) -> Result<NewDamageReport, SubmissionError> {
        let (Some(damage_type), Some(description), Some(latitude), Some(longitude)) = (
            &self.damage_type,
            &self.description,
            &self.latitude,
            &self.longitude,
        ) else {
            return Err(SubmissionError::MissingFields(self.missing_fields()));
        };

        let damage_type = text_field("damage_type", damage_type)?;
        let description = text_field("description", description)?;
        let latitude = parse_coordinate("latitude", latitude)?;
        let longitude = parse_coordinate("longitude", longitude)?;
        validate_coordinates(latitude, longitude)?;

        let additional_data = match self.additional_data {
            None | Some(Value::Null) => Map::new(),
            Some(Value::Object(map)) => map,
            Some(other) => {
                return Err(SubmissionError::Payload(format!(
                    "`additional_data` must be an object, found {other}"
                )));
            }
        };

        Ok(NewDamageReport {
            damage_type,
            description,
            latitude,
            longitude,
            additional_data,
        })
    }
}

/// Parse a raw request body all the way to a validated report.
pub fn parse_submission(body: &[u8]) -> Result<NewDamageReport, SubmissionError> {
    SubmissionPayload::from_slice(body)?.validate()
}

fn text_field(field: &'static str, value: &Value) -> Result<String, SubmissionError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        other => Err(SubmissionError::Payload(format!(
            "`{field}` must be a string, found {other}"
        ))),
    }
}

/// JSON numbers or numeric strings. `null` and every other shape is malformed.
fn parse_coordinate(field: &'static str, value: &Value) -> Result<f64, SubmissionError> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| SubmissionError::MalformedNumber {
        field,
        value: value.to_string(),
    })
}
