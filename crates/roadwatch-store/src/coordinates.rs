// SPDX-FileCopyrightText: 2026 Roadwatch Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Bounding box check for report coordinates.
//!
//! Reports must fall inside a rough box around Switzerland. Bounds are
//! inclusive and compared as plain floats; NaN never passes.

use std::ops::RangeInclusive;

use thiserror::Error;

/// Accepted latitudes, in degrees.
pub const LATITUDE_RANGE: RangeInclusive<f64> = 45.0..=48.0;

/// Accepted longitudes, in degrees.
pub const LONGITUDE_RANGE: RangeInclusive<f64> = 5.0..=11.0;

/// Which bound a coordinate pair failed. Latitude is checked first.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CoordinateError {
    #[error("latitude {0} is outside Switzerland (allowed 45.0 to 48.0)")]
    LatitudeOutOfBounds(f64),

    #[error("longitude {0} is outside Switzerland (allowed 5.0 to 11.0)")]
    LongitudeOutOfBounds(f64),
}

/// Check that `(latitude, longitude)` lies inside the Swiss bounding box.
pub fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), CoordinateError> {
    if !LATITUDE_RANGE.contains(&latitude) {
        return Err(CoordinateError::LatitudeOutOfBounds(latitude));
    }
    if !LONGITUDE_RANGE.contains(&longitude) {
        return Err(CoordinateError::LongitudeOutOfBounds(longitude));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn zurich_is_valid() {
        assert!(validate_coordinates(47.37, 8.54).is_ok());
    }

    #[test]
    fn bounds_are_inclusive() {
        assert!(validate_coordinates(45.0, 8.0).is_ok());
        assert!(validate_coordinates(48.0, 8.0).is_ok());
        assert!(validate_coordinates(47.0, 5.0).is_ok());
        assert!(validate_coordinates(47.0, 11.0).is_ok());
    }

    #[test]
    fn latitude_just_below_bound_fails() {
        assert_eq!(
            validate_coordinates(44.9, 8.0),
            Err(CoordinateError::LatitudeOutOfBounds(44.9))
        );
    }

    #[test]
    fn longitude_failure_is_reported_separately() {
        let err = validate_coordinates(47.0, 11.5).unwrap_err();
        assert_eq!(err, CoordinateError::LongitudeOutOfBounds(11.5));
        assert!(err.to_string().starts_with("longitude"));
    }

    #[test]
    fn latitude_is_checked_before_longitude() {
        assert!(matches!(
            validate_coordinates(0.0, 0.0),
            Err(CoordinateError::LatitudeOutOfBounds(_))
        ));
    }

    #[test]
    fn nan_is_rejected() {
        assert!(validate_coordinates(f64::NAN, 8.0).is_err());
        assert!(validate_coordinates(47.0, f64::NAN).is_err());
    }

    proptest! {
        #[test]
        fn every_point_in_the_box_is_accepted(lat in 45.0f64..=48.0, lon in 5.0f64..=11.0) {
            prop_assert!(validate_coordinates(lat, lon).is_ok());
        }

        #[test]
        fn latitude_south_of_the_box_is_rejected(lat in -90.0f64..44.999, lon in 5.0f64..=11.0) {
            prop_assert_eq!(
                validate_coordinates(lat, lon),
                Err(CoordinateError::LatitudeOutOfBounds(lat))
            );
        }

        #[test]
        fn longitude_east_of_the_box_is_rejected(lat in 45.0f64..=48.0, lon in 11.001f64..180.0) {
            prop_assert_eq!(
                validate_coordinates(lat, lon),
                Err(CoordinateError::LongitudeOutOfBounds(lon))
            );
        }
    }
}
