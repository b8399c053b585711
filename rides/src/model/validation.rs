// III-IV
// Copyright 2023 Julio Merino
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not
// use this file except in compliance with the License.  You may obtain a copy
// of the License at:
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.  See the
// License for the specific language governing permissions and limitations
// under the License.

//! Validation of the details of new rides.

use crate::model::RideDetails;
use std::ops::RangeInclusive;

/// Valid latitudes, in degrees.
const LATITUDES: RangeInclusive<f64> = -90.0..=90.0;

/// Valid longitudes, in degrees.
const LONGITUDES: RangeInclusive<f64> = -180.0..=180.0;

/// Reasons why the details of a ride cannot be accepted.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub(crate) enum ValidationError {
    /// The pickup location is outside of the valid coordinate ranges.
    #[error(
        "Start latitude and longitude must be between -90 - 90 and -180 to 180 degrees respectively"
    )]
    InvalidStartCoords,

    /// The drop-off location is outside of the valid coordinate ranges.
    #[error(
        "End latitude and longitude must be between -90 - 90 and -180 to 180 degrees respectively"
    )]
    InvalidEndCoords,

    /// The rider name is empty.
    #[error("Rider name must be a non empty string")]
    InvalidRider,

    /// The driver name is empty.
    #[error("Driver name must be a non empty string")]
    InvalidDriver,

    /// The vehicle description is empty.
    #[error("Driver Vehicle must be a non empty string")]
    InvalidVehicle,
}

/// Returns true if `lat` and `long` describe a location on Earth.  NaNs are never valid.
fn valid_location(lat: f64, long: f64) -> bool {
    LATITUDES.contains(&lat) && LONGITUDES.contains(&long)
}

/// Checks that the pickup location is valid.
fn valid_start(details: &RideDetails) -> bool {
    valid_location(*details.start_lat(), *details.start_long())
}

/// Checks that the drop-off location is valid.
fn valid_end(details: &RideDetails) -> bool {
    valid_location(*details.end_lat(), *details.end_long())
}

/// Checks that the rider is named.
fn valid_rider(details: &RideDetails) -> bool {
    !details.rider_name().is_empty()
}

/// Checks that the driver is named.
fn valid_driver(details: &RideDetails) -> bool {
    !details.driver_name().is_empty()
}

/// Checks that the vehicle is described.
fn valid_vehicle(details: &RideDetails) -> bool {
    !details.driver_vehicle().is_empty()
}

/// Rules that new rides must satisfy, in the order in which they are checked.
const RULES: &[(fn(&RideDetails) -> bool, ValidationError)] = &[
    (valid_start, ValidationError::InvalidStartCoords),
    (valid_end, ValidationError::InvalidEndCoords),
    (valid_rider, ValidationError::InvalidRider),
    (valid_driver, ValidationError::InvalidDriver),
    (valid_vehicle, ValidationError::InvalidVehicle),
];

impl RideDetails {
    /// Checks if these details can be used to create a new ride.  Only the first violated rule is
    /// reported.
    pub(crate) fn validate(&self) -> Result<(), ValidationError> {
        for (is_valid, error) in RULES {
            if !is_valid(self) {
                return Err(*error);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Syntactic sugar to create ride details from literals.
    fn details(
        start: (f64, f64),
        end: (f64, f64),
        rider: &str,
        driver: &str,
        vehicle: &str,
    ) -> RideDetails {
        RideDetails::new(
            start.0,
            start.1,
            end.0,
            end.1,
            rider.to_owned(),
            driver.to_owned(),
            vehicle.to_owned(),
        )
    }

    #[test]
    fn test_validate_ok() {
        details((0.0, 0.0), (0.0, 0.0), "r", "d", "v").validate().unwrap();
        details((-90.0, -180.0), (90.0, 180.0), "r", "d", "v").validate().unwrap();
        details((90.0, 180.0), (-90.0, -180.0), "John Doe", "The Driver", "The Vehicle")
            .validate()
            .unwrap();
    }

    #[test]
    fn test_validate_start_coords() {
        for (lat, long) in [(-91.0, 0.0), (90.5, 0.0), (0.0, -180.1), (0.0, 181.0), (f64::NAN, 0.0)]
        {
            assert_eq!(
                ValidationError::InvalidStartCoords,
                details((lat, long), (0.0, 0.0), "r", "d", "v").validate().unwrap_err()
            );
        }
    }

    #[test]
    fn test_validate_end_coords() {
        for (lat, long) in [(-91.0, 0.0), (91.0, 0.0), (0.0, -181.0), (0.0, 180.5), (0.0, f64::NAN)]
        {
            assert_eq!(
                ValidationError::InvalidEndCoords,
                details((0.0, 0.0), (lat, long), "r", "d", "v").validate().unwrap_err()
            );
        }
    }

    #[test]
    fn test_validate_names() {
        assert_eq!(
            ValidationError::InvalidRider,
            details((0.0, 0.0), (0.0, 0.0), "", "d", "v").validate().unwrap_err()
        );
        assert_eq!(
            ValidationError::InvalidDriver,
            details((0.0, 0.0), (0.0, 0.0), "r", "", "v").validate().unwrap_err()
        );
        assert_eq!(
            ValidationError::InvalidVehicle,
            details((0.0, 0.0), (0.0, 0.0), "r", "d", "").validate().unwrap_err()
        );
    }

    #[test]
    fn test_validate_first_failure_wins() {
        assert_eq!(
            ValidationError::InvalidStartCoords,
            details((100.0, 0.0), (100.0, 0.0), "", "", "").validate().unwrap_err()
        );
        assert_eq!(
            ValidationError::InvalidEndCoords,
            details((0.0, 0.0), (100.0, 0.0), "", "", "").validate().unwrap_err()
        );
        assert_eq!(
            ValidationError::InvalidRider,
            details((0.0, 0.0), (0.0, 0.0), "", "", "").validate().unwrap_err()
        );
        assert_eq!(
            ValidationError::InvalidDriver,
            details((0.0, 0.0), (0.0, 0.0), "r", "", "").validate().unwrap_err()
        );
    }

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            "Start latitude and longitude must be between -90 - 90 and -180 to 180 degrees \
             respectively",
            ValidationError::InvalidStartCoords.to_string()
        );
        assert_eq!(
            "End latitude and longitude must be between -90 - 90 and -180 to 180 degrees \
             respectively",
            ValidationError::InvalidEndCoords.to_string()
        );
        assert_eq!(
            "Rider name must be a non empty string",
            ValidationError::InvalidRider.to_string()
        );
        assert_eq!(
            "Driver name must be a non empty string",
            ValidationError::InvalidDriver.to_string()
        );
        assert_eq!(
            "Driver Vehicle must be a non empty string",
            ValidationError::InvalidVehicle.to_string()
        );
    }
}
