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

//! The `Ride` data type.

use derive_getters::Getters;
use derive_more::Constructor;
use rides_core::model::{ModelError, ModelResult};
#[cfg(test)]
use serde::Deserialize;
use serde::Serialize;
use std::str::FromStr;

/// Identifier of a ride as assigned by the database on creation.  Always positive.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd, Serialize)]
#[cfg_attr(test, derive(Deserialize))]
#[serde(transparent)]
pub(crate) struct RideId(i64);

impl RideId {
    /// Creates a ride identifier from a raw `id` with range validation.
    pub(crate) fn new(id: i64) -> ModelResult<Self> {
        if id < 1 {
            return Err(ModelError(format!("Ride identifier {} is not positive", id)));
        }
        Ok(Self(id))
    }

    /// Returns the identifier as an `i64`.
    pub(crate) fn as_i64(&self) -> i64 {
        self.0
    }
}

#[cfg(test)]
impl From<i64> for RideId {
    /// Creates a new identifier from a hardcoded value, which must be valid.
    fn from(id: i64) -> Self {
        RideId::new(id).expect("Hardcoded ride identifiers must be valid")
    }
}

impl FromStr for RideId {
    type Err = ModelError;

    fn from_str(s: &str) -> ModelResult<Self> {
        let id = s
            .parse::<i64>()
            .map_err(|e| ModelError(format!("Invalid ride identifier '{}': {}", s, e)))?;
        RideId::new(id)
    }
}

/// Attributes of a ride as supplied by the client that requested its creation.
#[derive(Clone, Constructor, Debug, Getters, PartialEq, Serialize)]
#[cfg_attr(test, derive(Deserialize))]
#[serde(rename_all = "camelCase")]
pub(crate) struct RideDetails {
    /// Latitude of the pickup location, in degrees.
    start_lat: f64,

    /// Longitude of the pickup location, in degrees.
    start_long: f64,

    /// Latitude of the drop-off location, in degrees.
    end_lat: f64,

    /// Longitude of the drop-off location, in degrees.
    end_long: f64,

    /// Name of the person who took the ride.
    rider_name: String,

    /// Name of the person who drove the vehicle.
    driver_name: String,

    /// Free-form description of the vehicle.
    driver_vehicle: String,
}

/// A ride that has been recorded in the database.
#[derive(Clone, Constructor, Debug, Getters, PartialEq, Serialize)]
#[cfg_attr(test, derive(Deserialize))]
pub(crate) struct Ride {
    /// Identifier assigned to the ride on creation.
    id: RideId,

    /// Attributes of the ride.
    #[serde(flatten)]
    details: RideDetails,
}
