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

//! API to create a new ride.

use crate::driver::Driver;
use crate::model::RideDetails;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use rides_core::rest::RestError;
use serde_json::{Map, Value};

/// Message sent by the client to create a ride.
///
/// Fields are kept untyped so that values of the wrong type surface as validation errors for the
/// specific field instead of as a generic deserialization failure.
pub(crate) struct CreateRideRequest {
    /// Latitude of the pickup location.
    start_lat: Value,

    /// Longitude of the pickup location.
    start_long: Value,

    /// Latitude of the drop-off location.
    end_lat: Value,

    /// Longitude of the drop-off location.
    end_long: Value,

    /// Name of the rider.
    rider_name: Value,

    /// Name of the driver.
    driver_name: Value,

    /// Description of the vehicle.
    driver_vehicle: Value,
}

/// Interprets a JSON `value` as a coordinate.  Numbers and strings holding a number are accepted.
/// Anything else becomes NaN, which no range check accepts.
fn coordinate(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(f64::NAN),
        _ => f64::NAN,
    }
}

/// Interprets a JSON `value` as a name.  Anything but a string becomes empty.
fn name(value: Value) -> String {
    match value {
        Value::String(s) => s,
        _ => String::new(),
    }
}

impl CreateRideRequest {
    /// Extracts the request fields from a JSON `body`.  Fields are looked up by name only, so a
    /// body that is not an object is treated as one without fields.
    fn from_body(body: Value) -> Self {
        let mut fields = match body {
            Value::Object(fields) => fields,
            _ => Map::new(),
        };
        let mut take = |name: &str| fields.remove(name).unwrap_or(Value::Null);
        Self {
            start_lat: take("start_lat"),
            start_long: take("start_long"),
            end_lat: take("end_lat"),
            end_long: take("end_long"),
            rider_name: take("rider_name"),
            driver_name: take("driver_name"),
            driver_vehicle: take("driver_vehicle"),
        }
    }

    /// Converts the request into ride details, which may still be invalid.
    fn into_details(self) -> RideDetails {
        RideDetails::new(
            coordinate(&self.start_lat),
            coordinate(&self.start_long),
            coordinate(&self.end_lat),
            coordinate(&self.end_long),
            name(self.rider_name),
            name(self.driver_name),
            name(self.driver_vehicle),
        )
    }
}

/// API handler.
///
/// A payload that is not declared as JSON is processed as a request without fields, which then
/// fails validation.  Malformed JSON is rejected before reaching the driver.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, Response> {
    let body = match body {
        Ok(Json(body)) => body,
        Err(JsonRejection::MissingJsonContentType(_)) => Value::Null,
        Err(e) => return Err(e.into_response()),
    };

    let details = CreateRideRequest::from_body(body).into_details();
    let ride = driver.create_ride(details).await.map_err(|e| RestError::from(e).into_response())?;
    Ok(Json(vec![ride]))
}
