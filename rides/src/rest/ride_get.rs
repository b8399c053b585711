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

//! API to get one ride.

use crate::driver::{no_rides_error, Driver};
use crate::model::RideId;
use crate::rest::rides_query_error;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use log::debug;
use rides_core::rest::RestResult;
use std::str::FromStr;

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    Path(id): Path<String>,
) -> RestResult<impl IntoResponse> {
    let id = match RideId::from_str(&id) {
        Ok(id) => id,
        Err(e) => {
            debug!("{}", e);
            return Err(rides_query_error(no_rides_error()));
        }
    };

    let ride = driver.get_ride(id).await.map_err(rides_query_error)?;
    Ok(Json(vec![ride]))
}

#[cfg(test)]
mod tests {
    use crate::model::*;
    use crate::rest::testutils::*;
    use axum::http;
    use rides_core::rest::testutils::*;

    fn route<I: ToString>(id: I) -> (http::Method, String) {
        (http::Method::GET, format!("/rides/{}", id.to_string()))
    }

    #[tokio::test]
    async fn test_ok() {
        let context = TestContext::setup().await;

        context.put_ride("first").await;
        let exp_ride = context.put_ride("second").await;
        context.put_ride("third").await;

        let response = OneShotBuilder::new(context.into_app(), route(exp_ride.id().as_i64()))
            .send_empty()
            .await
            .expect_json::<Vec<Ride>>()
            .await;
        assert_eq!(vec![exp_ride], response);
    }

    #[tokio::test]
    async fn test_missing() {
        let context = TestContext::setup().await;

        let ride = context.put_ride("first").await;

        OneShotBuilder::new(context.into_app(), route(ride.id().as_i64() + 1))
            .send_empty()
            .await
            .expect_error("RIDES_NOT_FOUND_ERROR", "^Could not find any rides$")
            .await;
    }

    #[tokio::test]
    async fn test_invalid_ids() {
        let context = TestContext::setup().await;

        context.put_ride("first").await;

        for id in ["abc", "0", "-1", "1.0", "99999999999999999999"] {
            OneShotBuilder::new(context.app(), route(id))
                .send_empty()
                .await
                .expect_error("RIDES_NOT_FOUND_ERROR", "^Could not find any rides$")
                .await;
        }
    }
}
