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

//! API to get a page of rides.

use crate::driver::Driver;
use crate::model::Page;
use crate::rest::rides_query_error;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use rides_core::rest::RestResult;
use serde::Deserialize;

/// Query parameters for this API.
#[derive(Deserialize)]
pub(crate) struct RidesQuery {
    /// Number of the page to return, starting at 1.  Kept raw so that malformed values can fall
    /// back to the first page instead of rejecting the request.
    page: Option<String>,
}

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    Query(query): Query<RidesQuery>,
) -> RestResult<impl IntoResponse> {
    let page = Page::from_param(query.page.as_deref());
    let rides = driver.get_rides(page).await.map_err(rides_query_error)?;
    Ok(Json(rides))
}
