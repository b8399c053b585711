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

//! Database abstraction in terms of the operations needed by the server.

use crate::model::{Page, Ride, RideDetails, RideId};
use futures::TryStreamExt;
use rides_core::db::sqlite::{self, map_sqlx_error};
use rides_core::db::{DbError, DbResult, Executor};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;



/// Initializes the database schema.
pub async fn init_schema(ex: &mut Executor) -> DbResult<()> {
    match ex {
        Executor::Sqlite(ex) => sqlite::run_schema(ex, include_str!("sqlite.sql")).await,
    }
}

impl TryFrom<SqliteRow> for Ride {
    type Error = DbError;

    fn try_from(row: SqliteRow) -> DbResult<Self> {
        let id: i64 = row.try_get("id").map_err(map_sqlx_error)?;
        let start_lat: f64 = row.try_get("startLat").map_err(map_sqlx_error)?;
        let start_long: f64 = row.try_get("startLong").map_err(map_sqlx_error)?;
        let end_lat: f64 = row.try_get("endLat").map_err(map_sqlx_error)?;
        let end_long: f64 = row.try_get("endLong").map_err(map_sqlx_error)?;
        let rider_name: String = row.try_get("riderName").map_err(map_sqlx_error)?;
        let driver_name: String = row.try_get("driverName").map_err(map_sqlx_error)?;
        let driver_vehicle: String = row.try_get("driverVehicle").map_err(map_sqlx_error)?;

        let details = RideDetails::new(
            start_lat,
            start_long,
            end_lat,
            end_long,
            rider_name,
            driver_name,
            driver_vehicle,
        );
        Ok(Ride::new(RideId::new(id)?, details))
    }
}

/// Records a new ride described by `details` and returns the identifier assigned to it.
pub(crate) async fn put_ride(ex: &mut Executor, details: &RideDetails) -> DbResult<RideId> {
    match ex {
        Executor::Sqlite(ex) => {
            let query_str = "
                INSERT INTO Rides
                    (startLat, startLong, endLat, endLong, riderName, driverName, driverVehicle)
                VALUES (?, ?, ?, ?, ?, ?, ?)";
            let done = sqlx::query(query_str)
                .bind(*details.start_lat())
                .bind(*details.start_long())
                .bind(*details.end_lat())
                .bind(*details.end_long())
                .bind(details.rider_name().as_str())
                .bind(details.driver_name().as_str())
                .bind(details.driver_vehicle().as_str())
                .execute(ex)
                .await
                .map_err(map_sqlx_error)?;
            if done.rows_affected() != 1 {
                return Err(DbError::BackendError(format!(
                    "Insertion affected {} rows",
                    done.rows_affected()
                )));
            }
            Ok(RideId::new(done.last_insert_rowid())?)
        }
    }
}

/// Gets the ride identified by `id`, if any.
pub(crate) async fn get_ride(ex: &mut Executor, id: RideId) -> DbResult<Option<Ride>> {
    match ex {
        Executor::Sqlite(ex) => {
            let query_str = "SELECT * FROM Rides WHERE id = ?";
            let maybe_row = sqlx::query(query_str)
                .bind(id.as_i64())
                .fetch_optional(ex)
                .await
                .map_err(map_sqlx_error)?;
            maybe_row.map(Ride::try_from).transpose()
        }
    }
}

/// Gets the rides that fall within `page` when sorting all rides by their identifier.
pub(crate) async fn get_rides(ex: &mut Executor, page: Page) -> DbResult<Vec<Ride>> {
    match ex {
        Executor::Sqlite(ex) => {
            let query_str = "SELECT * FROM Rides ORDER BY id LIMIT ? OFFSET ?";
            let mut rows =
                sqlx::query(query_str).bind(page.limit()).bind(page.offset()).fetch(ex);

            let mut rides = vec![];
            while let Some(row) = rows.try_next().await.map_err(map_sqlx_error)? {
                rides.push(Ride::try_from(row)?);
            }
            Ok(rides)
        }
    }
}
