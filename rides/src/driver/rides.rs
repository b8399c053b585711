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

//! Operations on rides.

use crate::db;
use crate::driver::Driver;
use crate::model::*;
use log::debug;
use rides_core::driver::{DriverError, DriverResult};

/// Returns the error reported when a query for rides matches nothing.
pub(crate) fn no_rides_error() -> DriverError {
    DriverError::NotFound("Could not find any rides".to_owned())
}

impl Driver {
    /// Records a new ride described by `details` after validating them.
    ///
    /// Returns the ride as read back from the database.
    pub(crate) async fn create_ride(self, details: RideDetails) -> DriverResult<Ride> {
        details.validate().map_err(|e| DriverError::InvalidInput(e.to_string()))?;

        let mut tx = self.db.begin().await?;
        let id = db::put_ride(tx.ex(), &details).await?;
        let ride = match db::get_ride(tx.ex(), id).await? {
            Some(ride) => ride,
            None => {
                return Err(DriverError::BackendError(format!(
                    "Ride {} not found right after creation",
                    id.as_i64()
                )));
            }
        };
        tx.commit().await?;

        debug!("Created ride {}", id.as_i64());
        Ok(ride)
    }

    /// Gets the ride identified by `id`.
    pub(crate) async fn get_ride(self, id: RideId) -> DriverResult<Ride> {
        match db::get_ride(&mut self.db.ex().await?, id).await? {
            Some(ride) => Ok(ride),
            None => Err(no_rides_error()),
        }
    }

    /// Gets the rides in `page`.  An empty page is reported as an error.
    pub(crate) async fn get_rides(self, page: Page) -> DriverResult<Vec<Ride>> {
        let rides = db::get_rides(&mut self.db.ex().await?, page).await?;
        if rides.is_empty() {
            return Err(no_rides_error());
        }
        Ok(rides)
    }
}
