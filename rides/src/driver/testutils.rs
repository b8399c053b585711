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

//! Test utilities for the business layer.

use crate::db;
use crate::driver::Driver;
use crate::model::testutils::ride_details;
use crate::model::Ride;
use rides_core::db::{sqlite, Db, Executor};
use std::sync::Arc;

/// State of a running driver for testing purposes.
pub(crate) struct TestContext {
    /// The database backing the driver.
    db: Arc<dyn Db + Send + Sync>,

    /// The driver under test.
    driver: Driver,
}

impl TestContext {
    /// Initializes a driver backed by an in-memory database.
    pub(crate) async fn setup() -> Self {
        let db: Arc<dyn Db + Send + Sync> = Arc::new(sqlite::testutils::setup().await);
        db::init_schema(&mut db.ex().await.unwrap()).await.unwrap();
        let driver = Driver::new(db.clone());
        Self { db, driver }
    }

    /// Obtains a direct executor against the database.
    pub(crate) async fn ex(&self) -> Executor {
        self.db.ex().await.unwrap()
    }

    /// Obtains a copy of the driver.
    pub(crate) fn driver(&self) -> Driver {
        self.driver.clone()
    }

    /// Records a valid ride for `rider` directly in the database, bypassing the driver.
    pub(crate) async fn put_ride<S: Into<String>>(&self, rider: S) -> Ride {
        let details = ride_details(rider);
        let id = db::put_ride(&mut self.ex().await, &details).await.unwrap();
        Ride::new(id, details)
    }

    /// Drops the rides table so that every later store operation fails.
    pub(crate) async fn drop_schema(&self) {
        db::testutils::drop_schema(&mut self.ex().await).await.unwrap();
    }
}
