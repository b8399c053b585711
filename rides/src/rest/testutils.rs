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

//! Test utilities for the REST API.

use crate::db;
use crate::driver::Driver;
use crate::model::testutils::ride_details;
use crate::model::{Page, Ride};
use crate::rest::app;
use axum::Router;
use rides_core::db::{sqlite, Db};
use std::sync::Arc;

/// State of a running app for testing purposes.
pub(crate) struct TestContext {
    /// The database backing the app.
    db: Arc<dyn Db + Send + Sync>,

    /// The router for the app under test.
    app: Router,
}

impl TestContext {
    /// Initializes the app backed by an in-memory database.
    pub(crate) async fn setup() -> Self {
        let db: Arc<dyn Db + Send + Sync> = Arc::new(sqlite::testutils::setup().await);
        db::init_schema(&mut db.ex().await.unwrap()).await.unwrap();
        let driver = Driver::new(db.clone());
        let app = app(driver);
        Self { db, app }
    }

    /// Obtains a copy of the router for the app.
    pub(crate) fn app(&self) -> Router {
        self.app.clone()
    }

    /// Consumes the context and returns the router for the app.
    pub(crate) fn into_app(self) -> Router {
        self.app
    }

    /// Records a valid ride for `rider` directly in the database.
    pub(crate) async fn put_ride<S: Into<String>>(&self, rider: S) -> Ride {
        let details = ride_details(rider);
        let id = db::put_ride(&mut self.db.ex().await.unwrap(), &details).await.unwrap();
        Ride::new(id, details)
    }

    /// Gets the first page of rides stored in the database.
    pub(crate) async fn get_rides(&self) -> Vec<Ride> {
        db::get_rides(&mut self.db.ex().await.unwrap(), Page::default()).await.unwrap()
    }

    /// Drops the rides table so that every later store operation fails.
    pub(crate) async fn drop_schema(&self) {
        db::testutils::drop_schema(&mut self.db.ex().await.unwrap()).await.unwrap();
    }
}
