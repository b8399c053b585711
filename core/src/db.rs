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

//! Database access shared by all services.
//!
//! Services talk to the database through the `Db` trait, which they receive at construction time.
//! Tests hand them a fresh in-memory SQLite database.  SQLite is also what runs in production, so
//! it is the only backend so far.

use crate::model::ModelError;
use async_trait::async_trait;

#[cfg(feature = "sqlite")]
pub mod sqlite;

/// Failures reported by the persistence layer.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum DbError {
    /// The database could not run a query.  Details come straight from the backend.
    #[error("Database error: {0}")]
    BackendError(String),

    /// A stored row holds values that the data model rejects.
    #[error("Data integrity error: {0}")]
    DataIntegrityError(String),
}

impl From<ModelError> for DbError {
    fn from(e: ModelError) -> Self {
        DbError::DataIntegrityError(e.to_string())
    }
}

/// Result type for this module.
pub type DbResult<T> = Result<T, DbError>;

/// Handle to issue queries against one of the supported backends.
///
/// sqlx needs to know the concrete database type of every query, so callers destructure this enum
/// and write their queries once per backend.  The handle may be bound to the pool or to an open
/// transaction.
pub enum Executor {
    /// Queries go to SQLite.
    #[cfg(feature = "sqlite")]
    Sqlite(sqlite::SqliteExecutor),
}

/// An `Executor` bound to an open transaction.  Dropping it without calling `commit` rolls the
/// transaction back.
pub struct TxExecutor(Executor);

impl TxExecutor {
    /// Gives access to the executor for the queries that make up the transaction.
    pub fn ex(&mut self) -> &mut Executor {
        &mut self.0
    }

    /// Makes the changes done within the transaction permanent.
    pub async fn commit(self) -> DbResult<()> {
        match self.0 {
            #[cfg(feature = "sqlite")]
            Executor::Sqlite(e) => e.commit().await,
        }
    }
}

/// A connection to the database of a service.
#[async_trait]
pub trait Db {
    /// Obtains an executor that runs each query on its own, outside of any transaction.
    async fn ex(&self) -> DbResult<Executor>;

    /// Opens a transaction.
    async fn begin(&self) -> DbResult<TxExecutor>;
}

/// Macros to run the same database tests against every backend.
#[cfg(any(test, feature = "testutils"))]
pub mod testutils {
    pub use paste::paste;

    /// Defines one `#[tokio::test]` per `name`, each calling `module::name` with the database
    /// returned by `setup`.
    ///
    /// `setup` is evaluated once per test and must yield a database with the schema in place.
    #[macro_export]
    macro_rules! generate_tests [
        ( $setup:expr, $module:path $(, $name:ident)+ ) => {
            $(
                #[tokio::test]
                async fn $name() {
                    $crate::db::testutils::paste! {
                        $module :: [< $name >]($setup).await;
                    }
                }
            )+
        };
    ];

    pub use generate_tests;
}

#[cfg(all(test, feature = "sqlite"))]
mod tests {
    use super::*;
    use sqlx::Row;

    /// Runs the statement `sql` on `ex`.
    async fn exec(ex: &mut Executor, sql: &str) {
        match ex {
            Executor::Sqlite(ref mut ex) => {
                sqlx::query(sql).execute(ex).await.unwrap();
            }
        }
    }

    /// Returns the number of rows in the `visits` table as seen by `ex`.
    async fn count_visits(ex: &mut Executor) -> i64 {
        match ex {
            Executor::Sqlite(ref mut ex) => {
                let row = sqlx::query("SELECT COUNT(*) AS total FROM visits")
                    .fetch_one(ex)
                    .await
                    .unwrap();
                row.try_get("total").unwrap()
            }
        }
    }

    pub(super) async fn test_pool_queries_are_visible(db: Box<dyn Db + Send + Sync>) {
        exec(&mut db.ex().await.unwrap(), "CREATE TABLE visits (page TEXT)").await;
        exec(&mut db.ex().await.unwrap(), "INSERT INTO visits VALUES ('home')").await;
        assert_eq!(1, count_visits(&mut db.ex().await.unwrap()).await);
    }

    pub(super) async fn test_committed_tx_is_kept(db: Box<dyn Db + Send + Sync>) {
        exec(&mut db.ex().await.unwrap(), "CREATE TABLE visits (page TEXT)").await;

        let mut tx = db.begin().await.unwrap();
        exec(tx.ex(), "INSERT INTO visits VALUES ('home')").await;
        exec(tx.ex(), "INSERT INTO visits VALUES ('about')").await;
        assert_eq!(2, count_visits(tx.ex()).await);
        tx.commit().await.unwrap();

        assert_eq!(2, count_visits(&mut db.ex().await.unwrap()).await);
    }

    pub(super) async fn test_dropped_tx_is_discarded(db: Box<dyn Db + Send + Sync>) {
        exec(&mut db.ex().await.unwrap(), "CREATE TABLE visits (page TEXT)").await;

        {
            let mut tx = db.begin().await.unwrap();
            exec(tx.ex(), "INSERT INTO visits VALUES ('home')").await;
        }

        assert_eq!(0, count_visits(&mut db.ex().await.unwrap()).await);

        let tx = db.begin().await.unwrap();
        tx.commit().await.unwrap();
    }

    /// Instantiates the tests that every backend must pass.
    macro_rules! generate_core_db_tests [
        ( $setup:expr ) => {
            $crate::db::testutils::generate_tests!(
                $setup,
                $crate::db::tests,
                test_pool_queries_are_visible,
                test_committed_tx_is_kept,
                test_dropped_tx_is_discarded
            );
        }
    ];

    pub(super) use generate_core_db_tests;
}
