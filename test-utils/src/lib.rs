//! Shared test harness for the personnel crates.
//!
//! - **builder**: `TestBuilder` creates an in-memory SQLite database, either from entity
//!   definitions (`with_table`, `with_all_tables`) or from the production migrations
//!   (`with_migrations`)
//! - **context**: `TestContext` owns that database for the lifetime of one test
//! - **factory**: inserts soldiers, units, users and notifications with sensible defaults
//! - **fixture**: builds entity models in memory without touching the database
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn counts_unit_members() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_all_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let unit = factory::create_unit(db).await?;
//!     factory::soldier::create_soldier_in_unit(db, &unit.name).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
