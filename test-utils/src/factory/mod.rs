//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let unit = factory::unit::create_unit(&db).await?;
//!     let soldier = factory::soldier::SoldierFactory::new(&db)
//!         .unit(&unit.name)
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `soldier` - Create soldier entities
//! - `unit` - Create unit entities
//! - `user` - Create user accounts with a real password hash
//! - `notification` - Create notification entities
//! - `helpers` - Unique value generation and password hashing

pub mod helpers;
pub mod notification;
pub mod soldier;
pub mod unit;
pub mod user;

pub use notification::create_notification;
pub use soldier::create_soldier;
pub use unit::create_unit;
pub use user::create_user;
