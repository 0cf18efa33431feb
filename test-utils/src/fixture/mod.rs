//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixtures create in-memory entity models for unit tests that exercise pure
//! logic, such as the personnel statistics aggregation or DTO conversion.
//! Unlike factories, fixtures do NOT insert data into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let soldier = fixture::soldier::entity();
//!
//! let medic = fixture::soldier::entity_builder()
//!     .corps(Corps::Kesehatan)
//!     .specialization("Bedah")
//!     .build();
//! ```

pub mod soldier;
pub mod user;

pub use soldier::{entity as soldier_entity, entity_builder as soldier_entity_builder};
pub use user::{entity as user_entity, entity_builder as user_entity_builder};
