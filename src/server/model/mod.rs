//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! Parameter types are built from request DTOs with `from_dto`, which is where enumerated
//! strings are validated and free text is trimmed.

pub mod activity_log;
pub mod auth;
pub mod notification;
pub mod pagination;
pub mod soldier;
pub mod unit;
pub mod user;
