//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Uniqueness checks, password hashing, statistics aggregation
//! - **Orchestration**: Coordinating a mutation with its activity log entry
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Error Mapping**: Turning missing records and constraint violations into `AppError`

pub mod activity_log;
pub mod auth;
pub mod notification;
pub mod soldier;
pub mod token;
pub mod unit;
pub mod user;

#[cfg(test)]
mod test;
