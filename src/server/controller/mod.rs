//! HTTP controller endpoints for the personnel API.
//!
//! Controllers authenticate the request through `AuthGuard`, convert DTOs into validated
//! server parameters, call into the service layer and map results back to DTOs. Every
//! handler carries a `utoipa::path` annotation that feeds the OpenAPI document served
//! at `/api/docs`.

pub mod activity_log;
pub mod auth;
pub mod health;
pub mod notification;
pub mod soldier;
pub mod unit;
pub mod user;

#[cfg(test)]
mod test;
