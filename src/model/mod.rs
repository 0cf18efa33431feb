//! Data transfer objects exchanged over the HTTP API.
//!
//! Every type here is serialized as camelCase JSON and derives `utoipa::ToSchema` so
//! it shows up in the generated OpenAPI document. Enumerated fields travel as their
//! display strings (for example `"Letnan Kolonel"`) and are validated on the server
//! side when converted into domain parameters.

pub mod activity_log;
pub mod api;
pub mod auth;
pub mod notification;
pub mod soldier;
pub mod unit;
pub mod user;
