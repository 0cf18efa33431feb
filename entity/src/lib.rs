//! SeaORM entities for the personnel database.

pub mod prelude;

pub mod activity_log;
pub mod notification;
pub mod sea_orm_active_enums;
pub mod soldier;
pub mod unit;
pub mod user;
