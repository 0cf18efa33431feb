use crate::server::{
    data::activity_log::ActivityLogRepository,
    model::{
        activity_log::{ActivityLogFilter, CreateActivityLogParams},
        auth::Actor,
        pagination::PageRequest,
    },
};
use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::ActivityAction;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod create;
mod get_paginated;

fn actor(id: i32) -> Actor {
    Actor {
        id,
        name: format!("Operator {}", id),
        origin: Some("10.0.0.1".to_string()),
    }
}

fn entry(actor_id: i32, action: ActivityAction) -> CreateActivityLogParams {
    CreateActivityLogParams::new(
        &actor(actor_id),
        action,
        "soldier",
        Some("1".to_string()),
        Some("Created soldier: Budi Santoso".to_string()),
    )
}
