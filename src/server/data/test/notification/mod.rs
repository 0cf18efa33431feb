use crate::server::{
    data::notification::NotificationRepository,
    model::notification::CreateNotificationParams,
};
use entity::sea_orm_active_enums::NotificationType;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_recent;
mod mark_read;
