//! Notification domain models and parameters.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::NotificationType;
use sea_orm::ActiveEnum;

use crate::{
    model::notification::{CreateNotificationDto, NotificationDto},
    server::{
        error::AppError,
        util::parse::{parse_optional_enum, require_text},
    },
};

/// Maximum number of notifications returned by a list request, newest first.
pub const NOTIFICATION_LIST_LIMIT: u64 = 50;

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: i32,
    pub title: String,
    pub message: String,
    pub notification_type: NotificationType,
    pub read: bool,
    /// Addressed user, or `None` for a broadcast.
    pub user_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Notification {
    pub fn from_entity(entity: entity::notification::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            message: entity.message,
            notification_type: entity.notification_type,
            read: entity.read,
            user_id: entity.user_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> NotificationDto {
        NotificationDto {
            id: self.id,
            title: self.title,
            message: self.message,
            notification_type: self.notification_type.to_value(),
            read: self.read,
            user_id: self.user_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Parameters for creating a notification. New notifications are always unread.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateNotificationParams {
    pub title: String,
    pub message: String,
    pub notification_type: NotificationType,
    pub user_id: Option<i32>,
}

impl CreateNotificationParams {
    /// Validates a create request. The type defaults to `info`.
    pub fn from_dto(dto: CreateNotificationDto) -> Result<Self, AppError> {
        Ok(Self {
            title: require_text("title", dto.title)?,
            message: require_text("message", dto.message)?,
            notification_type: parse_optional_enum("type", dto.notification_type.as_deref())?
                .unwrap_or(NotificationType::Info),
            user_id: dto.user_id,
        })
    }
}
