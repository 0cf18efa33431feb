//! Notification factory for creating test notification entities.

use chrono::Utc;
use entity::sea_orm_active_enums::NotificationType;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test notifications with customizable fields.
pub struct NotificationFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    message: String,
    notification_type: NotificationType,
    read: bool,
    user_id: Option<i32>,
}

impl<'a> NotificationFactory<'a> {
    /// Creates a new NotificationFactory with an unread `info` notification.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Notification {}", id),
            message: "Routine medical checkup scheduled".to_string(),
            notification_type: NotificationType::Info,
            read: false,
            user_id: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn notification_type(mut self, notification_type: NotificationType) -> Self {
        self.notification_type = notification_type;
        self
    }

    pub fn read(mut self, read: bool) -> Self {
        self.read = read;
        self
    }

    pub fn user_id(mut self, user_id: i32) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// Builds and inserts the notification entity into the database.
    pub async fn build(self) -> Result<entity::notification::Model, DbErr> {
        let now = Utc::now();
        entity::notification::ActiveModel {
            title: ActiveValue::Set(self.title),
            message: ActiveValue::Set(self.message),
            notification_type: ActiveValue::Set(self.notification_type),
            read: ActiveValue::Set(self.read),
            user_id: ActiveValue::Set(self.user_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a notification with default values.
pub async fn create_notification(
    db: &DatabaseConnection,
) -> Result<entity::notification::Model, DbErr> {
    NotificationFactory::new(db).build().await
}
