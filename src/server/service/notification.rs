use sea_orm::DatabaseConnection;

use crate::server::{
    data::notification::NotificationRepository,
    error::AppError,
    model::notification::{CreateNotificationParams, Notification, NOTIFICATION_LIST_LIMIT},
};

/// Service for dashboard notifications. Notifications are not audited.
pub struct NotificationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the newest notifications, optionally only those addressed to `user_id`.
    pub async fn get_recent(&self, user_id: Option<i32>) -> Result<Vec<Notification>, AppError> {
        Ok(NotificationRepository::new(self.db)
            .get_recent(user_id, NOTIFICATION_LIST_LIMIT)
            .await?)
    }

    pub async fn create(
        &self,
        params: CreateNotificationParams,
    ) -> Result<Notification, AppError> {
        Ok(NotificationRepository::new(self.db).create(params).await?)
    }

    /// Marks a notification as read.
    ///
    /// # Returns
    /// - `Ok(Notification)` - The notification, now read
    /// - `Err(AppError::NotFound)` - No notification with that id
    pub async fn mark_read(&self, id: i32) -> Result<Notification, AppError> {
        NotificationRepository::new(self.db)
            .mark_read(id)
            .await?
            .ok_or_else(not_found)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !NotificationRepository::new(self.db).delete(id).await? {
            return Err(not_found());
        }

        Ok(())
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Notification not found".to_string())
}
