//! Notification data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::notification::{CreateNotificationParams, Notification};

pub struct NotificationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new, unread notification.
    pub async fn create(&self, params: CreateNotificationParams) -> Result<Notification, DbErr> {
        let now = Utc::now();
        let entity = entity::notification::ActiveModel {
            title: ActiveValue::Set(params.title),
            message: ActiveValue::Set(params.message),
            notification_type: ActiveValue::Set(params.notification_type),
            read: ActiveValue::Set(false),
            user_id: ActiveValue::Set(params.user_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Notification::from_entity(entity))
    }

    /// Gets the most recent notifications, newest first.
    ///
    /// # Arguments
    /// - `user_id` - Only notifications addressed to this user when `Some`
    /// - `limit` - Maximum number of notifications returned
    pub async fn get_recent(
        &self,
        user_id: Option<i32>,
        limit: u64,
    ) -> Result<Vec<Notification>, DbErr> {
        let mut query = entity::prelude::Notification::find();
        if let Some(user_id) = user_id {
            query = query.filter(entity::notification::Column::UserId.eq(user_id));
        }

        let entities = query
            .order_by_desc(entity::notification::Column::CreatedAt)
            .order_by_desc(entity::notification::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Notification::from_entity).collect())
    }

    /// Marks a notification as read. Marking an already read notification is a no-op.
    ///
    /// # Returns
    /// - `Ok(Some(Notification))` - The notification after the update
    /// - `Ok(None)` - No notification with that id
    pub async fn mark_read(&self, id: i32) -> Result<Option<Notification>, DbErr> {
        let Some(existing) = entity::prelude::Notification::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        if existing.read {
            return Ok(Some(Notification::from_entity(existing)));
        }

        let mut active: entity::notification::ActiveModel = existing.into();
        active.read = ActiveValue::Set(true);
        active.updated_at = ActiveValue::Set(Utc::now());
        let entity = active.update(self.db).await?;

        Ok(Some(Notification::from_entity(entity)))
    }

    /// Deletes a notification by id.
    ///
    /// # Returns
    /// - `Ok(true)` - The notification was deleted
    /// - `Ok(false)` - No notification with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Notification::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
