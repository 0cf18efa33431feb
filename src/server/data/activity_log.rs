//! Activity log data repository.
//!
//! The audit trail is append-only: this repository exposes inserts and filtered reads,
//! never updates or deletes.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    activity_log::{ActivityLog, ActivityLogFilter, CreateActivityLogParams},
    pagination::PageRequest,
};

pub struct ActivityLogRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ActivityLogRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends one entry stamped with the current time.
    pub async fn create(&self, params: CreateActivityLogParams) -> Result<ActivityLog, DbErr> {
        let entity = entity::activity_log::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            user_name: ActiveValue::Set(params.user_name),
            action: ActiveValue::Set(params.action),
            entity: ActiveValue::Set(params.entity),
            entity_id: ActiveValue::Set(params.entity_id),
            details: ActiveValue::Set(params.details),
            ip_address: ActiveValue::Set(params.ip_address),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(ActivityLog::from_entity(entity))
    }

    /// Gets one page of entries matching the filter, newest first.
    ///
    /// # Returns
    /// - `Ok((Vec<ActivityLog>, u64))` - Entries on the page and the total matching count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_paginated(
        &self,
        filter: &ActivityLogFilter,
        page: PageRequest,
    ) -> Result<(Vec<ActivityLog>, u64), DbErr> {
        let mut query = entity::prelude::ActivityLog::find();

        if let Some(user_id) = filter.user_id {
            query = query.filter(entity::activity_log::Column::UserId.eq(user_id));
        }
        if let Some(action) = filter.action {
            query = query.filter(entity::activity_log::Column::Action.eq(action));
        }
        if let Some(start) = filter.start {
            query = query.filter(entity::activity_log::Column::CreatedAt.gte(start));
        }
        if let Some(end) = filter.end {
            query = query.filter(entity::activity_log::Column::CreatedAt.lte(end));
        }

        let paginator = query
            .order_by_desc(entity::activity_log::Column::CreatedAt)
            .order_by_desc(entity::activity_log::Column::Id)
            .paginate(self.db, page.limit);

        let total = paginator.num_items().await?;
        let entries = paginator.fetch_page(page.index()).await?;

        Ok((
            entries.into_iter().map(ActivityLog::from_entity).collect(),
            total,
        ))
    }
}
