//! Activity log service: the audit recorder and the audit trail queries.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::activity_log::ActivityLogRepository,
    error::AppError,
    model::{
        activity_log::{ActivityLog, ActivityLogFilter, CreateActivityLogParams},
        pagination::{Page, PageRequest},
    },
};

/// Default page size for activity log listings.
pub const DEFAULT_ACTIVITY_LOG_LIMIT: u64 = 20;

pub struct ActivityLogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ActivityLogService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends an audit entry as a side effect of another operation.
    ///
    /// Called after the primary mutation has been written. A failed insert is logged
    /// and swallowed; the caller's result is never affected.
    pub async fn record(&self, params: CreateActivityLogParams) {
        let action = params.action;
        let entity = params.entity.clone();
        let user_id = params.user_id;

        if let Err(err) = ActivityLogRepository::new(self.db).create(params).await {
            tracing::error!(
                "Failed to record {:?} activity on '{}' by user {}: {}",
                action,
                entity,
                user_id,
                err
            );
        }
    }

    /// Appends an explicitly requested audit entry.
    pub async fn create(&self, params: CreateActivityLogParams) -> Result<ActivityLog, AppError> {
        Ok(ActivityLogRepository::new(self.db).create(params).await?)
    }

    /// Gets one page of the audit trail, newest first.
    pub async fn get_paginated(
        &self,
        filter: &ActivityLogFilter,
        page: PageRequest,
    ) -> Result<Page<ActivityLog>, AppError> {
        let (logs, total) = ActivityLogRepository::new(self.db)
            .get_paginated(filter, page)
            .await?;

        Ok(Page::new(logs, total, page))
    }
}
