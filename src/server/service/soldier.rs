//! Soldier service: personnel CRUD with auditing and dashboard statistics.

use entity::sea_orm_active_enums::ActivityAction;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::soldier::SoldierRepository,
    error::AppError,
    model::{
        activity_log::CreateActivityLogParams,
        auth::Actor,
        pagination::{Page, PageRequest},
        soldier::{
            CreateSoldierParams, Soldier, SoldierFilter, SoldierStats, UpdateSoldierParams,
        },
    },
    service::activity_log::ActivityLogService,
};

/// Default page size for soldier listings.
pub const DEFAULT_SOLDIER_LIMIT: u64 = 10;

const AUDIT_ENTITY: &str = "soldier";
const DUPLICATE_NRP: &str = "NRP already exists";

pub struct SoldierService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SoldierService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of soldiers matching the filter, newest first.
    pub async fn get_paginated(
        &self,
        filter: &SoldierFilter,
        page: PageRequest,
    ) -> Result<Page<Soldier>, AppError> {
        let (soldiers, total) = SoldierRepository::new(self.db)
            .get_paginated(filter, page)
            .await?;

        Ok(Page::new(soldiers, total, page))
    }

    /// Gets a soldier by id.
    ///
    /// # Returns
    /// - `Ok(Soldier)` - The soldier
    /// - `Err(AppError::NotFound)` - No soldier with that id
    pub async fn get_by_id(&self, id: i32) -> Result<Soldier, AppError> {
        SoldierRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(not_found)
    }

    /// Creates a soldier and records a `create` activity for `actor`.
    ///
    /// # Returns
    /// - `Ok(Soldier)` - The created soldier
    /// - `Err(AppError::Conflict)` - The NRP is already taken
    pub async fn create(
        &self,
        actor: &Actor,
        params: CreateSoldierParams,
    ) -> Result<Soldier, AppError> {
        let soldier = SoldierRepository::new(self.db)
            .create(params)
            .await
            .map_err(|e| AppError::from_unique_violation(e, DUPLICATE_NRP))?;

        self.audit(
            actor,
            ActivityAction::Create,
            &soldier,
            format!("Created soldier: {}", soldier.name),
        )
        .await;

        Ok(soldier)
    }

    /// Applies a partial update and records an `update` activity for `actor`.
    ///
    /// # Returns
    /// - `Ok(Soldier)` - The updated soldier
    /// - `Err(AppError::NotFound)` - No soldier with that id
    /// - `Err(AppError::Conflict)` - The new NRP is already taken
    pub async fn update(
        &self,
        actor: &Actor,
        params: UpdateSoldierParams,
    ) -> Result<Soldier, AppError> {
        let soldier = SoldierRepository::new(self.db)
            .update(params)
            .await
            .map_err(|e| AppError::from_unique_violation(e, DUPLICATE_NRP))?
            .ok_or_else(not_found)?;

        self.audit(
            actor,
            ActivityAction::Update,
            &soldier,
            format!("Updated soldier: {}", soldier.name),
        )
        .await;

        Ok(soldier)
    }

    /// Deletes a soldier and records a `delete` activity for `actor`.
    pub async fn delete(&self, actor: &Actor, id: i32) -> Result<Soldier, AppError> {
        let soldier = SoldierRepository::new(self.db)
            .delete(id)
            .await?
            .ok_or_else(not_found)?;

        self.audit(
            actor,
            ActivityAction::Delete,
            &soldier,
            format!("Deleted soldier: {}", soldier.name),
        )
        .await;

        Ok(soldier)
    }

    /// Computes dashboard statistics over every soldier.
    pub async fn stats(&self) -> Result<SoldierStats, AppError> {
        let soldiers = SoldierRepository::new(self.db).get_all().await?;

        Ok(SoldierStats::from_soldiers(&soldiers))
    }

    async fn audit(&self, actor: &Actor, action: ActivityAction, soldier: &Soldier, details: String) {
        ActivityLogService::new(self.db)
            .record(CreateActivityLogParams::new(
                actor,
                action,
                AUDIT_ENTITY,
                Some(soldier.id.to_string()),
                Some(details),
            ))
            .await;
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Soldier not found".to_string())
}
