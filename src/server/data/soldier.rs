//! Soldier data repository for database operations.

use chrono::Utc;
use entity::sea_orm_active_enums::Corps;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Select,
};

use crate::server::{
    model::{
        pagination::PageRequest,
        soldier::{CreateSoldierParams, Soldier, SoldierFilter, UpdateSoldierParams},
    },
    util::search::contains_pattern,
};

/// Repository providing database operations for soldier records.
pub struct SoldierRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SoldierRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new soldier.
    ///
    /// # Returns
    /// - `Ok(Soldier)` - The created soldier
    /// - `Err(DbErr)` - Database error, including a unique violation on `nrp`
    pub async fn create(&self, params: CreateSoldierParams) -> Result<Soldier, DbErr> {
        let now = Utc::now();
        let entity = entity::soldier::ActiveModel {
            nrp: ActiveValue::Set(params.nrp),
            name: ActiveValue::Set(params.name),
            rank: ActiveValue::Set(params.rank),
            corps: ActiveValue::Set(params.corps),
            unit: ActiveValue::Set(params.unit),
            education: ActiveValue::Set(params.education),
            specialization: ActiveValue::Set(params.specialization),
            service_duration: ActiveValue::Set(params.service_duration),
            health_status: ActiveValue::Set(params.health_status),
            last_checkup: ActiveValue::Set(params.last_checkup),
            blood_type: ActiveValue::Set(params.blood_type),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Soldier::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Soldier>, DbErr> {
        let entity = entity::prelude::Soldier::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Soldier::from_entity))
    }

    /// Gets one page of soldiers matching the filter, newest first.
    ///
    /// # Returns
    /// - `Ok((Vec<Soldier>, u64))` - Soldiers on the page and the total matching count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_paginated(
        &self,
        filter: &SoldierFilter,
        page: PageRequest,
    ) -> Result<(Vec<Soldier>, u64), DbErr> {
        let paginator = Self::filtered(filter)
            .order_by_desc(entity::soldier::Column::CreatedAt)
            .order_by_desc(entity::soldier::Column::Id)
            .paginate(self.db, page.limit);

        let total = paginator.num_items().await?;
        let soldiers = paginator.fetch_page(page.index()).await?;

        Ok((soldiers.into_iter().map(Soldier::from_entity).collect(), total))
    }

    /// Gets every soldier. Used for dashboard statistics.
    pub async fn get_all(&self) -> Result<Vec<Soldier>, DbErr> {
        let entities = entity::prelude::Soldier::find().all(self.db).await?;

        Ok(entities.into_iter().map(Soldier::from_entity).collect())
    }

    /// Gets every soldier of a corps, ordered by name.
    pub async fn get_by_corps(&self, corps: Corps) -> Result<Vec<Soldier>, DbErr> {
        let entities = entity::prelude::Soldier::find()
            .filter(entity::soldier::Column::Corps.eq(corps))
            .order_by_asc(entity::soldier::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Soldier::from_entity).collect())
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(Some(Soldier))` - The updated soldier
    /// - `Ok(None)` - No soldier with that id
    /// - `Err(DbErr)` - Database error, including a unique violation on `nrp`
    pub async fn update(&self, params: UpdateSoldierParams) -> Result<Option<Soldier>, DbErr> {
        let Some(existing) = entity::prelude::Soldier::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::soldier::ActiveModel = existing.into();
        if let Some(nrp) = params.nrp {
            active.nrp = ActiveValue::Set(nrp);
        }
        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(rank) = params.rank {
            active.rank = ActiveValue::Set(rank);
        }
        if let Some(corps) = params.corps {
            active.corps = ActiveValue::Set(corps);
        }
        if let Some(unit) = params.unit {
            active.unit = ActiveValue::Set(unit);
        }
        if let Some(education) = params.education {
            active.education = ActiveValue::Set(education);
        }
        if let Some(specialization) = params.specialization {
            // An explicit empty string clears the specialization
            active.specialization =
                ActiveValue::Set(Some(specialization).filter(|s| !s.is_empty()));
        }
        if let Some(years) = params.service_duration {
            active.service_duration = ActiveValue::Set(years);
        }
        if let Some(health_status) = params.health_status {
            active.health_status = ActiveValue::Set(health_status);
        }
        if let Some(last_checkup) = params.last_checkup {
            active.last_checkup = ActiveValue::Set(last_checkup);
        }
        if let Some(blood_type) = params.blood_type {
            active.blood_type = ActiveValue::Set(blood_type);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Ok(Some(Soldier::from_entity(entity)))
    }

    /// Deletes a soldier by id.
    ///
    /// # Returns
    /// - `Ok(Some(Soldier))` - The soldier as it was before deletion
    /// - `Ok(None)` - No soldier with that id
    pub async fn delete(&self, id: i32) -> Result<Option<Soldier>, DbErr> {
        let Some(existing) = entity::prelude::Soldier::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        entity::prelude::Soldier::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(Some(Soldier::from_entity(existing)))
    }

    fn filtered(filter: &SoldierFilter) -> Select<entity::soldier::Entity> {
        let mut query = entity::prelude::Soldier::find();

        // SQLite LIKE is case-insensitive for ASCII
        if let Some(search) = &filter.search {
            query = query.filter(
                Condition::any()
                    .add(entity::soldier::Column::Name.like(contains_pattern(search)))
                    .add(entity::soldier::Column::Nrp.like(contains_pattern(search))),
            );
        }
        if let Some(rank) = filter.rank {
            query = query.filter(entity::soldier::Column::Rank.eq(rank));
        }
        if let Some(unit) = &filter.unit {
            query = query.filter(entity::soldier::Column::Unit.eq(unit.as_str()));
        }

        query
    }
}
