//! Unit data repository for database operations.
//!
//! Personnel counts are never stored. They are computed from the soldier table with a
//! grouped count on every read, and a rename is propagated to soldiers in the same
//! transaction as the unit update. Unit names are not unique; soldiers cannot tell two
//! units of the same name apart, so both count the same members.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait,
    DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    TransactionTrait,
};

use crate::server::{
    model::unit::{CreateUnitParams, Unit, UnitFilter, UpdateUnitParams},
    util::search::contains_pattern,
};

/// Repository providing database operations for units.
pub struct UnitRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UnitRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new unit.
    ///
    /// # Returns
    /// - `Ok(Unit)` - The created unit with its current personnel count
    /// - `Err(DbErr)` - Database error, including a unique violation on `code`
    pub async fn create(&self, params: CreateUnitParams) -> Result<Unit, DbErr> {
        let now = Utc::now();
        let entity = entity::unit::ActiveModel {
            name: ActiveValue::Set(params.name),
            code: ActiveValue::Set(params.code),
            unit_type: ActiveValue::Set(params.unit_type),
            base: ActiveValue::Set(params.base),
            latitude: ActiveValue::Set(params.location.latitude),
            longitude: ActiveValue::Set(params.location.longitude),
            commander: ActiveValue::Set(params.commander),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        // Soldiers may already reference the name before the unit exists
        let count = self.personnel_count(&entity.name).await?;

        Ok(Unit::from_entity(entity, count))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Unit>, DbErr> {
        let Some(entity) = entity::prelude::Unit::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let count = self.personnel_count(&entity.name).await?;

        Ok(Some(Unit::from_entity(entity, count)))
    }

    /// Gets every unit matching the filter, newest first, with live personnel counts.
    pub async fn get_all(&self, filter: &UnitFilter) -> Result<Vec<Unit>, DbErr> {
        let mut query = entity::prelude::Unit::find();

        if let Some(search) = &filter.search {
            query = query.filter(
                Condition::any()
                    .add(entity::unit::Column::Name.like(contains_pattern(search)))
                    .add(entity::unit::Column::Code.like(contains_pattern(search))),
            );
        }
        if let Some(unit_type) = filter.unit_type {
            query = query.filter(entity::unit::Column::UnitType.eq(unit_type));
        }
        if let Some(base) = &filter.base {
            query = query.filter(entity::unit::Column::Base.eq(base.as_str()));
        }

        let entities = query
            .order_by_desc(entity::unit::Column::CreatedAt)
            .order_by_desc(entity::unit::Column::Id)
            .all(self.db)
            .await?;

        let counts = self.personnel_counts().await?;

        Ok(entities
            .into_iter()
            .map(|entity| {
                let count = counts.get(&entity.name).copied().unwrap_or(0);
                Unit::from_entity(entity, count)
            })
            .collect())
    }

    /// Applies a partial update, renaming soldiers' unit references when the name changes.
    ///
    /// The unit update and the soldier rename commit together or not at all. When another
    /// unit has the same old name, soldiers keep that name.
    ///
    /// # Returns
    /// - `Ok(Some(Unit))` - The updated unit with its live personnel count
    /// - `Ok(None)` - No unit with that id
    /// - `Err(DbErr)` - Database error, including a unique violation on `code`
    pub async fn update(&self, params: UpdateUnitParams) -> Result<Option<Unit>, DbErr> {
        let txn = self.db.begin().await?;

        let Some(existing) = entity::prelude::Unit::find_by_id(params.id).one(&txn).await? else {
            return Ok(None);
        };
        let old_name = existing.name.clone();

        let mut active: entity::unit::ActiveModel = existing.into();
        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(code) = params.code {
            active.code = ActiveValue::Set(code);
        }
        if let Some(unit_type) = params.unit_type {
            active.unit_type = ActiveValue::Set(unit_type);
        }
        if let Some(base) = params.base {
            active.base = ActiveValue::Set(base);
        }
        if let Some(location) = params.location {
            active.latitude = ActiveValue::Set(location.latitude);
            active.longitude = ActiveValue::Set(location.longitude);
        }
        if let Some(commander) = params.commander {
            active.commander = ActiveValue::Set(Some(commander).filter(|c| !c.is_empty()));
        }
        let now = Utc::now();
        active.updated_at = ActiveValue::Set(now);

        let entity = active.update(&txn).await?;

        // Soldiers reference units by name, so they only follow the rename when no other
        // unit still carries the old name
        if entity.name != old_name && !self.name_in_use(&txn, &old_name, entity.id).await? {
            entity::prelude::Soldier::update_many()
                .col_expr(
                    entity::soldier::Column::Unit,
                    Expr::value(entity.name.clone()),
                )
                .col_expr(entity::soldier::Column::UpdatedAt, Expr::value(now))
                .filter(entity::soldier::Column::Unit.eq(old_name.as_str()))
                .exec(&txn)
                .await?;
        }

        txn.commit().await?;

        let count = self.personnel_count(&entity.name).await?;

        Ok(Some(Unit::from_entity(entity, count)))
    }

    /// Deletes a unit by id. Soldiers keep their unit name.
    ///
    /// # Returns
    /// - `Ok(Some(Unit))` - The unit as it was before deletion
    /// - `Ok(None)` - No unit with that id
    pub async fn delete(&self, id: i32) -> Result<Option<Unit>, DbErr> {
        let Some(unit) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        entity::prelude::Unit::delete_by_id(id).exec(self.db).await?;

        Ok(Some(unit))
    }

    async fn name_in_use<C: ConnectionTrait>(
        &self,
        conn: &C,
        name: &str,
        except_id: i32,
    ) -> Result<bool, DbErr> {
        let others = entity::prelude::Unit::find()
            .filter(entity::unit::Column::Name.eq(name))
            .filter(entity::unit::Column::Id.ne(except_id))
            .count(conn)
            .await?;

        Ok(others > 0)
    }

    /// Counts soldiers whose unit name equals `name`.
    pub async fn personnel_count(&self, name: &str) -> Result<u64, DbErr> {
        entity::prelude::Soldier::find()
            .filter(entity::soldier::Column::Unit.eq(name))
            .count(self.db)
            .await
    }

    /// Counts soldiers per unit name with one grouped query.
    pub async fn personnel_counts(&self) -> Result<HashMap<String, u64>, DbErr> {
        let rows = entity::prelude::Soldier::find()
            .select_only()
            .column(entity::soldier::Column::Unit)
            .column_as(entity::soldier::Column::Id.count(), "count")
            .group_by(entity::soldier::Column::Unit)
            .into_tuple::<(String, i64)>()
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(name, count)| (name, count.max(0) as u64))
            .collect())
    }
}
