//! Unit service: unit CRUD with auditing and the unit map.

use std::collections::HashMap;

use entity::sea_orm_active_enums::{ActivityAction, Corps};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{soldier::SoldierRepository, unit::UnitRepository},
    error::AppError,
    model::{
        activity_log::CreateActivityLogParams,
        auth::Actor,
        unit::{CreateUnitParams, Doctor, Unit, UnitFilter, UnitLocation, UpdateUnitParams},
    },
    service::activity_log::ActivityLogService,
};

const AUDIT_ENTITY: &str = "unit";
const DUPLICATE_CODE: &str = "Unit code already exists";

pub struct UnitService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UnitService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every unit matching the filter, newest first, with live personnel counts.
    pub async fn get_all(&self, filter: &UnitFilter) -> Result<Vec<Unit>, AppError> {
        Ok(UnitRepository::new(self.db).get_all(filter).await?)
    }

    /// Gets a unit by id with its live personnel count.
    ///
    /// # Returns
    /// - `Ok(Unit)` - The unit
    /// - `Err(AppError::NotFound)` - No unit with that id
    pub async fn get_by_id(&self, id: i32) -> Result<Unit, AppError> {
        UnitRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(not_found)
    }

    /// Creates a unit and records a `create` activity for `actor`.
    ///
    /// # Returns
    /// - `Ok(Unit)` - The created unit
    /// - `Err(AppError::Conflict)` - The unit code is already taken
    pub async fn create(&self, actor: &Actor, params: CreateUnitParams) -> Result<Unit, AppError> {
        let unit = UnitRepository::new(self.db)
            .create(params)
            .await
            .map_err(|e| AppError::from_unique_violation(e, DUPLICATE_CODE))?;

        self.audit(
            actor,
            ActivityAction::Create,
            &unit,
            format!("Created unit: {}", unit.name),
        )
        .await;

        Ok(unit)
    }

    /// Applies a partial update and records an `update` activity for `actor`.
    ///
    /// Renaming a unit moves its soldiers to the new name.
    pub async fn update(&self, actor: &Actor, params: UpdateUnitParams) -> Result<Unit, AppError> {
        let unit = UnitRepository::new(self.db)
            .update(params)
            .await
            .map_err(|e| AppError::from_unique_violation(e, DUPLICATE_CODE))?
            .ok_or_else(not_found)?;

        self.audit(
            actor,
            ActivityAction::Update,
            &unit,
            format!("Updated unit: {}", unit.name),
        )
        .await;

        Ok(unit)
    }

    /// Deletes a unit and records a `delete` activity for `actor`.
    ///
    /// Soldiers assigned to the unit are left untouched.
    pub async fn delete(&self, actor: &Actor, id: i32) -> Result<Unit, AppError> {
        let unit = UnitRepository::new(self.db)
            .delete(id)
            .await?
            .ok_or_else(not_found)?;

        self.audit(
            actor,
            ActivityAction::Delete,
            &unit,
            format!("Deleted unit: {}", unit.name),
        )
        .await;

        Ok(unit)
    }

    /// Builds the unit map: every unit with its personnel count and medical staff.
    pub async fn locations(&self) -> Result<Vec<UnitLocation>, AppError> {
        let units = UnitRepository::new(self.db)
            .get_all(&UnitFilter::default())
            .await?;
        let medics = SoldierRepository::new(self.db)
            .get_by_corps(Corps::Kesehatan)
            .await?;

        let mut doctors_by_unit: HashMap<String, Vec<Doctor>> = HashMap::new();
        for soldier in medics {
            doctors_by_unit
                .entry(soldier.unit)
                .or_default()
                .push(Doctor {
                    name: soldier.name,
                    rank: soldier.rank,
                    specialization: soldier.specialization,
                });
        }

        Ok(units
            .into_iter()
            .map(|unit| {
                // Two units may share a name, so each gets its own copy of the list
                let doctors = doctors_by_unit.get(&unit.name).cloned().unwrap_or_default();
                UnitLocation { unit, doctors }
            })
            .collect())
    }

    async fn audit(&self, actor: &Actor, action: ActivityAction, unit: &Unit, details: String) {
        ActivityLogService::new(self.db)
            .record(CreateActivityLogParams::new(
                actor,
                action,
                AUDIT_ENTITY,
                Some(unit.id.to_string()),
                Some(details),
            ))
            .await;
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Unit not found".to_string())
}
