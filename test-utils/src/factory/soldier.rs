//! Soldier factory for creating test soldier entities.

use chrono::{NaiveDate, Utc};
use entity::sea_orm_active_enums::{BloodType, Corps, Education, HealthStatus, Rank};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test soldiers with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::soldier::SoldierFactory;
///
/// let soldier = SoldierFactory::new(&db)
///     .nrp("99999999")
///     .rank(Rank::Kapten)
///     .unit("Lanud Halim Perdanakusuma")
///     .build()
///     .await?;
/// ```
pub struct SoldierFactory<'a> {
    db: &'a DatabaseConnection,
    nrp: String,
    name: String,
    rank: Rank,
    corps: Corps,
    unit: String,
    education: Education,
    specialization: Option<String>,
    service_duration: i32,
    health_status: HealthStatus,
    last_checkup: Option<NaiveDate>,
    blood_type: Option<BloodType>,
}

impl<'a> SoldierFactory<'a> {
    /// Creates a new SoldierFactory with default values.
    ///
    /// Defaults:
    /// - nrp: unique 8-digit number
    /// - name: `"Soldier {id}"`
    /// - rank: `Kapten`, corps: `Penerbang`, education: `S1`
    /// - unit: `"Lanud Halim Perdanakusuma"`
    /// - service_duration: `5`, health_status: `Sehat`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            nrp: format!("{:08}", 10_000_000 + id),
            name: format!("Soldier {}", id),
            rank: Rank::Kapten,
            corps: Corps::Penerbang,
            unit: "Lanud Halim Perdanakusuma".to_string(),
            education: Education::S1,
            specialization: None,
            service_duration: 5,
            health_status: HealthStatus::Sehat,
            last_checkup: None,
            blood_type: None,
        }
    }

    pub fn nrp(mut self, nrp: impl Into<String>) -> Self {
        self.nrp = nrp.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn rank(mut self, rank: Rank) -> Self {
        self.rank = rank;
        self
    }

    pub fn corps(mut self, corps: Corps) -> Self {
        self.corps = corps;
        self
    }

    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    pub fn education(mut self, education: Education) -> Self {
        self.education = education;
        self
    }

    pub fn specialization(mut self, specialization: impl Into<String>) -> Self {
        self.specialization = Some(specialization.into());
        self
    }

    pub fn service_duration(mut self, years: i32) -> Self {
        self.service_duration = years;
        self
    }

    pub fn health_status(mut self, health_status: HealthStatus) -> Self {
        self.health_status = health_status;
        self
    }

    pub fn last_checkup(mut self, date: NaiveDate) -> Self {
        self.last_checkup = Some(date);
        self
    }

    pub fn blood_type(mut self, blood_type: BloodType) -> Self {
        self.blood_type = Some(blood_type);
        self
    }

    /// Builds and inserts the soldier entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::soldier::Model)` - Created soldier entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::soldier::Model, DbErr> {
        let now = Utc::now();
        entity::soldier::ActiveModel {
            nrp: ActiveValue::Set(self.nrp),
            name: ActiveValue::Set(self.name),
            rank: ActiveValue::Set(self.rank),
            corps: ActiveValue::Set(self.corps),
            unit: ActiveValue::Set(self.unit),
            education: ActiveValue::Set(self.education),
            specialization: ActiveValue::Set(self.specialization),
            service_duration: ActiveValue::Set(self.service_duration),
            health_status: ActiveValue::Set(self.health_status),
            last_checkup: ActiveValue::Set(self.last_checkup),
            blood_type: ActiveValue::Set(self.blood_type),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a soldier with default values.
///
/// Shorthand for `SoldierFactory::new(db).build().await`.
pub async fn create_soldier(db: &DatabaseConnection) -> Result<entity::soldier::Model, DbErr> {
    SoldierFactory::new(db).build().await
}

/// Creates a soldier assigned to the given unit name.
pub async fn create_soldier_in_unit(
    db: &DatabaseConnection,
    unit: impl Into<String>,
) -> Result<entity::soldier::Model, DbErr> {
    SoldierFactory::new(db).unit(unit).build().await
}
