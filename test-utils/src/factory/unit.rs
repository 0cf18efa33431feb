//! Unit factory for creating test unit entities.

use chrono::Utc;
use entity::sea_orm_active_enums::UnitType;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test units with customizable fields.
pub struct UnitFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    code: String,
    unit_type: UnitType,
    base: String,
    latitude: f64,
    longitude: f64,
    commander: Option<String>,
}

impl<'a> UnitFactory<'a> {
    /// Creates a new UnitFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Unit {id}"`, code: `"UNIT{id}"`
    /// - unit_type: `Lanud`, base: `"Jakarta"`
    /// - location: Halim Perdanakusuma coordinates
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Unit {}", id),
            code: format!("UNIT{}", id),
            unit_type: UnitType::Lanud,
            base: "Jakarta".to_string(),
            latitude: -6.2665,
            longitude: 106.8907,
            commander: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn unit_type(mut self, unit_type: UnitType) -> Self {
        self.unit_type = unit_type;
        self
    }

    pub fn base(mut self, base: impl Into<String>) -> Self {
        self.base = base.into();
        self
    }

    pub fn location(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = latitude;
        self.longitude = longitude;
        self
    }

    pub fn commander(mut self, commander: impl Into<String>) -> Self {
        self.commander = Some(commander.into());
        self
    }

    /// Builds and inserts the unit entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::unit::Model)` - Created unit entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::unit::Model, DbErr> {
        let now = Utc::now();
        entity::unit::ActiveModel {
            name: ActiveValue::Set(self.name),
            code: ActiveValue::Set(self.code),
            unit_type: ActiveValue::Set(self.unit_type),
            base: ActiveValue::Set(self.base),
            latitude: ActiveValue::Set(self.latitude),
            longitude: ActiveValue::Set(self.longitude),
            commander: ActiveValue::Set(self.commander),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a unit with default values.
pub async fn create_unit(db: &DatabaseConnection) -> Result<entity::unit::Model, DbErr> {
    UnitFactory::new(db).build().await
}
