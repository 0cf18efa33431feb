use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{BloodType, Corps, Education, HealthStatus, Rank};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "soldier")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub nrp: String,
    pub name: String,
    pub rank: Rank,
    pub corps: Corps,
    /// Display name of the unit, matched against `unit.name`.
    pub unit: String,
    pub education: Education,
    pub specialization: Option<String>,
    pub service_duration: i32,
    pub health_status: HealthStatus,
    pub last_checkup: Option<Date>,
    pub blood_type: Option<BloodType>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
