//! Soldier fixtures for creating in-memory test data.

use chrono::{DateTime, NaiveDate, Utc};
use entity::{
    sea_orm_active_enums::{BloodType, Corps, Education, HealthStatus, Rank},
    soldier,
};

/// Default test soldier NRP.
pub const DEFAULT_NRP: &str = "52100001";

/// Default test soldier name.
pub const DEFAULT_NAME: &str = "Test Soldier";

/// Default unit the fixture soldier belongs to.
pub const DEFAULT_UNIT: &str = "Lanud Halim Perdanakusuma";

/// Creates a soldier entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - nrp: `"52100001"`
/// - rank: `Kapten`, corps: `Penerbang`, education: `S1`
/// - unit: `"Lanud Halim Perdanakusuma"`
/// - service_duration: `5`, health_status: `Sehat`
///
/// # Returns
/// - `soldier::Model` - In-memory soldier entity
pub fn entity() -> soldier::Model {
    entity_builder().build()
}

/// Creates a soldier entity builder for customization.
pub fn entity_builder() -> SoldierEntityBuilder {
    SoldierEntityBuilder::default()
}

/// Builder for creating customized soldier entity models.
pub struct SoldierEntityBuilder {
    id: i32,
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
    created_at: DateTime<Utc>,
}

impl Default for SoldierEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            nrp: DEFAULT_NRP.to_string(),
            name: DEFAULT_NAME.to_string(),
            rank: Rank::Kapten,
            corps: Corps::Penerbang,
            unit: DEFAULT_UNIT.to_string(),
            education: Education::S1,
            specialization: None,
            service_duration: 5,
            health_status: HealthStatus::Sehat,
            last_checkup: None,
            blood_type: None,
            created_at: Utc::now(),
        }
    }
}

impl SoldierEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
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

    /// Sets the specialization. An empty string counts as no specialization in
    /// statistics.
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

    /// Builds and returns the soldier entity model.
    pub fn build(self) -> soldier::Model {
        soldier::Model {
            id: self.id,
            nrp: self.nrp,
            name: self.name,
            rank: self.rank,
            corps: self.corps,
            unit: self.unit,
            education: self.education,
            specialization: self.specialization,
            service_duration: self.service_duration,
            health_status: self.health_status,
            last_checkup: self.last_checkup,
            blood_type: self.blood_type,
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}
