//! Unit domain models and parameters.
//!
//! Units are organizational formations with a map position. Membership is derived from
//! soldiers whose free-text `unit` equals the unit's name, so personnel counts are always
//! computed at read time and never stored.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{Rank, UnitType};
use sea_orm::ActiveEnum;

use crate::{
    model::unit::{
        CreateUnitDto, DoctorDto, LocationDto, UnitDto, UnitLocationDto, UnitQueryDto,
        UpdateUnitDto,
    },
    server::{
        error::AppError,
        util::parse::{optional_text, parse_enum, parse_optional_enum, require_text},
    },
};

/// Geographic position of a unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    /// Validates coordinate ranges.
    ///
    /// # Returns
    /// - `Ok(Location)` - Latitude within ±90 and longitude within ±180
    /// - `Err(AppError::BadRequest)` - Either coordinate is out of range or not finite
    pub fn from_dto(dto: LocationDto) -> Result<Self, AppError> {
        if !dto.latitude.is_finite() || !(-90.0..=90.0).contains(&dto.latitude) {
            return Err(AppError::BadRequest(
                "latitude must be between -90 and 90".to_string(),
            ));
        }
        if !dto.longitude.is_finite() || !(-180.0..=180.0).contains(&dto.longitude) {
            return Err(AppError::BadRequest(
                "longitude must be between -180 and 180".to_string(),
            ));
        }

        Ok(Self {
            latitude: dto.latitude,
            longitude: dto.longitude,
        })
    }

    pub fn into_dto(self) -> LocationDto {
        LocationDto {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

/// Organizational unit with its live personnel count.
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    pub id: i32,
    pub name: String,
    /// Unique unit code.
    pub code: String,
    pub unit_type: UnitType,
    pub base: String,
    pub location: Location,
    /// Soldiers whose unit name equals `name` at the time of the read.
    pub personnel_count: u64,
    pub commander: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Unit {
    /// Converts an entity model to a unit domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The unit entity from the database
    /// - `personnel_count` - Live count of soldiers assigned to the unit's name
    pub fn from_entity(entity: entity::unit::Model, personnel_count: u64) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            code: entity.code,
            unit_type: entity.unit_type,
            base: entity.base,
            location: Location {
                latitude: entity.latitude,
                longitude: entity.longitude,
            },
            personnel_count,
            commander: entity.commander,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> UnitDto {
        UnitDto {
            id: self.id,
            name: self.name,
            code: self.code,
            unit_type: self.unit_type.to_value(),
            base: self.base,
            location: self.location.into_dto(),
            personnel_count: self.personnel_count,
            commander: self.commander,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Medical-corps soldier shown on the unit map.
#[derive(Debug, Clone, PartialEq)]
pub struct Doctor {
    pub name: String,
    pub rank: Rank,
    pub specialization: Option<String>,
}

impl Doctor {
    pub fn into_dto(self) -> DoctorDto {
        DoctorDto {
            name: self.name,
            rank: self.rank.to_value(),
            specialization: self.specialization,
        }
    }
}

/// Map marker for a unit.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitLocation {
    pub unit: Unit,
    pub doctors: Vec<Doctor>,
}

impl UnitLocation {
    pub fn into_dto(self) -> UnitLocationDto {
        UnitLocationDto {
            id: self.unit.id,
            name: self.unit.name,
            code: self.unit.code,
            base: self.unit.base,
            location: self.unit.location.into_dto(),
            personnel_count: self.unit.personnel_count,
            doctors: self.doctors.into_iter().map(Doctor::into_dto).collect(),
        }
    }
}

/// Filters for listing units. Empty filters match every record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnitFilter {
    /// Case-insensitive substring on name or code.
    pub search: Option<String>,
    pub unit_type: Option<UnitType>,
    /// Exact base name.
    pub base: Option<String>,
}

impl UnitFilter {
    pub fn from_dto(dto: &UnitQueryDto) -> Result<Self, AppError> {
        Ok(Self {
            search: optional_text(dto.search.clone()),
            unit_type: parse_optional_enum("type", dto.unit_type.as_deref())?,
            base: optional_text(dto.base.clone()),
        })
    }
}

/// Parameters for creating a unit.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateUnitParams {
    pub name: String,
    pub code: String,
    pub unit_type: UnitType,
    pub base: String,
    pub location: Location,
    pub commander: Option<String>,
}

impl CreateUnitParams {
    pub fn from_dto(dto: CreateUnitDto) -> Result<Self, AppError> {
        Ok(Self {
            name: require_text("name", dto.name)?,
            code: require_text("code", dto.code)?,
            unit_type: parse_enum("type", &dto.unit_type)?,
            base: require_text("base", dto.base)?,
            location: Location::from_dto(dto.location)?,
            commander: optional_text(dto.commander),
        })
    }
}

/// Parameters for a partial unit update. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateUnitParams {
    pub id: i32,
    /// A new name is propagated to every soldier assigned to the old name.
    pub name: Option<String>,
    pub code: Option<String>,
    pub unit_type: Option<UnitType>,
    pub base: Option<String>,
    pub location: Option<Location>,
    pub commander: Option<String>,
}

impl UpdateUnitParams {
    pub fn from_dto(id: i32, dto: UpdateUnitDto) -> Result<Self, AppError> {
        Ok(Self {
            id,
            name: dto.name.map(|v| require_text("name", v)).transpose()?,
            code: dto.code.map(|v| require_text("code", v)).transpose()?,
            unit_type: parse_optional_enum("type", dto.unit_type.as_deref())?,
            base: dto.base.map(|v| require_text("base", v)).transpose()?,
            location: dto.location.map(Location::from_dto).transpose()?,
            commander: dto.commander.map(|c| c.trim().to_string()),
        })
    }
}
