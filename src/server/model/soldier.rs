//! Soldier domain models, parameters and dashboard statistics.
//!
//! Provides the `Soldier` personnel record, filter and parameter types for list, create and
//! update operations, and `SoldierStats`, the aggregate shown on the dashboard.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use entity::sea_orm_active_enums::{BloodType, Corps, Education, HealthStatus, Rank};
use sea_orm::ActiveEnum;

use crate::{
    model::soldier::{
        CreateSoldierDto, GroupCountDto, SoldierDto, SoldierQueryDto, SoldierStatsDto,
        UpdateSoldierDto,
    },
    server::{
        error::AppError,
        util::parse::{optional_text, parse_date, parse_enum, parse_optional_enum, require_text},
    },
};

/// Personnel record of a single soldier.
#[derive(Debug, Clone, PartialEq)]
pub struct Soldier {
    pub id: i32,
    /// Unique service number.
    pub nrp: String,
    pub name: String,
    pub rank: Rank,
    pub corps: Corps,
    /// Unit display name. Matched against `Unit::name`, not a foreign key.
    pub unit: String,
    pub education: Education,
    pub specialization: Option<String>,
    /// Years of service.
    pub service_duration: i32,
    pub health_status: HealthStatus,
    pub last_checkup: Option<NaiveDate>,
    pub blood_type: Option<BloodType>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Soldier {
    /// Converts an entity model to a soldier domain model at the repository boundary.
    pub fn from_entity(entity: entity::soldier::Model) -> Self {
        Self {
            id: entity.id,
            nrp: entity.nrp,
            name: entity.name,
            rank: entity.rank,
            corps: entity.corps,
            unit: entity.unit,
            education: entity.education,
            specialization: entity.specialization,
            service_duration: entity.service_duration,
            health_status: entity.health_status,
            last_checkup: entity.last_checkup,
            blood_type: entity.blood_type,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Converts the soldier domain model to a DTO for API responses.
    pub fn into_dto(self) -> SoldierDto {
        SoldierDto {
            id: self.id,
            nrp: self.nrp,
            name: self.name,
            rank: self.rank.to_value(),
            corps: self.corps.to_value(),
            unit: self.unit,
            education: self.education.to_value(),
            specialization: self.specialization,
            service_duration: self.service_duration,
            health_status: self.health_status.to_value(),
            last_checkup: self.last_checkup,
            blood_type: self.blood_type.map(|b| b.to_value()),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Whether the soldier has a non-blank specialization.
    pub fn is_specialist(&self) -> bool {
        self.specialization
            .as_deref()
            .is_some_and(|s| !s.trim().is_empty())
    }
}

/// Filters for listing soldiers. Empty filters match every record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SoldierFilter {
    /// Case-insensitive substring on name or NRP.
    pub search: Option<String>,
    pub rank: Option<Rank>,
    /// Exact unit name.
    pub unit: Option<String>,
}

impl SoldierFilter {
    pub fn from_dto(dto: &SoldierQueryDto) -> Result<Self, AppError> {
        Ok(Self {
            search: optional_text(dto.search.clone()),
            rank: parse_optional_enum("rank", dto.rank.as_deref())?,
            unit: optional_text(dto.unit.clone()),
        })
    }
}

fn validate_service_duration(years: i32) -> Result<i32, AppError> {
    if years < 0 {
        return Err(AppError::BadRequest(
            "serviceDuration must not be negative".to_string(),
        ));
    }
    Ok(years)
}

/// Parameters for creating a soldier.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateSoldierParams {
    pub nrp: String,
    pub name: String,
    pub rank: Rank,
    pub corps: Corps,
    pub unit: String,
    pub education: Education,
    pub specialization: Option<String>,
    pub service_duration: i32,
    pub health_status: HealthStatus,
    pub last_checkup: Option<NaiveDate>,
    pub blood_type: Option<BloodType>,
}

impl CreateSoldierParams {
    /// Validates a create request and converts it to parameters.
    ///
    /// Health status defaults to `Sehat` when absent.
    ///
    /// # Returns
    /// - `Ok(CreateSoldierParams)` - Request is well formed
    /// - `Err(AppError::BadRequest)` - Blank required field, unknown enumeration value,
    ///   negative service duration or unparsable checkup date
    pub fn from_dto(dto: CreateSoldierDto) -> Result<Self, AppError> {
        Ok(Self {
            nrp: require_text("nrp", dto.nrp)?,
            name: require_text("name", dto.name)?,
            rank: parse_enum("rank", &dto.rank)?,
            corps: parse_enum("corps", &dto.corps)?,
            unit: require_text("unit", dto.unit)?,
            education: parse_enum("education", &dto.education)?,
            specialization: optional_text(dto.specialization),
            service_duration: validate_service_duration(dto.service_duration)?,
            health_status: parse_optional_enum("healthStatus", dto.health_status.as_deref())?
                .unwrap_or(HealthStatus::Sehat),
            last_checkup: dto
                .last_checkup
                .as_deref()
                .map(|d| parse_date("lastCheckup", d))
                .transpose()?,
            blood_type: parse_optional_enum("bloodType", dto.blood_type.as_deref())?,
        })
    }
}

/// Parameters for a partial soldier update. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateSoldierParams {
    pub id: i32,
    pub nrp: Option<String>,
    pub name: Option<String>,
    pub rank: Option<Rank>,
    pub corps: Option<Corps>,
    pub unit: Option<String>,
    pub education: Option<Education>,
    pub specialization: Option<String>,
    pub service_duration: Option<i32>,
    pub health_status: Option<HealthStatus>,
    /// `Some(None)` clears the stored date.
    pub last_checkup: Option<Option<NaiveDate>>,
    /// `Some(None)` clears the stored blood type.
    pub blood_type: Option<Option<BloodType>>,
}

impl UpdateSoldierParams {
    pub fn from_dto(id: i32, dto: UpdateSoldierDto) -> Result<Self, AppError> {
        Ok(Self {
            id,
            nrp: dto.nrp.map(|v| require_text("nrp", v)).transpose()?,
            name: dto.name.map(|v| require_text("name", v)).transpose()?,
            rank: parse_optional_enum("rank", dto.rank.as_deref())?,
            corps: parse_optional_enum("corps", dto.corps.as_deref())?,
            unit: dto.unit.map(|v| require_text("unit", v)).transpose()?,
            education: parse_optional_enum("education", dto.education.as_deref())?,
            specialization: dto.specialization.map(|s| s.trim().to_string()),
            service_duration: dto
                .service_duration
                .map(validate_service_duration)
                .transpose()?,
            health_status: parse_optional_enum("healthStatus", dto.health_status.as_deref())?,
            last_checkup: dto
                .last_checkup
                .as_deref()
                .map(str::trim)
                .map(|d| {
                    // An explicit empty string clears the date
                    (!d.is_empty())
                        .then(|| parse_date("lastCheckup", d))
                        .transpose()
                })
                .transpose()?,
            blood_type: dto
                .blood_type
                .as_deref()
                .map(str::trim)
                .map(|b| parse_optional_enum("bloodType", Some(b).filter(|b| !b.is_empty())))
                .transpose()?,
        })
    }
}

/// Number of soldiers sharing one value of a grouped field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupCount {
    pub name: String,
    pub count: u64,
}

impl GroupCount {
    pub fn into_dto(self) -> GroupCountDto {
        GroupCountDto {
            name: self.name,
            count: self.count,
        }
    }
}

/// Dashboard statistics over the whole soldier collection.
#[derive(Debug, Clone, PartialEq)]
pub struct SoldierStats {
    pub total: u64,
    /// Soldiers whose highest education is `SMA`.
    pub no_education: u64,
    /// Soldiers with a non-blank specialization.
    pub specialists: u64,
    /// Mean years of service, `0.0` for an empty collection.
    pub avg_service_duration: f64,
    pub by_rank: Vec<GroupCount>,
    pub by_unit: Vec<GroupCount>,
    pub health_stats: Vec<GroupCount>,
}

impl SoldierStats {
    /// Aggregates statistics from a full list of soldiers.
    ///
    /// Grouped counts are ordered by count descending, ties broken by name ascending.
    pub fn from_soldiers(soldiers: &[Soldier]) -> Self {
        let total = soldiers.len() as u64;

        let no_education = soldiers
            .iter()
            .filter(|s| s.education == Education::Sma)
            .count() as u64;

        let specialists = soldiers.iter().filter(|s| s.is_specialist()).count() as u64;

        let avg_service_duration = if soldiers.is_empty() {
            0.0
        } else {
            let sum: i64 = soldiers.iter().map(|s| s.service_duration as i64).sum();
            sum as f64 / soldiers.len() as f64
        };

        Self {
            total,
            no_education,
            specialists,
            avg_service_duration,
            by_rank: group_counts(soldiers.iter().map(|s| s.rank.to_value())),
            by_unit: group_counts(soldiers.iter().map(|s| s.unit.clone())),
            health_stats: group_counts(soldiers.iter().map(|s| s.health_status.to_value())),
        }
    }

    pub fn into_dto(self) -> SoldierStatsDto {
        SoldierStatsDto {
            total: self.total,
            no_education: self.no_education,
            specialists: self.specialists,
            avg_service_duration: self.avg_service_duration,
            by_rank: self.by_rank.into_iter().map(GroupCount::into_dto).collect(),
            by_unit: self.by_unit.into_iter().map(GroupCount::into_dto).collect(),
            health_stats: self
                .health_stats
                .into_iter()
                .map(GroupCount::into_dto)
                .collect(),
        }
    }
}

fn group_counts(values: impl Iterator<Item = String>) -> Vec<GroupCount> {
    let mut counts: HashMap<String, u64> = HashMap::new();
    for value in values {
        *counts.entry(value).or_default() += 1;
    }

    let mut groups: Vec<GroupCount> = counts
        .into_iter()
        .map(|(name, count)| GroupCount { name, count })
        .collect();
    groups.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    groups
}
