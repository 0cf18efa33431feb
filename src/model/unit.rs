use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LocationDto {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UnitDto {
    pub id: i32,
    pub name: String,
    pub code: String,
    #[serde(rename = "type")]
    pub unit_type: String,
    pub base: String,
    pub location: LocationDto,
    /// Live count of soldiers whose unit equals this unit's name.
    pub personnel_count: u64,
    pub commander: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUnitDto {
    pub name: String,
    pub code: String,
    #[serde(rename = "type")]
    pub unit_type: String,
    pub base: String,
    pub location: LocationDto,
    #[serde(default)]
    pub commander: Option<String>,
}

/// Partial update; absent fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUnitDto {
    pub name: Option<String>,
    pub code: Option<String>,
    #[serde(rename = "type")]
    pub unit_type: Option<String>,
    pub base: Option<String>,
    pub location: Option<LocationDto>,
    pub commander: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UnitQueryDto {
    /// Case-insensitive substring matched against name or code.
    pub search: Option<String>,
    /// Exact unit type.
    #[serde(rename = "type")]
    pub unit_type: Option<String>,
    /// Exact base name.
    pub base: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DoctorDto {
    pub name: String,
    pub rank: String,
    pub specialization: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UnitLocationDto {
    pub id: i32,
    pub name: String,
    pub code: String,
    pub base: String,
    pub location: LocationDto,
    pub personnel_count: u64,
    pub doctors: Vec<DoctorDto>,
}
