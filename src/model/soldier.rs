use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SoldierDto {
    pub id: i32,
    pub nrp: String,
    pub name: String,
    pub rank: String,
    pub corps: String,
    pub unit: String,
    pub education: String,
    pub specialization: Option<String>,
    pub service_duration: i32,
    pub health_status: String,
    pub last_checkup: Option<NaiveDate>,
    pub blood_type: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSoldierDto {
    pub nrp: String,
    pub name: String,
    pub rank: String,
    pub corps: String,
    pub unit: String,
    pub education: String,
    #[serde(default)]
    pub specialization: Option<String>,
    #[serde(default)]
    pub service_duration: i32,
    #[serde(default)]
    pub health_status: Option<String>,
    #[serde(default)]
    pub last_checkup: Option<String>,
    #[serde(default)]
    pub blood_type: Option<String>,
}

/// Partial update; absent fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSoldierDto {
    pub nrp: Option<String>,
    pub name: Option<String>,
    pub rank: Option<String>,
    pub corps: Option<String>,
    pub unit: Option<String>,
    pub education: Option<String>,
    /// An empty string clears the specialization.
    pub specialization: Option<String>,
    pub service_duration: Option<i32>,
    pub health_status: Option<String>,
    /// An empty string clears the checkup date.
    pub last_checkup: Option<String>,
    /// An empty string clears the blood type.
    pub blood_type: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SoldierQueryDto {
    /// Case-insensitive substring matched against name or NRP.
    pub search: Option<String>,
    /// Exact rank.
    pub rank: Option<String>,
    /// Exact unit name.
    pub unit: Option<String>,
    /// Page number, starting at 1 (default: 1).
    pub page: Option<u64>,
    /// Items per page, 1 to 100 (default: 10).
    pub limit: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GroupCountDto {
    pub name: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SoldierStatsDto {
    pub total: u64,
    pub no_education: u64,
    pub specialists: u64,
    pub avg_service_duration: f64,
    pub by_rank: Vec<GroupCountDto>,
    pub by_unit: Vec<GroupCountDto>,
    pub health_stats: Vec<GroupCountDto>,
}
