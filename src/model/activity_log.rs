use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLogDto {
    pub id: i32,
    pub user_id: i32,
    pub user_name: String,
    pub action: String,
    pub entity: String,
    pub entity_id: Option<String>,
    pub details: Option<String>,
    pub ip_address: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Entry appended on behalf of the caller; actor and origin come from the request.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateActivityLogDto {
    pub action: String,
    pub entity: String,
    #[serde(default)]
    pub entity_id: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ActivityLogQueryDto {
    /// Exact actor id.
    pub user_id: Option<i32>,
    /// Exact action kind.
    pub action: Option<String>,
    /// Inclusive lower bound, RFC 3339 or `YYYY-MM-DD`.
    pub start_date: Option<String>,
    /// Inclusive upper bound, RFC 3339 or `YYYY-MM-DD` (whole day).
    pub end_date: Option<String>,
    /// Page number, starting at 1 (default: 1).
    pub page: Option<u64>,
    /// Items per page, 1 to 100 (default: 20).
    pub limit: Option<u64>,
}
