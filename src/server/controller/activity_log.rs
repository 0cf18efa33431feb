use axum::{
    extract::{rejection::{JsonRejection, QueryRejection}, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        activity_log::{ActivityLogDto, ActivityLogQueryDto, CreateActivityLogDto},
        api::{ErrorDto, PaginatedDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            activity_log::{ActivityLog, ActivityLogFilter, CreateActivityLogParams},
            auth::Actor,
            pagination::PageRequest,
        },
        service::activity_log::{ActivityLogService, DEFAULT_ACTIVITY_LOG_LIMIT},
        state::AppState,
    },
};

/// Tag for grouping activity log endpoints in OpenAPI documentation
pub static ACTIVITY_LOG_TAG: &str = "activity-log";

/// Get a page of the audit trail, newest first.
///
/// # Access Control
/// - Any authenticated user
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `query` - `userId`, `action`, `startDate`/`endDate` (RFC 3339 or `YYYY-MM-DD`,
///   both inclusive), `page` and `limit` (default 20)
///
/// # Returns
/// - `200 OK` - Page of activity log entries with pagination metadata
/// - `400 Bad Request` - Unknown action, unparsable date or page/limit below 1
/// - `401 Unauthorized` - Missing, invalid or expired token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/activity-logs",
    tag = ACTIVITY_LOG_TAG,
    params(ActivityLogQueryDto),
    responses(
        (status = 200, description = "Successfully retrieved activity logs", body = PaginatedDto<ActivityLogDto>),
        (status = 400, description = "Invalid filter or pagination parameters", body = ErrorDto),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_activity_logs(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<ActivityLogQueryDto>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[])?;
    let Query(query) = query?;

    let filter = ActivityLogFilter::from_dto(&query)?;
    let page = PageRequest::new(query.page, query.limit, DEFAULT_ACTIVITY_LOG_LIMIT)?;

    let logs = ActivityLogService::new(&state.db)
        .get_paginated(&filter, page)
        .await?;

    Ok(Json(logs.into_dto(ActivityLog::into_dto)))
}

/// Append an entry to the audit trail on behalf of the caller.
///
/// The actor id and name come from the token and the address from the request headers;
/// the body only names the action and its target.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `201 Created` - The appended entry
/// - `400 Bad Request` - Unknown action or missing entity
/// - `401 Unauthorized` - Missing, invalid or expired token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/activity-logs",
    tag = ACTIVITY_LOG_TAG,
    request_body = CreateActivityLogDto,
    responses(
        (status = 201, description = "Successfully recorded activity", body = ActivityLogDto),
        (status = 400, description = "Invalid activity data", body = ErrorDto),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_activity_log(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateActivityLogDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.tokens, &headers).require(&[])?;
    let Json(payload) = payload?;

    let actor = Actor::new(&user, &headers);
    let params = CreateActivityLogParams::from_dto(&actor, payload)?;

    let log = ActivityLogService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(log.into_dto())))
}
