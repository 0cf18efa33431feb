use axum::{
    extract::{rejection::{JsonRejection, PathRejection, QueryRejection}, Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto, PaginatedDto},
        soldier::{
            CreateSoldierDto, SoldierDto, SoldierQueryDto, SoldierStatsDto, UpdateSoldierDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            auth::Actor,
            pagination::PageRequest,
            soldier::{CreateSoldierParams, Soldier, SoldierFilter, UpdateSoldierParams},
        },
        service::soldier::{SoldierService, DEFAULT_SOLDIER_LIMIT},
        state::AppState,
    },
};

/// Tag for grouping soldier endpoints in OpenAPI documentation
pub static SOLDIER_TAG: &str = "soldier";

/// Get a page of soldiers.
///
/// Returns soldiers newest first, filtered by an optional case-insensitive search over
/// name and NRP, an exact rank and an exact unit name.
///
/// # Access Control
/// - Any authenticated user
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `query` - Filters plus `page` (from 1) and `limit` (default 10)
///
/// # Returns
/// - `200 OK` - Page of soldiers with pagination metadata
/// - `400 Bad Request` - Unknown rank or page/limit below 1
/// - `401 Unauthorized` - Missing, invalid or expired token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/soldiers",
    tag = SOLDIER_TAG,
    params(SoldierQueryDto),
    responses(
        (status = 200, description = "Successfully retrieved soldiers", body = PaginatedDto<SoldierDto>),
        (status = 400, description = "Invalid filter or pagination parameters", body = ErrorDto),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_soldiers(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<SoldierQueryDto>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[])?;
    let Query(query) = query?;

    let filter = SoldierFilter::from_dto(&query)?;
    let page = PageRequest::new(query.page, query.limit, DEFAULT_SOLDIER_LIMIT)?;

    let soldiers = SoldierService::new(&state.db)
        .get_paginated(&filter, page)
        .await?;

    Ok(Json(soldiers.into_dto(Soldier::into_dto)))
}

/// Get dashboard statistics over every soldier.
///
/// Computes totals, specialist and lowest-education counts, the mean service duration
/// and grouped counts by rank, unit and health status. Recomputed on every request.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - Aggregated statistics; an empty roster yields zeros
/// - `401 Unauthorized` - Missing, invalid or expired token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/soldiers/stats",
    tag = SOLDIER_TAG,
    responses(
        (status = 200, description = "Successfully computed statistics", body = SoldierStatsDto),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_soldier_stats(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    let stats = SoldierService::new(&state.db).stats().await?;

    Ok(Json(stats.into_dto()))
}

/// Get a soldier by id.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - The soldier
/// - `401 Unauthorized` - Missing, invalid or expired token
/// - `404 Not Found` - No soldier with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/soldiers/{id}",
    tag = SOLDIER_TAG,
    params(
        ("id" = i32, Path, description = "Soldier ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved soldier", body = SoldierDto),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorDto),
        (status = 404, description = "Soldier not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_soldier(
    State(state): State<AppState>,
    headers: HeaderMap,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[])?;
    let Path(id) = id?;

    let soldier = SoldierService::new(&state.db).get_by_id(id).await?;

    Ok(Json(soldier.into_dto()))
}

/// Create a soldier.
///
/// Validates enumerations against their fixed sets and records a `create` activity for
/// the caller.
///
/// # Access Control
/// - Any authenticated user
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token and client address
/// - `payload` - Soldier fields
///
/// # Returns
/// - `201 Created` - The created soldier
/// - `400 Bad Request` - Invalid soldier data or NRP already exists
/// - `401 Unauthorized` - Missing, invalid or expired token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/soldiers",
    tag = SOLDIER_TAG,
    request_body = CreateSoldierDto,
    responses(
        (status = 201, description = "Successfully created soldier", body = SoldierDto),
        (status = 400, description = "Invalid soldier data or NRP already exists", body = ErrorDto),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_soldier(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateSoldierDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.tokens, &headers).require(&[])?;
    let Json(payload) = payload?;

    let params = CreateSoldierParams::from_dto(payload)?;
    let actor = Actor::new(&user, &headers);

    let soldier = SoldierService::new(&state.db).create(&actor, params).await?;

    Ok((StatusCode::CREATED, Json(soldier.into_dto())))
}

/// Update a soldier.
///
/// Applies a partial update; absent fields keep their stored values. Records an
/// `update` activity for the caller.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - The updated soldier
/// - `400 Bad Request` - Invalid soldier data or NRP already exists
/// - `401 Unauthorized` - Missing, invalid or expired token
/// - `404 Not Found` - No soldier with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/soldiers/{id}",
    tag = SOLDIER_TAG,
    params(
        ("id" = i32, Path, description = "Soldier ID")
    ),
    request_body = UpdateSoldierDto,
    responses(
        (status = 200, description = "Successfully updated soldier", body = SoldierDto),
        (status = 400, description = "Invalid soldier data or NRP already exists", body = ErrorDto),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorDto),
        (status = 404, description = "Soldier not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_soldier(
    State(state): State<AppState>,
    headers: HeaderMap,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateSoldierDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.tokens, &headers).require(&[])?;
    let Path(id) = id?;
    let Json(payload) = payload?;

    let params = UpdateSoldierParams::from_dto(id, payload)?;
    let actor = Actor::new(&user, &headers);

    let soldier = SoldierService::new(&state.db).update(&actor, params).await?;

    Ok(Json(soldier.into_dto()))
}

/// Delete a soldier.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - Soldier deleted
/// - `401 Unauthorized` - Missing, invalid or expired token
/// - `404 Not Found` - No soldier with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/soldiers/{id}",
    tag = SOLDIER_TAG,
    params(
        ("id" = i32, Path, description = "Soldier ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted soldier", body = MessageDto),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorDto),
        (status = 404, description = "Soldier not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_soldier(
    State(state): State<AppState>,
    headers: HeaderMap,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.tokens, &headers).require(&[])?;
    let Path(id) = id?;
    let actor = Actor::new(&user, &headers);

    SoldierService::new(&state.db).delete(&actor, id).await?;

    Ok(Json(MessageDto {
        message: "Soldier deleted successfully".to_string(),
    }))
}
