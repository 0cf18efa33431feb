use axum::{
    extract::{rejection::{JsonRejection, PathRejection, QueryRejection}, Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        unit::{CreateUnitDto, UnitDto, UnitLocationDto, UnitQueryDto, UpdateUnitDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            auth::Actor,
            unit::{CreateUnitParams, Unit, UnitFilter, UnitLocation, UpdateUnitParams},
        },
        service::unit::UnitService,
        state::AppState,
    },
};

/// Tag for grouping unit endpoints in OpenAPI documentation
pub static UNIT_TAG: &str = "unit";

/// Get all units matching the filters.
///
/// The list is not paginated. Each unit carries its live personnel count.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - Matching units
/// - `400 Bad Request` - Unknown unit type
/// - `401 Unauthorized` - Missing, invalid or expired token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/units",
    tag = UNIT_TAG,
    params(UnitQueryDto),
    responses(
        (status = 200, description = "Successfully retrieved units", body = Vec<UnitDto>),
        (status = 400, description = "Invalid filter", body = ErrorDto),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_units(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<UnitQueryDto>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[])?;
    let Query(query) = query?;

    let filter = UnitFilter::from_dto(&query)?;
    let units = UnitService::new(&state.db).get_all(&filter).await?;

    Ok(Json(
        units.into_iter().map(Unit::into_dto).collect::<Vec<_>>(),
    ))
}

/// Get map markers for every unit.
///
/// Each marker carries the unit's position, live personnel count and the medical-corps
/// soldiers assigned to it.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - One marker per unit
/// - `401 Unauthorized` - Missing, invalid or expired token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/units/locations",
    tag = UNIT_TAG,
    responses(
        (status = 200, description = "Successfully retrieved unit locations", body = Vec<UnitLocationDto>),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_unit_locations(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    let locations = UnitService::new(&state.db).locations().await?;

    Ok(Json(
        locations
            .into_iter()
            .map(UnitLocation::into_dto)
            .collect::<Vec<_>>(),
    ))
}

#[utoipa::path(
    get,
    path = "/api/units/{id}",
    tag = UNIT_TAG,
    params(
        ("id" = i32, Path, description = "Unit ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved unit", body = UnitDto),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorDto),
        (status = 404, description = "Unit not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_unit(
    State(state): State<AppState>,
    headers: HeaderMap,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[])?;
    let Path(id) = id?;

    let unit = UnitService::new(&state.db).get_by_id(id).await?;

    Ok(Json(unit.into_dto()))
}

/// Create a unit.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `201 Created` - The created unit
/// - `400 Bad Request` - Invalid unit data or unit code already exists
/// - `401 Unauthorized` - Missing, invalid or expired token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/units",
    tag = UNIT_TAG,
    request_body = CreateUnitDto,
    responses(
        (status = 201, description = "Successfully created unit", body = UnitDto),
        (status = 400, description = "Invalid unit data or unit code already exists", body = ErrorDto),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_unit(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateUnitDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.tokens, &headers).require(&[])?;
    let Json(payload) = payload?;

    let params = CreateUnitParams::from_dto(payload)?;
    let actor = Actor::new(&user, &headers);

    let unit = UnitService::new(&state.db).create(&actor, params).await?;

    Ok((StatusCode::CREATED, Json(unit.into_dto())))
}

/// Update a unit.
///
/// A changed name is carried over to every soldier assigned to the old name within the
/// same transaction.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - The updated unit
/// - `400 Bad Request` - Invalid unit data or unit code already exists
/// - `401 Unauthorized` - Missing, invalid or expired token
/// - `404 Not Found` - No unit with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/units/{id}",
    tag = UNIT_TAG,
    params(
        ("id" = i32, Path, description = "Unit ID")
    ),
    request_body = UpdateUnitDto,
    responses(
        (status = 200, description = "Successfully updated unit", body = UnitDto),
        (status = 400, description = "Invalid unit data or unit code already exists", body = ErrorDto),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorDto),
        (status = 404, description = "Unit not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_unit(
    State(state): State<AppState>,
    headers: HeaderMap,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateUnitDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.tokens, &headers).require(&[])?;
    let Path(id) = id?;
    let Json(payload) = payload?;

    let params = UpdateUnitParams::from_dto(id, payload)?;
    let actor = Actor::new(&user, &headers);

    let unit = UnitService::new(&state.db).update(&actor, params).await?;

    Ok(Json(unit.into_dto()))
}

/// Delete a unit.
///
/// Soldiers assigned to the unit are left in place with their unit name unchanged.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - Unit deleted
/// - `401 Unauthorized` - Missing, invalid or expired token
/// - `404 Not Found` - No unit with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/units/{id}",
    tag = UNIT_TAG,
    params(
        ("id" = i32, Path, description = "Unit ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted unit", body = MessageDto),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorDto),
        (status = 404, description = "Unit not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_unit(
    State(state): State<AppState>,
    headers: HeaderMap,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.tokens, &headers).require(&[])?;
    let Path(id) = id?;
    let actor = Actor::new(&user, &headers);

    UnitService::new(&state.db).delete(&actor, id).await?;

    Ok(Json(MessageDto {
        message: "Unit deleted successfully".to_string(),
    }))
}
