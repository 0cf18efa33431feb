use axum::{
    extract::{rejection::{JsonRejection, PathRejection, QueryRejection}, Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto, PaginatedDto},
        user::{CreateUserDto, UpdateUserDto, UserDto, UserQueryDto, UserStatusDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            auth::Actor,
            pagination::PageRequest,
            user::{NewUser, User, UserChanges, UserFilter},
        },
        service::user::{UserService, DEFAULT_USER_LIMIT},
        state::AppState,
    },
};

/// Tag for grouping user management endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Get a page of dashboard accounts.
///
/// # Access Control
/// - `SuperAdmin` - Only super admins can manage accounts
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `query` - Search over name and email, exact role, `page` and `limit` (default 10)
///
/// # Returns
/// - `200 OK` - Page of accounts; password hashes are never included
/// - `400 Bad Request` - Unknown role or page/limit below 1
/// - `401 Unauthorized` - Missing, invalid or expired token
/// - `403 Forbidden` - Caller is not a super admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    params(UserQueryDto),
    responses(
        (status = 200, description = "Successfully retrieved users", body = PaginatedDto<UserDto>),
        (status = 400, description = "Invalid filter or pagination parameters", body = ErrorDto),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorDto),
        (status = 403, description = "Caller is not a super admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<UserQueryDto>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[Permission::SuperAdmin])?;
    let Query(query) = query?;

    let filter = UserFilter::from_dto(&query)?;
    let page = PageRequest::new(query.page, query.limit, DEFAULT_USER_LIMIT)?;

    let users = UserService::new(&state.db)
        .get_paginated(&filter, page)
        .await?;

    Ok(Json(users.into_dto(User::into_dto)))
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved user", body = UserDto),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorDto),
        (status = 403, description = "Caller is not a super admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[Permission::SuperAdmin])?;
    let Path(id) = id?;

    let user = UserService::new(&state.db).get_by_id(id).await?;

    Ok(Json(user.into_dto()))
}

/// Create an account on behalf of someone else.
///
/// Unlike self-registration, the caller may set the role and the active flag. Records a
/// `create` activity for the caller.
///
/// # Access Control
/// - `SuperAdmin` - Only super admins can manage accounts
///
/// # Returns
/// - `201 Created` - The created account
/// - `400 Bad Request` - Missing fields, unknown role or user already exists
/// - `401 Unauthorized` - Missing, invalid or expired token
/// - `403 Forbidden` - Caller is not a super admin
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "Successfully created user", body = UserStatusDto),
        (status = 400, description = "Invalid user data or user already exists", body = ErrorDto),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorDto),
        (status = 403, description = "Caller is not a super admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateUserDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.tokens, &headers).require(&[Permission::SuperAdmin])?;
    let Json(payload) = payload?;

    let new_user = NewUser::new(
        payload.name,
        payload.email,
        payload.password,
        payload.role.as_deref(),
        payload.active,
    )?;
    let actor = Actor::new(&caller, &headers);

    let user = UserService::new(&state.db).create(&actor, new_user).await?;

    Ok((
        StatusCode::CREATED,
        Json(UserStatusDto {
            message: "User created successfully".to_string(),
            user: user.into_dto(),
        }),
    ))
}

/// Update an account.
///
/// A changed email is re-checked for uniqueness and a new password is re-hashed.
///
/// # Access Control
/// - `SuperAdmin` - Only super admins can manage accounts
///
/// # Returns
/// - `200 OK` - The updated account
/// - `400 Bad Request` - Invalid user data or email already in use
/// - `401 Unauthorized` - Missing, invalid or expired token
/// - `403 Forbidden` - Caller is not a super admin
/// - `404 Not Found` - No user with that id
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Successfully updated user", body = UserDto),
        (status = 400, description = "Invalid user data or user already exists", body = ErrorDto),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorDto),
        (status = 403, description = "Caller is not a super admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateUserDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.tokens, &headers).require(&[Permission::SuperAdmin])?;
    let Path(id) = id?;
    let Json(payload) = payload?;

    let changes = UserChanges::from_dto(payload)?;
    let actor = Actor::new(&caller, &headers);

    let user = UserService::new(&state.db)
        .update(&actor, id, changes)
        .await?;

    Ok(Json(user.into_dto()))
}

/// Flip an account's active flag.
///
/// Deactivated accounts can no longer log in, but tokens already issued stay valid
/// until they expire.
///
/// # Access Control
/// - `SuperAdmin` - Only super admins can manage accounts
///
/// # Returns
/// - `200 OK` - The account with its new status
/// - `401 Unauthorized` - Missing, invalid or expired token
/// - `403 Forbidden` - Caller is not a super admin
/// - `404 Not Found` - No user with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/users/{id}/toggle-status",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Successfully toggled user status", body = UserStatusDto),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorDto),
        (status = 403, description = "Caller is not a super admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn toggle_user_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.tokens, &headers).require(&[Permission::SuperAdmin])?;
    let Path(id) = id?;
    let actor = Actor::new(&caller, &headers);

    let user = UserService::new(&state.db)
        .toggle_status(&actor, id)
        .await?;

    let status = if user.active { "activated" } else { "deactivated" };

    Ok(Json(UserStatusDto {
        message: format!("User {} successfully", status),
        user: user.into_dto(),
    }))
}

/// Delete an account.
///
/// Activity log entries written by the account keep their copied actor name.
///
/// # Access Control
/// - `SuperAdmin` - Only super admins can manage accounts
///
/// # Returns
/// - `200 OK` - Account deleted
/// - `401 Unauthorized` - Missing, invalid or expired token
/// - `403 Forbidden` - Caller is not a super admin
/// - `404 Not Found` - No user with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted user", body = MessageDto),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorDto),
        (status = 403, description = "Caller is not a super admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.tokens, &headers).require(&[Permission::SuperAdmin])?;
    let Path(id) = id?;
    let actor = Actor::new(&caller, &headers);

    UserService::new(&state.db).delete(&actor, id).await?;

    Ok(Json(MessageDto {
        message: "User deleted successfully".to_string(),
    }))
}
