use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        auth::{AuthUserDto, LoginDto, LoginResponseDto, RegisterDto},
        user::UserStatusDto,
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            auth::{Actor, AuthUser},
            user::NewUser,
        },
        service::auth::AuthService,
        state::AppState,
        util::origin::request_origin,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Log in with email and password.
///
/// Verifies the credentials of an active account and issues a signed bearer token
/// embedding the user's id, email, role and name. A `login` activity is recorded with
/// the client address taken from the proxy headers.
///
/// # Access Control
/// - Public
///
/// # Arguments
/// - `state` - Application state containing the database connection and token service
/// - `headers` - Request headers, used for the client address
/// - `payload` - Email and password
///
/// # Returns
/// - `200 OK` - Token and the authenticated identity
/// - `400 Bad Request` - Malformed body
/// - `401 Unauthorized` - Unknown email, inactive account or wrong password
/// - `500 Internal Server Error` - Database or signing error
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Successfully logged in", body = LoginResponseDto),
        (status = 400, description = "Malformed request body", body = ErrorDto),
        (status = 401, description = "Invalid credentials or account is inactive", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<LoginDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let service = AuthService::new(&state.db, &state.tokens);
    let (token, user) = service
        .login(&payload.email, &payload.password, request_origin(&headers))
        .await?;

    Ok(Json(LoginResponseDto {
        token,
        user: AuthUser::from_user(&user).into_dto(),
    }))
}

/// Register a new account.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `201 Created` - The created account; the role defaults to `user`
/// - `400 Bad Request` - Missing fields, unknown role or email already registered
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Successfully registered", body = UserStatusDto),
        (status = 400, description = "Invalid registration data or user already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let new_user = NewUser::new(
        payload.name,
        payload.email,
        payload.password,
        payload.role.as_deref(),
        None,
    )?;

    let user = AuthService::new(&state.db, &state.tokens)
        .register(new_user)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(UserStatusDto {
            message: "User created successfully".to_string(),
            user: user.into_dto(),
        }),
    ))
}

/// Get the identity carried by the request's bearer token.
///
/// The identity is read from the token only; it reflects the account as it was when
/// the token was issued.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - Identity embedded in the token
/// - `401 Unauthorized` - Missing, invalid or expired token
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = AuthUserDto),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorDto)
    ),
)]
pub async fn me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.tokens, &headers).require(&[])?;

    Ok(Json(user.into_dto()))
}

/// Log out.
///
/// Records a `logout` activity. Tokens are stateless, so the presented token stays
/// valid until it expires; clients discard it.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - Logout recorded
/// - `401 Unauthorized` - Missing, invalid or expired token
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Successfully logged out", body = MessageDto),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorDto)
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.tokens, &headers).require(&[])?;
    let actor = Actor::new(&user, &headers);

    AuthService::new(&state.db, &state.tokens)
        .logout(&actor)
        .await;

    Ok(Json(MessageDto {
        message: "Logged out successfully".to_string(),
    }))
}
