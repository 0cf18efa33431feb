use axum::{
    extract::{rejection::{JsonRejection, PathRejection, QueryRejection}, Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        notification::{CreateNotificationDto, NotificationDto, NotificationQueryDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::notification::{CreateNotificationParams, Notification},
        service::notification::NotificationService,
        state::AppState,
    },
};

/// Tag for grouping notification endpoints in OpenAPI documentation
pub static NOTIFICATION_TAG: &str = "notification";

/// Get the most recent notifications, newest first.
///
/// At most 50 notifications are returned. With `userId`, only notifications addressed
/// to that user are included.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - Recent notifications
/// - `401 Unauthorized` - Missing, invalid or expired token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/notifications",
    tag = NOTIFICATION_TAG,
    params(NotificationQueryDto),
    responses(
        (status = 200, description = "Successfully retrieved notifications", body = Vec<NotificationDto>),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_notifications(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<NotificationQueryDto>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[])?;
    let Query(query) = query?;

    let notifications = NotificationService::new(&state.db)
        .get_recent(query.user_id)
        .await?;

    Ok(Json(
        notifications
            .into_iter()
            .map(Notification::into_dto)
            .collect::<Vec<_>>(),
    ))
}

/// Create a notification.
///
/// New notifications are unread; the type defaults to `info`. Without `userId` the
/// notification is a broadcast.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `201 Created` - The created notification
/// - `400 Bad Request` - Missing title or message, or unknown type
/// - `401 Unauthorized` - Missing, invalid or expired token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/notifications",
    tag = NOTIFICATION_TAG,
    request_body = CreateNotificationDto,
    responses(
        (status = 201, description = "Successfully created notification", body = NotificationDto),
        (status = 400, description = "Invalid notification data", body = ErrorDto),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_notification(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateNotificationDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[])?;
    let Json(payload) = payload?;

    let params = CreateNotificationParams::from_dto(payload)?;
    let notification = NotificationService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(notification.into_dto())))
}

/// Mark a notification as read. Marking an already read notification is a no-op.
#[utoipa::path(
    patch,
    path = "/api/notifications/{id}/read",
    tag = NOTIFICATION_TAG,
    params(
        ("id" = i32, Path, description = "Notification ID")
    ),
    responses(
        (status = 200, description = "Notification marked as read", body = NotificationDto),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorDto),
        (status = 404, description = "Notification not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_notification_read(
    State(state): State<AppState>,
    headers: HeaderMap,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[])?;
    let Path(id) = id?;

    let notification = NotificationService::new(&state.db).mark_read(id).await?;

    Ok(Json(notification.into_dto()))
}

#[utoipa::path(
    delete,
    path = "/api/notifications/{id}",
    tag = NOTIFICATION_TAG,
    params(
        ("id" = i32, Path, description = "Notification ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted notification", body = MessageDto),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorDto),
        (status = 404, description = "Notification not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_notification(
    State(state): State<AppState>,
    headers: HeaderMap,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[])?;
    let Path(id) = id?;

    NotificationService::new(&state.db).delete(id).await?;

    Ok(Json(MessageDto {
        message: "Notification deleted successfully".to_string(),
    }))
}
