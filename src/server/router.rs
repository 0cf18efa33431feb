//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here together with their OpenAPI specifications,
//! and Swagger UI is served at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, state::AppState};

/// Builds the application's HTTP router with every API endpoint and Swagger UI.
///
/// Handlers that share a path are registered in a single `routes!` group so their
/// method routers are merged.
///
/// # Registered Endpoints
/// - `GET /api/health`
/// - `POST /api/auth/login`, `POST /api/auth/register`, `GET /api/auth/me`,
///   `POST /api/auth/logout`
/// - `GET|POST /api/soldiers`, `GET /api/soldiers/stats`, `GET|PUT|DELETE /api/soldiers/{id}`
/// - `GET|POST /api/units`, `GET /api/units/locations`, `GET|PUT|DELETE /api/units/{id}`
/// - `GET|POST /api/notifications`, `PATCH /api/notifications/{id}/read`,
///   `DELETE /api/notifications/{id}`
/// - `GET|POST /api/activity-logs`
/// - `GET|POST /api/users`, `GET|PUT|DELETE /api/users/{id}`,
///   `PATCH /api/users/{id}/toggle-status`
///
/// The OpenAPI document is available at `/api/docs/openapi.json`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Personnel", description = "Personnel records administration API"), tags(
        (name = controller::health::HEALTH_TAG, description = "Service health"),
        (name = controller::auth::AUTH_TAG, description = "Authentication API routes"),
        (name = controller::soldier::SOLDIER_TAG, description = "Soldier records and statistics"),
        (name = controller::unit::UNIT_TAG, description = "Units and their map locations"),
        (name = controller::notification::NOTIFICATION_TAG, description = "Dashboard notifications"),
        (name = controller::activity_log::ACTIVITY_LOG_TAG, description = "Audit trail"),
        (name = controller::user::USER_TAG, description = "Account administration, super admin only"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::health::health))
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::register))
        .routes(routes!(controller::auth::me))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(
            controller::soldier::get_soldiers,
            controller::soldier::create_soldier
        ))
        .routes(routes!(controller::soldier::get_soldier_stats))
        .routes(routes!(
            controller::soldier::get_soldier,
            controller::soldier::update_soldier,
            controller::soldier::delete_soldier
        ))
        .routes(routes!(
            controller::unit::get_units,
            controller::unit::create_unit
        ))
        .routes(routes!(controller::unit::get_unit_locations))
        .routes(routes!(
            controller::unit::get_unit,
            controller::unit::update_unit,
            controller::unit::delete_unit
        ))
        .routes(routes!(
            controller::notification::get_notifications,
            controller::notification::create_notification
        ))
        .routes(routes!(controller::notification::mark_notification_read))
        .routes(routes!(controller::notification::delete_notification))
        .routes(routes!(
            controller::activity_log::get_activity_logs,
            controller::activity_log::create_activity_log
        ))
        .routes(routes!(
            controller::user::get_users,
            controller::user::create_user
        ))
        .routes(routes!(
            controller::user::get_user,
            controller::user::update_user,
            controller::user::delete_user
        ))
        .routes(routes!(controller::user::toggle_user_status))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
