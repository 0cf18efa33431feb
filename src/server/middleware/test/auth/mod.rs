use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use chrono::Duration;
use entity::sea_orm_active_enums::Role;
use test_utils::fixture;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, Permission},
    model::user::User,
    service::token::TokenService,
};

mod require;

fn tokens() -> TokenService {
    TokenService::new("test-secret", Duration::hours(24))
}

fn user_with_role(role: Role) -> User {
    User::from_entity(fixture::user::entity_builder().id(7).role(role).build())
}

fn bearer(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}
