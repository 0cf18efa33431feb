use axum::{
    body::to_bytes,
    http::{header::AUTHORIZATION, HeaderMap, HeaderValue},
    response::Response,
};
use chrono::Duration;
use sea_orm::DatabaseConnection;
use serde::de::DeserializeOwned;

use crate::server::{model::user::User, service::token::TokenService, state::AppState};


fn state(db: &DatabaseConnection) -> AppState {
    AppState::new(
        db.clone(),
        TokenService::new("controller-test-secret", Duration::hours(1)),
    )
}

/// Headers carrying a freshly issued bearer token for `user`.
fn auth_headers(state: &AppState, user: &entity::user::Model) -> HeaderMap {
    let token = state
        .tokens
        .issue(&User::from_entity(user.clone()))
        .unwrap();

    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}

async fn body_json<T: DeserializeOwned>(response: Response) -> T {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
