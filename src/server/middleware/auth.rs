use axum::http::{header::AUTHORIZATION, HeaderMap};
use entity::sea_orm_active_enums::Role;

use crate::server::{
    error::{auth::AuthError, AppError},
    model::auth::AuthUser,
    service::token::TokenService,
};

pub enum Permission {
    /// Role must be exactly `super_admin`.
    SuperAdmin,
}

/// Verifies the bearer token of a request and enforces role gates.
///
/// Identity comes from the token alone; the database is not consulted, so role changes
/// and deactivation take effect when the user's current token expires.
pub struct AuthGuard<'a> {
    tokens: &'a TokenService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(tokens: &'a TokenService, headers: &'a HeaderMap) -> Self {
        Self { tokens, headers }
    }

    /// Authenticates the request and checks every requested permission.
    ///
    /// # Returns
    /// - `Ok(AuthUser)` - Token is valid and all permissions are satisfied
    /// - `Err(AuthError::MissingToken)` - No bearer token in the `Authorization` header
    /// - `Err(AuthError::InvalidToken)` - Token is malformed, tampered or expired
    /// - `Err(AuthError::AccessDenied)` - Role does not satisfy a permission
    pub fn require(&self, permissions: &[Permission]) -> Result<AuthUser, AppError> {
        let Some(token) = bearer_token(self.headers) else {
            return Err(AuthError::MissingToken.into());
        };

        let user = self.tokens.verify(token)?;

        for permission in permissions {
            match permission {
                Permission::SuperAdmin => {
                    if user.role != Role::SuperAdmin {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            "User attempted a user-management operation without the super_admin role"
                                .to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
