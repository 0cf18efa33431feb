//! Authenticated identity, token claims and audit actors.

use axum::http::HeaderMap;
use entity::sea_orm_active_enums::Role;
use sea_orm::ActiveEnum;
use serde::{Deserialize, Serialize};

use crate::{
    model::auth::AuthUserDto,
    server::{error::auth::AuthError, model::user::User, util::origin::request_origin},
};

/// JWT claims carried by every issued token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// User id.
    pub sub: i32,
    pub email: String,
    /// Role display value, e.g. `"super_admin"`.
    pub role: String,
    pub name: String,
    /// Issued-at, seconds since the Unix epoch.
    pub iat: i64,
    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,
}

/// Identity decoded from a verified bearer token.
///
/// Tokens are not checked against the database, so an account deactivated after
/// login keeps this identity until the token expires.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthUser {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub role: Role,
}

impl AuthUser {
    /// Builds the identity from decoded claims.
    ///
    /// # Returns
    /// - `Ok(AuthUser)` - Claims carry a known role
    /// - `Err(AuthError::InvalidToken)` - Role claim is not a known role
    pub fn from_claims(claims: Claims) -> Result<Self, AuthError> {
        let role = Role::try_from_value(&claims.role)
            .map_err(|_| AuthError::InvalidToken(format!("unknown role '{}'", claims.role)))?;

        Ok(Self {
            id: claims.sub,
            email: claims.email,
            name: claims.name,
            role,
        })
    }

    pub fn from_user(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
            role: user.role,
        }
    }

    pub fn into_dto(self) -> AuthUserDto {
        AuthUserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            role: self.role.to_value(),
        }
    }
}

/// Who performed a mutation and from where, as recorded in the activity log.
#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    pub id: i32,
    /// Display name at the time of the action.
    pub name: String,
    /// Client address, if the request carried one.
    pub origin: Option<String>,
}

impl Actor {
    pub fn new(user: &AuthUser, headers: &HeaderMap) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            origin: request_origin(headers),
        }
    }
}
