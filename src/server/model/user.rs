//! User domain models and parameters.
//!
//! Provides the dashboard account model with role and active flag, plus parameter types
//! for registration, administration and updates. Password hashes stay inside the server;
//! `into_dto` never exposes them.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::Role;
use sea_orm::ActiveEnum;

use crate::{
    model::user::{UpdateUserDto, UserDto, UserQueryDto},
    server::{
        error::AppError,
        util::parse::{optional_text, parse_optional_enum, require_text},
    },
};

/// Dashboard account.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    /// Unique, stored lowercase.
    pub email: String,
    pub name: String,
    /// Argon2id PHC string.
    pub password_hash: String,
    pub role: Role,
    /// Inactive accounts cannot log in.
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            name: entity.name,
            password_hash: entity.password_hash,
            role: entity.role,
            active: entity.active,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Converts the user domain model to a DTO for API responses, dropping the hash.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            role: self.role.to_value(),
            active: self.active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Trims, lowercases and sanity-checks an email address.
pub fn normalize_email(email: String) -> Result<String, AppError> {
    let email = require_text("email", email)?.to_lowercase();
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(email),
        _ => Err(AppError::BadRequest(format!(
            "Invalid email: '{}'",
            email
        ))),
    }
}

/// Rejects empty passwords. Whitespace is significant and kept as typed.
pub fn require_password(password: String) -> Result<String, AppError> {
    if password.is_empty() {
        return Err(AppError::BadRequest("password is required".to_string()));
    }
    Ok(password)
}

/// Filters for listing users. Empty filters match every record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserFilter {
    /// Case-insensitive substring on name or email.
    pub search: Option<String>,
    pub role: Option<Role>,
}

impl UserFilter {
    pub fn from_dto(dto: &UserQueryDto) -> Result<Self, AppError> {
        Ok(Self {
            search: optional_text(dto.search.clone()),
            role: parse_optional_enum("role", dto.role.as_deref())?,
        })
    }
}

/// Validated account details before hashing.
///
/// Used by both self-registration and administrator-created accounts.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub active: bool,
}

impl NewUser {
    /// Validates raw account fields.
    ///
    /// # Arguments
    /// - `role` - Role display value, defaults to `user` when absent
    /// - `active` - Defaults to `true` when absent
    pub fn new(
        name: String,
        email: String,
        password: String,
        role: Option<&str>,
        active: Option<bool>,
    ) -> Result<Self, AppError> {
        Ok(Self {
            name: require_text("name", name)?,
            email: normalize_email(email)?,
            password: require_password(password)?,
            role: parse_optional_enum("role", role)?.unwrap_or(Role::User),
            active: active.unwrap_or(true),
        })
    }
}

/// Parameters for inserting a user whose password is already hashed.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateUserParams {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub active: bool,
}

/// Validated partial update before the optional password is hashed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
    pub active: Option<bool>,
    pub password: Option<String>,
}

impl UserChanges {
    pub fn from_dto(dto: UpdateUserDto) -> Result<Self, AppError> {
        Ok(Self {
            name: dto.name.map(|v| require_text("name", v)).transpose()?,
            email: dto.email.map(normalize_email).transpose()?,
            role: parse_optional_enum("role", dto.role.as_deref())?,
            active: dto.active,
            password: dto.password.map(require_password).transpose()?,
        })
    }
}

/// Parameters for a partial user update. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateUserParams {
    pub id: i32,
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
    pub active: Option<bool>,
    /// Already hashed replacement password.
    pub password_hash: Option<String>,
}
