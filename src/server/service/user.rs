//! User service: account administration with auditing.
//!
//! Emails are checked for uniqueness before writing so the common case gets a clear
//! `Conflict`; the unique index still catches concurrent duplicates.

use entity::sea_orm_active_enums::ActivityAction;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::{
        activity_log::CreateActivityLogParams,
        auth::Actor,
        pagination::{Page, PageRequest},
        user::{CreateUserParams, NewUser, UpdateUserParams, User, UserChanges, UserFilter},
    },
    service::activity_log::ActivityLogService,
    util::password::hash_password,
};

/// Default page size for user listings.
pub const DEFAULT_USER_LIMIT: u64 = 10;

const AUDIT_ENTITY: &str = "user";
const DUPLICATE_EMAIL: &str = "User already exists";

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_paginated(
        &self,
        filter: &UserFilter,
        page: PageRequest,
    ) -> Result<Page<User>, AppError> {
        let (users, total) = UserRepository::new(self.db)
            .get_paginated(filter, page)
            .await?;

        Ok(Page::new(users, total, page))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(not_found)
    }

    /// Hashes the password and inserts the account without auditing.
    ///
    /// Shared by self-registration, administrator-created accounts and the startup
    /// bootstrap.
    ///
    /// # Returns
    /// - `Ok(User)` - The created account
    /// - `Err(AppError::Conflict)` - The email is already registered
    pub async fn register(&self, new_user: NewUser) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.find_by_email(&new_user.email).await?.is_some() {
            return Err(AppError::Conflict(DUPLICATE_EMAIL.to_string()));
        }

        let password_hash = hash_password(&new_user.password)?;

        repo.create(CreateUserParams {
            name: new_user.name,
            email: new_user.email,
            password_hash,
            role: new_user.role,
            active: new_user.active,
        })
        .await
        .map_err(|e| AppError::from_unique_violation(e, DUPLICATE_EMAIL))
    }

    /// Creates an account on behalf of an administrator and records a `create` activity.
    pub async fn create(&self, actor: &Actor, new_user: NewUser) -> Result<User, AppError> {
        let user = self.register(new_user).await?;

        self.audit(
            actor,
            ActivityAction::Create,
            &user,
            format!("Created user: {}", user.name),
        )
        .await;

        Ok(user)
    }

    /// Applies a partial update and records an `update` activity.
    ///
    /// A new password is hashed before storing; a changed email is re-checked for
    /// uniqueness.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated account
    /// - `Err(AppError::NotFound)` - No user with that id
    /// - `Err(AppError::Conflict)` - The new email belongs to another account
    pub async fn update(
        &self,
        actor: &Actor,
        id: i32,
        changes: UserChanges,
    ) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        if let Some(email) = &changes.email {
            if let Some(owner) = repo.find_by_email(email).await? {
                if owner.id != id {
                    return Err(AppError::Conflict(DUPLICATE_EMAIL.to_string()));
                }
            }
        }

        let password_hash = changes
            .password
            .as_deref()
            .map(hash_password)
            .transpose()?;

        let user = repo
            .update(UpdateUserParams {
                id,
                name: changes.name,
                email: changes.email,
                role: changes.role,
                active: changes.active,
                password_hash,
            })
            .await
            .map_err(|e| AppError::from_unique_violation(e, DUPLICATE_EMAIL))?
            .ok_or_else(not_found)?;

        self.audit(
            actor,
            ActivityAction::Update,
            &user,
            format!("Updated user: {}", user.name),
        )
        .await;

        Ok(user)
    }

    /// Flips the active flag and records an `update` activity.
    pub async fn toggle_status(&self, actor: &Actor, id: i32) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        let current = repo.find_by_id(id).await?.ok_or_else(not_found)?;

        let user = repo
            .update(UpdateUserParams {
                id,
                active: Some(!current.active),
                ..Default::default()
            })
            .await?
            .ok_or_else(not_found)?;

        let status = if user.active { "Active" } else { "Inactive" };
        self.audit(
            actor,
            ActivityAction::Update,
            &user,
            format!("Toggled user status: {} - {}", user.name, status),
        )
        .await;

        Ok(user)
    }

    /// Deletes an account and records a `delete` activity.
    pub async fn delete(&self, actor: &Actor, id: i32) -> Result<User, AppError> {
        let user = UserRepository::new(self.db)
            .delete(id)
            .await?
            .ok_or_else(not_found)?;

        self.audit(
            actor,
            ActivityAction::Delete,
            &user,
            format!("Deleted user: {}", user.name),
        )
        .await;

        Ok(user)
    }

    async fn audit(&self, actor: &Actor, action: ActivityAction, user: &User, details: String) {
        ActivityLogService::new(self.db)
            .record(CreateActivityLogParams::new(
                actor,
                action,
                AUDIT_ENTITY,
                Some(user.id.to_string()),
                Some(details),
            ))
            .await;
    }
}

fn not_found() -> AppError {
    AppError::NotFound("User not found".to_string())
}
