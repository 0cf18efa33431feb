//! Password login, self-registration and logout.

use entity::sea_orm_active_enums::ActivityAction;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::{
        activity_log::CreateActivityLogParams,
        auth::Actor,
        user::{NewUser, User},
    },
    service::{activity_log::ActivityLogService, token::TokenService, user::UserService},
    util::password::verify_password,
};

const AUDIT_ENTITY: &str = "auth";

/// Service for credential checks and token issuance.
///
/// Login is the only state transition: a successful login issues a token and records a
/// `login` activity. Nothing is stored server-side for the session.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Checks credentials and issues a token.
    ///
    /// # Arguments
    /// - `email` - Login email, matched case-insensitively
    /// - `password` - Plain password
    /// - `origin` - Client address recorded on the `login` activity
    ///
    /// # Returns
    /// - `Ok((String, User))` - Signed token and the authenticated user
    /// - `Err(AuthError::AccountUnavailable)` - Unknown email or inactive account
    /// - `Err(AuthError::InvalidCredentials)` - Password does not match
    pub async fn login(
        &self,
        email: &str,
        password: &str,
        origin: Option<String>,
    ) -> Result<(String, User), AppError> {
        let email = email.trim().to_lowercase();

        let user = match UserRepository::new(self.db).find_by_email(&email).await? {
            Some(user) if user.active => user,
            _ => {
                tracing::debug!("Login refused for '{}': unknown or inactive", email);
                return Err(AuthError::AccountUnavailable.into());
            }
        };

        if !verify_password(password, &user.password_hash)? {
            tracing::debug!("Login refused for user {}: wrong password", user.id);
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.tokens.issue(&user)?;

        let actor = Actor {
            id: user.id,
            name: user.name.clone(),
            origin,
        };
        ActivityLogService::new(self.db)
            .record(CreateActivityLogParams::new(
                &actor,
                ActivityAction::Login,
                AUDIT_ENTITY,
                Some(user.id.to_string()),
                Some("User logged in".to_string()),
            ))
            .await;

        Ok((token, user))
    }

    /// Registers a new account. The role defaults to `user` when not requested.
    ///
    /// # Returns
    /// - `Ok(User)` - The created account
    /// - `Err(AppError::Conflict)` - The email is already registered
    pub async fn register(&self, new_user: NewUser) -> Result<User, AppError> {
        UserService::new(self.db).register(new_user).await
    }

    /// Records a `logout` activity. The token stays valid until it expires.
    pub async fn logout(&self, actor: &Actor) {
        ActivityLogService::new(self.db)
            .record(CreateActivityLogParams::new(
                actor,
                ActivityAction::Logout,
                AUDIT_ENTITY,
                Some(actor.id.to_string()),
                Some("User logged out".to_string()),
            ))
            .await;
    }
}
