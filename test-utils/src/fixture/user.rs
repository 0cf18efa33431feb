//! User fixtures for creating in-memory test data.

use chrono::Utc;
use entity::{sea_orm_active_enums::Role, user};

/// Default test user email.
pub const DEFAULT_EMAIL: &str = "operator@example.com";

/// Default test user name.
pub const DEFAULT_NAME: &str = "Test Operator";

/// Creates an active `admin` user entity model with default values.
///
/// The password hash is a placeholder and will not verify against any password.
pub fn entity() -> user::Model {
    entity_builder().build()
}

/// Creates a user entity builder for customization.
pub fn entity_builder() -> UserEntityBuilder {
    UserEntityBuilder::default()
}

/// Builder for creating customized user entity models.
pub struct UserEntityBuilder {
    id: i32,
    email: String,
    name: String,
    role: Role,
    active: bool,
}

impl Default for UserEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            email: DEFAULT_EMAIL.to_string(),
            name: DEFAULT_NAME.to_string(),
            role: Role::Admin,
            active: true,
        }
    }
}

impl UserEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Builds and returns the user entity model.
    pub fn build(self) -> user::Model {
        let now = Utc::now();
        user::Model {
            id: self.id,
            email: self.email,
            name: self.name,
            password_hash: "$argon2id$placeholder".to_string(),
            role: self.role,
            active: self.active,
            created_at: now,
            updated_at: now,
        }
    }
}
