use chrono::TimeDelta;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:5000";
const DEFAULT_TOKEN_TTL_HOURS: i64 = 24;
/// One year.
const MAX_TOKEN_TTL_HOURS: i64 = 8760;
const DEFAULT_ADMIN_NAME: &str = "Administrator";

/// Credentials for the super admin created on first start.
pub struct BootstrapAdmin {
    pub email: String,
    pub password: String,
    pub name: String,
}

pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub bind_address: String,
    /// Validity window of issued tokens, between one hour and `MAX_TOKEN_TTL_HOURS`.
    pub token_ttl: TimeDelta,

    /// Present only when both `ADMIN_EMAIL` and `ADMIN_PASSWORD` are set.
    pub bootstrap_admin: Option<BootstrapAdmin>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads only `DATABASE_URL`, for tools that never serve requests.
    pub fn database_url_from_env() -> Result<String, AppError> {
        std::env::var("DATABASE_URL")
            .ok()
            .filter(|value| !value.is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()).into())
    }

    /// Builds configuration from an arbitrary variable source.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of a variable, or `None` when unset
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(AppError::ConfigErr)` - A required variable is missing or a value is invalid
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let token_ttl_hours = match lookup("TOKEN_TTL_HOURS") {
            None => DEFAULT_TOKEN_TTL_HOURS,
            Some(value) => match value.parse::<i64>() {
                Ok(hours) if (1..=MAX_TOKEN_TTL_HOURS).contains(&hours) => hours,
                _ => {
                    return Err(ConfigError::InvalidEnvValue {
                        name: "TOKEN_TTL_HOURS".to_string(),
                        value,
                    }
                    .into())
                }
            },
        };
        let token_ttl = TimeDelta::try_hours(token_ttl_hours).ok_or_else(|| {
            ConfigError::InvalidEnvValue {
                name: "TOKEN_TTL_HOURS".to_string(),
                value: token_ttl_hours.to_string(),
            }
        })?;

        let bootstrap_admin = match (lookup("ADMIN_EMAIL"), lookup("ADMIN_PASSWORD")) {
            (Some(email), Some(password)) if !email.is_empty() && !password.is_empty() => {
                Some(BootstrapAdmin {
                    email,
                    password,
                    name: lookup("ADMIN_NAME").unwrap_or_else(|| DEFAULT_ADMIN_NAME.to_string()),
                })
            }
            _ => None,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            jwt_secret: required("JWT_SECRET")?,
            bind_address: lookup("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            token_ttl,
            bootstrap_admin,
        })
    }
}
