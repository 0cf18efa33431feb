//! Signed bearer tokens.
//!
//! Tokens are HS256 JWTs carrying the user's id, email, role and name. There is no
//! server-side session or revocation list; a token is valid until its `exp` passes.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use sea_orm::ActiveEnum;

use crate::server::{
    error::{auth::AuthError, AppError},
    model::{
        auth::{AuthUser, Claims},
        user::User,
    },
};

/// Issues and verifies bearer tokens with a process-wide secret.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenService {
    /// Creates a token service.
    ///
    /// # Arguments
    /// - `secret` - HMAC signing secret
    /// - `ttl` - Validity window of issued tokens
    pub fn new(secret: &str, ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl,
        }
    }

    /// Signs a token for `user`, valid from now for the configured window.
    ///
    /// # Returns
    /// - `Ok(String)` - Signed token
    /// - `Err(AppError::InternalError)` - The expiry falls outside the representable range
    /// - `Err(AppError::TokenErr)` - Signing failed
    pub fn issue(&self, user: &User) -> Result<String, AppError> {
        let now = Utc::now();
        let expires = now.checked_add_signed(self.ttl).ok_or_else(|| {
            AppError::InternalError(format!("Token lifetime {} is out of range", self.ttl))
        })?;
        let claims = Claims {
            sub: user.id,
            email: user.email.clone(),
            role: user.role.to_value(),
            name: user.name.clone(),
            iat: now.timestamp(),
            exp: expires.timestamp(),
        };

        Ok(encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)?)
    }

    /// Verifies signature and expiry and returns the embedded identity.
    ///
    /// # Returns
    /// - `Ok(AuthUser)` - Token is authentic and unexpired
    /// - `Err(AuthError::InvalidToken)` - Malformed, tampered, expired or unknown role
    pub fn verify(&self, token: &str) -> Result<AuthUser, AuthError> {
        let data = decode::<Claims>(token, &self.decoding, &self.validation)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        AuthUser::from_claims(data.claims)
    }
}
