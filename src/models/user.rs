//! Admin user model, roles and session claims

use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::error::{AppError, AppResult};

/// Back-office roles. Editors manage site content; admins additionally
/// manage accounts and members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Editor,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Editor => "editor",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "editor" => Ok(Role::Editor),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}

/// Back-office user account
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    /// Either "admin" or "editor"
    pub role: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create user request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8))]
    pub password: String,
    pub role: Role,
}

/// Update user request (all fields optional)
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUser {
    #[validate(length(min = 1, max = 120))]
    pub name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(min = 8))]
    pub password: Option<String>,
    pub role: Option<Role>,
    pub is_active: Option<bool>,
}

/// Login request
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Claims carried by the session cookie token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// User email
    pub sub: String,
    pub user_id: i32,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
}

impl SessionClaims {
    /// Sign the claims into a session token
    pub fn create_token(&self, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
        encode(
            &Header::default(),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }

    /// Validate a session token and return the claims
    pub fn from_token(token: &str, secret: &str) -> Result<Self, jsonwebtoken::errors::Error> {
        decode::<SessionClaims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
    }

    /// Content management requires at least the editor role
    pub fn require_editor(&self) -> AppResult<()> {
        match self.role.as_str() {
            "admin" | "editor" => Ok(()),
            _ => Err(AppError::Authorization(
                "Editor privileges required".to_string(),
            )),
        }
    }

    /// Account and member management requires the admin role
    pub fn require_admin(&self) -> AppResult<()> {
        if self.role == "admin" {
            Ok(())
        } else {
            Err(AppError::Authorization("Admin privileges required".to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn claims(role: &str) -> SessionClaims {
        let now = Utc::now().timestamp();
        SessionClaims {
            sub: "ana@academia.local".to_string(),
            user_id: 1,
            role: role.to_string(),
            exp: now + 3600,
            iat: now,
        }
    }

    #[test]
    fn token_round_trip_preserves_claims() {
        let claims = claims("admin");
        let token = claims.create_token("secret").unwrap();
        let decoded = SessionClaims::from_token(&token, "secret").unwrap();
        assert_eq!(decoded.sub, claims.sub);
        assert_eq!(decoded.user_id, 1);
        assert_eq!(decoded.role, "admin");
    }

    #[test]
    fn token_with_wrong_secret_is_rejected() {
        let token = claims("admin").create_token("secret").unwrap();
        assert!(SessionClaims::from_token(&token, "other").is_err());
    }

    #[test]
    fn editor_cannot_manage_accounts() {
        let claims = claims("editor");
        assert!(claims.require_editor().is_ok());
        assert!(claims.require_admin().is_err());
    }
}
