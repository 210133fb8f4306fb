//! Authentication and back-office user management service

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::Utc;
use validator::Validate;

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    models::user::{CreateUser, SessionClaims, UpdateUser, User},
    repository::Repository,
};

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
    config: AuthConfig,
}

impl UsersService {
    pub fn new(repository: Repository, config: AuthConfig) -> Self {
        Self { repository, config }
    }

    /// Authenticate by email/password and return a signed session token
    pub async fn authenticate(&self, email: &str, password: &str) -> AppResult<(String, User)> {
        let user = self
            .repository
            .users
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::Authentication("Invalid email or password".to_string()))?;

        if !user.is_active {
            return Err(AppError::Authentication("Account is disabled".to_string()));
        }

        if !self.verify_password(&user, password)? {
            return Err(AppError::Authentication(
                "Invalid email or password".to_string(),
            ));
        }

        let token = self.create_session_token(&user)?;
        Ok((token, user))
    }

    /// Sign session claims for a user
    pub fn create_session_token(&self, user: &User) -> AppResult<String> {
        let now = Utc::now().timestamp();
        let exp = now + (self.config.session_expiration_hours as i64 * 3600);

        let claims = SessionClaims {
            sub: user.email.clone(),
            user_id: user.id,
            role: user.role.clone(),
            exp,
            iat: now,
        };

        claims
            .create_token(&self.config.session_secret)
            .map_err(|e| AppError::Internal(format!("Failed to create session token: {}", e)))
    }

    /// List all back-office users
    pub async fn list(&self) -> AppResult<Vec<User>> {
        self.repository.users.list().await
    }

    /// Get a user by ID
    pub async fn get(&self, id: i32) -> AppResult<User> {
        self.repository.users.get(id).await
    }

    /// Create a back-office user
    pub async fn create(&self, data: CreateUser) -> AppResult<User> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let hash = self.hash_password(&data.password)?;
        self.repository
            .users
            .create(&data.name, &data.email, &hash, data.role.as_str())
            .await
    }

    /// Update a back-office user
    pub async fn update(&self, id: i32, data: UpdateUser) -> AppResult<User> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let hash = match &data.password {
            Some(password) => Some(self.hash_password(password)?),
            None => None,
        };
        self.repository.users.update(id, &data, hash.as_deref()).await
    }

    /// Delete a back-office user. A user cannot delete their own account.
    pub async fn delete(&self, id: i32, acting_user_id: i32) -> AppResult<()> {
        if id == acting_user_id {
            return Err(AppError::Validation(
                "Cannot delete your own account".to_string(),
            ));
        }
        self.repository.users.delete(id).await
    }

    /// Seed the default admin account when the users table is empty
    pub async fn ensure_default_admin(&self) -> AppResult<()> {
        if self.repository.users.count().await? > 0 {
            return Ok(());
        }

        let hash = self.hash_password(&self.config.default_admin_password)?;
        self.repository
            .users
            .create(
                "Administrador",
                &self.config.default_admin_email,
                &hash,
                "admin",
            )
            .await?;

        tracing::warn!(
            "Created default admin account '{}'; change its password",
            self.config.default_admin_email
        );
        Ok(())
    }

    fn hash_password(&self, password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))
    }

    fn verify_password(&self, user: &User, password: &str) -> AppResult<bool> {
        let parsed = PasswordHash::new(&user.password_hash)
            .map_err(|e| AppError::Internal(format!("Invalid stored password hash: {}", e)))?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}
