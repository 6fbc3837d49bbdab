use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use argon2::password_hash::{SaltString, rand_core::OsRng};
use chrono::{Duration, Utc};
use cookie::{Cookie, SameSite};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::{
    error::{AppError, Result},
    repository::parse_uuid,
};

pub mod session;

use session::{Session, SessionStore};

pub const SESSION_COOKIE: &str = "session";

pub struct AuthService {
    pool: SqlitePool,
    session_store: SessionStore,
    email_domain: String,
}

impl AuthService {
    pub fn new(pool: SqlitePool, email_domain: impl Into<String>) -> Self {
        Self {
            session_store: SessionStore::new(pool.clone()),
            pool,
            email_domain: email_domain.into(),
        }
    }

    /// Logins are by username; accounts are keyed by `<username>@<domain>`.
    pub fn synthetic_email(&self, username: &str) -> String {
        format!("{}@{}", username.trim(), self.email_domain)
    }

    pub async fn verify_password(password: &str, hash: &str) -> Result<bool> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| AppError::Internal(format!("Invalid password hash: {}", e)))?;

        Ok(Argon2::default().verify_password(password.as_bytes(), &parsed_hash).is_ok())
    }

    pub async fn hash_password(password: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);

        let password_hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(format!("Password hashing failed: {}", e)))?;

        Ok(password_hash.to_string())
    }

    /// Creates a login account. Admin access additionally needs a profile row.
    pub async fn create_user(&self, username: &str, password: &str) -> Result<Uuid> {
        let id = Uuid::new_v4();
        let password_hash = Self::hash_password(password).await?;

        sqlx::query(
            "INSERT INTO users (id, email, password_hash, created_at) VALUES (?, ?, ?, ?)"
        )
        .bind(id.to_string())
        .bind(self.synthetic_email(username))
        .bind(password_hash)
        .bind(Utc::now().naive_utc())
        .execute(&self.pool)
        .await?;

        Ok(id)
    }

    /// Returns the user id when the username/password pair is valid.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<Option<Uuid>> {
        let row = sqlx::query_as::<_, (String, String)>(
            "SELECT id, password_hash FROM users WHERE email = ?"
        )
        .bind(self.synthetic_email(username))
        .fetch_optional(&self.pool)
        .await?;

        let Some((id, password_hash)) = row else {
            return Ok(None);
        };

        if Self::verify_password(password, &password_hash).await? {
            Ok(Some(parse_uuid(&id)?))
        } else {
            Ok(None)
        }
    }

    pub async fn create_session(&self, user_id: Uuid, duration_hours: i64) -> Result<(Session, String)> {
        let token = generate_token();
        let expires_at = Utc::now() + Duration::hours(duration_hours);

        let session = self.session_store
            .create(user_id, &token, expires_at)
            .await?;

        Ok((session, token))
    }

    pub async fn validate_session(&self, token: &str) -> Result<Option<Session>> {
        self.session_store.find_by_token(token).await
    }

    pub async fn invalidate_session(&self, token: &str) -> Result<()> {
        self.session_store.delete_by_token(token).await
    }

    pub async fn cleanup_expired_sessions(&self) -> Result<u64> {
        self.session_store.cleanup_expired().await
    }

    pub fn create_session_cookie(token: &str, secure: bool, duration_hours: i64) -> Cookie<'static> {
        Cookie::build((SESSION_COOKIE, token.to_string()))
            .path("/")
            .same_site(SameSite::Lax)
            .http_only(true)
            .secure(secure)
            .max_age(cookie::time::Duration::hours(duration_hours))
            .build()
    }

    pub fn create_logout_cookie() -> Cookie<'static> {
        Cookie::build((SESSION_COOKIE, ""))
            .path("/")
            .same_site(SameSite::Lax)
            .http_only(true)
            .max_age(cookie::time::Duration::seconds(0))
            .build()
    }
}

fn generate_token() -> String {
    use rand::RngCore;
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_is_64_hex_chars() {
        let token = generate_token();
        assert_eq!(token.len(), 64);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn session_cookie_is_http_only() {
        let cookie = AuthService::create_session_cookie("abc", false, 24);
        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.path(), Some("/"));
    }
}
