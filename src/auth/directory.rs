//! Postgres-backed user directory.

use crate::auth::{AuthOutcome, Authenticator, Credentials, Identity};
use anyhow::{Context, Result};
use async_trait::async_trait;
use base64ct::{Base64UrlUnpadded, Encoding};
use rand::{rngs::OsRng, RngCore};
use sqlx::{PgPool, Row};
use uuid::Uuid;

/// Directory lookup against the storefront user table.
///
/// On a credential match a fresh session token is minted and persisted, so
/// every successful sign-in invalidates the previous token server-side.
pub struct PgDirectory {
    pool: PgPool,
}

impl PgDirectory {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn lookup(&self, credentials: &Credentials) -> Result<Option<Identity>> {
        let row = match sqlx::query("SELECT user_id, password_digest FROM users WHERE username = $1")
            .bind(&credentials.username)
            .fetch_one(&self.pool)
            .await
        {
            Ok(row) => row,
            Err(sqlx::Error::RowNotFound) => return Ok(None),
            Err(err) => return Err(err).context("directory lookup failed"),
        };

        let user_id: Uuid = row.try_get("user_id").context("malformed user row")?;
        let stored_digest: String = row
            .try_get("password_digest")
            .context("malformed user row")?;

        if stored_digest != credentials.password_digest {
            return Ok(None);
        }

        let session_token = mint_session_token()?;
        sqlx::query("UPDATE users SET session_token = $1 WHERE user_id = $2")
            .bind(&session_token)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .context("failed to store session token")?;

        Ok(Some(Identity {
            user_id,
            username: credentials.username.clone(),
            session_token,
        }))
    }
}

#[async_trait]
impl Authenticator for PgDirectory {
    async fn authenticate(&self, credentials: &Credentials) -> AuthOutcome {
        match self.lookup(credentials).await {
            Ok(Some(identity)) => AuthOutcome::Found(identity),
            Ok(None) => AuthOutcome::NotFound,
            // Not logged here: the flow logs directory failures exactly once.
            Err(err) => AuthOutcome::SystemError(err),
        }
    }
}

/// Mint an opaque session token: 32 random bytes, URL-safe base64.
/// The raw value only travels in the cookie; it never encodes user data.
fn mint_session_token() -> Result<String> {
    let mut bytes = [0u8; 32];
    OsRng
        .try_fill_bytes(&mut bytes)
        .context("failed to generate session token")?;
    Ok(Base64UrlUnpadded::encode_string(&bytes))
}
