//! Credential verification against the user directory.

pub mod digest;
pub mod directory;
pub mod flow;

pub use digest::{PasswordDigester, Rfc2307Digester};
pub use directory::PgDirectory;
pub use flow::{SignInFlow, SignInOutcome};

use async_trait::async_trait;
use uuid::Uuid;

/// Credentials as submitted by the sign-in form, after digesting.
///
/// Constructed per request and never persisted by this crate.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password_digest: String,
}

/// An authenticated user record, owned by the directory.
///
/// The session token is regenerated on every successful sign-in; this crate
/// only reads it to build the session cookie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: Uuid,
    pub username: String,
    pub session_token: String,
}

/// Result of a directory lookup.
///
/// `NotFound` covers both "unknown username" and "digest mismatch";
/// `SystemError` means the directory itself failed (unreachable, malformed
/// row). The two are kept distinct so callers can log the latter while still
/// presenting a uniform failure to the user.
#[derive(Debug)]
pub enum AuthOutcome {
    Found(Identity),
    NotFound,
    SystemError(anyhow::Error),
}

/// The user directory consulted during sign-in.
///
/// Implementations do nothing beyond the lookup: no lockout counters, no
/// audit writes. Input length bounds are enforced by the caller.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn authenticate(&self, credentials: &Credentials) -> AuthOutcome;
}
