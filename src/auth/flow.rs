//! The sign-in decision pipeline: validate, digest, authenticate, respond.

use crate::{
    auth::{AuthOutcome, Authenticator, Credentials, PasswordDigester},
    session::{CookieSpec, SessionTokenManager},
};
use secrecy::{ExposeSecret, SecretString};
use std::sync::Arc;
use tracing::{debug, error};

// Bounds checked before the directory is ever consulted. The username limit
// applies to the submitted name, the password limit to the raw password
// before digesting.
const MAX_USERNAME_CHARS: usize = 30;
const MAX_PASSWORD_CHARS: usize = 50;

/// Terminal state of one sign-in attempt.
///
/// Every attempt ends in one of these; no error value crosses this boundary.
#[derive(Debug)]
pub enum SignInOutcome {
    /// Redirect to the landing destination with an active session cookie.
    Authenticated { cookie: CookieSpec },
    /// Re-display the sign-in surface with an invalidated cookie. Bad input,
    /// unknown user, wrong password and directory outage all land here.
    Rejected { cookie: CookieSpec },
}

/// Orchestrates one sign-in or sign-out request.
///
/// Collaborators are injected at construction so tests can substitute the
/// directory and digester without any global state.
pub struct SignInFlow {
    digester: Arc<dyn PasswordDigester>,
    authenticator: Arc<dyn Authenticator>,
    sessions: SessionTokenManager,
}

impl SignInFlow {
    #[must_use]
    pub fn new(
        digester: Arc<dyn PasswordDigester>,
        authenticator: Arc<dyn Authenticator>,
        sessions: SessionTokenManager,
    ) -> Self {
        Self {
            digester,
            authenticator,
            sessions,
        }
    }

    /// Run the pipeline for one credential submission.
    ///
    /// Input violations reject without touching the digester or the
    /// directory. A directory failure is logged here, exactly once, and is
    /// otherwise indistinguishable from bad credentials in the result.
    pub async fn sign_in(&self, username: &str, password: &SecretString) -> SignInOutcome {
        if !valid_username(username) || !valid_password(password.expose_secret()) {
            debug!("Rejected sign-in: input validation failed");
            return self.rejected();
        }

        let credentials = Credentials {
            username: username.to_string(),
            password_digest: self.digester.digest(password.expose_secret()),
        };

        match self.authenticator.authenticate(&credentials).await {
            AuthOutcome::Found(identity) => SignInOutcome::Authenticated {
                cookie: self.sessions.issue(&identity),
            },
            AuthOutcome::NotFound => {
                debug!("Rejected sign-in: no matching identity");
                self.rejected()
            }
            AuthOutcome::SystemError(err) => {
                error!("Directory failure during sign-in: {err:?}");
                self.rejected()
            }
        }
    }

    /// Invalidate any client-held session token. Never fails.
    #[must_use]
    pub fn sign_out(&self) -> CookieSpec {
        self.sessions.invalidate()
    }

    fn rejected(&self) -> SignInOutcome {
        SignInOutcome::Rejected {
            cookie: self.sessions.invalidate(),
        }
    }
}

fn valid_username(username: &str) -> bool {
    let len = username.chars().count();
    len > 0 && len < MAX_USERNAME_CHARS
}

fn valid_password(password: &str) -> bool {
    let len = password.chars().count();
    len > 0 && len < MAX_PASSWORD_CHARS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{Identity, Rfc2307Digester};
    use crate::session::INVALIDATED;
    use anyhow::anyhow;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use uuid::Uuid;

    enum Directory {
        Found(String),
        NotFound,
        SystemError,
    }

    struct StubAuthenticator {
        directory: Directory,
        calls: AtomicUsize,
    }

    impl StubAuthenticator {
        fn new(directory: Directory) -> Self {
            Self {
                directory,
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Authenticator for StubAuthenticator {
        async fn authenticate(&self, credentials: &Credentials) -> AuthOutcome {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.directory {
                Directory::Found(token) => AuthOutcome::Found(Identity {
                    user_id: Uuid::new_v4(),
                    username: credentials.username.clone(),
                    session_token: token.clone(),
                }),
                Directory::NotFound => AuthOutcome::NotFound,
                Directory::SystemError => AuthOutcome::SystemError(anyhow!("directory offline")),
            }
        }
    }

    struct CountingDigester(AtomicUsize);

    impl PasswordDigester for CountingDigester {
        fn digest(&self, plaintext: &str) -> String {
            self.0.fetch_add(1, Ordering::SeqCst);
            Rfc2307Digester.digest(plaintext)
        }
    }

    fn flow(directory: Directory) -> (SignInFlow, Arc<StubAuthenticator>) {
        let authenticator = Arc::new(StubAuthenticator::new(directory));
        let flow = SignInFlow::new(
            Arc::new(Rfc2307Digester),
            authenticator.clone(),
            SessionTokenManager::new("bancarella_session"),
        );
        (flow, authenticator)
    }

    fn secret(password: &str) -> SecretString {
        password.to_string().into()
    }

    #[tokio::test]
    async fn unknown_user_rejected_with_invalidated_cookie() {
        let (flow, _) = flow(Directory::NotFound);
        let outcome = flow.sign_in("alice", &secret("secret123")).await;

        match outcome {
            SignInOutcome::Rejected { cookie } => {
                assert_eq!(cookie.value, INVALIDATED);
                assert_eq!(cookie.max_age, Some(0));
            }
            SignInOutcome::Authenticated { .. } => panic!("expected rejection"),
        }
    }

    #[tokio::test]
    async fn matching_identity_gets_active_cookie_with_its_token() {
        let (flow, _) = flow(Directory::Found("tok-42".to_string()));
        let outcome = flow.sign_in("alice", &secret("secret123")).await;

        match outcome {
            SignInOutcome::Authenticated { cookie } => {
                assert_eq!(cookie.value, "tok-42");
                assert_eq!(cookie.max_age, None);
            }
            SignInOutcome::Rejected { .. } => panic!("expected authentication"),
        }
    }

    #[tokio::test]
    async fn empty_username_skips_digest_and_directory() {
        let digests = Arc::new(CountingDigester(AtomicUsize::new(0)));
        let authenticator = Arc::new(StubAuthenticator::new(Directory::Found(
            "tok-42".to_string(),
        )));
        let flow = SignInFlow::new(
            digests.clone(),
            authenticator.clone(),
            SessionTokenManager::new("bancarella_session"),
        );

        let outcome = flow.sign_in("", &secret("secret123")).await;

        assert!(matches!(outcome, SignInOutcome::Rejected { .. }));
        assert_eq!(digests.0.load(Ordering::SeqCst), 0);
        assert_eq!(authenticator.calls(), 0);
    }

    #[tokio::test]
    async fn out_of_bounds_input_never_reaches_directory() {
        let long_username = "u".repeat(30);
        let long_password = "p".repeat(50);

        for (username, password) in [
            (long_username.as_str(), "secret123"),
            ("alice", long_password.as_str()),
            ("alice", ""),
            ("", ""),
        ] {
            let (flow, authenticator) = flow(Directory::Found("tok-42".to_string()));
            let outcome = flow.sign_in(username, &secret(password)).await;

            assert!(matches!(outcome, SignInOutcome::Rejected { .. }));
            assert_eq!(authenticator.calls(), 0);
        }
    }

    #[tokio::test]
    async fn boundary_lengths_just_inside_are_accepted() {
        let username = "u".repeat(29);
        let password = "p".repeat(49);

        let (flow, authenticator) = flow(Directory::Found("tok-42".to_string()));
        let outcome = flow.sign_in(&username, &secret(&password)).await;

        assert!(matches!(outcome, SignInOutcome::Authenticated { .. }));
        assert_eq!(authenticator.calls(), 1);
    }

    #[tokio::test]
    async fn directory_failure_looks_like_bad_credentials() {
        let (flow, authenticator) = flow(Directory::SystemError);
        let outcome = flow.sign_in("alice", &secret("secret123")).await;

        match outcome {
            SignInOutcome::Rejected { cookie } => {
                assert_eq!(cookie.value, INVALIDATED);
                assert_eq!(cookie.max_age, Some(0));
            }
            SignInOutcome::Authenticated { .. } => panic!("expected fail-closed rejection"),
        }
        assert_eq!(authenticator.calls(), 1);
    }

    #[tokio::test]
    async fn sign_out_is_idempotent() {
        let (flow, _) = flow(Directory::NotFound);
        assert_eq!(flow.sign_out(), flow.sign_out());
    }
}
