//! Session-token cookie construction.
//!
//! Pure constructors over a configured cookie name: nothing here stores
//! issued tokens or tracks validity, that is the directory's concern.

use crate::auth::Identity;
use axum::http::{header::InvalidHeaderValue, HeaderValue};

/// Sentinel cookie value meaning "logged out".
pub const INVALIDATED: &str = "Invalidated";

/// A `Set-Cookie` header waiting to happen.
///
/// Two lifecycle states exist: *active* (no `Max-Age`, cleared when the
/// client session ends) and *invalidated* (`Max-Age=0`, value
/// [`INVALIDATED`]). Every response from the sign-in surface carries one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieSpec {
    pub name: String,
    pub value: String,
    pub path: String,
    pub max_age: Option<u32>,
    pub secure: bool,
    pub http_only: bool,
}

impl CookieSpec {
    /// Render the cookie as a `Set-Cookie` header value.
    ///
    /// # Errors
    /// Returns an error if the rendered cookie contains bytes that are not
    /// valid in an HTTP header.
    pub fn to_header_value(&self) -> Result<HeaderValue, InvalidHeaderValue> {
        let mut cookie = format!("{}={}; Path={}", self.name, self.value, self.path);
        if let Some(max_age) = self.max_age {
            cookie.push_str(&format!("; Max-Age={max_age}"));
        }
        if self.http_only {
            cookie.push_str("; HttpOnly");
        }
        cookie.push_str("; SameSite=Lax");
        if self.secure {
            cookie.push_str("; Secure");
        }
        HeaderValue::from_str(&cookie)
    }
}

/// Mints and invalidates session-token cookies.
///
/// The cookie name comes from configuration; everything else is fixed
/// policy: path `/`, no domain, `Secure` and `HttpOnly` always set.
#[derive(Debug, Clone)]
pub struct SessionTokenManager {
    cookie_name: String,
}

impl SessionTokenManager {
    #[must_use]
    pub fn new(cookie_name: impl Into<String>) -> Self {
        Self {
            cookie_name: cookie_name.into(),
        }
    }

    #[must_use]
    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    /// Active cookie bound to the identity's current session token.
    ///
    /// No `Max-Age` is set: the cookie expires when the client session ends.
    #[must_use]
    pub fn issue(&self, identity: &Identity) -> CookieSpec {
        CookieSpec {
            name: self.cookie_name.clone(),
            value: identity.session_token.clone(),
            path: "/".to_string(),
            max_age: None,
            secure: true,
            http_only: true,
        }
    }

    /// Invalidated cookie instructing the client to discard any session
    /// token immediately.
    #[must_use]
    pub fn invalidate(&self) -> CookieSpec {
        CookieSpec {
            name: self.cookie_name.clone(),
            value: INVALIDATED.to_string(),
            path: "/".to_string(),
            max_age: Some(0),
            secure: true,
            http_only: true,
        }
    }
}
