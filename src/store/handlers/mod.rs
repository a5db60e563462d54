pub mod health;
pub use self::health::health;

pub mod signin;
pub use self::signin::{show_signin, signin};

pub mod signout;
pub use self::signout::signout;

pub mod register;
pub use self::register::register;

// common functions for the handlers
use crate::session::CookieSpec;
use axum::http::{header::SET_COOKIE, HeaderMap};
use tracing::error;

/// Attach a session cookie to the outgoing response headers.
///
/// Cookie values are minted by us and should always encode; a failure here
/// is logged and the response goes out without the header.
pub(crate) fn attach_cookie(headers: &mut HeaderMap, cookie: &CookieSpec) {
    match cookie.to_header_value() {
        Ok(value) => {
            headers.insert(SET_COOKIE, value);
        }
        Err(err) => error!("Failed to encode session cookie: {err}"),
    }
}
