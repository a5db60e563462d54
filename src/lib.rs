//! # Bancarella (storefront sign-in & sessions)
//!
//! `bancarella` is the sign-in surface of a storefront. It accepts submitted
//! credentials, verifies them against a user directory, and issues or
//! invalidates an opaque session token delivered via a cookie.
//!
//! ## Sign-in flow
//!
//! Each request walks a fixed pipeline: input validation, password digesting,
//! directory authentication, and response construction. Every failure path
//! (bad input, unknown user, wrong password, directory outage) produces the
//! same user-visible outcome: the sign-in page plus a cookie that clears any
//! prior session. The distinction between "bad credentials" and "directory
//! unavailable" exists only server-side, in the logs.
//!
//! ## Password digesting
//!
//! The sign-in form transmits an RFC 2307 `{SHA}` digest of the password so
//! client- and server-side digests of the same plaintext compare equal. This
//! is transit obfuscation only, not storage-grade hashing; the directory is
//! responsible for hashing what it stores.
//!
//! ## Session tokens
//!
//! Tokens are opaque, minted fresh on every successful sign-in, and carried
//! in a `Secure; HttpOnly` cookie scoped to the client session. Signing out
//! (or merely viewing the sign-in page) overwrites the cookie with the
//! `Invalidated` sentinel and `Max-Age=0`.

pub mod auth;
pub mod cli;
pub mod session;
pub mod store;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
