//! Request extractors for caller identity.
//!
//! - [`auth::AuthUser`] -- The verified caller forwarded by the auth gateway.

pub mod auth;
