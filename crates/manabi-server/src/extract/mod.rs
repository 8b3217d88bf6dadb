//! Custom HTTP request extractors.
//!
//! Authentication extractors validate JWT Bearer tokens and, for
//! [`AuthState`], verify that the token subject is a registered user.
//! [`ValidateJson`] combines JSON deserialization with request validation.

mod auth;
mod validate_json;

pub use crate::extract::auth::{AuthClaims, AuthHeader, AuthState};
pub use crate::extract::validate_json::ValidateJson;
