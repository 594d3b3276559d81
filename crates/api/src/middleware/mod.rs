//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- the caller behind a valid Bearer token.
//! - [`rbac::RequireOwner`] -- requires the `owner` role.

pub mod auth;
pub mod rbac;
