//! Authentication primitives.
//!
//! - [`password`] -- Argon2id hashing and the minimum length rule.
//! - [`jwt`] -- access tokens carrying the tenant, plus refresh-token helpers.

pub mod jwt;
pub mod password;
