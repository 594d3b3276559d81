//! Domain types and pure business logic for Inkstudio.
//!
//! Nothing in this crate performs I/O; the `db` and `api` crates feed it
//! already-fetched rows.

pub mod commission;
pub mod error;
pub mod ledger;
pub mod pagination;
pub mod pricing;
pub mod roles;
pub mod service_type;
pub mod session_lifecycle;
pub mod status;
pub mod suggestion;
pub mod tenancy;
pub mod types;
pub mod validation;
