//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//!
//! Tenant ids never appear in request DTOs; repositories take them from the
//! authenticated caller.

pub mod artist_benefit;
pub mod client;
pub mod cost;
pub mod dashboard;
pub mod procedure;
pub mod role;
pub mod seed_training_data;
pub mod service_type;
pub mod session;
pub mod status;
pub mod studio_config;
pub mod tattoo_session;
pub mod tenant;
pub mod transaction;
pub mod user;
pub mod work_settings;
