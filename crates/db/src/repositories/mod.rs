//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Every method on tenant data
//! takes the caller's `tenant_id` and filters on it, so rows of another
//! tenant behave exactly like missing rows.

pub mod artist_benefit_repo;
pub mod client_repo;
pub mod cost_repo;
pub mod dashboard_repo;
pub mod procedure_repo;
pub mod seed_training_data_repo;
pub mod service_type_repo;
pub mod session_repo;
pub mod studio_config_repo;
pub mod tattoo_session_repo;
pub mod tenant_repo;
pub mod transaction_repo;
pub mod user_repo;
pub mod work_settings_repo;

pub use artist_benefit_repo::ArtistBenefitRepo;
pub use client_repo::ClientRepo;
pub use cost_repo::CostRepo;
pub use dashboard_repo::DashboardRepo;
pub use procedure_repo::ProcedureRepo;
pub use seed_training_data_repo::SeedTrainingDataRepo;
pub use service_type_repo::ServiceTypeRepo;
pub use session_repo::SessionRepo;
pub use studio_config_repo::StudioConfigRepo;
pub use tattoo_session_repo::TattooSessionRepo;
pub use tenant_repo::TenantRepo;
pub use transaction_repo::TransactionRepo;
pub use user_repo::UserRepo;
pub use work_settings_repo::WorkSettingsRepo;
