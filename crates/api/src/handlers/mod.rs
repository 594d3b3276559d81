pub mod auth;
pub mod clients;
pub mod costs;
pub mod dashboard;
pub mod finance;
pub mod members;
pub mod ownership;
pub mod pricing;
pub mod procedures;
pub mod service_types;
pub mod sessions;
pub mod settings;
pub mod studio;
pub mod tenant;
pub mod transactions;
