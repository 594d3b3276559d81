//! Tenant (studio or independent artist account) model and DTOs.

use inkstudio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A tenant row from the `tenants` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Tenant {
    pub id: DbId,
    pub name: String,
    pub kind: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a tenant (used by registration).
#[derive(Debug, Clone)]
pub struct CreateTenant {
    pub name: String,
    pub kind: String,
}

/// DTO for updating the current tenant. All fields are optional.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateTenant {
    #[validate(length(min = 1, max = 200, message = "must be between 1 and 200 characters"))]
    pub name: Option<String>,
    pub kind: Option<String>,
}
