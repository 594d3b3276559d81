//! Client entity model and DTOs.

use inkstudio_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A client row from the `clients` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Client {
    pub id: DbId,
    pub tenant_id: DbId,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub birth_date: Option<Date>,
    pub instagram: Option<String>,
    /// Allergies and other health notes relevant to the procedure.
    pub allergies: Option<String>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new client.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateClient {
    #[validate(length(min = 1, max = 200, message = "must be between 1 and 200 characters"))]
    pub name: String,
    #[validate(email(message = "must be a valid e-mail address"))]
    pub email: Option<String>,
    #[validate(length(max = 40, message = "must be at most 40 characters"))]
    pub phone: Option<String>,
    pub birth_date: Option<Date>,
    pub instagram: Option<String>,
    pub allergies: Option<String>,
    pub notes: Option<String>,
}

/// DTO for updating an existing client. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateClient {
    #[validate(length(min = 1, max = 200, message = "must be between 1 and 200 characters"))]
    pub name: Option<String>,
    #[validate(email(message = "must be a valid e-mail address"))]
    pub email: Option<String>,
    #[validate(length(max = 40, message = "must be at most 40 characters"))]
    pub phone: Option<String>,
    pub birth_date: Option<Date>,
    pub instagram: Option<String>,
    pub allergies: Option<String>,
    pub notes: Option<String>,
}
