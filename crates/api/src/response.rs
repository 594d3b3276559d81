//! Shared response envelope for aggregate endpoints.
//!
//! Reports and computed views (finance, pricing, dashboard, history) wrap
//! their payload in `{ "data": ... }`; plain entity CRUD returns the entity.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
