//! Serde helpers exposing status lookup ids as their API names.
//!
//! Rows keep the raw `SMALLINT` id (`status_id`); JSON carries the name
//! under `status`.

use inkstudio_core::status::{ProcedureStatus, SessionStatus, StatusId};
use serde::Serializer;

pub fn serialize_session_status<S: Serializer>(id: &StatusId, s: S) -> Result<S::Ok, S::Error> {
    let name = SessionStatus::from_id(*id)
        .map(SessionStatus::name)
        .unwrap_or("unknown");
    s.serialize_str(name)
}

pub fn serialize_procedure_status<S: Serializer>(
    id: &StatusId,
    s: S,
) -> Result<S::Ok, S::Error> {
    let name = ProcedureStatus::from_id(*id)
        .map(ProcedureStatus::name)
        .unwrap_or("unknown");
    s.serialize_str(name)
}
