//! Status enums mapping to SMALLSERIAL/SMALLINT lookup tables.
//!
//! Each enum variant's discriminant matches the seed data order (1-based)
//! in the corresponding `*_statuses` database table, and its name matches
//! the `name` column exposed through the API.

use crate::error::CoreError;

/// Status ID type matching SMALLINT/SMALLSERIAL in the database.
pub type StatusId = i16;

macro_rules! define_status_enum {
    (
        $(#[$meta:meta])*
        $name:ident ($label:literal) {
            $( $(#[$vmeta:meta])* $variant:ident = $val:literal => $text:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[repr(i16)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $val ),+
        }

        impl $name {
            /// All variants in seed order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Return the database status ID.
            pub fn id(self) -> StatusId {
                self as StatusId
            }

            /// Return the API name of this status.
            pub fn name(self) -> &'static str {
                match self {
                    $( $name::$variant => $text ),+
                }
            }

            /// Resolve a database status ID.
            pub fn from_id(id: StatusId) -> Result<Self, CoreError> {
                match id {
                    $( $val => Ok($name::$variant), )+
                    other => Err(CoreError::Internal(format!(
                        "unknown {} id {other}", $label
                    ))),
                }
            }

            /// Resolve an API status name.
            pub fn from_name(name: &str) -> Result<Self, CoreError> {
                match name {
                    $( $text => Ok($name::$variant), )+
                    other => Err(CoreError::Validation(format!(
                        "{} must be one of [{}], got '{other}'",
                        $label,
                        [$($text),+].join(", ")
                    ))),
                }
            }
        }

        impl From<$name> for StatusId {
            fn from(value: $name) -> Self {
                value as StatusId
            }
        }
    };
}

define_status_enum! {
    /// Tattoo session lifecycle status.
    SessionStatus("session status") {
        Scheduled = 1 => "scheduled",
        Completed = 2 => "completed",
        Cancelled = 3 => "cancelled",
        NoShow = 4 => "no_show",
    }
}

define_status_enum! {
    /// Multi-session procedure status.
    ProcedureStatus("procedure status") {
        Planned = 1 => "planned",
        InProgress = 2 => "in_progress",
        Completed = 3 => "completed",
        Cancelled = 4 => "cancelled",
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn session_status_ids_match_seed_order() {
        assert_eq!(SessionStatus::Scheduled.id(), 1);
        assert_eq!(SessionStatus::Completed.id(), 2);
        assert_eq!(SessionStatus::Cancelled.id(), 3);
        assert_eq!(SessionStatus::NoShow.id(), 4);
    }

    #[test]
    fn every_status_resolves_by_id_and_name() {
        for status in SessionStatus::ALL {
            assert_eq!(SessionStatus::from_id(status.id()).unwrap(), *status);
            assert_eq!(SessionStatus::from_name(status.name()).unwrap(), *status);
        }
        for status in ProcedureStatus::ALL {
            assert_eq!(ProcedureStatus::from_id(status.id()).unwrap(), *status);
            assert_eq!(ProcedureStatus::from_name(status.name()).unwrap(), *status);
        }
    }

    #[test]
    fn unknown_name_is_a_validation_error() {
        assert_matches!(
            SessionStatus::from_name("done"),
            Err(CoreError::Validation(msg)) if msg.contains("scheduled, completed")
        );
    }

    #[test]
    fn unknown_id_is_internal() {
        assert_matches!(ProcedureStatus::from_id(42), Err(CoreError::Internal(_)));
    }
}
