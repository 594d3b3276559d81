//! Well-known role name constants.
//!
//! These must match the seed data in `20261001000002_create_users.sql`.

pub const ROLE_OWNER: &str = "owner";
pub const ROLE_ARTIST: &str = "artist";

/// Role id of the seeded `owner` row.
pub const ROLE_OWNER_ID: i64 = 1;
/// Role id of the seeded `artist` row.
pub const ROLE_ARTIST_ID: i64 = 2;

/// Map a role name from an API payload to its seeded id.
pub fn role_id_for(name: &str) -> Option<i64> {
    match name {
        ROLE_OWNER => Some(ROLE_OWNER_ID),
        ROLE_ARTIST => Some(ROLE_ARTIST_ID),
        _ => None,
    }
}

/// Map a seeded role id back to its name.
pub fn role_name_for(id: i64) -> &'static str {
    match id {
        ROLE_OWNER_ID => ROLE_OWNER,
        ROLE_ARTIST_ID => ROLE_ARTIST,
        _ => "unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_names_round_trip_through_ids() {
        for name in [ROLE_OWNER, ROLE_ARTIST] {
            let id = role_id_for(name).unwrap();
            assert_eq!(role_name_for(id), name);
        }
    }

    #[test]
    fn unknown_role_name_is_rejected() {
        assert_eq!(role_id_for("admin"), None);
        assert_eq!(role_name_for(99), "unknown");
    }
}
