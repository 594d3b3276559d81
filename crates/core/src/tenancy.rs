//! Tenant kinds and the membership rules that depend on them.

use crate::error::CoreError;
use crate::validation::validate_one_of;

/// A tattoo studio with any number of artists.
pub const TENANT_KIND_STUDIO: &str = "studio";
/// A single independent artist account.
pub const TENANT_KIND_INDEPENDENT: &str = "independent";

pub const VALID_TENANT_KINDS: &[&str] = &[TENANT_KIND_STUDIO, TENANT_KIND_INDEPENDENT];

/// Validate a tenant kind string.
pub fn validate_tenant_kind(kind: &str) -> Result<(), CoreError> {
    validate_one_of(kind, VALID_TENANT_KINDS, "kind")
}

/// Check that a tenant of `kind` with `current_users` users may add another.
pub fn ensure_can_add_member(kind: &str, current_users: i64) -> Result<(), CoreError> {
    if kind == TENANT_KIND_INDEPENDENT && current_users >= 1 {
        return Err(CoreError::Conflict(
            "Independent accounts cannot add team members".into(),
        ));
    }
    Ok(())
}

/// Check that a tenant with `current_users` users may switch to `new_kind`.
pub fn ensure_can_switch_kind(new_kind: &str, current_users: i64) -> Result<(), CoreError> {
    validate_tenant_kind(new_kind)?;
    if new_kind == TENANT_KIND_INDEPENDENT && current_users > 1 {
        return Err(CoreError::Conflict(format!(
            "Cannot switch to an independent account while {current_users} users exist"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn independent_accounts_hold_one_user() {
        assert_matches!(
            ensure_can_add_member(TENANT_KIND_INDEPENDENT, 1),
            Err(CoreError::Conflict(_))
        );
        assert!(ensure_can_add_member(TENANT_KIND_STUDIO, 7).is_ok());
    }

    #[test]
    fn switching_to_independent_requires_single_user() {
        assert!(ensure_can_switch_kind(TENANT_KIND_INDEPENDENT, 1).is_ok());
        assert_matches!(
            ensure_can_switch_kind(TENANT_KIND_INDEPENDENT, 2),
            Err(CoreError::Conflict(_))
        );
        assert_matches!(
            ensure_can_switch_kind("franchise", 1),
            Err(CoreError::Validation(_))
        );
    }
}
