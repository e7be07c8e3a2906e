//! Property tests for flag-to-policy resolution.

use proptest::prelude::*;

use resolver_session::domain::policies::{resolve_error_policy, resolve_update_policy};
use resolver_session::{CachePolicy, UpdatePolicy};

proptest! {
    /// PROPERTY: `never` wins over `always`; no flags leave the policy unset.
    #[test]
    fn property_update_policy_truth_table(no_updates in any::<bool>(), force_updates in any::<bool>()) {
        let expected = if no_updates {
            Some(UpdatePolicy::Never)
        } else if force_updates {
            Some(UpdatePolicy::Always)
        } else {
            None
        };
        prop_assert_eq!(resolve_update_policy(no_updates, force_updates), expected);
    }

    /// PROPERTY: The artifact policy is the OR of the flags; re-resolution adds NOT_FOUND.
    #[test]
    fn property_error_policy_or_law(not_found in any::<bool>(), transfer in any::<bool>()) {
        let policy = resolve_error_policy(not_found, transfer);

        prop_assert_eq!(policy.artifact_policy().contains(CachePolicy::NOT_FOUND), not_found);
        prop_assert_eq!(policy.artifact_policy().contains(CachePolicy::TRANSFER_ERROR), transfer);
        prop_assert_eq!(
            policy.reresolution_policy(),
            policy.artifact_policy() | CachePolicy::NOT_FOUND
        );
    }
}
