//! Property tests for construction, equality and the canonical form.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use namespaced_key::{KeyError, NamespacedKey, MAX_LENGTH};
use proptest::prelude::*;

fn hash_of(key: &NamespacedKey) -> u64 {
    let mut hasher = DefaultHasher::new();
    key.hash(&mut hasher);
    hasher.finish()
}

fn namespace() -> impl Strategy<Value = String> {
    "[a-z0-9._-]{1,100}"
}

fn key() -> impl Strategy<Value = String> {
    "[a-z0-9/._-]{1,150}"
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("namespaced_key=debug")
        .with_test_writer()
        .try_init();
}

proptest! {
    #[test]
    fn valid_pairs_are_stored_verbatim(n in namespace(), k in key()) {
        let key = NamespacedKey::new(n.as_str(), k.as_str()).unwrap();
        prop_assert_eq!(key.namespace(), n.as_str());
        prop_assert_eq!(key.key(), k.as_str());
    }

    #[test]
    fn canonical_form_roundtrips(n in namespace(), k in key()) {
        let key = NamespacedKey::new(n, k).unwrap();
        let rendered = key.to_string();

        let (ns, rest) = rendered.split_once(':').unwrap();
        prop_assert_eq!(ns, key.namespace());
        prop_assert_eq!(rest, key.key());

        let parsed: NamespacedKey = rendered.parse().unwrap();
        prop_assert_eq!(parsed, key);
    }

    #[test]
    fn bad_namespace_rejected(
        prefix in "[a-z0-9]{0,10}",
        bad in "[A-Z :]",
        suffix in "[a-z0-9]{0,10}",
    ) {
        init_tracing();
        let n = format!("{prefix}{bad}{suffix}");
        let err = NamespacedKey::new(n, "key").unwrap_err();
        prop_assert!(err.is_namespace_error());
    }

    #[test]
    fn bad_key_rejected(
        prefix in "[a-z0-9/]{0,10}",
        bad in "[A-Z\\\\: ]",
        suffix in "[a-z0-9/]{0,10}",
    ) {
        let k = format!("{prefix}{bad}{suffix}");
        let err = NamespacedKey::new("plugin", k).unwrap_err();
        prop_assert!(err.is_key_error());
    }

    #[test]
    fn owner_path_matches_lowercased_explicit_path(
        n in "[a-zA-Z0-9._-]{1,50}",
        k in "[a-zA-Z0-9/._-]{1,50}",
    ) {
        let derived = NamespacedKey::from_owner(n.as_str(), &k).unwrap();
        let explicit = NamespacedKey::new(n.to_lowercase(), k.to_lowercase()).unwrap();
        prop_assert_eq!(hash_of(&derived), hash_of(&explicit));
        prop_assert_eq!(derived, explicit);
    }

    #[test]
    fn equal_keys_hash_equal(n in namespace(), k in key()) {
        let a = NamespacedKey::new(n.as_str(), k.as_str()).unwrap();
        let b = NamespacedKey::new(n, k).unwrap();
        prop_assert_eq!(hash_of(&a), hash_of(&b));
        prop_assert_eq!(a, b);
    }

    #[test]
    fn length_ceiling_is_exclusive(ns_len in 1usize..200, total in 200usize..300) {
        prop_assume!(total > ns_len + 1);
        let key_len = total - ns_len - 1;
        let result = NamespacedKey::new("n".repeat(ns_len), "k".repeat(key_len));

        if total < MAX_LENGTH {
            prop_assert!(result.is_ok());
        } else {
            prop_assert!(
                matches!(result, Err(KeyError::TooLong { length, .. }) if length == total),
                "expected TooLong for total length {}",
                total
            );
        }
    }
}

#[test]
fn random_keys_are_distinct() {
    let keys: Vec<NamespacedKey> = (0..64).map(|_| NamespacedKey::random()).collect();
    let unique: std::collections::HashSet<_> = keys.iter().collect();
    assert_eq!(unique.len(), keys.len(), "Duplicate random keys found!");
    assert!(keys.iter().all(|k| k.namespace() == "bukkit"));
}
