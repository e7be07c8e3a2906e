//! Property tests for config layer merging.

use std::collections::BTreeMap;

use proptest::prelude::*;

use resolver_session::domain::services::{merge_config_layers, ConfigLayer, ConfigLayerKind};

fn properties() -> impl Strategy<Value = BTreeMap<String, String>> {
    proptest::collection::btree_map("[a-c]\\.[a-c]", "[a-z0-9]{1,6}", 0..6)
}

proptest! {
    /// PROPERTY: Every key from every layer survives, valued by its last layer.
    #[test]
    fn property_later_layer_wins(system in properties(), user in properties()) {
        let merged = merge_config_layers([
            ConfigLayer::from_properties(ConfigLayerKind::System, &system),
            ConfigLayer::from_properties(ConfigLayerKind::User, &user),
        ]);

        let mut expected = system.clone();
        expected.extend(user.clone());

        prop_assert_eq!(merged.properties.len(), expected.len());
        for (key, value) in &expected {
            prop_assert_eq!(merged.properties.get_text(key), Some(value.as_str()));
        }

        let overridden = system.keys().filter(|k| user.contains_key(*k)).count();
        prop_assert_eq!(merged.overrides.len(), overridden);
    }

    /// PROPERTY: Keys keep their first-seen position.
    #[test]
    fn property_first_seen_order(system in properties(), user in properties()) {
        let merged = merge_config_layers([
            ConfigLayer::from_properties(ConfigLayerKind::System, &system),
            ConfigLayer::from_properties(ConfigLayerKind::User, &user),
        ]);

        let mut expected: Vec<&str> = system.keys().map(String::as_str).collect();
        for key in user.keys() {
            if !system.contains_key(key) {
                expected.push(key);
            }
        }
        prop_assert_eq!(merged.properties.keys().collect::<Vec<_>>(), expected);
    }
}
