use basalt_kernel::prelude::*;
use std::collections::HashSet;
use std::time::Duration;
use strum::IntoEnumIterator;

#[test]
fn get_matches_definition_default() {
    let conf = DefaultConfiguration::new();
    let registry = PropertyRegistry::global();

    for property in Property::iter() {
        let definition = registry.lookup_by_key(property.key()).expect("registered key");
        assert_eq!(conf.get(property), definition.default_value, "{property}");
        assert_eq!(conf.get_by_key(property.key()).expect("registered key"), definition.default_value);
    }
}

#[test]
fn iterated_pairs_agree_with_lookup() {
    let conf = DefaultConfiguration::new();
    let registry = PropertyRegistry::global();

    for (key, value) in conf.iter() {
        assert_eq!(registry.lookup_by_key(key).expect("iterated key").default_value, value, "{key}");
    }
}

#[test]
fn iteration_through_trait_object_matches_registry() {
    let defaults = DefaultConfiguration::new();
    let conf: &dyn Configuration = &defaults;

    let pairs: Vec<_> = conf.iter().collect();
    let expected: Vec<_> = PropertyRegistry::global().iter().collect();
    assert_eq!(pairs, expected);
}

#[test]
fn iteration_is_restartable_and_duplicate_free() {
    let registry = PropertyRegistry::global();
    let first: Vec<_> = registry.iter().collect();
    let second: Vec<_> = registry.into_iter().collect();

    assert_eq!(first, second);
    assert_eq!(first.len(), registry.len());

    let keys: HashSet<_> = first.iter().map(|(key, _)| *key).collect();
    assert_eq!(keys.len(), first.len());
}

#[test]
fn master_client_port_defaults_to_9999() {
    let conf = DefaultConfiguration::new();

    assert_eq!(conf.get(Property::MasterClientPort), "9999");
    assert_eq!(conf.get_by_key("master.port.client").expect("registered"), "9999");
    assert_eq!(conf.get_port(Property::MasterClientPort).expect("valid port"), 9999);

    let hits = conf.iter().filter(|pair| *pair == ("master.port.client", "9999")).count();
    assert_eq!(hits, 1);
}

#[test]
fn unknown_key_is_an_error() {
    let conf = DefaultConfiguration::new();

    let err = conf.get_by_key("master.port.clinet").expect_err("typo must not resolve");
    assert!(err.is_unknown_property());
    assert!(matches!(err, ConfigError::UnknownProperty { ref key, .. } if key == "master.port.clinet"));
    assert_eq!(conf.get_raw("master.port.clinet"), None);
}

#[test]
fn typed_getters_parse_defaults() {
    let conf = DefaultConfiguration::new();

    assert_eq!(conf.get_duration(Property::GeneralRpcTimeout).expect("duration"), Duration::from_secs(120));
    assert_eq!(conf.get_memory(Property::TserverMaxMemoryMaps).expect("memory"), 1 << 30);
    assert!(conf.get_boolean(Property::TserverNativeMaps).expect("boolean"));
    assert_eq!(conf.get_count(Property::GcDeleteThreads).expect("count"), 16);
    assert_eq!(conf.get_fraction(Property::TableBloomErrorRate).expect("fraction"), 0.005);
    assert_eq!(conf.get_host_list(Property::InstanceCoordinators).expect("hosts"), ["localhost:2181"]);
    assert_eq!(conf.get_choice(Property::TableFileCompressionType).expect("choice"), "gz");
    assert_eq!(conf.get_path(Property::InstanceDfsDir).expect("path").to_str(), Some("/basalt"));
}

#[test]
fn typed_getter_on_wrong_type_is_a_mismatch() {
    let conf = DefaultConfiguration::new();

    let err = conf.get_port(Property::GeneralRpcTimeout).expect_err("duration is not a port");
    assert!(matches!(
        err,
        ConfigError::TypeMismatch { key: "general.rpc.timeout", requested: "port", actual: PropertyType::Duration, .. }
    ));
    assert!(conf.get_choice(Property::MasterClientPort).is_err());
}

#[test]
fn every_default_parses_under_its_type() {
    for definition in PropertyRegistry::global().definitions() {
        assert!(
            basalt_kernel::conf::types::is_valid(definition.property_type, definition.default_value),
            "{} = {:?}",
            definition.key,
            definition.default_value
        );
    }
}

#[test]
fn defaults_have_no_prefixed_entries() {
    let conf = DefaultConfiguration::new();
    for prefix in PropertyPrefix::iter() {
        assert!(conf.get_with_prefix(prefix).is_empty(), "{prefix}");
    }
}
