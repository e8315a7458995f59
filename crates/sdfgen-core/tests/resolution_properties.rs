//! End-to-end resolution properties exercised through the public API.

use sdfgen_core::domain::{
    ChoiceSet, DomainError, OptionCatalog, OptionValue, RawOptions, Resolver, keys,
};

fn resolver_fixture() -> OptionCatalog {
    OptionCatalog::builtin()
}

#[test]
fn derived_fields_equal_catalog_defaults_when_unspecified() {
    let catalog = resolver_fixture();
    let resolver = Resolver::new(&catalog);

    for world in catalog.members(ChoiceSet::Worlds) {
        let params = resolver
            .resolve(&RawOptions::new().with(keys::WORLD_NAME, world.clone()))
            .unwrap();
        let expected = catalog.lookup_default(ChoiceSet::Worlds, &world).unwrap();
        assert_eq!(params.get(keys::SDF_VERSION), Some(&expected), "{world}");
    }

    for model in catalog.members(ChoiceSet::Models) {
        let params = resolver
            .resolve(&RawOptions::new().with(keys::MODEL_NAME, model.clone()))
            .unwrap();
        let expected = catalog.lookup_default(ChoiceSet::Models, &model).unwrap();
        assert_eq!(params.get(keys::MODEL_POSE), Some(&expected), "{model}");
    }
}

#[test]
fn explicit_overrides_always_win() {
    let catalog = resolver_fixture();
    let resolver = Resolver::new(&catalog);

    for world in catalog.members(ChoiceSet::Worlds) {
        let params = resolver
            .resolve(
                &RawOptions::new()
                    .with(keys::WORLD_NAME, world)
                    .with(keys::SDF_VERSION, 2.0),
            )
            .unwrap();
        assert_eq!(params.get(keys::SDF_VERSION), Some(&OptionValue::Float(2.0)));
    }

    for model in catalog.members(ChoiceSet::Models) {
        let params = resolver
            .resolve(
                &RawOptions::new()
                    .with(keys::MODEL_NAME, model)
                    .with(keys::MODEL_POSE, "9 9 9 0 0 0"),
            )
            .unwrap();
        assert_eq!(
            params.get(keys::MODEL_POSE),
            Some(&OptionValue::from("9 9 9 0 0 0"))
        );
    }
}

#[test]
fn invalid_names_never_yield_a_mapping() {
    let catalog = resolver_fixture();
    let resolver = Resolver::new(&catalog);

    let result = resolver.resolve(&RawOptions::new().with(keys::WORLD_NAME, "atlantis"));
    assert!(matches!(result, Err(DomainError::InvalidChoice { .. })));

    let result = resolver.resolve(&RawOptions::new().with(keys::MODEL_NAME, "submarine"));
    assert!(matches!(result, Err(DomainError::InvalidChoice { .. })));
}

#[test]
fn hitl_rename_never_collides_with_a_base_model() {
    let catalog = resolver_fixture();
    let resolver = Resolver::new(&catalog);

    for model in catalog.members(ChoiceSet::Models) {
        let params = resolver
            .resolve(&RawOptions::new().with(keys::MODEL_NAME, model.clone()))
            .unwrap();
        let resolved = params.get(keys::MODEL_NAME).unwrap().to_template_value();
        assert_ne!(resolved, model);
        assert!(!catalog.is_member(ChoiceSet::Models, &resolved));
        assert!(resolved.ends_with(&model));
    }
}

#[test]
fn repeated_resolution_is_byte_identical() {
    let catalog = resolver_fixture();
    let resolver = Resolver::new(&catalog);
    let raw = RawOptions::new()
        .with(keys::WORLD_NAME, "typhoon")
        .with(keys::MODEL_NAME, "typhoon_h480")
        .with(keys::AMBIENT_LIGHT, 0.5);

    let first: Vec<(String, String)> = resolver
        .resolve(&raw)
        .unwrap()
        .template_values()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
    let second: Vec<(String, String)> = resolver
        .resolve(&raw)
        .unwrap()
        .template_values()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
    assert_eq!(first, second);
}
