use pretty_assertions::assert_eq;

use super::*;
use crate::catalog::{Context, FragmentKind, FragmentStore, LevelVersion, MessageKey, Scope, Variant};
use crate::codes::ErrorCode;
use crate::error::MessageError;

fn store(kind: FragmentKind, scope: Scope, entries: &[(&str, &str)]) -> FragmentStore {
    let entries = entries
        .iter()
        .map(|(k, v)| (MessageKey::parse(k).unwrap(), v.to_string()));
    FragmentStore::from_entries(kind, scope, entries).unwrap()
}

fn l3v1() -> LevelVersion {
    LevelVersion::new(3, 1)
}

#[test]
fn test_variant_key_tried_before_plain_key() {
    let resolver = FragmentResolver::builder()
        .store(store(
            FragmentKind::Post,
            Scope::locale("en"),
            &[("CORE_20906", "plain"), ("CORE_20906_SELF", "self")],
        ))
        .default_generic(DEFAULT_GENERIC_TEMPLATE)
        .build()
        .unwrap();
    let ctx = Context::default();
    let code = ErrorCode::core(20906);

    assert_eq!(
        resolver.resolve(FragmentKind::Post, &code, Some(Variant::SelfRef), &ctx),
        "self"
    );
    assert_eq!(resolver.resolve(FragmentKind::Post, &code, None, &ctx), "plain");
}

#[test]
fn test_variant_falls_back_to_plain_key_in_same_store() {
    let resolver = FragmentResolver::builder()
        .store(store(
            FragmentKind::Post,
            Scope::locale("en"),
            &[("CORE_20505", "plain")],
        ))
        .default_generic(DEFAULT_GENERIC_TEMPLATE)
        .build()
        .unwrap();
    let ctx = Context::default();

    assert_eq!(
        resolver.resolve(
            FragmentKind::Post,
            &ErrorCode::core(20505),
            Some(Variant::SelfRef),
            &ctx
        ),
        "plain"
    );
}

#[test]
fn test_plain_hit_in_narrower_store_beats_variant_in_broader() {
    // The variant retry happens within a store before the chain moves on.
    let resolver = FragmentResolver::builder()
        .store(store(
            FragmentKind::Post,
            Scope::for_level_version("en", l3v1()),
            &[("CORE_10311", "narrow plain")],
        ))
        .store(store(
            FragmentKind::Post,
            Scope::locale("en"),
            &[("CORE_10311_MATH", "broad math")],
        ))
        .default_generic(DEFAULT_GENERIC_TEMPLATE)
        .build()
        .unwrap();
    let ctx = Context::new("en").with_level_version(l3v1());

    assert_eq!(
        resolver.resolve(
            FragmentKind::Post,
            &ErrorCode::core(10311),
            Some(Variant::Math),
            &ctx
        ),
        "narrow plain"
    );
}

#[test]
fn test_narrower_store_overrides_broader() {
    let narrow = store(
        FragmentKind::Generic,
        Scope::for_level_version("en", l3v1()),
        &[("CORE_10311", "l3 wording")],
    );
    let broad = store(
        FragmentKind::Generic,
        Scope::locale("en"),
        &[("CORE_10311", "default wording")],
    );
    let ctx = Context::new("en").with_level_version(l3v1());
    let code = ErrorCode::core(10311);

    let resolver = FragmentResolver::builder()
        .store(broad.clone())
        .store(narrow)
        .default_generic(DEFAULT_GENERIC_TEMPLATE)
        .build()
        .unwrap();
    assert_eq!(
        resolver.resolve(FragmentKind::Generic, &code, None, &ctx),
        "l3 wording"
    );

    // Removing the narrower entry must change the result to the broader one.
    let resolver = FragmentResolver::builder()
        .store(broad)
        .default_generic(DEFAULT_GENERIC_TEMPLATE)
        .build()
        .unwrap();
    assert_eq!(
        resolver.resolve(FragmentKind::Generic, &code, None, &ctx),
        "default wording"
    );
}

#[test]
fn test_narrow_store_ignored_without_matching_context() {
    let resolver = FragmentResolver::builder()
        .store(store(
            FragmentKind::Generic,
            Scope::for_level_version("en", l3v1()),
            &[("CORE_10311", "l3 wording")],
        ))
        .store(store(
            FragmentKind::Generic,
            Scope::locale("en"),
            &[("CORE_10311", "default wording")],
        ))
        .default_generic(DEFAULT_GENERIC_TEMPLATE)
        .build()
        .unwrap();
    let code = ErrorCode::core(10311);

    assert_eq!(
        resolver.resolve(FragmentKind::Generic, &code, None, &Context::default()),
        "default wording"
    );
    let l2v4 = Context::new("en").with_level_version(LevelVersion::new(2, 4));
    assert_eq!(
        resolver.resolve(FragmentKind::Generic, &code, None, &l2v4),
        "default wording"
    );
}

#[test]
fn test_optional_kinds_resolve_to_empty_string() {
    let resolver = FragmentResolver::builder()
        .default_generic(DEFAULT_GENERIC_TEMPLATE)
        .build()
        .unwrap();
    let ctx = Context::default();
    let code = ErrorCode::core(12345);

    assert_eq!(resolver.resolve(FragmentKind::Short, &code, None, &ctx), "");
    assert_eq!(resolver.resolve(FragmentKind::Pre, &code, None, &ctx), "");
    assert_eq!(resolver.resolve(FragmentKind::Post, &code, None, &ctx), "");
}

#[test]
fn test_generic_falls_back_to_universal_default() {
    let resolver = FragmentResolver::builder()
        .default_generic(DEFAULT_GENERIC_TEMPLATE)
        .build()
        .unwrap();

    let resolved = resolver.resolve(
        FragmentKind::Generic,
        &ErrorCode::core(42424),
        None,
        &Context::default(),
    );
    assert_eq!(resolved, DEFAULT_GENERIC_TEMPLATE);
    assert!(!resolved.is_empty());
}

#[test]
fn test_builder_without_default_generic_fails() {
    let err = FragmentResolver::builder().build().unwrap_err();
    assert!(matches!(err, MessageError::UnresolvedGeneric));
}

#[test]
fn test_registration_order_breaks_ties_within_a_tier() {
    let resolver = FragmentResolver::builder()
        .store(store(
            FragmentKind::Short,
            Scope::locale("en"),
            &[("CORE_00001", "override label")],
        ))
        .store(store(
            FragmentKind::Short,
            Scope::locale("en"),
            &[("CORE_00001", "stock label")],
        ))
        .default_generic(DEFAULT_GENERIC_TEMPLATE)
        .build()
        .unwrap();

    assert_eq!(
        resolver.resolve(
            FragmentKind::Short,
            &ErrorCode::core(1),
            None,
            &Context::default()
        ),
        "override label"
    );
}

#[test]
fn test_known_codes_unions_short_and_generic_chains() {
    let resolver = FragmentResolver::builder()
        .store(store(
            FragmentKind::Short,
            Scope::locale("en"),
            &[("CORE_00001", "label")],
        ))
        .store(store(
            FragmentKind::Generic,
            Scope::locale("en"),
            &[("CORE_00002", "rule")],
        ))
        .store(store(
            FragmentKind::Post,
            Scope::locale("en"),
            &[("CORE_00003", "detail")],
        ))
        .default_generic(DEFAULT_GENERIC_TEMPLATE)
        .build()
        .unwrap();

    let codes = resolver.known_codes();
    assert!(codes.contains(&ErrorCode::core(1)));
    assert!(codes.contains(&ErrorCode::core(2)));
    // Post-only entries do not make a code "known".
    assert!(!codes.contains(&ErrorCode::core(3)));
}
