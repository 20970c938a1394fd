//! End-to-end tests for the reconciliation boundary
//!
//! These tests exercise the complete flow a reconciliation framework takes:
//! config loading -> per-field profile selection -> equivalence pipeline.

use std::collections::HashMap;
use std::sync::Arc;
use std::thread;

use policy_content::suppress::{self, xml_diff, xml_with_interpolations_diff};
use policy_content::{
    DiffSuppressFn, NormalizationProfile, ReconcileContext, SuppressConfig, Suppressor,
    equivalent_whitespace_only,
};
use policy_test_utils::{PolicyDir, fixtures};
use pretty_assertions::assert_eq;

/// Stand-in for the framework's per-resource state
struct FakeResourceData;

impl ReconcileContext for FakeResourceData {}

/// Minimal plan step: which fields would be written after suppression
fn plan_updates(
    schema: &HashMap<&str, DiffSuppressFn>,
    observed: &HashMap<&str, &str>,
    declared: &HashMap<&str, &str>,
    ctx: &dyn ReconcileContext,
) -> Vec<String> {
    let mut updates: Vec<String> = declared
        .iter()
        .filter(|(field, new)| {
            let old = observed.get(*field).copied().unwrap_or_default();
            match schema.get(*field) {
                Some(suppress) => !suppress(field, old, new, ctx),
                None => old != **new,
            }
        })
        .map(|(field, _)| field.to_string())
        .collect();
    updates.sort();
    updates
}

#[test]
fn test_plan_suppresses_round_tripped_policy() {
    let mut schema: HashMap<&str, DiffSuppressFn> = HashMap::new();
    schema.insert("api_policy.xml_content", xml_with_interpolations_diff);
    schema.insert("api.0.xml_content", xml_diff);

    let observed = HashMap::from([
        ("api_policy.xml_content", fixtures::INTERPOLATED_POLICY_ESCAPED),
        ("api.0.xml_content", fixtures::POLICY),
        ("sku_name", "Developer_1"),
    ]);
    let declared = HashMap::from([
        ("api_policy.xml_content", fixtures::INTERPOLATED_POLICY),
        ("api.0.xml_content", fixtures::POLICY_CHANGED),
        ("sku_name", "Developer_1"),
    ]);
    let updates = plan_updates(&schema, &observed, &declared, &FakeResourceData);
    assert_eq!(updates, vec!["api.0.xml_content".to_string()]);
}

#[test]
fn test_suppressor_from_config_file() {
    let dir = PolicyDir::new();
    let path = dir.write_config(
        r#"
default_profile = "whitespace-only"

[fields]
"policy.0.xml_content" = "entity-aware"
"operation_policy.*" = "entity-aware"
"#,
    );

    let suppressor = Suppressor::new(SuppressConfig::load(&path).unwrap());

    for field in ["policy.0.xml_content", "operation_policy.xml_content"] {
        assert!(
            suppressor.suppress(
                field,
                fixtures::INTERPOLATED_POLICY_ESCAPED,
                fixtures::INTERPOLATED_POLICY,
                &()
            ),
            "{field} should be suppressed"
        );
    }
    assert!(!suppressor.suppress(
        "product_policy.xml_content",
        fixtures::INTERPOLATED_POLICY_ESCAPED,
        fixtures::INTERPOLATED_POLICY,
        &()
    ));
}

#[test]
fn test_for_field_pointer_agrees_with_suppressor() {
    let suppressor = Suppressor::new(SuppressConfig::api_management());
    let pairs = [
        (fixtures::POLICY, fixtures::POLICY_REFORMATTED),
        (fixtures::POLICY, fixtures::POLICY_CHANGED),
        (fixtures::INTERPOLATED_POLICY, fixtures::INTERPOLATED_POLICY_ESCAPED),
        (fixtures::INTERPOLATED_POLICY, fixtures::INTERPOLATED_POLICY_CHANGED),
    ];

    for field in ["policy.0.xml_content", "xml_content", "other"] {
        let pointer = suppressor.for_field(field);
        for (old, new) in pairs {
            assert_eq!(
                pointer(field, old, new, &()),
                suppressor.suppress(field, old, new, &())
            );
        }
    }
}

#[test]
fn test_concurrent_callers_agree() {
    let suppressor = Arc::new(Suppressor::new(SuppressConfig::api_management()));
    let expected = equivalent_whitespace_only(
        fixtures::INTERPOLATED_POLICY,
        fixtures::INTERPOLATED_POLICY_ESCAPED,
    );

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let suppressor = Arc::clone(&suppressor);
            thread::spawn(move || {
                (0..50)
                    .map(|_| {
                        suppressor.suppress(
                            "policy.0.xml_content",
                            fixtures::INTERPOLATED_POLICY,
                            fixtures::INTERPOLATED_POLICY_ESCAPED,
                            &(),
                        )
                    })
                    .all(|verdict| verdict == expected)
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
    assert!(!expected);
}

#[test]
fn test_suppress_fn_for_every_profile_is_reflexive() {
    for profile in NormalizationProfile::all() {
        let f = suppress::suppress_fn(*profile);
        for doc in [
            fixtures::POLICY,
            fixtures::INTERPOLATED_POLICY,
            fixtures::INTERPOLATED_POLICY_ESCAPED,
            "",
        ] {
            assert!(f("xml_content", doc, doc, &()));
        }
    }
}
