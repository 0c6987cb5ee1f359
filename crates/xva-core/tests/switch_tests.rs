//! Swap/restore round-trip against the public API.

use pretty_assertions::assert_eq;
use xva_core::{activate_external, AcceptanceConfig};
use xva_test_utils::{apply_step, case_with_provider, disabled_config, enabled_config, FakeFactory};

#[test]
fn test_swap_then_drop_round_trips_the_factory() {
    let mut case = case_with_provider("azurerm", vec![apply_step("azurerm_resource_group.test")]);
    let original = case.bindings.factory("azurerm").unwrap().clone();

    {
        let guard = activate_external(&enabled_config(), &mut case.bindings);
        assert!(guard.is_active());
        assert!(FakeFactory::same_instance(
            guard.saved_factory().unwrap(),
            &original
        ));
    }

    // Same instance back, external entry gone
    let restored = case.bindings.factory("azurerm").unwrap();
    assert!(FakeFactory::same_instance(restored, &original));
    assert!(!case.bindings.has_external("azurerm"));
}

#[test]
fn test_swapped_phase_sees_only_the_external_binding() {
    let mut case = case_with_provider("azurerm", vec![apply_step("azurerm_resource_group.test")]);

    let guard = activate_external(&enabled_config(), &mut case.bindings);

    // Steps stay reachable while the guard borrows the bindings
    assert_eq!(case.steps.len(), 1);
    assert!(guard.bindings().has_external("azurerm"));
    assert!(!guard.bindings().has_factory("azurerm"));
    guard.restore();
    assert!(case.bindings.has_factory("azurerm"));
}

#[test]
fn test_disabled_toggle_changes_nothing() {
    let mut case = case_with_provider("azurerm", vec![]);
    let original = case.bindings.factory("azurerm").unwrap().clone();

    {
        let guard = activate_external(&disabled_config(), &mut case.bindings);
        assert!(!guard.is_active());
        assert!(guard.saved_factory().is_none());
    }

    let untouched = case.bindings.factory("azurerm").unwrap();
    assert!(FakeFactory::same_instance(untouched, &original));
    assert!(!case.bindings.has_external("azurerm"));
}

#[test]
fn test_pinned_version_yields_exact_constraint() {
    let config = AcceptanceConfig::new().with_provider_version("3.2.1");
    let mut case = case_with_provider("azurerm", vec![]);

    let guard = activate_external(&config, &mut case.bindings);
    let descriptor = guard
        .bindings()
        .external("azurerm")
        .expect("external binding present during swap")
        .clone();
    assert_eq!(descriptor.source, "registry.terraform.io/hashicorp/azurerm");
    assert_eq!(descriptor.version_constraint.as_deref(), Some("=3.2.1"));
}

#[test]
fn test_unpinned_descriptor_serializes_without_constraint() {
    let mut case = case_with_provider("azurerm", vec![]);

    let guard = activate_external(&enabled_config(), &mut case.bindings);
    let descriptor = guard
        .bindings()
        .external("azurerm")
        .expect("external binding present during swap")
        .clone();
    guard.restore();

    let json = serde_json::to_value(&descriptor).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"source": "registry.terraform.io/hashicorp/azurerm"})
    );
}

#[test]
fn test_restore_without_prior_factory_leaves_name_unbound() {
    let mut case = case_with_provider("azuread", vec![]);

    {
        // Config targets azurerm, which has no factory bound
        let guard = activate_external(&enabled_config(), &mut case.bindings);
        assert!(guard.is_active());
        assert!(guard.saved_factory().is_none());
    }

    assert!(!case.bindings.has_factory("azurerm"));
    assert!(!case.bindings.has_external("azurerm"));
    // The unrelated binding survives the whole round trip
    assert!(case.bindings.has_factory("azuread"));
}
