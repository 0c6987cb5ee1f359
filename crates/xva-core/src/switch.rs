//! Provider binding switcher
//!
//! Swaps a test case's developing-provider binding for a released one
//! fetched from the registry, so apply steps deploy with the release while
//! later import steps exercise the developing code. The swap is scoped: the
//! returned guard restores the developing binding when dropped, so a
//! harness cannot leak the external binding into later phases by forgetting
//! a restore call.

use xva_case::{ExternalProvider, ProviderBindings};

use crate::config::AcceptanceConfig;

/// Swap the configured provider's binding to its released registry version.
///
/// Pass the binding set of the case about to run its apply phases. When the
/// cross-version toggle is enabled, the configured provider name is bound
/// to `registry.terraform.io/<namespace>/<name>` (pinned to
/// `=<version>` when a version is configured) and whatever factory was
/// bound under that name is captured; a missing factory is a legitimate
/// state. When the toggle is disabled, the bindings are left untouched and
/// the returned guard is inert.
///
/// The returned guard restores the developing binding on drop, so the
/// restore ordering is a structural guarantee rather than a calling
/// convention. While the guard is alive it holds the mutable borrow of the
/// binding set; the case's steps stay freely accessible.
pub fn activate_external<'c, F>(
    config: &AcceptanceConfig,
    bindings: &'c mut ProviderBindings<F>,
) -> ExternalProviderGuard<'c, F> {
    if !config.cross_version_import {
        tracing::debug!("Cross-version import disabled, keeping developing provider bound");
        return ExternalProviderGuard {
            bindings,
            provider_name: None,
            saved: None,
        };
    }

    let name = config.provider_name.clone();
    let mut descriptor = ExternalProvider::registry(&config.provider_namespace, &name);
    if let Some(version) = config.provider_version.as_deref() {
        descriptor = descriptor.pinned(version);
    }
    tracing::info!(
        "Swapping provider '{}' to external source {}",
        name,
        descriptor.source
    );

    let saved = bindings.insert_external(name.clone(), descriptor);
    ExternalProviderGuard {
        bindings,
        provider_name: Some(name),
        saved,
    }
}

/// Scope of an active external-provider swap.
///
/// Holds the factory displaced by [`activate_external`] and re-binds it
/// (removing the external entry) when dropped or explicitly
/// [`restore`](Self::restore)d. Inert when the swap was disabled.
#[derive(Debug)]
pub struct ExternalProviderGuard<'c, F> {
    bindings: &'c mut ProviderBindings<F>,
    // Some while a swap is active; taken on release.
    provider_name: Option<String>,
    saved: Option<F>,
}

impl<F> ExternalProviderGuard<'_, F> {
    /// Whether a swap is active and will be undone on release.
    #[inline]
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.provider_name.is_some()
    }

    /// The factory displaced by the swap, if one was bound.
    #[inline]
    #[must_use]
    pub fn saved_factory(&self) -> Option<&F> {
        self.saved.as_ref()
    }

    /// Read access to the binding set while the swap is in effect.
    #[inline]
    #[must_use]
    pub fn bindings(&self) -> &ProviderBindings<F> {
        self.bindings
    }

    /// Restore the developing binding now instead of at end of scope.
    pub fn restore(mut self) {
        self.release();
    }

    fn release(&mut self) {
        let Some(name) = self.provider_name.take() else {
            return;
        };
        tracing::debug!("Restoring developing provider binding for '{}'", name);
        match self.saved.take() {
            // insert_factory removes the external entry as a side effect
            Some(factory) => {
                self.bindings.insert_factory(name, factory);
            }
            None => {
                self.bindings.remove_external(&name);
            }
        }
    }
}

impl<F> Drop for ExternalProviderGuard<'_, F> {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enabled() -> AcceptanceConfig {
        AcceptanceConfig::new()
    }

    #[test]
    fn swap_moves_binding_to_external() {
        let mut bindings = ProviderBindings::new();
        bindings.insert_factory("azurerm", 7u8);

        let guard = activate_external(&enabled(), &mut bindings);
        assert!(guard.is_active());
        assert_eq!(guard.saved_factory(), Some(&7));
        assert!(guard.bindings().has_external("azurerm"));
        assert!(!guard.bindings().has_factory("azurerm"));
    }

    #[test]
    fn drop_restores_factory_and_removes_external() {
        let mut bindings = ProviderBindings::new();
        bindings.insert_factory("azurerm", 7u8);

        {
            let _guard = activate_external(&enabled(), &mut bindings);
        }
        assert_eq!(bindings.factory("azurerm"), Some(&7));
        assert!(!bindings.has_external("azurerm"));
    }

    #[test]
    fn explicit_restore_matches_drop() {
        let mut bindings = ProviderBindings::new();
        bindings.insert_factory("azurerm", 7u8);

        let guard = activate_external(&enabled(), &mut bindings);
        guard.restore();
        assert_eq!(bindings.factory("azurerm"), Some(&7));
        assert!(!bindings.has_external("azurerm"));
    }

    #[test]
    fn missing_factory_is_not_an_error() {
        let mut bindings: ProviderBindings<u8> = ProviderBindings::new();

        {
            let guard = activate_external(&enabled(), &mut bindings);
            assert!(guard.is_active());
            assert_eq!(guard.saved_factory(), None);
        }
        assert!(!bindings.has_factory("azurerm"));
        assert!(!bindings.has_external("azurerm"));
    }

    #[test]
    fn disabled_toggle_leaves_bindings_untouched() {
        let config = AcceptanceConfig::new().with_cross_version_import(false);
        let mut bindings = ProviderBindings::new();
        bindings.insert_factory("azurerm", 7u8);

        {
            let guard = activate_external(&config, &mut bindings);
            assert!(!guard.is_active());
            assert!(guard.bindings().has_factory("azurerm"));
            assert!(!guard.bindings().has_external("azurerm"));
        }
        assert_eq!(bindings.factory("azurerm"), Some(&7));
        assert!(!bindings.has_external("azurerm"));
    }

    #[test]
    fn pinned_version_produces_exact_constraint() {
        let config = AcceptanceConfig::new().with_provider_version("3.2.1");
        let mut bindings: ProviderBindings<u8> = ProviderBindings::new();

        let guard = activate_external(&config, &mut bindings);
        let descriptor = guard.bindings().external("azurerm").unwrap();
        assert_eq!(descriptor.version_constraint.as_deref(), Some("=3.2.1"));
    }

    #[test]
    fn configured_name_and_namespace_shape_the_source() {
        let config = AcceptanceConfig::new()
            .with_provider_name("azuread")
            .with_provider_namespace("example");
        let mut bindings: ProviderBindings<u8> = ProviderBindings::new();

        let guard = activate_external(&config, &mut bindings);
        let descriptor = guard.bindings().external("azuread").unwrap();
        assert_eq!(descriptor.source, "registry.terraform.io/example/azuread");
        assert!(descriptor.version_constraint.is_none());
    }
}
