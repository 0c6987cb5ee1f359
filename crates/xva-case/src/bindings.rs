//! Provider bindings
//!
//! A test case binds each provider name to exactly one of two sources: a
//! factory that builds the provider from local source, or a descriptor that
//! pins a released version fetched from a remote registry. The execution
//! engine selects which code a phase exercises purely by mapping
//! membership, so the mutating API here removes the counterpart entry on
//! every insert.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Registry host all external descriptors resolve against.
pub const REGISTRY_HOST: &str = "registry.terraform.io";

/// Descriptor for a provider fetched from a remote registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalProvider {
    /// Fully qualified source, `registry.terraform.io/<namespace>/<name>`.
    pub source: String,
    /// Exact-version constraint (`=<version>`). Absent means latest
    /// compatible, governed by the harness and registry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_constraint: Option<String>,
}

impl ExternalProvider {
    /// Create a descriptor for `<namespace>/<name>` on the standard registry.
    #[inline]
    #[must_use]
    pub fn registry(namespace: &str, name: &str) -> Self {
        Self {
            source: format!("{REGISTRY_HOST}/{namespace}/{name}"),
            version_constraint: None,
        }
    }

    /// Pin the descriptor to an exact version.
    #[inline]
    #[must_use]
    pub fn pinned(mut self, version: &str) -> Self {
        self.version_constraint = Some(format!("={version}"));
        self
    }
}

/// The two mutually exclusive provider mappings of a test case.
///
/// `F` is the harness's factory type for providers built from source; this
/// crate moves values of it around without constructing or invoking them.
///
/// Invariant: a provider name is present in at most one of the two mappings
/// at any time. Absence from both is a legitimate state.
#[derive(Debug, Clone)]
pub struct ProviderBindings<F> {
    factories: IndexMap<String, F>,
    external: IndexMap<String, ExternalProvider>,
}

impl<F> ProviderBindings<F> {
    /// Create an empty binding set.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            factories: IndexMap::new(),
            external: IndexMap::new(),
        }
    }

    /// Bind `name` to a source-build factory, displacing any external
    /// binding under the same name.
    pub fn insert_factory(
        &mut self,
        name: impl Into<String>,
        factory: F,
    ) -> Option<ExternalProvider> {
        let name = name.into();
        let displaced = self.external.shift_remove(&name);
        self.factories.insert(name, factory);
        displaced
    }

    /// Bind `name` to an external registry descriptor, displacing and
    /// returning any factory under the same name. A missing factory is a
    /// legitimate state, not an error.
    pub fn insert_external(
        &mut self,
        name: impl Into<String>,
        descriptor: ExternalProvider,
    ) -> Option<F> {
        let name = name.into();
        let displaced = self.factories.shift_remove(&name);
        self.external.insert(name, descriptor);
        displaced
    }

    /// Remove the external binding for `name`, if any.
    pub fn remove_external(&mut self, name: &str) -> Option<ExternalProvider> {
        self.external.shift_remove(name)
    }

    /// Factory bound under `name`, if any.
    #[inline]
    #[must_use]
    pub fn factory(&self, name: &str) -> Option<&F> {
        self.factories.get(name)
    }

    /// External descriptor bound under `name`, if any.
    #[inline]
    #[must_use]
    pub fn external(&self, name: &str) -> Option<&ExternalProvider> {
        self.external.get(name)
    }

    /// Whether `name` is bound to a source-build factory.
    #[inline]
    #[must_use]
    pub fn has_factory(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Whether `name` is bound to an external descriptor.
    #[inline]
    #[must_use]
    pub fn has_external(&self, name: &str) -> bool {
        self.external.contains_key(name)
    }

    /// Names currently bound to source-build factories, in insertion order.
    pub fn factory_names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    /// Names currently bound to external descriptors, in insertion order.
    pub fn external_names(&self) -> impl Iterator<Item = &str> {
        self.external.keys().map(String::as_str)
    }
}

impl<F> Default for ProviderBindings<F> {
    fn default() -> Self {
        Self::new()
    }
}
