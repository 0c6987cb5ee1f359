//! Test plan steps
//!
//! A step either applies a configuration or imports existing state and
//! verifies it. Fields the execution engine owns (configuration payload,
//! check expectations) are carried opaquely and never interpreted here.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// One ordered element of a test plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TestStep {
    /// Address of the resource under test (e.g. `azurerm_resource_group.test`).
    /// May be empty only on a first step that performs no import.
    pub resource_address: String,
    /// Engine-owned configuration payload applied by this step. Opaque.
    pub config: String,
    /// Whether this step imports state instead of applying configuration.
    pub import_state: bool,
    /// Whether imported state is verified against prior state.
    pub import_state_verify: bool,
    /// Pattern the step's failure output is expected to match. Presence
    /// marks the step as an intentional failure.
    #[serde(skip)]
    pub expect_error: Option<Regex>,
}

impl TestStep {
    /// Create an apply step for the given resource address.
    #[inline]
    #[must_use]
    pub fn apply(resource_address: impl Into<String>) -> Self {
        Self {
            resource_address: resource_address.into(),
            ..Self::default()
        }
    }

    /// Create an import-and-verify step for the given resource address.
    ///
    /// This is the shape of every synthetic step the augmenter injects:
    /// import-state and import-state-verify set, everything else default.
    #[inline]
    #[must_use]
    pub fn import_verify(resource_address: impl Into<String>) -> Self {
        Self {
            resource_address: resource_address.into(),
            import_state: true,
            import_state_verify: true,
            ..Self::default()
        }
    }

    /// With a configuration payload.
    #[inline]
    #[must_use]
    pub fn with_config(mut self, config: impl Into<String>) -> Self {
        self.config = config.into();
        self
    }

    /// With an expected-error pattern, marking the step as an intentional
    /// failure.
    #[inline]
    #[must_use]
    pub fn with_expect_error(mut self, pattern: Regex) -> Self {
        self.expect_error = Some(pattern);
        self
    }

    /// Whether this step carries an expected-error pattern.
    #[inline]
    #[must_use]
    pub fn expects_error(&self) -> bool {
        self.expect_error.is_some()
    }
}

// Regex is not PartialEq; compare expected-error patterns by their text.
impl PartialEq for TestStep {
    fn eq(&self, other: &Self) -> bool {
        self.resource_address == other.resource_address
            && self.config == other.config
            && self.import_state == other.import_state
            && self.import_state_verify == other.import_state_verify
            && self.expect_error.as_ref().map(Regex::as_str)
                == other.expect_error.as_ref().map(Regex::as_str)
    }
}

impl Eq for TestStep {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn import_verify_shape() {
        let step = TestStep::import_verify("azurerm_resource_group.test");
        assert_eq!(step.resource_address, "azurerm_resource_group.test");
        assert!(step.import_state);
        assert!(step.import_state_verify);
        assert!(step.config.is_empty());
        assert!(step.expect_error.is_none());
    }

    #[test]
    fn apply_step_defaults() {
        let step = TestStep::apply("azurerm_resource_group.test").with_config("resource {}");
        assert!(!step.import_state);
        assert!(!step.import_state_verify);
        assert_eq!(step.config, "resource {}");
    }

    #[test]
    fn equality_compares_error_pattern_text() {
        let a = TestStep::apply("r.x").with_expect_error(Regex::new("denied").unwrap());
        let b = TestStep::apply("r.x").with_expect_error(Regex::new("denied").unwrap());
        let c = TestStep::apply("r.x").with_expect_error(Regex::new("other").unwrap());
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, TestStep::apply("r.x"));
    }
}
