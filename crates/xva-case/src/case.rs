//! Test cases
//!
//! A case owns one provider binding set and one ordered step sequence. The
//! surrounding harness constructs it, optionally swaps bindings and
//! augments steps, then hands it to the execution engine. Cases are never
//! shared across each other, so mutation here needs no synchronization.

use crate::{ProviderBindings, TestStep};

/// One acceptance-test case: provider bindings plus ordered steps.
#[derive(Debug, Clone)]
pub struct TestCase<F> {
    /// Provider bindings the execution engine resolves against.
    pub bindings: ProviderBindings<F>,
    /// Ordered step sequence. Ordering is significant and preserved.
    pub steps: Vec<TestStep>,
}

impl<F> TestCase<F> {
    /// Create a case with the given steps and empty bindings.
    #[inline]
    #[must_use]
    pub fn new(steps: Vec<TestStep>) -> Self {
        Self {
            bindings: ProviderBindings::new(),
            steps,
        }
    }

    /// With a source-build factory bound under `name`.
    #[inline]
    #[must_use]
    pub fn with_factory(mut self, name: impl Into<String>, factory: F) -> Self {
        self.bindings.insert_factory(name, factory);
        self
    }
}
