//! Testing utilities for the XVA workspace
//!
//! Shared fixtures: canned configs, step constructors, and an
//! identity-checkable stand-in for the harness's provider factory type.

#![allow(missing_docs)]

use std::sync::Arc;

use regex::Regex;
use xva_case::{TestCase, TestStep};
use xva_core::AcceptanceConfig;

/// Stand-in for a harness provider factory. Carries a label for debugging
/// and supports identity comparison, which is what the swap/restore
/// round-trip must preserve.
#[derive(Debug, Clone)]
pub struct FakeFactory(Arc<str>);

impl FakeFactory {
    pub fn new(label: &str) -> Self {
        Self(Arc::from(label))
    }

    pub fn label(&self) -> &str {
        &self.0
    }

    /// Whether two handles point at the same factory instance.
    pub fn same_instance(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }
}

pub fn apply_step(resource_address: &str) -> TestStep {
    TestStep::apply(resource_address).with_config(format!("resource \"{resource_address}\" {{}}"))
}

pub fn import_step(resource_address: &str) -> TestStep {
    TestStep::import_verify(resource_address)
}

pub fn failing_step(resource_address: &str, pattern: &str) -> TestStep {
    TestStep::apply(resource_address).with_expect_error(Regex::new(pattern).unwrap())
}

/// A case with a developing-provider factory bound under `provider_name`.
pub fn case_with_provider(provider_name: &str, steps: Vec<TestStep>) -> TestCase<FakeFactory> {
    TestCase::new(steps).with_factory(provider_name, FakeFactory::new("developing"))
}

pub fn enabled_config() -> AcceptanceConfig {
    AcceptanceConfig::new()
}

pub fn disabled_config() -> AcceptanceConfig {
    AcceptanceConfig::new()
        .with_cross_version_import(false)
        .with_fix_import_step(false)
}
