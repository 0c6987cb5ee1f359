//! Step sequence augmenter
//!
//! Closes every import gap in a test plan: after each plain step that is
//! not already followed by an import step, a synthetic import-and-verify
//! step is injected, so every resource configuration the plan reaches gets
//! import-verified without hand-authoring the steps.

use xva_case::TestStep;

use crate::config::AcceptanceConfig;

/// Inject import-and-verify steps after every plain step.
///
/// Original steps are copied in order, never removed or reordered. After a
/// step that is not an import step, has no expected-error pattern, and is
/// not immediately followed by an import step, an import-and-verify step
/// for the first step's resource address is appended. An expected-failure
/// step never gets a synthetic import: the resource may not exist after an
/// intentionally failed apply.
///
/// Returns an empty sequence, signaling that augmentation was skipped, when
/// the fix-import toggle is disabled, the input is empty, or the first
/// step's resource address is empty (no import target to reuse).
///
/// Every synthetic step targets the first step's address, on the assumption
/// that the sequence exercises a single resource instance whose identifier
/// the first step establishes. A plan that renames its resource
/// mid-sequence would get stale import targets.
#[must_use]
pub fn with_import_verification(config: &AcceptanceConfig, steps: &[TestStep]) -> Vec<TestStep> {
    if !config.fix_import_step {
        tracing::debug!("Import-step augmentation disabled, skipping");
        return Vec::new();
    }
    let Some(first) = steps.first() else {
        return Vec::new();
    };
    if first.resource_address.is_empty() {
        tracing::debug!("First step has no resource address, skipping augmentation");
        return Vec::new();
    }

    let resource_address = first.resource_address.clone();
    let mut results = Vec::with_capacity(steps.len() * 2);
    for (i, step) in steps.iter().enumerate() {
        results.push(step.clone());
        let next_is_import = steps.get(i + 1).is_some_and(|next| next.import_state);
        if !step.import_state && !step.expects_error() && !next_is_import {
            results.push(TestStep::import_verify(resource_address.clone()));
        }
    }
    tracing::debug!(
        "Injected {} import steps into a {}-step plan",
        results.len() - steps.len(),
        steps.len()
    );
    results
}
