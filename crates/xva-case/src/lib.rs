//! XVA Case Model
//!
//! Data model for cross-version acceptance testing: ordered test steps and
//! the per-case provider bindings an execution engine consumes.
//!
//! # Core Concepts
//!
//! - [`TestStep`]: Ordered element of a test plan (apply or import phase)
//! - [`ExternalProvider`]: Registry descriptor for a released provider
//! - [`ProviderBindings<F>`]: The two mutually exclusive name-to-binding
//!   mappings of a test case (source-built factories vs registry releases)
//! - [`TestCase<F>`]: One binding set plus one ordered step sequence
//!
//! The factory type `F` is owned by the surrounding harness; this crate
//! never constructs or invokes a provider, it only moves bindings around.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
mod bindings;
mod case;
mod step;

// Re-exports
pub use bindings::{ExternalProvider, ProviderBindings, REGISTRY_HOST};
pub use case::TestCase;
pub use step::TestStep;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
