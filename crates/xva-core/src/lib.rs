//! XVA Core - Cross-Version Acceptance
//!
//! The two transformations that let an acceptance-test plan validate
//! backward compatibility across a released and a developing provider:
//!
//! - Binding switcher: deploy with the pinned release, import with the
//!   developing code, to surface backend-incompatible changes
//! - Step augmenter: inject an import-and-verify step after every plain
//!   step so each reachable configuration gets import-verified
//!
//! # Example
//!
//! ```rust,ignore
//! use xva_core::{activate_external, with_import_verification, AcceptanceConfig};
//! use xva_case::{TestCase, TestStep};
//!
//! let config = AcceptanceConfig::from_env();
//! let mut case = TestCase::new(vec![TestStep::apply("azurerm_resource_group.test")])
//!     .with_factory("azurerm", my_factory);
//!
//! case.steps = with_import_verification(&config, &case.steps);
//! {
//!     let _guard = activate_external(&config, &mut case.bindings);
//!     // apply phases run against the released provider here
//! } // guard drops: developing provider restored for import phases
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
pub mod config;
pub mod error;
pub mod steps;
pub mod switch;

// Re-exports for convenience
pub use config::AcceptanceConfig;
pub use error::ToggleError;
pub use steps::with_import_verification;
pub use switch::{activate_external, ExternalProviderGuard};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
