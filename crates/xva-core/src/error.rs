//! Error types for XVA Core
//!
//! The switcher and augmenter never fail toward the caller; skip conditions
//! are signaled structurally (inert guard, empty output). The only error
//! here is the toggle-parse failure, which the config module consumes by
//! logging a warning and applying the documented default.

/// Toggle configuration errors
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ToggleError {
    /// Value set for a boolean toggle did not parse
    #[error("unparsable boolean {value:?} for {var}")]
    InvalidBool {
        /// Environment variable holding the toggle
        var: &'static str,
        /// The raw value found
        value: String,
    },
}
