//! Acceptance-run configuration
//!
//! Toggles controlling the cross-version swap and import-step augmentation.
//! Built once at the harness entry point (usually from the environment) and
//! passed by reference into both transformations, so tests can inject
//! arbitrary toggle combinations without touching process-global state.

use std::env;

use crate::error::ToggleError;

/// Environment variable enabling the cross-version binding swap.
pub const CROSS_VERSION_IMPORT_VAR: &str = "TF_ACC_CROSS_VERSION_IMPORT";
/// Environment variable naming the provider under test.
pub const PROVIDER_VAR: &str = "TF_ACC_PROVIDER";
/// Environment variable naming the registry namespace of the provider.
pub const PROVIDER_NAMESPACE_VAR: &str = "TF_ACC_PROVIDER_NAMESPACE";
/// Environment variable pinning the released provider version.
pub const PROVIDER_VERSION_VAR: &str = "TF_ACC_PROVIDER_VERSION";
/// Environment variable enabling import-step augmentation.
pub const FIX_IMPORT_VAR: &str = "TF_ACC_FIX_IMPORT";

const DEFAULT_PROVIDER_NAME: &str = "azurerm";
const DEFAULT_PROVIDER_NAMESPACE: &str = "hashicorp";

/// Toggles for one acceptance run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptanceConfig {
    /// Run apply steps against the released provider and import with the
    /// developing one. Enabled by default.
    pub cross_version_import: bool,
    /// Name of the provider whose binding is swapped.
    pub provider_name: String,
    /// Registry namespace the released provider is fetched from.
    pub provider_namespace: String,
    /// Exact released version to pin. `None` means latest compatible.
    pub provider_version: Option<String>,
    /// Inject import-and-verify steps after plain steps. Enabled by default.
    pub fix_import_step: bool,
}

impl AcceptanceConfig {
    /// Create the default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Read the configuration through an injectable lookup.
    ///
    /// Empty values count as absent. Unparsable boolean toggles fall back
    /// to enabled with a warning rather than failing the run.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |var: &str| lookup(var).filter(|v| !v.is_empty());
        Self {
            cross_version_import: bool_toggle(CROSS_VERSION_IMPORT_VAR, get(CROSS_VERSION_IMPORT_VAR)),
            provider_name: get(PROVIDER_VAR).unwrap_or_else(|| DEFAULT_PROVIDER_NAME.to_string()),
            provider_namespace: get(PROVIDER_NAMESPACE_VAR)
                .unwrap_or_else(|| DEFAULT_PROVIDER_NAMESPACE.to_string()),
            provider_version: get(PROVIDER_VERSION_VAR),
            fix_import_step: bool_toggle(FIX_IMPORT_VAR, get(FIX_IMPORT_VAR)),
        }
    }

    /// With the cross-version swap toggled.
    #[inline]
    #[must_use]
    pub fn with_cross_version_import(mut self, enabled: bool) -> Self {
        self.cross_version_import = enabled;
        self
    }

    /// With a provider name.
    #[inline]
    #[must_use]
    pub fn with_provider_name(mut self, name: impl Into<String>) -> Self {
        self.provider_name = name.into();
        self
    }

    /// With a registry namespace.
    #[inline]
    #[must_use]
    pub fn with_provider_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.provider_namespace = namespace.into();
        self
    }

    /// With a pinned released version.
    #[inline]
    #[must_use]
    pub fn with_provider_version(mut self, version: impl Into<String>) -> Self {
        self.provider_version = Some(version.into());
        self
    }

    /// With import-step augmentation toggled.
    #[inline]
    #[must_use]
    pub fn with_fix_import_step(mut self, enabled: bool) -> Self {
        self.fix_import_step = enabled;
        self
    }
}

impl Default for AcceptanceConfig {
    fn default() -> Self {
        Self {
            cross_version_import: true,
            provider_name: DEFAULT_PROVIDER_NAME.to_string(),
            provider_namespace: DEFAULT_PROVIDER_NAMESPACE.to_string(),
            provider_version: None,
            fix_import_step: true,
        }
    }
}

/// Resolve a boolean toggle, defaulting to enabled on absence or parse
/// failure.
fn bool_toggle(var: &'static str, value: Option<String>) -> bool {
    match value {
        None => true,
        Some(raw) => match parse_bool(var, &raw) {
            Ok(enabled) => enabled,
            Err(err) => {
                tracing::warn!("{err}, defaulting to enabled");
                true
            }
        },
    }
}

/// Parse the boolean spellings accepted for toggles: `1`, `t`, `true`, `0`,
/// `f`, `false`, case-insensitive.
fn parse_bool(var: &'static str, raw: &str) -> Result<bool, ToggleError> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "t" | "true" => Ok(true),
        "0" | "f" | "false" => Ok(false),
        _ => Err(ToggleError::InvalidBool {
            var,
            value: raw.to_string(),
        }),
    }
}
