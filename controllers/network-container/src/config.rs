//! Reconciler configuration loaded from the environment.

use std::env;

/// `CMP Type` stamped on containers when nothing else is configured
pub const DEFAULT_CMP_TYPE: &str = "Terraform";

/// Environment variable overriding the `CMP Type` label
pub const CMP_TYPE_ENV: &str = "INFOBLOX_CMP_TYPE";

/// Settings shared by every lifecycle handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcilerConfig {
    /// Cloud management platform label recorded on every object created
    pub cmp_type: String,
}

impl Default for ReconcilerConfig {
    fn default() -> Self {
        Self {
            cmp_type: DEFAULT_CMP_TYPE.to_string(),
        }
    }
}

impl ReconcilerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup. Blank values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let cmp_type = lookup(CMP_TYPE_ENV)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_CMP_TYPE.to_string());

        Self { cmp_type }
    }
}
