//! Generator configuration
//!
//! Controls which external namespaces resolve to published packages instead
//! of locally generated modules.
//!
//! ## Example config file (kubeschema.toml):
//! ```toml
//! external_api_machinery = true
//! external_kubernetes_models = false
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;

/// Process-wide flags for one generation run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Resolve `io.k8s.apimachinery.*` references to the published
    /// `@kubernetes-models/apimachinery` package.
    pub external_api_machinery: bool,

    /// Resolve remaining `io.k8s.*` references to the published
    /// `kubernetes-models` package.
    pub external_kubernetes_models: bool,
}

impl GeneratorConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_resolves_everything_locally() {
        let config = GeneratorConfig::default();
        assert!(!config.external_api_machinery);
        assert!(!config.external_kubernetes_models);
    }

    #[test]
    fn test_parses_partial_toml() {
        let config: GeneratorConfig = toml::from_str("external_api_machinery = true").unwrap();
        assert!(config.external_api_machinery);
        assert!(!config.external_kubernetes_models);
    }
}
