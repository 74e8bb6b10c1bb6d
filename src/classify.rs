//! Reference Classification
//!
//! Decides which dependency domain a referenced schema identifier belongs
//! to and derives the import path and local alias for it. Two external
//! namespaces are recognized; everything else is local to the current
//! generation run.

use serde::{Deserialize, Serialize};

use crate::config::GeneratorConfig;
use crate::names::{class_name, is_api_machinery_id, is_k8s_id, schema_path, trim_suffix};

/// Dependency domain of a referenced schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefDomain {
    /// Published in `@kubernetes-models/apimachinery`.
    ApiMachinery,
    /// Published in `kubernetes-models`.
    KubernetesModels,
    /// Generated by this run; imported by relative path.
    Local,
}

/// Classification result for one referenced identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedImport {
    pub domain: RefDomain,
    /// Class-like local alias, unique per distinct identifier.
    pub alias: String,
    /// Import module path for the reference's generated module.
    pub path: String,
}

/// Classify a reference identifier under the given configuration.
///
/// The apimachinery namespace is a subset of the Kubernetes namespace, so
/// it is checked first. An external namespace only wins when its config
/// flag is on; otherwise the reference falls through to local resolution.
pub fn classify_ref(config: &GeneratorConfig, id: &str) -> ResolvedImport {
    let alias = class_name(id);

    if config.external_api_machinery && is_api_machinery_id(id) {
        ResolvedImport {
            domain: RefDomain::ApiMachinery,
            alias,
            path: format!(
                "@kubernetes-models/apimachinery/{}",
                trim_suffix(&schema_path(id), ".ts")
            ),
        }
    } else if config.external_kubernetes_models && is_k8s_id(id) {
        ResolvedImport {
            domain: RefDomain::KubernetesModels,
            alias,
            path: format!("kubernetes-models/{}", trim_suffix(&schema_path(id), ".ts")),
        }
    } else {
        let path = format!("./{alias}");
        ResolvedImport {
            domain: RefDomain::Local,
            alias,
            path,
        }
    }
}
