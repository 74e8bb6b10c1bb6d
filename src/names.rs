//! Identifier and Path Utilities
//!
//! Pure total functions over dotted schema identifiers: reference
//! normalization, class-like alias derivation, module path mapping, and the
//! external namespace predicates used by classification.

/// Strip the in-document pointer prefix from a `$ref` value, leaving the
/// bare dotted schema identifier.
pub fn trim_ref_prefix(reference: &str) -> &str {
    reference
        .strip_prefix("#/definitions/")
        .unwrap_or(reference)
}

/// Remove `suffix` from the end of `s`, if present.
pub fn trim_suffix<'a>(s: &'a str, suffix: &str) -> &'a str {
    s.strip_suffix(suffix).unwrap_or(s)
}

/// Derive the class-like alias for a schema identifier: the last dotted
/// segment, with non-alphanumeric separators removed and each remaining
/// part capitalized.
///
/// `io.k8s.api.core.v1.Pod` becomes `Pod`; a segment like `int-or-string`
/// would become `IntOrString`.
pub fn class_name(id: &str) -> String {
    let last = id.rsplit('.').next().unwrap_or(id);
    last.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(upper_first)
        .collect()
}

fn upper_first(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// Map a schema identifier to its generated module path. All generated
/// modules are siblings under `_schemas/`, which is what makes the
/// emitter's relative `./<ClassName>` imports resolve.
pub fn schema_path(id: &str) -> String {
    format!("_schemas/{}.ts", class_name(id))
}

/// Does this identifier belong to the apimachinery namespace?
pub fn is_api_machinery_id(id: &str) -> bool {
    id.starts_with("io.k8s.apimachinery.")
}

/// Does this identifier belong to the upstream Kubernetes namespace?
/// Note apimachinery ids also match; callers check the narrower
/// [`is_api_machinery_id`] first.
pub fn is_k8s_id(id: &str) -> bool {
    id.starts_with("io.k8s.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_ref_prefix() {
        assert_eq!(
            trim_ref_prefix("#/definitions/io.k8s.api.core.v1.Pod"),
            "io.k8s.api.core.v1.Pod"
        );
        assert_eq!(trim_ref_prefix("io.k8s.api.core.v1.Pod"), "io.k8s.api.core.v1.Pod");
    }

    #[test]
    fn test_trim_suffix() {
        assert_eq!(trim_suffix("_schemas/Pod.ts", ".ts"), "_schemas/Pod");
        assert_eq!(trim_suffix("_schemas/Pod", ".ts"), "_schemas/Pod");
    }

    #[test]
    fn test_class_name_takes_last_segment() {
        assert_eq!(class_name("io.k8s.api.core.v1.Pod"), "Pod");
        assert_eq!(class_name("a.C"), "C");
        assert_eq!(
            class_name("io.k8s.apiextensions-apiserver.pkg.apis.apiextensions.v1.JSON"),
            "JSON"
        );
    }

    #[test]
    fn test_class_name_sanitizes_separators() {
        assert_eq!(class_name("pkg.util.int-or-string"), "IntOrString");
        assert_eq!(class_name("v1.deployment_spec"), "DeploymentSpec");
    }

    #[test]
    fn test_schema_path() {
        assert_eq!(schema_path("io.k8s.api.core.v1.Pod"), "_schemas/Pod.ts");
        assert_eq!(schema_path("a.B"), "_schemas/B.ts");
    }

    #[test]
    fn test_namespace_predicates() {
        assert!(is_api_machinery_id("io.k8s.apimachinery.pkg.apis.meta.v1.ObjectMeta"));
        assert!(!is_api_machinery_id("io.k8s.api.core.v1.Pod"));
        assert!(is_k8s_id("io.k8s.api.core.v1.Pod"));
        assert!(is_k8s_id("io.k8s.apimachinery.pkg.apis.meta.v1.ObjectMeta"));
        assert!(!is_k8s_id("dev.example.v1.Widget"));
    }
}
