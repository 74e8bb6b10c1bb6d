//! Import Rendering
//!
//! Emits the import block of a generated module. Imports are grouped by
//! destination module path in first-occurrence order, so output is
//! deterministic for a given import sequence.

use std::collections::HashMap;

/// A named symbol import with an optional local rename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    pub name: String,
    pub alias: Option<String>,
    pub path: String,
}

impl Import {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
            path: path.into(),
        }
    }

    pub fn aliased(
        name: impl Into<String>,
        alias: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            alias: Some(alias.into()),
            path: path.into(),
        }
    }

    fn binding(&self) -> String {
        match &self.alias {
            Some(alias) if alias != &self.name => format!("{} as {}", self.name, alias),
            _ => self.name.clone(),
        }
    }
}

/// Render one `import { ... } from "...";` line per distinct module path.
/// Identical bindings from the same path collapse to one entry.
pub fn generate_imports(imports: &[Import]) -> String {
    let mut order: Vec<&str> = Vec::new();
    let mut groups: HashMap<&str, Vec<String>> = HashMap::new();

    for import in imports {
        let bindings = groups.entry(import.path.as_str()).or_insert_with(|| {
            order.push(import.path.as_str());
            Vec::new()
        });
        let binding = import.binding();
        if !bindings.contains(&binding) {
            bindings.push(binding);
        }
    }

    order
        .iter()
        .map(|path| format!("import {{ {} }} from \"{}\";", groups[path].join(", "), path))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_and_aliased_bindings() {
        let imports = vec![
            Import::new("register", "@kubernetes-models/validate"),
            Import::aliased("addSchema", "PodSpec", "./PodSpec"),
        ];
        assert_eq!(
            generate_imports(&imports),
            "import { register } from \"@kubernetes-models/validate\";\n\
             import { addSchema as PodSpec } from \"./PodSpec\";"
        );
    }

    #[test]
    fn test_groups_by_path_in_first_occurrence_order() {
        let imports = vec![
            Import::aliased("addSchema", "A", "kubernetes-models/_schemas/A"),
            Import::new("register", "@kubernetes-models/validate"),
            Import::aliased("current", "validate", "@kubernetes-models/validate"),
        ];
        assert_eq!(
            generate_imports(&imports),
            "import { addSchema as A } from \"kubernetes-models/_schemas/A\";\n\
             import { register, current as validate } from \"@kubernetes-models/validate\";"
        );
    }

    #[test]
    fn test_redundant_alias_collapses() {
        let imports = vec![Import::aliased("register", "register", "@kubernetes-models/validate")];
        assert_eq!(
            generate_imports(&imports),
            "import { register } from \"@kubernetes-models/validate\";"
        );
    }

    #[test]
    fn test_duplicate_bindings_dedupe() {
        let imports = vec![
            Import::aliased("addSchema", "A", "./A"),
            Import::aliased("addSchema", "A", "./A"),
        ];
        assert_eq!(generate_imports(&imports), "import { addSchema as A } from \"./A\";");
    }

    #[test]
    fn test_empty_import_list() {
        assert_eq!(generate_imports(&[]), "");
    }
}
