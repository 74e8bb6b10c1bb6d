//! Module Emission
//!
//! Turns each `Definition` into one generated TypeScript module containing
//! a serialized, reference-rewritten copy of its schema and an
//! `addSchema()` routine that registers the schema and its dependencies
//! with the runtime validator registry.
//!
//! Generated module shape:
//!
//! ```text
//! import { register } from "@kubernetes-models/validate";
//! import { addSchema as PodSpec } from "./PodSpec";
//!
//! const schema: object = { ... };
//!
//! export function addSchema() {
//! PodSpec();
//! register("io.k8s.api.core.v1.Pod", schema);
//! }
//! ```

use std::collections::HashSet;

use serde_json::{json, Value};
use tracing::debug;

use crate::classify::classify_ref;
use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::imports::{generate_imports, Import};
use crate::names::{class_name, schema_path, trim_ref_prefix};
use crate::schema::{Definition, OutputFile, RefValue, Schema};
use crate::walk::{collect_refs, transform, Rewrite};

/// Fixed schema bodies for identifiers whose real shape cannot be derived
/// from the OpenAPI document. `IntOrString` is a dynamically-typed union;
/// the two `JSON` identities admit any value, so their schema is
/// deliberately empty.
fn special_schema(schema_id: &str) -> Option<Value> {
    match schema_id {
        "io.k8s.apimachinery.pkg.util.intstr.IntOrString" => Some(json!({
            "oneOf": [{ "type": "string" }, { "type": "integer", "format": "int32" }]
        })),
        "io.k8s.apiextensions-apiserver.pkg.apis.apiextensions.v1beta1.JSON"
        | "io.k8s.apiextensions-apiserver.pkg.apis.apiextensions.v1.JSON" => Some(json!({})),
        _ => None,
    }
}

/// Rewrite a `$ref` pointer to its local-module form plus the in-document
/// anchor the validator resolves against, e.g. `a.C` becomes `./C#`.
/// Inline `$ref` sub-schemas pass through untouched.
fn replace_ref(mut node: Schema) -> Schema {
    if let Some(RefValue::Pointer(target)) = &node.reference {
        let local = format!("./{}#", class_name(trim_ref_prefix(target)));
        node.reference = Some(RefValue::Pointer(local));
    }
    node
}

/// Serialize the schema body for one definition: either a special-cased
/// fixed literal, or the reference-rewritten schema tree. Pretty-printed
/// with two-space indentation.
fn compile_schema(def: &Definition) -> Result<String> {
    if let Some(fixed) = special_schema(&def.schema_id) {
        return Ok(serde_json::to_string_pretty(&fixed)?);
    }

    let mut replace = replace_ref;
    let mut rewrites: [Rewrite<'_>; 1] = [&mut replace];
    let rewritten = transform(&def.schema, &mut rewrites);
    Ok(serde_json::to_string_pretty(&rewritten)?)
}

/// Dependencies of one definition: distinct normalized reference
/// identifiers in first-occurrence order, with self-references dropped.
fn dependencies(def: &Definition) -> Vec<String> {
    let mut seen = HashSet::new();
    collect_refs(&def.schema)
        .iter()
        .map(|reference| trim_ref_prefix(reference).to_string())
        .filter(|id| id != &def.schema_id)
        .filter(|id| seen.insert(id.clone()))
        .collect()
}

fn generate_definition(config: &GeneratorConfig, def: &Definition) -> Result<OutputFile> {
    let refs = dependencies(def);
    debug!(schema_id = %def.schema_id, refs = refs.len(), "compiling schema module");

    let mut imports = vec![Import::new("register", "@kubernetes-models/validate")];
    let mut add_schema_body = String::new();

    for reference in &refs {
        let resolved = classify_ref(config, reference);
        add_schema_body.push_str(&format!("{}();\n", resolved.alias));
        imports.push(Import::aliased("addSchema", resolved.alias, resolved.path));
    }

    let content = format!(
        "{imports}\n\nconst schema: object = {schema};\n\n\
         export function addSchema() {{\n{body}register({id}, schema);\n}}\n",
        imports = generate_imports(&imports),
        schema = compile_schema(def)?,
        body = add_schema_body,
        id = serde_json::to_string(&def.schema_id)?,
    );

    Ok(OutputFile {
        path: schema_path(&def.schema_id),
        content,
    })
}

/// Run the full pipeline: one generated module per definition, in input
/// order. Definitions are independent; a failure on any one aborts the run.
pub fn generate(config: &GeneratorConfig, definitions: &[Definition]) -> Result<Vec<OutputFile>> {
    debug!(count = definitions.len(), "generating schema modules");
    definitions
        .iter()
        .map(|def| generate_definition(config, def))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn definition(schema_id: &str, schema: Value) -> Definition {
        Definition {
            schema_id: schema_id.to_string(),
            schema: serde_json::from_value(schema).unwrap(),
            gvk: None,
        }
    }

    #[test]
    fn test_int_or_string_body_ignores_input_schema() {
        let def = definition(
            "io.k8s.apimachinery.pkg.util.intstr.IntOrString",
            json!({ "type": "object", "properties": { "bogus": { "type": "string" } } }),
        );
        let body: Value = serde_json::from_str(&compile_schema(&def).unwrap()).unwrap();
        assert_eq!(
            body,
            json!({ "oneOf": [{ "type": "string" }, { "type": "integer", "format": "int32" }] })
        );
    }

    #[test]
    fn test_json_identities_emit_empty_schema() {
        for id in [
            "io.k8s.apiextensions-apiserver.pkg.apis.apiextensions.v1beta1.JSON",
            "io.k8s.apiextensions-apiserver.pkg.apis.apiextensions.v1.JSON",
        ] {
            let def = definition(id, json!({ "type": "object" }));
            assert_eq!(compile_schema(&def).unwrap(), "{}");
        }
    }

    #[test]
    fn test_replace_ref_rewrites_pointer_only() {
        let node: Schema = serde_json::from_value(json!({ "$ref": "#/definitions/a.C" })).unwrap();
        let out = replace_ref(node);
        assert_eq!(out.reference.unwrap().as_pointer(), Some("./C#"));

        let inline: Schema =
            serde_json::from_value(json!({ "$ref": { "type": "string" } })).unwrap();
        let out = replace_ref(inline.clone());
        assert_eq!(out, inline);
    }

    #[test]
    fn test_dependencies_drop_self_reference() {
        let def = definition(
            "a.B",
            json!({ "properties": {
                "me": { "$ref": "a.B" },
                "other": { "$ref": "#/definitions/a.C" }
            } }),
        );
        assert_eq!(dependencies(&def), vec!["a.C"]);
    }

    #[test]
    fn test_dependencies_dedupe_after_normalization() {
        // Two raw spellings of the same identifier collapse to one entry.
        let def = definition(
            "a.B",
            json!({ "properties": {
                "x": { "$ref": "#/definitions/a.C" },
                "y": { "$ref": "a.C" }
            } }),
        );
        assert_eq!(dependencies(&def), vec!["a.C"]);
    }
}
