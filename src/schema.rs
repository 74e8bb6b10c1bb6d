//! Schema types and structures
//!
//! The in-memory model for one node of a JSON-Schema-like tree, plus the
//! records flowing through the generation pipeline: `Definition` in,
//! `OutputFile` out.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A `$ref` value as it appears in an OpenAPI definition.
///
/// A string is a cross-schema pointer by identifier. Some definitions carry
/// a full inline schema under `$ref` instead; those are not pointers and
/// never contribute a dependency. Anything else is a shape violation and
/// fails at the serde boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RefValue {
    /// Pointer to another schema, by identifier.
    Pointer(String),
    /// Inline sub-schema masquerading as a `$ref`.
    Inline(Box<Schema>),
}

impl RefValue {
    /// The pointer target, if this is a cross-schema pointer.
    pub fn as_pointer(&self) -> Option<&str> {
        match self {
            RefValue::Pointer(target) => Some(target),
            RefValue::Inline(_) => None,
        }
    }
}

/// One node of a schema tree.
///
/// Structural positions (`properties`, `items`, `additionalProperties`,
/// `allOf`/`oneOf`/`anyOf`, `not`) are typed so traversal can recurse into
/// them; everything else is opaque payload carried through unchanged in
/// `extra`. Field order matches the upstream OpenAPI definitions so that
/// serialization is stable across runs.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Schema {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Value>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<Value>,

    /// Element schema, for array schemas.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,

    /// Pointer to another schema. Never dereferenced here, only rewritten.
    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<RefValue>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, Schema>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Value>,

    #[serde(rename = "additionalProperties", skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<Box<Schema>>,

    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_: Option<Value>,

    #[serde(rename = "const", skip_serializing_if = "Option::is_none")]
    pub const_: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub not: Option<Box<Schema>>,

    #[serde(rename = "oneOf", skip_serializing_if = "Option::is_none")]
    pub one_of: Option<Vec<Schema>>,

    #[serde(rename = "anyOf", skip_serializing_if = "Option::is_none")]
    pub any_of: Option<Vec<Schema>>,

    #[serde(rename = "allOf", skip_serializing_if = "Option::is_none")]
    pub all_of: Option<Vec<Schema>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub nullable: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<Value>,

    /// Any remaining keys, copied through untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

/// Group/version/kind triple identifying one API resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupVersionKind {
    pub group: String,
    pub kind: String,
    pub version: String,
}

/// One unit of generation: a globally-unique dotted schema identifier and
/// its schema tree, extracted upstream from the OpenAPI document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Definition {
    #[serde(rename = "schemaId")]
    pub schema_id: String,
    pub schema: Schema,
    /// Resource identities this schema represents, when it is a top-level kind.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gvk: Option<Vec<GroupVersionKind>>,
}

/// A generated source module: module path plus full file content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputFile {
    pub path: String,
    pub content: String,
}
