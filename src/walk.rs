//! Schema Tree Traversal
//!
//! One recursive-descent core shared by reference collection and schema
//! rewriting. Both sides must see exactly the same structural positions:
//! `properties` values, `items`, `additionalProperties`, then the
//! composition keywords `allOf`, `oneOf`, `anyOf` and `not`, in that order.
//!
//! `$ref` pointers are leaves. The walker observes the pointer string but
//! never follows it, so cyclic reference graphs terminate trivially.
//! Inline `$ref` sub-schemas are not structural positions and are not
//! descended into.

use std::collections::HashSet;

use crate::schema::{RefValue, Schema};

/// A per-node rewrite: consumes a node, returns its replacement.
pub type Rewrite<'a> = &'a mut dyn FnMut(Schema) -> Schema;

/// Pure fold over a schema tree.
///
/// Visits the node itself, then every structural child in the fixed order
/// above. The accumulator threads through the whole traversal; no state
/// lives outside it.
pub fn fold<'a, T, F>(schema: &'a Schema, acc: T, f: &mut F) -> T
where
    F: FnMut(T, &'a Schema) -> T,
{
    let mut acc = f(acc, schema);

    if let Some(properties) = &schema.properties {
        for child in properties.values() {
            acc = fold(child, acc, f);
        }
    }
    if let Some(items) = &schema.items {
        acc = fold(items, acc, f);
    }
    if let Some(additional) = &schema.additional_properties {
        acc = fold(additional, acc, f);
    }
    for list in [&schema.all_of, &schema.one_of, &schema.any_of]
        .into_iter()
        .flatten()
    {
        for child in list {
            acc = fold(child, acc, f);
        }
    }
    if let Some(not) = &schema.not {
        acc = fold(not, acc, f);
    }

    acc
}

/// Apply an ordered sequence of rewrites to every node of a schema tree,
/// returning a new tree. The input is never mutated.
///
/// Each node, root included, passes through every rewrite in order; later
/// rewrites see the previous rewrite's output for that node. Rewrites are
/// local: they receive one node and must not assume anything about its
/// position in the tree.
pub fn transform(schema: &Schema, rewrites: &mut [Rewrite<'_>]) -> Schema {
    transform_node(schema.clone(), rewrites)
}

fn transform_node(mut node: Schema, rewrites: &mut [Rewrite<'_>]) -> Schema {
    for rewrite in rewrites.iter_mut() {
        node = rewrite(node);
    }

    if let Some(properties) = node.properties.take() {
        node.properties = Some(
            properties
                .into_iter()
                .map(|(name, child)| (name, transform_node(child, rewrites)))
                .collect(),
        );
    }
    if let Some(items) = node.items.take() {
        node.items = Some(Box::new(transform_node(*items, rewrites)));
    }
    if let Some(additional) = node.additional_properties.take() {
        node.additional_properties = Some(Box::new(transform_node(*additional, rewrites)));
    }
    if let Some(list) = node.all_of.take() {
        node.all_of = Some(transform_list(list, rewrites));
    }
    if let Some(list) = node.one_of.take() {
        node.one_of = Some(transform_list(list, rewrites));
    }
    if let Some(list) = node.any_of.take() {
        node.any_of = Some(transform_list(list, rewrites));
    }
    if let Some(not) = node.not.take() {
        node.not = Some(Box::new(transform_node(*not, rewrites)));
    }

    node
}

fn transform_list(list: Vec<Schema>, rewrites: &mut [Rewrite<'_>]) -> Vec<Schema> {
    list.into_iter()
        .map(|child| transform_node(child, rewrites))
        .collect()
}

/// Collect every distinct `$ref` pointer reachable from a schema, in first
/// occurrence order. Inline `$ref` sub-schemas are skipped: they carry no
/// cross-schema dependency. Identifiers are returned raw; normalization is
/// the caller's concern.
pub fn collect_refs(schema: &Schema) -> Vec<String> {
    let (refs, _) = fold(
        schema,
        (Vec::new(), HashSet::new()),
        &mut |(mut refs, mut seen): (Vec<String>, HashSet<String>), node| {
            if let Some(RefValue::Pointer(target)) = &node.reference {
                if seen.insert(target.clone()) {
                    refs.push(target.clone());
                }
            }
            (refs, seen)
        },
    );
    refs
}
