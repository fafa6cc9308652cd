//! Shape collection for data-type reference pages
//!
//! Walks the shape graph from a set of roots and returns every reachable
//! non-scalar shape, deduplicated by name and sorted by name.
//!
//! The walk is an explicit work-list so arbitrarily deep models cannot
//! overflow the stack. A child whose name matches one of the ancestors of
//! the shape being expanded is pruned, which is what stops cycles.
//!
//! When every shape name in the graph is unique, each shape instance is
//! expanded at most once: a second expansion can only re-emit names the
//! first one already produced. With repeated names that no longer holds
//! (a pruned child may be a different shape than the ancestor it matched),
//! so every path is walked in full.
//!
//! Deduplication compares names, not identity. Two distinct shapes that
//! share a name collapse into whichever the pre-order walk reaches first.

use botodocs_common::{ShapeGraph, ShapeId};
use std::collections::{HashMap, HashSet};

/// Collect every shape reachable from `roots`, excluding primitives and
/// blobs, deduplicated by name and sorted by name.
pub fn find_all_shapes(graph: &ShapeGraph, roots: &[ShapeId]) -> Vec<ShapeId> {
    let emitted = walk(graph, roots);
    let mut shapes = dedup_by_name(graph, emitted);
    shapes.sort_by(|a, b| graph.get(*a).name.cmp(&graph.get(*b).name));
    shapes
}

/// Pre-order walk returning every emitted shape, duplicates included
fn walk(graph: &ShapeGraph, roots: &[ShapeId]) -> Vec<ShapeId> {
    let mut emitted = Vec::new();
    let memoize = names_are_unique(graph);
    let mut expanded = HashSet::new();

    // Ancestors of the node being visited, plus a name count for O(1) checks
    let mut path: Vec<ShapeId> = Vec::new();
    let mut on_path: HashMap<&str, usize> = HashMap::new();

    // (shape, number of ancestors)
    let mut stack: Vec<(ShapeId, usize)> = roots.iter().rev().map(|id| (*id, 0)).collect();

    while let Some((id, depth)) = stack.pop() {
        while path.len() > depth {
            if let Some(popped) = path.pop() {
                let name = graph.get(popped).name.as_str();
                if let Some(count) = on_path.get_mut(name) {
                    *count -= 1;
                    if *count == 0 {
                        on_path.remove(name);
                    }
                }
            }
        }

        let shape = graph.get(id);
        if shape.kind.is_scalar() {
            continue;
        }
        emitted.push(id);
        if memoize && !expanded.insert(id) {
            continue;
        }

        // Children are checked against the ancestors only, not this shape
        let children = shape.kind.children();
        for child in children.into_iter().rev() {
            if !on_path.contains_key(graph.get(child).name.as_str()) {
                stack.push((child, depth + 1));
            }
        }

        path.push(id);
        *on_path.entry(shape.name.as_str()).or_insert(0) += 1;
    }

    emitted
}

fn names_are_unique(graph: &ShapeGraph) -> bool {
    let mut seen = HashSet::new();
    graph.ids().all(|id| seen.insert(graph.get(id).name.as_str()))
}

/// Keep the first shape of each name, preserving order
fn dedup_by_name(graph: &ShapeGraph, shapes: Vec<ShapeId>) -> Vec<ShapeId> {
    let mut seen = HashSet::new();
    shapes
        .into_iter()
        .filter(|id| seen.insert(graph.get(*id).name.as_str()))
        .collect()
}
