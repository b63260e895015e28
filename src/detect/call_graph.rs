//! Directory-wide lexical call graph.
//!
//! Edges come straight from call expressions; callees are names, not
//! resolved declarations, so two functions sharing a name anywhere in the
//! project collapse into one node. That is the intended simplification —
//! full resolution would need the scope semantics this engine excludes.

use crate::facts::FileFacts;

use super::{CallGraph, CallGraphEdge};

/// Merge per-file call edges into one adjacency mapping.
pub fn build(files: &[FileFacts]) -> CallGraph {
    let mut graph = CallGraph::new();

    for facts in files {
        for call in &facts.calls {
            // Module-level calls have no caller node.
            let Some(caller) = &call.caller else { continue };
            graph
                .entry(caller.clone())
                .or_insert_with(Vec::new)
                .push(CallGraphEdge {
                    caller: caller.clone(),
                    callee: call.callee.clone(),
                    file: facts.path.clone(),
                    line: call.line,
                });
        }
    }

    for edges in graph.values_mut() {
        edges.sort_by(|a, b| (&a.file, a.line, &a.callee).cmp(&(&b.file, b.line, &b.callee)));
    }
    graph
}

/// Total edge count across the graph.
pub fn edge_count(graph: &CallGraph) -> usize {
    graph.values().map(|v| v.len()).sum()
}
