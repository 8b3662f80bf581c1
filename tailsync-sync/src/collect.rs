//! Transitive dependency collection.

use std::collections::{HashSet, VecDeque};

use tailsync_core::ProjectGraph;

/// All project names reachable from `origin` by following outgoing edges, at
/// any depth, excluding `origin` itself.
///
/// Breadth-first worklist with a fresh visited set per call; cycles terminate
/// in O(V+E) and a dependency reached through multiple paths is recorded
/// once. The origin stays excluded even when a cycle leads back to it. No
/// ordering guarantee — only the final set matters.
pub fn collect_dependencies(graph: &ProjectGraph, origin: &str) -> HashSet<String> {
    let mut visited: HashSet<&str> = HashSet::new();
    let mut queue: VecDeque<&str> = VecDeque::new();
    visited.insert(origin);
    queue.push_back(origin);

    let mut deps = HashSet::new();
    while let Some(current) = queue.pop_front() {
        for edge in graph.edges_from(current) {
            let target = edge.target.0.as_str();
            if visited.insert(target) {
                deps.insert(target.to_string());
                queue.push_back(target);
            }
        }
    }
    deps
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
