//! Degree, isolate, and reciprocity measures over a built sociogram.
//!
//! All three functions are pure and total: they never fail for a built
//! graph, and re-running them on an unchanged graph yields identical
//! results. Degrees count distinct neighbors — arc multiplicity was
//! already collapsed at build time.

use std::collections::HashMap;

use petgraph::Direction;
use petgraph::visit::IntoNodeIdentifiers;

use crate::build::Sociogram;

/// Per-actor degree counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DegreeRecord {
    /// Distinct actors that chose this one.
    pub in_degree: usize,
    /// Distinct actors this one chose.
    pub out_degree: usize,
}

impl DegreeRecord {
    /// Whether both degrees are zero.
    #[must_use]
    pub const fn is_isolated(self) -> bool {
        self.in_degree == 0 && self.out_degree == 0
    }
}

/// Compute in/out degree for every actor in the sociogram.
///
/// Every node appears in the result, zero-degree actors included.
#[must_use]
pub fn degree_table(sociogram: &Sociogram) -> HashMap<String, DegreeRecord> {
    let graph = sociogram.inner();
    let mut table = HashMap::with_capacity(graph.node_count());

    for idx in graph.node_identifiers() {
        let record = DegreeRecord {
            in_degree: graph.neighbors_directed(idx, Direction::Incoming).count(),
            out_degree: graph.neighbors_directed(idx, Direction::Outgoing).count(),
        };
        table.insert(graph[idx].clone(), record);
    }

    table
}

/// Actors with no incoming and no outgoing arcs, in registry insertion
/// order (the graph's node order) for deterministic display.
#[must_use]
pub fn isolates(sociogram: &Sociogram) -> Vec<String> {
    let graph = sociogram.inner();
    let mut isolated = Vec::new();

    for idx in graph.node_identifiers() {
        let no_in = graph
            .neighbors_directed(idx, Direction::Incoming)
            .next()
            .is_none();
        let no_out = graph
            .neighbors_directed(idx, Direction::Outgoing)
            .next()
            .is_none();
        if no_in && no_out {
            isolated.push(graph[idx].clone());
        }
    }

    isolated
}

/// Unordered pairs of actors who each chose the other.
///
/// Each pair is reported exactly once, canonical form `(smaller, larger)`
/// by lexicographic name order, and the list itself is sorted the same
/// way. The scan only emits a pair when iterating its lexicographically
/// smaller member, which is what prevents double-reporting.
#[must_use]
pub fn reciprocal_pairs(sociogram: &Sociogram) -> Vec<(String, String)> {
    let graph = sociogram.inner();
    let mut pairs = Vec::new();

    for edge in graph.edge_indices() {
        let Some((u, v)) = graph.edge_endpoints(edge) else {
            continue;
        };
        let (u_name, v_name) = (&graph[u], &graph[v]);
        if u_name < v_name && graph.contains_edge(v, u) {
            pairs.push((u_name.clone(), v_name.clone()));
        }
    }

    pairs.sort_unstable();
    pairs
}
