//! Graph construction from a registry and a compiled edge sequence.
//!
//! # Overview
//!
//! Every registered actor becomes a node, zero-degree actors included, in
//! registry insertion order. Each compiled edge adds one arc from chooser
//! to chosen; arcs with identical endpoints collapse to a single arc, so
//! multiplicity from repeated ranks or from both categories is not
//! visible to the analytics layer. The collapse is a deliberate step
//! here, not an artifact of the backing structure (petgraph would happily
//! keep parallel edges).
//!
//! ## Edge Direction
//!
//! An arc `A → B` means "A chose B". In-degree therefore reads as
//! received choices (influence), out-degree as expressed choices.

#![allow(clippy::module_name_repetitions)]

use std::collections::HashMap;

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use sociogram_core::{ActorRegistry, Edge};
use tracing::instrument;

/// Failure of a name-based graph query or build input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// The named actor is not a node of this sociogram.
    #[error("unknown actor: {0}")]
    UnknownActor(String),
}

/// The directed sociogram for one session.
///
/// Nodes are actor names; an arc `A → B` means A chose B in at least one
/// category at some rank. Queries are read-only; the graph is rebuilt
/// from scratch whenever the choice set changes.
#[derive(Debug)]
pub struct Sociogram {
    /// Directed graph: nodes = actor names, arcs = unique choices.
    graph: DiGraph<String, ()>,
    /// Actor name → petgraph `NodeIndex`.
    node_map: HashMap<String, NodeIndex>,
}

impl Sociogram {
    /// Build a sociogram from the registry and a compiled edge sequence.
    ///
    /// Nodes follow registry insertion order. Parallel arcs collapse.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::UnknownActor`] if an edge endpoint is not a
    /// registered actor. Edges produced by `sociogram_core::compile`
    /// always pass, since choice targets are validated at record time.
    #[instrument(skip_all, fields(actors = registry.len(), edges = edges.len()))]
    pub fn build(registry: &ActorRegistry, edges: &[Edge]) -> Result<Self, QueryError> {
        let mut graph = DiGraph::<String, ()>::new();
        let mut node_map: HashMap<String, NodeIndex> = HashMap::with_capacity(registry.len());

        for name in registry.actors() {
            let idx = graph.add_node(name.clone());
            node_map.insert(name.clone(), idx);
        }

        for edge in edges {
            let source = *node_map
                .get(&edge.source)
                .ok_or_else(|| QueryError::UnknownActor(edge.source.clone()))?;
            let target = *node_map
                .get(&edge.target)
                .ok_or_else(|| QueryError::UnknownActor(edge.target.clone()))?;

            if !graph.contains_edge(source, target) {
                graph.add_edge(source, target, ());
            }
        }

        Ok(Self { graph, node_map })
    }

    /// Actor names in registry insertion order.
    #[must_use]
    pub fn nodes(&self) -> Vec<&str> {
        self.graph.node_weights().map(String::as_str).collect()
    }

    /// All arcs as `(source, target)` name pairs.
    #[must_use]
    pub fn arcs(&self) -> Vec<(&str, &str)> {
        self.graph
            .edge_indices()
            .filter_map(|e| self.graph.edge_endpoints(e))
            .map(|(u, v)| (self.graph[u].as_str(), self.graph[v].as_str()))
            .collect()
    }

    /// Number of nodes (actors).
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of unique arcs.
    #[must_use]
    pub fn arc_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Whether an arc `u → v` exists.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::UnknownActor`] if either name is unregistered.
    pub fn has_arc(&self, u: &str, v: &str) -> Result<bool, QueryError> {
        let u = self.index_of(u)?;
        let v = self.index_of(v)?;
        Ok(self.graph.contains_edge(u, v))
    }

    /// Actors `actor` has an arc to, sorted by name.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::UnknownActor`] for an unregistered name.
    pub fn out_neighbors(&self, actor: &str) -> Result<Vec<&str>, QueryError> {
        self.neighbors(actor, Direction::Outgoing)
    }

    /// Actors with an arc into `actor`, sorted by name.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::UnknownActor`] for an unregistered name.
    pub fn in_neighbors(&self, actor: &str) -> Result<Vec<&str>, QueryError> {
        self.neighbors(actor, Direction::Incoming)
    }

    pub(crate) fn inner(&self) -> &DiGraph<String, ()> {
        &self.graph
    }

    fn index_of(&self, name: &str) -> Result<NodeIndex, QueryError> {
        self.node_map
            .get(name)
            .copied()
            .ok_or_else(|| QueryError::UnknownActor(name.to_string()))
    }

    fn neighbors(&self, actor: &str, dir: Direction) -> Result<Vec<&str>, QueryError> {
        let idx = self.index_of(actor)?;
        let mut names: Vec<&str> = self
            .graph
            .neighbors_directed(idx, dir)
            .map(|n| self.graph[n].as_str())
            .collect();
        names.sort_unstable();
        Ok(names)
    }
}
