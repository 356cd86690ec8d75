//! Edge compilation from a recorded choice set.
//!
//! # Overview
//!
//! Turns the sparse slot map of a [`ChoiceSet`] into a flat, ordered
//! sequence of directed, typed edges — the form the persistence and graph
//! layers consume.
//!
//! ## Pass Order
//!
//! Two passes over the registry: every internal choice first, then every
//! general choice, each pass in registry-insertion actor order and
//! ascending rank. Internal ties lead the sequence so summaries that
//! prioritize in-group relations can take a prefix; the graph layer
//! itself treats all edges uniformly.
//!
//! ## Skips
//!
//! Slots with no target, and self-choices (target = actor), emit nothing.
//! Neither is an error — "no choice" and self-selection are both valid
//! user states. Duplicate (actor, category, target) pairs arising from
//! different ranks are kept; the graph build collapses them later.
//!
//! ## Cache Invalidation
//!
//! [`edge_hash`] is a BLAKE3 hash of the compiled sequence. Compare it
//! against a stored value to detect when downstream artifacts (graph,
//! analytics, exports) need recomputing.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::choice::{Category, ChoiceSet};
use crate::registry::ActorRegistry;

/// A directed, typed relation from a choosing actor to a chosen target.
///
/// Serializes as the flat `(source, target, choice_type)` triple the
/// persistence collaborator stores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
    #[serde(rename = "choice_type")]
    pub category: Category,
}

/// Compile a choice set into the flat edge sequence.
///
/// Deterministic: identical choice-set content always yields the identical
/// sequence, order included. Never fails — invalid slots cannot exist in a
/// [`ChoiceSet`] (validation happens at `record` time).
#[must_use]
#[instrument(skip_all, fields(actors = registry.len(), slots = choices.len()))]
pub fn compile(registry: &ActorRegistry, choices: &ChoiceSet) -> Vec<Edge> {
    let mut edges = Vec::new();

    for category in Category::ALL {
        for (actor_pos, actor) in registry.actors().iter().enumerate() {
            for rank in 1..=category.max_rank() {
                let Some(target) = choices.get(actor_pos, category, rank) else {
                    continue;
                };
                if target == actor {
                    continue;
                }
                edges.push(Edge {
                    source: actor.clone(),
                    target: target.to_string(),
                    category,
                });
            }
        }
    }

    edges
}

/// BLAKE3 hash of an edge sequence, for cache invalidation.
///
/// Sensitive to order, endpoints, and category: any change to the compiled
/// sequence changes the hash.
#[must_use]
pub fn edge_hash(edges: &[Edge]) -> String {
    let mut hasher = blake3::Hasher::new();
    for edge in edges {
        hasher.update(edge.source.as_bytes());
        hasher.update(b"\x00");
        hasher.update(edge.target.as_bytes());
        hasher.update(b"\x00");
        hasher.update(edge.category.as_str().as_bytes());
        hasher.update(b"\x00");
    }
    format!("blake3:{}", hasher.finalize())
}
