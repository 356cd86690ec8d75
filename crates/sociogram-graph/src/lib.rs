#![forbid(unsafe_code)]
//! sociogram-graph library.
//!
//! # Overview
//!
//! Builds a petgraph-based directed graph from a compiled choice-edge
//! sequence and computes the structural measures of the sociometric
//! method over it: per-actor degree, isolates, and reciprocal pairs.
//!
//! ## Pipeline
//!
//! ```text
//! ActorRegistry + Vec<Edge>
//!        ↓  build::Sociogram::build()
//! Sociogram (DiGraph, multi-edges collapsed)
//!        ↓  analytics::{degree_table, isolates, reciprocal_pairs}
//! per-actor DegreeRecord, isolate list, mutual-pair list
//! ```
//!
//! Everything downstream of `build` is a pure, infallible derivation;
//! re-running it on an unchanged graph yields identical results.
//!
//! # Conventions
//!
//! - **Errors**: only name-based queries fail, with [`build::QueryError`].
//! - **Logging**: use `tracing` macros (`info!`, `warn!`, `debug!`, `trace!`).

pub mod analytics;
pub mod build;

pub use analytics::{DegreeRecord, degree_table, isolates, reciprocal_pairs};
pub use build::{QueryError, Sociogram};
