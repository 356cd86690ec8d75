#![forbid(unsafe_code)]
//! sociogram-core library.
//!
//! Collects ranked interpersonal choices from a fixed set of actors and
//! compiles them into a flat sequence of directed, typed edges. The graph
//! itself lives in `sociogram-graph`; this crate is pure data.
//!
//! ## Pipeline
//!
//! ```text
//! raw names ──ActorRegistry::from_names()──▶ ActorRegistry
//! (actor, category, rank, target) ──ChoiceSet::record()──▶ ChoiceSet
//!        ↓  compile()
//! Vec<Edge>  (internal pass first, then general; actor-then-rank order)
//! ```
//!
//! # Conventions
//!
//! - **Errors**: validation failures are [`error::CoreError`]; derivation
//!   steps (`compile`, export assembly) never fail on valid input.
//! - **Logging**: use `tracing` macros (`info!`, `warn!`, `debug!`, `trace!`).

pub mod choice;
pub mod compile;
pub mod error;
pub mod registry;
pub mod session;

pub use choice::{Category, ChoiceSet};
pub use compile::{Edge, compile, edge_hash};
pub use error::CoreError;
pub use registry::ActorRegistry;
pub use session::{GroupKind, SessionExport, StudyMeta};
