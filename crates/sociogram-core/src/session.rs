//! Study metadata and the flat session export payload.
//!
//! The engine does not define a file format; it exposes the compiled
//! edges plus caller-supplied metadata as one serializable payload and
//! leaves serialization target and location to the persistence
//! collaborator (the CLI, in this workspace).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::compile::Edge;

// ---------------------------------------------------------------------------
// GroupKind
// ---------------------------------------------------------------------------

/// Kind of group under study.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupKind {
    Residential,
    Occupational,
    Other,
}

impl GroupKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Residential => "residential",
            Self::Occupational => "occupational",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for GroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for GroupKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "residential" => Ok(Self::Residential),
            "occupational" => Ok(Self::Occupational),
            "other" => Ok(Self::Other),
            _ => Err(format!("unknown group kind: {s}")),
        }
    }
}

// ---------------------------------------------------------------------------
// StudyMeta
// ---------------------------------------------------------------------------

/// Caller-supplied metadata attached to an exported session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyMeta {
    pub study_name: String,
    pub group_kind: GroupKind,
    /// Collection date (no time component; sessions are single-sitting).
    pub collected_on: NaiveDate,
}

impl Default for StudyMeta {
    fn default() -> Self {
        Self {
            study_name: "untitled study".to_string(),
            group_kind: GroupKind::Other,
            collected_on: chrono::Local::now().date_naive(),
        }
    }
}

// ---------------------------------------------------------------------------
// SessionExport
// ---------------------------------------------------------------------------

/// The durable form of one session: metadata plus the compiled edge
/// triples, in compile order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionExport {
    pub meta: StudyMeta,
    pub choices: Vec<Edge>,
}

impl SessionExport {
    /// Assemble an export payload from metadata and compiled edges.
    #[must_use]
    pub fn new(meta: StudyMeta, edges: &[Edge]) -> Self {
        Self {
            meta,
            choices: edges.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::choice::Category;

    #[test]
    fn export_serializes_flat_triples() {
        let meta = StudyMeta {
            study_name: "pilot".to_string(),
            group_kind: GroupKind::Residential,
            collected_on: NaiveDate::from_ymd_opt(2026, 8, 25).expect("valid date"),
        };
        let edges = vec![Edge {
            source: "Alice".to_string(),
            target: "Beatriz".to_string(),
            category: Category::Internal,
        }];

        let json = serde_json::to_value(SessionExport::new(meta, &edges)).expect("serialize");
        assert_eq!(json["meta"]["study_name"], "pilot");
        assert_eq!(json["meta"]["group_kind"], "residential");
        assert_eq!(json["meta"]["collected_on"], "2026-08-25");
        assert_eq!(json["choices"][0]["source"], "Alice");
        assert_eq!(json["choices"][0]["target"], "Beatriz");
        assert_eq!(json["choices"][0]["choice_type"], "internal");
    }

    #[test]
    fn group_kind_round_trips_through_str() {
        for kind in [
            GroupKind::Residential,
            GroupKind::Occupational,
            GroupKind::Other,
        ] {
            assert_eq!(kind.as_str().parse::<GroupKind>(), Ok(kind));
        }
        assert!("laboral".parse::<GroupKind>().is_err());
    }
}
