//! Ranked choice categories and the per-session choice set.
//!
//! Each actor fills up to two ranked preference lists: `internal` (up to
//! 3 choices inside the current group) and `general` (up to 5, order of
//! preference). A slot is `(actor, category, rank)`; re-recording a slot
//! overwrites it, which models a form re-submission. Gaps are allowed —
//! a value at rank 3 with nothing at rank 2 is fine and the empty rank
//! simply contributes no edge.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::registry::ActorRegistry;

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Choice category with its rank bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Up to 3 choices inside the current group.
    Internal,
    /// Up to 5 choices, order of preference.
    General,
}

impl Category {
    /// Maximum 1-based rank for this category.
    #[must_use]
    pub const fn max_rank(self) -> u8 {
        match self {
            Self::Internal => 3,
            Self::General => 5,
        }
    }

    /// Category name as a string slice.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Internal => "internal",
            Self::General => "general",
        }
    }

    /// Both categories in compile-pass order (internal first).
    pub const ALL: [Self; 2] = [Self::Internal, Self::General];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "internal" => Ok(Self::Internal),
            "general" => Ok(Self::General),
            _ => Err(format!("unknown choice category: {s}")),
        }
    }
}

// ---------------------------------------------------------------------------
// ChoiceSet
// ---------------------------------------------------------------------------

/// All recorded choice slots for one session.
///
/// One instance per session, owned by the caller and passed explicitly
/// into [`crate::compile`] — there is no ambient shared state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChoiceSet {
    /// (actor position, category, rank) → target name. Absent key means
    /// "no choice at this rank".
    slots: HashMap<(usize, Category, u8), String>,
}

impl ChoiceSet {
    /// Create an empty choice set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record (or clear) the choice at one slot. Last write wins.
    ///
    /// `target = None` or a target that trims to empty clears the slot.
    /// A rejected call leaves every previously accepted slot untouched.
    ///
    /// # Errors
    ///
    /// - [`CoreError::UnknownActor`] if `actor`, or a non-empty `target`,
    ///   is not registered.
    /// - [`CoreError::InvalidRank`] if `rank` is outside
    ///   `1..=category.max_rank()`.
    pub fn record(
        &mut self,
        registry: &ActorRegistry,
        actor: &str,
        category: Category,
        rank: u8,
        target: Option<&str>,
    ) -> Result<(), CoreError> {
        let Some(actor_pos) = registry.position(actor) else {
            return Err(CoreError::UnknownActor(actor.to_string()));
        };

        if !(1..=category.max_rank()).contains(&rank) {
            return Err(CoreError::InvalidRank {
                category,
                rank,
                max: category.max_rank(),
            });
        }

        let target = target.map(str::trim).filter(|t| !t.is_empty());
        match target {
            Some(name) => {
                if !registry.contains(name) {
                    return Err(CoreError::UnknownActor(name.to_string()));
                }
                self.slots
                    .insert((actor_pos, category, rank), name.to_string());
            }
            None => {
                self.slots.remove(&(actor_pos, category, rank));
            }
        }
        Ok(())
    }

    /// The target recorded at a slot, if any.
    #[must_use]
    pub fn get(&self, actor_pos: usize, category: Category, rank: u8) -> Option<&str> {
        self.slots
            .get(&(actor_pos, category, rank))
            .map(String::as_str)
    }

    /// Number of filled slots across all actors and categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no slot is filled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> ActorRegistry {
        ActorRegistry::from_names(["Alice", "Beatriz", "Carla"]).expect("registry")
    }

    #[test]
    fn category_bounds() {
        assert_eq!(Category::Internal.max_rank(), 3);
        assert_eq!(Category::General.max_rank(), 5);
    }

    #[test]
    fn category_round_trips_through_str() {
        for cat in Category::ALL {
            assert_eq!(cat.as_str().parse::<Category>(), Ok(cat));
        }
        assert!("mutual".parse::<Category>().is_err());
    }

    #[test]
    fn record_stores_and_overwrites() {
        let reg = registry();
        let mut set = ChoiceSet::new();
        set.record(&reg, "Alice", Category::General, 1, Some("Beatriz"))
            .expect("record");
        assert_eq!(set.get(0, Category::General, 1), Some("Beatriz"));

        // Re-submission overwrites.
        set.record(&reg, "Alice", Category::General, 1, Some("Carla"))
            .expect("record");
        assert_eq!(set.get(0, Category::General, 1), Some("Carla"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn empty_target_clears_the_slot() {
        let reg = registry();
        let mut set = ChoiceSet::new();
        set.record(&reg, "Alice", Category::Internal, 2, Some("Carla"))
            .expect("record");
        set.record(&reg, "Alice", Category::Internal, 2, Some("  "))
            .expect("clear via blank");
        assert!(set.is_empty());

        set.record(&reg, "Alice", Category::Internal, 2, None)
            .expect("clear via None");
        assert!(set.is_empty());
    }

    #[test]
    fn rank_out_of_bounds_is_rejected() {
        let reg = registry();
        let mut set = ChoiceSet::new();
        let err = set
            .record(&reg, "Alice", Category::Internal, 4, Some("Beatriz"))
            .unwrap_err();
        assert_eq!(
            err,
            CoreError::InvalidRank {
                category: Category::Internal,
                rank: 4,
                max: 3
            }
        );
        let err = set
            .record(&reg, "Alice", Category::General, 0, Some("Beatriz"))
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidRank { rank: 0, .. }));
    }

    #[test]
    fn unknown_actor_or_target_is_rejected_without_side_effects() {
        let reg = registry();
        let mut set = ChoiceSet::new();
        set.record(&reg, "Alice", Category::General, 1, Some("Beatriz"))
            .expect("record");

        let err = set
            .record(&reg, "Zoe", Category::General, 1, Some("Alice"))
            .unwrap_err();
        assert_eq!(err, CoreError::UnknownActor("Zoe".to_string()));

        let err = set
            .record(&reg, "Alice", Category::General, 2, Some("Zoe"))
            .unwrap_err();
        assert_eq!(err, CoreError::UnknownActor("Zoe".to_string()));

        // Accepted state is untouched.
        assert_eq!(set.len(), 1);
        assert_eq!(set.get(0, Category::General, 1), Some("Beatriz"));
    }

    #[test]
    fn gaps_between_ranks_are_allowed() {
        let reg = registry();
        let mut set = ChoiceSet::new();
        set.record(&reg, "Alice", Category::General, 3, Some("Carla"))
            .expect("rank 3 with empty rank 1 and 2");
        assert_eq!(set.get(0, Category::General, 1), None);
        assert_eq!(set.get(0, Category::General, 3), Some("Carla"));
    }
}
