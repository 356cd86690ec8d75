//! Validation errors for registry construction and choice recording.
//!
//! All three variants are raised synchronously at the offending call and
//! are local to it: a rejected `record` never corrupts slots that were
//! accepted earlier. Nothing here is transient, so nothing is retried.

use crate::choice::Category;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// No valid actor names survived trimming. Fatal to the run — callers
    /// must not proceed to choice collection.
    #[error("no valid actors after trimming input")]
    EmptyRegistry,

    /// A choice rank fell outside its category's bound.
    #[error("rank {rank} out of range for {category} choices (max {max})")]
    InvalidRank {
        category: Category,
        rank: u8,
        max: u8,
    },

    /// A referenced actor (source or target) is not in the registry.
    #[error("unknown actor: {0}")]
    UnknownActor(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offender() {
        let err = CoreError::UnknownActor("Zoe".to_string());
        assert_eq!(err.to_string(), "unknown actor: Zoe");

        let err = CoreError::InvalidRank {
            category: Category::Internal,
            rank: 4,
            max: 3,
        };
        assert_eq!(
            err.to_string(),
            "rank 4 out of range for internal choices (max 3)"
        );
    }
}
