//! TOML session file: the CLI's stand-in for the interactive form layer.
//!
//! Schema:
//!
//! ```toml
//! actors = ["Alice", "Beatriz", "Carla"]
//!
//! [meta]                      # optional
//! study = "pilot run"
//! group = "residential"       # residential | occupational | other
//! date = "2026-08-25"
//!
//! [internal]                  # optional, up to 3 per actor
//! Alice = ["Beatriz", "", "Carla"]   # index = rank, "" = no choice
//!
//! [general]                   # optional, up to 5 per actor
//! Beatriz = ["Alice"]
//! ```
//!
//! Loading replays every list entry through `ChoiceSet::record`, so the
//! core's validation rules apply unchanged: an over-long list is an
//! invalid rank, an unlisted name is an unknown actor.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context as _, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::debug;

use sociogram_core::{ActorRegistry, Category, ChoiceSet, GroupKind, StudyMeta};

#[derive(Debug, Deserialize)]
struct SessionFile {
    actors: Vec<String>,
    #[serde(default)]
    meta: MetaSection,
    #[serde(default)]
    internal: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    general: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
struct MetaSection {
    study: Option<String>,
    group: Option<String>,
    date: Option<String>,
}

/// A fully validated session, ready for compile/build/analytics.
#[derive(Debug)]
pub struct LoadedSession {
    pub meta: StudyMeta,
    pub registry: ActorRegistry,
    pub choices: ChoiceSet,
}

/// Load and validate a session file.
///
/// # Errors
///
/// Fails on unreadable files, TOML syntax errors, bad metadata values,
/// and any core validation error (empty roster, unknown actor or target,
/// rank beyond the category bound).
pub fn load(path: &Path) -> Result<LoadedSession> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read session file {}", path.display()))?;
    let file: SessionFile = toml::from_str(&text)
        .with_context(|| format!("failed to parse session file {}", path.display()))?;

    let meta = parse_meta(&file.meta)?;
    let registry = ActorRegistry::from_names(&file.actors)
        .context("session file has no valid actors")?;

    let mut choices = ChoiceSet::new();
    for (category, table) in [
        (Category::Internal, &file.internal),
        (Category::General, &file.general),
    ] {
        for (actor, targets) in table {
            for (i, target) in targets.iter().enumerate() {
                let rank = u8::try_from(i + 1).unwrap_or(u8::MAX);
                choices
                    .record(&registry, actor, category, rank, Some(target))
                    .with_context(|| {
                        format!("invalid {category} choice #{} for {actor}", i + 1)
                    })?;
            }
        }
    }

    debug!(
        actors = registry.len(),
        slots = choices.len(),
        "session loaded"
    );
    Ok(LoadedSession {
        meta,
        registry,
        choices,
    })
}

fn parse_meta(section: &MetaSection) -> Result<StudyMeta> {
    let mut meta = StudyMeta::default();
    if let Some(study) = &section.study {
        meta.study_name = study.clone();
    }
    if let Some(group) = &section.group {
        meta.group_kind = group
            .parse::<GroupKind>()
            .map_err(|e| anyhow::anyhow!(e))
            .context("invalid meta.group")?;
    }
    if let Some(date) = &section.date {
        meta.collected_on = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .with_context(|| format!("invalid meta.date {date:?} (expected YYYY-MM-DD)"))?;
    }
    Ok(meta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    fn load_str(toml_text: &str) -> Result<LoadedSession> {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(toml_text.as_bytes()).expect("write");
        load(file.path())
    }

    #[test]
    fn minimal_file_loads_with_default_meta() {
        let session = load_str(r#"actors = ["Alice", "Beatriz"]"#).expect("load");
        assert_eq!(session.registry.actors(), ["Alice", "Beatriz"]);
        assert!(session.choices.is_empty());
        assert_eq!(session.meta.study_name, "untitled study");
    }

    #[test]
    fn full_file_round_trips_choices_and_meta() {
        let session = load_str(
            r#"
            actors = ["Alice", "Beatriz", "Carla"]

            [meta]
            study = "pilot"
            group = "occupational"
            date = "2026-08-25"

            [internal]
            Alice = ["Beatriz", "", "Carla"]

            [general]
            Beatriz = ["Alice"]
            "#,
        )
        .expect("load");

        assert_eq!(session.meta.study_name, "pilot");
        assert_eq!(session.meta.group_kind, GroupKind::Occupational);
        // Rank 2 was "" so only two internal slots plus one general.
        assert_eq!(session.choices.len(), 3);
    }

    #[test]
    fn over_long_choice_list_is_an_invalid_rank() {
        let err = load_str(
            r#"
            actors = ["Alice", "Beatriz"]
            [internal]
            Alice = ["Beatriz", "Beatriz", "Beatriz", "Beatriz"]
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("invalid internal choice #4"));
    }

    #[test]
    fn unknown_target_is_rejected() {
        let err = load_str(
            r#"
            actors = ["Alice"]
            [general]
            Alice = ["Zoe"]
            "#,
        )
        .unwrap_err();
        let chain = format!("{err:#}");
        assert!(chain.contains("unknown actor: Zoe"), "got: {chain}");
    }

    #[test]
    fn bad_date_is_rejected() {
        let err = load_str(
            r#"
            actors = ["Alice"]
            [meta]
            date = "25/08/2026"
            "#,
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("invalid meta.date"));
    }
}
