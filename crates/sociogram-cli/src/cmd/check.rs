//! `sg check` — validate a session file without running analytics.
//!
//! Exits nonzero on the first violation, with the core error in the
//! context chain, so form tooling can lint files before a session.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::output::OutputMode;
use crate::session_file;

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Session file (TOML).
    pub session: PathBuf,
}

#[derive(Debug, Serialize)]
struct CheckReport {
    ok: bool,
    actors: usize,
    recorded_choices: usize,
}

pub fn run(args: &CheckArgs, mode: OutputMode) -> Result<()> {
    let session = session_file::load(&args.session)?;

    let report = CheckReport {
        ok: true,
        actors: session.registry.len(),
        recorded_choices: session.choices.len(),
    };
    match mode {
        OutputMode::Json => println!("{}", serde_json::to_string(&report)?),
        OutputMode::Human => println!(
            "ok: {} actors, {} recorded choices",
            report.actors, report.recorded_choices
        ),
    }
    Ok(())
}
