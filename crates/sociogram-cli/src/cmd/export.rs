//! `sg export` — write the flat {meta, choices} payload for the
//! persistence and rendering collaborators.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::Args;

use sociogram_core::{SessionExport, compile};

use crate::session_file;

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Session file (TOML).
    pub session: PathBuf,

    /// Output JSON path (defaults to stdout).
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

pub fn run(args: &ExportArgs) -> Result<()> {
    let session = session_file::load(&args.session)?;
    let edges = compile(&session.registry, &session.choices);
    let payload = SessionExport::new(session.meta, &edges);

    let mut out: Box<dyn Write> = match args.output.as_ref() {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create output file {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(BufWriter::new(io::stdout())),
    };

    writeln!(out, "{}", serde_json::to_string_pretty(&payload)?)?;
    Ok(())
}
