//! `sg analyze` — run the full pipeline and report social structure.

use std::io::{self, Write as _};
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use sociogram_core::{compile, edge_hash};
use sociogram_graph::{Sociogram, degree_table, isolates, reciprocal_pairs};

use crate::output::{self, OutputMode};
use crate::session_file;

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Session file (TOML).
    pub session: PathBuf,
}

#[derive(Debug, Serialize)]
struct DegreeRow {
    actor: String,
    in_degree: usize,
    out_degree: usize,
}

/// Stable JSON contract for `analyze --json`.
#[derive(Debug, Serialize)]
struct AnalyzeReport {
    study: String,
    actors: usize,
    arcs: usize,
    edge_hash: String,
    degrees: Vec<DegreeRow>,
    isolates: Vec<String>,
    reciprocal_pairs: Vec<[String; 2]>,
}

pub fn run(args: &AnalyzeArgs, mode: OutputMode) -> Result<()> {
    let session = session_file::load(&args.session)?;
    let edges = compile(&session.registry, &session.choices);
    let hash = edge_hash(&edges);
    let graph = Sociogram::build(&session.registry, &edges)?;

    let table = degree_table(&graph);
    // Display order from the original method: most-chosen first, ties in
    // roster order.
    let mut degrees: Vec<DegreeRow> = session
        .registry
        .actors()
        .iter()
        .map(|actor| DegreeRow {
            actor: actor.clone(),
            in_degree: table[actor].in_degree,
            out_degree: table[actor].out_degree,
        })
        .collect();
    degrees.sort_by(|a, b| b.in_degree.cmp(&a.in_degree));

    let report = AnalyzeReport {
        study: session.meta.study_name.clone(),
        actors: graph.node_count(),
        arcs: graph.arc_count(),
        edge_hash: hash,
        degrees,
        isolates: isolates(&graph),
        reciprocal_pairs: reciprocal_pairs(&graph)
            .into_iter()
            .map(|(u, v)| [u, v])
            .collect(),
    };

    match mode {
        OutputMode::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputMode::Human => render_human(&report)?,
    }
    Ok(())
}

fn render_human(report: &AnalyzeReport) -> Result<()> {
    let stdout = io::stdout();
    let mut w = stdout.lock();

    output::section(&mut w, &format!("Sociogram — {}", report.study))?;
    output::kv(&mut w, "actors", report.actors.to_string())?;
    output::kv(&mut w, "arcs", report.arcs.to_string())?;
    writeln!(w)?;

    output::section(&mut w, "Degrees (in / out)")?;
    for row in &report.degrees {
        writeln!(
            w,
            "{:<20} {:>3} / {:<3}",
            row.actor, row.in_degree, row.out_degree
        )?;
    }
    writeln!(w)?;

    output::section(&mut w, "Isolates")?;
    if report.isolates.is_empty() {
        writeln!(w, "(none)")?;
    } else {
        for actor in &report.isolates {
            writeln!(w, "{actor}")?;
        }
    }
    writeln!(w)?;

    output::section(&mut w, "Reciprocal pairs")?;
    if report.reciprocal_pairs.is_empty() {
        writeln!(w, "(none)")?;
    } else {
        for [u, v] in &report.reciprocal_pairs {
            writeln!(w, "{u} <-> {v}")?;
        }
    }
    Ok(())
}
