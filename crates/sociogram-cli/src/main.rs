#![forbid(unsafe_code)]

mod cmd;
mod output;
mod session_file;

use clap::{Parser, Subcommand};
use output::OutputMode;
use std::env;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "sociogram: ranked-choice sociometric analysis",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,

    /// Emit JSON output instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Derive the output mode from flags.
    fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = "Analyze a session file",
        long_about = "Compile a session's choices, build the sociogram, and report degree \
                      statistics, isolates, and reciprocal pairs.",
        after_help = "EXAMPLES:\n    # Human-readable report\n    sg analyze session.toml\n\n    # Machine-readable report\n    sg analyze session.toml --json"
    )]
    Analyze(cmd::analyze::AnalyzeArgs),

    #[command(
        about = "Export a session's edge triples as JSON",
        long_about = "Compile a session and write the {meta, choices} payload for downstream \
                      storage or rendering tools.",
        after_help = "EXAMPLES:\n    # To stdout\n    sg export session.toml\n\n    # To a file\n    sg export session.toml --output moreno_session.json"
    )]
    Export(cmd::export::ExportArgs),

    #[command(
        about = "Validate a session file without analyzing it",
        after_help = "EXAMPLES:\n    sg check session.toml"
    )]
    Check(cmd::check::CheckArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mode = cli.output_mode();
    match &cli.command {
        Commands::Analyze(args) => cmd::analyze::run(args, mode),
        Commands::Export(args) => cmd::export::run(args),
        Commands::Check(args) => cmd::check::run(args, mode),
    }
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("SOCIOGRAM_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose || env::var("DEBUG").is_ok() {
            "sociogram=debug,info"
        } else {
            "sociogram=info,warn"
        })
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}
