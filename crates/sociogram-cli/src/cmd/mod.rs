//! Subcommand handlers. Each module exposes an `Args` struct and a `run`
//! entry point taking the parsed args (plus the output mode where the
//! command has human/JSON parity).

pub mod analyze;
pub mod check;
pub mod export;
