//! Shared output layer for human/JSON parity across CLI commands.
//!
//! Every command handler receives an [`OutputMode`] and formats its result
//! accordingly: framed text for humans, one stable JSON object for
//! machines. The `--json` flag selects the mode.

use std::io::{self, Write};

/// Shared width for human output separators.
pub const RULE_WIDTH: usize = 60;

/// The two output modes supported by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-optimized output (sections, aligned columns).
    Human,
    /// Machine-readable JSON (one object per command).
    Json,
}

/// Write a horizontal separator used by human output.
pub fn rule(w: &mut dyn Write) -> io::Result<()> {
    writeln!(w, "{:-<width$}", "", width = RULE_WIDTH)
}

/// Write a section heading followed by a separator.
pub fn section(w: &mut dyn Write, heading: &str) -> io::Result<()> {
    writeln!(w, "{heading}")?;
    rule(w)
}

/// Render a left-aligned key/value line in human output.
pub fn kv(w: &mut dyn Write, key: &str, value: impl AsRef<str>) -> io::Result<()> {
    writeln!(w, "{:<14} {}", format!("{key}:"), value.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kv_aligns_values() {
        let mut buf = Vec::new();
        kv(&mut buf, "actors", "5").expect("write to vec");
        let line = String::from_utf8(buf).expect("utf8");
        assert!(line.starts_with("actors:"));
        assert!(line.trim_end().ends_with('5'));
    }

    #[test]
    fn rule_has_fixed_width() {
        let mut buf = Vec::new();
        rule(&mut buf).expect("write to vec");
        assert_eq!(buf.len(), RULE_WIDTH + 1); // trailing newline
    }
}
