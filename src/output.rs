//! Query-result printing.

use crate::index::types::DocId;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Keys echoed per query before the `... (N more)` trailer.
const MAX_SHOWN: usize = 20;

/// Print the hit count and the first matching keys.
pub fn print_hits(hits: &[DocId], keys: &[String], color: bool) -> io::Result<()> {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);

    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
    write!(stdout, "hits: {}", hits.len())?;
    stdout.reset()?;
    writeln!(stdout)?;

    let shown = hits.len().min(MAX_SHOWN);
    for &id in &hits[..shown] {
        match keys.get(id as usize) {
            Some(key) => writeln!(stdout, "  {}", key)?,
            None => writeln!(stdout, "  #{}", id)?,
        }
    }
    if hits.len() > shown {
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
        writeln!(stdout, "  ... ({} more)", hits.len() - shown)?;
        stdout.reset()?;
    }
    Ok(())
}
