//! Terminal rendering for the markdown produced by `glowup_core::display`
//!
//! Rich output goes through termimad; `--no-color` prints the markdown as-is.

use std::io::{self, Write};

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// How a single markdown line is styled in rich mode.
#[derive(Debug, PartialEq, Eq)]
enum LineKind {
    /// `#` headings, printed with their hashes in blue
    Heading,
    /// `>` event lines, printed in green without the marker
    Event,
    /// Everything else, rendered inline by the skin
    Text,
}

fn line_kind(line: &str) -> LineKind {
    if line.starts_with('#') {
        LineKind::Heading
    } else if line.starts_with("> ") {
        LineKind::Event
    } else {
        LineKind::Text
    }
}

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Magenta);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Cyan);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to the terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        self.write_to(&mut stdout, markdown)?;
        stdout.flush()?;
        Ok(())
    }

    fn write_to<W: Write>(&self, out: &mut W, markdown: &str) -> io::Result<()> {
        if !self.rich_enabled {
            return out.write_all(markdown.as_bytes());
        }

        for line in markdown.lines() {
            match line_kind(line) {
                LineKind::Heading => writeln!(out, "\x1b[35m{line}\x1b[0m")?,
                LineKind::Event => writeln!(out, "\x1b[32m{}\x1b[0m", &line[2..])?,
                LineKind::Text => writeln!(out, "{}", self.skin.inline(line))?,
            }
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
