//! Human-readable summary of a validation report.

use std::io::{self, IsTerminal, Write};

use card_validator::Report;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> &'static str {
        match self {
            Self::Red => "\x1b[31m",
            Self::Green => "\x1b[32m",
            Self::Yellow => "\x1b[33m",
            Self::Blue => "\x1b[34m",
        }
    }
}

const RESET: &str = "\x1b[0m";

/// Decides whether output gets ANSI colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn plain() -> Self {
        Self { enabled: false }
    }

    pub fn colored() -> Self {
        Self { enabled: true }
    }

    /// Color only when stdout is a terminal and neither `--no-color` nor
    /// `NO_COLOR` asks otherwise.
    pub fn detect(no_color: bool) -> Self {
        let enabled =
            !no_color && std::env::var_os("NO_COLOR").is_none() && io::stdout().is_terminal();
        Self { enabled }
    }

    pub fn paint(&self, text: impl AsRef<str>, color: Color) -> String {
        if self.enabled {
            format!("{}{}{}", color.code(), text.as_ref(), RESET)
        } else {
            text.as_ref().to_string()
        }
    }
}

/// Write errors, then suggestions, one line per finding.
pub fn write_summary(report: &Report, palette: Palette, out: &mut dyn Write) -> io::Result<()> {
    if report.is_clean() {
        return writeln!(out, "{}", palette.paint("OK — no problems found.", Color::Green));
    }

    writeln!(out, "{}", palette.paint("Validation Summary:", Color::Blue))?;

    if !report.errors.is_empty() {
        let heading = format!("\nErrors ({}):", report.errors.len());
        writeln!(out, "{}", palette.paint(heading, Color::Red))?;
        for error in &report.errors {
            let line = format!("- {}: {}", error.loc.render("<root>"), error.msg);
            writeln!(out, "{}", palette.paint(line, Color::Red))?;
        }
    }

    if !report.suggestions.is_empty() {
        let heading = format!("\nSuggestions ({}):", report.suggestions.len());
        writeln!(out, "{}", palette.paint(heading, Color::Yellow))?;
        for suggestion in &report.suggestions {
            let mut line = format!("- {}: {}", suggestion.loc.render("<global>"), suggestion.msg);
            if suggestion.applied {
                line = format!(
                    "{} {}",
                    palette.paint(line, Color::Yellow),
                    palette.paint("[applied]", Color::Green)
                );
                writeln!(out, "{line}")?;
            } else {
                writeln!(out, "{}", palette.paint(line, Color::Yellow))?;
            }
        }
    }

    Ok(())
}
