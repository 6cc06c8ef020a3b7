//! Console summary printed after a document is generated

use std::io::{self, Write};
use std::path::PathBuf;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// What was generated and a few headline numbers about it.
#[derive(Debug, Clone, Default)]
pub struct Summary {
    /// Where the document was written; `None` when printed to stdout
    pub output: Option<PathBuf>,
    /// Label/value pairs shown below the header, in order
    pub rows: Vec<(&'static str, String)>,
}

/// Print a summary to stdout with optional color.
pub fn print_summary(summary: &Summary, use_color: bool) -> io::Result<()> {
    let color_choice = if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(color_choice);
    write_summary(&mut stdout, summary)
}

/// Print a summary to stderr, keeping stdout free for the document itself.
pub fn eprint_summary(summary: &Summary, use_color: bool) -> io::Result<()> {
    let color_choice = if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stderr = StandardStream::stderr(color_choice);
    write_summary(&mut stderr, summary)
}

pub fn write_summary<W: WriteColor>(out: &mut W, summary: &Summary) -> io::Result<()> {
    if let Some(path) = &summary.output {
        let mut header = ColorSpec::new();
        header.set_fg(Some(Color::Green)).set_bold(true);
        out.set_color(&header)?;
        write!(out, "Generated:")?;
        out.reset()?;
        writeln!(out, " {}", path.display())?;
    }

    let width = summary.rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    let mut label_color = ColorSpec::new();
    label_color.set_fg(Some(Color::Cyan));

    for (label, value) in &summary.rows {
        write!(out, "  ")?;
        out.set_color(&label_color)?;
        write!(out, "{:<width$}", format!("{}:", label), width = width + 1)?;
        out.reset()?;
        writeln!(out, " {}", value)?;
    }

    Ok(())
}
