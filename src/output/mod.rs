//! Result formatting and display
//!
//! - `config` - Output configuration types
//! - `json` - JSON output
//! - `ResultPrinter` - one-per-line console output with optional colors

mod config;
mod json;

use std::io::{self, Write};
use std::path::Path;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

pub use config::OutputConfig;
pub use json::{SearchOutput, print_json};

/// Writes names and paths one per line.
pub struct ResultPrinter<W: WriteColor> {
    config: OutputConfig,
    out: W,
}

impl ResultPrinter<StandardStream> {
    pub fn stdout(config: OutputConfig) -> Self {
        let choice = if config.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self::new(config, StandardStream::stdout(choice))
    }
}

impl<W: WriteColor> ResultPrinter<W> {
    pub fn new(config: OutputConfig, out: W) -> Self {
        Self { config, out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn print_names(&mut self, names: &[String]) -> io::Result<()> {
        for name in names {
            self.write_name(name)?;
            writeln!(self.out)?;
        }
        self.out.flush()
    }

    /// Write a path with its final component colored.
    pub fn print_path(&mut self, path: &Path) -> io::Result<()> {
        let full = path.display().to_string();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .filter(|n| full.ends_with(n.as_str()));

        match name {
            Some(name) => {
                write!(self.out, "{}", &full[..full.len() - name.len()])?;
                self.out
                    .set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
                write!(self.out, "{}", name)?;
                self.out.reset()?;
            }
            None => write!(self.out, "{}", full)?,
        }
        writeln!(self.out)?;
        self.out.flush()
    }

    /// Write a name, coloring every occurrence of the highlight pattern.
    fn write_name(&mut self, name: &str) -> io::Result<()> {
        let Some(pattern) = self.config.highlight() else {
            return write!(self.out, "{}", name);
        };

        let mut last = 0;
        for (start, matched) in name.match_indices(pattern) {
            write!(self.out, "{}", &name[last..start])?;
            self.out
                .set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
            write!(self.out, "{}", matched)?;
            self.out.reset()?;
            last = start + matched.len();
        }
        write!(self.out, "{}", &name[last..])
    }
}
