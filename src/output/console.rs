//! Console output formatter
//!
//! Writes each rename action to stdout as soon as it is reported, with the
//! action label coloured when colour is enabled.

use std::io::{self, Write};
use termcolor::{ColorChoice, ColorSpec, StandardStream, WriteColor};

use super::RenameOutput;
use super::event::RenameEvent;

/// Line-per-action stdout writer.
pub struct ConsoleFormatter {
    stdout: StandardStream,
}

impl ConsoleFormatter {
    pub fn new(use_color: bool) -> Self {
        // Terminal and environment detection already happened in the caller
        let choice = if use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        Self {
            stdout: StandardStream::stdout(choice),
        }
    }
}

impl RenameOutput for ConsoleFormatter {
    fn report(&mut self, event: &RenameEvent) -> io::Result<()> {
        self.stdout
            .set_color(ColorSpec::new().set_fg(Some(event.kind.color())).set_bold(true))?;
        write!(self.stdout, "{}", event.kind.label())?;
        self.stdout.reset()?;
        writeln!(self.stdout, " {}", event.detail())
    }
}
