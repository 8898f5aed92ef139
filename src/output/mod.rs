//! Reporting of rename actions
//!
//! The renamer hands every planned, applied or blocked rename to a
//! `RenameOutput`. The console implementation prints one line per action;
//! `Vec<RenameEvent>` collects them in memory.
//!
//! # Module Structure
//!
//! - `event` - The reported action and its text form
//! - `console` - Line-per-action stdout writer with optional colour

mod console;
mod event;

use std::io;

pub use console::ConsoleFormatter;
pub use event::{ActionKind, RenameEvent};

/// Receiver for rename actions, called in walk order.
pub trait RenameOutput {
    fn report(&mut self, event: &RenameEvent) -> io::Result<()>;
}

impl RenameOutput for Vec<RenameEvent> {
    fn report(&mut self, event: &RenameEvent) -> io::Result<()> {
        self.push(event.clone());
        Ok(())
    }
}
