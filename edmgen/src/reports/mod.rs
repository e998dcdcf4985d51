//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod check;
mod map;
mod output;

pub use check::CheckReport;
pub use map::{ClassSection, MapReport};
#[cfg(test)]
pub use output::RecordingOutput;
pub use output::{Output, Report, TerminalOutput};
