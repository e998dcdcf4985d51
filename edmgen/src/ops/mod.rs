//! Operations that build reports from a loaded model.
//!
//! Kept free of printing so they can be tested without a terminal.

mod check;
mod map;

pub use check::check;
pub use map::map;
