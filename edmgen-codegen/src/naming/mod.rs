//! Identifier sanitizing.
//!
//! - [`Sanitizer`] - Turns model identifiers into legal, non-colliding names
//! - [`RenameEvent`] - Emitted whenever sanitizing renames an identifier
//! - [`RenameSink`] - Receiver for rename events

mod sanitize;

pub use sanitize::{
    MAX_RENAME_DEPTH, OwnerContext, RenameEvent, RenameReason, RenameSink, Sanitized, Sanitizer,
    member_name,
};
