//! Command surface and collaborator contracts for quill.
//!
//! This crate is the seam between the engine and the excluded input,
//! rendering, and clipboard layers: the [`Command`] enum is what the input
//! adapter produces, and [`Clipboard`] is what the composition root supplies.

mod clipboard;
mod command;

pub use clipboard::{Clipboard, LocalClipboard};
pub use command::{Command, Direction};
