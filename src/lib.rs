//! Compiler for the commodore notation, a compact way of writing down
//! command trees made of literal keywords and typed arguments.

pub mod formatting;
pub mod language;
pub mod parsing;
pub mod reader;
pub mod registry;
mod regex;

pub use reader::{Reader, ReaderBuilder};
