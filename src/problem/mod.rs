// Diagnostics shown to the user when a command file cannot be read.

mod format;
mod messages;

pub use format::*;
