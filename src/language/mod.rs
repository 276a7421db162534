// Types representing command trees and the errors raised while reading them

mod error;
mod types;

// Re-export all public symbols
pub use error::*;
pub use types::*;
