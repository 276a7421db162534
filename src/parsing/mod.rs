//! parser for the commodore notation

use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::language::{CommandTree, LoadingError};
use crate::registry::Registry;

pub mod assembler;
mod error;
pub mod lexer;
pub mod parser;
mod scope;

pub use error::{ParsingError, Position};

/// Read a file and return an owned String, so that diagnostics can later
/// quote from it. The filename `-` means standard input.
pub fn load(filename: &Path) -> Result<String, LoadingError<'_>> {
    let result = if filename.to_str() == Some("-") {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map(|_| content)
    } else {
        std::fs::read_to_string(filename)
    };

    match result {
        Ok(content) => Ok(content),
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => Err(LoadingError {
                    problem: "File not found".to_string(),
                    details: String::new(),
                    filename,
                }),
                _ => Err(LoadingError {
                    problem: "Failed reading".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                }),
            }
        }
    }
}

/// Run the whole pipeline over text already in memory: lex, parse with
/// argument types resolved through `registry`, then assemble the tree.
pub fn parse(content: &str, registry: &Registry) -> Result<CommandTree, ParsingError> {
    let tokens = lexer::tokenize(content)?;
    debug!(
        "Lexed {} token{}",
        tokens.len(),
        if tokens.len() == 1 { "" } else { "s" }
    );

    let root = parser::parse_tokens(tokens, registry)?;
    let tree = assembler::assemble(root)?;

    debug!(
        "Assembled '{}' with {} node{}",
        tree.root()
            .name(),
        tree.count(),
        if tree.count() == 1 { "" } else { "s" }
    );

    Ok(tree)
}
