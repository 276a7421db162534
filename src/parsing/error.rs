use std::fmt;

/// Location in the source text, both one-origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Position {
        Position { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsingError {
    IllegalParserState(Position),
    Expected(Position, &'static str),
    MixedIndentation(Position),
    InconsistentIndentation(Position),
    InvalidLiteral(Position, String),
    InvalidArgumentName(Position, String),
    UnterminatedArgument(Position),
    MissingTypeSpecifier(Position, String),
    MissingRoot(Position),
    MultipleRoots(Position),
    UnknownType(Position, String, String),
    InvalidType(Position, String, String, String),
    ArgumentRoot(Position, String),
    DuplicateSibling(Position, String, String),
}

impl ParsingError {
    pub fn position(&self) -> Position {
        match self {
            ParsingError::IllegalParserState(position) => *position,
            ParsingError::Expected(position, _) => *position,
            ParsingError::MixedIndentation(position) => *position,
            ParsingError::InconsistentIndentation(position) => *position,
            ParsingError::InvalidLiteral(position, _) => *position,
            ParsingError::InvalidArgumentName(position, _) => *position,
            ParsingError::UnterminatedArgument(position) => *position,
            ParsingError::MissingTypeSpecifier(position, _) => *position,
            ParsingError::MissingRoot(position) => *position,
            ParsingError::MultipleRoots(position) => *position,
            ParsingError::UnknownType(position, _, _) => *position,
            ParsingError::InvalidType(position, _, _, _) => *position,
            ParsingError::ArgumentRoot(position, _) => *position,
            ParsingError::DuplicateSibling(position, _, _) => *position,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ParsingError::IllegalParserState(_) => "illegal parser state".to_string(),
            ParsingError::Expected(_, value) => format!("expected {}", value),
            ParsingError::MixedIndentation(_) => "mixed tabs and spaces in indentation".to_string(),
            ParsingError::InconsistentIndentation(_) => "inconsistent indentation".to_string(),
            ParsingError::InvalidLiteral(_, text) => format!("invalid command name '{}'", text),
            ParsingError::InvalidArgumentName(_, name) => {
                format!("invalid argument name '{}'", name)
            }
            ParsingError::UnterminatedArgument(_) => {
                "unterminated argument declaration".to_string()
            }
            ParsingError::MissingTypeSpecifier(_, name) => {
                format!("missing type for argument '{}'", name)
            }
            ParsingError::MissingRoot(_) => "no command declared".to_string(),
            ParsingError::MultipleRoots(_) => "more than one top-level command".to_string(),
            ParsingError::UnknownType(_, argument, genus) => {
                format!("unknown type '{}' for argument '{}'", genus, argument)
            }
            ParsingError::InvalidType(_, argument, genus, reason) => {
                format!(
                    "invalid type '{}' for argument '{}': {}",
                    genus, argument, reason
                )
            }
            ParsingError::ArgumentRoot(_, name) => {
                format!("top-level command '{}' must not be an argument", name)
            }
            ParsingError::DuplicateSibling(_, parent, name) => {
                format!("duplicate '{}' beneath '{}'", name, parent)
            }
        }
    }
}

impl fmt::Display for ParsingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.position(), self.message())
    }
}

impl std::error::Error for ParsingError {}
