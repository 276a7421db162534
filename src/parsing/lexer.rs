//! Lexer turning commodore source into a flat queue of tokens.
//!
//! The notation is line oriented. Each line is blank, a comment, or holds
//! exactly one node: a literal keyword, or an argument declaration of the
//! form `<name>:type configuration`. Nesting is expressed by indentation,
//! which is converted here into `Indent` and `Dedent` tokens so that the
//! parser never has to look at whitespace.

use tracing::trace;

use crate::parsing::error::{ParsingError, Position};
use crate::parsing::scope::Scope;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Indent,
    Dedent,
    LiteralName,
    ArgumentOpen,
    ArgumentName,
    TypeSpec,
    ArgumentClose,
    Newline,
    Comment,
    Eof,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'i> {
    pub kind: TokenKind,
    pub text: &'i str,
    pub position: Position,
}

impl<'i> Token<'i> {
    fn new(kind: TokenKind, text: &'i str, position: Position) -> Token<'i> {
        Token {
            kind,
            text,
            position,
        }
    }
}

/// The indentation unit, fixed by the first indented line in a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Indentation {
    character: char,
    width: usize,
}

/// Lex the entire input. The returned sequence always ends with an `Eof`
/// token, preceded by whatever `Dedent` tokens are needed to close the
/// blocks still open at the end of the input.
pub fn tokenize(content: &str) -> Result<Vec<Token<'_>>, ParsingError> {
    let content = content
        .strip_prefix('\u{feff}')
        .unwrap_or(content);

    let mut lexer = Lexer::new();

    let mut count = 0;
    for (i, line) in content
        .lines()
        .enumerate()
    {
        count = i + 1;
        lexer.read_line(count, line)?;
    }

    lexer.finish(Position::new(count + 1, 1));

    trace!(tokens = lexer.tokens.len());
    Ok(lexer.tokens)
}

struct Lexer<'i> {
    tokens: Vec<Token<'i>>,
    scope: Scope,
    unit: Option<Indentation>,
}

impl<'i> Lexer<'i> {
    fn new() -> Lexer<'i> {
        Lexer {
            tokens: Vec::new(),
            scope: Scope::new(),
            unit: None,
        }
    }

    fn push(&mut self, kind: TokenKind, text: &'i str, position: Position) {
        self.tokens
            .push(Token::new(kind, text, position));
    }

    fn read_line(&mut self, number: usize, line: &'i str) -> Result<(), ParsingError> {
        let body = line.trim_start_matches([' ', '\t']);
        let lead = &line[..line.len() - body.len()];
        let body = body.trim_end();

        if body.is_empty() {
            return Ok(());
        }

        let start = lead.len();

        // whole line comments are invisible to the indentation rules
        if let Some(comment) = body.strip_prefix('#') {
            self.push(
                TokenKind::Comment,
                comment.trim(),
                Position::new(number, column(line, start)),
            );
            return Ok(());
        }

        self.read_indentation(number, lead)?;

        let (code, comment) = match body.find('#') {
            Some(i) => (body[..i].trim_end(), Some(i)),
            None => (body, None),
        };

        if code.starts_with('<') {
            self.read_argument(number, line, start, code)?;
        } else {
            self.read_literal(number, line, start, code)?;
        }

        if let Some(i) = comment {
            self.push(
                TokenKind::Comment,
                body[i + 1..].trim(),
                Position::new(number, column(line, start + i)),
            );
        }

        let offset = start + body.len();
        self.push(
            TokenKind::Newline,
            "",
            Position::new(number, column(line, offset)),
        );

        Ok(())
    }

    fn read_indentation(&mut self, number: usize, lead: &'i str) -> Result<(), ParsingError> {
        let position = Position::new(number, 1);
        let width = lead.len();

        if let Some(first) = lead
            .chars()
            .next()
        {
            if lead
                .chars()
                .any(|c| c != first)
            {
                return Err(ParsingError::MixedIndentation(position));
            }
            if let Some(unit) = self.unit {
                if unit.character != first {
                    return Err(ParsingError::MixedIndentation(position));
                }
            }
        }

        let current = self
            .scope
            .current();

        if width > current {
            let step = width - current;
            match self.unit {
                None => {
                    // lead is non-empty here, so there is a first character
                    let character = lead
                        .chars()
                        .next()
                        .unwrap_or(' ');
                    self.unit = Some(Indentation {
                        character,
                        width: step,
                    });
                }
                Some(unit) if unit.width != step => {
                    return Err(ParsingError::InconsistentIndentation(position));
                }
                Some(_) => {}
            }
            self.scope
                .push(width);
            self.push(TokenKind::Indent, lead, position);
        } else {
            while self
                .scope
                .current()
                > width
            {
                self.scope
                    .pop();
                self.push(TokenKind::Dedent, "", position);
            }
            if self
                .scope
                .current()
                != width
            {
                return Err(ParsingError::InconsistentIndentation(position));
            }
        }

        Ok(())
    }

    fn read_literal(
        &mut self,
        number: usize,
        line: &'i str,
        start: usize,
        code: &'i str,
    ) -> Result<(), ParsingError> {
        let position = Position::new(number, column(line, start));

        let re = crate::compile!(r"^[^\s<>#]+$");
        if !re.is_match(code) {
            return Err(ParsingError::InvalidLiteral(position, code.to_string()));
        }

        self.push(TokenKind::LiteralName, code, position);
        Ok(())
    }

    fn read_argument(
        &mut self,
        number: usize,
        line: &'i str,
        start: usize,
        code: &'i str,
    ) -> Result<(), ParsingError> {
        let open = Position::new(number, column(line, start));

        let close = match code.find('>') {
            Some(i) => i,
            None => return Err(ParsingError::UnterminatedArgument(open)),
        };

        let name = &code[1..close];
        let position = Position::new(number, column(line, start + 1));

        let re = crate::compile!(r"^[A-Za-z_][A-Za-z0-9_\-]*$");
        if !re.is_match(name) {
            return Err(ParsingError::InvalidArgumentName(
                position,
                name.to_string(),
            ));
        }

        let after = start + close + 1;
        let missing = || {
            ParsingError::MissingTypeSpecifier(
                Position::new(number, column(line, after)),
                name.to_string(),
            )
        };

        let rest = match code[close + 1..].strip_prefix(':') {
            Some(rest) => rest,
            None => return Err(missing()),
        };

        let specifier = rest.trim();
        if specifier.is_empty() {
            return Err(missing());
        }

        let offset = after + 1 + (rest.len() - rest.trim_start().len());

        self.push(TokenKind::ArgumentOpen, &code[..1], open);
        self.push(TokenKind::ArgumentName, name, position);
        self.push(
            TokenKind::TypeSpec,
            specifier,
            Position::new(number, column(line, offset)),
        );
        self.push(
            TokenKind::ArgumentClose,
            &code[close..close + 1],
            Position::new(number, column(line, start + close)),
        );

        Ok(())
    }

    fn finish(&mut self, position: Position) {
        while self
            .scope
            .depth()
            > 0
        {
            self.scope
                .pop();
            self.push(TokenKind::Dedent, "", position);
        }
        self.push(TokenKind::Eof, "", position);
    }
}

// One-origin column of a byte offset within a line, counted in characters.
fn column(line: &str, offset: usize) -> usize {
    line[..offset]
        .chars()
        .count()
        + 1
}
