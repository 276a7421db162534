//! Parser consuming the lexer's token queue.
//!
//! The grammar is small:
//!
//! ```text
//! file      := node EOF
//! node      := literal | argument
//! literal   := LITERAL_NAME NEWLINE? children?
//! argument  := ARGUMENT_OPEN ARGUMENT_NAME TYPE_SPEC ARGUMENT_CLOSE NEWLINE? children?
//! children  := INDENT node+ DEDENT
//! ```
//!
//! Rather than recursing for each nested block, the parser keeps an
//! explicit stack: the list of siblings being collected at each depth, and
//! the node that owns each of those lists. An `Indent` adopts the most
//! recent sibling as the owner of a new list; a `Dedent` closes the list
//! and hands it to its owner.

use std::collections::VecDeque;

use tracing::trace;

use crate::language::ArgumentType;
use crate::parsing::error::{ParsingError, Position};
use crate::parsing::lexer::{Token, TokenKind};
use crate::registry::{Registry, TypeError};

#[derive(Debug, Clone, PartialEq)]
pub enum DescriptorKind<'i> {
    Literal,
    Argument {
        specifier: &'i str,
        argument_type: ArgumentType,
    },
}

/// Node in the tree the parser builds. Names have not been checked for
/// uniqueness yet; that is the assembler's job.
#[derive(Debug, Clone, PartialEq)]
pub struct Descriptor<'i> {
    pub name: &'i str,
    pub kind: DescriptorKind<'i>,
    pub position: Position,
    pub children: Vec<Descriptor<'i>>,
}

impl<'i> Descriptor<'i> {
    pub fn literal(name: &'i str, position: Position) -> Descriptor<'i> {
        Descriptor {
            name,
            kind: DescriptorKind::Literal,
            position,
            children: Vec::new(),
        }
    }

    pub fn argument(
        name: &'i str,
        specifier: &'i str,
        argument_type: ArgumentType,
        position: Position,
    ) -> Descriptor<'i> {
        Descriptor {
            name,
            kind: DescriptorKind::Argument {
                specifier,
                argument_type,
            },
            position,
            children: Vec::new(),
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self.kind, DescriptorKind::Literal)
    }
}

/// Parse a complete token sequence as produced by the lexer into the
/// single top-level descriptor it declares, resolving argument types
/// against `registry` along the way.
pub fn parse_tokens<'i>(
    tokens: Vec<Token<'i>>,
    registry: &Registry,
) -> Result<Descriptor<'i>, ParsingError> {
    let mut parser = Parser::new(tokens, registry);
    parser.parse_from_start()
}

pub struct Parser<'i, 'r> {
    tokens: VecDeque<Token<'i>>,
    registry: &'r Registry,
    scopes: Vec<Vec<Descriptor<'i>>>,
    owners: Vec<Descriptor<'i>>,
    end: Position,
}

impl<'i, 'r> Parser<'i, 'r> {
    pub fn new(tokens: Vec<Token<'i>>, registry: &'r Registry) -> Parser<'i, 'r> {
        let end = tokens
            .last()
            .map(|token| token.position)
            .unwrap_or(Position::new(1, 1));

        Parser {
            tokens: tokens.into(),
            registry,
            scopes: vec![Vec::new()],
            owners: Vec::new(),
            end,
        }
    }

    pub fn parse_from_start(&mut self) -> Result<Descriptor<'i>, ParsingError> {
        loop {
            let token = self.next();

            match token.kind {
                TokenKind::LiteralName => {
                    let descriptor = Descriptor::literal(token.text, token.position);
                    self.attach(descriptor)?;
                    self.end_of_node()?;
                }
                TokenKind::ArgumentOpen => {
                    let descriptor = self.read_argument()?;
                    self.attach(descriptor)?;
                    self.end_of_node()?;
                }
                TokenKind::Indent => self.descend(token.position)?,
                TokenKind::Dedent => self.ascend(token.position)?,
                TokenKind::Newline => continue,
                TokenKind::Eof => return self.finish(token.position),
                _ => {
                    return Err(ParsingError::Expected(
                        token.position,
                        "a command name or an argument declaration",
                    ))
                }
            }
        }
    }

    /// Take the next token, passing over comments. Running off the end of
    /// the queue behaves as if an `Eof` were there.
    fn next(&mut self) -> Token<'i> {
        while let Some(token) = self
            .tokens
            .pop_front()
        {
            if token.kind != TokenKind::Comment {
                return token;
            }
        }
        Token {
            kind: TokenKind::Eof,
            text: "",
            position: self.end,
        }
    }

    fn peek(&self) -> Option<&Token<'i>> {
        self.tokens
            .iter()
            .find(|token| token.kind != TokenKind::Comment)
    }

    fn expect(&mut self, kind: TokenKind, what: &'static str) -> Result<Token<'i>, ParsingError> {
        let token = self.next();
        if token.kind == kind {
            Ok(token)
        } else {
            Err(ParsingError::Expected(token.position, what))
        }
    }

    // A node occupies its whole line.
    fn end_of_node(&mut self) -> Result<(), ParsingError> {
        match self.peek() {
            None => Ok(()),
            Some(token) => match token.kind {
                TokenKind::Newline | TokenKind::Indent | TokenKind::Dedent | TokenKind::Eof => {
                    Ok(())
                }
                _ => Err(ParsingError::Expected(token.position, "the end of the line")),
            },
        }
    }

    fn read_argument(&mut self) -> Result<Descriptor<'i>, ParsingError> {
        let name = self.expect(TokenKind::ArgumentName, "an argument name")?;
        let specifier = self.expect(TokenKind::TypeSpec, "a type specifier")?;
        self.expect(
            TokenKind::ArgumentClose,
            "the end of the argument declaration",
        )?;

        let (genus, configuration) = split_specifier(specifier.text);

        trace!(argument = name.text, genus, "Resolving argument type");

        let argument_type = self
            .registry
            .resolve(genus, configuration)
            .map_err(|error| match error {
                TypeError::Unknown(genus) => {
                    ParsingError::UnknownType(specifier.position, name.text.to_string(), genus)
                }
                TypeError::Invalid(genus, reason) => ParsingError::InvalidType(
                    specifier.position,
                    name.text.to_string(),
                    genus,
                    reason,
                ),
            })?;

        Ok(Descriptor::argument(
            name.text,
            specifier.text,
            argument_type,
            name.position,
        ))
    }

    fn attach(&mut self, descriptor: Descriptor<'i>) -> Result<(), ParsingError> {
        let top = self
            .scopes
            .len()
            == 1;

        let siblings = self
            .scopes
            .last_mut()
            .ok_or(ParsingError::IllegalParserState(descriptor.position))?;

        if top && !siblings.is_empty() {
            return Err(ParsingError::MultipleRoots(descriptor.position));
        }

        siblings.push(descriptor);
        Ok(())
    }

    fn descend(&mut self, position: Position) -> Result<(), ParsingError> {
        let owner = self
            .scopes
            .last_mut()
            .and_then(|siblings| siblings.pop())
            .ok_or(ParsingError::Expected(
                position,
                "a command before an indented block",
            ))?;

        self.owners
            .push(owner);
        self.scopes
            .push(Vec::new());
        Ok(())
    }

    fn ascend(&mut self, position: Position) -> Result<(), ParsingError> {
        if self
            .scopes
            .len()
            < 2
        {
            return Err(ParsingError::IllegalParserState(position));
        }

        let children = self
            .scopes
            .pop()
            .ok_or(ParsingError::IllegalParserState(position))?;
        let mut owner = self
            .owners
            .pop()
            .ok_or(ParsingError::IllegalParserState(position))?;

        if children.is_empty() {
            return Err(ParsingError::Expected(position, "at least one nested command"));
        }

        owner.children = children;

        self.scopes
            .last_mut()
            .ok_or(ParsingError::IllegalParserState(position))?
            .push(owner);
        Ok(())
    }

    fn finish(&mut self, position: Position) -> Result<Descriptor<'i>, ParsingError> {
        if self
            .scopes
            .len()
            != 1
        {
            return Err(ParsingError::IllegalParserState(position));
        }

        let mut roots = self
            .scopes
            .pop()
            .unwrap_or_default();

        match roots.len() {
            0 => Err(ParsingError::MissingRoot(position)),
            1 => Ok(roots.remove(0)),
            _ => Err(ParsingError::MultipleRoots(roots[1].position)),
        }
    }
}

/// Separate the type name from its configuration at the first whitespace.
pub fn split_specifier(specifier: &str) -> (&str, &str) {
    match specifier.split_once(char::is_whitespace) {
        Some((genus, configuration)) => (genus, configuration.trim()),
        None => (specifier, ""),
    }
}
