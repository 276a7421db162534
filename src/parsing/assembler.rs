//! Conversion of the parser's descriptors into the final command tree,
//! checking the rules that need more than one line of context.

use std::collections::HashSet;

use crate::language::{Argument, CommandNode, CommandTree, Literal};
use crate::parsing::error::ParsingError;
use crate::parsing::parser::{Descriptor, DescriptorKind};

/// Build the command tree rooted at `root`. The root has to be a literal,
/// and no two children of the same node may share a name, whether they are
/// literals or arguments.
pub fn assemble(root: Descriptor<'_>) -> Result<CommandTree, ParsingError> {
    let position = root.position;

    if !root.is_literal() {
        return Err(ParsingError::ArgumentRoot(
            position,
            root.name
                .to_string(),
        ));
    }

    let mut path = Vec::new();
    let mut stack = Vec::new();
    enter(root, &mut stack, &mut path)?;

    // Post-order over an explicit stack: siblings are checked as a node is
    // entered, the node itself is built once its last child is done.
    loop {
        let frame = stack
            .last_mut()
            .ok_or(ParsingError::IllegalParserState(position))?;

        if let Some(child) = frame
            .pending
            .next()
        {
            enter(child, &mut stack, &mut path)?;
            continue;
        }

        let frame = stack
            .pop()
            .ok_or(ParsingError::IllegalParserState(position))?;
        path.pop();

        let node = frame.build();
        match stack.last_mut() {
            Some(parent) => parent
                .built
                .push(node),
            None => {
                return match node {
                    CommandNode::Literal(literal) => Ok(CommandTree::new(literal)),
                    CommandNode::Argument(_) => Err(ParsingError::IllegalParserState(position)),
                }
            }
        }
    }
}

// A node whose children are still being converted.
struct Frame<'i> {
    name: &'i str,
    kind: DescriptorKind<'i>,
    pending: std::vec::IntoIter<Descriptor<'i>>,
    built: Vec<CommandNode>,
}

impl<'i> Frame<'i> {
    fn build(self) -> CommandNode {
        match self.kind {
            DescriptorKind::Literal => CommandNode::Literal(Literal::new(self.name, self.built)),
            DescriptorKind::Argument {
                specifier,
                argument_type,
            } => CommandNode::Argument(Argument::new(
                self.name,
                specifier,
                argument_type,
                self.built,
            )),
        }
    }
}

// `path` holds the usage of each open node, for error messages.
fn enter<'i>(
    descriptor: Descriptor<'i>,
    stack: &mut Vec<Frame<'i>>,
    path: &mut Vec<String>,
) -> Result<(), ParsingError> {
    let usage = match descriptor.kind {
        DescriptorKind::Literal => descriptor
            .name
            .to_string(),
        DescriptorKind::Argument { .. } => format!("<{}>", descriptor.name),
    };
    path.push(usage);

    check_siblings(&descriptor.children, path)?;

    stack.push(Frame {
        name: descriptor.name,
        kind: descriptor.kind,
        built: Vec::with_capacity(
            descriptor
                .children
                .len(),
        ),
        pending: descriptor
            .children
            .into_iter(),
    });
    Ok(())
}

fn check_siblings(children: &[Descriptor<'_>], path: &[String]) -> Result<(), ParsingError> {
    let mut seen = HashSet::new();

    for child in children {
        if !seen.insert(child.name) {
            return Err(ParsingError::DuplicateSibling(
                child.position,
                path.join(" "),
                child
                    .name
                    .to_string(),
            ));
        }
    }

    Ok(())
}
