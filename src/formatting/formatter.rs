//! Code formatter for commodore files

use crate::formatting::*;
use crate::language::*;
use crate::parsing::parser::split_specifier;

const INDENT: &str = "    ";

/// Convert a tree into tagged fragments, one node per line in declaration
/// order, each nesting level indented by four spaces.
pub fn format_tree(tree: &CommandTree) -> Vec<(Syntax, String)> {
    let mut output = Formatter::new();

    let root = tree.root();
    output.append(Syntax::Command, root.name());
    output.newline();

    output.format_children(root.children());

    output.fragments
}

struct Formatter {
    fragments: Vec<(Syntax, String)>,
    nesting: usize,
}

impl Formatter {
    fn new() -> Formatter {
        Formatter {
            fragments: Vec::new(),
            nesting: 0,
        }
    }

    fn append(&mut self, syntax: Syntax, content: &str) {
        self.fragments
            .push((syntax, content.to_string()));
    }

    fn newline(&mut self) {
        self.append(Syntax::Newline, "\n");
    }

    fn indent(&mut self) {
        if self.nesting > 0 {
            let content = INDENT.repeat(self.nesting);
            self.append(Syntax::Indent, &content);
        }
    }

    fn format_children(&mut self, children: &[CommandNode]) {
        // reversed so that siblings come off the stack in declaration order
        let mut pending: Vec<(&CommandNode, usize)> = children
            .iter()
            .rev()
            .map(|child| (child, 1))
            .collect();

        while let Some((node, nesting)) = pending.pop() {
            self.nesting = nesting;
            self.format_node(node);
            pending.extend(
                node.children()
                    .iter()
                    .rev()
                    .map(|child| (child, nesting + 1)),
            );
        }
        self.nesting = 0;
    }

    fn format_node(&mut self, node: &CommandNode) {
        self.indent();

        match node {
            CommandNode::Literal(literal) => {
                self.append(Syntax::Command, literal.name());
            }
            CommandNode::Argument(argument) => {
                self.format_argument(argument);
            }
        }

        self.newline();
    }

    fn format_argument(&mut self, argument: &Argument) {
        self.append(Syntax::Punctuation, "<");
        self.append(Syntax::Argument, argument.name());
        self.append(Syntax::Punctuation, ">:");

        let (genus, configuration) = split_specifier(argument.specifier());
        self.append(Syntax::Genus, genus);

        if !configuration.is_empty() {
            self.append(Syntax::Neutral, " ");
            self.append(Syntax::Configuration, configuration);
        }
    }
}
