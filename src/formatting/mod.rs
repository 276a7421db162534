//! Writing command trees back out in commodore notation

pub mod formatter;
mod renderer;
mod syntax;

pub use renderer::Terminal;
pub use syntax::{Identity, Render, Syntax};

use crate::language::CommandTree;

/// We do the code formatting in two passes. First we convert the command
/// tree into a Vec of "fragments" (Syntax tag, String pairs). Then second we
/// apply the specified renderer to each pair to result in an
/// embellished/highlighted String.
pub fn render(renderer: &impl Render, tree: &CommandTree) -> String {
    // Pass 1: Format tree to tagged fragments
    let fragments = formatter::format_tree(tree);

    // Pass 2: Render tagged fragments to final output
    render_to_string(renderer, fragments)
}

/// Pass 2: apply markup to fragments via style() and combine.
fn render_to_string(renderer: &impl Render, fragments: Vec<(Syntax, String)>) -> String {
    let mut output = String::new();

    for (syntax, content) in fragments {
        let rendered = renderer.style(syntax, &content);
        output.push_str(&rendered);
    }

    if !output.is_empty() && !output.ends_with('\n') {
        output.push('\n');
    }

    output
}
