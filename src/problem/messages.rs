use commodore::formatting::{self, Render, Syntax};
use commodore::parsing::ParsingError;
use commodore::Reader;

// Show a snippet of commodore with the same highlighting the formatter
// would give it, indented to sit inside an explanation.
fn example(renderer: &impl Render, source: &str) -> String {
    let source = source.trim_ascii();

    let rendered = match Reader::standard().parse_str(source) {
        Ok(tree) => formatting::render(renderer, &tree),
        Err(_) => source.to_string(),
    };

    rendered
        .lines()
        .map(|line| format!("    {}", line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Generate problem and detail messages for parsing errors
pub fn generate_error_message(error: &ParsingError, renderer: &impl Render) -> (String, String) {
    match error {
        ParsingError::IllegalParserState(_) => (
            "Illegal parser state".to_string(),
            "Internal parser error. This should not have happened! Sorry.".to_string(),
        ),
        ParsingError::Expected(_, value) => (
            format!("Expected {}", value),
            format!(
                "The parser was looking for {} but found something else.",
                value
            ),
        ),
        ParsingError::MixedIndentation(_) => (
            "Mixed indentation".to_string(),
            r#"
Indentation must be made of either spaces or tabs, not both. Whichever is used
first in a file has to be used throughout it.
            "#
            .trim_ascii()
            .to_string(),
        ),
        ParsingError::InconsistentIndentation(_) => (
            "Inconsistent indentation".to_string(),
            format!(
                r#"
Each nested level must be indented by the same amount as the first indented
line in the file, and a line that steps back out must line up exactly with an
enclosing level. For example:

{}
                "#,
                example(
                    renderer,
                    r#"
team
    add
        <team>:team
    remove
                    "#
                )
            )
            .trim_ascii()
            .to_string(),
        ),
        ParsingError::InvalidLiteral(_, text) => (
            format!("Invalid command name '{}'", text),
            format!(
                r#"
A command name is a single word with no spaces and none of the characters
{}, {}, or {}. To declare an argument instead, write its name in angle brackets
followed by its type:

{}
                "#,
                renderer.style(Syntax::Punctuation, "<"),
                renderer.style(Syntax::Punctuation, ">"),
                renderer.style(Syntax::Punctuation, "#"),
                example(renderer, "say\n    <message>:message")
            )
            .trim_ascii()
            .to_string(),
        ),
        ParsingError::InvalidArgumentName(_, name) => (
            format!("Invalid argument name '{}'", name),
            r#"
Argument names start with a letter or underscore and continue with letters,
numbers, underscores, or dashes.
            "#
            .trim_ascii()
            .to_string(),
        ),
        ParsingError::UnterminatedArgument(_) => (
            "Unterminated argument declaration".to_string(),
            format!(
                r#"
An argument declaration opened with {} must close its name with {} before the
type is given.
                "#,
                renderer.style(Syntax::Punctuation, "<"),
                renderer.style(Syntax::Punctuation, ">")
            )
            .trim_ascii()
            .to_string(),
        ),
        ParsingError::MissingTypeSpecifier(_, name) => (
            format!("Missing type for argument '{}'", name),
            format!(
                r#"
Every argument needs a type, written after a colon directly following the
closing angle bracket. Any configuration for the type follows its name:

{}
                "#,
                example(renderer, "give\n    <count>:integer 1 64")
            )
            .trim_ascii()
            .to_string(),
        ),
        ParsingError::MissingRoot(_) => (
            "No command declared".to_string(),
            "A commodore file must declare exactly one top-level command.".to_string(),
        ),
        ParsingError::MultipleRoots(_) => (
            "More than one top-level command".to_string(),
            r#"
A commodore file declares exactly one command. Everything else in the file has
to be indented beneath it; put other commands in files of their own.
            "#
            .trim_ascii()
            .to_string(),
        ),
        ParsingError::UnknownType(_, argument, genus) => (
            format!("Unknown type '{}'", genus),
            format!(
                r#"
The argument '{}' is declared with type {}, but no argument type by that name
is registered. Run `commodore types` to list the available types.
                "#,
                argument,
                renderer.style(Syntax::Genus, genus)
            )
            .trim_ascii()
            .to_string(),
        ),
        ParsingError::InvalidType(_, argument, genus, reason) => (
            format!("Invalid configuration for type '{}'", genus),
            format!(
                "The type of argument '{}' was rejected: {}.",
                argument, reason
            ),
        ),
        ParsingError::ArgumentRoot(_, name) => (
            "Argument at the top level".to_string(),
            format!(
                r#"
The top-level command must be a literal name, but '{}' is declared as an
argument. Arguments can only appear beneath a command.
                "#,
                name
            )
            .trim_ascii()
            .to_string(),
        ),
        ParsingError::DuplicateSibling(_, parent, name) => (
            format!("Duplicate '{}'", name),
            format!(
                r#"
'{}' has already been declared beneath '{}'. Literal and argument names have to
be unique among the nodes sharing a parent.
                "#,
                name, parent
            )
            .trim_ascii()
            .to_string(),
        ),
    }
}
