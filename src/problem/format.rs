use std::path::Path;

use commodore::formatting::Render;
use commodore::language::LoadingError;
use commodore::parsing::ParsingError;
use owo_colors::OwoColorize;

use super::messages::generate_error_message;

// Leading `error: file:line:column` shared by both the long and short forms.
fn headline(filename: &Path, error: &ParsingError, problem: &str) -> String {
    let position = error.position();
    format!(
        "{}: {}:{}:{} {}",
        "error".bright_red(),
        filename.display(),
        position.line,
        position.column,
        problem.bold()
    )
}

// The offending line, preceded by the one above it when there is one, with
// a caret under the column where the problem was found.
fn excerpt(source: &str, error: &ParsingError) -> String {
    let position = error.position();
    let lines: Vec<&str> = source
        .lines()
        .collect();

    let width = position
        .line
        .to_string()
        .len()
        .max(3);
    let gutter = '|'.bright_blue();

    let mut result = format!("{:width$} {}\n", "", gutter);

    let first = position
        .line
        .saturating_sub(1)
        .max(1);
    for number in first..=position.line {
        let code = lines
            .get(number - 1)
            .copied()
            .unwrap_or("");
        result.push_str(&format!(
            "{:>width$} {} {}\n",
            number.bright_blue(),
            gutter,
            code
        ));
    }

    result.push_str(&format!(
        "{:width$} {} {:>column$}",
        "",
        gutter,
        '^'.bright_red(),
        column = position.column
    ));
    result
}

/// Format a parsing error with full details, quoting the source around
/// where it went wrong.
pub fn full_parsing_error(
    error: &ParsingError,
    filename: &Path,
    source: &str,
    renderer: &impl Render,
) -> String {
    let (problem, details) = generate_error_message(error, renderer);

    format!(
        "{}\n\n{}\n\n{}",
        headline(filename, error, &problem),
        excerpt(source, error),
        details
    )
}

/// Format a parsing error as a single line.
pub fn concise_parsing_error(
    error: &ParsingError,
    filename: &Path,
    renderer: &impl Render,
) -> String {
    let (problem, _) = generate_error_message(error, renderer);
    headline(filename, error, &problem)
}

pub fn concise_loading_error(error: &LoadingError<'_>) -> String {
    let message = format!(
        "{}: {}: {}",
        "error".bright_red(),
        error
            .filename
            .display(),
        error
            .problem
            .bold()
    );

    match error
        .details
        .as_str()
    {
        "" => message,
        details => format!("{} ({})", message, details),
    }
}
