use std::io::IsTerminal;
use std::path::Path;

use clap::{Arg, ArgAction, Command};
use owo_colors::OwoColorize;
use tracing::{debug, Level};

use commodore::formatting::{self, Identity, Terminal};
use commodore::parsing;
use commodore::Reader;

mod output;
mod problem;

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let matches = Command::new("commodore")
        .version(VERSION)
        .propagate_version(true)
        .about("Compiler for commodore command tree files.")
        .disable_help_subcommand(true)
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit diagnostic logging to standard error."),
        )
        .subcommand(
            Command::new("check")
                .about("Read the given command file and describe the tree it declares")
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the command tree to check, or - for standard input."),
                ),
        )
        .subcommand(
            Command::new("format")
                .about("Code format the given command file")
                .arg(
                    Arg::new("raw-control-chars")
                        .short('R')
                        .long("raw-control-chars")
                        .action(ArgAction::SetTrue)
                        .help("Emit ANSI escape codes for syntax highlighting even if output is redirected to a pipe or file."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the command tree to format, or - for standard input."),
                ),
        )
        .subcommand(Command::new("types").about("List the argument types available to command files"))
        .get_matches();

    let level = if matches.get_flag("debug") {
        Level::DEBUG
    } else {
        Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let reader = Reader::standard();

    match matches.subcommand() {
        Some(("check", submatches)) => {
            let filename = submatches
                .get_one::<String>("filename")
                .map(Path::new)
                .unwrap_or(Path::new("-"));

            debug!(?filename, "Checking");

            let content = load(filename);
            let tree = match reader.parse_str(&content) {
                Ok(tree) => tree,
                Err(error) => {
                    eprintln!(
                        "{}",
                        problem::full_parsing_error(&error, filename, &content, &Terminal)
                    );
                    std::process::exit(1);
                }
            };

            match output::summary(filename, &tree) {
                Ok(summary) => print!("{}", summary),
                Err(error) => {
                    eprintln!("{}: {}", "error".bright_red(), error);
                    std::process::exit(1);
                }
            }
        }
        Some(("format", submatches)) => {
            let filename = submatches
                .get_one::<String>("filename")
                .map(Path::new)
                .unwrap_or(Path::new("-"));

            debug!(?filename, "Formatting");

            let content = load(filename);
            let tree = match reader.parse_str(&content) {
                Ok(tree) => tree,
                Err(error) => {
                    eprintln!(
                        "{}",
                        problem::concise_parsing_error(&error, filename, &Terminal)
                    );
                    std::process::exit(1);
                }
            };

            let raw = submatches.get_flag("raw-control-chars");
            let result = if raw || std::io::stdout().is_terminal() {
                formatting::render(&Terminal, &tree)
            } else {
                formatting::render(&Identity, &tree)
            };

            print!("{}", result);
        }
        Some(("types", _)) => {
            for name in reader
                .registry()
                .names()
            {
                println!("{}", name);
            }
        }
        Some(_) => {
            println!("No valid subcommand was used")
        }
        None => {
            println!("usage: commodore [COMMAND] ...");
            println!("Try '--help' for more information.");
        }
    }
}

fn load(filename: &Path) -> String {
    match parsing::load(filename) {
        Ok(content) => content,
        Err(error) => {
            eprintln!("{}", problem::concise_loading_error(&error));
            std::process::exit(1);
        }
    }
}
