//! Entry point for reading commodore files into command trees.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::OnceLock;

use tracing::{debug, info};

use crate::language::{ArgumentType, CommandTree, ReadError};
use crate::parsing::{self, ParsingError};
use crate::registry::{
    ArgumentTypeParser, Brigadier, Minecraft, Registry, RegistryBuilder, TypeError,
};

/// Reads command trees using a fixed vocabulary of argument types.
///
/// A `Reader` holds nothing but its frozen [`Registry`], so one instance
/// can serve any number of parses, including from several threads at once.
///
/// ```ignore
/// let reader = Reader::builder()
///     .with_argument_type_parser(Brigadier)
///     .register("percentage", |_| Ok(ArgumentType::new("percentage")))
///     .build();
///
/// let tree = reader.parse_path("commands/give.commodore")?;
/// ```
#[derive(Debug, Clone)]
pub struct Reader {
    registry: Registry,
}

impl Reader {
    pub fn builder() -> ReaderBuilder {
        ReaderBuilder::new()
    }

    /// Reader with both default families of argument types: the generic
    /// primitives, then the game's own types.
    pub fn standard() -> &'static Reader {
        static STANDARD: OnceLock<Reader> = OnceLock::new();

        STANDARD.get_or_init(|| {
            Reader::builder()
                .with_argument_type_parser(Brigadier)
                .with_argument_type_parser(Minecraft)
                .build()
        })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Read the stream to its end and parse what it held. Either the whole
    /// tree comes back or nothing does.
    pub fn parse(&self, mut input: impl Read) -> Result<CommandTree, ReadError> {
        let mut content = String::new();
        input.read_to_string(&mut content)?;

        let tree = self.parse_str(&content)?;
        Ok(tree)
    }

    pub fn parse_str(&self, content: &str) -> Result<CommandTree, ParsingError> {
        parsing::parse(content, &self.registry)
    }

    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<CommandTree, ReadError> {
        self.parse(bytes)
    }

    pub fn parse_path(&self, path: impl AsRef<Path>) -> Result<CommandTree, ReadError> {
        let path = path.as_ref();
        info!("Reading {}", path.display());

        let file = File::open(path)?;
        self.parse_file(file)
    }

    /// Parse the contents of an open file, which is closed again before
    /// returning.
    pub fn parse_file(&self, file: File) -> Result<CommandTree, ReadError> {
        self.parse(BufReader::new(file))
    }
}

/// Accumulates argument types for a [`Reader`]. Later registrations for
/// the same type name replace earlier ones.
#[derive(Default)]
pub struct ReaderBuilder {
    registry: RegistryBuilder,
}

impl ReaderBuilder {
    pub fn new() -> ReaderBuilder {
        ReaderBuilder::default()
    }

    pub fn with_argument_type_parser(
        mut self,
        parser: impl ArgumentTypeParser + 'static,
    ) -> ReaderBuilder {
        self.registry = self
            .registry
            .with_argument_type_parser(parser);
        self
    }

    pub fn register<F>(mut self, name: impl Into<String>, function: F) -> ReaderBuilder
    where
        F: Fn(&str) -> Result<ArgumentType, TypeError> + Send + Sync + 'static,
    {
        self.registry = self
            .registry
            .register(name, function);
        self
    }

    pub fn build(self) -> Reader {
        let registry = self
            .registry
            .build();
        debug!("Built reader with {} argument types", registry.len());
        Reader { registry }
    }
}

impl From<Registry> for Reader {
    fn from(registry: Registry) -> Self {
        Reader { registry }
    }
}
