//! Registry of argument types.
//!
//! Argument declarations name their type by a word at the start of the
//! type specifier; whatever follows is configuration for that type. The
//! registry maps each such word to a function producing an
//! [`ArgumentType`] from the configuration text. Entries are accumulated in
//! a [`RegistryBuilder`] and then frozen into a [`Registry`] which never
//! changes again and can be shared freely between threads.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::language::ArgumentType;

mod brigadier;
mod minecraft;

pub use brigadier::Brigadier;
pub use minecraft::Minecraft;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeError {
    /// No parser is registered under this type name.
    Unknown(String),
    /// The parser for the named type rejected its configuration.
    Invalid(String, String),
}

impl TypeError {
    pub fn invalid(name: &str, reason: impl Into<String>) -> TypeError {
        TypeError::Invalid(name.to_string(), reason.into())
    }
}

impl fmt::Display for TypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeError::Unknown(name) => write!(f, "unknown argument type '{}'", name),
            TypeError::Invalid(name, reason) => write!(f, "invalid '{}': {}", name, reason),
        }
    }
}

impl std::error::Error for TypeError {}

/// A family of argument types handled by one parser, such as the primitive
/// types or the types of a particular game.
pub trait ArgumentTypeParser: Send + Sync {
    /// The type names this parser answers to.
    fn names(&self) -> Vec<String>;

    /// Produce a descriptor for the type `name` from its configuration
    /// text, which is empty when the declaration gave none.
    fn parse(&self, name: &str, configuration: &str) -> Result<ArgumentType, TypeError>;
}

type Entry = Arc<dyn Fn(&str) -> Result<ArgumentType, TypeError> + Send + Sync>;

#[derive(Default)]
pub struct RegistryBuilder {
    entries: HashMap<String, Entry>,
}

impl RegistryBuilder {
    pub fn new() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Register a single type. A later registration under the same name
    /// replaces this one.
    pub fn register<F>(mut self, name: impl Into<String>, function: F) -> RegistryBuilder
    where
        F: Fn(&str) -> Result<ArgumentType, TypeError> + Send + Sync + 'static,
    {
        let name = name.into();
        trace!("Registering argument type {}", name);
        self.entries
            .insert(name, Arc::new(function));
        self
    }

    /// Register every name a family answers to, replacing any earlier
    /// entries with the same names.
    pub fn with_argument_type_parser(
        mut self,
        parser: impl ArgumentTypeParser + 'static,
    ) -> RegistryBuilder {
        let parser = Arc::new(parser);
        let names = parser.names();

        debug!("Registering {} argument types", names.len());

        for name in names {
            let parser = Arc::clone(&parser);
            let key = name.clone();
            self.entries
                .insert(
                    key,
                    Arc::new(move |configuration: &str| parser.parse(&name, configuration)),
                );
        }
        self
    }

    pub fn build(self) -> Registry {
        Registry {
            entries: Arc::new(self.entries),
        }
    }
}

/// Frozen set of argument types. Cloning is cheap and shares the entries.
#[derive(Clone, Default)]
pub struct Registry {
    entries: Arc<HashMap<String, Entry>>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Look up `name` and hand it the configuration text.
    pub fn resolve(&self, name: &str, configuration: &str) -> Result<ArgumentType, TypeError> {
        match self
            .entries
            .get(name)
        {
            Some(function) => function(configuration),
            None => Err(TypeError::Unknown(name.to_string())),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries
            .contains_key(name)
    }

    /// Registered type names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .entries
            .keys()
            .map(String::as_str)
            .collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.entries
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries
            .is_empty()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("names", &self.names())
            .finish()
    }
}

/// Split configuration text into whitespace separated words.
pub(crate) fn words(configuration: &str) -> Vec<&str> {
    configuration
        .split_whitespace()
        .collect()
}
