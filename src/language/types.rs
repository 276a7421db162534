//! Types representing a command tree, the product of reading a commodore
//! file.

use std::fmt;

/// A configuration value attached to an argument type by the parser that
/// produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Boolean(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Boolean(value) => write!(f, "{}", value),
            Value::Integer(value) => write!(f, "{}", value),
            Value::Float(value) => write!(f, "{}", value),
            Value::Text(value) => write!(f, "{}", value),
        }
    }
}

/// Typed argument descriptor. The identity names the type; the properties
/// are whatever configuration the registered parser chose to record. None
/// of this is interpreted while building the tree.
#[derive(Debug, Clone, PartialEq)]
pub struct ArgumentType {
    identity: String,
    properties: Vec<(String, Value)>,
}

impl ArgumentType {
    pub fn new(identity: impl Into<String>) -> ArgumentType {
        ArgumentType {
            identity: identity.into(),
            properties: Vec::new(),
        }
    }

    /// Attach a configuration property, replacing any earlier value under
    /// the same key.
    pub fn with(mut self, key: impl Into<String>, value: Value) -> ArgumentType {
        let key = key.into();
        match self
            .properties
            .iter_mut()
            .find(|(existing, _)| *existing == key)
        {
            Some(entry) => entry.1 = value,
            None => self
                .properties
                .push((key, value)),
        }
        self
    }

    pub fn identity(&self) -> &str {
        &self.identity
    }

    pub fn properties(&self) -> &[(String, Value)] {
        &self.properties
    }

    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties
            .iter()
            .find_map(|(k, v)| if k == key { Some(v) } else { None })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    name: String,
    children: Vec<CommandNode>,
}

impl Literal {
    pub fn new(name: impl Into<String>, children: Vec<CommandNode>) -> Literal {
        Literal {
            name: name.into(),
            children,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn children(&self) -> &[CommandNode] {
        &self.children
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
    name: String,
    specifier: String,
    argument_type: ArgumentType,
    children: Vec<CommandNode>,
}

impl Argument {
    pub fn new(
        name: impl Into<String>,
        specifier: impl Into<String>,
        argument_type: ArgumentType,
        children: Vec<CommandNode>,
    ) -> Argument {
        Argument {
            name: name.into(),
            specifier: specifier.into(),
            argument_type,
            children,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The type specifier text exactly as it was declared, type name
    /// followed by any configuration.
    pub fn specifier(&self) -> &str {
        &self.specifier
    }

    pub fn argument_type(&self) -> &ArgumentType {
        &self.argument_type
    }

    pub fn children(&self) -> &[CommandNode] {
        &self.children
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CommandNode {
    Literal(Literal),
    Argument(Argument),
}

impl CommandNode {
    pub fn literal(name: impl Into<String>, children: Vec<CommandNode>) -> CommandNode {
        CommandNode::Literal(Literal::new(name, children))
    }

    pub fn argument(
        name: impl Into<String>,
        specifier: impl Into<String>,
        argument_type: ArgumentType,
        children: Vec<CommandNode>,
    ) -> CommandNode {
        CommandNode::Argument(Argument::new(name, specifier, argument_type, children))
    }

    pub fn name(&self) -> &str {
        match self {
            CommandNode::Literal(literal) => literal.name(),
            CommandNode::Argument(argument) => argument.name(),
        }
    }

    pub fn children(&self) -> &[CommandNode] {
        match self {
            CommandNode::Literal(literal) => literal.children(),
            CommandNode::Argument(argument) => argument.children(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children()
            .is_empty()
    }

    /// How this node reads in a usage line: literals as themselves,
    /// arguments in angle brackets.
    pub fn usage(&self) -> String {
        match self {
            CommandNode::Literal(literal) => literal
                .name()
                .to_string(),
            CommandNode::Argument(argument) => format!("<{}>", argument.name()),
        }
    }
}

/// The result of reading one commodore file: a single literal at the root
/// owning everything beneath it.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandTree {
    root: Literal,
}

impl CommandTree {
    pub fn new(root: Literal) -> CommandTree {
        CommandTree { root }
    }

    pub fn root(&self) -> &Literal {
        &self.root
    }

    pub fn into_root(self) -> Literal {
        self.root
    }

    /// Total number of nodes, the root included.
    pub fn count(&self) -> usize {
        let mut pending: Vec<&CommandNode> = self
            .root
            .children()
            .iter()
            .collect();
        let mut count = 1;

        while let Some(node) = pending.pop() {
            count += 1;
            pending.extend(node.children());
        }
        count
    }

    /// Number of levels; a lone root has depth 1.
    pub fn depth(&self) -> usize {
        let mut pending: Vec<(&CommandNode, usize)> = self
            .root
            .children()
            .iter()
            .map(|node| (node, 2))
            .collect();
        let mut depth = 1;

        while let Some((node, level)) = pending.pop() {
            depth = depth.max(level);
            pending.extend(
                node.children()
                    .iter()
                    .map(|child| (child, level + 1)),
            );
        }
        depth
    }

    /// Usage line for every node in the tree, depth first in declaration
    /// order, starting with the root.
    pub fn paths(&self) -> Vec<String> {
        let root = self
            .root
            .name()
            .to_string();

        // children are pushed in reverse so they come off in order
        let mut pending: Vec<(&CommandNode, String)> = self
            .root
            .children()
            .iter()
            .rev()
            .map(|node| (node, root.clone()))
            .collect();
        let mut paths = vec![root];

        while let Some((node, prefix)) = pending.pop() {
            let path = format!("{} {}", prefix, node.usage());
            pending.extend(
                node.children()
                    .iter()
                    .rev()
                    .map(|child| (child, path.clone())),
            );
            paths.push(path);
        }
        paths
    }
}
