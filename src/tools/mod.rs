//! Command synthesis: one tool node in, one shell command out.

use crate::workflow::{ConfigMap, ToolNode};
use ahash::AHashMap;
use itertools::Itertools;

pub mod config;
pub mod dirsearch;
pub mod ghauri;
pub mod nmap;
pub mod subfinder;

pub use config::{ToolConfig, ToolKind};

/// Defines the contract for turning a node's configuration into a command line.
///
/// Adding a tool means adding one implementation and registering it on a
/// `Synthesizer`; the ordering step is unaffected.
pub trait CommandTemplate: Send + Sync {
    /// The tool name this template answers to. Matched case-insensitively.
    fn tool_name(&self) -> &str;
    fn render(&self, config: &ConfigMap) -> String;
}

/// Template backed by one of the typed built-in configurations.
struct BuiltinTemplate(ToolKind);

impl CommandTemplate for BuiltinTemplate {
    fn tool_name(&self) -> &str {
        self.0.name()
    }

    fn render(&self, config: &ConfigMap) -> String {
        ToolConfig::for_kind(self.0, config).command()
    }
}

fn register_default_templates(registry: &mut AHashMap<String, Box<dyn CommandTemplate>>) {
    for kind in ToolKind::ALL {
        registry.insert(kind.name().to_string(), Box::new(BuiltinTemplate(kind)));
    }
}

fn create_template_by_name(name: &str) -> Option<Box<dyn CommandTemplate>> {
    ToolKind::from_name(name).map(|kind| Box::new(BuiltinTemplate(kind)) as Box<dyn CommandTemplate>)
}

/// A registry of command templates keyed by lowercase tool name.
pub struct Synthesizer {
    registry: AHashMap<String, Box<dyn CommandTemplate>>,
}

impl Default for Synthesizer {
    fn default() -> Self {
        let mut registry: AHashMap<String, Box<dyn CommandTemplate>> = AHashMap::new();
        register_default_templates(&mut registry);
        Self { registry }
    }
}

impl Synthesizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a template, replacing any existing one for the same tool name.
    pub fn with_template(mut self, template: Box<dyn CommandTemplate>) -> Self {
        self.registry
            .insert(template.tool_name().to_lowercase(), template);
        self
    }

    /// Lets nodes named `alias` render with the built-in template for `builtin`.
    /// Unknown built-in names are ignored.
    pub fn with_alias(mut self, alias: &str, builtin: &str) -> Self {
        if let Some(template) = create_template_by_name(builtin) {
            self.registry.insert(alias.to_lowercase(), template);
        }
        self
    }

    pub fn knows(&self, tool_name: &str) -> bool {
        self.registry.contains_key(&tool_name.trim().to_lowercase())
    }

    /// Renders the command for `node`. Unregistered tools yield a placeholder comment.
    pub fn synthesize(&self, node: &ToolNode) -> String {
        match self.registry.get(&node.name.trim().to_lowercase()) {
            Some(template) => normalize_command(&template.render(&node.config)),
            None => placeholder_command(&node.name),
        }
    }
}

/// Renders the command for `node` using the built-in templates only.
///
/// Pure: the same node always yields the same string.
pub fn synthesize(node: &ToolNode) -> String {
    ToolConfig::from_node(node).command()
}

/// Collapses whitespace runs to single spaces and trims both ends.
pub fn normalize_command(command: &str) -> String {
    command.split_whitespace().join(" ")
}

pub(crate) fn placeholder_command(tool_name: &str) -> String {
    format!("# {} - Configuration needed", tool_name)
}
