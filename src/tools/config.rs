use super::dirsearch::DirsearchConfig;
use super::ghauri::GhauriConfig;
use super::nmap::NmapConfig;
use super::subfinder::SubfinderConfig;
use crate::workflow::{ConfigMap, ToolNode};
use serde::{Deserialize, Serialize};

/// The tools with a built-in command template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolKind {
    Nmap,
    Subfinder,
    Dirsearch,
    Ghauri,
}

impl ToolKind {
    pub const ALL: [ToolKind; 4] = [
        ToolKind::Nmap,
        ToolKind::Subfinder,
        ToolKind::Dirsearch,
        ToolKind::Ghauri,
    ];

    /// Case-insensitive lookup of a tool name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name.trim()))
    }

    pub fn name(self) -> &'static str {
        match self {
            ToolKind::Nmap => "nmap",
            ToolKind::Subfinder => "subfinder",
            ToolKind::Dirsearch => "dirsearch",
            ToolKind::Ghauri => "ghauri",
        }
    }
}

/// Typed configuration of one node, discriminated by tool.
///
/// Every variant owns its defaults, so building a command never falls back to
/// raw map lookups.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolConfig {
    Nmap(NmapConfig),
    Subfinder(SubfinderConfig),
    Dirsearch(DirsearchConfig),
    Ghauri(GhauriConfig),
    Unknown { name: String },
}

impl ToolConfig {
    pub fn from_node(node: &ToolNode) -> Self {
        match ToolKind::from_name(&node.name) {
            Some(kind) => Self::for_kind(kind, &node.config),
            None => ToolConfig::Unknown {
                name: node.name.clone(),
            },
        }
    }

    pub fn for_kind(kind: ToolKind, config: &ConfigMap) -> Self {
        match kind {
            ToolKind::Nmap => ToolConfig::Nmap(NmapConfig::from_config(config)),
            ToolKind::Subfinder => ToolConfig::Subfinder(SubfinderConfig::from_config(config)),
            ToolKind::Dirsearch => ToolConfig::Dirsearch(DirsearchConfig::from_config(config)),
            ToolKind::Ghauri => ToolConfig::Ghauri(GhauriConfig::from_config(config)),
        }
    }

    pub fn kind(&self) -> Option<ToolKind> {
        match self {
            ToolConfig::Nmap(_) => Some(ToolKind::Nmap),
            ToolConfig::Subfinder(_) => Some(ToolKind::Subfinder),
            ToolConfig::Dirsearch(_) => Some(ToolKind::Dirsearch),
            ToolConfig::Ghauri(_) => Some(ToolKind::Ghauri),
            ToolConfig::Unknown { .. } => None,
        }
    }

    /// Renders the single-line command for this configuration.
    pub fn command(&self) -> String {
        match self {
            ToolConfig::Nmap(c) => c.command(),
            ToolConfig::Subfinder(c) => c.command(),
            ToolConfig::Dirsearch(c) => c.command(),
            ToolConfig::Ghauri(c) => c.command(),
            ToolConfig::Unknown { name } => super::placeholder_command(name),
        }
    }
}

// Lookup helpers shared by the per-tool `from_config` constructors.

/// The rendered value of `key`, if it is set.
pub(super) fn text(config: &ConfigMap, key: &str) -> Option<String> {
    config
        .get(key)
        .filter(|v| v.is_set())
        .map(|v| v.to_string())
}

/// The rendered value of `key`, or `default` when unset.
pub(super) fn text_or(config: &ConfigMap, key: &str, default: &str) -> String {
    text(config, key).unwrap_or_else(|| default.to_string())
}

/// Presence flag: `true` when `key` is set.
pub(super) fn flag(config: &ConfigMap, key: &str) -> bool {
    config.get(key).is_some_and(|v| v.is_set())
}

/// The first whitespace-separated token of `key`, so that a select option such
/// as `"T4 (Aggressive)"` yields `"T4"`.
pub(super) fn first_token(config: &ConfigMap, key: &str) -> Option<String> {
    text(config, key).and_then(|v| v.split_whitespace().next().map(str::to_string))
}

/// Prefixes a single dash when a flag token was entered without one.
pub(super) fn dashed(token: &str) -> String {
    if token.starts_with('-') {
        token.to_string()
    } else {
        format!("-{}", token)
    }
}
