use super::config::{flag, text, text_or};
use super::normalize_command;
use crate::workflow::ConfigMap;

pub const DEFAULT_DOMAIN: &str = "example.com";

#[derive(Debug, Clone, PartialEq)]
pub struct SubfinderConfig {
    pub domain: String,
    pub sources: Option<String>,
    pub recursive: bool,
    pub threads: Option<String>,
    pub timeout: Option<String>,
    pub output: Option<String>,
}

impl SubfinderConfig {
    pub fn from_config(config: &ConfigMap) -> Self {
        Self {
            domain: text_or(config, "domain", DEFAULT_DOMAIN),
            sources: text(config, "sources"),
            recursive: flag(config, "recursive"),
            threads: text(config, "threads"),
            timeout: text(config, "timeout"),
            output: text(config, "output"),
        }
    }

    pub fn command(&self) -> String {
        let opt = |name: &str, value: &Option<String>| {
            value
                .as_ref()
                .map(|v| format!("{} {}", name, v))
                .unwrap_or_default()
        };
        normalize_command(&format!(
            "subfinder -d {} {} {} {} {} {}",
            self.domain,
            opt("-sources", &self.sources),
            if self.recursive { "-recursive" } else { "" },
            opt("-t", &self.threads),
            opt("-timeout", &self.timeout),
            opt("-o", &self.output),
        ))
    }
}
