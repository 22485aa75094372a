use super::config::{dashed, first_token, text, text_or};
use super::normalize_command;
use crate::workflow::ConfigMap;

pub const DEFAULT_TARGET: &str = "TARGET";
pub const DEFAULT_SCAN_TYPE: &str = "-sS";
pub const DEFAULT_TIMING: &str = "-T3";
pub const DEFAULT_PORTS: &str = "1-1000";
/// File name token passed to every `-o*` output flag.
pub const OUTPUT_FILE: &str = "output";

/// Output format selected on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Normal,
    Xml,
    Grepable,
    All,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "xml" => OutputFormat::Xml,
            "grepable" => OutputFormat::Grepable,
            "all" => OutputFormat::All,
            _ => OutputFormat::Normal,
        }
    }

    /// Normal output goes to stdout and needs no flag.
    pub fn flag(self) -> Option<&'static str> {
        match self {
            OutputFormat::Normal => None,
            OutputFormat::Xml => Some("-oX"),
            OutputFormat::Grepable => Some("-oG"),
            OutputFormat::All => Some("-oA"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NmapConfig {
    pub target: String,
    pub scan_type: String,
    pub timing: String,
    pub scripts: Option<String>,
    pub ports: String,
    pub output: OutputFormat,
}

impl NmapConfig {
    pub fn from_config(config: &ConfigMap) -> Self {
        Self {
            target: text_or(config, "target", DEFAULT_TARGET),
            scan_type: first_token(config, "scan_type")
                .map(|t| dashed(&t))
                .unwrap_or_else(|| DEFAULT_SCAN_TYPE.to_string()),
            timing: first_token(config, "timing")
                .map(|t| dashed(&t))
                .unwrap_or_else(|| DEFAULT_TIMING.to_string()),
            scripts: text(config, "scripts"),
            ports: text_or(config, "ports", DEFAULT_PORTS),
            output: text(config, "output")
                .map(|v| OutputFormat::parse(&v))
                .unwrap_or_default(),
        }
    }

    pub fn command(&self) -> String {
        let scripts = self
            .scripts
            .as_ref()
            .map(|s| format!("--script={}", s))
            .unwrap_or_default();
        let output = self
            .output
            .flag()
            .map(|flag| format!("{} {}", flag, OUTPUT_FILE))
            .unwrap_or_default();
        normalize_command(&format!(
            "nmap {} {} {} {} {} {}",
            self.scan_type, self.timing, scripts, self.ports, self.target, output
        ))
    }
}
