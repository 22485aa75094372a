use super::config::{flag, text, text_or};
use super::normalize_command;
use crate::workflow::ConfigMap;

pub const DEFAULT_URL: &str = "https://example.com";
pub const DEFAULT_WORDLIST: &str = "/usr/share/wordlists/dirb/common.txt";
pub const DEFAULT_STATUS_CODES: &str = "200,204,301,302,307,401,403";

#[derive(Debug, Clone, PartialEq)]
pub struct DirsearchConfig {
    pub url: String,
    pub wordlist: String,
    pub extensions: Option<String>,
    pub threads: Option<String>,
    pub recursive: bool,
    pub status_codes: String,
}

impl DirsearchConfig {
    pub fn from_config(config: &ConfigMap) -> Self {
        Self {
            url: text_or(config, "url", DEFAULT_URL),
            wordlist: text_or(config, "wordlist", DEFAULT_WORDLIST),
            extensions: text(config, "extensions"),
            threads: text(config, "threads"),
            recursive: flag(config, "recursive"),
            status_codes: text_or(config, "status_codes", DEFAULT_STATUS_CODES),
        }
    }

    pub fn command(&self) -> String {
        let extensions = self
            .extensions
            .as_ref()
            .map(|e| format!("-e {}", e))
            .unwrap_or_default();
        let threads = self
            .threads
            .as_ref()
            .map(|t| format!("-t {}", t))
            .unwrap_or_default();
        normalize_command(&format!(
            "python3 dirsearch.py -u {} -w {} {} {} {} --status-codes {}",
            self.url,
            self.wordlist,
            extensions,
            threads,
            if self.recursive { "--recursive" } else { "" },
            self.status_codes,
        ))
    }
}
