use super::config::{first_token, text, text_or};
use super::normalize_command;
use crate::workflow::ConfigMap;

pub const DEFAULT_URL: &str = "http://example.com/vuln.php?id=1";
/// Medium, from the `1 (Low)` .. `4 (Critical)` scale.
pub const DEFAULT_LEVEL: &str = "2";
/// Boolean, error, union, stacked, time and inline techniques.
pub const DEFAULT_TECHNIQUE: &str = "BEUSTQ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
}

impl HttpMethod {
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("post") {
            HttpMethod::Post
        } else {
            HttpMethod::Get
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GhauriConfig {
    pub url: String,
    pub method: HttpMethod,
    /// Request body, only sent with POST.
    pub data: Option<String>,
    pub level: String,
    pub risk: Option<String>,
    pub technique: String,
}

impl GhauriConfig {
    pub fn from_config(config: &ConfigMap) -> Self {
        Self {
            url: text_or(config, "url", DEFAULT_URL),
            method: text(config, "method")
                .map(|m| HttpMethod::parse(&m))
                .unwrap_or_default(),
            data: text(config, "data"),
            level: first_token(config, "level").unwrap_or_else(|| DEFAULT_LEVEL.to_string()),
            risk: first_token(config, "risk"),
            technique: first_token(config, "technique")
                .unwrap_or_else(|| DEFAULT_TECHNIQUE.to_string()),
        }
    }

    pub fn command(&self) -> String {
        let post = match self.method {
            HttpMethod::Post => match &self.data {
                Some(data) => format!("-X POST --data \"{}\"", data),
                None => "-X POST".to_string(),
            },
            HttpMethod::Get => String::new(),
        };
        let risk = self
            .risk
            .as_ref()
            .map(|r| format!("--risk {}", r))
            .unwrap_or_default();
        normalize_command(&format!(
            "ghauri -u \"{}\" {} --level {} {} --technique {}",
            self.url, post, self.level, risk, self.technique
        ))
    }
}
