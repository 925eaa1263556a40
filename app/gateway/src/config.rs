//! Gateway configuration, loaded from TOML.

use std::{path::Path, time::Duration};

use anyhow::{Context, Result, bail};
use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// Default completion API base.
pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";

/// Persona instruction prepended to every conversation unless the config
/// overrides it.
pub const DEFAULT_PERSONA: &str = r#"You are a highly capable, warm, and premium personal assistant.
Your goal is to make the user's life easier by providing clear, helpful, and insightful answers.

Key personality traits:
- Tone: conversational, polite, deeply empathetic, and human-like. Avoid robotic phrases like "As an AI...".
- Style: well-structured and easy to read. Use bullet points, bold text, and paragraphs appropriately.
- Vibe: imagine you are a high-end concierge or a trusted chief of staff. You are smart, professional, but very approachable.

Always consider the conversation history provided to you to give context-aware responses."#;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    pub persona: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Usually populated via `${OPENROUTER_API_KEY}` in the config file.
    pub api_key: String,
    pub base_url: String,
    pub timeout_secs: u64,
    /// Candidate models, tried in order until one answers.
    pub models: Vec<CompactString>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            upstream: UpstreamConfig::default(),
            persona: DEFAULT_PERSONA.to_string(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 60,
            models: vec![
                CompactString::from("meta-llama/llama-3.3-70b-instruct:free"),
                CompactString::from("mistralai/mistral-small-3.1-24b-instruct:free"),
            ],
        }
    }
}

impl GatewayConfig {
    /// Parse from TOML text, expanding `${ENV_VAR}` references first.
    pub fn from_toml(text: &str) -> Result<Self> {
        let expanded = expand_env_vars(text);
        toml::from_str(&expanded).context("invalid gateway config")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config from {}", path.display()))?;
        Self::from_toml(&text)
    }

    /// Address the HTTP server binds, `host:port`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Reject configurations that could not serve a single request.
    pub fn validate(&self) -> Result<()> {
        if self.upstream.models.is_empty() {
            bail!("config lists no candidate models");
        }
        if self.upstream.api_key.trim().is_empty() {
            bail!("upstream api key is empty; set OPENROUTER_API_KEY or upstream.api_key");
        }
        Ok(())
    }
}

impl UpstreamConfig {
    /// Full completion endpoint URL.
    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

const SCAFFOLD: &str = r#"# concierge gateway configuration

# Persona instruction prepended to every conversation. A top-level key, so it
# must stay above the [server] table. Uncomment to override the built-in
# concierge persona.
# persona = "You are a terse assistant."

[server]
host = "0.0.0.0"
port = 5000

[upstream]
# ${VAR} references are expanded from the environment at load time.
api_key = "${OPENROUTER_API_KEY}"
base_url = "https://openrouter.ai/api/v1"
timeout_secs = 60
# Tried in order; the first model to answer wins.
models = [
    "meta-llama/llama-3.3-70b-instruct:free",
    "mistralai/mistral-small-3.1-24b-instruct:free",
]
"#;

/// Write the default config template to `path`, creating parent directories
/// as needed.
pub fn scaffold(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(path, SCAFFOLD).with_context(|| format!("writing {}", path.display()))
}

/// Expand `${VAR}` references from the process environment. Unset variables
/// expand to an empty string; an unterminated reference is kept verbatim.
pub fn expand_env_vars(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '$' && chars.peek() == Some(&'{') {
            chars.next();
            let mut name = String::new();
            let mut closed = false;
            for c in chars.by_ref() {
                if c == '}' {
                    closed = true;
                    break;
                }
                name.push(c);
            }
            if closed {
                if let Ok(value) = std::env::var(&name) {
                    out.push_str(&value);
                }
            } else {
                out.push_str("${");
                out.push_str(&name);
            }
        } else {
            out.push(c);
        }
    }
    out
}
