use crate::tags::center::DEFAULT_CHAT_WIDTH;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fs, path::Path};

/// Settings of a [`FormattingParser`](crate::FormattingParser), usually read from a JSON file.
/// Missing fields get their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormattingConfig {
    /// Characters per chat line assumed by `<center>`
    pub center_width: usize,
    /// Closing tags must name the innermost open tag. Mismatches are logged and kept as text.
    pub strict_tags: bool,
    /// Honour `&` color codes inside text
    pub legacy_codes: bool,
    /// Static `{key}` placeholders
    pub placeholders: HashMap<String, String>,
    /// Extra emojis, or replacements for the built-in ones
    pub emojis: HashMap<String, String>,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            center_width: DEFAULT_CHAT_WIDTH,
            strict_tags: false,
            legacy_codes: false,
            placeholders: HashMap::new(),
            emojis: HashMap::new(),
        }
    }
}

impl FormattingConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Invalid formatting config")
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Couldn't read config file {}", path.display()))?;

        Self::from_json(&raw).with_context(|| format!("In config file {}", path.display()))
    }
}
