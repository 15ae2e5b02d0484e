//! `{placeholder}` substitution, done before any tag parsing

use crate::player::Player;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::{borrow::Cow, collections::HashMap, fmt};

static PLACEHOLDER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([A-Za-z0-9_.\-]+)\}").expect("placeholder pattern is valid"));

pub trait PlaceholderResolver: Send + Sync + fmt::Debug {
    /// Replaces every placeholder this resolver knows. `player` is `None` when there's nobody
    /// to render for, like the server list MOTD.
    fn substitute<'a>(&self, text: &'a str, player: Option<&Player>) -> Cow<'a, str>;
}

/// Leaves everything as it is
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPlaceholders;

impl PlaceholderResolver for NoPlaceholders {
    fn substitute<'a>(&self, text: &'a str, _player: Option<&Player>) -> Cow<'a, str> {
        Cow::Borrowed(text)
    }
}

/// The player placeholders plus a map of static values (`{server_name}` and such).
/// Anything unknown is left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuiltinPlaceholders {
    values: HashMap<String, String>,
}

impl BuiltinPlaceholders {
    pub fn new(values: HashMap<String, String>) -> Self {
        Self {
            values: values
                .into_iter()
                .map(|(key, value)| (key.to_lowercase(), value))
                .collect(),
        }
    }

    pub fn resolve(&self, key: &str, player: Option<&Player>) -> Option<String> {
        let key = key.to_lowercase();

        let from_player = player.and_then(|player| match key.as_str() {
            "player" | "player_name" => Some(player.username.clone()),
            "player_uuid" => Some(player.uuid.hyphenated().to_string()),
            "player_world" => player.world.clone(),
            _ => None,
        });

        from_player.or_else(|| self.values.get(&key).cloned())
    }
}

impl PlaceholderResolver for BuiltinPlaceholders {
    fn substitute<'a>(&self, text: &'a str, player: Option<&Player>) -> Cow<'a, str> {
        PLACEHOLDER_PATTERN.replace_all(text, |caps: &Captures| {
            self.resolve(&caps[1], player)
                .unwrap_or_else(|| caps[0].to_owned())
        })
    }
}
