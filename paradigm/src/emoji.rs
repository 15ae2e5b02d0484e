use std::collections::HashMap;

const BUILTIN: &[(&str, &str)] = &[
    ("heart", "❤"),
    ("star", "★"),
    ("check", "✔"),
    ("cross", "✖"),
    ("arrow", "➜"),
    ("smile", "☺"),
    ("sad", "☹"),
    ("skull", "☠"),
    ("sun", "☀"),
    ("moon", "☽"),
    ("cloud", "☁"),
    ("umbrella", "☂"),
    ("snowman", "☃"),
    ("music", "♫"),
    ("warning", "⚠"),
    ("sword", "⚔"),
    ("fire", "🔥"),
    ("crown", "♛"),
    ("flower", "✿"),
    ("peace", "☮"),
    ("yinyang", "☯"),
    ("airplane", "✈"),
    ("copyright", "©"),
    ("trademark", "™"),
    ("infinity", "∞"),
    ("bullet", "•"),
    ("shrug", "¯\\_(ツ)_/¯"),
    ("tableflip", "(╯°□°)╯︵ ┻━┻"),
];

/// Emoji names to glyphs, keys are case-insensitive
#[derive(Debug, Clone, PartialEq)]
pub struct EmojiTable {
    glyphs: HashMap<String, String>,
}

impl EmojiTable {
    pub fn empty() -> Self {
        Self {
            glyphs: HashMap::new(),
        }
    }

    /// The built-in set plus `overrides`, which win on conflicts
    pub fn with_overrides(overrides: &HashMap<String, String>) -> Self {
        let mut table = Self::default();
        for (key, glyph) in overrides {
            table.insert(key, glyph.clone());
        }
        table
    }

    pub fn insert(&mut self, key: &str, glyph: impl Into<String>) {
        self.glyphs.insert(key.trim().to_lowercase(), glyph.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.glyphs
            .get(&key.trim().to_lowercase())
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

impl Default for EmojiTable {
    fn default() -> Self {
        let mut table = Self::empty();
        for (key, glyph) in BUILTIN {
            table.insert(key, *glyph);
        }
        table
    }
}
