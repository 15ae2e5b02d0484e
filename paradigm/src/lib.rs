//! Rich text markup for Minecraft chat.
//!
//! Markup like `<gradient:red:blue>Hello</gradient> <b>{player}</b>` is turned into a
//! [`Chat`](protocol::datatypes::Chat) component tree by a [`FormattingParser`].

pub mod config;
pub mod context;
pub mod emoji;
pub mod parser;
pub mod placeholders;
pub mod platform;
pub mod player;
pub mod registry;
pub mod tag;
pub mod tags;
pub mod tokenizer;

pub use config::FormattingConfig;
pub use context::FormattingContext;
pub use emoji::EmojiTable;
pub use parser::FormattingParser;
pub use placeholders::{BuiltinPlaceholders, NoPlaceholders, PlaceholderResolver};
pub use platform::{LegacyAdapter, ModernAdapter, PlatformAdapter};
pub use player::Player;
pub use protocol;
pub use registry::TagRegistry;
pub use tag::{Tag, TagState};
pub use tokenizer::{Token, TokenKind, Tokenizer};
