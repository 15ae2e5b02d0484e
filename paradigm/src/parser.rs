use crate::{
    config::FormattingConfig,
    context::FormattingContext,
    emoji::EmojiTable,
    placeholders::{BuiltinPlaceholders, PlaceholderResolver},
    platform::{ModernAdapter, PlatformAdapter},
    player::Player,
    registry::TagRegistry,
    tag::{Tag, TagState},
    tags::click::normalize_url,
    tokenizer::{split_tag_body, Token, TokenKind, Tokenizer},
};
use once_cell::sync::Lazy;
use protocol::datatypes::{
    chat_parse::{self, LegacySegment, AMPERSAND},
    Chat, ClickAction,
};
use regex::Regex;
use std::{borrow::Cow, sync::Arc};
use tracing::{debug, instrument, trace, warn};

static URL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://\S+").expect("url pattern is valid"));
static HEX_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)&#([0-9a-f]{6})").expect("hex pattern is valid"));

/// How deep markup inside tag arguments may nest
pub const MAX_NESTING_DEPTH: usize = 16;

/// A tag that was opened and not closed yet
#[derive(Debug)]
struct OpenTag {
    tag: Arc<dyn Tag>,
    state: TagState,
}

/// Turns markup into chat components.
///
/// Configure it once and share it, parsing doesn't mutate the parser.
///
/// ```
/// use paradigm::FormattingParser;
///
/// let parser = FormattingParser::new();
/// let chat = parser.parse("<b>Hello</b> world", None);
/// assert_eq!(chat.plain_text(), "Hello world");
/// ```
#[derive(Debug)]
pub struct FormattingParser {
    registry: TagRegistry,
    adapter: Box<dyn PlatformAdapter>,
    placeholders: Box<dyn PlaceholderResolver>,
    emojis: EmojiTable,
    config: FormattingConfig,
}

impl Default for FormattingParser {
    fn default() -> Self {
        Self::new()
    }
}

impl FormattingParser {
    pub fn new() -> Self {
        Self::with_config(FormattingConfig::default())
    }

    pub fn with_config(config: FormattingConfig) -> Self {
        Self {
            registry: TagRegistry::with_builtin_tags(),
            adapter: Box::new(ModernAdapter),
            placeholders: Box::new(BuiltinPlaceholders::new(config.placeholders.clone())),
            emojis: EmojiTable::with_overrides(&config.emojis),
            config,
        }
    }

    pub fn with_adapter(mut self, adapter: impl PlatformAdapter + 'static) -> Self {
        self.adapter = Box::new(adapter);
        self
    }

    pub fn with_placeholders(mut self, resolver: impl PlaceholderResolver + 'static) -> Self {
        self.placeholders = Box::new(resolver);
        self
    }

    pub fn with_registry(mut self, registry: TagRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Adds a custom tag, replacing any tag with the same name or alias
    pub fn register_tag(&mut self, tag: impl Tag + 'static) {
        self.registry.register(tag);
    }

    pub fn registry(&self) -> &TagRegistry {
        &self.registry
    }

    pub fn adapter(&self) -> &dyn PlatformAdapter {
        self.adapter.as_ref()
    }

    pub fn emojis(&self) -> &EmojiTable {
        &self.emojis
    }

    pub fn config(&self) -> &FormattingConfig {
        &self.config
    }

    /// Never fails. Whatever isn't valid markup ends up as text.
    pub fn parse(&self, raw: &str, player: Option<&Player>) -> Chat {
        self.parse_nested(raw, player, 0)
    }

    /// Parses markup found in the arguments of another tag, like hover text. `depth` is the
    /// number of parses this one is nested in. Tags must not go past [`MAX_NESTING_DEPTH`].
    #[instrument(level = "trace", skip_all, fields(len = raw.len(), depth, player = player.map(|p| p.username.as_str())))]
    pub fn parse_nested(&self, raw: &str, player: Option<&Player>, depth: usize) -> Chat {
        if raw.is_empty() {
            return Chat::new();
        }

        let substituted = self.placeholders.substitute(raw, player);
        let normalized = normalize_hex_colors(&substituted);

        let mut ctx = FormattingContext::with_depth(self, player, depth);
        let mut open_tags: Vec<OpenTag> = Vec::new();

        for token in Tokenizer::new(&normalized) {
            match token.kind {
                TokenKind::Text | TokenKind::Escape => append_text(&mut ctx, &token.value),
                TokenKind::TagOpen => self.open_tag(&mut ctx, &mut open_tags, &token),
                TokenKind::TagClose => self.close_tag(&mut ctx, &mut open_tags, &token),
                TokenKind::TagSelfClose => self.self_close_tag(&mut ctx, &token),
                TokenKind::Eof => break,
            }
        }

        // flush tags that buffer their content (gradients, center) even if never closed
        while let Some(OpenTag { tag, state }) = open_tags.pop() {
            debug!("Closing <{}> left open at the end of the input", tag.name());
            tag.close(&mut ctx, state);
        }

        ctx.into_root()
    }

    fn open_tag(&self, ctx: &mut FormattingContext<'_>, open_tags: &mut Vec<OpenTag>, token: &Token) {
        let (name, args) = split_tag_body(&token.value);

        match self.registry.get(name) {
            Some(tag) if tag.can_open() => {
                trace!("Opening <{}> with {args:?}", tag.name());
                let state = tag.process(ctx, name, args);

                if tag.can_close() {
                    open_tags.push(OpenTag { tag, state });
                }
            }
            _ => append_text(ctx, &token.source()),
        }
    }

    fn close_tag(&self, ctx: &mut FormattingContext<'_>, open_tags: &mut Vec<OpenTag>, token: &Token) {
        let name = token.value.trim();

        if !self.registry.contains(name) {
            append_text(ctx, &token.source());
            return;
        }

        if self.config.strict_tags {
            let expected = open_tags.last().map(|open| open.tag.name());
            if !open_tags.last().map_or(false, |open| open.tag.matches(name)) {
                warn!("Closing tag </{name}> doesn't match the open tag {expected:?}, keeping it as text");
                append_text(ctx, &token.source());
                return;
            }
        }

        // Only the order matters, not the name. `</b>` closes whatever was opened last.
        match open_tags.pop() {
            Some(OpenTag { tag, state }) => {
                trace!("Closing <{}> with </{name}>", tag.name());
                tag.close(ctx, state);
            }
            None => trace!("Ignoring </{name}>, nothing is open"),
        }
    }

    fn self_close_tag(&self, ctx: &mut FormattingContext<'_>, token: &Token) {
        let (name, args) = split_tag_body(&token.value);

        match self.registry.get(name) {
            Some(tag) if tag.is_self_closing() => {
                trace!("Self-closing <{}/> with {args:?}", tag.name());
                // self-closing tags have no scope, there's nothing to close later
                let _ = tag.process(ctx, name, args);
            }
            _ => append_text(ctx, &token.source()),
        }
    }
}

/// Matches the `&#rrggbb` shorthand (any case) and keeps every match as written. Legacy code
/// handling reads the digits later, plain text must come out unchanged.
pub fn normalize_hex_colors(text: &str) -> Cow<'_, str> {
    HEX_PATTERN.replace_all(text, "$0")
}

/// Appends `text` to the current component with the current style. URLs get their own node
/// with a click event that opens them.
pub fn append_text(ctx: &mut FormattingContext<'_>, text: &str) {
    let mut last = 0;

    for url in URL_PATTERN.find_iter(text) {
        append_run(ctx, &text[last..url.start()]);

        let click = ctx
            .platform()
            .click_event(ClickAction::OpenUrl, &normalize_url(url.as_str()));
        let style = ctx.current_style().clone().with_click(click);
        let node = ctx.platform().literal(url.as_str(), &style);
        ctx.append(node);

        last = url.end();
    }

    append_run(ctx, &text[last..]);
}

fn append_run(ctx: &mut FormattingContext<'_>, text: &str) {
    if !ctx.config().legacy_codes {
        append_literal(ctx, text);
        return;
    }

    for segment in chat_parse::segments(text, AMPERSAND) {
        match segment {
            LegacySegment::Text(text) => append_literal(ctx, &text),
            LegacySegment::Code(code) => code.apply(ctx.current_style_mut()),
        }
    }
}

fn append_literal(ctx: &mut FormattingContext<'_>, text: &str) {
    if text.is_empty() {
        return;
    }

    let node = ctx.platform().literal(text, ctx.current_style());
    ctx.append(node);
}
