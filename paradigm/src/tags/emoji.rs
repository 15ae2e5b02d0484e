use crate::{
    context::FormattingContext,
    tag::{strip_quotes, Tag, TagState},
};
use tracing::trace;

/// `<emoji:heart>` or `<emoji:heart/>`. Inserts a glyph. A closing `</emoji>` is allowed and
/// does nothing.
#[derive(Debug, Clone, Copy)]
pub struct EmojiTag;

impl Tag for EmojiTag {
    fn name(&self) -> &str {
        "emoji"
    }

    fn aliases(&self) -> &[&str] {
        &["e"]
    }

    fn is_self_closing(&self) -> bool {
        true
    }

    fn process(&self, ctx: &mut FormattingContext<'_>, _name: &str, args: &str) -> TagState {
        let key = strip_quotes(args.trim());

        match ctx.parser().emojis().get(key) {
            Some(glyph) => {
                let node = ctx.platform().literal(glyph, ctx.current_style());
                ctx.append(node);
            }
            None => trace!("Unknown emoji {key:?}"),
        }

        TagState::None
    }
}
