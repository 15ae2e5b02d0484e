use crate::{
    context::FormattingContext,
    parser::MAX_NESTING_DEPTH,
    tag::{strip_quotes, Tag, TagState},
};
use tracing::debug;

/// `<hover:'text'>`. The text is markup itself and goes through the same parser, up to
/// [`MAX_NESTING_DEPTH`] levels deep.
#[derive(Debug, Clone, Copy)]
pub struct HoverTag;

impl Tag for HoverTag {
    fn name(&self) -> &str {
        "hover"
    }

    fn process(&self, ctx: &mut FormattingContext<'_>, _name: &str, args: &str) -> TagState {
        let text = strip_quotes(args.trim());
        if text.is_empty() {
            return TagState::None;
        }

        if ctx.depth() >= MAX_NESTING_DEPTH {
            debug!("Hover text nested more than {MAX_NESTING_DEPTH} levels deep, ignoring it");
            return TagState::None;
        }

        let contents = ctx.parser().parse_nested(text, ctx.player(), ctx.depth() + 1);
        let event = ctx.platform().hover_event(contents);
        let style = ctx.current_style().clone().with_hover(event);
        ctx.push_style(style);

        TagState::Pushed
    }

    fn close(&self, ctx: &mut FormattingContext<'_>, state: TagState) {
        if let TagState::Pushed = state {
            ctx.pop_style();
        }
    }
}
