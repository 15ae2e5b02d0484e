use crate::{
    context::FormattingContext,
    tag::{strip_quotes, Tag, TagState},
};
use tracing::debug;

/// `<color:#RRGGBB>`, `<c:red>`, `<c:&c>`
#[derive(Debug, Clone, Copy)]
pub struct ColorTag;

impl Tag for ColorTag {
    fn name(&self) -> &str {
        "color"
    }

    fn aliases(&self) -> &[&str] {
        &["c"]
    }

    fn process(&self, ctx: &mut FormattingContext<'_>, _name: &str, args: &str) -> TagState {
        let mut style = ctx.current_style().clone();

        match ctx.platform().resolve_color(strip_quotes(args.trim())) {
            Some(color) => style.color = Some(color),
            // still push, so the closing tag has something to pop
            None => debug!("Unknown color {args:?}, keeping the current one"),
        }

        let previous = ctx.apply_style_to_scope(style);

        TagState::Scoped { previous }
    }

    fn close(&self, ctx: &mut FormattingContext<'_>, state: TagState) {
        if let TagState::Scoped { previous } = state {
            ctx.restore_scope_style(previous);
        }
    }
}
