use crate::{
    context::FormattingContext,
    tag::{Tag, TagState},
};
use protocol::datatypes::Style;

/// Roughly how many average characters fit on one line of the default chat window
pub const DEFAULT_CHAT_WIDTH: usize = 53;

/// `<center>...</center>`. Pads the content with spaces so it sits roughly in the middle of the
/// chat window. Nested regions are fine, each closing tag finishes the innermost one.
#[derive(Debug, Clone, Copy)]
pub struct CenterTag;

impl CenterTag {
    /// Spaces to put in front of text that is `len` characters long
    pub fn padding(len: usize, width: usize) -> usize {
        if len > 0 && len < width {
            (width - len) / 2
        } else {
            0
        }
    }
}

impl Tag for CenterTag {
    fn name(&self) -> &str {
        "center"
    }

    fn process(&self, ctx: &mut FormattingContext<'_>, _name: &str, _args: &str) -> TagState {
        let marker = ctx.open_buffer();
        ctx.push_center_tag(marker);
        let style = ctx.current_style().clone();
        ctx.push_style(style);

        TagState::Pushed
    }

    fn close(&self, ctx: &mut FormattingContext<'_>, _state: TagState) {
        if let Some(marker) = ctx.pop_center_tag() {
            let content = ctx.close_buffer(marker);
            let len = content.plain_text().trim().chars().count();
            let padding = Self::padding(len, ctx.config().center_width);

            if padding > 0 {
                let spaces = ctx.platform().literal(&" ".repeat(padding), &Style::new());
                ctx.append(spaces);
            }
            // the buffer has no text or style of its own, only its children are kept
            for node in content.extra {
                ctx.append(node);
            }
        }

        ctx.pop_style();
    }
}
