use crate::{
    context::FormattingContext,
    tag::{Tag, TagState},
};
use protocol::datatypes::Decorations;

/// `<bold>`, `<italic>`, `<underline>`, `<strikethrough>`, `<obfuscated>` and their short forms
#[derive(Debug, Clone, Copy)]
pub struct DecorationTag {
    name: &'static str,
    aliases: &'static [&'static str],
    decoration: Decorations,
}

impl DecorationTag {
    pub const BOLD: Self = Self::new("bold", &["b"], Decorations::BOLD);
    pub const ITALIC: Self = Self::new("italic", &["i"], Decorations::ITALIC);
    pub const UNDERLINED: Self =
        Self::new("underline", &["underlined"], Decorations::UNDERLINED);
    pub const STRIKETHROUGH: Self =
        Self::new("strikethrough", &["st"], Decorations::STRIKETHROUGH);
    pub const OBFUSCATED: Self = Self::new("obfuscated", &["obf"], Decorations::OBFUSCATED);

    pub const fn new(
        name: &'static str,
        aliases: &'static [&'static str],
        decoration: Decorations,
    ) -> Self {
        Self {
            name,
            aliases,
            decoration,
        }
    }
}

impl Tag for DecorationTag {
    fn name(&self) -> &str {
        self.name
    }

    fn aliases(&self) -> &[&str] {
        self.aliases
    }

    fn process(&self, ctx: &mut FormattingContext<'_>, _name: &str, _args: &str) -> TagState {
        let style = ctx
            .current_style()
            .clone()
            .with_decoration(self.decoration, true);
        ctx.push_style(style);

        TagState::Pushed
    }

    fn close(&self, ctx: &mut FormattingContext<'_>, state: TagState) {
        if let TagState::Pushed = state {
            ctx.pop_style();
        }
    }
}
