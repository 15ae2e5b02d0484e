use crate::{context::FormattingContext, tags::rainbow::RainbowParams};
use protocol::datatypes::{Style, TextColor};
use std::{any::Any, fmt};

/// A markup directive, `<name:args>...</name>`.
///
/// Tags are registered once and shared by every parse, possibly on many threads, so they must
/// not keep anything about a single invocation in `self`. Whatever [`Tag::close`] needs to know
/// about its opening is returned from [`Tag::process`] as a [`TagState`] and handed back by the
/// parser.
pub trait Tag: Send + Sync + fmt::Debug {
    /// The canonical name
    fn name(&self) -> &str;

    fn aliases(&self) -> &[&str] {
        &[]
    }

    fn can_open(&self) -> bool {
        true
    }

    /// Tags that can't close are never put on the parser's open tag stack
    fn can_close(&self) -> bool {
        true
    }

    /// Whether `<name:args/>` is allowed
    fn is_self_closing(&self) -> bool {
        false
    }

    /// Called on the opening tag. `name` is the name or alias as written.
    fn process(&self, ctx: &mut FormattingContext<'_>, name: &str, args: &str) -> TagState;

    fn close(&self, _ctx: &mut FormattingContext<'_>, _state: TagState) {}

    /// Case-insensitive match against the name and aliases
    fn matches(&self, name: &str) -> bool {
        let name = name.trim();
        self.name().eq_ignore_ascii_case(name)
            || self.aliases().iter().any(|a| a.eq_ignore_ascii_case(name))
    }
}

/// What a tag needs to remember between opening and closing
#[derive(Debug)]
pub enum TagState {
    /// Nothing happened, closing must not touch the context
    None,
    /// Exactly one style was pushed
    Pushed,
    /// A style was pushed and applied to the current component, which had `previous` before
    Scoped { previous: Style },
    Gradient {
        depth: usize,
        colors: Vec<TextColor>,
    },
    Rainbow {
        depth: usize,
        params: RainbowParams,
    },
    /// For tags registered from outside this crate
    Custom(Box<dyn Any + Send>),
}

/// Strips one pair of matching `'` or `"` quotes
pub fn strip_quotes(input: &str) -> &str {
    for quote in ['\'', '"'] {
        if input.len() >= 2 && input.starts_with(quote) && input.ends_with(quote) {
            return &input[1..input.len() - 1];
        }
    }

    input
}

#[cfg(test)]
mod tests {
    use super::strip_quotes;

    #[test]
    fn quotes() {
        assert_eq!(strip_quotes("'hello'"), "hello");
        assert_eq!(strip_quotes("\"hello\""), "hello");
        assert_eq!(strip_quotes("'mismatched\""), "'mismatched\"");
        assert_eq!(strip_quotes("'"), "'");
        assert_eq!(strip_quotes("plain"), "plain");
    }
}
