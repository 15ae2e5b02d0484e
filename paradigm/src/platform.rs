//! The boundary between the formatting engine and whatever builds the final components.
//!
//! Everything the tags create goes through a [`PlatformAdapter`], so a server that talks to old
//! clients can swap in [`LegacyAdapter`] without touching the tags.

use protocol::datatypes::{Chat, ClickAction, ClickEvent, HoverEvent, Style, TextColor};
use std::fmt;

pub trait PlatformAdapter: Send + Sync + fmt::Debug {
    fn name(&self) -> &str;

    /// A text node with no children
    fn literal(&self, text: &str, style: &Style) -> Chat {
        Chat::styled(text, style.clone())
    }

    fn resolve_color(&self, name: &str) -> Option<TextColor> {
        TextColor::parse(name)
    }

    fn click_event(&self, action: ClickAction, value: &str) -> ClickEvent {
        ClickEvent::new(action, value)
    }

    fn hover_event(&self, contents: Chat) -> HoverEvent {
        HoverEvent::ShowText(Box::new(contents))
    }
}

/// 1.16 and newer, RGB colors are sent as they are
#[derive(Debug, Clone, Copy, Default)]
pub struct ModernAdapter;

impl PlatformAdapter for ModernAdapter {
    fn name(&self) -> &str {
        "modern"
    }
}

/// Clients before 1.16 only know the 16 named colors and have no clipboard action
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyAdapter;

impl PlatformAdapter for LegacyAdapter {
    fn name(&self) -> &str {
        "legacy"
    }

    fn literal(&self, text: &str, style: &Style) -> Chat {
        let mut style = style.clone();
        style.color = style
            .color
            .map(|color| TextColor::Named(color.nearest_named()));

        Chat::styled(text, style)
    }

    fn click_event(&self, action: ClickAction, value: &str) -> ClickEvent {
        match action {
            ClickAction::CopyToClipboard => ClickEvent::new(ClickAction::SuggestCommand, value),
            action => ClickEvent::new(action, value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use protocol::datatypes::NamedColor;

    #[test]
    fn legacy_downsamples_colors() {
        let style = Style::new().with_color(TextColor::Rgb(0xFF0000));

        let modern = ModernAdapter.literal("x", &style);
        let legacy = LegacyAdapter.literal("x", &style);

        assert_eq!(modern.style.color, Some(TextColor::Rgb(0xFF0000)));
        assert_eq!(legacy.style.color, Some(TextColor::Named(NamedColor::Red)));
    }

    #[test]
    fn legacy_has_no_clipboard() {
        let event = LegacyAdapter.click_event(ClickAction::CopyToClipboard, "text");
        assert_eq!(event.action, ClickAction::SuggestCommand);
        assert_eq!(event.value, "text");
    }
}
