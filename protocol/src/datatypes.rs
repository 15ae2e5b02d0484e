pub mod chat_parse;
mod color;

super::cfg_ser! {
    // JSON helpers and serde impls that can't be derived
    mod implementations;
}

pub use color::{NamedColor, TextColor};

use bitflags::bitflags;

bitflags! {
    /// The five text decorations a chat component can toggle
    pub struct Decorations: u8 {
        const BOLD = 0x01;
        const ITALIC = 0x02;
        const UNDERLINED = 0x04;
        const STRIKETHROUGH = 0x08;
        const OBFUSCATED = 0x10;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "ser", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "ser", serde(rename_all = "snake_case"))]
pub enum ClickAction {
    OpenUrl,
    RunCommand,
    SuggestCommand,
    ChangePage,
    CopyToClipboard,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "ser", derive(serde::Serialize, serde::Deserialize))]
pub struct ClickEvent {
    pub action: ClickAction,
    pub value: String,
}

impl ClickEvent {
    pub fn new(action: ClickAction, value: impl Into<String>) -> Self {
        Self {
            action,
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "ser", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "ser",
    serde(tag = "action", content = "contents", rename_all = "snake_case")
)]
pub enum HoverEvent {
    ShowText(Box<Chat>),
}

/// Everything about a chat component except its text and children.
///
/// `None` means "inherit from the parent component".
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "ser", derive(serde::Serialize, serde::Deserialize))]
pub struct Style {
    #[cfg_attr(feature = "ser", serde(default))]
    #[cfg_attr(feature = "ser", serde(skip_serializing_if = "Option::is_none"))]
    pub color: Option<TextColor>,
    #[cfg_attr(feature = "ser", serde(default))]
    #[cfg_attr(feature = "ser", serde(skip_serializing_if = "Option::is_none"))]
    pub bold: Option<bool>,
    #[cfg_attr(feature = "ser", serde(default))]
    #[cfg_attr(feature = "ser", serde(skip_serializing_if = "Option::is_none"))]
    pub italic: Option<bool>,
    #[cfg_attr(feature = "ser", serde(default))]
    #[cfg_attr(feature = "ser", serde(skip_serializing_if = "Option::is_none"))]
    pub underlined: Option<bool>,
    #[cfg_attr(feature = "ser", serde(default))]
    #[cfg_attr(feature = "ser", serde(skip_serializing_if = "Option::is_none"))]
    pub strikethrough: Option<bool>,
    #[cfg_attr(feature = "ser", serde(default))]
    #[cfg_attr(feature = "ser", serde(skip_serializing_if = "Option::is_none"))]
    pub obfuscated: Option<bool>,
    #[cfg_attr(feature = "ser", serde(default, rename = "clickEvent"))]
    #[cfg_attr(feature = "ser", serde(skip_serializing_if = "Option::is_none"))]
    pub click_event: Option<ClickEvent>,
    #[cfg_attr(feature = "ser", serde(default, rename = "hoverEvent"))]
    #[cfg_attr(feature = "ser", serde(skip_serializing_if = "Option::is_none"))]
    pub hover_event: Option<HoverEvent>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_color(mut self, color: TextColor) -> Self {
        self.color = Some(color);
        self
    }

    /// Sets every flag in `decorations` to `value`
    pub fn with_decoration(mut self, decorations: Decorations, value: bool) -> Self {
        self.set_decoration(decorations, value);
        self
    }

    pub fn set_decoration(&mut self, decorations: Decorations, value: bool) {
        for (flag, field) in [
            (Decorations::BOLD, &mut self.bold),
            (Decorations::ITALIC, &mut self.italic),
            (Decorations::UNDERLINED, &mut self.underlined),
            (Decorations::STRIKETHROUGH, &mut self.strikethrough),
            (Decorations::OBFUSCATED, &mut self.obfuscated),
        ] {
            if decorations.contains(flag) {
                *field = Some(value);
            }
        }
    }

    /// The decorations explicitly turned on
    pub fn decorations(&self) -> Decorations {
        let mut result = Decorations::empty();
        for (flag, field) in [
            (Decorations::BOLD, self.bold),
            (Decorations::ITALIC, self.italic),
            (Decorations::UNDERLINED, self.underlined),
            (Decorations::STRIKETHROUGH, self.strikethrough),
            (Decorations::OBFUSCATED, self.obfuscated),
        ] {
            if field == Some(true) {
                result |= flag;
            }
        }
        result
    }

    pub fn with_click(mut self, click: ClickEvent) -> Self {
        self.click_event = Some(click);
        self
    }

    pub fn with_hover(mut self, hover: HoverEvent) -> Self {
        self.hover_event = Some(hover);
        self
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Fills every unset field from `parent`, the way clients resolve component inheritance
    pub fn inherit(&self, parent: &Style) -> Style {
        Style {
            color: self.color.or(parent.color),
            bold: self.bold.or(parent.bold),
            italic: self.italic.or(parent.italic),
            underlined: self.underlined.or(parent.underlined),
            strikethrough: self.strikethrough.or(parent.strikethrough),
            obfuscated: self.obfuscated.or(parent.obfuscated),
            click_event: self
                .click_event
                .clone()
                .or_else(|| parent.click_event.clone()),
            hover_event: self
                .hover_event
                .clone()
                .or_else(|| parent.hover_event.clone()),
        }
    }
}

// chat objects are represented in JSON so we use serde
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "ser", derive(serde::Serialize, serde::Deserialize))]
pub struct Chat {
    #[cfg_attr(feature = "ser", serde(default))]
    pub text: String,
    #[cfg_attr(feature = "ser", serde(flatten))]
    pub style: Style,
    #[cfg_attr(feature = "ser", serde(default))]
    #[cfg_attr(feature = "ser", serde(skip_serializing_if = "Vec::is_empty"))]
    pub extra: Vec<Chat>,
}

impl Chat {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn literal(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
            extra: Vec::new(),
        }
    }

    pub fn append(&mut self, child: Chat) {
        self.extra.push(child);
    }

    /// The text of this component and all of its children, without any styling
    pub fn plain_text(&self) -> String {
        let mut result = String::new();
        self.collect_plain(&mut result);
        result
    }

    fn collect_plain(&self, output: &mut String) {
        output.push_str(&self.text);
        for child in &self.extra {
            child.collect_plain(output);
        }
    }

    /// All components of the tree in pre-order, including this one
    pub fn nodes(&self) -> Vec<&Chat> {
        let mut result = vec![self];
        for child in &self.extra {
            result.extend(child.nodes());
        }
        result
    }

    /// Renders the tree using `§` codes, for places that don't support JSON (legacy ping, consoles)
    pub fn to_legacy_string(&self) -> String {
        chat_parse::to_legacy(self)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.extra.iter().all(Chat::is_empty)
    }
}
