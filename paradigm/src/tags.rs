//! The built-in tags

pub mod center;
pub mod click;
pub mod color;
pub mod decoration;
pub mod emoji;
pub mod gradient;
pub mod hover;
pub mod rainbow;

pub use center::CenterTag;
pub use click::ClickTag;
pub use color::ColorTag;
pub use decoration::DecorationTag;
pub use emoji::EmojiTag;
pub use gradient::GradientTag;
pub use hover::HoverTag;
pub use rainbow::RainbowTag;

use crate::tag::Tag;
use std::sync::Arc;

/// One instance of every built-in tag
pub fn builtin() -> Vec<Arc<dyn Tag>> {
    vec![
        Arc::new(ColorTag),
        Arc::new(DecorationTag::BOLD),
        Arc::new(DecorationTag::ITALIC),
        Arc::new(DecorationTag::UNDERLINED),
        Arc::new(DecorationTag::STRIKETHROUGH),
        Arc::new(DecorationTag::OBFUSCATED),
        Arc::new(ClickTag),
        Arc::new(HoverTag),
        Arc::new(CenterTag),
        Arc::new(GradientTag::SOFT),
        Arc::new(GradientTag::HARD),
        Arc::new(RainbowTag),
        Arc::new(EmojiTag),
    ]
}
