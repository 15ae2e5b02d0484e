use crate::{
    context::FormattingContext,
    tag::{Tag, TagState},
};
use protocol::datatypes::{NamedColor, TextColor};

const DEFAULT_COLORS: [TextColor; 3] = [
    TextColor::Rgb(0xFF0000),
    TextColor::Rgb(0x00FF00),
    TextColor::Rgb(0x0000FF),
];

/// `<gradient:#ff0000:blue>...</gradient>` blends between the colors character by character.
/// The hard variant (`<hard_gradient>`) jumps from stop to stop without blending.
#[derive(Debug, Clone, Copy)]
pub struct GradientTag {
    hard: bool,
}

impl GradientTag {
    pub const SOFT: Self = Self { hard: false };
    pub const HARD: Self = Self { hard: true };

    /// The color at `position` (0 to 1) of the gradient
    pub fn color_at(&self, colors: &[TextColor], position: f64) -> TextColor {
        if self.hard {
            hard_stop(colors, position)
        } else {
            interpolate(colors, position)
        }
    }
}

impl Tag for GradientTag {
    fn name(&self) -> &str {
        if self.hard {
            "hard_gradient"
        } else {
            "gradient"
        }
    }

    fn aliases(&self) -> &[&str] {
        if self.hard {
            &["hgr"]
        } else {
            &["gr"]
        }
    }

    fn process(&self, ctx: &mut FormattingContext<'_>, _name: &str, args: &str) -> TagState {
        let colors = parse_colors(ctx, args);
        let depth = ctx.open_buffer();

        TagState::Gradient { depth, colors }
    }

    fn close(&self, ctx: &mut FormattingContext<'_>, state: TagState) {
        let TagState::Gradient { depth, colors } = state else {
            return;
        };

        let text = ctx.close_buffer(depth).plain_text();
        let chars: Vec<char> = text.chars().collect();
        let last = chars.len().saturating_sub(1).max(1) as f64;

        for (i, character) in chars.iter().enumerate() {
            let color = self.color_at(&colors, i as f64 / last);
            let style = ctx.current_style().clone().with_color(color);
            let node = ctx.platform().literal(character.encode_utf8(&mut [0; 4]), &style);
            ctx.append(node);
        }
    }
}

/// Missing colors give the default red, green, blue. An unknown color becomes white.
fn parse_colors(ctx: &FormattingContext<'_>, args: &str) -> Vec<TextColor> {
    let args = args.trim();
    if args.is_empty() {
        return DEFAULT_COLORS.to_vec();
    }

    args.split(':')
        .map(|raw| {
            ctx.platform()
                .resolve_color(raw)
                .unwrap_or(TextColor::Named(NamedColor::White))
        })
        .collect()
}

fn interpolate(colors: &[TextColor], position: f64) -> TextColor {
    match colors {
        [] => TextColor::Named(NamedColor::White),
        [only] => *only,
        _ => {
            let scaled = position.clamp(0.0, 1.0) * (colors.len() - 1) as f64;
            let index = (scaled.floor() as usize).min(colors.len() - 2);
            let t = scaled - index as f64;

            let (r1, g1, b1) = colors[index].channels();
            let (r2, g2, b2) = colors[index + 1].channels();
            let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t) as u8;

            TextColor::from_channels(lerp(r1, r2), lerp(g1, g2), lerp(b1, b2))
        }
    }
}

fn hard_stop(colors: &[TextColor], position: f64) -> TextColor {
    if colors.is_empty() {
        return TextColor::Named(NamedColor::White);
    }

    let index = (position.clamp(0.0, 1.0) * (colors.len() - 1) as f64).floor() as usize;
    colors[index.min(colors.len() - 1)]
}
