use crate::{
    context::FormattingContext,
    tag::{Tag, TagState},
};
use protocol::datatypes::TextColor;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RainbowParams {
    /// Hue step per character, 0.01 to 1
    pub frequency: f64,
    /// 0 to 1
    pub saturation: f64,
    /// Hue of the first character, 0 to 1
    pub offset: f64,
}

impl Default for RainbowParams {
    fn default() -> Self {
        Self {
            frequency: 0.1,
            saturation: 1.0,
            offset: 0.0,
        }
    }
}

impl RainbowParams {
    /// `frequency:saturation:offset`, each optional. If any of them isn't a number all three
    /// fall back to the defaults.
    pub fn parse(args: &str) -> Self {
        let args = args.trim();
        let defaults = Self::default();
        if args.is_empty() {
            return defaults;
        }

        let mut values = [defaults.frequency, defaults.saturation, defaults.offset];
        for (value, raw) in values.iter_mut().zip(args.split(':')) {
            match raw.trim().parse::<f64>() {
                Ok(parsed) if parsed.is_finite() => *value = parsed,
                _ => {
                    debug!("Invalid rainbow arguments {args:?}, using defaults");
                    return defaults;
                }
            }
        }

        Self {
            frequency: values[0].clamp(0.01, 1.0),
            saturation: values[1].clamp(0.0, 1.0),
            offset: values[2].clamp(0.0, 1.0),
        }
    }

    pub fn color_at(&self, index: usize) -> TextColor {
        let hue = (index as f64 * self.frequency + self.offset).rem_euclid(1.0);
        hsv_to_rgb(hue, self.saturation, 1.0)
    }
}

/// `<rainbow:frequency:saturation:offset>...</rainbow>`
#[derive(Debug, Clone, Copy)]
pub struct RainbowTag;

impl Tag for RainbowTag {
    fn name(&self) -> &str {
        "rainbow"
    }

    fn aliases(&self) -> &[&str] {
        &["rb"]
    }

    fn process(&self, ctx: &mut FormattingContext<'_>, _name: &str, args: &str) -> TagState {
        let params = RainbowParams::parse(args);
        let depth = ctx.open_buffer();

        TagState::Rainbow { depth, params }
    }

    fn close(&self, ctx: &mut FormattingContext<'_>, state: TagState) {
        let TagState::Rainbow { depth, params } = state else {
            return;
        };

        let text = ctx.close_buffer(depth).plain_text();

        for (i, character) in text.chars().enumerate() {
            let style = ctx.current_style().clone().with_color(params.color_at(i));
            let node = ctx.platform().literal(character.encode_utf8(&mut [0; 4]), &style);
            ctx.append(node);
        }
    }
}

/// Sector based HSV to RGB
fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> TextColor {
    let scaled = hue.rem_euclid(1.0) * 6.0;
    let sector = scaled.floor();
    let f = scaled - sector;

    let p = value * (1.0 - saturation);
    let q = value * (1.0 - f * saturation);
    let t = value * (1.0 - (1.0 - f) * saturation);

    let (r, g, b) = match sector as u8 {
        0 => (value, t, p),
        1 => (q, value, p),
        2 => (p, value, t),
        3 => (p, q, value),
        4 => (t, p, value),
        _ => (value, p, q),
    };

    let channel = |x: f64| (x * 255.0).round() as u8;
    TextColor::from_channels(channel(r), channel(g), channel(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        assert_eq!(RainbowParams::parse(""), RainbowParams::default());
        assert_eq!(RainbowParams::parse("abc:def"), RainbowParams::default());
        // one bad value resets the good ones too
        assert_eq!(RainbowParams::parse("0.5:oops"), RainbowParams::default());
    }

    #[test]
    fn clamping() {
        let params = RainbowParams::parse("5:-1:0.25");
        assert_eq!(params.frequency, 1.0);
        assert_eq!(params.saturation, 0.0);
        assert_eq!(params.offset, 0.25);

        assert_eq!(RainbowParams::parse("0.001").frequency, 0.01);
    }

    #[test]
    fn partial_arguments() {
        let params = RainbowParams::parse("0.2");
        assert_eq!(params.frequency, 0.2);
        assert_eq!(params.saturation, 1.0);
        assert_eq!(params.offset, 0.0);
    }

    #[test]
    fn hsv() {
        assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0).rgb(), 0xFF0000);
        assert_eq!(hsv_to_rgb(1.0 / 3.0, 1.0, 1.0).rgb(), 0x00FF00);
        assert_eq!(hsv_to_rgb(2.0 / 3.0, 1.0, 1.0).rgb(), 0x0000FF);
        assert_eq!(hsv_to_rgb(0.5, 0.0, 1.0).rgb(), 0xFFFFFF);
    }

    #[test]
    fn hue_wraps() {
        let params = RainbowParams {
            frequency: 0.5,
            saturation: 1.0,
            offset: 0.0,
        };
        assert_eq!(params.color_at(0), params.color_at(2));
    }
}
