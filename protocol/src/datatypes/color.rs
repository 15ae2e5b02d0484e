use std::fmt;

/// The 16 colors every Minecraft client knows by name, in legacy code order (`0`-`f`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
}

impl NamedColor {
    pub const ALL: [NamedColor; 16] = [
        NamedColor::Black,
        NamedColor::DarkBlue,
        NamedColor::DarkGreen,
        NamedColor::DarkAqua,
        NamedColor::DarkRed,
        NamedColor::DarkPurple,
        NamedColor::Gold,
        NamedColor::Gray,
        NamedColor::DarkGray,
        NamedColor::Blue,
        NamedColor::Green,
        NamedColor::Aqua,
        NamedColor::Red,
        NamedColor::LightPurple,
        NamedColor::Yellow,
        NamedColor::White,
    ];

    /// The name used in JSON chat components
    pub fn name(self) -> &'static str {
        match self {
            NamedColor::Black => "black",
            NamedColor::DarkBlue => "dark_blue",
            NamedColor::DarkGreen => "dark_green",
            NamedColor::DarkAqua => "dark_aqua",
            NamedColor::DarkRed => "dark_red",
            NamedColor::DarkPurple => "dark_purple",
            NamedColor::Gold => "gold",
            NamedColor::Gray => "gray",
            NamedColor::DarkGray => "dark_gray",
            NamedColor::Blue => "blue",
            NamedColor::Green => "green",
            NamedColor::Aqua => "aqua",
            NamedColor::Red => "red",
            NamedColor::LightPurple => "light_purple",
            NamedColor::Yellow => "yellow",
            NamedColor::White => "white",
        }
    }

    /// The legacy formatting code character (the one following `§`)
    pub fn code(self) -> char {
        // ALL is ordered by code, so the position is the hex digit
        let index = Self::ALL.iter().position(|c| *c == self).unwrap_or(15);
        std::char::from_digit(index as u32, 16).unwrap_or('f')
    }

    pub fn rgb(self) -> u32 {
        match self {
            NamedColor::Black => 0x000000,
            NamedColor::DarkBlue => 0x0000AA,
            NamedColor::DarkGreen => 0x00AA00,
            NamedColor::DarkAqua => 0x00AAAA,
            NamedColor::DarkRed => 0xAA0000,
            NamedColor::DarkPurple => 0xAA00AA,
            NamedColor::Gold => 0xFFAA00,
            NamedColor::Gray => 0xAAAAAA,
            NamedColor::DarkGray => 0x555555,
            NamedColor::Blue => 0x5555FF,
            NamedColor::Green => 0x55FF55,
            NamedColor::Aqua => 0x55FFFF,
            NamedColor::Red => 0xFF5555,
            NamedColor::LightPurple => 0xFF55FF,
            NamedColor::Yellow => 0xFFFF55,
            NamedColor::White => 0xFFFFFF,
        }
    }

    /// Case-insensitive. Accepts the british spelling of gray too.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.to_ascii_lowercase().replace("grey", "gray");

        Self::ALL.iter().copied().find(|c| c.name() == name)
    }

    pub fn from_code(code: char) -> Option<Self> {
        code.to_digit(16).map(|i| Self::ALL[i as usize])
    }
}

impl fmt::Display for NamedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A chat component color. Clients before 1.16 only understand [`TextColor::Named`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextColor {
    Named(NamedColor),
    Rgb(u32),
}

impl TextColor {
    pub fn rgb(self) -> u32 {
        match self {
            TextColor::Named(named) => named.rgb(),
            TextColor::Rgb(rgb) => rgb & 0xFFFFFF,
        }
    }

    pub fn from_channels(r: u8, g: u8, b: u8) -> Self {
        TextColor::Rgb(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    pub fn channels(self) -> (u8, u8, u8) {
        let rgb = self.rgb();
        ((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    /// Parses `#RRGGBB`, `&#RRGGBB`, a color name, or a legacy code (`c`, `&c`, `§c`)
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();

        if let Some(hex) = input
            .strip_prefix("&#")
            .or_else(|| input.strip_prefix('#'))
        {
            return parse_hex(hex).map(TextColor::Rgb);
        }

        let code = input
            .strip_prefix('&')
            .or_else(|| input.strip_prefix('§'))
            .unwrap_or(input);
        let mut chars = code.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return NamedColor::from_code(c.to_ascii_lowercase()).map(TextColor::Named);
        }

        NamedColor::from_name(input).map(TextColor::Named)
    }

    /// The named color closest to this one (squared RGB distance)
    pub fn nearest_named(self) -> NamedColor {
        if let TextColor::Named(named) = self {
            return named;
        }

        let (r, g, b) = self.channels();
        let distance = |c: &NamedColor| {
            let (cr, cg, cb) = TextColor::Named(*c).channels();
            let dr = r as i32 - cr as i32;
            let dg = g as i32 - cg as i32;
            let db = b as i32 - cb as i32;
            dr * dr + dg * dg + db * db
        };

        NamedColor::ALL
            .iter()
            .copied()
            .min_by_key(distance)
            .unwrap_or(NamedColor::White)
    }
}

impl From<NamedColor> for TextColor {
    fn from(named: NamedColor) -> Self {
        TextColor::Named(named)
    }
}

impl fmt::Display for TextColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextColor::Named(named) => f.write_str(named.name()),
            TextColor::Rgb(_) => write!(f, "#{:06x}", self.rgb()),
        }
    }
}

/// exactly 6 hex digits
fn parse_hex(hex: &str) -> Option<u32> {
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    u32::from_str_radix(hex, 16).ok()
}
