//! Legacy formatting codes (`§c`, `&l`, `&#RRGGBB`)

use super::*;

/// The prefix the client itself understands
pub const SECTION: char = '§';
/// The prefix people actually type in configs
pub const AMPERSAND: char = '&';

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LegacyCode {
    Color(NamedColor),
    Hex(u32),
    Decoration(Decorations),
    Reset,
}

impl LegacyCode {
    /// The character following the prefix. Hex codes don't have one.
    pub fn from_char(character: char) -> Option<Self> {
        let code = match character.to_ascii_lowercase() {
            'k' => LegacyCode::Decoration(Decorations::OBFUSCATED),
            'l' => LegacyCode::Decoration(Decorations::BOLD),
            'm' => LegacyCode::Decoration(Decorations::STRIKETHROUGH),
            'n' => LegacyCode::Decoration(Decorations::UNDERLINED),
            'o' => LegacyCode::Decoration(Decorations::ITALIC),
            'r' => LegacyCode::Reset,
            c => LegacyCode::Color(NamedColor::from_code(c)?),
        };

        Some(code)
    }

    pub fn apply(self, style: &mut Style) {
        match self {
            LegacyCode::Color(named) => style.color = Some(TextColor::Named(named)),
            LegacyCode::Hex(rgb) => style.color = Some(TextColor::Rgb(rgb)),
            LegacyCode::Decoration(decoration) => style.set_decoration(decoration, true),
            LegacyCode::Reset => {
                style.set_decoration(Decorations::all(), false);
                style.color = None;
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LegacySegment {
    Text(String),
    Code(LegacyCode),
}

/// Splits `input` into text and codes. A backslash right before `prefix` escapes it,
/// and a prefix that isn't followed by a valid code is kept as text.
pub fn segments(input: &str, prefix: char) -> Vec<LegacySegment> {
    let mut result = Vec::new();
    let mut text = String::new();
    let mut chars = input.char_indices().peekable();

    while let Some((i, character)) = chars.next() {
        if character == '\\' && chars.peek().map(|(_, c)| *c) == Some(prefix) {
            text.push(prefix);
            chars.next();
            continue;
        }
        if character != prefix {
            text.push(character);
            continue;
        }

        let rest = &input[i + prefix.len_utf8()..];
        let code = if let Some(hex) = rest.strip_prefix('#') {
            hex.get(..6)
                .filter(|digits| digits.chars().all(|c| c.is_ascii_hexdigit()))
                .and_then(|digits| u32::from_str_radix(digits, 16).ok())
                .map(|rgb| (LegacyCode::Hex(rgb), 7))
        } else {
            rest.chars()
                .next()
                .and_then(LegacyCode::from_char)
                .map(|code| (code, 1))
        };

        match code {
            Some((code, skip)) => {
                if !text.is_empty() {
                    result.push(LegacySegment::Text(std::mem::take(&mut text)));
                }
                result.push(LegacySegment::Code(code));
                for _ in 0..skip {
                    chars.next();
                }
            }
            None => text.push(character),
        }
    }

    if !text.is_empty() {
        result.push(LegacySegment::Text(text));
    }

    result
}

/// Converts a string with legacy codes to a chat component
pub fn parse(input: &str, prefix: char) -> Chat {
    let mut result = Chat::new();
    let mut style = Style::new();

    for segment in segments(input, prefix) {
        match segment {
            LegacySegment::Text(text) => result.append(Chat::styled(text, style.clone())),
            LegacySegment::Code(code) => code.apply(&mut style),
        }
    }

    // a single run doesn't need the wrapper
    if result.extra.len() == 1 {
        return result.extra.remove(0);
    }

    result
}

/// Renders a component tree with `§` codes. Hex colors are downsampled to the nearest named
/// color, click and hover events are dropped.
pub fn to_legacy(chat: &Chat) -> String {
    let mut output = String::new();
    let mut last = None;
    write_legacy(chat, &Style::new(), &mut output, &mut last);
    output
}

fn write_legacy(
    chat: &Chat,
    parent: &Style,
    output: &mut String,
    last: &mut Option<(Option<NamedColor>, Decorations)>,
) {
    let style = chat.style.inherit(parent);

    if !chat.text.is_empty() {
        let current = (
            style.color.map(TextColor::nearest_named),
            style.decorations(),
        );

        if last.as_ref() != Some(&current) {
            // a color code resets decorations on the client, so everything gets re-sent
            match current.0 {
                Some(color) => {
                    output.push(SECTION);
                    output.push(color.code());
                }
                None if last.is_some() => {
                    output.push(SECTION);
                    output.push('r');
                }
                None => {}
            }
            for (flag, code) in [
                (Decorations::OBFUSCATED, 'k'),
                (Decorations::BOLD, 'l'),
                (Decorations::STRIKETHROUGH, 'm'),
                (Decorations::UNDERLINED, 'n'),
                (Decorations::ITALIC, 'o'),
            ] {
                if current.1.contains(flag) {
                    output.push(SECTION);
                    output.push(code);
                }
            }
            *last = Some(current);
        }

        output.push_str(&chat.text);
    }

    for child in &chat.extra {
        write_legacy(child, &style, output, last);
    }
}
