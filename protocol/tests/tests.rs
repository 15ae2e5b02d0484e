use protocol::datatypes::chat_parse::{self, LegacyCode, LegacySegment, AMPERSAND, SECTION};
use protocol::datatypes::*;

#[test]
fn color_parsing() {
    assert_eq!(TextColor::parse("#FF0000"), Some(TextColor::Rgb(0xFF0000)));
    assert_eq!(TextColor::parse("&#00ff7f"), Some(TextColor::Rgb(0x00FF7F)));
    assert_eq!(
        TextColor::parse("Dark_Grey"),
        Some(TextColor::Named(NamedColor::DarkGray))
    );
    assert_eq!(TextColor::parse("c"), Some(TextColor::Named(NamedColor::Red)));
    assert_eq!(TextColor::parse("&6"), Some(TextColor::Named(NamedColor::Gold)));
    assert_eq!(TextColor::parse("#12345"), None);
    assert_eq!(TextColor::parse("#GGGGGG"), None);
    assert_eq!(TextColor::parse("not_a_color"), None);
}

#[test]
fn named_color_codes() {
    assert_eq!(NamedColor::Black.code(), '0');
    assert_eq!(NamedColor::Gold.code(), '6');
    assert_eq!(NamedColor::White.code(), 'f');
    assert_eq!(NamedColor::from_code('d'), Some(NamedColor::LightPurple));
    assert_eq!(NamedColor::from_code('z'), None);
}

#[test]
fn nearest_named_color() {
    assert_eq!(TextColor::Rgb(0xFE5656).nearest_named(), NamedColor::Red);
    assert_eq!(TextColor::Rgb(0x010101).nearest_named(), NamedColor::Black);
    assert_eq!(TextColor::Rgb(0xFFAB01).nearest_named(), NamedColor::Gold);
}

#[test]
fn display_colors() {
    assert_eq!(TextColor::Rgb(0xABCDEF).to_string(), "#abcdef");
    assert_eq!(TextColor::Named(NamedColor::DarkAqua).to_string(), "dark_aqua");
}

#[test]
fn legacy_segments() {
    let segments = chat_parse::segments("&cHello &lworld &#00FF00x & y", AMPERSAND);

    assert_eq!(
        segments,
        vec![
            LegacySegment::Code(LegacyCode::Color(NamedColor::Red)),
            LegacySegment::Text("Hello ".into()),
            LegacySegment::Code(LegacyCode::Decoration(Decorations::BOLD)),
            LegacySegment::Text("world ".into()),
            LegacySegment::Code(LegacyCode::Hex(0x00FF00)),
            LegacySegment::Text("x & y".into()),
        ]
    );
}

#[test]
fn legacy_escape() {
    assert_eq!(
        chat_parse::segments("\\&cnot red", AMPERSAND),
        vec![LegacySegment::Text("&cnot red".into())]
    );
}

#[test]
fn legacy_parse() {
    let chat = chat_parse::parse("§aGreen §lbold§r plain", SECTION);

    assert_eq!(chat.plain_text(), "Green bold plain");
    assert_eq!(chat.extra.len(), 3);
    assert_eq!(
        chat.extra[0].style.color,
        Some(TextColor::Named(NamedColor::Green))
    );
    assert_eq!(chat.extra[1].style.bold, Some(true));
    assert_eq!(chat.extra[2].style.bold, Some(false));
    assert_eq!(chat.extra[2].style.color, None);
}

#[test]
fn legacy_parse_single_run() {
    let chat = chat_parse::parse("no codes here", SECTION);

    assert_eq!(chat, Chat::literal("no codes here"));
}

#[test]
fn to_legacy_string() {
    let mut chat = Chat::new();
    chat.append(Chat::styled(
        "Hi ",
        Style::new().with_color(TextColor::Named(NamedColor::Gold)),
    ));
    chat.append(Chat::styled(
        "there",
        Style::new()
            .with_color(TextColor::Rgb(0xFF5050))
            .with_decoration(Decorations::BOLD, true),
    ));
    chat.append(Chat::literal("!"));

    assert_eq!(chat.to_legacy_string(), "§6Hi §c§lthere§r!");
}

#[test]
fn legacy_string_inherits_parent_style() {
    let mut parent = Chat::styled(
        "",
        Style::new().with_decoration(Decorations::ITALIC, true),
    );
    parent.append(Chat::literal("a"));
    parent.append(Chat::literal("b"));

    assert_eq!(parent.to_legacy_string(), "§oab");
}

#[test]
fn style_inheritance() {
    let parent = Style::new()
        .with_color(TextColor::Named(NamedColor::Red))
        .with_decoration(Decorations::BOLD, true);
    let child = Style::new().with_decoration(Decorations::BOLD, false);

    let resolved = child.inherit(&parent);

    assert_eq!(resolved.color, Some(TextColor::Named(NamedColor::Red)));
    assert_eq!(resolved.bold, Some(false));
    assert_eq!(resolved.decorations(), Decorations::empty());
}

#[cfg(feature = "ser")]
#[test]
fn json_shape() {
    let chat = Chat::styled(
        "click me",
        Style::new()
            .with_color(TextColor::Rgb(0xFF0000))
            .with_decoration(Decorations::UNDERLINED, true)
            .with_click(ClickEvent::new(ClickAction::OpenUrl, "https://example.com"))
            .with_hover(HoverEvent::ShowText(Box::new(Chat::literal("tooltip")))),
    );

    let json: serde_json::Value = serde_json::from_str(&chat.to_json().unwrap()).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "text": "click me",
            "color": "#ff0000",
            "underlined": true,
            "clickEvent": { "action": "open_url", "value": "https://example.com" },
            "hoverEvent": { "action": "show_text", "contents": { "text": "tooltip" } },
        })
    );
}

#[cfg(feature = "ser")]
#[test]
fn json_round_trip_with_children() {
    let mut chat = Chat::literal("a");
    chat.append(Chat::styled(
        "b",
        Style::new().with_color(TextColor::Named(NamedColor::Aqua)),
    ));

    let json = chat.to_json().unwrap();
    assert_eq!(Chat::from_json(&json).unwrap(), chat);
}
