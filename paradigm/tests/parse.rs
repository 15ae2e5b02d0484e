use paradigm::{
    parser::{normalize_hex_colors, MAX_NESTING_DEPTH},
    protocol::datatypes::{Chat, ClickAction, HoverEvent, NamedColor, Style, TextColor},
    FormattingConfig, FormattingParser, TagRegistry,
};
use std::{sync::Arc, thread};

fn texts(chat: &Chat) -> Vec<&str> {
    chat.nodes()
        .into_iter()
        .map(|node| node.text.as_str())
        .filter(|text| !text.is_empty())
        .collect()
}

#[test]
fn plain_text_is_a_single_run() {
    let chat = FormattingParser::new().parse("Hello, world!", None);

    assert_eq!(chat.extra, vec![Chat::literal("Hello, world!")]);
}

#[test]
fn stray_brackets_are_text() {
    let chat = FormattingParser::new().parse("1 < 2 > 0", None);

    assert_eq!(chat.plain_text(), "1 < 2 > 0");
    assert!(chat.nodes().iter().all(|node| node.style.is_empty()));
}

#[test]
fn empty_input() {
    assert_eq!(FormattingParser::new().parse("", None), Chat::new());
}

#[test]
fn unknown_tags_pass_through() {
    let parser = FormattingParser::new();
    let chat = parser.parse("<foo:bar>hi</foo>", None);

    assert_eq!(chat.plain_text(), "<foo:bar>hi</foo>");
    assert!(chat.nodes().iter().all(|node| node.style.is_empty()));

    // the output parses to itself
    let again = parser.parse(&chat.plain_text(), None);
    assert_eq!(again.plain_text(), "<foo:bar>hi</foo>");
}

#[test]
fn escaped_brackets() {
    let chat = FormattingParser::new().parse("\\<b\\>not bold", None);

    assert_eq!(chat.plain_text(), "<b>not bold");
    assert!(chat.nodes().iter().all(|node| node.style.bold.is_none()));
}

#[test]
fn decoration_nesting() {
    let chat = FormattingParser::new().parse("<b><i>x</i></b>y", None);

    assert_eq!(chat.extra.len(), 2);
    assert_eq!(chat.extra[0].text, "x");
    assert_eq!(chat.extra[0].style.bold, Some(true));
    assert_eq!(chat.extra[0].style.italic, Some(true));
    assert_eq!(chat.extra[1].text, "y");
    assert_eq!(chat.extra[1].style, Style::new());
}

#[test]
fn tag_names_are_case_insensitive() {
    let chat = FormattingParser::new().parse("<BOLD>x</Bold>", None);

    assert_eq!(chat.extra[0].style.bold, Some(true));
}

#[test]
fn color_runs() {
    let chat = FormattingParser::new().parse("<color:#FF0000>red</color>plain", None);

    assert_eq!(chat.style, Style::new());
    assert_eq!(chat.extra.len(), 2);
    assert_eq!(chat.extra[0].text, "red");
    assert_eq!(chat.extra[0].style.color, Some(TextColor::Rgb(0xFF0000)));
    assert_eq!(chat.extra[1].text, "plain");
    assert_eq!(chat.extra[1].style, Style::new());
}

#[test]
fn named_and_invalid_colors() {
    let parser = FormattingParser::new();

    let chat = parser.parse("<c:gold>x</c>", None);
    assert_eq!(
        chat.extra[0].style.color,
        Some(TextColor::Named(NamedColor::Gold))
    );

    let chat = parser.parse("<color:nope>x</color>y", None);
    assert_eq!(chat.plain_text(), "xy");
    assert_eq!(chat.extra[0].style.color, None);
}

#[test]
fn urls_are_linked() {
    let chat = FormattingParser::new().parse("see https://example.com now", None);

    assert_eq!(texts(&chat), vec!["see ", "https://example.com", " now"]);
    assert_eq!(chat.extra[0].style, Style::new());
    assert_eq!(chat.extra[2].style, Style::new());

    let click = chat.extra[1].style.click_event.as_ref().unwrap();
    assert_eq!(click.action, ClickAction::OpenUrl);
    assert_eq!(click.value, "https://example.com");
}

#[test]
fn urls_keep_the_current_style() {
    let chat = FormattingParser::new().parse("<b>http://a.b/c?d=e</b>", None);

    assert_eq!(chat.extra.len(), 1);
    assert_eq!(chat.extra[0].style.bold, Some(true));
    assert_eq!(
        chat.extra[0].style.click_event.as_ref().unwrap().value,
        "http://a.b/c?d=e"
    );
}

#[test]
fn close_tags_are_matched_by_order() {
    let chat = FormattingParser::new().parse("<b>a<i>b</b>c</i>d", None);

    assert_eq!(texts(&chat), vec!["a", "b", "c", "d"]);
    // </b> closed the italic tag
    assert_eq!(chat.extra[2].style.bold, Some(true));
    assert_eq!(chat.extra[2].style.italic, None);
    assert_eq!(chat.extra[3].style, Style::new());
}

#[test]
fn extra_close_tags_are_ignored() {
    let chat = FormattingParser::new().parse("x</b></b>y", None);

    assert_eq!(chat.plain_text(), "xy");
}

#[test]
fn strict_mode_keeps_mismatched_close_tags() {
    let parser = FormattingParser::with_config(FormattingConfig {
        strict_tags: true,
        ..Default::default()
    });

    let chat = parser.parse("<b>a<i>b</b>c", None);
    assert_eq!(chat.plain_text(), "ab</b>c");
    let last = chat.extra.last().unwrap();
    assert_eq!(last.style.bold, Some(true));
    assert_eq!(last.style.italic, Some(true));

    assert_eq!(parser.parse("x</b>", None).plain_text(), "x</b>");

    // aliases still match
    let chat = parser.parse("<b>a</bold>b", None);
    assert_eq!(chat.plain_text(), "ab");
    assert_eq!(chat.extra[1].style, Style::new());
}

#[test]
fn hover_text_is_markup() {
    let chat = FormattingParser::new().parse("<hover:'<b>tip</b>'>x</hover>y", None);

    assert_eq!(chat.plain_text(), "xy");

    let Some(HoverEvent::ShowText(contents)) = &chat.extra[0].style.hover_event else {
        panic!("no hover event on {:?}", chat.extra[0]);
    };
    assert_eq!(contents.plain_text(), "tip");
    assert_eq!(contents.extra[0].style.bold, Some(true));

    assert_eq!(chat.extra[1].style.hover_event, None);
}

#[test]
fn hover_nesting_is_limited() {
    let levels = 3000;
    let markup = format!("{}x{}", "<hover:".repeat(levels), ">t".repeat(levels));
    let chat = FormattingParser::new().parse(&markup, None);

    assert_eq!(chat.plain_text(), "t");

    let mut depth = 0;
    let mut node = &chat;
    while let Some(HoverEvent::ShowText(contents)) =
        node.extra.first().and_then(|first| first.style.hover_event.as_ref())
    {
        assert_eq!(contents.plain_text(), "t");
        depth += 1;
        node = contents;
    }
    assert_eq!(depth, MAX_NESTING_DEPTH);
}

#[test]
fn unclosed_tags_are_flushed() {
    let chat = FormattingParser::new().parse("<gradient:#FF0000:#0000FF>abc", None);

    let colors: Vec<u32> = chat
        .extra
        .iter()
        .map(|node| node.style.color.unwrap().rgb())
        .collect();
    assert_eq!(colors, vec![0xFF0000, 0x7F007F, 0x0000FF]);
}

#[test]
fn empty_registry_passes_everything_through() {
    let parser = FormattingParser::new().with_registry(TagRegistry::empty());

    assert_eq!(parser.parse("<b>x</b>", None).plain_text(), "<b>x</b>");
}

#[test]
fn legacy_codes() {
    let parser = FormattingParser::with_config(FormattingConfig {
        legacy_codes: true,
        ..Default::default()
    });

    let chat = parser.parse("&cRed &lbold&r plain", None);
    assert_eq!(texts(&chat), vec!["Red ", "bold", " plain"]);
    assert_eq!(
        chat.extra[0].style.color,
        Some(TextColor::Named(NamedColor::Red))
    );
    assert_eq!(chat.extra[1].style.bold, Some(true));
    assert_eq!(
        chat.extra[1].style.color,
        Some(TextColor::Named(NamedColor::Red))
    );
    assert_eq!(chat.extra[2].style.color, None);
    assert_eq!(chat.extra[2].style.bold, Some(false));

    let chat = parser.parse("&#ff8800orange", None);
    assert_eq!(chat.extra[0].style.color, Some(TextColor::Rgb(0xFF8800)));
}

#[test]
fn legacy_codes_end_with_their_tag() {
    let parser = FormattingParser::with_config(FormattingConfig {
        legacy_codes: true,
        ..Default::default()
    });

    let chat = parser.parse("<b>&ax</b>y", None);
    assert_eq!(
        chat.extra[0].style.color,
        Some(TextColor::Named(NamedColor::Green))
    );
    assert_eq!(chat.extra[1].style, Style::new());
}

#[test]
fn legacy_codes_are_off_by_default() {
    assert_eq!(
        FormattingParser::new().parse("&cRed", None).plain_text(),
        "&cRed"
    );
}

#[test]
fn json_output() {
    let chat = FormattingParser::new().parse("<b>hi</b>", None);
    let json: serde_json::Value = serde_json::from_str(&chat.to_json().unwrap()).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "text": "",
            "extra": [{ "text": "hi", "bold": true }],
        })
    );
}

#[test]
fn hex_shorthand_is_kept_as_written() {
    for text in ["code &#ff00aa here", "&#FF00AA", "&#Ff00aA&#123456", "&#12345 short"] {
        assert_eq!(normalize_hex_colors(text), text);
        assert_eq!(FormattingParser::new().parse(text, None).plain_text(), text);
    }
}

#[test]
fn colors_inside_decorations_leave_the_root_alone() {
    let chat = FormattingParser::new().parse("<b><color:red>x</color></b>y", None);

    assert_eq!(chat.style, Style::new());
    assert_eq!(texts(&chat), vec!["x", "y"]);
    assert_eq!(chat.extra[0].style.bold, Some(true));
    assert_eq!(
        chat.extra[0].style.color,
        Some(TextColor::Named(NamedColor::Red))
    );
    assert_eq!(chat.extra[1].style, Style::new());
    assert_eq!(chat.to_legacy_string(), "§c§lx§ry");
}

#[test]
fn legacy_string_output() {
    let chat = FormattingParser::new().parse("<c:red>a</c><b>b</b>", None);

    assert_eq!(chat.to_legacy_string(), "§ca§r§lb");
}

#[test]
fn shared_between_threads() {
    let parser = Arc::new(FormattingParser::new());
    let markup = "<gradient:red:blue>Hello</gradient> <rainbow>world</rainbow> <center>hi</center>";
    let expected = parser.parse(markup, None);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let parser = Arc::clone(&parser);
            thread::spawn(move || {
                (0..50)
                    .map(|_| parser.parse(markup, None))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        for chat in handle.join().unwrap() {
            assert_eq!(chat, expected);
        }
    }
}
