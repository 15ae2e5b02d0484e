//! Splits markup into a flat token stream.
//!
//! The tokenizer knows nothing about which tags exist. Anything shaped like `<...>` becomes a
//! tag token and the parser decides whether it's real markup or literal text. Brackets are
//! paired up front, so a `<` that never closes doesn't cost a scan to the end of the input.

use std::{collections::HashMap, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Text,
    /// A backslash-escaped `<` or `>`, the value is the bracket itself
    Escape,
    /// `<name:args>`, the value is `name:args`
    TagOpen,
    /// `</name>`, the value is `name`
    TagClose,
    /// `<name:args/>`, the value is `name:args`
    TagSelfClose,
    Eof,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    /// The token as it was written in the source
    pub fn source(&self) -> String {
        match self.kind {
            TokenKind::Text | TokenKind::Escape => self.value.clone(),
            TokenKind::TagOpen => format!("<{}>", self.value),
            TokenKind::TagClose => format!("</{}>", self.value),
            TokenKind::TagSelfClose => format!("<{}/>", self.value),
            TokenKind::Eof => String::new(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?})", self.kind, self.value)
    }
}

/// One-shot iterator over the tokens of `input`. Always ends with exactly one [`TokenKind::Eof`].
#[derive(Debug)]
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
    /// Where the `>` of each `<` is, skipping quoted strings
    quoted_ends: HashMap<usize, usize>,
    /// Same without quotes, for arguments with a stray apostrophe ("<hover:don't>")
    plain_ends: HashMap<usize, usize>,
    finished: bool,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            quoted_ends: match_brackets(input, true),
            plain_ends: match_brackets(input, false),
            finished: false,
        }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn tag_end(&self, start: usize) -> Option<usize> {
        self.quoted_ends
            .get(&start)
            .or_else(|| self.plain_ends.get(&start))
            .copied()
    }

    /// Consumes text until the next possible tag or escape. The first character is always
    /// consumed, so a `<` that didn't form a tag becomes text.
    fn consume_text(&mut self) -> Token {
        let rest = self.rest();
        let mut end = rest.len();

        let mut chars = rest.char_indices().skip(1).peekable();
        while let Some((i, c)) = chars.next() {
            if c == '<' && self.tag_end(self.pos + i).is_some() {
                end = i;
                break;
            }
            if c == '\\' && matches!(chars.peek(), Some((_, '<' | '>'))) {
                end = i;
                break;
            }
        }

        self.pos += end;

        Token::new(TokenKind::Text, &rest[..end])
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        let rest = self.rest();

        if rest.is_empty() {
            self.finished = true;
            return Some(Token::new(TokenKind::Eof, ""));
        }

        if let Some(bracket) = rest
            .strip_prefix('\\')
            .and_then(|r| r.chars().next())
            .filter(|c| matches!(c, '<' | '>'))
        {
            self.pos += 2;
            return Some(Token::new(TokenKind::Escape, bracket));
        }

        if rest.starts_with('<') {
            if let Some(end) = self.tag_end(self.pos) {
                let body = &self.input[self.pos + 1..end];
                if !body.is_empty() {
                    self.pos = end + 1;
                    return Some(classify(body));
                }
            }
        }

        Some(self.consume_text())
    }
}

/// Tokenizes the whole input at once
pub fn tokenize(input: &str) -> Vec<Token> {
    Tokenizer::new(input).collect()
}

fn classify(body: &str) -> Token {
    if let Some(name) = body.strip_prefix('/') {
        Token::new(TokenKind::TagClose, name)
    } else if let Some(body) = body.strip_suffix('/') {
        Token::new(TokenKind::TagSelfClose, body)
    } else {
        Token::new(TokenKind::TagOpen, body)
    }
}

/// Pairs every `<` with the `>` that closes it, in one pass over `input`. Nested `<...>` pairs
/// and escaped brackets are skipped, and so are quoted strings inside brackets if `quotes`.
/// A `<` without a pair isn't in the map.
fn match_brackets(input: &str, quotes: bool) -> HashMap<usize, usize> {
    let mut ends = HashMap::new();
    let mut open = Vec::new();
    let mut in_single = false;
    let mut in_double = false;
    let mut chars = input.char_indices();

    while let Some((i, c)) = chars.next() {
        match c {
            '\'' if quotes && !in_double && !open.is_empty() => in_single = !in_single,
            '"' if quotes && !in_single && !open.is_empty() => in_double = !in_double,
            _ if in_single || in_double => {}
            '\\' => {
                chars.next();
            }
            '<' => open.push(i),
            '>' => {
                if let Some(start) = open.pop() {
                    ends.insert(start, i);
                }
            }
            _ => {}
        }
    }

    ends
}

/// Index of the first `:` that is outside of quotes and outside of `<...>`.
///
/// `<`/`>` only count outside of quotes, and quotes only count outside of angle brackets.
pub fn find_first_colon_outside_quotes(input: &str) -> Option<usize> {
    let mut in_single = false;
    let mut in_double = false;
    let mut in_angle = false;

    for (i, c) in input.char_indices() {
        match c {
            '<' if !in_single && !in_double => in_angle = true,
            '>' if !in_single && !in_double => in_angle = false,
            '\'' if !in_double && !in_angle => in_single = !in_single,
            '"' if !in_single && !in_angle => in_double = !in_double,
            ':' if !in_single && !in_double && !in_angle => return Some(i),
            _ => {}
        }
    }

    None
}

/// Splits a tag body into the tag name and its arguments (empty if there's no colon)
pub fn split_tag_body(body: &str) -> (&str, &str) {
    match find_first_colon_outside_quotes(body) {
        Some(i) => (&body[..i], &body[i + 1..]),
        None => (body, ""),
    }
}
