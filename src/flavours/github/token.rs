//! Tokenizer for GitHub-flavoured Markdown
//!
//! Splits cleaned markup text into a flat token stream. Markers that are only
//! meaningful at the start of a line or paragraph (headings, quotes, fences,
//! list markers) are resolved here using column state tracked while scanning
//! forward, so later stages never have to look back at the raw text.

use std::borrow::Cow;

/// What a token means. Marker tokens keep their raw spelling in
/// [`Token::source`] so unmatched ones can degrade back to literal text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// A single character of plain text.
    Character(char),
    NewLine,
    /// `#`+ at the first non-space position, with the number of hashes.
    HeadingStart(u8),
    /// `>` at the first non-space position.
    QuoteStart,
    /// ``` at the start of a line, including the remainder of that line.
    CodeFenceDelimiter,
    /// A single backtick.
    InlineCodeDelimiter,
    /// `**` or `__`.
    Bold,
    /// `*` or `_`.
    Italic,
    /// `![`
    ImageStart,
    /// `[`
    LinkStart,
    /// `](`
    LinkMiddle,
    /// `)`
    LinkEnd,
    /// `* ` at the first non-space position.
    UnorderedListStart,
    /// One or two digits followed by `. ` at the first non-space position.
    OrderedListStart(u8),
    /// `<tag ...>`
    HtmlTagOpen(String),
    /// `</tag>`
    HtmlTagClose(String),
    /// Terminator appended after the last real token.
    EndOfDocument,
}

/// A token together with the exact text it was scanned from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// The raw characters this token consumed, escape backslashes included.
    pub source: String,
}

impl Token {
    fn new(kind: TokenKind, source: impl Into<String>) -> Self {
        Token {
            kind,
            source: source.into(),
        }
    }

    /// A plain character token spelling itself.
    pub fn character(c: char) -> Self {
        Token::new(TokenKind::Character(c), c.to_string())
    }

    /// The text this token contributes when treated as literal content.
    ///
    /// For characters this is the character itself (dropping any escape
    /// backslash from the source), for everything else the raw source.
    pub fn literal(&self) -> Cow<'_, str> {
        match self.kind {
            TokenKind::Character(c) => Cow::Owned(c.to_string()),
            _ => Cow::Borrowed(&self.source),
        }
    }
}

/// Tokenize cleaned markup text.
///
/// Total: every input produces a token stream ending in
/// [`TokenKind::EndOfDocument`], never an error.
pub fn tokenize(text: &str) -> Vec<Token> {
    let chars: Vec<char> = text.chars().collect();
    let mut tokens: Vec<Token> = Vec::new();
    let mut i = 0;
    let mut escape_next = false;
    // True once the current line contains anything but spaces.
    let mut line_has_nonspace = false;

    while i < chars.len() {
        let c = chars[i];
        i += 1;

        if escape_next {
            escape_next = false;
            let mut source = String::from('\\');
            source.push(c);
            tokens.push(Token::new(TokenKind::Character(c), source));
            continue;
        }
        // Backslash-newline is not an escape; the backslash falls through to
        // the rules below and ends up a plain character.
        if c == '\\' && chars.get(i) != Some(&'\n') {
            escape_next = true;
            line_has_nonspace = true;
            continue;
        }

        let start_of_paragraph = tokens
            .last()
            .map_or(true, |t| matches!(t.kind, TokenKind::NewLine));
        let first_non_space = start_of_paragraph || !line_has_nonspace;

        let token = if first_non_space && c == '#' {
            let mut source = String::from('#');
            let mut level: u8 = 1;
            while chars.get(i) == Some(&'#') {
                level = level.saturating_add(1);
                source.push('#');
                i += 1;
            }
            source.push_str(&consume_spaces(&chars, &mut i));
            Token::new(TokenKind::HeadingStart(level), source)
        } else if first_non_space && c == '>' {
            let mut source = String::from('>');
            source.push_str(&consume_spaces(&chars, &mut i));
            Token::new(TokenKind::QuoteStart, source)
        } else if start_of_paragraph
            && c == '`'
            && chars.get(i) == Some(&'`')
            && chars.get(i + 1) == Some(&'`')
        {
            // The fence owns the rest of its line, newline included.
            i += 2;
            let mut source = String::from("```");
            source.push_str(&consume_spaces(&chars, &mut i));
            source.push_str(&consume_line(&chars, &mut i));
            line_has_nonspace = false;
            tokens.push(Token::new(TokenKind::CodeFenceDelimiter, source));
            continue;
        } else if first_non_space && c == '*' && chars.get(i) == Some(&' ') {
            let mut source = String::from('*');
            source.push_str(&consume_spaces(&chars, &mut i));
            Token::new(TokenKind::UnorderedListStart, source)
        } else if first_non_space
            && c.is_ascii_digit()
            && chars.get(i) == Some(&'.')
            && chars.get(i + 1) == Some(&' ')
        {
            let number = digit(c);
            let mut source = String::from(c);
            source.push('.');
            i += 1;
            source.push_str(&consume_spaces(&chars, &mut i));
            Token::new(TokenKind::OrderedListStart(number), source)
        } else if first_non_space
            && c.is_ascii_digit()
            && chars.get(i).is_some_and(|d| d.is_ascii_digit())
            && chars.get(i + 1) == Some(&'.')
            && chars.get(i + 2) == Some(&' ')
        {
            let second = chars[i];
            let number = digit(c) * 10 + digit(second);
            let mut source = String::from(c);
            source.push(second);
            source.push('.');
            i += 2;
            source.push_str(&consume_spaces(&chars, &mut i));
            Token::new(TokenKind::OrderedListStart(number), source)
        } else if (c == '*' || c == '_') && chars.get(i) == Some(&c) {
            i += 1;
            Token::new(TokenKind::Bold, format!("{c}{c}"))
        } else if c == '*' || c == '_' {
            Token::new(TokenKind::Italic, c.to_string())
        } else if c == '!' && chars.get(i) == Some(&'[') {
            i += 1;
            Token::new(TokenKind::ImageStart, "![")
        } else if c == '[' {
            Token::new(TokenKind::LinkStart, "[")
        } else if c == ']' && chars.get(i) == Some(&'(') {
            i += 1;
            Token::new(TokenKind::LinkMiddle, "](")
        } else if c == ')' {
            Token::new(TokenKind::LinkEnd, ")")
        } else if c == '`' {
            Token::new(TokenKind::InlineCodeDelimiter, "`")
        } else if c == '\n' {
            Token::new(TokenKind::NewLine, "\n")
        } else if c == '<' {
            let closing = chars.get(i) == Some(&'/');
            let mut raw = String::from('<');
            while i < chars.len() {
                let tc = chars[i];
                i += 1;
                raw.push(tc);
                if tc == '>' {
                    break;
                }
            }
            let kind = if closing {
                TokenKind::HtmlTagClose(raw.clone())
            } else {
                TokenKind::HtmlTagOpen(raw.clone())
            };
            Token::new(kind, raw)
        } else {
            Token::character(c)
        };

        match token.kind {
            TokenKind::NewLine => line_has_nonspace = false,
            TokenKind::Character(' ') => {}
            _ => line_has_nonspace = true,
        }
        tokens.push(token);
    }

    tokens.push(Token::new(TokenKind::EndOfDocument, ""));
    tokens
}

fn digit(c: char) -> u8 {
    c.to_digit(10).unwrap_or(0) as u8
}

/// Consume a run of spaces starting at `*i`, returning them.
fn consume_spaces(chars: &[char], i: &mut usize) -> String {
    let mut spaces = String::new();
    while chars.get(*i) == Some(&' ') {
        spaces.push(' ');
        *i += 1;
    }
    spaces
}

/// Consume up to and including the next newline, returning the consumed text.
fn consume_line(chars: &[char], i: &mut usize) -> String {
    let mut line = String::new();
    while *i < chars.len() {
        let c = chars[*i];
        *i += 1;
        line.push(c);
        if c == '\n' {
            break;
        }
    }
    line
}
