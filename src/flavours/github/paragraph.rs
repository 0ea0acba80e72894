//! Paragraphizer for GitHub-flavoured Markdown
//!
//! Groups the flat token stream into typed paragraphs. Paragraph boundaries
//! are blank lines, list markers and code fences; a bare newline inside a
//! paragraph is a soft wrap and becomes a single space. Inline code spans and
//! link/image spans are lifted out of each finished paragraph into a
//! [`Substitutions`] table and replaced by placeholder markers, so emphasis
//! handling never sees their contents.

use super::token::{Token, TokenKind};

/// The block-level type of a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParagraphKind {
    #[default]
    Normal,
    /// Level is always 1-6; longer hash runs degrade to `Normal`.
    Heading(u8),
    Quote,
    Code,
    UnorderedItem,
    OrderedItem,
}

/// A run of tokens forming one paragraph.
#[derive(Debug, Clone, Default)]
pub struct Paragraph {
    pub kind: ParagraphKind,
    pub tokens: Vec<Token>,
    /// Leading space tokens captured before a list marker.
    pub indent_tokens: Vec<Token>,
}

impl Paragraph {
    pub fn is_list_item(&self) -> bool {
        matches!(
            self.kind,
            ParagraphKind::UnorderedItem | ParagraphKind::OrderedItem
        )
    }

    /// Nesting depth of a list item: two leading spaces per extra level.
    pub fn indent_depth(&self) -> u8 {
        u8::try_from(self.indent_tokens.len() / 2 + 1).unwrap_or(u8::MAX)
    }
}

/// Inline content lifted out of paragraphs, addressed by marker text.
#[derive(Debug, Default)]
pub struct Substitutions {
    /// Raw text of inline code spans, in extraction order.
    pub(crate) code: Vec<String>,
    /// Link and image spans, in extraction order.
    pub(crate) html: Vec<HtmlSpan>,
}

/// A link or image span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlSpan {
    Anchor { href: String, text: String },
    Image { src: String, alt: String },
}

impl Substitutions {
    /// Marker text standing in for the code span at `index`.
    pub fn code_marker(index: usize) -> String {
        format!("${{{{{index}}}}}$")
    }

    /// Marker text standing in for the link/image span at `index`.
    pub fn html_marker(index: usize) -> String {
        format!("$[[{index}]]$")
    }

    fn add_code(&mut self, content: String) -> String {
        self.code.push(content);
        Self::code_marker(self.code.len() - 1)
    }

    fn add_html(&mut self, span: HtmlSpan) -> String {
        self.html.push(span);
        Self::html_marker(self.html.len() - 1)
    }
}

/// Group tokens into paragraphs and extract inline spans.
pub fn paragraphize(tokens: Vec<Token>) -> (Vec<Paragraph>, Substitutions) {
    let mut paragraphs: Vec<Paragraph> = Vec::new();
    let mut substitutions = Substitutions::default();
    let mut current = Paragraph::default();
    // Leading spaces of the current line, held back until we know whether a
    // list marker follows them.
    let mut space_tokens: Vec<Token> = Vec::new();
    let mut line_has_nonspace = false;
    let mut prev_was_newline = false;

    let mut iter = tokens.into_iter().peekable();
    while let Some(token) = iter.next() {
        if matches!(token.kind, TokenKind::EndOfDocument) {
            break;
        }

        let first_non_space = !line_has_nonspace;
        if first_non_space && matches!(token.kind, TokenKind::Character(' ')) {
            space_tokens.push(token);
            prev_was_newline = false;
            continue;
        }

        let after_newline = prev_was_newline;
        if matches!(token.kind, TokenKind::NewLine) {
            prev_was_newline = true;
            line_has_nonspace = false;
            space_tokens.clear();
        } else {
            prev_was_newline = false;
            line_has_nonspace = true;
        }

        if matches!(token.kind, TokenKind::NewLine) && after_newline {
            // Blank line: paragraph boundary.
            close(&mut current, &mut paragraphs, &mut substitutions);
        } else if matches!(token.kind, TokenKind::CodeFenceDelimiter) {
            // Everything up to the closing fence is copied verbatim.
            current.kind = ParagraphKind::Code;
            while let Some(inner) = iter.next_if(|t| {
                !matches!(
                    t.kind,
                    TokenKind::CodeFenceDelimiter | TokenKind::EndOfDocument
                )
            }) {
                current.tokens.push(inner);
            }
            iter.next_if(|t| matches!(t.kind, TokenKind::CodeFenceDelimiter));
            close(&mut current, &mut paragraphs, &mut substitutions);
            // The tokenizer gave the closing fence its whole line, newline
            // included; restore the column state to match.
            line_has_nonspace = true;
            prev_was_newline = false;
        } else if first_non_space && matches!(token.kind, TokenKind::QuoteStart) {
            current.kind = ParagraphKind::Quote;
        } else if first_non_space && matches!(token.kind, TokenKind::HeadingStart(_)) {
            if let TokenKind::HeadingStart(level) = token.kind {
                current.kind = if (1..=6).contains(&level) {
                    ParagraphKind::Heading(level)
                } else {
                    ParagraphKind::Normal
                };
            }
        } else if first_non_space && matches!(token.kind, TokenKind::UnorderedListStart) {
            close(&mut current, &mut paragraphs, &mut substitutions);
            current.kind = ParagraphKind::UnorderedItem;
            current.indent_tokens = std::mem::take(&mut space_tokens);
        } else if first_non_space && matches!(token.kind, TokenKind::OrderedListStart(_)) {
            close(&mut current, &mut paragraphs, &mut substitutions);
            current.kind = ParagraphKind::OrderedItem;
            current.indent_tokens = std::mem::take(&mut space_tokens);
        } else if matches!(token.kind, TokenKind::NewLine) {
            // Soft wrap: joins the paragraph with a single space. A newline
            // before any content would otherwise leak a leading space into
            // the next paragraph.
            if !current.tokens.is_empty() {
                current.tokens.push(Token {
                    kind: TokenKind::Character(' '),
                    source: "\n".to_string(),
                });
            }
        } else {
            current.tokens.push(token);
        }
    }
    close(&mut current, &mut paragraphs, &mut substitutions);

    (paragraphs, substitutions)
}

/// Finish the current paragraph: trim one trailing line break, drop it if
/// empty, extract inline spans, append.
fn close(current: &mut Paragraph, out: &mut Vec<Paragraph>, substitutions: &mut Substitutions) {
    let mut paragraph = std::mem::take(current);
    let trailing_break = paragraph.tokens.last().is_some_and(|t| {
        matches!(t.kind, TokenKind::NewLine)
            || (matches!(t.kind, TokenKind::Character(_)) && t.source == "\n")
    });
    if trailing_break {
        paragraph.tokens.pop();
    }
    if paragraph.tokens.is_empty() {
        return;
    }
    if paragraph.kind != ParagraphKind::Code {
        extract_spans(&mut paragraph.tokens, substitutions);
    }
    out.push(paragraph);
}

/// Replace inline code spans and link/image spans with placeholder markers.
///
/// Code spans first, so backticked text can never be mistaken for part of a
/// link. Unmatched delimiters are left in place.
fn extract_spans(tokens: &mut Vec<Token>, substitutions: &mut Substitutions) {
    loop {
        let Some(open) = position(tokens, 0, |k| matches!(k, TokenKind::InlineCodeDelimiter))
        else {
            break;
        };
        let Some(end) = position(tokens, open + 1, |k| {
            matches!(k, TokenKind::InlineCodeDelimiter)
        }) else {
            break;
        };
        let content = literal_text(&tokens[open + 1..end]);
        let marker = substitutions.add_code(content);
        splice_marker(tokens, open, end, &marker);
    }

    let mut from = 0;
    loop {
        let Some(start) = position(tokens, from, |k| {
            matches!(k, TokenKind::LinkStart | TokenKind::ImageStart)
        }) else {
            break;
        };
        let middle = position(tokens, start + 1, |k| matches!(k, TokenKind::LinkMiddle));
        let end = middle
            .and_then(|m| position(tokens, m + 1, |k| matches!(k, TokenKind::LinkEnd)));
        let (Some(middle), Some(end)) = (middle, end) else {
            from = start + 1;
            continue;
        };

        let text = literal_text(&tokens[start + 1..middle]);
        let url = literal_text(&tokens[middle + 1..end]);
        let span = if matches!(tokens[start].kind, TokenKind::ImageStart) {
            HtmlSpan::Image {
                src: url,
                alt: text,
            }
        } else {
            HtmlSpan::Anchor {
                href: url,
                text,
            }
        };
        let marker = substitutions.add_html(span);
        splice_marker(tokens, start, end, &marker);
        from = start;
    }
}

fn position(
    tokens: &[Token],
    from: usize,
    matcher: impl Fn(&TokenKind) -> bool,
) -> Option<usize> {
    tokens[from..]
        .iter()
        .position(|t| matcher(&t.kind))
        .map(|p| p + from)
}

fn literal_text(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.literal()).collect()
}

fn splice_marker(tokens: &mut Vec<Token>, start: usize, end: usize, marker: &str) {
    tokens.splice(start..=end, marker.chars().map(Token::character));
}
