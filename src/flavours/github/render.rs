//! Renderer: block entries into a document model
//!
//! Walks the listized block entries, emitting one document block per
//! paragraph with the block and character formats the paragraph kind calls
//! for, toggling bold/italic on marker tokens. Placeholder markers left by
//! span extraction are resolved in a final pass over the finished document.

use super::list::BlockEntry;
use super::paragraph::{HtmlSpan, Paragraph, ParagraphKind, Substitutions};
use super::token::{Token, TokenKind};
use crate::document::{BlockFormat, BlockTag, CharFormat, DocumentModel, ListStyle};
use crate::error::ConvertError;

/// Bottom margin, in points, given to every non-list block.
const BLOCK_BOTTOM_MARGIN: f32 = 5.0;

/// Render block entries into `target`, then resolve placeholders.
///
/// The target is cleared first. Fails only with
/// [`ConvertError::UnresolvedPlaceholder`] when a marker produced during
/// extraction cannot be found in the rendered document.
pub fn render(
    entries: Vec<BlockEntry>,
    substitutions: Substitutions,
    target: &mut dyn DocumentModel,
) -> Result<(), ConvertError> {
    target.clear();

    for entry in entries {
        match entry {
            BlockEntry::Single(paragraph) => {
                let mut block_format = BlockFormat {
                    bottom_margin: BLOCK_BOTTOM_MARGIN,
                    ..BlockFormat::default()
                };
                let mut char_format = CharFormat::default();
                match paragraph.kind {
                    ParagraphKind::Heading(level) => {
                        char_format.font_size_pt = super::heading_size(level);
                    }
                    ParagraphKind::Quote => block_format.indent = 1,
                    ParagraphKind::Code => {
                        block_format.non_breakable = true;
                        char_format.monospace = true;
                    }
                    _ => {}
                }

                target.new_block();
                target.set_block_format(block_format);
                target.set_block_tag(block_tag(&paragraph));
                insert_inline(
                    target,
                    &paragraph.tokens,
                    &char_format,
                    paragraph.kind == ParagraphKind::Code,
                );
            }
            BlockEntry::Group(group) => {
                let style = if group.ordered {
                    ListStyle::Ordered
                } else {
                    ListStyle::Unordered
                };
                let list = target.create_or_extend_list(style, group.indent_depth);
                for item in &group.items {
                    target.new_block();
                    target.set_block_format(BlockFormat::default());
                    target.set_block_tag(block_tag(item));
                    insert_inline(target, &item.tokens, &CharFormat::default(), false);
                    target.attach_current_block(list);
                }
            }
        }
    }

    resolve_placeholders(substitutions, target)
}

fn block_tag(paragraph: &Paragraph) -> BlockTag {
    match paragraph.kind {
        ParagraphKind::Normal => BlockTag::Normal,
        ParagraphKind::Heading(level) => BlockTag::Heading(level),
        ParagraphKind::Quote => BlockTag::Quote,
        ParagraphKind::Code => BlockTag::Code,
        ParagraphKind::UnorderedItem => BlockTag::UnorderedItem,
        ParagraphKind::OrderedItem => BlockTag::OrderedItem,
    }
}

/// Insert a paragraph's tokens into the current block.
///
/// In verbatim mode (code paragraphs) every token contributes its raw source
/// under the base format; newlines inside it continue into fresh blocks via
/// the model's `insert_run` contract. Otherwise bold/italic markers toggle
/// state and everything else is inserted literally.
fn insert_inline(
    target: &mut dyn DocumentModel,
    tokens: &[Token],
    base: &CharFormat,
    verbatim: bool,
) {
    if verbatim {
        for token in tokens {
            target.insert_run(&token.source, base);
        }
        return;
    }

    let mut format = base.clone();
    let code_format = CharFormat {
        monospace: true,
        ..base.clone()
    };
    let mut iter = tokens.iter();
    while let Some(token) = iter.next() {
        match &token.kind {
            TokenKind::Bold => format.bold = !format.bold,
            TokenKind::Italic => format.italic = !format.italic,
            TokenKind::InlineCodeDelimiter => {
                // Only unmatched delimiters survive extraction; the rest of
                // the paragraph is treated as a code run.
                while let Some(inner) = iter.next() {
                    if matches!(inner.kind, TokenKind::InlineCodeDelimiter) {
                        break;
                    }
                    target.insert_run(&inner.literal(), &code_format);
                }
            }
            TokenKind::Character(_) => target.insert_run(&token.literal(), &format),
            _ => target.insert_run(&token.source, &format),
        }
    }
}

fn resolve_placeholders(
    substitutions: Substitutions,
    target: &mut dyn DocumentModel,
) -> Result<(), ConvertError> {
    for (index, content) in substitutions.code.iter().enumerate() {
        let marker = Substitutions::code_marker(index);
        if !target.replace_marker(&marker, content, &CharFormat::code()) {
            return Err(ConvertError::UnresolvedPlaceholder(marker));
        }
    }
    for (index, span) in substitutions.html.iter().enumerate() {
        let marker = Substitutions::html_marker(index);
        let (text, format) = match span {
            HtmlSpan::Anchor { href, text } => (
                text,
                CharFormat {
                    anchor_href: Some(href.clone()),
                    ..CharFormat::default()
                },
            ),
            HtmlSpan::Image { src, alt } => (
                alt,
                CharFormat {
                    image_src: Some(src.clone()),
                    ..CharFormat::default()
                },
            ),
        };
        if !target.replace_marker(&marker, text, &format) {
            return Err(ConvertError::UnresolvedPlaceholder(marker));
        }
    }
    Ok(())
}
