//! Serializer: document model back to GitHub-flavoured Markdown
//!
//! Single pass over the document's blocks. Headings are recognized by their
//! run point size, list items by list membership, code blocks by a monospace
//! block format; consecutive monospace blocks share one fence. Inline
//! formatting is reconstructed by walking each block's per-character formats
//! and emitting markers at run boundaries. Quote blocks come out as plain
//! paragraphs.

use super::heading_level;
use crate::document::{DocumentModel, ListStyle};
use crate::error::ConvertError;

/// Write `source` out as markup text.
pub fn serialize(source: &dyn DocumentModel) -> Result<String, ConvertError> {
    let mut lines: Vec<String> = Vec::new();
    let mut was_in_list = false;
    let mut in_code_block = false;

    for block in 0..source.block_count() {
        let list = source.list_of(block);

        // A list needs a trailing blank line, otherwise the next block would
        // be read back as part of the last item.
        if list.is_none() && was_in_list {
            lines.push(String::new());
            was_in_list = false;
        }

        if let Some(list) = list {
            end_code_block(&mut lines, &mut in_code_block);
            let depth = source.list_depth(list);
            let indent = "  ".repeat(usize::from(depth.saturating_sub(1)));
            let marker = match source.list_style(list) {
                ListStyle::Unordered => "* ".to_string(),
                ListStyle::Ordered => {
                    let index = source.item_index(list, block).ok_or_else(|| {
                        ConvertError::MalformedDocument(format!(
                            "block {block} is not an item of its own list"
                        ))
                    })?;
                    format!("{}. ", index + 1)
                }
            };
            lines.push(format!(
                "{indent}{marker}{}",
                inline_markup(source, block, false)?
            ));
            was_in_list = true;
            continue;
        }

        let char_format = source.block_char_format(block);
        if let Some(level) = char_format.font_size_pt.and_then(heading_level) {
            end_code_block(&mut lines, &mut in_code_block);
            lines.push(format!(
                "{} {}\n",
                "#".repeat(usize::from(level)),
                inline_markup(source, block, false)?
            ));
        } else if char_format.monospace {
            if !in_code_block {
                in_code_block = true;
                lines.push("```".to_string());
            }
            lines.push(source.block_text(block));
        } else {
            end_code_block(&mut lines, &mut in_code_block);
            lines.push(format!("{}\n", inline_markup(source, block, true)?));
        }
    }
    end_code_block(&mut lines, &mut in_code_block);

    // Only the trailing blank line is trimmed; leading whitespace is list
    // indentation and must survive.
    Ok(lines.join("\n").trim_end().to_string())
}

fn end_code_block(lines: &mut Vec<String>, in_code_block: &mut bool) {
    if *in_code_block {
        lines.push("```\n".to_string());
        *in_code_block = false;
    }
}

/// Reconstruct one block's text with inline markers.
///
/// Emphasis and code markers are emitted wherever the format flips between
/// two characters; link and image spans open and close around runs sharing
/// an `anchor_href` or `image_src`. Any state still open at the end of the
/// block is closed. With `at_line_start`, characters that would re-read as a
/// block marker at the front of the line are escaped too.
fn inline_markup(
    source: &dyn DocumentModel,
    block: usize,
    at_line_start: bool,
) -> Result<String, ConvertError> {
    let text = source.block_text(block);
    let marker_dot = if at_line_start {
        leading_marker_dot(&text)
    } else {
        None
    };
    let mut out = String::new();
    let mut bold = false;
    let mut italic = false;
    let mut mono = false;
    let mut link: Option<String> = None;
    let mut image: Option<String> = None;

    for (offset, c) in text.chars().enumerate() {
        let format = source.char_format_at(block, offset).ok_or_else(|| {
            ConvertError::MalformedDocument(format!(
                "block {block} has no character format at offset {offset}"
            ))
        })?;

        if let Some(src) = &image {
            if format.image_src.as_deref() != Some(src.as_str()) {
                out.push_str(&format!("]({src})"));
                image = None;
            }
        }
        if let Some(href) = &link {
            if format.anchor_href.as_deref() != Some(href.as_str()) {
                out.push_str(&format!("]({href})"));
                link = None;
            }
        }

        if format.italic != italic {
            out.push('_');
            italic = !italic;
        }
        if format.bold != bold {
            out.push_str("**");
            bold = !bold;
        }
        if format.monospace != mono {
            out.push('`');
            mono = !mono;
        }
        if link.is_none() {
            if let Some(href) = &format.anchor_href {
                out.push('[');
                link = Some(href.clone());
            }
        }
        if image.is_none() {
            if let Some(src) = &format.image_src {
                out.push_str("![");
                image = Some(src.clone());
            }
        }

        // Inside code, link or image runs the re-reader takes characters
        // literally, so no escaping is needed there.
        if mono || link.is_some() || image.is_some() {
            out.push(c);
        } else if (at_line_start && offset == 0 && matches!(c, '#' | '>'))
            || marker_dot == Some(offset)
        {
            out.push('\\');
            out.push(c);
        } else {
            push_escaped(c, &mut out);
        }
    }

    if let Some(src) = image {
        out.push_str(&format!("]({src})"));
    }
    if let Some(href) = link {
        out.push_str(&format!("]({href})"));
    }
    if mono {
        out.push('`');
    }
    if bold {
        out.push_str("**");
    }
    if italic {
        out.push('_');
    }

    Ok(out)
}

fn push_escaped(c: char, out: &mut String) {
    if matches!(c, '\\' | '*' | '_' | '`' | '[' | ']') {
        out.push('\\');
    }
    out.push(c);
}

/// Offset of the dot when the text opens with an ordered list marker
/// (one or two digits, a dot, a space), which must be escaped at the start
/// of a line.
fn leading_marker_dot(text: &str) -> Option<usize> {
    let digits = text.chars().take_while(char::is_ascii_digit).count();
    if (1..=2).contains(&digits)
        && text.chars().nth(digits) == Some('.')
        && text.chars().nth(digits + 1) == Some(' ')
    {
        Some(digits)
    } else {
        None
    }
}
