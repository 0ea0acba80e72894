//! Listizer for GitHub-flavoured Markdown
//!
//! Groups consecutive list-item paragraphs of the same style and depth into
//! list groups. Nesting is flat: a depth or style change always ends the
//! current group and starts a new one, even when returning to a depth seen
//! before.

use super::paragraph::{Paragraph, ParagraphKind};

/// A maximal run of same-style, same-depth list items.
#[derive(Debug, Default)]
pub struct ListGroup {
    pub items: Vec<Paragraph>,
    pub indent_depth: u8,
    pub ordered: bool,
}

/// One renderable unit: a standalone paragraph or a list group.
#[derive(Debug)]
pub enum BlockEntry {
    Single(Paragraph),
    Group(ListGroup),
}

/// Group paragraphs into block entries, preserving order.
pub fn listize(paragraphs: Vec<Paragraph>) -> Vec<BlockEntry> {
    let mut entries: Vec<BlockEntry> = Vec::new();
    let mut group: Option<ListGroup> = None;

    for paragraph in paragraphs {
        if !paragraph.is_list_item() {
            flush(&mut group, &mut entries);
            entries.push(BlockEntry::Single(paragraph));
            continue;
        }

        let ordered = paragraph.kind == ParagraphKind::OrderedItem;
        let depth = paragraph.indent_depth();
        let matches_group = group
            .as_ref()
            .is_some_and(|g| g.indent_depth == depth && g.ordered == ordered);
        if !matches_group {
            flush(&mut group, &mut entries);
            group = Some(ListGroup {
                items: Vec::new(),
                indent_depth: depth,
                ordered,
            });
        }
        if let Some(g) = group.as_mut() {
            g.items.push(paragraph);
        }
    }
    flush(&mut group, &mut entries);

    entries
}

fn flush(group: &mut Option<ListGroup>, entries: &mut Vec<BlockEntry>) {
    if let Some(g) = group.take() {
        entries.push(BlockEntry::Group(g));
    }
}
