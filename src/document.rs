//! The abstract rich-text document the core reads from and writes to
//!
//! The core never owns the document. A host (an editor widget, a headless
//! converter, the bundled [`TextDocument`](crate::textdoc::TextDocument))
//! implements [`DocumentModel`] and hands the core exclusive access for the
//! duration of one `read` or `write` call. Exclusivity is enforced by the
//! `&mut` receiver on the write side; concurrent calls against distinct
//! documents are independent and safe.

use serde::{Deserialize, Serialize};

/// Handle to a list object inside a document.
pub type ListId = usize;

/// Character-level formatting of a run of text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CharFormat {
    pub bold: bool,
    pub italic: bool,
    pub monospace: bool,
    /// Link target; a non-empty value marks the run as anchor text.
    pub anchor_href: Option<String>,
    /// Image source; the run's text is the image's alt text.
    pub image_src: Option<String>,
    /// Point size, set on heading runs only.
    pub font_size_pt: Option<u16>,
}

impl CharFormat {
    /// A plain monospace format, used for code runs.
    pub fn code() -> Self {
        CharFormat {
            monospace: true,
            ..CharFormat::default()
        }
    }
}

/// Block-level formatting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockFormat {
    /// Visual indent level (used for quote blocks).
    pub indent: u8,
    /// Verbatim blocks that must not soft-wrap (code).
    pub non_breakable: bool,
    /// Space below the block, in points.
    pub bottom_margin: f32,
}

/// Round-trip tag recording what kind of paragraph produced a block.
///
/// Hosts are free to ignore it; the serializer derives everything it needs
/// from formats and list membership.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockTag {
    #[default]
    Normal,
    Heading(u8),
    Quote,
    Code,
    UnorderedItem,
    OrderedItem,
}

/// Ordering style of a list object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListStyle {
    Ordered,
    Unordered,
}

/// The document interface required from the host.
///
/// Write-side methods operate on a "current block" cursor: [`new_block`]
/// starts a fresh block at the end of the document and subsequent
/// `set_block_*`/`insert_run`/`attach_current_block` calls apply to it.
///
/// [`new_block`]: DocumentModel::new_block
pub trait DocumentModel {
    /// Remove all blocks and lists.
    fn clear(&mut self);

    /// Append a new, empty block and make it current.
    fn new_block(&mut self);

    /// Set the current block's block-level format.
    fn set_block_format(&mut self, format: BlockFormat);

    /// Set the current block's round-trip tag.
    fn set_block_tag(&mut self, tag: BlockTag);

    /// Insert a run of characters under `format` at the end of the current
    /// block. A `\n` in `text` continues into a fresh block that inherits the
    /// current block's block format, tag and list membership.
    fn insert_run(&mut self, text: &str, format: &CharFormat);

    /// Return a list matching `style` and `indent_depth` if the current tail
    /// of the document already belongs to one, otherwise create a new list.
    fn create_or_extend_list(&mut self, style: ListStyle, indent_depth: u8) -> ListId;

    /// Attach the current block to `list` as its next item.
    fn attach_current_block(&mut self, list: ListId);

    /// Locate `marker` in the document and replace it with `text` formatted
    /// as `format`. Returns false if the marker does not occur anywhere;
    /// callers treat that as a fatal inconsistency.
    fn replace_marker(&mut self, marker: &str, text: &str, format: &CharFormat) -> bool;

    fn block_count(&self) -> usize;

    /// The block's text, without any block separator.
    fn block_text(&self, block: usize) -> String;

    fn block_format(&self, block: usize) -> BlockFormat;

    /// The block-level character format: the format of the first run inserted
    /// into the block (inherited across `\n` continuations). This is what the
    /// serializer probes for heading sizes and code blocks.
    fn block_char_format(&self, block: usize) -> CharFormat;

    fn block_tag(&self, block: usize) -> BlockTag;

    /// Format in effect at character offset `offset` (in chars, not bytes),
    /// or None when the offset is out of range.
    fn char_format_at(&self, block: usize, offset: usize) -> Option<CharFormat>;

    /// The list the block belongs to, if any.
    fn list_of(&self, block: usize) -> Option<ListId>;

    fn list_style(&self, list: ListId) -> ListStyle;

    fn list_depth(&self, list: ListId) -> u8;

    /// Zero-based position of `block` among the list's items.
    fn item_index(&self, list: ListId, block: usize) -> Option<usize>;
}
