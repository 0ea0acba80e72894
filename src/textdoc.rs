//! In-memory reference implementation of the document model
//!
//! [`TextDocument`] is a plain blocks-and-lists structure with per-character
//! formats. It exists so the crate is usable without a host rich-text widget
//! and so the pipeline can be tested in isolation; hosts with their own
//! document implement [`DocumentModel`] directly instead.

use crate::document::{BlockFormat, BlockTag, CharFormat, DocumentModel, ListId, ListStyle};
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
struct Block {
    text: String,
    /// One entry per char of `text`.
    formats: Vec<CharFormat>,
    format: BlockFormat,
    /// Format of the first run inserted into the block.
    char_format: CharFormat,
    tag: BlockTag,
    list: Option<ListId>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct ListObject {
    style: ListStyle,
    depth: u8,
    blocks: Vec<usize>,
}

/// An owned, in-memory rich-text document.
///
/// Equality compares full structure (texts, formats, lists), which is what
/// round-trip tests lean on.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TextDocument {
    blocks: Vec<Block>,
    lists: Vec<ListObject>,
}

impl TextDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure a current block exists and return its index.
    fn current(&mut self) -> usize {
        if self.blocks.is_empty() {
            self.blocks.push(Block::default());
        }
        self.blocks.len() - 1
    }
}

impl DocumentModel for TextDocument {
    fn clear(&mut self) {
        self.blocks.clear();
        self.lists.clear();
    }

    fn new_block(&mut self) {
        self.blocks.push(Block::default());
    }

    fn set_block_format(&mut self, format: BlockFormat) {
        let idx = self.current();
        self.blocks[idx].format = format;
    }

    fn set_block_tag(&mut self, tag: BlockTag) {
        let idx = self.current();
        self.blocks[idx].tag = tag;
    }

    fn insert_run(&mut self, text: &str, format: &CharFormat) {
        let mut first = true;
        for segment in text.split('\n') {
            if !first {
                // Continue into a fresh block inheriting from the current one.
                let idx = self.current();
                let template = &self.blocks[idx];
                let continuation = Block {
                    format: template.format.clone(),
                    char_format: template.char_format.clone(),
                    tag: template.tag,
                    list: template.list,
                    ..Block::default()
                };
                let list = continuation.list;
                self.blocks.push(continuation);
                if let Some(l) = list {
                    let idx = self.blocks.len() - 1;
                    if let Some(obj) = self.lists.get_mut(l) {
                        obj.blocks.push(idx);
                    }
                }
            }
            first = false;
            if segment.is_empty() {
                continue;
            }
            let idx = self.current();
            let block = &mut self.blocks[idx];
            if block.text.is_empty() {
                block.char_format = format.clone();
            }
            block.text.push_str(segment);
            block
                .formats
                .extend(segment.chars().map(|_| format.clone()));
        }
    }

    fn create_or_extend_list(&mut self, style: ListStyle, indent_depth: u8) -> ListId {
        if !self.blocks.is_empty() && !self.lists.is_empty() {
            let tail = self.blocks.len() - 1;
            let id = self.lists.len() - 1;
            let last = &self.lists[id];
            if last.style == style && last.depth == indent_depth && last.blocks.last() == Some(&tail)
            {
                return id;
            }
        }
        self.lists.push(ListObject {
            style,
            depth: indent_depth,
            blocks: Vec::new(),
        });
        self.lists.len() - 1
    }

    fn attach_current_block(&mut self, list: ListId) {
        let idx = self.current();
        self.blocks[idx].list = Some(list);
        if let Some(obj) = self.lists.get_mut(list) {
            if obj.blocks.last() != Some(&idx) {
                obj.blocks.push(idx);
            }
        }
    }

    fn replace_marker(&mut self, marker: &str, text: &str, format: &CharFormat) -> bool {
        if marker.is_empty() {
            return false;
        }
        for block in &mut self.blocks {
            if let Some(byte_start) = block.text.find(marker) {
                let char_start = block.text[..byte_start].chars().count();
                let marker_chars = marker.chars().count();
                block
                    .text
                    .replace_range(byte_start..byte_start + marker.len(), text);
                block.formats.splice(
                    char_start..char_start + marker_chars,
                    text.chars().map(|_| format.clone()),
                );
                return true;
            }
        }
        false
    }

    fn block_count(&self) -> usize {
        self.blocks.len()
    }

    fn block_text(&self, block: usize) -> String {
        self.blocks[block].text.clone()
    }

    fn block_format(&self, block: usize) -> BlockFormat {
        self.blocks[block].format.clone()
    }

    fn block_char_format(&self, block: usize) -> CharFormat {
        self.blocks[block].char_format.clone()
    }

    fn block_tag(&self, block: usize) -> BlockTag {
        self.blocks[block].tag
    }

    fn char_format_at(&self, block: usize, offset: usize) -> Option<CharFormat> {
        self.blocks.get(block)?.formats.get(offset).cloned()
    }

    fn list_of(&self, block: usize) -> Option<ListId> {
        self.blocks[block].list
    }

    fn list_style(&self, list: ListId) -> ListStyle {
        self.lists[list].style
    }

    fn list_depth(&self, list: ListId) -> u8 {
        self.lists[list].depth
    }

    fn item_index(&self, list: ListId, block: usize) -> Option<usize> {
        self.lists[list].blocks.iter().position(|&b| b == block)
    }
}
