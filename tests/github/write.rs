//! Export tests for the GitHub flavour (document → markup)
//!
//! Documents are built by hand through the model API (or read from markup
//! where that is clearer) and the reconstructed markup is checked.

use super::{read, write};
use insta::assert_snapshot;
use pretty_assertions::assert_eq;
use richmark::{
    BlockFormat, BlockTag, CharFormat, ConvertError, DocumentModel, ListId, ListStyle,
    TextDocument,
};

#[test]
fn test_write_heading_with_inline_emphasis() {
    let mut doc = TextDocument::new();
    doc.new_block();
    doc.set_block_tag(BlockTag::Heading(1));
    doc.insert_run(
        "Big ",
        &CharFormat {
            font_size_pt: Some(26),
            ..CharFormat::default()
        },
    );
    doc.insert_run(
        "news",
        &CharFormat {
            font_size_pt: Some(26),
            bold: true,
            ..CharFormat::default()
        },
    );
    assert_eq!(write(&doc), "# Big **news**");
}

#[test]
fn test_write_mixed_document_snapshot() {
    let doc = read(
        "# Notes\n\nintro with **bold** text\n\n* one\n* two\n  * nested\n\n1. first\n2. second\n\n```\nlet x = 1;\n```\n",
    );
    assert_snapshot!(write(&doc), @r###"
    # Notes

    intro with **bold** text

    * one
    * two
      * nested
    1. first
    2. second

    ```
    let x = 1;
    ```
    "###);
}

#[test]
fn test_write_unknown_flavour_is_an_error() {
    let doc = TextDocument::new();
    let err = richmark::write_markup(&doc, "nope").unwrap_err();
    assert_eq!(err, ConvertError::FlavourNotFound("nope".to_string()));
}

// A host document that reports text without character formats, violating the
// model contract the serializer depends on.
struct FormatlessDoc;

impl DocumentModel for FormatlessDoc {
    fn clear(&mut self) {}
    fn new_block(&mut self) {}
    fn set_block_format(&mut self, _format: BlockFormat) {}
    fn set_block_tag(&mut self, _tag: BlockTag) {}
    fn insert_run(&mut self, _text: &str, _format: &CharFormat) {}
    fn create_or_extend_list(&mut self, _style: ListStyle, _indent_depth: u8) -> ListId {
        0
    }
    fn attach_current_block(&mut self, _list: ListId) {}
    fn replace_marker(&mut self, _marker: &str, _text: &str, _format: &CharFormat) -> bool {
        false
    }
    fn block_count(&self) -> usize {
        1
    }
    fn block_text(&self, _block: usize) -> String {
        "orphan".to_string()
    }
    fn block_format(&self, _block: usize) -> BlockFormat {
        BlockFormat::default()
    }
    fn block_char_format(&self, _block: usize) -> CharFormat {
        CharFormat::default()
    }
    fn block_tag(&self, _block: usize) -> BlockTag {
        BlockTag::Normal
    }
    fn char_format_at(&self, _block: usize, _offset: usize) -> Option<CharFormat> {
        None
    }
    fn list_of(&self, _block: usize) -> Option<ListId> {
        None
    }
    fn list_style(&self, _list: ListId) -> ListStyle {
        ListStyle::Unordered
    }
    fn list_depth(&self, _list: ListId) -> u8 {
        1
    }
    fn item_index(&self, _list: ListId, _block: usize) -> Option<usize> {
        None
    }
}

#[test]
fn test_write_rejects_document_without_character_formats() {
    let err = richmark::write_markup(&FormatlessDoc, "github").unwrap_err();
    assert!(matches!(err, ConvertError::MalformedDocument(_)));
}

#[test]
fn test_write_adjacent_emphasis_runs() {
    let mut doc = TextDocument::new();
    doc.new_block();
    doc.insert_run(
        "ab",
        &CharFormat {
            bold: true,
            ..CharFormat::default()
        },
    );
    doc.insert_run(
        "cd",
        &CharFormat {
            bold: true,
            italic: true,
            ..CharFormat::default()
        },
    );
    doc.insert_run("ef", &CharFormat::default());
    assert_eq!(write(&doc), "**ab_cd_**ef");
}

#[test]
fn test_write_consecutive_links_with_different_targets() {
    let mut doc = TextDocument::new();
    doc.new_block();
    doc.insert_run(
        "one",
        &CharFormat {
            anchor_href: Some("https://a".to_string()),
            ..CharFormat::default()
        },
    );
    doc.insert_run(
        "two",
        &CharFormat {
            anchor_href: Some("https://b".to_string()),
            ..CharFormat::default()
        },
    );
    assert_eq!(write(&doc), "[one](https://a)[two](https://b)");
}

#[test]
fn test_write_empty_document_is_empty_markup() {
    assert_eq!(write(&TextDocument::new()), "");
}
