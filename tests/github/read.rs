//! Import tests for the GitHub flavour (markup → document)
//!
//! These tests verify that markup is correctly converted into the document
//! model by checking block structure, formats and list membership.

use super::read;
use pretty_assertions::assert_eq;
use richmark::{BlockTag, DocumentModel, ListStyle, TextDocument};

#[test]
fn test_paragraph_simple() {
    let doc = read("This is a simple paragraph.\n");
    assert_eq!(doc.block_count(), 1);
    assert_eq!(doc.block_text(0), "This is a simple paragraph.");
    assert_eq!(doc.block_tag(0), BlockTag::Normal);
    assert_eq!(doc.block_format(0).bottom_margin, 5.0);
}

#[test]
fn test_soft_wrapped_lines_join_into_one_block() {
    let doc = read("first line\nsecond line\n");
    assert_eq!(doc.block_count(), 1);
    assert_eq!(doc.block_text(0), "first line second line");
}

#[test]
fn test_blank_line_separates_blocks() {
    let doc = read("one\n\ntwo\n");
    assert_eq!(doc.block_count(), 2);
    assert_eq!(doc.block_text(0), "one");
    assert_eq!(doc.block_text(1), "two");
}

#[test]
fn test_heading_levels_map_to_point_sizes() {
    let sizes = [26, 24, 20, 16, 14, 13];
    for (level, size) in sizes.iter().enumerate() {
        let markup = format!("{} Title", "#".repeat(level + 1));
        let doc = read(&markup);
        assert_eq!(doc.block_text(0), "Title");
        assert_eq!(
            doc.block_char_format(0).font_size_pt,
            Some(*size),
            "level {}",
            level + 1
        );
        assert_eq!(doc.block_tag(0), BlockTag::Heading(level as u8 + 1));
    }
}

#[test]
fn test_seven_hashes_is_a_plain_paragraph() {
    let doc = read("####### too deep");
    assert_eq!(doc.block_tag(0), BlockTag::Normal);
    assert_eq!(doc.block_char_format(0).font_size_pt, None);
}

#[test]
fn test_quote_block_gets_indent() {
    let doc = read("> quoted text");
    assert_eq!(doc.block_text(0), "quoted text");
    assert_eq!(doc.block_format(0).indent, 1);
    assert_eq!(doc.block_tag(0), BlockTag::Quote);
}

#[test]
fn test_code_fence_one_block_per_line() {
    let doc = read("```\nfn main() {\n    println!(\"hi\");\n}\n```\n");
    assert_eq!(doc.block_count(), 3);
    assert_eq!(doc.block_text(0), "fn main() {");
    assert_eq!(doc.block_text(1), "    println!(\"hi\");");
    assert_eq!(doc.block_text(2), "}");
    for block in 0..3 {
        assert!(doc.block_format(block).non_breakable);
        assert!(doc.block_char_format(block).monospace);
    }
}

#[test]
fn test_code_fence_info_string_is_dropped() {
    let doc = read("``` rust\nlet x = 1;\n```\n");
    assert_eq!(doc.block_count(), 1);
    assert_eq!(doc.block_text(0), "let x = 1;");
}

#[test]
fn test_bold_and_italic_at_line_start_are_not_list_markers() {
    let doc = read("**bold** and *italic*");
    assert_eq!(doc.block_count(), 1);
    assert_eq!(doc.block_text(0), "bold and italic");
    assert!(doc.char_format_at(0, 0).unwrap().bold);
    assert!(doc.char_format_at(0, 9).unwrap().italic);
    assert!(doc.list_of(0).is_none());
}

#[test]
fn test_emphasis_nesting_by_toggles() {
    let doc = read("**a _b_ c**");
    assert_eq!(doc.block_text(0), "a b c");
    // Everything is bold, only 'b' is also italic.
    for offset in 0..5 {
        assert!(doc.char_format_at(0, offset).unwrap().bold, "offset {offset}");
    }
    assert!(doc.char_format_at(0, 2).unwrap().italic);
    assert!(!doc.char_format_at(0, 0).unwrap().italic);
    assert!(!doc.char_format_at(0, 4).unwrap().italic);
}

#[test]
fn test_double_underscore_is_bold() {
    let doc = read("__loud__");
    assert!(doc.char_format_at(0, 0).unwrap().bold);
    assert!(!doc.char_format_at(0, 0).unwrap().italic);
}

#[test]
fn test_escaped_markers_are_literal_text() {
    let doc = read("\\*not italic\\*");
    assert_eq!(doc.block_text(0), "*not italic*");
    assert!(!doc.char_format_at(0, 1).unwrap().italic);
}

#[test]
fn test_unordered_list_groups_and_depths() {
    let doc = read("* a\n  * b\n* c");
    assert_eq!(doc.block_count(), 3);

    let top = doc.list_of(0).unwrap();
    let nested = doc.list_of(1).unwrap();
    let resumed = doc.list_of(2).unwrap();
    assert_ne!(top, nested);
    // Returning to depth 1 starts a third list, it does not rejoin the first.
    assert_ne!(top, resumed);
    assert_eq!(doc.list_depth(top), 1);
    assert_eq!(doc.list_depth(nested), 2);
    assert_eq!(doc.list_depth(resumed), 1);
    assert_eq!(doc.list_style(top), ListStyle::Unordered);
}

#[test]
fn test_ordered_list_one_group_with_indices() {
    let doc = read("1. first\n2. second\n3. third");
    let list = doc.list_of(0).unwrap();
    assert_eq!(doc.list_of(1), Some(list));
    assert_eq!(doc.list_of(2), Some(list));
    assert_eq!(doc.list_style(list), ListStyle::Ordered);
    assert_eq!(doc.item_index(list, 2), Some(2));
    assert_eq!(doc.block_text(0), "first");
}

#[test]
fn test_marker_numbers_do_not_matter() {
    // Source numbering is discarded; position defines the index.
    let doc = read("7. a\n3. b");
    let list = doc.list_of(0).unwrap();
    assert_eq!(doc.item_index(list, 0), Some(0));
    assert_eq!(doc.item_index(list, 1), Some(1));
}

#[test]
fn test_four_space_indent_is_depth_three() {
    let doc = read("    * deep");
    let list = doc.list_of(0).unwrap();
    assert_eq!(doc.list_depth(list), 3);
}

#[test]
fn test_tab_indent_counts_as_four_spaces() {
    let doc = read("\t* deep");
    let list = doc.list_of(0).unwrap();
    assert_eq!(doc.list_depth(list), 3);
}

#[test]
fn test_crlf_line_endings_are_normalized() {
    let doc = read("# Title\r\n\r\nbody\r\n");
    assert_eq!(doc.block_count(), 2);
    assert_eq!(doc.block_text(0), "Title");
    assert_eq!(doc.block_text(1), "body");
}

#[test]
fn test_inline_code_becomes_monospace_run() {
    let doc = read("use `let` here");
    assert_eq!(doc.block_text(0), "use let here");
    assert!(doc.char_format_at(0, 4).unwrap().monospace);
    assert!(doc.char_format_at(0, 6).unwrap().monospace);
    assert!(!doc.char_format_at(0, 3).unwrap().monospace);
    assert!(!doc.char_format_at(0, 8).unwrap().monospace);
}

#[test]
fn test_inline_code_shields_emphasis_markers() {
    let doc = read("`a * b`");
    assert_eq!(doc.block_text(0), "a * b");
    assert!(!doc.char_format_at(0, 2).unwrap().italic);
    assert!(doc.char_format_at(0, 2).unwrap().monospace);
}

#[test]
fn test_link_becomes_anchor_run() {
    let doc = read("see [the docs](https://example.com/x) now");
    assert_eq!(doc.block_text(0), "see the docs now");
    assert_eq!(
        doc.char_format_at(0, 4).unwrap().anchor_href.as_deref(),
        Some("https://example.com/x")
    );
    assert_eq!(doc.char_format_at(0, 3).unwrap().anchor_href, None);
    assert_eq!(doc.char_format_at(0, 13).unwrap().anchor_href, None);
}

#[test]
fn test_image_becomes_alt_text_run() {
    let doc = read("![a logo](logo.png)");
    assert_eq!(doc.block_text(0), "a logo");
    assert_eq!(
        doc.char_format_at(0, 0).unwrap().image_src.as_deref(),
        Some("logo.png")
    );
}

#[test]
fn test_link_inside_list_item() {
    let doc = read("* see [docs](url)");
    assert_eq!(doc.block_text(0), "see docs");
    assert!(doc.list_of(0).is_some());
    assert_eq!(
        doc.char_format_at(0, 4).unwrap().anchor_href.as_deref(),
        Some("url")
    );
}

#[test]
fn test_inline_code_inside_heading() {
    let doc = read("# use `x`");
    assert_eq!(doc.block_text(0), "use x");
    assert_eq!(doc.block_char_format(0).font_size_pt, Some(26));
    assert!(doc.char_format_at(0, 4).unwrap().monospace);
}

#[test]
fn test_html_tags_are_kept_as_literal_text() {
    let doc = read("before <br/> after");
    assert_eq!(doc.block_text(0), "before <br/> after");
}

#[test]
fn test_unmatched_link_tokens_degrade_to_text() {
    let doc = read("just [ a bracket");
    assert_eq!(doc.block_text(0), "just [ a bracket");
}

#[test]
fn test_empty_input_yields_empty_document() {
    let doc = read("");
    assert_eq!(doc.block_count(), 0);
    assert_eq!(doc, TextDocument::new());
}

#[test]
fn test_whitespace_only_input_yields_empty_document() {
    assert_eq!(read("\n\n  \n").block_count(), 0);
}

#[test]
fn test_reading_replaces_previous_document_content() {
    let mut doc = read("old content");
    richmark::read_markup(b"# New", "github", &mut doc).unwrap();
    assert_eq!(doc.block_count(), 1);
    assert_eq!(doc.block_text(0), "New");
}

#[test]
fn test_invalid_utf8_is_replaced_not_rejected() {
    let mut doc = TextDocument::new();
    richmark::read_markup(b"ok \xff\xfe end", "github", &mut doc).unwrap();
    assert!(doc.block_text(0).starts_with("ok "));
    assert!(doc.block_text(0).ends_with(" end"));
}

#[test]
fn test_mixed_document_structure() {
    let doc = read(
        "# Notes\n\nintro text\n\n* one\n* two\n\n```\ncode line\n```\n\n> closing thought\n",
    );
    assert_eq!(doc.block_count(), 6);
    assert_eq!(doc.block_tag(0), BlockTag::Heading(1));
    assert_eq!(doc.block_tag(1), BlockTag::Normal);
    assert_eq!(doc.block_tag(2), BlockTag::UnorderedItem);
    assert_eq!(doc.block_tag(3), BlockTag::UnorderedItem);
    assert_eq!(doc.block_tag(4), BlockTag::Code);
    assert_eq!(doc.block_tag(5), BlockTag::Quote);
}
