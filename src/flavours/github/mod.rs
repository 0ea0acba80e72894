//! GitHub-flavoured Markdown
//!
//! The one built-in flavour. Reading is a four stage pipeline over owned
//! intermediate values (tokens, paragraphs, block entries), writing is a
//! single pass over the document's blocks:
//!
//! - [`token::tokenize`]: raw text to a flat token sequence, resolving
//!   line-start sensitivity with forward-tracked column state
//! - [`paragraph::paragraphize`]: tokens to typed paragraphs, extracting
//!   inline code and link/image spans into per-call substitution tables
//! - [`list::listize`]: paragraphs to a flat sequence of standalone
//!   paragraphs and same-depth list groups
//! - [`render::render`]: block entries into the document model, then
//!   placeholder resolution
//! - [`serialize::serialize`]: document blocks back to markup text
//!
//! # Element Mapping Table
//!
//! | Markup              | Document representation                          |
//! |---------------------|--------------------------------------------------|
//! | `# Heading`         | Block with heading point size (26pt … 13pt)      |
//! | `> quote`           | Block with indent 1 (marker not regenerated)     |
//! | ```` ``` ````       | Non-breakable monospace blocks, one per line     |
//! | `* item` / `1. item`| Block attached to a list object (style, depth)   |
//! | `**b**` / `_i_`     | Bold/italic toggles on character runs            |
//! | `` `code` ``        | Monospace character run                          |
//! | `[text](url)`       | Run with `anchor_href`                           |
//! | `![alt](src)`       | Run with `image_src`                             |
//! | `<tag>`             | Literal text (raw tag preserved verbatim)        |
//!
//! # Known limitations (carried over deliberately)
//!
//! - Ordered list markers are limited to two digits; `100. x` is plain text.
//! - List nesting is encoded as a flat depth per list, not a tree; a depth
//!   change always starts a new list object.
//! - More than six `#` degrade the paragraph to normal text.
//! - Quote blocks serialize as plain paragraphs.

pub mod list;
pub mod paragraph;
pub mod render;
pub mod serialize;
pub mod token;

use crate::document::DocumentModel;
use crate::error::ConvertError;
use crate::flavour::Flavour;

/// Flavour implementation for GitHub-flavoured Markdown
pub struct GithubFlavour;

impl Flavour for GithubFlavour {
    fn name(&self) -> &str {
        "github"
    }

    fn description(&self) -> &str {
        "GitHub flavoured Markdown"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn supports_reading(&self) -> bool {
        true
    }

    fn supports_writing(&self) -> bool {
        true
    }

    fn read(&self, markup: &[u8], target: &mut dyn DocumentModel) -> Result<(), ConvertError> {
        let text = clean(&String::from_utf8_lossy(markup));
        let tokens = token::tokenize(&text);
        let (paragraphs, substitutions) = paragraph::paragraphize(tokens);
        let entries = list::listize(paragraphs);
        render::render(entries, substitutions, target)
    }

    fn write(&self, source: &dyn DocumentModel) -> Result<Vec<u8>, ConvertError> {
        serialize::serialize(source).map(String::into_bytes)
    }
}

/// Point size given to runs of a heading block, by level 1-6.
pub(crate) fn heading_size(level: u8) -> Option<u16> {
    match level {
        1 => Some(26),
        2 => Some(24),
        3 => Some(20),
        4 => Some(16),
        5 => Some(14),
        6 => Some(13),
        _ => None,
    }
}

/// Inverse of [`heading_size`], used by the serializer to recover levels.
pub(crate) fn heading_level(size: u16) -> Option<u8> {
    match size {
        26 => Some(1),
        24 => Some(2),
        20 => Some(3),
        16 => Some(4),
        14 => Some(5),
        13 => Some(6),
        _ => None,
    }
}

/// Normalize line endings and tabs before tokenizing.
fn clean(text: &str) -> String {
    text.replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace('\t', "    ")
}
