//! Bidirectional conversion between flavoured Markdown and a rich-text document model
//!
//! This crate converts markup text into an abstract rich-text document (the
//! [`DocumentModel`] trait) and reconstructs equivalent markup from such a
//! document. The host owns the document; the core only mutates and inspects it
//! through the trait.
//!
//! Architecture
//!
//!     The read direction is a four stage pipeline, each stage a pure function
//!     over the previous stage's output:
//!
//!         markup text -> tokenize -> paragraphize -> listize -> render -> DocumentModel
//!
//!     The write direction is a single pass over the document's blocks:
//!
//!         DocumentModel -> serialize -> markup text
//!
//!     The two directions are not inverses of each other's intermediate forms,
//!     but write-then-read is idempotent on the rendered document: headings,
//!     emphasis runs, list membership and depth, and code block whitespace all
//!     survive the round trip.
//!
//!     This is a pure lib: it is shell agnostic, that is no code should be
//!     written that supposes a shell environment, be it to std print, env vars
//!     etc. All diagnostics surface as [`ConvertError`] values at the
//!     `read`/`write` call boundary.
//!
//!     The file structure:
//!     .
//!     ├── error.rs                # ConvertError
//!     ├── flavour.rs              # Flavour trait definition
//!     ├── registry.rs             # FlavourRegistry for discovery and selection
//!     ├── document.rs             # DocumentModel trait and format value types
//!     ├── textdoc.rs              # TextDocument, in-memory reference model
//!     ├── flavours
//!     │   └── github
//!     │       ├── token.rs        # Tokenizer
//!     │       ├── paragraph.rs    # Paragraphizer and span extraction
//!     │       ├── list.rs         # Listizer
//!     │       ├── render.rs       # Renderer (document population)
//!     │       ├── serialize.rs    # Serializer (markup reconstruction)
//!     │       └── mod.rs
//!     └── lib.rs
//!
//! Core Algorithms
//!
//!     The most delicate part of the work is that Markdown is context
//!     sensitive at line starts: `#` begins a heading only as the first
//!     non-space character of a line, a lone `*` is a list marker there but an
//!     emphasis toggle elsewhere. The tokenizer resolves this with an explicit
//!     column state carried forward through the scan instead of re-scanning
//!     backwards from each candidate.
//!
//!     Inline code spans and link/image spans are extracted from each
//!     paragraph into per-call side tables before inline rendering, leaving
//!     numbered placeholder markers behind; the renderer substitutes the real
//!     content in a finishing pass. This keeps bracket tokens that belong to a
//!     link from being confused with unrelated brackets in the same paragraph.
//!
//! Flavours
//!
//!     Flavour specific behaviour is implemented with the [`Flavour`] trait;
//!     flavours have read() and write() methods, a name and file extensions.
//!     The [`FlavourRegistry`] provides centralized discovery and selection.
//!     Only the "github" flavour is implemented, but the seam stays swappable.
//!
//! Testing
//!
//!     tests
//!     └── github
//!         ├── read.rs
//!         ├── write.rs
//!         └── roundtrip.rs
//!
//!     Note that rust does not by default discover tests in subdirectories,
//!     so these are included from tests/lib.rs.

pub mod document;
pub mod error;
pub mod flavour;
pub mod flavours;
pub mod registry;
pub mod textdoc;

pub use document::{BlockFormat, BlockTag, CharFormat, DocumentModel, ListId, ListStyle};
pub use error::ConvertError;
pub use flavour::Flavour;
pub use registry::FlavourRegistry;
pub use textdoc::TextDocument;

/// Populate `target` from flavoured Markdown text.
///
/// `markup` is UTF-8; invalid sequences are replaced, never rejected.
/// The target document is cleared first.
pub fn read_markup(
    markup: &[u8],
    flavour: &str,
    target: &mut dyn DocumentModel,
) -> Result<(), ConvertError> {
    FlavourRegistry::with_defaults().read(markup, flavour, target)
}

/// Reconstruct flavoured Markdown text from a document.
pub fn write_markup(source: &dyn DocumentModel, flavour: &str) -> Result<Vec<u8>, ConvertError> {
    FlavourRegistry::with_defaults().write(source, flavour)
}
