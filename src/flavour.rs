//! Flavour trait definition
//!
//! This module defines the core Flavour trait that all markup flavour
//! implementations must implement. The trait provides a uniform interface for
//! reading markup into a document and writing a document back out.

use crate::document::DocumentModel;
use crate::error::ConvertError;

/// Trait for markup flavours
///
/// Implementors provide bidirectional conversion between markup text and a
/// [`DocumentModel`]. Flavours can support reading, writing, or both.
///
/// # Examples
///
/// ```ignore
/// struct MyFlavour;
///
/// impl Flavour for MyFlavour {
///     fn name(&self) -> &str {
///         "my-flavour"
///     }
///
///     fn supports_reading(&self) -> bool {
///         true
///     }
///
///     fn read(&self, markup: &[u8], target: &mut dyn DocumentModel) -> Result<(), ConvertError> {
///         // Populate target from markup
///         todo!()
///     }
/// }
/// ```
pub trait Flavour: Send + Sync {
    /// The name of this flavour (e.g. "github")
    fn name(&self) -> &str;

    /// Optional description of this flavour
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this flavour (e.g. ["md", "markdown"])
    ///
    /// Returns a slice of file extensions without the leading dot.
    /// Used for automatic flavour detection from filenames.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Whether this flavour supports reading (markup → document)
    fn supports_reading(&self) -> bool {
        false
    }

    /// Whether this flavour supports writing (document → markup)
    fn supports_writing(&self) -> bool {
        false
    }

    /// Populate `target` from UTF-8 markup text.
    ///
    /// Malformed markup degrades to literal text; the only read-side failure
    /// is an internal placeholder inconsistency. The target is cleared first.
    ///
    /// Default implementation returns a NotSupported error.
    fn read(&self, _markup: &[u8], _target: &mut dyn DocumentModel) -> Result<(), ConvertError> {
        Err(ConvertError::NotSupported(format!(
            "Flavour '{}' does not support reading",
            self.name()
        )))
    }

    /// Reconstruct UTF-8 markup text from a document.
    ///
    /// Default implementation returns a NotSupported error.
    fn write(&self, _source: &dyn DocumentModel) -> Result<Vec<u8>, ConvertError> {
        Err(ConvertError::NotSupported(format!(
            "Flavour '{}' does not support writing",
            self.name()
        )))
    }
}
