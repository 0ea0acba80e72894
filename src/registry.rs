//! Flavour registry for flavour discovery and selection
//!
//! This module provides a centralized registry for all available markup
//! flavours. Flavours can be registered and retrieved by name.

use crate::document::DocumentModel;
use crate::error::ConvertError;
use crate::flavour::Flavour;
use std::collections::HashMap;

/// Registry of markup flavours
///
/// Provides a centralized registry for all available flavours.
/// Flavours can be registered and retrieved by name.
///
/// # Examples
///
/// ```ignore
/// let mut registry = FlavourRegistry::new();
/// registry.register(MyFlavour);
///
/// let flavour = registry.get("my-flavour")?;
/// flavour.read(b"some markup", &mut doc)?;
/// ```
pub struct FlavourRegistry {
    flavours: HashMap<String, Box<dyn Flavour>>,
}

impl FlavourRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FlavourRegistry {
            flavours: HashMap::new(),
        }
    }

    /// Register a flavour
    ///
    /// If a flavour with the same name already exists, it will be replaced.
    pub fn register<F: Flavour + 'static>(&mut self, flavour: F) {
        self.flavours
            .insert(flavour.name().to_string(), Box::new(flavour));
    }

    /// Get a flavour by name
    pub fn get(&self, name: &str) -> Result<&dyn Flavour, ConvertError> {
        self.flavours
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| ConvertError::FlavourNotFound(name.to_string()))
    }

    /// Check if a flavour exists
    pub fn has(&self, name: &str) -> bool {
        self.flavours.contains_key(name)
    }

    /// List all available flavour names (sorted)
    pub fn list_flavours(&self) -> Vec<String> {
        let mut names: Vec<_> = self.flavours.keys().cloned().collect();
        names.sort();
        names
    }

    /// Detect flavour from filename based on file extension
    ///
    /// Returns the flavour name if a matching extension is found, or None
    /// otherwise.
    pub fn detect_flavour_from_filename(&self, filename: &str) -> Option<String> {
        let extension = std::path::Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())?;

        for flavour in self.flavours.values() {
            if flavour.file_extensions().contains(&extension) {
                return Some(flavour.name().to_string());
            }
        }

        None
    }

    /// Populate `target` from markup using the specified flavour
    pub fn read(
        &self,
        markup: &[u8],
        flavour: &str,
        target: &mut dyn DocumentModel,
    ) -> Result<(), ConvertError> {
        let flv = self.get(flavour)?;
        if !flv.supports_reading() {
            return Err(ConvertError::NotSupported(format!(
                "Flavour '{flavour}' does not support reading"
            )));
        }
        flv.read(markup, target)
    }

    /// Reconstruct markup from a document using the specified flavour
    pub fn write(
        &self,
        source: &dyn DocumentModel,
        flavour: &str,
    ) -> Result<Vec<u8>, ConvertError> {
        let flv = self.get(flavour)?;
        if !flv.supports_writing() {
            return Err(ConvertError::NotSupported(format!(
                "Flavour '{flavour}' does not support writing"
            )));
        }
        flv.write(source)
    }

    /// Create a registry with the built-in flavours
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(crate::flavours::github::GithubFlavour);

        registry
    }
}

impl Default for FlavourRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
