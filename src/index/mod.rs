//! Loaded help documents and the handle callers query them through.

pub mod loader;

use std::path::Path;
use tracing::info;

use crate::engine;
use crate::error::{HelpError, Result};
use crate::parser::types::Markers;
use crate::types::Outline;
use loader::{FsLoader, TextLoader};

/// Owned text of one help file. Queries only ever borrow it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    text: String,
}

impl Document {
    /// Copy `text` into a new document. Empty text is treated as no help
    /// at all.
    pub fn new(text: &str) -> Result<Self> {
        if text.is_empty() {
            return Err(HelpError::Uninitialized);
        }
        let mut owned = String::new();
        owned.try_reserve_exact(text.len())?;
        owned.push_str(text);
        Ok(Self { text: owned })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn filter_by_keyword(&self, keyword: &str, markers: &Markers) -> Result<String> {
        engine::filter_by_keyword(&self.text, keyword, markers)
    }

    pub fn outline(&self, markers: &Markers) -> Result<Outline> {
        engine::outline(&self.text, markers)
    }
}

/// Handle over at most one loaded help document.
#[derive(Debug, Default)]
pub struct DocumentIndex {
    document: Option<Document>,
    markers: Markers,
}

impl DocumentIndex {
    pub fn new(markers: Markers) -> Self {
        Self {
            document: None,
            markers,
        }
    }

    /// Load `path` from disk into a fresh index.
    pub fn open(path: &Path, markers: Markers) -> Result<Self> {
        let mut index = Self::new(markers);
        index.initialize(path, &FsLoader)?;
        Ok(index)
    }

    /// Load `path` through `loader`. An index holds one document; release
    /// it before loading another.
    pub fn initialize(&mut self, path: &Path, loader: &dyn TextLoader) -> Result<()> {
        if self.document.is_some() {
            return Err(HelpError::AlreadyInitialized);
        }
        let text = loader.load(path)?;
        self.document = Some(Document::new(&text)?);
        info!(path = %path.display(), bytes = text.len(), "help loaded");
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.document.is_some()
    }

    pub fn markers(&self) -> &Markers {
        &self.markers
    }

    pub fn document(&self) -> Result<&Document> {
        self.document.as_ref().ok_or(HelpError::Uninitialized)
    }

    pub fn query(&self, keyword: &str) -> Result<String> {
        self.document()?.filter_by_keyword(keyword, &self.markers)
    }

    pub fn outline(&self) -> Result<Outline> {
        self.document()?.outline(&self.markers)
    }

    pub fn release(&mut self) {
        if self.document.take().is_some() {
            info!("help released");
        }
    }
}
