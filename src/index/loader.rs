use std::io::ErrorKind;
use std::path::Path;

use crate::error::{HelpError, Result};

/// Source of raw help text.
pub trait TextLoader {
    fn load(&self, path: &Path) -> Result<String>;
}

/// Reads help files from disk as UTF-8, normalising CRLF to LF.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsLoader;

impl TextLoader for FsLoader {
    fn load(&self, path: &Path) -> Result<String> {
        let content = std::fs::read_to_string(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => HelpError::NotFound(path.to_path_buf()),
            _ => HelpError::ReadFailure {
                path: path.to_path_buf(),
                source,
            },
        })?;

        if content.contains("\r\n") {
            return Ok(content.replace("\r\n", "\n"));
        }
        Ok(content)
    }
}
