//! File delivery for generated documents.
//!
//! The generator output is the whole file; nothing is appended or re-encoded
//! on the way to disk.

use crate::error::ExportError;
use std::path::Path;
use tracing::info;

/// MIME type of the delivered file.
pub const CONTENT_TYPE: &str = "image/svg+xml";

/// File name used when the caller does not choose one.
pub const DEFAULT_FILE_NAME: &str = "grid.svg";

/// A generated SVG paired with the name it should be saved under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgDocument {
    file_name: String,
    content: String,
}

impl SvgDocument {
    pub fn new(file_name: impl Into<String>, content: impl Into<String>) -> Self {
        let file_name = file_name.into();
        let file_name = if file_name.trim().is_empty() {
            DEFAULT_FILE_NAME.to_string()
        } else {
            file_name
        };
        Self {
            file_name,
            content: content.into(),
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn content_type(&self) -> &'static str {
        CONTENT_TYPE
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.content.as_bytes()
    }

    /// Write the document to `path`, creating parent directories as needed.
    pub fn write_to(&self, path: &Path) -> Result<(), ExportError> {
        if self.content.is_empty() {
            return Err(ExportError::EmptyDocument);
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|source| ExportError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }
        std::fs::write(path, self.as_bytes()).map_err(|source| ExportError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), bytes = self.content.len(), "Wrote SVG document");
        Ok(())
    }

    /// Write into `directory` under this document's own file name.
    pub fn write_into(&self, directory: &Path) -> Result<std::path::PathBuf, ExportError> {
        let path = directory.join(&self.file_name);
        self.write_to(&path)?;
        Ok(path)
    }
}
