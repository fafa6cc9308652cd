//! Writes generated pages under the documentation root

use botodocs_common::{DocgenError, Result};
use std::cell::Cell;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File writer rooted at the output directory
///
/// Paths handed to it are doc-root relative with `/` separators, the same
/// form the pages use for links.
#[derive(Debug)]
pub struct DocWriter {
    root: PathBuf,
    written: Cell<usize>,
}

impl DocWriter {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| {
            DocgenError::Generation(format!(
                "Failed to create output directory {}: {}",
                root.display(),
                e
            ))
        })?;
        Ok(Self {
            root,
            written: Cell::new(0),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Number of files written so far
    pub fn files_written(&self) -> usize {
        self.written.get()
    }

    /// Write (or overwrite) a file, creating parent directories
    pub fn write(&self, doc_path: &str, contents: &str) -> Result<()> {
        let path = self.root.join(doc_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                DocgenError::Generation(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        fs::write(&path, contents).map_err(|e| {
            DocgenError::Generation(format!("Failed to write {}: {}", doc_path, e))
        })?;
        debug!(path = doc_path, bytes = contents.len(), "wrote page");
        self.written.set(self.written.get() + 1);

        Ok(())
    }

    /// Write one line per entry
    pub fn write_lines(&self, doc_path: &str, lines: &[String]) -> Result<()> {
        let mut contents = lines.join("\n");
        contents.push('\n');
        self.write(doc_path, &contents)
    }
}
