// ============================================================
// Layer 6 — Document Writer
// ============================================================
// Writes the finished document to disk in one go. The parent
// directory is created first, like `mkdir -p`.
//
// This is the only place a run writes a file, and it is only
// reached after every board has been generated and rendered.

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

pub struct DocumentWriter {
    path: PathBuf,
}

impl DocumentWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn write(&self, document: &str) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .with_context(|| format!("Cannot create directory '{}'", dir.display()))?;
        }

        fs::write(&self.path, document)
            .with_context(|| format!("Cannot write document to '{}'", self.path.display()))?;

        tracing::info!(
            "Wrote {} bytes to '{}'",
            document.len(),
            self.path.display()
        );
        Ok(())
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creates_parent_dirs() {
        let dir    = tempfile::tempdir().unwrap();
        let path   = dir.path().join("out/nested/bingo.tex");
        let writer = DocumentWriter::new(&path);

        writer.write("hello").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn test_overwrites_existing() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("bingo.tex");
        fs::write(&path, "old").unwrap();

        DocumentWriter::new(&path).write("new").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }
}
