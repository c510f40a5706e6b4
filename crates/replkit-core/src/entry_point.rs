//! Entry-point file writer

use crate::error::{Error, Result};
use camino::Utf8PathBuf;
use tracing::{debug, warn};

/// Writes starter source files into a working directory
#[derive(Debug, Clone)]
pub struct EntryPointWriter {
    work_dir: Utf8PathBuf,
}

impl EntryPointWriter {
    pub fn new(work_dir: impl Into<Utf8PathBuf>) -> Self {
        Self {
            work_dir: work_dir.into(),
        }
    }

    /// Write `snippet` verbatim to `<work-dir>/<filename>`, replacing any
    /// existing file.
    pub fn write(&self, filename: &str, snippet: &str) -> Result<Utf8PathBuf> {
        let path = self.work_dir.join(filename);
        if path.exists() {
            warn!("Replacing existing entry point {}", path);
        }

        std::fs::write(&path, snippet).map_err(|e| Error::write(path.as_str(), e))?;
        debug!("Wrote {} bytes to {}", snippet.len(), path);

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn writer(dir: &TempDir) -> EntryPointWriter {
        EntryPointWriter::new(Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap())
    }

    #[test]
    fn test_write_verbatim() {
        let dir = TempDir::new().unwrap();
        let path = writer(&dir).write("main.py", "print('hi')").unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "print('hi')");
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let w = writer(&dir);
        w.write("index.js", "old").unwrap();
        let path = w.write("index.js", "new").unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "new");
    }

    #[test]
    fn test_missing_work_dir_is_write_error() {
        let dir = TempDir::new().unwrap();
        let w = EntryPointWriter::new(
            Utf8PathBuf::from_path_buf(dir.path().join("does-not-exist")).unwrap(),
        );
        assert!(matches!(
            w.write("main.py", "x"),
            Err(Error::WriteError { .. })
        ));
    }
}
