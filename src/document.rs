use eyre::{Result, eyre};
use std::fs::File;
use std::path::{Path, PathBuf};

/// The currently open text file: identity and byte size only. Content is
/// never held here; every scan opens and closes the file within its own
/// call. Replaced wholesale when another file is opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    path: PathBuf,
    byte_size: u64,
}

impl Document {
    /// Validate that `path` is a readable regular file and record its byte
    /// size. No content is read at open time.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file =
            File::open(path).map_err(|err| eyre!("cannot open {}: {}", path.display(), err))?;
        let metadata = file.metadata()?;
        if metadata.is_dir() {
            return Err(eyre!("{} is a directory, not a text file", path.display()));
        }
        Ok(Self {
            path: path.to_path_buf(),
            byte_size: metadata.len(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn byte_size(&self) -> u64 {
        self.byte_size
    }

    /// File size in megabytes, for the status bar.
    pub fn size_mb(&self) -> f64 {
        self.byte_size as f64 / (1024.0 * 1024.0)
    }

    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_open_records_byte_size() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"hello\nworld\n").unwrap();

        let document = Document::open(file.path()).unwrap();
        assert_eq!(document.byte_size(), 12);
        assert_eq!(document.path(), file.path());
    }

    #[test]
    fn test_open_missing_file_fails() {
        let result = Document::open("/nonexistent/definitely-not-here.txt");
        assert!(result.is_err());
        let message = format!("{}", result.unwrap_err());
        assert!(message.contains("cannot open"), "got: {message}");
    }

    #[test]
    fn test_open_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Document::open(dir.path()).is_err());
    }

    #[test]
    fn test_display_name_is_file_name() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"x").unwrap();
        let document = Document::open(file.path()).unwrap();
        assert_eq!(
            document.display_name(),
            file.path().file_name().unwrap().to_string_lossy()
        );
    }
}
