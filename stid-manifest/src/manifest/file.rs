use std::path::{Path, PathBuf};

use super::{Manifest, parse_manifest};
use crate::{Error, Result};

/// A stid.toml file: its location, raw content and parsed manifest.
#[derive(Debug, Clone)]
pub struct StidToml {
    path: PathBuf,
    content: String,
    manifest: Manifest,
}

impl StidToml {
    /// Open and parse a stid.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let manifest = parse_manifest(&content, &path.display().to_string())?;

        Ok(Self {
            path,
            content,
            manifest,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Directory containing the manifest; relative output paths resolve against it.
    pub fn dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_open_reads_and_parses() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("stid.toml");
        std::fs::write(&path, "[types.OrderId]\nvalue = \"System.Guid\"\n").unwrap();

        let file = StidToml::open(&path).unwrap();
        assert_eq!(file.path(), path);
        assert_eq!(file.dir(), temp.path());
        assert!(file.content().contains("OrderId"));
        assert!(file.manifest().types.contains_key("OrderId"));
    }

    #[test]
    fn test_open_reports_filename_in_errors() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("stid.toml");
        std::fs::write(&path, "[types.class]\nvalue = \"int\"\n").unwrap();

        let err = StidToml::open(&path).unwrap_err();
        assert!(matches!(*err, Error::ReservedKeyword { .. }));
    }

    #[test]
    fn test_open_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = StidToml::open(temp.path().join("stid.toml")).unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
