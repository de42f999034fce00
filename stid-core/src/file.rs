use std::path::{Path, PathBuf};

use eyre::Result;

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// File name relative to the output directory, e.g. `OrderId.Partial.g.cs`
    fn file_name(&self) -> String;

    /// Render the file content
    fn render(&self) -> String;

    /// Full path below `base`
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.file_name())
    }

    /// Write the file below `base`, leaving it untouched when the content
    /// on disk is already identical.
    fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.path(base);
        let content = self.render();

        if is_unchanged(&path, &content) {
            return Ok(WriteResult::Unchanged);
        }
        write_file(&path, &content)?;
        Ok(WriteResult::Written)
    }
}

fn is_unchanged(path: &Path, content: &str) -> bool {
    std::fs::read_to_string(path).is_ok_and(|existing| existing == content)
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File already had identical content
    Unchanged,
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    struct Greeting;

    impl GeneratedFile for Greeting {
        fn file_name(&self) -> String {
            "Greeting.g.cs".to_string()
        }

        fn render(&self) -> String {
            "// hello\n".to_string()
        }
    }

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("Test.g.cs");

        write_file(&path, "nested").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_generated_file_write_then_unchanged() {
        let temp = TempDir::new().unwrap();

        assert_eq!(Greeting.write(temp.path()).unwrap(), WriteResult::Written);
        assert_eq!(Greeting.write(temp.path()).unwrap(), WriteResult::Unchanged);
        assert_eq!(
            fs::read_to_string(temp.path().join("Greeting.g.cs")).unwrap(),
            "// hello\n"
        );
    }

    #[test]
    fn test_stale_content_is_rewritten() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Greeting.g.cs");
        fs::write(&path, "// stale\n").unwrap();

        assert_eq!(Greeting.write(temp.path()).unwrap(), WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "// hello\n");
    }

    #[test]
    fn test_output_dir_is_created() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("Generated");

        Greeting.write(&out).unwrap();
        assert!(Greeting.path(&out).exists());
    }
}
