//! Live filesystem adapter using `std::fs`.

use std::path::Path;

use crate::ports::filesystem::FileSystem;

/// Live filesystem adapter backed by real disk I/O.
///
/// Writes create missing parent directories so a fresh store root works on
/// first use.
pub struct LiveFileSystem;

impl FileSystem for LiveFileSystem {
    fn read_to_string(
        &self,
        path: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        Ok(std::fs::read_to_string(path)?)
    }

    fn write(
        &self,
        path: &Path,
        contents: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(std::fs::write(path, contents)?)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_read_round_trip_creates_parents() {
        let dir = std::env::temp_dir()
            .join(format!("slate-live-fs-{}", std::process::id()))
            .join("nested");
        let path = dir.join("doc.json");
        let fs = LiveFileSystem;

        assert!(!fs.exists(&path));
        fs.write(&path, "[]").unwrap();
        assert!(fs.exists(&path));
        assert_eq!(fs.read_to_string(&path).unwrap(), "[]");

        let _ = std::fs::remove_dir_all(dir.parent().unwrap());
    }

    #[test]
    fn read_missing_file_errors() {
        let fs = LiveFileSystem;
        let path = std::env::temp_dir().join("slate-live-fs-missing/nope.json");
        assert!(fs.read_to_string(&path).is_err());
    }
}
