use crate::error::Result;
use std::path::{Path, PathBuf};

/// WheelLocator finds built wheel files in the output directory
pub struct WheelLocator {
    dist_dir: PathBuf,
}

impl WheelLocator {
    pub fn new<P: AsRef<Path>>(dist_dir: P) -> Self {
        Self {
            dist_dir: dist_dir.as_ref().to_path_buf(),
        }
    }

    /// All wheel files in the output directory, lexicographic by file name.
    ///
    /// Directory-listing order varies between filesystems, so selection is
    /// pinned to sorted order to keep "first wheel" deterministic.
    pub fn wheels(&self) -> Result<Vec<PathBuf>> {
        if !self.dist_dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut wheels: Vec<PathBuf> = std::fs::read_dir(&self.dist_dir)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().is_some_and(|ext| ext == "whl")
            })
            .collect();

        wheels.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(wheels)
    }

    /// The wheel that an install should use, if any
    pub fn first_wheel(&self) -> Result<Option<PathBuf>> {
        Ok(self.wheels()?.into_iter().next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn missing_directory_yields_no_wheels() {
        let dir = tempdir().unwrap();
        let locator = WheelLocator::new(dir.path().join("dist"));
        assert!(locator.first_wheel().unwrap().is_none());
    }

    #[test]
    fn ignores_non_wheel_artifacts() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("pkg-0.1.0.tar.gz"), b"sdist").unwrap();
        fs::write(dir.path().join("notes.txt"), b"notes").unwrap();

        let locator = WheelLocator::new(dir.path());
        assert!(locator.first_wheel().unwrap().is_none());
    }

    #[test]
    fn selects_lexicographically_first_wheel() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("pkg-0.2.0-py3-none-any.whl"), b"b").unwrap();
        fs::write(dir.path().join("pkg-0.1.0-py3-none-any.whl"), b"a").unwrap();
        fs::write(dir.path().join("pkg-0.10.0-py3-none-any.whl"), b"c").unwrap();

        let locator = WheelLocator::new(dir.path());
        let first = locator.first_wheel().unwrap().unwrap();
        assert_eq!(
            first.file_name().unwrap(),
            "pkg-0.1.0-py3-none-any.whl"
        );
        assert_eq!(locator.wheels().unwrap().len(), 3);
    }
}
