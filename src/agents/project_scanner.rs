use crate::error::{MilepackError, Result};
use regex::Regex;
use std::path::{Path, PathBuf};

/// Directories every Unity milestone project must carry at its root.
pub const REQUIRED_DIRS: &[&str] = &["Build", "Assets", "ProjectSettings", "Packages"];

const README_PATTERN: &str = r"^[A-Za-z]+_[A-Za-z]_m\d+_readme\.txt$";

/// ProjectScannerAgent validates the Unity project structure
pub struct ProjectScannerAgent {
    project_path: PathBuf,
}

impl ProjectScannerAgent {
    pub fn new<P: AsRef<Path>>(project_path: P) -> Self {
        Self {
            project_path: project_path.as_ref().to_path_buf(),
        }
    }

    /// Validates the project structure
    pub fn validate(&self) -> Result<ProjectInfo> {
        if !self.project_path.is_dir() {
            return Err(MilepackError::ProjectValidation(format!(
                "'{}' is not a directory",
                self.project_path.display()
            )));
        }

        let missing: Vec<&str> = REQUIRED_DIRS
            .iter()
            .filter(|dir| !self.project_path.join(dir).is_dir())
            .copied()
            .collect();

        if !missing.is_empty() {
            return Err(MilepackError::ProjectValidation(format!(
                "Missing required directories: {}",
                missing.join(", ")
            )));
        }

        let readme_path = self.find_valid_readme()?.ok_or_else(|| {
            MilepackError::ProjectValidation(
                "Missing or incorrectly named readme file.\n\
                 Expected pattern: <LASTNAME>_<FIRST_INITIAL>_m<INT>_readme.txt"
                    .to_string(),
            )
        })?;

        Ok(ProjectInfo {
            project_path: self.project_path.clone(),
            readme_path,
        })
    }

    /// Scans the project root for a readme matching the milestone naming convention.
    fn find_valid_readme(&self) -> Result<Option<PathBuf>> {
        let pattern = Regex::new(README_PATTERN).map_err(|e| {
            MilepackError::ProjectValidation(format!("Invalid readme pattern: {e}"))
        })?;

        let mut entries: Vec<PathBuf> = std::fs::read_dir(&self.project_path)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .collect();
        entries.sort();

        Ok(entries.into_iter().find(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| pattern.is_match(name))
        }))
    }
}

#[derive(Debug, Clone)]
pub struct ProjectInfo {
    pub project_path: PathBuf,
    pub readme_path: PathBuf,
}
