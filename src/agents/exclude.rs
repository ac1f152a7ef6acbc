use crate::error::Result;
use glob::Pattern;
use std::path::Path;

const DEFAULT_EXCLUDES: &str = include_str!("../../resources/default_exclude.txt");

/// A compiled set of glob-style exclusion patterns.
///
/// Bare file patterns (no `/`) match against the file name, so `*.meta`
/// excludes meta files at any depth. Patterns containing `/` match against
/// the full path relative to the project root, with `**` crossing
/// directories.
pub struct ExcludeSet {
    patterns: Vec<Pattern>,
}

impl ExcludeSet {
    pub fn from_patterns<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|p| Pattern::new(p.as_ref()))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// The exclusion set shipped with the binary, used when the user
    /// supplies no patterns of their own.
    pub fn default_set() -> Result<Self> {
        Self::from_patterns(&parse_pattern_lines(DEFAULT_EXCLUDES))
    }

    pub fn is_excluded(&self, relative_path: &Path) -> bool {
        let file_name = relative_path
            .file_name()
            .map(|name| name.to_string_lossy());

        self.patterns.iter().any(|pattern| {
            if pattern.as_str().contains('/') {
                pattern.matches_path(relative_path)
            } else {
                file_name
                    .as_deref()
                    .is_some_and(|name| pattern.matches(name))
            }
        })
    }

    pub fn descriptions(&self) -> Vec<&str> {
        self.patterns.iter().map(|p| p.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// Strips comments and blank lines from a pattern list, one pattern per line
fn parse_pattern_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn default_set_is_non_empty() {
        let set = ExcludeSet::default_set().unwrap();
        assert!(!set.is_empty());
        assert!(set.descriptions().iter().all(|p| !p.starts_with('#')));
    }

    #[test]
    fn bare_patterns_match_at_any_depth() {
        let set = ExcludeSet::from_patterns(&["*.meta"]).unwrap();
        assert!(set.is_excluded(&PathBuf::from("scene.meta")));
        assert!(set.is_excluded(&PathBuf::from("Assets/Prefabs/player.meta")));
        assert!(!set.is_excluded(&PathBuf::from("Assets/Prefabs/player.prefab")));
    }

    #[test]
    fn directory_patterns_exclude_the_subtree() {
        let set = ExcludeSet::from_patterns(&["Library/**"]).unwrap();
        assert!(set.is_excluded(&PathBuf::from("Library/ArtifactDB")));
        assert!(set.is_excluded(&PathBuf::from("Library/Bee/fullprofile.json")));
        assert!(!set.is_excluded(&PathBuf::from("Assets/Library.txt")));
    }

    #[test]
    fn pattern_lines_skip_comments_and_blanks() {
        let lines = parse_pattern_lines("# comment\n\n*.meta\n  Temp/**  \n");
        assert_eq!(lines, vec!["*.meta".to_string(), "Temp/**".to_string()]);
    }

    #[test]
    fn invalid_pattern_is_rejected() {
        assert!(ExcludeSet::from_patterns(&["a[invalid"]).is_err());
    }
}
