use crate::agents::exclude::ExcludeSet;
use crate::error::{MilepackError, Result};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use jiff::Zoned;
use std::fs::File;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;
use zip::CompressionMethod;
use zip::write::FileOptions;

/// ArchiveBuilder walks the project tree and writes the milestone zip
pub struct ArchiveBuilder {
    base_path: PathBuf,
    output_path: PathBuf,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ArchiveReport {
    pub included: usize,
    pub excluded: usize,
}

impl ArchiveBuilder {
    pub fn new<P: AsRef<Path>, Q: AsRef<Path>>(base_path: P, output_path: Q) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
            output_path: output_path.as_ref().to_path_buf(),
        }
    }

    /// Write every non-excluded file under the project root into the zip.
    ///
    /// The output file itself is skipped during the walk so an archive
    /// written inside the project can never swallow a stale copy of itself.
    pub fn archive(&self, excludes: &ExcludeSet, verbose: bool) -> Result<ArchiveReport> {
        let base_path = self.base_path.canonicalize().map_err(|e| {
            MilepackError::Packaging(format!(
                "Invalid project root '{}': {e}",
                self.base_path.display()
            ))
        })?;
        let previous_output = self.output_path.canonicalize().ok();

        let files = self.collect_files(&base_path, previous_output.as_deref())?;

        let zip_file = File::create(&self.output_path).map_err(|e| {
            MilepackError::Packaging(format!(
                "Cannot create '{}': {e}",
                self.output_path.display()
            ))
        })?;
        let mut zip = zip::ZipWriter::new(zip_file);
        zip.set_comment(format!(
            "packaged {}",
            Zoned::now().strftime("%Y-%m-%d %H:%M:%S")
        ));
        let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

        let pb = ProgressBar::new(files.len() as u64);
        if verbose {
            pb.set_draw_target(ProgressDrawTarget::hidden());
        }
        pb.set_style(
            ProgressStyle::default_bar()
                .template("  [{bar:40}] {pos}/{len} {msg}")
                .unwrap()
                .progress_chars("=>-"),
        );

        let mut report = ArchiveReport::default();
        for (path, relative) in files {
            pb.set_message(relative.clone());

            if excludes.is_excluded(Path::new(&relative)) {
                report.excluded += 1;
                if verbose {
                    println!("  {} {}", "[excluded]".yellow(), relative);
                }
            } else {
                zip.start_file(relative.as_str(), options)?;
                let mut source = File::open(&path)?;
                std::io::copy(&mut source, &mut zip)?;
                report.included += 1;
                if verbose {
                    println!("  {} {}", "[included]".green(), relative);
                }
            }

            pb.inc(1);
        }

        zip.finish()?;
        pb.finish_and_clear();

        Ok(report)
    }

    /// Collect regular files with their slash-separated relative names
    fn collect_files(
        &self,
        base_path: &Path,
        skip: Option<&Path>,
    ) -> Result<Vec<(PathBuf, String)>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(base_path).sort_by_file_name() {
            let entry =
                entry.map_err(|e| MilepackError::Packaging(format!("Walk failed: {e}")))?;
            if !entry.file_type().is_file() {
                continue;
            }
            if skip.is_some_and(|s| s == entry.path()) {
                continue;
            }

            let relative = entry
                .path()
                .strip_prefix(base_path)
                .map_err(|e| MilepackError::Packaging(format!("Path escape: {e}")))?;
            let name = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");

            files.push((entry.path().to_path_buf(), name));
        }

        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write_tree(root: &Path) {
        fs::create_dir_all(root.join("Assets/Prefabs")).unwrap();
        fs::create_dir_all(root.join("Library")).unwrap();
        fs::create_dir_all(root.join("Build")).unwrap();
        fs::write(root.join("Assets/scene.unity"), b"scene").unwrap();
        fs::write(root.join("Assets/Prefabs/player.meta"), b"meta").unwrap();
        fs::write(root.join("Library/ArtifactDB"), b"cache").unwrap();
        fs::write(root.join("Build/game.x86_64"), b"bin").unwrap();
    }

    fn entry_names(zip_path: &Path) -> Vec<String> {
        let archive = zip::ZipArchive::new(File::open(zip_path).unwrap()).unwrap();
        archive.file_names().map(str::to_string).collect()
    }

    #[test]
    fn archives_non_excluded_files_with_slash_names() {
        let project = tempdir().unwrap();
        let out = tempdir().unwrap();
        write_tree(project.path());
        let zip_path = out.path().join("milestone.zip");

        let builder = ArchiveBuilder::new(project.path(), &zip_path);
        let excludes = ExcludeSet::from_patterns(&["*.meta", "Library/**"]).unwrap();
        let report = builder.archive(&excludes, false).unwrap();

        assert_eq!(report.included, 2);
        assert_eq!(report.excluded, 2);

        let names = entry_names(&zip_path);
        assert!(names.contains(&"Assets/scene.unity".to_string()));
        assert!(names.contains(&"Build/game.x86_64".to_string()));
        assert!(!names.iter().any(|n| n.ends_with(".meta")));
        assert!(!names.iter().any(|n| n.starts_with("Library/")));
    }

    #[test]
    fn never_packs_a_stale_copy_of_itself() {
        let project = tempdir().unwrap();
        write_tree(project.path());
        let zip_path = project.path().join("package.zip");

        let builder = ArchiveBuilder::new(project.path(), &zip_path);
        let excludes = ExcludeSet::from_patterns(&["Library/**"]).unwrap();
        builder.archive(&excludes, false).unwrap();
        let second = builder.archive(&excludes, false).unwrap();

        let names = entry_names(&zip_path);
        assert!(!names.contains(&"package.zip".to_string()));
        assert_eq!(second.included, 3);
    }

    #[test]
    fn preserves_file_contents() {
        let project = tempdir().unwrap();
        let out = tempdir().unwrap();
        fs::write(project.path().join("Doe_J_m1_readme.txt"), b"milestone one").unwrap();
        let zip_path = out.path().join("m1.zip");

        ArchiveBuilder::new(project.path(), &zip_path)
            .archive(&ExcludeSet::from_patterns::<String>(&[]).unwrap(), true)
            .unwrap();

        let mut archive = zip::ZipArchive::new(File::open(&zip_path).unwrap()).unwrap();
        let mut file = archive.by_name("Doe_J_m1_readme.txt").unwrap();
        let mut contents = String::new();
        std::io::Read::read_to_string(&mut file, &mut contents).unwrap();
        assert_eq!(contents, "milestone one");
    }
}
