use crate::error::{MilepackError, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

/// PipExecutionAgent handles uninstalling and reinstalling the built wheel
pub struct PipExecutionAgent {
    project_path: PathBuf,
}

impl PipExecutionAgent {
    pub fn new<P: AsRef<Path>>(project_path: P) -> Self {
        Self {
            project_path: project_path.as_ref().to_path_buf(),
        }
    }

    /// Uninstall any previously installed copy of the package.
    ///
    /// Failure is deliberately swallowed: the package may simply not be
    /// installed yet, and the reinstall proceeds either way.
    pub fn uninstall(&self, package: &str) {
        match self.run_pip(&["uninstall", "-y", package]) {
            Ok(status) if status.success() => {}
            Ok(_) => println!(
                "{}",
                format!("'{package}' was not installed, continuing").dimmed()
            ),
            Err(_) => println!(
                "{}",
                "pip uninstall could not be run, continuing".dimmed()
            ),
        }
    }

    /// Force-reinstall the package from the given wheel file
    pub fn force_reinstall(&self, wheel_path: &Path) -> Result<()> {
        let wheel = wheel_path.to_string_lossy();
        let status = self
            .run_pip(&["install", "--force-reinstall", &*wheel])
            .map_err(|e| {
                MilepackError::PipExecution(format!("Failed to execute pip install: {e}"))
            })?;

        if !status.success() {
            return Err(MilepackError::PipExecution(format!(
                "pip install --force-reinstall failed with exit code: {}",
                status.code().unwrap_or(-1)
            )));
        }

        Ok(())
    }

    fn run_pip(&self, args: &[&str]) -> std::io::Result<ExitStatus> {
        println!("Executing: pip {}", args.join(" "));

        Command::new("pip")
            .current_dir(&self.project_path)
            .args(args)
            .status()
    }
}
