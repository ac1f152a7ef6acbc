use crate::error::{MilepackError, Result};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// PoetryExecutionAgent executes Poetry commands
pub struct PoetryExecutionAgent {
    project_path: PathBuf,
}

impl PoetryExecutionAgent {
    pub fn new<P: AsRef<Path>>(project_path: P) -> Self {
        Self {
            project_path: project_path.as_ref().to_path_buf(),
        }
    }

    /// Update dependencies to the latest versions allowed by the manifest
    pub fn execute_update(&self) -> Result<()> {
        self.execute_poetry_command(&["update"])
    }

    /// Build the sdist and wheel into the output directory
    pub fn execute_build(&self) -> Result<()> {
        self.execute_poetry_command(&["build"])
    }

    /// Execute a Poetry command with live output streaming
    fn execute_poetry_command(&self, args: &[&str]) -> Result<()> {
        println!("Executing: poetry {}", args.join(" "));

        let mut command = Command::new("poetry");
        command
            .current_dir(&self.project_path)
            .args(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit());

        let mut child = command
            .spawn()
            .map_err(|e| MilepackError::PoetryExecution(format!("Failed to spawn process: {e}")))?;

        if let Some(stdout) = child.stdout.take() {
            let reader = BufReader::new(stdout);
            for line in reader.lines() {
                if let Ok(line) = line {
                    println!("{}", line);
                }
            }
        }

        let status = child
            .wait()
            .map_err(|e| MilepackError::PoetryExecution(format!("Failed to wait for process: {e}")))?;

        if !status.success() {
            return Err(MilepackError::PoetryExecution(format!(
                "poetry {} failed with exit code: {}",
                args.join(" "),
                status.code().unwrap_or(-1)
            )));
        }

        Ok(())
    }
}
