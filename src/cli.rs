use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "milepack",
    about = "Milepack - package Unity milestone projects and manage the distribution workflow",
    version,
    author
)]
pub struct Cli {
    /// Path to the project directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub path: String,

    /// Enable verbose output (per-file include/exclude lines while packaging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Package the Unity project into a zip archive, validating its structure
    Package {
        /// Glob-style patterns to exclude (e.g. "*.meta", "Library/**"); repeatable
        #[arg(short, long, value_name = "GLOB")]
        exclude: Vec<String>,

        /// Output zip file name
        #[arg(short, long, default_value = "package.zip")]
        output: PathBuf,
    },

    /// Update the project's Python dependencies via Poetry
    UpdateDependencies,

    /// Build the distributable wheel via Poetry
    Build,

    /// Remove the build output directory and everything in it
    Clean,

    /// Clean, build, and force-reinstall the freshly built wheel via pip
    PackageInstall,
}
