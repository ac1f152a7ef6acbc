use crate::agents::{
    ArchiveBuilder, ExcludeSet, PipExecutionAgent, PoetryExecutionAgent, ProjectScannerAgent,
    WheelLocator,
};
use crate::error::{MilepackError, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Name of the distribution that `package-install` replaces.
pub const PACKAGE_NAME: &str = "milepack";

/// Directory the build step writes artifacts into, relative to the project root.
pub const DIST_DIR: &str = "dist";

/// Execute the package workflow - validate the project and zip it up
pub fn execute_package<P: AsRef<Path>>(
    project_path: P,
    exclude_patterns: Vec<String>,
    output: &Path,
    verbose: bool,
) -> Result<()> {
    let project_path = project_path.as_ref();
    println!("{}", "Packaging milestone project...".cyan().bold());

    println!("\n{}", "1. Validating project structure...".yellow());
    let scanner = ProjectScannerAgent::new(project_path);
    let project_info = scanner.validate()?;
    println!("{}", "✓ Project structure is valid".green());
    println!(
        "   Readme: {}",
        project_info
            .readme_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default()
            .bright_cyan()
    );

    println!("\n{}", "2. Resolving exclusion patterns...".yellow());
    let excludes = if exclude_patterns.is_empty() {
        println!(
            "   {}",
            "No patterns supplied, using the default exclusion set".dimmed()
        );
        ExcludeSet::default_set()?
    } else {
        ExcludeSet::from_patterns(&exclude_patterns)?
    };
    for pattern in excludes.descriptions() {
        println!("   • {}", pattern.dimmed());
    }

    println!("\n{}", "3. Writing archive...".yellow());
    println!("   Project root : {}", project_path.display());
    println!("   Output zip   : {}", output.display());
    let builder = ArchiveBuilder::new(&project_info.project_path, output);
    let report = builder.archive(&excludes, verbose)?;

    println!("\n{}", "Summary:".cyan().bold());
    println!("  {} files included", report.included.to_string().green());
    println!("  {} files excluded", report.excluded.to_string().yellow());

    println!("\n{}", "✨ Packaging complete!".green().bold());
    Ok(())
}

/// Execute the dependency update workflow
pub fn execute_update_dependencies<P: AsRef<Path>>(project_path: P) -> Result<()> {
    let project_path = project_path.as_ref();
    println!("{}", "Updating project dependencies...".cyan().bold());

    println!("\n{}", "1. Checking project manifest...".yellow());
    require_manifest(project_path)?;
    println!("{}", "✓ pyproject.toml found".green());

    println!("\n{}", "2. Running poetry update...".yellow());
    PoetryExecutionAgent::new(project_path).execute_update()?;

    println!("\n{}", "✨ Dependencies updated!".green().bold());
    Ok(())
}

/// Execute the build workflow
pub fn execute_build<P: AsRef<Path>>(project_path: P) -> Result<()> {
    let project_path = project_path.as_ref();
    println!("{}", "Building distribution...".cyan().bold());

    println!("\n{}", "1. Checking project manifest...".yellow());
    require_manifest(project_path)?;
    println!("{}", "✓ pyproject.toml found".green());

    println!("\n{}", "2. Running poetry build...".yellow());
    PoetryExecutionAgent::new(project_path).execute_build()?;
    println!("{}", "✓ Build completed".green());

    let wheels = WheelLocator::new(project_path.join(DIST_DIR)).wheels()?;
    if wheels.is_empty() {
        println!(
            "\n{}",
            format!("No wheel files found in {}/", DIST_DIR).yellow()
        );
    } else {
        println!("\n{}", "Built artifacts:".cyan().bold());
        for wheel in &wheels {
            if let Some(name) = wheel.file_name() {
                println!("  • {}", name.to_string_lossy().green());
            }
        }
    }

    Ok(())
}

/// Execute the clean workflow - idempotent removal of the output directory
pub fn execute_clean<P: AsRef<Path>>(project_path: P) -> Result<()> {
    println!("{}", "Cleaning build output...".cyan().bold());
    clean_dist(project_path.as_ref())
}

/// Execute the install workflow: clean, build, then force-reinstall the wheel
pub fn execute_package_install<P: AsRef<Path>>(project_path: P) -> Result<()> {
    let project_path = project_path.as_ref();
    println!("{}", "Reinstalling the freshly built package...".cyan().bold());

    println!("\n{}", "1. Cleaning previous build output...".yellow());
    clean_dist(project_path)?;

    println!("\n{}", "2. Building distribution...".yellow());
    require_manifest(project_path)?;
    PoetryExecutionAgent::new(project_path).execute_build()?;
    println!("{}", "✓ Build completed".green());

    println!("\n{}", "3. Locating built wheel...".yellow());
    let Some(wheel) = select_wheel(project_path)? else {
        println!(
            "{}",
            format!("No wheel file found in {}/, nothing to install", DIST_DIR).yellow()
        );
        return Ok(());
    };
    println!("{}", format!("✓ Selected {}", wheel.display()).green());

    println!("\n{}", "4. Reinstalling via pip...".yellow());
    let pip = PipExecutionAgent::new(project_path);
    pip.uninstall(PACKAGE_NAME);
    pip.force_reinstall(&wheel)?;

    println!("\n{}", "✨ Package installed successfully!".green().bold());
    Ok(())
}

/// The wheel an install would use, if the build produced one
fn select_wheel(project_path: &Path) -> Result<Option<PathBuf>> {
    WheelLocator::new(project_path.join(DIST_DIR)).first_wheel()
}

fn require_manifest(project_path: &Path) -> Result<()> {
    let manifest = project_path.join("pyproject.toml");
    if !manifest.is_file() {
        return Err(MilepackError::ProjectValidation(format!(
            "pyproject.toml not found in '{}'",
            project_path.display()
        )));
    }
    Ok(())
}

fn clean_dist(project_path: &Path) -> Result<()> {
    let dist = project_path.join(DIST_DIR);
    if dist.is_dir() {
        std::fs::remove_dir_all(&dist)?;
        println!("{}", format!("✓ Removed {}/", DIST_DIR).green());
    } else {
        println!(
            "{}",
            format!("{}/ already absent, nothing to do", DIST_DIR).dimmed()
        );
    }
    Ok(())
}
