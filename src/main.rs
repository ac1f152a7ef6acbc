mod agents;
mod cli;
mod error;
mod workflow;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use std::process;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Package { exclude, output } => {
            workflow::execute_package(&cli.path, exclude, &output, cli.verbose)
        }
        Commands::UpdateDependencies => workflow::execute_update_dependencies(&cli.path),
        Commands::Build => workflow::execute_build(&cli.path),
        Commands::Clean => workflow::execute_clean(&cli.path),
        Commands::PackageInstall => workflow::execute_package_install(&cli.path),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}
