pub mod archive_builder;
pub mod artifact_locator;
pub mod exclude;
pub mod pip_execution;
pub mod poetry_execution;
pub mod project_scanner;

pub use archive_builder::ArchiveBuilder;
pub use artifact_locator::WheelLocator;
pub use exclude::ExcludeSet;
pub use pip_execution::PipExecutionAgent;
pub use poetry_execution::PoetryExecutionAgent;
pub use project_scanner::ProjectScannerAgent;
