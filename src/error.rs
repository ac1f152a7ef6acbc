use thiserror::Error;

#[derive(Error, Debug)]
pub enum MilepackError {
    #[error("Project validation failed: {0}")]
    ProjectValidation(String),

    #[error("Poetry execution failed: {0}")]
    PoetryExecution(String),

    #[error("Pip execution failed: {0}")]
    PipExecution(String),

    #[error("Packaging failed: {0}")]
    Packaging(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Invalid exclude pattern: {0}")]
    Pattern(#[from] glob::PatternError),
}

pub type Result<T> = std::result::Result<T, MilepackError>;
