//! Error handling for the fixture writer.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for testkit operations
pub type Result<T> = std::result::Result<T, TestkitError>;

/// Errors raised while loading or writing a project description
#[derive(Error, Debug)]
pub enum TestkitError {
    // Validation Errors
    #[error(
        "Source does not contain a package declaration. Did you forget it? (source '{name}' at {path})"
    )]
    MissingPackageDeclaration { name: String, path: PathBuf },

    // File Errors
    #[error("Failed to read file: {path}: {source}")]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}: {source}")]
    FileWriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory creation failed: {path}: {source}")]
    DirectoryCreateError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),

    // Serialization Errors
    #[error("JSON serialization error: {0}")]
    JsonSerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TestkitError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            TestkitError::MissingPackageDeclaration { .. } => "MISSING_PACKAGE_DECLARATION",
            TestkitError::FileReadError { .. } => "FILE_READ_ERROR",
            TestkitError::FileWriteError { .. } => "FILE_WRITE_ERROR",
            TestkitError::DirectoryCreateError { .. } => "DIRECTORY_CREATE_ERROR",
            TestkitError::Walk(_) => "WALK_ERROR",
            TestkitError::JsonSerializationError(_) => "SERIALIZATION_ERROR",
            TestkitError::Io(_) => "IO_ERROR",
        }
    }

    /// Returns a short hint for fixing the problem, if there is one.
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            TestkitError::MissingPackageDeclaration { .. } => Some(
                "Add a package declaration to the source, or place it at the source set root.",
            ),
            TestkitError::FileReadError { .. } => Some("Check the file path and try again."),
            TestkitError::DirectoryCreateError { .. } | TestkitError::FileWriteError { .. } => {
                Some("Check that the fixture root is writable.")
            }
            TestkitError::JsonSerializationError(_) => {
                Some("Check the project description against the expected JSON shape.")
            }
            _ => None,
        }
    }
}
