use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while running or exporting an accuracy study.
#[derive(Debug, Error)]
pub enum Error {
    /// The solver rejected a grid or could not solve.
    #[error(transparent)]
    Solver(#[from] planar_core::Error),

    /// The study configuration failed validation.
    #[error("invalid study: {reason}")]
    InvalidStudy { reason: &'static str },

    /// Writing an error table failed.
    #[error("failed to write {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
