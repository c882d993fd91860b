use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while configuring, solving, or post-processing a problem.
///
/// Every error belongs to a [category](Error::category): configuration errors
/// are raised by the grid setters, precondition violations by `solve`, and
/// post-processing errors by the trace accessors and exporters.
#[derive(Debug, Error)]
pub enum Error {
    /// The requested time grid is inconsistent.
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration { reason: &'static str },

    /// A solve was requested before the solver was fully configured.
    #[error("cannot solve: {reason}")]
    PreconditionViolation { reason: &'static str },

    /// A trace was requested before a successful solve.
    #[error("there is no solution, call solve first")]
    NoSolutionAvailable,

    /// Writing a trace to a caller-supplied writer failed.
    #[error("failed to write trace")]
    Write(#[source] std::io::Error),

    /// Writing an output file failed.
    #[error("failed to write {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Returns the category label of the error.
    ///
    /// - `"OdeSetup"` for configuration errors
    /// - `"OdeSolve"` for precondition violations at solve time
    /// - `"OdePost"` for missing or unwritable output
    #[must_use]
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidConfiguration { .. } => "OdeSetup",
            Self::PreconditionViolation { .. } => "OdeSolve",
            Self::NoSolutionAvailable | Self::Write(_) | Self::Io { .. } => "OdePost",
        }
    }

    pub(crate) fn config(reason: &'static str) -> Self {
        Self::InvalidConfiguration { reason }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
