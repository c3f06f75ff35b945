use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using [`OptimizeError`].
pub type Result<T> = std::result::Result<T, OptimizeError>;

#[derive(Error, Debug)]
pub enum OptimizeError {
    #[error("PDF engine not found: {engine}: {reason}")]
    EngineNotFound { engine: String, reason: String },

    #[error("PDF engine {engine} failed: {reason}")]
    EngineExecutionFailed { engine: String, reason: String },

    #[error("Failed to {action} {}: {source}", path.display())]
    Filesystem {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl OptimizeError {
    pub fn engine_not_found(engine: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::EngineNotFound {
            engine: engine.into(),
            reason: reason.into(),
        }
    }

    pub fn engine_failed(engine: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::EngineExecutionFailed {
            engine: engine.into(),
            reason: reason.into(),
        }
    }

    pub fn filesystem(
        action: &'static str,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::Filesystem {
            action,
            path: path.into(),
            source,
        }
    }
}
