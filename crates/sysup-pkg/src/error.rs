//! Error types for sysup-pkg

use thiserror::Error;

use crate::types::Backend;

/// Errors that can occur during package operations
#[derive(Error, Debug, Clone)]
pub enum PackageError {
    /// Neither apt nor dnf is present and executable
    #[error("no supported package manager found (looked for apt and dnf)")]
    NoSupportedBackend,

    /// Backend process exited with an error-signaling status
    #[error("{backend} {action} failed:\n{stderr}")]
    CommandFailed {
        /// Backend that ran the command
        backend: Backend,
        /// Operation that failed (update, list, upgrade)
        action: &'static str,
        /// Captured stderr output
        stderr: String,
    },

    /// Fault launching or running the backend process
    #[error("unexpected failure running {backend}: {message}")]
    UnexpectedFailure {
        /// Backend that was being run
        backend: Backend,
        /// Diagnostic message
        message: String,
    },
}
