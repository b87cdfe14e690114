//! Error types for sysup-exec

use thiserror::Error;

/// Errors that can occur while launching or awaiting a command
#[derive(Error, Debug, Clone)]
pub enum ExecError {
    /// Process spawn error (missing binary, permission denied)
    #[error("failed to spawn process: {0}")]
    SpawnError(String),

    /// I/O error while waiting for the process or reading its output
    #[error("I/O error: {0}")]
    IoError(String),
}
