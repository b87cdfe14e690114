//! Local command execution using `tokio::process`

use std::time::Instant;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, error, instrument};

use crate::error::ExecError;
use crate::result::CommandResult;
use crate::traits::CommandExecutor;

/// Local command executor
///
/// Executes commands on the local machine using `tokio::process::Command`.
/// Programs are invoked directly with an argument vector, never through a
/// shell.
#[derive(Debug, Clone)]
pub struct LocalExecutor;

impl LocalExecutor {
    /// Create a new local executor
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Internal method to execute command
    #[instrument(skip(self), level = "debug")]
    async fn execute(&self, program: &str, args: &[&str]) -> Result<CommandResult, ExecError> {
        let start = Instant::now();

        debug!(command = %program, ?args, "executing local command");

        let child = Command::new(program)
            .args(args)
            .stdout(std::process::Stdio::piped())
            .stderr(std::process::Stdio::piped())
            .spawn()
            .map_err(|e| ExecError::SpawnError(e.to_string()))?;

        let output = child
            .wait_with_output()
            .await
            .map_err(|e| ExecError::IoError(e.to_string()))?;

        let duration = start.elapsed();

        let status = output.status.code().unwrap_or(-1);
        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        debug!(
            command = %program,
            status = status,
            duration = ?duration,
            "command completed"
        );

        if !output.status.success() {
            error!(
                command = %program,
                status = status,
                stderr = %stderr,
                "command failed"
            );
        }

        Ok(CommandResult {
            status,
            stdout,
            stderr,
            duration,
        })
    }
}

impl Default for LocalExecutor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommandExecutor for LocalExecutor {
    #[instrument(skip(self), level = "debug")]
    async fn run(&self, program: &str, args: &[&str]) -> Result<CommandResult, ExecError> {
        self.execute(program, args).await
    }

    fn executor_type(&self) -> &'static str {
        "local"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_run_success() {
        let executor = LocalExecutor::new();
        let result = executor.run("sh", &["-c", "echo hello"]).await.unwrap();

        assert!(result.success());
        assert_eq!(result.stdout.trim(), "hello");
    }

    #[tokio::test]
    async fn test_run_failure() {
        let executor = LocalExecutor::new();
        let result = executor.run("sh", &["-c", "exit 42"]).await.unwrap();

        assert!(!result.success());
        assert_eq!(result.status, 42);
    }

    #[tokio::test]
    async fn test_run_with_stderr() {
        let executor = LocalExecutor::new();
        let result = executor.run("sh", &["-c", "echo error >&2"]).await.unwrap();

        assert!(result.success());
        assert_eq!(result.stderr.trim(), "error");
    }

    #[tokio::test]
    async fn test_spawn_error_for_missing_binary() {
        let executor = LocalExecutor::new();
        let result = executor.run("/nonexistent/binary", &[]).await;

        assert!(matches!(result, Err(ExecError::SpawnError(_))));
    }
}
