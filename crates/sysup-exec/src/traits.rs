//! Command executor trait

use async_trait::async_trait;

use crate::error::ExecError;
use crate::result::CommandResult;

#[async_trait]
pub trait CommandExecutor: Send + Sync {
    /// Run a program with the given arguments and capture its output.
    ///
    /// The program is invoked directly (no shell); a non-zero exit status is
    /// reported through [`CommandResult::status`], not as an error.
    async fn run(&self, program: &str, args: &[&str]) -> Result<CommandResult, ExecError>;

    fn executor_type(&self) -> &'static str;
}
