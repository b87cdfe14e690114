//! DNF package manager (Fedora/RHEL/CentOS)

use std::sync::Arc;

use async_trait::async_trait;
use sysup_exec::result::CommandResult;
use sysup_exec::traits::CommandExecutor;
use tracing::{debug, info, instrument};

use crate::error::PackageError;
use crate::traits::PackageManager;
use crate::types::Backend;

/// Exit code check-update uses to signal that updates are available
const UPDATES_AVAILABLE: i32 = 100;

/// DNF package manager implementation
pub struct DnfManager {
    /// Executor for running dnf commands
    executor: Arc<dyn CommandExecutor>,
}

impl DnfManager {
    /// Create a new DNF manager
    pub fn new(executor: Arc<dyn CommandExecutor>) -> Self {
        Self { executor }
    }

    /// Run dnf with the given arguments, mapping launch faults
    async fn run(&self, args: &[&str]) -> Result<CommandResult, PackageError> {
        self.executor
            .run(Backend::Dnf.binary(), args)
            .await
            .map_err(|e| PackageError::UnexpectedFailure {
                backend: Backend::Dnf,
                message: e.to_string(),
            })
    }

    /// Parse `dnf list --updates` output
    fn parse_upgradable(output: &str) -> Vec<String> {
        let mut packages = Vec::new();

        for line in output.lines() {
            // Update rows name the updates repository, headers do not
            if !line.contains("updates") {
                continue;
            }

            // Parse: name.arch version repository
            // Example: bash.x86_64    5.2.15-1    updates
            let token = match line.find(' ') {
                Some(idx) => &line[..idx],
                None => line,
            };
            // Strip the architecture suffix
            let name = match token.find('.') {
                Some(idx) => &token[..idx],
                None => token,
            };
            packages.push(name.to_string());
        }

        packages
    }
}

#[async_trait]
impl PackageManager for DnfManager {
    #[instrument(skip(self))]
    async fn refresh_index(&self) -> Result<(), PackageError> {
        debug!("refreshing package index");

        let result = self.run(&["check-update"]).await?;

        // check-update exits 100 when updates are available, 0 when none
        if result.status != 0 && result.status != UPDATES_AVAILABLE {
            return Err(PackageError::CommandFailed {
                backend: Backend::Dnf,
                action: "update",
                stderr: result.stderr,
            });
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_upgradable(&self) -> Result<Vec<String>, PackageError> {
        debug!("listing upgradable packages");

        // The exit-100 convention is specific to check-update; list --updates
        // is expected to exit 0
        let result = self.run(&["list", "--updates"]).await?;

        if !result.success() {
            return Err(PackageError::CommandFailed {
                backend: Backend::Dnf,
                action: "list upgradable",
                stderr: result.stderr,
            });
        }

        let packages = Self::parse_upgradable(&result.stdout);
        info!(count = packages.len(), "found upgradable packages");

        Ok(packages)
    }

    #[instrument(skip(self))]
    async fn upgrade_all(&self) -> Result<(), PackageError> {
        info!("starting dnf upgrade");

        let result = self.run(&["upgrade", "-y"]).await?;

        if !result.success() {
            return Err(PackageError::CommandFailed {
                backend: Backend::Dnf,
                action: "upgrade",
                stderr: result.stderr,
            });
        }

        info!("dnf upgrade completed");

        Ok(())
    }

    fn backend(&self) -> Backend {
        Backend::Dnf
    }
}
