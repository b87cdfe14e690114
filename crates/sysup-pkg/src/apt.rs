//! APT package manager (Debian/Ubuntu)

use std::sync::Arc;

use async_trait::async_trait;
use sysup_exec::result::CommandResult;
use sysup_exec::traits::CommandExecutor;
use tracing::{debug, info, instrument};

use crate::error::PackageError;
use crate::traits::PackageManager;
use crate::types::Backend;

/// APT package manager implementation
pub struct AptManager {
    /// Executor for running apt commands
    executor: Arc<dyn CommandExecutor>,
}

impl AptManager {
    /// Create a new APT manager
    pub fn new(executor: Arc<dyn CommandExecutor>) -> Self {
        Self { executor }
    }

    /// Run apt with the given arguments, mapping launch faults
    async fn run(&self, args: &[&str]) -> Result<CommandResult, PackageError> {
        self.executor
            .run(Backend::Apt.binary(), args)
            .await
            .map_err(|e| PackageError::UnexpectedFailure {
                backend: Backend::Apt,
                message: e.to_string(),
            })
    }

    /// Parse `apt list --upgradable` output
    fn parse_upgradable(output: &str) -> Vec<String> {
        let mut packages = Vec::new();

        for line in output.lines() {
            // Header and progress lines carry no upgradable marker
            if !line.contains("[upgradable from") {
                continue;
            }

            // Parse: package/suite version arch [upgradable from: oldversion]
            // Example: curl/stable 7.88.1 amd64 [upgradable from: 7.81.0]
            let name = match line.find('/') {
                Some(idx) => &line[..idx],
                None => line,
            };
            packages.push(name.to_string());
        }

        packages
    }
}

#[async_trait]
impl PackageManager for AptManager {
    #[instrument(skip(self))]
    async fn refresh_index(&self) -> Result<(), PackageError> {
        debug!("refreshing package index");

        let result = self.run(&["update"]).await?;

        if !result.success() {
            return Err(PackageError::CommandFailed {
                backend: Backend::Apt,
                action: "update",
                stderr: result.stderr,
            });
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_upgradable(&self) -> Result<Vec<String>, PackageError> {
        debug!("listing upgradable packages");

        let result = self.run(&["list", "--upgradable"]).await?;

        if !result.success() {
            return Err(PackageError::CommandFailed {
                backend: Backend::Apt,
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
        info!("starting apt dist-upgrade");

        let result = self.run(&["dist-upgrade", "-y"]).await?;

        if !result.success() {
            return Err(PackageError::CommandFailed {
                backend: Backend::Apt,
                action: "upgrade",
                stderr: result.stderr,
            });
        }

        info!("apt dist-upgrade completed");

        Ok(())
    }

    fn backend(&self) -> Backend {
        Backend::Apt
    }
}
