//! Package manager trait

use async_trait::async_trait;

use crate::error::PackageError;
use crate::types::Backend;

#[async_trait]
pub trait PackageManager: Send + Sync {
    /// Refresh the backend's local package index.
    async fn refresh_index(&self) -> Result<(), PackageError>;

    /// List the names of packages with a pending upgrade.
    ///
    /// An empty list is a valid outcome and means there is nothing to
    /// upgrade. The order follows the backend tool's output; duplicates are
    /// passed through as-is.
    async fn list_upgradable(&self) -> Result<Vec<String>, PackageError>;

    /// Apply all pending upgrades non-interactively.
    async fn upgrade_all(&self) -> Result<(), PackageError>;

    /// Which backend this manager drives.
    fn backend(&self) -> Backend;
}
