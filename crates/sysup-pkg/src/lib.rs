//! sysup-pkg: Package manager abstraction
//!
//! Provides backend detection, the [`PackageManager`] trait and its apt and
//! dnf implementations

use std::sync::Arc;

use sysup_exec::traits::CommandExecutor;

pub mod apt;
pub mod detect;
pub mod dnf;
pub mod error;
pub mod traits;
pub mod types;

pub use detect::detect;
pub use error::PackageError;
pub use traits::PackageManager;
pub use types::Backend;

use apt::AptManager;
use dnf::DnfManager;

/// Construct the manager for a detected backend.
#[must_use]
pub fn manager_for(backend: Backend, executor: Arc<dyn CommandExecutor>) -> Arc<dyn PackageManager> {
    match backend {
        Backend::Apt => Arc::new(AptManager::new(executor)),
        Backend::Dnf => Arc::new(DnfManager::new(executor)),
    }
}
