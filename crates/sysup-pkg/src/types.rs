//! Type definitions for package management

use serde::{Deserialize, Serialize};

/// Package manager backend
///
/// Selected once at startup and immutable for the lifetime of the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Backend {
    /// APT (Debian/Ubuntu)
    Apt,
    /// DNF (Fedora/RHEL)
    Dnf,
}

impl Backend {
    /// Fixed absolute path of the backend binary
    #[must_use]
    pub const fn binary(self) -> &'static str {
        match self {
            Backend::Apt => "/usr/bin/apt",
            Backend::Dnf => "/usr/bin/dnf",
        }
    }
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Backend::Apt => write!(f, "apt"),
            Backend::Dnf => write!(f, "dnf"),
        }
    }
}
