//! Backend detection

use std::path::Path;

use tracing::debug;

use crate::error::PackageError;
use crate::types::Backend;

/// Probe order. apt wins when both backends are installed.
const PROBE_ORDER: [Backend; 2] = [Backend::Apt, Backend::Dnf];

/// Detect the host's package manager.
///
/// Probes the fixed binary paths of each backend and selects the first one
/// that is present and executable.
pub fn detect() -> Result<Backend, PackageError> {
    detect_in(Path::new("/"))
}

/// Detect against an alternate filesystem root.
///
/// Backend binary paths are resolved relative to `root`, so tests can stage
/// arbitrary filesystem states under a temporary directory.
pub fn detect_in(root: &Path) -> Result<Backend, PackageError> {
    for backend in PROBE_ORDER {
        let path = root.join(backend.binary().trim_start_matches('/'));
        if is_executable(&path) {
            debug!(%backend, path = %path.display(), "selected package manager");
            return Ok(backend);
        }
    }

    Err(PackageError::NoSupportedBackend)
}

/// Regular file with at least one executable permission bit
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    match std::fs::metadata(path) {
        Ok(meta) => meta.is_file() && meta.permissions().mode() & 0o111 != 0,
        Err(_) => false,
    }
}
