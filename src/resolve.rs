//! Binary path resolution.
//!
//! Candidates are checked in a fixed order: the per-platform package under
//! `node_modules`, then a binary bundled next to the launcher. The first
//! existing regular file wins.

use log::{debug, info};
use std::path::{Path, PathBuf};

use crate::error::LaunchError;
use crate::platform::{Platform, distribution_unit};
use crate::runtime::Runtime;

/// File name of the delegate binary, without platform suffix.
pub const BINARY_STEM: &str = "quickicon";

/// Directory under the install dir where per-platform packages live.
pub const PACKAGE_DIR: &str = "node_modules";

/// `quickicon.exe` on Windows, `quickicon` elsewhere.
pub fn binary_name(platform: &Platform) -> String {
    if platform.is_windows() {
        format!("{}.exe", BINARY_STEM)
    } else {
        BINARY_STEM.to_string()
    }
}

/// Ordered candidate paths for this platform: package path (when the
/// platform has a package), then the bundled fallback.
pub fn candidates(install_dir: &Path, platform: &Platform) -> Vec<PathBuf> {
    let binary = binary_name(platform);
    let mut paths = Vec::with_capacity(2);

    let key = platform.key();
    match distribution_unit(&key) {
        Some(package) => {
            // Scoped names like `@quickicon/linux-x64-gnu` are two directories
            let mut path = install_dir.join(PACKAGE_DIR);
            path.extend(package.split('/'));
            path.push(&binary);
            paths.push(path);
        }
        None => debug!("No distribution unit for {}", key),
    }

    paths.push(install_dir.join(&binary));
    paths
}

/// Find the delegate binary for `platform` under `install_dir`.
#[tracing::instrument(skip(runtime))]
pub fn resolve_binary<R: Runtime>(
    runtime: &R,
    install_dir: &Path,
    platform: &Platform,
) -> Result<PathBuf, LaunchError> {
    for candidate in candidates(install_dir, platform) {
        if !runtime.is_file(&candidate) {
            debug!("Candidate not found: {}", candidate.display());
            continue;
        }
        if is_launcher_itself(runtime, &candidate) {
            debug!("Skipping candidate that is the launcher: {}", candidate.display());
            continue;
        }
        info!("Resolved quickicon binary: {}", candidate.display());
        return Ok(candidate);
    }

    Err(LaunchError::BinaryNotFound {
        os: platform.os.clone(),
        arch: platform.arch.clone(),
    })
}

/// True when `candidate` is the running launcher, which happens if the
/// launcher is installed under the delegate's own file name.
fn is_launcher_itself<R: Runtime>(runtime: &R, candidate: &Path) -> bool {
    let Ok(exe) = runtime.current_exe() else {
        return false;
    };
    match (runtime.canonicalize(candidate), runtime.canonicalize(&exe)) {
        (Ok(candidate), Ok(exe)) => candidate == exe,
        _ => false,
    }
}
