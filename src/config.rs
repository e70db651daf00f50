use anyhow::{Context, Result};
use log::{debug, warn};
use std::env::VarError;
use std::path::{Path, PathBuf};

use crate::runtime::Runtime;

/// Overrides the directory searched for the delegate binary.
pub const INSTALL_DIR_ENV: &str = "QUICKICON_INSTALL_DIR";

/// Launcher settings. The launcher owns no flags, so everything comes from
/// the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct LauncherConfig {
    pub install_dir: PathBuf,
}

impl LauncherConfig {
    #[tracing::instrument(skip(runtime))]
    pub fn load<R: Runtime>(runtime: &R) -> Result<Self> {
        let install_dir = match runtime.env_var(INSTALL_DIR_ENV) {
            Ok(dir) if !dir.is_empty() => {
                debug!("Using install dir from {}: {}", INSTALL_DIR_ENV, dir);
                PathBuf::from(dir)
            }
            Err(VarError::NotUnicode(raw)) => {
                warn!(
                    "Ignoring {} because it is not valid UTF-8: {:?}",
                    INSTALL_DIR_ENV, raw
                );
                default_install_dir(runtime)?
            }
            _ => default_install_dir(runtime)?,
        };

        Ok(Self { install_dir })
    }
}

/// Directory holding the launcher executable, with symlinks resolved so a
/// launcher linked into a `bin/` directory still finds its own install.
#[tracing::instrument(skip(runtime))]
pub fn default_install_dir<R: Runtime>(runtime: &R) -> Result<PathBuf> {
    let exe = runtime.current_exe()?;
    let exe = runtime.canonicalize(&exe).unwrap_or(exe);

    exe.parent()
        .map(Path::to_path_buf)
        .context("Launcher executable has no parent directory")
}
