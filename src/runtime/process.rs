//! Delegate process execution.
//!
//! On Unix the signal relay is installed only once `spawn` has returned. A
//! signal landing before that gets the launcher's default handling, which
//! can end the launcher and leave the delegate running on its own.

use anyhow::{Context, Result};
use log::debug;
use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Stdio};

use super::RealRuntime;

impl RealRuntime {
    #[tracing::instrument(skip(self))]
    pub(crate) fn run_inherited_impl(
        &self,
        program: &Path,
        args: &[OsString],
    ) -> Result<Option<i32>> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .with_context(|| format!("Failed to spawn {}", program.display()))?;

        #[cfg(unix)]
        let relay = super::signal::SignalRelay::install(child.id());

        let waited = child.wait();
        // The pid is reaped now and may be reused; stop forwarding to it
        #[cfg(unix)]
        drop(relay);

        let status =
            waited.with_context(|| format!("Failed to wait for {}", program.display()))?;
        debug!("{} exited with {}", program.display(), status);

        Ok(status.code())
    }
}
