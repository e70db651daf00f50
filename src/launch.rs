use log::debug;
use std::ffi::OsString;
use std::path::Path;

use crate::error::LaunchError;
use crate::runtime::Runtime;

/// Run the delegate with `args` and return the exit code the launcher
/// should finish with.
#[tracing::instrument(skip(runtime))]
pub fn relay<R: Runtime>(
    runtime: &R,
    binary: &Path,
    args: &[OsString],
) -> Result<i32, LaunchError> {
    let status = runtime
        .run_inherited(binary, args)
        .map_err(|source| LaunchError::SpawnFailed {
            path: binary.to_path_buf(),
            source,
        })?;
    debug!("Delegate status: {:?}", status);

    Ok(exit_code(status))
}

/// A delegate that ended without a status code counts as success.
pub fn exit_code(status: Option<i32>) -> i32 {
    status.unwrap_or(0)
}
