pub mod config;
pub mod error;
pub mod launch;
pub mod platform;
pub mod resolve;
pub mod runtime;

use anyhow::Result;
use std::ffi::OsString;

use config::LauncherConfig;
use platform::Platform;
use runtime::Runtime;

pub use error::LaunchError;

/// Resolve the quickicon binary for `platform` and run it with `args`.
///
/// Returns the exit code the launcher should terminate with.
pub fn run<R: Runtime>(runtime: &R, platform: &Platform, args: Vec<OsString>) -> Result<i32> {
    let config = LauncherConfig::load(runtime)?;
    let binary = resolve::resolve_binary(runtime, &config.install_dir, platform)?;
    let code = launch::relay(runtime, &binary, &args)?;
    Ok(code)
}
