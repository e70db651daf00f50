use anyhow::Result;
use quickicon_launcher::platform::Platform;
use quickicon_launcher::runtime::RealRuntime;
use std::ffi::OsString;

/// quickicon-launcher - runs the prebuilt quickicon binary for this platform.
///
/// Every argument is passed to quickicon unchanged and quickicon's exit
/// status becomes the launcher's. The install directory can be overridden
/// with the QUICKICON_INSTALL_DIR environment variable.
fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<OsString> = std::env::args_os().skip(1).collect();
    let code = quickicon_launcher::run(&RealRuntime, &Platform::detect(), args)?;

    std::process::exit(code)
}
