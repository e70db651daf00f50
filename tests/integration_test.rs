use assert_cmd::Command;
use assert_cmd::cargo;
use predicates::prelude::*;
use quickicon_launcher::config::INSTALL_DIR_ENV;
use quickicon_launcher::platform::{Platform, distribution_unit};
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn launcher(install_dir: &Path) -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("quickicon-launcher"));
    cmd.env(INSTALL_DIR_ENV, install_dir).env_remove("RUST_LOG");
    cmd
}

/// Write an executable shell script standing in for the quickicon binary.
#[cfg(unix)]
fn write_script(path: &Path, body: &str) {
    use std::os::unix::fs::PermissionsExt;

    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).unwrap();
}

/// Package path for the host, if the host has a distribution unit.
fn host_package_binary(install_dir: &Path) -> Option<PathBuf> {
    let package = distribution_unit(&Platform::detect().key())?;
    let mut path = install_dir.join("node_modules");
    path.extend(package.split('/'));
    Some(path.join("quickicon"))
}

#[test]
fn test_missing_binary_exits_1_with_platform() {
    let dir = tempdir().unwrap();
    let platform = Platform::detect();

    launcher(dir.path())
        .arg("--help")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Error: Could not find quickicon binary for your platform.",
        ))
        .stderr(predicate::str::contains(format!(
            "Platform: {}, Architecture: {}",
            platform.os, platform.arch
        )));
}

#[cfg(unix)]
#[test]
fn test_fallback_binary_receives_args_in_order() {
    let dir = tempdir().unwrap();
    write_script(
        &dir.path().join("quickicon"),
        r#"for arg in "$@"; do echo "[$arg]"; done"#,
    );

    launcher(dir.path())
        .args(["--size", "256", "in file.png", "--", "out.ico"])
        .assert()
        .success()
        .stdout("[--size]\n[256]\n[in file.png]\n[--]\n[out.ico]\n");
}

#[cfg(unix)]
#[test]
fn test_exit_code_is_relayed() {
    let dir = tempdir().unwrap();
    write_script(&dir.path().join("quickicon"), "exit 42");

    launcher(dir.path()).assert().code(42);
}

#[cfg(unix)]
#[test]
fn test_signal_termination_exits_0() {
    let dir = tempdir().unwrap();
    write_script(&dir.path().join("quickicon"), "kill -9 $$");

    launcher(dir.path()).assert().code(0);
}

#[cfg(unix)]
#[test]
fn test_stdio_is_inherited() {
    let dir = tempdir().unwrap();
    write_script(
        &dir.path().join("quickicon"),
        r#"read line; echo "out:$line"; echo "err:$line" >&2"#,
    );

    launcher(dir.path())
        .write_stdin("icon\n")
        .assert()
        .success()
        .stdout("out:icon\n")
        .stderr("err:icon\n");
}

#[cfg(unix)]
#[test]
fn test_package_binary_preferred_over_fallback() {
    let dir = tempdir().unwrap();
    let Some(package_binary) = host_package_binary(dir.path()) else {
        // Host has no distribution unit; nothing to prefer
        return;
    };
    write_script(&package_binary, "echo package");
    write_script(&dir.path().join("quickicon"), "echo fallback");

    launcher(dir.path())
        .assert()
        .success()
        .stdout("package\n");
}

#[cfg(unix)]
#[test]
fn test_unstartable_binary_exits_1() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir().unwrap();
    let binary = dir.path().join("quickicon");
    std::fs::write(&binary, "not executable").unwrap();
    std::fs::set_permissions(&binary, std::fs::Permissions::from_mode(0o644)).unwrap();

    launcher(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to start quickicon binary at"));
}

/// Delegate that traps SIGTERM, announces itself, then idles until told to stop.
/// Marker files live next to the script (`$0.ready`, `$0.term`, `$0.stop`).
#[cfg(unix)]
const TRAPPING_SCRIPT: &str = r#"trap 'touch "$0.term"; exit 7' TERM
touch "$0.ready"
while [ ! -e "$0.stop" ]; do sleep 0.1; done
exit 5"#;

#[cfg(unix)]
fn wait_for_file(path: &Path) {
    let deadline = std::time::Instant::now() + std::time::Duration::from_secs(10);
    while !path.exists() {
        assert!(
            std::time::Instant::now() < deadline,
            "timed out waiting for {}",
            path.display()
        );
        std::thread::sleep(std::time::Duration::from_millis(50));
    }
}

/// Wait for the launcher, stopping the delegate if the launcher hangs.
#[cfg(unix)]
fn wait_launcher(launcher: &mut std::process::Child, stop: &Path) -> std::process::ExitStatus {
    let deadline = std::time::Instant::now() + std::time::Duration::from_secs(10);
    loop {
        if let Some(status) = launcher.try_wait().unwrap() {
            return status;
        }
        if std::time::Instant::now() >= deadline {
            std::fs::write(stop, "").unwrap();
            launcher.wait().unwrap();
            panic!("launcher did not exit in time");
        }
        std::thread::sleep(std::time::Duration::from_millis(50));
    }
}

#[cfg(unix)]
fn spawn_launcher(install_dir: &Path) -> std::process::Child {
    std::process::Command::new(cargo::cargo_bin!("quickicon-launcher"))
        .env(INSTALL_DIR_ENV, install_dir)
        .env_remove("RUST_LOG")
        .spawn()
        .unwrap()
}

#[cfg(unix)]
#[test]
fn test_sigterm_to_launcher_reaches_delegate() {
    use nix::sys::signal::{Signal, kill};
    use nix::unistd::Pid;

    let dir = tempdir().unwrap();
    let script = dir.path().join("quickicon");
    write_script(&script, TRAPPING_SCRIPT);

    let mut launcher = spawn_launcher(dir.path());
    wait_for_file(&dir.path().join("quickicon.ready"));
    // Let the launcher finish installing its handlers
    std::thread::sleep(std::time::Duration::from_millis(200));

    // Only the launcher is signalled, not its process group
    kill(Pid::from_raw(launcher.id() as i32), Signal::SIGTERM).unwrap();

    let status = wait_launcher(&mut launcher, &dir.path().join("quickicon.stop"));
    assert_eq!(status.code(), Some(7));
    assert!(dir.path().join("quickicon.term").exists());
}

#[cfg(unix)]
#[test]
fn test_sigint_to_launcher_waits_for_delegate() {
    use nix::sys::signal::{Signal, kill};
    use nix::unistd::Pid;

    let dir = tempdir().unwrap();
    let script = dir.path().join("quickicon");
    write_script(&script, TRAPPING_SCRIPT);

    let mut launcher = spawn_launcher(dir.path());
    wait_for_file(&dir.path().join("quickicon.ready"));
    std::thread::sleep(std::time::Duration::from_millis(200));

    kill(Pid::from_raw(launcher.id() as i32), Signal::SIGINT).unwrap();
    std::thread::sleep(std::time::Duration::from_millis(300));
    let exited_early = launcher.try_wait().unwrap();

    std::fs::write(dir.path().join("quickicon.stop"), "").unwrap();
    assert!(
        exited_early.is_none(),
        "launcher exited on SIGINT while the delegate was running: {exited_early:?}"
    );
    let status = wait_launcher(&mut launcher, &dir.path().join("quickicon.stop"));
    assert_eq!(status.code(), Some(5));
    assert!(!dir.path().join("quickicon.term").exists());
}
