//! Runtime abstraction for host operations.
//!
//! Everything the launcher asks of the host goes through the [`Runtime`]
//! trait, so resolution and delegation can be exercised against a mock.
//!
//! # Structure
//!
//! - `env` - Environment variables and the launcher's own executable path
//! - `fs` - Read-only file system checks
//! - `process` - Spawning the delegate with inherited stdio
//! - `signal` - Relaying signals to the delegate while it runs (Unix only)

mod env;
mod fs;
mod process;
#[cfg(unix)]
mod signal;

use anyhow::Result;
use std::env as std_env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

#[cfg_attr(test, mockall::automock)]
pub trait Runtime: Send + Sync {
    // Environment
    fn env_var(&self, key: &str) -> Result<String, std_env::VarError>;

    /// Path of the running launcher executable, as reported by the OS.
    fn current_exe(&self) -> Result<PathBuf>;

    // File System
    fn canonicalize(&self, path: &Path) -> Result<PathBuf>;

    /// True only for an existing regular file (symlinks are followed).
    fn is_file(&self, path: &Path) -> bool;

    // Process
    /// Run `program` with `args`, stdin/stdout/stderr inherited, and block
    /// until it exits. Returns the exit code, or `None` when the process
    /// ended without one (e.g. killed by a signal).
    fn run_inherited(&self, program: &Path, args: &[OsString]) -> Result<Option<i32>>;
}

pub struct RealRuntime;

impl Runtime for RealRuntime {
    fn env_var(&self, key: &str) -> Result<String, std_env::VarError> {
        self.env_var_impl(key)
    }

    fn current_exe(&self) -> Result<PathBuf> {
        self.current_exe_impl()
    }

    fn canonicalize(&self, path: &Path) -> Result<PathBuf> {
        self.canonicalize_impl(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.is_file_impl(path)
    }

    fn run_inherited(&self, program: &Path, args: &[OsString]) -> Result<Option<i32>> {
        self.run_inherited_impl(program, args)
    }
}
