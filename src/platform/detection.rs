use std::fmt;

/// Architecture bucket used for distribution unit lookup.
///
/// Only two buckets exist: anything that is not `x64` is treated as `arm64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arch {
    X64,
    Arm64,
}

impl Arch {
    /// Collapse a raw architecture identifier into one of the two buckets.
    pub fn normalize(raw: &str) -> Self {
        if raw == "x64" { Arch::X64 } else { Arch::Arm64 }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Arch::X64 => "x64",
            Arch::Arm64 => "arm64",
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// C library flavor of a Linux host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Libc {
    Gnu,
    Musl,
    /// 32-bit ARM, glibc, hardware floating point
    GnuEabiHf,
}

impl Libc {
    pub fn as_str(&self) -> &'static str {
        match self {
            Libc::Gnu => "gnu",
            Libc::Musl => "musl",
            Libc::GnuEabiHf => "gnueabihf",
        }
    }
}

/// Host platform information, using the distribution naming
/// (`linux`/`darwin`/`win32`, `x64`/`arm64`/`arm`/`ia32`).
#[derive(Debug, Clone, PartialEq)]
pub struct Platform {
    pub os: String,
    pub arch: String,
    pub libc: Option<Libc>,
}

impl Platform {
    /// Detect the current platform
    pub fn detect() -> Self {
        Self {
            os: Self::detect_os(),
            arch: Self::detect_arch(),
            libc: Self::detect_libc(),
        }
    }

    pub fn is_windows(&self) -> bool {
        self.os == "win32"
    }

    /// Lookup key with the architecture collapsed to its bucket.
    pub fn key(&self) -> PlatformKey {
        PlatformKey {
            os: self.os.clone(),
            arch: Arch::normalize(&self.arch),
            libc: self.libc,
        }
    }

    fn detect_os() -> String {
        #[cfg(target_os = "macos")]
        {
            "darwin".to_string()
        }
        #[cfg(target_os = "linux")]
        {
            "linux".to_string()
        }
        #[cfg(target_os = "windows")]
        {
            "win32".to_string()
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            std::env::consts::OS.to_string()
        }
    }

    fn detect_arch() -> String {
        #[cfg(target_arch = "x86_64")]
        {
            "x64".to_string()
        }
        #[cfg(target_arch = "aarch64")]
        {
            "arm64".to_string()
        }
        #[cfg(target_arch = "arm")]
        {
            "arm".to_string()
        }
        #[cfg(target_arch = "x86")]
        {
            "ia32".to_string()
        }
        #[cfg(not(any(
            target_arch = "x86_64",
            target_arch = "aarch64",
            target_arch = "arm",
            target_arch = "x86"
        )))]
        {
            std::env::consts::ARCH.to_string()
        }
    }

    fn detect_libc() -> Option<Libc> {
        #[cfg(all(target_os = "linux", target_env = "musl"))]
        {
            Some(Libc::Musl)
        }
        #[cfg(all(target_os = "linux", not(target_env = "musl"), target_arch = "arm"))]
        {
            Some(Libc::GnuEabiHf)
        }
        #[cfg(all(target_os = "linux", not(target_env = "musl"), not(target_arch = "arm")))]
        {
            Some(Libc::Gnu)
        }
        #[cfg(not(target_os = "linux"))]
        {
            None
        }
    }
}

/// Composite `{os}-{arch}` key, plus the libc flavor on Linux.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformKey {
    pub os: String,
    pub arch: Arch,
    pub libc: Option<Libc>,
}

impl fmt::Display for PlatformKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.os, self.arch)?;
        if let Some(libc) = self.libc {
            write!(f, " ({})", libc.as_str())?;
        }
        Ok(())
    }
}
