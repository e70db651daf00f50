use super::detection::{Arch, Libc, PlatformKey};

/// A per-platform package bundling one prebuilt binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DistributionUnit {
    pub os: &'static str,
    pub arch: Arch,
    pub libc: Option<Libc>,
    pub package: &'static str,
}

impl DistributionUnit {
    fn matches(&self, key: &PlatformKey) -> bool {
        self.os == key.os && self.arch == key.arch && self.libc == key.libc
    }
}

const fn unit(
    os: &'static str,
    arch: Arch,
    libc: Option<Libc>,
    package: &'static str,
) -> DistributionUnit {
    DistributionUnit {
        os,
        arch,
        libc,
        package,
    }
}

/// Known platforms and the package that ships their binary.
///
/// 32-bit ARM lands in the `arm64` bucket, so it is told apart from
/// aarch64 by its libc flavor.
pub static DISTRIBUTION_UNITS: &[DistributionUnit] = &[
    unit("linux", Arch::X64, Some(Libc::Gnu), "@quickicon/linux-x64-gnu"),
    unit("linux", Arch::Arm64, Some(Libc::Gnu), "@quickicon/linux-arm64-gnu"),
    unit("linux", Arch::X64, Some(Libc::Musl), "@quickicon/linux-x64-musl"),
    unit("linux", Arch::Arm64, Some(Libc::GnuEabiHf), "@quickicon/linux-arm-gnueabihf"),
    unit("darwin", Arch::X64, None, "@quickicon/darwin-x64"),
    unit("darwin", Arch::Arm64, None, "@quickicon/darwin-arm64"),
    unit("win32", Arch::X64, None, "@quickicon/win32-x64-msvc"),
    unit("win32", Arch::Arm64, None, "@quickicon/win32-arm64-msvc"),
];

/// Package name for a platform key, if the platform has one.
pub fn distribution_unit(key: &PlatformKey) -> Option<&'static str> {
    DISTRIBUTION_UNITS
        .iter()
        .find(|unit| unit.matches(key))
        .map(|unit| unit.package)
}
