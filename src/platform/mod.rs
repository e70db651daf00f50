//! Platform detection and distribution unit lookup
//!
//! This module detects the current host (OS, architecture, and on Linux the
//! C library flavor) and maps it to the optional per-platform package that
//! ships the prebuilt `quickicon` binary.

mod detection;
mod table;

pub use detection::{Arch, Libc, Platform, PlatformKey};
pub use table::{DISTRIBUTION_UNITS, DistributionUnit, distribution_unit};
