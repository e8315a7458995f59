//! Package-path lookup backed by the ament/ROS environment.
//!
//! The lookup capability is probed once at startup: if neither
//! `AMENT_PREFIX_PATH` nor `ROS_PACKAGE_PATH` is set, the capability is
//! [`PackageIndex::Absent`] and stays absent for the whole run. Call sites
//! never discover absence through failures mid-generation.

use std::env;
use std::path::PathBuf;

use sdfgen_core::application::ports::{PackageIndex, PackageLocator};
use tracing::debug;

/// Locates package share directories under a fixed set of install prefixes.
#[derive(Debug, Clone)]
pub struct AmentIndexLocator {
    prefixes: Vec<PathBuf>,
}

impl AmentIndexLocator {
    /// Locator over caller-supplied prefixes (used by tests).
    pub fn with_prefixes(prefixes: Vec<PathBuf>) -> Self {
        Self { prefixes }
    }

    /// Probe the environment for the package lookup capability.
    ///
    /// `AMENT_PREFIX_PATH` entries are install prefixes whose packages live
    /// under `<prefix>/share/<package>`; `ROS_PACKAGE_PATH` entries may point
    /// directly at directories containing `<package>`. Both lists contribute.
    pub fn detect() -> PackageIndex {
        let mut prefixes: Vec<PathBuf> = Vec::new();
        for var in ["AMENT_PREFIX_PATH", "ROS_PACKAGE_PATH"] {
            if let Some(value) = env::var_os(var) {
                prefixes.extend(env::split_paths(&value).filter(|p| !p.as_os_str().is_empty()));
            }
        }

        if prefixes.is_empty() {
            debug!("no package index in the environment");
            PackageIndex::Absent
        } else {
            debug!(count = prefixes.len(), "package index prefixes detected");
            PackageIndex::Locator(Box::new(Self { prefixes }))
        }
    }
}

impl PackageLocator for AmentIndexLocator {
    fn locate(&self, package: &str) -> Option<PathBuf> {
        for prefix in &self.prefixes {
            for candidate in [prefix.join("share").join(package), prefix.join(package)] {
                if candidate.is_dir() {
                    return Some(candidate);
                }
            }
        }
        None
    }
}
