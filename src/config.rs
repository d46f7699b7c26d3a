//! Companion script discovery.
//!
//! The script location is derived from the launcher's own install
//! directory, never from the caller's working directory, so `cleanrn`
//! behaves the same no matter where it is invoked from.

use std::env;
use std::path::{Path, PathBuf};

use crate::delegator::LaunchError;

/// Name of the bundled companion script.
pub const SCRIPT_NAME: &str = "cleanrn.sh";

/// Environment variable overriding the companion script location.
/// Takes precedence over install-relative resolution; used by the
/// integration tests to point the launcher at a scratch script.
pub const SCRIPT_PATH_ENV: &str = "CLEANRN_SCRIPT";

/// Configuration for a single launcher invocation.
///
/// Passed explicitly into [`crate::delegator::Delegator`] at construction
/// so tests can substitute any target they like.
#[derive(Debug, Clone)]
pub struct LauncherConfig {
    /// Absolute path to the companion script.
    pub script_path: PathBuf,
}

impl LauncherConfig {
    #[must_use]
    pub fn new(script_path: PathBuf) -> Self {
        Self { script_path }
    }

    /// Resolve the companion script for this process.
    ///
    /// Order: the [`SCRIPT_PATH_ENV`] override if set, otherwise
    /// [`SCRIPT_NAME`] next to the launcher executable.
    pub fn from_install_dir() -> Result<Self, LaunchError> {
        if let Some(path) = env::var_os(SCRIPT_PATH_ENV) {
            return Ok(Self::new(PathBuf::from(path)));
        }

        let exe = env::current_exe()
            .map_err(|e| LaunchError::InstallDir(e.to_string()))?;
        let install_dir = exe.parent().ok_or_else(|| {
            LaunchError::InstallDir(format!(
                "executable path '{}' has no parent directory",
                exe.display()
            ))
        })?;

        Ok(Self::new(default_script_path(install_dir)))
    }
}

/// The install-relative location of the companion script.
#[must_use]
pub fn default_script_path(install_dir: &Path) -> PathBuf {
    install_dir.join(SCRIPT_NAME)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_script_path_is_install_relative() {
        let path = default_script_path(Path::new("/opt/cleanrn"));
        assert_eq!(path, PathBuf::from("/opt/cleanrn/cleanrn.sh"));
    }

    #[test]
    fn test_config_keeps_explicit_path() {
        let config = LauncherConfig::new(PathBuf::from("/tmp/fake.sh"));
        assert_eq!(config.script_path, PathBuf::from("/tmp/fake.sh"));
    }

    #[test]
    fn test_from_install_dir_resolves_next_to_executable() {
        // No override in the test environment, so resolution must land
        // next to the current executable and name the bundled script.
        if env::var_os(SCRIPT_PATH_ENV).is_some() {
            return;
        }
        let config = LauncherConfig::from_install_dir().unwrap();
        assert!(config.script_path.is_absolute());
        assert_eq!(
            config.script_path.file_name().and_then(|n| n.to_str()),
            Some(SCRIPT_NAME)
        );
    }
}
