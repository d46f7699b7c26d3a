//! Common test helpers shared across integration tests

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(dead_code)] // Not all helpers are used by every test file

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Environment variable the launcher reads to locate the companion script.
pub const SCRIPT_PATH_ENV: &str = "CLEANRN_SCRIPT";

/// Helper to get the compiled binary path
pub fn get_binary_path() -> PathBuf {
    // Get the directory where cargo places test binaries
    let mut path = env::current_exe().unwrap();
    path.pop(); // Remove test executable name

    // Check if we're in a 'deps' directory (integration tests)
    if path.ends_with("deps") {
        path.pop(); // Go up to debug or release
    }

    path.push("cleanrn");

    // If the binary doesn't exist in debug, try building it first
    if !path.exists() {
        let build_output = Command::new("cargo")
            .args(["build", "--bin", "cleanrn"])
            .output()
            .expect("Failed to build binary");

        assert!(
            build_output.status.success(),
            "Failed to build cleanrn binary: {}",
            String::from_utf8_lossy(&build_output.stderr)
        );
    }

    path
}

/// Helper to create a temporary directory for tests
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Helper to write a fake companion script into a directory
pub fn create_script(dir: &Path, content: &str) -> PathBuf {
    let script_path = dir.join("cleanrn.sh");
    fs::write(&script_path, content).unwrap();
    script_path
}

/// Helper to create a launcher Command pointed at a specific script path
pub fn launcher_command(binary: &Path, script: &Path) -> Command {
    let mut cmd = Command::new(binary);
    cmd.env(SCRIPT_PATH_ENV, script);
    cmd
}

/// Helper to check if bash is available on the system
pub fn is_bash_available() -> bool {
    which::which("bash").is_ok()
}
