#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::Duration;
use tempfile::TempDir;

#[allow(dead_code)]
pub const CMD_TIMEOUT: Duration = Duration::from_secs(15);

/// Empty config file shared by tests, so the user's own config never leaks in.
fn isolated_config() -> &'static Path {
    static CONFIG: OnceLock<(TempDir, PathBuf)> = OnceLock::new();
    let (_, path) = CONFIG.get_or_init(|| {
        let dir = tempfile::tempdir().expect("failed to create config dir for tests");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "").expect("failed to write test config");
        (dir, path)
    });
    path
}

/// Create a configured `toolmap` command suitable for integration tests.
#[allow(dead_code)]
pub fn toolmap_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("toolmap"));
    cmd.timeout(CMD_TIMEOUT);
    cmd.env("TOOLMAP_CONFIG", isolated_config());
    cmd.env_remove("TOOLMAP_BASE_URL");
    cmd.env_remove("TOOLMAP_POPULAR_LIMIT");
    cmd.env_remove("TOOLMAP_OUTPUT_FORMAT");
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Write a config file into `dir` and return its path.
#[allow(dead_code)]
pub fn write_config(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("toolmap.toml");
    std::fs::write(&path, content).unwrap();
    path
}
