#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Address nothing listens on; requests fail fast with a connect error.
pub const UNREACHABLE: &str = "http://127.0.0.1:1";

/// Environment variables the binary reads as flag fallbacks.
const CARD_ENV_VARS: &[&str] = &[
    "GH_USER",
    "OUT_FILE",
    "TOP_N",
    "MIN_PCT",
    "MIN_BYTES",
    "DENY_LANGUAGES",
    "GITHUB_TOKEN",
    "GITHUB_API_URL",
    "LEETCODE_USERNAME",
    "RUST_LOG",
];

/// Creates an `assert_cmd` Command for the stat-cards binary, isolated from
/// the caller's environment and run inside `dir`.
pub fn stat_cards(dir: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("stat-cards"));
    for var in CARD_ENV_VARS {
        cmd.env_remove(var);
    }
    cmd.current_dir(dir);
    cmd
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Writes `.stat-cards.toml` in the temp directory.
    pub fn create_config(&self, content: &str) -> PathBuf {
        self.create_file(".stat-cards.toml", content)
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }

    pub fn command(&self) -> assert_cmd::Command {
        stat_cards(self.path())
    }
}
