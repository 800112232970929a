//! Shared integration-test harness for running the `nodeconf` binary
//! against fixture configuration files.

#![allow(dead_code)]

use std::path::PathBuf;
use std::process::Output;

/// Helpers for spawning the `nodeconf` binary in integration tests.
pub struct NodeconfProcess;

impl NodeconfProcess {
    /// Runs the binary with the given arguments and waits for it to exit.
    #[allow(clippy::missing_panics_doc)]
    pub fn spawn_command(args: &[&str]) -> Output {
        let bin = env!("CARGO_BIN_EXE_nodeconf");
        std::process::Command::new(bin)
            .args(args)
            .output()
            .expect("failed to spawn nodeconf")
    }

    /// Returns the path to a test fixture.
    #[must_use]
    pub fn fixture_path(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests/fixtures")
            .join(name)
    }
}
