//! Test support utilities for actseal integration tests.
//!
//! Provides an isolated CLI environment and an in-memory platform fake.

#![allow(dead_code)]

pub mod commands;
pub mod hub;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use hub::*;

use std::path::PathBuf;

use tempfile::TempDir;

/// Test environment with an isolated config directory.
///
/// Child processes get `ACTSEAL_CONFIG` pointing into the temp dir and no
/// token variables, so nothing leaks in from the developer's machine and no
/// test reaches the network.
pub struct Test {
    /// Temporary directory holding the config file
    pub dir: TempDir,
}

impl Test {
    /// Create a new test environment without a config file.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// Create a test environment with the given config file contents.
    pub fn with_config(contents: &str) -> Self {
        let t = Self::new();
        std::fs::write(t.config_path(), contents).expect("failed to write config");
        t
    }

    /// Path the CLI will read its config from.
    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("config.toml")
    }
}
