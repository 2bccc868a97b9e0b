//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create an actseal command with an isolated environment.
    ///
    /// Returns a Command configured with:
    /// - ACTSEAL_CONFIG pointing at the temp config file
    /// - token and host variables removed
    /// - NO_COLOR set so output can be matched literally
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("actseal").expect("failed to find actseal binary");
        cmd.env("ACTSEAL_CONFIG", self.config_path());
        cmd.env("NO_COLOR", "1");
        for var in ["ACTSEAL_TOKEN", "GH_TOKEN", "GITHUB_TOKEN", "ACTSEAL_HOST", "ACTSEAL_LOG"] {
            cmd.env_remove(var);
        }
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Shortcut for `actseal set NAME ARGS... --body VALUE`.
    pub fn set(&self, name: &str, args: &[&str], body: &str) -> Output {
        self.cmd()
            .arg("set")
            .arg(name)
            .args(args)
            .args(["--body", body])
            .output()
            .expect("failed to run actseal set")
    }

    /// Shortcut for `actseal set` with the value piped on stdin.
    pub fn set_stdin(&self, name: &str, args: &[&str], stdin: &str) -> Output {
        self.cmd()
            .arg("set")
            .arg(name)
            .args(args)
            .write_stdin(stdin)
            .output()
            .expect("failed to run actseal set")
    }
}
