//! Shared testing utilities for envup CLI tests.

use assert_cmd::Command;
use std::env;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Stub `conda` executable. Records every invocation in the log file, fails
/// when the fail marker names its first argument, and answers the `conda run`
/// interpreter queries the tool makes.
const CONDA_STUB: &str = r#"#!/bin/sh
echo "conda $*" >> "$ENVUP_TEST_LOG"
if [ -f "$ENVUP_TEST_FAIL" ] && [ "$(cat "$ENVUP_TEST_FAIL")" = "$1" ]; then
    echo "simulated $1 failure" >&2
    exit 1
fi
if [ "$1" = "run" ]; then
    shift 3
    if [ "$1" = "python" ] && [ "$2" = "--version" ]; then
        echo "Python 3.8.2"
    elif [ "$1" = "python" ] && [ "$2" = "-c" ]; then
        echo "1.4.0"
    fi
fi
exit 0
"#;

/// Stub conda shell hook, sourced by the real bash during activation.
const CONDA_HOOK: &str = r#"conda() {
    echo "conda $*" >> "$ENVUP_TEST_LOG"
    if [ -f "$ENVUP_TEST_FAIL" ] && [ "$(cat "$ENVUP_TEST_FAIL")" = "$1" ]; then
        echo "simulated $1 failure" >&2
        return 1
    fi
    return 0
}
"#;

/// Testing harness providing an isolated environment for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    bin_dir: PathBuf,
    home_dir: PathBuf,
    log_file: PathBuf,
    fail_file: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment with stub executables installed.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        let bin_dir = root.path().join("bin");
        let home_dir = root.path().join("home");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        fs::create_dir_all(&bin_dir).expect("Failed to create test bin directory");

        let hook_dir = home_dir.join("miniconda/etc/profile.d");
        fs::create_dir_all(&hook_dir).expect("Failed to create conda hook directory");
        fs::write(hook_dir.join("conda.sh"), CONDA_HOOK).expect("Failed to write conda hook");

        let conda_stub = bin_dir.join("conda");
        fs::write(&conda_stub, CONDA_STUB).expect("Failed to write conda stub");
        let mut permissions =
            fs::metadata(&conda_stub).expect("Failed to stat conda stub").permissions();
        permissions.set_mode(0o755);
        fs::set_permissions(&conda_stub, permissions).expect("Failed to chmod conda stub");

        let log_file = root.path().join("commands.log");
        let fail_file = root.path().join("fail-on");

        Self { root, work_dir, bin_dir, home_dir, log_file, fail_file }
    }

    /// Path to the workspace directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `envup` binary.
    ///
    /// The stub bin directory is prepended to `PATH` and `TRAVIS_OS_NAME`
    /// starts out unset; tests opt in with `.env(...)`.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("envup").expect("Failed to locate envup binary");
        let path =
            format!("{}:{}", self.bin_dir.display(), env::var("PATH").unwrap_or_default());
        cmd.current_dir(&self.work_dir)
            .env("HOME", &self.home_dir)
            .env("PATH", path)
            .env("ENVUP_TEST_LOG", &self.log_file)
            .env("ENVUP_TEST_FAIL", &self.fail_file)
            .env_remove("TRAVIS_OS_NAME");
        cmd
    }

    /// Make the stubs fail any invocation whose first argument matches.
    pub fn fail_on(&self, subcommand: &str) {
        fs::write(&self.fail_file, subcommand).expect("Failed to write fail marker");
    }

    /// Commands the stubs recorded, one line per invocation, in order.
    pub fn logged_commands(&self) -> Vec<String> {
        match fs::read_to_string(&self.log_file) {
            Ok(content) => content.lines().map(|line| line.to_string()).collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Write an `envup.toml` into the work directory.
    pub fn write_config(&self, content: &str) {
        fs::write(self.work_dir.join("envup.toml"), content).expect("Failed to write envup.toml");
    }
}
