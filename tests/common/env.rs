//! Test environment for isolated guide runs.
//!
//! Each `TestEnv` owns a temp directory used as the working directory, so the
//! summary document never lands in the source tree.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Result of running the CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// The deeplink line printed in the report, if any.
    pub fn deeplink(&self) -> Option<&str> {
        self.stdout.lines().find(|l| l.starts_with("cursor://"))
    }
}

pub struct TestEnv {
    pub work_dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            work_dir: TempDir::new().expect("Failed to create temp dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_cargodham-deploy")),
        }
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.work_dir.path().join(relative)
    }

    /// Run the guide feeding `answers` one per line on stdin.
    pub fn run_guide(&self, answers: &[&str]) -> TestResult {
        self.run_guide_with_args(answers, &[])
    }

    pub fn run_guide_with_args(&self, answers: &[&str], args: &[&str]) -> TestResult {
        self.run_from(self.work_dir.path(), answers, args)
    }

    pub fn run_from(&self, cwd: &Path, answers: &[&str], args: &[&str]) -> TestResult {
        let mut stdin = answers.join("\n");
        stdin.push('\n');

        let mut child = Command::new(&self.bin)
            .current_dir(cwd)
            .args(args)
            .env("NO_COLOR", "1")
            .env("TERM", "dumb")
            .env_remove("RUST_LOG")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to spawn cargodham-deploy");

        child
            .stdin
            .take()
            .expect("stdin is piped")
            .write_all(stdin.as_bytes())
            .expect("Failed to write answers");

        let output = child.wait_with_output().expect("Failed to wait for guide");
        output_to_result(output)
    }

    pub fn read_summary(&self) -> String {
        std::fs::read_to_string(self.path("RAILWAY_DEPLOYMENT_SUMMARY.md"))
            .unwrap_or_else(|e| panic!("Failed to read summary: {}", e))
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
