//! Shared test infrastructure for integration tests.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Captured result of one `relist` invocation.
#[derive(Debug)]
pub struct RunOutput {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl RunOutput {
    /// Panic with both streams if the run did not exit cleanly.
    pub fn assert_success(&self) {
        assert_eq!(
            self.code,
            Some(0),
            "relist failed: stdout={} stderr={}",
            self.stdout,
            self.stderr
        );
    }
}

/// Path to a file under tests/fixtures/.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// Run the built binary with `args`, feeding `stdin` (possibly empty).
pub fn run_relist(args: &[&str], stdin: &str) -> RunOutput {
    let mut child = Command::new(env!("CARGO_BIN_EXE_relist"))
        .args(args)
        .env_remove("RELIST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn relist");

    // Dropping the handle closes stdin so the binary sees EOF.
    if let Some(mut pipe) = child.stdin.take() {
        pipe.write_all(stdin.as_bytes()).expect("write stdin");
    }

    let output = child.wait_with_output().expect("wait for relist");
    RunOutput {
        code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
