//! Integration test common infrastructure.
//!
//! Runs the chatfeed binary over a fixed set of input lines and collects
//! what it wrote to stdout.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use tempfile::TempDir;

/// Output of one chatfeed run.
#[allow(dead_code)]
pub struct FeedOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl FeedOutput {
    /// Parse stdout as JSON lines.
    #[allow(dead_code)]
    pub fn json_lines(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .map(|l| serde_json::from_str(l).expect("stdout line is JSON"))
            .collect()
    }
}

/// A chatfeed invocation with an optional config file.
pub struct TestFeed {
    config_path: Option<PathBuf>,
    _dir: Option<TempDir>,
}

impl TestFeed {
    /// Run with built-in defaults (no config argument).
    #[allow(dead_code)]
    pub fn with_defaults() -> Self {
        Self {
            config_path: None,
            _dir: None,
        }
    }

    /// Run with the given TOML written to a temporary config file.
    ///
    /// The drain interval is not forced; configs that care set it themselves.
    pub fn with_config(toml: &str) -> anyhow::Result<Self> {
        let dir = tempfile::tempdir()?;
        let config_path = dir.path().join("chatfeed.toml");
        std::fs::write(&config_path, toml)?;
        Ok(Self {
            config_path: Some(config_path),
            _dir: Some(dir),
        })
    }

    /// Feed `lines` on stdin, close it, and wait for the process to exit.
    pub fn run(&self, lines: &[&str]) -> anyhow::Result<FeedOutput> {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_chatfeed"));
        if let Some(path) = &self.config_path {
            cmd.arg(path);
        }
        let mut child = cmd
            .env("RUST_LOG", "warn")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        {
            let mut stdin = child
                .stdin
                .take()
                .ok_or_else(|| anyhow::anyhow!("stdin not captured"))?;
            for line in lines {
                stdin.write_all(line.as_bytes())?;
                stdin.write_all(b"\r\n")?;
            }
        }

        let output = child.wait_with_output()?;
        Ok(FeedOutput {
            success: output.status.success(),
            stdout: String::from_utf8(output.stdout)?,
            stderr: String::from_utf8(output.stderr)?,
        })
    }
}
