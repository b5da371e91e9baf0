//! Boundary collaborators: where pasted text comes from and where the result goes.
//!
//! Both are single-shot and synchronous. The core never touches them; only
//! the CLI commands do.
use anyhow::{Context, Result};
use std::fs;
use std::io::{self, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};

/// Label shown when waiting for pasted text on an interactive terminal.
pub const PROMPT_LABEL: &str = "Paste the original sequence text here (end with Ctrl-D):";

/// Supplies one block of raw text.
pub trait InputProvider {
    fn prompt(&mut self, label: &str) -> Result<String>;
}

/// Accepts the final formatted text.
pub trait ResultPresenter {
    fn show(&mut self, text: &str) -> Result<()>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// `None` and `-` both mean stdin.
    pub fn from_arg(path: Option<&Path>) -> Self {
        match path {
            Some(path) if path != Path::new("-") => Self::File(path.to_path_buf()),
            _ => Self::Stdin,
        }
    }
}

impl InputProvider for InputSource {
    fn prompt(&mut self, label: &str) -> Result<String> {
        match self {
            Self::Stdin => {
                let stdin = io::stdin();
                if stdin.is_terminal() {
                    eprintln!("{label}");
                }
                let mut text = String::new();
                stdin
                    .lock()
                    .read_to_string(&mut text)
                    .context("read input from stdin")?;
                Ok(text)
            }
            Self::File(path) => fs::read_to_string(path.as_path())
                .with_context(|| format!("read input {}", path.display())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    pub fn from_arg(path: Option<&Path>) -> Self {
        match path {
            Some(path) if path != Path::new("-") => Self::File(path.to_path_buf()),
            _ => Self::Stdout,
        }
    }
}

impl ResultPresenter for OutputTarget {
    fn show(&mut self, text: &str) -> Result<()> {
        match self {
            Self::Stdout => {
                let mut stdout = io::stdout().lock();
                writeln!(stdout, "{text}").context("write result to stdout")?;
                stdout.flush().context("flush stdout")?;
                Ok(())
            }
            Self::File(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    fs::create_dir_all(parent)
                        .with_context(|| format!("create {}", parent.display()))?;
                }
                fs::write(path.as_path(), format!("{text}\n"))
                    .with_context(|| format!("write {}", path.display()))
            }
        }
    }
}
