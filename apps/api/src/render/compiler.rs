//! LaTeX → PDF via an external typesetter process.
//!
//! Every compile gets its own directory under `work_root` named by a fresh
//! UUID, so concurrent requests never share files. The directory is removed
//! by a background task after `cleanup_grace`, whatever the outcome.

use std::io;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tokio::process::Command;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::Config;

pub const SOURCE_FILE: &str = "resume.tex";
pub const OUTPUT_FILE: &str = "resume.pdf";
pub const LOG_FILE: &str = "resume.log";

/// Trailing lines of compiler output kept for the error response.
const DIAGNOSTIC_TAIL_LINES: usize = 40;

#[derive(Debug, Error)]
pub enum CompileError {
    #[error("I/O error in compile session: {0}")]
    Io(#[from] io::Error),

    #[error("could not start `{program}`: {reason}")]
    Launch { program: String, reason: String },

    #[error("compiler exceeded {:.1}s time budget", .budget.as_secs_f32())]
    Timeout { budget: Duration, diagnostics: String },

    #[error("compiler exited with {status}")]
    Failed { status: String, diagnostics: String },

    #[error("compiler finished but produced no PDF")]
    MissingOutput { diagnostics: String },
}

impl CompileError {
    /// Compiler output relevant to the failure, or `""` when there is none.
    pub fn diagnostics(&self) -> &str {
        match self {
            CompileError::Timeout { diagnostics, .. }
            | CompileError::Failed { diagnostics, .. }
            | CompileError::MissingOutput { diagnostics } => diagnostics,
            CompileError::Io(_) | CompileError::Launch { .. } => "",
        }
    }
}

/// Turns a complete LaTeX document into PDF bytes.
#[async_trait]
pub trait Typesetter: Send + Sync {
    async fn compile(&self, source: &str) -> Result<Vec<u8>, CompileError>;
}

/// Runs `pdflatex` (or a compatible program) as a subprocess.
#[derive(Debug, Clone)]
pub struct LatexCompiler {
    program: String,
    leading_args: Vec<String>,
    work_root: PathBuf,
    timeout: Duration,
    cleanup_grace: Duration,
}

impl LatexCompiler {
    pub fn new(program: impl Into<String>, work_root: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            leading_args: Vec::new(),
            work_root: work_root.into(),
            timeout: Duration::from_secs(30),
            cleanup_grace: Duration::from_secs(60),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.latex_compiler.clone(), config.work_dir.clone())
            .with_timeout(Duration::from_secs(config.compile_timeout_secs))
            .with_cleanup_grace(Duration::from_secs(config.cleanup_grace_secs))
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_cleanup_grace(mut self, grace: Duration) -> Self {
        self.cleanup_grace = grace;
        self
    }

    /// Arguments placed before the standard flags, e.g. a wrapper script path.
    #[cfg(test)]
    pub fn with_leading_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.leading_args = args.into_iter().map(Into::into).collect();
        self
    }

    async fn run_in(&self, dir: &Path, source: &str) -> Result<Vec<u8>, CompileError> {
        let tex_path = dir.join(SOURCE_FILE);
        tokio::fs::write(&tex_path, source).await?;

        let mut command = Command::new(&self.program);
        command
            .args(&self.leading_args)
            .arg("-interaction=nonstopmode")
            .arg("-halt-on-error")
            .arg(format!("-output-directory={}", dir.display()))
            .arg(&tex_path)
            .current_dir(dir)
            .stdin(Stdio::null())
            .kill_on_drop(true);

        debug!("Running {} in {}", self.program, dir.display());

        // Dropping the output future on timeout kills the child.
        let output = match tokio::time::timeout(self.timeout, command.output()).await {
            Ok(Ok(output)) => output,
            Ok(Err(e)) => {
                return Err(CompileError::Launch {
                    program: self.program.clone(),
                    reason: e.to_string(),
                })
            }
            Err(_) => {
                let log = tokio::fs::read_to_string(dir.join(LOG_FILE))
                    .await
                    .unwrap_or_default();
                return Err(CompileError::Timeout {
                    budget: self.timeout,
                    diagnostics: tail(&log, DIAGNOSTIC_TAIL_LINES),
                });
            }
        };

        let combined = format!(
            "{}{}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );

        if !output.status.success() {
            return Err(CompileError::Failed {
                status: output.status.to_string(),
                diagnostics: tail(&combined, DIAGNOSTIC_TAIL_LINES),
            });
        }

        match tokio::fs::read(dir.join(OUTPUT_FILE)).await {
            Ok(pdf) => Ok(pdf),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(CompileError::MissingOutput {
                diagnostics: tail(&combined, DIAGNOSTIC_TAIL_LINES),
            }),
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl Typesetter for LatexCompiler {
    async fn compile(&self, source: &str) -> Result<Vec<u8>, CompileError> {
        let session = Uuid::new_v4();
        let dir = self.work_root.join(session.to_string());
        tokio::fs::create_dir_all(&dir).await?;

        let result = self.run_in(&dir, source).await;
        schedule_cleanup(dir, self.cleanup_grace);

        match &result {
            Ok(pdf) => info!("Compiled session {session}: {} bytes", pdf.len()),
            Err(e) => warn!("Compile session {session} failed: {e}"),
        }
        result
    }
}

/// Removes `dir` after `grace` on a detached task.
pub fn schedule_cleanup(dir: PathBuf, grace: Duration) {
    tokio::spawn(async move {
        tokio::time::sleep(grace).await;
        match tokio::fs::remove_dir_all(&dir).await {
            Ok(()) => debug!("Removed compile dir {}", dir.display()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => warn!("Failed to remove compile dir {}: {e}", dir.display()),
        }
    });
}

fn tail(text: &str, max_lines: usize) -> String {
    let lines: Vec<&str> = text.lines().collect();
    let start = lines.len().saturating_sub(max_lines);
    lines[start..].join("\n")
}
