//! # Append-Only Journal
//!
//! One file, one JSON object per line. Each append is a single write of one
//! newline-terminated record, so concurrent requests may interleave at the
//! line level but never corrupt earlier lines. No index, no rotation, no
//! compaction.
//!
//! ## Degraded Storage
//!
//! Losing an audit entry is acceptable; blocking the client flow is not.
//! Any directory-create, open, or write failure downgrades the append to a
//! console record: the entry is emitted through the tracing diagnostic
//! channel and the caller still reports success (flagged `loggedToConsole`).
//! Ephemeral runtimes without a writable working directory should point
//! `CSEL_LOG_DIR` at a temp location (see [`Journal::in_temp_dir`]).

use std::path::{Path, PathBuf};

use tokio::io::AsyncWriteExt;

use csel_core::LogEntry;

/// Directory the journal lives under when `CSEL_LOG_DIR` is unset.
pub const DEFAULT_LOG_DIR: &str = "logs";

/// The journal file name.
pub const LOG_FILE_NAME: &str = "events.log";

/// How an append was recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendOutcome {
    /// The entry was appended to the journal file.
    Persisted,
    /// Storage was unwritable; the entry went to the diagnostic channel.
    Console,
}

/// The append-only journal writer.
#[derive(Debug, Clone)]
pub struct Journal {
    path: PathBuf,
}

impl Journal {
    /// Create a journal writing to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Resolve the journal location from the environment.
    ///
    /// `CSEL_LOG_DIR` overrides the directory; the default is `logs/` under
    /// the working directory.
    pub fn from_env() -> Self {
        let dir = std::env::var("CSEL_LOG_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_LOG_DIR));
        Self::new(dir.join(LOG_FILE_NAME))
    }

    /// A journal under the system temp directory, for ephemeral runtimes.
    pub fn in_temp_dir() -> Self {
        Self::new(std::env::temp_dir().join("csel-logs").join(LOG_FILE_NAME))
    }

    /// The journal file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one stamped entry.
    ///
    /// Serialization failure is the only hard error; storage failures
    /// degrade to [`AppendOutcome::Console`].
    pub async fn append(&self, entry: &LogEntry) -> Result<AppendOutcome, serde_json::Error> {
        let line = entry.to_json_line()?;
        match self.write_line(&line).await {
            Ok(()) => Ok(AppendOutcome::Persisted),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    path = %self.path.display(),
                    "journal unwritable; recording entry on the diagnostic channel"
                );
                tracing::info!(entry = %line.trim_end(), "audit entry (console fallback)");
                Ok(AppendOutcome::Console)
            }
        }
    }

    /// Create the containing directory if absent and append the line in a
    /// single write.
    async fn write_line(&self, line: &str) -> std::io::Result<()> {
        if let Some(dir) = self.path.parent() {
            tokio::fs::create_dir_all(dir).await?;
        }
        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }
}
