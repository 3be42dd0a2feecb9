use chrono::Utc;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

const MAX_LOG_SIZE: u64 = 10 * 1024 * 1024; // 10MB

/// Append-only record of what the tool ran and what it refused to run.
pub struct HistoryLog {
    log_path: PathBuf,
}

impl HistoryLog {
    /// Open the default history log under the config directory
    pub fn open_default() -> std::io::Result<Self> {
        let home = std::env::var("HOME").map_err(|_| {
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "HOME environment variable not set",
            )
        })?;

        let log_path = PathBuf::from(home)
            .join(".config")
            .join("gitpal")
            .join("history.log");

        Self::open(log_path)
    }

    pub fn open<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let log_path = path.as_ref().to_path_buf();

        if let Some(parent) = log_path.parent() {
            fs::create_dir_all(parent)?;
        }

        Ok(Self { log_path })
    }

    /// Record an executed command and its exit code
    pub fn record_execution(&self, command: &str, exit_code: i32) -> std::io::Result<()> {
        self.append(&format!("[exit:{}] {}", exit_code, command))
    }

    /// Record a command that was stopped before execution, with the reason
    pub fn record_rejection(&self, command: &str, reason: &str) -> std::io::Result<()> {
        self.append(&format!("[rejected: {}] {}", reason, command))
    }

    fn append(&self, entry: &str) -> std::io::Result<()> {
        self.rotate_if_needed()?;

        let timestamp = Utc::now().to_rfc3339();
        let user = std::env::var("USER").unwrap_or_else(|_| "unknown".to_string());
        let line = format!("[{}] [{}] {}\n", timestamp, user, entry);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)?;

        file.write_all(line.as_bytes())?;
        file.flush()
    }

    fn rotate_if_needed(&self) -> std::io::Result<()> {
        if !self.log_path.exists() {
            return Ok(());
        }

        if fs::metadata(&self.log_path)?.len() > MAX_LOG_SIZE {
            let backup_path = self.log_path.with_extension("log.1");
            fs::rename(&self.log_path, backup_path)?;
        }

        Ok(())
    }

    pub fn log_path(&self) -> &Path {
        &self.log_path
    }
}
