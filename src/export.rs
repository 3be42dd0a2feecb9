use crate::error::GitError;
use crate::git::parser::extract_branch_names;
use crate::git::repository::Repository;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Per-commit format string handed to `git log`. Each emitted line is a
/// self-contained JSON object; `%d` carries the decoration suffix.
const LOG_FORMAT: &str =
    "--pretty=format:{\"hash\":\"%h\",\"parent\":\"%p\",\"message\":\"%s\",\"branch\":\"%d\"}";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to decode log line '{line}': {source}")]
    DecodeError {
        line: String,
        source: serde_json::Error,
    },

    #[error("Failed to serialize commit records: {0}")]
    SerializeError(serde_json::Error),

    #[error("Failed to write {path}: {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Git(#[from] GitError),
}

/// One commit of the exported history. `branches` is derived from the raw
/// decoration and filled in before the record is written; records are
/// never mutated afterward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitRecord {
    pub hash: String,
    pub parent: String,
    pub message: String,
    pub branch: String,
    #[serde(default)]
    pub branches: Vec<String>,
}

/// Serializes the full commit graph of a repository into a JSON file.
pub struct LogExporter<'a> {
    repo: &'a Repository,
    default_branch: String,
    output: PathBuf,
}

impl<'a> LogExporter<'a> {
    pub fn new<P: AsRef<Path>>(repo: &'a Repository, default_branch: &str, output: P) -> Self {
        Self {
            repo,
            default_branch: default_branch.to_string(),
            output: output.as_ref().to_path_buf(),
        }
    }

    /// Query all refs and write the ordered record sequence to the output
    /// file. A line that fails to decode means the format string and the
    /// decoder disagree; that propagates instead of being skipped.
    pub fn export(&self) -> Result<Vec<CommitRecord>, ExportError> {
        let output = self
            .repo
            .executor()
            .capture(&["log", "--all", "--decorate=short", LOG_FORMAT])?;

        let mut records = Vec::new();
        for line in output.stdout.lines() {
            if line.trim().is_empty() {
                continue;
            }
            records.push(self.decode_line(line)?);
        }

        let json =
            serde_json::to_string_pretty(&records).map_err(ExportError::SerializeError)?;
        fs::write(&self.output, json).map_err(|source| ExportError::WriteError {
            path: self.output.clone(),
            source,
        })?;

        Ok(records)
    }

    fn decode_line(&self, line: &str) -> Result<CommitRecord, ExportError> {
        let mut record: CommitRecord =
            serde_json::from_str(line).map_err(|source| ExportError::DecodeError {
                line: line.to_string(),
                source,
            })?;

        record.branches = extract_branch_names(&record.branch, &self.default_branch);
        Ok(record)
    }

    pub fn output_path(&self) -> &Path {
        &self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::process::Command;
    use tempfile::TempDir;

    fn create_repo_with_commit() -> (TempDir, Repository) {
        let temp_dir = TempDir::new().unwrap();
        let repo_path = temp_dir.path().to_path_buf();

        for args in [
            vec!["init", "-b", "main"],
            vec!["config", "user.name", "Test User"],
            vec!["config", "user.email", "test@example.com"],
        ] {
            Command::new("git")
                .args(&args)
                .current_dir(&repo_path)
                .output()
                .unwrap();
        }

        fs::write(repo_path.join("a.txt"), "a").unwrap();
        Command::new("git")
            .args(["add", "a.txt"])
            .current_dir(&repo_path)
            .output()
            .unwrap();
        Command::new("git")
            .args(["commit", "-m", "initial"])
            .current_dir(&repo_path)
            .output()
            .unwrap();

        (temp_dir, Repository::new(repo_path))
    }

    #[test]
    fn test_decode_line_derives_branches() {
        let (_temp, repo) = create_repo_with_commit();
        let exporter = LogExporter::new(&repo, "main", "unused.json");

        let record = exporter
            .decode_line(
                r#"{"hash":"abc1234","parent":"def5678","message":"fix","branch":" (HEAD -> main, origin/main)"}"#,
            )
            .unwrap();

        assert_eq!(record.hash, "abc1234");
        assert_eq!(record.parent, "def5678");
        assert_eq!(record.branches, vec!["main", "main"]);
    }

    #[test]
    fn test_decode_line_without_decoration() {
        let (_temp, repo) = create_repo_with_commit();
        let exporter = LogExporter::new(&repo, "main", "unused.json");

        let record = exporter
            .decode_line(r#"{"hash":"abc1234","parent":"","message":"fix","branch":""}"#)
            .unwrap();

        assert_eq!(record.branches, vec!["main"]);
    }

    #[test]
    fn test_decode_line_rejects_malformed_json() {
        let (_temp, repo) = create_repo_with_commit();
        let exporter = LogExporter::new(&repo, "main", "unused.json");

        let result = exporter.decode_line(r#"{"hash": not json}"#);
        assert!(matches!(result, Err(ExportError::DecodeError { .. })));
    }

    #[test]
    fn test_export_writes_file() {
        let (temp, repo) = create_repo_with_commit();
        let out = temp.path().join("git_log.json");
        let exporter = LogExporter::new(&repo, "main", &out);

        let records = exporter.export().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].message, "initial");
        assert!(records[0].branches.contains(&"main".to_string()));

        let written = fs::read_to_string(&out).unwrap();
        let parsed: Vec<CommitRecord> = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].hash, records[0].hash);
    }
}
