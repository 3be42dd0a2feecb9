use crate::error::{GitError, GitResult};
use crate::git::executor::GitExecutor;
use crate::git::parser::{self, StatusEntry};
use std::env;
use std::path::{Path, PathBuf};

/// A git repository and the queries the tool runs against it
#[derive(Debug)]
pub struct Repository {
    path: PathBuf,
    executor: GitExecutor,
}

impl Repository {
    /// Detect git repository from current working directory
    pub fn discover() -> GitResult<Self> {
        let current_dir = env::current_dir().map_err(GitError::IoError)?;
        Self::discover_from(&current_dir)
    }

    /// Detect git repository starting from a specific directory
    pub fn discover_from<P: AsRef<Path>>(start_path: P) -> GitResult<Self> {
        let mut current = start_path.as_ref().to_path_buf();

        loop {
            if current.join(".git").exists() {
                return Ok(Self::new(current));
            }

            if !current.pop() {
                return Err(GitError::NotARepository);
            }
        }
    }

    /// Create a Repository for a known git directory
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let executor = GitExecutor::new(&path);

        Self { path, executor }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn executor(&self) -> &GitExecutor {
        &self.executor
    }

    /// Short-form status entries for the selective stager
    pub fn short_status(&self) -> GitResult<Vec<StatusEntry>> {
        let output = self.executor.capture(&["status", "--short"])?;
        parser::parse_short_status(&output.stdout)
    }

    /// Paths of all tracked files
    pub fn tracked_files(&self) -> GitResult<Vec<String>> {
        let output = self.executor.capture(&["ls-files"])?;
        Ok(output
            .stdout
            .lines()
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    /// Stage a single path
    pub fn stage_path(&self, path: &str) -> GitResult<()> {
        self.executor.capture(&["add", path])?;
        Ok(())
    }
}
