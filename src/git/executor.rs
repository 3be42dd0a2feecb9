use crate::error::{GitError, GitResult};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Output};

/// Captured output of an introspection command
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
    pub success: bool,
}

/// Runs commands within a repository.
///
/// Two paths: `capture` invokes `git` directly with an argument list and
/// collects its output, for the tool's own queries; `run_shell` hands a
/// full, already-validated command string to the shell with inherited
/// stdio, for commands the user asked for.
#[derive(Debug)]
pub struct GitExecutor {
    repo_path: PathBuf,
}

impl GitExecutor {
    pub fn new<P: AsRef<Path>>(repo_path: P) -> Self {
        Self {
            repo_path: repo_path.as_ref().to_path_buf(),
        }
    }

    /// Run `git` with the given arguments and capture its output.
    ///
    /// Example: executor.capture(&["status", "--short"])
    pub fn capture(&self, args: &[&str]) -> GitResult<CommandOutput> {
        if args.is_empty() {
            return Err(GitError::CommandFailed("Empty command".to_string()));
        }

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.repo_path)
            .output()
            .map_err(|e| GitError::CommandFailed(format!("Failed to execute git: {}", e)))?;

        self.process_output(output, &args.join(" "))
    }

    /// Run a full command string through the shell with inherited stdio.
    ///
    /// Returns the subprocess exit status; spawning failures are the only
    /// error here. The caller decides whether a non-zero exit is fatal.
    pub fn run_shell(&self, command: &str) -> GitResult<ExitStatus> {
        if command.trim().is_empty() {
            return Err(GitError::CommandFailed("Empty command".to_string()));
        }

        Command::new("sh")
            .arg("-c")
            .arg(command)
            .current_dir(&self.repo_path)
            .status()
            .map_err(|e| GitError::CommandFailed(format!("Failed to spawn shell: {}", e)))
    }

    fn process_output(&self, output: Output, command: &str) -> GitResult<CommandOutput> {
        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        let exit_code = output.status.code().unwrap_or(-1);
        let success = output.status.success();

        if !success {
            return Err(GitError::CommandFailed(format!(
                "Command 'git {}' failed with exit code {}: {}",
                command,
                exit_code,
                stderr.trim()
            )));
        }

        Ok(CommandOutput {
            stdout,
            stderr,
            exit_code,
            success,
        })
    }

    pub fn repo_path(&self) -> &Path {
        &self.repo_path
    }
}
