use crate::error::GitResult;
use crate::git::repository::Repository;
use crate::llm::client::LlmClient;
use console::style;
use std::fs;

const README_NAME: &str = "README.md";

const PLACEHOLDER: &str = "\
# Project

This repository does not have a README yet. Replace this file with a
description of the project, how to build it, and how to contribute.
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapOutcome {
    AlreadyPresent,
    /// Written from a service-generated summary
    Generated,
    /// Written from the built-in placeholder
    Placeholder,
    /// Generation succeeded but the file could not be written
    WriteFailed,
}

/// Creates a README from the tracked file list when none exists.
pub struct ReadmeBootstrapper<'a> {
    repo: &'a Repository,
    client: &'a dyn LlmClient,
}

impl<'a> ReadmeBootstrapper<'a> {
    pub fn new(repo: &'a Repository, client: &'a dyn LlmClient) -> Self {
        Self { repo, client }
    }

    pub async fn bootstrap(&self) -> GitResult<BootstrapOutcome> {
        let readme_path = self.repo.path().join(README_NAME);

        if readme_path.exists() {
            println!(
                "{}",
                style("README.md already present; nothing to do.").green()
            );
            return Ok(BootstrapOutcome::AlreadyPresent);
        }

        let files = self.repo.tracked_files()?;
        let prompt = format!(
            "Write a short README in Markdown for a repository containing these files:\n{}",
            files.join("\n")
        );

        let (body, outcome) = match self.client.complete(&prompt).await {
            Ok(text) if !text.trim().is_empty() => (text, BootstrapOutcome::Generated),
            Ok(_) => (PLACEHOLDER.to_string(), BootstrapOutcome::Placeholder),
            Err(e) => {
                eprintln!(
                    "{} {}; falling back to a placeholder",
                    style("Generation unavailable:").yellow().bold(),
                    e
                );
                (PLACEHOLDER.to_string(), BootstrapOutcome::Placeholder)
            }
        };

        // A failed write is reported, not escalated
        match fs::write(&readme_path, body) {
            Ok(()) => {
                println!("{} {}", style("Wrote").green().bold(), readme_path.display());
                Ok(outcome)
            }
            Err(e) => {
                eprintln!(
                    "{} {}: {}",
                    style("Failed to write").red().bold(),
                    readme_path.display(),
                    e
                );
                Ok(BootstrapOutcome::WriteFailed)
            }
        }
    }
}
