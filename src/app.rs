use crate::audit::HistoryLog;
use crate::config::Config;
use crate::config::settings::ConfigError;
use crate::error::{AppResult, GitError};
use crate::export::{CommitRecord, LogExporter};
use crate::git::Repository;
use crate::llm::client::LlmClient;
use crate::llm::{GeminiClient, Translator};
use crate::readme::ReadmeBootstrapper;
use crate::security::{CommandPolicy, SubstringDenylist};
use crate::stage;
use crate::ui::prompt;
use console::style;
use std::time::Duration;

/// Wires the configured pieces together and drives each flow to
/// completion. One `App` per process invocation; nothing is shared across
/// runs.
pub struct App {
    config: Config,
    repo: Repository,
}

impl App {
    pub fn new(config: Config, repo: Repository) -> Self {
        Self { config, repo }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn repo(&self) -> &Repository {
        &self.repo
    }

    /// Translate an instruction with the configured generation service and
    /// run the result
    pub async fn run_with_service(&self, instruction: &str) -> AppResult<()> {
        let client = self.service_client()?;
        let translator = Translator::new(Box::new(client));
        self.run_instruction(&translator, instruction).await
    }

    /// Translate an instruction with the given translator and run the
    /// result
    pub async fn run_instruction(
        &self,
        translator: &Translator,
        instruction: &str,
    ) -> AppResult<()> {
        let Some(command) = translator.suggest(instruction).await else {
            println!(
                "{}",
                style("No usable command came back; nothing to run.").yellow()
            );
            return Ok(());
        };

        self.execute_suggested(&command)
    }

    /// Validate, confirm, and execute a suggested command. Rejection and a
    /// declined confirmation are reported outcomes; a failing subprocess
    /// is fatal.
    fn execute_suggested(&self, command: &str) -> AppResult<()> {
        let policy = SubstringDenylist::new(&self.config.security.denied_substrings);
        let history = self.history();

        if let Err(reason) = policy.check(command) {
            eprintln!("{} {}", style("Refusing to run:").red().bold(), reason);
            if let Some(log) = &history {
                let _ = log.record_rejection(command, &reason.to_string());
            }
            return Ok(());
        }

        if self.config.behavior.require_confirmation && !prompt::confirm_execution(command)? {
            println!("{}", style("Aborted; command not run.").yellow());
            if let Some(log) = &history {
                let _ = log.record_rejection(command, "declined at confirmation");
            }
            return Ok(());
        }

        let status = self.repo.executor().run_shell(command)?;
        let exit_code = status.code().unwrap_or(-1);

        if let Some(log) = &history {
            let _ = log.record_execution(command, exit_code);
        }

        if !status.success() {
            return Err(GitError::CommandFailed(format!(
                "'{}' exited with code {}",
                command, exit_code
            ))
            .into());
        }

        println!("{}", style("Command executed successfully.").green());
        Ok(())
    }

    /// Interactive selective staging
    pub fn stage(&self) -> AppResult<()> {
        stage::run_interactive(&self.repo)?;
        Ok(())
    }

    /// Export the commit graph to the configured log file
    pub fn export_log(&self) -> AppResult<Vec<CommitRecord>> {
        let exporter = LogExporter::new(
            &self.repo,
            &self.config.export.default_branch,
            &self.config.export.log_file,
        );

        let records = exporter.export()?;
        println!(
            "{} {} commit(s) to {}",
            style("Exported").green().bold(),
            records.len(),
            self.config.export.log_file
        );

        Ok(records)
    }

    /// Bootstrap a README with the configured generation service
    pub async fn init_readme(&self) -> AppResult<()> {
        let client = self.service_client()?;
        self.init_readme_with(&client).await
    }

    pub async fn init_readme_with(&self, client: &dyn LlmClient) -> AppResult<()> {
        ReadmeBootstrapper::new(&self.repo, client)
            .bootstrap()
            .await?;
        Ok(())
    }

    fn service_client(&self) -> Result<GeminiClient, ConfigError> {
        let api_key = self.config.require_api_key()?;

        Ok(GeminiClient::new(
            self.config.llm.endpoint.clone(),
            api_key,
            Duration::from_secs(self.config.llm.timeout_seconds),
        ))
    }

    fn history(&self) -> Option<HistoryLog> {
        if !self.config.behavior.log_commands {
            return None;
        }

        match HistoryLog::open_default() {
            Ok(log) => Some(log),
            Err(e) => {
                eprintln!(
                    "{} {}",
                    style("History log unavailable:").yellow().bold(),
                    e
                );
                None
            }
        }
    }
}
