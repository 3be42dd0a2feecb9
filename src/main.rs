use clap::{CommandFactory, Parser};
use console::style;
use gitpal::app::App;
use gitpal::cli::{Cli, Command};
use gitpal::config::{Config, NoArgsBehavior};
use gitpal::error::AppResult;
use gitpal::{GitVersion, Repository};
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        process::exit(1);
    }
}

async fn run(cli: Cli) -> AppResult<()> {
    GitVersion::validate()?;

    let config = Config::load_or_default()?;
    let repo = Repository::discover()?;
    let app = App::new(config, repo);

    match cli.command {
        Some(Command::Stage) => app.stage(),
        Some(Command::ExportLog) => app.export_log().map(|_| ()),
        Some(Command::InitReadme) => app.init_readme().await,
        None => {
            let instruction = cli.instruction_text();
            if instruction.trim().is_empty() {
                run_without_arguments(&app).await
            } else {
                app.run_with_service(&instruction).await
            }
        }
    }
}

async fn run_without_arguments(app: &App) -> AppResult<()> {
    match app.config().behavior.no_args {
        NoArgsBehavior::Usage => {
            Cli::command().print_help()?;
            Ok(())
        }
        NoArgsBehavior::DefaultInstruction => {
            let instruction = app.config().behavior.default_instruction.clone();
            app.run_with_service(&instruction).await
        }
        NoArgsBehavior::InitReadme => app.init_readme().await,
    }
}
