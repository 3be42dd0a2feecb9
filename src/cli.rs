use clap::{Parser, Subcommand};

/// Natural-language git assistant: describe what you want, review the
/// suggested git command, run it.
#[derive(Debug, Parser)]
#[command(name = "gitpal", version, about, args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Free-text instruction to translate into a git command
    #[arg(trailing_var_arg = true)]
    pub instruction: Vec<String>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List changed files and stage a selection interactively
    Stage,
    /// Export the full commit graph to a JSON log file
    ExportLog,
    /// Generate a README when the repository has none
    InitReadme,
}

impl Cli {
    /// All positional arguments joined into one instruction string
    pub fn instruction_text(&self) -> String {
        self.instruction.join(" ")
    }
}
