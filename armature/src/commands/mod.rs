mod completions;
mod generate;
mod init;
mod serve;

use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use init::InitCommand;
use serve::ServeCommand;

/// Extension trait for exiting on definition errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for armature_definition::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "arma")]
#[command(version)]
#[command(about = "Generate authenticated API scaffolding from a YAML definition")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Init(cmd) => cmd.run(),
            Commands::Generate(cmd) => cmd.run(),
            Commands::Serve(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new API project with a starter definition
    Init(InitCommand),

    /// Generate controller scaffolding from the API definition
    Generate(GenerateCommand),

    /// Run a mock server for API testing (not implemented)
    Serve(ServeCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
