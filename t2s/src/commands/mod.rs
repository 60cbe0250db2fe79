mod check;
mod completions;
mod generate;
mod init;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use init::InitCommand;

use crate::logging::{self, LogFormat, LogLevel};

/// Extension trait for exiting on config errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for table2struct_config::Result<T> {
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
#[command(name = "t2s")]
#[command(version)]
#[command(about = "Generate Go structs from a MySQL schema")]
pub(crate) struct Cli {
    /// Maximum level of log output (written to stderr)
    #[arg(long, global = true, value_enum, default_value = "info")]
    log_level: LogLevel,

    /// Log line format
    #[arg(long, global = true, value_enum, default_value = "text")]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn run(&self) -> Result<()> {
        logging::init(self.log_level, self.log_format);

        match &self.command {
            Commands::Generate(cmd) => cmd.run().await,
            Commands::Check(cmd) => cmd.run(),
            Commands::Init(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Read the schema and generate Go structs
    Generate(GenerateCommand),

    /// Validate t2s.toml without connecting to the database
    Check(CheckCommand),

    /// Create a starter t2s.toml
    Init(InitCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate_flags() {
        let cli = Cli::try_parse_from([
            "t2s",
            "generate",
            "--dsn",
            "mysql://localhost/shop",
            "--table",
            "users",
            "--json",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(cli.log_level, LogLevel::Debug);
        assert!(matches!(cli.command, Commands::Generate(_)));
    }

    #[test]
    fn test_rejects_unknown_log_format() {
        assert!(Cli::try_parse_from(["t2s", "check", "--log-format", "xml"]).is_err());
    }
}
