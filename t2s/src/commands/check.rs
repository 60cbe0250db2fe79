use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use table2struct_config::{CONFIG_FILE_NAME, ConfigFile};

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to t2s.toml (defaults to ./t2s.toml)
    #[arg(short, long, default_value = CONFIG_FILE_NAME)]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let file = ConfigFile::open(&self.config).unwrap_or_exit();
        let report = ops::check(file.config(), file.path());
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
