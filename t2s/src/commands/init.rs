use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use table2struct_config::{CONFIG_FILE_NAME, STARTER};
use table2struct_core::{File, WriteResult};
use tracing::info;

#[derive(Args)]
pub struct InitCommand {
    /// Where to write the config (defaults to ./t2s.toml)
    #[arg(short, long, default_value = CONFIG_FILE_NAME)]
    pub config: PathBuf,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let file = File::new(&self.config, STARTER).if_missing();
        let result = file
            .write()
            .wrap_err_with(|| format!("Failed to write {}", self.config.display()))?;

        match result {
            WriteResult::Written => {
                info!(path = %self.config.display(), "Created config");
                println!("Created {}", self.config.display());
                println!("Edit [database] and run `t2s generate`.");
            }
            WriteResult::Skipped => {
                eprintln!("error: {} already exists", self.config.display());
                std::process::exit(1);
            }
        }

        Ok(())
    }
}
