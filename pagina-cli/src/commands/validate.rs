//! Validate command implementation

use crate::config::CliConfig;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        let checked = CliConfig::from_file(&self.config).and_then(|config| {
            let output = config.output;
            let pagination = config.pagination.into_config()?;
            Ok((pagination, output))
        });

        match checked {
            Ok((pagination, output)) => {
                println!("✓ Configuration is valid!");
                println!(
                    "  Max fragment length: {}",
                    pagination.max_fragment_length()
                );
                println!(
                    "  Invalid locators: {:?}",
                    pagination.on_invalid_locator()
                );
                println!("  Default format: {:?}", output.default_format);
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e:#}");
                Err(anyhow::anyhow!("Validation failed: {:#}", e))
            }
        }
    }
}
