//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use pagina_core::DEFAULT_MAX_FRAGMENT_LENGTH;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        let template = Self::generate_template();

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the configuration file to suit your documents");
        println!("2. Validate your configuration:");
        println!("   pagina validate -c {}", self.output.display());
        println!("3. Use it for pagination:");
        println!(
            "   pagina paginate -i records.json -c {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template() -> String {
        format!(
            r#"# pagina configuration

[pagination]
# Maximum characters per fragment; must be positive
max_fragment_length = {DEFAULT_MAX_FRAGMENT_LENGTH}

# Records whose identifier is not a usable URL: "fail" or "skip"
on_invalid_locator = "fail"

[output]
# "text", "json" or "markdown"
default_format = "text"

# Indent JSON output
pretty_json = true

# Emit each document's full body alongside its fragments
include_full_body = false

[performance]
# Paginate records on a thread pool
parallel = true

# Worker threads for parallel pagination (0 = one per core)
worker_threads = 0
"#
        )
    }
}
