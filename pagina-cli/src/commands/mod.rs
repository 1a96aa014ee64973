//! CLI command implementations

use clap::Subcommand;

pub mod generate_config;
pub mod paginate;
pub mod segment;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split records into bounded, addressable fragments
    Paginate(paginate::PaginateArgs),

    /// Print the raw segments of a text file with their byte spans
    Segment(segment::SegmentArgs),

    /// Write a commented configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Check a configuration file
    Validate(validate::ValidateArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,
}

impl ListCommands {
    /// Execute the list command
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            ListCommands::Formats => {
                println!("Available output formats:");
                for (name, description) in crate::output::OutputFormat::describe_all() {
                    println!("  {name:<10} {description}");
                }
            }
        }
        Ok(())
    }
}

impl Commands {
    /// Dispatch to the selected command
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Paginate(args) => args.execute(),
            Commands::Segment(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
        }
    }
}
