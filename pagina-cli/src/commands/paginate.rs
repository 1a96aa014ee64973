//! Paginate command implementation

use crate::config::CliConfig;
use crate::input::{resolve_patterns, LocatorSource, RecordLoader};
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormat, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use pagina_core::{
    Fragment, InvalidLocatorPolicy, PaginationConfig, PaginationSummary, Paginator, SourceRecord,
};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the paginate command
#[derive(Debug, Args)]
pub struct PaginateArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Maximum characters per fragment
    #[arg(short, long, value_name = "CHARS", allow_negative_numbers = true)]
    pub max_length: Option<i64>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Treat plain text inputs as a response to this query
    #[arg(long, value_name = "QUERY", conflicts_with = "base_url")]
    pub query: Option<String>,

    /// Locate plain text inputs under this base URL, one record per file
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Drop records with malformed identifiers instead of failing
    #[arg(long)]
    pub skip_invalid: bool,

    /// Include each document's full body in the output
    #[arg(long)]
    pub full_body: bool,

    /// Force parallel pagination
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads (default: auto)
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Settings after merging the config file with command-line flags
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSettings {
    /// Validated pagination configuration
    pub pagination: PaginationConfig,
    /// Output format
    pub format: OutputFormat,
    /// Pretty print JSON
    pub pretty_json: bool,
    /// Emit full bodies
    pub include_full_body: bool,
    /// Paginate in parallel
    pub parallel: bool,
    /// Worker threads, 0 for rayon's default
    pub worker_threads: usize,
}

impl PaginateArgs {
    /// Execute the paginate command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting pagination");
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load(self.config.as_deref())?;
        let settings = self.resolve(config)?;
        log::debug!("Settings: {:?}", settings);

        let records = self.load_records()?;
        let (fragments, summary) = self.run(&settings, &records)?;

        log::info!(
            "Paginated {} records into {} fragments ({} multi-part, {} blank, {} failed)",
            summary.records,
            summary.fragments,
            summary.multi_part,
            summary.blank,
            summary.failed
        );

        let writer = self.open_writer()?;
        let mut formatter = Self::create_formatter(&settings, writer);
        for fragment in &fragments {
            formatter.format_fragment(fragment)?;
        }
        formatter.finish()?;

        Ok(())
    }

    /// Merge config file values with command-line overrides
    pub fn resolve(&self, config: CliConfig) -> Result<ResolvedSettings> {
        let mut section = config.pagination;
        if let Some(length) = self.max_length {
            section.max_fragment_length = Some(length);
        }
        if self.skip_invalid {
            section.on_invalid_locator = InvalidLocatorPolicy::Skip;
        }
        let pagination = section
            .into_config()
            .context("Invalid pagination settings")?;

        Ok(ResolvedSettings {
            pagination,
            format: self.format.unwrap_or(config.output.default_format),
            pretty_json: config.output.pretty_json,
            include_full_body: self.full_body || config.output.include_full_body,
            parallel: self.parallel || config.performance.parallel,
            worker_threads: self.threads.unwrap_or(config.performance.worker_threads),
        })
    }

    fn locator_source(&self) -> LocatorSource {
        match (&self.query, &self.base_url) {
            (Some(query), _) => LocatorSource::Query(query.clone()),
            (None, Some(base)) => LocatorSource::BaseUrl(base.clone()),
            (None, None) => LocatorSource::None,
        }
    }

    fn load_records(&self) -> Result<Vec<SourceRecord>> {
        let files = resolve_patterns(&self.input)?;
        log::info!("Found {} files to load", files.len());

        let loader = RecordLoader::new(self.locator_source());
        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let mut records = Vec::new();
        for file in &files {
            let loaded = loader.load(file)?;
            log::debug!("{}: {} records", file.display(), loaded.len());
            records.extend(loaded);

            let name = file.file_name().and_then(|n| n.to_str()).unwrap_or("?");
            progress.file_completed(name);
        }
        progress.finish();

        Ok(records)
    }

    fn run(
        &self,
        settings: &ResolvedSettings,
        records: &[SourceRecord],
    ) -> Result<(Vec<Fragment>, PaginationSummary)> {
        let paginator = Paginator::new(settings.pagination).with_parallel(settings.parallel);

        if settings.parallel && settings.worker_threads > 0 {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(settings.worker_threads)
                .build()
                .context("Failed to build worker pool")?;
            return pool
                .install(|| paginator.paginate_with_summary(records))
                .context("Pagination failed");
        }

        paginator
            .paginate_with_summary(records)
            .context("Pagination failed")
    }

    fn open_writer(&self) -> Result<Box<dyn Write + Send + Sync>> {
        match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Ok(Box::new(BufWriter::new(file)))
            }
            None => Ok(Box::new(io::stdout())),
        }
    }

    fn create_formatter(
        settings: &ResolvedSettings,
        writer: Box<dyn Write + Send + Sync>,
    ) -> Box<dyn OutputFormatter> {
        match settings.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(
                JsonFormatter::new(writer)
                    .pretty(settings.pretty_json)
                    .include_full_body(settings.include_full_body),
            ),
            OutputFormat::Markdown => Box::new(
                MarkdownFormatter::new(writer).include_full_body(settings.include_full_body),
            ),
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        // Already initialized when executed more than once in a process
        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(log_level),
        )
        .try_init();
    }
}
