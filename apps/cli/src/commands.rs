//! CLI command definitions, routing, and tracing setup.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use aortascreen_classifier::{BUILTIN_PHRASES, PatternSet, TitleClassifier};
use aortascreen_core::{ProgressReporter, RunConfig, RunSummary};
use aortascreen_shared::{AppConfig, init_config, load_config};

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// aortascreen — keyword triage for research-title spreadsheets.
#[derive(Parser)]
#[command(
    name = "aortascreen",
    version,
    about = "Tag research-article titles as 'Aortic Disease' or 'Other' using a curated keyword lexicon.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Classify every row of a title spreadsheet export.
    Classify {
        /// Input CSV/TSV file (a spreadsheet export with a title column).
        input: PathBuf,

        /// Output file (defaults to '<input stem>_categorized.<ext>' next to the input).
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Header name of the title column (default from config, then "Title").
        #[arg(short, long)]
        column: Option<String>,

        /// Header name of the appended label column.
        #[arg(long)]
        label_column: Option<String>,

        /// Field delimiter: auto, comma, tab, semicolon, or pipe.
        #[arg(long)]
        delimiter: Option<String>,

        /// Number of labeled rows to preview (0 disables the preview).
        #[arg(long)]
        preview: Option<usize>,
    },

    /// Print the effective ordered pattern list.
    Patterns,

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    // One directive per workspace crate; targets are module paths.
    let filter = [
        "aortascreen_cli",
        "aortascreen_core",
        "aortascreen_classifier",
        "aortascreen_tabular",
        "aortascreen_shared",
    ]
    .map(|krate| format!("{krate}={level}"))
    .join(",");

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Classify {
            input,
            out,
            column,
            label_column,
            delimiter,
            preview,
        } => cmd_classify(input, out, column, label_column, delimiter, preview),
        Command::Patterns => cmd_patterns(),
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init(),
            ConfigAction::Show => cmd_config_show(),
        },
    }
}

// ---------------------------------------------------------------------------
// classify
// ---------------------------------------------------------------------------

fn cmd_classify(
    input: PathBuf,
    out: Option<PathBuf>,
    column: Option<String>,
    label_column: Option<String>,
    delimiter: Option<String>,
    preview: Option<usize>,
) -> Result<()> {
    let config = load_config()?;

    // CLI flags override config file values, which override defaults
    let title_column = column.unwrap_or_else(|| config.defaults.title_column.clone());
    let label_column = label_column.unwrap_or_else(|| config.defaults.label_column.clone());
    let preview_rows = preview.unwrap_or(config.defaults.preview_rows);
    let delimiter_name = delimiter.unwrap_or_else(|| config.defaults.delimiter.clone());
    let delimiter = aortascreen_tabular::parse_delimiter(&delimiter_name)?;

    let output = out.unwrap_or_else(|| default_output_path(&input));

    let patterns = PatternSet::with_extras(&config.patterns.extra)?;
    let classifier = TitleClassifier::new(patterns);

    info!(
        input = %input.display(),
        column = %title_column,
        patterns = classifier.pattern_set().len(),
        "classifying titles"
    );

    let run_config = RunConfig {
        input,
        output,
        title_column,
        label_column,
        delimiter,
        preview_rows,
    };

    let reporter = CliProgress::new();
    let summary = aortascreen_core::run(&run_config, &classifier, &reporter)?;

    // Print summary
    println!();
    println!("  Classification complete!");
    println!("  Rows:           {}", summary.rows);
    println!("  Aortic Disease: {}", summary.aortic);
    println!("  Other:          {}", summary.other);
    println!("  Output: {}", summary.output_path.display());
    println!("  Time:   {:.1}s", summary.elapsed.as_secs_f64());
    println!();

    if !summary.preview.is_empty() {
        println!("  First {} rows:", summary.preview.len());
        for row in &summary.preview {
            println!(
                "    {:<58}  {}",
                truncate_title(&row.title, 58),
                row.category.label()
            );
        }
        println!();
    }

    Ok(())
}

/// Default output path: '<stem>_categorized.<ext>' next to the input.
fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("titles");
    let ext = input
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("csv");
    input.with_file_name(format!("{stem}_categorized.{ext}"))
}

/// Trim long titles for the preview table.
fn truncate_title(title: &str, max: usize) -> String {
    if title.chars().count() <= max {
        return title.to_string();
    }
    let cut: String = title.chars().take(max.saturating_sub(1)).collect();
    format!("{cut}…")
}

// ---------------------------------------------------------------------------
// CLI progress reporter
// ---------------------------------------------------------------------------

/// CLI progress reporter using an indicatif spinner.
struct CliProgress {
    spinner: ProgressBar,
}

impl CliProgress {
    fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap()
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        Self { spinner }
    }
}

impl ProgressReporter for CliProgress {
    fn phase(&self, name: &str) {
        self.spinner.set_message(name.to_string());
    }

    fn row_classified(&self, current: usize, total: usize) {
        self.spinner
            .set_message(format!("Classifying [{current}/{total}]"));
    }

    fn done(&self, _summary: &RunSummary) {
        self.spinner.finish_and_clear();
    }
}

// ---------------------------------------------------------------------------
// patterns
// ---------------------------------------------------------------------------

fn cmd_patterns() -> Result<()> {
    let config = load_config()?;
    let patterns = PatternSet::with_extras(&config.patterns.extra)?;

    for phrase in patterns.phrases() {
        println!("{phrase}");
    }

    println!();
    println!(
        "{} patterns ({} built-in, {} from config)",
        patterns.len(),
        BUILTIN_PHRASES.len(),
        config.patterns.extra.len()
    );

    Ok(())
}

// ---------------------------------------------------------------------------
// config
// ---------------------------------------------------------------------------

fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

fn cmd_config_show() -> Result<()> {
    let config: AppConfig = load_config()?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}
