//! End-to-end classify pipeline: read table → classify titles → write labeled output.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use tracing::{info, instrument, warn};

use aortascreen_classifier::TitleClassifier;
use aortascreen_shared::{AortascreenError, Category, Result};

/// Configuration for one classification run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Input tabular file.
    pub input: PathBuf,
    /// Output file (written atomically).
    pub output: PathBuf,
    /// Header name of the column holding the titles.
    pub title_column: String,
    /// Header name of the appended classification column.
    pub label_column: String,
    /// Field delimiter; `None` sniffs from the input.
    pub delimiter: Option<u8>,
    /// Number of labeled rows collected for the console preview.
    pub preview_rows: usize,
}

/// One row of the console preview.
#[derive(Debug, Clone)]
pub struct PreviewRow {
    /// The title cell text (empty when the cell was absent).
    pub title: String,
    /// Its classification.
    pub category: Category,
}

/// Result of a classification run.
#[derive(Debug)]
pub struct RunSummary {
    /// Total data rows processed.
    pub rows: usize,
    /// Rows labeled "Aortic Disease".
    pub aortic: usize,
    /// Rows labeled "Other".
    pub other: usize,
    /// The first N labeled rows.
    pub preview: Vec<PreviewRow>,
    /// Where the labeled table was written.
    pub output_path: PathBuf,
    /// Total elapsed time.
    pub elapsed: Duration,
}

/// Progress callback for reporting pipeline status.
pub trait ProgressReporter: Send + Sync {
    /// Called when entering a new phase.
    fn phase(&self, name: &str);
    /// Called after each row is classified.
    fn row_classified(&self, current: usize, total: usize);
    /// Called when the run completes.
    fn done(&self, summary: &RunSummary);
}

/// No-op progress reporter for headless/test usage.
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn phase(&self, _name: &str) {}
    fn row_classified(&self, _current: usize, _total: usize) {}
    fn done(&self, _summary: &RunSummary) {}
}

/// Run the full classify pipeline.
///
/// 1. Read the input table
/// 2. Resolve the title column
/// 3. Classify every row in input order
/// 4. Write the labeled output
///
/// Every error is terminal: nothing is written on failure, and the cause
/// propagates to the caller for reporting.
#[instrument(skip_all, fields(input = %config.input.display()))]
pub fn run(
    config: &RunConfig,
    classifier: &TitleClassifier,
    progress: &dyn ProgressReporter,
) -> Result<RunSummary> {
    let start = Instant::now();

    if !config.input.exists() {
        return Err(AortascreenError::InputNotFound {
            path: config.input.clone(),
        });
    }

    // --- Phase 1: Read ---
    progress.phase("Reading input");
    let table = aortascreen_tabular::read_table(&config.input, config.delimiter)?;
    let title_col = table.require_column(&config.title_column)?;

    if table.column_index(&config.label_column).is_some() {
        warn!(
            column = %config.label_column,
            "input already contains the label column name; appending a second one"
        );
    }

    // --- Phase 2: Classify ---
    progress.phase("Classifying titles");
    let total = table.row_count();
    let mut labels: Vec<&str> = Vec::with_capacity(total);
    let mut preview = Vec::new();
    let mut aortic = 0usize;

    for i in 0..total {
        let cell = table.cell(i, title_col);
        let category = classifier.classify_cell(cell);

        if category == Category::AorticDisease {
            aortic += 1;
        }
        if preview.len() < config.preview_rows {
            preview.push(PreviewRow {
                title: cell.unwrap_or_default().to_string(),
                category,
            });
        }

        labels.push(category.label());
        progress.row_classified(i + 1, total);
    }

    // --- Phase 3: Write ---
    progress.phase("Writing output");
    aortascreen_tabular::write_labeled(&config.output, &table, &config.label_column, &labels)?;

    let summary = RunSummary {
        rows: total,
        aortic,
        other: total - aortic,
        preview,
        output_path: config.output.clone(),
        elapsed: start.elapsed(),
    };

    progress.done(&summary);

    info!(
        rows = summary.rows,
        aortic = summary.aortic,
        other = summary.other,
        output = %summary.output_path.display(),
        elapsed_ms = summary.elapsed.as_millis(),
        "classification run complete"
    );

    Ok(summary)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
