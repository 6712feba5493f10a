//! Batch classification pipeline for aortascreen.
//!
//! Ties the tabular and classifier crates together: read a title table,
//! classify every row, write the labeled copy, and summarize the run.

pub mod pipeline;

pub use pipeline::{PreviewRow, ProgressReporter, RunConfig, RunSummary, SilentProgress, run};
