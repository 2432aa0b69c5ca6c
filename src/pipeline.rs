//! The Loader → Validator → Aggregator run behind every "calculate" action
//!
//! `run` is a pure function of its sources and settings: nothing is kept
//! between calls and every failure ends up in the returned `Report`.

pub mod runner;

pub use runner::PipelineRunner;

use crate::config::{ColumnsConfig, Config};
use crate::error::StatsError;
use crate::input::{Discovery, Source, load_all};
use crate::stats::{StatsTable, aggregate};
use crate::validate::validate_tables;

/// Per-run settings, resolved from config and command-line overrides
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Settings {
    pub columns: ColumnsConfig,
    /// Loader threads; 0 means one per core
    pub threads: usize,
}

impl From<&Config> for Settings {
    fn from(config: &Config) -> Self {
        Settings {
            columns: config.columns.clone(),
            threads: config.loader.threads,
        }
    }
}

/// Everything one run produced
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Per-source problems, in source order; each one dropped that source
    pub diagnostics: Vec<StatsError>,
    pub sources_total: usize,
    /// Sources that made it through validation
    pub sources_used: usize,
    /// Rows in the combined table before grouping
    pub rows_combined: usize,
    /// The aggregate table, or the error that stopped the run
    pub outcome: Result<StatsTable, StatsError>,
}

impl Report {
    fn failed(diagnostics: Vec<StatsError>, sources_total: usize, error: StatsError) -> Self {
        Report {
            diagnostics,
            sources_total,
            sources_used: 0,
            rows_combined: 0,
            outcome: Err(error),
        }
    }

    pub fn table(&self) -> Option<&StatsTable> {
        self.outcome.as_ref().ok()
    }

    pub fn error(&self) -> Option<&StatsError> {
        self.outcome.as_ref().err()
    }
}

/// Run the pipeline over already-resolved sources.
///
/// An empty `sources` slice means nothing was supplied (`NoInput`).
pub fn run(sources: &[Source], settings: &Settings) -> Report {
    if sources.is_empty() {
        return Report::failed(Vec::new(), 0, StatsError::NoInput);
    }

    let results = match load_all(sources, settings.threads) {
        Ok(results) => results,
        Err(e) => return Report::failed(Vec::new(), sources.len(), e),
    };

    let mut diagnostics = Vec::new();
    let mut tables = Vec::with_capacity(results.len());
    for result in results {
        match result {
            Ok(table) => tables.push(table),
            Err(e) => diagnostics.push(e),
        }
    }

    let (valid, schema_errors) = validate_tables(tables, &settings.columns);
    diagnostics.extend(schema_errors);

    if valid.is_empty() {
        return Report::failed(diagnostics, sources.len(), StatsError::NoValidData);
    }

    let rows_combined = valid.iter().map(|t| t.row_count()).sum();
    let outcome = aggregate(&valid, &settings.columns);
    match &outcome {
        Ok(table) => log::info!(
            "{} players from {} rows in {}/{} sources",
            table.len(),
            rows_combined,
            valid.len(),
            sources.len()
        ),
        Err(e) => log::warn!("Aggregation failed: {}", e),
    }

    Report {
        diagnostics,
        sources_total: sources.len(),
        sources_used: valid.len(),
        rows_combined,
        outcome,
    }
}

/// Run over the result of argument discovery.
///
/// Arguments were given, so finding no sources at all is `NoValidData`
/// rather than `NoInput`. Discovery errors lead the diagnostics.
pub fn run_discovered(discovery: Discovery, settings: &Settings) -> Report {
    let Discovery { sources, errors } = discovery;

    if sources.is_empty() {
        return Report::failed(errors, 0, StatsError::NoValidData);
    }

    let mut report = run(&sources, settings);
    if !errors.is_empty() {
        let mut diagnostics = errors;
        diagnostics.append(&mut report.diagnostics);
        report.diagnostics = diagnostics;
    }
    report
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod pipeline_tests;
