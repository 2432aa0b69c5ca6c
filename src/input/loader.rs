//! Source Loader Module
//!
//! Parses and flattens every source on a bounded rayon pool. Workers share
//! nothing; results come back in the order the sources were given.

use rayon::ThreadPoolBuilder;
use rayon::prelude::*;

use super::Source;
use crate::error::StatsError;
use crate::table::{Table, flatten_document};

/// Outcome of loading one source
pub type LoadResult = Result<Table, StatsError>;

/// Read, parse and flatten a single source
pub fn load_source(source: &Source) -> LoadResult {
    let name = source.name();
    let bytes = source.read()?;

    let document: serde_json::Value =
        serde_json::from_slice(&bytes).map_err(|e| StatsError::InvalidJson {
            name: name.clone(),
            message: e.to_string(),
        })?;

    let table = flatten_document(&name, document)?;
    log::debug!(
        "Loaded {}: {} rows, {} columns",
        name,
        table.row_count(),
        table.columns.len()
    );
    Ok(table)
}

/// Load every source in parallel.
///
/// `threads == 0` sizes the pool to the available cores. The returned vector
/// is index-aligned with `sources`.
///
/// # Errors
/// Only when the thread pool itself cannot be built; per-source failures are
/// inside the returned results.
pub fn load_all(sources: &[Source], threads: usize) -> Result<Vec<LoadResult>, StatsError> {
    let pool = ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|i| format!("batstats-loader-{}", i))
        .build()
        .map_err(|e| StatsError::WorkerPool(e.to_string()))?;

    log::debug!(
        "Loading {} sources on {} threads",
        sources.len(),
        pool.current_num_threads()
    );

    let results: Vec<LoadResult> = pool.install(|| {
        sources
            .par_iter()
            .map(|source| {
                let result = load_source(source);
                if let Err(e) = &result {
                    log::warn!("{}", e);
                }
                result
            })
            .collect()
    });

    Ok(results)
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;
