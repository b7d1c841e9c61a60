//! Batch processing types and the parallel render loop.

use crate::types::{RenderOptions, RenderOutput};
use napi_derive::napi;
use rayon::prelude::*;
use spotlight_astro::Renderer;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Instant;

/// Input for batch processing - one document to render.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct BatchInput {
    /// Document identifier (typically the file path).
    pub id: String,
    /// Markdown source content.
    pub source: String,
}

/// Result for a single document in a batch.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct BatchResult {
    /// Document identifier matching the input.
    pub id: String,
    /// Render result (present on success).
    pub result: Option<RenderOutput>,
    /// Error message (present on failure).
    pub error: Option<String>,
}

/// Statistics for batch processing.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct BatchStats {
    /// Total number of documents submitted.
    pub total: u32,
    /// Number of successfully rendered documents.
    pub succeeded: u32,
    /// Number of failed renders.
    pub failed: u32,
    /// Total processing time in milliseconds.
    pub processing_time_ms: f64,
}

/// Options for batch processing.
#[napi(object)]
#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    /// Maximum number of threads to use. Defaults to number of CPU cores.
    pub max_threads: Option<u32>,
    /// Whether to continue processing after an error. Defaults to true.
    pub continue_on_error: Option<bool>,
    /// Render options for the free `renderBatch` function.
    /// `SpotlightRenderer.renderBatch` uses the renderer's own options.
    pub options: Option<RenderOptions>,
}

/// Result of batch processing containing all results and statistics.
#[napi(object)]
#[derive(Debug, Clone)]
pub struct BatchProcessingResult {
    /// Individual results for each input document.
    pub results: Vec<BatchResult>,
    /// Processing statistics.
    pub stats: BatchStats,
}

/// Renders every input with `renderer`, in parallel unless the batch stops on errors.
pub(crate) fn run_batch(
    renderer: &Renderer,
    inputs: Vec<BatchInput>,
    options: &BatchOptions,
) -> BatchProcessingResult {
    let start = Instant::now();
    let continue_on_error = options.continue_on_error.unwrap_or(true);

    // Configure thread pool if max_threads is specified
    let pool = options.max_threads.and_then(|max_threads| {
        rayon::ThreadPoolBuilder::new()
            .num_threads(max_threads as usize)
            .build()
            .ok()
    });

    let total = inputs.len() as u32;
    let succeeded = AtomicU32::new(0);
    let failed = AtomicU32::new(0);

    let process_input = |input: BatchInput| -> BatchResult {
        match renderer.render(&input.source) {
            Ok(result) => {
                succeeded.fetch_add(1, Ordering::Relaxed);
                BatchResult {
                    id: input.id,
                    result: Some(result.into()),
                    error: None,
                }
            }
            Err(e) => {
                failed.fetch_add(1, Ordering::Relaxed);
                BatchResult {
                    id: input.id,
                    result: None,
                    error: Some(e.to_string()),
                }
            }
        }
    };

    let results: Vec<BatchResult> = if continue_on_error {
        if let Some(pool) = pool {
            pool.install(|| inputs.into_par_iter().map(process_input).collect())
        } else {
            inputs.into_par_iter().map(process_input).collect()
        }
    } else {
        // Stop on first error - sequential processing required
        let mut results = Vec::with_capacity(inputs.len());
        for input in inputs {
            let result = process_input(input);
            let stop = result.error.is_some();
            results.push(result);
            if stop {
                break;
            }
        }
        results
    };

    BatchProcessingResult {
        results,
        stats: BatchStats {
            total,
            succeeded: succeeded.load(Ordering::Relaxed),
            failed: failed.load(Ordering::Relaxed),
            processing_time_ms: start.elapsed().as_secs_f64() * 1000.0,
        },
    }
}
