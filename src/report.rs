//! Comparison harness: time both selectors and report similarity metrics.
//!
//! Two report variants share one discipline: aggregate a category ONCE,
//! then wall-clock each selector independently over the shared map, so
//! the measured cost is the ranking phase alone and not I/O.
//!
//! - [`run_report`] -- one row per category at a fixed K, timings in
//!   seconds plus the five similarity metrics, full-sort output as the
//!   reference.
//! - [`sweep_k`] -- one category, K swept over a range, ranking-only
//!   timings in milliseconds.
//!
//! A category whose review file is missing is skipped with a logged
//! notice; the batch keeps going.

use crate::aggregate::Aggregated;
use crate::error::MissingInput;
use crate::io::load_and_aggregate;
use crate::metrics;
use crate::rank::{rank_bounded, rank_full_sort};
use crate::score::ScoredItem;
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;
use std::time::{Duration, Instant};

/* ===================== report rows ===================== */

/// One row of the per-category comparison report.
///
/// Field order is the CSV column order. Non-finite values serialize as
/// `NaN`/`inf` literals (Spearman's rho is `NaN` when undefined, speedup
/// is `inf` when the bounded time rounds to zero).
#[derive(Clone, Debug, Serialize)]
pub struct ReportRow {
    pub category: String,
    pub k: usize,
    pub time_bounded_seconds: f64,
    pub time_naive_seconds: f64,
    /// `time_naive / time_bounded`.
    pub speedup: f64,
    pub precision_at_k: f64,
    pub ap_at_k: f64,
    pub ndcg_at_k: f64,
    pub jaccard_at_k: f64,
    pub spearman_rho: f64,
}

/// One row of the K sweep (ranking phase only, aggregation excluded).
#[derive(Clone, Debug, Serialize)]
pub struct SweepRow {
    pub top_k: usize,
    pub time_bounded_ms: f64,
    pub time_naive_ms: f64,
}

/// Outcome of running both selectors over one aggregated map.
#[derive(Clone, Debug)]
pub struct Comparison {
    /// Ranking from the bounded heap selector (evaluated).
    pub bounded: Vec<ScoredItem>,
    /// Ranking from the full-sort baseline (reference).
    pub naive: Vec<ScoredItem>,
    pub time_bounded: Duration,
    pub time_naive: Duration,
}

/// Round to 4 decimal places for report output; passes NaN/inf through.
fn round4(x: f64) -> f64 {
    (x * 1e4).round() / 1e4
}

/* ===================== harness ===================== */

/// Run both selectors over one aggregated map, timing each in isolation.
///
/// # Errors
/// Propagates selector errors; none are reachable in practice.
pub fn compare(aggregated: &Aggregated, k: usize) -> Result<Comparison> {
    let t0 = Instant::now();
    let bounded = rank_bounded(aggregated, k)?;
    let time_bounded = t0.elapsed();

    let t0 = Instant::now();
    let naive = rank_full_sort(aggregated, k);
    let time_naive = t0.elapsed();

    Ok(Comparison {
        bounded,
        naive,
        time_bounded,
        time_naive,
    })
}

/// Benchmark one category at one K.
///
/// Returns `Ok(None)` when the category's review file is missing, after
/// logging a skip notice, so a batch run degrades gracefully.
///
/// # Errors
/// Read/parse failures and selector errors are propagated.
pub fn benchmark_category(data_dir: &Path, category: &str, k: usize) -> Result<Option<ReportRow>> {
    let aggregated = match load_and_aggregate(data_dir, category) {
        Ok(aggregated) => aggregated,
        Err(e) if e.is::<MissingInput>() => {
            log::warn!("skipping {category}: {e:#}");
            return Ok(None);
        }
        Err(e) => return Err(e),
    };

    let cmp = compare(&aggregated, k)?;
    let time_bounded = cmp.time_bounded.as_secs_f64();
    let time_naive = cmp.time_naive.as_secs_f64();
    let speedup = if time_bounded > 0.0 {
        time_naive / time_bounded
    } else {
        f64::INFINITY
    };

    Ok(Some(ReportRow {
        category: category.to_string(),
        k,
        time_bounded_seconds: round4(time_bounded),
        time_naive_seconds: round4(time_naive),
        speedup: round4(speedup),
        precision_at_k: round4(metrics::precision_at_k(&cmp.naive, &cmp.bounded)),
        ap_at_k: round4(metrics::average_precision_at_k(&cmp.naive, &cmp.bounded)),
        ndcg_at_k: round4(metrics::ndcg_at_k(&cmp.naive, &cmp.bounded)),
        jaccard_at_k: round4(metrics::jaccard_at_k(&cmp.bounded, &cmp.naive)),
        spearman_rho: round4(metrics::spearman_rho(&cmp.naive, &cmp.bounded)),
    }))
}

/// Benchmark every category at a fixed K and write the CSV report.
///
/// # Errors
/// Fails on unreadable (but present) input files or an unwritable output
/// path; missing categories are skipped, not fatal.
pub fn run_report(
    data_dir: &Path,
    categories: &[String],
    k: usize,
    output: &Path,
) -> Result<Vec<ReportRow>> {
    let mut rows = Vec::new();
    for (i, category) in categories.iter().enumerate() {
        log::info!("[{}/{}] {category}", i + 1, categories.len());
        let Some(row) = benchmark_category(data_dir, category, k)? else {
            continue;
        };
        log::info!(
            "  bounded {}s | naive {}s | speedup {}x | precision@{k} {}",
            row.time_bounded_seconds,
            row.time_naive_seconds,
            row.speedup,
            row.precision_at_k,
        );
        rows.push(row);
    }

    write_csv(output, &rows)?;
    log::info!("report written to {}", output.display());
    Ok(rows)
}

/// Sweep K over `ks` for one category, timing only the ranking phase.
///
/// The category is read and aggregated once, outside the timed region.
///
/// # Errors
/// A missing review file is fatal here (there is nothing else to do), as
/// are read/parse failures and an unwritable output path.
pub fn sweep_k(
    data_dir: &Path,
    category: &str,
    ks: &[usize],
    output: &Path,
) -> Result<Vec<SweepRow>> {
    let t0 = Instant::now();
    let aggregated = load_and_aggregate(data_dir, category)?;
    log::info!(
        "{category}: {} distinct items aggregated in {:.2}s",
        aggregated.len(),
        t0.elapsed().as_secs_f64()
    );

    let mut rows = Vec::with_capacity(ks.len());
    for &k in ks {
        let cmp = compare(&aggregated, k)?;
        let row = SweepRow {
            top_k: k,
            time_bounded_ms: round4(cmp.time_bounded.as_secs_f64() * 1e3),
            time_naive_ms: round4(cmp.time_naive.as_secs_f64() * 1e3),
        };
        log::info!(
            "  K={k:>4} | bounded {:>9.4} ms | naive {:>9.4} ms",
            row.time_bounded_ms,
            row.time_naive_ms
        );
        rows.push(row);
    }

    write_csv(output, &rows)?;
    log::info!("sweep written to {}", output.display());
    Ok(rows)
}

/// Write serializable rows as CSV, creating parent directories if needed.
fn write_csv<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("mkdir -p {}", parent.display()))?;
    }
    let mut w = csv::Writer::from_path(path).with_context(|| format!("create {}", path.display()))?;
    for (i, row) in rows.iter().enumerate() {
        w.serialize(row)
            .with_context(|| format!("serialize row #{} to {}", i, path.display()))?;
    }
    w.flush()?;
    Ok(())
}
