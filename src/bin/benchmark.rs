//! Per-category comparison report.
//!
//! Runs the bounded heap selector and the full-sort baseline over every
//! requested category, and writes one CSV row per category with timings,
//! speedup, and the five ranking-similarity metrics.

use anyhow::Result;
use reviewrank::config::{CATEGORIES_UNDER_2GB, DEFAULT_DATA_DIR, DEFAULT_K, DEFAULT_REPORT_PATH};
use reviewrank::run_report;
use std::path::PathBuf;
use std::process;

fn usage() -> ! {
    eprintln!(
        "usage: benchmark [--top-k N] [--categories A,B,C] [--data-dir DIR] [--output FILE]\n\
         \n\
         defaults:\n\
         \x20 --top-k      {DEFAULT_K}\n\
         \x20 --categories all categories under 2 GB\n\
         \x20 --data-dir   {DEFAULT_DATA_DIR}\n\
         \x20 --output     {DEFAULT_REPORT_PATH}"
    );
    process::exit(2);
}

fn main() -> Result<()> {
    env_logger::init();

    let mut k = DEFAULT_K;
    let mut data_dir = PathBuf::from(DEFAULT_DATA_DIR);
    let mut output = PathBuf::from(DEFAULT_REPORT_PATH);
    let mut categories: Vec<String> = CATEGORIES_UNDER_2GB
        .iter()
        .map(ToString::to_string)
        .collect();

    let mut args = std::env::args().skip(1);
    while let Some(flag) = args.next() {
        let Some(value) = args.next() else { usage() };
        match flag.as_str() {
            "--top-k" => k = value.parse().unwrap_or_else(|_| usage()),
            "--categories" => categories = value.split(',').map(str::to_string).collect(),
            "--data-dir" => data_dir = PathBuf::from(value),
            "--output" => output = PathBuf::from(value),
            _ => usage(),
        }
    }

    println!("Benchmark: bounded Top-K (min-heap) vs naive full sort  (K={k})");
    println!("Categories: {}", categories.len());
    println!("Output: {}", output.display());

    let rows = run_report(&data_dir, &categories, k, &output)?;

    for row in &rows {
        println!(
            "{:<28} bounded {:>8.4}s | naive {:>8.4}s | speedup {:>7.2}x | \
             precision@{k} {:.4} | jaccard@{k} {:.4} | rho {}",
            row.category,
            row.time_bounded_seconds,
            row.time_naive_seconds,
            row.speedup,
            row.precision_at_k,
            row.jaccard_at_k,
            row.spearman_rho,
        );
    }
    if rows.is_empty() {
        println!("no category processed; is the dataset fetched into the data dir?");
    } else {
        println!("\nreport written to {}", output.display());
    }
    Ok(())
}
