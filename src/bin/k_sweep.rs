//! Ranking-only K sweep for one category.
//!
//! Aggregates the category once, then times only the ranking phase of
//! both selectors for each K in the sweep. The resulting CSV isolates the
//! O(n log K) vs O(n log n) scaling difference from I/O noise.

use anyhow::Result;
use reviewrank::config::{
    DEFAULT_DATA_DIR, DEFAULT_SWEEP_CATEGORY, DEFAULT_SWEEP_PATH, sweep_k_values,
};
use reviewrank::sweep_k;
use std::path::PathBuf;
use std::process;

fn usage() -> ! {
    eprintln!(
        "usage: k_sweep [--category NAME] [--data-dir DIR] [--output-csv FILE]\n\
         \n\
         defaults:\n\
         \x20 --category   {DEFAULT_SWEEP_CATEGORY}\n\
         \x20 --data-dir   {DEFAULT_DATA_DIR}\n\
         \x20 --output-csv {DEFAULT_SWEEP_PATH}"
    );
    process::exit(2);
}

fn main() -> Result<()> {
    env_logger::init();

    let mut category = DEFAULT_SWEEP_CATEGORY.to_string();
    let mut data_dir = PathBuf::from(DEFAULT_DATA_DIR);
    let mut output = PathBuf::from(DEFAULT_SWEEP_PATH);

    let mut args = std::env::args().skip(1);
    while let Some(flag) = args.next() {
        let Some(value) = args.next() else { usage() };
        match flag.as_str() {
            "--category" => category = value,
            "--data-dir" => data_dir = PathBuf::from(value),
            "--output-csv" => output = PathBuf::from(value),
            _ => usage(),
        }
    }

    let ks = sweep_k_values();
    println!("K sweep: bounded Top-K vs naive full sort (ranking phase only)");
    println!("Category: {category}");
    println!("K values: {ks:?}");

    let rows = sweep_k(&data_dir, &category, &ks, &output)?;

    for row in &rows {
        println!(
            "  K={:>4}  bounded {:>9.4} ms | naive {:>9.4} ms",
            row.top_k, row.time_bounded_ms, row.time_naive_ms
        );
    }
    println!("\nsweep written to {}", output.display());
    Ok(())
}
