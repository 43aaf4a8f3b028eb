//! JSONL event input and dataset path layout.
//!
//! Review files are newline-delimited JSON, one event per line, laid out
//! as `<data_dir>/raw/review_categories/<category>.jsonl`. Reading is
//! streaming: events are folded into the aggregation map as they are
//! parsed, never materialized as a whole.
//!
//! # Notes
//! - Empty and whitespace-only lines are skipped.
//! - Read and parse errors carry the line number and path.

use crate::aggregate::{self, Aggregated, RatingEvent};
use crate::error::MissingInput;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Path of a category's review file under `data_dir`.
#[must_use]
pub fn category_path(data_dir: &Path, category: &str) -> PathBuf {
    data_dir
        .join("raw")
        .join("review_categories")
        .join(format!("{category}.jsonl"))
}

/// Stream rating events from a JSONL review file.
///
/// Each non-empty line is parsed lazily into a [`RatingEvent`]; the file
/// is never held in memory as a whole.
///
/// # Errors
/// Returns an error if the file cannot be opened. Individual items are
/// `Err` when a line cannot be read or parsed, with line-number context.
pub fn read_events(path: &Path) -> Result<impl Iterator<Item = Result<RatingEvent>> + '_> {
    let f = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let rdr = BufReader::new(f);
    Ok(rdr.lines().enumerate().filter_map(move |(i, line)| {
        let line = match line.with_context(|| format!("read line {} in {}", i + 1, path.display()))
        {
            Ok(line) => line,
            Err(e) => return Some(Err(e)),
        };
        if line.trim().is_empty() {
            return None;
        }
        Some(
            serde_json::from_str::<RatingEvent>(&line).with_context(|| {
                format!("parse JSONL line {} in {}: {}", i + 1, path.display(), line)
            }),
        )
    }))
}

/// Read a category's review file and aggregate it into per-item stats.
///
/// # Errors
/// [`MissingInput`] when the category file does not exist (callers running
/// a batch downcast to it and skip the category); otherwise read/parse
/// errors from the underlying stream.
pub fn load_and_aggregate(data_dir: &Path, category: &str) -> Result<Aggregated> {
    let path = category_path(data_dir, category);
    if !path.exists() {
        return Err(MissingInput {
            category: category.to_string(),
            path,
        }
        .into());
    }

    let mut acc = Aggregated::new();
    for event in read_events(&path)? {
        aggregate::fold(&mut acc, event?);
    }
    Ok(acc)
}
