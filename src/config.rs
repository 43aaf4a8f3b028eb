//! Static configuration tables and defaults.
//!
//! Catalog data, not logic: which categories a default batch run covers,
//! where the dataset lives, and which K values the sweep visits.

/// Review categories whose JSONL file is under 2 GB, smallest first.
///
/// A full batch over these finishes on a laptop; the larger categories are
/// deliberately left out of the default run.
pub const CATEGORIES_UNDER_2GB: &[&str] = &[
    "Subscription_Boxes",        // 8.95 MB
    "Magazine_Subscriptions",    // 33.3 MB
    "Gift_Cards",                // 50.2 MB
    "Digital_Music",             // 78.8 MB
    "Health_and_Personal_Care",  // 227 MB
    "Handmade_Products",         // 289 MB
    "All_Beauty",                // 326.6 MB
    "Appliances",                // 929.5 MB
    "Amazon_Fashion",            // 1.05 GB
    "Musical_Instruments",       // 1.56 GB
    "Software",                  // 1.87 GB
];

/// Default dataset root, relative to the working directory.
pub const DEFAULT_DATA_DIR: &str = "dataset/amazon_reviews";

/// Default ranking size for the per-category report.
pub const DEFAULT_K: usize = 10;

/// Default output path of the per-category comparison report.
pub const DEFAULT_REPORT_PATH: &str = "benchmark_report.csv";

/// Default output path of the K sweep.
pub const DEFAULT_SWEEP_PATH: &str = "k_sweep.csv";

/// Default category for the K sweep: large enough that the O(n log K) vs
/// O(n log n) gap is visible, small enough to iterate on.
pub const DEFAULT_SWEEP_CATEGORY: &str = "Amazon_Fashion";

/// K values visited by the sweep: 5, 105, 205, ..., 905.
#[must_use]
pub fn sweep_k_values() -> Vec<usize> {
    (5..1000).step_by(100).collect()
}
