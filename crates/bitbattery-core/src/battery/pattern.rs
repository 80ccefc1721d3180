//! Pattern-family tests built on the non-overlapping scanner: fixed-block
//! pattern frequency, alternation detection, and monotonic-run detection.

use statrs::statistics::Statistics;

use crate::scanner::{all_patterns, alternating_patterns, scan_patterns, uniform_patterns};
use crate::table::RecordTable;

/// Population standard deviation of the `2^m` per-pattern occurrence
/// counts over non-overlapping blocks of size `m`.
///
/// The canonical battery runs this with `m` of 3 and 4. A string shorter
/// than `m` has zero blocks, every count is 0, and the std is 0.
pub fn block_pattern_std(bits: &[u8], m: usize) -> f64 {
    let patterns = all_patterns(m);
    let counts = scan_patterns(bits, m, &patterns);
    counts
        .into_iter()
        .map(|count| count as f64)
        .population_std_dev()
}

/// Total number of alternating blocks (`1010...` or `0101...`) of length
/// `m`. `m` must be positive and even.
pub fn alternation_count(bits: &[u8], m: usize) -> u64 {
    let [ten, zero_one] = alternating_patterns(m);
    scan_patterns(bits, m, &[ten, zero_one]).iter().sum()
}

/// Total number of constant blocks (`111...` or `000...`) of length `m`.
pub fn monotonicity_count(bits: &[u8], m: usize) -> u64 {
    let [ones, zeros] = uniform_patterns(m);
    scan_patterns(bits, m, &[ones, zeros]).iter().sum()
}

/// Append `block_{m}_test`: per-pattern occurrence-count std per row.
pub fn block_test(table: &mut RecordTable, m: usize) {
    let values: Vec<f64> = (0..table.len())
        .map(|row| block_pattern_std(table.bits(row), m))
        .collect();
    table.append_metric(format!("block_{m}_test"), values);
}

/// Append `alter_{m}_test`: alternating-block count per row. `m` must be
/// positive and even.
pub fn alternation_test(table: &mut RecordTable, m: usize) {
    let values: Vec<f64> = (0..table.len())
        .map(|row| alternation_count(table.bits(row), m) as f64)
        .collect();
    table.append_metric(format!("alter_{m}_test"), values);
}

/// Append `mono_{m}_test`: constant-block count per row.
pub fn monotonicity_test(table: &mut RecordTable, m: usize) {
    let values: Vec<f64> = (0..table.len())
        .map(|row| monotonicity_count(table.bits(row), m) as f64)
        .collect();
    table.append_metric(format!("mono_{m}_test"), values);
}
