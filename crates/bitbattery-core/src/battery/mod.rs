//! The test battery: single-pass bit statistics plus the pattern-scanner
//! family. Each test reads every row's bit string, derives one scalar per
//! row, and appends the result as a named column.

mod frequency;
mod pattern;

pub use frequency::{
    block_frequency_std, frequency_std_test, frequency_test, ones_fraction, run_test,
    running_frequency_std, running_frequency_std_test, transition_count,
};
pub use pattern::{
    alternation_count, alternation_test, block_pattern_std, block_test, monotonicity_count,
    monotonicity_test,
};

use serde::{Deserialize, Serialize};

use crate::table::RecordTable;

/// Block sizes used by [`run_standard_battery`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatteryConfig {
    /// Block size for the block-wise frequency std test.
    pub frequency_std_block: usize,
    /// Block sizes for the fixed-pattern frequency test, one column each.
    pub pattern_blocks: Vec<usize>,
    /// Block size for the alternation test; must be even.
    pub alternation_block: usize,
    /// Block size for the monotonicity test.
    pub monotonicity_block: usize,
}

impl Default for BatteryConfig {
    fn default() -> Self {
        Self {
            frequency_std_block: 10,
            pattern_blocks: vec![3, 4],
            alternation_block: 4,
            monotonicity_block: 3,
        }
    }
}

/// Run the full battery in canonical order, appending one column per test.
///
/// Order: `freq_test`, `freq_std_test`, `rfreq_std_test`, `run_test`, then
/// `block_{m}_test` for each configured block size, `alter_{m}_test`,
/// `mono_{m}_test`. Tests read only the string column, so the order is a
/// presentation choice, not a data dependency.
pub fn run_standard_battery(table: &mut RecordTable, config: &BatteryConfig) {
    frequency_test(table);
    frequency_std_test(table, config.frequency_std_block);
    running_frequency_std_test(table);
    run_test(table);
    for &m in &config.pattern_blocks {
        block_test(table, m);
    }
    alternation_test(table, config.alternation_block);
    monotonicity_test(table, config.monotonicity_block);
}
