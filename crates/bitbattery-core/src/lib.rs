//! # bitbattery-core
//!
//! Randomness-quality statistics over batches of binary strings.
//!
//! A [`RecordTable`] holds an ordered batch of bit strings. Each test in
//! the battery reads every string, derives one scalar per row, and appends
//! the result as a named column (`freq_test`, `block_3_test`,
//! `alter_4_test`, ...). Tests read only the string column and never each
//! other's output, so they compose in any order, and re-running a test
//! replaces its column with identical values.
//!
//! The heart of the crate is the non-overlapping pattern scanner
//! ([`scanner::scan_patterns`]): a greedy slide-on-miss / skip-on-match
//! walk applied independently within successive fixed-size blocks. Three
//! tests reuse it with different pattern sets — the exhaustive `2^m`
//! enumeration, the two alternating patterns, and the two constant
//! patterns. Four single-pass statistics (ones frequency, block-wise and
//! running frequency std, transition count) round out the battery.
//!
//! The battery produces summary statistics only — no p-values, no
//! pass/fail verdicts. Interpretation is left to the caller.
//!
//! ## Quick Start
//!
//! ```
//! use bitbattery_core::{BatteryConfig, RecordTable, run_standard_battery};
//!
//! let mut table = RecordTable::from_strings(vec![
//!     "110010111010001101001011".to_string(),
//!     "000000000000000000000000".to_string(),
//! ]);
//!
//! run_standard_battery(&mut table, &BatteryConfig::default());
//!
//! let stds = table.metric("block_3_test").unwrap();
//! assert_eq!(stds.len(), 2);
//! // A constant string piles every block onto one pattern, so its
//! // per-pattern count spread is far wider than the mixed string's.
//! assert!(stds[1] > stds[0]);
//! ```

pub mod battery;
pub mod scanner;
pub mod table;

pub use battery::{
    BatteryConfig, alternation_count, alternation_test, block_frequency_std, block_pattern_std,
    block_test, frequency_std_test, frequency_test, monotonicity_count, monotonicity_test,
    ones_fraction, run_standard_battery, run_test, running_frequency_std,
    running_frequency_std_test, transition_count,
};
pub use scanner::{all_patterns, alternating_patterns, scan_patterns, uniform_patterns};
pub use table::{MetricColumn, RecordTable};

/// Library version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
