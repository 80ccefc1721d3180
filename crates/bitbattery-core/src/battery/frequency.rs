//! Single-pass bit statistics: one walk per string, no pattern search.

use statrs::statistics::Statistics;

use crate::table::RecordTable;

/// Relative frequency of ones over the whole string.
pub fn ones_fraction(bits: &[u8]) -> f64 {
    let ones = bits.iter().filter(|&&b| b == b'1').count();
    ones as f64 / bits.len() as f64
}

/// Population standard deviation of per-block ones-frequencies.
///
/// The string is split into `floor(len / m)` non-overlapping blocks of size
/// `m`; each block contributes its ones count divided by `m`. Zero full
/// blocks leaves the frequency list empty and the result is NaN, preserved
/// as-is rather than coerced to 0. `m` must be positive.
pub fn block_frequency_std(bits: &[u8], m: usize) -> f64 {
    assert!(m > 0, "block size must be positive");
    let block_freqs: Vec<f64> = bits
        .chunks_exact(m)
        .map(|block| block.iter().filter(|&&b| b == b'1').count() as f64 / m as f64)
        .collect();
    block_freqs.population_std_dev()
}

/// Population standard deviation of the running ones-frequency sequence.
///
/// The running frequency after `k` bits is the ones count of the first `k`
/// bits divided by the total string length (not the prefix length), taken
/// for every strict prefix, `k` from 1 to `len - 1`. A length-1 string has
/// no strict prefix and yields NaN.
pub fn running_frequency_std(bits: &[u8]) -> f64 {
    let len = bits.len() as f64;
    let prefix_count = bits.len().saturating_sub(1);
    let mut ones = 0u64;
    let mut running = Vec::with_capacity(prefix_count);
    for &bit in bits.iter().take(prefix_count) {
        if bit == b'1' {
            ones += 1;
        }
        running.push(ones as f64 / len);
    }
    running.population_std_dev()
}

/// Total number of bit transitions: positions whose bit differs from its
/// predecessor. A run is an uninterrupted stretch of identical bits, so
/// this is one less than the number of runs.
pub fn transition_count(bits: &[u8]) -> u64 {
    bits.windows(2).filter(|pair| pair[0] != pair[1]).count() as u64
}

/// Append `freq_test`: relative frequency of ones per row.
pub fn frequency_test(table: &mut RecordTable) {
    let values: Vec<f64> = (0..table.len())
        .map(|row| ones_fraction(table.bits(row)))
        .collect();
    table.append_metric("freq_test", values);
}

/// Append `freq_std_test`: block-wise ones-frequency std per row.
pub fn frequency_std_test(table: &mut RecordTable, m: usize) {
    let values: Vec<f64> = (0..table.len())
        .map(|row| block_frequency_std(table.bits(row), m))
        .collect();
    table.append_metric("freq_std_test", values);
}

/// Append `rfreq_std_test`: running ones-frequency std per row.
pub fn running_frequency_std_test(table: &mut RecordTable) {
    let values: Vec<f64> = (0..table.len())
        .map(|row| running_frequency_std(table.bits(row)))
        .collect();
    table.append_metric("rfreq_std_test", values);
}

/// Append `run_test`: total bit-transition count per row.
pub fn run_test(table: &mut RecordTable) {
    let values: Vec<f64> = (0..table.len())
        .map(|row| transition_count(table.bits(row)) as f64)
        .collect();
    table.append_metric("run_test", values);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn ones_fraction_basic() {
        assert!(close(ones_fraction(b"1100"), 0.5));
        assert!(close(ones_fraction(b"0000"), 0.0));
        assert!(close(ones_fraction(b"1"), 1.0));
    }

    #[test]
    fn block_frequency_std_hand_computed() {
        // Blocks of 2: frequencies [1.0, 0.0, 0.5]; population std.
        let freqs = [1.0f64, 0.0, 0.5];
        let mean: f64 = freqs.iter().sum::<f64>() / 3.0;
        let var: f64 = freqs.iter().map(|f| (f - mean).powi(2)).sum::<f64>() / 3.0;
        assert!(close(block_frequency_std(b"110001", 2), var.sqrt()));
    }

    #[test]
    fn block_frequency_std_uniform_blocks_is_zero() {
        assert!(close(block_frequency_std(b"101010", 2), 0.0));
    }

    #[test]
    fn block_frequency_std_zero_blocks_is_nan() {
        assert!(block_frequency_std(b"01", 3).is_nan());
    }

    #[test]
    fn running_frequency_std_hand_computed() {
        // Prefixes of `1100`: ones counts 1, 2, 2 over total length 4.
        let running = [0.25f64, 0.5, 0.5];
        let mean: f64 = running.iter().sum::<f64>() / 3.0;
        let var: f64 = running.iter().map(|f| (f - mean).powi(2)).sum::<f64>() / 3.0;
        assert!(close(running_frequency_std(b"1100"), var.sqrt()));
    }

    #[test]
    fn running_frequency_std_single_bit_is_nan() {
        assert!(running_frequency_std(b"1").is_nan());
    }

    #[test]
    fn transition_count_basic() {
        assert_eq!(transition_count(b"1100"), 1);
        assert_eq!(transition_count(b"1010"), 3);
        assert_eq!(transition_count(b"1111"), 0);
        assert_eq!(transition_count(b"0"), 0);
    }

    #[test]
    fn table_wrappers_append_expected_columns() {
        let mut table = RecordTable::from_strings(vec!["110010".into(), "1".into()]);
        frequency_test(&mut table);
        frequency_std_test(&mut table, 2);
        running_frequency_std_test(&mut table);
        run_test(&mut table);

        assert!(close(table.metric("freq_test").unwrap()[0], 0.5));
        assert_eq!(table.metric("run_test").unwrap()[0], 3.0);
        // The length-1 row exercises both degenerate NaN paths.
        assert!(table.metric("freq_std_test").unwrap()[1].is_nan());
        assert!(table.metric("rfreq_std_test").unwrap()[1].is_nan());
    }
}
