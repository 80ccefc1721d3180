//! Greedy non-overlapping pattern scanner shared by the pattern-family tests.
//!
//! The scan partitions a bit string into `floor(len / m)` non-overlapping
//! blocks of size `m` and walks each block with a cursor: a window that
//! equals a target pattern bumps that pattern's count and jumps the cursor a
//! full pattern length; a miss slides the cursor one position. The window
//! never crosses a block boundary, and trailing bits that do not fill a
//! block are discarded.

/// Count non-overlapping occurrences of each pattern across `bits`.
///
/// Returns one count per entry of `patterns`, in the same order; a pattern
/// that never occurs reports 0. The sum of all counts is bounded by the
/// number of blocks, `bits.len() / m`. Characters outside {`b'0'`, `b'1'`}
/// simply never match.
///
/// `m` must be positive; every pattern must have length exactly `m`. A
/// string shorter than `m` has zero blocks and every count is 0.
pub fn scan_patterns(bits: &[u8], m: usize, patterns: &[Vec<u8>]) -> Vec<u64> {
    assert!(m > 0, "block size must be positive");
    debug_assert!(patterns.iter().all(|p| p.len() == m));

    let number_of_blocks = bits.len() / m;
    let mut counts = vec![0u64; patterns.len()];

    for k in 0..number_of_blocks {
        let block = &bits[k * m..k * m + m];

        // Cursor walk within one block. Windows are clamped at the block
        // end, so only the cursor-0 window carries full pattern length;
        // the shorter trailing windows can never match and the walk
        // terminates once the cursor leaves the block.
        let mut cursor = 0;
        while cursor < m {
            let window = &block[cursor..];
            match patterns.iter().position(|p| p.as_slice() == window) {
                Some(hit) => {
                    counts[hit] += 1;
                    cursor += m;
                }
                None => cursor += 1,
            }
        }
    }

    counts
}

/// All `2^m` bit patterns of length `m`, in ascending binary order.
///
/// The enumeration order is irrelevant to the statistics computed from the
/// counts. `m` must be positive.
pub fn all_patterns(m: usize) -> Vec<Vec<u8>> {
    assert!(m > 0, "block size must be positive");
    (0..1usize << m)
        .map(|value| {
            (0..m)
                .rev()
                .map(|bit| if (value >> bit) & 1 == 1 { b'1' } else { b'0' })
                .collect()
        })
        .collect()
}

/// The two alternating patterns of length `m`: `1010...` and `0101...`.
///
/// `m` must be positive and even; odd `m` is a precondition violation, not
/// a case with defined behavior.
pub fn alternating_patterns(m: usize) -> [Vec<u8>; 2] {
    assert!(m > 0, "block size must be positive");
    assert!(m % 2 == 0, "alternation requires an even block size, got {m}");
    [b"10".repeat(m / 2), b"01".repeat(m / 2)]
}

/// The two constant patterns of length `m`: all ones and all zeros.
pub fn uniform_patterns(m: usize) -> [Vec<u8>; 2] {
    assert!(m > 0, "block size must be positive");
    [vec![b'1'; m], vec![b'0'; m]]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_one_pattern_per_matching_block() {
        let patterns = vec![b"000".to_vec()];
        let counts = scan_patterns(b"000000000", 3, &patterns);
        assert_eq!(counts, vec![3]);
    }

    #[test]
    fn trailing_remainder_is_discarded() {
        let patterns = vec![b"11".to_vec()];
        // Five bits, two blocks; the final `1` never forms a block.
        let counts = scan_patterns(b"11111", 2, &patterns);
        assert_eq!(counts, vec![2]);
    }

    #[test]
    fn window_never_crosses_block_boundary() {
        // `111` straddles the block seam at index 2..5 but no single block
        // contains it, so nothing matches.
        let patterns = vec![b"111".to_vec()];
        let counts = scan_patterns(b"011100", 3, &patterns);
        assert_eq!(counts, vec![0]);
    }

    #[test]
    fn block_size_larger_than_string_yields_zero_blocks() {
        let patterns = vec![b"0101".to_vec()];
        assert_eq!(scan_patterns(b"01", 4, &patterns), vec![0]);
    }

    #[test]
    fn counts_sum_bounded_by_block_count() {
        let bits = b"110010111010001101001011";
        for m in 1..=6 {
            let patterns = all_patterns(m);
            let counts = scan_patterns(bits, m, &patterns);
            let total: u64 = counts.iter().sum();
            assert!(total <= (bits.len() / m) as u64, "m={m}: {total}");
        }
    }

    #[test]
    fn exhaustive_patterns_match_every_block() {
        // With every pattern of length m requested, each full block matches
        // exactly one of them.
        let bits = b"1100101110100011";
        let counts = scan_patterns(bits, 4, &all_patterns(4));
        let total: u64 = counts.iter().sum();
        assert_eq!(total, 4);
    }

    #[test]
    fn non_binary_characters_never_match() {
        let counts = scan_patterns(b"0x10", 2, &all_patterns(2));
        // Block `0x` matches nothing; block `10` matches one pattern.
        assert_eq!(counts.iter().sum::<u64>(), 1);
    }

    #[test]
    fn all_patterns_enumeration() {
        let patterns = all_patterns(2);
        assert_eq!(
            patterns,
            vec![b"00".to_vec(), b"01".to_vec(), b"10".to_vec(), b"11".to_vec()]
        );
        assert_eq!(all_patterns(4).len(), 16);
    }

    #[test]
    fn alternating_and_uniform_builders() {
        let [a1, a2] = alternating_patterns(6);
        assert_eq!(a1, b"101010".to_vec());
        assert_eq!(a2, b"010101".to_vec());
        let [u1, u2] = uniform_patterns(3);
        assert_eq!(u1, b"111".to_vec());
        assert_eq!(u2, b"000".to_vec());
    }

    #[test]
    #[should_panic(expected = "block size must be positive")]
    fn zero_block_size_is_rejected() {
        scan_patterns(b"1010", 0, &[]);
    }

    #[test]
    #[should_panic(expected = "even block size")]
    fn odd_alternation_block_is_rejected() {
        alternating_patterns(3);
    }
}
