//! Benchmark workloads for the tephra arena allocator.
//!
//! Provides deterministic request patterns shared by the criterion
//! benchmarks so that arena and heap baselines measure identical work.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

/// A deterministic mixed-size request pattern: sizes cycle through
/// 8, 16, ..., 80 bytes, matching a typical small-object scratch workload.
pub fn mixed_request_sizes(count: usize) -> Vec<usize> {
    (0..count).map(|i| (i % 10 + 1) * 8).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_cycle_through_the_expected_range() {
        let sizes = mixed_request_sizes(20);
        assert_eq!(sizes[0], 8);
        assert_eq!(sizes[9], 80);
        assert_eq!(sizes[10], 8);
        assert!(sizes.iter().all(|&s| s % 8 == 0 && s <= 80));
    }
}
