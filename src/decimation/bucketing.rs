use std::ops::Range;

/// Partitions the interior indices `1..len-1` into `threshold - 2` contiguous
/// buckets of approximate size `(len-2)/(threshold-2)`.
///
/// Boundaries use per-iteration floor arithmetic, so adjacent buckets can
/// differ by one element. The first and last indices are never included; they
/// are fixed anchors of the reduction. Returns no buckets when the input is
/// small enough to keep whole or the threshold has no interior structure.
pub fn calculate_index_buckets(len: usize, threshold: usize) -> Vec<Range<usize>> {
    if threshold < 3 || len <= threshold {
        return Vec::new();
    }

    let bucket_count = threshold - 2;
    let every = (len - 2) as f64 / bucket_count as f64;

    let mut buckets = Vec::with_capacity(bucket_count);
    for i in 0..bucket_count {
        let start = (i as f64 * every).floor() as usize + 1;
        // Clamp against float rounding on the last boundary.
        let end = (((i + 1) as f64 * every).floor() as usize + 1).min(len - 1);
        let start = start.min(end);
        buckets.push(start..end);
    }
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_interior_without_anchors() {
        let buckets = calculate_index_buckets(1000, 100);
        assert_eq!(buckets.len(), 98);
        assert_eq!(buckets[0].start, 1);
        // The last boundary may land one short of 999 from float rounding.
        assert!(buckets[97].end >= 998 && buckets[97].end <= 999);

        // Contiguous, no overlap
        for pair in buckets.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
    }

    #[test]
    fn degenerate_inputs_yield_no_buckets() {
        assert!(calculate_index_buckets(10, 2).is_empty());
        assert!(calculate_index_buckets(10, 0).is_empty());
        assert!(calculate_index_buckets(50, 100).is_empty());
        assert!(calculate_index_buckets(100, 100).is_empty());
    }

    #[test]
    fn exact_bucket_count_at_minimum_threshold() {
        let buckets = calculate_index_buckets(10, 3);
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0], 1..9);
    }
}
