//! Splits an iteration domain into contiguous per-worker ranges.

use std::ops::Range;

/// Half-open range of domain indices owned by one worker.
pub type WorkRange = Range<usize>;

/// Returns the range worker `worker` of `workers` owns in `[0, domain)`.
///
/// `start = t·D/T`, and the last worker always ends at `D`, so the ranges
/// tile the domain exactly. When `workers > domain` some ranges are empty.
pub fn work_range(domain: usize, workers: usize, worker: usize) -> WorkRange {
    debug_assert!(workers >= 1);
    debug_assert!(worker < workers);

    let start = split_point(domain, workers, worker);
    let end = if worker == workers - 1 {
        domain
    } else {
        split_point(domain, workers, worker + 1)
    };
    start..end
}

/// All `workers` ranges in worker order.
pub fn plan(domain: usize, workers: usize) -> Vec<WorkRange> {
    (0..workers).map(|t| work_range(domain, workers, t)).collect()
}

// t·D can exceed usize for large domains; widen before dividing.
fn split_point(domain: usize, workers: usize, worker: usize) -> usize {
    (worker as u128 * domain as u128 / workers as u128) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_tiles(domain: usize, workers: usize) {
        let ranges = plan(domain, workers);
        assert_eq!(ranges.len(), workers);

        let mut next = 0;
        for range in &ranges {
            assert_eq!(
                range.start, next,
                "gap or overlap at D={domain} T={workers}"
            );
            assert!(range.start <= range.end);
            next = range.end;
        }
        assert_eq!(next, domain);
    }

    #[test]
    fn test_ranges_tile_domain() {
        for domain in 0..70 {
            for workers in 1..12 {
                assert_tiles(domain, workers);
            }
        }
    }

    #[test]
    fn test_large_domain() {
        assert_tiles(usize::MAX / 3, 7);
    }

    #[test]
    fn test_more_workers_than_items() {
        let ranges = plan(3, 8);
        let busy: usize = ranges.iter().filter(|r| !r.is_empty()).count();
        assert_eq!(busy, 3);
        assert_eq!(ranges.last(), Some(&(2..3)));
    }

    #[test]
    fn test_even_split() {
        assert_eq!(plan(8, 4), vec![0..2, 2..4, 4..6, 6..8]);
        assert_eq!(plan(10, 3), vec![0..3, 3..6, 6..10]);
    }

    #[test]
    fn test_empty_domain() {
        assert!(plan(0, 5).iter().all(|r| r.is_empty()));
    }
}
