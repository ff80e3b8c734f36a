#![forbid(unsafe_code)]

//! Fairness ordering for rounding-remainder distribution.

/// Permutation of `[0, n)` alternating between the two ends.
///
/// Produces `0, n-1, 1, n-2, 2, n-3, …`, ending with the middle element when
/// `n` is odd. Used to pick which spacer gaps absorb leftover pixels, so
/// rounding error spreads from both ends inward instead of piling up on one
/// side.
///
/// ```
/// use slate_layout::index_order::alternating;
///
/// assert_eq!(alternating(4), [0, 3, 1, 2]);
/// assert_eq!(alternating(7), [0, 6, 1, 5, 2, 4, 3]);
/// ```
pub fn alternating(n: usize) -> Vec<usize> {
    let mut out = Vec::with_capacity(n);
    let (mut lo, mut hi) = (0, n);
    while lo < hi {
        out.push(lo);
        lo += 1;
        if lo < hi {
            hi -= 1;
            out.push(hi);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::alternating;

    #[test]
    fn degenerate_counts() {
        assert_eq!(alternating(0), Vec::<usize>::new());
        assert_eq!(alternating(1), vec![0]);
        assert_eq!(alternating(2), vec![0, 1]);
    }

    #[test]
    fn even_count_interleaves_pairs() {
        assert_eq!(alternating(4), vec![0, 3, 1, 2]);
        assert_eq!(alternating(6), vec![0, 5, 1, 4, 2, 3]);
    }

    #[test]
    fn odd_count_ends_with_middle() {
        assert_eq!(alternating(3), vec![0, 2, 1]);
        assert_eq!(alternating(7), vec![0, 6, 1, 5, 2, 4, 3]);
    }

    #[test]
    fn is_a_permutation() {
        for n in 0..64 {
            let mut order = alternating(n);
            order.sort_unstable();
            assert!(order.iter().copied().eq(0..n), "not a permutation at n={n}");
        }
    }
}
