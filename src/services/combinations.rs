//! Pairwise combination helpers shared by the insight and innovation stages.
//!
//! Both stages emit one item per unordered pair, so output grows as
//! `n * (n - 1) / 2`. Nothing here caps that growth.

/// Yields every unordered pair `(items[i], items[j])` with `i < j`, in order.
pub fn pairs<T>(items: &[T]) -> impl Iterator<Item = (&T, &T)> {
    items
        .iter()
        .enumerate()
        .flat_map(move |(i, left)| items[i + 1..].iter().map(move |right| (left, right)))
}

/// Number of unordered pairs over `n` items.
#[must_use]
pub const fn pair_count(n: usize) -> usize {
    if n < 2 {
        0
    } else {
        n.saturating_mul(n - 1) / 2
    }
}

/// Logs a warning when `n` items are about to be paired and `n` exceeds `threshold`.
pub fn warn_if_quadratic(stage: &'static str, n: usize, threshold: usize) {
    if n > threshold {
        tracing::warn!(
            stage,
            items = n,
            pairs = pair_count(n),
            threshold,
            "Pairwise expansion over a large input"
        );
    }
}
