//! Shuffling and uniform k-subset selection.

use crate::rng::SelectionRng;

/// In-place Fisher–Yates shuffle. O(n).
pub fn shuffle<T>(items: &mut [T], rng: &mut SelectionRng) {
    for i in (1..items.len()).rev() {
        let j = rng.below(i + 1);
        items.swap(i, j);
    }
}

/// Uniformly random k-subset of `items`, in random order.
///
/// If the collection already fits the request (`n <= k`), this is a full
/// shuffle of everything — "all of it, randomly ordered". Otherwise it picks
/// reservoir sampling when `k` is small relative to `n` (no full permutation
/// materialized) and a partial Fisher–Yates otherwise. Both branches are
/// unbiased with respect to input order.
pub fn sample<T>(mut items: Vec<T>, k: usize, rng: &mut SelectionRng) -> Vec<T> {
    let n = items.len();
    if n <= k {
        shuffle(&mut items, rng);
        return items;
    }
    if k * 10 < n {
        reservoir(items, k, rng)
    } else {
        partial_fisher_yates(items, k, rng)
    }
}

/// Algorithm R. O(n) time, O(k) extra output.
fn reservoir<T>(items: Vec<T>, k: usize, rng: &mut SelectionRng) -> Vec<T> {
    let mut kept = Vec::with_capacity(k);
    for (i, item) in items.into_iter().enumerate() {
        if i < k {
            kept.push(item);
        } else {
            let j = rng.below(i + 1);
            if j < k {
                kept[j] = item;
            }
        }
    }
    // The reservoir is a uniform subset but its order correlates with input
    // order, so randomize it before returning.
    shuffle(&mut kept, rng);
    kept
}

/// Fisher–Yates stopped after the first `k` positions.
fn partial_fisher_yates<T>(mut items: Vec<T>, k: usize, rng: &mut SelectionRng) -> Vec<T> {
    let n = items.len();
    for i in 0..k {
        let j = i + rng.below(n - i);
        items.swap(i, j);
    }
    items.truncate(k);
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rng(seed: &str) -> SelectionRng {
        SelectionRng::from_seed(Some(seed))
    }

    #[test]
    fn sample_of_undersized_list_is_a_permutation() {
        let items: Vec<u32> = (0..7).collect();
        let mut out = sample(items, 10, &mut rng("perm"));
        assert_eq!(out.len(), 7);
        out.sort_unstable();
        assert_eq!(out, (0..7).collect::<Vec<_>>());
    }

    #[test]
    fn sample_returns_exactly_k_distinct_items() {
        // Exercise both branches: k*10 < n (reservoir) and the partial shuffle.
        for (n, k) in [(500usize, 10usize), (100, 40)] {
            let items: Vec<usize> = (0..n).collect();
            let mut out = sample(items, k, &mut rng("subset"));
            assert_eq!(out.len(), k);
            out.sort_unstable();
            out.dedup();
            assert_eq!(out.len(), k, "sample produced duplicates");
        }
    }

    #[test]
    fn sampling_is_deterministic_under_a_seed() {
        let a = sample((0..200).collect::<Vec<_>>(), 15, &mut rng("det"));
        let b = sample((0..200).collect::<Vec<_>>(), 15, &mut rng("det"));
        assert_eq!(a, b);
    }

    #[test]
    fn every_element_can_be_selected() {
        // With enough draws each element of a small pool should show up;
        // catches off-by-one bias at either end of the range.
        let mut seen = [false; 10];
        for round in 0..200 {
            let picked = sample(
                (0..10).collect::<Vec<usize>>(),
                3,
                &mut rng(&format!("bias-{round}")),
            );
            for p in picked {
                seen[p] = true;
            }
        }
        assert!(seen.iter().all(|s| *s));
    }
}
