//! Property tests for the sampling kernel.

use proptest::prelude::*;
use quiver_sampling::{sample, shuffle, SelectionRng};

fn rng(seed: &str) -> SelectionRng {
    SelectionRng::from_seed(Some(seed))
}

// ── Shuffle preserves the multiset ───────────────────────────────────────

proptest! {
    #[test]
    fn shuffle_is_a_permutation(mut items in prop::collection::vec(0u32..1000, 0..200), seed in "[a-z]{1,12}") {
        let mut original = items.clone();
        shuffle(&mut items, &mut rng(&seed));
        original.sort_unstable();
        items.sort_unstable();
        prop_assert_eq!(original, items);
    }
}

// ── Sample size and distinctness ─────────────────────────────────────────

proptest! {
    #[test]
    fn sample_len_is_min_of_k_and_n(n in 0usize..300, k in 0usize..150, seed in "[a-z]{1,12}") {
        let items: Vec<usize> = (0..n).collect();
        let out = sample(items, k, &mut rng(&seed));
        prop_assert_eq!(out.len(), k.min(n));
    }

    #[test]
    fn sample_is_a_subset_without_duplicates(n in 1usize..300, k in 1usize..150, seed in "[a-z]{1,12}") {
        let items: Vec<usize> = (0..n).collect();
        let mut out = sample(items, k, &mut rng(&seed));
        out.sort_unstable();
        let before = out.len();
        out.dedup();
        prop_assert_eq!(out.len(), before, "duplicates in sample");
        prop_assert!(out.iter().all(|v| *v < n));
    }
}

// ── Determinism under a fixed seed ───────────────────────────────────────

proptest! {
    #[test]
    fn same_seed_same_sample(n in 0usize..300, k in 0usize..150, seed in "[a-z]{1,12}") {
        let a = sample((0..n).collect::<Vec<_>>(), k, &mut rng(&seed));
        let b = sample((0..n).collect::<Vec<_>>(), k, &mut rng(&seed));
        prop_assert_eq!(a, b);
    }
}
