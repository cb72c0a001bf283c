//! Property tests for the order-statistics treap.

use std::collections::BTreeSet;

use proptest::prelude::*;
use quiver_core::ids::QuestionId;
use quiver_index::OrderStatTreap;

fn arb_keys() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z0-9]{1,8}", 0..200)
}

proptest! {
    // ── Count matches the distinct key set ───────────────────────────────
    #[test]
    fn len_equals_distinct_inserted(keys in arb_keys()) {
        let mut treap = OrderStatTreap::new();
        for k in &keys {
            treap.insert(QuestionId::from(k.as_str()));
        }
        let distinct: BTreeSet<&String> = keys.iter().collect();
        prop_assert_eq!(treap.len(), distinct.len());
    }

    // ── Rank order is ID order, gap-free ─────────────────────────────────
    #[test]
    fn ranks_enumerate_sorted_distinct_keys(keys in arb_keys()) {
        let mut treap = OrderStatTreap::new();
        for k in &keys {
            treap.insert(QuestionId::from(k.as_str()));
        }
        let expected: Vec<QuestionId> = keys
            .iter()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(|k| QuestionId::from(k.as_str()))
            .collect();
        let actual: Vec<QuestionId> = (0..treap.len())
            .map(|r| treap.at_rank(r).unwrap().clone())
            .collect();
        prop_assert_eq!(actual, expected);
        prop_assert!(treap.at_rank(treap.len()).is_none());
    }

    // ── Interleaved removes keep the structure consistent ────────────────
    #[test]
    fn removes_track_set_semantics(keys in arb_keys(), removals in arb_keys()) {
        let mut treap = OrderStatTreap::new();
        let mut model: BTreeSet<String> = BTreeSet::new();
        for k in &keys {
            treap.insert(QuestionId::from(k.as_str()));
            model.insert(k.clone());
        }
        for k in &removals {
            let expected = model.remove(k);
            let actual = treap.remove(&QuestionId::from(k.as_str()));
            prop_assert_eq!(actual, expected);
        }
        prop_assert_eq!(treap.len(), model.len());
        for (rank, k) in model.iter().enumerate() {
            prop_assert_eq!(treap.at_rank(rank).unwrap().as_str(), k.as_str());
        }
    }
}
