//! Properties the engine must hold for any bank size, request size, and
//! seed, exercised over the in-memory fixture bank.

use std::collections::BTreeSet;

use proptest::prelude::*;

use quiver_core::criteria::{SelectionCriteria, SelectionMode};
use quiver_core::ids::{QuestionId, TenantId, UserId};
use quiver_selection::{SelectionEngine, SelectionRequest};
use test_fixtures::FixtureBank;

fn bank_with(n: usize) -> (FixtureBank, Vec<QuestionId>) {
    let mut bank = FixtureBank::new();
    bank.add_subtheme("t1", "circulation", "anatomy");
    let ids = (0..n)
        .map(|i| {
            let subtheme = (i % 2 == 0).then_some("circulation");
            bank.add_question("t1", "anatomy", subtheme, None)
        })
        .collect();
    (bank, ids)
}

fn run(
    bank: &FixtureBank,
    seed: &str,
    max_questions: usize,
) -> Result<Vec<QuestionId>, quiver_core::errors::SelectionError> {
    let engine = SelectionEngine::new(bank, bank, bank, &bank.index);
    engine.select(&SelectionRequest {
        tenant: TenantId::from("t1"),
        user: UserId::from("u1"),
        mode: SelectionMode::All,
        criteria: SelectionCriteria::new(),
        max_questions,
        seed: Some(seed),
        parent_index: None,
    })
}

proptest! {
    #[test]
    fn yields_min_of_request_and_bank(n in 1usize..60, k in 1usize..200, seed in "[a-z0-9]{1,12}") {
        let (bank, _) = bank_with(n);
        let ids = run(&bank, &seed, k).unwrap();
        prop_assert_eq!(ids.len(), k.min(120).min(n));
    }

    #[test]
    fn never_repeats_an_id(n in 1usize..60, k in 1usize..200, seed in "[a-z0-9]{1,12}") {
        let (bank, _) = bank_with(n);
        let ids = run(&bank, &seed, k).unwrap();
        let distinct: BTreeSet<_> = ids.iter().collect();
        prop_assert_eq!(distinct.len(), ids.len());
    }

    #[test]
    fn only_returns_bank_members(n in 1usize..60, k in 1usize..200, seed in "[a-z0-9]{1,12}") {
        let (bank, inserted) = bank_with(n);
        let members: BTreeSet<_> = inserted.into_iter().collect();
        let ids = run(&bank, &seed, k).unwrap();
        prop_assert!(ids.iter().all(|id| members.contains(id)));
    }

    #[test]
    fn seed_fixes_the_whole_selection(n in 1usize..60, k in 1usize..200, seed in "[a-z0-9]{1,12}") {
        let (bank, _) = bank_with(n);
        let first = run(&bank, &seed, k).unwrap();
        let second = run(&bank, &seed, k).unwrap();
        prop_assert_eq!(first, second);
    }
}
