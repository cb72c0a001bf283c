//! Trigger-contract tests for the aggregate index.

use quiver_core::constants::TAXONOMY_DEPTH;
use quiver_core::ids::{GroupId, QuestionId, SubthemeId, TenantId, ThemeId};
use quiver_core::scope::Scope;
use quiver_core::taxonomy::Question;
use quiver_core::traits::IOrderIndex;
use quiver_index::AggregateIndex;

fn question(tenant: &str, id: &str, theme: &str, subtheme: Option<&str>, group: Option<&str>) -> Question {
    Question {
        id: QuestionId::from(id),
        tenant: TenantId::from(tenant),
        theme: ThemeId::from(theme),
        subtheme: subtheme.map(SubthemeId::from),
        group: group.map(GroupId::from),
        prompt: format!("prompt for {id}"),
        created_at: chrono::Utc::now(),
    }
}

fn count(index: &AggregateIndex, tenant: &str, scope: &Scope) -> u64 {
    index.count(&TenantId::from(tenant), scope).unwrap()
}

#[test]
fn insert_populates_every_matching_scope() {
    let index = AggregateIndex::new();
    index.question_inserted(&question("t1", "q1", "anatomy", Some("heart"), Some("valves")));
    index.question_inserted(&question("t1", "q2", "anatomy", Some("heart"), None));
    index.question_inserted(&question("t1", "q3", "anatomy", None, None));

    assert_eq!(count(&index, "t1", &Scope::Global), 3);
    assert_eq!(count(&index, "t1", &Scope::Theme(ThemeId::from("anatomy"))), 3);
    assert_eq!(
        count(&index, "t1", &Scope::Subtheme(SubthemeId::from("heart"))),
        2
    );
    assert_eq!(count(&index, "t1", &Scope::Group(GroupId::from("valves"))), 1);
}

#[test]
fn fully_assigned_question_lands_in_one_scope_per_level() {
    let index = AggregateIndex::new();
    index.question_inserted(&question("t1", "q1", "anatomy", Some("heart"), Some("valves")));

    let scopes = [
        Scope::Global,
        Scope::Theme(ThemeId::from("anatomy")),
        Scope::Subtheme(SubthemeId::from("heart")),
        Scope::Group(GroupId::from("valves")),
    ];
    assert_eq!(scopes.len(), 1 + TAXONOMY_DEPTH);
    for scope in &scopes {
        assert_eq!(count(&index, "t1", scope), 1);
    }
}

#[test]
fn tenants_are_isolated() {
    let index = AggregateIndex::new();
    index.question_inserted(&question("t1", "q1", "anatomy", None, None));
    index.question_inserted(&question("t2", "q1", "anatomy", None, None));

    assert_eq!(count(&index, "t1", &Scope::Global), 1);
    assert_eq!(count(&index, "t2", &Scope::Global), 1);
    assert_eq!(count(&index, "t3", &Scope::Global), 0);
}

#[test]
fn triggers_are_idempotent() {
    let index = AggregateIndex::new();
    let q = question("t1", "q1", "anatomy", Some("heart"), None);

    // A retried insert after a partial failure must not double count.
    index.question_inserted(&q);
    index.question_inserted(&q);
    assert_eq!(count(&index, "t1", &Scope::Global), 1);

    // A retried delete, or a delete against a never-seen scope, is a no-op.
    index.question_removed(&q);
    index.question_removed(&q);
    assert_eq!(count(&index, "t1", &Scope::Global), 0);
    index.question_removed(&question("t9", "qx", "ghost", None, None));
}

#[test]
fn replace_moves_between_scopes() {
    let index = AggregateIndex::new();
    let old = question("t1", "q1", "anatomy", Some("heart"), Some("valves"));
    let new = question("t1", "q1", "anatomy", Some("lungs"), None);

    index.question_inserted(&old);
    index.question_replaced(&old, &new);

    assert_eq!(count(&index, "t1", &Scope::Global), 1);
    assert_eq!(
        count(&index, "t1", &Scope::Subtheme(SubthemeId::from("heart"))),
        0
    );
    assert_eq!(count(&index, "t1", &Scope::Group(GroupId::from("valves"))), 0);
    assert_eq!(
        count(&index, "t1", &Scope::Subtheme(SubthemeId::from("lungs"))),
        1
    );
}

#[test]
fn rank_access_covers_exactly_the_scope() {
    let index = AggregateIndex::new();
    for i in 0..20 {
        let sub = if i % 2 == 0 { Some("even") } else { None };
        index.question_inserted(&question("t1", &format!("q{i:02}"), "math", sub, None));
    }

    let tenant = TenantId::from("t1");
    let scope = Scope::Subtheme(SubthemeId::from("even"));
    let n = index.count(&tenant, &scope).unwrap();
    assert_eq!(n, 10);

    let mut seen = Vec::new();
    for rank in 0..n {
        let id = index.element_at_rank(&tenant, &scope, rank).unwrap().unwrap();
        seen.push(id);
    }
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), 10);
    assert!(index.element_at_rank(&tenant, &scope, n).unwrap().is_none());
}
