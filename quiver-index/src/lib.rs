//! # quiver-index
//!
//! In-process implementation of the order-statistics aggregate store the
//! selection engine consumes through `IOrderIndex`.
//!
//! One order-statistics treap per (tenant, scope) supports `count` and
//! `element_at_rank` in O(log n) expected, and is kept in sync by the
//! idempotent write-side trigger contract (`question_inserted` /
//! `question_removed` / `question_replaced`) fired on every question
//! mutation.

mod aggregate;
mod treap;

pub use aggregate::AggregateIndex;
pub use treap::OrderStatTreap;
