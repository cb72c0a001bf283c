//! # quiver-selection
//!
//! The selection engine: resolves taxonomy override semantics, dispatches
//! one of four retrieval strategies, and downsamples the candidate pool to
//! the requested count.
//!
//! Request flow: `SelectionRequest` → resolver (once) → strategy
//! (mode-specific) → candidate ID pool → sampling kernel → final ID list.

pub mod engine;
pub mod resolver;
mod strategies;

pub use engine::{SelectionEngine, SelectionRequest};
pub use resolver::{check_hierarchy_match, resolve, EffectiveHierarchy};
