//! # quiver-sampling
//!
//! The sampling kernel: a seeded (or OS-entropy) generator, Fisher–Yates
//! full and partial shuffles, reservoir sampling, and the random-rank draw
//! loop over an order-statistics scope.
//!
//! Everything here is deterministic under a fixed seed: the same seed and
//! the same underlying data produce byte-identical output sequences.

mod draw;
mod rng;
mod shuffle;

pub use draw::draw_from_scope;
pub use rng::SelectionRng;
pub use shuffle::{sample, shuffle};
