//! Order-statistics treap over question IDs.
//!
//! A treap keyed by `QuestionId` with subtree sizes: `insert`, `remove`,
//! and `at_rank` are all O(log n) expected. Priorities are derived by
//! hashing the key with a fixed-key SipHash, so the shape — and therefore
//! every rank — is a pure function of the key set. That determinism is what
//! makes seeded selection reproducible across process restarts.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use quiver_core::ids::QuestionId;

#[derive(Debug, Clone)]
struct Node {
    key: QuestionId,
    priority: u64,
    size: usize,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

impl Node {
    fn leaf(key: QuestionId, priority: u64) -> Box<Node> {
        Box::new(Node {
            key,
            priority,
            size: 1,
            left: None,
            right: None,
        })
    }

    fn update_size(&mut self) {
        self.size = 1 + size(&self.left) + size(&self.right);
    }
}

fn size(node: &Option<Box<Node>>) -> usize {
    node.as_ref().map_or(0, |n| n.size)
}

fn priority_of(key: &QuestionId) -> u64 {
    // DefaultHasher::new() uses fixed keys, unlike HashMap's RandomState,
    // so priorities are stable across runs.
    let mut hasher = DefaultHasher::new();
    key.hash(&mut hasher);
    hasher.finish()
}

/// Merge two treaps where every key in `a` is less than every key in `b`.
fn merge(a: Option<Box<Node>>, b: Option<Box<Node>>) -> Option<Box<Node>> {
    match (a, b) {
        (None, x) | (x, None) => x,
        (Some(mut x), Some(mut y)) => {
            if x.priority >= y.priority {
                x.right = merge(x.right.take(), Some(y));
                x.update_size();
                Some(x)
            } else {
                y.left = merge(Some(x), y.left.take());
                y.update_size();
                Some(y)
            }
        }
    }
}

/// Split into (keys < `key`, keys >= `key`).
fn split(node: Option<Box<Node>>, key: &QuestionId) -> (Option<Box<Node>>, Option<Box<Node>>) {
    match node {
        None => (None, None),
        Some(mut n) => {
            if n.key < *key {
                let (mid, right) = split(n.right.take(), key);
                n.right = mid;
                n.update_size();
                (Some(n), right)
            } else {
                let (left, mid) = split(n.left.take(), key);
                n.left = mid;
                n.update_size();
                (left, Some(n))
            }
        }
    }
}

/// A set of question IDs with O(log n) rank access.
#[derive(Debug, Clone, Default)]
pub struct OrderStatTreap {
    root: Option<Box<Node>>,
}

impl OrderStatTreap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        size(&self.root)
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn contains(&self, key: &QuestionId) -> bool {
        let mut cur = &self.root;
        while let Some(n) = cur {
            match key.cmp(&n.key) {
                std::cmp::Ordering::Equal => return true,
                std::cmp::Ordering::Less => cur = &n.left,
                std::cmp::Ordering::Greater => cur = &n.right,
            }
        }
        false
    }

    /// Insert a key. Returns `false` (and changes nothing) if it was already
    /// present — set semantics, which is what makes the write-side triggers
    /// idempotent.
    pub fn insert(&mut self, key: QuestionId) -> bool {
        if self.contains(&key) {
            return false;
        }
        let priority = priority_of(&key);
        let (left, right) = split(self.root.take(), &key);
        let leaf = Node::leaf(key, priority);
        self.root = merge(merge(left, Some(leaf)), right);
        true
    }

    /// Remove a key. Returns `false` if it was absent.
    pub fn remove(&mut self, key: &QuestionId) -> bool {
        let (root, removed) = remove_rec(self.root.take(), key);
        self.root = root;
        removed
    }

    /// The key at 0-based `rank` in ID order, or `None` when out of range.
    pub fn at_rank(&self, rank: usize) -> Option<&QuestionId> {
        let mut cur = self.root.as_deref()?;
        let mut rank = rank;
        if rank >= cur.size {
            return None;
        }
        loop {
            let left = size(&cur.left);
            if rank < left {
                cur = cur.left.as_deref()?;
            } else if rank == left {
                return Some(&cur.key);
            } else {
                rank -= left + 1;
                cur = cur.right.as_deref()?;
            }
        }
    }
}

fn remove_rec(node: Option<Box<Node>>, key: &QuestionId) -> (Option<Box<Node>>, bool) {
    match node {
        None => (None, false),
        Some(mut n) => match key.cmp(&n.key) {
            std::cmp::Ordering::Equal => (merge(n.left.take(), n.right.take()), true),
            std::cmp::Ordering::Less => {
                let (left, removed) = remove_rec(n.left.take(), key);
                n.left = left;
                n.update_size();
                (Some(n), removed)
            }
            std::cmp::Ordering::Greater => {
                let (right, removed) = remove_rec(n.right.take(), key);
                n.right = right;
                n.update_size();
                (Some(n), removed)
            }
        },
    }
}
