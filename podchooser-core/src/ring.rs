//! Consistent hash ring.
//!
//! Each node owns `points_per_node` virtual positions on a `u64` ring. A key
//! belongs to the first position at or after its own hash, wrapping around
//! at the end. Adding or removing one node therefore only moves the keys
//! that land on that node's positions; every other key stays put.
//!
//! The ring is a pure function of (nodes, points per node). It is cheap to
//! build and is rebuilt for every selection rather than kept in sync with
//! a changing pod set.

use ahash::RandomState;
use std::collections::BTreeMap;

pub const DEFAULT_POINTS_PER_NODE: usize = 128;

/// Fixed seeds: placement must not change between calls or processes.
static HASHER: RandomState = RandomState::with_seeds(0x70, 0x6f, 0x64, 0x73);

#[derive(Debug, Clone)]
pub struct HashRing<'a> {
    nodes: Vec<&'a str>,
    positions: BTreeMap<u64, usize>,
}

impl<'a> HashRing<'a> {
    pub fn new<I>(nodes: I, points_per_node: usize) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let nodes: Vec<&'a str> = nodes.into_iter().collect();
        let mut positions = BTreeMap::new();

        for (idx, node) in nodes.iter().enumerate() {
            for point in 0..points_per_node {
                // First node to claim a position keeps it.
                positions
                    .entry(hash_position(node, point))
                    .or_insert(idx);
            }
        }

        Self { nodes, positions }
    }

    /// Node owning `key`, or `None` when the ring has no positions.
    pub fn lookup(&self, key: &str) -> Option<&'a str> {
        let hash = HASHER.hash_one(key);

        let (_, &idx) = self
            .positions
            .range(hash..)
            .next()
            .or_else(|| self.positions.iter().next())?;

        self.nodes.get(idx).copied()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn position_count(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

fn hash_position(node: &str, point: usize) -> u64 {
    HASHER.hash_one(format!("{node}-{point}"))
}
