//! Frontier collections for the search engine. Each one stores positions of discovered but not
//! yet expanded cells and decides the order in which they are expanded.
use crate::cell::Cost;
use crate::grid::Position;
use fxhash::{FxBuildHasher, FxHashSet};
use indexmap::IndexMap;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Comparison key handed to a frontier. Smaller keys are expanded first; `primary` is compared
/// before `secondary`. Frontiers that only care about insertion order ignore it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrontierKey {
    pub primary: Cost,
    pub secondary: Cost,
}

impl FrontierKey {
    pub fn new(primary: Cost, secondary: Cost) -> FrontierKey {
        FrontierKey { primary, secondary }
    }
}

pub trait Frontier {
    /// Inserts a position. Pushing a position that is already queued never creates a second
    /// entry; keyed frontiers move it to its new key instead.
    fn push(&mut self, pos: Position, key: FrontierKey);
    fn pop(&mut self) -> Option<Position>;
    fn contains(&self, pos: &Position) -> bool;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// First in, first out. Drives breadth-first search.
#[derive(Clone, Debug, Default)]
pub struct FifoFrontier {
    queue: VecDeque<Position>,
    members: FxHashSet<Position>,
}

impl Frontier for FifoFrontier {
    fn push(&mut self, pos: Position, _: FrontierKey) {
        if self.members.insert(pos) {
            self.queue.push_back(pos);
        }
    }
    fn pop(&mut self) -> Option<Position> {
        let pos = self.queue.pop_front()?;
        self.members.remove(&pos);
        Some(pos)
    }
    fn contains(&self, pos: &Position) -> bool {
        self.members.contains(pos)
    }
    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Last in, first out. Drives depth-first search.
#[derive(Clone, Debug, Default)]
pub struct LifoFrontier {
    stack: Vec<Position>,
    members: FxHashSet<Position>,
}

impl Frontier for LifoFrontier {
    fn push(&mut self, pos: Position, _: FrontierKey) {
        if self.members.insert(pos) {
            self.stack.push(pos);
        }
    }
    fn pop(&mut self) -> Option<Position> {
        let pos = self.stack.pop()?;
        self.members.remove(&pos);
        Some(pos)
    }
    fn contains(&self, pos: &Position) -> bool {
        self.members.contains(pos)
    }
    fn len(&self) -> usize {
        self.stack.len()
    }
}

struct SmallestKeyHolder {
    key: FrontierKey,
    seq: u64,
    pos: Position,
}

impl Eq for SmallestKeyHolder {}

impl PartialEq for SmallestKeyHolder {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.seq == other.seq
    }
}

impl PartialOrd for SmallestKeyHolder {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SmallestKeyHolder {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so that the max-heap yields the smallest key, and among equal keys the
        // earliest insertion.
        other
            .key
            .cmp(&self.key)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Min-priority queue with decrease-key. Every push gets a sequence number; the open map
/// remembers the live (key, sequence) of each queued position and heap entries that no longer
/// match it are dropped when they surface.
#[derive(Default)]
pub struct PriorityFrontier {
    heap: BinaryHeap<SmallestKeyHolder>,
    open: FxIndexMap<Position, (FrontierKey, u64)>,
    next_seq: u64,
}

impl Frontier for PriorityFrontier {
    fn push(&mut self, pos: Position, key: FrontierKey) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.open.insert(pos, (key, seq));
        self.heap.push(SmallestKeyHolder { key, seq, pos });
    }
    fn pop(&mut self) -> Option<Position> {
        while let Some(SmallestKeyHolder { seq, pos, .. }) = self.heap.pop() {
            // A position may sit in the heap several times after being re-keyed. Only the
            // entry matching the open map is live.
            match self.open.get(&pos) {
                Some(&(_, live_seq)) if live_seq == seq => {
                    self.open.swap_remove(&pos);
                    return Some(pos);
                }
                _ => continue,
            }
        }
        None
    }
    fn contains(&self, pos: &Position) -> bool {
        self.open.contains_key(pos)
    }
    fn len(&self) -> usize {
        self.open.len()
    }
}
