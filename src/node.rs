use crate::symbol::{SeqIdSet, Symbol};
use smallvec::SmallVec;

pub type NodeId = usize;

/// Outgoing-edge table for one node, keyed by the first symbol of the edge
/// label.
///
/// Per spec.md §9, branching factor here is expected to be small (the
/// symbol alphabet is open-ended, so a byte-rank-indexed array like the
/// teacher's doesn't generalize); a sorted small-vector keeps the common
/// case allocation-free while staying deterministic to iterate.
#[derive(Debug, Clone, Default)]
pub struct ChildMap {
    entries: SmallVec<[(Symbol, NodeId); 4]>,
}

impl ChildMap {
    pub fn new() -> Self {
        ChildMap { entries: SmallVec::new() }
    }

    pub fn get(&self, symbol: Symbol) -> Option<NodeId> {
        self.entries
            .binary_search_by_key(&symbol, |&(s, _)| s)
            .ok()
            .map(|idx| self.entries[idx].1)
    }

    pub fn insert(&mut self, symbol: Symbol, child: NodeId) {
        match self.entries.binary_search_by_key(&symbol, |&(s, _)| s) {
            Ok(idx) => self.entries[idx].1 = child,
            Err(idx) => self.entries.insert(idx, (symbol, child)),
        }
    }

    /// Children in deterministic (symbol-sorted) order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, NodeId)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A node in the suffix tree arena.
///
/// A node is a leaf iff `transitions` is empty — spec.md §9 asks for this
/// polymorphism to be represented by a single type rather than separate
/// leaf/internal structs, with `idx`/`depth` sufficient to materialize the
/// edge label in both cases.
#[derive(Debug, Clone)]
pub struct Node {
    /// Position in `W` the edge leading to this node was cut from; combined
    /// with `depth` this reconstructs the edge label `W[idx+parent.depth
    /// .. idx+depth]`. For a leaf, `idx` is also the suffix's starting
    /// position.
    pub idx: usize,
    /// Total label length from the root to this node.
    pub depth: usize,
    /// Owning node; the root is its own parent.
    pub parent: NodeId,
    pub transitions: ChildMap,
    /// Internal-node-only back reference to the longest proper suffix of
    /// this node's label. Absent transiently while the builder is still
    /// attaching new internal nodes.
    pub suffix_link: Option<NodeId>,
    /// Filled in once, after a generalized build, by
    /// `SuffixTree::label_generalized`.
    pub generalized_idxs: SeqIdSet,
}

impl Node {
    pub fn root() -> Self {
        Node {
            idx: 0,
            depth: 0,
            parent: 0,
            transitions: ChildMap::new(),
            suffix_link: None,
            generalized_idxs: SeqIdSet::empty(),
        }
    }

    pub fn new(idx: usize, depth: usize, parent: NodeId) -> Self {
        Node {
            idx,
            depth,
            parent,
            transitions: ChildMap::new(),
            suffix_link: None,
            generalized_idxs: SeqIdSet::empty(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.transitions.is_empty()
    }
}
