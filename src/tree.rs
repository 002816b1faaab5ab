use crate::assembler::{self, Assembled};
use crate::builder;
use crate::error::Result;
use crate::node::{Node, NodeId};
use crate::symbol::{SeqIdSet, Symbol};

const ROOT: NodeId = 0;

/// A generalized suffix tree over one or more sequences of non-negative
/// integers, built once and read-only thereafter (spec.md §3, §5).
///
/// Construction is `O(|W|)` via McCreight's algorithm (see
/// [`crate::builder`]); every query method here is a deterministic function
/// of the tree and its argument, safe to call concurrently from any number
/// of readers once `build` has returned.
#[derive(Debug)]
pub struct SuffixTree {
    nodes: Vec<Node>,
    buffer: Vec<Symbol>,
    word_starts: Vec<usize>,
    begins: Vec<usize>,
    ends: Vec<usize>,
}

impl SuffixTree {
    /// Builds a generalized suffix tree over `sequences`. A single sequence
    /// is just the `sequences.len() == 1` case (spec.md §4.1).
    ///
    /// Symbols must be non-negative — this is a caller precondition (spec.md
    /// §6: "callers encoding text as integers must map characters to
    /// non-negative values"), not a validated, `Result`-returning check; a
    /// negative symbol collides with the terminator encoding and produces
    /// an incorrect tree rather than an error.
    pub fn build(sequences: &[Vec<i64>]) -> Result<Self> {
        let Assembled { buffer, word_starts, begins, ends } = assembler::assemble(sequences)?;
        let nodes = builder::build_mccreight(&buffer);

        let mut tree = SuffixTree { nodes, buffer, word_starts, begins, ends };
        tree.label_generalized();
        Ok(tree)
    }

    /// Convenience constructor for the single-sequence case.
    pub fn from_sequence(sequence: &[i64]) -> Result<Self> {
        Self::build(&[sequence.to_vec()])
    }

    pub fn sequence_count(&self) -> usize {
        self.begins.len()
    }

    /// Returns the original (terminator-free) span of sequence `seq_id`.
    pub fn sequence_span(&self, seq_id: usize) -> (usize, usize) {
        (self.begins[seq_id], self.ends[seq_id])
    }

    /// Resolves a position `n` in the assembled buffer to
    /// `(sequence_index, offset_within_sequence)`. Binary search over
    /// `begins`, per spec.md §4.4's `getSeqId`; positions outside any
    /// sequence's span (falling on a terminator) are the caller's
    /// responsibility to avoid, as spec.md §6 notes.
    pub fn seq_id(&self, n: usize) -> (usize, usize) {
        let idx = self.begins.partition_point(|&b| b <= n).saturating_sub(1);
        (idx, n - self.begins[idx])
    }

    fn word_seq_of(&self, idx: usize) -> usize {
        self.word_starts.partition_point(|&ws| ws <= idx).saturating_sub(1)
    }

    /// Returns a starting position of `y` in the assembled buffer, or
    /// `None` if `y` doesn't occur. An empty `y` matches at position `0`.
    pub fn find(&self, y: &[i64]) -> Option<usize> {
        self.find_node(y).map(|node| self.nodes[node].idx)
    }

    /// Returns every starting position of `y`, in a deterministic
    /// (symbol-sorted child) order. Empty when `y` doesn't occur.
    pub fn find_all(&self, y: &[i64]) -> Vec<usize> {
        match self.find_node(y) {
            Some(node) => self.leaves_under(node).into_iter().map(|leaf| self.nodes[leaf].idx).collect(),
            None => Vec::new(),
        }
    }

    pub fn contains(&self, y: &[i64]) -> bool {
        self.find_node(y).is_some()
    }

    /// Walks from the root matching `y` symbol by symbol, returning the
    /// deepest node reached once `y` is fully consumed (spec.md §4.3 `find`).
    /// Every node's `idx` is, by the suffix-tree invariant, the start of a
    /// suffix whose prefix equals the full root-to-node path label — so the
    /// returned node's `idx` is always a valid occurrence of `y`.
    fn find_node(&self, y: &[i64]) -> Option<NodeId> {
        let mut current = ROOT;
        let mut consumed = 0usize;

        loop {
            if consumed == y.len() {
                return Some(current);
            }

            let next = Symbol::User(y[consumed]);
            let child = self.nodes[current].transitions.get(next)?;

            let current_depth = self.nodes[current].depth;
            let child_idx = self.nodes[child].idx;
            let label_start = child_idx + current_depth;
            let label_len = self.nodes[child].depth - current_depth;

            let remaining = y.len() - consumed;
            let take = remaining.min(label_len);

            for k in 0..take {
                if self.buffer[label_start + k] != Symbol::User(y[consumed + k]) {
                    return None;
                }
            }

            consumed += take;
            if consumed == y.len() {
                return Some(child);
            }
            current = child;
        }
    }

    /// Every leaf in `node`'s subtree (or `node` itself if it's a leaf),
    /// via an explicit stack rather than recursion (spec.md §9).
    fn leaves_under(&self, node: NodeId) -> Vec<NodeId> {
        let mut leaves = Vec::new();
        let mut stack = vec![node];

        while let Some(current) = stack.pop() {
            if self.nodes[current].is_leaf() {
                leaves.push(current);
            } else {
                for (_, child) in self.nodes[current].transitions.iter() {
                    stack.push(child);
                }
            }
        }

        leaves
    }

    /// Post-order pass labeling every node with the set of original
    /// sequence indices occurring in its subtree (spec.md §4.3). Run once,
    /// right after construction; uses an explicit stack since the tree can
    /// be arbitrarily deep (spec.md §9).
    fn label_generalized(&mut self) {
        let mut stack: Vec<(NodeId, usize)> = vec![(ROOT, 0)];

        while let Some(&(node, child_idx)) = stack.last() {
            let children: Vec<NodeId> = self.nodes[node].transitions.iter().map(|(_, c)| c).collect();

            if child_idx < children.len() {
                stack.last_mut().unwrap().1 += 1;
                stack.push((children[child_idx], 0));
                continue;
            }

            let set = if self.nodes[node].is_leaf() {
                SeqIdSet::singleton(self.word_seq_of(self.nodes[node].idx))
            } else {
                let mut set = SeqIdSet::empty();
                for child in children {
                    let child_set = self.nodes[child].generalized_idxs.clone();
                    set.union_with(&child_set);
                }
                set
            };
            self.nodes[node].generalized_idxs = set;

            stack.pop();
        }
    }

    /// Longest substring occurring in every sequence named in `subset`
    /// (defaulting to all sequences when `None`), per spec.md §4.3.
    ///
    /// Quirk inherited from this being a direct-concatenation generalized
    /// suffix tree: a leaf's recorded depth spans to the end of the whole
    /// buffer, not just to the end of its own sequence, so a
    /// single-sequence `subset` can land on a leaf whose nominal label runs
    /// past that sequence's own terminator. Such a label is never actually
    /// a substring of the sequences in `subset` (testable property 7), so
    /// it's truncated at the first terminator it contains.
    pub fn lcs(&self, subset: Option<&[usize]>) -> Vec<i64> {
        let subset_set = match subset {
            Some(indices) => {
                let mut set = SeqIdSet::empty();
                for &i in indices {
                    set.union_with(&SeqIdSet::singleton(i));
                }
                set
            }
            None => SeqIdSet::full(self.sequence_count()),
        };

        let node = self.find_lcs_node(ROOT, &subset_set);
        let start = self.nodes[node].idx;
        let mut len = self.nodes[node].depth;

        if let Some(terminator_offset) =
            self.buffer[start..start + len].iter().position(Symbol::is_terminator)
        {
            len = terminator_offset;
        }

        self.buffer[start..start + len]
            .iter()
            .map(|s| match s {
                Symbol::User(v) => *v,
                Symbol::Terminator(_) => unreachable!("truncated above"),
            })
            .collect()
    }

    fn find_lcs_node(&self, node: NodeId, subset: &SeqIdSet) -> NodeId {
        let candidates: Vec<NodeId> = self.nodes[node]
            .transitions
            .iter()
            .map(|(_, c)| c)
            .filter(|&c| self.nodes[c].generalized_idxs.is_superset(subset))
            .map(|c| self.find_lcs_node(c, subset))
            .collect();

        match candidates.into_iter().max_by_key(|&c| self.nodes[c].depth) {
            Some(deepest) => deepest,
            None => node,
        }
    }

    /// Tree-drawing debug helper, not part of the public query surface
    /// spec.md defines (spec.md §4.3's "numerical display/printing is not
    /// part of the core"). Kept around for test/debugging ergonomics, as
    /// the teacher crate's `pretty_print` was.
    #[cfg(any(test, feature = "render"))]
    pub fn render(&self) -> String {
        fn label(tree: &SuffixTree, node: NodeId) -> String {
            if node == ROOT {
                return String::new();
            }
            let n = &tree.nodes[node];
            let parent_depth = tree.nodes[n.parent].depth;
            tree.buffer[n.idx + parent_depth..n.idx + n.depth]
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>()
                .join(",")
        }

        fn go(tree: &SuffixTree, node: NodeId) -> Vec<String> {
            let text = label(tree, node);
            let mut children: Vec<NodeId> = tree.nodes[node].transitions.iter().map(|(_, c)| c).collect();
            children.sort();

            if children.is_empty() {
                return vec![text];
            }

            let indent = " ".repeat(text.len());
            let mut lines = Vec::new();
            for (i, &child) in children.iter().enumerate() {
                for (j, line) in go(tree, child).into_iter().enumerate() {
                    let rendered = match (i, j) {
                        (0, 0) => format!("{}+{}", text, line),
                        (_, 0) if i < children.len() - 1 => format!("{}|-{}", indent, line),
                        (_, _) if i < children.len() - 1 => format!("{}| {}", indent, line),
                        (_, 0) => format!("{}`-{}", indent, line),
                        (_, _) => format!("{}  {}", indent, line),
                    };
                    lines.push(rendered);
                }
            }
            lines
        }

        go(self, ROOT).join("\n")
    }
}
