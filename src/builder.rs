use crate::node::{Node, NodeId};
use crate::symbol::Symbol;

const ROOT: NodeId = 0;

/// Builds a suffix tree arena over `buffer` using McCreight's algorithm
/// (McCreight, 1976), following spec.md §4.2 and the reference control
/// flow in `original_source/STree4CS.py`'s `_build_McCreight` /
/// `_create_node` / `_create_leaf` / `_compute_slink`.
///
/// `buffer` must already include whatever terminators the caller wants —
/// this function has no opinion on single- vs. generalized-sequence
/// assembly, that's `crate::assembler`'s job.
pub fn build_mccreight(buffer: &[Symbol]) -> Vec<Node> {
    let mut nodes = vec![Node::root()];
    nodes[ROOT].suffix_link = Some(ROOT);

    let mut u = ROOT;
    let mut d = 0usize;

    for i in 0..buffer.len() {
        while nodes[u].depth == d && nodes[u].transitions.get(buffer[d + i]).is_some() {
            u = nodes[u].transitions.get(buffer[d + i]).expect("checked above");
            d += 1;
            while d < nodes[u].depth && buffer[nodes[u].idx + d] == buffer[i + d] {
                d += 1;
            }
        }

        if d < nodes[u].depth {
            u = split_edge(&mut nodes, u, d, buffer);
        }

        create_leaf(&mut nodes, i, u, d, buffer);

        if nodes[u].suffix_link.is_none() {
            compute_suffix_link(&mut nodes, u, buffer);
        }
        u = nodes[u].suffix_link.expect("just computed or already present");
        d = d.saturating_sub(1);
    }

    nodes
}

/// Splits the edge entering `u` at depth `d`, inserting a fresh internal
/// node `v` between `u` and its parent. `v` inherits the prefix of `u`'s
/// edge label up to depth `d`; `u` keeps the remainder.
fn split_edge(nodes: &mut Vec<Node>, u: NodeId, d: usize, buffer: &[Symbol]) -> NodeId {
    let i = nodes[u].idx;
    let p = nodes[u].parent;

    let mut v = Node::new(i, d, p);
    v.transitions.insert(buffer[i + d], u);

    let v_id = nodes.len();
    nodes.push(v);

    nodes[u].parent = v_id;

    let p_depth = nodes[p].depth;
    nodes[p].transitions.insert(buffer[i + p_depth], v_id);

    v_id
}

/// Attaches a new leaf for the suffix starting at `i`, under `u`, keyed by
/// the symbol at the point matching stopped (`d` symbols into `u`'s edge).
fn create_leaf(nodes: &mut Vec<Node>, i: usize, u: NodeId, d: usize, buffer: &[Symbol]) -> NodeId {
    let leaf = Node::new(i, buffer.len() - i, u);
    let leaf_id = nodes.len();
    nodes.push(leaf);

    nodes[u].transitions.insert(buffer[i + d], leaf_id);
    leaf_id
}

/// Computes and assigns the suffix link for `u`, a node with no link yet.
/// Starting from `u.parent`'s suffix link, descend edge-by-edge (an edge at
/// a time, never symbol-by-symbol — McCreight's whole efficiency argument
/// rests on this) until reaching depth `u.depth - 1`, splitting if that
/// depth falls strictly inside an edge.
fn compute_suffix_link(nodes: &mut Vec<Node>, u: NodeId, buffer: &[Symbol]) {
    let d = nodes[u].depth;
    let target_depth = d.saturating_sub(1);

    let mut v = nodes[nodes[u].parent]
        .suffix_link
        .expect("parent is processed before its children can need a link");

    while nodes[v].depth < target_depth {
        let u_idx = nodes[u].idx;
        let v_depth = nodes[v].depth;
        v = nodes[v]
            .transitions
            .get(buffer[u_idx + v_depth + 1])
            .expect("suffix-link invariant: this edge must exist");
    }

    if nodes[v].depth > target_depth {
        v = split_edge(nodes, v, target_depth, buffer);
    }

    nodes[u].suffix_link = Some(v);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::Symbol;

    fn user_buffer(values: &[i64]) -> Vec<Symbol> {
        let mut buffer: Vec<Symbol> = values.iter().map(|&v| Symbol::User(v)).collect();
        buffer.push(Symbol::Terminator(0));
        buffer
    }

    #[test]
    fn every_position_becomes_a_leaf() {
        let buffer = user_buffer(&[1, 2, 1, 2, 3]);
        let nodes = build_mccreight(&buffer);

        let leaf_count = nodes.iter().filter(|n| n.is_leaf()).count();
        assert_eq!(leaf_count, buffer.len());
    }

    #[test]
    fn leaf_depth_matches_suffix_length() {
        let buffer = user_buffer(&[1, 2, 1, 2, 3]);
        let nodes = build_mccreight(&buffer);

        for node in &nodes {
            if node.is_leaf() {
                assert_eq!(node.depth, buffer.len() - node.idx);
            }
        }
    }

    #[test]
    fn internal_nodes_have_at_least_two_children() {
        let buffer = user_buffer(&[1, 2, 1, 2, 1, 2, 3]);
        let nodes = build_mccreight(&buffer);

        for (idx, node) in nodes.iter().enumerate() {
            if idx != ROOT && !node.is_leaf() {
                assert!(node.transitions.len() >= 2);
            }
        }
    }

    #[test]
    fn unique_first_symbols_per_node() {
        let buffer = user_buffer(&[3, 1, 4, 1, 5, 9, 2, 6]);
        let nodes = build_mccreight(&buffer);

        for node in &nodes {
            let mut seen = std::collections::HashSet::new();
            for (symbol, _) in node.transitions.iter() {
                assert!(seen.insert(symbol), "duplicate edge-first-symbol");
            }
        }
    }
}
