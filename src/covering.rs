use crate::error::Result;
use crate::tree::SuffixTree;

/// One place where matching a sequence against a suffix tree broke: the
/// symbol that wasn't found, and the length of the block matched just
/// before it (spec.md §4.4).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Break {
    pub symbol: i64,
    pub length: usize,
}

/// Result of covering a sequence against a suffix tree: `score` is the
/// fraction of the sequence explained by maximal matching blocks, `breaks`
/// records every point the covering had to restart, and `blocks` is the
/// sequence of matched subsequences tiling the input (spec.md §4.4).
#[derive(Debug, Clone, PartialEq)]
pub struct Covering {
    pub score: f64,
    pub breaks: Vec<Break>,
    pub blocks: Vec<Vec<i64>>,
}

/// Greedily tiles `s` with maximal substrings found in `tree`, extending
/// each block one symbol at a time. `O(|s| * average block length)` —
/// straightforward but the slower of the two variants on long inputs.
/// Grounded on `original_source/STree4CS.py`'s `evaluateSimple`.
pub fn evaluate_simple(tree: &SuffixTree, s: &[i64]) -> Covering {
    let l = s.len();
    if l == 0 {
        return Covering { score: 1.0, breaks: Vec::new(), blocks: Vec::new() };
    }

    let mut breaks = Vec::new();
    let mut blocks = Vec::new();
    let mut beg = 0usize;

    while beg < l {
        let mut end = beg + 1;
        while end <= l && tree.contains(&s[beg..end]) {
            end += 1;
        }

        let mut beg0 = end;
        if end <= l {
            breaks.push(Break { length: end - 1 - beg, symbol: s[end - 1] });
            if end - 1 - beg > 0 {
                beg0 = end - 1;
            }
        }
        if beg + 1 == end {
            end += 1;
        }

        blocks.push(s[beg..end - 1].to_vec());
        beg = beg0;
    }

    let score = (l as f64 - breaks.len() as f64) / l as f64;
    Covering { score, breaks, blocks }
}

/// Same tiling as [`evaluate_simple`], but finds each block's end via
/// bisection instead of a linear scan, with a mandatory linear polish to
/// correct the bisection's landing point exactly (the dichotomic variant
/// had a known off-by-one bug in the original implementation, fixed by
/// always walking the final few steps one symbol at a time). Grounded on
/// `original_source/STree4CS.py`'s `evaluateDichotomic` /
/// `getNextBreakDichotomic`.
pub fn evaluate_dichotomic(tree: &SuffixTree, s: &[i64]) -> Covering {
    let l = s.len();
    if l == 0 {
        return Covering { score: 1.0, breaks: Vec::new(), blocks: Vec::new() };
    }

    let mut breaks = Vec::new();
    let mut blocks = Vec::new();
    let mut beg = 0usize;

    while beg < l {
        let t = next_break_dichotomic(tree, &s[beg..]);
        let mut end = beg + t - 1;
        if end == beg {
            end += 1;
        }
        if end < l {
            breaks.push(Break { symbol: s[end], length: end - beg });
        }
        blocks.push(s[beg..end].to_vec());
        beg = end;
    }

    let score = (l as f64 - blocks.len() as f64 + 1.0) / l as f64;
    Covering { score, breaks, blocks }
}

/// Finds, by bisection, the shortest prefix length of `s` that `tree`
/// doesn't contain (always at least 1, since the empty prefix always
/// matches). The bisection narrows a `[tb, te]` window around the break
/// point; the trailing linear walks are the mandatory correction step that
/// makes the final answer exact regardless of where the bisection lands.
fn next_break_dichotomic(tree: &SuffixTree, s: &[i64]) -> usize {
    let end = s.len();
    let mut t = end / 2;
    let mut t0 = 0usize;

    loop {
        let mut srch = tree.find(&s[0..t]);
        while srch.is_some() && t.abs_diff(end) > 1 {
            t0 = t;
            t = (t + end) / 2;
            srch = tree.find(&s[0..t]);
        }
        if t0.abs_diff(end) <= 1 {
            break;
        }

        srch = tree.find(&s[0..t]);
        while srch.is_none() && t.abs_diff(t0) > 1 {
            t = (t0 + t) / 2;
            srch = tree.find(&s[0..t]);
        }
        if t.abs_diff(t0) <= 1 {
            break;
        }
    }

    while tree.find(&s[0..t]).is_none() && t > 0 {
        t -= 1;
    }
    while t <= end && tree.find(&s[0..t]).is_some() {
        t += 1;
    }

    t
}

/// Symmetric covering similarity between two sequences: each is covered
/// against a suffix tree built from the other, and the two scores are
/// averaged (spec.md §4.4, `original_source/STree4CS.py`'s
/// `coveringSimilariy` — uses [`evaluate_simple`], not the dichotomic
/// variant, as the reference implementation does).
pub fn cover_similarity(s1: &[i64], s2: &[i64]) -> Result<f64> {
    let t1 = SuffixTree::from_sequence(s1)?;
    let t2 = SuffixTree::from_sequence(s2)?;

    let d1 = evaluate_simple(&t1, s2).score;
    let d2 = evaluate_simple(&t2, s1).score;
    Ok((d1 + d2) / 2.0)
}

/// `1 - cover_similarity(s1, s2)`.
pub fn cover_distance(s1: &[i64], s2: &[i64]) -> Result<f64> {
    Ok(1.0 - cover_similarity(s1, s2)?)
}
