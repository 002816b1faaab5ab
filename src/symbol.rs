use bit_vec::BitVec;
use std::cmp::Ordering;
use std::fmt;

/// A single position in the assembled symbol buffer.
///
/// Positive-valued user symbols and synthesized terminators share one type
/// so the builder and tree services don't special-case either, but they are
/// tagged rather than folded into a single signed integer: a tagged variant
/// lets terminators be generated past `i64`'s negative range if this crate
/// is ever asked to (it currently isn't — see `TERMINATOR_LIMIT`).
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq)]
pub enum Symbol {
    User(i64),
    Terminator(usize),
}

impl Symbol {
    pub fn is_terminator(&self) -> bool {
        matches!(self, Symbol::Terminator(_))
    }
}

/// Terminators sort after every user symbol, and distinct terminators are
/// ordered by generation index. This gives transition storage (`ChildMap`)
/// a total order to sort on without caring which symbols happen to be user
/// data.
impl Ord for Symbol {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Symbol::User(a), Symbol::User(b)) => a.cmp(b),
            (Symbol::Terminator(a), Symbol::Terminator(b)) => a.cmp(b),
            (Symbol::User(_), Symbol::Terminator(_)) => Ordering::Less,
            (Symbol::Terminator(_), Symbol::User(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Symbol {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::User(v) => write!(f, "{}", v),
            Symbol::Terminator(i) => write!(f, "$\u{2080}{}", i),
        }
    }
}

/// The maximum number of sequences a single generalized build can combine,
/// per spec.md §4.1/§6: the terminator generator yields `-1, -2, ..`, one
/// per sequence, and refuses to produce a millionth value.
pub const MAX_SEQUENCES: usize = 999_999;

/// A growable set of sequence indices, used to label generalized-suffix-tree
/// nodes with the sequences found in their subtree (spec.md §4.3).
///
/// The teacher's GST crate memoizes this as a `u128` bitmask, capping a
/// generalized build at 128 sequences. That cap is tighter than the
/// `TooManyInputs` bound this crate actually enforces, so the set is backed
/// by a `bit-vec::BitVec` that grows to however many sequences were
/// supplied.
#[derive(Debug, Clone, Default)]
pub(crate) struct SeqIdSet(BitVec);

impl SeqIdSet {
    pub(crate) fn empty() -> Self {
        SeqIdSet(BitVec::new())
    }

    pub(crate) fn singleton(seq_id: usize) -> Self {
        let mut bits = BitVec::from_elem(seq_id + 1, false);
        bits.set(seq_id, true);
        SeqIdSet(bits)
    }

    /// The set containing every sequence index in `0..count`.
    pub(crate) fn full(count: usize) -> Self {
        SeqIdSet(BitVec::from_elem(count, true))
    }

    pub(crate) fn contains(&self, seq_id: usize) -> bool {
        self.0.get(seq_id).unwrap_or(false)
    }

    /// In-place union with `other`, growing to the larger of the two
    /// lengths.
    pub(crate) fn union_with(&mut self, other: &SeqIdSet) {
        if other.0.len() > self.0.len() {
            let mut grown = other.0.clone();
            grown.or(&pad(&self.0, grown.len()));
            self.0 = grown;
        } else {
            let padded = pad(&other.0, self.0.len());
            self.0.or(&padded);
        }
    }

    /// True iff every index set in `subset` is also set in `self`.
    pub(crate) fn is_superset(&self, subset: &SeqIdSet) -> bool {
        subset
            .0
            .iter()
            .enumerate()
            .all(|(i, bit)| !bit || self.contains(i))
    }
}

fn pad(bits: &BitVec, len: usize) -> BitVec {
    let mut out = bits.clone();
    while out.len() < len {
        out.push(false);
    }
    out
}
