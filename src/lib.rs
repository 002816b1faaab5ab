//! Generalized suffix trees over sequences of non-negative integers, plus a
//! covering-similarity metric built on top of them.
//!
//! Build a tree over one or more sequences with [`SuffixTree::build`], query
//! it with [`SuffixTree::find`]/[`SuffixTree::find_all`]/[`SuffixTree::lcs`],
//! or skip straight to comparing two sequences with [`cover_similarity`]/
//! [`cover_distance`].

mod assembler;
mod builder;
mod covering;
mod error;
mod node;
mod symbol;
mod tree;

pub use covering::{cover_distance, cover_similarity, evaluate_dichotomic, evaluate_simple, Break, Covering};
pub use error::{Result, SuffixTreeError};
pub use tree::SuffixTree;
