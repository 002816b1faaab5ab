use seqcover::{cover_distance, cover_similarity, SuffixTree};

fn encode(s: &str) -> Vec<i64> {
    s.bytes().map(i64::from).collect()
}

#[test]
fn build_suffix_tree() {
    let tree = SuffixTree::build(&[encode("test"), encode("builder"), encode("asdfkljasdlf")]);
    assert!(tree.is_ok());
}

#[test]
fn find_and_find_all_across_sequences() {
    let tree = SuffixTree::build(&[encode("test"), encode("rest")]).unwrap();

    assert!(tree.contains(&encode("est")));
    assert_eq!(tree.find_all(&encode("est")).len(), 2);
    assert!(!tree.contains(&encode("xyz")));
}

#[test]
fn lcs_over_three_sequences() {
    let sequences = vec![encode("testing"), encode("festung"), encode("estland")];
    let tree = SuffixTree::build(&sequences).unwrap();

    assert_eq!(tree.lcs(None), encode("est"));
}

#[test]
fn lcs_restricted_to_a_subset() {
    let sequences = vec![encode("abcdef"), encode("xxabcyy"), encode("zzzzzz")];
    let tree = SuffixTree::build(&sequences).unwrap();

    assert_eq!(tree.lcs(Some(&[0, 1])), encode("abc"));
}

#[test]
fn covering_similarity_of_identical_text_is_one() {
    let a = encode("the quick brown fox");
    assert_eq!(cover_similarity(&a, &a).unwrap(), 1.0);
    assert_eq!(cover_distance(&a, &a).unwrap(), 0.0);
}

#[test]
fn covering_similarity_detects_a_single_edit() {
    let a = encode("amrican");
    let b = encode("american");
    let similarity = cover_similarity(&a, &b).unwrap();

    assert!(similarity < 1.0);
    assert!(similarity > 0.5);
}
