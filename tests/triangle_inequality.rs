use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use seqcover::cover_distance;

/// Direct port of `original_source/testCoveringSimilarity.py`'s `randomList`:
/// a random-length sequence over `0..=alphabet`.
fn random_list(rng: &mut StdRng, alphabet: i64, min_len: usize, max_len: usize) -> Vec<i64> {
    let len = rng.gen_range(min_len..max_len);
    (0..len).map(|_| rng.gen_range(0..=alphabet)).collect()
}

/// Scenario 4 / `testCoveringSimilarity.py`'s `test1`: covering distance
/// should never violate the triangle inequality on random same-alphabet
/// sequences. Empirical, not proven analytically — this is exactly why the
/// property is worth a randomized probe rather than a handful of examples.
#[test]
fn triangle_inequality_holds_on_random_sequences() {
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);

    for _ in 0..200 {
        let s1 = random_list(&mut rng, 3, 10, 20);
        let s2 = random_list(&mut rng, 3, 10, 20);
        let s3 = random_list(&mut rng, 3, 10, 20);

        let d12 = cover_distance(&s1, &s2).unwrap();
        let d13 = cover_distance(&s1, &s3).unwrap();
        let d23 = cover_distance(&s2, &s3).unwrap();

        assert!(
            d12 <= d13 + d23 + 1e-9,
            "triangle inequality violated: d12={d12} d13={d13} d23={d23}"
        );
    }
}
