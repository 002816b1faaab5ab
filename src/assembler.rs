use crate::error::{Result, SuffixTreeError};
use crate::symbol::{Symbol, MAX_SEQUENCES};

/// The assembled symbol buffer plus the bookkeeping needed to map a
/// position in it back to the original sequence it came from.
///
/// Grounded on spec.md §4.1 / `STree4CS._build_generalized` +
/// `_generalized_word_starts`: concatenate every input sequence, inserting
/// one freshly synthesized terminator between (and after) each one, and
/// record the original `[begin, end)` span and the word-start position of
/// each sequence.
pub struct Assembled {
    pub buffer: Vec<Symbol>,
    pub word_starts: Vec<usize>,
    pub begins: Vec<usize>,
    pub ends: Vec<usize>,
}

/// Concatenates `sequences` into a single symbol buffer, inserting one
/// distinct terminator after every sequence.
///
/// Terminators are generated in increasing magnitude starting at index 0
/// and are never reused; `TooManyInputs` is returned rather than panicking
/// once the generator would have to mint one past `MAX_SEQUENCES`.
pub fn assemble(sequences: &[Vec<i64>]) -> Result<Assembled> {
    if sequences.len() > MAX_SEQUENCES {
        return Err(SuffixTreeError::too_many_inputs(sequences.len(), MAX_SEQUENCES));
    }

    let total_len: usize = sequences.iter().map(|s| s.len() + 1).sum();
    let mut buffer = Vec::with_capacity(total_len);
    let mut word_starts = Vec::with_capacity(sequences.len());
    let mut begins = Vec::with_capacity(sequences.len());
    let mut ends = Vec::with_capacity(sequences.len());

    for (seq_id, sequence) in sequences.iter().enumerate() {
        word_starts.push(buffer.len());
        begins.push(buffer.len());
        buffer.extend(sequence.iter().map(|&v| Symbol::User(v)));
        ends.push(buffer.len());
        buffer.push(Symbol::Terminator(seq_id));
    }

    Ok(Assembled { buffer, word_starts, begins, ends })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_sequence_gets_one_terminator() {
        let assembled = assemble(&[vec![1, 2, 3]]).unwrap();
        assert_eq!(
            assembled.buffer,
            vec![Symbol::User(1), Symbol::User(2), Symbol::User(3), Symbol::Terminator(0)]
        );
        assert_eq!(assembled.word_starts, vec![0]);
        assert_eq!(assembled.begins, vec![0]);
        assert_eq!(assembled.ends, vec![3]);
    }

    #[test]
    fn multiple_sequences_get_distinct_terminators() {
        let assembled = assemble(&[vec![1, 2], vec![3, 4, 5]]).unwrap();
        assert_eq!(
            assembled.buffer,
            vec![
                Symbol::User(1),
                Symbol::User(2),
                Symbol::Terminator(0),
                Symbol::User(3),
                Symbol::User(4),
                Symbol::User(5),
                Symbol::Terminator(1),
            ]
        );
        assert_eq!(assembled.word_starts, vec![0, 3]);
        assert_eq!(assembled.begins, vec![0, 3]);
        assert_eq!(assembled.ends, vec![2, 6]);
    }

    #[test]
    fn too_many_inputs_is_rejected() {
        let sequences: Vec<Vec<i64>> = (0..MAX_SEQUENCES + 1).map(|_| vec![1]).collect();
        let err = assemble(&sequences).unwrap_err();
        assert_eq!(
            err,
            SuffixTreeError::TooManyInputs { supplied: MAX_SEQUENCES + 1, max: MAX_SEQUENCES }
        );
    }
}
