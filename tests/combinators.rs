use weft::{
    ArraySequence, ConcatSequence, Error, IterSequence, MemoizingSequence, Sequence,
};

#[test]
fn compose_concat_filter_memo() {
    let words = ConcatSequence::new(vec![
        ArraySequence::new(vec!["red", "green"]).boxed(),
        ArraySequence::empty().boxed(),
        IterSequence::new(["blue"].into_iter()).boxed(),
    ]);
    let mut lengths = words
        .transformed(|word: &str, emitter| {
            if word.len() > 3 {
                emitter.emit(word.len());
            }
        })
        .memoized();

    let first_pass: Vec<_> = lengths.clone().items().collect();
    assert_eq!(first_pass, vec![5, 4]);

    lengths.restart();
    let second_pass: Vec<_> = lengths.items().collect();
    assert_eq!(second_pass, first_pass);
}

#[test]
fn chained_adapter() {
    let sequence = ArraySequence::new(vec![1, 2]).chained(IterSequence::new(3..5));
    assert_eq!(sequence.items().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
}

#[test]
fn paired_adapter_is_complete() {
    let mut pairs: Vec<_> = ArraySequence::new(vec![1, 2])
        .paired(ArraySequence::new(vec![3, 4]), |a, b, emitter| {
            emitter.emit((*a, *b));
        })
        .items()
        .collect();
    pairs.sort();
    assert_eq!(pairs, vec![(1, 3), (1, 4), (2, 3), (2, 4)]);
}

#[test]
fn from_recorded_feeds_combinators() {
    let recorded = MemoizingSequence::from_recorded(vec![1, 2, 3]);
    let total: i32 = recorded
        .transformed(|n, emitter| emitter.emit(n * n))
        .items()
        .sum();
    assert_eq!(total, 14);
}

#[test]
fn next_without_has_next_errors() {
    let mut sequence = ArraySequence::new(vec![1]).chained(ArraySequence::empty());
    assert_eq!(sequence.next(), Ok(1));
    assert_eq!(sequence.next(), Err(Error::Exhausted));
    assert_eq!(sequence.next(), Err(Error::Exhausted));
}
