use std::iter::Peekable;

use crate::error::{Error, Result};
use crate::sequence::Sequence;

/// The remaining elements of a [`Sequence`], as a standard iterator.
///
/// Since `has_next` never errors, a sequence viewed this way is infallible:
/// exhaustion becomes `None`.
pub struct SequenceIter<S: Sequence> {
    sequence: S,
}

impl<S: Sequence> SequenceIter<S> {
    pub(crate) fn new(sequence: S) -> Self {
        Self { sequence }
    }
}

impl<S: Sequence> Iterator for SequenceIter<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        if self.sequence.has_next() {
            self.sequence.next().ok()
        } else {
            None
        }
    }
}

/// Any standard iterator viewed as a [`Sequence`].
pub struct IterSequence<I: Iterator> {
    iter: Peekable<I>,
}

impl<I: Iterator> IterSequence<I> {
    pub fn new(iter: I) -> Self {
        Self {
            iter: iter.peekable(),
        }
    }
}

impl<I: Iterator> Sequence for IterSequence<I> {
    type Item = I::Item;

    fn has_next(&mut self) -> bool {
        self.iter.peek().is_some()
    }

    fn next(&mut self) -> Result<I::Item> {
        self.iter.next().ok_or(Error::Exhausted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_both_bridges() {
        let sequence = IterSequence::new(0..4);
        let items: Vec<_> = sequence.items().collect();
        assert_eq!(items, vec![0, 1, 2, 3]);
    }

    #[test]
    fn iter_sequence_exhausts() {
        let mut sequence = IterSequence::new(std::iter::once(7));
        assert!(sequence.has_next());
        assert_eq!(sequence.next(), Ok(7));
        assert!(!sequence.has_next());
        assert_eq!(sequence.next(), Err(Error::Exhausted));
    }
}
