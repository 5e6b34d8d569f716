use std::collections::VecDeque;

use crate::error::{Error, Result};
use crate::sequence::Sequence;

/// Collects the values a transform emits during a single invocation.
///
/// A transform receives an emitter and may call [`emit`](Emitter::emit) zero,
/// one, or many times; emitted values are buffered by the owning combinator
/// and drained by subsequent `next` calls, so a push-style transform can sit
/// inside a pull-style sequence without any coroutine machinery.
pub struct Emitter<'a, T> {
    queue: &'a mut VecDeque<T>,
}

impl<'a, T> Emitter<'a, T> {
    pub(crate) fn new(queue: &'a mut VecDeque<T>) -> Self {
        Self { queue }
    }

    /// Emit one output value.
    pub fn emit(&mut self, value: T) {
        self.queue.push_back(value);
    }
}

/// Maps each source element through a transform that may emit zero or more
/// output elements.
///
/// Pending emissions are always drained before another source element is
/// pulled. A source element for which the transform emits nothing is simply
/// skipped; the source keeps being pulled until something is emitted or the
/// source is exhausted. Zero emission is never mistaken for exhaustion.
pub struct FilterSequence<S, F, U>
where
    S: Sequence,
{
    source: S,
    transform: F,
    pending: VecDeque<U>,
}

impl<S, F, U> FilterSequence<S, F, U>
where
    S: Sequence,
    F: FnMut(S::Item, &mut Emitter<U>),
{
    pub fn new(source: S, transform: F) -> Self {
        Self {
            source,
            transform,
            pending: VecDeque::new(),
        }
    }

    /// Ensure at least one pending output, pulling source elements as needed.
    /// Returns false only when the source is exhausted with nothing pending.
    fn advance(&mut self) -> bool {
        while self.pending.is_empty() {
            if !self.source.has_next() {
                return false;
            }
            let item = match self.source.next() {
                Ok(item) => item,
                Err(Error::Exhausted) => return false,
            };
            let mut emitter = Emitter::new(&mut self.pending);
            (self.transform)(item, &mut emitter);
        }
        true
    }
}

impl<S, F, U> Sequence for FilterSequence<S, F, U>
where
    S: Sequence,
    F: FnMut(S::Item, &mut Emitter<U>),
{
    type Item = U;

    fn has_next(&mut self) -> bool {
        self.advance()
    }

    fn next(&mut self) -> Result<U> {
        if self.advance() {
            self.pending.pop_front().ok_or(Error::Exhausted)
        } else {
            Err(Error::Exhausted)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array::ArraySequence;

    #[test]
    fn one_to_one() {
        let source = ArraySequence::new(vec![1, 2, 3]);
        let doubled = source.transformed(|n, emitter| emitter.emit(n * 2));
        let items: Vec<_> = doubled.items().collect();
        assert_eq!(items, vec![2, 4, 6]);
    }

    #[test]
    fn zero_emissions_are_skipped_not_exhaustion() {
        let source = ArraySequence::new(vec![1, 2, 3, 4, 5, 6]);
        let mut evens = source.transformed(|n, emitter| {
            if n % 2 == 0 {
                emitter.emit(n);
            }
        });
        assert!(evens.has_next());
        assert_eq!(evens.next(), Ok(2));
        assert_eq!(evens.next(), Ok(4));
        assert_eq!(evens.next(), Ok(6));
        assert!(!evens.has_next());
        assert_eq!(evens.next(), Err(Error::Exhausted));
    }

    #[test]
    fn all_filtered_out_is_exhausted() {
        let source = ArraySequence::new(vec![1, 3, 5]);
        let mut evens = source.transformed(|n: i32, emitter| {
            if n % 2 == 0 {
                emitter.emit(n);
            }
        });
        assert!(!evens.has_next());
    }

    #[test]
    fn fan_out_preserves_emission_order() {
        let source = ArraySequence::new(vec![3, 0, 2]);
        let mut repeated = source.transformed(|n, emitter| {
            for _ in 0..n {
                emitter.emit(n);
            }
        });
        // 3 emits three outputs, all drained before 0 and 2 are consumed
        assert_eq!(repeated.next(), Ok(3));
        assert_eq!(repeated.next(), Ok(3));
        assert_eq!(repeated.next(), Ok(3));
        assert_eq!(repeated.next(), Ok(2));
        assert_eq!(repeated.next(), Ok(2));
        assert!(!repeated.has_next());
    }

    #[test]
    fn has_next_is_idempotent() {
        let source = ArraySequence::new(vec![1, 2]);
        let mut sequence = source.transformed(|n, emitter| emitter.emit(n + 10));
        for _ in 0..5 {
            assert!(sequence.has_next());
        }
        assert_eq!(sequence.next(), Ok(11));
        for _ in 0..5 {
            assert!(sequence.has_next());
        }
        assert_eq!(sequence.next(), Ok(12));
        assert!(!sequence.has_next());
    }
}
