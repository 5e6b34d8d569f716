use crate::concat::ConcatSequence;
use crate::error;
use crate::filter::{Emitter, FilterSequence};
use crate::iter::SequenceIter;
use crate::memo::MemoizingSequence;
use crate::pair::PairSequence;

/// A single-pass, pull-based cursor over a stream of elements.
///
/// The two required methods form the whole contract:
///
/// - [`has_next`](Sequence::has_next) reports whether another element is
///   available. It is repeatable: calling it any number of times between
///   `next` calls never changes what `next` will return. It takes `&mut self`
///   because combinators may need to probe or buffer upstream elements to
///   answer, but it never consumes an element of *this* sequence.
/// - [`next`](Sequence::next) takes the next element, advancing the cursor.
///   It fails with [`Error::Exhausted`](crate::Error::Exhausted) exactly when
///   `has_next` would return false.
///
/// Exhaustion is monotone: once `has_next` returns false it returns false
/// forever. Sequences never refill.
///
/// A sequence has at most one consumer. Wrapping a sequence in a combinator
/// moves it, so two combinators can never pull the same underlying cursor.
/// [`MemoizingSequence`] is the mechanism for fan-out.
pub trait Sequence {
    type Item;

    /// Whether another element is available. Repeatable, never errors.
    fn has_next(&mut self) -> bool;

    /// Take the next element.
    fn next(&mut self) -> error::Result<Self::Item>;

    /// Erase the concrete type, for heterogeneous composition.
    fn boxed(self) -> BoxedSequence<Self::Item>
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }

    /// Record this sequence so multiple consumers can replay it.
    ///
    /// See [`MemoizingSequence`].
    fn memoized(self) -> MemoizingSequence<Self::Item>
    where
        Self: Sized + 'static,
        Self::Item: Clone,
    {
        MemoizingSequence::new(self)
    }

    /// Map each element through a transform that may emit zero or more
    /// output elements. See [`FilterSequence`].
    fn transformed<U, F>(self, transform: F) -> FilterSequence<Self, F, U>
    where
        Self: Sized,
        F: FnMut(Self::Item, &mut Emitter<U>),
    {
        FilterSequence::new(self, transform)
    }

    /// This sequence followed by `other`. See [`ConcatSequence`].
    fn chained<S>(self, other: S) -> ConcatSequence<Self::Item>
    where
        Self: Sized + 'static,
        S: Sequence<Item = Self::Item> + 'static,
    {
        ConcatSequence::new(vec![self.boxed(), other.boxed()])
    }

    /// The exhaustive cross product of this sequence and `other`, each pair
    /// passed through `transform`. See [`PairSequence`].
    fn paired<S, U, F>(self, other: S, transform: F) -> PairSequence<BoxedSequence<Self::Item>, F, U>
    where
        Self: Sized + 'static,
        Self::Item: Clone,
        S: Sequence<Item = Self::Item> + 'static,
        F: FnMut(&Self::Item, &Self::Item, &mut Emitter<U>),
    {
        PairSequence::new(self.boxed(), other.boxed(), transform)
    }

    /// Consume the remaining elements as a standard iterator.
    fn items(self) -> SequenceIter<Self>
    where
        Self: Sized,
    {
        SequenceIter::new(self)
    }
}

/// A type-erased sequence.
pub type BoxedSequence<T> = Box<dyn Sequence<Item = T>>;

impl<S> Sequence for Box<S>
where
    S: Sequence + ?Sized,
{
    type Item = S::Item;

    fn has_next(&mut self) -> bool {
        (**self).has_next()
    }

    fn next(&mut self) -> error::Result<Self::Item> {
        (**self).next()
    }
}
