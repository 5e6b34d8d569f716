//! Single-pass lazy sequence combinators.
//!
//! A [`Sequence`] is a pull-based cursor: peek availability with
//! [`has_next`](Sequence::has_next), consume with [`next`](Sequence::next).
//! Sequences compose: [`ArraySequence`] and [`IterSequence`] produce,
//! [`ConcatSequence`] chains, [`FilterSequence`] transforms with zero or
//! more outputs per input, [`MemoizingSequence`] records for replay and
//! fan-out, and [`PairSequence`] sweeps the exhaustive cross product of two
//! sequences diagonally, supporting branched continuations of a sweep in
//! progress.
//!
//! ```
//! use weft::{ArraySequence, Sequence};
//!
//! let evens = ArraySequence::new(vec![1, 2, 3, 4])
//!     .transformed(|n, emitter| {
//!         if n % 2 == 0 {
//!             emitter.emit(n * 10);
//!         }
//!     });
//! assert_eq!(evens.items().collect::<Vec<_>>(), vec![20, 40]);
//! ```

mod array;
mod concat;
mod error;
mod filter;
mod iter;
mod memo;
mod pair;
mod sequence;

pub use array::ArraySequence;
pub use concat::ConcatSequence;
pub use error::{Error, Result};
pub use filter::{Emitter, FilterSequence};
pub use iter::{IterSequence, SequenceIter};
pub use memo::MemoizingSequence;
pub use pair::PairSequence;
pub use sequence::{BoxedSequence, Sequence};
