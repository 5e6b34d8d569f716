use thiserror::Error;

/// Error raised by sequence consumption.
///
/// There is exactly one error condition in this crate. `Exhausted` signals a
/// contract violation by the caller (calling [`next`](crate::Sequence::next)
/// without checking [`has_next`](crate::Sequence::has_next)), not a runtime
/// failure, and is never caught internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// `next` was called on a sequence with no remaining elements.
    #[error("sequence is exhausted")]
    Exhausted,
}

pub type Result<T> = std::result::Result<T, Error>;
