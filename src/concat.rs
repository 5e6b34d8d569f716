use crate::error::{Error, Result};
use crate::sequence::{BoxedSequence, Sequence};

/// Chains an ordered list of child sequences into one logical sequence,
/// exhausting each child in order.
pub struct ConcatSequence<T> {
    children: Vec<BoxedSequence<T>>,
    index: usize,
}

impl<T> ConcatSequence<T> {
    pub fn new(children: Vec<BoxedSequence<T>>) -> Self {
        Self { children, index: 0 }
    }

    /// Advance the child index past exhausted children. Idempotent: a child
    /// is only skipped once it genuinely has no next element.
    fn probe(&mut self) -> bool {
        while self.index < self.children.len() {
            if self.children[self.index].has_next() {
                return true;
            }
            self.index += 1;
        }
        false
    }
}

impl<T> Sequence for ConcatSequence<T> {
    type Item = T;

    fn has_next(&mut self) -> bool {
        self.probe()
    }

    fn next(&mut self) -> Result<T> {
        if self.probe() {
            self.children[self.index].next()
        } else {
            Err(Error::Exhausted)
        }
    }
}
