use crate::error::{Error, Result};
use crate::sequence::Sequence;

/// A sequence over a fixed backing list of elements.
pub struct ArraySequence<T> {
    items: Vec<T>,
    index: usize,
}

impl<T> ArraySequence<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items, index: 0 }
    }

    /// A sequence with no elements.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> From<Vec<T>> for ArraySequence<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T: Clone> Sequence for ArraySequence<T> {
    type Item = T;

    fn has_next(&mut self) -> bool {
        self.index < self.items.len()
    }

    fn next(&mut self) -> Result<T> {
        if self.index < self.items.len() {
            let item = self.items[self.index].clone();
            self.index += 1;
            Ok(item)
        } else {
            Err(Error::Exhausted)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yields_in_order_then_exhausts() {
        let mut sequence = ArraySequence::new(vec![1, 2, 3]);
        assert!(sequence.has_next());
        assert_eq!(sequence.next(), Ok(1));
        assert_eq!(sequence.next(), Ok(2));
        assert_eq!(sequence.next(), Ok(3));
        assert!(!sequence.has_next());
        assert_eq!(sequence.next(), Err(Error::Exhausted));
        // exhaustion is monotone
        assert!(!sequence.has_next());
    }

    #[test]
    fn empty_is_immediately_exhausted() {
        let mut sequence = ArraySequence::<i32>::empty();
        assert!(!sequence.has_next());
        assert_eq!(sequence.next(), Err(Error::Exhausted));
    }

    #[test]
    fn has_next_is_repeatable() {
        let mut sequence = ArraySequence::new(vec!["a"]);
        assert!(sequence.has_next());
        assert!(sequence.has_next());
        assert_eq!(sequence.next(), Ok("a"));
    }
}
