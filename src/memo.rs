use std::cell::RefCell;
use std::rc::Rc;

use crate::error::{Error, Result};
use crate::sequence::{BoxedSequence, Sequence};

/// The shared recording behind every clone of a [`MemoizingSequence`]: the
/// append-only history of elements pulled so far, plus the live source the
/// history grows from. The source is dropped once it reports exhaustion.
struct Recording<T> {
    history: Vec<T>,
    source: Option<BoxedSequence<T>>,
}

impl<T> Recording<T> {
    fn source_has_next(&mut self) -> bool {
        let live = match &mut self.source {
            Some(source) => source.has_next(),
            None => false,
        };
        if !live {
            self.source = None;
        }
        live
    }
}

/// A sequence that records every element it yields and can replay them.
///
/// A `MemoizingSequence` pairs a shared *recording* with a private *replay
/// cursor*. While the cursor is inside the recorded history, `next` replays
/// recorded elements; past the end of history it pulls a fresh element from
/// the live source and appends it to the recording. [`restart`] rewinds the
/// cursor to the start of history without touching the source.
///
/// `Clone` shares the recording and copies the cursor, so any number of
/// clones consume independently while the live source underneath is pulled
/// at most once per logical element, whichever clone gets there first. This
/// is the sanctioned fan-out mechanism: a raw sequence has one consumer, a
/// memoized one has as many as you like.
///
/// [`restart`]: MemoizingSequence::restart
pub struct MemoizingSequence<T> {
    recording: Rc<RefCell<Recording<T>>>,
    cursor: usize,
}

impl<T: Clone> MemoizingSequence<T> {
    /// Record a live source.
    pub fn new(source: impl Sequence<Item = T> + 'static) -> Self {
        Self {
            recording: Rc::new(RefCell::new(Recording {
                history: Vec::new(),
                source: Some(Box::new(source)),
            })),
            cursor: 0,
        }
    }

    /// Replay an already-complete list of elements. There is no live source;
    /// the history is immediately replayable in full.
    pub fn from_recorded(items: Vec<T>) -> Self {
        Self {
            recording: Rc::new(RefCell::new(Recording {
                history: items,
                source: None,
            })),
            cursor: 0,
        }
    }

    /// Rewind the replay cursor to the start of history. After a restart the
    /// sequence yields the full history again, oldest first, before falling
    /// back to whatever remains of the live source.
    pub fn restart(&mut self) {
        self.cursor = 0;
    }
}

impl<T> Clone for MemoizingSequence<T> {
    fn clone(&self) -> Self {
        Self {
            recording: Rc::clone(&self.recording),
            cursor: self.cursor,
        }
    }
}

impl<T: Clone> Sequence for MemoizingSequence<T> {
    type Item = T;

    fn has_next(&mut self) -> bool {
        let mut recording = self.recording.borrow_mut();
        self.cursor < recording.history.len() || recording.source_has_next()
    }

    fn next(&mut self) -> Result<T> {
        let mut recording = self.recording.borrow_mut();
        if self.cursor < recording.history.len() {
            let item = recording.history[self.cursor].clone();
            self.cursor += 1;
            return Ok(item);
        }
        let source = recording.source.as_mut().ok_or(Error::Exhausted)?;
        let item = source.next()?;
        recording.history.push(item.clone());
        self.cursor = recording.history.len();
        Ok(item)
    }
}
