use std::collections::VecDeque;
use std::mem;

use crate::error::{Error, Result};
use crate::filter::Emitter;
use crate::sequence::Sequence;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Init,
    Running,
    Done,
}

/// One role-labeled side of a pair: the wrapped sequence plus the history of
/// everything already pulled from it.
struct Side<S: Sequence> {
    seq: S,
    history: Vec<S::Item>,
}

impl<S> Side<S>
where
    S: Sequence,
{
    fn new(seq: S) -> Self {
        Self {
            seq,
            history: Vec::new(),
        }
    }
}

impl<S> Clone for Side<S>
where
    S: Sequence + Clone,
    S::Item: Clone,
{
    fn clone(&self) -> Self {
        Self {
            seq: self.seq.clone(),
            history: self.history.clone(),
        }
    }
}

/// The exhaustive cross product of two sequences, produced incrementally.
///
/// Every pair `(a, b)` from the eventual full contents of both sides is
/// passed to the transform exactly once, without either side being
/// materialized in advance. The schedule is a diagonal sweep of the
/// conceptual grid: each element freshly pulled from one side is immediately
/// paired against the entire history accumulated so far on the other side,
/// and the two sides swap the *driver* role whenever the side not currently
/// driving still has elements, so whichever side can make progress keeps
/// making it. A nested full traversal of one side per element of the other
/// would never get past the first row if that side kept producing; the
/// diagonal sweep covers the grid breadth-first instead. The cross product
/// is complete when both sides are exhausted at the same probe.
///
/// The transform may emit zero or more outputs per pair, through the same
/// pending-queue buffering as [`FilterSequence`](crate::FilterSequence). Its
/// arguments always arrive in caller order: the element that came from the
/// `first` constructor argument is always the first parameter, regardless of
/// which side is currently driving.
///
/// # Branching
///
/// [`branch`](PairSequence::branch) forks an independent continuation of a
/// pair in progress. The child snapshots the parent's accumulated state
/// (histories, role flag, in-flight driver element, scan position, pending
/// buffer) and first replays every output the parent has yielded so far,
/// then keeps producing new pairs exactly as if it had been running
/// alongside the parent from the start. When the two sides are
/// [`MemoizingSequence`](crate::MemoizingSequence) clones, the branch shares
/// their recordings, so the live sources underneath are still pulled at most
/// once per element no matter how many branches exist.
pub struct PairSequence<S, F, U>
where
    S: Sequence,
{
    current: Side<S>,
    other: Side<S>,
    /// Whether `current` is the caller's `second` argument rather than its
    /// `first`. Tracked so the transform always sees caller argument order.
    swapped: bool,
    state: State,
    /// The element currently being paired against `other`'s history.
    driver: Option<S::Item>,
    /// Cursor into `other.history` for the driver's scan.
    scan: usize,
    pending: VecDeque<U>,
    /// Outputs inherited from a branch parent, drained before anything else.
    replay: VecDeque<U>,
    /// Every output this instance has yielded, kept for future branches.
    produced: Vec<U>,
    transform: F,
}

impl<S, F, U> PairSequence<S, F, U>
where
    S: Sequence,
    F: FnMut(&S::Item, &S::Item, &mut Emitter<U>),
{
    pub fn new(first: S, second: S, transform: F) -> Self {
        Self {
            current: Side::new(first),
            other: Side::new(second),
            swapped: false,
            state: State::Init,
            driver: None,
            scan: 0,
            pending: VecDeque::new(),
            replay: VecDeque::new(),
            produced: Vec::new(),
            transform,
        }
    }

    fn swap_roles(&mut self) {
        mem::swap(&mut self.current, &mut self.other);
        self.swapped = !self.swapped;
    }

    /// Pull the next driver element from the current side and reset the scan
    /// over the other side's history. False when the current side is done,
    /// which is the termination condition: a swap has already been offered
    /// to the other side by this point, so neither side can make progress.
    fn pull_driver(&mut self) -> bool {
        if !self.current.seq.has_next() {
            return false;
        }
        match self.current.seq.next() {
            Ok(item) => {
                self.driver = Some(item);
                self.scan = 0;
                true
            }
            Err(Error::Exhausted) => false,
        }
    }

    /// Pair the driver against one historical element of the other side,
    /// buffering whatever the transform emits.
    fn emit_pair(&mut self, index: usize) {
        let Some(driver) = self.driver.as_ref() else {
            return;
        };
        let historical = &self.other.history[index];
        let mut emitter = Emitter::new(&mut self.pending);
        if self.swapped {
            (self.transform)(historical, driver, &mut emitter);
        } else {
            (self.transform)(driver, historical, &mut emitter);
        }
    }

    /// Run the state machine until an output is available or the cross
    /// product is complete. Returns false only in the latter case.
    fn advance(&mut self) -> bool {
        loop {
            if !self.replay.is_empty() || !self.pending.is_empty() {
                return true;
            }
            match self.state {
                State::Done => return false,
                State::Init => {
                    // give whichever side has elements the driver role
                    if !self.current.seq.has_next() {
                        self.swap_roles();
                    }
                    if self.pull_driver() {
                        self.state = State::Running;
                    } else {
                        // both sides empty from the start
                        self.state = State::Done;
                    }
                }
                State::Running => {
                    if self.scan < self.other.history.len() {
                        let index = self.scan;
                        self.scan += 1;
                        self.emit_pair(index);
                    } else {
                        // driver has seen the other side's entire history;
                        // commit it so future elements pair against it
                        if let Some(driver) = self.driver.take() {
                            self.current.history.push(driver);
                        }
                        if self.other.seq.has_next() {
                            self.swap_roles();
                        }
                        if !self.pull_driver() {
                            self.state = State::Done;
                        }
                    }
                }
            }
        }
    }
}

impl<S, F, U> PairSequence<S, F, U>
where
    S: Sequence + Clone,
    S::Item: Clone,
    U: Clone,
    F: FnMut(&S::Item, &S::Item, &mut Emitter<U>) + Clone,
{
    /// Fork an independent continuation of this pair.
    ///
    /// The child first yields everything this instance has yielded so far,
    /// in the same order, without touching the underlying sequences; it then
    /// continues the cross product from this instance's current position.
    /// Both instances remain usable and do not affect each other. Cloning
    /// the sides shares recordings but not cursors when they are
    /// [`MemoizingSequence`](crate::MemoizingSequence)s, which is the
    /// intended way to feed a pair that will be branched.
    pub fn branch(&self) -> Self {
        let mut replay: VecDeque<U> = self.produced.iter().cloned().collect();
        // if this instance is itself mid-replay, the child owes its consumer
        // the remainder too
        replay.extend(self.replay.iter().cloned());
        Self {
            current: self.current.clone(),
            other: self.other.clone(),
            swapped: self.swapped,
            state: self.state,
            driver: self.driver.clone(),
            scan: self.scan,
            pending: self.pending.clone(),
            replay,
            produced: Vec::new(),
            transform: self.transform.clone(),
        }
    }
}

impl<S, F, U> Sequence for PairSequence<S, F, U>
where
    S: Sequence,
    U: Clone,
    F: FnMut(&S::Item, &S::Item, &mut Emitter<U>),
{
    type Item = U;

    fn has_next(&mut self) -> bool {
        self.advance()
    }

    fn next(&mut self) -> Result<U> {
        if !self.advance() {
            return Err(Error::Exhausted);
        }
        let item = match self.replay.pop_front() {
            Some(item) => item,
            None => self.pending.pop_front().ok_or(Error::Exhausted)?,
        };
        self.produced.push(item.clone());
        Ok(item)
    }
}
