use std::collections::VecDeque;
use std::error::Error;
use std::fmt;
use std::iter::Fuse;

/// Misuse of the peek/rewind protocol on a [`Lookahead`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookaheadError {
    IterateWhilePeeking,
    PeekWithoutRewind,
    RewindWithoutPeek,
}

impl fmt::Display for LookaheadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookaheadError::IterateWhilePeeking => {
                write!(f, "Cannot iterate after a peek(). Call rewind() first")
            }
            LookaheadError::PeekWithoutRewind => {
                write!(f, "peek() called multiple times without rewind()")
            }
            LookaheadError::RewindWithoutPeek => write!(f, "rewind() called without peek()"),
        }
    }
}

impl Error for LookaheadError {}

/// Iterator wrapper that can look ahead at upcoming items and then return
/// some or all of them to the front of the stream.
///
/// Iterating normally delivers each item exactly once, in source order.
/// `peek()` opens a session that draws the same upcoming items without
/// committing to them; `rewind()` / `rewind_n()` close the session and decide
/// how many of the drawn items get delivered again. The two modes must not be
/// mixed: while a session is open, pulling through `Iterator::next` panics
/// with [`LookaheadError::IterateWhilePeeking`] and a second `peek()` is
/// rejected, until a rewind closes the session.
///
/// Exhaustion of the source is silent and sticky, but items restored by a
/// rewind are still delivered afterwards.
pub struct Lookahead<I: Iterator> {
    source: Fuse<I>,
    returned: VecDeque<I::Item>,
    peeked: Vec<I::Item>,
    peeking: bool,
}

impl<I: Iterator> Lookahead<I> {
    pub fn new(iter: I) -> Lookahead<I> {
        Lookahead {
            // Fuse so that exhaustion stays exhausted no matter how often the
            // source is pulled afterwards.
            source: iter.fuse(),
            returned: VecDeque::new(),
            peeked: Vec::new(),
            peeking: false,
        }
    }

    /// Identity. Shadows [`IntoLookahead::lookahead`] so re-wrapping keeps
    /// the same object, including any open peek session.
    pub fn lookahead(self) -> Lookahead<I> {
        self
    }

    /// Open a peek session and return a view over the upcoming items.
    ///
    /// Fails if a session is already open, in which case that session stays
    /// untouched and rewindable.
    pub fn peek(&mut self) -> Result<Peek<'_, I>, LookaheadError> {
        if self.peeking {
            return Err(LookaheadError::PeekWithoutRewind);
        }
        self.peeking = true;
        Ok(Peek { look: self })
    }

    /// Close the current peek session, restoring every item drawn during it
    /// as if the peek never happened.
    pub fn rewind(&mut self) -> Result<(), LookaheadError> {
        self.rewind_n(usize::MAX)
    }

    /// Close the current peek session, restoring only the last `n` items
    /// drawn during it. `0` drops them all; an `n` larger than the session
    /// restores everything.
    pub fn rewind_n(&mut self, n: usize) -> Result<(), LookaheadError> {
        if !self.peeking {
            return Err(LookaheadError::RewindWithoutPeek);
        }
        let keep = n.min(self.peeked.len());
        let start = self.peeked.len() - keep;
        // Prepend the kept suffix so anything still buffered from an earlier
        // rewind stays behind it in order.
        for item in self.peeked.drain(start..).rev() {
            self.returned.push_front(item);
        }
        self.peeked.clear();
        self.peeking = false;
        Ok(())
    }

    fn pull(&mut self) -> Option<I::Item> {
        match self.returned.pop_front() {
            Some(item) => Some(item),
            None => self.source.next(),
        }
    }
}

impl<I: Iterator> Iterator for Lookahead<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.peeking {
            panic!("{}", LookaheadError::IterateWhilePeeking);
        }
        self.pull()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let buffered = self.returned.len();
        let (lo, hi) = self.source.size_hint();
        (lo + buffered, hi.map(|hi| hi + buffered))
    }
}

/// View over the upcoming items of a [`Lookahead`], created by
/// [`Lookahead::peek`]. Every item drawn through it is retained for the
/// rewind that closes the session.
pub struct Peek<'a, I: Iterator> {
    look: &'a mut Lookahead<I>,
}

impl<I: Iterator> fmt::Debug for Peek<'_, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Peek {{ peeked: {} }}", self.look.peeked.len())
    }
}

impl<I: Iterator> Peek<'_, I> {
    /// Draw the next upcoming item without committing to it. Returns `None`
    /// once the stream is exhausted.
    pub fn next(&mut self) -> Option<&I::Item> {
        let item = self.look.pull()?;
        self.look.peeked.push(item);
        self.look.peeked.last()
    }
}

/// Wrap any iterable so it supports the peek/rewind protocol.
pub trait IntoLookahead: IntoIterator + Sized {
    fn lookahead(self) -> Lookahead<Self::IntoIter> {
        Lookahead::new(self.into_iter())
    }
}

impl<T: IntoIterator> IntoLookahead for T {}
