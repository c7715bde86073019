use std::cmp::min;
use std::fmt;
use std::iter::FusedIterator;

use log::debug;

use crate::position::{BidirectionalPosition, Position, SentinelPosition};

/// View over at most `n` elements of a sequence.
///
/// The view is active while it has elements left to yield and its position is
/// valid. Stepping an inactive view does nothing.
#[derive(Clone)]
pub struct TakeView<P> {
    remaining: usize,
    position: P,
    reversed: bool,
    // `Position::advance` for prefixes, `BidirectionalPosition::retreat` for tails.
    step: fn(&mut P),
}

/// Signed constructor: the first `n` elements for `n >= 0`, otherwise the last
/// `-n` elements in reverse order.
///
/// ```
/// use termseq::{take, BoundedCursor};
///
/// let v = [1, 2, 3];
/// let head: Vec<_> = take(2, BoundedCursor::over(&v)).copied().collect();
/// let tail: Vec<_> = take(-2, BoundedCursor::over(&v)).copied().collect();
/// assert_eq!(head, [1, 2]);
/// assert_eq!(tail, [3, 2]);
/// ```
pub fn take<P>(n: isize, position: P) -> TakeView<P>
where
    P: BidirectionalPosition + SentinelPosition,
{
    if n >= 0 {
        TakeView::new(n.unsigned_abs(), position)
    } else {
        TakeView::from_tail(n.unsigned_abs(), position)
    }
}

impl<P: SentinelPosition> TakeView<P> {
    pub fn new(n: usize, position: P) -> Self {
        TakeView {
            remaining: n,
            position,
            reversed: false,
            step: P::advance,
        }
    }

    pub fn is_active(&self) -> bool {
        self.remaining > 0 && self.position.is_valid()
    }
}

impl<P> TakeView<P>
where
    P: BidirectionalPosition + SentinelPosition,
{
    /// The last `n` elements of the sequence at `position`, walking backward
    /// from its final element. `n` is clamped to the sequence's size.
    pub fn from_tail(n: usize, position: P) -> Self {
        // One walk finds both the final element and the sequence's size.
        let mut ahead = position.clone();
        let mut start = position;
        let mut size = 0;
        if ahead.is_valid() {
            ahead.advance();
            size = 1;
            while ahead.is_valid() {
                ahead.advance();
                start.advance();
                size += 1;
            }
        }
        let count = min(n, size);
        debug!("take: last {} of {} elements reversed", count, size);
        TakeView {
            remaining: count,
            position: start,
            reversed: true,
            step: P::retreat,
        }
    }
}

impl<P: fmt::Debug> fmt::Debug for TakeView<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TakeView")
            .field("remaining", &self.remaining)
            .field("position", &self.position)
            .field("reversed", &self.reversed)
            .finish_non_exhaustive()
    }
}

// `step` follows from `reversed`, so it is left out of the comparison.
impl<P: PartialEq> PartialEq for TakeView<P> {
    fn eq(&self, other: &Self) -> bool {
        self.remaining == other.remaining
            && self.reversed == other.reversed
            && self.position == other.position
    }
}

impl<P: SentinelPosition> Position for TakeView<P> {
    type Item = P::Item;

    fn get(&self) -> Option<P::Item> {
        if self.is_active() {
            self.position.get()
        } else {
            None
        }
    }

    fn advance(&mut self) {
        if !self.is_active() {
            return;
        }
        self.remaining -= 1;
        // The last step stays put so a tail never walks off the front.
        if self.remaining > 0 {
            (self.step)(&mut self.position);
        }
    }
}

impl<P: SentinelPosition> SentinelPosition for TakeView<P> {
    fn is_valid(&self) -> bool {
        self.is_active()
    }
}

impl<P: SentinelPosition> Iterator for TakeView<P> {
    type Item = P::Item;

    fn next(&mut self) -> Option<P::Item> {
        let item = self.get()?;
        self.advance();
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.is_active() {
            (0, Some(self.remaining))
        } else {
            (0, Some(0))
        }
    }
}

impl<P: SentinelPosition> FusedIterator for TakeView<P> {}
