use std::iter::FusedIterator;

use log::debug;

use crate::position::{Position, SentinelPosition};
use crate::sequence::size;

/// View over a sequence with elements removed from its front or its back.
///
/// Whatever is dropped from the front is skipped when the view is built.
/// Dropping from the back turns into a count of elements left to yield.
#[derive(Debug, Clone, PartialEq)]
pub struct DropView<P> {
    // `None` runs to the sequence's own end.
    bound: Option<usize>,
    position: P,
}

/// Signed constructor: without the first `n` elements for `n >= 0`, otherwise
/// without the last `-n` elements.
///
/// ```
/// use termseq::{drop, BoundedCursor};
///
/// let v = [1, 2, 3];
/// let front: Vec<_> = drop(1, BoundedCursor::over(&v)).copied().collect();
/// let back: Vec<_> = drop(-1, BoundedCursor::over(&v)).copied().collect();
/// assert_eq!(front, [2, 3]);
/// assert_eq!(back, [1, 2]);
/// ```
pub fn drop<P: SentinelPosition>(n: isize, position: P) -> DropView<P> {
    if n >= 0 {
        DropView::new(n.unsigned_abs(), position)
    } else {
        DropView::from_tail(n.unsigned_abs(), position)
    }
}

impl<P: SentinelPosition> DropView<P> {
    /// Skips up to `n` elements now; stops early at the end of the sequence.
    pub fn new(n: usize, mut position: P) -> Self {
        // Stepping rather than `advance_by` keeps the skip from passing the end.
        let mut skipped = 0;
        while skipped < n && position.is_valid() {
            position.advance();
            skipped += 1;
        }
        DropView {
            bound: None,
            position,
        }
    }

    /// Everything but the last `n` elements. Scans the sequence once to size it.
    pub fn from_tail(n: usize, position: P) -> Self {
        let total = size(position.clone());
        let keep = total.saturating_sub(n);
        debug!("drop: keeping {} of {} elements", keep, total);
        DropView {
            bound: Some(keep),
            position,
        }
    }

    pub fn is_active(&self) -> bool {
        self.bound != Some(0) && self.position.is_valid()
    }
}

impl<P: SentinelPosition> Position for DropView<P> {
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
        if let Some(bound) = self.bound.as_mut() {
            *bound -= 1;
        }
        self.position.advance();
    }
}

impl<P: SentinelPosition> SentinelPosition for DropView<P> {
    fn is_valid(&self) -> bool {
        self.is_active()
    }
}

impl<P: SentinelPosition> Iterator for DropView<P> {
    type Item = P::Item;

    fn next(&mut self) -> Option<P::Item> {
        let item = self.get()?;
        self.advance();
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.is_active() {
            (0, self.bound)
        } else {
            (0, Some(0))
        }
    }
}

impl<P: SentinelPosition> FusedIterator for DropView<P> {}
