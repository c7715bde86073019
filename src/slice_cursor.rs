use std::cmp::min;
use std::fmt;

use crate::position::{
    BidirectionalPosition, Position, RandomAccessPosition, Sentinel, SentinelPosition,
};

/// Random-access position into a borrowed slice.
///
/// Besides the elements themselves, a cursor can stand just before the first
/// element and just past the last one. Moving beyond either of those saturates.
pub struct SliceCursor<'a, T> {
    slice: &'a [T],
    // As an optimization to avoid an enum and make navigation code less
    // complex, we use 0 to represent the "before start" state and
    // slice.len()+1 to represent the "past end" state. Values in between
    // represent 1-based indices into the slice. This means that slices cannot
    // be larger than usize::MAX-2.
    pos: usize,
}

impl<'a, T> SliceCursor<'a, T> {
    /// Cursor on the first element (or past the end if `slice` is empty).
    pub fn begin(slice: &'a [T]) -> Self {
        Self::check_size(slice);
        SliceCursor { slice, pos: 1 }
    }

    /// Cursor one past the last element.
    pub fn end(slice: &'a [T]) -> Self {
        Self::check_size(slice);
        SliceCursor {
            slice,
            pos: slice.len() + 1,
        }
    }

    pub fn with_index(slice: &'a [T], index: usize) -> Self {
        Self::check_size(slice);
        assert!(index <= slice.len(), "Index out of bounds");
        SliceCursor {
            slice,
            pos: index + 1,
        }
    }

    /// Zero-based index of the element under the cursor, if any.
    pub fn index(&self) -> Option<usize> {
        if self.pos > 0 && self.pos <= self.slice.len() {
            Some(self.pos - 1)
        } else {
            None
        }
    }

    pub fn at_end(&self) -> bool {
        self.pos == self.slice.len() + 1
    }

    fn check_size(slice: &[T]) {
        assert!(slice.len() < usize::MAX - 1, "Slice too large");
    }
}

// Manual impls so that `T` does not need to be `Clone`, `Debug` or `PartialEq`.
impl<'a, T> Clone for SliceCursor<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for SliceCursor<'a, T> {}

impl<'a, T> PartialEq for SliceCursor<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.slice, other.slice) && self.pos == other.pos
    }
}

impl<'a, T> Eq for SliceCursor<'a, T> {}

impl<'a, T> fmt::Debug for SliceCursor<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SliceCursor")
            .field("len", &self.slice.len())
            .field("pos", &self.pos)
            .finish()
    }
}

impl<'a, T> Position for SliceCursor<'a, T> {
    type Item = &'a T;

    fn get(&self) -> Option<&'a T> {
        let slice = self.slice;
        self.index().map(|i| &slice[i])
    }

    fn advance(&mut self) {
        if self.pos <= self.slice.len() {
            self.pos += 1;
        }
    }

    fn advance_by(&mut self, n: usize) {
        let remaining = self.slice.len() + 1 - self.pos;
        self.pos += min(n, remaining);
    }
}

impl<'a, T> BidirectionalPosition for SliceCursor<'a, T> {
    fn retreat(&mut self) {
        if self.pos > 0 {
            self.pos -= 1;
        }
    }

    fn retreat_by(&mut self, n: usize) {
        self.pos -= min(n, self.pos);
    }
}

impl<'a, T> RandomAccessPosition for SliceCursor<'a, T> {
    fn distance_to(&self, other: &Self) -> isize {
        other.pos as isize - self.pos as isize
    }
}

impl<'a, T: Sentinel> SentinelPosition for SliceCursor<'a, T> {
    fn is_valid(&self) -> bool {
        self.get().is_some_and(|item| !item.is_sentinel())
    }
}
