use std::iter::FusedIterator;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::position::{BidirectionalPosition, Position, RandomAccessPosition, SentinelPosition};
use crate::slice_cursor::SliceCursor;

/// A position paired with the position that ends its sequence.
///
/// The end is only ever compared against, never read. A bounded cursor is
/// valid while its position differs from its end, which makes it a
/// [`SentinelPosition`] over any position type that can be compared to `E`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedCursor<P, E> {
    position: P,
    end: E,
}

pub fn make_bounded<P, E>(position: P, end: E) -> BoundedCursor<P, E> {
    BoundedCursor::new(position, end)
}

impl<P, E> BoundedCursor<P, E> {
    pub fn new(position: P, end: E) -> Self {
        BoundedCursor { position, end }
    }

    pub fn position(&self) -> &P {
        &self.position
    }

    pub fn into_position(self) -> P {
        self.position
    }
}

impl<P, E: Clone> BoundedCursor<P, E> {
    pub fn end(&self) -> E {
        self.end.clone()
    }
}

impl<P: PartialEq, E> BoundedCursor<P, E> {
    /// Compares only the wrapped position with `other`, ignoring the end.
    ///
    /// Two bounded cursors over different windows of the same data can both
    /// match the same raw position while not being `==` to each other.
    pub fn same_position(&self, other: &P) -> bool {
        self.position == *other
    }
}

impl<P: RandomAccessPosition> BoundedCursor<P, P> {
    /// Elements left before the end, without walking there.
    pub fn len(&self) -> usize {
        usize::try_from(self.position.distance_to(&self.end)).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'a, T> BoundedCursor<SliceCursor<'a, T>, SliceCursor<'a, T>> {
    /// Bounded cursor over the whole of `slice`.
    pub fn over(slice: &'a [T]) -> Self {
        BoundedCursor::new(SliceCursor::begin(slice), SliceCursor::end(slice))
    }
}

impl<P, E> Position for BoundedCursor<P, E>
where
    P: Position + PartialEq<E>,
    E: Clone,
{
    type Item = P::Item;

    fn get(&self) -> Option<P::Item> {
        if self.is_valid() {
            self.position.get()
        } else {
            None
        }
    }

    fn advance(&mut self) {
        self.position.advance();
    }

    fn advance_by(&mut self, n: usize) {
        self.position.advance_by(n);
    }
}

impl<P, E> BidirectionalPosition for BoundedCursor<P, E>
where
    P: BidirectionalPosition + PartialEq<E>,
    E: Clone,
{
    fn retreat(&mut self) {
        self.position.retreat();
    }

    fn retreat_by(&mut self, n: usize) {
        self.position.retreat_by(n);
    }
}

impl<P, E> RandomAccessPosition for BoundedCursor<P, E>
where
    P: RandomAccessPosition + PartialEq<E>,
    E: Clone,
{
    fn distance_to(&self, other: &Self) -> isize {
        self.position.distance_to(&other.position)
    }
}

impl<P, E> SentinelPosition for BoundedCursor<P, E>
where
    P: Position + PartialEq<E>,
    E: Clone,
{
    fn is_valid(&self) -> bool {
        self.position != self.end
    }
}

impl<P, E> AddAssign<isize> for BoundedCursor<P, E>
where
    P: BidirectionalPosition,
{
    fn add_assign(&mut self, n: isize) {
        self.position.offset(n);
    }
}

impl<P, E> SubAssign<isize> for BoundedCursor<P, E>
where
    P: BidirectionalPosition,
{
    fn sub_assign(&mut self, n: isize) {
        self.position.offset(-n);
    }
}

impl<P, E> Add<isize> for BoundedCursor<P, E>
where
    P: BidirectionalPosition,
{
    type Output = Self;

    fn add(mut self, n: isize) -> Self {
        self += n;
        self
    }
}

impl<P, E> Sub<isize> for BoundedCursor<P, E>
where
    P: BidirectionalPosition,
{
    type Output = Self;

    fn sub(mut self, n: isize) -> Self {
        self -= n;
        self
    }
}

impl<P, E> Iterator for BoundedCursor<P, E>
where
    P: Position + PartialEq<E>,
    E: Clone,
{
    type Item = P::Item;

    fn next(&mut self) -> Option<P::Item> {
        let item = self.get()?;
        self.advance();
        Some(item)
    }
}

impl<P, E> FusedIterator for BoundedCursor<P, E>
where
    P: Position + PartialEq<E>,
    E: Clone,
{
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounded_cursor_self_test() {
        let v = vec![1, 2, 3];

        for mut i in [
            make_bounded(SliceCursor::begin(&v), SliceCursor::end(&v)),
            BoundedCursor::over(&v),
        ] {
            let i2 = i.clone();
            assert_eq!(i, i2);
            assert_eq!(i.get(), Some(&1));
            i.advance();
            assert_eq!(i.get(), Some(&2));
            i.advance();
            assert_eq!(i.get(), Some(&3));
            assert!(i.is_valid());
            i.advance();
            assert!(!i.is_valid());
            assert_eq!(i.get(), None);
            i += -1;
            assert!(i.is_valid());
            assert_eq!(i.get(), Some(&3));
        }
    }

    #[test]
    fn equality_covers_position_and_end() {
        let v = [1, 2, 3];
        let i = make_bounded(SliceCursor::begin(&v), SliceCursor::end(&v));
        let mut shorter_end = SliceCursor::end(&v);
        shorter_end.retreat();
        let i_ = make_bounded(SliceCursor::begin(&v), shorter_end);

        assert_eq!(i, i);
        assert_ne!(i, i_);
        assert_ne!(i.end(), i_.end());

        // Same place, different windows.
        assert!(i.same_position(i_.position()));
        assert!(i_.same_position(&SliceCursor::begin(&v)));
    }

    #[test]
    fn offset_to_end() {
        let v = [1, 2, 3];
        let i = BoundedCursor::over(&v);
        let size = i.remaining() as isize;
        assert_eq!(size, 3);
        assert_eq!(i.len(), 3);

        let at_end = i.clone() + size;
        assert!(at_end.same_position(&i.end()));
        assert!(!at_end.is_valid());

        assert!(at_end.is_empty());

        let back = at_end - 2;
        assert_eq!(back.get(), Some(&2));
        assert_eq!(back.len(), 2);
        assert_eq!(i.distance_to(&back), 1);
    }

    #[test]
    fn end_is_never_read() {
        // The end sits on a readable element, yet the cursor reports nothing there.
        let v = [1, 2, 3];
        let mut i = make_bounded(SliceCursor::begin(&v), SliceCursor::with_index(&v, 1));
        assert_eq!(i.get(), Some(&1));
        i.advance();
        assert_eq!(i.get(), None);
        assert_eq!(i.end().get(), Some(&2));
    }

    #[test]
    fn iterates_window() {
        let v = [1, 2, 3, 4];
        let i = make_bounded(SliceCursor::with_index(&v, 1), SliceCursor::with_index(&v, 3));
        assert_eq!(i.copied().collect::<Vec<_>>(), vec![2, 3]);
        assert_eq!(BoundedCursor::over(&v).count(), 4);
    }
}
