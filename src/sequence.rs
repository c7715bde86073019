use log::trace;
use thiserror::Error;

use crate::position::{BidirectionalPosition, Position, SentinelPosition};

/// A query that needs a valid position was handed an exhausted one.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("invalid start position")]
pub struct InvalidStart;

/// Advance `s` until it is no longer valid and return that position.
///
/// ```
/// use termseq::{end, Position, SliceCursor};
///
/// let data = [7u8, 8, 0];
/// let e = end(SliceCursor::begin(&data)).unwrap();
/// assert_eq!(e.get(), Some(&0));
/// ```
pub fn end<P: SentinelPosition>(mut s: P) -> Result<P, InvalidStart> {
    if !s.is_valid() {
        return Err(InvalidStart);
    }
    let mut steps = 1usize;
    s.advance();
    while s.is_valid() {
        s.advance();
        steps += 1;
    }
    trace!("end: reached after {} steps", steps);
    Ok(s)
}

/// Like [`end`], but an already exhausted position is its own end.
pub fn end_or_self<P: SentinelPosition>(s: P) -> P {
    end(s.clone()).unwrap_or(s)
}

pub fn skip<P: BidirectionalPosition>(n: isize, mut s: P) -> P {
    s.offset(n);
    s
}

/// [`skip`] for positions that only move forward. Costs `n` steps unless the
/// position overrides `advance_by`.
pub fn skip_forward<P: Position>(n: usize, mut s: P) -> P {
    s.advance_by(n);
    s
}

pub fn size<P: SentinelPosition>(s: P) -> usize {
    s.remaining()
}

/// Position of the final valid element: advancing the result once gives
/// [`end`] of `s`.
pub fn last<P: SentinelPosition>(mut s: P) -> Result<P, InvalidStart> {
    if !s.is_valid() {
        return Err(InvalidStart);
    }
    let mut trailing = s.clone();
    s.advance();
    while s.is_valid() {
        s.advance();
        trailing.advance();
    }
    Ok(trailing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounded::{make_bounded, BoundedCursor};
    use crate::slice_cursor::SliceCursor;

    fn advanced<P: Position>(mut p: P, n: usize) -> P {
        for _ in 0..n {
            p.advance();
        }
        p
    }

    #[test]
    fn end_and_size_agree() {
        let data = [3, 1, 4, 1, 5];
        for k in 1..=data.len() {
            let s = SliceCursor::begin(&data[..k]);
            assert_eq!(size(s), k);
            assert_eq!(end(s), Ok(advanced(s, k)));
        }
    }

    #[test]
    fn end_stops_at_sentinel() {
        let data = ['h', 'i', '\0', 'x'];
        let s = SliceCursor::begin(&data);
        let e = end(s).unwrap();
        assert_eq!(e.index(), Some(2));
        assert_eq!(size(s), 2);
    }

    #[test]
    fn end_does_not_touch_input() {
        let data = [1, 2];
        let s = SliceCursor::begin(&data);
        let _ = end(s);
        assert_eq!(s.get(), Some(&1));
    }

    #[test]
    fn invalid_start() {
        let data = [0u32, 1];
        let s = SliceCursor::begin(&data);
        assert_eq!(end(s), Err(InvalidStart));
        assert_eq!(last(s), Err(InvalidStart));
        assert_eq!(size(s), 0);
        assert_eq!(InvalidStart.to_string(), "invalid start position");

        let empty: [i32; 0] = [];
        assert_eq!(end(BoundedCursor::over(&empty)), Err(InvalidStart));
    }

    #[test]
    fn end_is_a_fixed_point() {
        let data = [1, 2, 3];
        let e = end(SliceCursor::begin(&data)).unwrap();
        assert_eq!(end_or_self(e), e);
        assert_eq!(end_or_self(SliceCursor::begin(&data)), e);
        assert_eq!(end(e), Err(InvalidStart));
    }

    #[test]
    fn last_is_one_before_end() {
        let data = [9, 8, 7, 6];
        for k in 1..=data.len() {
            let s = SliceCursor::begin(&data[..k]);
            let l = last(s).unwrap();
            assert_eq!(l.get(), Some(&data[k - 1]));
            assert_eq!(advanced(l, 1), end(s).unwrap());
        }
    }

    #[test]
    fn skip_composes() {
        let data = [1, 2, 3, 4, 5];
        let s = SliceCursor::with_index(&data, 2);
        assert_eq!(skip(0, s), s);
        for a in -2isize..=2 {
            for b in -2isize..=2 {
                assert_eq!(skip(a, skip(b, s)), skip(a + b, s));
            }
        }
        assert_eq!(skip(-2, s).get(), Some(&1));
        assert_eq!(skip_forward(2, s).get(), Some(&5));
    }

    #[test]
    fn scenario_one_two_three() {
        let v = [1, 2, 3];
        let s = BoundedCursor::over(&v);
        assert_eq!(size(s.clone()), 3);
        assert_eq!(last(s.clone()).unwrap().get(), Some(&3));

        let e = end(s.clone()).unwrap();
        assert!(e.same_position(&SliceCursor::end(&v)));

        let window = make_bounded(SliceCursor::begin(&v), SliceCursor::with_index(&v, 2));
        assert_eq!(size(window.clone()), 2);
        assert_eq!(last(window).unwrap().get(), Some(&2));
    }
}
