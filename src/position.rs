use num_traits::Zero;

/// A location in a sequence that can be read and moved forward.
///
/// Positions are cheap values: every query in this crate takes them by value
/// and works on its own copy.
pub trait Position: Clone {
    type Item;

    /// Element at this position, or `None` if there is nothing readable here.
    fn get(&self) -> Option<Self::Item>;

    fn advance(&mut self);

    fn advance_by(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }
}

pub trait BidirectionalPosition: Position {
    fn retreat(&mut self);

    fn retreat_by(&mut self, n: usize) {
        for _ in 0..n {
            self.retreat();
        }
    }

    /// Move forward for positive `n`, backward for negative `n`.
    fn offset(&mut self, n: isize) {
        if n >= 0 {
            self.advance_by(n.unsigned_abs());
        } else {
            self.retreat_by(n.unsigned_abs());
        }
    }
}

/// Positions that can jump in constant time. Implementors are expected to
/// override `advance_by` and `retreat_by` as well.
pub trait RandomAccessPosition: BidirectionalPosition {
    /// Signed number of steps from `self` to `other`.
    fn distance_to(&self, other: &Self) -> isize;
}

/// A position that can tell whether it still points into its sequence.
pub trait SentinelPosition: Position {
    fn is_valid(&self) -> bool;

    /// Number of valid elements from here to the end of the sequence.
    ///
    /// The default walks a copy forward until it becomes invalid. Types that
    /// know their end up front can answer without scanning.
    fn remaining(&self) -> usize {
        let mut p = self.clone();
        let mut count = 0;
        while p.is_valid() {
            p.advance();
            count += 1;
        }
        count
    }
}

/// Element values that mark the end of a sentinel-terminated sequence.
pub trait Sentinel {
    fn is_sentinel(&self) -> bool;
}

macro_rules! sentinel_zero {
    ($($T:ty),+) => {
        $(
            impl Sentinel for $T {
                fn is_sentinel(&self) -> bool {
                    Zero::is_zero(self)
                }
            }
        )+
    };
}

sentinel_zero!(u8, u16, u32, u64, u128, usize);
sentinel_zero!(i8, i16, i32, i64, i128, isize);
sentinel_zero!(f32, f64);

impl Sentinel for bool {
    fn is_sentinel(&self) -> bool {
        !*self
    }
}

impl Sentinel for char {
    fn is_sentinel(&self) -> bool {
        *self == '\0'
    }
}

impl<T> Sentinel for Option<T> {
    fn is_sentinel(&self) -> bool {
        self.is_none()
    }
}

impl<T> Sentinel for *const T {
    fn is_sentinel(&self) -> bool {
        self.is_null()
    }
}

impl<T> Sentinel for *mut T {
    fn is_sentinel(&self) -> bool {
        self.is_null()
    }
}

impl<T: Sentinel + ?Sized> Sentinel for &T {
    fn is_sentinel(&self) -> bool {
        (**self).is_sentinel()
    }
}
