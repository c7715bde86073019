//! Cursors and views over sentinel-terminated sequences: sequences whose end
//! is found by testing the current element rather than known in advance.

pub use bounded::{make_bounded, BoundedCursor};
pub use drop::{drop, DropView};
pub use position::{
    BidirectionalPosition, Position, RandomAccessPosition, Sentinel, SentinelPosition,
};
pub use sequence::{end, end_or_self, last, size, skip, skip_forward, InvalidStart};
pub use slice_cursor::SliceCursor;
pub use take::{take, TakeView};

mod bounded;
mod drop;
mod position;
mod sequence;
mod slice_cursor;
mod take;
