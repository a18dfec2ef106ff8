//! Value types the splitting routines operate on.
//!
//! Everything is an exact fraction of a whole note: [`Length`] for
//! durations, [`AbsolutePosition`] for offsets on the timeline,
//! [`Meter`] for the measure grid. All of them are immutable value
//! types, constructed per call and discarded after use.

pub mod length;
pub mod meter;
pub mod position;

pub use length::Length;
pub use meter::Meter;
pub use position::AbsolutePosition;

/// Finest subdivision the splitter agrees to work with.
pub(crate) static LIMIT_DENOMINATOR: u64 = 128;
