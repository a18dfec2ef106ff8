//! Decomposition of raw durations into notatable values.
//!
//! Three layers, each consulting only the one below it: [`divide`]
//! walks the timeline and loops [`split`], which takes the largest
//! legal cut at a position, asking [`is_representable`] whether a
//! candidate can be written as a single symbol.

use fraction::Fraction;
use thiserror;

pub mod divide;
pub mod representable;
pub mod split;

pub use divide::divide;
pub use representable::is_representable;
pub use split::split;

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum SplitError {
    #[error("zero duration in split at position {0}")]
    ZeroDuration(Fraction),
    #[error("unsupported max_dots: {0}, expected 0, 1 or 2")]
    UnsupportedConfiguration(u8),
    #[error("duration {0} does not fit the 1/{1} grid")]
    SubdivisionLimit(Fraction, u64),
}
pub type SplitResult<T> = Result<T, SplitError>;
