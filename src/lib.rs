//! Split raw rational note durations into sequences of notatable values.
//!
//! A duration can be engraved as a single symbol only if it is a
//! power-of-two fraction of a whole note, optionally carrying up to two
//! augmentation dots — and even a legal symbol must not straddle beats
//! or barlines in unreadable ways. [`divide`] takes arbitrary exact
//! durations laid out back to back on a timeline and decomposes each
//! into an ordered run of single-symbol cuts that sum back exactly,
//! ready to be rendered as a tied chain.
//!
//! ```
//! use fraction::Fraction;
//! use score_split::divide;
//!
//! // a 4/4 bar, quarter-note beat: 5/16 entering after a quarter rest
//! let cuts = divide(
//!     &[Fraction::new(5u64, 16u64)],
//!     Fraction::from(1.0),
//!     Fraction::new(1u64, 4u64),
//!     Fraction::new(1u64, 4u64),
//!     false,
//!     2,
//! )
//! .unwrap();
//! assert_eq!(
//!     cuts,
//!     vec![vec![Fraction::new(1u64, 4u64), Fraction::new(1u64, 16u64)]]
//! );
//! ```
//!
//! All arithmetic is exact rational arithmetic over [`fraction::Fraction`];
//! floating point never takes part in a comparison.

pub mod primitives;
pub mod splitting;

pub use primitives::{AbsolutePosition, Length, Meter};
pub use splitting::{divide, is_representable, split, SplitError, SplitResult};
