//! Offsets on a continuous timeline, measured in whole notes.
//!
//! The splitter keeps a single absolute cursor and derives the offset
//! inside the current measure by exact modulo against the meter, so no
//! bar map has to be maintained.
//!
//! # Examples
//!
//! ```
//! use fraction::Fraction;
//! use score_split::{AbsolutePosition, Length, Meter};
//!
//! let meter = Meter::new(4, 4);
//! let mut pos = AbsolutePosition::from(Fraction::new(9u64, 8u64));
//! assert_eq!(pos.measure_position(&meter), Fraction::new(1u64, 8u64));
//! assert_eq!(
//!     pos.distance_to_bar_end(&meter),
//!     Length::from(Fraction::new(7u64, 8u64))
//! );
//! pos += Length::from(Fraction::new(7u64, 8u64));
//! assert_eq!(pos.measure_position(&meter), Fraction::from(0.0));
//! ```

use std::ops::{Add, AddAssign};

use fraction::Fraction;

use super::{Length, Meter};

/// Absolute position in whole notes, counted from the start of the
/// piece.
#[derive(Debug, PartialEq, PartialOrd, Clone)]
pub struct AbsolutePosition {
    position: Fraction,
}
impl AbsolutePosition {
    pub fn new(position: Fraction) -> Self {
        Self { position }
    }
    pub fn get(&self) -> Fraction {
        self.position
    }
    /// Offset from the start of the measure the position falls into.
    pub fn measure_position(&self, meter: &Meter) -> Fraction {
        self.position % meter.measure_length()
    }
    /// Distance to the measure's right barline.
    ///
    /// For example: position 3/8 in a 4/4 measure is 5/8 away from the
    /// barline.
    pub fn distance_to_bar_end(&self, meter: &Meter) -> Length {
        Length::from(
            meter.measure_length() - self.measure_position(meter),
        )
    }
}
impl From<Fraction> for AbsolutePosition {
    fn from(value: Fraction) -> Self {
        Self { position: value }
    }
}
impl From<f64> for AbsolutePosition {
    fn from(value: f64) -> Self {
        Self {
            position: Fraction::from(value),
        }
    }
}
impl Add<Length> for AbsolutePosition {
    fn add(self, rhs: Length) -> Self::Output {
        Self {
            position: self.get() + rhs.get(),
        }
    }
    type Output = Self;
}
impl AddAssign<Length> for AbsolutePosition {
    fn add_assign(&mut self, rhs: Length) {
        self.position = self.position + rhs.get();
    }
}
