use fraction::Fraction;

use super::{SplitError, SplitResult};

/// True if the duration can be engraved as one symbol: a power-of-two
/// value, optionally carrying up to `max_dots` augmentation dots.
///
/// The duration is examined in lowest terms. A power-of-two numerator
/// is a plain value, a numerator of 3 is the single-dot pattern
/// (1.5 × a power-of-two base), a numerator of 7 the double-dot
/// pattern (1.75 × base). Every other numerator needs a tie.
///
/// `max_dots` outside of 0..=2 is a configuration error.
///
/// # Example
/// ```
/// # use fraction::Fraction;
/// # use score_split::is_representable;
/// assert!(is_representable(Fraction::new(3u64, 8u64), 1).unwrap());
/// assert!(!is_representable(Fraction::new(3u64, 8u64), 0).unwrap());
/// assert!(!is_representable(Fraction::new(5u64, 16u64), 2).unwrap());
/// ```
pub fn is_representable(
    duration: Fraction,
    max_dots: u8,
) -> SplitResult<bool> {
    let numerator =
        *duration.numer().expect("no numerator in duration");
    let plain = numerator.is_power_of_two();
    match max_dots {
        0 => Ok(plain),
        1 => Ok(plain || numerator == 3),
        2 => Ok(plain || numerator == 3 || numerator == 7),
        _ => Err(SplitError::UnsupportedConfiguration(max_dots)),
    }
}

#[cfg(test)]
mod tests {
    use fraction::Fraction;

    use crate::splitting::{is_representable, SplitError};

    #[test]
    fn plain_dotted_double_dotted() {
        assert!(is_representable(Fraction::new(1u64, 4u64), 0).unwrap());
        assert!(is_representable(Fraction::new(2u64, 1u64), 0).unwrap());
        assert!(!is_representable(Fraction::new(3u64, 8u64), 0).unwrap());
        assert!(is_representable(Fraction::new(3u64, 8u64), 1).unwrap());
        assert!(!is_representable(Fraction::new(7u64, 16u64), 1).unwrap());
        assert!(is_representable(Fraction::new(7u64, 16u64), 2).unwrap());
        assert!(!is_representable(Fraction::new(5u64, 16u64), 2).unwrap());
        assert!(!is_representable(Fraction::new(9u64, 16u64), 2).unwrap());
    }
    #[test]
    fn unsupported_max_dots() {
        assert_eq!(
            is_representable(Fraction::new(1u64, 4u64), 3),
            Err(SplitError::UnsupportedConfiguration(3))
        );
    }
}
