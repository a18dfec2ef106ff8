use fraction::Fraction;

use crate::primitives::{AbsolutePosition, Length, Meter};

use super::{split, SplitResult};

/// Split every duration into values that can be engraved without
/// crossing a barline.
///
/// The durations are laid out back to back on one timeline: each
/// starts exactly where the previous one ended, and `start_position`
/// anchors the first. One cut sequence is returned per input duration,
/// in input order, and each sequence sums exactly to its input. A zero
/// input duration yields an empty sequence.
///
/// `measure_length` and `beat_length` are given in whole notes; the
/// meter is rebuilt from them, so a quarter beat in a whole-note
/// measure is plain 4/4.
///
/// # Example
/// ```
/// # use fraction::Fraction;
/// # use score_split::divide;
/// let durations = [
///     Fraction::new(4u64, 16u64),
///     Fraction::new(5u64, 16u64),
///     Fraction::new(6u64, 16u64),
/// ];
/// let cuts = divide(
///     &durations,
///     Fraction::from(1.0),
///     Fraction::new(1u64, 4u64),
///     Fraction::from(0.0),
///     false,
///     2,
/// )
/// .unwrap();
/// assert_eq!(
///     cuts,
///     vec![
///         vec![Fraction::new(1u64, 4u64)],
///         vec![Fraction::new(1u64, 4u64), Fraction::new(1u64, 16u64)],
///         vec![Fraction::new(3u64, 16u64), Fraction::new(3u64, 16u64)],
///     ]
/// );
/// ```
pub fn divide(
    durations: &[Fraction],
    measure_length: Fraction,
    beat_length: Fraction,
    start_position: Fraction,
    is_rest: bool,
    max_dots: u8,
) -> SplitResult<Vec<Vec<Fraction>>> {
    let meter = Meter::from_lengths(measure_length, beat_length);
    let mut position = AbsolutePosition::new(start_position);
    let mut result = Vec::with_capacity(durations.len());
    for duration in durations {
        let mut remaining = Length::from(*duration);
        let mut cuts = Vec::new();
        while !remaining.is_zero() {
            let cut =
                split(&position, &remaining, &meter, is_rest, max_dots)?;
            log::trace!(
                "cut {} from {} at position {}",
                cut.get(),
                remaining.get(),
                position.get()
            );
            position += cut.clone();
            remaining = remaining - cut.clone();
            cuts.push(cut.get());
        }
        result.push(cuts);
    }
    Ok(result)
}
