use fraction::{Fraction, Zero};

use crate::primitives::{
    AbsolutePosition, Length, Meter, LIMIT_DENOMINATOR,
};

use super::{is_representable, SplitError, SplitResult};

/// Cut the single largest notatable value from `duration` at
/// `position`.
///
/// The cut never crosses the barline: whatever spills into the next
/// measure is clipped away before anything else. A representable value
/// stays whole if it starts on the barline or lands exactly on the
/// beat grid; strictly inside a beat the remainder of that beat is
/// taken when it reads as one symbol. Everything else falls back to
/// the binary grid implied by the position, halved until it fits, with
/// dotted values accepted as soon as the grid is fine enough. Rests
/// take a dotted value from the halving only below beat level — a
/// dotted rest on a coarse grid is harder to read than a tied pair.
///
/// The returned value is always representable under `max_dots` and
/// never larger than the clipped input.
///
/// # Example
/// ```
/// # use fraction::Fraction;
/// # use score_split::{split, AbsolutePosition, Length, Meter};
/// let meter = Meter::new(4, 4);
/// // a dotted quarter on the barline needs no split
/// let cut = split(
///     &AbsolutePosition::from(0.0),
///     &Length::from(Fraction::new(3u64, 8u64)),
///     &meter,
///     false,
///     2,
/// )
/// .unwrap();
/// assert_eq!(cut, Length::from(Fraction::new(3u64, 8u64)));
/// ```
pub fn split(
    position: &AbsolutePosition,
    duration: &Length,
    meter: &Meter,
    is_rest: bool,
    max_dots: u8,
) -> SplitResult<Length> {
    let measure_length = meter.measure_length();
    let measure_position = position.measure_position(meter);

    // only the part that fits into the current measure is considered
    let mut duration = duration.get();
    if measure_position + duration > measure_length {
        duration = position.distance_to_bar_end(meter).get();
    }
    if duration.is_zero() {
        return Err(SplitError::ZeroDuration(position.get()));
    }

    // single value at the start of the bar
    if measure_position.is_zero()
        && is_representable(duration, max_dots)?
    {
        return Ok(Length::from(duration));
    }

    // off-beat value that still ends on the beat grid
    let ending_position = measure_position + duration;
    let ends_on_beat = *ending_position
        .denom()
        .expect("no denominator in position")
        <= meter.beat_denominator();
    if is_representable(duration, max_dots)? && ends_on_beat {
        return Ok(Length::from(duration));
    }

    // strictly inside a beat the largest chunk still ending on the
    // grid is the remainder of the beat; take it when it reads as one
    // symbol
    let beat_length = meter.beat_length();
    let beat_position = measure_position % beat_length;
    if !beat_position.is_zero() {
        let to_next_beat = beat_length - beat_position;
        if duration >= to_next_beat
            && is_representable(to_next_beat, max_dots)?
        {
            return Ok(Length::from(to_next_beat));
        }
    }

    // fall back to the binary grid implied by the position
    let position_denominator = *measure_position
        .denom()
        .expect("no denominator in position");
    let mut division = Fraction::new(1u64, position_denominator);
    if duration >= division {
        return Ok(Length::from(division));
    }
    let numerator =
        *duration.numer().expect("no numerator in duration");
    let duration_denominator =
        *duration.denom().expect("no denominator in duration");
    loop {
        let division_denominator = *division
            .denom()
            .expect("no denominator in division");
        let below_beat =
            division_denominator > meter.beat_denominator();
        if max_dots >= 1
            && numerator == 3
            && duration_denominator >= division_denominator * 2
            && (!is_rest || below_beat)
        {
            return Ok(Length::from(duration));
        }
        if max_dots >= 2
            && numerator == 7
            && duration_denominator >= division_denominator * 4
            && (!is_rest || below_beat)
        {
            return Ok(Length::from(duration));
        }
        if division_denominator > LIMIT_DENOMINATOR {
            return Err(SplitError::SubdivisionLimit(
                duration,
                LIMIT_DENOMINATOR,
            ));
        }
        division = division / Fraction::from(2u64);
        if duration >= division {
            break;
        }
    }
    Ok(Length::from(division))
}

#[cfg(test)]
mod tests {
    use fraction::Fraction;

    use crate::primitives::{AbsolutePosition, Length, Meter};
    use crate::splitting::split;

    fn cut(
        position: Fraction,
        duration: Fraction,
        meter: &Meter,
        is_rest: bool,
        max_dots: u8,
    ) -> Fraction {
        split(
            &AbsolutePosition::from(position),
            &Length::from(duration),
            meter,
            is_rest,
            max_dots,
        )
        .expect("split failed")
        .get()
    }

    #[test]
    fn grid_fallback() {
        let meter = Meter::new(4, 4);
        // 5/16 on the barline: a quarter is the largest plain value
        assert_eq!(
            cut(
                Fraction::from(0.0),
                Fraction::new(5u64, 16u64),
                &meter,
                false,
                2
            ),
            Fraction::new(1u64, 4u64)
        );
        // the 1/16 tail at the half-bar halves down to its own size
        assert_eq!(
            cut(
                Fraction::from(0.5),
                Fraction::new(1u64, 16u64),
                &meter,
                false,
                2
            ),
            Fraction::new(1u64, 16u64)
        );
    }

    #[test]
    fn dotted_value_accepted_on_fine_grid() {
        let meter = Meter::new(4, 4);
        // dotted eighth at the last beat: grid is twice as fine
        assert_eq!(
            cut(
                Fraction::new(3u64, 4u64),
                Fraction::new(3u64, 16u64),
                &meter,
                false,
                2
            ),
            Fraction::new(3u64, 16u64)
        );
    }
}
