use fraction::Fraction;

/// The measure grid: how many beats a measure holds and which
/// power-of-two note value carries one beat.
///
/// Measure length is `beats / beat_denominator` in whole notes, so
/// 4/4 — `Meter::new(4, 4)` — spans one whole note.
#[derive(Debug, PartialEq, Clone)]
pub struct Meter {
    beats: Fraction,
    beat_denominator: u64,
}
impl Meter {
    pub fn new(beats: u64, beat_denominator: u64) -> Self {
        Self {
            beats: Fraction::from(beats),
            beat_denominator,
        }
    }
    /// Meter with a non-integer amount of beats.
    pub fn fractional(beats: Fraction, beat_denominator: u64) -> Self {
        Self {
            beats,
            beat_denominator,
        }
    }
    /// Rebuild the meter from measure and beat lengths in whole notes.
    ///
    /// The beat denominator is taken from the reduced denominator of
    /// `beat_length`, and the beat count is scaled so that
    /// [`Meter::measure_length`] reproduces `measure_length` exactly.
    ///
    /// # Example
    /// ```
    /// # use fraction::Fraction;
    /// # use score_split::Meter;
    /// let meter = Meter::from_lengths(
    ///     Fraction::from(1.0),
    ///     Fraction::new(1u64, 4u64),
    /// );
    /// assert_eq!(meter, Meter::new(4, 4));
    /// ```
    pub fn from_lengths(
        measure_length: Fraction,
        beat_length: Fraction,
    ) -> Self {
        let beat_denominator = *beat_length
            .denom()
            .expect("no denominator in beat length");
        Self {
            beats: measure_length * Fraction::from(beat_denominator),
            beat_denominator,
        }
    }
    pub fn beats(&self) -> Fraction {
        self.beats
    }
    pub fn beat_denominator(&self) -> u64 {
        self.beat_denominator
    }
    /// Measure length in whole notes.
    pub fn measure_length(&self) -> Fraction {
        self.beats / Fraction::from(self.beat_denominator)
    }
    /// One beat in whole notes.
    pub fn beat_length(&self) -> Fraction {
        Fraction::new(1u64, self.beat_denominator)
    }
}

#[cfg(test)]
mod tests {
    use fraction::Fraction;

    use crate::primitives::Meter;

    #[test]
    fn meter_lengths() {
        let meter = Meter::new(7, 8);
        assert_eq!(meter.measure_length(), Fraction::new(7u64, 8u64));
        assert_eq!(meter.beat_length(), Fraction::new(1u64, 8u64));
    }
    #[test]
    fn meter_from_lengths() {
        let meter = Meter::from_lengths(
            Fraction::new(3u64, 4u64),
            Fraction::new(1u64, 8u64),
        );
        assert_eq!(meter, Meter::new(6, 8));
        assert_eq!(meter.measure_length(), Fraction::new(3u64, 4u64));

        let meter = Meter::from_lengths(
            Fraction::new(7u64, 16u64),
            Fraction::new(1u64, 8u64),
        );
        assert_eq!(
            meter,
            Meter::fractional(Fraction::new(7u64, 2u64), 8)
        );
        assert_eq!(meter.measure_length(), Fraction::new(7u64, 16u64));
    }
}
