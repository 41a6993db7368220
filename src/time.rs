//! Bounded elapsed-time counters with hundredth-of-a-second resolution.

use crate::DIGIT_COUNT;

/// Elapsed stopwatch time, decomposed for direct display.
///
/// Minutes, seconds, and hundredths are kept as separate bounded counters
/// so extracting display digits never needs wide division. The value only
/// ever moves forward one hundredth at a time through
/// [`tick`](ElapsedTime::tick), carrying hundredths into seconds and
/// seconds into minutes; minutes wrap from 59 back to 0 with no hour unit.
///
/// # Example
/// ```
/// use sevenseg_stopwatch::ElapsedTime;
///
/// let mut t = ElapsedTime::ZERO;
/// for _ in 0..150 {
///     t.tick();
/// }
/// assert_eq!((t.minutes(), t.seconds(), t.hundredths()), (0, 1, 50));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ElapsedTime {
    minutes: u8,
    seconds: u8,
    hundredths: u8,
}

impl ElapsedTime {
    /// The zero value, 0:00.00.
    pub const ZERO: Self = Self {
        minutes: 0,
        seconds: 0,
        hundredths: 0,
    };

    /// Creates a value from its components.
    ///
    /// # Panics
    /// Panics if `minutes` or `seconds` exceed 59, or `hundredths`
    /// exceeds 99.
    pub fn new(minutes: u8, seconds: u8, hundredths: u8) -> Self {
        assert!(minutes < 60, "minutes out of range");
        assert!(seconds < 60, "seconds out of range");
        assert!(hundredths < 100, "hundredths out of range");
        Self {
            minutes,
            seconds,
            hundredths,
        }
    }

    /// Advances by one hundredth of a second with carry propagation.
    pub fn tick(&mut self) {
        self.hundredths += 1;
        if self.hundredths == 100 {
            self.hundredths = 0;
            self.seconds += 1;
            if self.seconds == 60 {
                self.seconds = 0;
                self.minutes += 1;
                if self.minutes == 60 {
                    self.minutes = 0;
                }
            }
        }
    }

    /// Resets to zero.
    pub fn reset(&mut self) {
        *self = Self::ZERO;
    }

    /// Minutes component, 0-59.
    pub fn minutes(&self) -> u8 {
        self.minutes
    }

    /// Seconds component, 0-59.
    pub fn seconds(&self) -> u8 {
        self.seconds
    }

    /// Hundredths component, 0-99.
    pub fn hundredths(&self) -> u8 {
        self.hundredths
    }

    /// Decimal digits in display-position order: hundredths units,
    /// hundredths tens, seconds units, seconds tens, minutes units,
    /// minutes tens.
    pub fn digits(&self) -> [u8; DIGIT_COUNT] {
        [
            self.hundredths % 10,
            self.hundredths / 10,
            self.seconds % 10,
            self.seconds / 10,
            self.minutes % 10,
            self.minutes / 10,
        ]
    }
}
