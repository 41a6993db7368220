//! Six-digit seven-segment display driver.
//!
//! [`SegmentPanel`] abstracts a bank of digit positions; [`render`] walks a
//! time value onto it in the fixed position order. [`HexPanel`] is the
//! memory-mapped implementation for displays wired as packed 8-bit lanes
//! inside two 32-bit output registers.

use crate::DIGIT_COUNT;
use crate::segments::encode;
use crate::time::ElapsedTime;
use vcell::VolatileCell;

/// Trait for a bank of seven-segment digit positions.
///
/// Position 0 is the rightmost digit (hundredths units) up through
/// position 5 (minutes tens).
pub trait SegmentPanel {
    /// Writes one position's segment pattern, leaving the others alone.
    fn set_digit(&mut self, position: usize, segments: u8);
}

/// A 32-bit display output register packing four 8-bit digit lanes,
/// lowest position in the lowest byte.
#[repr(C)]
pub struct HexRegister {
    /// Packed digit lanes (read/write).
    pub digits: VolatileCell<u32>,
}

impl HexRegister {
    /// Returns the display register at a peripheral base address.
    ///
    /// # Safety
    /// `base` must be the base address of a packed seven-segment output
    /// register, mapped and valid for the whole program lifetime, and not
    /// accessed through any other Rust reference.
    pub unsafe fn at(base: usize) -> &'static Self {
        unsafe { &*(base as *const Self) }
    }
}

/// Seven-segment panel over two packed display registers: positions 0-3
/// in `low`, positions 4-5 in `high`.
pub struct HexPanel<'r> {
    low: &'r HexRegister,
    high: &'r HexRegister,
}

impl<'r> HexPanel<'r> {
    /// Pairs the low (four lanes) and high (two lanes) display registers.
    pub fn new(low: &'r HexRegister, high: &'r HexRegister) -> Self {
        Self { low, high }
    }
}

impl SegmentPanel for HexPanel<'_> {
    /// Read-modify-write confined to the position's 8-bit lane; the other
    /// five positions are preserved bit-exactly.
    fn set_digit(&mut self, position: usize, segments: u8) {
        assert!(position < DIGIT_COUNT, "digit position out of range");

        let (register, lane) = if position < 4 {
            (self.low, position)
        } else {
            (self.high, position - 4)
        };

        let shift = lane * 8;
        let word = register.digits.get();
        let word = (word & !(0xFF << shift)) | (u32::from(segments) << shift);
        register.digits.set(word);
    }
}

/// Renders a time value onto a panel, one write per digit position.
pub fn render<P: SegmentPanel>(panel: &mut P, value: ElapsedTime) {
    for (position, digit) in value.digits().into_iter().enumerate() {
        panel.set_digit(position, encode(digit));
    }
}
