//! Decimal digit to seven-segment pattern encoding.

/// Segment patterns for the digits 0-9.
///
/// Active-high, segment `a` in bit 0 through segment `g` in bit 6; bit 7
/// (the decimal point) stays clear.
pub const DIGIT_PATTERNS: [u8; 10] = [
    0x3F, // 0
    0x06, // 1
    0x5B, // 2
    0x4F, // 3
    0x66, // 4
    0x6D, // 5
    0x7D, // 6
    0x07, // 7
    0x7F, // 8
    0x6F, // 9
];

/// Encodes a decimal digit as its segment pattern.
///
/// # Panics
/// Panics if `digit` is greater than 9. The engine's bounded counters
/// guarantee the range, so an out-of-range digit here is an internal
/// consistency fault, not a condition to handle.
#[inline]
pub fn encode(digit: u8) -> u8 {
    DIGIT_PATTERNS[usize::from(digit)]
}
