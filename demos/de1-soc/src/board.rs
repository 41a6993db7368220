//! DE1-SoC peripheral map for the stopwatch wiring.
//!
//! Addresses are the Cyclone V HPS private timer and the Altera
//! University Program parallel ports bridged into the HPS address space.

/// Input clock of the ARM A9 private timer.
pub const CLOCK_HZ: u32 = 200_000_000;

/// ARM A9 private interval timer (load/count/control/status).
pub const TIMER_BASE: usize = 0xFFFE_C600;

/// Pushbutton KEY port: four active-low buttons in the low bits.
pub const KEY_BASE: usize = 0xFF20_0050;

/// Slide switch SW port: SW0 selects the lap view.
pub const SW_BASE: usize = 0xFF20_0040;

/// Seven-segment displays HEX3..HEX0, one byte lane per digit.
pub const HEX3_HEX0_BASE: usize = 0xFF20_0020;

/// Seven-segment displays HEX5..HEX4 in the two low byte lanes.
pub const HEX5_HEX4_BASE: usize = 0xFF20_0030;
