//! Button and switch sampling with pressed-edge detection.
//!
//! Raw port reads come in through [`InputPort`] and are normalized once in
//! [`Sampler::sample`]: buttons are active-low on the wire and active-high
//! from there on, and undefined register bits are masked off, so polarity
//! and bus noise never reach command handling. Edge detection compares
//! consecutive samples with no debounce window; a single noisy sample can
//! fake an edge, a limitation kept deliberately rather than papered over
//! with filtering.

use crate::command::EdgeSet;
use crate::types::{DisplayMode, KEY_MASK, LAP_SWITCH_BIT};
use vcell::VolatileCell;

/// Trait for the raw button and switch input ports.
pub trait InputPort {
    /// One instantaneous key-port read (active-low buttons in the low bits).
    fn keys(&self) -> u32;

    /// One instantaneous switch-port read.
    fn switches(&self) -> u32;
}

/// A single memory-mapped parallel input register.
#[repr(C)]
pub struct InputRegister {
    /// Pin levels (read).
    pub data: VolatileCell<u32>,
}

impl InputRegister {
    /// Returns the input register at a peripheral base address.
    ///
    /// # Safety
    /// `base` must be the base address of a parallel input port, mapped
    /// and valid for the whole program lifetime, and not accessed through
    /// any other Rust reference.
    pub unsafe fn at(base: usize) -> &'static Self {
        unsafe { &*(base as *const Self) }
    }
}

/// The key and switch ports paired behind [`InputPort`].
pub struct PortPins<'r> {
    keys: &'r InputRegister,
    switches: &'r InputRegister,
}

impl<'r> PortPins<'r> {
    /// Pairs the button and switch input registers.
    pub fn new(keys: &'r InputRegister, switches: &'r InputRegister) -> Self {
        Self { keys, switches }
    }
}

impl InputPort for PortPins<'_> {
    fn keys(&self) -> u32 {
        self.keys.data.get()
    }

    fn switches(&self) -> u32 {
        self.switches.data.get()
    }
}

/// One normalized input sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputSample {
    /// Active-high pressed bits, one per button.
    pub pressed: u8,

    /// Lap-switch level.
    pub lap_switch: bool,
}

/// Polls the input ports, turning raw levels into per-cycle edges and a
/// display mode.
///
/// Holds the previous normalized button sample between cycles; that word
/// exists solely to derive the next cycle's edges. The initial previous
/// sample is all-released, so a button already held at power-up produces
/// one edge on the first poll.
pub struct Sampler<'p, P: InputPort> {
    port: &'p P,
    previous: u8,
}

impl<'p, P: InputPort> Sampler<'p, P> {
    /// Creates a sampler with an all-released previous sample.
    pub fn new(port: &'p P) -> Self {
        Self { port, previous: 0 }
    }

    /// Reads both ports once and normalizes the raw words.
    pub fn sample(&self) -> InputSample {
        let keys = self.port.keys();
        let switches = self.port.switches();
        InputSample {
            pressed: (!keys & KEY_MASK) as u8,
            lap_switch: switches & LAP_SWITCH_BIT != 0,
        }
    }

    /// One input cycle: sample, derive pressed edges against the stored
    /// previous sample, replace it, and map the switch level to a mode.
    pub fn poll(&mut self) -> (EdgeSet, DisplayMode) {
        let input = self.sample();
        let edges = EdgeSet::rising(self.previous, input.pressed);
        self.previous = input.pressed;
        (edges, DisplayMode::from_lap_level(input.lap_switch))
    }
}
