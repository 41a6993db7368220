//! Shared input and display vocabulary.

/// Number of momentary buttons on the key port.
pub const KEY_COUNT: usize = 4;

/// Mask of defined bits in the key port.
pub const KEY_MASK: u32 = 0xF;

/// Switch-port bit selecting the lap view.
pub const LAP_SWITCH_BIT: u32 = 0x1;

/// Which value the display shows.
///
/// A pure function of the slide-switch level, re-derived on every poll
/// cycle; the switch never produces edge events and flipping it never
/// affects counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayMode {
    /// Live elapsed time.
    #[default]
    Live,

    /// Stored lap snapshot.
    Lap,
}

impl DisplayMode {
    /// Maps the lap-switch level to a mode: low selects `Live`, high
    /// selects `Lap`.
    pub fn from_lap_level(level: bool) -> Self {
        if level {
            DisplayMode::Lap
        } else {
            DisplayMode::Live
        }
    }
}
