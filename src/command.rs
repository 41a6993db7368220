//! Button commands and per-cycle edge sets.

use crate::types::KEY_COUNT;
use heapless::Vec;

/// Stopwatch control commands, one per momentary button.
///
/// Discriminants are the button's bit position on the key port. The same
/// order fixes command priority when several edges land in one poll
/// cycle: commands are applied lowest bit first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Begin counting.
    Start = 0,

    /// Freeze the live count.
    Stop = 1,

    /// Snapshot the live count into the lap slot.
    Lap = 2,

    /// Zero the live count and the lap slot.
    Clear = 3,
}

impl Command {
    /// All commands in priority order (key bit 0 first).
    pub const ALL: [Command; KEY_COUNT] =
        [Command::Start, Command::Stop, Command::Lap, Command::Clear];

    /// The key-port bit carrying this command.
    #[inline]
    pub fn key_bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// Pressed-edge set for a single poll cycle.
///
/// One bit per button, set when that button went from released to pressed
/// between the previous and the current sample. An edge set is transient;
/// it is derived, applied, and discarded within one cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EdgeSet(u8);

impl EdgeSet {
    /// The empty set.
    pub const EMPTY: Self = EdgeSet(0);

    /// Derives pressed edges between two normalized active-high samples:
    /// bits pressed now that were released before. Held buttons and
    /// releases contribute nothing.
    pub fn rising(previous: u8, current: u8) -> Self {
        EdgeSet(current & !previous)
    }

    /// Returns true if no button edged this cycle.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Returns true if this command's button edged this cycle.
    pub fn contains(&self, command: Command) -> bool {
        self.0 & command.key_bit() != 0
    }

    /// Commands for every edged button, in priority order.
    pub fn commands(&self) -> Vec<Command, KEY_COUNT> {
        let mut commands = Vec::new();
        for command in Command::ALL {
            if self.contains(command) {
                let _ = commands.push(command);
            }
        }
        commands
    }
}
