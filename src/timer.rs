//! Periodic tick timer: hardware abstraction and memory-mapped driver.
//!
//! [`TickTimer`] is the seam the engine counts through: a fixed-period
//! timer whose expiries latch into a flag consumed by
//! [`take_expired`](TickTimer::take_expired). [`IntervalTimer`] implements
//! it over the four-register load/count/control/status layout common to
//! memory-mapped interval timer peripherals.

use vcell::VolatileCell;

/// Tick rate of the stopwatch clock, in expiries per second.
pub const TICK_HZ: u32 = 100;

const CONTROL_ENABLE: u32 = 1 << 0;
const CONTROL_AUTO_RELOAD: u32 = 1 << 1;
const STATUS_EXPIRED: u32 = 1 << 0;

/// Trait for the periodic hardware timer driving stopwatch ticks.
///
/// Methods take `&self`; implementations use interior mutability, which
/// hardware register cells already provide.
pub trait TickTimer {
    /// Discards any pending expiry and starts periodic counting.
    ///
    /// Dropping the stale flag first means the next tick arrives a full
    /// period after starting, never immediately.
    fn start(&self);

    /// Stops counting. A latched expiry flag is left in place.
    fn stop(&self);

    /// Stops counting and discards any pending expiry.
    fn reset(&self);

    /// Consumes the expiry flag.
    ///
    /// Returns true at most once per elapsed period; this is the only way
    /// ticks are observed.
    fn take_expired(&self) -> bool;
}

/// Errors from interval-timer configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerError {
    /// Input clock too slow to produce at least one count per tick.
    ClockTooSlow,

    /// Input clock rate is not a whole multiple of the tick rate, so the
    /// tick period cannot be represented exactly.
    InexactTickRate,
}

impl core::fmt::Display for TimerError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TimerError::ClockTooSlow => {
                write!(f, "clock too slow for one count per tick")
            }
            TimerError::InexactTickRate => {
                write!(f, "clock rate is not a whole multiple of the tick rate")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TimerError {}

/// Register layout of a memory-mapped interval timer peripheral.
#[repr(C)]
pub struct RegisterBlock {
    /// Value reloaded into the counter on expiry (write).
    pub load: VolatileCell<u32>,

    /// Current counter value (read); unused for timing decisions.
    pub count: VolatileCell<u32>,

    /// Control: bit 0 enables counting, bit 1 enables auto-reload.
    pub control: VolatileCell<u32>,

    /// Status: bit 0 latches on expiry, write 1 to clear.
    pub status: VolatileCell<u32>,
}

impl RegisterBlock {
    /// Returns the register block at a peripheral base address.
    ///
    /// # Safety
    /// `base` must be the base address of an interval-timer peripheral
    /// with this layout, mapped and valid for the whole program lifetime,
    /// and not accessed through any other Rust reference.
    pub unsafe fn at(base: usize) -> &'static Self {
        unsafe { &*(base as *const Self) }
    }
}

/// Fixed-period driver over [`RegisterBlock`], expiring [`TICK_HZ`] times
/// per second.
///
/// Construction is configuration: the reload value is derived from the
/// input clock and validated once, and the timer is left quiesced. The
/// [`TickTimer`] methods are then infallible single-register accesses.
pub struct IntervalTimer<'r> {
    regs: &'r RegisterBlock,
}

impl<'r> IntervalTimer<'r> {
    /// Configures the peripheral for [`TICK_HZ`] expiries per second and
    /// leaves it stopped with no pending expiry.
    ///
    /// `clock_hz` is the peripheral's input clock frequency. The reload
    /// value is computed from it rather than hardcoded, so the same
    /// driver serves any board whose clock divides evenly into ticks.
    pub fn new(regs: &'r RegisterBlock, clock_hz: u32) -> Result<Self, TimerError> {
        let reload = clock_hz / TICK_HZ;
        if reload == 0 {
            return Err(TimerError::ClockTooSlow);
        }
        if clock_hz % TICK_HZ != 0 {
            return Err(TimerError::InexactTickRate);
        }

        regs.load.set(reload);
        let timer = Self { regs };
        timer.reset();
        Ok(timer)
    }

    /// The configured reload value, in input-clock counts per tick.
    pub fn reload(&self) -> u32 {
        self.regs.load.get()
    }
}

impl TickTimer for IntervalTimer<'_> {
    fn start(&self) {
        self.regs.status.set(STATUS_EXPIRED);
        self.regs.control.set(CONTROL_ENABLE | CONTROL_AUTO_RELOAD);
    }

    fn stop(&self) {
        self.regs.control.set(0);
    }

    fn reset(&self) {
        self.regs.control.set(0);
        self.regs.status.set(STATUS_EXPIRED);
    }

    fn take_expired(&self) -> bool {
        if self.regs.status.get() & STATUS_EXPIRED != 0 {
            self.regs.status.set(STATUS_EXPIRED);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    extern crate std;
    use std::format;

    // A RAM-backed block records the last written word verbatim, so the
    // write-1-to-clear writes the driver issues show up as the expired
    // bit being stored where real hardware would clear it. Asserting on
    // the stored value still pins down exactly what was written.
    fn regs() -> RegisterBlock {
        RegisterBlock {
            load: VolatileCell::new(0),
            count: VolatileCell::new(0),
            control: VolatileCell::new(0),
            status: VolatileCell::new(0),
        }
    }

    #[test]
    fn new_derives_reload_from_clock() {
        let regs = regs();
        let timer = IntervalTimer::new(&regs, 200_000_000).unwrap();
        assert_eq!(timer.reload(), 2_000_000);
        assert_eq!(regs.load.get(), 2_000_000);
    }

    #[test]
    fn new_leaves_timer_stopped() {
        let regs = regs();
        regs.control.set(CONTROL_ENABLE | CONTROL_AUTO_RELOAD);
        let _timer = IntervalTimer::new(&regs, 1_000_000).unwrap();
        assert_eq!(regs.control.get(), 0);
    }

    #[test]
    fn new_rejects_clock_below_tick_rate() {
        let regs = regs();
        assert!(matches!(
            IntervalTimer::new(&regs, 50),
            Err(TimerError::ClockTooSlow)
        ));
        assert!(matches!(
            IntervalTimer::new(&regs, 0),
            Err(TimerError::ClockTooSlow)
        ));
    }

    #[test]
    fn new_rejects_clock_not_divisible_by_tick_rate() {
        let regs = regs();
        assert!(matches!(
            IntervalTimer::new(&regs, 1_000_050),
            Err(TimerError::InexactTickRate)
        ));
    }

    #[test]
    fn start_enables_with_auto_reload_and_discards_stale_expiry() {
        let regs = regs();
        let timer = IntervalTimer::new(&regs, 1_000_000).unwrap();

        regs.status.set(0);
        timer.start();
        assert_eq!(regs.control.get(), 0x3);
        // The discard is a write-1-to-clear of the expired bit
        assert_eq!(regs.status.get(), STATUS_EXPIRED);
    }

    #[test]
    fn stop_disables_counting_and_leaves_status_alone() {
        let regs = regs();
        let timer = IntervalTimer::new(&regs, 1_000_000).unwrap();
        timer.start();

        regs.status.set(0);
        timer.stop();
        assert_eq!(regs.control.get(), 0);
        assert_eq!(regs.status.get(), 0);
    }

    #[test]
    fn take_expired_reads_the_latched_flag() {
        let regs = regs();
        let timer = IntervalTimer::new(&regs, 1_000_000).unwrap();

        regs.status.set(0);
        assert!(!timer.take_expired());

        regs.status.set(STATUS_EXPIRED);
        assert!(timer.take_expired());
    }

    #[test]
    fn take_expired_issues_the_clearing_write() {
        let regs = regs();
        let timer = IntervalTimer::new(&regs, 1_000_000).unwrap();

        // Seed extra status bits; the driver must write exactly the
        // expired bit, not echo the whole register back.
        regs.status.set(STATUS_EXPIRED | 0x4);
        assert!(timer.take_expired());
        assert_eq!(regs.status.get(), STATUS_EXPIRED);
    }

    #[test]
    fn take_expired_ignores_other_status_bits() {
        let regs = regs();
        let timer = IntervalTimer::new(&regs, 1_000_000).unwrap();

        regs.status.set(0x4);
        assert!(!timer.take_expired());
    }

    #[test]
    fn error_messages_format_correctly_for_display() {
        let message = format!("{}", TimerError::ClockTooSlow);
        assert!(message.contains("too slow"));

        let message = format!("{}", TimerError::InexactTickRate);
        assert!(message.contains("whole multiple"));
    }
}
