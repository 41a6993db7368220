//! Stopwatch state machine tying timer expiries to elapsed time.
//!
//! Provides [`StopwatchEngine`] which owns the live count and the lap
//! snapshot, borrows its tick timer, and applies the four button commands.
//! It never touches the display; callers read
//! [`display_value`](StopwatchEngine::display_value) and render it
//! themselves.

use crate::command::Command;
use crate::time::ElapsedTime;
use crate::timer::TickTimer;
use crate::types::DisplayMode;

/// Whether the live count advances on timer expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RunState {
    /// The live count is frozen; expiries are discarded.
    #[default]
    Stopped,

    /// The live count advances one hundredth per expiry.
    Running,
}

/// Stopwatch state machine over an abstract tick timer.
///
/// The engine is pure state: every hardware effect goes through the
/// borrowed [`TickTimer`], so the same engine runs against real registers
/// or a test mock. Start and Stop gate both the run state and the timer;
/// Lap and Clear are orthogonal commands that never change the run state.
///
/// # Type Parameters
/// * `'t` - Lifetime of the timer reference
/// * `T` - Tick timer implementation type
pub struct StopwatchEngine<'t, T: TickTimer> {
    timer: &'t T,
    elapsed: ElapsedTime,
    lap: ElapsedTime,
    run_state: RunState,
}

impl<'t, T: TickTimer> StopwatchEngine<'t, T> {
    /// Creates a stopped engine at zero with the timer quiesced.
    pub fn new(timer: &'t T) -> Self {
        timer.reset();

        Self {
            timer,
            elapsed: ElapsedTime::ZERO,
            lap: ElapsedTime::ZERO,
            run_state: RunState::Stopped,
        }
    }

    /// Applies a button command by dispatching to the matching method.
    ///
    /// When several edges land in one poll cycle the caller applies them
    /// in [`Command`]'s priority order.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Start => self.start(),
            Command::Stop => self.stop(),
            Command::Lap => self.record_lap(),
            Command::Clear => self.clear(),
        }
    }

    /// Starts counting.
    ///
    /// No-op while already running; in particular the timer is not
    /// restarted, so a period already in flight is not stretched and a
    /// pending expiry is not discarded.
    pub fn start(&mut self) {
        if self.run_state == RunState::Running {
            return;
        }

        self.run_state = RunState::Running;
        self.timer.start();
    }

    /// Stops counting, freezing the live count. No-op while stopped.
    pub fn stop(&mut self) {
        if self.run_state == RunState::Stopped {
            return;
        }

        self.run_state = RunState::Stopped;
        self.timer.stop();
    }

    /// Copies the live count into the lap slot.
    ///
    /// Valid in either run state; lapping while stopped stores the frozen
    /// value. With no intervening ticks the operation is idempotent.
    pub fn record_lap(&mut self) {
        self.lap = self.elapsed;
    }

    /// Zeroes the live count and the lap slot.
    ///
    /// The run state is kept: clearing mid-run keeps counting from zero,
    /// clearing while stopped stays stopped.
    pub fn clear(&mut self) {
        self.elapsed.reset();
        self.lap.reset();
    }

    /// Polls the timer once, advancing the live count if a period elapsed
    /// while running.
    ///
    /// The expiry flag is consumed even while stopped, so a flag latched
    /// before a stop can never advance the count afterwards. Returns
    /// whether a tick was applied.
    pub fn service(&mut self) -> bool {
        let expired = self.timer.take_expired();
        if expired && self.run_state == RunState::Running {
            self.elapsed.tick();
            return true;
        }
        false
    }

    /// The value to display in the given mode. Pure read.
    pub fn display_value(&self, mode: DisplayMode) -> ElapsedTime {
        match mode {
            DisplayMode::Live => self.elapsed,
            DisplayMode::Lap => self.lap,
        }
    }

    /// Current run state.
    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    /// Returns true while the live count advances on expiry.
    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    /// The live count.
    pub fn elapsed(&self) -> ElapsedTime {
        self.elapsed
    }

    /// The stored lap snapshot.
    pub fn lap(&self) -> ElapsedTime {
        self.lap
    }
}
