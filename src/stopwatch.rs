//! Composed busy-poll control loop.

use crate::display::{SegmentPanel, render};
use crate::engine::StopwatchEngine;
use crate::sampler::{InputPort, Sampler};
use crate::timer::TickTimer;
use crate::types::DisplayMode;

/// The full stopwatch: engine, input sampler, and display panel driven by
/// one cooperative busy-poll loop.
///
/// Each [`poll`](Stopwatch::poll) performs one iteration in a fixed
/// order: service the timer, re-render the display, then sample the
/// inputs and apply any pressed edges as commands. Rendering uses the
/// switch level captured on the previous iteration, so flipping the
/// switch shows up one iteration later; at polling rates that is
/// invisible. There is no sleep or yield between iterations, keeping
/// response latency to both the timer and the buttons at a single loop
/// pass.
///
/// # Type Parameters
/// * `'t` - Lifetime of the timer reference
/// * `'p` - Lifetime of the input port reference
/// * `T` - Tick timer implementation type
/// * `P` - Input port implementation type
/// * `S` - Segment panel implementation type
pub struct Stopwatch<'t, 'p, T: TickTimer, P: InputPort, S: SegmentPanel> {
    engine: StopwatchEngine<'t, T>,
    sampler: Sampler<'p, P>,
    panel: S,
    mode: DisplayMode,
}

impl<'t, 'p, T: TickTimer, P: InputPort, S: SegmentPanel> Stopwatch<'t, 'p, T, P, S> {
    /// Creates a stopped stopwatch at zero, showing the live view, with
    /// the zero value already rendered.
    pub fn new(timer: &'t T, port: &'p P, mut panel: S) -> Self {
        let engine = StopwatchEngine::new(timer);
        render(&mut panel, engine.display_value(DisplayMode::Live));

        Self {
            engine,
            sampler: Sampler::new(port),
            panel,
            mode: DisplayMode::Live,
        }
    }

    /// One loop iteration: timer service, display refresh, input handling.
    pub fn poll(&mut self) {
        self.engine.service();

        render(&mut self.panel, self.engine.display_value(self.mode));

        let (edges, mode) = self.sampler.poll();
        for command in edges.commands() {
            self.engine.apply(command);
        }
        self.mode = mode;
    }

    /// Busy-polls forever. There is no shutdown path; the loop runs until
    /// power-off.
    pub fn run(&mut self) -> ! {
        loop {
            self.poll();
        }
    }

    /// The display mode captured by the most recent poll.
    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// The underlying engine, for state queries.
    pub fn engine(&self) -> &StopwatchEngine<'t, T> {
        &self.engine
    }

    /// The owned display panel.
    pub fn panel(&self) -> &S {
        &self.panel
    }
}
