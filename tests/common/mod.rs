//! Shared test infrastructure for sevenseg-stopwatch integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::Cell;
use sevenseg_stopwatch::{DIGIT_COUNT, InputPort, SegmentPanel, TickTimer, encode};

// ============================================================================
// Mock Tick Timer
// ============================================================================

/// Mock timer with a manually latched expiry flag and call accounting
pub struct MockTimer {
    running: Cell<bool>,
    pending: Cell<bool>,
    start_count: Cell<u32>,
}

impl MockTimer {
    pub fn new() -> Self {
        Self {
            running: Cell::new(false),
            pending: Cell::new(false),
            start_count: Cell::new(0),
        }
    }

    /// Latches an expiry, as the hardware does at the end of a period
    pub fn expire(&self) {
        self.pending.set(true);
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    pub fn has_pending(&self) -> bool {
        self.pending.get()
    }

    /// How many times the timer was started
    pub fn start_count(&self) -> u32 {
        self.start_count.get()
    }
}

impl TickTimer for MockTimer {
    fn start(&self) {
        self.pending.set(false);
        self.running.set(true);
        self.start_count.set(self.start_count.get() + 1);
    }

    fn stop(&self) {
        self.running.set(false);
    }

    fn reset(&self) {
        self.running.set(false);
        self.pending.set(false);
    }

    fn take_expired(&self) -> bool {
        self.pending.replace(false)
    }
}

// ============================================================================
// Mock Input Port
// ============================================================================

/// Raw key-port masks for the four buttons (active-low lines)
pub const KEY_START: u32 = 0x1;
pub const KEY_STOP: u32 = 0x2;
pub const KEY_LAP: u32 = 0x4;
pub const KEY_CLEAR: u32 = 0x8;

/// Mock input port holding raw register words; keys idle high
/// (active-low buttons), switches idle low
pub struct MockInput {
    keys: Cell<u32>,
    switches: Cell<u32>,
}

impl MockInput {
    pub fn new() -> Self {
        Self {
            keys: Cell::new(0xF),
            switches: Cell::new(0),
        }
    }

    /// Pulls the given button lines low (pressed)
    pub fn press(&self, mask: u32) {
        self.keys.set(self.keys.get() & !mask);
    }

    /// Lets the given button lines float high again (released)
    pub fn release(&self, mask: u32) {
        self.keys.set(self.keys.get() | mask);
    }

    pub fn release_all(&self) {
        self.keys.set(0xF);
    }

    pub fn set_lap_switch(&self, on: bool) {
        self.switches.set(if on { 0x1 } else { 0 });
    }
}

impl InputPort for MockInput {
    fn keys(&self) -> u32 {
        self.keys.get()
    }

    fn switches(&self) -> u32 {
        self.switches.get()
    }
}

// ============================================================================
// Mock Segment Panel
// ============================================================================

/// Mock panel recording the latest pattern per position plus a write log
pub struct MockPanel {
    digits: [u8; DIGIT_COUNT],
    writes: heapless::Vec<(usize, u8), 64>,
}

impl MockPanel {
    pub fn new() -> Self {
        Self {
            digits: [0; DIGIT_COUNT],
            writes: heapless::Vec::new(),
        }
    }

    /// Latest pattern written to each position
    pub fn digits(&self) -> [u8; DIGIT_COUNT] {
        self.digits
    }

    /// Chronological write log; further writes are dropped once full
    pub fn writes(&self) -> &[(usize, u8)] {
        &self.writes
    }
}

impl SegmentPanel for MockPanel {
    fn set_digit(&mut self, position: usize, segments: u8) {
        self.digits[position] = segments;
        let _ = self.writes.push((position, segments));
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Expected panel contents for a time value, in display-position order
pub fn encoded(minutes: u8, seconds: u8, hundredths: u8) -> [u8; DIGIT_COUNT] {
    [
        encode(hundredths % 10),
        encode(hundredths / 10),
        encode(seconds % 10),
        encode(seconds / 10),
        encode(minutes % 10),
        encode(minutes / 10),
    ]
}
