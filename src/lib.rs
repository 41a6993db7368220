#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`ElapsedTime`**: Bounded minutes/seconds/hundredths counters advanced one tick at a time
//! - **`StopwatchEngine`**: The run-state machine owning the live count and the lap snapshot
//! - **`Command`**: The four button commands (`Start`, `Stop`, `Lap`, `Clear`)
//! - **`EdgeSet`**: Per-cycle released-to-pressed button transitions
//! - **`DisplayMode`**: Which value the display shows (`Live` or `Lap`), a pure switch level
//! - **`TickTimer`**: Trait to implement for your periodic hardware timer
//! - **`InputPort`**: Trait to implement for your button and switch registers
//! - **`SegmentPanel`**: Trait to implement for your seven-segment display bank
//! - **`Stopwatch`**: The composed busy-poll control loop
//!
//! The bundled `IntervalTimer`, `PortPins`, and `HexPanel` drivers implement
//! the three hardware traits over `vcell`-based memory-mapped register
//! blocks; boards only supply base addresses and a clock frequency.

pub mod time;
pub mod types;
pub mod segments;
pub mod command;
pub mod timer;
pub mod sampler;
pub mod display;
pub mod engine;
pub mod stopwatch;

pub use command::{Command, EdgeSet};
pub use display::{HexPanel, HexRegister, SegmentPanel, render};
pub use engine::{RunState, StopwatchEngine};
pub use sampler::{InputPort, InputRegister, InputSample, PortPins, Sampler};
pub use segments::{DIGIT_PATTERNS, encode};
pub use stopwatch::Stopwatch;
pub use time::ElapsedTime;
pub use timer::{IntervalTimer, RegisterBlock, TICK_HZ, TickTimer, TimerError};
pub use types::DisplayMode;

/// Number of digit positions on the display bank.
pub const DIGIT_COUNT: usize = 6;
