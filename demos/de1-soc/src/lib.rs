//! Board support for running the stopwatch on the Terasic DE1-SoC.

#![no_std]

pub mod board;
