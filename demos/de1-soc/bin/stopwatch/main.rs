//! Six-digit stopwatch on the DE1-SoC.
//!
//! KEY0 starts, KEY1 stops, KEY2 laps, KEY3 clears; SW0 low shows the
//! live count on HEX5..HEX0, SW0 high shows the lap snapshot.

#![no_std]
#![no_main]

use core::arch::global_asm;

use panic_halt as _;

use de1_soc::board;
use sevenseg_stopwatch::Stopwatch;
use sevenseg_stopwatch::display::{HexPanel, HexRegister};
use sevenseg_stopwatch::sampler::{InputRegister, PortPins};
use sevenseg_stopwatch::timer::{IntervalTimer, RegisterBlock};

// The HPS hands over with no stack or cleared .bss; set both up, then
// jump into Rust.
global_asm!(
    r#"
    .section .text._start
    .global _start
    _start:
        ldr sp, =__stack_top
        ldr r0, =__bss_start
        ldr r1, =__bss_end
        mov r2, #0
    0:
        cmp r0, r1
        bge 1f
        str r2, [r0], #4
        b 0b
    1:
        bl main
    2:
        b 2b
    "#
);

#[no_mangle]
pub extern "C" fn main() -> ! {
    // Safety: these are the DE1-SoC peripheral bases from the board map,
    // mapped for the whole program lifetime and touched through these
    // references only.
    let timer_regs = unsafe { RegisterBlock::at(board::TIMER_BASE) };
    let keys = unsafe { InputRegister::at(board::KEY_BASE) };
    let switches = unsafe { InputRegister::at(board::SW_BASE) };
    let hex_low = unsafe { HexRegister::at(board::HEX3_HEX0_BASE) };
    let hex_high = unsafe { HexRegister::at(board::HEX5_HEX4_BASE) };

    let timer = IntervalTimer::new(timer_regs, board::CLOCK_HZ).unwrap();
    let port = PortPins::new(keys, switches);
    let panel = HexPanel::new(hex_low, hex_high);

    let mut stopwatch = Stopwatch::new(&timer, &port, panel);
    stopwatch.run()
}
