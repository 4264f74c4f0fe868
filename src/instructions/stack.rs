//! # Stack Instructions
//!
//! PHA, PHP, PLA, PLP. The stack lives in page one; pushes write at
//! 0x0100 + STKP and post-decrement, pulls pre-increment and read.

use crate::cpu::flags;
use crate::{MemoryBus, CPU};

/// PHA — Push Accumulator.
pub(crate) fn pha<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    cpu.push(cpu.a);
    0
}

/// PHP — Push Processor Status.
///
/// B and U are set in the pushed copy and cleared in the live register
/// afterwards.
pub(crate) fn php<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    cpu.push(cpu.status | flags::B | flags::U);
    cpu.set_flag(flags::B, false);
    cpu.set_flag(flags::U, false);
    0
}

/// PLA — Pull Accumulator. Sets Z, N.
pub(crate) fn pla<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    cpu.a = cpu.pull();
    cpu.set_flag(flags::Z, cpu.a == 0x00);
    cpu.set_flag(flags::N, cpu.a & 0x80 != 0);
    0
}

/// PLP — Pull Processor Status. U is forced back on.
pub(crate) fn plp<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    cpu.status = cpu.pull();
    cpu.set_flag(flags::U, true);
    0
}
