//! # Status Flag Instructions
//!
//! One-bit set/clear operations on the status register.

use crate::cpu::flags;
use crate::{MemoryBus, CPU};

/// CLC — Clear Carry.
pub(crate) fn clc<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    cpu.set_flag(flags::C, false);
    0
}

/// CLD — Clear Decimal Mode.
pub(crate) fn cld<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    cpu.set_flag(flags::D, false);
    0
}

/// CLI — Clear Interrupt Disable.
pub(crate) fn cli<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    cpu.set_flag(flags::I, false);
    0
}

/// CLV — Clear Overflow.
pub(crate) fn clv<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    cpu.set_flag(flags::V, false);
    0
}

/// SEC — Set Carry.
pub(crate) fn sec<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    cpu.set_flag(flags::C, true);
    0
}

/// SED — Set Decimal Mode.
pub(crate) fn sed<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    cpu.set_flag(flags::D, true);
    0
}

/// SEI — Set Interrupt Disable.
pub(crate) fn sei<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    cpu.set_flag(flags::I, true);
    0
}
