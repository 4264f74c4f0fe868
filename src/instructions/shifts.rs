//! # Shift and Rotate Instructions
//!
//! ASL, LSR, ROL and ROR. These are read-modify-write instructions: each
//! drives the Memory Lock output low for its duration, then writes the
//! result either back to memory or to the accumulator depending on the
//! addressing mode of the slot.

use crate::cpu::flags;
use crate::{MemoryBus, CPU};

/// ASL — Arithmetic Shift Left.
///
/// C <- bit 7, bit 0 <- 0.
pub(crate) fn asl<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    cpu.mlb = false;
    cpu.fetch();

    let temp = (cpu.fetched as u16) << 1;
    cpu.set_flag(flags::C, temp & 0xFF00 > 0);
    cpu.set_flag(flags::Z, temp & 0x00FF == 0x00);
    cpu.set_flag(flags::N, temp & 0x80 != 0);

    cpu.write_back(temp as u8);
    0
}

/// LSR — Logical Shift Right.
///
/// C <- bit 0, bit 7 <- 0.
pub(crate) fn lsr<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    cpu.mlb = false;
    cpu.fetch();

    cpu.set_flag(flags::C, cpu.fetched & 0x01 != 0);
    let temp = cpu.fetched >> 1;
    cpu.set_flag(flags::Z, temp == 0x00);
    cpu.set_flag(flags::N, temp & 0x80 != 0);

    cpu.write_back(temp);
    0
}

/// ROL — Rotate Left through carry.
///
/// bit 0 <- old C, C <- old bit 7.
pub(crate) fn rol<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    cpu.mlb = false;
    cpu.fetch();

    let temp = ((cpu.fetched as u16) << 1) | u16::from(cpu.get_flag(flags::C));
    cpu.set_flag(flags::C, temp & 0xFF00 != 0);
    cpu.set_flag(flags::Z, temp & 0x00FF == 0x00);
    cpu.set_flag(flags::N, temp & 0x80 != 0);

    cpu.write_back(temp as u8);
    0
}

/// ROR — Rotate Right through carry.
///
/// bit 7 <- old C, C <- old bit 0.
pub(crate) fn ror<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    cpu.mlb = false;
    cpu.fetch();

    let temp = (u8::from(cpu.get_flag(flags::C)) << 7) | (cpu.fetched >> 1);
    cpu.set_flag(flags::C, cpu.fetched & 0x01 != 0);
    cpu.set_flag(flags::Z, temp == 0x00);
    cpu.set_flag(flags::N, temp & 0x80 != 0);

    cpu.write_back(temp);
    0
}
