//! # Load and Store Instructions
//!
//! LDA, LDX, LDY load a register from the effective address and update
//! Z/N; STA, STX, STY store a register without touching flags. Loads are
//! eligible for the page-crossing extra cycle, stores are not.

use crate::cpu::flags;
use crate::{MemoryBus, CPU};

/// LDA — Load Accumulator. Sets Z, N.
pub(crate) fn lda<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    cpu.fetch();
    cpu.a = cpu.fetched;
    cpu.set_flag(flags::Z, cpu.a == 0x00);
    cpu.set_flag(flags::N, cpu.a & 0x80 != 0);
    1
}

/// LDX — Load X Register. Sets Z, N.
pub(crate) fn ldx<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    cpu.fetch();
    cpu.x = cpu.fetched;
    cpu.set_flag(flags::Z, cpu.x == 0x00);
    cpu.set_flag(flags::N, cpu.x & 0x80 != 0);
    1
}

/// LDY — Load Y Register. Sets Z, N.
pub(crate) fn ldy<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    cpu.fetch();
    cpu.y = cpu.fetched;
    cpu.set_flag(flags::Z, cpu.y == 0x00);
    cpu.set_flag(flags::N, cpu.y & 0x80 != 0);
    1
}

/// STA — Store Accumulator.
pub(crate) fn sta<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    cpu.write(cpu.addr_abs, cpu.a);
    0
}

/// STX — Store X Register.
pub(crate) fn stx<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    cpu.write(cpu.addr_abs, cpu.x);
    0
}

/// STY — Store Y Register.
pub(crate) fn sty<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    cpu.write(cpu.addr_abs, cpu.y);
    0
}
