//! # Register Transfer Instructions
//!
//! TAX, TAY, TXA, TYA, TSX, TXS. All set Z and N from the copied value
//! except TXS, which writes the stack pointer without touching flags.

use crate::cpu::flags;
use crate::{MemoryBus, CPU};

/// TAX — Transfer Accumulator to X.
pub(crate) fn tax<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    cpu.x = cpu.a;
    cpu.set_flag(flags::Z, cpu.x == 0x00);
    cpu.set_flag(flags::N, cpu.x & 0x80 != 0);
    0
}

/// TAY — Transfer Accumulator to Y.
pub(crate) fn tay<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    cpu.y = cpu.a;
    cpu.set_flag(flags::Z, cpu.y == 0x00);
    cpu.set_flag(flags::N, cpu.y & 0x80 != 0);
    0
}

/// TSX — Transfer Stack Pointer to X.
pub(crate) fn tsx<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    cpu.x = cpu.stkp;
    cpu.set_flag(flags::Z, cpu.x == 0x00);
    cpu.set_flag(flags::N, cpu.x & 0x80 != 0);
    0
}

/// TXA — Transfer X to Accumulator.
pub(crate) fn txa<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    cpu.a = cpu.x;
    cpu.set_flag(flags::Z, cpu.a == 0x00);
    cpu.set_flag(flags::N, cpu.a & 0x80 != 0);
    0
}

/// TXS — Transfer X to Stack Pointer. No flags.
pub(crate) fn txs<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    cpu.stkp = cpu.x;
    0
}

/// TYA — Transfer Y to Accumulator.
pub(crate) fn tya<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    cpu.a = cpu.y;
    cpu.set_flag(flags::Z, cpu.a == 0x00);
    cpu.set_flag(flags::N, cpu.a & 0x80 != 0);
    0
}
