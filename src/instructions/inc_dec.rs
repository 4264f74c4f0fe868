//! # Increment and Decrement Instructions
//!
//! Memory forms (INC, DEC) are read-modify-write and drive the Memory Lock
//! output low; register forms (INX, INY, DEX, DEY) touch only the register
//! file. All set Z and N from the result.

use crate::cpu::flags;
use crate::{MemoryBus, CPU};

/// INC — Increment value at the effective address.
pub(crate) fn inc<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    cpu.mlb = false;
    cpu.fetch();
    let temp = cpu.fetched.wrapping_add(1);
    cpu.write(cpu.addr_abs, temp);
    cpu.set_flag(flags::Z, temp == 0x00);
    cpu.set_flag(flags::N, temp & 0x80 != 0);
    0
}

/// DEC — Decrement value at the effective address.
pub(crate) fn dec<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    cpu.mlb = false;
    cpu.fetch();
    let temp = cpu.fetched.wrapping_sub(1);
    cpu.write(cpu.addr_abs, temp);
    cpu.set_flag(flags::Z, temp == 0x00);
    cpu.set_flag(flags::N, temp & 0x80 != 0);
    0
}

/// INX — Increment X Register.
pub(crate) fn inx<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.set_flag(flags::Z, cpu.x == 0x00);
    cpu.set_flag(flags::N, cpu.x & 0x80 != 0);
    0
}

/// INY — Increment Y Register.
pub(crate) fn iny<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.set_flag(flags::Z, cpu.y == 0x00);
    cpu.set_flag(flags::N, cpu.y & 0x80 != 0);
    0
}

/// DEX — Decrement X Register.
pub(crate) fn dex<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.set_flag(flags::Z, cpu.x == 0x00);
    cpu.set_flag(flags::N, cpu.x & 0x80 != 0);
    0
}

/// DEY — Decrement Y Register.
pub(crate) fn dey<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.set_flag(flags::Z, cpu.y == 0x00);
    cpu.set_flag(flags::N, cpu.y & 0x80 != 0);
    0
}
