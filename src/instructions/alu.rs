//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! Arithmetic and logical operations: ADC, SBC, AND, ORA, EOR, CMP, CPX,
//! CPY and BIT. Addition and subtraction run in a 16-bit working value so
//! the carry out is visible in bit 8.

use crate::cpu::flags;
use crate::{MemoryBus, CPU};

/// ADC — Add with Carry.
///
/// A = A + M + C. Sets C, Z, V, N.
///
/// Overflow fires when both operands share a sign and the result does not:
/// `V = ~(A ^ M) & (A ^ result) & 0x80`.
pub(crate) fn adc<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    cpu.fetch();

    let a = cpu.a as u16;
    let m = cpu.fetched as u16;
    let temp = a + m + u16::from(cpu.get_flag(flags::C));

    cpu.set_flag(flags::C, temp > 255);
    cpu.set_flag(flags::Z, temp & 0x00FF == 0);
    cpu.set_flag(flags::V, (!(a ^ m) & (a ^ temp)) & 0x80 != 0);
    cpu.set_flag(flags::N, temp & 0x80 != 0);

    cpu.a = temp as u8;
    1
}

/// SBC — Subtract with Borrow.
///
/// A = A - M - (1 - C). Inverting the operand turns this into the ADC
/// data path: A + ~M + C.
pub(crate) fn sbc<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    cpu.fetch();

    let a = cpu.a as u16;
    let value = cpu.fetched as u16 ^ 0x00FF;
    let temp = a + value + u16::from(cpu.get_flag(flags::C));

    cpu.set_flag(flags::C, temp & 0xFF00 != 0);
    cpu.set_flag(flags::Z, temp & 0x00FF == 0);
    cpu.set_flag(flags::V, (temp ^ a) & (temp ^ value) & 0x0080 != 0);
    cpu.set_flag(flags::N, temp & 0x0080 != 0);

    cpu.a = temp as u8;
    1
}

/// AND — Bitwise AND with the accumulator. Sets Z, N.
pub(crate) fn and<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    cpu.fetch();
    cpu.a &= cpu.fetched;
    cpu.set_flag(flags::Z, cpu.a == 0x00);
    cpu.set_flag(flags::N, cpu.a & 0x80 != 0);
    1
}

/// ORA — Bitwise OR with the accumulator. Sets Z, N.
pub(crate) fn ora<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    cpu.fetch();
    cpu.a |= cpu.fetched;
    cpu.set_flag(flags::Z, cpu.a == 0x00);
    cpu.set_flag(flags::N, cpu.a & 0x80 != 0);
    1
}

/// EOR — Bitwise exclusive OR with the accumulator. Sets Z, N.
pub(crate) fn eor<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    cpu.fetch();
    cpu.a ^= cpu.fetched;
    cpu.set_flag(flags::Z, cpu.a == 0x00);
    cpu.set_flag(flags::N, cpu.a & 0x80 != 0);
    1
}

/// CMP — Compare accumulator with memory.
///
/// C = A >= M, Z = (A - M) == 0, N from bit 7 of the difference.
pub(crate) fn cmp<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    cpu.fetch();
    let temp = cpu.a.wrapping_sub(cpu.fetched);
    cpu.set_flag(flags::C, cpu.a >= cpu.fetched);
    cpu.set_flag(flags::Z, temp == 0x00);
    cpu.set_flag(flags::N, temp & 0x80 != 0);
    1
}

/// CPX — Compare X register with memory. Same flag rules as CMP but no
/// extra-cycle eligibility.
pub(crate) fn cpx<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    cpu.fetch();
    let temp = cpu.x.wrapping_sub(cpu.fetched);
    cpu.set_flag(flags::C, cpu.x >= cpu.fetched);
    cpu.set_flag(flags::Z, temp == 0x00);
    cpu.set_flag(flags::N, temp & 0x80 != 0);
    0
}

/// CPY — Compare Y register with memory.
pub(crate) fn cpy<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    cpu.fetch();
    let temp = cpu.y.wrapping_sub(cpu.fetched);
    cpu.set_flag(flags::C, cpu.y >= cpu.fetched);
    cpu.set_flag(flags::Z, temp == 0x00);
    cpu.set_flag(flags::N, temp & 0x80 != 0);
    0
}

/// BIT — Test memory bits against the accumulator.
///
/// Z from A & M; N and V copied straight from bits 7 and 6 of the operand.
pub(crate) fn bit<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    cpu.fetch();
    cpu.set_flag(flags::Z, cpu.a & cpu.fetched == 0x00);
    cpu.set_flag(flags::N, cpu.fetched & (1 << 7) != 0);
    cpu.set_flag(flags::V, cpu.fetched & (1 << 6) != 0);
    0
}
