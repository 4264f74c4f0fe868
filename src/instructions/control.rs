//! # Control Flow Instructions
//!
//! JMP, JSR, RTS, RTI, BRK, NOP and the catch-all handler for
//! undocumented slots.
//!
//! BRK deviates from the hardware on purpose: instead of the software
//! interrupt sequence it latches the halt line, which is how programs on
//! this board signal completion. `reset()` releases the halt.

use crate::cpu::flags;
use crate::{MemoryBus, CPU};

/// JMP — Jump to the effective address.
pub(crate) fn jmp<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    cpu.pc = cpu.addr_abs;
    0
}

/// JSR — Jump to Subroutine.
///
/// Pushes the address of the last byte of the JSR operand (PC - 1), high
/// byte first, then jumps.
pub(crate) fn jsr<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    cpu.pc = cpu.pc.wrapping_sub(1);

    cpu.push((cpu.pc >> 8) as u8);
    cpu.push(cpu.pc as u8);

    cpu.pc = cpu.addr_abs;
    0
}

/// RTS — Return from Subroutine.
///
/// Pulls the address pushed by JSR and resumes at the byte after it.
pub(crate) fn rts<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    let lo = cpu.pull() as u16;
    let hi = cpu.pull() as u16;
    cpu.pc = ((hi << 8) | lo).wrapping_add(1);
    0
}

/// RTI — Return from Interrupt.
///
/// Restores the status register, clears B, U and I, then pulls the
/// return address.
pub(crate) fn rti<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    cpu.status = cpu.pull();
    cpu.status &= !flags::B;
    cpu.status &= !flags::U;
    cpu.status &= !flags::I;

    let lo = cpu.pull() as u16;
    let hi = cpu.pull() as u16;
    cpu.pc = (hi << 8) | lo;
    0
}

/// BRK — Halt.
///
/// Latches the halt line; `step()` stops fetching until the next reset.
pub(crate) fn brk<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    cpu.halted = true;
    0
}

/// NOP — No Operation.
///
/// Not all NOPs are equal: the absolute,X-shaped undocumented slots
/// report the extra-cycle opportunity, the rest do not.
pub(crate) fn nop<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    match cpu.opcode {
        0x1C | 0x3C | 0x5C | 0x7C | 0xDC | 0xFC => 1,
        _ => 0,
    }
}

/// Catch-all for undocumented opcodes with no modeled behavior.
pub(crate) fn illegal<M: MemoryBus>(_cpu: &mut CPU<M>) -> u8 {
    0
}
