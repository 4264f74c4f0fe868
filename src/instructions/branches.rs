//! # Conditional Branch Instructions
//!
//! All eight branches share one data path: when the condition holds, a
//! cycle is charged for taking the branch, the sign-extended displacement
//! is added to PC, and a second cycle is charged if the target lands on a
//! different page. Untaken branches cost nothing extra.

use crate::cpu::flags;
use crate::{MemoryBus, CPU};

fn branch_if<M: MemoryBus>(cpu: &mut CPU<M>, condition: bool) -> u8 {
    if condition {
        cpu.cycles += 1;
        cpu.addr_abs = cpu.pc.wrapping_add(cpu.addr_rel);

        if cpu.addr_abs & 0xFF00 != cpu.pc & 0xFF00 {
            cpu.cycles += 1;
        }

        cpu.pc = cpu.addr_abs;
    }
    0
}

/// BCC — Branch if Carry Clear.
pub(crate) fn bcc<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    let cond = !cpu.get_flag(flags::C);
    branch_if(cpu, cond)
}

/// BCS — Branch if Carry Set.
pub(crate) fn bcs<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    let cond = cpu.get_flag(flags::C);
    branch_if(cpu, cond)
}

/// BEQ — Branch if Zero Set.
pub(crate) fn beq<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    let cond = cpu.get_flag(flags::Z);
    branch_if(cpu, cond)
}

/// BNE — Branch if Zero Clear.
pub(crate) fn bne<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    let cond = !cpu.get_flag(flags::Z);
    branch_if(cpu, cond)
}

/// BMI — Branch if Negative Set.
pub(crate) fn bmi<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    let cond = cpu.get_flag(flags::N);
    branch_if(cpu, cond)
}

/// BPL — Branch if Negative Clear.
pub(crate) fn bpl<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    let cond = !cpu.get_flag(flags::N);
    branch_if(cpu, cond)
}

/// BVC — Branch if Overflow Clear.
pub(crate) fn bvc<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    let cond = !cpu.get_flag(flags::V);
    branch_if(cpu, cond)
}

/// BVS — Branch if Overflow Set.
pub(crate) fn bvs<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    let cond = cpu.get_flag(flags::V);
    branch_if(cpu, cond)
}
