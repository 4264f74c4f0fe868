//! # Opcode Metadata Table
//!
//! This module contains the complete 256-entry opcode table that serves
//! as the single source of truth for instruction decoding.
//!
//! The table covers every documented NMOS 6502 opcode plus the
//! undocumented slots: the stable illegal NOPs decode to [`Operation::Nop`]
//! (a handful of which report the extra-cycle opportunity), everything
//! else falls through to [`Operation::Illegal`], a defined no-op.
//! Undocumented opcodes are first-class citizens of the emulated
//! hardware — decoding never fails.
//!
//! Two deliberate oddities carried over from the emulated board:
//! - `0xCB` is labeled `WAI` but feeds the illegal handler (the board's
//!   firmware reserved it without implementing it).
//! - `0xEB` decodes as SBC with implied addressing.

use crate::addressing::AddressingMode;

/// Operation selector for the execute stage.
///
/// Each opcode slot pairs one of these with an [`AddressingMode`]; the
/// CPU dispatches both through closed `match` statements, so adding a
/// variant without a handler is a compile error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum Operation {
    Adc, And, Asl, Bcc, Bcs, Beq, Bit, Bmi, Bne, Bpl, Brk, Bvc, Bvs,
    Clc, Cld, Cli, Clv, Cmp, Cpx, Cpy, Dec, Dex, Dey, Eor, Inc, Inx,
    Iny, Jmp, Jsr, Lda, Ldx, Ldy, Lsr, Nop, Ora, Pha, Php, Pla, Plp,
    Rol, Ror, Rti, Rts, Sbc, Sec, Sed, Sei, Sta, Stx, Sty, Tax, Tay,
    Tsx, Txa, Txs, Tya,
    /// Undocumented opcode with no modeled behavior; executes as a no-op.
    Illegal,
}

/// Metadata for a single opcode slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Instruction mnemonic ("LDA", "???" for illegal slots).
    pub mnemonic: &'static str,

    /// Operation executed by this slot.
    pub operation: Operation,

    /// Addressing mode used to resolve the operand.
    pub mode: AddressingMode,

    /// Base cycle cost, before page-crossing or branch penalties.
    pub cycles: u8,
}

const fn op(
    mnemonic: &'static str,
    operation: Operation,
    mode: AddressingMode,
    cycles: u8,
) -> OpcodeMetadata {
    OpcodeMetadata {
        mnemonic,
        operation,
        mode,
        cycles,
    }
}

use AddressingMode::*;
use Operation::*;

/// Complete 256-entry opcode table indexed by opcode byte value.
///
/// # Examples
///
/// ```
/// use sbc6502::{AddressingMode, OPCODE_TABLE};
///
/// let lda_imm = &OPCODE_TABLE[0xA9];
/// assert_eq!(lda_imm.mnemonic, "LDA");
/// assert_eq!(lda_imm.mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.cycles, 2);
/// ```
#[rustfmt::skip]
pub const OPCODE_TABLE: [OpcodeMetadata; 256] = [
    // 0x00 - 0x0F
    op("BRK", Brk, Implied, 7),   op("ORA", Ora, IndirectX, 6), op("???", Illegal, Implied, 2), op("???", Illegal, Implied, 8),
    op("???", Nop, Implied, 3),   op("ORA", Ora, ZeroPage, 3),  op("ASL", Asl, ZeroPage, 5),    op("???", Illegal, Implied, 5),
    op("PHP", Php, Implied, 3),   op("ORA", Ora, Immediate, 2), op("ASL", Asl, Implied, 2),     op("???", Illegal, Implied, 2),
    op("???", Nop, Implied, 4),   op("ORA", Ora, Absolute, 4),  op("ASL", Asl, Absolute, 6),    op("???", Illegal, Implied, 6),
    // 0x10 - 0x1F
    op("BPL", Bpl, Relative, 2),  op("ORA", Ora, IndirectY, 5), op("???", Illegal, Implied, 2), op("???", Illegal, Implied, 8),
    op("???", Nop, Implied, 4),   op("ORA", Ora, ZeroPageX, 4), op("ASL", Asl, ZeroPageX, 6),   op("???", Illegal, Implied, 6),
    op("CLC", Clc, Implied, 2),   op("ORA", Ora, AbsoluteY, 4), op("???", Nop, Implied, 2),     op("???", Illegal, Implied, 7),
    op("???", Nop, Implied, 4),   op("ORA", Ora, AbsoluteX, 4), op("ASL", Asl, AbsoluteX, 7),   op("???", Illegal, Implied, 7),
    // 0x20 - 0x2F
    op("JSR", Jsr, Absolute, 6),  op("AND", And, IndirectX, 6), op("???", Illegal, Implied, 2), op("???", Illegal, Implied, 8),
    op("BIT", Bit, ZeroPage, 3),  op("AND", And, ZeroPage, 3),  op("ROL", Rol, ZeroPage, 5),    op("???", Illegal, Implied, 5),
    op("PLP", Plp, Implied, 4),   op("AND", And, Immediate, 2), op("ROL", Rol, Implied, 2),     op("???", Illegal, Implied, 2),
    op("BIT", Bit, Absolute, 4),  op("AND", And, Absolute, 4),  op("ROL", Rol, Absolute, 6),    op("???", Illegal, Implied, 6),
    // 0x30 - 0x3F
    op("BMI", Bmi, Relative, 2),  op("AND", And, IndirectY, 5), op("???", Illegal, Implied, 2), op("???", Illegal, Implied, 8),
    op("???", Nop, Implied, 4),   op("AND", And, ZeroPageX, 4), op("ROL", Rol, ZeroPageX, 6),   op("???", Illegal, Implied, 6),
    op("SEC", Sec, Implied, 2),   op("AND", And, AbsoluteY, 4), op("???", Nop, Implied, 2),     op("???", Illegal, Implied, 7),
    op("???", Nop, Implied, 4),   op("AND", And, AbsoluteX, 4), op("ROL", Rol, AbsoluteX, 7),   op("???", Illegal, Implied, 7),
    // 0x40 - 0x4F
    op("RTI", Rti, Implied, 6),   op("EOR", Eor, IndirectX, 6), op("???", Illegal, Implied, 2), op("???", Illegal, Implied, 8),
    op("???", Nop, Implied, 3),   op("EOR", Eor, ZeroPage, 3),  op("LSR", Lsr, ZeroPage, 5),    op("???", Illegal, Implied, 5),
    op("PHA", Pha, Implied, 3),   op("EOR", Eor, Immediate, 2), op("LSR", Lsr, Implied, 2),     op("???", Illegal, Implied, 2),
    op("JMP", Jmp, Absolute, 3),  op("EOR", Eor, Absolute, 4),  op("LSR", Lsr, Absolute, 6),    op("???", Illegal, Implied, 6),
    // 0x50 - 0x5F
    op("BVC", Bvc, Relative, 2),  op("EOR", Eor, IndirectY, 5), op("???", Illegal, Implied, 2), op("???", Illegal, Implied, 8),
    op("???", Nop, Implied, 4),   op("EOR", Eor, ZeroPageX, 4), op("LSR", Lsr, ZeroPageX, 6),   op("???", Illegal, Implied, 6),
    op("CLI", Cli, Implied, 2),   op("EOR", Eor, AbsoluteY, 4), op("???", Nop, Implied, 2),     op("???", Illegal, Implied, 7),
    op("???", Nop, Implied, 4),   op("EOR", Eor, AbsoluteX, 4), op("LSR", Lsr, AbsoluteX, 7),   op("???", Illegal, Implied, 7),
    // 0x60 - 0x6F
    op("RTS", Rts, Implied, 6),   op("ADC", Adc, IndirectX, 6), op("???", Illegal, Implied, 2), op("???", Illegal, Implied, 8),
    op("???", Nop, Implied, 3),   op("ADC", Adc, ZeroPage, 3),  op("ROR", Ror, ZeroPage, 5),    op("???", Illegal, Implied, 5),
    op("PLA", Pla, Implied, 4),   op("ADC", Adc, Immediate, 2), op("ROR", Ror, Implied, 2),     op("???", Illegal, Implied, 2),
    op("JMP", Jmp, Indirect, 5),  op("ADC", Adc, Absolute, 4),  op("ROR", Ror, Absolute, 6),    op("???", Illegal, Implied, 6),
    // 0x70 - 0x7F
    op("BVS", Bvs, Relative, 2),  op("ADC", Adc, IndirectY, 5), op("???", Illegal, Implied, 2), op("???", Illegal, Implied, 8),
    op("???", Nop, Implied, 4),   op("ADC", Adc, ZeroPageX, 4), op("ROR", Ror, ZeroPageX, 6),   op("???", Illegal, Implied, 6),
    op("SEI", Sei, Implied, 2),   op("ADC", Adc, AbsoluteY, 4), op("???", Nop, Implied, 2),     op("???", Illegal, Implied, 7),
    op("???", Nop, Implied, 4),   op("ADC", Adc, AbsoluteX, 4), op("ROR", Ror, AbsoluteX, 7),   op("???", Illegal, Implied, 7),
    // 0x80 - 0x8F
    op("???", Nop, Implied, 2),   op("STA", Sta, IndirectX, 6), op("???", Nop, Implied, 2),     op("???", Illegal, Implied, 6),
    op("STY", Sty, ZeroPage, 3),  op("STA", Sta, ZeroPage, 3),  op("STX", Stx, ZeroPage, 3),    op("???", Illegal, Implied, 3),
    op("DEY", Dey, Implied, 2),   op("???", Nop, Implied, 2),   op("TXA", Txa, Implied, 2),     op("???", Illegal, Implied, 2),
    op("STY", Sty, Absolute, 4),  op("STA", Sta, Absolute, 4),  op("STX", Stx, Absolute, 4),    op("???", Illegal, Implied, 4),
    // 0x90 - 0x9F
    op("BCC", Bcc, Relative, 2),  op("STA", Sta, IndirectY, 6), op("???", Illegal, Implied, 2), op("???", Illegal, Implied, 6),
    op("STY", Sty, ZeroPageX, 4), op("STA", Sta, ZeroPageX, 4), op("STX", Stx, ZeroPageY, 4),   op("???", Illegal, Implied, 4),
    op("TYA", Tya, Implied, 2),   op("STA", Sta, AbsoluteY, 5), op("TXS", Txs, Implied, 2),     op("???", Illegal, Implied, 5),
    op("???", Nop, Implied, 5),   op("STA", Sta, AbsoluteX, 5), op("???", Illegal, Implied, 5), op("???", Illegal, Implied, 5),
    // 0xA0 - 0xAF
    op("LDY", Ldy, Immediate, 2), op("LDA", Lda, IndirectX, 6), op("LDX", Ldx, Immediate, 2),   op("???", Illegal, Implied, 6),
    op("LDY", Ldy, ZeroPage, 3),  op("LDA", Lda, ZeroPage, 3),  op("LDX", Ldx, ZeroPage, 3),    op("???", Illegal, Implied, 3),
    op("TAY", Tay, Implied, 2),   op("LDA", Lda, Immediate, 2), op("TAX", Tax, Implied, 2),     op("???", Illegal, Implied, 2),
    op("LDY", Ldy, Absolute, 4),  op("LDA", Lda, Absolute, 4),  op("LDX", Ldx, Absolute, 4),    op("???", Illegal, Implied, 4),
    // 0xB0 - 0xBF
    op("BCS", Bcs, Relative, 2),  op("LDA", Lda, IndirectY, 5), op("???", Illegal, Implied, 2), op("???", Illegal, Implied, 5),
    op("LDY", Ldy, ZeroPageX, 4), op("LDA", Lda, ZeroPageX, 4), op("LDX", Ldx, ZeroPageY, 4),   op("???", Illegal, Implied, 4),
    op("CLV", Clv, Implied, 2),   op("LDA", Lda, AbsoluteY, 4), op("TSX", Tsx, Implied, 2),     op("???", Illegal, Implied, 4),
    op("LDY", Ldy, AbsoluteX, 4), op("LDA", Lda, AbsoluteX, 4), op("LDX", Ldx, AbsoluteY, 4),   op("???", Illegal, Implied, 4),
    // 0xC0 - 0xCF
    op("CPY", Cpy, Immediate, 2), op("CMP", Cmp, IndirectX, 6), op("???", Nop, Implied, 2),     op("???", Illegal, Implied, 8),
    op("CPY", Cpy, ZeroPage, 3),  op("CMP", Cmp, ZeroPage, 3),  op("DEC", Dec, ZeroPage, 5),    op("???", Illegal, Implied, 5),
    op("INY", Iny, Implied, 2),   op("CMP", Cmp, Immediate, 2), op("DEX", Dex, Implied, 2),     op("WAI", Illegal, Implied, 2),
    op("CPY", Cpy, Absolute, 4),  op("CMP", Cmp, Absolute, 4),  op("DEC", Dec, Absolute, 6),    op("???", Illegal, Implied, 6),
    // 0xD0 - 0xDF
    op("BNE", Bne, Relative, 2),  op("CMP", Cmp, IndirectY, 5), op("???", Illegal, Implied, 2), op("???", Illegal, Implied, 8),
    op("???", Nop, Implied, 4),   op("CMP", Cmp, ZeroPageX, 4), op("DEC", Dec, ZeroPageX, 6),   op("???", Illegal, Implied, 6),
    op("CLD", Cld, Implied, 2),   op("CMP", Cmp, AbsoluteY, 4), op("NOP", Nop, Implied, 2),     op("???", Illegal, Implied, 7),
    op("???", Nop, Implied, 4),   op("CMP", Cmp, AbsoluteX, 4), op("DEC", Dec, AbsoluteX, 7),   op("???", Illegal, Implied, 7),
    // 0xE0 - 0xEF
    op("CPX", Cpx, Immediate, 2), op("SBC", Sbc, IndirectX, 6), op("???", Nop, Implied, 2),     op("???", Illegal, Implied, 8),
    op("CPX", Cpx, ZeroPage, 3),  op("SBC", Sbc, ZeroPage, 3),  op("INC", Inc, ZeroPage, 5),    op("???", Illegal, Implied, 5),
    op("INX", Inx, Implied, 2),   op("SBC", Sbc, Immediate, 2), op("NOP", Nop, Implied, 2),     op("???", Sbc, Implied, 2),
    op("CPX", Cpx, Absolute, 4),  op("SBC", Sbc, Absolute, 4),  op("INC", Inc, Absolute, 6),    op("???", Illegal, Implied, 6),
    // 0xF0 - 0xFF
    op("BEQ", Beq, Relative, 2),  op("SBC", Sbc, IndirectY, 5), op("???", Illegal, Implied, 2), op("???", Illegal, Implied, 8),
    op("???", Nop, Implied, 4),   op("SBC", Sbc, ZeroPageX, 4), op("INC", Inc, ZeroPageX, 6),   op("???", Illegal, Implied, 6),
    op("SED", Sed, Implied, 2),   op("SBC", Sbc, AbsoluteY, 4), op("NOP", Nop, Implied, 2),     op("???", Illegal, Implied, 7),
    op("???", Nop, Implied, 4),   op("SBC", Sbc, AbsoluteX, 4), op("INC", Inc, AbsoluteX, 7),   op("???", Illegal, Implied, 7),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_256_entries() {
        assert_eq!(OPCODE_TABLE.len(), 256);
    }

    #[test]
    fn test_known_slots() {
        assert_eq!(OPCODE_TABLE[0x00].mnemonic, "BRK");
        assert_eq!(OPCODE_TABLE[0x00].cycles, 7);
        assert_eq!(OPCODE_TABLE[0xA9].operation, Operation::Lda);
        assert_eq!(OPCODE_TABLE[0x6C].mode, AddressingMode::Indirect);
        // Reserved slot kept from the board firmware.
        assert_eq!(OPCODE_TABLE[0xCB].mnemonic, "WAI");
        assert_eq!(OPCODE_TABLE[0xCB].operation, Operation::Illegal);
        // 0xEB runs the SBC path despite being undocumented.
        assert_eq!(OPCODE_TABLE[0xEB].operation, Operation::Sbc);
    }
}
