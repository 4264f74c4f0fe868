//! # Addressing Modes
//!
//! This module defines the 12 addressing modes used by the instruction
//! table. Each mode determines how the CPU computes the effective
//! address (or operand) from the bytes following an opcode.

/// 6502 addressing mode enumeration.
///
/// The addressing mode determines how the CPU interprets the operand
/// bytes that follow an opcode and how it calculates the effective
/// memory address for the operation.
///
/// Implied covers both "no operand" instructions (CLC, RTS, NOP) and
/// accumulator-targeted ones (ASL A, ROR A): the implied resolver
/// latches the accumulator into the fetch latch, so operations that
/// can target either memory or A need no separate accumulator mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// No operand; the fetch latch is loaded from the accumulator.
    Implied,

    /// 8-bit constant operand in the instruction stream.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address into the zero page (0x0000-0x00FF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Zero page address indexed by X, wrapping within the zero page.
    ZeroPageX,

    /// Zero page address indexed by Y, wrapping within the zero page.
    ZeroPageY,

    /// Signed 8-bit displacement for branch instructions, relative to
    /// the address of the following instruction.
    Relative,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234
    Absolute,

    /// 16-bit address indexed by X.
    ///
    /// Reports the extra-cycle opportunity when indexing crosses a
    /// 256-byte page.
    AbsoluteX,

    /// 16-bit address indexed by Y.
    ///
    /// Reports the extra-cycle opportunity when indexing crosses a
    /// 256-byte page.
    AbsoluteY,

    /// Indirect jump through a 16-bit pointer. Only used by JMP.
    ///
    /// Reproduces the hardware defect: a pointer with low byte 0xFF
    /// reads its high byte from the start of the same page.
    Indirect,

    /// Indexed indirect: (ZP + X) is dereferenced within the zero page.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: ZP pointer is dereferenced, then Y is added.
    ///
    /// Example: LDA ($40),Y
    /// Reports the extra-cycle opportunity when adding Y crosses a
    /// 256-byte page.
    IndirectY,
}
