//! # 6502 Instruction Implementations
//!
//! This module contains the implementations of all instructions, organized by
//! category. Each handler is a standalone function taking a mutable reference
//! to the CPU; the decode stage has already resolved the addressing mode, so
//! handlers work through the effective-address and fetch latches.
//!
//! Handlers return 1 when the instruction is eligible for the page-crossing
//! extra cycle and 0 otherwise. The CPU core ANDs that with the addressing
//! mode's page-cross signal before charging the cycle.
//!
//! ## Categories
//!
//! - **alu**: Arithmetic and logic (ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT)
//! - **branches**: Conditional branches (BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS)
//! - **shifts**: Shifts and rotates (ASL, LSR, ROL, ROR)
//! - **load_store**: Loads and stores (LDA, LDX, LDY, STA, STX, STY)
//! - **inc_dec**: Increments and decrements (INC, DEC, INX, INY, DEX, DEY)
//! - **control**: Control flow (JMP, JSR, RTS, RTI, BRK, NOP, illegal slots)
//! - **stack**: Stack operations (PHA, PHP, PLA, PLP)
//! - **flags**: Status flag manipulation (CLC, SEC, CLI, SEI, CLD, SED, CLV)
//! - **transfer**: Register transfers (TAX, TAY, TXA, TYA, TSX, TXS)

pub mod alu;
pub mod branches;
pub mod control;
pub mod flags;
pub mod inc_dec;
pub mod load_store;
pub mod shifts;
pub mod stack;
pub mod transfer;
