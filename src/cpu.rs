//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6502 processor state and
//! the fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of next instruction
//! - **Stack pointer** (STKP): 8-bit offset into stack page (0x0100-0x01FF)
//! - **Status register**: packed flag byte, see [`flags`]
//! - **Internal latches**: instruction register, input data latch, effective
//!   address, relative displacement
//!
//! ## Execution Model
//!
//! Execution is cycle-stepped: `step()` advances the chip by one clock cycle.
//! A fresh instruction is fetched, decoded and executed in full on the cycle
//! where the remaining-cycle counter reaches zero; the following cycles of the
//! same instruction only count down. This keeps instruction timing visible to
//! the devices sharing the bus without splitting the micro-operations across
//! cycles.
//!
//! Page-crossing penalties are charged as the *conjunction* of two signals:
//! the addressing mode reports that a page boundary was crossed, and the
//! operation reports that it is eligible for the penalty. Only when both
//! report 1 is the extra cycle added.

use crate::addressing::AddressingMode;
use crate::instructions;
use crate::memory::MemoryBus;
use crate::opcodes::{Operation, OPCODE_TABLE};

/// Status register bit masks.
///
/// The status register is kept as a packed byte rather than individual
/// booleans so that stack pushes/pulls (PHP, PLP, RTI, interrupt entry)
/// can move it around verbatim.
pub mod flags {
    /// Carry.
    pub const C: u8 = 1 << 0;
    /// Zero.
    pub const Z: u8 = 1 << 1;
    /// Interrupt disable.
    pub const I: u8 = 1 << 2;
    /// Decimal mode (stored and restored, but arithmetic ignores it).
    pub const D: u8 = 1 << 3;
    /// Break.
    pub const B: u8 = 1 << 4;
    /// Unused, reads as 1 on the real chip.
    pub const U: u8 = 1 << 5;
    /// Signed overflow.
    pub const V: u8 = 1 << 6;
    /// Negative.
    pub const N: u8 = 1 << 7;
}

/// Interrupt vector locations.
const NMI_VECTOR: u16 = 0xFFFA;
const RESET_VECTOR: u16 = 0xFFFC;
const IRQ_VECTOR: u16 = 0xFFFE;

/// Base address of the stack page.
const STACK_BASE: u16 = 0x0100;

/// Point-in-time view of the CPU registers, for debuggers and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CpuSnapshot {
    /// Accumulator.
    pub a: u8,
    /// X index register.
    pub x: u8,
    /// Y index register.
    pub y: u8,
    /// Program counter.
    pub pc: u16,
    /// Full stack address (0x0100 + STKP).
    pub stack_addr: u16,
    /// Raw status byte.
    pub status: u8,
    /// Cycles executed since power-on.
    pub clock_count: u64,
    /// Cycles remaining in the current instruction.
    pub cycles: u8,
    /// Last fetched opcode byte.
    pub opcode: u8,
    /// Last value latched by an operand fetch.
    pub fetched: u8,
    /// Mnemonic of the instruction in flight.
    pub mnemonic: &'static str,
    /// Whether BRK has halted the processor.
    pub halted: bool,
}

/// 6502 CPU state and execution context.
///
/// The CPU owns its memory bus and is generic over the bus implementation via
/// the [`MemoryBus`] trait, so the same core drives a bare RAM in unit tests
/// and the full system bus in the wired-up computer.
///
/// # Examples
///
/// ```
/// use sbc6502::{MemoryBus, Ram, CPU};
///
/// let mut memory = Ram::new();
/// memory.write(0xFFFC, 0x00); // Low byte
/// memory.write(0xFFFD, 0x80); // High byte (PC = 0x8000)
///
/// // Initialization performs a reset, which loads PC from the vector.
/// let cpu = CPU::new(memory);
///
/// assert_eq!(cpu.pc(), 0x8000);
/// assert_eq!(cpu.stkp(), 0xFF);
/// assert_eq!(cpu.cycles(), 7);
/// ```
pub struct CPU<M: MemoryBus> {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Stack pointer (0x0100 + stkp gives the full stack address)
    pub(crate) stkp: u8,

    /// Program counter
    pub(crate) pc: u16,

    /// Status register
    pub(crate) status: u8,

    /// Instruction register: opcode currently in flight
    pub(crate) opcode: u8,

    /// Input data latch filled by operand fetches
    pub(crate) fetched: u8,

    /// Effective address computed by the addressing mode
    pub(crate) addr_abs: u16,

    /// Sign-extended branch displacement
    pub(crate) addr_rel: u16,

    /// Cycles remaining before the next instruction fetch
    pub(crate) cycles: u8,

    /// Total clock cycles since power-on
    pub(crate) clock_count: u64,

    /// Set by BRK; fetches stop until reset
    pub(crate) halted: bool,

    /// Memory Lock output: driven low during read-modify-write instructions
    pub(crate) mlb: bool,

    /// Mnemonic of the instruction in flight
    pub(crate) mnemonic: &'static str,

    /// Memory bus implementation
    pub(crate) memory: M,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a new CPU wired to the given memory bus and resets it.
    ///
    /// The reset loads PC from the vector at 0xFFFC/0xFFFD (little-endian),
    /// so the bus should already contain the vector when the CPU is built.
    pub fn new(memory: M) -> Self {
        let mut cpu = Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            stkp: 0x00,
            pc: 0x0000,
            status: 0x00,
            opcode: 0x00,
            fetched: 0x00,
            addr_abs: 0x0000,
            addr_rel: 0x0000,
            cycles: 0,
            clock_count: 0,
            halted: false,
            mlb: true,
            mnemonic: "???",
            memory,
        };
        cpu.reset();
        cpu
    }

    /// Forces the CPU into its known power-on state.
    ///
    /// PC is loaded from the reset vector at 0xFFFC/0xFFFD, A/X/Y are
    /// cleared, the stack pointer starts at 0xFF and the status register
    /// keeps U, B and I set. The sequence is charged 7 cycles. A halted
    /// CPU starts fetching again after reset.
    pub fn reset(&mut self) {
        self.halted = false;

        let lo = self.read(RESET_VECTOR) as u16;
        let hi = self.read(RESET_VECTOR + 1) as u16;
        self.pc = (hi << 8) | lo;

        self.a = 0;
        self.x = 0;
        self.y = 0;
        self.stkp = 0xFF;
        self.status = flags::U | flags::B | flags::I;

        self.addr_rel = 0x0000;
        self.addr_abs = 0x0000;
        self.fetched = 0x00;

        self.cycles = 7;
    }

    /// Maskable interrupt request.
    ///
    /// Ignored while the I flag is set. Otherwise the current PC and status
    /// are pushed (high byte, low byte, status — with B cleared and U, I set
    /// before the status push), PC is reloaded from the vector at 0xFFFE and
    /// the sequence is charged 7 cycles.
    pub fn irq(&mut self) {
        if self.get_flag(flags::I) {
            return;
        }

        self.push((self.pc >> 8) as u8);
        self.push(self.pc as u8);

        self.set_flag(flags::B, false);
        self.set_flag(flags::U, true);
        self.set_flag(flags::I, true);
        self.push(self.status);

        let lo = self.read(IRQ_VECTOR) as u16;
        let hi = self.read(IRQ_VECTOR + 1) as u16;
        self.pc = (hi << 8) | lo;

        self.cycles = 7;
    }

    /// Non-maskable interrupt.
    ///
    /// Same push sequence as [`CPU::irq`] but it cannot be ignored, reads
    /// its vector from 0xFFFA, leaves the I flag *cleared* afterwards and is
    /// charged 8 cycles.
    pub fn nmi(&mut self) {
        self.push((self.pc >> 8) as u8);
        self.push(self.pc as u8);

        self.set_flag(flags::B, false);
        self.set_flag(flags::U, true);
        self.set_flag(flags::I, true);
        self.push(self.status);

        let lo = self.read(NMI_VECTOR) as u16;
        let hi = self.read(NMI_VECTOR + 1) as u16;
        self.pc = (hi << 8) | lo;

        self.set_flag(flags::I, false);
        self.cycles = 8;
    }

    /// Advances the CPU by one clock cycle.
    ///
    /// When the remaining-cycle counter is zero a full instruction is
    /// fetched, decoded through [`OPCODE_TABLE`] and executed; the counter is
    /// loaded with its cycle cost plus the conjunction of the two
    /// extra-cycle signals. On every call the global clock advances and the
    /// counter decrements, so an instruction costing N cycles occupies N
    /// calls. While halted only the clock bookkeeping runs.
    pub fn step(&mut self) {
        if self.cycles == 0 {
            // Memory Lock idles high between instructions; RMW handlers
            // drive it low for their write-back window.
            self.mlb = true;

            if !self.halted {
                self.opcode = self.read(self.pc);
                self.set_flag(flags::U, true);
                self.pc = self.pc.wrapping_add(1);

                let entry = &OPCODE_TABLE[self.opcode as usize];
                self.mnemonic = entry.mnemonic;
                self.cycles = entry.cycles;

                let extra_addr = self.resolve_address(entry.mode);
                let extra_op = self.execute(entry.operation);

                // Both the mode and the operation must claim the penalty.
                self.cycles += extra_addr & extra_op;

                self.set_flag(flags::U, true);
            }
        }

        self.clock_count += 1;
        self.cycles = self.cycles.saturating_sub(1);
    }

    /// Runs `step()` until the current instruction completes and the next
    /// fetch is due. Convenience for instruction-granular tests.
    pub fn step_instruction(&mut self) {
        self.step();
        while self.cycles > 0 {
            self.step();
        }
    }

    // ------------------------------------------------------------------
    // Flag helpers

    /// Returns whether the given status bit is set.
    pub fn get_flag(&self, mask: u8) -> bool {
        self.status & mask != 0
    }

    /// Sets or clears the given status bit.
    pub fn set_flag(&mut self, mask: u8, value: bool) {
        if value {
            self.status |= mask;
        } else {
            self.status &= !mask;
        }
    }

    // ------------------------------------------------------------------
    // Bus and stack plumbing shared by the instruction handlers

    pub(crate) fn read(&self, addr: u16) -> u8 {
        self.memory.read(addr)
    }

    pub(crate) fn write(&mut self, addr: u16, value: u8) {
        self.memory.write(addr, value);
    }

    pub(crate) fn push(&mut self, value: u8) {
        self.write(STACK_BASE + self.stkp as u16, value);
        self.stkp = self.stkp.wrapping_sub(1);
    }

    pub(crate) fn pull(&mut self) -> u8 {
        self.stkp = self.stkp.wrapping_add(1);
        self.read(STACK_BASE + self.stkp as u16)
    }

    /// Loads the input data latch for the instruction in flight.
    ///
    /// Implied-mode instructions already latched the accumulator during
    /// address resolution; everything else reads the effective address.
    pub(crate) fn fetch(&mut self) -> u8 {
        if OPCODE_TABLE[self.opcode as usize].mode != AddressingMode::Implied {
            self.fetched = self.read(self.addr_abs);
        }
        self.fetched
    }

    /// Writes a shift/rotate result to the accumulator or back to memory,
    /// depending on the addressing mode of the instruction in flight.
    pub(crate) fn write_back(&mut self, value: u8) {
        if OPCODE_TABLE[self.opcode as usize].mode == AddressingMode::Implied {
            self.a = value;
        } else {
            self.write(self.addr_abs, value);
        }
    }

    // ------------------------------------------------------------------
    // Addressing

    /// Resolves the operand location for the given addressing mode.
    ///
    /// Consumes operand bytes at PC, leaves the effective address in
    /// `addr_abs` (or the displacement in `addr_rel` for branches) and
    /// returns 1 when indexing crossed a page boundary and the slot is
    /// eligible for the extra-cycle penalty.
    fn resolve_address(&mut self, mode: AddressingMode) -> u8 {
        match mode {
            AddressingMode::Implied => {
                self.fetched = self.a;
                0
            }
            AddressingMode::Immediate => {
                self.addr_abs = self.pc;
                self.pc = self.pc.wrapping_add(1);
                0
            }
            AddressingMode::ZeroPage => {
                self.addr_abs = self.read(self.pc) as u16;
                self.pc = self.pc.wrapping_add(1);
                0
            }
            AddressingMode::ZeroPageX => {
                self.addr_abs = self.read(self.pc).wrapping_add(self.x) as u16;
                self.pc = self.pc.wrapping_add(1);
                0
            }
            AddressingMode::ZeroPageY => {
                self.addr_abs = self.read(self.pc).wrapping_add(self.y) as u16;
                self.pc = self.pc.wrapping_add(1);
                0
            }
            AddressingMode::Relative => {
                let byte = self.read(self.pc) as u16;
                self.pc = self.pc.wrapping_add(1);
                // Sign-extend the displacement into the high byte.
                self.addr_rel = if byte & 0x80 != 0 { byte | 0xFF00 } else { byte };
                0
            }
            AddressingMode::Absolute => {
                let lo = self.read(self.pc) as u16;
                self.pc = self.pc.wrapping_add(1);
                let hi = self.read(self.pc) as u16;
                self.pc = self.pc.wrapping_add(1);
                self.addr_abs = (hi << 8) | lo;
                0
            }
            AddressingMode::AbsoluteX => {
                let lo = self.read(self.pc) as u16;
                self.pc = self.pc.wrapping_add(1);
                let hi = self.read(self.pc) as u16;
                self.pc = self.pc.wrapping_add(1);
                self.addr_abs = ((hi << 8) | lo).wrapping_add(self.x as u16);
                u8::from(self.addr_abs & 0xFF00 != hi << 8)
            }
            AddressingMode::AbsoluteY => {
                let lo = self.read(self.pc) as u16;
                self.pc = self.pc.wrapping_add(1);
                let hi = self.read(self.pc) as u16;
                self.pc = self.pc.wrapping_add(1);
                self.addr_abs = ((hi << 8) | lo).wrapping_add(self.y as u16);
                u8::from(self.addr_abs & 0xFF00 != hi << 8)
            }
            AddressingMode::Indirect => {
                let ptr_lo = self.read(self.pc) as u16;
                self.pc = self.pc.wrapping_add(1);
                let ptr_hi = self.read(self.pc) as u16;
                self.pc = self.pc.wrapping_add(1);
                let ptr = (ptr_hi << 8) | ptr_lo;

                self.addr_abs = if ptr_lo == 0x00FF {
                    // Hardware defect: the high byte wraps within the page
                    // instead of crossing into the next one.
                    ((self.read(ptr & 0xFF00) as u16) << 8) | self.read(ptr) as u16
                } else {
                    ((self.read(ptr + 1) as u16) << 8) | self.read(ptr) as u16
                };
                0
            }
            AddressingMode::IndirectX => {
                let t = self.read(self.pc);
                self.pc = self.pc.wrapping_add(1);

                let lo = self.read(t.wrapping_add(self.x) as u16) as u16;
                let hi = self.read(t.wrapping_add(self.x).wrapping_add(1) as u16) as u16;
                self.addr_abs = (hi << 8) | lo;
                0
            }
            AddressingMode::IndirectY => {
                let t = self.read(self.pc);
                self.pc = self.pc.wrapping_add(1);

                let lo = self.read(t as u16) as u16;
                let hi = self.read(t.wrapping_add(1) as u16) as u16;
                self.addr_abs = ((hi << 8) | lo).wrapping_add(self.y as u16);
                u8::from(self.addr_abs & 0xFF00 != hi << 8)
            }
        }
    }

    // ------------------------------------------------------------------
    // Execution

    /// Dispatches the operation selected by the decode stage.
    fn execute(&mut self, operation: Operation) -> u8 {
        match operation {
            Operation::Adc => instructions::alu::adc(self),
            Operation::And => instructions::alu::and(self),
            Operation::Asl => instructions::shifts::asl(self),
            Operation::Bcc => instructions::branches::bcc(self),
            Operation::Bcs => instructions::branches::bcs(self),
            Operation::Beq => instructions::branches::beq(self),
            Operation::Bit => instructions::alu::bit(self),
            Operation::Bmi => instructions::branches::bmi(self),
            Operation::Bne => instructions::branches::bne(self),
            Operation::Bpl => instructions::branches::bpl(self),
            Operation::Brk => instructions::control::brk(self),
            Operation::Bvc => instructions::branches::bvc(self),
            Operation::Bvs => instructions::branches::bvs(self),
            Operation::Clc => instructions::flags::clc(self),
            Operation::Cld => instructions::flags::cld(self),
            Operation::Cli => instructions::flags::cli(self),
            Operation::Clv => instructions::flags::clv(self),
            Operation::Cmp => instructions::alu::cmp(self),
            Operation::Cpx => instructions::alu::cpx(self),
            Operation::Cpy => instructions::alu::cpy(self),
            Operation::Dec => instructions::inc_dec::dec(self),
            Operation::Dex => instructions::inc_dec::dex(self),
            Operation::Dey => instructions::inc_dec::dey(self),
            Operation::Eor => instructions::alu::eor(self),
            Operation::Inc => instructions::inc_dec::inc(self),
            Operation::Inx => instructions::inc_dec::inx(self),
            Operation::Iny => instructions::inc_dec::iny(self),
            Operation::Jmp => instructions::control::jmp(self),
            Operation::Jsr => instructions::control::jsr(self),
            Operation::Lda => instructions::load_store::lda(self),
            Operation::Ldx => instructions::load_store::ldx(self),
            Operation::Ldy => instructions::load_store::ldy(self),
            Operation::Lsr => instructions::shifts::lsr(self),
            Operation::Nop => instructions::control::nop(self),
            Operation::Ora => instructions::alu::ora(self),
            Operation::Pha => instructions::stack::pha(self),
            Operation::Php => instructions::stack::php(self),
            Operation::Pla => instructions::stack::pla(self),
            Operation::Plp => instructions::stack::plp(self),
            Operation::Rol => instructions::shifts::rol(self),
            Operation::Ror => instructions::shifts::ror(self),
            Operation::Rti => instructions::control::rti(self),
            Operation::Rts => instructions::control::rts(self),
            Operation::Sbc => instructions::alu::sbc(self),
            Operation::Sec => instructions::flags::sec(self),
            Operation::Sed => instructions::flags::sed(self),
            Operation::Sei => instructions::flags::sei(self),
            Operation::Sta => instructions::load_store::sta(self),
            Operation::Stx => instructions::load_store::stx(self),
            Operation::Sty => instructions::load_store::sty(self),
            Operation::Tax => instructions::transfer::tax(self),
            Operation::Tay => instructions::transfer::tay(self),
            Operation::Tsx => instructions::transfer::tsx(self),
            Operation::Txa => instructions::transfer::txa(self),
            Operation::Txs => instructions::transfer::txs(self),
            Operation::Tya => instructions::transfer::tya(self),
            Operation::Illegal => instructions::control::illegal(self),
        }
    }

    // ------------------------------------------------------------------
    // Introspection

    /// Accumulator.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// X index register.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Y index register.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Program counter.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Stack pointer.
    pub fn stkp(&self) -> u8 {
        self.stkp
    }

    /// Raw status byte.
    pub fn status(&self) -> u8 {
        self.status
    }

    /// Cycles remaining in the instruction in flight.
    pub fn cycles(&self) -> u8 {
        self.cycles
    }

    /// Total clock cycles since power-on.
    pub fn clock_count(&self) -> u64 {
        self.clock_count
    }

    /// Whether BRK has halted the processor.
    pub fn halted(&self) -> bool {
        self.halted
    }

    /// Memory Lock output. Low during read-modify-write instructions.
    pub fn mlb(&self) -> bool {
        self.mlb
    }

    /// Mnemonic of the instruction in flight.
    pub fn mnemonic(&self) -> &'static str {
        self.mnemonic
    }

    /// Shared access to the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Exclusive access to the memory bus.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    /// Overwrites the accumulator. Debugger/test hook.
    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// Overwrites the X register. Debugger/test hook.
    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Overwrites the Y register. Debugger/test hook.
    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Overwrites the program counter. Debugger/test hook.
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Captures the register file for debuggers and tests.
    pub fn snapshot(&self) -> CpuSnapshot {
        CpuSnapshot {
            a: self.a,
            x: self.x,
            y: self.y,
            pc: self.pc,
            stack_addr: STACK_BASE + self.stkp as u16,
            status: self.status,
            clock_count: self.clock_count,
            cycles: self.cycles,
            opcode: self.opcode,
            fetched: self.fetched,
            mnemonic: self.mnemonic,
            halted: self.halted,
        }
    }

    /// Disassembles the memory range `start..stop` into human-readable
    /// lines keyed by address.
    ///
    /// The decoder walks the same opcode table as the execution core, so
    /// operand sizes always match what the CPU would consume. Output shape
    /// is `"<opcode> : <mnemonic> <operand> {MODE}"`.
    pub fn disassemble(&self, start: u16, stop: u16) -> Vec<(u16, String)> {
        let mut lines = Vec::new();
        let mut addr = start as u32;

        while addr < stop as u32 {
            let line_addr = addr as u16;
            let opcode = self.read(addr as u16);
            let entry = &OPCODE_TABLE[opcode as usize];
            addr += 1;

            let mut read_byte = |addr: &mut u32| {
                let value = self.read(*addr as u16);
                *addr += 1;
                value
            };

            let text = match entry.mode {
                AddressingMode::Implied => {
                    format!("{:x} : {}  {{IMP}}", opcode, entry.mnemonic)
                }
                AddressingMode::Immediate => {
                    let value = read_byte(&mut addr);
                    format!("{:x} : {} #${:x} {{IMM}}", opcode, entry.mnemonic, value)
                }
                AddressingMode::ZeroPage => {
                    let lo = read_byte(&mut addr);
                    format!("{:x} : {} ${:x} {{ZP0}}", opcode, entry.mnemonic, lo)
                }
                AddressingMode::ZeroPageX => {
                    let lo = read_byte(&mut addr);
                    format!("{:x} : {} ${:x}, X {{ZPX}}", opcode, entry.mnemonic, lo)
                }
                AddressingMode::ZeroPageY => {
                    let lo = read_byte(&mut addr);
                    format!("{:x} : {} ${:x}, Y {{ZPY}}", opcode, entry.mnemonic, lo)
                }
                AddressingMode::IndirectX => {
                    let lo = read_byte(&mut addr);
                    format!("{:x} : {} (${:x}, X) {{IZX}}", opcode, entry.mnemonic, lo)
                }
                AddressingMode::IndirectY => {
                    let lo = read_byte(&mut addr);
                    format!("{:x} : {} (${:x}), Y {{IZY}}", opcode, entry.mnemonic, lo)
                }
                AddressingMode::Absolute => {
                    let lo = read_byte(&mut addr) as u16;
                    let hi = read_byte(&mut addr) as u16;
                    format!("{:x} : {} ${:x} {{ABS}}", opcode, entry.mnemonic, (hi << 8) | lo)
                }
                AddressingMode::AbsoluteX => {
                    let lo = read_byte(&mut addr) as u16;
                    let hi = read_byte(&mut addr) as u16;
                    format!("{:x} : {} ${:x}, X {{ABX}}", opcode, entry.mnemonic, (hi << 8) | lo)
                }
                AddressingMode::AbsoluteY => {
                    let lo = read_byte(&mut addr) as u16;
                    let hi = read_byte(&mut addr) as u16;
                    format!("{:x} : {} ${:x}, Y {{ABY}}", opcode, entry.mnemonic, (hi << 8) | lo)
                }
                AddressingMode::Indirect => {
                    let lo = read_byte(&mut addr) as u16;
                    let hi = read_byte(&mut addr) as u16;
                    format!("{:x} : {} (${:x}) {{IND}}", opcode, entry.mnemonic, (hi << 8) | lo)
                }
                AddressingMode::Relative => {
                    let value = read_byte(&mut addr);
                    let target = (addr as u16).wrapping_add(value as i8 as u16);
                    format!(
                        "{:x} : {} ${:x} [${:x}] {{REL}}",
                        opcode, entry.mnemonic, value, target
                    )
                }
            };

            lines.push((line_addr, text));
        }

        lines
    }
}
