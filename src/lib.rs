//! # 6502 Single-Board Computer Emulator
//!
//! An emulator for a small 8-bit machine: a 6502-class CPU, a
//! 6522-style interface adapter and an HD44780-class character LCD on a
//! shared 16-bit bus.
//!
//! ## Quick Start
//!
//! ```rust
//! use sbc6502::Computer;
//!
//! let mut computer = Computer::new();
//!
//! // LDA #$FF; STA $6000; BRK
//! computer.load_image(0x8000, &[0xA9, 0xFF, 0x8D, 0x00, 0x60, 0x00]).unwrap();
//! computer.load_image(0xFFFC, &[0x00, 0x80]).unwrap(); // reset vector
//! computer.reset();
//!
//! computer.run_until_halted(100);
//!
//! assert_eq!(computer.cpu().a(), 0xFF);
//! assert_eq!(computer.bus().via().port_b().port, 0xFF);
//! ```
//!
//! ## Architecture
//!
//! - **Cycle-stepped CPU**: instructions execute in full on their first
//!   cycle and then burn down their cycle cost, so devices on the bus
//!   see realistic instruction timing
//! - **Table-driven decode**: all 256 opcode slots live in a single
//!   metadata table, undocumented slots included
//! - **Strict ownership tree**: the CPU owns the bus, the bus owns the
//!   VIA, the VIA owns the LCD; interrupt requests flow back up as
//!   return values, never as back-references
//! - **Trait seams**: [`MemoryBus`] decouples the CPU from the memory
//!   map, [`Screen`] decouples the LCD from its renderer
//!
//! ## Modules
//!
//! - `cpu` - CPU state, interrupt lines and the cycle-stepped core
//! - `memory` - `MemoryBus` trait and the flat RAM
//! - `opcodes` - opcode metadata table
//! - `addressing` - addressing mode enumeration
//! - `bus` - the fixed system memory map
//! - `devices` - the VIA and the LCD
//! - `system` - the assembled `Computer`

pub mod addressing;
pub mod bus;
pub mod cpu;
pub mod devices;
pub mod error;
pub mod memory;
pub mod opcodes;
pub mod system;

// Internal instruction implementations (not part of public API)
mod instructions;

// Re-export public API
pub use addressing::AddressingMode;
pub use bus::{SystemBus, VIA_BASE, VIA_END};
pub use cpu::{flags, CpuSnapshot, CPU};
pub use devices::{Hd44780, IrqLine, LcdSnapshot, PortState, Screen, Via6522, ViaSnapshot};
pub use error::{BusError, Result};
pub use memory::{MemoryBus, Ram, FLOATING_BUS};
pub use opcodes::{OpcodeMetadata, Operation, OPCODE_TABLE};
pub use system::Computer;
