//! # Memory Bus Abstraction
//!
//! This module provides the `MemoryBus` trait that decouples the CPU
//! from the concrete memory map, plus the flat `Ram` device backing the
//! single-board computer.
//!
//! ## Design Principles
//!
//! The bus follows 6502 hardware behavior:
//! - No bus errors — reads/writes through the bus always succeed
//! - Unmapped reads return the floating-bus value (0xFF)
//! - Writes to unmapped regions are ignored
//!
//! The only failing path is the *loader* contract: an external
//! assembler supplies `(address, byte)` pairs, and an address outside
//! `0x0000..=0xFFFF` is a loader bug surfaced as
//! [`BusError::AddressOutOfBounds`](crate::BusError).

use crate::error::{BusError, Result};

/// Value seen on the data bus when no device drives it.
pub const FLOATING_BUS: u8 = 0xFF;

/// Memory bus trait for CPU byte reads/writes.
///
/// Implementations of this trait provide the memory backend for the
/// CPU. The CPU accesses everything (RAM, peripheral registers)
/// through this abstraction.
///
/// # Examples
///
/// ```
/// use sbc6502::{MemoryBus, Ram};
///
/// let mut mem = Ram::new();
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address.
    ///
    /// Must never panic; unmapped addresses return the floating-bus
    /// value.
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address.
    ///
    /// Must never panic; writes to unmapped addresses are ignored.
    fn write(&mut self, addr: u16, value: u8);
}

/// Flat 64KB RAM device.
///
/// All addresses 0x0000-0xFFFF map to a contiguous array initialized
/// to zero. Program images are loaded through the checked [`Ram::load`]
/// path so that a bad loader address fails loudly instead of wrapping.
///
/// # Examples
///
/// ```
/// use sbc6502::{MemoryBus, Ram};
///
/// let mut ram = Ram::new();
/// ram.load(0xFFFC, 0x00).unwrap();
/// ram.load(0xFFFD, 0x80).unwrap();
/// assert_eq!(ram.read(0xFFFC), 0x00);
/// assert!(ram.load(0x1_0000, 0xEA).is_err());
/// ```
pub struct Ram {
    data: Box<[u8; Ram::SIZE]>,
}

impl Ram {
    /// Number of addressable bytes.
    pub const SIZE: usize = 0x1_0000;

    /// Creates a new RAM with every byte cleared to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; Ram::SIZE]),
        }
    }

    /// Loads one byte from the external assembler/loader stream.
    ///
    /// The loader address space is `u32` so that out-of-range inputs
    /// are representable; anything above 0xFFFF is rejected.
    pub fn load(&mut self, addr: u32, byte: u8) -> Result<()> {
        if addr as usize >= Ram::SIZE {
            return Err(BusError::AddressOutOfBounds { addr });
        }
        self.data[addr as usize] = byte;
        Ok(())
    }

    /// Loads a contiguous block starting at `org`.
    pub fn load_bytes(&mut self, org: u32, bytes: &[u8]) -> Result<()> {
        for (i, &byte) in bytes.iter().enumerate() {
            self.load(org + i as u32, byte)?;
        }
        Ok(())
    }

    /// Clears every byte back to zero.
    pub fn clear(&mut self) {
        self.data.fill(0x00);
    }

    /// Read-only view of the backing storage, for diagnostics.
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..]
    }
}

impl Default for Ram {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for Ram {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ram_read_write() {
        let mut ram = Ram::new();

        assert_eq!(ram.read(0x0000), 0x00);
        assert_eq!(ram.read(0xFFFF), 0x00);

        ram.write(0x1234, 0x42);
        assert_eq!(ram.read(0x1234), 0x42);
        assert_eq!(ram.read(0x1233), 0x00);
        assert_eq!(ram.read(0x1235), 0x00);
    }

    #[test]
    fn test_ram_load_in_bounds() {
        let mut ram = Ram::new();
        ram.load(0x8000, 0xA9).unwrap();
        ram.load_bytes(0x8001, &[0xFF, 0x8D]).unwrap();

        assert_eq!(ram.read(0x8000), 0xA9);
        assert_eq!(ram.read(0x8001), 0xFF);
        assert_eq!(ram.read(0x8002), 0x8D);
    }

    #[test]
    fn test_ram_load_out_of_bounds() {
        let mut ram = Ram::new();
        assert_eq!(
            ram.load(0x1_0000, 0xEA),
            Err(BusError::AddressOutOfBounds { addr: 0x1_0000 })
        );
        // A block that starts in range but runs past the end fails too.
        assert!(ram.load_bytes(0xFFFF, &[0x01, 0x02]).is_err());
        assert_eq!(ram.read(0xFFFF), 0x01);
    }

    #[test]
    fn test_ram_clear() {
        let mut ram = Ram::new();
        ram.write(0x0042, 0xAA);
        ram.clear();
        assert_eq!(ram.read(0x0042), 0x00);
    }
}
