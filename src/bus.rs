//! # System Bus
//!
//! The fixed memory map of the single-board computer: the VIA occupies
//! 0x6000-0x6FFF, flat RAM backs everything else (including the vectors
//! at the top of the address space and the stack page).
//!
//! Address decoding is exclusive: a write into the VIA window reaches
//! the VIA only, never the RAM underneath it.

use crate::devices::via::Via6522;
use crate::memory::{MemoryBus, Ram};

/// First address decoded to the VIA.
pub const VIA_BASE: u16 = 0x6000;

/// Last address decoded to the VIA.
pub const VIA_END: u16 = 0x6FFF;

/// The single-board computer's bus: RAM plus the VIA window.
///
/// # Examples
///
/// ```
/// use sbc6502::{MemoryBus, SystemBus};
///
/// let mut bus = SystemBus::new();
/// bus.write(0x1234, 0x42); // RAM
/// bus.write(0x6000, 0x55); // VIA port B
///
/// assert_eq!(bus.read(0x1234), 0x42);
/// assert_eq!(bus.read(0x6000), 0x55);
/// ```
pub struct SystemBus {
    ram: Ram,
    via: Via6522,
}

impl SystemBus {
    /// Creates a bus with zeroed RAM and a freshly wired VIA.
    pub fn new() -> Self {
        Self {
            ram: Ram::new(),
            via: Via6522::new(),
        }
    }

    /// The RAM behind the bus.
    pub fn ram(&self) -> &Ram {
        &self.ram
    }

    /// Exclusive access to the RAM, for loaders and tests.
    pub fn ram_mut(&mut self) -> &mut Ram {
        &mut self.ram
    }

    /// The VIA behind the bus.
    pub fn via(&self) -> &Via6522 {
        &self.via
    }

    /// Exclusive access to the VIA.
    pub fn via_mut(&mut self) -> &mut Via6522 {
        &mut self.via
    }
}

impl Default for SystemBus {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for SystemBus {
    fn read(&self, addr: u16) -> u8 {
        if (VIA_BASE..=VIA_END).contains(&addr) {
            self.via.read(addr - VIA_BASE)
        } else {
            self.ram.read(addr)
        }
    }

    fn write(&mut self, addr: u16, value: u8) {
        if (VIA_BASE..=VIA_END).contains(&addr) {
            self.via.write(addr - VIA_BASE, value);
        } else {
            self.ram.write(addr, value);
        }
    }
}
