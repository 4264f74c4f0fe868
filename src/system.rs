//! # System Driver
//!
//! The `Computer` owns the wired device tree: a CPU whose bus decodes
//! into RAM and the VIA, with the LCD hanging off the VIA's ports. It
//! is the only place where interrupt requests returned by the VIA are
//! applied to the CPU, which keeps the ownership tree a strict
//! hierarchy with no back-references.

use crate::bus::SystemBus;
use crate::cpu::{CpuSnapshot, CPU};
use crate::devices::lcd::Screen;
use crate::devices::via::IrqLine;
use crate::error::Result;

/// The assembled single-board computer.
///
/// # Examples
///
/// ```
/// use sbc6502::Computer;
///
/// let mut computer = Computer::new();
/// // LDA #$FF; STA $6000; BRK — light up every pin of port B.
/// computer.load_image(0x8000, &[0xA9, 0xFF, 0x8D, 0x00, 0x60, 0x00]).unwrap();
/// computer.load_image(0xFFFC, &[0x00, 0x80]).unwrap();
/// computer.reset();
///
/// computer.run_until_halted(100);
///
/// assert!(computer.cpu().halted());
/// assert_eq!(computer.cpu().a(), 0xFF);
/// ```
pub struct Computer {
    cpu: CPU<SystemBus>,
}

impl Computer {
    /// Builds and wires the machine: RAM, VIA with the LCD attached,
    /// and the CPU on top. The CPU resets during construction, so load
    /// the reset vector and call [`Computer::reset`] before running.
    pub fn new() -> Self {
        Self {
            cpu: CPU::new(SystemBus::new()),
        }
    }

    /// Loads one `(address, byte)` pair into RAM through the checked
    /// loader path.
    pub fn load(&mut self, addr: u32, byte: u8) -> Result<()> {
        self.cpu.memory_mut().ram_mut().load(addr, byte)
    }

    /// Loads a program image at the given origin.
    pub fn load_image(&mut self, org: u32, bytes: &[u8]) -> Result<()> {
        self.cpu.memory_mut().ram_mut().load_bytes(org, bytes)
    }

    /// Resets the CPU (PC from the vector at 0xFFFC) and the devices
    /// behind the VIA. RAM contents survive.
    pub fn reset(&mut self) {
        self.cpu.reset();
        self.cpu.memory_mut().via_mut().reset();
    }

    /// Advances the machine by one clock cycle. Does nothing once the
    /// CPU has halted.
    pub fn tick(&mut self) {
        if self.cpu.halted() {
            return;
        }
        self.cpu.step();
    }

    /// Runs for at most `budget` clock cycles. Returns the number of
    /// cycles actually consumed (halting cuts the run short).
    pub fn run_for_cycles(&mut self, budget: u64) -> u64 {
        let mut consumed = 0;
        while consumed < budget && !self.cpu.halted() {
            self.cpu.step();
            consumed += 1;
        }
        consumed
    }

    /// Runs until the program halts via BRK, up to `max_cycles`.
    /// Returns true if the CPU halted within the budget.
    pub fn run_until_halted(&mut self, max_cycles: u64) -> bool {
        self.run_for_cycles(max_cycles);
        self.cpu.halted()
    }

    /// Delivers a key scan code: the VIA latches it on port B and the
    /// interrupt line it is wired to is pulsed on the CPU.
    pub fn key_event(&mut self, code: u8) {
        let request = self.cpu.memory_mut().via_mut().key_event(code);
        match request {
            Some(IrqLine::Irq) => self.cpu.irq(),
            Some(IrqLine::Nmi) => self.cpu.nmi(),
            None => {}
        }
    }

    /// Pulses the CPU's IRQ line directly.
    pub fn irq(&mut self) {
        self.cpu.irq();
    }

    /// Pulses the CPU's NMI line directly.
    pub fn nmi(&mut self) {
        self.cpu.nmi();
    }

    /// Attaches the output surface to the LCD behind the VIA.
    pub fn attach_screen(&mut self, screen: Box<dyn Screen>) {
        if let Some(lcd) = self.cpu.memory_mut().via_mut().lcd_mut() {
            lcd.attach_screen(screen);
        }
    }

    /// The CPU and everything it owns.
    pub fn cpu(&self) -> &CPU<SystemBus> {
        &self.cpu
    }

    /// Exclusive access to the CPU.
    pub fn cpu_mut(&mut self) -> &mut CPU<SystemBus> {
        &mut self.cpu
    }

    /// The bus behind the CPU.
    pub fn bus(&self) -> &SystemBus {
        self.cpu.memory()
    }

    /// Exclusive access to the bus.
    pub fn bus_mut(&mut self) -> &mut SystemBus {
        self.cpu.memory_mut()
    }

    /// Register-file snapshot of the CPU.
    pub fn cpu_status(&self) -> CpuSnapshot {
        self.cpu.snapshot()
    }
}

impl Default for Computer {
    fn default() -> Self {
        Self::new()
    }
}
