//! # Memory-Mapped Peripherals
//!
//! Devices living behind the system bus:
//!
//! - [`via::Via6522`] — the 6522-style interface adapter mapped at
//!   0x6000-0x6FFF, which owns the LCD and routes keyboard interrupts
//! - [`lcd::Hd44780`] — the character LCD controller driven through the
//!   VIA's ports

pub mod lcd;
pub mod via;

pub use lcd::{Hd44780, LcdSnapshot, Screen};
pub use via::{IrqLine, PortState, Via6522, ViaSnapshot};
