//! # Error Types
//!
//! Bus accesses themselves never fail (unmapped reads float, unmapped
//! writes are dropped); the only fallible surface is the program
//! loader, which accepts addresses from an external assembler and must
//! reject anything outside the 16-bit address space.

use thiserror::Error;

/// Errors surfaced by the loader path.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BusError {
    /// The loader supplied an address outside 0x0000-0xFFFF.
    #[error("address {addr:#06x} is outside the 16-bit address space")]
    AddressOutOfBounds {
        /// The offending loader address.
        addr: u32,
    },
}

/// Convenience alias for results carrying a [`BusError`].
pub type Result<T> = std::result::Result<T, BusError>;
