//! I2C bus abstractions
//!
//! The display controller sits on an I2C bus. Every write reports how
//! many bytes the bus accepted so callers can detect short transfers in
//! addition to outright bus failures.

/// I2C bus failure
///
/// Numbering follows the conventional end-of-transmission status codes
/// so logs stay comparable with bench tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum I2cError {
    /// Data did not fit the transmit buffer
    DataTooLong,
    /// Address byte was not acknowledged
    AddressNack,
    /// A data byte was not acknowledged
    DataNack,
    /// Unclassified bus error (arbitration, overrun, ...)
    Other,
    /// Transfer timed out
    Timeout,
}

impl I2cError {
    /// Numeric status code for logging
    pub fn code(self) -> u16 {
        match self {
            I2cError::DataTooLong => 1,
            I2cError::AddressNack => 2,
            I2cError::DataNack => 3,
            I2cError::Other => 4,
            I2cError::Timeout => 5,
        }
    }
}

/// I2C bus master
pub trait I2cBus {
    /// Write `data` to the device at `address`
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `data` - Bytes to write as a single transaction
    ///
    /// Returns the number of bytes the bus accepted. A count smaller
    /// than `data.len()` is a short write, not an error at this level.
    fn write(&mut self, address: u8, data: &[u8]) -> Result<usize, I2cError>;
}
