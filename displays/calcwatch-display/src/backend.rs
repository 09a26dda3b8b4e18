//! Display transport trait
//!
//! The watch core renders into a [`Framebuffer`] and hands it to a
//! transport. Transport failures are never fatal after startup: the
//! caller logs [`DisplayError::code`] and the next frame retries.

use calcwatch_hal::I2cError;

use crate::framebuffer::Framebuffer;

/// Display transport errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// The bus accepted fewer bytes than were sent
    ShortWrite {
        /// Bytes the transaction should have carried
        expected: usize,
        /// Bytes actually accepted
        accepted: usize,
    },
    /// The bus reported a failure
    Bus(I2cError),
}

impl DisplayError {
    /// Numeric code surfaced to logging
    ///
    /// Short writes report `2000 + accepted`, bus failures `3000 + code`.
    pub fn code(self) -> u32 {
        match self {
            DisplayError::ShortWrite { accepted, .. } => 2000 + accepted as u32,
            DisplayError::Bus(err) => 3000 + u32::from(err.code()),
        }
    }
}

impl From<I2cError> for DisplayError {
    fn from(err: I2cError) -> Self {
        DisplayError::Bus(err)
    }
}

/// Display transport
///
/// Implemented by controller drivers; mocked in tests.
pub trait DisplayTransport {
    /// Send the controller initialization sequence
    fn init(&mut self) -> Result<(), DisplayError>;

    /// Set panel contrast (0-255)
    fn set_contrast(&mut self, value: u8) -> Result<(), DisplayError>;

    /// Fix the addressing window to the full panel
    fn set_window(&mut self) -> Result<(), DisplayError>;

    /// Push a full frame, page by page
    fn push_frame(&mut self, frame: &Framebuffer) -> Result<(), DisplayError>;

    /// Push a blank frame
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.push_frame(&Framebuffer::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let short = DisplayError::ShortWrite {
            expected: 129,
            accepted: 64,
        };
        assert_eq!(short.code(), 2064);
        assert_eq!(DisplayError::Bus(I2cError::AddressNack).code(), 3002);
        assert_eq!(DisplayError::from(I2cError::Timeout).code(), 3005);
    }
}
