//! GPIO pin abstractions
//!
//! The watch reads four discrete buttons and scans a 4x4 keypad by
//! driving one row line at a time and sampling the four column lines.
//! Lines are debounced electrically through their pull configuration,
//! so these traits expose plain level reads and writes.

/// Digital output pin (keypad row drive)
pub trait OutputPin {
    /// Drive the line high
    fn set_high(&mut self);

    /// Drive the line low
    fn set_low(&mut self);

    /// Drive the line to a specific level
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }
}

/// Digital input pin (button line or keypad column)
pub trait InputPin {
    /// Check if the line reads high (pressed, for pulled-down lines)
    fn is_high(&self) -> bool;

    /// Check if the line reads low
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}
