//! SSD1306 OLED Display Driver
//!
//! Driver for 128x64 SSD1306-based OLED panels on I2C, pushing whole
//! frames in horizontal addressing mode.

use calcwatch_hal::I2cBus;

use crate::backend::{DisplayError, DisplayTransport};
use crate::framebuffer::{Framebuffer, WIDTH};

/// SSD1306 I2C address
const SSD1306_ADDR: u8 = 0x3C;

/// SSD1306 commands
mod cmd {
    /// Control byte: command stream follows
    pub const COMMAND_STREAM: u8 = 0x00;
    /// Control byte: display data follows
    pub const DATA_STREAM: u8 = 0x40;

    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_SEG_REMAP: u8 = 0xA0;
    pub const SET_COM_SCAN_INC: u8 = 0xC0;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const RESUME_FROM_RAM: u8 = 0xA4;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
    pub const SET_ADDRESSING_MODE: u8 = 0x20;
    pub const DEACTIVATE_SCROLL: u8 = 0x2E;
    pub const SET_COLUMN_RANGE: u8 = 0x21;
    pub const SET_PAGE_RANGE: u8 = 0x22;
}

/// Power-up sequence, sent as one command-stream write
const INIT_SEQUENCE: [u8; 22] = [
    cmd::COMMAND_STREAM,
    cmd::DISPLAY_OFF,
    cmd::SET_MUX_RATIO,
    0x3F, // 64 lines
    cmd::SET_DISPLAY_OFFSET,
    0x00,
    cmd::SET_START_LINE,
    cmd::SET_SEG_REMAP,
    cmd::SET_COM_SCAN_INC,
    cmd::SET_COM_PINS,
    0x12, // Alternative COM config, 0x02 skips lines on 64-row panels
    cmd::SET_CONTRAST,
    0x7F,
    cmd::RESUME_FROM_RAM,
    cmd::SET_CLOCK_DIV,
    0x80, // Default clock
    cmd::SET_CHARGE_PUMP,
    0x14, // Enable charge pump
    cmd::SET_ADDRESSING_MODE,
    0x00, // Horizontal
    cmd::DEACTIVATE_SCROLL,
    cmd::DISPLAY_ON,
];

/// Full-panel addressing window
const WINDOW_SEQUENCE: [u8; 7] = [
    cmd::COMMAND_STREAM,
    cmd::SET_COLUMN_RANGE,
    0x00,
    0x7F,
    cmd::SET_PAGE_RANGE,
    0x00,
    0x07,
];

/// SSD1306 OLED driver
pub struct Ssd1306<I2C> {
    i2c: I2C,
}

impl<I2C: I2cBus> Ssd1306<I2C> {
    /// Create a new SSD1306 driver
    pub fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    /// Release the bus
    pub fn release(self) -> I2C {
        self.i2c
    }

    /// One complete write transaction
    fn write_all(&mut self, bytes: &[u8]) -> Result<(), DisplayError> {
        let accepted = self.i2c.write(SSD1306_ADDR, bytes)?;
        if accepted != bytes.len() {
            return Err(DisplayError::ShortWrite {
                expected: bytes.len(),
                accepted,
            });
        }
        Ok(())
    }
}

impl<I2C: I2cBus> DisplayTransport for Ssd1306<I2C> {
    fn init(&mut self) -> Result<(), DisplayError> {
        self.write_all(&INIT_SEQUENCE)
    }

    fn set_contrast(&mut self, value: u8) -> Result<(), DisplayError> {
        self.write_all(&[cmd::COMMAND_STREAM, cmd::SET_CONTRAST, value])
    }

    fn set_window(&mut self) -> Result<(), DisplayError> {
        self.write_all(&WINDOW_SEQUENCE)
    }

    fn push_frame(&mut self, frame: &Framebuffer) -> Result<(), DisplayError> {
        // Data-stream control byte plus one page of columns
        let mut buf = [0u8; WIDTH + 1];
        for page in frame.pages() {
            buf[0] = cmd::DATA_STREAM;
            buf[1..].copy_from_slice(page);
            self.write_all(&buf)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calcwatch_hal::I2cError;

    /// Records every transaction; can be told to fail a given one
    struct MockBus {
        writes: Vec<(u8, Vec<u8>)>,
        fail_at: Option<(usize, Result<usize, I2cError>)>,
    }

    impl MockBus {
        fn new() -> Self {
            Self {
                writes: Vec::new(),
                fail_at: None,
            }
        }
    }

    impl I2cBus for MockBus {
        fn write(&mut self, address: u8, data: &[u8]) -> Result<usize, I2cError> {
            let n = self.writes.len();
            self.writes.push((address, data.to_vec()));
            match self.fail_at {
                Some((at, result)) if at == n => result,
                _ => Ok(data.len()),
            }
        }
    }

    #[test]
    fn test_init_is_single_command_write() {
        let mut display = Ssd1306::new(MockBus::new());
        display.init().unwrap();
        let bus = display.release();
        assert_eq!(bus.writes.len(), 1);
        let (addr, bytes) = &bus.writes[0];
        assert_eq!(*addr, 0x3C);
        assert_eq!(bytes[0], 0x00);
        assert_eq!(bytes[1], 0xAE);
        assert_eq!(*bytes.last().unwrap(), 0xAF);
        assert_eq!(&bytes[9..11], &[0xDA, 0x12]);
    }

    #[test]
    fn test_contrast_and_window() {
        let mut display = Ssd1306::new(MockBus::new());
        display.set_contrast(0xFF).unwrap();
        display.set_window().unwrap();
        let bus = display.release();
        assert_eq!(bus.writes[0].1, vec![0x00, 0x81, 0xFF]);
        assert_eq!(bus.writes[1].1, vec![0x00, 0x21, 0x00, 0x7F, 0x22, 0x00, 0x07]);
    }

    #[test]
    fn test_push_frame_pages_in_order() {
        let mut frame = Framebuffer::new();
        // One pixel in page 3, column 5
        frame.set(5, 26, true);

        let mut display = Ssd1306::new(MockBus::new());
        display.push_frame(&frame).unwrap();
        let bus = display.release();

        assert_eq!(bus.writes.len(), 8);
        for (page, (_, bytes)) in bus.writes.iter().enumerate() {
            assert_eq!(bytes.len(), 129);
            assert_eq!(bytes[0], 0x40);
            assert_eq!(&bytes[1..], &frame.as_bytes()[page * 128..(page + 1) * 128]);
        }
    }

    #[test]
    fn test_short_write_stops_push() {
        let mut bus = MockBus::new();
        bus.fail_at = Some((2, Ok(10)));
        let mut display = Ssd1306::new(bus);

        let err = display.push_frame(&Framebuffer::new()).unwrap_err();
        assert_eq!(
            err,
            DisplayError::ShortWrite {
                expected: 129,
                accepted: 10
            }
        );
        assert_eq!(err.code(), 2010);
        assert_eq!(display.release().writes.len(), 3);
    }

    #[test]
    fn test_bus_failure() {
        let mut bus = MockBus::new();
        bus.fail_at = Some((0, Err(I2cError::AddressNack)));
        let mut display = Ssd1306::new(bus);
        assert_eq!(display.init(), Err(DisplayError::Bus(I2cError::AddressNack)));
    }

    #[test]
    fn test_clear_pushes_blank_frame() {
        let mut display = Ssd1306::new(MockBus::new());
        display.clear().unwrap();
        let blank = Framebuffer::new();
        let bus = display.release();
        assert_eq!(bus.writes.len(), 8);
        assert!(bus.writes.iter().all(|(_, b)| &b[1..] == &blank.as_bytes()[..128]));
    }
}
