//! Monochrome framebuffer
//!
//! 128 columns by 64 rows, stored the way the controller consumes it:
//! eight horizontal pages of 128 bytes, each byte one column of eight
//! rows with the least significant bit on top.

/// Display width in pixels
pub const WIDTH: usize = 128;
/// Display height in pixels
pub const HEIGHT: usize = 64;
/// Number of 8-row pages
pub const PAGES: usize = HEIGHT / 8;
/// Bytes per frame
pub const FRAME_SIZE: usize = WIDTH * PAGES;

/// Whether an inked pixel is a set bit
#[cfg(feature = "white-ink")]
const INK_SETS_BIT: bool = true;
#[cfg(not(feature = "white-ink"))]
const INK_SETS_BIT: bool = false;

/// Byte value of a fully blank page column
const BLANK: u8 = if INK_SETS_BIT { 0x00 } else { 0xFF };

/// Full-frame pixel buffer
#[derive(Clone, PartialEq, Eq)]
pub struct Framebuffer {
    bytes: [u8; FRAME_SIZE],
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Framebuffer {
    /// Create a blank frame
    pub const fn new() -> Self {
        Self {
            bytes: [BLANK; FRAME_SIZE],
        }
    }

    /// Blank every pixel
    pub fn clear(&mut self) {
        self.bytes.fill(BLANK);
    }

    /// Byte offset and bit mask for a pixel, if it is on screen
    fn locate(x: i32, y: i32) -> Option<(usize, u8)> {
        if x < 0 || y < 0 || x >= WIDTH as i32 || y >= HEIGHT as i32 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        Some((x + (y >> 3) * WIDTH, 1 << (y % 8)))
    }

    /// Ink (`on`) or blank a pixel
    ///
    /// Off-screen coordinates are ignored.
    pub fn set(&mut self, x: i32, y: i32, on: bool) {
        if let Some((index, mask)) = Self::locate(x, y) {
            if on == INK_SETS_BIT {
                self.bytes[index] |= mask;
            } else {
                self.bytes[index] &= !mask;
            }
        }
    }

    /// Read a pixel; off-screen reads as blank
    pub fn get(&self, x: i32, y: i32) -> bool {
        match Self::locate(x, y) {
            Some((index, mask)) => (self.bytes[index] & mask != 0) == INK_SETS_BIT,
            None => false,
        }
    }

    /// Flip every pixel in place
    pub fn invert(&mut self) {
        for x in 0..WIDTH as i32 {
            for y in 0..HEIGHT as i32 {
                let on = self.get(x, y);
                self.set(x, y, !on);
            }
        }
    }

    /// The eight transfer pages in ascending order
    pub fn pages(&self) -> impl Iterator<Item = &[u8]> {
        self.bytes.chunks_exact(WIDTH)
    }

    /// Raw frame bytes
    pub fn as_bytes(&self) -> &[u8; FRAME_SIZE] {
        &self.bytes
    }

    /// Check whether no pixel is inked
    pub fn is_blank(&self) -> bool {
        self.bytes.iter().all(|&b| b == BLANK)
    }
}

impl core::fmt::Debug for Framebuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let inked = (0..WIDTH as i32)
            .flat_map(|x| (0..HEIGHT as i32).map(move |y| (x, y)))
            .filter(|&(x, y)| self.get(x, y))
            .count();
        f.debug_struct("Framebuffer").field("inked", &inked).finish()
    }
}
