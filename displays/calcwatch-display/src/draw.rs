//! Drawing primitives
//!
//! All primitives ink pixels through [`Framebuffer::set`]; none of them
//! blank pixels, so drawing order never matters.

use crate::framebuffer::Framebuffer;

/// Fill the half-open block `[x1, x2) × [y1, y2)`
pub fn filled_block(fb: &mut Framebuffer, x1: i32, y1: i32, x2: i32, y2: i32) {
    for x in x1..x2 {
        for y in y1..y2 {
            fb.set(x, y, true);
        }
    }
}

/// Horizontal line of `len` pixels starting at `(x0, y0)`
pub fn hline(fb: &mut Framebuffer, x0: i32, y0: i32, len: i32) {
    for x in x0..x0 + len {
        fb.set(x, y0, true);
    }
}

/// Vertical line of `len` pixels starting at `(x0, y0)`
pub fn vline(fb: &mut Framebuffer, x0: i32, y0: i32, len: i32) {
    for y in y0..y0 + len {
        fb.set(x0, y, true);
    }
}

/// Draw a packed `width × height` bitmap
///
/// Bit 0 is the bottom-right pixel; bits advance leftwards along a row
/// and then up to the row above, so the most significant used bit is the
/// top-left pixel.
pub fn blit(fb: &mut Framebuffer, x0: i32, y0: i32, width: i32, height: i32, bits: u32) {
    let mut bits = bits;
    for i in 0..width * height {
        if bits & 1 != 0 {
            let x = width - 1 - i % width;
            let y = height - 1 - i / width;
            fb.set(x0 + x, y0 + y, true);
        }
        bits >>= 1;
        if bits == 0 {
            break;
        }
    }
}
