//! Status indicators around the header
//!
//! Small packed bitmaps and text tags. `am1`/`pm1` mark the main time,
//! `am2`/`pm2` the secondary one.

use calcwatch_display::draw::blit;
use calcwatch_display::{draw_text, Framebuffer};

pub fn am1(fb: &mut Framebuffer) {
    draw_text(fb, 1, 17, 1, "A");
}

pub fn pm1(fb: &mut Framebuffer) {
    draw_text(fb, 7, 17, 1, "P");
}

pub fn am2(fb: &mut Framebuffer) {
    blit(fb, 1, 50, 4, 4, 0x69F9);
}

pub fn pm2(fb: &mut Framebuffer) {
    blit(fb, 5, 50, 4, 4, 0xE9E8);
}

/// AM or PM marker for the main time, 12-hour display only
pub fn meridiem1(fb: &mut Framebuffer, use_24h: bool, hours: u8) {
    if use_24h {
        return;
    }
    if hours < 12 {
        am1(fb);
    } else {
        pm1(fb);
    }
}

/// AM or PM marker for the secondary time, 12-hour display only
pub fn meridiem2(fb: &mut Framebuffer, use_24h: bool, hours: u8) {
    if use_24h {
        return;
    }
    if hours < 12 {
        am2(fb);
    } else {
        pm2(fb);
    }
}

pub fn split(fb: &mut Framebuffer) {
    draw_text(fb, 1, 0, 1, "SPL");
}

pub fn dst(fb: &mut Framebuffer) {
    draw_text(fb, 1, 7, 1, "DST");
}

/// Light
pub fn lt(fb: &mut Framebuffer) {
    blit(fb, 72, 0, 6, 4, 0x009E_28B2);
}

/// Three-second countdown marker
pub fn three_sec(fb: &mut Framebuffer) {
    blit(fb, 92, 0, 10, 3, 0x36D5_2B6D);
    blit(fb, 92, 0, 10, 1, 0x36D5_2B6D);
    blit(fb, 92, 1, 10, 3, 0x36D5_2B6D);
}

pub fn snooze(fb: &mut Framebuffer) {
    draw_text(fb, 63, 3, 1, "SNZ");
}

pub fn mute(fb: &mut Framebuffer) {
    draw_text(fb, 85, 3, 1, "MUTE");
}

/// Hourly time signal
pub fn sig(fb: &mut Framebuffer) {
    draw_text(fb, 111, 3, 1, "SIG");
}

/// Alarm slot 1-5
pub fn alarm(fb: &mut Framebuffer, n: u8) {
    let x = 62 + (i32::from(n) - 1) * 13;
    blit(fb, x, 11, 7, 3, 0x0009_6AD5);
}
