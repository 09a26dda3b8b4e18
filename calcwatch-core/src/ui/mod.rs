//! Screen rendering
//!
//! Every frame is drawn from scratch: blank, chrome, then the screen of
//! the active mode. Home and dual time can hand the whole screen over to
//! another mode's screen while an overlay key is held.
//!
//! ```text
//!  x=0            x=60                     x=127
//!  SPL  header    | snooze mute sig              y=0..4
//!  DST            |----------------------------  y=4
//!                 | alarm slots 1-5              y=11
//!  -------------------------------------------- y=15
//!  A P
//!      main seven-segment line                   y=20
//!
//!  a/p secondary seven-segment line              y=52
//! ```

pub mod indicators;
pub mod screens;

use calcwatch_display::draw::{hline, vline};
use calcwatch_display::{draw_seg_str, draw_text, Framebuffer, SegmentStyle};

use crate::device::TimeSnapshot;
use crate::state::CasioState;

/// Header text origin and magnification
const HEADER: (i32, i32, i32) = (25, 0, 2);
/// Main digits origin
const MAIN_ORIGIN: (i32, i32) = (10, 20);
const MAIN_STYLE: SegmentStyle = SegmentStyle::new(6, 10, 2);
/// Secondary digits origin
const SECONDARY_ORIGIN: (i32, i32) = (15, 52);
const SECONDARY_STYLE: SegmentStyle = SegmentStyle::new(4, 4, 1);

/// Render the whole screen for the current state
pub fn render(fb: &mut Framebuffer, watch: &CasioState, now: TimeSnapshot) {
    fb.clear();
    draw_chrome(fb);
    screens::draw_mode(fb, watch, now);
}

/// Fixed separator lines
fn draw_chrome(fb: &mut Framebuffer) {
    hline(fb, 0, 15, 128);
    hline(fb, 60, 4, 128 - 60);
    hline(fb, 60, 10, 128 - 60);
    vline(fb, 60, 0, 15);
}

/// Header text above the separator
pub(crate) fn header(fb: &mut Framebuffer, text: &str) {
    let (x, y, mag) = HEADER;
    draw_text(fb, x, y, mag, text);
}

/// Large seven-segment line
pub(crate) fn main_digits(fb: &mut Framebuffer, text: &str) {
    let (x, y) = MAIN_ORIGIN;
    draw_seg_str(fb, x, y, MAIN_STYLE, text);
}

/// Small seven-segment line at the bottom
pub(crate) fn secondary_digits(fb: &mut Framebuffer, text: &str) {
    let (x, y) = SECONDARY_ORIGIN;
    draw_seg_str(fb, x, y, SECONDARY_STYLE, text);
}
