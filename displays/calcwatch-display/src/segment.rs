//! Seven-segment renderer
//!
//! Digits are drawn from filled rectangles. A [`SegmentStyle`] gives the
//! segment length (`width`, `height`) and stroke `thick`ness:
//!
//! ```text
//!   x  x+t      x+t+w  x+2t+w
//!      +--------+              y
//!      |  top   |
//!   +--+--------+--+           y+t
//!   |UL|        |UR|
//!   +--+--------+--+           y+t+h
//!      |  mid   |
//!   +--+--------+--+           y+2t+h
//!   |LL|        |LR|
//!   +--+--------+--+           y+2t+2h
//!      | bottom |   [dp]
//!      +--------+              y+3t+2h
//! ```
//!
//! Colon dots sit centred in the upper and lower halves.

use core::fmt::Write;

use crate::draw::filled_block;
use crate::framebuffer::Framebuffer;

/// Gap between a digit and its decimal point
const DP_SPACING: i32 = 2;
/// Gap between adjacent digits
const DIGIT_SPACING: i32 = 3;

/// Segment bit set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Segments(pub u16);

impl Segments {
    pub const NONE: Self = Self(0);
    pub const TOP: Self = Self(0x01);
    pub const UPPER_LEFT: Self = Self(0x02);
    pub const UPPER_RIGHT: Self = Self(0x04);
    pub const MIDDLE: Self = Self(0x08);
    pub const LOWER_LEFT: Self = Self(0x10);
    pub const LOWER_RIGHT: Self = Self(0x20);
    pub const BOTTOM: Self = Self(0x40);
    pub const DECIMAL_POINT: Self = Self(0x80);
    pub const TOP_DOT: Self = Self(0x100);
    pub const BOTTOM_DOT: Self = Self(0x200);

    const fn or(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Union of segment sets
    pub const fn union(sets: &[Self]) -> Self {
        let mut acc = Self::NONE;
        let mut i = 0;
        while i < sets.len() {
            acc = acc.or(sets[i]);
            i += 1;
        }
        acc
    }

    /// Whether every segment of `other` is lit in `self`
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Add the decimal point
    pub const fn with_point(self) -> Self {
        self.or(Self::DECIMAL_POINT)
    }

    /// Segments for a character; anything unknown is blank
    #[rustfmt::skip]
    pub const fn for_char(ch: char) -> Self {
        use Segments as S;
        match ch {
            '0' => S::union(&[S::TOP, S::UPPER_LEFT, S::UPPER_RIGHT, S::LOWER_LEFT, S::LOWER_RIGHT, S::BOTTOM]),
            '1' => S::union(&[S::UPPER_RIGHT, S::LOWER_RIGHT]),
            '2' => S::union(&[S::TOP, S::UPPER_RIGHT, S::MIDDLE, S::LOWER_LEFT, S::BOTTOM]),
            '3' => S::union(&[S::TOP, S::UPPER_RIGHT, S::MIDDLE, S::LOWER_RIGHT, S::BOTTOM]),
            '4' => S::union(&[S::UPPER_LEFT, S::MIDDLE, S::UPPER_RIGHT, S::LOWER_RIGHT]),
            '5' => S::union(&[S::TOP, S::UPPER_LEFT, S::MIDDLE, S::LOWER_RIGHT, S::BOTTOM]),
            '6' => S::union(&[S::TOP, S::UPPER_LEFT, S::MIDDLE, S::LOWER_LEFT, S::LOWER_RIGHT, S::BOTTOM]),
            // Casio style seven with the upper-left stroke
            '7' => S::union(&[S::TOP, S::UPPER_LEFT, S::UPPER_RIGHT, S::LOWER_RIGHT]),
            '8' => S::union(&[
                S::TOP, S::UPPER_LEFT, S::UPPER_RIGHT, S::MIDDLE,
                S::LOWER_LEFT, S::LOWER_RIGHT, S::BOTTOM,
            ]),
            '9' | 'g' => S::union(&[S::TOP, S::UPPER_LEFT, S::UPPER_RIGHT, S::MIDDLE, S::LOWER_RIGHT, S::BOTTOM]),
            'A' | 'a' => S::union(&[S::TOP, S::UPPER_LEFT, S::UPPER_RIGHT, S::MIDDLE, S::LOWER_LEFT, S::LOWER_RIGHT]),
            'B' | 'b' => S::union(&[S::UPPER_LEFT, S::LOWER_LEFT, S::BOTTOM, S::LOWER_RIGHT, S::MIDDLE]),
            'C' | 'c' => S::union(&[S::TOP, S::UPPER_LEFT, S::LOWER_LEFT, S::BOTTOM]),
            'D' | 'd' => S::union(&[S::UPPER_RIGHT, S::LOWER_RIGHT, S::MIDDLE, S::LOWER_LEFT, S::BOTTOM]),
            'E' | 'e' => S::union(&[S::TOP, S::UPPER_LEFT, S::MIDDLE, S::LOWER_LEFT, S::BOTTOM]),
            'F' | 'f' => S::union(&[S::TOP, S::UPPER_LEFT, S::MIDDLE, S::LOWER_LEFT]),
            'H' => S::union(&[S::UPPER_LEFT, S::UPPER_RIGHT, S::MIDDLE, S::LOWER_LEFT, S::LOWER_RIGHT]),
            'h' => S::union(&[S::UPPER_LEFT, S::MIDDLE, S::LOWER_LEFT, S::LOWER_RIGHT]),
            'i' => S::LOWER_RIGHT,
            'J' => S::union(&[S::UPPER_RIGHT, S::LOWER_RIGHT, S::BOTTOM, S::LOWER_LEFT]),
            'L' => S::union(&[S::UPPER_LEFT, S::LOWER_LEFT, S::BOTTOM]),
            'n' => S::union(&[S::MIDDLE, S::LOWER_LEFT, S::LOWER_RIGHT]),
            'o' => S::union(&[S::MIDDLE, S::LOWER_LEFT, S::LOWER_RIGHT, S::BOTTOM]),
            'P' => S::union(&[S::TOP, S::UPPER_LEFT, S::UPPER_RIGHT, S::MIDDLE, S::LOWER_LEFT]),
            'U' => S::union(&[S::UPPER_LEFT, S::UPPER_RIGHT, S::LOWER_LEFT, S::LOWER_RIGHT, S::BOTTOM]),
            '-' => S::MIDDLE,
            // Underscore lights the upper-right stroke on the production glyph
            '_' => S::UPPER_RIGHT,
            ':' => S::union(&[S::TOP_DOT, S::BOTTOM_DOT]),
            '.' => S::DECIMAL_POINT,
            _ => S::NONE,
        }
    }
}

/// Size of one seven-segment digit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SegmentStyle {
    /// Length of horizontal segments
    pub width: i32,
    /// Length of vertical segments
    pub height: i32,
    /// Stroke thickness
    pub thick: i32,
}

impl SegmentStyle {
    pub const fn new(width: i32, height: i32, thick: i32) -> Self {
        Self { width, height, thick }
    }

    /// Horizontal distance from one digit to the next
    pub const fn advance(&self) -> i32 {
        self.width + 2 * self.thick + DIGIT_SPACING
    }
}

/// Draw a segment set with its top-left corner at `(x, y)`
pub fn draw_segments(fb: &mut Framebuffer, x: i32, y: i32, style: SegmentStyle, segs: Segments) {
    let SegmentStyle {
        width: w,
        height: h,
        thick: t,
    } = style;

    // (segment, x, y, width, height)
    let strokes = [
        (Segments::TOP, x + t, y, w, t),
        (Segments::UPPER_LEFT, x, y + t, t, h),
        (Segments::UPPER_RIGHT, x + t + w, y + t, t, h),
        (Segments::MIDDLE, x + t, y + t + h, w, t),
        (Segments::LOWER_LEFT, x, y + 2 * t + h, t, h),
        (Segments::LOWER_RIGHT, x + t + w, y + 2 * t + h, t, h),
        (Segments::BOTTOM, x + t, y + 2 * t + 2 * h, w, t),
        (Segments::DECIMAL_POINT, x + 2 * t + w + DP_SPACING, y + 2 * t + 2 * h, t, t),
        (Segments::TOP_DOT, x + t + w / 2 - t / 2, y + t + h / 2 - t / 2, t, t),
        (Segments::BOTTOM_DOT, x + t + w / 2 - t / 2, y + 2 * t + h + h / 2 - t / 2, t, t),
    ];

    for (seg, sx, sy, sw, sh) in strokes {
        if segs.contains(seg) {
            filled_block(fb, sx, sy, sx + sw, sy + sh);
        }
    }
}

/// Draw a string of seven-segment digits
///
/// A `.` does not take a cell of its own: it lights the decimal point of
/// the digit before it.
pub fn draw_seg_str(fb: &mut Framebuffer, x: i32, y: i32, style: SegmentStyle, text: &str) {
    let mut x = x;
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '.' {
            continue;
        }
        let mut segs = Segments::for_char(ch);
        if chars.peek() == Some(&'.') {
            segs = segs.with_point();
        }
        draw_segments(fb, x, y, style, segs);
        x += style.advance();
    }
}

/// Draw an integer right-aligned in three digit cells
pub fn draw_number(fb: &mut Framebuffer, x: i32, y: i32, style: SegmentStyle, value: i32) {
    let mut text: heapless::String<12> = heapless::String::new();
    // 12 bytes hold any i32
    let _ = write!(text, "{value:3}");
    draw_seg_str(fb, x, y, style, &text);
}
