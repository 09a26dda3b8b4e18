//! Dot-matrix font
//!
//! Glyphs are 5 columns by 7 rows. Each glyph stores its top row in a
//! 5-bit value and the six rows below it in a 30-bit body:
//!
//! ```text
//!            col 0 ... col 4
//! top        bit 4 ... bit 0
//! body row 1 bit 29 .. bit 25
//! body row 2 bit 24 .. bit 20
//!   ...
//! body row 6 bit 4 ... bit 0
//! ```
//!
//! Text is mapped to glyph indices through [`GLYPH_MAP`]. Low control
//! codes select pictographs (see [`icon`]).

use crate::framebuffer::Framebuffer;

/// Glyph width in font pixels
pub const CHAR_WIDTH: i32 = 5;
/// Glyph height in font pixels
pub const CHAR_HEIGHT: i32 = 7;
/// Gap between glyphs in screen pixels
pub const CHAR_SPACING: i32 = 1;

/// Glyph drawn for characters without a mapping
pub const FALLBACK_GLYPH: u8 = 128;

/// Control characters that render as pictographs
pub mod icon {
    pub const HOURGLASS: char = '\u{01}';
    pub const LEFT_ARROW: char = '\u{02}';
    pub const RIGHT_ARROW: char = '\u{03}';
    pub const BELL: char = '\u{04}';
    pub const DUAL_TIME: char = '\u{05}';
    pub const CALCULATOR_1: char = '\u{06}';
    pub const CALCULATOR_2: char = '\u{07}';
    pub const CALCULATOR_3: char = '\u{08}';
    pub const DIVIDE: char = '\u{09}';
    pub const STOPWATCH: char = '\u{0A}';
    pub const A_ACUTE: char = '\u{0B}';
    pub const A_GRAVE: char = '\u{0C}';
    pub const A_CIRCUMFLEX: char = '\u{0D}';
}

/// One font glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    /// Top row, bit 4 = leftmost column
    pub top: u8,
    /// Rows 1..=6, bit 29 = row 1 leftmost column
    pub body: u32,
}

impl Glyph {
    const fn new(top: u8, body: u32) -> Self {
        Self { top, body }
    }

    /// Whether the font pixel at `(col, row)` is lit
    pub fn pixel(&self, col: i32, row: i32) -> bool {
        if !(0..CHAR_WIDTH).contains(&col) || !(0..CHAR_HEIGHT).contains(&row) {
            return false;
        }
        let shift = 4 - col;
        if row == 0 {
            self.top >> shift & 1 != 0
        } else {
            self.body >> ((6 - row) * 5 + shift) & 1 != 0
        }
    }
}

/// Font table, indexed by glyph number
#[rustfmt::skip]
pub static GLYPHS: [Glyph; 133] = [
    Glyph::new(0x00, 0x00000000), //   0 NUL
    Glyph::new(0x00, 0x00000000), //   1 SPACE
    Glyph::new(0x00, 0x00E8FE31), //   2 A
    Glyph::new(0x02, 0x08E8FE31), //   3 A1
    Glyph::new(0x08, 0x08E8FE31), //   4 A2
    Glyph::new(0x0A, 0x08E8FE31), //   5 A3
    Glyph::new(0x04, 0x14E8FE31), //   6 A4
    Glyph::new(0x0A, 0x00E8FE31), //   7 A5
    Glyph::new(0x09, 0x2CE8FE31), //   8 A6
    Glyph::new(0x0E, 0x23F8C443), //   9 A7
    Glyph::new(0x00, 0x01E8FA3E), //  10 B
    Glyph::new(0x00, 0x00F8420F), //  11 C
    Glyph::new(0x0F, 0x21083C4F), //  12 C1
    Glyph::new(0x02, 0x08F8420F), //  13 C2
    Glyph::new(0x00, 0x01E8C63E), //  14 D
    Glyph::new(0x00, 0x01F87A1F), //  15 E
    Glyph::new(0x02, 0x09F87A1F), //  16 E1
    Glyph::new(0x08, 0x09F87A1F), //  17 E2
    Glyph::new(0x04, 0x15F87A1F), //  18 E3
    Glyph::new(0x0A, 0x01F87A1F), //  19 E4
    Glyph::new(0x1F, 0x21E87C43), //  20 E5
    Glyph::new(0x00, 0x01F87A10), //  21 F
    Glyph::new(0x00, 0x00F85E2F), //  22 G
    Glyph::new(0x0A, 0x08F85E2F), //  23 G1
    Glyph::new(0x00, 0x0118FE31), //  24 H
    Glyph::new(0x00, 0x00E2108E), //  25 I
    Glyph::new(0x02, 0x08E2108E), //  26 I1
    Glyph::new(0x08, 0x08E2108E), //  27 I2
    Glyph::new(0x04, 0x14E2108E), //  28 I3
    Glyph::new(0x0A, 0x00E2108E), //  29 I4
    Glyph::new(0x04, 0x00E2108E), //  30 I5
    Glyph::new(0x00, 0x00710A4C), //  31 J
    Glyph::new(0x00, 0x01197251), //  32 K
    Glyph::new(0x00, 0x0108421F), //  33 L
    Glyph::new(0x00, 0x0086610F), //  34 L1
    Glyph::new(0x00, 0x011DD631), //  35 M
    Glyph::new(0x00, 0x011CD671), //  36 N
    Glyph::new(0x02, 0x091CD671), //  37 N1
    Glyph::new(0x09, 0x0D1CD671), //  38 N2
    Glyph::new(0x00, 0x00E8C62E), //  39 O
    Glyph::new(0x02, 0x08E8C62E), //  40 O1
    Glyph::new(0x08, 0x08E8C62E), //  41 O2
    Glyph::new(0x04, 0x14E8C62E), //  42 O3
    Glyph::new(0x0A, 0x00E8C62E), //  43 O4
    Glyph::new(0x09, 0x2CE8C62E), //  44 O5
    Glyph::new(0x00, 0x00FA5E8F), //  45 OE
    Glyph::new(0x00, 0x01E8FA10), //  46 P
    Glyph::new(0x00, 0x00E8D64D), //  47 Q
    Glyph::new(0x00, 0x01E8FA51), //  48 R
    Glyph::new(0x00, 0x00F8383E), //  49 S
    Glyph::new(0x02, 0x08F8383E), //  50 S1
    Glyph::new(0x0F, 0x20E0F84F), //  51 S2
    Glyph::new(0x00, 0x01F21084), //  52 T
    Glyph::new(0x1F, 0x0842104F), //  53 T1
    Glyph::new(0x00, 0x0118C62E), //  54 U
    Glyph::new(0x02, 0x0918C62E), //  55 U1
    Glyph::new(0x08, 0x0918C62E), //  56 U2
    Glyph::new(0x04, 0x1518C62E), //  57 U3
    Glyph::new(0x0A, 0x0118C62E), //  58 U4
    Glyph::new(0x00, 0x0118C544), //  59 V
    Glyph::new(0x00, 0x011AD6AA), //  60 W
    Glyph::new(0x00, 0x01151151), //  61 X
    Glyph::new(0x00, 0x01151084), //  62 Y
    Glyph::new(0x00, 0x01F1111F), //  63 Z
    Glyph::new(0x02, 0x09F1111F), //  64 Z1
    Glyph::new(0x04, 0x01F1111F), //  65 Z2
    Glyph::new(0x00, 0x00FA7E97), //  66 AE
    Glyph::new(0x00, 0x00F9D73E), //  67 O7
    Glyph::new(0x04, 0x144747F1), //  68 A8
    Glyph::new(0x0A, 0x00E8FE31), //  69 A9
    Glyph::new(0x0A, 0x00E8C62E), //  70 O8
    Glyph::new(0x00, 0x01F87A3E), //  71 SYM1
    Glyph::new(0x00, 0x01E8FA3E), //  72 SYM2:B
    Glyph::new(0x00, 0x01F4A108), //  73 SYM3
    Glyph::new(0x00, 0x00E52BF1), //  74 SYM4
    Glyph::new(0x00, 0x01F87A1F), //  75 SYM5:E
    Glyph::new(0x0A, 0x01F87A1F), //  76 SYM6:E
    Glyph::new(0x00, 0x015ABAB5), //  77 SYM7
    Glyph::new(0x00, 0x00E8983E), //  78 SYM8
    Glyph::new(0x00, 0x0119D731), //  79 SYM9:N
    Glyph::new(0x0A, 0x0919D731), //  80 SYM10:N
    Glyph::new(0x00, 0x013A6293), //  81 SYM11
    Glyph::new(0x00, 0x007294B9), //  82 SYM12
    Glyph::new(0x00, 0x011DD631), //  83 SYM13:M
    Glyph::new(0x00, 0x0118FE31), //  84 SYM14:H
    Glyph::new(0x00, 0x00E8C62E), //  85 SYM15:O
    Glyph::new(0x00, 0x01F8C631), //  86 SYM16
    Glyph::new(0x00, 0x01E8FA10), //  87 SYM17:P
    Glyph::new(0x00, 0x00F8420F), //  88 SYM18:C
    Glyph::new(0x00, 0x01FA9084), //  89 SYM19:T
    Glyph::new(0x00, 0x01151098), //  90 SYM20:y
    Glyph::new(0x00, 0x004755C4), //  91 SYM21
    Glyph::new(0x00, 0x01151151), //  92 SYM22:X
    Glyph::new(0x00, 0x01294BE1), //  93 SYM23
    Glyph::new(0x00, 0x0118BC21), //  94 SYM24
    Glyph::new(0x00, 0x015AD6BF), //  95 SYM25:W
    Glyph::new(0x00, 0x015AD7E1), //  96 SYM26:W
    Glyph::new(0x00, 0x0184392E), //  97 SYM27
    Glyph::new(0x00, 0x0118E6B9), //  98 SYM28
    Glyph::new(0x00, 0x01087A3E), //  99 SYM29
    Glyph::new(0x00, 0x00E89E2E), // 100 SYM30
    Glyph::new(0x00, 0x01297652), // 101 SYM31
    Glyph::new(0x00, 0x00F8BD31), // 102 SYM32:R
    Glyph::new(0x00, 0x01E0B6BE), // 103 @
    Glyph::new(0x00, 0x00421004), // 104 !
    Glyph::new(0x00, 0x00C91004), // 105 ?
    Glyph::new(0x00, 0x00308800), // 106 ,
    Glyph::new(0x00, 0x0000018C), // 107 .
    Glyph::new(0x00, 0x00020080), // 108 :
    Glyph::new(0x00, 0x00111110), // 109 /
    Glyph::new(0x00, 0x00427C84), // 110 +
    Glyph::new(0x00, 0x00007C00), // 111 -
    Glyph::new(0x00, 0x0064A526), // 112 0
    Glyph::new(0x00, 0x00461084), // 113 1
    Glyph::new(0x00, 0x01E0BA1F), // 114 2
    Glyph::new(0x00, 0x01E0B83F), // 115 3
    Glyph::new(0x00, 0x00654BE2), // 116 4
    Glyph::new(0x00, 0x01F8783E), // 117 5
    Glyph::new(0x00, 0x00F87A2E), // 118 6
    Glyph::new(0x00, 0x01F88884), // 119 7
    Glyph::new(0x00, 0x00E8BA2E), // 120 8
    Glyph::new(0x00, 0x00E8BC3E), // 121 9
    Glyph::new(0x00, 0x0071D71C), // 122 exchange
    Glyph::new(0x00, 0x01F8BB7F), // 123 hour glass
    Glyph::new(0x00, 0x00119C61), // 124 left arrow
    Glyph::new(0x00, 0x010C7310), // 125 right arrow
    Glyph::new(0x00, 0x00473BE4), // 126 bell
    Glyph::new(0x00, 0x00EADE2E), // 127 dual time
    Glyph::new(0x00, 0x01FFC63F), // 128 calculator-1
    Glyph::new(0x00, 0x00C8C62D), // 129 calculator-2
    Glyph::new(0x00, 0x0125694B), // 130 calculator-3
    Glyph::new(0x00, 0x00407C04), // 131 divide
    Glyph::new(0x00, 0x00877541), // 132 stop watch
];

/// ASCII to glyph index lookup
pub struct GlyphMap([u8; 256]);

/// Glyph indices of `A`..=`Z`
const LETTERS: [u8; 26] = [
    2, 10, 11, 14, 15, 21, // A B C D E F
    22, 24, 25, 31, 32, 33, // G H I J K L
    35, 36, 39, 46, 47, 48, // M N O P Q R
    49, 52, 54, 59, 60, 61, // S T U V W X
    62, 63, // Y Z
];

impl GlyphMap {
    /// Build the lookup table
    pub const fn build() -> Self {
        let mut map = [0u8; 256];

        let mut i = 0;
        while i < 10 {
            map[b'0' as usize + i] = 112 + i as u8;
            i += 1;
        }

        let mut i = 0;
        while i < 26 {
            map[b'A' as usize + i] = LETTERS[i];
            map[b'a' as usize + i] = LETTERS[i];
            i += 1;
        }

        map[b' ' as usize] = 1;

        map[b'@' as usize] = 103;
        map[b'!' as usize] = 104;
        map[b'?' as usize] = 105;
        map[b',' as usize] = 106;
        map[b'.' as usize] = 107;
        map[b':' as usize] = 108;
        map[b'/' as usize] = 109;
        map[b'+' as usize] = 110;
        map[b'-' as usize] = 111;

        // Pictographs
        map[0x01] = 123; // hour glass
        map[0x02] = 124; // left arrow
        map[0x03] = 125; // right arrow
        map[0x04] = 126; // bell
        map[0x05] = 127; // dual time
        map[0x06] = 128; // calculator 1
        map[0x07] = 129; // calculator 2
        map[0x08] = 130; // calculator 3
        map[0x09] = 131; // divide
        map[0x0A] = 132; // stop watch

        // Accented A variants
        map[0x0B] = 3;
        map[0x0C] = 4;
        map[0x0D] = 5;
        map[0x0E] = 6;
        map[0x0F] = 7;
        map[0x10] = 8;
        map[0x11] = 9;

        Self(map)
    }

    /// Glyph index for a character
    pub fn lookup(&self, ch: char) -> u8 {
        let index = match u8::try_from(ch) {
            Ok(byte) => self.0[byte as usize],
            Err(_) => 0,
        };
        if index == 0 {
            FALLBACK_GLYPH
        } else {
            index
        }
    }
}

/// The lookup table, built once at compile time
pub static GLYPH_MAP: GlyphMap = GlyphMap::build();

/// Horizontal advance per glyph at magnification `mag`
pub const fn advance(mag: i32) -> i32 {
    CHAR_WIDTH * mag + CHAR_SPACING
}

/// Draw glyph number `index` with its top-left corner at `(x0, y0)`
///
/// Each lit font pixel becomes a `mag × mag` square. Indices past the
/// end of the table draw nothing.
pub fn draw_glyph(fb: &mut Framebuffer, x0: i32, y0: i32, mag: i32, index: u8) {
    let Some(glyph) = GLYPHS.get(index as usize) else {
        return;
    };
    for row in 0..CHAR_HEIGHT {
        for col in 0..CHAR_WIDTH {
            if !glyph.pixel(col, row) {
                continue;
            }
            for mx in 0..mag {
                for my in 0..mag {
                    fb.set(x0 + col * mag + mx, y0 + row * mag + my, true);
                }
            }
        }
    }
}

/// Draw text left to right through the ASCII glyph map
pub fn draw_text(fb: &mut Framebuffer, x0: i32, y0: i32, mag: i32, text: &str) {
    let mut x = x0;
    for ch in text.chars() {
        draw_glyph(fb, x, y0, mag, GLYPH_MAP.lookup(ch));
        x += advance(mag);
    }
}

/// Draw a run of raw glyph indices left to right
pub fn draw_glyph_run(fb: &mut Framebuffer, x0: i32, y0: i32, mag: i32, glyphs: &[u8]) {
    let mut x = x0;
    for &index in glyphs {
        draw_glyph(fb, x, y0, mag, index);
        x += advance(mag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_map_is_case_insensitive() {
        for (upper, lower) in ('A'..='Z').zip('a'..='z') {
            assert_eq!(GLYPH_MAP.lookup(upper), GLYPH_MAP.lookup(lower));
        }
        assert_eq!(GLYPH_MAP.lookup('A'), 2);
        assert_eq!(GLYPH_MAP.lookup('z'), 63);
    }

    #[test]
    fn test_ascii_map_digits_and_symbols() {
        assert_eq!(GLYPH_MAP.lookup('0'), 112);
        assert_eq!(GLYPH_MAP.lookup('9'), 121);
        assert_eq!(GLYPH_MAP.lookup(' '), 1);
        assert_eq!(GLYPH_MAP.lookup('-'), 111);
        assert_eq!(GLYPH_MAP.lookup(icon::HOURGLASS), 123);
        assert_eq!(GLYPH_MAP.lookup(icon::STOPWATCH), 132);
    }

    #[test]
    fn test_unmapped_uses_fallback() {
        assert_eq!(GLYPH_MAP.lookup('%'), FALLBACK_GLYPH);
        assert_eq!(GLYPH_MAP.lookup('*'), FALLBACK_GLYPH);
        assert_eq!(GLYPH_MAP.lookup('é'), FALLBACK_GLYPH);
    }

    #[test]
    fn test_glyph_pixels() {
        // '1': 00100 01100 00100 00100 00100 in rows 2..=6
        let one = GLYPHS[113];
        assert!(!one.pixel(2, 1));
        assert!(one.pixel(2, 2));
        assert!(one.pixel(1, 3));
        assert!(one.pixel(2, 6));
        assert!(!one.pixel(0, 6));
        // Top row of E5 is fully lit
        assert!((0..5).all(|col| GLYPHS[20].pixel(col, 0)));
    }

    #[test]
    fn test_draw_glyph_magnified() {
        let mut fb = Framebuffer::new();
        draw_glyph(&mut fb, 10, 0, 2, 113);
        // Font pixel (2, 2) covers screen (14..16, 4..6)
        assert!(fb.get(14, 4));
        assert!(fb.get(15, 5));
        assert!(!fb.get(16, 4));
        assert!(!fb.get(14, 2));
    }

    #[test]
    fn test_draw_text_advances() {
        let mut fb = Framebuffer::new();
        draw_text(&mut fb, 0, 0, 1, "11");
        assert!(fb.get(2, 2));
        assert!(fb.get(2 + advance(1), 2));
    }

    #[test]
    fn test_out_of_table_glyph_is_blank() {
        let mut fb = Framebuffer::new();
        draw_glyph_run(&mut fb, 0, 0, 2, &[133, 140, 200]);
        assert!(fb.is_blank());
    }
}
