//! Minimal embedded 8x8 bitmap font covering the lowercase latin letters the
//! lexical filter can emit. Each glyph is eight rows, most significant bit on
//! the left; rows 0-1 carry ascenders, row 6 is the baseline, row 7 carries
//! descenders.

pub(crate) const GLYPH_SIZE: u32 = 8;

type Glyph = [u8; 8];

pub(crate) fn glyph(c: char) -> Option<&'static Glyph> {
    if c.is_ascii_lowercase() {
        Some(&GLYPHS[(c as usize) - ('a' as usize)])
    } else {
        None
    }
}

#[rustfmt::skip]
static GLYPHS: [Glyph; 26] = [
    // a
    [0b00000000, 0b00000000, 0b01100000, 0b00010000, 0b01110000, 0b10010000, 0b01110000, 0b00000000],
    // b
    [0b10000000, 0b10000000, 0b11100000, 0b10010000, 0b10010000, 0b10010000, 0b11100000, 0b00000000],
    // c
    [0b00000000, 0b00000000, 0b01110000, 0b10000000, 0b10000000, 0b10000000, 0b01110000, 0b00000000],
    // d
    [0b00010000, 0b00010000, 0b01110000, 0b10010000, 0b10010000, 0b10010000, 0b01110000, 0b00000000],
    // e
    [0b00000000, 0b00000000, 0b01100000, 0b10010000, 0b11110000, 0b10000000, 0b01110000, 0b00000000],
    // f
    [0b00110000, 0b01000000, 0b11100000, 0b01000000, 0b01000000, 0b01000000, 0b01000000, 0b00000000],
    // g
    [0b00000000, 0b00000000, 0b01110000, 0b10010000, 0b10010000, 0b01110000, 0b00010000, 0b01100000],
    // h
    [0b10000000, 0b10000000, 0b11100000, 0b10010000, 0b10010000, 0b10010000, 0b10010000, 0b00000000],
    // i
    [0b01000000, 0b00000000, 0b11000000, 0b01000000, 0b01000000, 0b01000000, 0b11100000, 0b00000000],
    // j
    [0b00100000, 0b00000000, 0b00100000, 0b00100000, 0b00100000, 0b00100000, 0b00100000, 0b11000000],
    // k
    [0b10000000, 0b10000000, 0b10010000, 0b10100000, 0b11000000, 0b10100000, 0b10010000, 0b00000000],
    // l
    [0b11000000, 0b01000000, 0b01000000, 0b01000000, 0b01000000, 0b01000000, 0b11100000, 0b00000000],
    // m
    [0b00000000, 0b00000000, 0b11110000, 0b10101000, 0b10101000, 0b10101000, 0b10101000, 0b00000000],
    // n
    [0b00000000, 0b00000000, 0b11100000, 0b10010000, 0b10010000, 0b10010000, 0b10010000, 0b00000000],
    // o
    [0b00000000, 0b00000000, 0b01100000, 0b10010000, 0b10010000, 0b10010000, 0b01100000, 0b00000000],
    // p
    [0b00000000, 0b00000000, 0b11100000, 0b10010000, 0b10010000, 0b11100000, 0b10000000, 0b10000000],
    // q
    [0b00000000, 0b00000000, 0b01110000, 0b10010000, 0b10010000, 0b01110000, 0b00010000, 0b00011000],
    // r
    [0b00000000, 0b00000000, 0b10110000, 0b11000000, 0b10000000, 0b10000000, 0b10000000, 0b00000000],
    // s
    [0b00000000, 0b00000000, 0b01110000, 0b10000000, 0b01100000, 0b00010000, 0b11100000, 0b00000000],
    // t
    [0b01000000, 0b01000000, 0b11100000, 0b01000000, 0b01000000, 0b01000000, 0b00110000, 0b00000000],
    // u
    [0b00000000, 0b00000000, 0b10010000, 0b10010000, 0b10010000, 0b10010000, 0b01100000, 0b00000000],
    // v
    [0b00000000, 0b00000000, 0b10001000, 0b10001000, 0b01010000, 0b01010000, 0b00100000, 0b00000000],
    // w
    [0b00000000, 0b00000000, 0b10101000, 0b10101000, 0b10101000, 0b10101000, 0b01010000, 0b00000000],
    // x
    [0b00000000, 0b00000000, 0b10010000, 0b10010000, 0b01100000, 0b10010000, 0b10010000, 0b00000000],
    // y
    [0b00000000, 0b00000000, 0b10010000, 0b10010000, 0b10010000, 0b01110000, 0b00010000, 0b01100000],
    // z
    [0b00000000, 0b00000000, 0b11110000, 0b00100000, 0b01000000, 0b10000000, 0b11110000, 0b00000000],
];

#[cfg(test)]
mod tests {
    use super::glyph;

    #[test]
    fn covers_all_lowercase_letters() {
        for c in 'a'..='z' {
            let g = glyph(c).expect("glyph present");
            assert!(g.iter().any(|row| *row != 0), "glyph '{c}' is blank");
        }
    }

    #[test]
    fn unsupported_characters_have_no_glyph() {
        assert!(glyph('A').is_none());
        assert!(glyph('1').is_none());
        assert!(glyph('é').is_none());
        assert!(glyph(' ').is_none());
    }
}
