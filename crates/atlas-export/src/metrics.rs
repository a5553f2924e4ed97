//! Helvetica advance widths and the single-byte text the builtin fonts can
//! draw.
//!
//! Widths are in 1/1000 em, taken from the standard Helvetica and
//! Helvetica-Bold AFM files for printable ASCII.

use crate::styles::FontFace;

/// Printable ASCII (0x20..=0x7E), regular face.
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // '0'..'9'
    278, 278, 584, 584, 584, 556, 1015, // ':'..'@'
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, // 'A'..'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'N'..'Z'
    278, 278, 278, 469, 556, 333, // '['..'`'
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, // 'a'..'m'
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // 'n'..'z'
    334, 260, 334, 584, // '{'..'~'
];

/// Printable ASCII (0x20..=0x7E), bold face.
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // '0'..'9'
    333, 333, 584, 584, 584, 611, 975, // ':'..'@'
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, // 'A'..'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'N'..'Z'
    333, 278, 333, 584, 556, 333, // '['..'`'
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, // 'a'..'m'
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, // 'n'..'z'
    389, 280, 389, 584, // '{'..'~'
];

/// Advance width of `ch` in 1/1000 em. Characters outside printable ASCII
/// are measured as `?`, which is how [`encode_builtin`] draws them.
pub fn char_width(ch: char, face: FontFace) -> u16 {
    let table = match face {
        FontFace::Regular => &HELVETICA,
        FontFace::Bold => &HELVETICA_BOLD,
    };
    let index = match ch {
        ' '..='~' => ch as usize - 0x20,
        _ => '?' as usize - 0x20,
    };
    table[index]
}

/// Width in points of already-encoded text at `size` points.
pub fn text_width(text: &str, face: FontFace, size: f32) -> f32 {
    let units: u32 = text.chars().map(|ch| u32::from(char_width(ch, face))).sum();
    units as f32 * size / 1000.0
}

/// Fold text to printable ASCII for the builtin Type1 fonts.
pub fn encode_builtin(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        push_encoded(&mut out, ch);
    }
    out
}

/// Append the builtin-font form of `ch` to `out`.
pub fn push_encoded(out: &mut String, ch: char) {
    match ch {
        ' '..='~' => out.push(ch),
        '\t' | '\u{a0}' | '\u{2002}' | '\u{2003}' | '\u{2009}' => out.push(' '),
        '\u{2192}' => out.push_str("->"),
        '\u{2190}' => out.push_str("<-"),
        '\u{2022}' | '\u{00b7}' | '\u{2010}' | '\u{2011}' | '\u{2012}' | '\u{2013}'
        | '\u{2014}' | '\u{2212}' => out.push('-'),
        '\u{2018}' | '\u{2019}' | '\u{201a}' | '\u{2032}' => out.push('\''),
        '\u{201c}' | '\u{201d}' | '\u{201e}' | '\u{2033}' => out.push('"'),
        '\u{2026}' => out.push_str("..."),
        '\u{00d7}' => out.push('x'),
        '\u{2264}' => out.push_str("<="),
        '\u{2265}' => out.push_str(">="),
        '\u{20ac}' => out.push_str("EUR"),
        '\u{00a3}' => out.push_str("GBP"),
        _ => out.push('?'),
    }
}
