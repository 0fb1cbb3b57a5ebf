//! Placeholder pictures for problems whose folder is empty.
//!
//! Each placeholder is a light grey canvas with a `P{problem}-{n}` caption
//! drawn from a small built-in bitmap font.

use image::{Rgb, RgbImage};
use sequence_core::model::ProblemIndex;

pub const WIDTH: u32 = 640;
pub const HEIGHT: u32 = 400;

const BACKGROUND: Rgb<u8> = Rgb([240, 240, 240]);
const INK: Rgb<u8> = Rgb([0, 0, 0]);

const GLYPH_COLS: u32 = 5;
const GLYPH_ROWS: u32 = 7;
const SCALE: u32 = 6;
const SPACING: u32 = 1;

/// Caption drawn on the `n`-th (1-based) placeholder of `problem`.
#[must_use]
pub fn caption(problem: ProblemIndex, n: usize) -> String {
    format!("P{}-{n}", problem.number())
}

/// Render the `n`-th placeholder of `problem`.
#[must_use]
pub fn render(problem: ProblemIndex, n: usize) -> RgbImage {
    let mut img = RgbImage::from_pixel(WIDTH, HEIGHT, BACKGROUND);
    draw_text_centered(&mut img, &caption(problem, n));
    img
}

fn text_width(text: &str) -> u32 {
    let chars = u32::try_from(text.chars().count()).unwrap_or(u32::MAX);
    if chars == 0 {
        return 0;
    }
    let advance = (GLYPH_COLS + SPACING) * SCALE;
    chars.saturating_mul(advance) - SPACING * SCALE
}

fn draw_text_centered(img: &mut RgbImage, text: &str) {
    let width = text_width(text).min(img.width());
    let height = GLYPH_ROWS * SCALE;
    let origin_x = (img.width() - width) / 2;
    let origin_y = img.height().saturating_sub(height) / 2;

    let advance = (GLYPH_COLS + SPACING) * SCALE;
    for (offset, ch) in (0_u32..).zip(text.chars()) {
        let Some(rows) = glyph(ch) else {
            continue;
        };
        let glyph_x = origin_x + offset * advance;
        for (row, bits) in (0_u32..).zip(rows) {
            for col in 0..GLYPH_COLS {
                if bits & (1 << (GLYPH_COLS - 1 - col)) == 0 {
                    continue;
                }
                fill_cell(img, glyph_x + col * SCALE, origin_y + row * SCALE);
            }
        }
    }
}

fn fill_cell(img: &mut RgbImage, x: u32, y: u32) {
    for dy in 0..SCALE {
        for dx in 0..SCALE {
            let (px, py) = (x + dx, y + dy);
            if px < img.width() && py < img.height() {
                img.put_pixel(px, py, INK);
            }
        }
    }
}

// 5x7 glyphs, one byte per row, high bit of the low five is the leftmost column.
fn glyph(ch: char) -> Option<[u8; 7]> {
    let rows = match ch {
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        '-' => [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000],
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        _ => return None,
    };
    Some(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caption_uses_one_based_numbers() {
        assert_eq!(caption(ProblemIndex::FIRST, 2), "P1-2");
    }

    #[test]
    fn render_draws_ink_on_grey_canvas() {
        let img = render(ProblemIndex::FIRST, 1);
        assert_eq!(img.dimensions(), (WIDTH, HEIGHT));
        assert_eq!(*img.get_pixel(0, 0), BACKGROUND);
        let inked = img.pixels().filter(|px| **px == INK).count();
        assert!(inked > 0, "caption should leave ink on the canvas");
    }

    #[test]
    fn captions_differ_between_placeholders() {
        assert_ne!(render(ProblemIndex::FIRST, 1), render(ProblemIndex::FIRST, 2));
    }

    #[test]
    fn every_caption_character_has_a_glyph() {
        for ch in "P0123456789-".chars() {
            assert!(glyph(ch).is_some(), "missing glyph for {ch}");
        }
    }
}
