//! ASCII text to raster.
//!
//! Canvas geometry follows a fixed monospace grid: each character occupies
//! a `CHAR_WIDTH` x `CHAR_HEIGHT` cell, with a `MARGIN` on every side.

use ab_glyph::PxScale;
use font8x8::UnicodeFonts;
use image::{ImageFormat, Rgb, RgbImage};
use imageproc::drawing::draw_text_mut;
use std::io::Cursor;

use super::font::LoadedFont;
use crate::constants::render::{
    BACKGROUND, CHAR_HEIGHT, CHAR_WIDTH, FONT_SIZE, FOREGROUND, MARGIN,
};
use crate::types::Result;

/// Vertical offset of an 8px bitmap glyph inside a 14px cell
const BITMAP_TOP: u32 = 3;

/// Canvas size in pixels for the given art
pub fn canvas_size(lines: &[&str]) -> (u32, u32) {
    let widest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as u32;
    (
        widest * CHAR_WIDTH + 2 * MARGIN,
        lines.len() as u32 * CHAR_HEIGHT + 2 * MARGIN,
    )
}

pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

/// Draw `text` onto a fresh canvas
pub fn rasterize(text: &str, font: &LoadedFont) -> RgbImage {
    let lines = split_lines(text);
    let (width, height) = canvas_size(&lines);
    let mut canvas = RgbImage::from_pixel(width, height, Rgb(BACKGROUND));

    for (i, line) in lines.iter().enumerate() {
        let y = MARGIN + i as u32 * CHAR_HEIGHT;
        match font {
            LoadedFont::TrueType(face) => draw_text_mut(
                &mut canvas,
                Rgb(FOREGROUND),
                MARGIN as i32,
                y as i32,
                PxScale::from(FONT_SIZE),
                face,
                line,
            ),
            LoadedFont::Builtin => draw_bitmap_line(&mut canvas, MARGIN, y, line),
        }
    }

    canvas
}

/// Encode as PNG in memory
pub fn encode_png(image: &RgbImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

fn bitmap_glyph(ch: char) -> Option<[u8; 8]> {
    font8x8::BASIC_FONTS
        .get(ch)
        .or_else(|| font8x8::LATIN_FONTS.get(ch))
        .or_else(|| font8x8::BLOCK_FONTS.get(ch))
        .or_else(|| font8x8::BOX_FONTS.get(ch))
}

fn draw_bitmap_line(canvas: &mut RgbImage, x: u32, y: u32, line: &str) {
    let (width, height) = canvas.dimensions();

    for (col, ch) in line.chars().enumerate() {
        let Some(glyph) = bitmap_glyph(ch) else {
            continue;
        };
        let cell_x = x + col as u32 * CHAR_WIDTH;

        for (row, bits) in glyph.iter().enumerate() {
            let py = y + BITMAP_TOP + row as u32;
            for bit in 0..8u32 {
                // bit 0 is the leftmost pixel
                if bits & (1 << bit) == 0 {
                    continue;
                }
                let px = cell_x + bit;
                if px < width && py < height {
                    canvas.put_pixel(px, py, Rgb(FOREGROUND));
                }
            }
        }
    }
}
