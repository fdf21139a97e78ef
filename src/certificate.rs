// src/certificate.rs

//! Fixed-layout PNG certificate.

use std::io::Cursor;

use font8x8::{BASIC_FONTS, LATIN_FONTS, UnicodeFonts};
use image::{ImageFormat, Rgb, RgbImage};

use crate::{error::AppError, models::student::Student};

pub const CERTIFICATE_FILENAME: &str = "certificate.png";
pub const WIDTH: u32 = 600;
pub const HEIGHT: u32 = 400;

const BACKGROUND: Rgb<u8> = Rgb([0xfd, 0xf6, 0xe3]);
const INK: Rgb<u8> = Rgb([0, 0, 0]);

const TITLE_SCALE: f32 = 2.0;
const BODY_SCALE: f32 = 1.5;

/// Renders the certificate and returns the encoded PNG bytes.
///
/// Text that runs past the right edge is clipped.
pub fn render_certificate(
    student: &Student,
    correct: usize,
    total: usize,
    date: &str,
) -> Result<Vec<u8>, AppError> {
    let mut img = RgbImage::from_pixel(WIDTH, HEIGHT, BACKGROUND);

    draw_text(&mut img, "Certificate of Achievement", 150, 80, TITLE_SCALE);

    let lines = [
        format!("This certifies that {}", student.name),
        "has successfully completed the quiz".to_string(),
        format!("Category: {} ({})", student.category, student.difficulty),
        format!("Score: {}/{}", correct, total),
        format!("Date: {}", date),
    ];
    for (i, line) in lines.iter().enumerate() {
        draw_text(&mut img, line, 100, 150 + 30 * i as u32, BODY_SCALE);
    }

    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| AppError::InternalServerError(format!("PNG encoding failed: {}", e)))?;
    Ok(bytes)
}

/// Draws `text` with its baseline at `baseline`, starting at `x`.
fn draw_text(img: &mut RgbImage, text: &str, x: u32, baseline: u32, scale: f32) {
    let cell = (8.0 * scale).round() as u32;
    let top = baseline.saturating_sub(cell);

    for (n, ch) in text.chars().enumerate() {
        let left = x + n as u32 * cell;
        if left >= img.width() {
            break;
        }
        let Some(glyph) = BASIC_FONTS.get(ch).or_else(|| LATIN_FONTS.get(ch)) else {
            continue;
        };

        for dy in 0..cell {
            let row = glyph[((dy as f32 / scale) as usize).min(7)];
            for dx in 0..cell {
                let bit = ((dx as f32 / scale) as usize).min(7);
                if row & (1 << bit) == 0 {
                    continue;
                }
                let (px, py) = (left + dx, top + dy);
                if px < img.width() && py < img.height() {
                    img.put_pixel(px, py, INK);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(name: &str) -> Student {
        Student {
            name: name.to_string(),
            roll: "12".to_string(),
            category: "History".to_string(),
            difficulty: "medium".to_string(),
            date: "2026-10-18 10:00:00".to_string(),
        }
    }

    fn has_ink(img: &RgbImage, xs: std::ops::Range<u32>, ys: std::ops::Range<u32>) -> bool {
        ys.flat_map(|y| xs.clone().map(move |x| (x, y)))
            .any(|(x, y)| *img.get_pixel(x, y) == INK)
    }

    #[test]
    fn renders_fixed_size_png() {
        let bytes = render_certificate(&student("Ada"), 9, 10, "2026-10-18").unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

        let img = image::load_from_memory(&bytes).unwrap().to_rgb8();
        assert_eq!(img.dimensions(), (WIDTH, HEIGHT));
        assert_eq!(*img.get_pixel(0, 0), BACKGROUND);
        // title band and first body line
        assert!(has_ink(&img, 150..560, 64..80));
        assert!(has_ink(&img, 100..400, 138..150));
        // nothing drawn above the title
        assert!(!has_ink(&img, 0..WIDTH, 0..60));
    }

    #[test]
    fn long_and_non_ascii_names_are_clipped_not_fatal() {
        let name = "Ñandú ".repeat(40) + "日本";
        let bytes = render_certificate(&student(&name), 0, 10, "2026-10-18").unwrap();
        let img = image::load_from_memory(&bytes).unwrap();
        assert_eq!(img.width(), WIDTH);
    }
}
