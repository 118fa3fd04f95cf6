//! Image card export
//!
//! Renders the current quote (content + author + static watermark) into a
//! PNG card for download or manual sharing.

use crate::config::export::{CARD_MIN_HEIGHT, CARD_WIDTH, WATERMARK};
use crate::data::types::Quote;
use crate::error::{QuoteError, Result};

use ab_glyph::{point, Font, FontVec, Glyph, GlyphId, PxScale, ScaleFont};
use image::{Rgba, RgbaImage};
use std::path::{Path, PathBuf};

/// Card margin in pixels
const MARGIN: f32 = 80.0;

/// Font sizes for the three text blocks
const CONTENT_SCALE: f32 = 44.0;
const AUTHOR_SCALE: f32 = 30.0;
const WATERMARK_SCALE: f32 = 26.0;

const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);
const CONTENT_COLOR: [u8; 3] = [17, 17, 17];
const AUTHOR_COLOR: [u8; 3] = [90, 90, 90];
const WATERMARK_COLOR: [u8; 3] = [160, 160, 160];

/// Common system font locations, checked in order
const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Find a usable system font file
pub fn find_system_font() -> Option<PathBuf> {
    FONT_CANDIDATES
        .iter()
        .map(PathBuf::from)
        .find(|p| p.exists())
}

fn load_font() -> Result<FontVec> {
    let path = find_system_font().ok_or_else(|| {
        QuoteError::Export("No usable system font found for the image card".to_string())
    })?;
    let data = std::fs::read(&path)?;
    FontVec::try_from_vec(data)
        .map_err(|_| QuoteError::Export(format!("Could not parse font {:?}", path)))
}

/// Render the quote card as an RGBA image
///
/// Rejects the placeholder sentinel. Width is fixed; height grows with the
/// wrapped quote text.
pub fn render_card(quote: &Quote) -> Result<RgbaImage> {
    if quote.is_placeholder() || quote.content.is_empty() {
        return Err(QuoteError::NoQuote);
    }

    let font = load_font()?;
    let content_scale = PxScale::from(CONTENT_SCALE);
    let scaled = font.as_scaled(content_scale);

    // Estimate wrap columns from a representative advance width
    let avg_advance = scaled.h_advance(scaled.glyph_id('n')).max(1.0);
    let columns = (((CARD_WIDTH as f32 - 2.0 * MARGIN) / avg_advance) as usize).max(10);

    let text = format!("\u{201c}{}\u{201d}", quote.content);
    let lines = textwrap::wrap(&text, columns);

    let line_height = scaled.height() * 1.35;
    let body_height = lines.len() as f32 * line_height;
    let height = (MARGIN + body_height + 40.0 + AUTHOR_SCALE * 1.4 + 50.0 + WATERMARK_SCALE * 1.4
        + MARGIN) as u32;
    let height = height.max(CARD_MIN_HEIGHT);

    let mut img = RgbaImage::from_pixel(CARD_WIDTH, height, BACKGROUND);

    // Quote text, centered line by line
    let mut baseline = MARGIN + scaled.ascent();
    for line in &lines {
        let width = text_width(&font, content_scale, line);
        let x = (CARD_WIDTH as f32 - width) / 2.0;
        draw_line(&mut img, &font, content_scale, line, x, baseline, CONTENT_COLOR);
        baseline += line_height;
    }

    // Attribution
    let author_text = format!("— {}", quote.author);
    let author_scale = PxScale::from(AUTHOR_SCALE);
    baseline += 40.0;
    let width = text_width(&font, author_scale, &author_text);
    draw_line(
        &mut img,
        &font,
        author_scale,
        &author_text,
        (CARD_WIDTH as f32 - width) / 2.0,
        baseline,
        AUTHOR_COLOR,
    );

    // Watermark sits at the bottom
    let watermark_scale = PxScale::from(WATERMARK_SCALE);
    let width = text_width(&font, watermark_scale, WATERMARK);
    draw_line(
        &mut img,
        &font,
        watermark_scale,
        WATERMARK,
        (CARD_WIDTH as f32 - width) / 2.0,
        height as f32 - MARGIN / 2.0,
        WATERMARK_COLOR,
    );

    Ok(img)
}

/// Render the quote card and save it as a PNG
pub fn save_card(quote: &Quote, path: &Path) -> Result<()> {
    let img = render_card(quote)?;
    img.save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| QuoteError::Export(format!("Could not write image {:?}: {}", path, e)))
}

/// Save the card and open it with the system image handler
///
/// The open step is the "opens in a new tab for manual handling" fallback
/// of a native share sheet.
pub fn save_and_open_card(quote: &Quote, path: &Path) -> Result<()> {
    save_card(quote, path)?;
    open::that(path).map_err(|e| QuoteError::Export(format!("Could not open image: {}", e)))?;
    Ok(())
}

/// Measure the rendered width of a line of text
fn text_width(font: &FontVec, scale: PxScale, text: &str) -> f32 {
    let scaled = font.as_scaled(scale);
    let mut width = 0.0;
    let mut prev: Option<GlyphId> = None;
    for ch in text.chars() {
        let id = scaled.glyph_id(ch);
        if let Some(p) = prev {
            width += scaled.kern(p, id);
        }
        width += scaled.h_advance(id);
        prev = Some(id);
    }
    width
}

/// Draw one line of text with its baseline at `baseline`
fn draw_line(
    img: &mut RgbaImage,
    font: &FontVec,
    scale: PxScale,
    text: &str,
    x: f32,
    baseline: f32,
    color: [u8; 3],
) {
    let scaled = font.as_scaled(scale);
    let mut caret = x;
    let mut prev: Option<GlyphId> = None;

    for ch in text.chars() {
        let id = scaled.glyph_id(ch);
        if let Some(p) = prev {
            caret += scaled.kern(p, id);
        }
        let glyph: Glyph = id.with_scale_and_position(scale, point(caret, baseline));
        if let Some(outlined) = font.outline_glyph(glyph) {
            let bounds = outlined.px_bounds();
            outlined.draw(|gx, gy, coverage| {
                let px = bounds.min.x as i32 + gx as i32;
                let py = bounds.min.y as i32 + gy as i32;
                if px >= 0 && py >= 0 && (px as u32) < img.width() && (py as u32) < img.height() {
                    blend(img.get_pixel_mut(px as u32, py as u32), color, coverage);
                }
            });
        }
        caret += scaled.h_advance(id);
        prev = Some(id);
    }
}

/// Alpha-blend `color` over the pixel at the given coverage
fn blend(pixel: &mut Rgba<u8>, color: [u8; 3], coverage: f32) {
    let c = coverage.clamp(0.0, 1.0);
    for i in 0..3 {
        let bg = pixel.0[i] as f32;
        let fg = color[i] as f32;
        pixel.0[i] = (bg + (fg - bg) * c) as u8;
    }
}
