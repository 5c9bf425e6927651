//! Text measurement, placement and rasterization on top of `rusttype`.
//!
//! A line of text is laid out with its origin at the top-left corner of the
//! ascender line, so the baseline sits at `origin.y + ascent`.

use image::{Rgba, RgbaImage};
use rusttype::{point, Font, PositionedGlyph, Scale};

/// Tight box around the inked pixels of a line, relative to the layout origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextBox {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl TextBox {
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

/// Scale for a font size given as the em square height in pixels.
///
/// rusttype measures `Scale` from highest ascender to lowest descender, which
/// makes glyphs smaller than the usual point-size convention.
pub fn em_scale(font: &Font<'_>, font_size: u32) -> Scale {
    let v = font.v_metrics_unscaled();
    let units_per_em = f32::from(font.units_per_em());
    Scale::uniform(font_size as f32 * (v.ascent - v.descent) / units_per_em)
}

/// Flattens `text` onto one line: whitespace control characters (`\n`, `\r`,
/// `\t`) become spaces, other control characters are dropped.
pub fn single_line(text: &str) -> String {
    text.chars()
        .filter_map(|c| match c {
            c if c.is_control() && c.is_whitespace() => Some(' '),
            c if c.is_control() => None,
            c => Some(c),
        })
        .collect()
}

pub fn layout_line<'font>(
    font: &Font<'font>,
    scale: Scale,
    text: &str,
    origin: (f32, f32),
) -> Vec<PositionedGlyph<'font>> {
    let ascent = font.v_metrics(scale).ascent;
    let line = single_line(text);
    font.layout(&line, scale, point(origin.0, origin.1 + ascent)).collect()
}

/// Measures `text` as drawn from origin (0, 0). Text without any inked glyph
/// yields an empty box.
pub fn measure(font: &Font<'_>, scale: Scale, text: &str) -> TextBox {
    layout_line(font, scale, text, (0.0, 0.0))
        .iter()
        .filter_map(|g| g.pixel_bounding_box())
        .fold(None, |acc: Option<TextBox>, bb| {
            Some(match acc {
                None => TextBox {
                    left: bb.min.x,
                    top: bb.min.y,
                    right: bb.max.x,
                    bottom: bb.max.y,
                },
                Some(b) => TextBox {
                    left: b.left.min(bb.min.x),
                    top: b.top.min(bb.min.y),
                    right: b.right.max(bb.max.x),
                    bottom: b.bottom.max(bb.max.y),
                },
            })
        })
        .unwrap_or_default()
}

/// Centers a box on a canvas, then lifts it by `vertical_offset` pixels.
/// `x` goes negative when the text is wider than the canvas.
pub fn centered_position(
    canvas: (u32, u32),
    text: &TextBox,
    vertical_offset: f32,
) -> (f32, f32) {
    let (width, height) = canvas;
    let x = (width as f32 - text.width() as f32) / 2.0;
    let y = (height as f32 - text.height() as f32) / 2.0 - vertical_offset;
    (x, y)
}

/// Blends glyph coverage in `color` onto `image`. Pixels falling outside the
/// canvas are dropped.
pub fn draw_glyphs(image: &mut RgbaImage, glyphs: &[PositionedGlyph<'_>], color: Rgba<u8>) {
    let (width, height) = image.dimensions();
    let color_alpha = f32::from(color[3]) / 255.0;

    for glyph in glyphs {
        let Some(bb) = glyph.pixel_bounding_box() else {
            continue;
        };

        glyph.draw(|gx, gy, coverage| {
            let px = gx as i32 + bb.min.x;
            let py = gy as i32 + bb.min.y;
            if px < 0 || py < 0 || px as u32 >= width || py as u32 >= height {
                return;
            }

            let alpha = coverage * color_alpha;
            if alpha <= 0.0 {
                return;
            }

            let dst = image.get_pixel_mut(px as u32, py as u32);
            *dst = blend(*dst, color, alpha);
        });
    }
}

fn blend(dst: Rgba<u8>, src: Rgba<u8>, alpha: f32) -> Rgba<u8> {
    let alpha = alpha.clamp(0.0, 1.0);
    let inv = 1.0 - alpha;
    let mix = |s: u8, d: u8| (f32::from(s) * alpha + f32::from(d) * inv).round() as u8;
    let out_alpha = (255.0 * alpha + f32::from(dst[3]) * inv).round() as u8;

    Rgba([mix(src[0], dst[0]), mix(src[1], dst[1]), mix(src[2], dst[2]), out_alpha])
}

#[cfg(test)]
mod tests {
    use super::*;

    const FONT_BYTES: &[u8] = include_bytes!("../../tests/fixtures/DejaVuSans.ttf");

    fn font() -> Font<'static> {
        Font::try_from_bytes(FONT_BYTES).unwrap()
    }

    #[test]
    fn test_em_scale_is_larger_than_size() {
        // ascent - descent exceeds the em square for DejaVu Sans
        let scale = em_scale(&font(), 100);
        assert!(scale.y > 100.0);
        assert_eq!(scale.x, scale.y);
    }

    #[test]
    fn test_measure_grows_with_text() {
        let font = font();
        let scale = em_scale(&font, 100);
        let short = measure(&font, scale, "Al");
        let long = measure(&font, scale, "Alice Smith");

        assert!(short.width() > 0);
        assert!(long.width() > short.width());
        assert!(long.height() > 0);
    }

    #[test]
    fn test_measure_blank_text_is_empty() {
        let font = font();
        let scale = em_scale(&font, 100);
        assert_eq!(measure(&font, scale, ""), TextBox::default());
        assert_eq!(measure(&font, scale, "   ").width(), 0);
    }

    #[test]
    fn test_single_line() {
        assert_eq!(single_line("Ann\nLee"), "Ann Lee");
        assert_eq!(single_line("Ann\r\nLee\t"), "Ann  Lee ");
        assert_eq!(single_line("Ann\u{7}\u{1b}Lee"), "AnnLee");
        assert_eq!(single_line("Zoë Ødegaard"), "Zoë Ødegaard");
    }

    #[test]
    fn test_line_breaks_measure_like_spaces() {
        let font = font();
        let scale = em_scale(&font, 100);
        assert_eq!(
            measure(&font, scale, "Alice\nSmith"),
            measure(&font, scale, "Alice Smith")
        );
        assert_eq!(
            measure(&font, scale, "Alice\u{0}Smith"),
            measure(&font, scale, "AliceSmith")
        );
    }

    #[test]
    fn test_centered_position_arithmetic() {
        let text = TextBox {
            left: 2,
            top: 10,
            right: 402,
            bottom: 110,
        };
        assert_eq!(centered_position((1000, 400), &text, 30.0), (300.0, 120.0));
        assert_eq!(centered_position((1000, 400), &text, 0.0), (300.0, 150.0));
    }

    #[test]
    fn test_centered_position_overflows_left() {
        let text = TextBox {
            left: 0,
            top: 0,
            right: 1200,
            bottom: 50,
        };
        let (x, _) = centered_position((1000, 400), &text, 30.0);
        assert_eq!(x, -100.0);
    }

    #[test]
    fn test_fitting_text_stays_inside() {
        let font = font();
        let scale = em_scale(&font, 100);
        for name in ["Alice Smith", "Bo", "Wolfgang"] {
            let text = measure(&font, scale, name);
            assert!(text.width() <= 1000);
            let (x, _) = centered_position((1000, 400), &text, 30.0);
            assert!(x >= 0.0);
            assert!(x + text.width() as f32 <= 1000.0);
        }
    }

    #[test]
    fn test_draw_glyphs_inks_and_clips() {
        let font = font();
        let scale = em_scale(&font, 60);
        let mut image = RgbaImage::from_pixel(200, 100, Rgba([255, 255, 255, 255]));

        // starts off-canvas on the left, must not panic
        let glyphs = layout_line(&font, scale, "Clipped text", (-50.0, 10.0));
        draw_glyphs(&mut image, &glyphs, Rgba([0, 0, 0, 255]));

        assert!(image.pixels().any(|p| p[0] < 128));
    }

    #[test]
    fn test_blend() {
        let white = Rgba([255, 255, 255, 255]);
        let black = Rgba([0, 0, 0, 255]);
        assert_eq!(blend(white, black, 1.0), black);
        assert_eq!(blend(white, black, 0.0), white);
        assert_eq!(blend(Rgba([0, 0, 0, 0]), white, 1.0), white);
    }
}
