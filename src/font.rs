use crate::canvas::Canvas;
use crate::colour::Colour;
use crate::error::SignError;
use crate::layout::Measure;
use crate::render::TextPainter;
use crate::units::Px;
use ab_glyph::{point, Font as _, FontArc, FontVec, Glyph, GlyphId, PxScale, PxScaleFont, ScaleFont as _};

/// A parsed font face. Fonts can be TTF or OTF fonts and are kept in memory
/// for the lifetime of the [Font]; the face doubles as the measurement and
/// drawing backend for layout and rendering
pub struct Font {
    face: FontArc,
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error
    /// if the font could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, SignError> {
        let face = FontArc::try_from_vec(bytes)?;
        Ok(Font { face })
    }

    /// Find and load an installed font, preferring the given families in
    /// order and falling back to any sans-serif face. Bold weight is
    /// requested to match the heavy lettering of typical signs
    pub fn discover(families: &[&str]) -> Result<Font, SignError> {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();

        let mut wanted: Vec<fontdb::Family> =
            families.iter().map(|&name| fontdb::Family::Name(name)).collect();
        wanted.push(fontdb::Family::SansSerif);

        let unavailable = || SignError::FontUnavailable {
            families: families.join(", "),
        };

        let query = fontdb::Query {
            families: &wanted,
            weight: fontdb::Weight::BOLD,
            ..fontdb::Query::default()
        };
        let id = db.query(&query).ok_or_else(unavailable)?;
        let (source, index) = db.face_source(id).ok_or_else(unavailable)?;

        log::debug!("discovered font face {id:?} (index {index})");

        let bytes = match source {
            fontdb::Source::Binary(data) => data.as_ref().as_ref().to_vec(),
            fontdb::Source::File(path) => std::fs::read(path)?,
            fontdb::Source::SharedFile(_, data) => data.as_ref().as_ref().to_vec(),
        };

        let face = FontVec::try_from_vec_and_index(bytes, index)?;
        Ok(Font {
            face: FontArc::from(face),
        })
    }

    fn scaled(&self, font_size: u32) -> PxScaleFont<&FontArc> {
        self.face.as_scaled(PxScale::from(font_size as f32))
    }

    /// Advance width of `text` on a single line, kerning applied
    pub fn line_width(&self, text: &str, font_size: u32) -> Px {
        let scaled = self.scaled(font_size);
        let mut width = 0.0;
        let mut prev: Option<GlyphId> = None;
        for ch in text.chars() {
            let id = scaled.glyph_id(ch);
            if let Some(prev) = prev {
                width += scaled.kern(prev, id);
            }
            width += scaled.h_advance(id);
            prev = Some(id);
        }
        Px(width)
    }

    /// Distance from the top of the line box down to the lowest inked pixel
    /// of `text`, or zero when the text draws nothing
    pub fn ink_descent(&self, text: &str, font_size: u32) -> Px {
        let scale = PxScale::from(font_size as f32);
        let scaled = self.scaled(font_size);
        let ascent = scaled.ascent();

        let mut bottom = 0.0f32;
        for ch in text.chars() {
            let glyph = Glyph {
                id: scaled.glyph_id(ch),
                scale,
                position: point(0.0, 0.0),
            };
            if let Some(outlined) = scaled.outline_glyph(glyph) {
                bottom = bottom.max(ascent + outlined.px_bounds().max.y);
            }
        }
        Px(bottom)
    }

    /// Rasterise one line of text into the canvas with the top of its line
    /// box at (x, y); glyph baselines sit one ascent below y
    pub fn draw_line(
        &self,
        canvas: &mut Canvas,
        text: &str,
        font_size: u32,
        x: Px,
        y: Px,
        colour: Colour,
    ) {
        let scale = PxScale::from(font_size as f32);
        let scaled = self.scaled(font_size);
        let baseline = y.0 + scaled.ascent();

        let mut caret = x.0;
        let mut prev: Option<GlyphId> = None;
        for ch in text.chars() {
            let id = scaled.glyph_id(ch);
            if let Some(prev) = prev {
                caret += scaled.kern(prev, id);
            }
            prev = Some(id);

            let glyph = Glyph {
                id,
                scale,
                position: point(caret, baseline),
            };
            if let Some(outlined) = scaled.outline_glyph(glyph) {
                let bounds = outlined.px_bounds();
                let (left, top) = (bounds.min.x as i32, bounds.min.y as i32);
                outlined.draw(|gx, gy, coverage| {
                    canvas.blend(left + gx as i32, top + gy as i32, colour, coverage);
                });
            }

            caret += scaled.h_advance(id);
        }
    }
}

impl Measure for Font {
    fn width(&self, text: &str, font_size: u32) -> Px {
        self.line_width(text, font_size)
    }

    fn descent(&self, text: &str, font_size: u32) -> Px {
        self.ink_descent(text, font_size)
    }
}

impl TextPainter for Font {
    fn draw(&self, canvas: &mut Canvas, text: &str, font_size: u32, x: Px, y: Px, colour: Colour) {
        self.draw_line(canvas, text, font_size, x, y, colour);
    }
}
