use crate::canvas::Canvas;
use crate::colour::{colours, Colour};
use crate::error::SignError;
use crate::font::Font;
use crate::layout::fit;
use crate::render::paint;
use crate::template::TemplateVars;
use base64::Engine;
use id_arena::{Arena, Id};
use std::io::Write;

/// A sign collects the canvas geometry, the colours, and the registered
/// fonts, then renders text into an image with a call to [Sign::render]
/// (or one of the encoding shorthands, [Sign::write] and [Sign::data_uri]).
///
/// Every render call lays the text out from scratch against this sign's
/// box; nothing is retained between calls
pub struct Sign {
    pub width: u32,
    pub height: u32,
    pub background: Colour,
    pub foreground: Colour,
    pub fonts: Arena<Font>,
}

impl Sign {
    /// Create a sign with the classic defaults: blue background, white text
    pub fn new(width: u32, height: u32) -> Sign {
        Sign {
            width,
            height,
            background: colours::BLUE,
            foreground: colours::WHITE,
            fonts: Arena::new(),
        }
    }

    /// Register a font with the sign, returning the id to render with
    pub fn add_font(&mut self, font: Font) -> Id<Font> {
        self.fonts.alloc(font)
    }

    /// Template values derived from this sign's geometry and colours, for
    /// [expanding](crate::template::expand) `{{VAR}}` tokens in sign text
    pub fn template_vars(&self) -> TemplateVars {
        TemplateVars {
            width: self.width,
            height: self.height,
            foreground: self.foreground,
            background: self.background,
        }
    }

    /// Fit `text` into the sign's box and paint it, returning the finished
    /// canvas
    pub fn render(&self, font: Id<Font>, text: &str) -> Canvas {
        let font = &self.fonts[font];
        let mut canvas = Canvas::new(self.width, self.height, self.background);
        let layout = fit(text, self.width, self.height, font);
        paint(
            &mut canvas,
            font,
            &layout.lines,
            layout.font_size,
            layout.max_line_width,
            self.foreground,
        );
        canvas
    }

    /// Render `text` and write the PNG-encoded image to `w`
    pub fn write<W: Write>(&self, font: Id<Font>, text: &str, w: &mut W) -> Result<(), SignError> {
        let png = self.render(font, text).encode_png()?;
        w.write_all(&png)?;
        Ok(())
    }

    /// Render `text` to a `data:image/png;base64,...` URI
    pub fn data_uri(&self, font: Id<Font>, text: &str) -> Result<String, SignError> {
        let png = self.render(font, text).encode_png()?;
        let payload = base64::engine::general_purpose::STANDARD.encode(png);
        Ok(format!("data:image/png;base64,{payload}"))
    }
}
